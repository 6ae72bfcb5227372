use sqlx::PgExecutor;

use crate::users::repo_types::{NewUser, User, UserPatch};

const USER_COLUMNS: &str =
    "id, name, surname, height, weight, gender, birthday, password, login";

impl User {
    pub async fn find_by_id(db: impl PgExecutor<'_>, id: i32) -> sqlx::Result<Option<User>> {
        sqlx::query_as::<_, User>(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1"))
            .bind(id)
            .fetch_optional(db)
            .await
    }

    /// Logins are not constrained unique; the oldest account wins.
    pub async fn find_by_login(db: impl PgExecutor<'_>, login: &str) -> sqlx::Result<Option<User>> {
        sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE login = $1 ORDER BY id LIMIT 1"
        ))
        .bind(login)
        .fetch_optional(db)
        .await
    }

    pub async fn login_exists(db: impl PgExecutor<'_>, login: &str) -> sqlx::Result<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM users WHERE login = $1)")
            .bind(login)
            .fetch_one(db)
            .await
    }

    pub async fn create(db: impl PgExecutor<'_>, new: &NewUser<'_>) -> sqlx::Result<i32> {
        sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO users (name, surname, height, weight, gender, birthday, password, login, photo)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id
            "#,
        )
        .bind(new.name)
        .bind(new.surname)
        .bind(new.height)
        .bind(new.weight)
        .bind(new.gender)
        .bind(new.birthday)
        .bind(new.password_hash)
        .bind(new.login)
        .bind(new.photo)
        .fetch_one(db)
        .await
    }

    /// Applies the present fields of `patch`. `None` when no such user.
    pub async fn update(
        db: impl PgExecutor<'_>,
        id: i32,
        patch: &UserPatch,
    ) -> sqlx::Result<Option<User>> {
        sqlx::query_as::<_, User>(&format!(
            r#"
            UPDATE users
               SET login    = COALESCE($2, login),
                   name     = COALESCE($3, name),
                   surname  = COALESCE($4, surname),
                   height   = COALESCE($5, height),
                   birthday = COALESCE($6, birthday),
                   password = COALESCE($7, password)
             WHERE id = $1
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(patch.login.as_deref())
        .bind(patch.name.as_deref())
        .bind(patch.surname.as_deref())
        .bind(patch.height)
        .bind(patch.birthday)
        .bind(patch.password_hash.as_deref())
        .fetch_optional(db)
        .await
    }

    pub async fn set_weight(db: impl PgExecutor<'_>, id: i32, weight: f64) -> sqlx::Result<()> {
        sqlx::query("UPDATE users SET weight = $2 WHERE id = $1")
            .bind(id)
            .bind(weight)
            .execute(db)
            .await?;
        Ok(())
    }

    /// Weight history goes with the user (FK cascade); eating and recipe rows stay.
    pub async fn delete(db: impl PgExecutor<'_>, id: i32) -> sqlx::Result<bool> {
        let res = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;
        Ok(res.rows_affected() > 0)
    }
}
