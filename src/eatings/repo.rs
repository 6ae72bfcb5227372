use sqlx::PgExecutor;
use time::PrimitiveDateTime;

use crate::eatings::repo_types::{Eating, NewEating};

const EATING_COLUMNS: &str =
    "id, user_id, food_id, callories, squirrels, fats, carbohydrates, date, meal_type, quantity";

impl Eating {
    pub async fn insert(db: impl PgExecutor<'_>, new: &NewEating<'_>) -> sqlx::Result<Eating> {
        sqlx::query_as::<_, Eating>(&format!(
            r#"
            INSERT INTO eating (user_id, food_id, callories, squirrels, fats, carbohydrates,
                                date, meal_type, quantity)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING {EATING_COLUMNS}
            "#
        ))
        .bind(new.user_id)
        .bind(new.food_id)
        .bind(new.macros.callories)
        .bind(new.macros.squirrels)
        .bind(new.macros.fats)
        .bind(new.macros.carbohydrates)
        .bind(new.date)
        .bind(new.meal_type)
        .bind(new.quantity)
        .fetch_one(db)
        .await
    }

    /// Records of one user with `from <= date <= to`.
    pub async fn list_between(
        db: impl PgExecutor<'_>,
        user_id: i32,
        from: PrimitiveDateTime,
        to: PrimitiveDateTime,
    ) -> sqlx::Result<Vec<Eating>> {
        sqlx::query_as::<_, Eating>(&format!(
            r#"
            SELECT {EATING_COLUMNS}
              FROM eating
             WHERE user_id = $1 AND date >= $2 AND date <= $3
             ORDER BY date, id
            "#
        ))
        .bind(user_id)
        .bind(from)
        .bind(to)
        .fetch_all(db)
        .await
    }

    pub async fn delete(db: impl PgExecutor<'_>, id: i32) -> sqlx::Result<bool> {
        let res = sqlx::query("DELETE FROM eating WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;
        Ok(res.rows_affected() > 0)
    }
}
