use sqlx::PgExecutor;
use time::Date;

use crate::recipes::repo_types::{Recipe, RecipeFields};

const RECIPE_COLUMNS: &str = "id, name, callories, photo, date_create, components, \
                              steps, squirrels, fats, carbohydrates";

impl Recipe {
    pub async fn create(
        db: impl PgExecutor<'_>,
        user_id: i32,
        date_create: Date,
        f: &RecipeFields<'_>,
    ) -> sqlx::Result<i32> {
        sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO reciep (name, callories, photo, components, steps,
                                squirrels, fats, carbohydrates, user_id, date_create)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING id
            "#,
        )
        .bind(f.name)
        .bind(f.callories)
        .bind(f.photo)
        .bind(f.components)
        .bind(f.steps)
        .bind(f.squirrels)
        .bind(f.fats)
        .bind(f.carbohydrates)
        .bind(user_id)
        .bind(date_create)
        .fetch_one(db)
        .await
    }

    /// Overwrites every editable field. `false` when no such recipe.
    pub async fn replace(
        db: impl PgExecutor<'_>,
        id: i32,
        f: &RecipeFields<'_>,
    ) -> sqlx::Result<bool> {
        let res = sqlx::query(
            r#"
            UPDATE reciep
               SET name = $2, callories = $3, photo = $4, components = $5, steps = $6,
                   squirrels = $7, fats = $8, carbohydrates = $9
             WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(f.name)
        .bind(f.callories)
        .bind(f.photo)
        .bind(f.components)
        .bind(f.steps)
        .bind(f.squirrels)
        .bind(f.fats)
        .bind(f.carbohydrates)
        .execute(db)
        .await?;
        Ok(res.rows_affected() > 0)
    }

    pub async fn delete(db: impl PgExecutor<'_>, id: i32) -> sqlx::Result<bool> {
        let res = sqlx::query("DELETE FROM reciep WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;
        Ok(res.rows_affected() > 0)
    }

    /// Newest first, optionally restricted to one owner.
    pub async fn list(db: impl PgExecutor<'_>, user_id: Option<i32>) -> sqlx::Result<Vec<Recipe>> {
        sqlx::query_as::<_, Recipe>(&format!(
            r#"
            SELECT {RECIPE_COLUMNS}
              FROM reciep
             WHERE $1::INTEGER IS NULL OR user_id = $1
             ORDER BY date_create DESC
            "#
        ))
        .bind(user_id)
        .fetch_all(db)
        .await
    }
}
