use sqlx::PgExecutor;

use crate::foods::repo_types::Food;
use crate::nutrition::Macros;

const FOOD_COLUMNS: &str = "id, name_food, callories, squirrels, fats, carbohydrates";

impl Food {
    pub async fn find_by_id(db: impl PgExecutor<'_>, id: i32) -> sqlx::Result<Option<Food>> {
        sqlx::query_as::<_, Food>(&format!("SELECT {FOOD_COLUMNS} FROM food WHERE id = $1"))
            .bind(id)
            .fetch_optional(db)
            .await
    }

    pub async fn name_exists(db: impl PgExecutor<'_>, name: &str) -> sqlx::Result<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM food WHERE name_food = $1)")
            .bind(name)
            .fetch_one(db)
            .await
    }

    /// New foods are never linked to a recipe.
    pub async fn create(db: impl PgExecutor<'_>, name: &str, per_100: Macros) -> sqlx::Result<Food> {
        sqlx::query_as::<_, Food>(&format!(
            r#"
            INSERT INTO food (name_food, callories, squirrels, fats, carbohydrates, reciep_id)
            VALUES ($1, $2, $3, $4, $5, NULL)
            RETURNING {FOOD_COLUMNS}
            "#
        ))
        .bind(name)
        .bind(per_100.callories)
        .bind(per_100.squirrels)
        .bind(per_100.fats)
        .bind(per_100.carbohydrates)
        .fetch_one(db)
        .await
    }

    /// Case-insensitive substring match on the name.
    pub async fn search(db: impl PgExecutor<'_>, query: &str) -> sqlx::Result<Vec<Food>> {
        sqlx::query_as::<_, Food>(&format!(
            "SELECT {FOOD_COLUMNS} FROM food WHERE name_food ILIKE '%' || $1 || '%' ORDER BY id"
        ))
        .bind(query)
        .fetch_all(db)
        .await
    }
}
