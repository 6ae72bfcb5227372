use sqlx::PgExecutor;

use crate::weight::repo_types::{NewWeightRecord, WeightRecord};

impl WeightRecord {
    pub async fn insert(
        db: impl PgExecutor<'_>,
        new: &NewWeightRecord<'_>,
    ) -> sqlx::Result<WeightRecord> {
        sqlx::query_as::<_, WeightRecord>(
            r#"
            INSERT INTO user_weight_history (user_id, date, weight, bmi, notes)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, date, weight, bmi, notes
            "#,
        )
        .bind(new.user_id)
        .bind(new.date)
        .bind(new.weight)
        .bind(new.bmi)
        .bind(new.notes)
        .fetch_one(db)
        .await
    }

    /// Newest first. `limit = None` returns the whole history.
    pub async fn list_by_user(
        db: impl PgExecutor<'_>,
        user_id: i32,
        limit: Option<i64>,
    ) -> sqlx::Result<Vec<WeightRecord>> {
        sqlx::query_as::<_, WeightRecord>(
            r#"
            SELECT id, date, weight, bmi, notes
              FROM user_weight_history
             WHERE user_id = $1
             ORDER BY date DESC
             LIMIT $2
            "#,
        )
        .bind(user_id)
        .bind(limit)
        .fetch_all(db)
        .await
    }

    pub async fn delete(db: impl PgExecutor<'_>, id: i32) -> sqlx::Result<bool> {
        let res = sqlx::query("DELETE FROM user_weight_history WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;
        Ok(res.rows_affected() > 0)
    }
}
