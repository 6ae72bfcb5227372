use axum::{
    extract::{Path, Query, State},
    routing::{delete, get},
    Json, Router,
};
use tracing::{info, instrument};

use crate::{
    dates::parse_date,
    dto::Message,
    error::{AppError, AppResult},
    nutrition::bmi,
    state::AppState,
    users::repo_types::User,
    weight::{
        dto::{HistoryLimit, WeightRecordCreate, WeightRecordResponse},
        repo_types::{NewWeightRecord, WeightRecord},
    },
};

pub fn weight_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/users/:id/weight-records",
            get(list_weight_records).post(record_weight),
        )
        .route(
            "/users/:id/weight-history",
            get(weight_history).post(record_weight),
        )
        .route("/weight-records/:id", delete(delete_weight_record))
}

/// Stores a dated weight sample with its BMI and makes it the user's current
/// weight. Served from both `weight-records` and `weight-history`.
#[instrument(skip(state, payload))]
pub async fn record_weight(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
    Json(payload): Json<WeightRecordCreate>,
) -> AppResult<Json<WeightRecordResponse>> {
    let date = parse_date(&payload.date)?;

    let mut tx = state.db.begin().await?;
    let user = User::find_by_id(&mut *tx, user_id)
        .await?
        .ok_or(AppError::NotFound("User not found"))?;

    let record = WeightRecord::insert(
        &mut *tx,
        &NewWeightRecord {
            user_id,
            date,
            weight: payload.weight,
            bmi: bmi(payload.weight, user.height),
            notes: payload.notes.as_deref(),
        },
    )
    .await?;
    User::set_weight(&mut *tx, user_id, payload.weight).await?;
    tx.commit().await?;

    info!(user_id, record_id = record.id, weight = record.weight, "weight recorded");
    Ok(Json(record.into()))
}

#[instrument(skip(state))]
pub async fn list_weight_records(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
    Query(q): Query<HistoryLimit>,
) -> AppResult<Json<Vec<WeightRecordResponse>>> {
    if User::find_by_id(&state.db, user_id).await?.is_none() {
        return Err(AppError::NotFound("User not found"));
    }
    let rows = WeightRecord::list_by_user(&state.db, user_id, Some(q.limit)).await?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

/// Full history; an unknown user simply has none.
#[instrument(skip(state))]
pub async fn weight_history(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> AppResult<Json<Vec<WeightRecordResponse>>> {
    let rows = WeightRecord::list_by_user(&state.db, user_id, None).await?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

#[instrument(skip(state))]
pub async fn delete_weight_record(
    State(state): State<AppState>,
    Path(record_id): Path<i32>,
) -> AppResult<Json<Message>> {
    let mut tx = state.db.begin().await?;
    if !WeightRecord::delete(&mut *tx, record_id).await? {
        return Err(AppError::NotFound("Record not found"));
    }
    tx.commit().await?;

    info!(record_id, "weight record deleted");
    Ok(Json(Message::new("Weight record deleted successfully")))
}
