use std::collections::HashMap;

use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post},
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    dates::{day_bounds, parse_date},
    dto::Message,
    eatings::{
        dto::{
            DayQuery, EatingCreated, EatingItem, EatingRecordCreate, UNKNOWN_FOOD_NAME, WATER_NAME,
        },
        repo_types::{Eating, NewEating, WATER_FOOD_ID},
    },
    error::{AppError, AppResult},
    foods::repo_types::Food,
    nutrition::Macros,
    state::AppState,
    users::repo_types::User,
};

pub fn eating_routes() -> Router<AppState> {
    Router::new()
        .route("/eating-records", post(create_eating_record))
        .route("/eating-records/:id", delete(delete_eating_record))
        .route("/users/:id/eating-records", get(list_eating_records))
}

#[instrument(skip(state, payload))]
pub async fn create_eating_record(
    State(state): State<AppState>,
    Json(payload): Json<EatingRecordCreate>,
) -> AppResult<Json<EatingCreated>> {
    let record = match payload.validate() {
        Ok(r) => r,
        Err(e) => {
            warn!(error = %e, "rejected eating record");
            return Err(e);
        }
    };

    let mut tx = state.db.begin().await?;
    if User::find_by_id(&mut *tx, record.user_id).await?.is_none() {
        return Err(AppError::NotFound("User not found"));
    }

    let (macros, food_name) = if record.food_id == WATER_FOOD_ID {
        (Macros::ZERO, WATER_NAME.to_string())
    } else {
        let food = Food::find_by_id(&mut *tx, record.food_id)
            .await?
            .ok_or(AppError::NotFound("Food not found"))?;
        (food.per_100().for_quantity(record.quantity), food.name_food)
    };

    let eating = Eating::insert(
        &mut *tx,
        &NewEating {
            user_id: record.user_id,
            food_id: record.food_id,
            date: record.date,
            meal_type: record.meal_type,
            quantity: record.quantity,
            macros,
        },
    )
    .await?;
    tx.commit().await?;

    info!(
        eating_id = eating.id,
        user_id = eating.user_id,
        food_id = eating.food_id,
        callories = eating.callories,
        "eating record created"
    );
    Ok(Json(EatingCreated::new(eating, food_name)))
}

/// All records of the user on one calendar day, with food names resolved.
#[instrument(skip(state))]
pub async fn list_eating_records(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
    Query(q): Query<DayQuery>,
) -> AppResult<Json<Vec<EatingItem>>> {
    let (from, to) = day_bounds(parse_date(&q.date)?);
    let rows = Eating::list_between(&state.db, user_id, from, to).await?;

    let mut names: HashMap<i32, String> = HashMap::new();
    let mut items = Vec::with_capacity(rows.len());
    for row in rows {
        let food_name = if row.is_water() {
            WATER_NAME.to_string()
        } else if let Some(name) = names.get(&row.food_id) {
            name.clone()
        } else {
            let name = Food::find_by_id(&state.db, row.food_id)
                .await?
                .map(|f| f.name_food)
                .unwrap_or_else(|| UNKNOWN_FOOD_NAME.to_string());
            names.insert(row.food_id, name.clone());
            name
        };
        items.push(EatingItem::new(row, food_name));
    }
    Ok(Json(items))
}

#[instrument(skip(state))]
pub async fn delete_eating_record(
    State(state): State<AppState>,
    Path(record_id): Path<i32>,
) -> AppResult<Json<Message>> {
    let mut tx = state.db.begin().await?;
    if !Eating::delete(&mut *tx, record_id).await? {
        return Err(AppError::NotFound("Record not found"));
    }
    tx.commit().await?;

    info!(record_id, "eating record deleted");
    Ok(Json(Message::new("Eating record deleted successfully")))
}
