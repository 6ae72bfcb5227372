use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    error::{AppError, AppResult},
    foods::{
        dto::{FoodItem, FoodItemCreate, SearchQuery},
        repo_types::Food,
    },
    state::AppState,
};

pub fn food_routes() -> Router<AppState> {
    Router::new()
        .route("/food-items", post(create_food_item))
        .route("/food-items/search", get(search_food_items))
}

#[instrument(skip(state, payload), fields(name = %payload.name_food))]
pub async fn create_food_item(
    State(state): State<AppState>,
    Json(payload): Json<FoodItemCreate>,
) -> AppResult<Json<FoodItem>> {
    let mut tx = state.db.begin().await?;
    if Food::name_exists(&mut *tx, &payload.name_food).await? {
        warn!("duplicate food name");
        return Err(AppError::Conflict("Продукт с таким названием уже существует"));
    }
    let food = Food::create(&mut *tx, &payload.name_food, payload.per_100()).await?;
    tx.commit().await?;

    info!(food_id = food.id, "food item created");
    Ok(Json(food.into()))
}

#[instrument(skip(state))]
pub async fn search_food_items(
    State(state): State<AppState>,
    Query(q): Query<SearchQuery>,
) -> AppResult<Json<Vec<FoodItem>>> {
    let foods = Food::search(&state.db, &q.query).await?;
    Ok(Json(foods.into_iter().map(Into::into).collect()))
}
