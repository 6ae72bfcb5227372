use axum::{
    extract::{Path, State},
    routing::{get, put},
    Json, Router,
};
use time::OffsetDateTime;
use tracing::{info, instrument};

use crate::{
    dto::Message,
    error::{AppError, AppResult},
    recipes::{
        dto::{RecipeCreateRequest, RecipeCreated, RecipeItem, RecipeUpdateRequest},
        repo_types::Recipe,
    },
    state::AppState,
    users::repo_types::User,
};

pub fn recipe_routes() -> Router<AppState> {
    Router::new()
        .route("/recipes", get(list_all_recipes))
        .route("/recipes/:id", put(update_recipe).delete(delete_recipe))
        .route(
            "/users/:id/recipes",
            get(list_user_recipes).post(create_recipe),
        )
}

#[instrument(skip(state, payload))]
pub async fn create_recipe(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
    Json(payload): Json<RecipeCreateRequest>,
) -> AppResult<Json<RecipeCreated>> {
    let mut tx = state.db.begin().await?;
    if User::find_by_id(&mut *tx, user_id).await?.is_none() {
        return Err(AppError::NotFound("User not found"));
    }

    let today = OffsetDateTime::now_utc().date();
    let id = Recipe::create(&mut *tx, user_id, today, &payload.fields()).await?;
    tx.commit().await?;

    info!(user_id, recipe_id = id, "recipe created");
    Ok(Json(RecipeCreated {
        message: "Рецепт успешно создан",
        id,
    }))
}

#[instrument(skip(state, payload))]
pub async fn update_recipe(
    State(state): State<AppState>,
    Path(recipe_id): Path<i32>,
    Json(payload): Json<RecipeUpdateRequest>,
) -> AppResult<Json<Message>> {
    let mut tx = state.db.begin().await?;
    if !Recipe::replace(&mut *tx, recipe_id, &payload.fields()).await? {
        return Err(AppError::NotFound("Рецепт не найден"));
    }
    tx.commit().await?;

    info!(recipe_id, "recipe updated");
    Ok(Json(Message::new("Рецепт успешно обновлен")))
}

#[instrument(skip(state))]
pub async fn delete_recipe(
    State(state): State<AppState>,
    Path(recipe_id): Path<i32>,
) -> AppResult<Json<Message>> {
    let mut tx = state.db.begin().await?;
    if !Recipe::delete(&mut *tx, recipe_id).await? {
        return Err(AppError::NotFound("Рецепт не найден"));
    }
    tx.commit().await?;

    info!(recipe_id, "recipe deleted");
    Ok(Json(Message::new("Рецепт успешно удален")))
}

#[instrument(skip(state))]
pub async fn list_user_recipes(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> AppResult<Json<Vec<RecipeItem>>> {
    let rows = Recipe::list(&state.db, Some(user_id)).await?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

#[instrument(skip(state))]
pub async fn list_all_recipes(State(state): State<AppState>) -> AppResult<Json<Vec<RecipeItem>>> {
    let rows = Recipe::list(&state.db, None).await?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}
