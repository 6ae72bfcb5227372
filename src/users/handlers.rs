use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    auth::password::hash_password,
    dates::parse_date,
    dto::Message,
    error::{AppError, AppResult},
    state::AppState,
    users::{
        dto::{UpdatedUser, UserProfile, UserUpdate},
        repo_types::{User, UserPatch},
    },
};

pub fn user_routes() -> Router<AppState> {
    Router::new().route("/users/:id", get(get_user).put(update_user).delete(delete_user))
}

#[instrument(skip(state))]
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> AppResult<Json<UserProfile>> {
    let user = User::find_by_id(&state.db, user_id)
        .await?
        .ok_or(AppError::NotFound("User not found"))?;
    Ok(Json(user.into()))
}

#[instrument(skip(state, payload))]
pub async fn update_user(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
    Json(payload): Json<UserUpdate>,
) -> AppResult<Json<UpdatedUser>> {
    let patch = UserPatch {
        login: payload.login,
        name: payload.name,
        surname: payload.surname,
        height: payload.height,
        birthday: payload.birthday.as_deref().map(parse_date).transpose()?,
        password_hash: payload.password.as_deref().map(hash_password).transpose()?,
    };

    let mut tx = state.db.begin().await?;
    let user = match User::update(&mut *tx, user_id, &patch).await? {
        Some(u) => u,
        None => {
            warn!(user_id, "update of unknown user");
            return Err(AppError::NotFound("User not found"));
        }
    };
    tx.commit().await?;

    info!(user_id, "user updated");
    Ok(Json(user.into()))
}

#[instrument(skip(state))]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> AppResult<Json<Message>> {
    let mut tx = state.db.begin().await?;
    if !User::delete(&mut *tx, user_id).await? {
        return Err(AppError::NotFound("User not found"));
    }
    tx.commit().await?;

    info!(user_id, "user deleted");
    Ok(Json(Message::new("User deleted successfully")))
}
