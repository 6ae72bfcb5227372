use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use tracing::{error, info, instrument, warn};

use crate::{
    auth::{
        dto::{
            LoginAvailability, LoginRequest, LoginResponse, RegisterRequest, RegisterResponse,
            VerifyPasswordRequest, VerifyPasswordResponse,
        },
        password::{hash_password, password_matches},
    },
    dates::parse_date,
    error::{AppError, AppResult},
    state::AppState,
    users::repo_types::{NewUser, User},
};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/register", post(register))
        .route("/users/verify-password", post(verify_password))
        .route("/check-login/:login", get(check_login))
}

#[instrument(skip(state, payload), fields(login = %payload.login))]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let user = match User::find_by_login(&state.db, &payload.login).await? {
        Some(u) => u,
        None => {
            warn!("login unknown user");
            return Err(AppError::InvalidCredentials);
        }
    };

    if !password_matches(&payload.password, &user.password) {
        warn!(user_id = user.id, "login invalid password");
        return Err(AppError::InvalidCredentials);
    }

    info!(user_id = user.id, "user logged in");
    Ok(Json(user.into()))
}

#[instrument(skip(state, payload), fields(login = %payload.login))]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> AppResult<Json<RegisterResponse>> {
    let birthday = parse_date(&payload.birthday)?;

    let mut tx = state.db.begin().await.map_err(registration_failed)?;

    if User::login_exists(&mut *tx, &payload.login)
        .await
        .map_err(registration_failed)?
    {
        warn!("login already registered");
        return Err(AppError::Conflict("Login already exists"));
    }

    let hash = hash_password(&payload.password).map_err(registration_failed)?;

    let new_user = NewUser {
        name: &payload.name,
        surname: &payload.surname,
        height: payload.height,
        weight: payload.weight,
        gender: payload.gender,
        birthday,
        password_hash: &hash,
        login: &payload.login,
        photo: payload.photo.as_deref(),
    };
    let user_id = User::create(&mut *tx, &new_user)
        .await
        .map_err(registration_failed)?;
    tx.commit().await.map_err(registration_failed)?;

    info!(user_id, "user registered");
    Ok(Json(RegisterResponse {
        message: "Registration successful",
        user_id,
    }))
}

fn registration_failed(e: impl std::fmt::Display) -> AppError {
    error!(error = %e, "registration failed");
    AppError::Internal("Registration failed".into())
}

#[instrument(skip(state, payload), fields(user_id = payload.user_id))]
pub async fn verify_password(
    State(state): State<AppState>,
    Json(payload): Json<VerifyPasswordRequest>,
) -> AppResult<Json<VerifyPasswordResponse>> {
    let is_valid = User::find_by_id(&state.db, payload.user_id)
        .await?
        .is_some_and(|u| password_matches(&payload.password, &u.password));
    Ok(Json(VerifyPasswordResponse { is_valid }))
}

#[instrument(skip(state))]
pub async fn check_login(
    State(state): State<AppState>,
    Path(login): Path<String>,
) -> AppResult<Json<LoginAvailability>> {
    let taken = User::login_exists(&state.db, &login).await?;
    Ok(Json(LoginAvailability { available: !taken }))
}
