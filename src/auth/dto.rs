use serde::{Deserialize, Serialize};

use crate::dates::format_date;
use crate::users::repo_types::User;

/// Request body for login.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub login: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub id: i32,
    pub name: String,
    pub login: String,
    pub birthday: String,
    pub message: &'static str,
}

impl From<User> for LoginResponse {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            name: u.name,
            login: u.login,
            birthday: format_date(u.birthday),
            message: "Login successful",
        }
    }
}

/// Request body for user registration.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub surname: String,
    pub height: f64,
    pub weight: f64,
    pub gender: bool,
    pub birthday: String, // YYYY-MM-DD
    pub password: String,
    pub login: String,
    pub photo: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub message: &'static str,
    pub user_id: i32,
}

#[derive(Debug, Deserialize)]
pub struct VerifyPasswordRequest {
    pub user_id: i32,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct VerifyPasswordResponse {
    pub is_valid: bool,
}

#[derive(Debug, Serialize)]
pub struct LoginAvailability {
    pub available: bool,
}
