use serde::{Deserialize, Serialize};

use crate::dates::format_date;
use crate::users::repo_types::User;

#[derive(Debug, Serialize)]
pub struct UserProfile {
    pub id: i32,
    pub name: String,
    pub login: String,
    pub birthday: String,
    pub height: f64,
    pub surname: String,
    pub weight: f64,
    pub gender: bool,
}

impl From<User> for UserProfile {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            name: u.name,
            login: u.login,
            birthday: format_date(u.birthday),
            height: u.height,
            surname: u.surname,
            weight: u.weight,
            gender: u.gender,
        }
    }
}

/// Partial profile update. Weight is not part of it; it changes through
/// weight records.
#[derive(Debug, Default, Deserialize)]
pub struct UserUpdate {
    pub login: Option<String>,
    pub name: Option<String>,
    pub surname: Option<String>,
    pub height: Option<f64>,
    pub birthday: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct UpdatedUser {
    pub id: i32,
    pub login: String,
    pub name: String,
    pub surname: String,
    pub height: f64,
    pub birthday: String,
}

impl From<User> for UpdatedUser {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            login: u.login,
            name: u.name,
            surname: u.surname,
            height: u.height,
            birthday: format_date(u.birthday),
        }
    }
}
