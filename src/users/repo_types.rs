use sqlx::FromRow;
use time::Date;

/// User record in the database.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub surname: String,
    pub height: f64,         // centimetres
    pub weight: f64,         // kilograms, synced from the latest weight record
    pub gender: bool,
    pub birthday: Date,
    pub password: String,    // argon2 hash
    pub login: String,
}

/// Fields for a new user; the password is already hashed.
#[derive(Debug)]
pub struct NewUser<'a> {
    pub name: &'a str,
    pub surname: &'a str,
    pub height: f64,
    pub weight: f64,
    pub gender: bool,
    pub birthday: Date,
    pub password_hash: &'a str,
    pub login: &'a str,
    pub photo: Option<&'a str>,
}

/// Partial update; `None` keeps the stored value.
#[derive(Debug, Default)]
pub struct UserPatch {
    pub login: Option<String>,
    pub name: Option<String>,
    pub surname: Option<String>,
    pub height: Option<f64>,
    pub birthday: Option<Date>,
    pub password_hash: Option<String>,
}
