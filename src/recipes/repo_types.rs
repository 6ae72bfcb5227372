use sqlx::FromRow;
use time::Date;

/// Recipe ("reciep") row.
#[derive(Debug, Clone, FromRow)]
pub struct Recipe {
    pub id: i32,
    pub name: String,
    pub callories: f64,
    pub photo: Option<String>,
    pub date_create: Date,
    pub components: String,
    pub steps: Option<String>,
    pub squirrels: f64,
    pub fats: f64,
    pub carbohydrates: f64,
}

/// Every editable field; used for both insert and full replacement.
#[derive(Debug)]
pub struct RecipeFields<'a> {
    pub name: &'a str,
    pub callories: f64,
    pub photo: Option<&'a str>,
    pub components: &'a str,
    pub steps: &'a str,
    pub squirrels: f64,
    pub fats: f64,
    pub carbohydrates: f64,
}
