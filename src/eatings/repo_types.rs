use sqlx::FromRow;
use time::PrimitiveDateTime;

use crate::nutrition::Macros;

/// Food id that marks a glass of water; it has no row in `food`.
pub const WATER_FOOD_ID: i32 = 0;

#[derive(Debug, Clone, FromRow)]
pub struct Eating {
    pub id: i32,
    pub user_id: i32,
    pub food_id: i32,
    pub callories: f64,
    pub squirrels: f64,
    pub fats: f64,
    pub carbohydrates: f64,
    pub date: PrimitiveDateTime,
    pub meal_type: String,
    pub quantity: f64,
}

impl Eating {
    pub fn is_water(&self) -> bool {
        self.food_id == WATER_FOOD_ID
    }
}

#[derive(Debug)]
pub struct NewEating<'a> {
    pub user_id: i32,
    pub food_id: i32,
    pub date: PrimitiveDateTime,
    pub meal_type: &'a str,
    pub quantity: f64,
    pub macros: Macros,
}
