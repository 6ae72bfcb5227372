use sqlx::FromRow;

use crate::nutrition::Macros;

/// Food item with nutrition per 100 units.
#[derive(Debug, Clone, FromRow)]
pub struct Food {
    pub id: i32,
    pub name_food: String,
    pub callories: f64,
    pub squirrels: f64,
    pub fats: f64,
    pub carbohydrates: f64,
}

impl Food {
    pub fn per_100(&self) -> Macros {
        Macros {
            callories: self.callories,
            squirrels: self.squirrels,
            fats: self.fats,
            carbohydrates: self.carbohydrates,
        }
    }
}
