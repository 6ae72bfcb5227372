use serde::{Deserialize, Serialize};

use crate::foods::repo_types::Food;
use crate::nutrition::Macros;

#[derive(Debug, Deserialize)]
pub struct FoodItemCreate {
    #[serde(rename = "nameFood")]
    pub name_food: String,
    pub callories: f64,
    pub proteins: f64,
    pub fats: f64,
    pub carbohydrates: f64,
}

impl FoodItemCreate {
    pub fn per_100(&self) -> Macros {
        Macros {
            callories: self.callories,
            squirrels: self.proteins,
            fats: self.fats,
            carbohydrates: self.carbohydrates,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FoodItem {
    pub id: i32,
    #[serde(rename = "nameFood")]
    pub name_food: String,
    pub callories: f64,
    pub proteins: f64,
    pub fats: f64,
    pub carbohydrates: f64,
}

impl From<Food> for FoodItem {
    fn from(f: Food) -> Self {
        Self {
            id: f.id,
            name_food: f.name_food,
            callories: f.callories,
            proteins: f.squirrels,
            fats: f.fats,
            carbohydrates: f.carbohydrates,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub query: String,
}
