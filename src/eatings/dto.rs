use serde::{Deserialize, Serialize};
use time::PrimitiveDateTime;

use crate::dates::{format_timestamp, parse_timestamp};
use crate::eatings::repo_types::Eating;
use crate::error::AppError;

pub const WATER_NAME: &str = "Вода";
pub const UNKNOWN_FOOD_NAME: &str = "Неизвестный продукт";

/// Required fields are optional here so that their absence is a 400 from the
/// handler rather than a body rejection.
#[derive(Debug, Deserialize)]
pub struct EatingRecordCreate {
    pub user_id: Option<i32>,
    /// `Some(0)` is water; absence is a missing field, not water.
    pub food_id: Option<i32>,
    pub date: Option<String>,
    pub meal_type: Option<String>,
    pub quantity: f64,
}

/// Fields of a create request after presence and date checks.
#[derive(Debug, PartialEq)]
pub struct ValidEatingRecord<'a> {
    pub user_id: i32,
    pub food_id: i32,
    pub date: PrimitiveDateTime,
    pub meal_type: &'a str,
    pub quantity: f64,
}

impl EatingRecordCreate {
    pub fn validate(&self) -> Result<ValidEatingRecord<'_>, AppError> {
        let missing = || AppError::Validation("Missing required fields".into());
        let user_id = self.user_id.filter(|id| *id != 0).ok_or_else(missing)?;
        let food_id = self.food_id.ok_or_else(missing)?;
        let date = self
            .date
            .as_deref()
            .filter(|d| !d.is_empty())
            .ok_or_else(missing)?;
        let meal_type = self
            .meal_type
            .as_deref()
            .filter(|m| !m.is_empty())
            .ok_or_else(missing)?;

        Ok(ValidEatingRecord {
            user_id,
            food_id,
            date: parse_timestamp(date)?,
            meal_type,
            quantity: self.quantity,
        })
    }
}

/// Response of a create; macros are reported as `proteins`.
#[derive(Debug, Serialize)]
pub struct EatingCreated {
    pub id: i32,
    pub user_id: i32,
    pub food_id: i32,
    pub date: String,
    pub meal_type: String,
    pub quantity: f64,
    pub callories: f64,
    pub proteins: f64,
    pub fats: f64,
    pub carbohydrates: f64,
    pub food_name: String,
}

impl EatingCreated {
    pub fn new(e: Eating, food_name: String) -> Self {
        Self {
            id: e.id,
            user_id: e.user_id,
            food_id: e.food_id,
            date: format_timestamp(e.date),
            meal_type: e.meal_type,
            quantity: e.quantity,
            callories: e.callories,
            proteins: e.squirrels,
            fats: e.fats,
            carbohydrates: e.carbohydrates,
            food_name,
        }
    }
}

/// Item of the daily listing; macros are reported as `squirrels`.
#[derive(Debug, Serialize)]
pub struct EatingItem {
    pub id: i32,
    pub user_id: i32,
    pub food_id: i32,
    pub food_name: String,
    pub date: String,
    pub meal_type: String,
    pub quantity: f64,
    pub callories: f64,
    pub squirrels: f64,
    pub fats: f64,
    pub carbohydrates: f64,
}

impl EatingItem {
    pub fn new(e: Eating, food_name: String) -> Self {
        Self {
            id: e.id,
            user_id: e.user_id,
            food_id: e.food_id,
            food_name,
            date: format_timestamp(e.date),
            meal_type: e.meal_type,
            quantity: e.quantity,
            callories: e.callories,
            squirrels: e.squirrels,
            fats: e.fats,
            carbohydrates: e.carbohydrates,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct DayQuery {
    pub date: String, // YYYY-MM-DD
}
