use serde::{Deserialize, Serialize};

use crate::dates::format_date;
use crate::recipes::repo_types::{Recipe, RecipeFields};

/// Omitted macros default to zero.
#[derive(Debug, Deserialize)]
pub struct RecipeCreateRequest {
    pub name: String,
    #[serde(default)]
    pub callories: f64,
    pub photo: Option<String>,
    pub components: String,
    pub steps: String,
    #[serde(default)]
    pub squirrels: f64,
    #[serde(default)]
    pub fats: f64,
    #[serde(default)]
    pub carbohydrates: f64,
}

impl RecipeCreateRequest {
    pub fn fields(&self) -> RecipeFields<'_> {
        RecipeFields {
            name: &self.name,
            callories: self.callories,
            photo: self.photo.as_deref(),
            components: &self.components,
            steps: &self.steps,
            squirrels: self.squirrels,
            fats: self.fats,
            carbohydrates: self.carbohydrates,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RecipeUpdateRequest {
    pub name: String,
    pub callories: f64,
    pub photo: Option<String>,
    pub components: String,
    pub steps: String,
    pub squirrels: f64,
    pub fats: f64,
    pub carbohydrates: f64,
}

impl RecipeUpdateRequest {
    pub fn fields(&self) -> RecipeFields<'_> {
        RecipeFields {
            name: &self.name,
            callories: self.callories,
            photo: self.photo.as_deref(),
            components: &self.components,
            steps: &self.steps,
            squirrels: self.squirrels,
            fats: self.fats,
            carbohydrates: self.carbohydrates,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RecipeCreated {
    pub message: &'static str,
    pub id: i32,
}

#[derive(Debug, Serialize)]
pub struct RecipeItem {
    pub id: i32,
    pub name: String,
    pub photo: Option<String>,
    pub callories: f64,
    pub components: String,
    pub steps: Option<String>,
    pub squirrels: f64,
    pub fats: f64,
    pub carbohydrates: f64,
    #[serde(rename = "dateCreate")]
    pub date_create: String,
}

impl From<Recipe> for RecipeItem {
    fn from(r: Recipe) -> Self {
        Self {
            id: r.id,
            name: r.name,
            photo: r.photo,
            callories: r.callories,
            components: r.components,
            steps: r.steps,
            squirrels: r.squirrels,
            fats: r.fats,
            carbohydrates: r.carbohydrates,
            date_create: format_date(r.date_create),
        }
    }
}
