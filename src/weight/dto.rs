use serde::{Deserialize, Serialize};

use crate::dates::format_date;
use crate::weight::repo_types::WeightRecord;

#[derive(Debug, Deserialize)]
pub struct WeightRecordCreate {
    pub date: String, // YYYY-MM-DD
    pub weight: f64,
    pub notes: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct WeightRecordResponse {
    pub id: i32,
    pub date: String,
    pub weight: f64,
    pub bmi: Option<f64>,
    pub notes: Option<String>,
}

impl From<WeightRecord> for WeightRecordResponse {
    fn from(r: WeightRecord) -> Self {
        Self {
            id: r.id,
            date: format_date(r.date),
            weight: r.weight,
            bmi: r.bmi,
            notes: r.notes,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct HistoryLimit {
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    100
}
