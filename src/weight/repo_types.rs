use sqlx::FromRow;
use time::Date;

#[derive(Debug, Clone, FromRow)]
pub struct WeightRecord {
    pub id: i32,
    pub date: Date,
    pub weight: f64,
    pub bmi: Option<f64>,
    pub notes: Option<String>,
}

#[derive(Debug)]
pub struct NewWeightRecord<'a> {
    pub user_id: i32,
    pub date: Date,
    pub weight: f64,
    pub bmi: Option<f64>,
    pub notes: Option<&'a str>,
}
