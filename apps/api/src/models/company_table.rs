use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One persisted cell of the company salary table.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SalaryBandRow {
    pub education: String,
    pub year: i32,
    pub low: Option<i64>,
    pub middle: Option<i64>,
    pub high: Option<i64>,
    pub updated_at: DateTime<Utc>,
}
