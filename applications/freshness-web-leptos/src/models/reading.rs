use serde::{Deserialize, Serialize};

/// Most recent reading for a device, as returned by `/api/latest/{device_id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatestReading {
    pub is_active: bool,
    pub fqi: Option<f64>,
    pub mq135: f64,
    pub temp: f64,
    pub status: String,
    pub current_profile: Option<String>,
    pub estimated_life: Option<String>,
    /// Server-formatted wall clock time (`HH:MM:SS`), used as the chart label
    pub timestamp: String,
}

/// One row of `/api/history/{device_id}`, newest first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRow {
    pub timestamp: String,
    pub food_name: Option<String>,
    pub mq135: f64,
    pub temp: f64,
    pub fqi: Option<f64>,
    pub status: String,
    pub estimated_life: Option<String>,
}
