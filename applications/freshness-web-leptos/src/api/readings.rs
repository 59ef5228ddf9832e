use super::client::{ApiClient, ApiError};
use crate::models::{HistoryRow, LatestReading};

impl ApiClient {
    /// Get the latest reading of the active device
    pub async fn get_latest_reading(&self) -> Result<LatestReading, ApiError> {
        self.get(&latest_path(self.device_id())).await
    }

    /// Get the recent readings of the active device, newest first
    pub async fn get_history(&self) -> Result<Vec<HistoryRow>, ApiError> {
        self.get(&history_path(self.device_id())).await
    }
}

pub fn latest_path(device_id: &str) -> String {
    format!("/api/latest/{}", device_id)
}

pub fn history_path(device_id: &str) -> String {
    format!("/api/history/{}", device_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(latest_path("ESP32_REAL_01"), "/api/latest/ESP32_REAL_01");
        assert_eq!(history_path("ESP32_REAL_01"), "/api/history/ESP32_REAL_01");
    }
}
