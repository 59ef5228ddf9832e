use super::client::{ApiClient, ApiError};
use crate::models::SetProfileRequest;

impl ApiClient {
    /// Flip the power state of the active device
    pub async fn toggle_power(&self) -> Result<(), ApiError> {
        self.post_empty(&toggle_path(self.device_id())).await
    }

    /// Select the threshold profile the backend uses for this device
    pub async fn set_profile(&self, profile_id: i64) -> Result<(), ApiError> {
        self.post_json(
            &set_profile_path(self.device_id()),
            &SetProfileRequest { profile_id },
        )
        .await
    }

    /// URL the browser navigates to for the CSV download
    pub fn export_url(&self) -> String {
        self.url(&export_path(self.device_id()))
    }
}

pub fn toggle_path(device_id: &str) -> String {
    format!("/api/device/{}/toggle", device_id)
}

pub fn set_profile_path(device_id: &str) -> String {
    format!("/api/device/{}/set_profile", device_id)
}

pub fn export_path(device_id: &str) -> String {
    format!("/api/export/{}", device_id)
}
