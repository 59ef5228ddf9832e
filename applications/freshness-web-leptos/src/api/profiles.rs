use super::client::{ApiClient, ApiError};
use crate::models::Profile;

pub const PROFILES_PATH: &str = "/api/profiles";

impl ApiClient {
    /// Get all threshold profiles
    pub async fn list_profiles(&self) -> Result<Vec<Profile>, ApiError> {
        self.get(PROFILES_PATH).await
    }
}
