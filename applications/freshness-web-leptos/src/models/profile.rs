use serde::{Deserialize, Serialize};

/// Threshold profile the backend uses when computing the FQI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: i64,
    pub name: String,
}

/// Body of `POST /api/device/{device_id}/set_profile`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetProfileRequest {
    pub profile_id: i64,
}
