pub mod client;
pub mod device;
pub mod profiles;
pub mod readings;

pub use client::{ApiClient, ApiError};
