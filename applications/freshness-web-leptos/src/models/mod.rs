pub mod profile;
pub mod reading;

pub use profile::{Profile, SetProfileRequest};
pub use reading::{HistoryRow, LatestReading};
