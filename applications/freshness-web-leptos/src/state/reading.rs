use crate::models::LatestReading;

use super::{classify_status, ConnectionStatus, StatusTier};

/// Display strings for the reading cards, derived from one [`LatestReading`]
#[derive(Debug, Clone, PartialEq)]
pub struct ReadingView {
    pub fqi: String,
    pub gas: String,
    pub temperature: String,
    pub profile: String,
    pub estimate: String,
    pub status_text: String,
    /// `None` while the device is powered off
    pub tier: Option<StatusTier>,
    pub connection: ConnectionStatus,
}

impl ReadingView {
    /// Presentation used before the first reading arrives
    pub fn placeholder() -> Self {
        Self {
            fqi: "--".to_string(),
            gas: "-".to_string(),
            temperature: "-".to_string(),
            profile: "-".to_string(),
            estimate: "-".to_string(),
            status_text: "WAITING".to_string(),
            tier: None,
            connection: ConnectionStatus::Connecting,
        }
    }

    /// Presentation for a powered-off device; sensor values are ignored
    pub fn powered_off() -> Self {
        Self {
            fqi: "--".to_string(),
            gas: "-".to_string(),
            temperature: "-".to_string(),
            profile: "System Off".to_string(),
            estimate: "Inactive".to_string(),
            status_text: "DEVICE OFF".to_string(),
            tier: None,
            connection: ConnectionStatus::Standby,
        }
    }

    pub fn badge_class(&self) -> String {
        let background = self.tier.map(|t| t.badge_class()).unwrap_or("bg-secondary");
        format!("badge status-badge {}", background)
    }
}

impl From<&LatestReading> for ReadingView {
    fn from(reading: &LatestReading) -> Self {
        if !reading.is_active {
            return Self::powered_off();
        }

        Self {
            fqi: reading
                .fqi
                .map(format_number)
                .unwrap_or_else(|| "--".to_string()),
            gas: format!("{} ppm", format_number(reading.mq135.round())),
            temperature: format!("{} °C", format_number(reading.temp)),
            profile: non_empty(reading.current_profile.as_deref()).unwrap_or("Unknown").to_string(),
            estimate: non_empty(reading.estimated_life.as_deref()).unwrap_or("-").to_string(),
            status_text: reading.status.clone(),
            tier: Some(classify_status(&reading.status)),
            connection: ConnectionStatus::Connected,
        }
    }
}

/// Power switch presentation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PowerState {
    pub is_on: bool,
}

impl PowerState {
    pub fn label(&self) -> &'static str {
        if self.is_on {
            "ON"
        } else {
            "OFF"
        }
    }

    pub fn label_class(&self) -> &'static str {
        if self.is_on {
            "power-label fw-bold text-success"
        } else {
            "power-label fw-bold text-muted"
        }
    }
}

/// Format a JSON number the way the backend sent it: integers without a
/// fractional part, everything else with its shortest representation
pub(crate) fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{:.0}", value)
    } else {
        value.to_string()
    }
}

pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}
