/// Severity of a freshness status string, used for badge colouring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTier {
    Danger,
    Warning,
    Normal,
}

const DANGER_MARKERS: [&str; 2] = ["BASI", "BERBAHAYA"];
const WARNING_MARKERS: [&str; 1] = ["MULAI"];

/// Classify a status string returned by the backend.
///
/// Rules are checked in order and matched case-insensitively as substrings,
/// so "Mulai Basi" is `Danger` even though it also starts with "Mulai".
pub fn classify_status(text: &str) -> StatusTier {
    let upper = text.to_uppercase();

    if DANGER_MARKERS.iter().any(|m| upper.contains(m)) {
        StatusTier::Danger
    } else if WARNING_MARKERS.iter().any(|m| upper.contains(m)) {
        StatusTier::Warning
    } else {
        StatusTier::Normal
    }
}

impl StatusTier {
    /// Background classes for the large status badge and table badges
    pub fn badge_class(&self) -> &'static str {
        match self {
            Self::Danger => "bg-danger",
            Self::Warning => "bg-warning text-dark",
            Self::Normal => "bg-success",
        }
    }
}
