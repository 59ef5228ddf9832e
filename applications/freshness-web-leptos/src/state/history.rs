use crate::models::HistoryRow;

use super::reading::{format_number, non_empty};
use super::{classify_status, StatusTier};

/// Number of columns in the history table
pub const HISTORY_COLUMNS: u32 = 7;

/// Display strings for one history table row
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryRowView {
    pub timestamp: String,
    pub food: String,
    pub gas: String,
    pub temperature: String,
    pub fqi: String,
    pub status: String,
    pub tier: StatusTier,
    pub estimate: String,
}

impl From<&HistoryRow> for HistoryRowView {
    fn from(row: &HistoryRow) -> Self {
        Self {
            timestamp: row.timestamp.clone(),
            food: non_empty(row.food_name.as_deref()).unwrap_or("-").to_string(),
            gas: format_number(row.mq135.round()),
            temperature: format_number(row.temp),
            fqi: row.fqi.map(format_number).unwrap_or_else(|| "-".to_string()),
            status: row.status.clone(),
            tier: classify_status(&row.status),
            estimate: non_empty(row.estimated_life.as_deref()).unwrap_or("-").to_string(),
        }
    }
}

/// Contents of the history table body
#[derive(Debug, Clone, PartialEq)]
pub enum HistoryBody {
    /// Nothing fetched yet
    Loading,
    /// A single row spanning all columns
    Placeholder { message: &'static str, colspan: u32 },
    Rows(Vec<HistoryRowView>),
}

impl HistoryBody {
    pub fn from_rows(rows: &[HistoryRow]) -> Self {
        if rows.is_empty() {
            return Self::Placeholder {
                message: "No readings recorded yet.",
                colspan: HISTORY_COLUMNS,
            };
        }
        Self::Rows(rows.iter().map(HistoryRowView::from).collect())
    }

    pub fn row_count(&self) -> usize {
        match self {
            Self::Loading | Self::Placeholder { .. } => 1,
            Self::Rows(rows) => rows.len(),
        }
    }
}

impl Default for HistoryBody {
    fn default() -> Self {
        Self::Loading
    }
}
