pub mod chart;
pub mod connection;
pub mod dashboard;
pub mod history;
pub mod reading;
pub mod sequence;
pub mod status;

pub use chart::{ChartPoint, ChartSeries, CHART_CAPACITY};
pub use connection::ConnectionStatus;
pub use dashboard::{provide_dashboard_state, use_dashboard_state, DashboardState};
pub use history::{HistoryBody, HistoryRowView, HISTORY_COLUMNS};
pub use reading::{PowerState, ReadingView};
pub use sequence::RequestSequence;
pub use status::{classify_status, StatusTier};
