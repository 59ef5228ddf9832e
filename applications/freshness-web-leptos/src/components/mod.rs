pub mod dashboard;
pub mod history;
pub mod layout;

pub use dashboard::Dashboard;
pub use history::HistoryTable;
