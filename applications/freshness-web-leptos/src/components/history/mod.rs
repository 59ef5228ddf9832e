mod history_table;

pub use history_table::HistoryTable;
