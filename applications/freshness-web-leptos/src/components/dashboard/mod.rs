mod controls_card;
#[allow(clippy::module_inception)]
mod dashboard;
mod fqi_chart;
mod reading_cards;

pub use dashboard::Dashboard;
