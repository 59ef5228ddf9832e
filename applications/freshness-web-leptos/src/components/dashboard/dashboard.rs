use leptos::*;

use crate::api::ApiClient;
use crate::components::HistoryTable;
use crate::config::DashboardConfig;
use crate::poller::{load_profiles, poll_history, poll_reading};
use crate::state::{use_dashboard_state, RequestSequence};

use super::controls_card::ControlsCard;
use super::fqi_chart::FqiChart;
use super::reading_cards::ReadingCards;

/// Dashboard page: starts the pollers and lays out the widgets
#[component]
pub fn Dashboard() -> impl IntoView {
    let config = use_context::<DashboardConfig>().unwrap_or_default();
    let client = ApiClient::new(&config);
    let state = use_dashboard_state();

    let reading_sequence = RequestSequence::new();
    let history_sequence = RequestSequence::new();

    // Profiles are static for the session, fetch them once
    load_profiles(client.clone(), state);

    // First poll right away, then on a fixed interval
    poll_reading(client.clone(), state, reading_sequence.clone());
    poll_history(client.clone(), state, history_sequence.clone());

    #[cfg(target_arch = "wasm32")]
    {
        use gloo_timers::callback::Interval;

        let client_reading = client.clone();
        let reading_interval = Interval::new(config.reading_interval_ms, move || {
            poll_reading(client_reading.clone(), state, reading_sequence.clone());
        });

        let client_history = client.clone();
        let history_interval = Interval::new(config.history_interval_ms, move || {
            poll_history(client_history.clone(), state, history_sequence.clone());
        });

        on_cleanup(move || {
            drop(reading_interval);
            drop(history_interval);
        });
    }

    view! {
        <div class="dashboard">
            <div class="dashboard-grid">
                <ReadingCards />
                <ControlsCard client=client />
                <div class="card chart-card">
                    <h3>"Freshness Quality Index"</h3>
                    <FqiChart />
                </div>
            </div>
            <HistoryTable />
        </div>
    }
}
