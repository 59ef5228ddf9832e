use leptos::*;

use crate::models::{HistoryRow, LatestReading, Profile};

use super::{ChartSeries, ConnectionStatus, HistoryBody, ReadingView};

/// Reactive dashboard state shared by the pollers and the widgets
#[derive(Clone, Copy)]
pub struct DashboardState {
    pub reading: RwSignal<ReadingView>,
    pub connection: RwSignal<ConnectionStatus>,
    /// Power state last reported by the device
    pub power_on: RwSignal<bool>,
    /// Checked state of the power switch, including user clicks not yet
    /// confirmed by a poll
    pub switch_checked: RwSignal<bool>,
    pub chart: RwSignal<ChartSeries>,
    pub history: RwSignal<HistoryBody>,
    pub profiles: RwSignal<Vec<Profile>>,
    pub selected_profile: RwSignal<String>,
    /// Local wall clock time of the last applied reading
    pub last_update: RwSignal<Option<String>>,
}

impl DashboardState {
    pub fn new() -> Self {
        Self {
            reading: create_rw_signal(ReadingView::placeholder()),
            connection: create_rw_signal(ConnectionStatus::default()),
            power_on: create_rw_signal(false),
            switch_checked: create_rw_signal(false),
            chart: create_rw_signal(ChartSeries::new()),
            history: create_rw_signal(HistoryBody::default()),
            profiles: create_rw_signal(Vec::new()),
            selected_profile: create_rw_signal(String::new()),
            last_update: create_rw_signal(None),
        }
    }

    /// Render a successful latest-reading response
    pub fn apply_reading(&self, reading: &LatestReading) {
        // Only touch the switch when it is out of sync
        if self.switch_checked.get_untracked() != reading.is_active {
            self.switch_checked.set(reading.is_active);
        }
        if self.power_on.get_untracked() != reading.is_active {
            self.power_on.set(reading.is_active);
        }

        let view = ReadingView::from(reading);
        self.connection.set(view.connection);
        self.reading.set(view);

        if reading.is_active {
            let is_new = self
                .chart
                .with_untracked(|c| c.last_label() != Some(reading.timestamp.as_str()));
            if is_new {
                self.chart.update(|c| {
                    c.append(reading.timestamp.clone(), reading.fqi);
                });
            }
        }

        self.last_update
            .set(Some(chrono::Local::now().format("%H:%M:%S").to_string()));
    }

    /// Track a click on the power switch. The browser has already flipped
    /// the checkbox, so no DOM write is triggered here.
    pub fn record_switch(&self, checked: bool) {
        self.switch_checked.set_untracked(checked);
    }

    /// Keep the last rendered values but flag the backend as unreachable
    pub fn mark_disconnected(&self) {
        self.connection.set(ConnectionStatus::Disconnected);
    }

    /// Replace the whole history table body
    pub fn apply_history(&self, rows: &[HistoryRow]) {
        self.history.set(HistoryBody::from_rows(rows));
    }

    /// Replace the profile options, preselecting the first one like a
    /// native select does
    pub fn apply_profiles(&self, profiles: Vec<Profile>) {
        if self.selected_profile.get_untracked().is_empty() {
            if let Some(first) = profiles.first() {
                self.selected_profile.set(first.id.to_string());
            }
        }
        self.profiles.set(profiles);
    }
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new()
    }
}

/// Provide dashboard state to the application
pub fn provide_dashboard_state() -> DashboardState {
    let state = DashboardState::new();
    provide_context(state);
    state
}

/// Hook to access the dashboard state, creating it if no parent provided one
pub fn use_dashboard_state() -> DashboardState {
    use_context::<DashboardState>().unwrap_or_else(provide_dashboard_state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::StatusTier;

    fn reading(timestamp: &str, is_active: bool) -> LatestReading {
        LatestReading {
            is_active,
            fqi: Some(81.0),
            mq135: 120.2,
            temp: 27.0,
            status: "Segar".to_string(),
            current_profile: Some("Nasi Putih".to_string()),
            estimated_life: Some("> 2 Hari".to_string()),
            timestamp: timestamp.to_string(),
        }
    }

    #[test]
    fn test_apply_active_reading() {
        let runtime = create_runtime();
        let state = DashboardState::new();

        state.apply_reading(&reading("10:00:01", true));

        assert!(state.power_on.get_untracked());
        assert!(state.switch_checked.get_untracked());
        assert_eq!(state.connection.get_untracked(), ConnectionStatus::Connected);
        assert_eq!(state.reading.get_untracked().tier, Some(StatusTier::Normal));
        assert_eq!(state.chart.with_untracked(|c| c.len()), 1);
        assert!(state.last_update.get_untracked().is_some());

        runtime.dispose();
    }

    #[test]
    fn test_repeated_reading_is_plotted_once() {
        let runtime = create_runtime();
        let state = DashboardState::new();

        state.apply_reading(&reading("10:00:01", true));
        state.apply_reading(&reading("10:00:01", true));
        state.apply_reading(&reading("10:00:04", true));

        assert_eq!(
            state.chart.with_untracked(|c| c.labels().map(str::to_string).collect::<Vec<_>>()),
            vec!["10:00:01".to_string(), "10:00:04".to_string()]
        );

        runtime.dispose();
    }

    #[test]
    fn test_powered_off_reading() {
        let runtime = create_runtime();
        let state = DashboardState::new();
        state.apply_reading(&reading("10:00:01", true));

        state.apply_reading(&reading("10:00:04", false));

        assert!(!state.power_on.get_untracked());
        assert_eq!(state.connection.get_untracked(), ConnectionStatus::Standby);
        assert_eq!(state.reading.get_untracked(), ReadingView::powered_off());
        assert_eq!(state.chart.with_untracked(|c| c.len()), 1);

        runtime.dispose();
    }

    #[test]
    fn test_switch_resyncs_when_toggle_has_no_effect() {
        let runtime = create_runtime();
        let state = DashboardState::new();
        state.apply_reading(&reading("10:00:01", false));

        // User flips the switch but the device stays off
        state.record_switch(true);
        assert!(state.switch_checked.get_untracked());

        state.apply_reading(&reading("10:00:04", false));

        assert!(!state.switch_checked.get_untracked());
        assert!(!state.power_on.get_untracked());

        runtime.dispose();
    }

    #[test]
    fn test_switch_follows_confirmed_toggle() {
        let runtime = create_runtime();
        let state = DashboardState::new();
        state.apply_reading(&reading("10:00:01", false));

        state.record_switch(true);
        state.apply_reading(&reading("10:00:04", true));

        assert!(state.switch_checked.get_untracked());
        assert!(state.power_on.get_untracked());

        runtime.dispose();
    }

    #[test]
    fn test_disconnect_keeps_last_values() {
        let runtime = create_runtime();
        let state = DashboardState::new();
        state.apply_reading(&reading("10:00:01", true));
        let before = state.reading.get_untracked();

        state.mark_disconnected();

        assert_eq!(state.connection.get_untracked(), ConnectionStatus::Disconnected);
        assert_eq!(state.reading.get_untracked(), before);
        assert!(state.power_on.get_untracked());

        runtime.dispose();
    }

    #[test]
    fn test_apply_profiles_preselects_first() {
        let runtime = create_runtime();
        let state = DashboardState::new();

        state.apply_profiles(vec![
            Profile { id: 2, name: "Daging Sapi/Ayam".to_string() },
            Profile { id: 5, name: "Roti".to_string() },
        ]);

        assert_eq!(state.selected_profile.get_untracked(), "2");
        assert_eq!(state.profiles.with_untracked(|p| p.len()), 2);

        runtime.dispose();
    }

    #[test]
    fn test_apply_empty_history() {
        let runtime = create_runtime();
        let state = DashboardState::new();

        state.apply_history(&[]);

        assert_eq!(state.history.with_untracked(|h| h.row_count()), 1);

        runtime.dispose();
    }
}
