use leptos::*;

use crate::api::{ApiClient, ApiError};
use crate::models::{HistoryRow, LatestReading};
use crate::state::{DashboardState, RequestSequence};

/// Fetch and render the latest reading of the active device
pub fn poll_reading(client: ApiClient, state: DashboardState, sequence: RequestSequence) {
    let ticket = sequence.issue();

    spawn_local(async move {
        let result = client.get_latest_reading().await;
        apply_reading_result(&state, &sequence, ticket, result);
    });
}

/// Fetch the history and replace the table body
pub fn poll_history(client: ApiClient, state: DashboardState, sequence: RequestSequence) {
    let ticket = sequence.issue();

    spawn_local(async move {
        let result = client.get_history().await;
        apply_history_result(&state, &sequence, ticket, result);
    });
}

/// Fill the profile select once at startup
pub fn load_profiles(client: ApiClient, state: DashboardState) {
    spawn_local(async move {
        match client.list_profiles().await {
            Ok(profiles) => {
                log::info!("Loaded {} profiles", profiles.len());
                state.apply_profiles(profiles);
            }
            Err(e) => log::error!("Failed to load profiles: {}", e),
        }
    });
}

/// Apply one latest-reading response. Responses older than the last applied
/// one are dropped; failures keep the rendered values and mark the backend
/// as disconnected.
pub fn apply_reading_result(
    state: &DashboardState,
    sequence: &RequestSequence,
    ticket: u64,
    result: Result<LatestReading, ApiError>,
) {
    if !sequence.accept(ticket) {
        log::debug!("Dropping stale reading response #{}", ticket);
        return;
    }

    match result {
        Ok(reading) => state.apply_reading(&reading),
        Err(e) => {
            log::warn!("Waiting for backend, latest reading failed: {}", e);
            state.mark_disconnected();
        }
    }
}

/// Apply one history response; on failure the previous rows stay on screen
pub fn apply_history_result(
    state: &DashboardState,
    sequence: &RequestSequence,
    ticket: u64,
    result: Result<Vec<HistoryRow>, ApiError>,
) {
    if !sequence.accept(ticket) {
        log::debug!("Dropping stale history response #{}", ticket);
        return;
    }

    match result {
        Ok(rows) => state.apply_history(&rows),
        Err(e) => log::warn!("Failed to load history: {}", e),
    }
}
