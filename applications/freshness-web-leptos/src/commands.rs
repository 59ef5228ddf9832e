use std::future::Future;

use crate::api::{ApiClient, ApiError};

/// Send the power toggle. Failures are logged and the switch is left as is;
/// the next poll shows the actual state.
pub async fn toggle_power(client: &ApiClient) {
    match client.toggle_power().await {
        Ok(()) => log::info!("Power toggle sent for {}", client.device_id()),
        Err(e) => log::error!("Failed to toggle power: {}", e),
    }
}

/// Value of the profile select control
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileSelection {
    Empty,
    Invalid(String),
    Selected(i64),
}

impl ProfileSelection {
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() {
            return Self::Empty;
        }
        match value.parse() {
            Ok(id) => Self::Selected(id),
            Err(_) => Self::Invalid(value.to_string()),
        }
    }
}

/// Result of a profile change, shown to the user in a blocking dialog
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileChangeOutcome {
    Changed,
    Rejected,
    ConnectionError,
}

impl ProfileChangeOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            Self::Changed => {
                "Profile changed. Upcoming FQI calculations will use the new profile."
            }
            Self::Rejected => "Failed to change profile.",
            Self::ConnectionError => "Connection error.",
        }
    }
}

impl From<Result<(), ApiError>> for ProfileChangeOutcome {
    fn from(result: Result<(), ApiError>) -> Self {
        match result {
            Ok(()) => Self::Changed,
            Err(ApiError::Network(_)) => Self::ConnectionError,
            Err(ApiError::Http { .. }) | Err(ApiError::Deserialization(_)) => Self::Rejected,
        }
    }
}

/// Apply the selected profile through `send`.
///
/// Returns `None` without calling `send` when nothing is selected.
pub async fn change_profile<F, Fut>(selection: &str, send: F) -> Option<ProfileChangeOutcome>
where
    F: FnOnce(i64) -> Fut,
    Fut: Future<Output = Result<(), ApiError>>,
{
    let profile_id = match ProfileSelection::parse(selection) {
        ProfileSelection::Empty => return None,
        ProfileSelection::Invalid(value) => {
            log::error!("Ignoring invalid profile id {:?}", value);
            return Some(ProfileChangeOutcome::Rejected);
        }
        ProfileSelection::Selected(id) => id,
    };

    let result = send(profile_id).await;
    if let Err(e) = &result {
        log::error!("Failed to set profile {}: {}", profile_id, e);
    }
    Some(result.into())
}

/// Navigate the browser to the CSV export of the active device
pub fn export_csv(client: &ApiClient) {
    let url = client.export_url();
    log::info!("Downloading CSV from {}", url);

    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href(&url) {
                log::error!("Failed to open export URL: {:?}", e);
            }
        }
    }
}

/// Show a blocking message to the user
pub fn notify_user(message: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.alert_with_message(message) {
                log::debug!("Failed to show alert: {:?}", e);
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        log::info!("{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::Cell;

    #[test]
    fn test_parse_selection() {
        assert_eq!(ProfileSelection::parse(""), ProfileSelection::Empty);
        assert_eq!(ProfileSelection::parse("  "), ProfileSelection::Empty);
        assert_eq!(ProfileSelection::parse("3"), ProfileSelection::Selected(3));
        assert_eq!(
            ProfileSelection::parse("tahu"),
            ProfileSelection::Invalid("tahu".to_string())
        );
    }

    #[test]
    fn test_empty_selection_makes_no_request() {
        let calls = Cell::new(0);

        let outcome = block_on(change_profile("", |_| {
            calls.set(calls.get() + 1);
            async { Ok(()) }
        }));

        assert_eq!(outcome, None);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_invalid_selection_makes_no_request() {
        let calls = Cell::new(0);

        let outcome = block_on(change_profile("abc", |_| {
            calls.set(calls.get() + 1);
            async { Ok(()) }
        }));

        assert_eq!(outcome, Some(ProfileChangeOutcome::Rejected));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_selected_profile_is_sent() {
        let sent = Cell::new(None);

        let outcome = block_on(change_profile("5", |id| {
            sent.set(Some(id));
            async { Ok(()) }
        }));

        assert_eq!(sent.get(), Some(5));
        assert_eq!(outcome, Some(ProfileChangeOutcome::Changed));
    }

    #[test]
    fn test_http_failure_is_rejected() {
        let outcome = block_on(change_profile("5", |_| async {
            Err(ApiError::Http { status: 404, message: "Not found".to_string() })
        }));

        assert_eq!(outcome, Some(ProfileChangeOutcome::Rejected));
    }

    #[test]
    fn test_transport_failure_is_connection_error() {
        let outcome = block_on(change_profile("5", |_| async {
            Err(ApiError::Network("failed to fetch".to_string()))
        }));

        assert_eq!(outcome, Some(ProfileChangeOutcome::ConnectionError));
        assert_ne!(
            ProfileChangeOutcome::ConnectionError.message(),
            ProfileChangeOutcome::Rejected.message()
        );
    }
}
