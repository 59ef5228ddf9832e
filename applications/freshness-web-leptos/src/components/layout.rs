use leptos::*;

use crate::config::DashboardConfig;
use crate::state::use_dashboard_state;

/// Layout component with navbar and page content
#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="layout">
            <Navbar />
            <main class="main-content">
                {children()}
            </main>
        </div>
    }
}

/// Navbar with device name and connection indicator
#[component]
fn Navbar() -> impl IntoView {
    let device_id = use_context::<DashboardConfig>()
        .unwrap_or_default()
        .device_id;

    view! {
        <nav class="navbar">
            <div class="navbar-content">
                <h1 class="navbar-title">"Freshness Monitor"</h1>
                <span class="navbar-device">{device_id}</span>
                <div class="navbar-actions">
                    <LastUpdate />
                    <ConnectionIndicator />
                </div>
            </div>
        </nav>
    }
}

/// Connected / Standby / Disconnected indicator
#[component]
fn ConnectionIndicator() -> impl IntoView {
    let state = use_dashboard_state();

    view! {
        <span
            id="connectionStatus"
            class=move || state.connection.get().css_class()
        >
            {move || state.connection.get().label()}
        </span>
    }
}

/// Time the last reading was applied
#[component]
fn LastUpdate() -> impl IntoView {
    let state = use_dashboard_state();

    view! {
        <span class="last-update">
            {move || {
                state
                    .last_update
                    .get()
                    .map(|t| format!("Updated {}", t))
                    .unwrap_or_else(|| "--:--:--".to_string())
            }}
        </span>
    }
}
