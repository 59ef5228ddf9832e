use leptos::*;

use crate::state::{use_dashboard_state, ReadingView};

/// FQI, sensor values, profile, estimate and status badge
#[component]
pub fn ReadingCards() -> impl IntoView {
    let state = use_dashboard_state();
    let field = move |f: fn(&ReadingView) -> String| Signal::derive(move || state.reading.with(f));

    let fqi = field(|r| r.fqi.clone());
    let status_text = field(|r| r.status_text.clone());
    let badge_class = field(|r| r.badge_class());
    let gas = field(|r| r.gas.clone());
    let temperature = field(|r| r.temperature.clone());
    let profile = field(|r| r.profile.clone());
    let estimate = field(|r| r.estimate.clone());

    view! {
        <div class="card reading-card">
            <h3>"Freshness"</h3>
            <div class="fqi-value" id="fqiValue">{move || fqi.get()}</div>
            <div class="subtitle">"FQI (0-100)"</div>
            <span id="statusBadge" class=move || badge_class.get()>
                {move || status_text.get()}
            </span>
        </div>

        <div class="card">
            <h3>"Sensors"</h3>
            <div class="value-grid">
                <ValueItem label="Gas" id="mqValue" value=gas />
                <ValueItem label="Temperature" id="tempValue" value=temperature />
                <ValueItem label="Profile" id="currentProfileName" value=profile />
                <ValueItem label="Estimated life" id="estTimeValue" value=estimate />
            </div>
        </div>
    }
}

#[component]
fn ValueItem(label: &'static str, id: &'static str, value: Signal<String>) -> impl IntoView {
    view! {
        <div class="value-item">
            <span class="value-label">{label}":"</span>
            <span class="value" id=id>{move || value.get()}</span>
        </div>
    }
}
