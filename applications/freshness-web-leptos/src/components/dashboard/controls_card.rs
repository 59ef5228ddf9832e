use leptos::*;

use crate::api::ApiClient;
use crate::commands::{change_profile, export_csv, notify_user, toggle_power};
use crate::state::{use_dashboard_state, PowerState};

/// Power switch, profile selection and CSV export
#[component]
pub fn ControlsCard(client: ApiClient) -> impl IntoView {
    let state = use_dashboard_state();
    let power = move || PowerState { is_on: state.power_on.get() };

    // No optimistic update; the next poll rewrites the switch if the device disagrees
    let client_toggle = client.clone();
    let on_toggle = move |ev| {
        state.record_switch(event_target_checked(&ev));
        let client = client_toggle.clone();
        spawn_local(async move { toggle_power(&client).await });
    };

    let client_profile = client.clone();
    let apply_profile = create_action(move |selection: &String| {
        let selection = selection.clone();
        let client = client_profile.clone();
        async move {
            let outcome =
                change_profile(&selection, |id| async move { client.set_profile(id).await })
                    .await;
            if let Some(outcome) = outcome {
                notify_user(outcome.message());
            }
        }
    });

    let on_apply = move |_| apply_profile.dispatch(state.selected_profile.get_untracked());
    let on_export = move |_| export_csv(&client);

    view! {
        <div class="card controls-card">
            <h3>"Controls"</h3>

            <div class="setting-item">
                <span class="setting-label">"Power"</span>
                <label class="switch">
                    <input
                        type="checkbox"
                        id="powerSwitch"
                        prop:checked=move || state.switch_checked.get()
                        on:change=on_toggle
                    />
                    <span
                        id="powerLabel"
                        class=move || power().label_class()
                    >
                        {move || power().label()}
                    </span>
                </label>
            </div>

            <div class="setting-item">
                <span class="setting-label">"Food profile"</span>
                <div class="setting-value-controls">
                    <select
                        id="profileSelect"
                        prop:value=move || state.selected_profile.get()
                        on:change=move |ev| state.selected_profile.set(event_target_value(&ev))
                    >
                        <For
                            each=move || state.profiles.get()
                            key=|profile| profile.id
                            children=move |profile| {
                                view! {
                                    <option value=profile.id.to_string()>{profile.name}</option>
                                }
                            }
                        />
                    </select>
                    <button
                        class="adjust-button"
                        on:click=on_apply
                        disabled=move || apply_profile.pending().get()
                    >
                        "Apply"
                    </button>
                </div>
            </div>

            <div class="setting-item">
                <span class="setting-label">"Report"</span>
                <button class="refresh-button" on:click=on_export>
                    "Download CSV"
                </button>
            </div>
        </div>
    }
}
