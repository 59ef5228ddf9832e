use leptos::*;

use crate::state::{use_dashboard_state, HistoryBody, HistoryRowView, HISTORY_COLUMNS};

/// Recent readings, fully replaced on every history poll
#[component]
pub fn HistoryTable() -> impl IntoView {
    let state = use_dashboard_state();

    view! {
        <div class="card history-card">
            <h3>"History"</h3>
            <div class="table-wrapper">
                <table class="history-table">
                    <thead>
                        <tr>
                            <th>"Time"</th>
                            <th>"Food"</th>
                            <th>"Gas (ppm)"</th>
                            <th>"Temp (°C)"</th>
                            <th>"FQI"</th>
                            <th>"Status"</th>
                            <th>"Estimated life"</th>
                        </tr>
                    </thead>
                    <tbody id="historyTableBody">
                        {move || state.history.with(render_body)}
                    </tbody>
                </table>
            </div>
        </div>
    }
}

fn render_body(body: &HistoryBody) -> View {
    match body {
        HistoryBody::Loading => view! {
            <tr>
                <td colspan=HISTORY_COLUMNS class="loading">"Loading..."</td>
            </tr>
        }
        .into_view(),
        HistoryBody::Placeholder { message, colspan } => view! {
            <tr>
                <td colspan={*colspan} class="no-data">{*message}</td>
            </tr>
        }
        .into_view(),
        HistoryBody::Rows(rows) => rows.iter().cloned().map(history_row).collect_view(),
    }
}

fn history_row(row: HistoryRowView) -> impl IntoView {
    let status_class = format!("badge {}", row.tier.badge_class());

    view! {
        <tr>
            <td>{row.timestamp}</td>
            <td><span class="badge bg-info text-dark">{row.food}</span></td>
            <td>{row.gas}</td>
            <td>{row.temperature}</td>
            <td><strong>{row.fqi}</strong></td>
            <td><span class=status_class>{row.status}</span></td>
            <td class="fw-bold text-primary">{row.estimate}</td>
        </tr>
    }
}
