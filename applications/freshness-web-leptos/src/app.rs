use leptos::*;

use crate::components::layout::Layout;
use crate::components::Dashboard;
use crate::config::DashboardConfig;
use crate::state::provide_dashboard_state;

/// Main application component
#[component]
pub fn App(config: DashboardConfig) -> impl IntoView {
    // Provide config and shared state at the app root
    provide_context(config);
    provide_dashboard_state();

    view! {
        <Layout>
            <Dashboard />
        </Layout>
    }
}
