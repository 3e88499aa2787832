use leptos::*;
use leptos_router::*;

use crate::components::{Login, MainView};
use crate::config::{provide_app_config, AppConfig, MAIN_ROUTE};
use crate::state::provide_session_context;

/// Main application component with routing
#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // Provide configuration and session context at the app root
    provide_app_config(config);
    provide_session_context();

    view! {
        <Router>
            <Routes>
                <Route path="/" view=Login />
                <Route path=MAIN_ROUTE view=MainView />
                <Route path="/*any" view=|| view! { <Redirect path="/" /> } />
            </Routes>
        </Router>
    }
}
