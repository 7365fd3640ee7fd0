//! App Root Component
//!
//! Top-level controller: provides global state, switches the rendered
//! page container on the navigation token and renders the footer.

use leptos::*;

use crate::components::Nav;
use crate::pages::{
    Access, Alerts, Compare, Dashboard, Explainability, Forecasting, History, Home, Reports,
};
use crate::state::global::{provide_global_state, GlobalState, Page};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class="min-h-screen bg-[#0a0e1a] text-white flex flex-col">
            // Navigation header
            <Nav />

            // Selected page container. The page set is closed, so the
            // switch is exhaustive; there is no fallback route.
            <main class="flex-1 pt-20 pb-16">
                {move || match state.page.get() {
                    Page::Home => view! { <Home /> }.into_view(),
                    Page::Forecasting => view! { <Forecasting /> }.into_view(),
                    Page::Explainability => view! { <Explainability /> }.into_view(),
                    Page::Map => view! { <Dashboard /> }.into_view(),
                    Page::Compare => view! { <Compare /> }.into_view(),
                    Page::Alerts => view! { <Alerts /> }.into_view(),
                    Page::History => view! { <History /> }.into_view(),
                    Page::Reports => view! { <Reports /> }.into_view(),
                    Page::Access => view! { <Access /> }.into_view(),
                }}
            </main>

            <Footer />
        </div>
    }
}

/// Footer with the data refresh clock
#[component]
fn Footer() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <footer class="fixed bottom-0 left-0 right-0 glass border-t border-white/10 py-3 px-6">
            <div class="max-w-7xl mx-auto flex items-center justify-between text-sm">
                <div class="flex items-center gap-2 text-gray-400">
                    <span class="w-2 h-2 bg-[#00ff87] rounded-full pulse-glow" />
                    <span>"Monitoring active"</span>
                </div>

                <div class="text-gray-400">
                    {move || {
                        state.last_refresh.get()
                            .and_then(chrono::DateTime::from_timestamp_millis)
                            .map(|dt| format!("Data refreshed: {}", dt.format("%H:%M:%S")))
                            .unwrap_or_else(|| "Awaiting first load".to_string())
                    }}
                </div>
            </div>
        </footer>
    }
}
