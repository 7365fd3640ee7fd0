//! Loading & Failure States
//!
//! The fixed textual placeholder shown while a page's fetches are in
//! flight, and the error panel with its retry action.

use leptos::*;

/// Full-page loading placeholder
#[component]
pub fn LoadingScreen(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="flex items-center justify-center h-[60vh]">
            <div class="text-[#00d4ff] text-2xl font-bold animate-pulse">{message}</div>
        </div>
    }
}

/// Failure panel with the fetch error and a retry button
#[component]
pub fn LoadFailed(
    #[prop(into)] message: String,
    on_retry: impl Fn() + 'static,
) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center h-[60vh] text-center">
            <div class="text-4xl mb-4">"⚠"</div>
            <h2 class="text-xl font-semibold text-white mb-2">"Failed to load data"</h2>
            <p class="text-gray-400 mb-6 max-w-md">{message}</p>
            <button
                on:click=move |_| on_retry()
                class="px-6 py-3 glass-card border-2 border-[#00d4ff]/50 text-[#00d4ff] font-semibold hover:glow-cyan transition-all"
            >
                "Retry"
            </button>
        </div>
    }
}
