//! Navigation Component
//!
//! Header bar switching the single in-memory page token. No router, no
//! URL state: selecting a page swaps the rendered container.

use leptos::*;

use crate::state::global::{GlobalState, Page};

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <nav class="fixed top-0 left-0 right-0 z-50 glass border-b border-white/10">
            <div class="max-w-7xl mx-auto px-6 py-3">
                <div class="flex items-center justify-between">
                    // Brand, returns home
                    <button
                        on:click=move |_| state.page.set(Page::Home)
                        class="flex items-center gap-3 hover:opacity-80 transition-opacity"
                    >
                        <span class="text-2xl">"🌐"</span>
                        <div class="text-left">
                            <div class="text-lg font-bold text-gradient">"ZoneWatch"</div>
                            <div class="text-xs text-gray-400 tracking-wider">"RISK INTELLIGENCE"</div>
                        </div>
                    </button>

                    // Page links
                    <div class="hidden lg:flex items-center gap-1">
                        {Page::NAV
                            .into_iter()
                            .map(|page| view! { <NavLink page=page /> })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </nav>
    }
}

/// Individual page link
#[component]
fn NavLink(page: Page) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let is_active = create_memo(move |_| state.page.get() == page);

    view! {
        <button
            on:click=move |_| state.page.set(page)
            class=move || {
                let base = "px-3 py-2 rounded-lg text-sm transition-colors";
                if is_active.get() {
                    format!("{} bg-white/10 text-[#00d4ff]", base)
                } else {
                    format!("{} text-gray-400 hover:text-white hover:bg-white/5", base)
                }
            }
        >
            {page.label()}
        </button>
    }
}
