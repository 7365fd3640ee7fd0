//! Stat Card Component
//!
//! Small accented tile for a single headline figure.

use leptos::*;

/// Headline figure tile
#[component]
pub fn StatCard(
    #[prop(into)] label: String,
    #[prop(into)] value: String,
    /// Accent color applied to the value
    #[prop(default = "#ffffff")]
    accent: &'static str,
    /// Optional line under the value
    #[prop(into, optional)]
    detail: Option<String>,
) -> impl IntoView {
    view! {
        <div class="glass-card">
            <div class="text-sm text-gray-400 mb-2">{label}</div>
            <div class="text-3xl font-bold mb-1" style=format!("color: {}", accent)>
                {value}
            </div>
            {detail.map(|d| view! { <div class="text-xs text-gray-400">{d}</div> })}
        </div>
    }
}
