//! Zone Comparison Page
//!
//! Side-by-side profiles of the compared zones: summary cards, a factor
//! radar and the weekly risk index trend.

use leptos::*;

use crate::api;
use crate::api::models::{ComparisonTrend, ZoneComparison};
use crate::components::{LineChart, LoadFailed, LoadingScreen, RadarChart, Series};
use crate::state::global::GlobalState;
use crate::state::remote::{use_mount_guard, Remote};

/// Series palette for compared zones, by position.
const ZONE_COLORS: [&str; 3] = ["#ff3366", "#ffb800", "#00d4ff"];

#[derive(Clone, PartialEq)]
struct ComparisonData {
    zones: Vec<ZoneComparison>,
    trend: Vec<ComparisonTrend>,
}

/// Comparison page component
#[component]
pub fn Compare() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let (data, set_data) = create_signal(Remote::<ComparisonData>::Loading);
    let guard = use_mount_guard();

    let load = move || {
        set_data.set(Remote::Loading);
        let guard = guard.clone();
        spawn_local(async move {
            let (zones, trend) = futures_util::join!(
                api::fetch_zone_comparison(),
                api::fetch_comparison_trend()
            );
            if !guard.live() {
                return;
            }
            match zones.and_then(|zones| trend.map(|trend| ComparisonData { zones, trend })) {
                Ok(comparison) => {
                    set_data.set(Remote::Ready(comparison));
                    state.mark_refreshed();
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Failed to load comparison data: {}", e).into()
                    );
                    set_data.set(Remote::Failed(e));
                }
            }
        });
    };
    let retry = load.clone();
    create_effect(move |_| load());

    view! {
        <div class="max-w-7xl mx-auto px-6 py-12">
            // Page header
            <div class="mb-12">
                <h1 class="text-gradient text-3xl font-bold mb-2">"Zone Comparison Interface"</h1>
                <p class="text-gray-400 text-lg">
                    "Multi-zone risk analysis and comparative intelligence"
                </p>
            </div>

            {move || match data.get() {
                Remote::Loading => {
                    view! { <LoadingScreen message="Loading Comparison Data..." /> }.into_view()
                }
                Remote::Failed(message) => {
                    let retry = retry.clone();
                    view! { <LoadFailed message=message on_retry=retry /> }.into_view()
                }
                Remote::Ready(comparison) => {
                    view! { <ComparisonLoaded comparison=comparison /> }.into_view()
                }
            }}
        </div>
    }
}

#[component]
fn ComparisonLoaded(comparison: ComparisonData) -> impl IntoView {
    // Radar axes come from the first zone's factor names; every zone's
    // factors arrive in the same order.
    let radar_axes: Vec<String> = comparison
        .zones
        .first()
        .map(|z| z.factors.iter().map(|f| f.metric.clone()).collect())
        .unwrap_or_default();
    let radar_series: Vec<Series> = comparison
        .zones
        .iter()
        .enumerate()
        .map(|(i, zone)| {
            Series::line(
                zone.zone.clone(),
                ZONE_COLORS[i % ZONE_COLORS.len()],
                zone.factors.iter().map(|f| f.value as f64).collect(),
            )
        })
        .collect();

    let trend_labels: Vec<String> = comparison.trend.iter().map(|t| t.week.clone()).collect();
    let trend_series = vec![
        Series::line(
            "Pacific Northwest",
            ZONE_COLORS[0],
            comparison.trend.iter().map(|t| t.pnw as f64).collect(),
        ),
        Series::line(
            "Caribbean Basin",
            ZONE_COLORS[1],
            comparison.trend.iter().map(|t| t.caribbean as f64).collect(),
        ),
        Series::line(
            "Arctic Circle",
            ZONE_COLORS[2],
            comparison.trend.iter().map(|t| t.arctic as f64).collect(),
        ),
    ];

    view! {
        <div>
            // Selected zones
            <div class="glass-card mb-12">
                <h3 class="text-white font-semibold mb-4">"Selected Zones for Comparison"</h3>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                    {comparison
                        .zones
                        .iter()
                        .cloned()
                        .map(|zone| {
                            let level = zone.risk_level;
                            view! {
                                <div class=format!(
                                    "glass-card border-2 {} {}",
                                    level.border_class(),
                                    level.glow_class(),
                                )>
                                    <div class="flex items-center justify-between mb-2">
                                        <span
                                            class="text-xs font-semibold uppercase px-2 py-1 rounded"
                                            style=format!("color: {}", level.accent())
                                        >
                                            {level.label()}
                                        </span>
                                    </div>
                                    <h4 class="text-white mb-1">{zone.zone.clone()}</h4>
                                    <div class="text-xs text-gray-400">
                                        "Risk Index: "
                                        <span class="text-white font-semibold">{zone.risk_index}</span>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            // Detailed profiles
            <div class="grid grid-cols-1 lg:grid-cols-3 gap-6 mb-12">
                {comparison
                    .zones
                    .iter()
                    .cloned()
                    .map(|zone| view! { <ZoneProfile zone=zone /> })
                    .collect_view()}
            </div>

            // Factor radar
            <div class="glass-card mb-12">
                <h3 class="text-white font-semibold mb-6">"Risk Factor Analysis"</h3>
                <RadarChart axes=radar_axes series=radar_series height=360 />
            </div>

            // Weekly trend
            <div class="glass-card">
                <h3 class="text-white font-semibold mb-6">"Risk Escalation Trend"</h3>
                <LineChart labels=trend_labels series=trend_series height=320 />
            </div>
        </div>
    }
}

/// Full comparison card for one zone
#[component]
fn ZoneProfile(zone: ZoneComparison) -> impl IntoView {
    let level = zone.risk_level;

    view! {
        <div class=format!("glass-card border-2 {}", level.border_class())>
            <div class="flex items-center justify-between mb-4">
                <h4 class="text-white font-semibold">{zone.zone.clone()}</h4>
                <span class=format!("text-xs font-semibold uppercase {}", level.text_class())>
                    {level.label()}
                </span>
            </div>

            <div class="space-y-3 text-sm">
                <div class="flex justify-between">
                    <span class="text-gray-400">"Risk Index"</span>
                    <span class="text-white font-semibold">{zone.risk_index}</span>
                </div>
                <div class="flex justify-between">
                    <span class="text-gray-400">"Confidence"</span>
                    <span class="text-white font-semibold">{zone.confidence} "%"</span>
                </div>
                <div class="flex justify-between">
                    <span class="text-gray-400">"Population"</span>
                    <span class="text-white font-semibold">{zone.population.clone()}</span>
                </div>
                <div class="flex justify-between">
                    <span class="text-gray-400">"30-Day Trend"</span>
                    <span class=format!("font-semibold {}", level.text_class())>
                        {zone.trend.clone()}
                    </span>
                </div>
                <div class="flex justify-between">
                    <span class="text-gray-400">"Escalation Speed"</span>
                    <span class="text-white font-semibold">{zone.escalation_speed.clone()}</span>
                </div>
            </div>

            // Factor bars
            <div class="mt-4 pt-4 border-t border-white/10 space-y-2">
                {zone
                    .factors
                    .into_iter()
                    .map(|factor| view! {
                        <div>
                            <div class="flex justify-between text-xs text-gray-400 mb-1">
                                <span>{factor.metric}</span>
                                <span>{factor.value}</span>
                            </div>
                            <div class="w-full h-1.5 bg-white/10 rounded-full overflow-hidden">
                                <div
                                    class="h-full"
                                    style=format!(
                                        "width: {}%; background-color: {}",
                                        factor.value.min(100),
                                        level.accent(),
                                    )
                                />
                            </div>
                        </div>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
