//! Explainability Page
//!
//! Why the model predicts what it predicts: feature importances, per-zone
//! factor breakdowns and aggregate quality metrics.

use leptos::*;

use crate::api;
use crate::api::models::{FeatureImportance, ModelMetric, PredictionBreakdown};
use crate::components::{BarChart, BarItem, LoadFailed, LoadingScreen, RadarChart, Series};
use crate::state::global::GlobalState;
use crate::state::remote::{use_mount_guard, Remote};

const BREAKDOWN_COLORS: [&str; 3] = ["#ff3366", "#00d4ff", "#ffb800"];

#[derive(Clone, PartialEq)]
struct ExplainData {
    features: Vec<FeatureImportance>,
    breakdowns: Vec<PredictionBreakdown>,
    metrics: Vec<ModelMetric>,
}

/// Explainability page component
#[component]
pub fn Explainability() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let (data, set_data) = create_signal(Remote::<ExplainData>::Loading);
    let guard = use_mount_guard();

    let load = move || {
        set_data.set(Remote::Loading);
        let guard = guard.clone();
        spawn_local(async move {
            let (features, breakdowns, metrics) = futures_util::join!(
                api::fetch_feature_importance(),
                api::fetch_prediction_breakdown(),
                api::fetch_model_metrics()
            );
            if !guard.live() {
                return;
            }
            match (features, breakdowns, metrics) {
                (Ok(features), Ok(breakdowns), Ok(metrics)) => {
                    set_data.set(Remote::Ready(ExplainData {
                        features,
                        breakdowns,
                        metrics,
                    }));
                    state.mark_refreshed();
                }
                (Err(e), _, _) | (_, Err(e), _) | (_, _, Err(e)) => {
                    web_sys::console::error_1(
                        &format!("Failed to load explainability data: {}", e).into()
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
                <h1 class="text-gradient text-3xl font-bold mb-2">"Explainable AI Insights"</h1>
                <p class="text-gray-400 text-lg">
                    "Transparency into model reasoning and feature contributions"
                </p>
            </div>

            {move || match data.get() {
                Remote::Loading => {
                    view! { <LoadingScreen message="Loading Explainability Data..." /> }.into_view()
                }
                Remote::Failed(message) => {
                    let retry = retry.clone();
                    view! { <LoadFailed message=message on_retry=retry /> }.into_view()
                }
                Remote::Ready(explain) => view! { <ExplainLoaded explain=explain /> }.into_view(),
            }}
        </div>
    }
}

#[component]
fn ExplainLoaded(explain: ExplainData) -> impl IntoView {
    let feature_bars: Vec<BarItem> = explain
        .features
        .iter()
        .map(|f| BarItem {
            label: f.feature.clone(),
            value: f.importance as f64,
            color: f.color.clone(),
        })
        .collect();

    let radar_axes: Vec<String> = explain
        .breakdowns
        .first()
        .map(|b| b.factors.iter().map(|f| f.name.clone()).collect())
        .unwrap_or_default();
    let radar_series: Vec<Series> = explain
        .breakdowns
        .iter()
        .enumerate()
        .map(|(i, breakdown)| {
            Series::line(
                breakdown.zone.clone(),
                BREAKDOWN_COLORS[i % BREAKDOWN_COLORS.len()],
                breakdown.factors.iter().map(|f| f.value as f64).collect(),
            )
        })
        .collect();

    view! {
        <div>
            // Feature importance
            <div class="glass-card mb-12">
                <div class="mb-6">
                    <h3 class="text-white font-semibold mb-1">"Global Feature Importance"</h3>
                    <p class="text-sm text-gray-400">
                        "Relative weight of each input feature across all predictions"
                    </p>
                </div>
                <BarChart items=feature_bars />
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6 mb-12">
                // Per-zone breakdown radar
                <div class="glass-card">
                    <div class="mb-6">
                        <h3 class="text-white font-semibold mb-1">"Prediction Breakdown"</h3>
                        <p class="text-sm text-gray-400">"Factor contribution per zone"</p>
                    </div>
                    <RadarChart axes=radar_axes series=radar_series height=340 />
                </div>

                // Breakdown confidence cards
                <div class="space-y-4">
                    {explain
                        .breakdowns
                        .iter()
                        .cloned()
                        .map(|breakdown| view! {
                            <div class="glass-card">
                                <div class="flex items-center justify-between mb-3">
                                    <h4 class="text-white font-semibold">{breakdown.zone.clone()}</h4>
                                    <span class="text-[#00d4ff] font-semibold">
                                        {breakdown.confidence} "% confidence"
                                    </span>
                                </div>
                                <div class="space-y-2">
                                    {breakdown
                                        .factors
                                        .into_iter()
                                        .map(|factor| view! {
                                            <div>
                                                <div class="flex justify-between text-xs text-gray-400 mb-1">
                                                    <span>{factor.name}</span>
                                                    <span>{factor.value}</span>
                                                </div>
                                                <div class="w-full h-1.5 bg-white/10 rounded-full overflow-hidden">
                                                    <div
                                                        class="h-full bg-[#00d4ff]"
                                                        style=format!("width: {}%", factor.value.min(100))
                                                    />
                                                </div>
                                            </div>
                                        })
                                        .collect_view()}
                                </div>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>

            // Model quality metrics
            <div class="mb-6">
                <h3 class="text-white font-semibold mb-1">"Model Performance Metrics"</h3>
                <p class="text-sm text-gray-400">"Aggregate quality over the evaluation window"</p>
            </div>
            <div class="grid grid-cols-1 md:grid-cols-4 gap-4">
                {explain
                    .metrics
                    .into_iter()
                    .map(|metric| view! {
                        <div class="glass-card text-center">
                            <div class="text-sm text-gray-400 mb-2">{metric.metric}</div>
                            <div class="text-3xl font-bold text-[#00d4ff]">
                                {format!("{:.1}%", metric.score)}
                            </div>
                        </div>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
