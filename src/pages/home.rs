//! Home Page
//!
//! Hero section with headline figures and entry points, followed by the
//! analytics overview fed from the analytics endpoints.

use leptos::*;

use crate::api;
use crate::api::models::{AccuracyPoint, RiskTrend, SystemStatus, ZoneActivity};
use crate::components::{
    BarChart, BarItem, LineChart, LoadFailed, LoadingScreen, Series, StackedAreaChart, StatCard,
};
use crate::state::global::{GlobalState, Page};
use crate::state::remote::{use_mount_guard, Remote};

#[derive(Clone, PartialEq)]
struct AnalyticsData {
    trend: Vec<RiskTrend>,
    accuracy: Vec<AccuracyPoint>,
    activity: Vec<ZoneActivity>,
    status: SystemStatus,
}

/// Home page component
#[component]
pub fn Home() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class="max-w-7xl mx-auto px-6 py-12">
            // Hero
            <div class="text-center mb-16">
                <h1 class="text-gradient text-5xl font-bold mb-4">
                    "AI-Powered Environmental Risk Intelligence"
                </h1>
                <p class="text-gray-400 text-lg max-w-2xl mx-auto mb-8">
                    "Zone-level predictions for seismic, storm, drought and flooding risk, "
                    "with transparent model reasoning and historical validation."
                </p>
                <div class="flex items-center justify-center gap-4 flex-wrap">
                    <button
                        on:click=move |_| state.page.set(Page::Map)
                        class="glass-card px-6 py-3 border-2 border-[#00d4ff]/50 text-[#00d4ff] font-semibold hover:glow-cyan transition-all"
                    >
                        "Open Risk Dashboard"
                    </button>
                    <button
                        on:click=move |_| state.page.set(Page::Forecasting)
                        class="glass-card px-6 py-3 text-gray-300 font-semibold hover:text-white transition-all"
                    >
                        "View Forecasts"
                    </button>
                </div>
            </div>

            // Headline figures
            <div class="grid grid-cols-1 md:grid-cols-3 gap-6 mb-16">
                <StatCard
                    label="Active Predictions"
                    value="247"
                    accent="#00d4ff"
                    detail="+12% this week"
                />
                <StatCard
                    label="High-Risk Zones"
                    value="23"
                    accent="#ff3366"
                    detail="Requires attention"
                />
                <StatCard
                    label="Avg. Confidence"
                    value="87%"
                    accent="#00ff87"
                    detail="Prediction accuracy"
                />
            </div>

            <AnalyticsOverview />
        </div>
    }
}

/// Analytics section: trend, accuracy, activity and system status
#[component]
fn AnalyticsOverview() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let (data, set_data) = create_signal(Remote::<AnalyticsData>::Loading);
    let guard = use_mount_guard();

    let load = move || {
        set_data.set(Remote::Loading);
        let guard = guard.clone();
        spawn_local(async move {
            let (trend, accuracy, activity, status) = futures_util::join!(
                api::fetch_risk_trend(),
                api::fetch_prediction_accuracy(),
                api::fetch_zone_activity(),
                api::fetch_system_status()
            );
            if !guard.live() {
                return;
            }
            match (trend, accuracy, activity, status) {
                (Ok(trend), Ok(accuracy), Ok(activity), Ok(status)) => {
                    set_data.set(Remote::Ready(AnalyticsData {
                        trend,
                        accuracy,
                        activity,
                        status,
                    }));
                    state.mark_refreshed();
                }
                (Err(e), _, _, _) | (_, Err(e), _, _) | (_, _, Err(e), _) | (_, _, _, Err(e)) => {
                    web_sys::console::error_1(
                        &format!("Failed to load analytics data: {}", e).into()
                    );
                    set_data.set(Remote::Failed(e));
                }
            }
        });
    };
    let retry = load.clone();
    create_effect(move |_| load());

    view! {
        <div>
            <div class="mb-6">
                <h2 class="text-white text-xl font-semibold mb-1">"Prediction Analytics"</h2>
                <p class="text-sm text-gray-400">"Model performance and zone activity overview"</p>
            </div>

            {move || match data.get() {
                Remote::Loading => {
                    view! { <LoadingScreen message="Loading Analytics..." /> }.into_view()
                }
                Remote::Failed(message) => {
                    let retry = retry.clone();
                    view! { <LoadFailed message=message on_retry=retry /> }.into_view()
                }
                Remote::Ready(analytics) => {
                    view! { <AnalyticsLoaded analytics=analytics /> }.into_view()
                }
            }}
        </div>
    }
}

#[component]
fn AnalyticsLoaded(analytics: AnalyticsData) -> impl IntoView {
    let trend_labels: Vec<String> = analytics.trend.iter().map(|t| t.month.clone()).collect();
    let trend_series = vec![
        Series::line(
            "Safe",
            "#00ff87",
            analytics.trend.iter().map(|t| t.safe as f64).collect(),
        ),
        Series::line(
            "Moderate",
            "#ffb800",
            analytics.trend.iter().map(|t| t.moderate as f64).collect(),
        ),
        Series::line(
            "High Risk",
            "#ff3366",
            analytics.trend.iter().map(|t| t.high as f64).collect(),
        ),
    ];

    let accuracy_labels: Vec<String> = analytics.accuracy.iter().map(|a| a.week.clone()).collect();
    let accuracy_series = vec![Series::area(
        "Accuracy %",
        "#00d4ff",
        analytics.accuracy.iter().map(|a| a.accuracy as f64).collect(),
    )];

    let activity_bars: Vec<BarItem> = analytics
        .activity
        .iter()
        .map(|z| BarItem {
            label: z.zone.clone(),
            value: z.incidents as f64,
            color: "#4d88ff".to_string(),
        })
        .collect();

    let status = analytics.status;
    let status_accent = if status.status == "operational" {
        "#00ff87"
    } else {
        "#ffb800"
    };

    view! {
        <div>
            // System status tiles
            <div class="grid grid-cols-1 md:grid-cols-4 gap-4 mb-8">
                <StatCard
                    label="Model Accuracy"
                    value=format!("{:.1}%", status.model_accuracy)
                    accent="#00d4ff"
                />
                <StatCard
                    label="Predictions / Hour"
                    value=status.predictions_per_hour.to_string()
                    accent="#4d88ff"
                />
                <StatCard
                    label="Avg Response Time"
                    value=status.avg_response_time.clone()
                    accent="#ffb800"
                />
                <StatCard
                    label="System Status"
                    value=status.status.clone()
                    accent=status_accent
                />
            </div>

            // Charts
            <div class="glass-card mb-8">
                <h3 class="text-white font-semibold mb-6">"Risk Classification Trend"</h3>
                <StackedAreaChart labels=trend_labels series=trend_series height=300 />
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                <div class="glass-card">
                    <h3 class="text-white font-semibold mb-6">"Prediction Accuracy"</h3>
                    <LineChart labels=accuracy_labels series=accuracy_series height=280 />
                </div>
                <div class="glass-card">
                    <h3 class="text-white font-semibold mb-6">"Zone Activity"</h3>
                    <BarChart items=activity_bars />
                </div>
            </div>
        </div>
    }
}
