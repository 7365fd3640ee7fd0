//! Forecasting Page
//!
//! Time-based risk projections: hourly 24-hour evolution, 3-day zone
//! classification outlook, 7-day risk index cards.

use leptos::*;

use crate::api;
use crate::api::models::{DailyOutlook, HourlyForecast, RiskLevel, WeeklyProjection};
use crate::components::{LineChart, LoadFailed, LoadingScreen, Series, StackedAreaChart};
use crate::state::global::GlobalState;
use crate::state::remote::{use_mount_guard, Remote};

#[derive(Clone, PartialEq)]
struct ForecastData {
    hourly: Vec<HourlyForecast>,
    outlook: Vec<DailyOutlook>,
    weekly: Vec<WeeklyProjection>,
}

/// Forecasting page component
#[component]
pub fn Forecasting() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let (data, set_data) = create_signal(Remote::<ForecastData>::Loading);
    let guard = use_mount_guard();

    let load = move || {
        set_data.set(Remote::Loading);
        let guard = guard.clone();
        spawn_local(async move {
            let (hourly, outlook, weekly) = futures_util::join!(
                api::fetch_forecast_24h(),
                api::fetch_forecast_3day(),
                api::fetch_forecast_7day()
            );
            if !guard.live() {
                return;
            }
            match (hourly, outlook, weekly) {
                (Ok(hourly), Ok(outlook), Ok(weekly)) => {
                    set_data.set(Remote::Ready(ForecastData {
                        hourly,
                        outlook,
                        weekly,
                    }));
                    state.mark_refreshed();
                }
                (Err(e), _, _) | (_, Err(e), _) | (_, _, Err(e)) => {
                    web_sys::console::error_1(
                        &format!("Failed to load forecasting data: {}", e).into()
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
                <h1 class="text-gradient text-3xl font-bold mb-2">"Time-Based Risk Forecasting"</h1>
                <p class="text-gray-400 text-lg">
                    "AI-powered temporal prediction models with confidence intervals"
                </p>
            </div>

            {move || match data.get() {
                Remote::Loading => {
                    view! { <LoadingScreen message="Loading Forecasting Data..." /> }.into_view()
                }
                Remote::Failed(message) => {
                    let retry = retry.clone();
                    view! { <LoadFailed message=message on_retry=retry /> }.into_view()
                }
                Remote::Ready(forecast) => view! { <ForecastLoaded forecast=forecast /> }.into_view(),
            }}
        </div>
    }
}

#[component]
fn ForecastLoaded(forecast: ForecastData) -> impl IntoView {
    let hourly_labels: Vec<String> = forecast.hourly.iter().map(|h| h.hour.clone()).collect();
    let hourly_series = vec![
        Series::line(
            "Risk Level",
            "#ff3366",
            forecast.hourly.iter().map(|h| h.risk as f64).collect(),
        ),
        Series::dashed(
            "Confidence %",
            "#00d4ff",
            forecast.hourly.iter().map(|h| h.confidence as f64).collect(),
        ),
    ];

    let outlook_labels: Vec<String> = forecast.outlook.iter().map(|d| d.day.clone()).collect();
    let outlook_series = vec![
        Series::line(
            "High Risk",
            "#ff3366",
            forecast.outlook.iter().map(|d| d.high as f64).collect(),
        ),
        Series::line(
            "Moderate",
            "#ffb800",
            forecast.outlook.iter().map(|d| d.moderate as f64).collect(),
        ),
        Series::line(
            "Safe",
            "#00ff87",
            forecast.outlook.iter().map(|d| d.safe as f64).collect(),
        ),
    ];

    view! {
        <div>
            // 24-hour forecast
            <div class="glass-card mb-12">
                <div class="mb-6">
                    <h3 class="text-white font-semibold mb-1">"Next 24-Hour Risk Evolution"</h3>
                    <p class="text-sm text-gray-400">"Real-time prediction with confidence intervals"</p>
                </div>
                <LineChart labels=hourly_labels series=hourly_series height=350 />
            </div>

            // 3-day distribution
            <div class="glass-card mb-12">
                <div class="mb-6">
                    <h3 class="text-white font-semibold mb-1">"3-Day Risk Distribution Trend"</h3>
                    <p class="text-sm text-gray-400">
                        "Zone classification evolution over short-term period"
                    </p>
                </div>
                <StackedAreaChart labels=outlook_labels series=outlook_series height=300 />
            </div>

            // 7-day projection cards
            <div class="mb-6">
                <h3 class="text-white font-semibold mb-1">"7-Day Risk Index Projection"</h3>
                <p class="text-sm text-gray-400">"Weekly forecast with trend analysis"</p>
            </div>
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-7 gap-4">
                {forecast
                    .weekly
                    .into_iter()
                    .map(|day| view! { <ProjectionCard day=day /> })
                    .collect_view()}
            </div>

            // Forecast summary
            <div class="glass-card mt-12 border-2 border-[#ff3366]/30 glow-high-risk">
                <h4 class="text-white font-semibold mb-2">"AI Forecast Analysis"</h4>
                <div class="space-y-2 text-gray-300">
                    <p>
                        <span class="text-[#ff3366]">"• "</span>
                        "Risk escalation expected to peak late in the week as the projected index crosses the high-risk threshold"
                    </p>
                    <p>
                        <span class="text-[#ffb800]">"• "</span>
                        "Moderate risk zones predicted to increase over the next 3 days"
                    </p>
                    <p>
                        <span class="text-[#00d4ff]">"• "</span>
                        "Model confidence remains high across all time horizons"
                    </p>
                </div>
            </div>
        </div>
    }
}

/// One day of the weekly projection, classified by its risk index
#[component]
fn ProjectionCard(day: WeeklyProjection) -> impl IntoView {
    let level = RiskLevel::from_index(day.risk_index);

    view! {
        <div class=format!(
            "glass-card border-2 {} {} text-center",
            level.border_class(),
            level.glow_class(),
        )>
            <div class="text-sm text-gray-400 mb-2">{day.day}</div>
            <div class=format!("text-3xl font-bold mb-2 {}", level.text_class())>
                {day.risk_index}
            </div>
            <div class="text-xs text-gray-400 mb-3">"Risk Index"</div>
            <div class="w-full h-1.5 bg-white/10 rounded-full overflow-hidden mb-2">
                <div
                    class="h-full"
                    style=format!(
                        "width: {}%; background-color: {}",
                        day.risk_index.min(100),
                        level.accent(),
                    )
                />
            </div>
            <div class=format!("text-xs font-semibold capitalize {}", level.text_class())>
                {day.trend}
            </div>
        </div>
    }
}
