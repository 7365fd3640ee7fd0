//! Reports & Insights Page
//!
//! Downloadable report metadata and AI-generated intelligence summaries.
//! Display only; generation happens server-side.

use leptos::*;

use crate::api;
use crate::api::models::{Insight, Report};
use crate::components::{LoadFailed, LoadingScreen};
use crate::state::global::GlobalState;
use crate::state::remote::{use_mount_guard, Remote};

#[derive(Clone, PartialEq)]
struct ReportsData {
    reports: Vec<Report>,
    insights: Vec<Insight>,
}

/// Reports page component
#[component]
pub fn Reports() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let (data, set_data) = create_signal(Remote::<ReportsData>::Loading);
    let guard = use_mount_guard();

    let load = move || {
        set_data.set(Remote::Loading);
        let guard = guard.clone();
        spawn_local(async move {
            let (reports, insights) =
                futures_util::join!(api::fetch_reports(), api::fetch_insights());
            if !guard.live() {
                return;
            }
            match reports.and_then(|reports| insights.map(|insights| ReportsData {
                reports,
                insights,
            })) {
                Ok(loaded) => {
                    set_data.set(Remote::Ready(loaded));
                    state.mark_refreshed();
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to load reports: {}", e).into());
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
                <h1 class="text-gradient text-3xl font-bold mb-2">"Reports & Insights"</h1>
                <p class="text-gray-400 text-lg">
                    "Downloadable analytics and AI-generated intelligence summaries"
                </p>
            </div>

            {move || match data.get() {
                Remote::Loading => {
                    view! { <LoadingScreen message="Loading Reports..." /> }.into_view()
                }
                Remote::Failed(message) => {
                    let retry = retry.clone();
                    view! { <LoadFailed message=message on_retry=retry /> }.into_view()
                }
                Remote::Ready(loaded) => view! {
                    <div>
                        // Report cards
                        <div class="grid grid-cols-1 md:grid-cols-2 gap-6 mb-12">
                            {loaded
                                .reports
                                .into_iter()
                                .map(|report| view! { <ReportCard report=report /> })
                                .collect_view()}
                        </div>

                        // AI insights
                        <div class="mb-6">
                            <h3 class="text-white font-semibold mb-1">"AI Intelligence Summaries"</h3>
                            <p class="text-sm text-gray-400">
                                "Model-generated findings across monitored zones"
                            </p>
                        </div>
                        <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                            {loaded
                                .insights
                                .into_iter()
                                .map(|insight| view! { <InsightCard insight=insight /> })
                                .collect_view()}
                        </div>
                    </div>
                }.into_view(),
            }}
        </div>
    }
}

/// Metadata card for one downloadable report
#[component]
fn ReportCard(report: Report) -> impl IntoView {
    view! {
        <div class="glass-card hover:border-[#00d4ff]/30 transition-all">
            <div class="flex items-start justify-between mb-4">
                <div>
                    <h4 class="text-white font-semibold mb-1">{report.title}</h4>
                    <div class="text-sm text-gray-400">{report.kind} " · " {report.date}</div>
                </div>
                <span class="glass px-3 py-1 rounded-full text-xs text-[#00ff87] font-semibold">
                    {report.status}
                </span>
            </div>

            <div class="flex items-center gap-4 text-xs text-gray-400 mb-4">
                <span>{report.pages} " pages"</span>
                <span>{report.size}</span>
            </div>

            <div class="space-y-1 mb-4">
                {report
                    .highlights
                    .into_iter()
                    .map(|highlight| view! {
                        <div class="flex items-start gap-2 text-sm text-gray-300">
                            <span class="text-[#00d4ff]">"•"</span>
                            <span>{highlight}</span>
                        </div>
                    })
                    .collect_view()}
            </div>

            <button class="w-full glass-card py-2 text-sm text-[#00d4ff] font-semibold hover:glow-cyan transition-all">
                "Download"
            </button>
        </div>
    }
}

/// Severity-accented insight card
#[component]
fn InsightCard(insight: Insight) -> impl IntoView {
    let level = insight.severity;

    view! {
        <div class=format!("glass-card border-2 {} {}", level.border_class(), level.glow_class())>
            <div class="flex items-center justify-between mb-2">
                <h4 class="text-white font-semibold">{insight.title}</h4>
                <span class=format!("text-xs font-semibold uppercase {}", level.text_class())>
                    {level.label()}
                </span>
            </div>
            <div class="text-sm text-gray-400 mb-3">{insight.zone}</div>
            <p class="text-gray-300 leading-relaxed mb-4">{insight.insight}</p>

            <div class="flex items-center justify-between text-xs text-gray-400 mb-2">
                <span>"Confidence"</span>
                <span>{insight.confidence} "%"</span>
            </div>
            <div class="w-full h-1.5 bg-white/10 rounded-full overflow-hidden">
                <div
                    class="h-full"
                    style=format!(
                        "width: {}%; background-color: {}",
                        insight.confidence.min(100),
                        level.accent(),
                    )
                />
            </div>
        </div>
    }
}
