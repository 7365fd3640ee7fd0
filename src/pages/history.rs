//! Historical Playback Page
//!
//! Time-travel over the risk timeline: a cursor into the chronologically
//! ordered period sequence drives a prefix-only trend chart, with slider
//! seeking, step controls and timed autoplay.

use gloo_timers::callback::Interval;
use leptos::*;

use crate::api;
use crate::api::models::{HistoricalEvent, HistoricalPeriod};
use crate::components::{LineChart, LoadFailed, LoadingScreen, Series};
use crate::state::global::GlobalState;
use crate::state::playback::PlaybackCursor;
use crate::state::remote::{use_mount_guard, Remote};

/// Autoplay advance period.
const PLAYBACK_TICK_MS: u32 = 1200;

#[derive(Clone, PartialEq)]
struct HistoryData {
    periods: Vec<HistoricalPeriod>,
    events: Vec<HistoricalEvent>,
}

/// History page component
#[component]
pub fn History() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let (data, set_data) = create_signal(Remote::<HistoryData>::Loading);
    let guard = use_mount_guard();

    let load = move || {
        set_data.set(Remote::Loading);
        let guard = guard.clone();
        spawn_local(async move {
            let (periods, events) = futures_util::join!(
                api::fetch_historical_data(),
                api::fetch_historical_events()
            );
            if !guard.live() {
                return;
            }
            match periods.and_then(|periods| events.map(|events| HistoryData { periods, events }))
            {
                Ok(history) => {
                    set_data.set(Remote::Ready(history));
                    state.mark_refreshed();
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Failed to load historical data: {}", e).into()
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
                <h1 class="text-gradient text-3xl font-bold mb-2">"Historical Risk Playback"</h1>
                <p class="text-gray-400 text-lg">
                    "Time-travel analytics and pattern evolution analysis"
                </p>
            </div>

            {move || match data.get() {
                Remote::Loading => {
                    view! { <LoadingScreen message="Loading Historical Data..." /> }.into_view()
                }
                Remote::Failed(message) => {
                    let retry = retry.clone();
                    view! { <LoadFailed message=message on_retry=retry /> }.into_view()
                }
                Remote::Ready(history) => {
                    view! { <HistoryLoaded periods=history.periods events=history.events /> }
                        .into_view()
                }
            }}
        </div>
    }
}

/// Loaded view owning the cursor and autoplay state
#[component]
fn HistoryLoaded(periods: Vec<HistoricalPeriod>, events: Vec<HistoricalEvent>) -> impl IntoView {
    if periods.is_empty() {
        return view! {
            <div class="glass-card text-center py-12">
                <p class="text-gray-400">"No historical data recorded"</p>
            </div>
        }
        .into_view();
    }

    let len = periods.len();
    let first_date = periods.first().map(|p| p.date.clone()).unwrap_or_default();
    let last_date = periods.last().map(|p| p.date.clone()).unwrap_or_default();

    // Cursor starts on the most recent period.
    let cursor = create_rw_signal(PlaybackCursor::at_latest(len));
    let (playing, set_playing) = create_signal(false);
    let periods = store_value(periods);

    // Autoplay: advance once per tick while playing, pause at the end.
    // Replacing the stored interval drops and cancels the previous one.
    let ticker: StoredValue<Option<Interval>> = store_value(None);
    create_effect(move |_| {
        if playing.get() {
            let interval = Interval::new(PLAYBACK_TICK_MS, move || {
                cursor.update(|c| c.step_forward());
                if cursor.with_untracked(|c| c.at_end()) {
                    set_playing.set(false);
                }
            });
            ticker.set_value(Some(interval));
        } else {
            ticker.set_value(None);
        }
    });
    on_cleanup(move || ticker.set_value(None));

    let chart_labels = Signal::derive(move || {
        let end = cursor.get().visible_len();
        periods.with_value(|p| p[..end].iter().map(|d| d.date.clone()).collect::<Vec<_>>())
    });
    let chart_series = Signal::derive(move || {
        let end = cursor.get().visible_len();
        periods.with_value(|p| {
            vec![
                Series::area(
                    "Risk Index",
                    "#ff3366",
                    p[..end].iter().map(|d| d.risk as f64).collect(),
                ),
                Series::area(
                    "Incidents",
                    "#ffb800",
                    p[..end].iter().map(|d| d.incidents as f64).collect(),
                ),
            ]
        })
    });

    view! {
        <div>
            // Playback controls
            <div class="glass-card mb-12 border-2 border-[#00d4ff]/30 glow-cyan">
                <div class="flex items-center justify-between mb-6">
                    <div>
                        <h3 class="text-white font-semibold mb-1">"Time Period Selection"</h3>
                        <p class="text-sm text-gray-400">"Navigate through historical risk data"</p>
                    </div>
                    <div class="glass rounded-full px-4 py-2">
                        <span class="text-[#00d4ff] font-semibold">
                            {move || periods.with_value(|p| p[cursor.get().index()].date.clone())}
                        </span>
                    </div>
                </div>

                // Timeline slider
                <div class="mb-6">
                    <input
                        type="range"
                        min="0"
                        max=(len - 1).to_string()
                        prop:value=move || cursor.get().index().to_string()
                        on:input=move |ev| {
                            if let Ok(raw) = event_target_value(&ev).parse::<f64>() {
                                cursor.update(|c| c.seek(raw));
                            }
                        }
                        class="w-full h-2 bg-white/10 rounded-lg appearance-none cursor-pointer"
                    />
                    <div class="flex justify-between text-xs text-gray-400 mt-2">
                        <span>{first_date}</span>
                        <span>{last_date}</span>
                    </div>
                </div>

                // Playback buttons
                <div class="flex items-center justify-center gap-4">
                    <button
                        on:click=move |_| cursor.update(|c| c.jump_first())
                        disabled=move || cursor.get().at_start()
                        class="glass-card p-3 hover:border-[#00d4ff]/50 transition-all disabled:opacity-40"
                    >
                        "⏮"
                    </button>
                    <button
                        on:click=move |_| cursor.update(|c| c.step_back())
                        disabled=move || cursor.get().at_start()
                        class="glass-card p-3 hover:border-[#00d4ff]/50 transition-all disabled:opacity-40"
                    >
                        "◀"
                    </button>
                    <button
                        on:click=move |_| set_playing.update(|p| *p = !*p)
                        class="glass-card p-4 border-2 border-[#00d4ff]/50 hover:glow-cyan transition-all"
                    >
                        {move || if playing.get() { "⏸" } else { "▶" }}
                    </button>
                    <button
                        on:click=move |_| cursor.update(|c| c.step_forward())
                        disabled=move || cursor.get().at_end()
                        class="glass-card p-3 hover:border-[#00d4ff]/50 transition-all disabled:opacity-40"
                    >
                        "▶▶"
                    </button>
                    <button
                        on:click=move |_| cursor.update(|c| c.jump_last())
                        disabled=move || cursor.get().at_end()
                        class="glass-card p-3 hover:border-[#00d4ff]/50 transition-all disabled:opacity-40"
                    >
                        "⏭"
                    </button>
                </div>
            </div>

            // Current period stats
            {move || {
                let c = cursor.get();
                periods.with_value(|p| {
                    let period = &p[c.index()];
                    view! {
                        <div class="grid grid-cols-1 md:grid-cols-3 gap-6 mb-12">
                            <div class="glass-card border-2 border-[#ff3366]/30">
                                <div class="text-sm text-gray-400 mb-2">"Period Risk Index"</div>
                                <div class="text-4xl font-bold text-[#ff3366] mb-3">{period.risk}</div>
                                <div class="w-full h-2 bg-white/10 rounded-full overflow-hidden">
                                    <div
                                        class="h-full bg-[#ff3366]"
                                        style=format!("width: {}%", period.risk.min(100))
                                    />
                                </div>
                            </div>
                            <div class="glass-card border-2 border-[#ffb800]/30">
                                <div class="text-sm text-gray-400 mb-2">"Incidents Recorded"</div>
                                <div class="text-4xl font-bold text-[#ffb800] mb-3">{period.incidents}</div>
                                <div class="text-xs text-gray-400">"Events during this period"</div>
                            </div>
                            <div class="glass-card border-2 border-[#00d4ff]/30">
                                <div class="text-sm text-gray-400 mb-2">"Time Period"</div>
                                <div class="text-4xl font-bold text-[#00d4ff] mb-3">
                                    {format!("{}/{}", c.index() + 1, c.len())}
                                </div>
                                <div class="text-xs text-gray-400">{period.date.clone()}</div>
                            </div>
                        </div>
                    }
                })
            }}

            // Trend chart over the visible prefix
            <div class="glass-card mb-12">
                <h3 class="text-white font-semibold mb-6">"Risk Evolution Visualization"</h3>
                <LineChart labels=chart_labels series=chart_series height=380 />
            </div>

            // Event validation log
            <div class="glass-card">
                <h3 class="text-white font-semibold mb-6">"Historical Event Validation"</h3>
                <div class="space-y-4">
                    {events
                        .into_iter()
                        .map(|event| {
                            let level = event.risk_level;
                            view! {
                                <div class=format!(
                                    "glass-card border-l-4 {}",
                                    level.border_class(),
                                )>
                                    <div class="flex items-start justify-between gap-4 flex-wrap">
                                        <div class="flex-1 min-w-[250px]">
                                            <div class="text-sm text-gray-400 mb-2">{event.date}</div>
                                            <h4 class="text-white font-semibold mb-1">{event.event}</h4>
                                            <p class="text-sm text-gray-400">{event.zone}</p>
                                        </div>
                                        <div class="flex gap-4">
                                            <div>
                                                <div class="text-xs text-gray-400 mb-1">"Prediction"</div>
                                                <div class=format!(
                                                    "text-sm font-semibold {}",
                                                    level.text_class(),
                                                )>
                                                    {event.actual_vs_predicted}
                                                </div>
                                            </div>
                                            <div>
                                                <div class="text-xs text-gray-400 mb-1">"Impact"</div>
                                                <div class="text-sm font-semibold text-white">
                                                    {event.impact}
                                                </div>
                                            </div>
                                        </div>
                                        <div class="glass px-3 py-1 rounded-full">
                                            <span class=format!(
                                                "text-xs font-semibold uppercase {}",
                                                level.text_class(),
                                            )>
                                                {level.label()}
                                            </span>
                                        </div>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            // Model performance summary
            <div class="glass-card mt-12 border-2 border-[#00ff87]/30 glow-safe">
                <h4 class="text-white font-semibold mb-2">"Historical Prediction Performance"</h4>
                <p class="text-gray-300 leading-relaxed mb-4">
                    "Analysis of the recorded window shows model accuracy of "
                    <span class="text-[#00ff87] font-semibold">"87.3%"</span>
                    " in predicting high-risk events, with all major incidents flagged ahead of time."
                </p>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                    <div class="p-3 glass rounded-lg">
                        <div class="text-[#00ff87] font-semibold mb-1">"100%"</div>
                        <div class="text-xs text-gray-400">"Major events predicted"</div>
                    </div>
                    <div class="p-3 glass rounded-lg">
                        <div class="text-[#00d4ff] font-semibold mb-1">"4.2%"</div>
                        <div class="text-xs text-gray-400">"False positive rate"</div>
                    </div>
                    <div class="p-3 glass rounded-lg">
                        <div class="text-[#ffb800] font-semibold mb-1">"72hrs"</div>
                        <div class="text-xs text-gray-400">"Avg. warning time"</div>
                    </div>
                </div>
            </div>
        </div>
    }
    .into_view()
}
