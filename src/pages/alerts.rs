//! Alert Center Page
//!
//! Client-held alert feed with severity filtering and dismissal. The
//! list lives only in page state: dismissing removes the entry locally
//! and navigation resets the feed.

use leptos::*;

use crate::api::models::{Alert, Severity};

fn sample_alerts() -> Vec<Alert> {
    vec![
        Alert {
            id: "a1".into(),
            zone: "Pacific Northwest".into(),
            severity: Severity::Critical,
            message: "Seismic activity detected. Earthquake probability 94% within 48-72 hours."
                .into(),
            timestamp: "2 min ago".into(),
            confidence: 94,
        },
        Alert {
            id: "a2".into(),
            zone: "Caribbean Basin".into(),
            severity: Severity::Critical,
            message: "Hurricane formation confirmed. Category 3-4 expected within 24-48 hours."
                .into(),
            timestamp: "5 min ago".into(),
            confidence: 91,
        },
        Alert {
            id: "a3".into(),
            zone: "Arctic Circle".into(),
            severity: Severity::Warning,
            message: "Temperature anomaly detected. Ice melting accelerating beyond forecast."
                .into(),
            timestamp: "18 min ago".into(),
            confidence: 82,
        },
        Alert {
            id: "a4".into(),
            zone: "Australian Outback".into(),
            severity: Severity::Warning,
            message: "Extreme drought conditions. Wildfire risk elevated in next 72-96 hours."
                .into(),
            timestamp: "32 min ago".into(),
            confidence: 76,
        },
        Alert {
            id: "a5".into(),
            zone: "Southeast Asia Coastal".into(),
            severity: Severity::Info,
            message: "Monsoon pattern shift observed. Moderate flooding risk in 5-7 days.".into(),
            timestamp: "1 hour ago".into(),
            confidence: 78,
        },
    ]
}

/// Visible subset for the active filter: the full list for `None`, else
/// the alerts whose severity matches exactly.
fn visible_alerts(alerts: &[Alert], filter: Option<Severity>) -> Vec<Alert> {
    match filter {
        None => alerts.to_vec(),
        Some(severity) => alerts
            .iter()
            .filter(|a| a.severity == severity)
            .cloned()
            .collect(),
    }
}

fn severity_count(alerts: &[Alert], severity: Severity) -> usize {
    alerts.iter().filter(|a| a.severity == severity).count()
}

/// Remove the alert with `id`, if present, keeping the order of the rest.
fn dismiss_alert(alerts: &mut Vec<Alert>, id: &str) {
    if let Some(pos) = alerts.iter().position(|a| a.id == id) {
        alerts.remove(pos);
    }
}

/// Alert center page component
#[component]
pub fn Alerts() -> impl IntoView {
    let alerts = create_rw_signal(sample_alerts());
    let filter = create_rw_signal(None::<Severity>);

    view! {
        <div class="max-w-7xl mx-auto px-6 py-12">
            // Page header
            <div class="mb-12">
                <h1 class="text-gradient-risk text-3xl font-bold mb-2">"Alert Center"</h1>
                <p class="text-gray-400 text-lg">
                    "Real-time notifications for emerging threats and risk escalation"
                </p>
            </div>

            // Statistics, recomputed on every feed mutation
            {move || {
                let list = alerts.get();
                let critical = severity_count(&list, Severity::Critical);
                let warning = severity_count(&list, Severity::Warning);
                view! {
                    <div class="grid grid-cols-1 md:grid-cols-4 gap-6 mb-12">
                        <div class="glass-card border-2 border-[#ff3366]/30 glow-high-risk">
                            <div class="text-sm text-gray-400 mb-2">"Critical Alerts"</div>
                            <div class="text-3xl font-bold text-white mb-1">{critical}</div>
                            <div class="text-xs text-[#ff3366] font-semibold uppercase">
                                "Immediate Action Required"
                            </div>
                        </div>
                        <div class="glass-card border-2 border-[#ffb800]/30 glow-moderate">
                            <div class="text-sm text-gray-400 mb-2">"Warnings"</div>
                            <div class="text-3xl font-bold text-white mb-1">{warning}</div>
                            <div class="text-xs text-[#ffb800]">"Monitoring Required"</div>
                        </div>
                        <div class="glass-card">
                            <div class="text-sm text-gray-400 mb-2">"Avg Response"</div>
                            <div class="text-3xl font-bold text-white mb-1">"1.8m"</div>
                            <div class="text-xs text-[#00d4ff]">"Alert to Action Time"</div>
                        </div>
                        <div class="glass-card">
                            <div class="text-sm text-gray-400 mb-2">"Active Alerts"</div>
                            <div class="text-3xl font-bold text-white mb-1">{list.len()}</div>
                            <div class="text-xs text-gray-400">"Current Notifications"</div>
                        </div>
                    </div>
                }
            }}

            // Filter tabs
            <div class="flex gap-4 mb-8 flex-wrap">
                <FilterTab target=None alerts=alerts filter=filter />
                <FilterTab target=Some(Severity::Critical) alerts=alerts filter=filter />
                <FilterTab target=Some(Severity::Warning) alerts=alerts filter=filter />
                <FilterTab target=Some(Severity::Info) alerts=alerts filter=filter />
            </div>

            // Alert list
            <div class="space-y-4">
                {move || {
                    let visible = visible_alerts(&alerts.get(), filter.get());
                    if visible.is_empty() {
                        let scope = filter
                            .get()
                            .map(|s| format!("No {} alerts at this time", s.label()))
                            .unwrap_or_else(|| "No alerts at this time".to_string());
                        view! {
                            <div class="glass-card text-center py-12">
                                <p class="text-gray-400">{scope}</p>
                            </div>
                        }.into_view()
                    } else {
                        visible
                            .into_iter()
                            .map(|alert| view! { <AlertCard alert=alert alerts=alerts /> })
                            .collect_view()
                    }
                }}
            </div>
        </div>
    }
}

/// One filter tab with its live count
#[component]
fn FilterTab(
    target: Option<Severity>,
    alerts: RwSignal<Vec<Alert>>,
    filter: RwSignal<Option<Severity>>,
) -> impl IntoView {
    let label = move || match target {
        None => format!("All Alerts ({})", alerts.get().len()),
        Some(Severity::Info) => "Info".to_string(),
        Some(severity) => {
            let count = severity_count(&alerts.get(), severity);
            let mut name = severity.label().to_string();
            if let Some(first) = name.get_mut(0..1) {
                first.make_ascii_uppercase();
            }
            format!("{} ({})", name, count)
        }
    };

    let active_accent = match target {
        None | Some(Severity::Info) => "border-[#00d4ff]/50 glow-cyan text-[#00d4ff]",
        Some(Severity::Critical) => "border-[#ff3366]/50 glow-high-risk text-[#ff3366]",
        Some(Severity::Warning) => "border-[#ffb800]/50 glow-moderate text-[#ffb800]",
        Some(Severity::Unknown) => "border-white/50 text-white",
    };

    view! {
        <button
            on:click=move |_| filter.set(target)
            class=move || {
                let base = "glass-card px-6 py-3 text-sm font-semibold transition-all";
                if filter.get() == target {
                    format!("{} border-2 {}", base, active_accent)
                } else {
                    format!("{} text-gray-400 hover:text-white", base)
                }
            }
        >
            {label}
        </button>
    }
}

/// One alert entry with its dismiss control
#[component]
fn AlertCard(alert: Alert, alerts: RwSignal<Vec<Alert>>) -> impl IntoView {
    let severity = alert.severity;
    let id = alert.id.clone();

    view! {
        <div class=format!(
            "glass-card border-2 {} {} relative overflow-hidden",
            severity.border_class(),
            severity.glow_class(),
        )>
            // Severity indicator bar
            <div
                class="absolute left-0 top-0 bottom-0 w-1"
                style=format!(
                    "background: linear-gradient(to bottom, {}, transparent)",
                    severity.accent(),
                )
            />

            <div class="pl-4">
                <div class="flex items-start justify-between gap-4 mb-2">
                    <div class="flex items-center gap-3">
                        <h4 class="text-white font-semibold">{alert.zone.clone()}</h4>
                        <span class=format!(
                            "px-3 py-1 rounded-full text-xs font-semibold uppercase {}",
                            severity.text_class(),
                        )>
                            {severity.label()}
                        </span>
                    </div>
                    <button
                        on:click=move |_| alerts.update(|list| dismiss_alert(list, &id))
                        class="text-gray-400 hover:text-white transition-colors p-1 hover:bg-white/10 rounded"
                    >
                        "✕"
                    </button>
                </div>

                <p class="text-gray-300 mb-3 leading-relaxed">{alert.message.clone()}</p>

                <div class="flex items-center gap-6 text-sm text-gray-400">
                    <span>{alert.timestamp.clone()}</span>
                    <span>"Zone: " {alert.zone.clone()}</span>
                    <span>
                        "Confidence: "
                        <span class=severity.text_class()>{alert.confidence} "%"</span>
                    </span>
                </div>

                // Confidence bar
                <div class="mt-3 w-full h-1.5 bg-white/10 rounded-full overflow-hidden">
                    <div
                        class="h-full"
                        style=format!(
                            "width: {}%; background-color: {}",
                            alert.confidence,
                            severity.accent(),
                        )
                    />
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alert(id: &str, severity: Severity) -> Alert {
        Alert {
            id: id.into(),
            zone: "Test Zone".into(),
            severity,
            message: "message".into(),
            timestamp: "now".into(),
            confidence: 80,
        }
    }

    #[test]
    fn all_filter_returns_full_list() {
        let list = sample_alerts();
        let visible = visible_alerts(&list, None);
        assert_eq!(visible.len(), list.len());
        assert_eq!(visible, list);
    }

    #[test]
    fn severity_filter_keeps_exact_matches_only() {
        let list = vec![
            alert("a", Severity::Critical),
            alert("b", Severity::Critical),
            alert("c", Severity::Warning),
            alert("d", Severity::Info),
        ];

        let critical = visible_alerts(&list, Some(Severity::Critical));
        assert_eq!(critical.len(), 2);
        assert!(critical.iter().all(|a| a.severity == Severity::Critical));
        assert!(critical.len() <= list.len());

        // Tab label for this scenario reads "Critical (2)".
        let count = severity_count(&list, Severity::Critical);
        assert_eq!(format!("Critical ({})", count), "Critical (2)");
    }

    #[test]
    fn dismiss_removes_exactly_one_and_keeps_order() {
        let mut list = vec![
            alert("a", Severity::Critical),
            alert("b", Severity::Warning),
            alert("c", Severity::Info),
        ];

        dismiss_alert(&mut list, "b");
        let ids: Vec<&str> = list.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn dismissing_unknown_id_is_a_noop() {
        let mut list = vec![alert("a", Severity::Critical)];
        dismiss_alert(&mut list, "zzz");
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn counts_track_dismissals() {
        let mut list = vec![
            alert("a", Severity::Critical),
            alert("b", Severity::Critical),
            alert("c", Severity::Warning),
        ];
        assert_eq!(severity_count(&list, Severity::Critical), 2);

        dismiss_alert(&mut list, "a");
        assert_eq!(severity_count(&list, Severity::Critical), 1);
        assert_eq!(severity_count(&list, Severity::Warning), 1);
    }

    #[test]
    fn sample_feed_severities() {
        let list = sample_alerts();
        assert_eq!(severity_count(&list, Severity::Critical), 2);
        assert_eq!(severity_count(&list, Severity::Warning), 2);
        assert_eq!(severity_count(&list, Severity::Info), 1);
    }
}
