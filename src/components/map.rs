//! Risk Map Component
//!
//! Abstract world-map panel with zone markers positioned by percent
//! coordinates. Hover shows a tooltip; clicking selects a zone for the
//! detail card. Marker data is a client-side sample set.

use leptos::*;

use crate::api::models::{MapPoint, MapZone, RiskLevel};

fn sample_zones() -> Vec<MapZone> {
    vec![
        MapZone {
            id: "z1".into(),
            name: "Pacific Northwest".into(),
            position: MapPoint { x: 15.0, y: 25.0 },
            risk_level: RiskLevel::High,
            confidence: 94,
            details: "Seismic activity detected".into(),
        },
        MapZone {
            id: "z2".into(),
            name: "Caribbean Basin".into(),
            position: MapPoint { x: 28.0, y: 45.0 },
            risk_level: RiskLevel::High,
            confidence: 91,
            details: "Hurricane formation probable".into(),
        },
        MapZone {
            id: "z3".into(),
            name: "Central Europe".into(),
            position: MapPoint { x: 52.0, y: 28.0 },
            risk_level: RiskLevel::Safe,
            confidence: 88,
            details: "Stable conditions".into(),
        },
        MapZone {
            id: "z4".into(),
            name: "Southeast Asia".into(),
            position: MapPoint { x: 75.0, y: 50.0 },
            risk_level: RiskLevel::Moderate,
            confidence: 78,
            details: "Coastal flooding risk".into(),
        },
        MapZone {
            id: "z5".into(),
            name: "Arctic Circle".into(),
            position: MapPoint { x: 50.0, y: 12.0 },
            risk_level: RiskLevel::Moderate,
            confidence: 82,
            details: "Temperature anomalies".into(),
        },
        MapZone {
            id: "z6".into(),
            name: "Australian Coast".into(),
            position: MapPoint { x: 82.0, y: 72.0 },
            risk_level: RiskLevel::Moderate,
            confidence: 76,
            details: "Drought conditions".into(),
        },
        MapZone {
            id: "z7".into(),
            name: "South America".into(),
            position: MapPoint { x: 30.0, y: 68.0 },
            risk_level: RiskLevel::Safe,
            confidence: 85,
            details: "Low risk levels".into(),
        },
        MapZone {
            id: "z8".into(),
            name: "North Africa".into(),
            position: MapPoint { x: 50.0, y: 45.0 },
            risk_level: RiskLevel::Safe,
            confidence: 89,
            details: "Normal climate patterns".into(),
        },
    ]
}

/// Interactive zone map with hover tooltips and a selection detail card
#[component]
pub fn RiskMap() -> impl IntoView {
    let zones = store_value(sample_zones());
    let (hovered, set_hovered) = create_signal(None::<String>);
    let (selected, set_selected) = create_signal(None::<MapZone>);

    view! {
        <div class="grid grid-cols-1 lg:grid-cols-3 gap-8">
            // Map panel
            <div class="lg:col-span-2 glass-card relative overflow-hidden" style="min-height: 480px">
                // Background grid
                <svg class="absolute inset-0 w-full h-full opacity-20">
                    <defs>
                        <pattern id="map-grid" width="40" height="40" patternUnits="userSpaceOnUse">
                            <path
                                d="M 40 0 L 0 0 0 40"
                                fill="none"
                                stroke="rgba(0, 212, 255, 0.2)"
                                stroke-width="0.5"
                            />
                        </pattern>
                    </defs>
                    <rect width="100%" height="100%" fill="url(#map-grid)" />
                </svg>

                // Zone markers
                {move || {
                    zones.with_value(|zones| {
                        zones
                            .iter()
                            .cloned()
                            .map(|zone| {
                                let enter_id = zone.id.clone();
                                let tooltip_id = zone.id.clone();
                                let zone_for_click = zone.clone();
                                let accent = zone.risk_level.accent();
                                let marker_style = format!(
                                    "left: {}%; top: {}%; transform: translate(-50%, -50%)",
                                    zone.position.x, zone.position.y,
                                );
                                let tip_name = zone.name.clone();
                                let tip_details = zone.details.clone();
                                let tip_level = zone.risk_level;
                                let tip_confidence = zone.confidence;

                                view! {
                                    <div
                                        class="absolute cursor-pointer"
                                        style=marker_style
                                        on:mouseenter=move |_| set_hovered.set(Some(enter_id.clone()))
                                        on:mouseleave=move |_| set_hovered.set(None)
                                        on:click=move |_| set_selected.set(Some(zone_for_click.clone()))
                                    >
                                        <div
                                            class="w-4 h-4 rounded-full pulse-glow"
                                            style=format!(
                                                "background-color: {}; box-shadow: 0 0 12px {}",
                                                accent, accent,
                                            )
                                        />
                                        // Hover tooltip
                                        {move || {
                                            if hovered.get().as_deref() == Some(tooltip_id.as_str()) {
                                                view! {
                                                    <div class="absolute left-5 top-0 z-10 glass-card px-3 py-2 w-48">
                                                        <div class="text-white text-sm font-semibold">{tip_name.clone()}</div>
                                                        <div class="text-xs text-gray-400">{tip_details.clone()}</div>
                                                        <div class=format!("text-xs mt-1 {}", tip_level.text_class())>
                                                            {format!("{} · {}%", tip_level.label(), tip_confidence)}
                                                        </div>
                                                    </div>
                                                }.into_view()
                                            } else {
                                                view! {}.into_view()
                                            }
                                        }}
                                    </div>
                                }
                            })
                            .collect_view()
                    })
                }}
            </div>

            // Detail column
            <div class="space-y-6">
                {move || {
                    match selected.get() {
                        Some(zone) => view! {
                            <div class=format!(
                                "glass-card border-2 {} {}",
                                zone.risk_level.border_class(),
                                zone.risk_level.glow_class(),
                            )>
                                <h4 class="text-white font-semibold mb-2">{zone.name.clone()}</h4>
                                <div class=format!(
                                    "text-xs font-semibold uppercase mb-3 {}",
                                    zone.risk_level.text_class(),
                                )>
                                    {zone.risk_level.label()} " risk"
                                </div>
                                <p class="text-sm text-gray-300 mb-4">{zone.details.clone()}</p>
                                <div class="flex items-center justify-between text-xs text-gray-400 mb-2">
                                    <span>"Prediction Confidence"</span>
                                    <span>{zone.confidence} "%"</span>
                                </div>
                                <div class="w-full h-1.5 bg-white/10 rounded-full overflow-hidden">
                                    <div
                                        class="h-full"
                                        style=format!(
                                            "width: {}%; background-color: {}",
                                            zone.confidence,
                                            zone.risk_level.accent(),
                                        )
                                    />
                                </div>
                            </div>
                        }.into_view(),
                        None => view! {
                            <div class="glass-card text-center py-8">
                                <p class="text-gray-400 text-sm">"Select a zone marker for details"</p>
                            </div>
                        }.into_view(),
                    }
                }}

                // Legend
                <div class="glass-card">
                    <div class="text-sm text-gray-400 mb-3">"Risk Levels"</div>
                    <div class="space-y-2">
                        {[RiskLevel::High, RiskLevel::Moderate, RiskLevel::Safe]
                            .into_iter()
                            .map(|level| view! {
                                <div class="flex items-center gap-2 text-sm">
                                    <span
                                        class="w-3 h-3 rounded-full"
                                        style=format!("background-color: {}", level.accent())
                                    />
                                    <span class="text-gray-300 capitalize">{level.label()}</span>
                                </div>
                            })
                            .collect_view()}
                    </div>
                </div>

                // Zone tally
                <div class="glass-card">
                    <div class="text-sm text-gray-400 mb-3">"Monitored Zones"</div>
                    {move || {
                        zones.with_value(|zones| {
                            let high = zones.iter().filter(|z| z.risk_level == RiskLevel::High).count();
                            let moderate = zones.iter().filter(|z| z.risk_level == RiskLevel::Moderate).count();
                            let safe = zones.iter().filter(|z| z.risk_level == RiskLevel::Safe).count();
                            view! {
                                <div class="grid grid-cols-3 gap-2 text-center">
                                    <div>
                                        <div class="text-xl font-bold text-[#ff3366]">{high}</div>
                                        <div class="text-xs text-gray-400">"High"</div>
                                    </div>
                                    <div>
                                        <div class="text-xl font-bold text-[#ffb800]">{moderate}</div>
                                        <div class="text-xs text-gray-400">"Moderate"</div>
                                    </div>
                                    <div>
                                        <div class="text-xl font-bold text-[#00ff87]">{safe}</div>
                                        <div class="text-xs text-gray-400">"Safe"</div>
                                    </div>
                                </div>
                            }
                        })
                    }}
                </div>
            </div>
        </div>
    }
}
