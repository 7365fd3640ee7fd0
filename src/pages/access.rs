//! Access Control Page
//!
//! Role cards, the static permission matrix and the recent activity log.

use leptos::*;

use crate::api;
use crate::api::models::{ActivityEntry, Role};
use crate::components::{LoadFailed, LoadingScreen};
use crate::state::global::GlobalState;
use crate::state::remote::{use_mount_guard, Remote};

/// Feature access per role: (feature, admin, analyst, viewer).
const PERMISSION_MATRIX: [(&str, bool, bool, bool); 10] = [
    ("Risk Dashboard", true, true, true),
    ("Time Forecasting", true, true, true),
    ("Explainability AI", true, true, false),
    ("Geo-Risk Map", true, true, true),
    ("Zone Comparison", true, true, false),
    ("Alert System", true, true, true),
    ("Historical Playback", true, true, false),
    ("Reports & Export", true, true, false),
    ("User Management", true, false, false),
    ("System Settings", true, false, false),
];

#[derive(Clone, PartialEq)]
struct AccessData {
    roles: Vec<Role>,
    activity: Vec<ActivityEntry>,
}

/// Access control page component
#[component]
pub fn Access() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let (data, set_data) = create_signal(Remote::<AccessData>::Loading);
    let guard = use_mount_guard();

    let load = move || {
        set_data.set(Remote::Loading);
        let guard = guard.clone();
        spawn_local(async move {
            let (roles, activity) =
                futures_util::join!(api::fetch_roles(), api::fetch_activity_log());
            if !guard.live() {
                return;
            }
            match roles.and_then(|roles| activity.map(|activity| AccessData { roles, activity }))
            {
                Ok(loaded) => {
                    set_data.set(Remote::Ready(loaded));
                    state.mark_refreshed();
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Failed to load access control data: {}", e).into()
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
                <h1 class="text-gradient text-3xl font-bold mb-2">"Role-Based Access Control"</h1>
                <p class="text-gray-400 text-lg">
                    "Enterprise-grade security and permission management"
                </p>
            </div>

            {move || match data.get() {
                Remote::Loading => {
                    view! { <LoadingScreen message="Loading Access Control Data..." /> }.into_view()
                }
                Remote::Failed(message) => {
                    let retry = retry.clone();
                    view! { <LoadFailed message=message on_retry=retry /> }.into_view()
                }
                Remote::Ready(loaded) => view! {
                    <div>
                        // Role cards
                        <div class="grid grid-cols-1 md:grid-cols-3 gap-6 mb-12">
                            {loaded
                                .roles
                                .into_iter()
                                .map(|role| view! { <RoleCard role=role /> })
                                .collect_view()}
                        </div>

                        <PermissionMatrix />

                        // Activity log
                        <div class="glass-card">
                            <h3 class="text-white font-semibold mb-6">"Recent Activity"</h3>
                            <div class="space-y-3">
                                {loaded
                                    .activity
                                    .into_iter()
                                    .map(|entry| view! {
                                        <div class="flex items-center justify-between py-2 border-b border-white/5 last:border-0">
                                            <div>
                                                <span class="text-white text-sm">{entry.user}</span>
                                                <span class="text-gray-400 text-sm ml-3">{entry.action}</span>
                                            </div>
                                            <div class="flex items-center gap-4 text-xs text-gray-400">
                                                <span class="glass px-2 py-1 rounded-full">{entry.role}</span>
                                                <span>{entry.time}</span>
                                            </div>
                                        </div>
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>
                }.into_view(),
            }}
        </div>
    }
}

/// One role with its permission list
#[component]
fn RoleCard(role: Role) -> impl IntoView {
    let Role {
        name,
        level,
        users,
        permissions,
        color,
    } = role;
    let badge_style = format!("color: {}; background: {}20", color, color);
    let icon_style = format!("background: {}20", color);
    let border_style = format!("border-color: {}30", color);

    view! {
        <div class="glass-card border-2" style=border_style>
            <div class="flex items-center justify-between mb-6">
                <div
                    class="w-14 h-14 rounded-xl flex items-center justify-center text-2xl"
                    style=icon_style
                >
                    "👤"
                </div>
                <div class="text-right">
                    <div class="text-3xl font-bold text-white">{users}</div>
                    <div class="text-xs text-gray-400">"Active Users"</div>
                </div>
            </div>

            <div class="mb-6">
                <h3 class="text-white text-xl mb-2">{name}</h3>
                <span
                    class="text-xs font-semibold uppercase px-3 py-1 rounded-full"
                    style=badge_style
                >
                    {level} " access"
                </span>
            </div>

            <div>
                <div class="text-sm text-gray-400 mb-3">"Permissions"</div>
                <div class="space-y-2">
                    {permissions
                        .into_iter()
                        .map(|permission| {
                            let check_style = format!("color: {}", color);
                            view! {
                                <div class="flex items-start gap-2 text-sm text-gray-300">
                                    <span style=check_style>"✓"</span>
                                    <span>{permission}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

/// Static feature-by-role capability table
#[component]
fn PermissionMatrix() -> impl IntoView {
    view! {
        <div class="glass-card mb-12 overflow-x-auto">
            <h3 class="text-white font-semibold mb-6">"Permission Matrix"</h3>
            <table class="w-full text-sm">
                <thead>
                    <tr class="text-left text-gray-400 border-b border-white/10">
                        <th class="pb-3">"Feature"</th>
                        <th class="pb-3 text-center">"Administrator"</th>
                        <th class="pb-3 text-center">"Analyst"</th>
                        <th class="pb-3 text-center">"Viewer"</th>
                    </tr>
                </thead>
                <tbody>
                    {PERMISSION_MATRIX
                        .into_iter()
                        .map(|(feature, admin, analyst, viewer)| view! {
                            <tr class="border-b border-white/5 last:border-0">
                                <td class="py-3 text-gray-300">{feature}</td>
                                <td class="py-3 text-center">{check_mark(admin)}</td>
                                <td class="py-3 text-center">{check_mark(analyst)}</td>
                                <td class="py-3 text-center">{check_mark(viewer)}</td>
                            </tr>
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
}

fn check_mark(granted: bool) -> View {
    if granted {
        view! { <span class="text-[#00ff87]">"✓"</span> }.into_view()
    } else {
        view! { <span class="text-gray-600">"✗"</span> }.into_view()
    }
}
