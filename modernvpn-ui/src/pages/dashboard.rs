//! Dashboard Page
//!
//! Signed-in view: user greeting, server picker and connect, usage
//! reporting and the ads widget.

use leptos::*;

use modernvpn::remote_list::ListSource;
use modernvpn::views::dashboard::{self, DashboardState};

use crate::components::AdsWidget;
use crate::shell::BrowserShell;
use crate::state::{use_app_context, SignalCell};

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let ctx = use_app_context();
    let shell = BrowserShell::new();
    let state = create_rw_signal(DashboardState::default());
    let cell = SignalCell::new(state);

    // Fetch user and servers on mount
    let (api_for_effect, shell_for_effect) = (ctx.api.clone(), shell.clone());
    create_effect(move |_| {
        let (api, shell) = (api_for_effect.clone(), shell_for_effect.clone());
        spawn_local(async move {
            dashboard::mount(&api, &cell, &shell).await;
        });
    });

    let on_connect = {
        let (api, shell) = (ctx.api.clone(), shell.clone());
        move |_| {
            let (api, shell) = (api.clone(), shell.clone());
            spawn_local(async move {
                dashboard::connect(&api, &cell, &shell).await;
            });
        }
    };

    let on_usage = {
        let (api, shell) = (ctx.api.clone(), shell.clone());
        move |_| {
            let (api, shell) = (api.clone(), shell.clone());
            spawn_local(async move {
                dashboard::report_usage(&api, &cell, &shell).await;
            });
        }
    };

    let on_logout = {
        let session = ctx.api.session().clone();
        move |_| dashboard::logout(&session, &shell)
    };

    view! {
        <div class="space-y-8">
            // Page header
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Dashboard"</h1>
                    <p class="text-gray-400 mt-1">
                        {move || state.with(|s| s.welcome()).unwrap_or_default()}
                    </p>
                </div>
                <button
                    class="px-4 py-2 bg-gray-700 hover:bg-gray-600 rounded-lg transition-colors"
                    on:click=on_logout
                >
                    "Logout"
                </button>
            </div>

            <div class="grid md:grid-cols-2 gap-8">
                // Server picker
                <section class="bg-gray-800 rounded-xl p-6 space-y-4">
                    <h2 class="text-xl font-semibold">"Servers"</h2>

                    <select
                        class="w-full bg-gray-700 rounded-lg px-3 py-2"
                        on:change=move |ev| {
                            dashboard::select_server(&cell, &event_target_value(&ev));
                        }
                        prop:value=move || state.with(|s| s.selected_id().unwrap_or_default().to_string())
                    >
                        <option value="">"Choose a server"</option>
                        {move || state.with(|s| s.servers.clone()).into_iter().map(|server| {
                            let label = format!("{} ({}) - {}", server.region, server.ip, server.status);
                            view! { <option value=server.id>{label}</option> }
                        }).collect_view()}
                    </select>

                    {move || (state.with(|s| s.servers_source) == ListSource::Fallback).then(|| view! {
                        <p class="text-gray-500 text-xs">"Showing sample servers"</p>
                    })}

                    <div class="flex items-center justify-between">
                        <button
                            class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
                            disabled=move || !state.with(|s| s.can_connect())
                            on:click=on_connect
                        >
                            {move || state.with(|s| s.connect_label())}
                        </button>
                        <span class="text-sm text-gray-300">
                            "Status: " {move || state.with(|s| s.status.label())}
                        </span>
                    </div>
                </section>

                // Usage reporting
                <section class="bg-gray-800 rounded-xl p-6 space-y-4">
                    <h2 class="text-xl font-semibold">"Usage"</h2>
                    <input
                        type="number"
                        class="w-full bg-gray-700 rounded-lg px-4 py-2"
                        prop:value=move || state.with(|s| s.usage.to_string())
                        on:input=move |ev| {
                            if let Some(usage) = dashboard::parse_usage(&event_target_value(&ev)) {
                                state.update(|s| s.usage = usage);
                            }
                        }
                    />
                    <button
                        class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
                        on:click=on_usage
                    >
                        "Update usage"
                    </button>
                </section>
            </div>

            <AdsWidget />
        </div>
    }
}
