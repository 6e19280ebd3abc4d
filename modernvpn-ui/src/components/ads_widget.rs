//! Ads Widget
//!
//! Country selector and sponsored ad cards. Hovering a card records an
//! impression, clicking it records a click and opens the ad.

use leptos::*;

use modernvpn::api::{Ad, Country};
use modernvpn::remote_list::ListSource;
use modernvpn::views::ads::{self, AdsState};

use crate::components::loading::ListSkeleton;
use crate::shell::BrowserShell;
use crate::state::{use_app_context, SignalCell};

#[component]
pub fn AdsWidget() -> impl IntoView {
    let ctx = use_app_context();
    let state = create_rw_signal(AdsState::default());
    let cell = SignalCell::new(state);

    // Fetch ads for the default country on mount
    let api_for_effect = ctx.api.clone();
    create_effect(move |_| {
        let api = api_for_effect.clone();
        spawn_local(async move {
            ads::load_ads(&api, &cell).await;
        });
    });

    let api = ctx.api.clone();
    let on_country = move |ev: ev::Event| {
        let Ok(country) = event_target_value(&ev).parse::<Country>() else {
            return;
        };
        let api = api.clone();
        spawn_local(async move {
            ads::select_country(&api, &cell, country).await;
        });
    };

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <div class="flex items-center justify-between mb-4">
                <h2 class="text-xl font-semibold">"Sponsored"</h2>
                <select
                    class="bg-gray-700 rounded-lg px-3 py-2"
                    on:change=on_country
                    prop:value=move || state.with(|s| s.country.code().to_string())
                >
                    {Country::ALL.into_iter().map(|c| view! {
                        <option value=c.code()>{c.label()}</option>
                    }).collect_view()}
                </select>
            </div>

            {move || {
                let s = state.get();
                match s.placeholder() {
                    Some(text) if s.loading => view! {
                        <div>
                            <p class="text-gray-400 text-sm mb-3">{text}</p>
                            <ListSkeleton />
                        </div>
                    }.into_view(),
                    Some(text) => view! {
                        <p class="text-gray-400 text-sm">{text}</p>
                    }.into_view(),
                    None => {
                        let country = s.country;
                        let sample = s.source == ListSource::Fallback;
                        view! {
                            <div class="space-y-3">
                                {s.ads.into_iter().map(|ad| view! {
                                    <AdCard ad=ad country=country />
                                }).collect_view()}
                            </div>
                            {sample.then(|| view! {
                                <p class="text-gray-500 text-xs mt-3">"Showing sample ads"</p>
                            })}
                        }.into_view()
                    }
                }
            }}
        </section>
    }
}

#[component]
fn AdCard(ad: Ad, country: Country) -> impl IntoView {
    let ctx = use_app_context();
    let shell = BrowserShell::new();

    let on_enter = {
        let (api, shell, ad) = (ctx.api.clone(), shell.clone(), ad.clone());
        move |_| ads::impression(&api, &shell, &ad, country)
    };
    let on_click = {
        let (api, ad) = (ctx.api.clone(), ad.clone());
        move |_| ads::click(&api, &shell, &ad, country)
    };

    view! {
        <div
            class="bg-gray-700 hover:bg-gray-600 rounded-lg p-4 cursor-pointer transition-colors"
            on:mouseenter=on_enter
            on:click=on_click
        >
            <div class="flex items-center justify-between">
                <h3 class="font-semibold">{ad.title}</h3>
                {ad.payout_rate.map(|rate| view! {
                    <span class="text-green-400 text-sm">{rate}</span>
                })}
            </div>
            {ad.description.map(|d| view! {
                <p class="text-gray-300 text-sm mt-1">{d}</p>
            })}
        </div>
    }
}
