//! Login Page

use leptos::*;
use leptos_router::*;

use modernvpn::views::login::{self, LoginState};

use crate::components::InlineLoading;
use crate::shell::BrowserShell;
use crate::state::{use_app_context, SignalCell};

#[component]
pub fn Login() -> impl IntoView {
    let ctx = use_app_context();
    let shell = BrowserShell::new();
    let state = create_rw_signal(LoginState::default());
    let cell = SignalCell::new(state);
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        set_submitting.set(true);

        let api = ctx.api.clone();
        let shell = shell.clone();
        spawn_local(async move {
            if let login::LoginOutcome::Rejected(message) = login::submit(&api, &cell, &shell).await {
                web_sys::console::warn_1(&format!("Login failed: {}", message).into());
            }
            let _ = set_submitting.try_set(false);
        });
    };

    view! {
        <div class="max-w-md mx-auto bg-gray-800 rounded-xl p-8">
            <h1 class="text-2xl font-bold mb-6">"Sign in"</h1>

            <form class="space-y-4" on:submit=on_submit>
                <input
                    type="email"
                    required=true
                    placeholder="Email"
                    class="w-full bg-gray-700 rounded-lg px-4 py-2"
                    prop:value=move || state.with(|s| s.email.clone())
                    on:input=move |ev| state.update(|s| s.email = event_target_value(&ev))
                />
                <input
                    type="password"
                    required=true
                    placeholder="Password"
                    class="w-full bg-gray-700 rounded-lg px-4 py-2"
                    prop:value=move || state.with(|s| s.password.clone())
                    on:input=move |ev| state.update(|s| s.password = event_target_value(&ev))
                />

                {move || state.with(|s| s.error.clone()).map(|error| view! {
                    <p class="text-red-400 text-sm">{error}</p>
                })}

                <button
                    type="submit"
                    class="w-full px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
                    disabled=move || submitting.get()
                >
                    {move || if submitting.get() {
                        view! { <InlineLoading /> }.into_view()
                    } else {
                        "Login".into_view()
                    }}
                </button>
            </form>

            <p class="text-gray-400 text-sm mt-6">
                "No account? "
                <A href="/register" class="text-primary-400 hover:underline">"Register"</A>
            </p>
        </div>
    }
}
