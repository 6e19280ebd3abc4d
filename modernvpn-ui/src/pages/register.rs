//! Registration Page

use leptos::*;
use leptos_router::*;

use modernvpn::views::register::{self, NoticeKind, RegisterState};

use crate::shell::BrowserShell;
use crate::state::{use_app_context, SignalCell};

#[component]
pub fn Register() -> impl IntoView {
    let ctx = use_app_context();
    let shell = BrowserShell::new();
    let state = create_rw_signal(RegisterState::default());
    let cell = SignalCell::new(state);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let api = ctx.api.clone();
        let shell = shell.clone();
        spawn_local(async move {
            register::submit(&api, &cell, &shell).await;
        });
    };

    view! {
        <div class="max-w-md mx-auto bg-gray-800 rounded-xl p-8">
            <h1 class="text-2xl font-bold mb-6">"Create account"</h1>

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

                {move || state.with(|s| s.notice.clone()).map(|notice| {
                    let class = match notice.kind {
                        NoticeKind::Success => "text-green-400 text-sm",
                        NoticeKind::Error => "text-red-400 text-sm",
                    };
                    view! { <p class=class>{notice.text}</p> }
                })}

                <button
                    type="submit"
                    class="w-full px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
                >
                    "Register"
                </button>
            </form>

            <p class="text-gray-400 text-sm mt-6">
                "Already registered? "
                <A href="/" class="text-primary-400 hover:underline">"Login"</A>
            </p>
        </div>
    }
}
