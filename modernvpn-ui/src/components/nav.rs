//! Header bar
//!
//! Brand on the left, route links on the right.

use leptos::*;
use leptos_router::*;

use modernvpn::views::Route;

#[component]
pub fn Nav() -> impl IntoView {
    let links = Route::NAV
        .into_iter()
        .map(|route| {
            view! {
                <A
                    href=route.path()
                    exact=true
                    class="px-3 py-2 rounded-md text-sm text-gray-300 hover:text-white"
                    active_class="text-white underline underline-offset-4"
                >
                    {route.nav_label()}
                </A>
            }
        })
        .collect_view();

    view! {
        <header class="bg-gray-800 border-b border-gray-700">
            <nav class="container mx-auto px-4 h-14 flex items-center justify-between">
                <span class="text-lg font-semibold tracking-wide">"ModernVPN"</span>
                <div class="flex items-center gap-2">{links}</div>
            </nav>
        </header>
    }
}
