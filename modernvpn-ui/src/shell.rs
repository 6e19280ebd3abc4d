//! Browser shell
//!
//! Routes in-app navigation through the router and everything else through
//! the window.

use futures_util::future::LocalBoxFuture;
use leptos::*;
use leptos_router::{use_navigate, NavigateOptions};
use std::rc::Rc;
use std::time::Duration;

use modernvpn::views::{Route, Shell};
use wasm_bindgen::JsValue;
use web_sys::Window;

/// New tabs get no `window.opener` and no referrer
const NEW_TAB_FEATURES: &str = "noopener,noreferrer";

#[derive(Clone)]
pub struct BrowserShell {
    navigate: Rc<dyn Fn(&str)>,
}

impl BrowserShell {
    /// Must be called under the `<Router>`
    pub fn new() -> Self {
        let navigate = use_navigate();
        Self {
            navigate: Rc::new(move |path: &str| navigate(path, NavigateOptions::default())),
        }
    }
}

impl Shell for BrowserShell {
    fn navigate(&self, route: Route) {
        (self.navigate)(route.path());
    }

    fn navigate_after(&self, route: Route, delay: Duration) {
        let navigate = Rc::clone(&self.navigate);
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        gloo_timers::callback::Timeout::new(millis, move || navigate(route.path())).forget();
    }

    fn reload_to(&self, route: Route) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(e) = window.location().set_href(route.path()) {
            web_sys::console::error_1(&e);
        }
    }

    fn alert(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.alert_with_message(message) {
                web_sys::console::error_1(&e);
            }
        }
    }

    fn open_in_new_tab(&self, url: &str) {
        if let Some(window) = web_sys::window() {
            if let Err(e) = open_detached(&window, url) {
                web_sys::console::error_1(&e);
            }
        }
    }

    fn detach(&self, task: LocalBoxFuture<'static, ()>) {
        spawn_local(task);
    }
}

/// Open `url` in a new tab with no handle back to this one
fn open_detached(window: &Window, url: &str) -> Result<Option<Window>, JsValue> {
    window.open_with_url_and_target_and_features(url, "_blank", NEW_TAB_FEATURES)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_new_tab_has_no_opener_handle() {
        let window = web_sys::window().unwrap();
        let opened = open_detached(&window, "about:blank").unwrap();
        assert!(opened.is_none());
    }
}
