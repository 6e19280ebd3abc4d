//! Routes and the platform shell
//!
//! Everything a controller asks of its host beyond view state: moving
//! between routes, blocking notices, opening links and running detached
//! work.

use futures_util::future::LocalBoxFuture;
use std::time::Duration;

/// The three top-level screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Register,
    Dashboard,
}

impl Route {
    pub const ALL: [Route; 3] = [Route::Login, Route::Register, Route::Dashboard];

    /// Links in the header bar; registration is reached from the login form
    pub const NAV: [Route; 2] = [Route::Login, Route::Dashboard];

    pub fn nav_label(&self) -> &'static str {
        match self {
            Route::Login => "Home",
            Route::Register => "Register",
            Route::Dashboard => "Dashboard",
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/",
            Route::Register => "/register",
            Route::Dashboard => "/dashboard",
        }
    }

    pub fn from_path(path: &str) -> Option<Route> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };
        Route::ALL.into_iter().find(|r| r.path() == normalized)
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

/// Host services for controllers
pub trait Shell {
    /// In-app transition
    fn navigate(&self, route: Route);

    /// In-app transition after `delay`
    fn navigate_after(&self, route: Route, delay: Duration);

    /// Full page load of `route`, dropping all in-memory state
    fn reload_to(&self, route: Route);

    /// Blocking notice
    fn alert(&self, message: &str);

    /// Open `url` in a new browsing context
    fn open_in_new_tab(&self, url: &str);

    /// Run `task` without waiting for it
    fn detach(&self, task: LocalBoxFuture<'static, ()>);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_paths_round_trip() {
        for route in Route::ALL {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
    }

    #[test]
    fn test_nav_links_home_and_dashboard() {
        let links: Vec<_> = Route::NAV.iter().map(|r| (r.path(), r.nav_label())).collect();
        assert_eq!(links, vec![("/", "Home"), ("/dashboard", "Dashboard")]);
    }

    #[test]
    fn test_route_from_path_normalizes() {
        assert_eq!(Route::from_path(""), Some(Route::Login));
        assert_eq!(Route::from_path("/dashboard/"), Some(Route::Dashboard));
        assert_eq!(Route::from_path("/register?ref=nav"), Some(Route::Register));
        assert_eq!(Route::from_path("/settings"), None);
    }
}
