//! Recording shell for controller tests

use futures_util::future::LocalBoxFuture;
use std::cell::RefCell;
use std::time::Duration;

use super::shell::{Route, Shell};

#[derive(Debug, Clone, PartialEq)]
pub enum ShellEvent {
    Navigate(Route),
    NavigateAfter(Route, Duration),
    Reload(Route),
    Alert(String),
    Open(String),
}

#[derive(Default)]
pub struct RecordingShell {
    events: RefCell<Vec<ShellEvent>>,
    detached: RefCell<Vec<LocalBoxFuture<'static, ()>>>,
}

impl RecordingShell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ShellEvent> {
        self.events.borrow().clone()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                ShellEvent::Alert(msg) => Some(msg.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn detached_count(&self) -> usize {
        self.detached.borrow().len()
    }

    /// Drive every detached task to completion
    pub async fn run_detached(&self) {
        let tasks: Vec<_> = self.detached.borrow_mut().drain(..).collect();
        futures_util::future::join_all(tasks).await;
    }

    fn record(&self, event: ShellEvent) {
        self.events.borrow_mut().push(event);
    }
}

impl Shell for RecordingShell {
    fn navigate(&self, route: Route) {
        self.record(ShellEvent::Navigate(route));
    }

    fn navigate_after(&self, route: Route, delay: Duration) {
        self.record(ShellEvent::NavigateAfter(route, delay));
    }

    fn reload_to(&self, route: Route) {
        self.record(ShellEvent::Reload(route));
    }

    fn alert(&self, message: &str) {
        self.record(ShellEvent::Alert(message.to_string()));
    }

    fn open_in_new_tab(&self, url: &str) {
        self.record(ShellEvent::Open(url.to_string()));
    }

    fn detach(&self, task: LocalBoxFuture<'static, ()>) {
        self.detached.borrow_mut().push(task);
    }
}
