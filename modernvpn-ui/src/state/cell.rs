//! Signal-backed view cells
//!
//! A page's state signal is disposed with its route, after which writes
//! from a late response are refused.

use leptos::*;

use modernvpn::views::ViewCell;

pub struct SignalCell<S: 'static>(RwSignal<S>);

impl<S: 'static> Clone for SignalCell<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: 'static> Copy for SignalCell<S> {}

impl<S: 'static> SignalCell<S> {
    pub fn new(signal: RwSignal<S>) -> Self {
        Self(signal)
    }
}

impl<S: 'static> ViewCell<S> for SignalCell<S> {
    fn update(&self, f: impl FnOnce(&mut S)) -> bool {
        self.0.try_update(f).is_some()
    }

    fn with<R>(&self, f: impl FnOnce(&S) -> R) -> Option<R> {
        self.0.try_with_untracked(f)
    }
}
