//! View state cells
//!
//! Controllers never own their view's state; they read and write it through
//! a [`ViewCell`]. A cell whose view has gone away refuses updates, so a
//! response that lands after navigation is dropped instead of touching
//! discarded state.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Handle to one view's state
pub trait ViewCell<S> {
    /// Mutate the state; returns `false` if the view no longer exists
    fn update(&self, f: impl FnOnce(&mut S)) -> bool;

    /// Read the state; `None` if the view no longer exists
    fn with<R>(&self, f: impl FnOnce(&S) -> R) -> Option<R>;
}

/// Single-threaded view state with an explicit lifetime
#[derive(Debug)]
pub struct LocalView<S> {
    state: Rc<RefCell<S>>,
    mounted: Rc<Cell<bool>>,
}

impl<S> Clone for LocalView<S> {
    fn clone(&self) -> Self {
        Self {
            state: Rc::clone(&self.state),
            mounted: Rc::clone(&self.mounted),
        }
    }
}

impl<S> LocalView<S> {
    pub fn new(state: S) -> Self {
        Self {
            state: Rc::new(RefCell::new(state)),
            mounted: Rc::new(Cell::new(true)),
        }
    }

    /// Tear the view down; later updates are discarded
    pub fn unmount(&self) {
        self.mounted.set(false);
    }

    /// Copy of the current state, mounted or not
    pub fn snapshot(&self) -> S
    where
        S: Clone,
    {
        self.state.borrow().clone()
    }
}

impl<S: Default> Default for LocalView<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

impl<S> ViewCell<S> for LocalView<S> {
    fn update(&self, f: impl FnOnce(&mut S)) -> bool {
        if !self.mounted.get() {
            tracing::debug!("Dropping update for unmounted view");
            return false;
        }
        f(&mut self.state.borrow_mut());
        true
    }

    fn with<R>(&self, f: impl FnOnce(&S) -> R) -> Option<R> {
        self.mounted.get().then(|| f(&self.state.borrow()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_until_unmounted() {
        let view = LocalView::new(0u32);
        assert!(view.update(|n| *n += 1));
        assert_eq!(view.with(|n| *n), Some(1));

        view.clone().unmount();
        assert!(!view.update(|n| *n += 1));
        assert_eq!(view.with(|n| *n), None);
        assert_eq!(view.snapshot(), 1);
    }
}
