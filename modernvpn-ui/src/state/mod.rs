//! State Management
//!
//! App-wide context, browser token storage and signal-backed view cells.

pub mod cell;
pub mod global;
pub mod session;

pub use cell::SignalCell;
pub use global::{use_app_context, AppContext};
