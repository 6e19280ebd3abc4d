//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod ads_widget;
pub mod loading;
pub mod nav;

pub use ads_widget::AdsWidget;
pub use loading::InlineLoading;
pub use nav::Nav;
