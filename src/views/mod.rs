//! View Controllers
//!
//! Platform-neutral behaviour of each screen. A controller reads and writes
//! its view's state through a [`ViewCell`] and reaches the host through a
//! [`Shell`]; the browser app binds these to signals and the router, the
//! CLI to plain memory and stdout.
//!
//! - [`login`] - credential form, token exchange
//! - [`register`] - account creation with delayed redirect
//! - [`dashboard`] - user, server picker, connect, usage, logout
//! - [`ads`] - country-targeted ads with analytics

pub mod ads;
mod cell;
pub mod dashboard;
pub mod login;
pub mod register;
mod shell;
#[cfg(test)]
pub(crate) mod testing;

pub use cell::{LocalView, ViewCell};
pub use shell::{Route, Shell};
