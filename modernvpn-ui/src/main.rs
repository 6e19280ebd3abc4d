//! ModernVPN Dashboard
//!
//! Browser front end for the ModernVPN backend, built with Leptos (WASM).
//!
//! # Features
//!
//! - Login and registration
//! - Server picker with tunnel assignment
//! - Usage reporting
//! - Country-targeted sponsored ads
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Page behaviour lives in the `modernvpn` core crate; the
//! pages here bind its view controllers to signals, the router and
//! `localStorage`.

use leptos::*;

mod api;
mod app;
mod components;
mod logging;
mod pages;
mod shell;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();
    logging::init();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
