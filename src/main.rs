//! ZoneWatch Dashboard
//!
//! Environmental risk intelligence dashboard built with Leptos (WASM).
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles
//! to WebAssembly. It is a pure view layer over the ZoneWatch REST API:
//! every page fetches its data on mount, holds it in local view state and
//! renders charts, maps, tables and the alert feed from it.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
