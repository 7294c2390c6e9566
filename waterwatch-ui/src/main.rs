//! Delhi Water Bodies Monitor
//!
//! Static risk dashboard for Delhi's rivers and lakes, built with Leptos (WASM).
//!
//! # Views
//!
//! - Dashboard: critical alerts, supply figures and a status bar chart
//! - Reports: risk assessment table
//! - Map: Leaflet map with risk-colored markers
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. All data is compiled in from the `waterwatch` crate; the only
//! network traffic is map tiles fetched by Leaflet.

use leptos::*;

mod app;
mod components;
mod leaflet;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
