//! 성장통 Dashboard
//!
//! E-commerce growth analytics dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Product ranking and per-product drill-down
//! - Sales, conversion and traffic-flow charts on canvas
//! - Loyal customer and VIP statistics
//! - Session handling with localStorage persistence
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Dashboard data comes from a mock API layer behind the same
//! interface a live backend would use, and navigation happens entirely in
//! memory so the address bar never changes.

use leptos::*;

mod api;
mod app;
mod components;
mod hooks;
mod pages;
mod router;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
