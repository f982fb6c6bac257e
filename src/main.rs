//! Personal Portfolio
//!
//! Single-page portfolio built with Leptos (WASM): three routed pages, a
//! staged intro loading sequence, and light/dark theming.
//!
//! # Architecture
//!
//! Client-side rendered (CSR) and fully static: no backend, no storage, no
//! network calls. `index.html` shows a spinner until this binary has been
//! fetched and mounted; reloading resets all state.

use leptos::*;

mod app;
mod components;
mod content;
mod pages;
mod state;

fn main() {
    // Readable panic messages in the browser console.
    console_error_panic_hook::set_once();

    remove_preloader();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}

/// Drop the static spinner from index.html once the app is live.
fn remove_preloader() {
    if let Some(preloader) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("preloader"))
    {
        preloader.remove();
    }
}
