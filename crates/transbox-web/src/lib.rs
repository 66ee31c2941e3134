//! Transbox Web - Browser-based Translation & File Conversion Tool
//!
//! This crate provides the WebAssembly UI for the mock translation and
//! file conversion tool. Both features simulate their backend locally;
//! nothing leaves the browser.

mod app;
mod components;
mod download;
mod processing;
mod state;

use wasm_bindgen::prelude::*;

/// Initialize the web application
#[wasm_bindgen(start)]
pub fn main() {
    // Initialize panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(log::Level::Info).expect("Failed to initialize logger");

    log::info!("Transbox Web starting...");

    // Mount the Sycamore application
    sycamore::render(app::App);

    log::info!("Transbox Web initialized");
}
