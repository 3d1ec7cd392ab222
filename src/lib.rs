/// Listing Editor - domain listing form backed by Supabase
/// Built with Rust + WASM + Yew

pub mod config;
pub mod error;
pub mod listing_data;
pub mod operations;
pub mod persistence;
pub mod submit;
pub mod supabase;
pub mod text;
pub mod ui;

use wasm_bindgen::prelude::*;

use crate::config::EditorConfig;

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

// Re-export the word counter for JavaScript access
#[wasm_bindgen]
pub fn word_count(text: &str) -> usize {
    text::word_count(text)
}

// Start the Yew app for the editor page
#[wasm_bindgen]
pub fn start_editor(config: JsValue) -> Result<(), JsValue> {
    let config = EditorConfig::from_js(config).map_err(|e| {
        log::error!("Invalid editor configuration: {}", e);
        JsValue::from_str(&e.to_string())
    })?;

    log::info!(
        "Starting listing editor for table {} (attachments: {})",
        config.table,
        config.has_attachments
    );
    yew::Renderer::<ui::App>::with_props(ui::AppProps { config }).render();
    Ok(())
}
