//! Template Toolbox WASM Module
//!
//! Injects a floating panel of message templates into a page. Clicking a
//! template inserts its text into the textarea the user was last working in,
//! replacing the selection and notifying the page as if the text had been
//! typed.

pub mod api;
pub mod config;
pub mod dom;
pub mod error;
pub mod focus;
pub mod insert;
pub mod matching;
pub mod panel;
pub mod runtime;
pub mod templates;
pub mod text;
pub mod watcher;

// Re-export commonly used types
pub use config::ToolboxConfig;
pub use error::{Result, ToolboxError};
pub use focus::{ActiveField, FocusTracker};
pub use insert::{insert_text, Insertion};
pub use templates::Template;
pub use text::CaretPosition;

use wasm_bindgen::prelude::*;

#[cfg(feature = "console_log")]
fn init_logging() {
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("[toolbox] logger already set: {}", e).into());
    }
}

#[cfg(not(feature = "console_log"))]
fn init_logging() {}

#[cfg(feature = "autostart")]
fn autostart() {
    if let Err(e) = api::start_toolbox(JsValue::UNDEFINED) {
        log::error!("[toolbox] could not start: {:?}", e);
    }
}

#[cfg(not(feature = "autostart"))]
fn autostart() {}

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    init_logging();
    log::info!("[toolbox] WASM module initialized");

    autostart();
}
