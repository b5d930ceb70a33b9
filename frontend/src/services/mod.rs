//! Browser platform services.
//!
//! This module wraps the handful of web platform capabilities the site
//! consumes:
//!
//! # Services
//!
//! - [`audio`] - owned handle to the looping soundtrack
//! - [`clipboard`] - system clipboard write

pub mod audio;
pub mod clipboard;

pub use audio::*;
pub use clipboard::*;

use wasm_bindgen::JsValue;

/// Flatten a JS exception into a displayable message.
pub(crate) fn js_error_message(value: &JsValue) -> String {
    js_sys::Reflect::get(value, &"message".into())
        .ok()
        .and_then(|v| v.as_string())
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value))
}
