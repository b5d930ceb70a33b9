//! System clipboard access.

use wasm_bindgen_futures::JsFuture;

use crate::services::js_error_message;
use crate::types::{AppError, AppResult};

/// Write `text` to the system clipboard.
///
/// Resolves once the browser accepts the write. Denial (missing
/// permission, insecure context) surfaces as [`AppError::Clipboard`].
pub async fn copy_text(text: &str) -> AppResult<()> {
    let window = web_sys::window().ok_or_else(|| AppError::Clipboard("no window".to_string()))?;
    let clipboard = window.navigator().clipboard();

    JsFuture::from(clipboard.write_text(text))
        .await
        .map(|_| ())
        .map_err(|e| AppError::Clipboard(js_error_message(&e)))
}
