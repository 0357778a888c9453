//! Clipboard bridge
//!
//! Writes go through the page's `navigator.clipboard`. Fire-and-forget: the
//! promise rejection is swallowed on the JS side.

use dioxus::prelude::*;

pub fn copy_to_clipboard(text: &str) {
    let literal = match serde_json::to_string(text) {
        Ok(literal) => literal,
        Err(e) => {
            tracing::debug!("Clipboard payload not encodable: {}", e);
            return;
        }
    };

    let _ = document::eval(&format!(
        "navigator.clipboard.writeText({}).catch(() => {{}});",
        literal
    ));
}
