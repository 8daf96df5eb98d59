//! WASM platform implementations
//!
//! Browser-backed providers built on `js-sys` and `web-sys`.

use crate::ports::outbound::{DocumentProvider, RandomProvider};
use crate::state::Platform;

/// WASM random provider using `Math.random`
#[derive(Clone, Default)]
pub struct WasmRandomProvider;

impl RandomProvider for WasmRandomProvider {
    fn random_range(&self, min: i32, max: i32) -> i32 {
        if max <= min {
            return min;
        }
        let span = f64::from(max) - f64::from(min) + 1.0;
        let offset = (js_sys::Math::random() * span).floor();
        // Math.random() < 1.0, so the offset stays below `span`
        (f64::from(min) + offset) as i32
    }
}

/// WASM document provider writing `document.title`
#[derive(Clone, Default)]
pub struct WasmDocumentProvider;

impl DocumentProvider for WasmDocumentProvider {
    fn set_page_title(&self, title: &str) {
        match web_sys::window().and_then(|w| w.document()) {
            Some(document) => document.set_title(title),
            None => tracing::warn!("No document available to set page title"),
        }
    }
}

/// Create platform services for the browser
pub fn create_platform() -> Platform {
    Platform::new(WasmRandomProvider, WasmDocumentProvider)
}
