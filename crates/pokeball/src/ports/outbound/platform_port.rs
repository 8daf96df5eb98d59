//! PlatformPort - Unified platform services interface
//!
//! Object-safe facade over the individual providers so the UI can hold a
//! single `Arc<dyn PlatformPort>` from Dioxus context.

/// Unified platform services port
///
/// Implemented by the `Platform` struct in `state/platform.rs`.
///
/// Use via Dioxus context: `use_context::<Arc<dyn PlatformPort>>()`
pub trait PlatformPort: Send + Sync {
    /// Generate random i32 in range [min, max] (inclusive)
    fn random_range(&self, min: i32, max: i32) -> i32;

    /// Set the browser page title (no-op on desktop)
    fn set_page_title(&self, title: &str);
}
