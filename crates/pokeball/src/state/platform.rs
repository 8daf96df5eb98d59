//! Platform DI Container
//!
//! This module provides the `Platform` struct - a dependency injection container
//! that aggregates all platform-specific service implementations behind port traits.
//!
//! Usage:
//! - Created by `create_platform()` in infrastructure/platform/desktop.rs or wasm.rs
//! - Injected into Dioxus context by `main.rs`
//! - Accessed in UI via `use_platform()`

use std::sync::Arc;

use crate::ports::outbound::{DocumentProvider, PlatformPort, RandomProvider};

/// Unified platform services container
#[derive(Clone)]
pub struct Platform {
    random: Arc<dyn RandomProviderDyn>,
    document: Arc<dyn DocumentProviderDyn>,
}

// =============================================================================
// Dynamic trait versions for Arc storage (need Send + Sync for Dioxus context)
// =============================================================================

trait RandomProviderDyn: Send + Sync {
    fn random_range(&self, min: i32, max: i32) -> i32;
}

trait DocumentProviderDyn: Send + Sync {
    fn set_page_title(&self, title: &str);
}

// =============================================================================
// Blanket implementations - convert port traits to dyn-safe wrappers
// =============================================================================

impl<T: RandomProvider + Send + Sync> RandomProviderDyn for T {
    fn random_range(&self, min: i32, max: i32) -> i32 {
        RandomProvider::random_range(self, min, max)
    }
}

impl<T: DocumentProvider + Send + Sync> DocumentProviderDyn for T {
    fn set_page_title(&self, title: &str) {
        DocumentProvider::set_page_title(self, title)
    }
}

impl Platform {
    pub fn new<R, D>(random: R, document: D) -> Self
    where
        R: RandomProvider + Send + Sync,
        D: DocumentProvider + Send + Sync,
    {
        Self {
            random: Arc::new(random),
            document: Arc::new(document),
        }
    }
}

impl PlatformPort for Platform {
    fn random_range(&self, min: i32, max: i32) -> i32 {
        self.random.random_range(min, max)
    }

    fn set_page_title(&self, title: &str) {
        self.document.set_page_title(title)
    }
}
