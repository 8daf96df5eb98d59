//! Outbound ports - Interfaces for external services
//!
//! These ports define the contracts that infrastructure adapters must implement,
//! allowing application services to interact with external systems without
//! depending on concrete implementations.

pub mod catalog_port;
pub mod platform;
pub mod platform_port;

#[cfg(any(test, feature = "testing"))]
pub use catalog_port::MockCatalogPort;
pub use catalog_port::{CatalogPort, TransportError};
pub use platform::{DocumentProvider, RandomProvider};
pub use platform_port::PlatformPort;
