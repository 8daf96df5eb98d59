//! Application layer - use cases and state transitions, free of UI and I/O

pub mod decoder;
pub mod error;
pub mod services;
pub mod trigger;
pub mod viewer;

pub use error::{CatalogError, DecodeError, FieldIssue};
pub use trigger::throw_pokeball;
pub use viewer::{RequestTicket, SettlePolicy, Settlement, Viewer};
