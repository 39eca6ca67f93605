//! Data models
//!
//! Shared between the backend gateway and the label printer (via API).
//! Wire format is camelCase JSON; all IDs are backend-assigned strings.

pub mod part;
pub mod runner;
pub mod ticket;

// Re-exports
pub use part::*;
pub use runner::*;
pub use ticket::*;
