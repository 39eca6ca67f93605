//! Shared types for the FG label workflow
//!
//! Common types used across the gateway and printer crates: the ticket
//! data model, serial number generation, and time utilities.

pub mod models;
pub mod serial;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use models::{
    CreateTicketsRequest, CreateTicketsResponse, Part, Runner, Ticket, TicketPayload,
};
pub use serial::{DEFAULT_SERIAL_PREFIX, generate_serial};
