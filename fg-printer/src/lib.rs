//! # fg-printer
//!
//! Label document rendering and print dispatch for FG tickets.
//!
//! ## Scope
//!
//! This crate handles HOW to print:
//! - Thermal-label HTML document building (58mm stock, one page per label)
//! - Mandatory escaping of interpolated text
//! - Print surface acquisition and document hand-off
//!
//! Ticket creation (WHAT to print) lives in fg-client: the dispatcher
//! takes a finished ticket batch and produces a self-printing document.
//!
//! ## Example
//!
//! ```ignore
//! use fg_printer::{FileSurfaceProvider, PrintDispatcher};
//!
//! let dispatcher = PrintDispatcher::new(FileSurfaceProvider::new());
//! dispatcher.dispatch(&tickets).await?;
//! ```

mod dispatcher;
mod document;
mod error;
mod surface;

// Re-exports
pub use dispatcher::PrintDispatcher;
pub use document::{LabelRenderer, escape_html};
pub use error::{PrintError, PrintResult};
pub use surface::{FileSurface, FileSurfaceProvider, PrintSurface, SurfaceProvider};
