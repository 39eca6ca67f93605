//! FG Client - backend gateway for the label workflow
//!
//! Provides HTTP calls to the record-storage backend with a local
//! synthesis fallback: when the backend is unreachable, every operation
//! still produces a contract-satisfying result from deterministic seed
//! data, so the shop floor keeps printing.

pub mod config;
pub mod error;
pub mod gateway;
pub mod http;
pub mod seed;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use gateway::{DataGateway, Sourced};
pub use http::HttpClient;
