#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Roster directory service
//!
//! REST CRUD over the in-memory member directory, with open CORS and a
//! health probe. The binary in this crate is the deployable service;
//! the library surface exists so tests can assemble the same router
//! around their own state.

pub mod config;
pub mod error;
pub mod routes;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ApiError, Error, ErrorBody, Result};
pub use routes::router;
pub use server::serve;
pub use state::AppState;
