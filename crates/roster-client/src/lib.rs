#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Roster client library
//!
//! Transports, the view-state machine, and the session type for
//! working against a Roster directory.

pub mod api;
pub mod error;
pub mod http;
pub mod local;
pub mod session;
pub mod view;

pub use api::DirectoryApi;
pub use error::{Error, Result};
pub use http::{Health, HttpDirectory};
pub use local::LocalDirectory;
pub use session::Session;
pub use view::{DirectoryView, MemberForm, ViewState};
