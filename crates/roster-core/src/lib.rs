#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Roster core library
//!
//! Record types and the in-memory store for the club membership
//! directory. Everything here is synchronous and free of I/O; the
//! service and client crates wrap these types for the network.

pub mod directory;
pub mod error;
pub mod member;

mod proptests;

pub use directory::Directory;
pub use error::{Error, Result};
pub use member::{Member, MemberDraft, MemberId};
