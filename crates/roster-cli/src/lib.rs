#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Roster command-line tool
//!
//! Argument surface, command handlers, and terminal helpers behind the
//! `roster` binary.

pub mod cli;
pub mod commands;
pub mod error;

pub use error::{Error, Result};
