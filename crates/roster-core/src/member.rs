//! Member record types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

// ============================================================================
// Identifiers
// ============================================================================

/// Unique identifier for a member record.
///
/// Identifiers are minted by the directory from a monotonic counter, so
/// later records always carry larger ids and an id is never reused after
/// its record is removed. On the wire an id is a bare JSON number.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct MemberId(i64);

impl MemberId {
    /// Creates a member id from a raw integer.
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw integer value.
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for MemberId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<MemberId> for i64 {
    fn from(id: MemberId) -> Self {
        id.0
    }
}

impl FromStr for MemberId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

// ============================================================================
// Records
// ============================================================================

/// A single member record as stored and served by the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Identifier assigned by the directory at creation time
    pub id: MemberId,
    /// Display name of the member
    pub name: String,
    /// Role the member holds in the club
    pub role: String,
}

impl Member {
    /// Creates a member record.
    pub fn new(id: impl Into<MemberId>, name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            role: role.into(),
        }
    }
}

/// The name/role pair submitted to create a record or replace an
/// existing one. The directory assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberDraft {
    /// Display name of the member
    pub name: String,
    /// Role the member holds in the club
    pub role: String,
}

impl MemberDraft {
    /// Creates a draft from a name and a role.
    pub fn new(name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
        }
    }

    /// Checks that both required fields are present.
    ///
    /// A field consisting only of whitespace counts as missing. The
    /// stored text is left exactly as submitted; only the presence
    /// check trims.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::validation_field("name", "name is required"));
        }
        if self.role.trim().is_empty() {
            return Err(Error::validation_field("role", "role is required"));
        }
        Ok(())
    }
}
