//! The in-memory directory store.

use crate::error::{Error, Result};
use crate::member::{Member, MemberDraft, MemberId};

/// Ordered, in-memory collection of member records.
///
/// Records keep their insertion order; an update rewrites a record in
/// place without moving it. Ids come from a counter that only moves
/// forward, so removing a record never frees its id for reuse.
///
/// The store holds no connection to durable storage. Every service
/// start constructs a fresh directory, usually via [`Directory::seeded`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directory {
    members: Vec<Member>,
    next_id: i64,
}

impl Directory {
    /// Creates an empty directory. The first minted id is 1.
    pub fn new() -> Self {
        Self {
            members: Vec::new(),
            next_id: 1,
        }
    }

    /// Creates a directory holding the two records every fresh service
    /// start begins with.
    pub fn seeded() -> Self {
        let members = vec![
            Member::new(1, "Alice", "Lead Developer"),
            Member::new(2, "Bob", "UI/UX Designer"),
        ];
        Self {
            members,
            next_id: 3,
        }
    }

    /// Builds a directory from existing records. The id counter resumes
    /// just past the highest id present.
    pub fn with_members(members: Vec<Member>) -> Self {
        let next_id = members.iter().map(|m| m.id.value()).max().unwrap_or(0) + 1;
        Self { members, next_id }
    }

    /// Returns the records in insertion order.
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    /// Returns an owned snapshot of the records in insertion order.
    pub fn list(&self) -> Vec<Member> {
        self.members.clone()
    }

    /// Returns the record with the given id, if present.
    pub fn get(&self, id: MemberId) -> Option<&Member> {
        self.members.iter().find(|m| m.id == id)
    }

    /// Number of records held.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns true when no records are held.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Validates the draft, mints the next id, and appends the new
    /// record. Returns the stored record, id included.
    pub fn create(&mut self, draft: MemberDraft) -> Result<Member> {
        draft.validate()?;
        let member = Member {
            id: MemberId::new(self.next_id),
            name: draft.name,
            role: draft.role,
        };
        self.next_id += 1;
        self.members.push(member.clone());
        Ok(member)
    }

    /// Replaces the name and role of an existing record. The id and the
    /// record's position are unchanged.
    ///
    /// An unknown id wins over a bad payload: the lookup happens before
    /// the draft is validated.
    pub fn update(&mut self, id: MemberId, draft: MemberDraft) -> Result<Member> {
        let idx = self.index_of(id).ok_or(Error::MemberNotFound { id })?;
        draft.validate()?;
        let member = &mut self.members[idx];
        member.name = draft.name;
        member.role = draft.role;
        Ok(member.clone())
    }

    /// Removes the record with the given id and returns its prior value.
    pub fn remove(&mut self, id: MemberId) -> Result<Member> {
        let idx = self.index_of(id).ok_or(Error::MemberNotFound { id })?;
        Ok(self.members.remove(idx))
    }

    fn index_of(&self, id: MemberId) -> Option<usize> {
        self.members.iter().position(|m| m.id == id)
    }
}

impl Default for Directory {
    fn default() -> Self {
        Self::new()
    }
}
