//! Shared handler state.

use std::sync::Arc;

use parking_lot::RwLock;

use roster_core::{Directory, Member, MemberDraft, MemberId, Result};

/// The directory behind the REST surface.
///
/// Handlers clone this freely; all clones share one store. Each method
/// takes the lock for exactly one directory operation, so a request
/// sees and leaves a consistent store.
#[derive(Clone)]
pub struct AppState {
    directory: Arc<RwLock<Directory>>,
}

impl AppState {
    /// State over an existing directory.
    pub fn new(directory: Directory) -> Self {
        Self {
            directory: Arc::new(RwLock::new(directory)),
        }
    }

    /// State over the standard seed records, as used at every start.
    pub fn seeded() -> Self {
        Self::new(Directory::seeded())
    }

    /// Snapshot of all records in directory order.
    pub fn list(&self) -> Vec<Member> {
        self.directory.read().list()
    }

    /// Number of records held.
    pub fn len(&self) -> usize {
        self.directory.read().len()
    }

    /// Returns true when no records are held.
    pub fn is_empty(&self) -> bool {
        self.directory.read().is_empty()
    }

    /// Validates and appends a new record.
    pub fn create(&self, draft: MemberDraft) -> Result<Member> {
        self.directory.write().create(draft)
    }

    /// Replaces an existing record's fields.
    pub fn update(&self, id: MemberId, draft: MemberDraft) -> Result<Member> {
        self.directory.write().update(id, draft)
    }

    /// Removes a record.
    pub fn remove(&self, id: MemberId) -> Result<Member> {
        self.directory.write().remove(id)
    }
}
