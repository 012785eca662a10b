//! In-process directory transport.

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;

use roster_core::{Directory, Member, MemberDraft, MemberId};

use crate::api::DirectoryApi;
use crate::error::Result;

/// Directory transport backed by an in-process store.
///
/// Behaves exactly like the REST service minus the network: same
/// validation, same id minting, same failure cases. Cloning shares the
/// underlying store, so several sessions can point at one directory.
#[derive(Clone)]
pub struct LocalDirectory {
    inner: Arc<RwLock<Directory>>,
}

impl LocalDirectory {
    /// Wraps an existing directory.
    pub fn new(directory: Directory) -> Self {
        Self {
            inner: Arc::new(RwLock::new(directory)),
        }
    }

    /// Starts from the standard seed records, like a fresh service.
    pub fn seeded() -> Self {
        Self::new(Directory::seeded())
    }

    /// Owned snapshot of the current records.
    pub fn snapshot(&self) -> Vec<Member> {
        self.inner.read().list()
    }
}

impl Default for LocalDirectory {
    fn default() -> Self {
        Self::new(Directory::default())
    }
}

#[async_trait]
impl DirectoryApi for LocalDirectory {
    async fn list(&self) -> Result<Vec<Member>> {
        Ok(self.inner.read().list())
    }

    async fn create(&self, draft: MemberDraft) -> Result<Member> {
        Ok(self.inner.write().create(draft)?)
    }

    async fn update(&self, id: MemberId, draft: MemberDraft) -> Result<Member> {
        Ok(self.inner.write().update(id, draft)?)
    }

    async fn remove(&self, id: MemberId) -> Result<Member> {
        Ok(self.inner.write().remove(id)?)
    }
}
