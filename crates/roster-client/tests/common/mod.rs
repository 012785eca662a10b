//! Common harness and transport doubles for the session tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use roster_client::{DirectoryApi, Error, LocalDirectory, Result, Session};
use roster_core::{Member, MemberDraft, MemberId};

/// Transport double that fails every call with a fixed service error.
pub struct FailingDirectory {
    status: u16,
    message: String,
}

impl FailingDirectory {
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    fn error(&self) -> Error {
        Error::api(self.status, self.message.clone())
    }
}

#[async_trait]
impl DirectoryApi for FailingDirectory {
    async fn list(&self) -> Result<Vec<Member>> {
        Err(self.error())
    }

    async fn create(&self, _draft: MemberDraft) -> Result<Member> {
        Err(self.error())
    }

    async fn update(&self, _id: MemberId, _draft: MemberDraft) -> Result<Member> {
        Err(self.error())
    }

    async fn remove(&self, _id: MemberId) -> Result<Member> {
        Err(self.error())
    }
}

/// Transport double that serves the listing but fails every mutation.
pub struct MutationFailingDirectory {
    inner: LocalDirectory,
    status: u16,
    message: String,
}

impl MutationFailingDirectory {
    pub fn seeded(status: u16, message: impl Into<String>) -> Self {
        Self {
            inner: LocalDirectory::seeded(),
            status,
            message: message.into(),
        }
    }

    fn error(&self) -> Error {
        Error::api(self.status, self.message.clone())
    }
}

#[async_trait]
impl DirectoryApi for MutationFailingDirectory {
    async fn list(&self) -> Result<Vec<Member>> {
        self.inner.list().await
    }

    async fn create(&self, _draft: MemberDraft) -> Result<Member> {
        Err(self.error())
    }

    async fn update(&self, _id: MemberId, _draft: MemberDraft) -> Result<Member> {
        Err(self.error())
    }

    async fn remove(&self, _id: MemberId) -> Result<Member> {
        Err(self.error())
    }
}

/// Transport double that counts how many calls reach it.
pub struct CountingDirectory {
    inner: LocalDirectory,
    calls: Arc<AtomicUsize>,
}

impl CountingDirectory {
    pub fn seeded(calls: Arc<AtomicUsize>) -> Self {
        Self {
            inner: LocalDirectory::seeded(),
            calls,
        }
    }

    fn tick(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl DirectoryApi for CountingDirectory {
    async fn list(&self) -> Result<Vec<Member>> {
        self.tick();
        self.inner.list().await
    }

    async fn create(&self, draft: MemberDraft) -> Result<Member> {
        self.tick();
        self.inner.create(draft).await
    }

    async fn update(&self, id: MemberId, draft: MemberDraft) -> Result<Member> {
        self.tick();
        self.inner.update(id, draft).await
    }

    async fn remove(&self, id: MemberId) -> Result<Member> {
        self.tick();
        self.inner.remove(id).await
    }
}

/// A refreshed session over a seeded in-process store, plus a handle to
/// the store itself for asserting what actually got written.
pub async fn seeded_session() -> (Session, LocalDirectory) {
    let local = LocalDirectory::seeded();
    let mut session = Session::new(Arc::new(local.clone()));
    session.refresh().await.unwrap();
    (session, local)
}

/// A refreshed session whose transport counts calls.
pub async fn counting_session() -> (Session, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let mut session = Session::new(Arc::new(CountingDirectory::seeded(calls.clone())));
    session.refresh().await.unwrap();
    (session, calls)
}
