//! The transport trait directory clients are written against.

use async_trait::async_trait;

use roster_core::{Member, MemberDraft, MemberId};

use crate::error::Result;

/// Abstract directory transport.
///
/// The session and view code never name a concrete transport; they hold
/// an `Arc<dyn DirectoryApi>` and work the same over HTTP or an
/// in-process store.
///
/// Implementations:
/// - [`HttpDirectory`](crate::HttpDirectory): the REST service client
/// - [`LocalDirectory`](crate::LocalDirectory): in-process store for
///   tests and offline use
#[async_trait]
pub trait DirectoryApi: Send + Sync {
    /// Fetches every member record in directory order.
    async fn list(&self) -> Result<Vec<Member>>;

    /// Submits a draft for creation and returns the stored record,
    /// id included.
    async fn create(&self, draft: MemberDraft) -> Result<Member>;

    /// Replaces the name and role of the record with the given id and
    /// returns the updated record.
    async fn update(&self, id: MemberId, draft: MemberDraft) -> Result<Member>;

    /// Removes the record with the given id and returns its prior value.
    async fn remove(&self, id: MemberId) -> Result<Member>;
}
