//! Ties a view to a transport.

use std::sync::Arc;

use roster_core::{Member, MemberId};

use crate::api::DirectoryApi;
use crate::error::Result;
use crate::view::{DirectoryView, ViewState};

/// A user's working session against one directory.
///
/// The session owns a [`DirectoryView`] and applies its transitions
/// only after the transport has answered, so every failure path leaves
/// the view exactly as it was. Blank submissions are rejected here,
/// before anything goes on the wire.
pub struct Session {
    api: Arc<dyn DirectoryApi>,
    view: DirectoryView,
}

impl Session {
    /// Starts a session in the loading state. Call
    /// [`refresh`](Self::refresh) to populate it.
    pub fn new(api: Arc<dyn DirectoryApi>) -> Self {
        Self {
            api,
            view: DirectoryView::new(),
        }
    }

    /// The view as last reconciled.
    pub fn view(&self) -> &DirectoryView {
        &self.view
    }

    /// Records as last reconciled.
    pub fn members(&self) -> &[Member] {
        self.view.members()
    }

    /// The current view state.
    pub fn state(&self) -> &ViewState {
        self.view.state()
    }

    /// Sets the form's name input.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.view.set_name(name);
    }

    /// Sets the form's role input.
    pub fn set_role(&mut self, role: impl Into<String>) {
        self.view.set_role(role);
    }

    /// Fetches the full listing and resets the view around it.
    pub async fn refresh(&mut self) -> Result<()> {
        let members = self.api.list().await?;
        self.view.loaded(members);
        Ok(())
    }

    /// Starts editing a listed record. No transport contact; fails if
    /// the id is not in the current listing.
    pub fn edit(&mut self, id: MemberId) -> Result<()> {
        if self.view.begin_edit(id) {
            Ok(())
        } else {
            Err(roster_core::Error::MemberNotFound { id }.into())
        }
    }

    /// Abandons an edit. No transport contact.
    pub fn cancel(&mut self) {
        self.view.cancel_edit();
    }

    /// Submits the form: an update when a record is being edited, a
    /// create otherwise. The form must pass the blank-field check
    /// before any request is made.
    pub async fn submit(&mut self) -> Result<Member> {
        let draft = self.view.form().draft()?;
        match self.view.state().editing().map(|m| m.id) {
            Some(id) => {
                let member = self.api.update(id, draft).await?;
                self.view.record_updated(member.clone());
                Ok(member)
            }
            None => {
                let member = self.api.create(draft).await?;
                self.view.record_created(member.clone());
                Ok(member)
            }
        }
    }

    /// Removes a record. Confirmation is the caller's business; by the
    /// time this is called the user has already said yes.
    pub async fn remove(&mut self, id: MemberId) -> Result<Member> {
        let removed = self.api.remove(id).await?;
        self.view.record_removed(id);
        Ok(removed)
    }
}
