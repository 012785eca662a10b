//! The view model a directory front end drives.
//!
//! [`DirectoryView`] is pure state: the member list as last fetched,
//! the name/role form, and whether a record is currently being edited.
//! Nothing here touches a transport; the [`Session`](crate::Session)
//! pairs a view with a [`DirectoryApi`](crate::DirectoryApi) and keeps
//! the two reconciled.

use std::fmt;

use roster_core::{Member, MemberDraft, MemberId};

// ============================================================================
// View state
// ============================================================================

/// What the front end is currently showing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewState {
    /// First fetch has not answered yet.
    #[default]
    Loading,
    /// Showing the list; the form feeds a create.
    Idle,
    /// The form holds the named record; a submit replaces it.
    Editing(Member),
}

impl ViewState {
    /// Returns true before the first successful fetch.
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Returns true when the form feeds a create.
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Returns true while a record is being edited.
    pub fn is_editing(&self) -> bool {
        matches!(self, Self::Editing(_))
    }

    /// The record being edited, if any.
    pub fn editing(&self) -> Option<&Member> {
        match self {
            Self::Editing(member) => Some(member),
            _ => None,
        }
    }
}

impl fmt::Display for ViewState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Loading => write!(f, "loading"),
            Self::Idle => write!(f, "idle"),
            Self::Editing(member) => write!(f, "editing member {}", member.id),
        }
    }
}

// ============================================================================
// Form
// ============================================================================

/// The name/role input pair.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberForm {
    /// Name input, verbatim as typed
    pub name: String,
    /// Role input, verbatim as typed
    pub role: String,
}

impl MemberForm {
    /// Pre-fills the form from an existing record.
    pub fn from_member(member: &Member) -> Self {
        Self {
            name: member.name.clone(),
            role: member.role.clone(),
        }
    }

    /// Empties both inputs.
    pub fn clear(&mut self) {
        self.name.clear();
        self.role.clear();
    }

    /// Turns the inputs into a submission draft, trimming surrounding
    /// whitespace. Fails when either field is blank, which is the gate
    /// that keeps bad submissions off the wire.
    pub fn draft(&self) -> roster_core::Result<MemberDraft> {
        let draft = MemberDraft::new(self.name.trim(), self.role.trim());
        draft.validate()?;
        Ok(draft)
    }
}

// ============================================================================
// View
// ============================================================================

/// Local model of the directory as a user sees it.
///
/// All transitions are synchronous and total; a failed request simply
/// means no transition is applied, leaving the view as it was.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DirectoryView {
    members: Vec<Member>,
    form: MemberForm,
    state: ViewState,
}

impl DirectoryView {
    /// A view waiting on its first fetch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records as last reconciled with the transport.
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    /// The current form inputs.
    pub fn form(&self) -> &MemberForm {
        &self.form
    }

    /// The current state.
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Finds a listed record by id.
    pub fn find(&self, id: MemberId) -> Option<&Member> {
        self.members.iter().find(|m| m.id == id)
    }

    /// Sets the name input.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.form.name = name.into();
    }

    /// Sets the role input.
    pub fn set_role(&mut self, role: impl Into<String>) {
        self.form.role = role.into();
    }

    /// Replaces the whole view with a fresh listing: list swapped in,
    /// form cleared, any in-progress edit dropped.
    pub fn loaded(&mut self, members: Vec<Member>) {
        self.members = members;
        self.form.clear();
        self.state = ViewState::Idle;
    }

    /// Starts editing the listed record with the given id, pre-filling
    /// the form. Returns false (and changes nothing) if the id is not
    /// in the list.
    pub fn begin_edit(&mut self, id: MemberId) -> bool {
        let Some(member) = self.find(id).cloned() else {
            return false;
        };
        self.form = MemberForm::from_member(&member);
        self.state = ViewState::Editing(member);
        true
    }

    /// Abandons an edit: form cleared, state back to idle. Safe to call
    /// when nothing is being edited.
    pub fn cancel_edit(&mut self) {
        self.form.clear();
        self.state = ViewState::Idle;
    }

    /// Appends a record the transport just created and resets the form.
    pub fn record_created(&mut self, member: Member) {
        self.members.push(member);
        self.form.clear();
        self.state = ViewState::Idle;
    }

    /// Swaps in a record the transport just updated, keeping its
    /// position, and resets the form. A record no longer listed is
    /// left alone.
    pub fn record_updated(&mut self, member: Member) {
        if let Some(slot) = self.members.iter_mut().find(|m| m.id == member.id) {
            *slot = member;
        }
        self.form.clear();
        self.state = ViewState::Idle;
    }

    /// Drops a record the transport just removed. The form and state
    /// are left alone, so an edit of the removed record stays open.
    pub fn record_removed(&mut self, id: MemberId) {
        self.members.retain(|m| m.id != id);
    }
}
