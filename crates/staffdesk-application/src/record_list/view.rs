//! Observable state of the record list.

use staffdesk_core::StaffdeskError;
use staffdesk_core::employee::{Employee, EmployeeId, Page, PageQuery};

/// Snapshot of the list as a presentation layer renders it.
#[derive(Debug, Clone, PartialEq)]
pub struct ListView {
    /// Search text as typed, ahead of the debounce
    pub search_input: String,
    /// Query of the most recently issued fetch
    pub query: PageQuery,
    /// Last successfully applied page; `None` until the first fetch lands
    pub result: Option<Page<Employee>>,
    /// True while the latest fetch is outstanding
    pub loading: bool,
    /// Failure of the latest fetch, if it failed
    pub error: Option<StaffdeskError>,
    /// A debounced search is waiting for its quiet window to elapse
    pub search_pending: bool,
    /// Whether destructive and editing controls should be shown
    pub can_manage: bool,
}

impl ListView {
    pub fn items(&self) -> &[Employee] {
        self.result.as_ref().map_or(&[], |page| page.items.as_slice())
    }

    pub fn total_pages(&self) -> usize {
        self.result.as_ref().map_or(0, |page| page.total_pages)
    }

    pub fn is_loaded(&self) -> bool {
        self.result.is_some()
    }
}

/// What happened to a fetch request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The response replaced the displayed page
    Applied,
    /// A later request was issued first; the response was dropped
    Superseded,
    /// The request was a no-op and nothing was sent
    Ignored,
}

/// What happened to a delete request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The caller declined the confirmation; nothing was sent
    Cancelled,
    /// The server deleted the record. `removed_locally` is false when the
    /// record was not on the displayed page.
    Deleted { removed_locally: bool },
}

/// Asks the user to confirm a destructive action.
pub trait DeleteConfirmation: Send + Sync {
    /// Returns true to proceed with deleting `id`. `name` is the display
    /// name when the record is on the current page.
    fn confirm_delete(&self, id: EmployeeId, name: Option<&str>) -> bool;
}

/// Confirms everything. Used for non-interactive callers (`--yes`).
pub struct AlwaysConfirm;

impl DeleteConfirmation for AlwaysConfirm {
    fn confirm_delete(&self, _id: EmployeeId, _name: Option<&str>) -> bool {
        true
    }
}
