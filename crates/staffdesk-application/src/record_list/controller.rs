//! RecordListController - the searchable, sortable, paginated record list.
//!
//! Every fetch is tagged with a sequence number when it is issued. A response
//! is applied only if no later fetch has been issued since, so the displayed
//! page always belongs to the most recent query regardless of the order in
//! which responses arrive. Superseded requests are not aborted; their pages
//! are dropped, but a failure is still returned to whoever issued them.

use super::view::{DeleteConfirmation, DeleteOutcome, FetchOutcome, ListView};
use staffdesk_core::config::ClientConfig;
use staffdesk_core::employee::{Employee, EmployeeApi, EmployeeId, Page, PageQuery, SortKey};
use staffdesk_core::session::Session;
use staffdesk_core::{Result, StaffdeskError};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, watch};
use tokio_util::sync::CancellationToken;

/// Tunables for the list controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListSettings {
    pub page_size: usize,
    /// Quiet window after the last keystroke before a search is fetched
    pub search_debounce: Duration,
    /// Upper bound for a single API call; expiry counts as a failure
    pub request_timeout: Duration,
}

impl ListSettings {
    pub fn from_config(config: &ClientConfig) -> Self {
        Self {
            page_size: config.page_size,
            search_debounce: config.search_debounce(),
            request_timeout: config.request_timeout(),
        }
    }
}

impl Default for ListSettings {
    fn default() -> Self {
        Self::from_config(&ClientConfig::default())
    }
}

struct ListState {
    search_input: String,
    query: PageQuery,
    result: Option<Page<Employee>>,
    loading: bool,
    error: Option<StaffdeskError>,
    /// Tag of the most recently issued fetch
    issued_seq: u64,
    pending_search: Option<CancellationToken>,
    /// Records deleted while fetches were in flight, with the latest fetch
    /// tag at the time of the delete
    recent_deletes: Vec<(u64, EmployeeId)>,
}

impl ListState {
    fn new(page_size: usize) -> Self {
        Self {
            search_input: String::new(),
            query: PageQuery::first(page_size),
            result: None,
            loading: false,
            error: None,
            issued_seq: 0,
            pending_search: None,
            recent_deletes: Vec::new(),
        }
    }

    fn view(&self, can_manage: bool) -> ListView {
        ListView {
            search_input: self.search_input.clone(),
            query: self.query.clone(),
            result: self.result.clone(),
            loading: self.loading,
            error: self.error.clone(),
            search_pending: self.pending_search.is_some(),
            can_manage,
        }
    }

    /// Replaces the displayed page with the response of fetch `seq`,
    /// leaving out records deleted after that fetch was issued.
    fn apply_page(&mut self, seq: u64, mut page: Page<Employee>) {
        page.items.retain(|e| {
            !self
                .recent_deletes
                .iter()
                .any(|(deleted_at, id)| *deleted_at >= seq && *id == e.id)
        });
        self.recent_deletes.retain(|(deleted_at, _)| *deleted_at > seq);
        self.result = Some(page);
        self.error = None;
    }

    fn cancel_pending_search(&mut self) {
        if let Some(token) = self.pending_search.take() {
            token.cancel();
        }
    }
}

struct Inner {
    api: Arc<dyn EmployeeApi>,
    session: watch::Receiver<Session>,
    settings: ListSettings,
    state: Mutex<ListState>,
    view: watch::Sender<ListView>,
}

/// Controller for the employee list screen.
///
/// Cloning is cheap; clones share the same state. The debounce timer runs on
/// a spawned task, so a tokio runtime must be active.
#[derive(Clone)]
pub struct RecordListController {
    inner: Arc<Inner>,
}

impl RecordListController {
    /// Creates a controller with nothing loaded yet.
    ///
    /// # Arguments
    ///
    /// * `api` - Record API client
    /// * `session` - Session receiver, read for the role when building views
    /// * `settings` - Page size, debounce window and request timeout
    pub fn new(
        api: Arc<dyn EmployeeApi>,
        session: watch::Receiver<Session>,
        settings: ListSettings,
    ) -> Self {
        let state = ListState::new(settings.page_size);
        let (view, _) = watch::channel(state.view(session.borrow().can_manage_records()));

        Self {
            inner: Arc::new(Inner {
                api,
                session,
                settings,
                state: Mutex::new(state),
                view,
            }),
        }
    }

    /// Current snapshot of the list.
    pub fn view(&self) -> ListView {
        let mut view = self.inner.view.borrow().clone();
        view.can_manage = self.can_manage();
        view
    }

    /// Receiver that is notified on every state change.
    pub fn subscribe(&self) -> watch::Receiver<ListView> {
        self.inner.view.subscribe()
    }

    fn can_manage(&self) -> bool {
        self.inner.session.borrow().can_manage_records()
    }

    fn publish(&self, state: &ListState) {
        self.inner.view.send_replace(state.view(self.can_manage()));
    }

    /// Updates the search text and schedules a debounced fetch.
    ///
    /// Calling again within the debounce window cancels the pending fetch and
    /// restarts the window. The fetch that eventually fires always targets
    /// page 0. Its failure is recorded in the view rather than returned.
    pub async fn set_search_term(&self, text: impl Into<String>) {
        let text = text.into();
        let token = {
            let mut state = self.inner.state.lock().await;
            if state.search_input == text {
                return;
            }
            state.cancel_pending_search();
            state.search_input = text.clone();
            let token = CancellationToken::new();
            state.pending_search = Some(token.clone());
            self.publish(&state);
            token
        };

        let controller = self.clone();
        let delay = self.inner.settings.search_debounce;
        let cancelled = token.clone();
        tokio::spawn(async move {
            tokio::select! {
                _ = cancelled.cancelled() => {
                    tracing::trace!("[RecordList] Debounced search for '{}' cancelled", text);
                }
                _ = tokio::time::sleep(delay) => {
                    controller.settle_search(text, token).await;
                }
            }
        });
    }

    async fn settle_search(&self, text: String, token: CancellationToken) {
        let (seq, query) = {
            let mut state = self.inner.state.lock().await;
            // Cancellation happens under the lock, so this check is final.
            if token.is_cancelled() {
                return;
            }
            state.pending_search = None;
            let query = PageQuery {
                search_term: text,
                page_index: 0,
                ..state.query.clone()
            };
            (self.begin_fetch(&mut state, query.clone()), query)
        };

        if let Err(e) = self.complete_fetch(seq, &query).await {
            tracing::warn!("[RecordList] Search fetch failed: {}", e);
        }
    }

    /// Fetches a search immediately, skipping the debounce window.
    ///
    /// Any pending debounced search is cancelled.
    pub async fn submit_search(&self, text: impl Into<String>) -> Result<FetchOutcome> {
        let text = text.into();
        let (seq, query) = {
            let mut state = self.inner.state.lock().await;
            state.cancel_pending_search();
            state.search_input = text.clone();
            let query = PageQuery {
                search_term: text,
                page_index: 0,
                ..state.query.clone()
            };
            (self.begin_fetch(&mut state, query.clone()), query)
        };
        self.complete_fetch(seq, &query).await
    }

    /// Fetches page 0 for `search_term` and `sort_key` with a single request.
    ///
    /// Any pending debounced search is cancelled. Used when both are known
    /// up front, e.g. when a view opens from a link carrying both.
    pub async fn load(
        &self,
        search_term: impl Into<String>,
        sort_key: Option<SortKey>,
    ) -> Result<FetchOutcome> {
        let search_term = search_term.into();
        let (seq, query) = {
            let mut state = self.inner.state.lock().await;
            state.cancel_pending_search();
            state.search_input = search_term.clone();
            let query = PageQuery {
                search_term,
                sort_key,
                page_index: 0,
                page_size: self.inner.settings.page_size,
            };
            (self.begin_fetch(&mut state, query.clone()), query)
        };
        self.complete_fetch(seq, &query).await
    }

    /// Requests page `index` at the current search term and sort key.
    ///
    /// Indices outside `[0, total_pages)` are ignored, as is any call made
    /// before the first page has loaded.
    ///
    /// # Errors
    ///
    /// The fetch failure, in which case the previous page stays displayed.
    pub async fn set_page(&self, index: i64) -> Result<FetchOutcome> {
        let (seq, query) = {
            let mut state = self.inner.state.lock().await;
            let in_range = state
                .result
                .as_ref()
                .is_some_and(|page| page.contains_page(index));
            if !in_range {
                tracing::debug!("[RecordList] Ignoring out of range page {}", index);
                return Ok(FetchOutcome::Ignored);
            }
            let query = PageQuery {
                page_index: index as usize,
                ..state.query.clone()
            };
            (self.begin_fetch(&mut state, query.clone()), query)
        };
        self.complete_fetch(seq, &query).await
    }

    /// Applies a sort key coming from navigation state.
    ///
    /// A changed key refetches from page 0; an unchanged one is ignored.
    pub async fn set_sort_key(&self, sort_key: Option<SortKey>) -> Result<FetchOutcome> {
        let (seq, query) = {
            let mut state = self.inner.state.lock().await;
            if state.query.sort_key == sort_key {
                return Ok(FetchOutcome::Ignored);
            }
            let query = PageQuery {
                sort_key,
                page_index: 0,
                ..state.query.clone()
            };
            (self.begin_fetch(&mut state, query.clone()), query)
        };
        self.complete_fetch(seq, &query).await
    }

    /// Refetches the current query. Also used for the initial load.
    pub async fn refresh(&self) -> Result<FetchOutcome> {
        let (seq, query) = {
            let mut state = self.inner.state.lock().await;
            let query = state.query.clone();
            (self.begin_fetch(&mut state, query.clone()), query)
        };
        self.complete_fetch(seq, &query).await
    }

    fn begin_fetch(&self, state: &mut ListState, query: PageQuery) -> u64 {
        state.issued_seq += 1;
        tracing::debug!(
            "[RecordList] Fetch #{}: search='{}' sort={:?} page={}",
            state.issued_seq,
            query.search_term,
            query.sort_key.as_ref().map(ToString::to_string),
            query.page_index
        );
        state.query = query;
        state.loading = true;
        self.publish(state);
        state.issued_seq
    }

    async fn complete_fetch(&self, seq: u64, query: &PageQuery) -> Result<FetchOutcome> {
        let response = self.with_timeout(self.inner.api.list_records(query)).await;

        let mut state = self.inner.state.lock().await;
        if seq != state.issued_seq {
            tracing::debug!(
                "[RecordList] Dropping response of fetch #{} (latest is #{})",
                seq,
                state.issued_seq
            );
            // The displayed state belongs to the later fetch; the caller
            // still hears about the failure.
            return match response {
                Ok(_) => Ok(FetchOutcome::Superseded),
                Err(e) => {
                    tracing::warn!("[RecordList] Superseded fetch #{} failed: {}", seq, e);
                    Err(e)
                }
            };
        }

        state.loading = false;
        match response {
            Ok(page) => {
                state.apply_page(seq, page);
                self.publish(&state);
                Ok(FetchOutcome::Applied)
            }
            Err(e) => {
                tracing::warn!("[RecordList] Fetch #{} failed: {}", seq, e);
                state.error = Some(e.clone());
                self.publish(&state);
                Err(e)
            }
        }
    }

    /// Deletes a record after the caller confirms.
    ///
    /// On success the record is removed from the displayed page without a
    /// refetch; `total_pages` is left as it was until the next fetch. Pages
    /// from fetches already in flight have the record filtered out when they
    /// land. On failure the list is untouched.
    ///
    /// # Errors
    ///
    /// `AuthorizationDenied` when the role may not delete, otherwise the
    /// network or server failure.
    pub async fn delete_record(
        &self,
        id: EmployeeId,
        confirmation: &dyn DeleteConfirmation,
    ) -> Result<DeleteOutcome> {
        let name = {
            let state = self.inner.state.lock().await;
            state
                .result
                .as_ref()
                .and_then(|page| page.items.iter().find(|e| e.id == id))
                .map(|e| e.name.clone())
        };

        if !confirmation.confirm_delete(id, name.as_deref()) {
            tracing::debug!("[RecordList] Delete of {} cancelled by user", id);
            return Ok(DeleteOutcome::Cancelled);
        }

        if let Err(e) = self.with_timeout(self.inner.api.delete_record(id)).await {
            if e.is_authorization_denied() {
                tracing::warn!("[RecordList] Delete of {} denied for current role", id);
            } else {
                tracing::error!("[RecordList] Delete of {} failed: {}", id, e);
            }
            return Err(e);
        }

        let mut state = self.inner.state.lock().await;
        if state.loading {
            let seq = state.issued_seq;
            state.recent_deletes.push((seq, id));
        }
        let removed_locally = match state.result.as_mut() {
            Some(page) => {
                let before = page.items.len();
                page.items.retain(|e| e.id != id);
                page.items.len() != before
            }
            None => false,
        };
        if removed_locally {
            self.publish(&state);
        }

        tracing::info!("[RecordList] Deleted employee {}", id);
        Ok(DeleteOutcome::Deleted { removed_locally })
    }

    async fn with_timeout<T>(&self, call: impl Future<Output = Result<T>>) -> Result<T> {
        match tokio::time::timeout(self.inner.settings.request_timeout, call).await {
            Ok(result) => result,
            Err(_) => Err(StaffdeskError::Timeout),
        }
    }
}
