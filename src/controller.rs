//! Page controller tying view state, resource service and notifications
//! together.
//!
//! The controller owns the list screen's [`ViewState`] and performs
//! fetches on its behalf. Each fetch is tagged with the generation of the
//! state that requested it; a response whose generation is no longer
//! current is dropped rather than rendered, so a slow earlier search can
//! never overwrite the rows of a newer one. In-flight requests are not
//! aborted, only their results discarded.

use std::sync::Arc;

use serde::{Serialize, de::DeserializeOwned};
use tracing::warn;

use crate::error::Result;
use crate::notify::{NotificationKind, NotificationSink};
use crate::query::Page;
use crate::resource::ResourceService;
use crate::state::{ViewAction, ViewState, reduce};
use crate::types::ResourceId;

/// A tag for one list fetch: the query to run and the generation that
/// requested it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    /// Generation of the view state that issued this fetch.
    pub generation: u64,
    /// The query to execute.
    pub query: crate::query::ListQuery,
}

/// Controller for one list screen.
///
/// Generic over the record type; the same controller drives the students
/// and courses pages.
///
/// ## Example
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use rosterly::prelude::*;
///
/// let mut controller = PageController::new(client.students(), Arc::new(TracingNotifier));
/// if let Some(page) = controller.apply(ViewAction::SetSearch("ann".into())).await? {
///     render(page);
/// }
/// ```
pub struct PageController<T> {
    service: ResourceService<T>,
    state: ViewState,
    notifier: Arc<dyn NotificationSink>,
}

impl<T> PageController<T>
where
    T: Serialize + DeserializeOwned + Clone,
{
    /// Creates a controller in the initial view state.
    pub fn new(service: ResourceService<T>, notifier: Arc<dyn NotificationSink>) -> Self {
        Self {
            service,
            state: ViewState::initial(),
            notifier,
        }
    }

    /// Returns the current view state.
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Applies an action to the view state and returns the fetch it calls
    /// for.
    ///
    /// Use this with [`resolve`](PageController::resolve) when driving
    /// fetches externally; [`apply`](PageController::apply) wraps the pair.
    pub fn begin(&mut self, action: ViewAction) -> FetchTicket {
        self.state = reduce(&self.state, action);
        FetchTicket {
            generation: self.state.generation,
            query: self.state.query.clone(),
        }
    }

    /// Returns `true` if the ticket belongs to the current view state.
    pub fn is_current(&self, ticket: &FetchTicket) -> bool {
        ticket.generation == self.state.generation
    }

    /// Accepts a fetched page if its ticket is still current.
    ///
    /// A stale page (one superseded by a later action) is dropped and
    /// `None` returned; the caller keeps whatever it is showing until the
    /// current fetch resolves.
    pub fn resolve(&self, ticket: &FetchTicket, page: Page<T>) -> Option<Page<T>> {
        if self.is_current(ticket) {
            Some(page)
        } else {
            warn!(
                stale = ticket.generation,
                current = self.state.generation,
                "dropping stale list response"
            );
            None
        }
    }

    /// Applies an action, runs the resulting fetch and returns the page,
    /// or `None` if the response went stale while in flight.
    ///
    /// Fetch failures notify the sink and propagate to the caller; the
    /// view state keeps the new query so a manual retry re-runs it.
    pub async fn apply(&mut self, action: ViewAction) -> Result<Option<Page<T>>> {
        let ticket = self.begin(action);
        match self.service.list(&ticket.query).await {
            Ok(page) => Ok(self.resolve(&ticket, page)),
            Err(e) => {
                self.notifier
                    .notify(NotificationKind::Error, "Failed to load records");
                Err(e)
            }
        }
    }

    /// Re-fetches the current query, e.g. after a mutation.
    pub async fn refresh(&mut self) -> Result<Option<Page<T>>> {
        self.apply(ViewAction::Refresh).await
    }

    /// Creates a record, notifying the outcome.
    ///
    /// On success the caller is expected to [`refresh`](PageController::refresh)
    /// the list and re-fetch statistics; mutations never update local state
    /// optimistically.
    pub async fn create(&self, record: &T) -> Result<T> {
        match self.service.create(record).await {
            Ok(created) => {
                self.notifier
                    .notify(NotificationKind::Success, "Record created");
                Ok(created)
            }
            Err(e) => {
                self.notifier
                    .notify(NotificationKind::Error, "Failed to create record");
                Err(e)
            }
        }
    }

    /// Updates a record, notifying the outcome.
    pub async fn update(&self, id: &ResourceId, record: &T) -> Result<T> {
        match self.service.update(id, record).await {
            Ok(updated) => {
                self.notifier
                    .notify(NotificationKind::Success, "Record updated");
                Ok(updated)
            }
            Err(e) => {
                self.notifier
                    .notify(NotificationKind::Error, "Failed to update record");
                Err(e)
            }
        }
    }

    /// Deletes a record, notifying the outcome.
    pub async fn delete(&self, id: &ResourceId) -> Result<()> {
        match self.service.delete(id).await {
            Ok(()) => {
                self.notifier
                    .notify(NotificationKind::Success, "Record deleted");
                Ok(())
            }
            Err(e) => {
                self.notifier
                    .notify(NotificationKind::Error, "Failed to delete record");
                Err(e)
            }
        }
    }
}

impl<T> std::fmt::Debug for PageController<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageController")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
