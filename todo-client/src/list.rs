//! State behind the todo list view.
//!
//! [`TodoList`] keeps the last list the server returned plus the local
//! criteria, and derives the displayed list from the two. Fetches are
//! futures handed back to the caller to drive (`spawn_local` in the browser);
//! their outcome is fed back through [`TodoList::finish_fetch`].
//!
//! Only one fetch is live at a time. Starting another aborts the previous one
//! and bumps a generation counter, so an outcome that still arrives from an
//! older request is dropped instead of overwriting newer results.

use futures::future::{AbortHandle, Aborted, LocalBoxFuture, abortable};
use futures::FutureExt;

use crate::error::ApiError;
use crate::filter::LocalFilter;
use crate::model::Todo;
use crate::query::ServerFilter;
use crate::repository::TodoRepository;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchState {
    Idle,
    Fetching,
}

/// Result of a fetch future, to be passed to [`TodoList::finish_fetch`].
#[derive(Debug)]
pub struct FetchOutcome {
    generation: u64,
    result: Result<Result<Vec<Todo>, ApiError>, Aborted>,
}

/// What applying a [`FetchOutcome`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchEvent {
    /// The server list was replaced and the displayed list recomputed.
    Fetched { shown: usize },
    /// The request failed; the displayed list is unchanged.
    Failed(ApiError),
    /// The outcome belonged to a cancelled or superseded fetch.
    Stale,
}

pub struct TodoList<R> {
    repository: R,
    server_filter: ServerFilter,
    local_filter: LocalFilter,
    server_todos: Vec<Todo>,
    shown: Vec<Todo>,
    generation: u64,
    in_flight: Option<AbortHandle>,
}

impl<R> TodoList<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            server_filter: ServerFilter::default(),
            local_filter: LocalFilter::default(),
            server_todos: Vec::new(),
            shown: Vec::new(),
            generation: 0,
            in_flight: None,
        }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn state(&self) -> FetchState {
        if self.in_flight.is_some() {
            FetchState::Fetching
        } else {
            FetchState::Idle
        }
    }

    /// The list as last returned by the server.
    pub fn server_todos(&self) -> &[Todo] {
        &self.server_todos
    }

    /// The server list narrowed by the local criteria.
    pub fn shown(&self) -> &[Todo] {
        &self.shown
    }

    pub fn server_filter(&self) -> &ServerFilter {
        &self.server_filter
    }

    pub fn local_filter(&self) -> &LocalFilter {
        &self.local_filter
    }

    /// Criteria for the next fetch. Does not start one.
    pub fn set_server_filter(&mut self, filter: ServerFilter) {
        self.server_filter = filter;
    }

    /// Replace the local criteria and recompute the displayed list.
    pub fn set_local_filter(&mut self, filter: LocalFilter) {
        if self.local_filter != filter {
            self.local_filter = filter;
            self.refresh();
        }
    }

    /// Abort the in-flight fetch, if any. Its outcome will be [`FetchEvent::Stale`].
    pub fn cancel(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            tracing::debug!(generation = self.generation, "Cancelling todo fetch");
            handle.abort();
        }
        self.generation = self.generation.wrapping_add(1);
    }

    /// Apply the outcome of a fetch future.
    pub fn finish_fetch(&mut self, outcome: FetchOutcome) -> FetchEvent {
        if outcome.generation != self.generation {
            tracing::debug!(
                generation = outcome.generation,
                current = self.generation,
                "Dropping stale todo fetch"
            );
            return FetchEvent::Stale;
        }
        self.in_flight = None;

        match outcome.result {
            Err(Aborted) => FetchEvent::Stale,
            Ok(Ok(todos)) => {
                self.server_todos = todos;
                self.refresh();
                FetchEvent::Fetched {
                    shown: self.shown.len(),
                }
            }
            Ok(Err(e)) => {
                tracing::warn!(error = %e, "Failed to fetch todos");
                FetchEvent::Failed(e)
            }
        }
    }

    fn refresh(&mut self) {
        self.shown = self.local_filter.apply(&self.server_todos);
    }
}

impl<R> TodoList<R>
where
    R: TodoRepository + Clone + 'static,
{
    /// Start fetching with the current server criteria.
    ///
    /// Any earlier fetch is aborted first. The returned future resolves even
    /// when aborted, so it can always be fed back to [`Self::finish_fetch`].
    pub fn fetch(&mut self) -> LocalBoxFuture<'static, FetchOutcome> {
        self.cancel();
        let generation = self.generation;
        let repository = self.repository.clone();
        let filter = self.server_filter.clone();

        let (request, handle) = abortable(async move { repository.list(&filter).await });
        self.in_flight = Some(handle);

        async move {
            FetchOutcome {
                generation,
                result: request.await,
            }
        }
        .boxed_local()
    }
}

impl<R> Drop for TodoList<R> {
    fn drop(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            handle.abort();
        }
    }
}
