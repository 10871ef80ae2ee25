//! In-memory stand-in for the remote todo resource.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::error::ApiError;
use crate::model::{NewTodo, Todo};
use crate::query::ServerFilter;
use crate::repository::TodoRepository;

/// The four todos used across tests and the offline demo.
pub fn sample_todos() -> Vec<Todo> {
    vec![
        Todo {
            id: "Frys_id".into(),
            owner: "Fry".into(),
            status: true,
            category: "video games".into(),
            body: "Catch five fish in Animal Crossing".into(),
        },
        Todo {
            id: "Barrys_id".into(),
            owner: "Barry".into(),
            status: true,
            category: "video games".into(),
            body: "Get all 120 stars in Super Mario 64".into(),
        },
        Todo {
            id: "Blanches_id".into(),
            owner: "Blanche".into(),
            status: true,
            category: "software design".into(),
            body: "Finish lab 4".into(),
        },
        Todo {
            id: "Workmans_id".into(),
            owner: "Workman".into(),
            status: false,
            category: "groceries".into(),
            body: "Get 4 frozen pizzas".into(),
        },
    ]
}

#[derive(Debug, Default)]
struct Recorded {
    lists: Vec<ServerFilter>,
    creates: Vec<NewTodo>,
}

/// A repository answering from a fixed list.
///
/// `list` ignores its criteria and returns every todo, `create` always hands
/// back the same identifier. Calls are recorded so tests can inspect them.
#[derive(Debug, Clone)]
pub struct FixtureRepository {
    todos: Arc<Vec<Todo>>,
    created_id: String,
    fail: Arc<AtomicBool>,
    recorded: Arc<Mutex<Recorded>>,
}

impl FixtureRepository {
    pub fn new(todos: Vec<Todo>) -> Self {
        Self {
            todos: Arc::new(todos),
            created_id: "testid".into(),
            fail: Arc::default(),
            recorded: Arc::default(),
        }
    }

    /// A repository over [`sample_todos`].
    pub fn sample() -> Self {
        Self::new(sample_todos())
    }

    /// A repository whose every request fails.
    pub fn failing() -> Self {
        let repo = Self::new(Vec::new());
        repo.set_failing(true);
        repo
    }

    /// Make later requests fail (or succeed again). Shared by all clones.
    pub fn set_failing(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    pub fn created_id(mut self, id: impl Into<String>) -> Self {
        self.created_id = id.into();
        self
    }

    /// Criteria of every list request so far.
    pub fn list_requests(&self) -> Vec<ServerFilter> {
        self.recorded
            .lock()
            .map(|r| r.lists.clone())
            .unwrap_or_default()
    }

    /// Payloads of every create request so far.
    pub fn create_requests(&self) -> Vec<NewTodo> {
        self.recorded
            .lock()
            .map(|r| r.creates.clone())
            .unwrap_or_default()
    }
}

#[async_trait(?Send)]
impl TodoRepository for FixtureRepository {
    async fn list(&self, filter: &ServerFilter) -> Result<Vec<Todo>, ApiError> {
        if let Ok(mut recorded) = self.recorded.lock() {
            recorded.lists.push(filter.clone());
        }
        if self.fail.load(Ordering::SeqCst) {
            return Err(ApiError::new("fixture repository is set to fail"));
        }
        Ok(self.todos.to_vec())
    }

    async fn create(&self, todo: &NewTodo) -> Result<String, ApiError> {
        if let Ok(mut recorded) = self.recorded.lock() {
            recorded.creates.push(todo.clone());
        }
        if self.fail.load(Ordering::SeqCst) {
            return Err(ApiError::new("fixture repository is set to fail"));
        }
        Ok(self.created_id.clone())
    }
}
