//! HTTP-backed [`TodoRepository`].
//!
//! In the browser requests go through `gloo-net`; natively through `reqwest`.

use async_trait::async_trait;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::model::{NewTodo, Todo};
use crate::query::ServerFilter;
use crate::repository::TodoRepository;

/// Talks to the todo collection at `<api_url>todos`.
#[derive(Debug, Clone)]
pub struct HttpRepository {
    todo_url: String,
    #[cfg(not(target_arch = "wasm32"))]
    client: reqwest::Client,
}

impl HttpRepository {
    pub fn new(config: &ClientConfig) -> Self {
        Self::with_todo_url(config.todo_url())
    }

    /// Use `todo_url` as the collection endpoint directly.
    pub fn with_todo_url(todo_url: impl Into<String>) -> Self {
        Self {
            todo_url: todo_url.into(),
            #[cfg(not(target_arch = "wasm32"))]
            client: reqwest::Client::new(),
        }
    }

    pub fn todo_url(&self) -> &str {
        &self.todo_url
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[async_trait(?Send)]
impl TodoRepository for HttpRepository {
    async fn list(&self, filter: &ServerFilter) -> Result<Vec<Todo>, ApiError> {
        let url = filter.list_url(&self.todo_url);
        tracing::debug!(%url, "Listing todos");

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(ApiError::status(response.status().as_u16()));
        }
        Ok(response.json().await?)
    }

    async fn create(&self, todo: &NewTodo) -> Result<String, ApiError> {
        tracing::debug!(url = %self.todo_url, owner = %todo.owner, "Creating todo");

        let response = self.client.post(&self.todo_url).json(todo).send().await?;
        if !response.status().is_success() {
            return Err(ApiError::status(response.status().as_u16()));
        }
        let created: crate::model::Created = response.json().await?;
        Ok(created.id)
    }
}

#[cfg(target_arch = "wasm32")]
#[async_trait(?Send)]
impl TodoRepository for HttpRepository {
    async fn list(&self, filter: &ServerFilter) -> Result<Vec<Todo>, ApiError> {
        use gloo_net::http::Request;

        let url = filter.list_url(&self.todo_url);
        tracing::debug!(%url, "Listing todos");

        let response = Request::get(&url).send().await?;
        if !response.ok() {
            return Err(ApiError::status(response.status()));
        }
        Ok(response.json().await?)
    }

    async fn create(&self, todo: &NewTodo) -> Result<String, ApiError> {
        use gloo_net::http::Request;

        tracing::debug!(url = %self.todo_url, owner = %todo.owner, "Creating todo");

        let response = Request::post(&self.todo_url).json(todo)?.send().await?;
        if !response.ok() {
            return Err(ApiError::status(response.status()));
        }
        let created: crate::model::Created = response.json().await?;
        Ok(created.id)
    }
}
