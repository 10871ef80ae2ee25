//! Access to the remote todo collection.

use async_trait::async_trait;

use crate::error::ApiError;
use crate::model::{NewTodo, Todo};
use crate::query::ServerFilter;

/// The two operations the client needs from the todo resource.
///
/// Futures are not required to be `Send`: in the browser everything runs on
/// one thread and the HTTP futures are tied to it.
#[async_trait(?Send)]
pub trait TodoRepository {
    /// Todos matching the server-side criteria, in server order.
    async fn list(&self, filter: &ServerFilter) -> Result<Vec<Todo>, ApiError>;

    /// Store a new todo and return the identifier the server assigned.
    async fn create(&self, todo: &NewTodo) -> Result<String, ApiError>;
}
