//! Client side of the todo app.
//!
//! This crate holds everything the web frontend needs that is not drawing:
//!
//! - [`ServerFilter`]: criteria sent as query parameters with a list request
//! - [`LocalFilter`] / [`filter_todos`]: narrowing an already fetched list
//! - [`TodoRepository`]: the remote collection, backed by [`HttpRepository`]
//!   or the in-memory [`FixtureRepository`]
//! - [`TodoList`]: list view state, with one fetch in flight at a time
//! - [`TodoForm`] and [`submit`]: the add form and the creation flow
//!
//! # Example
//!
//! ```ignore
//! use todo_client::prelude::*;
//!
//! let mut list = TodoList::new(HttpRepository::new(&ClientConfig::default()));
//! list.set_server_filter(ServerFilter::new().category("groceries"));
//! let outcome = list.fetch().await;
//! if let FetchEvent::Failed(e) = list.finish_fetch(outcome) {
//!     // show Notice::fetch_failed()
//! }
//! list.set_local_filter(LocalFilter::new().body("pizza"));
//! for todo in list.shown() {
//!     println!("{} - {}", todo.owner, todo.body);
//! }
//! ```

pub mod config;
pub mod create;
pub mod error;
pub mod filter;
pub mod fixture;
pub mod form;
pub mod http;
pub mod list;
pub mod model;
pub mod query;
pub mod repository;

pub use config::ClientConfig;
pub use create::{CreatedTodo, Notice, Route, submit};
pub use error::ApiError;
pub use filter::{LocalFilter, criterion, filter_todos};
pub use fixture::{FixtureRepository, sample_todos};
pub use form::{Field, FieldError, FormErrors, Rule, TodoForm};
pub use http::HttpRepository;
pub use list::{FetchEvent, FetchOutcome, FetchState, TodoList};
pub use model::{NewTodo, Todo};
pub use query::ServerFilter;
pub use repository::TodoRepository;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        ApiError, ClientConfig, CreatedTodo, FetchEvent, FetchState, HttpRepository,
        LocalFilter, NewTodo, Notice, Route, ServerFilter, Todo, TodoForm, TodoList,
        TodoRepository, filter_todos, submit,
    };
}
