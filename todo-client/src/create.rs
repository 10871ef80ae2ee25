//! Submitting a new todo, and what the UI does afterwards.

use std::time::Duration;

use crate::error::ApiError;
use crate::model::NewTodo;
use crate::query::ServerFilter;
use crate::repository::TodoRepository;

/// Client-side views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    TodoList,
    NewTodo,
    TodoDetail(String),
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::TodoList => "/todos".to_string(),
            Route::NewTodo => "/todos/new".to_string(),
            Route::TodoDetail(id) => format!("/todos/{id}"),
        }
    }

    /// Criteria for the fetch entering this view needs, if any.
    ///
    /// The detail view looks its todo up in an unfiltered list, so a todo that
    /// does not match the typed list criteria is still found. The list view
    /// uses `typed` as is.
    pub fn fetch_filter(&self, typed: ServerFilter) -> Option<ServerFilter> {
        match self {
            Route::TodoList => Some(typed),
            Route::NewTodo => None,
            Route::TodoDetail(_) => Some(ServerFilter::new()),
        }
    }
}

/// A transient message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    /// Label of the dismiss button, if any.
    pub action: Option<&'static str>,
    pub duration: Duration,
}

impl Notice {
    pub fn created(owner: &str) -> Self {
        Self {
            message: format!("Created Todo {owner}"),
            action: None,
            duration: Duration::from_secs(2),
        }
    }

    pub fn create_failed() -> Self {
        Self {
            message: "Failed to create the todo".to_string(),
            action: Some("OK"),
            duration: Duration::from_secs(5),
        }
    }

    pub fn fetch_failed() -> Self {
        Self {
            message: "Failed to load todos".to_string(),
            action: Some("OK"),
            duration: Duration::from_secs(5),
        }
    }
}

/// A todo the server accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedTodo {
    pub id: String,
    pub owner: String,
}

impl CreatedTodo {
    /// Where to go next: the new todo's detail view.
    pub fn route(&self) -> Route {
        Route::TodoDetail(self.id.clone())
    }

    pub fn notice(&self) -> Notice {
        Notice::created(&self.owner)
    }
}

/// Send `todo` to the server once. No retry on failure.
pub async fn submit<R>(repository: &R, todo: NewTodo) -> Result<CreatedTodo, ApiError>
where
    R: TodoRepository + ?Sized,
{
    match repository.create(&todo).await {
        Ok(id) => {
            tracing::info!(%id, owner = %todo.owner, "Created todo");
            Ok(CreatedTodo {
                id,
                owner: todo.owner,
            })
        }
        Err(e) => {
            tracing::warn!(error = %e, "Failed to create todo");
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::FixtureRepository;

    fn new_todo() -> NewTodo {
        NewTodo {
            owner: "Barry".into(),
            status: true,
            category: "video games".into(),
            body: "Get all 120 stars in Super Mario 64".into(),
        }
    }

    #[tokio::test]
    async fn success_returns_server_id() {
        let repo = FixtureRepository::sample().created_id("testid");
        let created = submit(&repo, new_todo()).await.unwrap();

        assert_eq!(created.id, "testid");
        assert_eq!(created.route(), Route::TodoDetail("testid".into()));
        assert_eq!(created.route().path(), "/todos/testid");
        assert_eq!(created.notice().message, "Created Todo Barry");
        assert_eq!(created.notice().duration, Duration::from_secs(2));
        assert_eq!(repo.create_requests(), vec![new_todo()]);
    }

    #[tokio::test]
    async fn failure_skips_success_path() {
        let repo = FixtureRepository::failing();
        let mut navigated = None;

        match submit(&repo, new_todo()).await {
            Ok(created) => navigated = Some(created.route()),
            Err(e) => assert!(e.to_string().starts_with("Request failed")),
        }

        assert_eq!(navigated, None);
        assert_eq!(repo.create_requests().len(), 1);
    }

    #[test]
    fn route_paths() {
        assert_eq!(Route::TodoList.path(), "/todos");
        assert_eq!(Route::NewTodo.path(), "/todos/new");
    }

    #[test]
    fn detail_view_fetches_without_list_criteria() {
        let typed = ServerFilter::new().owner("Fry").category("video games").status(false);

        assert_eq!(
            Route::TodoDetail("testid".into()).fetch_filter(typed.clone()),
            Some(ServerFilter::new())
        );
        assert_eq!(Route::TodoList.fetch_filter(typed.clone()), Some(typed.clone()));
        assert_eq!(Route::NewTodo.fetch_filter(typed), None);
    }

    #[tokio::test]
    async fn created_todo_is_found_despite_list_criteria() {
        let repo = FixtureRepository::sample().created_id("Workmans_id");
        let created = submit(&repo, new_todo()).await.unwrap();
        let typed = ServerFilter::new().owner("Fry").status(true);

        let mut list = crate::list::TodoList::new(repo.clone());
        let filter = created.route().fetch_filter(typed.clone()).unwrap();
        list.set_server_filter(filter);
        let pending = list.fetch();
        list.finish_fetch(pending.await);

        assert!(list.server_todos().iter().any(|t| t.id == created.id));
        assert_eq!(repo.list_requests(), vec![ServerFilter::new()]);

        list.set_server_filter(Route::TodoList.fetch_filter(typed.clone()).unwrap());
        let pending = list.fetch();
        list.finish_fetch(pending.await);
        assert_eq!(repo.list_requests().last(), Some(&typed));
    }

    #[test]
    fn failure_notice_waits_for_acknowledgement() {
        let notice = Notice::create_failed();
        assert_eq!(notice.message, "Failed to create the todo");
        assert_eq!(notice.action, Some("OK"));
        assert_eq!(notice.duration, Duration::from_secs(5));
    }
}
