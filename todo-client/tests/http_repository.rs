//! HTTP repository against an in-process todo API.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::{Query, RawQuery, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use todo_client::model::Created;
use todo_client::prelude::*;
use todo_client::sample_todos;

#[derive(Clone, Default)]
struct Recorder {
    queries: Arc<Mutex<Vec<Option<String>>>>,
    params: Arc<Mutex<Vec<HashMap<String, String>>>>,
    bodies: Arc<Mutex<Vec<NewTodo>>>,
}

async fn list_todos(
    State(rec): State<Recorder>,
    RawQuery(raw): RawQuery,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Vec<Todo>> {
    rec.queries.lock().unwrap().push(raw);
    rec.params.lock().unwrap().push(params);
    Json(sample_todos())
}

async fn add_todo(State(rec): State<Recorder>, Json(todo): Json<NewTodo>) -> Json<Created> {
    rec.bodies.lock().unwrap().push(todo);
    Json(Created {
        id: "testid".into(),
    })
}

async fn broken() -> StatusCode {
    StatusCode::INTERNAL_SERVER_ERROR
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter("todo_client=debug")
        .try_init();
}

async fn serve() -> (SocketAddr, Recorder) {
    init_tracing();
    let rec = Recorder::default();
    let app = Router::new()
        .route("/api/todos", get(list_todos).post(add_todo))
        .route("/broken/todos", get(broken).post(broken))
        .with_state(rec.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (addr, rec)
}

fn repo(addr: SocketAddr, root: &str) -> HttpRepository {
    HttpRepository::new(&ClientConfig::new(format!("http://{addr}/{root}/")))
}

#[tokio::test]
async fn list_without_criteria_sends_no_query() {
    let (addr, rec) = serve().await;
    let todos = repo(addr, "api").list(&ServerFilter::new()).await.unwrap();

    assert_eq!(todos, sample_todos());
    assert_eq!(*rec.queries.lock().unwrap(), vec![None]);
}

#[tokio::test]
async fn list_sends_owner_parameter() {
    let (addr, rec) = serve().await;
    repo(addr, "api")
        .list(&ServerFilter::new().owner("Fry"))
        .await
        .unwrap();

    let params = rec.params.lock().unwrap();
    assert_eq!(params.len(), 1);
    assert_eq!(params[0].get("owner").map(String::as_str), Some("Fry"));
    assert!(!params[0].contains_key("category"));
    assert!(!params[0].contains_key("status"));
}

#[tokio::test]
async fn list_sends_multiple_parameters() {
    let (addr, rec) = serve().await;
    let filter = ServerFilter::new()
        .owner("Fry")
        .category("video games")
        .status(true);
    repo(addr, "api").list(&filter).await.unwrap();

    let params = rec.params.lock().unwrap();
    assert_eq!(params[0].get("owner").map(String::as_str), Some("Fry"));
    assert_eq!(params[0].get("category").map(String::as_str), Some("video games"));
    assert_eq!(params[0].get("status").map(String::as_str), Some("true"));
}

#[tokio::test]
async fn create_posts_payload_and_returns_id() {
    let (addr, rec) = serve().await;
    let todo = NewTodo {
        owner: "Barry".into(),
        status: true,
        category: "video games".into(),
        body: "Get all 120 stars in Super Mario 64".into(),
    };

    let id = repo(addr, "api").create(&todo).await.unwrap();
    assert_eq!(id, "testid");
    assert_eq!(*rec.bodies.lock().unwrap(), vec![todo]);
}

#[tokio::test]
async fn server_errors_become_request_failures() {
    let (addr, _rec) = serve().await;
    let repo = repo(addr, "broken");

    let err = repo.list(&ServerFilter::new()).await.unwrap_err();
    assert_eq!(err, ApiError::status(500));

    let todo = sample_todos().remove(0);
    let new = NewTodo {
        owner: todo.owner,
        status: todo.status,
        category: todo.category,
        body: todo.body,
    };
    let created = submit(&repo, new).await;
    assert_eq!(created.unwrap_err(), ApiError::status(500));
}

#[tokio::test]
async fn unreachable_server_is_a_request_failure() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = repo(addr, "api").list(&ServerFilter::new()).await.unwrap_err();
    assert!(err.to_string().starts_with("Request failed"));
}

#[tokio::test]
async fn list_view_over_http() {
    let (addr, _rec) = serve().await;
    let mut list = TodoList::new(repo(addr, "api"));
    list.set_local_filter(LocalFilter::new().owner("a").category("video games"));

    let outcome = list.fetch().await;
    assert_eq!(list.finish_fetch(outcome), FetchEvent::Fetched { shown: 1 });
    assert_eq!(list.shown()[0].owner, "Barry");
    assert_eq!(list.server_todos().len(), 4);
}
