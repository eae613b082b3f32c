//! End-to-end request flows against an in-memory SQLite store

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use tower::ServiceExt;

use superlists_server::db::SqliteStore;
use superlists_server::{build_router, AppState, ServerConfig};

struct TestApp {
    router: Router,
    store: SqliteStore,
}

impl TestApp {
    async fn new() -> Self {
        let store = SqliteStore::in_memory().await.expect("in-memory store");
        let router = build_router(AppState::new(
            Arc::new(store.clone()),
            ServerConfig::default(),
        ));
        Self { router, store }
    }

    async fn get(&self, uri: &str) -> Response {
        self.router
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn post_form(&self, uri: &str, body: &str) -> Response {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from(body.to_owned()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    async fn count(&self, table: &str) -> i64 {
        let (count,): (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(self.store.pool())
            .await
            .unwrap();
        count
    }
}

fn location(response: &Response) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .expect("redirect without location")
        .to_str()
        .unwrap()
}

async fn body_text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

// === Home page ===

#[tokio::test]
async fn home_page_renders_empty_form() {
    let app = TestApp::new().await;

    let response = app.get("/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains("To-Do"));
    assert!(html.contains(r#"id="id_new_item""#));
    assert!(html.contains(r#"action="/lists/new""#));
    assert_eq!(app.count("lists").await, 0);
}

// === New list ===

#[tokio::test]
async fn can_save_post_request() {
    let app = TestApp::new().await;

    app.post_form("/lists/new", "item_text=A+new+list+item").await;

    assert_eq!(app.count("lists").await, 1);
    assert_eq!(app.count("items").await, 1);

    let (text, list_id): (String, i64) = sqlx::query_as("SELECT text, list_id FROM items")
        .fetch_one(app.store.pool())
        .await
        .unwrap();
    let (only_list,): (i64,) = sqlx::query_as("SELECT id FROM lists")
        .fetch_one(app.store.pool())
        .await
        .unwrap();
    assert_eq!(text, "A new list item");
    assert_eq!(list_id, only_list);
}

#[tokio::test]
async fn redirects_after_post() {
    let app = TestApp::new().await;

    let response = app
        .post_form("/lists/new", "item_text=Buy+peacock+feathers")
        .await;

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(&response), "/lists/1/");
}

#[tokio::test]
async fn empty_item_is_rejected_on_home_page() {
    let app = TestApp::new().await;

    let response = app.post_form("/lists/new", "item_text=").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let html = body_text(response).await;
    assert!(html.contains("have an empty list item"));
    assert!(html.contains(r#"id="id_new_item""#));

    assert_eq!(app.count("lists").await, 0);
    assert_eq!(app.count("items").await, 0);
}

#[tokio::test]
async fn missing_field_is_treated_as_empty() {
    let app = TestApp::new().await;

    let response = app.post_form("/lists/new", "").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(app.count("items").await, 0);
}

// === List view ===

#[tokio::test]
async fn start_list_and_retrieve_it() {
    let app = TestApp::new().await;

    let response = app
        .post_form("/lists/new", "item_text=Buy+peacock+feathers")
        .await;
    let url = location(&response).to_owned();

    let response = app.get(&url).await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains(r#"id="id_list_table""#));
    assert!(html.contains("1: Buy peacock feathers"));
    assert!(html.contains(&format!(r#"action="{url}add_item""#)));
}

#[tokio::test]
async fn unknown_list_is_404() {
    let app = TestApp::new().await;

    assert_eq!(app.get("/lists/42/").await.status(), StatusCode::NOT_FOUND);
    assert_eq!(app.get("/lists/abc/").await.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn viewing_twice_is_identical() {
    let app = TestApp::new().await;
    let response = app.post_form("/lists/new", "item_text=Buy+milk").await;
    let url = location(&response).to_owned();

    let first = body_text(app.get(&url).await).await;
    let second = body_text(app.get(&url).await).await;

    assert_eq!(first, second);
}

#[tokio::test]
async fn multiple_users_have_unique_lists() {
    let app = TestApp::new().await;

    let edith = app
        .post_form("/lists/new", "item_text=Buy+peacock+feathers")
        .await;
    let edith_url = location(&edith).to_owned();

    let francis = app.post_form("/lists/new", "item_text=Buy+milk").await;
    let francis_url = location(&francis).to_owned();

    assert_ne!(edith_url, francis_url);

    let edith_page = body_text(app.get(&edith_url).await).await;
    let francis_page = body_text(app.get(&francis_url).await).await;

    assert!(edith_page.contains("1: Buy peacock feathers"));
    assert!(!edith_page.contains("Buy milk"));
    assert!(francis_page.contains("1: Buy milk"));
    assert!(!francis_page.contains("peacock"));
}

// === Add item ===

#[tokio::test]
async fn add_item_appends_and_redirects() {
    let app = TestApp::new().await;
    let response = app
        .post_form("/lists/new", "item_text=Buy+peacock+feathers")
        .await;
    let url = location(&response).to_owned();

    let response = app
        .post_form(
            &format!("{url}add_item"),
            "item_text=Use+peacock+feathers+to+make+a+fly",
        )
        .await;
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(&response), url);

    let html = body_text(app.get(&url).await).await;
    assert!(html.contains("1: Buy peacock feathers"));
    assert!(html.contains("2: Use peacock feathers to make a fly"));
    assert_eq!(app.count("lists").await, 1);
    assert_eq!(app.count("items").await, 2);
}

#[tokio::test]
async fn add_item_to_unknown_list_is_404() {
    let app = TestApp::new().await;

    let response = app.post_form("/lists/7/add_item", "item_text=orphan").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(app.count("items").await, 0);
}

#[tokio::test]
async fn add_empty_item_to_unknown_list_is_404() {
    let app = TestApp::new().await;

    let response = app.post_form("/lists/7/add_item", "item_text=").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn add_empty_item_rerenders_list_page() {
    let app = TestApp::new().await;
    let response = app.post_form("/lists/new", "item_text=Buy+milk").await;
    let url = location(&response).to_owned();

    let response = app
        .post_form(&format!("{url}add_item"), "item_text=+++")
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let html = body_text(response).await;
    assert!(html.contains("have an empty list item"));
    assert!(html.contains("1: Buy milk"));
    assert_eq!(app.count("items").await, 1);
}

#[tokio::test]
async fn text_round_trips_verbatim() {
    let app = TestApp::new().await;
    let response = app.post_form("/lists/new", "item_text=first").await;
    let url = location(&response).to_owned();

    // "  spaced  & <tagged>" form-encoded
    app.post_form(
        &format!("{url}add_item"),
        "item_text=++spaced++%26+%3Ctagged%3E",
    )
    .await;

    let (text,): (String,) = sqlx::query_as("SELECT text FROM items ORDER BY id DESC LIMIT 1")
        .fetch_one(app.store.pool())
        .await
        .unwrap();
    assert_eq!(text, "  spaced  & <tagged>");

    let html = body_text(app.get(&url).await).await;
    assert!(html.contains("2:   spaced  &amp; &lt;tagged&gt;"));
}

#[tokio::test]
async fn health_reports_ok() {
    let app = TestApp::new().await;

    let response = app.get("/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"], "ok");
}

#[tokio::test]
async fn list_url_without_slash_redirects() {
    let app = TestApp::new().await;
    let response = app.post_form("/lists/new", "item_text=Buy+milk").await;
    let url = location(&response).to_owned();

    let response = app.get(url.trim_end_matches('/')).await;
    assert_eq!(response.status(), StatusCode::MOVED_PERMANENTLY);
    assert_eq!(location(&response), url);

    assert_eq!(app.get("/lists/abc").await.status(), StatusCode::NOT_FOUND);
}
