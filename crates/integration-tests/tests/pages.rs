use axum::http::StatusCode;
use configs::ResponseMode;
use integration_tests::TestApp;
use uuid::Uuid;

#[tokio::test]
async fn index_renders() {
    let app = TestApp::new(ResponseMode::Redirect);
    let response = app.get("/").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("<form"));
}

#[tokio::test]
async fn board_picker_redirects_to_board() {
    let app = TestApp::new(ResponseMode::Redirect);

    let response = app.get("/b?board=general").await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location.as_deref(), Some("/b/general/"));

    let reserved = app.get("/b?board=a%3Fx").await;
    assert_eq!(reserved.location.as_deref(), Some("/b/a%3Fx/"));

    let empty = app.get("/b?board=+").await;
    assert_eq!(empty.location.as_deref(), Some("/"));
}

#[tokio::test]
async fn board_page_links_keep_reserved_board_names() {
    let app = TestApp::json();
    let thread_id = app.create_thread("a%3Fx", "hello", "pw").await;

    let board = app.get("/b/a%3Fx/").await;
    assert_eq!(board.status, StatusCode::OK);
    assert!(board.body.contains("action=\"/api/threads/a%3Fx\""));
    assert!(board.body.contains(&format!("href=\"/b/a%3Fx/{thread_id}\"")));

    let thread = app.get(&format!("/b/a%3Fx/{thread_id}")).await;
    assert!(thread.body.contains("action=\"/api/replies/a%3Fx\""));
}

#[tokio::test]
async fn board_page_shows_threads_but_not_passwords() {
    let app = TestApp::json();
    app.create_thread("general", "hello board", "topsecret").await;

    let response = app.get("/b/general/").await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("hello board"));
    assert!(!response.body.contains("topsecret"));
    assert!(response.body.contains("action=\"/api/threads/general\""));
}

#[tokio::test]
async fn thread_page_shows_replies() {
    let app = TestApp::json();
    let thread_id = app.create_thread("general", "op text", "pw").await;
    app.create_reply("general", &thread_id, "a reply", "replysecret").await;

    let response = app.get(&format!("/b/general/{thread_id}")).await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("op text"));
    assert!(response.body.contains("a reply"));
    assert!(!response.body.contains("replysecret"));
}

#[tokio::test]
async fn thread_page_for_unknown_thread_is_404() {
    let app = TestApp::json();

    let unknown = app.get(&format!("/b/general/{}", Uuid::new_v4())).await;
    assert_eq!(unknown.status, StatusCode::NOT_FOUND);

    let garbage = app.get("/b/general/not-a-thread").await;
    assert_eq!(garbage.status, StatusCode::NOT_FOUND);
}
