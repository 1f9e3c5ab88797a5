//! The full board workflow as an automated client drives it, in order.

use axum::http::{Method, StatusCode};
use integration_tests::{assert_no_secrets, TestApp};
use serde_json::json;

#[tokio::test]
async fn board_workflow() {
    let app = TestApp::json();

    // Creating a new thread
    let created = app
        .json_request(
            Method::POST,
            "/api/threads/test",
            json!({ "text": "Test thread", "delete_password": "pass123" }),
        )
        .await;
    assert_eq!(created.status, StatusCode::OK);

    // Viewing the 10 most recent threads with 3 replies each
    let listed = app.get("/api/threads/test").await;
    assert_eq!(listed.status, StatusCode::OK);
    let threads = listed.json();
    assert_no_secrets(&threads);
    let threads = threads.as_array().expect("array of threads");
    assert!(threads.len() <= 10);
    assert_eq!(threads[0]["text"], "Test thread");
    assert!(threads[0]["replies"].as_array().unwrap().len() <= 3);
    let thread_id = threads[0]["_id"].as_str().unwrap().to_owned();

    // Deleting a thread with the incorrect password
    let wrong = app
        .json_request(
            Method::DELETE,
            "/api/threads/test",
            json!({ "thread_id": thread_id, "delete_password": "wrongpass" }),
        )
        .await;
    assert_eq!(wrong.status, StatusCode::OK);
    assert_eq!(wrong.body, "incorrect password");

    // Reporting a thread
    let reported = app
        .json_request(Method::PUT, "/api/threads/test", json!({ "thread_id": thread_id }))
        .await;
    assert_eq!(reported.body, "reported");

    // Creating a new reply
    let reply = app
        .json_request(
            Method::POST,
            "/api/replies/test",
            json!({ "text": "Test reply", "delete_password": "replypass", "thread_id": thread_id }),
        )
        .await;
    assert_eq!(reply.status, StatusCode::OK);

    // Viewing a single thread with all replies
    let shown = app.thread("test", &thread_id).await;
    assert_eq!(shown.status, StatusCode::OK);
    let thread = shown.json();
    assert_no_secrets(&thread);
    let reply_id = thread["replies"][0]["_id"].as_str().unwrap().to_owned();
    assert_eq!(thread["replies"][0]["text"], "Test reply");

    // Deleting a reply with the incorrect password
    let wrong = app
        .json_request(
            Method::DELETE,
            "/api/replies/test",
            json!({ "thread_id": thread_id, "reply_id": reply_id, "delete_password": "wrongpass" }),
        )
        .await;
    assert_eq!(wrong.body, "incorrect password");

    // Reporting a reply
    let reported = app
        .json_request(
            Method::PUT,
            "/api/replies/test",
            json!({ "thread_id": thread_id, "reply_id": reply_id }),
        )
        .await;
    assert_eq!(reported.body, "reported");

    // Deleting a reply with the correct password
    let deleted = app
        .json_request(
            Method::DELETE,
            "/api/replies/test",
            json!({ "thread_id": thread_id, "reply_id": reply_id, "delete_password": "replypass" }),
        )
        .await;
    assert_eq!(deleted.body, "success");
    let thread = app.thread("test", &thread_id).await.json();
    assert_eq!(thread["replies"][0]["text"], "[deleted]");
    assert_eq!(thread["replies"][0]["_id"], reply_id.as_str());

    // Deleting a thread with the correct password
    let deleted = app
        .json_request(
            Method::DELETE,
            "/api/threads/test",
            json!({ "thread_id": thread_id, "delete_password": "pass123" }),
        )
        .await;
    assert_eq!(deleted.body, "success");
    assert_eq!(app.thread("test", &thread_id).await.body, "thread not found");
}
