//! PUT /threads/{thread_id}/comments/{comment_id}/likes

use axum::http::StatusCode;
use serde_json::json;

use crate::common::TestApp;

#[tokio::test]
async fn test_like_toggles_on_and_off() {
    let app = TestApp::new();
    let user = app.user("dicoding").await;
    let thread_id = app.add_thread(&user).await;
    let comment_id = app.add_comment(&user, &thread_id).await;
    let uri = format!("/threads/{}/comments/{}/likes", thread_id, comment_id);

    let liked = app.put(&uri, Some(&user.access_token), None).await;
    assert_eq!(liked.status, StatusCode::OK);
    assert_eq!(liked.body, json!({ "status": "success" }));
    assert_eq!(app.thread_detail(&thread_id).await["comments"][0]["likeCount"], 1);

    let unliked = app.put(&uri, Some(&user.access_token), None).await;
    assert_eq!(unliked.status, StatusCode::OK);
    assert_eq!(app.thread_detail(&thread_id).await["comments"][0]["likeCount"], 0);
    assert_eq!(app.store.like_count(), 0);
}

#[tokio::test]
async fn test_likes_from_different_users_add_up() {
    let app = TestApp::new();
    let first = app.user("dicoding").await;
    let second = app.user("johndoe").await;
    let thread_id = app.add_thread(&first).await;
    let comment_id = app.add_comment(&first, &thread_id).await;
    let uri = format!("/threads/{}/comments/{}/likes", thread_id, comment_id);

    app.put(&uri, Some(&first.access_token), None).await;
    app.put(&uri, Some(&second.access_token), None).await;

    assert_eq!(app.thread_detail(&thread_id).await["comments"][0]["likeCount"], 2);
}

#[tokio::test]
async fn test_like_missing_comment() {
    let app = TestApp::new();
    let user = app.user("dicoding").await;
    let thread_id = app.add_thread(&user).await;

    let missing_comment = app
        .put(
            &format!("/threads/{}/comments/comment-xyz/likes", thread_id),
            Some(&user.access_token),
            None,
        )
        .await;
    missing_comment.assert_fail(StatusCode::NOT_FOUND, "komentar tidak ditemukan");

    let missing_thread = app
        .put(
            "/threads/thread-xyz/comments/comment-xyz/likes",
            Some(&user.access_token),
            None,
        )
        .await;
    missing_thread.assert_fail(StatusCode::NOT_FOUND, "thread tidak ditemukan");
}

#[tokio::test]
async fn test_like_requires_authentication() {
    let app = TestApp::new();

    let response = app
        .put("/threads/thread-1/comments/comment-1/likes", None, None)
        .await;

    response.assert_fail(StatusCode::UNAUTHORIZED, "Missing authentication");
}
