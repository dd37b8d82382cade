//! POST /threads/{thread_id}/comments and DELETE .../comments/{comment_id}

use axum::http::StatusCode;
use serde_json::json;

use crate::common::TestApp;

#[tokio::test]
async fn test_add_comment_returns_added_comment() {
    let app = TestApp::new();
    let user = app.user("dicoding").await;
    let thread_id = app.add_thread(&user).await;

    let response = app
        .post(
            &format!("/threads/{}/comments", thread_id),
            Some(&user.access_token),
            json!({ "content": "sebuah comment" }),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    let added = &response.body["data"]["addedComment"];
    assert!(added["id"].as_str().unwrap().starts_with("comment-"));
    assert_eq!(added["content"], "sebuah comment");
    assert_eq!(added["owner"], user.id.as_str());
}

#[tokio::test]
async fn test_add_comment_to_missing_thread() {
    let app = TestApp::new();
    let user = app.user("dicoding").await;

    let response = app
        .post(
            "/threads/thread-xyz/comments",
            Some(&user.access_token),
            json!({ "content": "sebuah comment" }),
        )
        .await;

    response.assert_fail(StatusCode::NOT_FOUND, "thread tidak ditemukan");
}

#[tokio::test]
async fn test_add_comment_invalid_payload() {
    let app = TestApp::new();
    let user = app.user("dicoding").await;
    let thread_id = app.add_thread(&user).await;
    let uri = format!("/threads/{}/comments", thread_id);

    let missing = app.post(&uri, Some(&user.access_token), json!({})).await;
    missing.assert_fail(
        StatusCode::BAD_REQUEST,
        "tidak dapat membuat komentar baru karena properti yang dibutuhkan tidak ada",
    );

    let wrong_type = app
        .post(&uri, Some(&user.access_token), json!({ "content": 123 }))
        .await;
    wrong_type.assert_fail(
        StatusCode::BAD_REQUEST,
        "tidak dapat membuat komentar baru karena tipe data tidak sesuai",
    );
}

#[tokio::test]
async fn test_add_comment_requires_authentication() {
    let app = TestApp::new();
    let user = app.user("dicoding").await;
    let thread_id = app.add_thread(&user).await;

    let response = app
        .post(
            &format!("/threads/{}/comments", thread_id),
            None,
            json!({ "content": "sebuah comment" }),
        )
        .await;

    response.assert_fail(StatusCode::UNAUTHORIZED, "Missing authentication");
}

#[tokio::test]
async fn test_delete_comment_masks_content_in_thread_detail() {
    let app = TestApp::new();
    let user = app.user("dicoding").await;
    let thread_id = app.add_thread(&user).await;
    let comment_id = app.add_comment(&user, &thread_id).await;

    let response = app
        .delete(
            &format!("/threads/{}/comments/{}", thread_id, comment_id),
            Some(&user.access_token),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!({ "status": "success" }));

    let thread = app.thread_detail(&thread_id).await;
    let comment = &thread["comments"][0];
    assert_eq!(comment["id"], comment_id.as_str());
    assert_eq!(comment["username"], "dicoding");
    assert_eq!(comment["content"], "**komentar telah dihapus**");
}

#[tokio::test]
async fn test_delete_comment_twice_succeeds() {
    let app = TestApp::new();
    let user = app.user("dicoding").await;
    let thread_id = app.add_thread(&user).await;
    let comment_id = app.add_comment(&user, &thread_id).await;
    let uri = format!("/threads/{}/comments/{}", thread_id, comment_id);

    app.delete(&uri, Some(&user.access_token), None).await;
    let again = app.delete(&uri, Some(&user.access_token), None).await;

    assert_eq!(again.status, StatusCode::OK);
    assert_eq!(again.body, json!({ "status": "success" }));

    let thread = app.thread_detail(&thread_id).await;
    let comments = thread["comments"].as_array().unwrap();
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0]["id"], comment_id.as_str());
    assert_eq!(comments[0]["content"], "**komentar telah dihapus**");
}

#[tokio::test]
async fn test_delete_comment_keeps_its_replies() {
    let app = TestApp::new();
    let user = app.user("dicoding").await;
    let replier = app.user("johndoe").await;
    let thread_id = app.add_thread(&user).await;
    let comment_id = app.add_comment(&user, &thread_id).await;
    let reply_id = app.add_reply(&replier, &thread_id, &comment_id).await;

    let response = app
        .delete(
            &format!("/threads/{}/comments/{}", thread_id, comment_id),
            Some(&user.access_token),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let thread = app.thread_detail(&thread_id).await;
    let comment = &thread["comments"][0];
    assert_eq!(comment["content"], "**komentar telah dihapus**");

    let replies = comment["replies"].as_array().unwrap();
    assert_eq!(replies.len(), 1);
    assert_eq!(replies[0]["id"], reply_id.as_str());
    assert_eq!(replies[0]["username"], "johndoe");
    assert_eq!(replies[0]["content"], "sebuah balasan");
}

#[tokio::test]
async fn test_delete_comment_by_other_user_is_forbidden() {
    let app = TestApp::new();
    let owner = app.user("dicoding").await;
    let other = app.user("johndoe").await;
    let thread_id = app.add_thread(&owner).await;
    let comment_id = app.add_comment(&owner, &thread_id).await;

    let response = app
        .delete(
            &format!("/threads/{}/comments/{}", thread_id, comment_id),
            Some(&other.access_token),
            None,
        )
        .await;

    response.assert_fail(
        StatusCode::FORBIDDEN,
        "anda tidak memiliki hak akses untuk komentar ini",
    );
    let thread = app.thread_detail(&thread_id).await;
    assert_eq!(thread["comments"][0]["content"], "sebuah comment");
}

#[tokio::test]
async fn test_delete_missing_comment() {
    let app = TestApp::new();
    let user = app.user("dicoding").await;
    let thread_id = app.add_thread(&user).await;

    let missing_comment = app
        .delete(
            &format!("/threads/{}/comments/comment-xyz", thread_id),
            Some(&user.access_token),
            None,
        )
        .await;
    missing_comment.assert_fail(StatusCode::NOT_FOUND, "komentar tidak ditemukan");

    let missing_thread = app
        .delete(
            "/threads/thread-xyz/comments/comment-xyz",
            Some(&user.access_token),
            None,
        )
        .await;
    missing_thread.assert_fail(StatusCode::NOT_FOUND, "thread tidak ditemukan");
}
