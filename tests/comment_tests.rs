mod helpers;

use bowl_server::models::view::comment::CommentView;
use bowl_server::models::view::post::PostView;
use helpers::create_fake_login_test_user;
use helpers::post_helpers::create_fake_post;
use serde_json::json;

test_with_server!(create_comment_bumps_the_counter, |server, ctx_state, config| {
    let (server, user) = create_fake_login_test_user(&server).await;
    let post = create_fake_post(server, "general", None).await;

    let response = server
        .post(format!("/api/posts/{}/comments", post.id).as_str())
        .json(&json!({ "content": "great opportunity" }))
        .await;
    response.assert_status_success();
    let comment = response.json::<CommentView>();
    assert_eq!(comment.post_id, post.id);
    assert_eq!(comment.author_id, user.id);
    assert_eq!(comment.upvotes, 0);
    assert_eq!(comment.parent_id, None);

    let fetched = server
        .get(format!("/api/posts/{}", post.id).as_str())
        .await
        .json::<PostView>();
    assert_eq!(fetched.comment_count, 1);
});

test_with_server!(comments_list_oldest_first, |server, ctx_state, config| {
    let (server, _user) = create_fake_login_test_user(&server).await;
    let post = create_fake_post(server, "general", None).await;

    let first = server
        .post(format!("/api/posts/{}/comments", post.id).as_str())
        .json(&json!({ "content": "first" }))
        .await
        .json::<CommentView>();
    let second = server
        .post(format!("/api/posts/{}/comments", post.id).as_str())
        .json(&json!({ "content": "second" }))
        .await
        .json::<CommentView>();

    let comments = server
        .get(format!("/api/posts/{}/comments", post.id).as_str())
        .await
        .json::<Vec<CommentView>>();
    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0].id, first.id);
    assert_eq!(comments[1].id, second.id);
});

test_with_server!(replies_stay_one_level_deep, |server, ctx_state, config| {
    let (server, _user) = create_fake_login_test_user(&server).await;
    let post = create_fake_post(server, "general", None).await;

    let comment = server
        .post(format!("/api/posts/{}/comments", post.id).as_str())
        .json(&json!({ "content": "top level" }))
        .await
        .json::<CommentView>();

    let response = server
        .post(format!("/api/posts/{}/comments", post.id).as_str())
        .json(&json!({ "content": "a reply", "parent_id": comment.id }))
        .await;
    response.assert_status_success();
    let reply = response.json::<CommentView>();
    assert_eq!(reply.parent_id.as_deref(), Some(comment.id.as_str()));

    // replying to the reply is rejected
    let response = server
        .post(format!("/api/posts/{}/comments", post.id).as_str())
        .json(&json!({ "content": "too deep", "parent_id": reply.id }))
        .await;
    response.assert_status_bad_request();
});

test_with_server!(reply_parent_must_share_the_post, |server, ctx_state, config| {
    let (server, _user) = create_fake_login_test_user(&server).await;
    let post = create_fake_post(server, "general", None).await;
    let other_post = create_fake_post(server, "general", None).await;

    let comment = server
        .post(format!("/api/posts/{}/comments", post.id).as_str())
        .json(&json!({ "content": "on the first post" }))
        .await
        .json::<CommentView>();

    let response = server
        .post(format!("/api/posts/{}/comments", other_post.id).as_str())
        .json(&json!({ "content": "wrong thread", "parent_id": comment.id }))
        .await;
    response.assert_status_bad_request();
});

test_with_server!(comment_requires_content_and_post, |server, ctx_state, config| {
    let (server, _user) = create_fake_login_test_user(&server).await;
    let post = create_fake_post(server, "general", None).await;

    let response = server
        .post(format!("/api/posts/{}/comments", post.id).as_str())
        .json(&json!({ "content": "" }))
        .await;
    response.assert_status_bad_request();

    let response = server
        .post("/api/posts/posts:doesnotexist/comments")
        .json(&json!({ "content": "hello" }))
        .await;
    response.assert_status_not_found();
});
