mod helpers;

use bowl_server::entities::vote_entity::VoteKind;
use bowl_server::models::view::post::PostView;
use bowl_server::services::vote_service::VoteOutcome;
use helpers::{create_fake_login_test_user, login_as};
use helpers::post_helpers::create_fake_post;

test_with_server!(upvote_then_cancel, |server, ctx_state, config| {
    let (server, _user) = create_fake_login_test_user(&server).await;
    let post = create_fake_post(server, "general", None).await;

    let response = server
        .post(format!("/api/posts/{}/upvote", post.id).as_str())
        .await;
    response.assert_status_ok();
    let outcome = response.json::<VoteOutcome>();
    assert_eq!(outcome.upvotes, 1);
    assert_eq!(outcome.vote, Some(VoteKind::Upvote));

    // voting the same way again removes the vote and restores the counter
    let response = server
        .post(format!("/api/posts/{}/upvote", post.id).as_str())
        .await;
    response.assert_status_ok();
    let outcome = response.json::<VoteOutcome>();
    assert_eq!(outcome.upvotes, 0);
    assert_eq!(outcome.vote, None);

    let fetched = server
        .get(format!("/api/posts/{}", post.id).as_str())
        .await
        .json::<PostView>();
    assert_eq!(fetched.upvotes, 0);
});

test_with_server!(switching_sides_swings_by_two, |server, ctx_state, config| {
    let (server, _user) = create_fake_login_test_user(&server).await;
    let post = create_fake_post(server, "general", None).await;

    let outcome = server
        .post(format!("/api/posts/{}/upvote", post.id).as_str())
        .await
        .json::<VoteOutcome>();
    assert_eq!(outcome.upvotes, 1);

    let outcome = server
        .post(format!("/api/posts/{}/downvote", post.id).as_str())
        .await
        .json::<VoteOutcome>();
    assert_eq!(outcome.upvotes, -1);
    assert_eq!(outcome.vote, Some(VoteKind::Downvote));

    let outcome = server
        .post(format!("/api/posts/{}/upvote", post.id).as_str())
        .await
        .json::<VoteOutcome>();
    assert_eq!(outcome.upvotes, 1);
    assert_eq!(outcome.vote, Some(VoteKind::Upvote));
});

test_with_server!(downvote_from_clean_slate, |server, ctx_state, config| {
    let (server, _user) = create_fake_login_test_user(&server).await;
    let post = create_fake_post(server, "general", None).await;

    let outcome = server
        .post(format!("/api/posts/{}/downvote", post.id).as_str())
        .await
        .json::<VoteOutcome>();
    assert_eq!(outcome.upvotes, -1);
    assert_eq!(outcome.vote, Some(VoteKind::Downvote));

    let outcome = server
        .post(format!("/api/posts/{}/downvote", post.id).as_str())
        .await
        .json::<VoteOutcome>();
    assert_eq!(outcome.upvotes, 0);
    assert_eq!(outcome.vote, None);
});

test_with_server!(vote_missing_post_is_not_found, |server, ctx_state, config| {
    let (server, _user) = create_fake_login_test_user(&server).await;
    let response = server.post("/api/posts/posts:doesnotexist/upvote").await;
    response.assert_status_not_found();
});

test_with_server!(votes_from_two_users_accumulate, |server, ctx_state, config| {
    let (server, first_user) = create_fake_login_test_user(&server).await;
    let post = create_fake_post(server, "general", None).await;

    let outcome = server
        .post(format!("/api/posts/{}/upvote", post.id).as_str())
        .await
        .json::<VoteOutcome>();
    assert_eq!(outcome.upvotes, 1);

    let (server, _second_user) = create_fake_login_test_user(&server).await;
    let outcome = server
        .post(format!("/api/posts/{}/upvote", post.id).as_str())
        .await
        .json::<VoteOutcome>();
    assert_eq!(outcome.upvotes, 2);

    // the first user's vote record is intact: repeating it cancels, not adds
    login_as(server, &first_user).await;
    let outcome = server
        .post(format!("/api/posts/{}/upvote", post.id).as_str())
        .await
        .json::<VoteOutcome>();
    assert_eq!(outcome.upvotes, 1);
    assert_eq!(outcome.vote, None);
});
