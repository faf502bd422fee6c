mod helpers;

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use bowl_server::database::demo::messages::DemoMessagesRepository;
use bowl_server::database::demo_store::{
    LocalKvStore, KEY_CURRENT_USER, KEY_MESSAGES, KEY_PENDING_USER, KEY_USER_POSTS, KEY_USER_VOTES,
};
use bowl_server::entities::vote_entity::VoteKind;
use bowl_server::interfaces::repositories::messages::MessagesRepositoryInterface;
use bowl_server::models::view::message::MessageView;
use bowl_server::models::view::post::PostView;
use bowl_server::models::view::user::UserView;
use bowl_server::services::vote_service::VoteOutcome;
use serde_json::json;

test_with_demo_server!(seeded_posts_are_served, |server, store| {
    let posts = server.get("/api/posts").await.json::<Vec<PostView>>();
    assert_eq!(posts.len(), 3);
    assert_eq!(posts[0].id, "1");
    assert_eq!(posts[0].author.company, "Microsoft");
});

test_with_demo_server!(current_user_defaults_to_seed, |server, store| {
    // nobody logged in: demo mode acts as the designated seed profile
    let user = server.get("/api/users/current").await.json::<UserView>();
    assert_eq!(user.id, "4");
});

test_with_demo_server!(login_sets_current_user, |server, store| {
    let response = server
        .post("/api/auth/login")
        .json(&json!({ "profile_id": "1" }))
        .await;
    response.assert_status_success();

    let stored = store
        .get_item::<UserView>(KEY_CURRENT_USER)
        .unwrap()
        .expect("currentUser written");
    assert_eq!(stored.id, "1");

    let user = server.get("/api/users/current").await.json::<UserView>();
    assert_eq!(user.id, "1");

    server.post("/api/auth/logout").await.assert_status_ok();
    assert!(store
        .get_item::<UserView>(KEY_CURRENT_USER)
        .unwrap()
        .is_none());
});

test_with_demo_server!(signup_writes_pending_user, |server, store| {
    let response = server
        .post("/api/auth/signup")
        .json(&json!({
            "name": "New Person",
            "email": "new@person.com",
            "company": "Meta",
            "job_title": "Engineer",
        }))
        .await;
    response.assert_status_success();
    let created = response.json::<UserView>();
    assert_eq!(created.id.len(), 9);
    assert_eq!(created.karma_points, 0);
    assert!(!created.verified);

    let pending = store
        .get_item::<UserView>(KEY_PENDING_USER)
        .unwrap()
        .expect("pendingUser written");
    assert_eq!(pending.id, created.id);
});

test_with_demo_server!(created_posts_land_in_user_posts, |server, store| {
    let response = server
        .post("/api/posts")
        .json(&json!({
            "title": "A brand new demo post",
            "content": "written through the demo store",
            "type": "general",
            "company": "Microsoft",
        }))
        .await;
    response.assert_status_success();
    let created = response.json::<PostView>();
    // acting as the default demo profile
    assert_eq!(created.author_id, "4");

    let stored = store
        .get_item::<Vec<PostView>>(KEY_USER_POSTS)
        .unwrap()
        .expect("userPosts written");
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].id, created.id);

    // user posts come ahead of the fixtures
    let posts = server.get("/api/posts").await.json::<Vec<PostView>>();
    assert_eq!(posts.len(), 4);
    assert_eq!(posts[0].id, created.id);
});

test_with_demo_server!(seed_post_vote_round_trip, |server, store| {
    let outcome = server
        .post("/api/posts/1/upvote")
        .await
        .json::<VoteOutcome>();
    assert_eq!(outcome.upvotes, 125);
    assert_eq!(outcome.vote, Some(VoteKind::Upvote));

    let votes = store
        .get_item::<HashMap<String, VoteKind>>(KEY_USER_VOTES)
        .unwrap()
        .expect("userVotes written");
    assert_eq!(votes.get("1"), Some(&VoteKind::Upvote));

    // the counter survives a re-read
    let post = server.get("/api/posts/1").await.json::<PostView>();
    assert_eq!(post.upvotes, 125);

    // cancelling returns to the seeded counter and clears the stored vote
    let outcome = server
        .post("/api/posts/1/upvote")
        .await
        .json::<VoteOutcome>();
    assert_eq!(outcome.upvotes, 124);
    assert_eq!(outcome.vote, None);

    let votes = store
        .get_item::<HashMap<String, VoteKind>>(KEY_USER_VOTES)
        .unwrap()
        .unwrap_or_default();
    assert!(votes.is_empty());

    let post = server.get("/api/posts/1").await.json::<PostView>();
    assert_eq!(post.upvotes, 124);
});

test_with_demo_server!(votes_on_user_posts_persist, |server, store| {
    let created = server
        .post("/api/posts")
        .json(&json!({
            "title": "Voting target post",
            "content": "the counter on this one is persisted",
            "type": "general",
        }))
        .await
        .json::<PostView>();

    let outcome = server
        .post(format!("/api/posts/{}/upvote", created.id).as_str())
        .await
        .json::<VoteOutcome>();
    assert_eq!(outcome.upvotes, 1);

    let outcome = server
        .post(format!("/api/posts/{}/downvote", created.id).as_str())
        .await
        .json::<VoteOutcome>();
    assert_eq!(outcome.upvotes, -1);
    assert_eq!(outcome.vote, Some(VoteKind::Downvote));

    let post = server
        .get(format!("/api/posts/{}", created.id).as_str())
        .await
        .json::<PostView>();
    assert_eq!(post.upvotes, -1);
});

test_with_demo_server!(demo_message_round_trip, |server, store| {
    // default profile "4" messages seed profile "1"
    let response = server
        .post("/api/messages/1")
        .json(&json!({ "content": "hello from demo mode" }))
        .await;
    response.assert_status_success();
    let sent = response.json::<MessageView>();
    assert!(!sent.read);

    let conversation = server
        .get("/api/messages/1")
        .await
        .json::<Vec<MessageView>>();
    assert_eq!(conversation.len(), 1);
    assert_eq!(conversation[0].id, sent.id);
    assert!(!conversation[0].read);

    let stored = store
        .get_item::<Vec<MessageView>>(KEY_MESSAGES)
        .unwrap()
        .expect("messages written");
    assert_eq!(stored.len(), 1);
});

test_with_demo_server!(demo_comments_are_returned_on_refetch, |server, store| {
    let comments = server
        .get("/api/posts/1/comments")
        .await
        .json::<Vec<bowl_server::models::view::comment::CommentView>>();
    assert_eq!(comments.len(), 3);
    assert_eq!(comments[2].parent_id.as_deref(), Some("c2"));

    let response = server
        .post("/api/posts/1/comments")
        .json(&json!({ "content": "late to the thread" }))
        .await;
    response.assert_status_success();

    let comments = server
        .get("/api/posts/1/comments")
        .await
        .json::<Vec<bowl_server::models::view::comment::CommentView>>();
    assert_eq!(comments.len(), 4);
    assert_eq!(comments[3].content, "late to the thread");

    let post = server.get("/api/posts/1").await.json::<PostView>();
    assert_eq!(post.comment_count, 33);
});

test_with_demo_server!(demo_post_shape_matches_backend_shape, |server, store| {
    let body = server.get("/api/posts").await.json::<serde_json::Value>();
    let post = &body.as_array().unwrap()[0];
    let mut keys: Vec<&str> = post
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    keys.sort_unstable();
    // the same key set the backend store produces
    assert_eq!(
        keys,
        vec![
            "author",
            "authorId",
            "commentCount",
            "company",
            "content",
            "createdAt",
            "id",
            "tags",
            "title",
            "type",
            "upvotes",
        ]
    );
});

#[tokio::test]
async fn demo_store_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("demo_storage.json");

    {
        let store = Arc::new(LocalKvStore::open(&path, Duration::ZERO).unwrap());
        let repo = DemoMessagesRepository::new(store);
        repo.send_message("4", "1", "persisted hello").await.unwrap();
    }

    let store = Arc::new(LocalKvStore::open(&path, Duration::ZERO).unwrap());
    let repo = DemoMessagesRepository::new(store);
    let messages = repo.get_conversation_messages("4", "1").await.unwrap();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].content, "persisted hello");
    assert!(!messages[0].read);
}
