mod helpers;

use bowl_server::middleware::error::ErrorResponseBody;
use bowl_server::models::view::company::CompanyView;
use bowl_server::models::view::post::PostView;
use helpers::create_fake_login_test_user;
use helpers::post_helpers::create_fake_post;
use serde_json::{json, Value};

test_with_server!(create_post, |server, ctx_state, config| {
    let (server, user) = create_fake_login_test_user(&server).await;

    let post = create_fake_post(server, "general", Some("Microsoft")).await;
    assert_eq!(post.author_id, user.id);
    assert_eq!(post.author.id, user.id);
    assert_eq!(post.company.as_deref(), Some("Microsoft"));
    assert_eq!(post.upvotes, 0);
    assert_eq!(post.comment_count, 0);

    let fetched = server
        .get(format!("/api/posts/{}", post.id).as_str())
        .await
        .json::<PostView>();
    assert_eq!(fetched.id, post.id);
    assert_eq!(fetched.title, post.title);
});

test_with_server!(create_post_requires_title, |server, ctx_state, config| {
    let (server, _user) = create_fake_login_test_user(&server).await;

    let response = server
        .post("/api/posts")
        .json(&json!({
            "title": "abc",
            "content": "too short a title",
            "type": "general",
        }))
        .await;
    response.assert_status_bad_request();
    let body = response.json::<ErrorResponseBody>();
    assert!(body.get_err().contains("Min 5 characters"));
});

test_with_server!(create_post_requires_login, |server, ctx_state, config| {
    let response = server
        .post("/api/posts")
        .json(&json!({
            "title": "A perfectly fine title",
            "content": "some content",
            "type": "general",
        }))
        .await;
    response.assert_status_forbidden();
});

test_with_server!(get_posts_newest_first, |server, ctx_state, config| {
    let (server, _user) = create_fake_login_test_user(&server).await;

    let first = create_fake_post(server, "general", None).await;
    let second = create_fake_post(server, "general", None).await;

    let posts = server.get("/api/posts").await.json::<Vec<PostView>>();
    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0].id, second.id);
    assert_eq!(posts[1].id, first.id);
});

test_with_server!(get_missing_post_is_not_found, |server, ctx_state, config| {
    let response = server.get("/api/posts/posts:doesnotexist").await;
    response.assert_status_not_found();

    let response = server.get("/api/posts/garbage").await;
    response.assert_status_not_found();
});

test_with_server!(company_feed_is_exact_match, |server, ctx_state, config| {
    let (server, _user) = create_fake_login_test_user(&server).await;

    let matching = create_fake_post(server, "general", Some("Microsoft")).await;
    // same letters, different case: must not show up in the bowl
    create_fake_post(server, "general", Some("microsoft")).await;
    create_fake_post(server, "general", None).await;

    let companies = server
        .get("/api/companies")
        .await
        .json::<Vec<CompanyView>>();
    let microsoft = companies
        .iter()
        .find(|company| company.name == "Microsoft")
        .expect("default companies seeded");

    let posts = server
        .get(format!("/api/companies/{}/posts", microsoft.id).as_str())
        .await
        .json::<Vec<PostView>>();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].id, matching.id);
});

test_with_server!(post_shape_is_camel_case, |server, ctx_state, config| {
    let (server, _user) = create_fake_login_test_user(&server).await;
    create_fake_post(server, "referral-offer", Some("Microsoft")).await;

    let body = server.get("/api/posts").await.json::<Value>();
    let post = &body.as_array().unwrap()[0];
    let mut keys: Vec<&str> = post.as_object().unwrap().keys().map(String::as_str).collect();
    keys.sort_unstable();
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
