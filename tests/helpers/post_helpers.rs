use axum_test::TestServer;
use bowl_server::models::view::post::PostView;
use fake::faker::lorem::en::{Paragraph, Sentence};
use fake::Fake;
use serde_json::json;

#[allow(dead_code)]
pub async fn create_fake_post(
    server: &TestServer,
    post_type: &str,
    company: Option<&str>,
) -> PostView {
    let title: String = Sentence(3..6).fake();
    let content: String = Paragraph(1..3).fake();

    let response = server
        .post("/api/posts")
        .json(&json!({
            "title": title,
            "content": content,
            "type": post_type,
            "company": company,
            "tags": ["test"],
        }))
        .await;
    response.assert_status_success();
    response.json::<PostView>()
}
