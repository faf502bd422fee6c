use axum_test::TestServer;
use bowl_server::models::view::user::UserView;
use fake::faker::company::en::CompanyName;
use fake::faker::job::en::Title;
use fake::faker::name::en::Name;
use fake::Fake;
use serde_json::json;

#[allow(dead_code)]
pub async fn create_fake_login_test_user(server: &TestServer) -> (&TestServer, UserView) {
    let name: String = Name().fake();
    let company: String = CompanyName().fake();
    let job_title: String = Title().fake();
    let email = format!(
        "{}.{}@example.com",
        name.to_lowercase().replace(' ', "."),
        rand::random::<u32>() % 100_000
    );

    let response = server
        .post("/api/auth/signup")
        .json(&json!({
            "name": name,
            "email": email,
            "company": company,
            "job_title": job_title,
        }))
        .await;
    response.assert_status_success();
    let user = response.json::<UserView>();

    let response = server
        .post("/api/auth/login")
        .json(&json!({ "profile_id": user.id }))
        .await;
    response.assert_status_success();

    (server, user)
}

#[allow(dead_code)]
pub async fn login_as(server: &TestServer, user: &UserView) {
    let response = server
        .post("/api/auth/login")
        .json(&json!({ "profile_id": user.id }))
        .await;
    response.assert_status_success();
}
