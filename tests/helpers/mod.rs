pub mod post_helpers;
mod test_with_server;
pub mod user_helpers;

#[allow(unused_imports)]
pub use user_helpers::{create_fake_login_test_user, login_as};
