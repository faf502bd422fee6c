pub mod auth_routes;
pub mod companies;
pub mod messages;
pub mod posts;
pub mod referrals;
pub mod users;
