pub mod comments;
pub mod companies;
pub mod messages;
pub mod posts;
pub mod profiles;
pub mod votes;
