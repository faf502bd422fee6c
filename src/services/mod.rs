pub mod comment_service;
pub mod message_service;
pub mod post_service;
pub mod referral_board;
pub mod vote_service;
