use rand::distributions::Alphanumeric;
use rand::Rng;

use crate::database::demo_store::{LocalKvStore, KEY_CURRENT_USER, KEY_PENDING_USER};
use crate::middleware::error::AppResult;
use crate::models::view::user::UserView;

pub mod comments;
pub mod companies;
pub mod messages;
pub mod posts;
pub mod profiles;
pub mod seed;
pub mod votes;

/// 9-char lowercase alphanumeric, the id shape of the demo client.
pub(crate) fn random_id() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(9)
        .map(char::from)
        .collect::<String>()
        .to_lowercase()
}

/// Looks a profile up across everything demo mode knows about: the active
/// and pending user records, then the seed fixtures.
pub(crate) fn resolve_profile(store: &LocalKvStore, profile_id: &str) -> AppResult<Option<UserView>> {
    if let Some(current) = store.get_item::<UserView>(KEY_CURRENT_USER)? {
        if current.id == profile_id {
            return Ok(Some(current));
        }
    }
    if let Some(pending) = store.get_item::<UserView>(KEY_PENDING_USER)? {
        if pending.id == profile_id {
            return Ok(Some(pending));
        }
    }
    Ok(seed::profiles()
        .iter()
        .find(|profile| profile.id == profile_id)
        .cloned())
}
