use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::middleware::error::AppResult;

pub const KEY_USER_POSTS: &str = "userPosts";
pub const KEY_USER_VOTES: &str = "userVotes";
pub const KEY_USER_COMMENTS: &str = "userComments";
pub const KEY_MESSAGES: &str = "messages";
pub const KEY_CURRENT_USER: &str = "currentUser";
pub const KEY_PENDING_USER: &str = "pendingUser";
// counter overrides for fixture posts; the demo client kept these in view
// state only, but a server has to serve consistent re-reads
pub const KEY_POST_UPVOTES: &str = "postUpvotes";
pub const KEY_POST_COMMENT_COUNTS: &str = "postCommentCounts";

/// Browser-localStorage analog backing demo mode: a string-keyed map of JSON
/// values, optionally persisted to a single file. Single-process only, not
/// multi-client consistent.
pub struct LocalKvStore {
    path: Option<PathBuf>,
    latency: Duration,
    items: Mutex<HashMap<String, Value>>,
}

impl LocalKvStore {
    pub fn open(path: impl Into<PathBuf>, latency: Duration) -> AppResult<Self> {
        let path = path.into();
        let items = match std::fs::read(&path) {
            Ok(bytes) => serde_json::from_slice(&bytes)?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(err) => return Err(err.into()),
        };
        Ok(Self {
            path: Some(path),
            latency,
            items: Mutex::new(items),
        })
    }

    pub fn in_memory(latency: Duration) -> Self {
        Self {
            path: None,
            latency,
            items: Mutex::new(HashMap::new()),
        }
    }

    /// One pause per facade call, standing in for the simulated network
    /// delay of the demo client.
    pub async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }

    pub fn get_item<T: DeserializeOwned>(&self, key: &str) -> AppResult<Option<T>> {
        let items = self.items.lock().expect("kv store lock poisoned");
        match items.get(key) {
            None => Ok(None),
            Some(value) => Ok(Some(serde_json::from_value(value.clone())?)),
        }
    }

    pub fn set_item<T: Serialize>(&self, key: &str, value: &T) -> AppResult<()> {
        let mut items = self.items.lock().expect("kv store lock poisoned");
        items.insert(key.to_string(), serde_json::to_value(value)?);
        self.flush(&items)
    }

    pub fn remove_item(&self, key: &str) -> AppResult<()> {
        let mut items = self.items.lock().expect("kv store lock poisoned");
        items.remove(key);
        self.flush(&items)
    }

    fn flush(&self, items: &HashMap<String, Value>) -> AppResult<()> {
        if let Some(path) = &self.path {
            let bytes = serde_json::to_vec_pretty(items)?;
            std::fs::write(path, bytes)?;
        }
        Ok(())
    }
}
