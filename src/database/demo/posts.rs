use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::database::demo::{random_id, resolve_profile, seed};
use crate::database::demo_store::{
    LocalKvStore, KEY_POST_COMMENT_COUNTS, KEY_POST_UPVOTES, KEY_USER_POSTS,
};
use crate::interfaces::repositories::posts::{CreatePostData, PostsRepositoryInterface};
use crate::middleware::error::{AppError, AppResult};
use crate::models::view::post::PostView;

pub struct DemoPostsRepository {
    store: Arc<LocalKvStore>,
}

impl DemoPostsRepository {
    pub fn new(store: Arc<LocalKvStore>) -> Self {
        Self { store }
    }

    fn user_posts(&self) -> AppResult<Vec<PostView>> {
        Ok(self
            .store
            .get_item::<Vec<PostView>>(KEY_USER_POSTS)?
            .unwrap_or_default())
    }

    fn counter_overrides(&self, key: &str) -> AppResult<HashMap<String, i64>> {
        Ok(self
            .store
            .get_item::<HashMap<String, i64>>(key)?
            .unwrap_or_default())
    }

    /// Fixture posts carry their counters in override maps; user posts are
    /// stored with their counters inline.
    fn seed_posts_with_counters(&self) -> AppResult<Vec<PostView>> {
        let upvotes = self.counter_overrides(KEY_POST_UPVOTES)?;
        let comment_counts = self.counter_overrides(KEY_POST_COMMENT_COUNTS)?;
        Ok(seed::posts()
            .iter()
            .map(|post| {
                let mut post = post.clone();
                if let Some(value) = upvotes.get(&post.id) {
                    post.upvotes = *value;
                }
                if let Some(value) = comment_counts.get(&post.id) {
                    post.comment_count = *value;
                }
                post
            })
            .collect())
    }

    fn all_posts(&self) -> AppResult<Vec<PostView>> {
        // user-created posts ahead of the fixtures
        let mut posts = self.user_posts()?;
        posts.extend(self.seed_posts_with_counters()?);
        Ok(posts)
    }
}

#[async_trait]
impl PostsRepositoryInterface for DemoPostsRepository {
    async fn get_posts(&self) -> AppResult<Vec<PostView>> {
        self.store.simulate_latency().await;
        self.all_posts()
    }

    async fn get_post_by_id(&self, post_id: &str) -> AppResult<Option<PostView>> {
        self.store.simulate_latency().await;
        Ok(self.all_posts()?.into_iter().find(|p| p.id == post_id))
    }

    async fn get_posts_by_company(&self, company_name: &str) -> AppResult<Vec<PostView>> {
        self.store.simulate_latency().await;
        Ok(self
            .all_posts()?
            .into_iter()
            .filter(|post| post.company.as_deref() == Some(company_name))
            .collect())
    }

    async fn create_post(&self, data: CreatePostData) -> AppResult<PostView> {
        self.store.simulate_latency().await;
        let author = resolve_profile(&self.store, &data.author_id)?.ok_or_else(|| {
            AppError::EntityFailIdNotFound {
                ident: data.author_id.clone(),
            }
        })?;

        let post = PostView {
            id: random_id(),
            author_id: author.id.clone(),
            author,
            title: data.title,
            content: data.content,
            r#type: data.r#type,
            company: data.company,
            tags: data.tags,
            upvotes: 0,
            comment_count: 0,
            created_at: Utc::now(),
        };

        let mut posts = self.user_posts()?;
        posts.push(post.clone());
        self.store.set_item(KEY_USER_POSTS, &posts)?;

        Ok(post)
    }

    async fn set_upvotes(&self, post_id: &str, upvotes: i64) -> AppResult<()> {
        self.store.simulate_latency().await;
        let mut posts = self.user_posts()?;
        if let Some(post) = posts.iter_mut().find(|p| p.id == post_id) {
            post.upvotes = upvotes;
            return self.store.set_item(KEY_USER_POSTS, &posts);
        }
        if seed::posts().iter().any(|p| p.id == post_id) {
            let mut overrides = self.counter_overrides(KEY_POST_UPVOTES)?;
            overrides.insert(post_id.to_string(), upvotes);
            return self.store.set_item(KEY_POST_UPVOTES, &overrides);
        }
        Err(AppError::EntityFailIdNotFound {
            ident: post_id.to_string(),
        })
    }

    async fn increase_comment_count(&self, post_id: &str) -> AppResult<i64> {
        self.store.simulate_latency().await;
        let mut posts = self.user_posts()?;
        if let Some(post) = posts.iter_mut().find(|p| p.id == post_id) {
            post.comment_count += 1;
            let count = post.comment_count;
            self.store.set_item(KEY_USER_POSTS, &posts)?;
            return Ok(count);
        }
        match self
            .seed_posts_with_counters()?
            .into_iter()
            .find(|p| p.id == post_id)
        {
            Some(post) => {
                let count = post.comment_count + 1;
                let mut overrides = self.counter_overrides(KEY_POST_COMMENT_COUNTS)?;
                overrides.insert(post_id.to_string(), count);
                self.store.set_item(KEY_POST_COMMENT_COUNTS, &overrides)?;
                Ok(count)
            }
            None => Err(AppError::EntityFailIdNotFound {
                ident: post_id.to_string(),
            }),
        }
    }
}
