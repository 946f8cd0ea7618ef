//! In-memory post store - used when no database is configured and as the
//! ephemeral per-test store.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use blog_core::domain::{BlogPost, NewPost, PostChanges};
use blog_core::error::RepoError;
use blog_core::ports::{BaseRepository, PostRepository};

/// Post store backed by a `HashMap` behind an async `RwLock`.
///
/// Each mutation holds the write lock for exactly one document change.
/// Note: Data is lost on process restart.
pub struct InMemoryPostRepository {
    store: RwLock<HashMap<Uuid, BlogPost>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
        }
    }

    /// Seed the store with already-materialized posts.
    pub async fn insert_many(&self, posts: impl IntoIterator<Item = BlogPost>) {
        let mut store = self.store.write().await;
        for post in posts {
            store.insert(post.id, post);
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<BlogPost, Uuid> for InMemoryPostRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<BlogPost>, RepoError> {
        let store = self.store.read().await;
        Ok(store.get(&id).cloned())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, RepoError> {
        let mut store = self.store.write().await;
        Ok(store.remove(&id).is_some())
    }

    async fn count(&self) -> Result<u64, RepoError> {
        let store = self.store.read().await;
        Ok(store.len() as u64)
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn find_all(&self) -> Result<Vec<BlogPost>, RepoError> {
        let store = self.store.read().await;
        let mut posts: Vec<BlogPost> = store.values().cloned().collect();
        posts.sort_by(|a, b| a.created.cmp(&b.created).then_with(|| a.id.cmp(&b.id)));
        Ok(posts)
    }

    async fn insert(&self, post: NewPost) -> Result<BlogPost, RepoError> {
        let post = BlogPost::from_new(post);
        let mut store = self.store.write().await;
        store.insert(post.id, post.clone());
        tracing::debug!(post_id = %post.id, "Post inserted");
        Ok(post)
    }

    async fn update(&self, id: Uuid, changes: PostChanges) -> Result<BlogPost, RepoError> {
        let mut store = self.store.write().await;
        let post = store.get_mut(&id).ok_or(RepoError::NotFound)?;
        changes.apply_to(post);
        Ok(post.clone())
    }
}
