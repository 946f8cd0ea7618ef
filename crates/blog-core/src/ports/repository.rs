use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{BlogPost, NewPost, PostChanges};
use crate::error::RepoError;

/// Generic repository trait for the single-document operations every store offers.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Delete an entity by its ID. Returns whether a document was removed.
    async fn delete(&self, id: ID) -> Result<bool, RepoError>;

    /// Total number of stored entities.
    async fn count(&self) -> Result<u64, RepoError>;
}

/// Blog post repository.
///
/// Every mutation touches exactly one document, so implementations only need
/// per-document atomicity from their backing store.
#[async_trait]
pub trait PostRepository: BaseRepository<BlogPost, Uuid> {
    /// All posts, oldest first (ties broken by id).
    async fn find_all(&self) -> Result<Vec<BlogPost>, RepoError>;

    /// Store a validated post; the store assigns `id` and `created`.
    async fn insert(&self, post: NewPost) -> Result<BlogPost, RepoError>;

    /// Replace the mutable fields of an existing post.
    ///
    /// Fails with [`RepoError::NotFound`] when `id` is unknown.
    async fn update(&self, id: Uuid, changes: PostChanges) -> Result<BlogPost, RepoError>;
}
