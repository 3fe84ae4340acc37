use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::BlogPost;
use crate::error::RepoError;

/// Generic repository trait defining the id-keyed operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Delete an entity by its ID. Fails with [`RepoError::NotFound`]
    /// when no such entity exists.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// Blog repository - the persistent collection of posts.
#[async_trait]
pub trait BlogRepository: BaseRepository<BlogPost, Uuid> {
    /// Persist a new post and return it as stored.
    async fn insert(&self, post: BlogPost) -> Result<BlogPost, RepoError>;

    /// Persist changes to an existing post. Fails with
    /// [`RepoError::NotFound`] when the id is unknown.
    async fn update(&self, post: BlogPost) -> Result<BlogPost, RepoError>;

    /// All posts, in backing-store order. No pagination.
    async fn find_all(&self) -> Result<Vec<BlogPost>, RepoError>;
}
