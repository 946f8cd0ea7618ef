//! PostgreSQL post repository.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ActiveValue, DbErr, EntityTrait, QueryOrder};
use uuid::Uuid;

use blog_core::domain::{BlogPost, NewPost, PostChanges};
use blog_core::error::RepoError;
use blog_core::ports::PostRepository;

use super::entity::post::{self, Entity as PostEntity};
use super::postgres_base::{PostgresBaseRepository, db_error};

/// PostgreSQL post repository.
pub type PostgresPostRepository = PostgresBaseRepository<PostEntity>;

fn write_error(err: DbErr) -> RepoError {
    let err_str = err.to_string();
    if err_str.contains("duplicate") || err_str.contains("unique") {
        RepoError::Constraint("Post already exists".to_string())
    } else {
        db_error(err)
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn find_all(&self) -> Result<Vec<BlogPost>, RepoError> {
        let result = PostEntity::find()
            .order_by_asc(post::Column::Created)
            .order_by_asc(post::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_error)?;

        result.into_iter().map(BlogPost::try_from).collect()
    }

    async fn insert(&self, new_post: NewPost) -> Result<BlogPost, RepoError> {
        let blog_post = BlogPost::from_new(new_post);
        tracing::debug!(post_id = %blog_post.id, "Inserting post");

        let model = post::ActiveModel::from(blog_post)
            .insert(&self.db)
            .await
            .map_err(write_error)?;

        BlogPost::try_from(model)
    }

    async fn update(&self, id: Uuid, changes: PostChanges) -> Result<BlogPost, RepoError> {
        // Single UPDATE ... RETURNING so the replacement is atomic per document.
        let active = post::ActiveModel {
            id: ActiveValue::Unchanged(id),
            title: ActiveValue::Set(changes.title),
            content: ActiveValue::Set(changes.content),
            author: ActiveValue::Set(post::author_document(&changes.author)),
            created: ActiveValue::NotSet,
        };

        let model = PostEntity::update(active)
            .exec(&self.db)
            .await
            .map_err(|e| match e {
                DbErr::RecordNotUpdated => RepoError::NotFound,
                other => write_error(other),
            })?;

        tracing::debug!(post_id = %id, "Post updated");
        BlogPost::try_from(model)
    }
}
