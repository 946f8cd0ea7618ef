//! Data Transfer Objects - request/response types for the post resource.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use blog_core::DomainError;
use blog_core::domain::{Author, BlogPost, NewPost, PostChanges};

/// `author` as sent by clients: a display name or a structured name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AuthorInput {
    Name(String),
    Structured(Author),
}

impl From<AuthorInput> for Author {
    fn from(input: AuthorInput) -> Self {
        match input {
            AuthorInput::Name(name) => Author::from_display_name(&name),
            AuthorInput::Structured(author) => author,
        }
    }
}

/// Request to create a post.
///
/// Every field is optional at the wire level so a missing one surfaces as a
/// validation error naming the field. `id`, `created` and any unknown keys
/// are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<AuthorInput>,
}

impl CreatePostRequest {
    pub fn into_new_post(self) -> Result<NewPost, DomainError> {
        NewPost::from_fields(self.title, self.content, self.author.map(Author::from))
    }
}

/// Request to update a post: a full replacement of `title`, `content` and
/// `author`. `created` and unknown keys are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePostRequest {
    pub id: Option<String>,
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<AuthorInput>,
}

impl UpdatePostRequest {
    /// Validate the body against the post addressed by the request path.
    pub fn into_changes(self, path_id: Uuid) -> Result<PostChanges, DomainError> {
        if let Some(body_id) = &self.id {
            if Uuid::parse_str(body_id).ok() != Some(path_id) {
                return Err(DomainError::Validation(format!(
                    "Request path id (`{path_id}`) and request body id (`{body_id}`) must match"
                )));
            }
        }

        PostChanges::from_fields(self.title, self.content, self.author.map(Author::from))
    }
}

/// Serialized post as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author: String,
    pub created: DateTime<Utc>,
}

impl From<BlogPost> for PostResponse {
    fn from(post: BlogPost) -> Self {
        Self {
            id: post.id,
            title: post.title,
            content: post.content,
            author: post.author.display_name(),
            created: post.created,
        }
    }
}
