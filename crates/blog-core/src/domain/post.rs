use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Author;
use crate::error::DomainError;

/// Blog post entity - the single document kept by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author: Author,
    pub created: DateTime<Utc>,
}

impl BlogPost {
    /// Materialize a validated candidate, assigning `id` and `created`.
    pub fn from_new(new: NewPost) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: new.title,
            content: new.content,
            author: new.author,
            created: Utc::now(),
        }
    }
}

/// A post that passed create validation but has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub author: Author,
}

impl NewPost {
    /// Validate the required fields of a create request.
    ///
    /// Fields are checked in the order `title`, `content`, `author`; the first
    /// missing or blank one is reported.
    pub fn from_fields(
        title: Option<String>,
        content: Option<String>,
        author: Option<Author>,
    ) -> Result<Self, DomainError> {
        let title = title
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| missing("title"))?;
        let content = content
            .filter(|c| !c.trim().is_empty())
            .ok_or_else(|| missing("content"))?;
        let author = author
            .filter(|a| !a.is_blank())
            .ok_or_else(|| missing("author"))?;

        Ok(Self {
            title,
            content,
            author,
        })
    }
}

/// Full replacement of the mutable fields of a post.
///
/// `id` and `created` are never touched.
#[derive(Debug, Clone, PartialEq)]
pub struct PostChanges {
    pub title: String,
    pub content: String,
    pub author: Author,
}

impl PostChanges {
    /// Validate an update body. Same required fields and messages as create.
    pub fn from_fields(
        title: Option<String>,
        content: Option<String>,
        author: Option<Author>,
    ) -> Result<Self, DomainError> {
        let NewPost {
            title,
            content,
            author,
        } = NewPost::from_fields(title, content, author)?;

        Ok(Self {
            title,
            content,
            author,
        })
    }

    /// Replace the mutable fields in place.
    pub fn apply_to(self, post: &mut BlogPost) {
        post.title = self.title;
        post.content = self.content;
        post.author = self.author;
    }
}

fn missing(field: &str) -> DomainError {
    DomainError::Validation(format!("Missing `{field}` in request body"))
}
