//! Post entity for SeaORM.
//!
//! `author` is kept as a JSON document so the row mirrors the persisted shape
//! `{ id, title, content, author: { firstName, lastName }, created }`.

use sea_orm::Set;
use sea_orm::entity::prelude::*;
use serde_json::json;

use blog_core::domain::{Author, BlogPost};
use blog_core::error::RepoError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(column_type = "Text")]
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    #[sea_orm(column_type = "JsonBinary")]
    pub author: Json,
    pub created: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// JSON document stored in the `author` column.
pub fn author_document(author: &Author) -> Json {
    json!({
        "firstName": author.first_name,
        "lastName": author.last_name,
    })
}

/// Read an `author` column, accepting older rows that stored a plain name.
pub fn parse_author(document: Json) -> Result<Author, RepoError> {
    match document {
        Json::String(name) => Ok(Author::from_display_name(&name)),
        other => serde_json::from_value(other).map_err(|e| RepoError::Serialization(e.to_string())),
    }
}

/// Conversion from SeaORM Model to Domain BlogPost.
impl TryFrom<Model> for BlogPost {
    type Error = RepoError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            title: model.title,
            content: model.content,
            author: parse_author(model.author)?,
            created: model.created.into(),
        })
    }
}

/// Conversion from Domain BlogPost to SeaORM ActiveModel.
impl From<BlogPost> for ActiveModel {
    fn from(post: BlogPost) -> Self {
        Self {
            id: Set(post.id),
            title: Set(post.title),
            content: Set(post.content),
            author: Set(author_document(&post.author)),
            created: Set(post.created.into()),
        }
    }
}
