//! # Blog Shared
//!
//! Wire types shared by the server and its clients: request/response bodies
//! for the post resource and RFC 7807 error bodies.

pub mod dto;
pub mod response;

pub use dto::{AuthorInput, CreatePostRequest, PostResponse, UpdatePostRequest};
pub use response::ErrorResponse;
