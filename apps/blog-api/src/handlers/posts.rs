//! Blog post resource handlers.

use actix_web::{HttpResponse, http::header, web};
use uuid::Uuid;

use blog_core::DomainError;
use blog_shared::dto::{CreatePostRequest, PostResponse, UpdatePostRequest};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn post_not_found(id: Uuid) -> AppError {
    DomainError::NotFound {
        entity_type: "Post",
        id,
    }
    .into()
}

/// Parse a path id. A malformed id cannot name a stored post.
fn parse_post_id(raw: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| AppError::NotFound(format!("Post with id {} not found", raw)))
}

/// GET /posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.store(state.posts.find_all()).await?;
    let body: Vec<PostResponse> = posts.into_iter().map(PostResponse::from).collect();

    Ok(HttpResponse::Ok().json(body))
}

/// GET /posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_post_id(&path)?;

    let post = state
        .store(state.posts.find_by_id(id))
        .await?
        .ok_or_else(|| post_not_found(id))?;

    Ok(HttpResponse::Ok().json(PostResponse::from(post)))
}

/// POST /posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let new_post = body.into_inner().into_new_post()?;

    let post = state.store(state.posts.insert(new_post)).await?;
    tracing::info!(post_id = %post.id, "Post created");

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/posts/{}", post.id)))
        .json(PostResponse::from(post)))
}

/// PUT /posts/{id}
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let id = parse_post_id(&path)?;
    let changes = body.into_inner().into_changes(id)?;

    state
        .store(state.posts.update(id, changes))
        .await
        .map_err(|e| match e {
            AppError::NotFound(_) => post_not_found(id),
            other => other,
        })?;
    tracing::info!(post_id = %id, "Post updated");

    Ok(HttpResponse::NoContent().finish())
}

/// DELETE /posts/{id}
///
/// Idempotent: answers 204 whether or not the post existed.
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let Ok(id) = Uuid::parse_str(&path) else {
        return Ok(HttpResponse::NoContent().finish());
    };

    let removed = state.store(state.posts.delete(id)).await?;
    tracing::info!(post_id = %id, removed, "Post deleted");

    Ok(HttpResponse::NoContent().finish())
}
