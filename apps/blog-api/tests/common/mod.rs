//! Shared fixtures: a fresh in-memory store per test, seeded with posts.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use blog_api::AppState;
use blog_core::domain::{Author, BlogPost, NewPost};
use blog_infra::InMemoryPostRepository;
use uuid::Uuid;

const FIRST_NAMES: [&str; 5] = ["Ada", "Grace", "Alan", "Edsger", "Barbara"];
const LAST_NAMES: [&str; 5] = ["Lovelace", "Hopper", "Turing", "Dijkstra", "Liskov"];

/// A post with a slug-like title, one sentence of content and a random author.
pub fn generate_post(i: usize) -> BlogPost {
    let salt = Uuid::new_v4().simple().to_string();
    BlogPost::from_new(NewPost {
        title: format!("post-{i}-{}", &salt[..6]),
        content: format!("Sentence number {i} about {}.", &salt[6..12]),
        author: Author::new(FIRST_NAMES[i % 5], LAST_NAMES[(i / 5) % 5]),
    })
}

/// An isolated store holding `count` generated posts.
pub async fn seeded_store(count: usize) -> Arc<InMemoryPostRepository> {
    let repo = Arc::new(InMemoryPostRepository::new());
    repo.insert_many((0..count).map(generate_post)).await;
    repo
}

pub fn state_for(repo: Arc<InMemoryPostRepository>) -> AppState {
    AppState::new(repo, Duration::from_secs(5))
}
