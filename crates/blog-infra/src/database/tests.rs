use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult, RuntimeErr};
use serde_json::json;
use uuid::Uuid;

use blog_core::domain::{Author, BlogPost, NewPost, PostChanges};
use blog_core::error::RepoError;
use blog_core::ports::{BaseRepository, PostRepository};

use crate::database::entity::post;
use crate::database::postgres_repo::PostgresPostRepository;

fn model(id: Uuid, title: &str, author: serde_json::Value) -> post::Model {
    post::Model {
        id,
        title: title.to_owned(),
        content: "Content".to_owned(),
        author,
        created: chrono::Utc::now().into(),
    }
}

#[tokio::test]
async fn test_find_post_by_id() {
    let post_id = Uuid::new_v4();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![model(
            post_id,
            "Test Post",
            json!({ "firstName": "Ada", "lastName": "Lovelace" }),
        )]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let result: Option<BlogPost> = repo.find_by_id(post_id).await.unwrap();

    let post = result.unwrap();
    assert_eq!(post.title, "Test Post");
    assert_eq!(post.id, post_id);
    assert_eq!(post.author, Author::new("Ada", "Lovelace"));
}

#[tokio::test]
async fn test_find_post_with_plain_author_name() {
    let post_id = Uuid::new_v4();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![model(post_id, "Legacy", json!("Mary Ann Evans"))]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let post: BlogPost = repo.find_by_id(post_id).await.unwrap().unwrap();
    assert_eq!(post.author, Author::new("Mary Ann", "Evans"));
}

#[tokio::test]
async fn test_find_post_with_malformed_author() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![model(Uuid::new_v4(), "Broken", json!(42))]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let result: Result<Option<BlogPost>, RepoError> = repo.find_by_id(Uuid::new_v4()).await;
    assert!(matches!(result, Err(RepoError::Serialization(_))));
}

#[tokio::test]
async fn test_find_all_posts() {
    let author = json!({ "firstName": "Ada", "lastName": "Lovelace" });

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![
            model(Uuid::new_v4(), "one", author.clone()),
            model(Uuid::new_v4(), "two", author),
        ]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let posts = repo.find_all().await.unwrap();
    let titles: Vec<_> = posts.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["one", "two"]);
}

#[tokio::test]
async fn test_insert_post() {
    let stored = model(
        Uuid::new_v4(),
        "a-b-c",
        json!({ "firstName": "Ada", "lastName": "Lovelace" }),
    );

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![stored.clone()]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let post = repo
        .insert(NewPost {
            title: "a-b-c".to_owned(),
            content: "Content".to_owned(),
            author: Author::new("Ada", "Lovelace"),
        })
        .await
        .unwrap();

    assert_eq!(post.id, stored.id);
    assert_eq!(post.title, "a-b-c");
}

#[tokio::test]
async fn test_update_post_returns_replaced_row() {
    let post_id = Uuid::new_v4();
    let original = model(
        post_id,
        "old",
        json!({ "firstName": "Ada", "lastName": "Lovelace" }),
    );
    let replaced = post::Model {
        title: "new".to_owned(),
        content: "Rewritten".to_owned(),
        author: json!({ "firstName": "Grace", "lastName": "Hopper" }),
        ..original.clone()
    };

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![replaced]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let post = repo
        .update(
            post_id,
            PostChanges {
                title: "new".to_owned(),
                content: "Rewritten".to_owned(),
                author: Author::new("Grace", "Hopper"),
            },
        )
        .await
        .unwrap();

    assert_eq!(post.id, post_id);
    assert_eq!(post.created, chrono::DateTime::<chrono::Utc>::from(original.created));
    assert_eq!(post.title, "new");
    assert_eq!(post.content, "Rewritten");
    assert_eq!(post.author, Author::new("Grace", "Hopper"));
}

#[tokio::test]
async fn test_connection_failure_is_reported_as_connection_error() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_errors(vec![DbErr::Conn(RuntimeErr::Internal(
            "connection refused".to_owned(),
        ))])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let result: Result<Option<BlogPost>, RepoError> = repo.find_by_id(Uuid::new_v4()).await;
    assert!(matches!(result, Err(RepoError::Connection(_))));
}

#[tokio::test]
async fn test_query_failure_is_reported_as_query_error() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_errors(vec![DbErr::Custom("syntax error".to_owned())])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let result = repo.find_all().await;
    assert!(matches!(result, Err(RepoError::Query(_))));
}

#[tokio::test]
async fn test_update_missing_post() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![Vec::<post::Model>::new()])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let result = repo
        .update(
            Uuid::new_v4(),
            PostChanges {
                title: "new".to_owned(),
                content: "Content".to_owned(),
                author: Author::new("Ada", "Lovelace"),
            },
        )
        .await;

    assert!(matches!(result, Err(RepoError::NotFound)));
}

#[tokio::test]
async fn test_delete_post() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results(vec![
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            },
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            },
        ])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    let id = Uuid::new_v4();

    let removed: bool = BaseRepository::<BlogPost, Uuid>::delete(&repo, id).await.unwrap();
    assert!(removed);
    let removed: bool = BaseRepository::<BlogPost, Uuid>::delete(&repo, id).await.unwrap();
    assert!(!removed);
}
