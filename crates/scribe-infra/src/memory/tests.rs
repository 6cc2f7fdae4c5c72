use std::sync::Arc;

use scribe_core::blog::{NewPost, PostQuery, PostUpdate};
use scribe_core::domain::{Author, Post, PostFilter};
use scribe_core::ports::PostRepository;
use scribe_core::{AuthorId, BlogService, Caller, DomainError, UpdateOutcome};

use super::{InMemoryAuthorDirectory, InMemoryPostRepository};

struct Fixture {
    service: BlogService,
    posts: Arc<InMemoryPostRepository>,
    alice: AuthorId,
    bob: AuthorId,
}

fn fixture() -> Fixture {
    let alice = AuthorId::new();
    let bob = AuthorId::new();
    let posts = Arc::new(InMemoryPostRepository::new());
    let authors = Arc::new(InMemoryAuthorDirectory::with_ids([alice, bob]));
    Fixture {
        service: BlogService::new(posts.clone(), authors),
        posts,
        alice,
        bob,
    }
}

fn new_post(author: AuthorId, category: &str) -> NewPost {
    NewPost {
        title: Some("T".into()),
        body: Some("B".into()),
        author_id: Some(author.to_string()),
        category: Some(category.into()),
        ..NewPost::default()
    }
}

async fn published(f: &Fixture, author: AuthorId, category: &str, tags: &[&str]) -> Post {
    f.service
        .create(NewPost {
            tags: Some(tags.iter().map(|t| t.to_string()).collect()),
            is_published: Some(true),
            ..new_post(author, category)
        })
        .await
        .unwrap()
}

async fn stored(f: &Fixture, post: &Post) -> Post {
    f.posts
        .find_one(&PostFilter::default().with_id(post.id))
        .await
        .unwrap()
        .unwrap()
}

#[tokio::test]
async fn test_create_minimal_post() {
    let f = fixture();
    let post = f.service.create(new_post(f.alice, "tech")).await.unwrap();

    assert_eq!(post.author_id, f.alice);
    assert_eq!(post.category, "tech");
    assert!(!post.is_published);
    assert!(post.published_at.is_none());
    assert!(post.tags.is_empty());
    assert!(post.subcategory.is_empty());
}

#[tokio::test]
async fn test_create_published_sets_timestamp() {
    let f = fixture();
    let post = published(&f, f.alice, "tech", &["rust"]).await;
    assert!(post.is_published);
    assert!(post.published_at.is_some());
    assert_eq!(post.tags.as_slice(), ["rust"]);
}

#[tokio::test]
async fn test_create_with_unknown_author_writes_nothing() {
    let f = fixture();
    let result = f.service.create(new_post(AuthorId::new(), "tech")).await;

    assert!(matches!(result, Err(DomainError::Validation(msg)) if msg == "Author does not exist"));
    assert!(f.service.list(&PostQuery::default()).await.unwrap().is_empty());
    assert!(f.posts.find(&PostFilter::default()).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_create_validation_messages() {
    let f = fixture();

    let empty = f.service.create(NewPost::default()).await.unwrap_err();
    assert!(matches!(empty, DomainError::Validation(msg) if msg.starts_with("Invalid request parameters")));

    let no_title = f
        .service
        .create(NewPost {
            title: Some("   ".into()),
            ..new_post(f.alice, "tech")
        })
        .await
        .unwrap_err();
    assert!(matches!(no_title, DomainError::Validation(msg) if msg == "Blog title is required"));

    let bad_author = f
        .service
        .create(NewPost {
            author_id: Some("abc".into()),
            ..new_post(f.alice, "tech")
        })
        .await
        .unwrap_err();
    assert!(matches!(bad_author, DomainError::Validation(msg) if msg == "abc is not a valid author id"));

    let no_category = f
        .service
        .create(NewPost {
            category: None,
            ..new_post(f.alice, "tech")
        })
        .await
        .unwrap_err();
    assert!(matches!(no_category, DomainError::Validation(msg) if msg == "Blog category is required"));
}

#[tokio::test]
async fn test_list_returns_only_live_published_posts() {
    let f = fixture();
    let visible = published(&f, f.alice, "tech", &[]).await;
    f.service.create(new_post(f.alice, "tech")).await.unwrap();
    let retired = published(&f, f.bob, "tech", &[]).await;
    f.service
        .delete(&Caller::new(f.bob), &retired.id.to_string())
        .await
        .unwrap();

    let posts = f.service.list(&PostQuery::default()).await.unwrap();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].id, visible.id);
}

#[tokio::test]
async fn test_list_with_no_matches_is_empty_success() {
    let f = fixture();
    published(&f, f.alice, "tech", &[]).await;

    let posts = f
        .service
        .list(&PostQuery {
            category: Some("cooking".into()),
            ..PostQuery::default()
        })
        .await
        .unwrap();
    assert!(posts.is_empty());
}

#[tokio::test]
async fn test_list_tags_are_all_of() {
    let f = fixture();
    let both = published(&f, f.alice, "tech", &["a", "b", "c"]).await;
    published(&f, f.alice, "tech", &["a"]).await;
    published(&f, f.alice, "tech", &["b"]).await;

    let posts = f
        .service
        .list(&PostQuery {
            tags: Some("a,b".into()),
            ..PostQuery::default()
        })
        .await
        .unwrap();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].id, both.id);
}

#[tokio::test]
async fn test_list_by_author() {
    let f = fixture();
    published(&f, f.alice, "tech", &[]).await;
    let bobs = published(&f, f.bob, "tech", &[]).await;

    let posts = f
        .service
        .list(&PostQuery {
            author_id: Some(f.bob.to_string().to_uppercase()),
            ..PostQuery::default()
        })
        .await
        .unwrap();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].id, bobs.id);
}

#[tokio::test]
async fn test_update_by_non_owner_is_rejected() {
    let f = fixture();
    let post = published(&f, f.alice, "tech", &["a"]).await;

    let result = f
        .service
        .update(
            &Caller::new(f.bob),
            &post.id.to_string(),
            PostUpdate {
                title: Some("Hijacked".into()),
                tags: Some(vec!["evil".into()]),
                ..PostUpdate::default()
            },
        )
        .await;

    assert!(matches!(result, Err(DomainError::Unauthorized)));
    assert_eq!(stored(&f, &post).await, post);
}

#[tokio::test]
async fn test_update_appends_tags() {
    let f = fixture();
    let post = published(&f, f.alice, "tech", &["a"]).await;

    let outcome = f
        .service
        .update(
            &Caller::new(f.alice),
            &post.id.to_string(),
            PostUpdate {
                tags: Some(vec!["x".into()]),
                ..PostUpdate::default()
            },
        )
        .await
        .unwrap();

    let UpdateOutcome::Updated(updated) = outcome else {
        panic!("expected an update");
    };
    assert_eq!(updated.tags.as_slice(), ["a", "x"]);
    assert_eq!(updated.title, post.title);
}

#[tokio::test]
async fn test_update_with_empty_payload_is_unchanged() {
    let f = fixture();
    let post = published(&f, f.alice, "tech", &[]).await;

    let outcome = f
        .service
        .update(&Caller::new(f.alice), &post.id.to_string(), PostUpdate::default())
        .await
        .unwrap();
    assert_eq!(outcome, UpdateOutcome::Unchanged(post));
}

#[tokio::test]
async fn test_update_unpublish_clears_timestamp() {
    let f = fixture();
    let post = published(&f, f.alice, "tech", &[]).await;

    let updated = f
        .service
        .update(
            &Caller::new(f.alice),
            &post.id.to_string(),
            PostUpdate {
                is_published: Some(false),
                ..PostUpdate::default()
            },
        )
        .await
        .unwrap()
        .into_post();

    assert!(!updated.is_published);
    assert!(updated.published_at.is_none());
}

#[tokio::test]
async fn test_update_errors() {
    let f = fixture();
    let caller = Caller::new(f.alice);

    let malformed = f
        .service
        .update(&caller, "xyz", PostUpdate::default())
        .await;
    assert!(matches!(malformed, Err(DomainError::Validation(msg)) if msg == "xyz is not a valid blog id"));

    let missing = f
        .service
        .update(&caller, &scribe_core::PostId::new().to_string(), PostUpdate::default())
        .await;
    assert!(matches!(missing, Err(DomainError::NotFound { .. })));

    let post = published(&f, f.alice, "tech", &[]).await;
    let useless = f
        .service
        .update(
            &caller,
            &post.id.to_string(),
            PostUpdate {
                ignored: vec!["colour".into()],
                ..PostUpdate::default()
            },
        )
        .await;
    assert!(matches!(useless, Err(DomainError::Validation(_))));
}

#[tokio::test]
async fn test_deleted_post_is_terminal() {
    let f = fixture();
    let post = published(&f, f.alice, "tech", &[]).await;
    let caller = Caller::new(f.alice);
    let id = post.id.to_string();

    let deleted = f.service.delete(&caller, &id).await.unwrap();
    assert!(deleted.is_deleted);
    assert!(deleted.deleted_at.is_some());

    let again = f.service.delete(&caller, &id).await;
    assert!(matches!(again, Err(DomainError::NotFound { .. })));

    let update = f
        .service
        .update(
            &caller,
            &id,
            PostUpdate {
                title: Some("Back".into()),
                ..PostUpdate::default()
            },
        )
        .await;
    assert!(matches!(update, Err(DomainError::NotFound { .. })));
    assert_eq!(stored(&f, &post).await.title, "T");
}

#[tokio::test]
async fn test_delete_by_non_owner_is_rejected() {
    let f = fixture();
    let post = published(&f, f.alice, "tech", &[]).await;

    let result = f
        .service
        .delete(&Caller::new(f.bob), &post.id.to_string())
        .await;
    assert!(matches!(result, Err(DomainError::Unauthorized)));
    assert!(!stored(&f, &post).await.is_deleted);
}

#[tokio::test]
async fn test_bulk_delete_matches_any_criterion() {
    let f = fixture();
    let by_category = published(&f, f.alice, "c", &[]).await;
    let by_tag = published(&f, f.alice, "other", &["a"]).await;
    let neither = published(&f, f.alice, "other", &["b"]).await;
    let foreign = published(&f, f.bob, "c", &["a"]).await;

    let count = f
        .service
        .delete_by_query(
            &Caller::new(f.alice),
            &PostQuery {
                author_id: Some(f.alice.to_string()),
                category: Some("c".into()),
                tags: Some("a".into()),
                ..PostQuery::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(count, 2);
    assert!(stored(&f, &by_category).await.is_deleted);
    assert!(stored(&f, &by_tag).await.is_deleted);
    assert!(!stored(&f, &neither).await.is_deleted);
    assert!(!stored(&f, &foreign).await.is_deleted);
}

#[tokio::test]
async fn test_bulk_delete_zero_matches_is_success() {
    let f = fixture();
    published(&f, f.alice, "tech", &[]).await;

    let count = f
        .service
        .delete_by_query(
            &Caller::new(f.alice),
            &PostQuery {
                author_id: Some(f.alice.to_string()),
                category: Some("cooking".into()),
                ..PostQuery::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
async fn test_bulk_delete_requires_matching_author_claim() {
    let f = fixture();
    let post = published(&f, f.alice, "c", &[]).await;
    let caller = Caller::new(f.bob);

    let empty = f
        .service
        .delete_by_query(&caller, &PostQuery::default())
        .await;
    assert!(matches!(empty, Err(DomainError::Validation(_))));

    let unclaimed = f
        .service
        .delete_by_query(
            &caller,
            &PostQuery {
                category: Some("c".into()),
                ..PostQuery::default()
            },
        )
        .await;
    assert!(matches!(unclaimed, Err(DomainError::Unauthorized)));

    let foreign = f
        .service
        .delete_by_query(
            &caller,
            &PostQuery {
                author_id: Some(f.alice.to_string()),
                category: Some("c".into()),
                ..PostQuery::default()
            },
        )
        .await;
    assert!(matches!(foreign, Err(DomainError::Unauthorized)));
    assert!(!stored(&f, &post).await.is_deleted);
}

#[tokio::test]
async fn test_bulk_delete_skips_already_deleted() {
    let f = fixture();
    let caller = Caller::new(f.alice);
    let post = published(&f, f.alice, "c", &[]).await;
    let first = f.service.delete(&caller, &post.id.to_string()).await.unwrap();

    let query = PostQuery {
        author_id: Some(f.alice.to_string()),
        category: Some("c".into()),
        ..PostQuery::default()
    };
    assert_eq!(f.service.delete_by_query(&caller, &query).await.unwrap(), 0);
    assert_eq!(stored(&f, &post).await.deleted_at, first.deleted_at);
}

#[tokio::test]
async fn test_registered_author_can_create() {
    let posts = Arc::new(InMemoryPostRepository::new());
    let authors = Arc::new(InMemoryAuthorDirectory::new());
    let service = BlogService::new(posts, authors.clone());

    let author = Author::new("Ada", "Lovelace", "Ms", "ada@example.com");
    let id = author.id;
    assert!(service.create(new_post(id, "tech")).await.is_err());

    authors.insert(author).await;
    let post = service.create(new_post(id, "tech")).await.unwrap();
    assert_eq!(post.author_id, id);
}
