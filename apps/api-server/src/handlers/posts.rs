//! Blog post handlers.

use actix_web::{HttpResponse, web};

use scribe_core::UpdateOutcome;
use scribe_core::blog::{NewPost, PostQuery, PostUpdate};
use scribe_core::domain::Post;
use scribe_shared::ApiResponse;
use scribe_shared::dto::{
    BlogQuery, CreatePostRequest, DeletedCountResponse, PostResponse, UpdatePostRequest,
};

use crate::middleware::{AppResult, Identity};
use crate::state::AppState;

fn post_response(post: Post) -> PostResponse {
    PostResponse {
        id: post.id.to_string(),
        title: post.title,
        body: post.body,
        author_id: post.author_id.to_string(),
        category: post.category,
        tags: post.tags.into_vec(),
        subcategory: post.subcategory.into_vec(),
        is_published: post.is_published,
        published_at: post.published_at,
        is_deleted: post.is_deleted,
        deleted_at: post.deleted_at,
        created_at: post.created_at,
        updated_at: post.updated_at,
    }
}

fn new_post(req: CreatePostRequest) -> NewPost {
    let ignored = req.ignored_keys();
    NewPost {
        title: req.title.flatten(),
        body: req.body.flatten(),
        author_id: req.author_id.flatten(),
        category: req.category.flatten(),
        tags: req.tags.flatten().map(|t| t.into_vec()),
        subcategory: req.subcategory.flatten().map(|t| t.into_vec()),
        is_published: req.is_published.flatten(),
        ignored,
    }
}

fn post_update(req: UpdatePostRequest) -> PostUpdate {
    let ignored = req.ignored_keys();
    PostUpdate {
        title: req.title.flatten(),
        body: req.body.flatten(),
        category: req.category.flatten(),
        is_published: req.is_published.flatten(),
        tags: req.tags.flatten().map(|t| t.into_vec()),
        subcategory: req.subcategory.flatten().map(|t| t.into_vec()),
        ignored,
    }
}

fn post_query(query: BlogQuery) -> PostQuery {
    PostQuery {
        author_id: query.author_id,
        category: query.category,
        tags: query.tags,
        subcategory: query.subcategory,
        is_published: query.is_published,
    }
}

/// POST /blogs
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let post = state.blog.create(new_post(body.into_inner())).await?;

    tracing::info!(post_id = %post.id, author_id = %post.author_id, "Blog created");

    Ok(HttpResponse::Created().json(ApiResponse::ok(
        "New blog created successfully",
        post_response(post),
    )))
}

/// GET /blogs
pub async fn list_posts(
    state: web::Data<AppState>,
    query: web::Query<BlogQuery>,
) -> AppResult<HttpResponse> {
    let posts = state.blog.list(&post_query(query.into_inner())).await?;

    let message = if posts.is_empty() {
        "No blogs found"
    } else {
        "Blogs list"
    };
    let data: Vec<PostResponse> = posts.into_iter().map(post_response).collect();

    Ok(HttpResponse::Ok().json(ApiResponse::ok(message, data)))
}

/// PUT /blogs/{id}
pub async fn update_post(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<String>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let outcome = state
        .blog
        .update(&identity.caller(), &path, post_update(body.into_inner()))
        .await?;

    let response = match outcome {
        UpdateOutcome::Unchanged(post) => {
            ApiResponse::ok("No parameters passed. Blog unmodified", post_response(post))
        }
        UpdateOutcome::Updated(post) => {
            tracing::info!(post_id = %post.id, email = %identity.email, "Blog updated");
            ApiResponse::ok("Blog updated successfully", post_response(post))
        }
    };

    Ok(HttpResponse::Ok().json(response))
}

/// DELETE /blogs/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let post = state.blog.delete(&identity.caller(), &path).await?;

    tracing::info!(post_id = %post.id, email = %identity.email, "Blog deleted");

    Ok(HttpResponse::Ok().json(ApiResponse::ok(
        "Blog deleted successfully",
        post_response(post),
    )))
}

/// DELETE /blogs?authorId=...
pub async fn delete_posts(
    state: web::Data<AppState>,
    identity: Identity,
    query: web::Query<BlogQuery>,
) -> AppResult<HttpResponse> {
    let deleted_count = state
        .blog
        .delete_by_query(&identity.caller(), &post_query(query.into_inner()))
        .await?;

    tracing::info!(
        author_id = %identity.author_id,
        email = %identity.email,
        deleted_count,
        "Bulk delete finished"
    );

    let message = if deleted_count == 0 {
        "No matching blogs found"
    } else {
        "Blogs deleted successfully"
    };

    Ok(HttpResponse::Ok().json(ApiResponse::ok(
        message,
        DeletedCountResponse { deleted_count },
    )))
}
