//! Comment handlers.

use actix_web::{HttpResponse, web};

use tabloid_core::domain::CommentDraft;
use tabloid_shared::dto::{CommentRequest, CommentUpdateRequest};

use crate::middleware::auth::CurrentUser;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/comment/bypost/{post_id}
pub async fn list_for_post(
    state: web::Data<AppState>,
    CurrentUser(viewer): CurrentUser,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let comments = state
        .comments
        .list_for_post(&viewer, path.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(comments))
}

/// POST /api/comment
pub async fn add(
    state: web::Data<AppState>,
    CurrentUser(viewer): CurrentUser,
    body: web::Json<CommentRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let draft = CommentDraft {
        subject: req.subject,
        content: req.content,
    };

    let comment = state.comments.add(&viewer, req.post_id, draft).await?;
    Ok(HttpResponse::Created().json(comment))
}

/// PUT /api/comment/{id}
pub async fn update(
    state: web::Data<AppState>,
    CurrentUser(viewer): CurrentUser,
    path: web::Path<i32>,
    body: web::Json<CommentUpdateRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let draft = CommentDraft {
        subject: req.subject,
        content: req.content,
    };

    state
        .comments
        .update(&viewer, path.into_inner(), draft)
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

/// DELETE /api/comment/{id}
pub async fn delete(
    state: web::Data<AppState>,
    CurrentUser(viewer): CurrentUser,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    state.comments.delete(&viewer, path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}
