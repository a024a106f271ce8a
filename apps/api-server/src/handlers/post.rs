//! Post handlers, including categories lookup and reactions.

use actix_web::{HttpResponse, http::header, web};

use tabloid_core::domain::PostDraft;
use tabloid_shared::dto::{PostRequest, ReactionRequest};

use crate::middleware::auth::CurrentUser;
use crate::middleware::error::AppResult;
use crate::state::AppState;

fn draft(req: PostRequest) -> PostDraft {
    PostDraft {
        id: req.id,
        category_id: req.category_id,
        title: req.title,
        content: req.content,
        image_location: req.image_location,
        publish_date_time: req.publish_date_time,
        is_approved: req.is_approved,
    }
}

/// GET /api/post
pub async fn list(
    state: web::Data<AppState>,
    CurrentUser(viewer): CurrentUser,
) -> AppResult<HttpResponse> {
    let posts = state.posts.list(&viewer).await?;
    Ok(HttpResponse::Ok().json(posts))
}

/// GET /api/post/getbyuser/{id}
pub async fn list_by_user(
    state: web::Data<AppState>,
    CurrentUser(viewer): CurrentUser,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let posts = state.posts.list_by_user(&viewer, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(posts))
}

/// GET /api/post/{id}
pub async fn get_by_id(
    state: web::Data<AppState>,
    CurrentUser(viewer): CurrentUser,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let details = state.posts.get_by_id(&viewer, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(details))
}

/// POST /api/post
pub async fn create(
    state: web::Data<AppState>,
    CurrentUser(viewer): CurrentUser,
    body: web::Json<PostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    if req.user_profile_id.is_some_and(|id| id != viewer.id) {
        tracing::debug!(viewer_id = viewer.id, "Ignoring userProfileId from post body");
    }

    let post = state.posts.create(&viewer, draft(req)).await?;
    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/api/post/{}", post.id)))
        .json(post))
}

/// PUT /api/post/{id}
pub async fn update(
    state: web::Data<AppState>,
    CurrentUser(viewer): CurrentUser,
    path: web::Path<i32>,
    body: web::Json<PostRequest>,
) -> AppResult<HttpResponse> {
    state
        .posts
        .update(&viewer, path.into_inner(), draft(body.into_inner()))
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

/// DELETE /api/post/{id}
pub async fn delete(
    state: web::Data<AppState>,
    CurrentUser(viewer): CurrentUser,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    state.posts.delete(&viewer, path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// GET /api/post/getallcategories
pub async fn categories(
    state: web::Data<AppState>,
    CurrentUser(viewer): CurrentUser,
) -> AppResult<HttpResponse> {
    let categories = state.posts.categories(&viewer).await?;
    Ok(HttpResponse::Ok().json(categories))
}

/// POST /api/post/addreaction
///
/// The reaction is always recorded for the viewer, whatever `userProfileId`
/// the body carries.
pub async fn add_reaction(
    state: web::Data<AppState>,
    CurrentUser(viewer): CurrentUser,
    body: web::Json<ReactionRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    if req.user_profile_id.is_some_and(|id| id != viewer.id) {
        tracing::debug!(viewer_id = viewer.id, "Ignoring userProfileId from reaction body");
    }

    let reaction = state
        .reactions
        .add_reaction(&viewer, req.post_id, req.reaction_type_id)
        .await?;
    Ok(HttpResponse::Created().json(reaction))
}
