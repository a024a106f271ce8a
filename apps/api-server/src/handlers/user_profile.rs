//! User profile handlers: self-registration and admin user management.

use actix_web::{HttpResponse, http::header, web};

use tabloid_core::domain::UserProfileDraft;
use tabloid_shared::dto::UserProfileRequest;

use crate::middleware::auth::{CurrentUser, Identity};
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/userprofile/{external_id}
pub async fn get_by_external_id(
    state: web::Data<AppState>,
    _identity: Identity,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let profile = state.users.get_by_external_id(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(profile))
}

/// POST /api/userprofile
///
/// Registers the token's subject as a new author.
pub async fn register(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<UserProfileRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let draft = UserProfileDraft {
        display_name: req.display_name,
        first_name: req.first_name,
        last_name: req.last_name,
        email: req.email,
        image_location: req.image_location,
    };

    let profile = state.users.register(&identity.external_id, draft).await?;
    Ok(HttpResponse::Created()
        .insert_header((
            header::LOCATION,
            format!("/api/userprofile/{}", profile.external_identity_id),
        ))
        .json(profile))
}

/// GET /api/userprofile
pub async fn list_active(
    state: web::Data<AppState>,
    CurrentUser(viewer): CurrentUser,
) -> AppResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(state.users.list_active(&viewer).await?))
}

/// GET /api/userprofile/inactive
pub async fn list_inactive(
    state: web::Data<AppState>,
    CurrentUser(viewer): CurrentUser,
) -> AppResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(state.users.list_inactive(&viewer).await?))
}

/// PUT /api/userprofile/{id}
pub async fn activate(
    state: web::Data<AppState>,
    CurrentUser(viewer): CurrentUser,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    state.users.activate(&viewer, path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// DELETE /api/userprofile/{id}
pub async fn deactivate(
    state: web::Data<AppState>,
    CurrentUser(viewer): CurrentUser,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    state.users.deactivate(&viewer, path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}
