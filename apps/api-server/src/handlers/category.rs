//! Category management handlers. All of them are admin-only.

use actix_web::{HttpResponse, http::header, web};

use tabloid_shared::dto::{CategoryRequest, CategoryUpdateRequest};

use crate::middleware::auth::CurrentUser;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/category
pub async fn list(
    state: web::Data<AppState>,
    CurrentUser(viewer): CurrentUser,
) -> AppResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(state.categories.list(&viewer).await?))
}

/// POST /api/category
pub async fn create(
    state: web::Data<AppState>,
    CurrentUser(viewer): CurrentUser,
    body: web::Json<CategoryRequest>,
) -> AppResult<HttpResponse> {
    let category = state.categories.create(&viewer, &body.name).await?;
    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/api/category/{}", category.id)))
        .json(category))
}

/// PUT /api/category
pub async fn rename(
    state: web::Data<AppState>,
    CurrentUser(viewer): CurrentUser,
    body: web::Json<CategoryUpdateRequest>,
) -> AppResult<HttpResponse> {
    state
        .categories
        .rename(&viewer, body.id, &body.name)
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

/// PUT /api/category/{id}
pub async fn deactivate(
    state: web::Data<AppState>,
    CurrentUser(viewer): CurrentUser,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    state.categories.deactivate(&viewer, path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// PUT /api/category/{id}/activate
pub async fn activate(
    state: web::Data<AppState>,
    CurrentUser(viewer): CurrentUser,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    state.categories.activate(&viewer, path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}
