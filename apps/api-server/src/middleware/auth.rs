//! Authentication extractors.
//!
//! [`Identity`] only checks the bearer token. [`CurrentUser`] additionally
//! resolves the token subject to an active user profile.

use std::future::{Ready, ready};

use actix_web::{FromRequest, HttpRequest, dev::Payload, http::header, web};
use futures::future::LocalBoxFuture;

use tabloid_core::Viewer;
use tabloid_core::ports::AuthError;

use crate::middleware::error::AppError;
use crate::state::AppState;

/// A validated bearer token.
///
/// ```ignore
/// async fn register(identity: Identity) -> impl Responder {
///     format!("Hello, {}!", identity.external_id)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Identity {
    /// Subject of the token: the external identity id.
    pub external_id: String,
}

impl FromRequest for Identity {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(identify(req))
    }
}

fn identify(req: &HttpRequest) -> Result<Identity, AppError> {
    let state = app_state(req)?;

    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .ok_or(AuthError::MissingAuth)?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| AuthError::InvalidToken("Invalid authorization header".to_string()))?;

    let token = auth_str
        .strip_prefix("Bearer ")
        .ok_or_else(|| AuthError::InvalidToken("Expected Bearer token".to_string()))?;

    let claims = state.tokens.validate_token(token)?;
    Ok(Identity {
        external_id: claims.subject,
    })
}

/// The active user profile making the request.
#[derive(Debug, Clone, Copy)]
pub struct CurrentUser(pub Viewer);

impl FromRequest for CurrentUser {
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let identity = identify(req);
        let state = app_state(req);

        Box::pin(async move {
            let identity = identity?;
            let viewer = state?.users.resolve(&identity.external_id).await?;
            Ok(CurrentUser(viewer))
        })
    }
}

fn app_state(req: &HttpRequest) -> Result<web::Data<AppState>, AppError> {
    req.app_data::<web::Data<AppState>>().cloned().ok_or_else(|| {
        tracing::error!("AppState not found in app data");
        AppError::Internal("Server configuration error".to_string())
    })
}
