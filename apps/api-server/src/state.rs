//! Application state - shared across all handlers.

use std::sync::Arc;

use tabloid_core::domain::{UserProfile, UserProfileDraft};
use tabloid_core::error::DomainError;
use tabloid_core::ports::TokenService;
use tabloid_core::services::{
    CategoryService, CommentService, PostService, ReactionService, UserProfileService,
};
use tabloid_infra::{JwtTokenService, Repositories};

use crate::config::{AdminConfig, AppConfig};

/// Which backend the repositories run on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Storage {
    Postgres,
    InMemory,
}

impl Storage {
    pub fn as_str(self) -> &'static str {
        match self {
            Storage::Postgres => "postgres",
            Storage::InMemory => "in-memory",
        }
    }
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<UserProfileService>,
    pub posts: Arc<PostService>,
    pub reactions: Arc<ReactionService>,
    pub categories: Arc<CategoryService>,
    pub comments: Arc<CommentService>,
    pub tokens: Arc<dyn TokenService>,
    pub storage: Storage,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(config: &AppConfig) -> Self {
        let tokens: Arc<dyn TokenService> = Arc::new(JwtTokenService::new(config.jwt.clone()));

        #[cfg(feature = "postgres")]
        let (repos, storage) = match &config.database {
            Some(db_config) => match tabloid_infra::database::connect(db_config).await {
                Ok(conn) => (Repositories::postgres(conn), Storage::Postgres),
                Err(e) => {
                    tracing::error!(
                        error = %e,
                        "Failed to connect to database. Using in-memory fallback."
                    );
                    (Repositories::in_memory(), Storage::InMemory)
                }
            },
            None => {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                (Repositories::in_memory(), Storage::InMemory)
            }
        };

        #[cfg(not(feature = "postgres"))]
        let (repos, storage) = {
            tracing::info!("Running without postgres feature - using in-memory repositories");
            (Repositories::in_memory(), Storage::InMemory)
        };

        let state = Self::from_repositories(repos, tokens, storage);
        match &config.admin {
            Some(admin) => {
                if let Err(e) = state.bootstrap_admin(admin).await {
                    tracing::error!(error = %e, "Failed to bootstrap administrator");
                }
            }
            None => tracing::warn!("ADMIN_EXTERNAL_ID not set. No administrator is bootstrapped."),
        }
        tracing::info!(storage = storage.as_str(), "Application state initialized");
        state
    }

    /// Create or promote the configured administrator.
    pub async fn bootstrap_admin(&self, admin: &AdminConfig) -> Result<UserProfile, DomainError> {
        let draft = UserProfileDraft {
            display_name: "admin".to_string(),
            first_name: "Site".to_string(),
            last_name: "Administrator".to_string(),
            email: admin.email.clone(),
            image_location: None,
        };
        self.users.ensure_admin(&admin.external_id, draft).await
    }

    /// Wire the services over an existing set of repositories.
    pub fn from_repositories(
        repos: Repositories,
        tokens: Arc<dyn TokenService>,
        storage: Storage,
    ) -> Self {
        Self {
            users: Arc::new(UserProfileService::new(repos.users.clone())),
            posts: Arc::new(PostService::new(
                repos.posts.clone(),
                repos.comments.clone(),
                repos.categories.clone(),
            )),
            reactions: Arc::new(ReactionService::new(repos.posts.clone())),
            categories: Arc::new(CategoryService::new(repos.categories.clone())),
            comments: Arc::new(CommentService::new(repos.comments, repos.posts)),
            tokens,
            storage,
        }
    }
}
