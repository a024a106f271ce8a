//! Bearer token port.

/// Claims carried by a validated bearer token.
#[derive(Debug, Clone)]
pub struct TokenClaims {
    /// External identity id, mapped to a user profile by the identity resolver.
    pub subject: String,
    pub exp: i64,
}

/// Token service trait for issuing and validating bearer tokens.
pub trait TokenService: Send + Sync {
    /// Issue a token for an external identity.
    fn generate_token(&self, subject: &str) -> Result<String, AuthError>;

    /// Validate and decode a token.
    fn validate_token(&self, token: &str) -> Result<TokenClaims, AuthError>;
}

/// Authentication errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Missing authorization header")]
    MissingAuth,
}
