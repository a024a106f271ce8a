//! # Tabloid Infrastructure
//!
//! Concrete implementations of the ports defined in `tabloid-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - In-memory repositories only
//! - `postgres` - PostgreSQL repositories via SeaORM
//! - `auth` - JWT bearer tokens

pub mod database;
pub mod memory;
mod repositories;

#[cfg(feature = "auth")]
pub mod auth;

pub use memory::{InMemoryRepository, MemoryStore};
pub use repositories::Repositories;

#[cfg(feature = "auth")]
pub use auth::{JwtConfig, JwtTokenService};
