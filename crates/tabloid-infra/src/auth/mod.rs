//! Bearer token implementation.

mod jwt;

pub use jwt::{JwtConfig, JwtTokenService};
