//! Request extractors and error handling.

pub mod auth;
pub mod error;
