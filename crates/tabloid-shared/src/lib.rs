//! # Tabloid Shared
//!
//! Wire types shared by the API server and its clients: request bodies and
//! the problem document returned on errors.

pub mod dto;
pub mod response;

pub use response::ErrorResponse;
