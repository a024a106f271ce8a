//! # Tabloid Core
//!
//! The domain layer of the Tabloid blogging platform.
//! This crate contains the entities, the post visibility policy, the repository
//! ports and the services built on top of them. It has zero infrastructure
//! dependencies.

pub mod domain;
pub mod error;
pub mod policy;
pub mod ports;
pub mod services;

pub use error::DomainError;
pub use policy::Viewer;
