//! In-memory repositories - used when no database is configured, and in tests.

mod repository;
mod store;

pub use repository::InMemoryRepository;
pub use store::{MemoryStore, Record, Table, Tables};
