//! # Newsdesk Infrastructure
//!
//! Concrete implementations of the ports defined in `newsdesk-core`.
//! This crate contains post storage (Postgres via SeaORM, plus an in-memory
//! fallback), the landing cache, and the text-generation clients.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory storage only
//! - `postgres` - PostgreSQL database support via SeaORM

pub mod cache;
pub mod database;
pub mod textgen;

// Re-exports - In-Memory
pub use cache::InMemoryCache;
pub use database::InMemoryPostRepository;

// Re-exports - Postgres
#[cfg(feature = "postgres")]
pub use database::PostgresPostRepository;

pub use textgen::{CannedTextGenerator, HttpTextGenerator};
