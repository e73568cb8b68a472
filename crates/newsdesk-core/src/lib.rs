//! # Newsdesk Core
//!
//! The domain layer of the Newsdesk content platform.
//! This crate contains pure business logic with zero infrastructure dependencies:
//! the post entity, slug assignment, the featured-window rule, the script
//! transformer, and the ports that storage and external services implement.

pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

pub use error::DomainError;
