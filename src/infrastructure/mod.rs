//! Infrastructure layer for external integrations.
//!
//! Concrete implementations of the traits in [`crate::domain::repositories`].
//!
//! # Modules
//!
//! - [`cache`] - Redis-backed cache repository
//! - [`persistence`] - PostgreSQL category repository and pool setup

pub mod cache;
pub mod persistence;
