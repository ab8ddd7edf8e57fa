//! Helpers shared by the infrastructure layer.
//!
//! - [`db_error`] - Classification of PostgreSQL constraint violations

pub mod db_error;
