//! Data model shared by both repositories.
//!
//! - [`Category`] - The persisted entity
//! - [`Filter`] - Listing options (page size, cursor, keyword)

pub mod category;
pub mod filter;

pub use category::Category;
pub use filter::Filter;
