//! Domain layer: the category model and the repository contracts.
//!
//! - [`entities`] - [`entities::Category`] and [`entities::Filter`]
//! - [`repositories`] - Data access traits implemented by `crate::infrastructure`

pub mod entities;
pub mod repositories;
