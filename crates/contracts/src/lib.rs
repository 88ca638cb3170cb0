//! Shared contracts between the dashboard frontend and the REST backend.
//!
//! - `domain`: typed records for every entity plus the [`domain::common::Entity`] trait
//! - `shared`: response envelope, endpoint builders, list engine, form descriptors

pub mod domain;
pub mod shared;
