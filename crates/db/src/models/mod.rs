//! Domain model structs and DTOs.
//!
//! Each submodule contains a `FromRow` entity struct matching the database
//! row plus the `Deserialize` DTOs its write operations accept.
//! `project_view` additionally holds the joined-row projection and the
//! client-facing view assembled from it.

pub mod image;
pub mod member;
pub mod participation;
pub mod project;
pub mod project_view;
pub mod region;
pub mod subject;
