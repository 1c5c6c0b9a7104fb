//! Request handlers.
//!
//! Each submodule provides the async handler functions for one resource.
//! Handlers orchestrate the repositories in `moim_db`, enforce the
//! lifecycle rules, and map errors via [`crate::error::AppError`].

pub mod project;
