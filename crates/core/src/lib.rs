//! Pure domain logic for the moim platform.
//!
//! This crate has no internal dependencies and no I/O: shared ID and
//! timestamp aliases, the domain error taxonomy, pagination primitives,
//! keyword-search helpers, and project status/role rules. Both the
//! repository layer and the API layer build on it.

pub mod error;
pub mod pagination;
pub mod project;
pub mod search;
pub mod types;
