//! Subject (topical category) entity model.
//!
//! Subjects are reference data: created by an admin tool, only read here.

use moim_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A subject row from the `subjects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Subject {
    pub id: DbId,
    pub label: String,
    pub created_at: Timestamp,
}

/// DTO for inserting a subject (fixtures and admin tooling).
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSubject {
    pub label: String,
}
