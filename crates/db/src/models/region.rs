//! Region (geographic area) entity model.
//!
//! Regions are reference data: created by an admin tool, only read here.

use moim_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A region row from the `regions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Region {
    pub id: DbId,
    pub label: String,
    pub created_at: Timestamp,
}

/// DTO for inserting a region (fixtures and admin tooling).
#[derive(Debug, Clone, Deserialize)]
pub struct CreateRegion {
    pub label: String,
}
