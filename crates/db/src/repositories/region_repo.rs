//! Repository for the `regions` table.

use sqlx::PgPool;

use moim_core::types::DbId;

use crate::models::region::{CreateRegion, Region};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, label, created_at";

/// Read (and fixture-insert) operations for regions.
pub struct RegionRepo;

impl RegionRepo {
    /// Insert a new region, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateRegion) -> Result<Region, sqlx::Error> {
        let query = format!("INSERT INTO regions (label) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Region>(&query)
            .bind(&input.label)
            .fetch_one(pool)
            .await
    }

    /// Find a region by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Region>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM regions WHERE id = $1");
        sqlx::query_as::<_, Region>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

}
