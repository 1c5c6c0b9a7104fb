//! Repository for the `subjects` table.

use sqlx::PgPool;

use moim_core::types::DbId;

use crate::models::subject::{CreateSubject, Subject};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, label, created_at";

/// Read (and fixture-insert) operations for subjects.
pub struct SubjectRepo;

impl SubjectRepo {
    /// Insert a new subject, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateSubject) -> Result<Subject, sqlx::Error> {
        let query = format!("INSERT INTO subjects (label) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Subject>(&query)
            .bind(&input.label)
            .fetch_one(pool)
            .await
    }

    /// Find a subject by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Subject>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM subjects WHERE id = $1");
        sqlx::query_as::<_, Subject>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

}
