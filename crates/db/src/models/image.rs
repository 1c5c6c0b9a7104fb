//! Project cover image entity model.

use moim_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// An image row from the `images` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Image {
    pub id: DbId,
    pub file_name: String,
    pub path: String,
    /// De-duplication token assigned at upload time.
    pub uuid: Uuid,
    pub created_at: Timestamp,
}

/// Descriptor for an already-uploaded image file, supplied with a project
/// creation request. The upload itself is handled by another service; the
/// image row is inserted inside the project creation transaction.
#[derive(Debug, Clone, Deserialize)]
pub struct ImageDescriptor {
    pub file_name: String,
    pub path: String,
    pub uuid: Uuid,
}
