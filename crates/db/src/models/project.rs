//! Project entity model and DTOs.

use moim_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::image::ImageDescriptor;

/// A project row from the `projects` table.
///
/// `status` is one of `moim_core::project::ALL_PROJECT_STATUSES`, enforced
/// by a CHECK constraint.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub status: String,
    pub start_date: Timestamp,
    pub max_participants: i32,
    pub subject_id: DbId,
    pub region_id: DbId,
    pub image_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new project.
///
/// Carries the ids of the referenced subject, region, and leader member;
/// all three must resolve before anything is written. There is no status
/// field: a new project always starts in `RECRUIT`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProject {
    #[validate(length(min = 1, message = "title must not be blank"))]
    pub title: String,
    pub description: String,
    pub subject_id: DbId,
    pub region_id: DbId,
    pub leader_id: DbId,
    pub start_date: Timestamp,
    #[validate(range(min = 1, message = "max_participants must be >= 1"))]
    pub max_participants: i32,
    /// Present only when the caller uploaded a cover image.
    pub image: Option<ImageDescriptor>,
}

/// DTO for modifying an existing project.
///
/// The modify operation replaces the content fields wholesale, so every
/// field is required. Status becomes caller-settable here (unlike at
/// creation). There is deliberately no leader or roster field: the leader
/// is fixed at creation and this type cannot express a change to it.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateProject {
    #[validate(length(min = 1, message = "title must not be blank"))]
    pub title: String,
    pub description: String,
    pub status: String,
    pub subject_id: DbId,
    pub region_id: DbId,
    pub start_date: Timestamp,
    #[validate(range(min = 1, message = "max_participants must be >= 1"))]
    pub max_participants: i32,
}
