//! Participation (roster) entity model.
//!
//! One row binds one member to one project with a role. A project owns its
//! participations: deleting the project cascades to them. The LEADER row is
//! written exactly once, inside the project creation transaction, and no
//! code path updates it afterwards.

use moim_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A participation row from the `participations` table.
///
/// `role` is one of `moim_core::project::ALL_PARTICIPATION_ROLES`,
/// enforced by a CHECK constraint.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Participation {
    pub id: DbId,
    pub project_id: DbId,
    pub member_id: DbId,
    pub role: String,
    pub created_at: Timestamp,
}
