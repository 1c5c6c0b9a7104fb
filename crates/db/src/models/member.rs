//! Member entity model.
//!
//! Account management (registration, login, email certification) lives in
//! another service; this crate only reads members to resolve project
//! leaders and roster entries.

use moim_core::types::{DbId, Timestamp};
use serde::Deserialize;
use sqlx::FromRow;

/// Full member row from the `members` table.
///
/// Contains the password column -- NEVER serialize this to API responses.
/// Project views expose members only through `LeaderRef`.
#[derive(Debug, Clone, FromRow)]
pub struct Member {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub password: String,
    pub created_at: Timestamp,
}

/// DTO for inserting a member (fixtures; registration is out of scope).
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMember {
    pub name: String,
    pub email: String,
    pub password: String,
}
