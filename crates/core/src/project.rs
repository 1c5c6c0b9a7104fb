//! Project status and participation-role rules.
//!
//! Provides the closed status/role sets, validators for caller-supplied
//! values, and the capacity bound enforced at creation and modification.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Project status constants (match the CHECK constraint on projects.status)
// ---------------------------------------------------------------------------

/// A project that is recruiting participants. Every project starts here.
pub const STATUS_RECRUIT: &str = "RECRUIT";

/// A project whose roster is closed.
pub const STATUS_CLOSED: &str = "CLOSED";

pub const ALL_PROJECT_STATUSES: &[&str] = &[STATUS_RECRUIT, STATUS_CLOSED];

// ---------------------------------------------------------------------------
// Participation role constants (match the CHECK constraint on
// participations.role)
// ---------------------------------------------------------------------------

/// The member who created the project. Exactly one per project, set at
/// creation and never reassigned.
pub const ROLE_LEADER: &str = "LEADER";

/// Any other member on the roster.
pub const ROLE_PARTICIPANT: &str = "PARTICIPANT";

pub const ALL_PARTICIPATION_ROLES: &[&str] = &[ROLE_LEADER, ROLE_PARTICIPANT];

// ---------------------------------------------------------------------------
// Capacity bounds
// ---------------------------------------------------------------------------

/// Smallest allowed participant capacity (the leader alone).
pub const MIN_PARTICIPANTS: i32 = 1;

// ---------------------------------------------------------------------------
// Validators
// ---------------------------------------------------------------------------

/// Validate that a status string is in the closed project-status set.
pub fn validate_project_status(status: &str) -> Result<(), CoreError> {
    if ALL_PROJECT_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Unknown project status '{status}'. Valid: {ALL_PROJECT_STATUSES:?}"
        )))
    }
}

/// Validate a project's participant capacity.
pub fn validate_max_participants(max_participants: i32) -> Result<(), CoreError> {
    if max_participants >= MIN_PARTICIPANTS {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "max_participants must be >= {MIN_PARTICIPANTS}, got {max_participants}"
        )))
    }
}

/// Validate a project title (non-blank).
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    if title.trim().is_empty() {
        Err(CoreError::Validation("Project title must not be blank".into()))
    } else {
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
