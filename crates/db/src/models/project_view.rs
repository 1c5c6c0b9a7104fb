//! Read-optimized project view and the joined row it is assembled from.
//!
//! The detail/list queries join projects with their subject, region, cover
//! image, leader, and a participant count in a single statement. The result
//! lands in [`ProjectJoinRow`], a named `FromRow` struct whose shape is
//! checked column-by-column at decode time, and is collapsed into the flat
//! client-facing [`ProjectView`] by a pure `From` impl. Assembly touches no
//! storage and has no failure mode of its own.

use moim_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Joined row
// ---------------------------------------------------------------------------

/// One row of the project join query.
///
/// Subject and leader columns are non-null (INNER JOINs -- both are hard
/// prerequisites at creation). Region and image columns come from LEFT
/// JOINs and may be absent; the view preserves that absence instead of
/// erroring on an incomplete join.
#[derive(Debug, Clone, FromRow)]
pub struct ProjectJoinRow {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub status: String,
    pub start_date: Timestamp,
    pub max_participants: i32,
    pub subject_id: DbId,
    pub subject_label: String,
    pub region_id: Option<DbId>,
    pub region_label: Option<String>,
    pub image_id: Option<DbId>,
    pub image_file_name: Option<String>,
    pub image_path: Option<String>,
    pub image_uuid: Option<Uuid>,
    pub leader_id: DbId,
    pub leader_name: String,
    pub participant_count: i64,
}

// ---------------------------------------------------------------------------
// View
// ---------------------------------------------------------------------------

/// Subject as it appears in a project view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubjectRef {
    pub id: DbId,
    pub label: String,
}

/// Region as it appears in a project view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionRef {
    pub id: DbId,
    pub label: String,
}

/// Cover image as it appears in a project view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageRef {
    pub id: DbId,
    pub file_name: String,
    pub path: String,
    pub uuid: Uuid,
}

/// The project leader, reduced to the fields safe to expose. Auth
/// attributes never cross this boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeaderRef {
    pub id: DbId,
    pub name: String,
}

/// Flat, client-facing projection of a project and its associations.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectView {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub status: String,
    pub subject: SubjectRef,
    pub region: Option<RegionRef>,
    pub participant_count: i64,
    pub leader: LeaderRef,
    pub start_date: Timestamp,
    pub max_participants: i32,
    pub image: Option<ImageRef>,
}

impl From<ProjectJoinRow> for ProjectView {
    fn from(row: ProjectJoinRow) -> Self {
        let region = match (row.region_id, row.region_label) {
            (Some(id), Some(label)) => Some(RegionRef { id, label }),
            _ => None,
        };
        let image = match (
            row.image_id,
            row.image_file_name,
            row.image_path,
            row.image_uuid,
        ) {
            (Some(id), Some(file_name), Some(path), Some(uuid)) => Some(ImageRef {
                id,
                file_name,
                path,
                uuid,
            }),
            _ => None,
        };

        ProjectView {
            id: row.id,
            title: row.title,
            description: row.description,
            status: row.status,
            subject: SubjectRef {
                id: row.subject_id,
                label: row.subject_label,
            },
            region,
            participant_count: row.participant_count,
            leader: LeaderRef {
                id: row.leader_id,
                name: row.leader_name,
            },
            start_date: row.start_date,
            max_participants: row.max_participants,
            image,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn sample_row() -> ProjectJoinRow {
        ProjectJoinRow {
            id: 11,
            title: "Cleanup Day".to_string(),
            description: "Riverside cleanup".to_string(),
            status: "RECRUIT".to_string(),
            start_date: Utc.with_ymd_and_hms(2025, 4, 12, 9, 0, 0).unwrap(),
            max_participants: 10,
            subject_id: 3,
            subject_label: "Environment".to_string(),
            region_id: Some(1),
            region_label: Some("Seoul".to_string()),
            image_id: None,
            image_file_name: None,
            image_path: None,
            image_uuid: None,
            leader_id: 7,
            leader_name: "Jaemin".to_string(),
            participant_count: 1,
        }
    }

    #[test]
    fn view_copies_scalar_fields() {
        let view = ProjectView::from(sample_row());
        assert_eq!(view.id, 11);
        assert_eq!(view.title, "Cleanup Day");
        assert_eq!(view.description, "Riverside cleanup");
        assert_eq!(view.status, "RECRUIT");
        assert_eq!(view.max_participants, 10);
        assert_eq!(view.participant_count, 1);
    }

    #[test]
    fn view_maps_subject_and_leader() {
        let view = ProjectView::from(sample_row());
        assert_eq!(
            view.subject,
            SubjectRef {
                id: 3,
                label: "Environment".to_string()
            }
        );
        assert_eq!(
            view.leader,
            LeaderRef {
                id: 7,
                name: "Jaemin".to_string()
            }
        );
    }

    #[test]
    fn view_preserves_null_region() {
        let mut row = sample_row();
        row.region_id = None;
        row.region_label = None;
        let view = ProjectView::from(row);
        assert!(view.region.is_none());
    }

    #[test]
    fn view_preserves_null_image() {
        let view = ProjectView::from(sample_row());
        assert!(view.image.is_none());
    }

    #[test]
    fn view_maps_present_image() {
        let uuid = Uuid::nil();
        let mut row = sample_row();
        row.image_id = Some(42);
        row.image_file_name = Some("cover.png".to_string());
        row.image_path = Some("/uploads/2025/04".to_string());
        row.image_uuid = Some(uuid);
        let view = ProjectView::from(row);
        assert_eq!(
            view.image,
            Some(ImageRef {
                id: 42,
                file_name: "cover.png".to_string(),
                path: "/uploads/2025/04".to_string(),
                uuid,
            })
        );
    }

    #[test]
    fn leader_ref_has_no_auth_fields() {
        // LeaderRef is the only member projection the view exposes; the
        // serialized form must stay limited to id and name.
        let json = serde_json::to_value(LeaderRef {
            id: 7,
            name: "Jaemin".to_string(),
        })
        .unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 2);
        assert!(obj.contains_key("id"));
        assert!(obj.contains_key("name"));
    }
}
