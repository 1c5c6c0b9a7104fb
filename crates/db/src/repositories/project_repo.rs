//! Repository for the `projects` table and its roster.
//!
//! Covers the plain CRUD operations, the creation transaction that also
//! writes the LEADER participation, and the joined detail/list queries
//! feeding [`ProjectJoinRow`].

use sqlx::PgPool;

use moim_core::pagination::{Page, PageRequest};
use moim_core::project::{ROLE_LEADER, STATUS_RECRUIT};
use moim_core::search::{like_pattern, SearchFields};
use moim_core::types::DbId;

use crate::models::participation::Participation;
use crate::models::project::{CreateProject, Project, UpdateProject};
use crate::models::project_view::ProjectJoinRow;

/// Column list shared across plain project queries.
const COLUMNS: &str = "\
    id, title, description, status, start_date, max_participants, \
    subject_id, region_id, image_id, created_at, updated_at";

/// Projection for the joined detail/list queries. Subject and leader come
/// from INNER JOINs; region and image columns are nullable (LEFT JOINs).
const JOIN_COLUMNS: &str = "\
    p.id, p.title, p.description, p.status, p.start_date, p.max_participants, \
    s.id AS subject_id, s.label AS subject_label, \
    r.id AS region_id, r.label AS region_label, \
    i.id AS image_id, i.file_name AS image_file_name, \
    i.path AS image_path, i.uuid AS image_uuid, \
    m.id AS leader_id, m.name AS leader_name, \
    (SELECT COUNT(*) FROM participations pc WHERE pc.project_id = p.id) \
        AS participant_count";

/// FROM/JOIN clause shared by the joined queries.
const JOIN_TABLES: &str = "\
    FROM projects p \
    JOIN subjects s ON s.id = p.subject_id \
    LEFT JOIN regions r ON r.id = p.region_id \
    LEFT JOIN images i ON i.id = p.image_id \
    JOIN participations lp ON lp.project_id = p.id AND lp.role = 'LEADER' \
    JOIN members m ON m.id = lp.member_id";

/// Provides persistence operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Create a project together with its leader's participation row.
    ///
    /// Runs as one transaction: the optional cover image, the project
    /// (status always `RECRUIT` -- [`CreateProject`] has no status field),
    /// and the LEADER participation either all persist or none do.
    ///
    /// The caller must have resolved `subject_id`, `region_id`, and
    /// `leader_id` beforehand; an id that vanished since then surfaces as
    /// a foreign-key error and rolls the whole unit back.
    pub async fn create_with_leader(
        pool: &PgPool,
        input: &CreateProject,
    ) -> Result<Project, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let image_id: Option<DbId> = match &input.image {
            Some(descriptor) => {
                let id = sqlx::query_scalar::<_, DbId>(
                    "INSERT INTO images (file_name, path, uuid) \
                     VALUES ($1, $2, $3) RETURNING id",
                )
                .bind(&descriptor.file_name)
                .bind(&descriptor.path)
                .bind(descriptor.uuid)
                .fetch_one(&mut *tx)
                .await?;
                Some(id)
            }
            None => None,
        };

        let query = format!(
            "INSERT INTO projects \
                 (title, description, status, start_date, max_participants, \
                  subject_id, region_id, image_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {COLUMNS}"
        );
        let project = sqlx::query_as::<_, Project>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(STATUS_RECRUIT)
            .bind(input.start_date)
            .bind(input.max_participants)
            .bind(input.subject_id)
            .bind(input.region_id)
            .bind(image_id)
            .fetch_one(&mut *tx)
            .await?;

        sqlx::query(
            "INSERT INTO participations (project_id, member_id, role) VALUES ($1, $2, $3)",
        )
        .bind(project.id)
        .bind(input.leader_id)
        .bind(ROLE_LEADER)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(project)
    }

    /// Find a project by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Apply the full modify field set to a project.
    ///
    /// Single UPDATE statement, so the field set is applied atomically.
    /// Returns `None` if no row with the given `id` exists. The leader
    /// participation is untouched by design -- [`UpdateProject`] cannot
    /// express a leader change.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET \
                title = $2, \
                description = $3, \
                status = $4, \
                subject_id = $5, \
                region_id = $6, \
                start_date = $7, \
                max_participants = $8, \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.status)
            .bind(input.subject_id)
            .bind(input.region_id)
            .bind(input.start_date)
            .bind(input.max_participants)
            .fetch_optional(pool)
            .await
    }

    /// Delete a project by ID. Participations go with it (ON DELETE
    /// CASCADE). Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// List the roster of a project, leader first.
    pub async fn list_participations(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<Participation>, sqlx::Error> {
        sqlx::query_as::<_, Participation>(
            "SELECT id, project_id, member_id, role, created_at \
             FROM participations WHERE project_id = $1 \
             ORDER BY role = 'LEADER' DESC, id",
        )
        .bind(project_id)
        .fetch_all(pool)
        .await
    }

    /// Fetch the joined row for one project.
    pub async fn get_joined_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ProjectJoinRow>, sqlx::Error> {
        let query = format!("SELECT {JOIN_COLUMNS} {JOIN_TABLES} WHERE p.id = $1");
        sqlx::query_as::<_, ProjectJoinRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Keyword search over the joined projection with page/total metadata.
    ///
    /// Count and page queries run inside one transaction so both observe
    /// the same snapshot. Ordering is the caller's sort criterion (if any)
    /// followed by a fixed `p.id DESC` tiebreaker, which keeps page
    /// boundaries stable when the primary sort has ties.
    pub async fn search_joined(
        pool: &PgPool,
        fields: SearchFields,
        keyword: Option<&str>,
        page: &PageRequest,
    ) -> Result<Page<ProjectJoinRow>, sqlx::Error> {
        let pattern = keyword.and_then(like_pattern);

        let where_clause = if pattern.is_some() {
            let condition = match (fields.title, fields.description) {
                (true, false) => "p.title ILIKE $1",
                (false, true) => "p.description ILIKE $1",
                _ => "(p.title ILIKE $1 OR p.description ILIKE $1)",
            };
            format!("WHERE {condition}")
        } else {
            String::new()
        };

        let order_by = match page.sort {
            Some(spec) => format!(
                "ORDER BY {} {}, p.id DESC",
                spec.field.order_by_column(),
                spec.direction.as_sql()
            ),
            None => "ORDER BY p.id DESC".to_string(),
        };

        let (limit_param, offset_param) = if pattern.is_some() {
            ("$2", "$3")
        } else {
            ("$1", "$2")
        };

        let count_query = format!("SELECT COUNT(*) FROM projects p {where_clause}");
        let page_query = format!(
            "SELECT {JOIN_COLUMNS} {JOIN_TABLES} {where_clause} {order_by} \
             LIMIT {limit_param} OFFSET {offset_param}"
        );

        let mut tx = pool.begin().await?;

        let total = {
            let mut q = sqlx::query_scalar::<_, i64>(&count_query);
            if let Some(pattern) = &pattern {
                q = q.bind(pattern);
            }
            q.fetch_one(&mut *tx).await?
        };

        let rows = {
            let mut q = sqlx::query_as::<_, ProjectJoinRow>(&page_query);
            if let Some(pattern) = &pattern {
                q = q.bind(pattern);
            }
            q.bind(page.limit())
                .bind(page.offset())
                .fetch_all(&mut *tx)
                .await?
        };

        tx.commit().await?;
        Ok(Page::new(rows, page, total))
    }
}
