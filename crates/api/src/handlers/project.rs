//! Handlers for the `/projects` resource.
//!
//! This is the project lifecycle layer: the only writer of project and
//! roster state. Creation resolves its referenced entities up front and
//! persists the project together with its LEADER participation in one
//! transaction; modification re-resolves subject and region and replaces
//! the content fields; a missing *target* project on modify/delete is a
//! `null` result, while a missing *referenced* entity is always a 404.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use validator::Validate;

use moim_core::error::CoreError;
use moim_core::pagination::Page;
use moim_core::project::{validate_max_participants, validate_project_status, validate_title};
use moim_core::types::DbId;
use moim_db::models::project::{CreateProject, UpdateProject};
use moim_db::models::project_view::ProjectView;
use moim_db::repositories::{MemberRepo, ProjectRepo, RegionRepo, SubjectRepo};

use crate::error::{AppError, AppResult};
use crate::notifications::email::project_created_email;
use crate::query::ProjectSearchParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/projects
///
/// Keyword search with pagination. Row order comes straight from the
/// repository page; mapping to views preserves it.
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<ProjectSearchParams>,
) -> AppResult<Json<DataResponse<Page<ProjectView>>>> {
    let page = ProjectRepo::search_joined(
        &state.pool,
        params.search_fields(),
        params.keyword.as_deref(),
        &params.page_request(),
    )
    .await?;

    Ok(Json(DataResponse {
        data: page.map(ProjectView::from),
    }))
}

/// GET /api/v1/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<ProjectView>>> {
    let row = ProjectRepo::get_joined_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;

    Ok(Json(DataResponse { data: row.into() }))
}

/// POST /api/v1/projects
///
/// Subject, region, and leader must all resolve before anything is
/// written; the project and its LEADER participation then persist in a
/// single transaction. Status is not caller-controlled -- every new
/// project starts in `RECRUIT`. Returns the persisted title.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateProject>,
) -> AppResult<(StatusCode, Json<DataResponse<String>>)> {
    input
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;
    validate_title(&input.title)?;
    validate_max_participants(input.max_participants)?;

    SubjectRepo::find_by_id(&state.pool, input.subject_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Subject",
            id: input.subject_id,
        }))?;
    RegionRepo::find_by_id(&state.pool, input.region_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Region",
            id: input.region_id,
        }))?;
    let leader = MemberRepo::find_by_id(&state.pool, input.leader_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Member",
            id: input.leader_id,
        }))?;

    let project = ProjectRepo::create_with_leader(&state.pool, &input).await?;

    // The creation unit of work is committed; a failed notification must
    // not undo it.
    if let Some(mailer) = &state.mailer {
        let (subject, body) = project_created_email(&leader.name, &project.title);
        if let Err(err) = mailer.send(&leader.email, &subject, &body).await {
            tracing::warn!(error = %err, project_id = project.id, "Project-created email failed");
        }
    }

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: project.title,
        }),
    ))
}

/// PUT /api/v1/projects/{id}
///
/// Replaces the content fields (title, description, status, subject,
/// region, start date, capacity). A missing target project yields
/// `{"data": null}` rather than an error; the leader and roster are not
/// reachable from this operation. Returns the post-mutation title.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProject>,
) -> AppResult<Json<DataResponse<Option<String>>>> {
    input
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;
    validate_title(&input.title)?;
    validate_max_participants(input.max_participants)?;
    validate_project_status(&input.status)?;

    if ProjectRepo::find_by_id(&state.pool, id).await?.is_none() {
        return Ok(Json(DataResponse { data: None }));
    }

    SubjectRepo::find_by_id(&state.pool, input.subject_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Subject",
            id: input.subject_id,
        }))?;
    RegionRepo::find_by_id(&state.pool, input.region_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Region",
            id: input.region_id,
        }))?;

    let updated = ProjectRepo::update(&state.pool, id, &input).await?;

    Ok(Json(DataResponse {
        data: updated.map(|p| p.title),
    }))
}

/// DELETE /api/v1/projects/{id}
///
/// Removes the project and (by cascade) its roster. Returns the deleted
/// title, or `{"data": null}` when no such project exists.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Option<String>>>> {
    let Some(project) = ProjectRepo::find_by_id(&state.pool, id).await? else {
        return Ok(Json(DataResponse { data: None }));
    };

    ProjectRepo::delete(&state.pool, id).await?;

    Ok(Json(DataResponse {
        data: Some(project.title),
    }))
}
