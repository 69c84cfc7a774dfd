use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::{
    auth::extractors::AuthSession,
    error::ApiError,
    github,
    projects::{
        dto::{ProjectListResponse, ProjectRequest, ProjectResponse},
        repo_types::Project,
    },
    state::AppState,
};

pub fn read_routes() -> Router<AppState> {
    Router::new()
        .route("/projects", get(list_projects))
        .route("/projects/:id", get(get_project))
        .route("/projects/:id/readme", get(get_readme))
}

pub fn write_routes() -> Router<AppState> {
    Router::new()
        .route("/projects", post(create_project))
        .route("/projects/:id", put(update_project))
}

#[instrument(skip(state, auth, payload))]
pub async fn create_project(
    State(state): State<AppState>,
    auth: AuthSession,
    Json(payload): Json<ProjectRequest>,
) -> Result<Json<ProjectResponse>, ApiError> {
    if let Some(url) = payload.github_url.as_deref() {
        github::parse(url)?;
    }

    let project = Project::create(
        &state.db,
        &payload.name,
        &payload.description,
        payload.github_url.as_deref(),
        auth.session.user_id,
    )
    .await?;

    info!(project_id = %project.id, owner = %project.owner_user_id, "project created");
    Ok(Json(ProjectResponse { project }))
}

#[instrument(skip(state))]
pub async fn list_projects(
    State(state): State<AppState>,
) -> Result<Json<ProjectListResponse>, ApiError> {
    let projects = Project::list_all(&state.db).await?;
    Ok(Json(ProjectListResponse { projects }))
}

#[instrument(skip(state))]
pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ProjectResponse>, ApiError> {
    let project = Project::find_by_id(&state.db, id)
        .await?
        .ok_or(ApiError::NotFound("Project not found"))?;
    Ok(Json(ProjectResponse { project }))
}

#[instrument(skip(state, auth, payload))]
pub async fn update_project(
    State(state): State<AppState>,
    auth: AuthSession,
    Path(id): Path<Uuid>,
    Json(payload): Json<ProjectRequest>,
) -> Result<Json<ProjectResponse>, ApiError> {
    let project = Project::find_by_id(&state.db, id)
        .await?
        .ok_or(ApiError::NotFound("Project not found"))?;

    if project.owner_user_id != auth.session.user_id {
        warn!(project_id = %id, user_id = %auth.session.user_id, "project update denied");
        return Err(ApiError::Forbidden(
            "You do not have permission to update this project",
        ));
    }

    if let Some(url) = payload.github_url.as_deref() {
        github::parse(url)?;
    }

    let project = Project::update(
        &state.db,
        id,
        &payload.name,
        &payload.description,
        payload.github_url.as_deref(),
    )
    .await?;

    info!(project_id = %project.id, "project updated");
    Ok(Json(ProjectResponse { project }))
}

#[instrument(skip(state))]
pub async fn get_readme(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, ApiError> {
    let project = Project::find_by_id(&state.db, id)
        .await?
        .ok_or(ApiError::NotFound("Project not found"))?;

    // No GitHub URL short-circuits to an empty 204 before any upstream call.
    let Some(url) = project.github_url.as_deref().filter(|url| !url.is_empty()) else {
        return Ok(StatusCode::NO_CONTENT.into_response());
    };

    let readme = state.github.fetch_readme(url).await?;

    Ok((
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        readme,
    )
        .into_response())
}
