//! Handlers for the `/projects` resource.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use portfolio_core::error::CoreError;
use portfolio_core::types::DbId;
use portfolio_db::models::project::{
    CreateProject, LegacyImageMigration, Project, RewriteImageUrls, UpdateProject,
};
use portfolio_db::repositories::ProjectRepo;
use serde::Serialize;

use crate::error::{AppError, AppJson, AppPath, AppResult};
use crate::handlers::MessageResponse;
use crate::middleware::auth::AdminSession;
use crate::query::FeaturedParams;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Project",
        id,
    })
}

/// GET /api/projects
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<FeaturedParams>,
) -> AppResult<Json<Vec<Project>>> {
    let projects = ProjectRepo::list(&state.pool, params.featured_only()).await?;
    Ok(Json(projects))
}

/// POST /api/projects
pub async fn create(
    _session: AdminSession,
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateProject>,
) -> AppResult<(StatusCode, Json<Project>)> {
    let input = input.normalized();
    input.validate()?;
    let project = ProjectRepo::create(&state.pool, &input).await?;
    tracing::info!(id = project.id, title = %project.title, "Project created");
    Ok((StatusCode::CREATED, Json(project)))
}

/// GET /api/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Project>> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(project))
}

/// PUT /api/projects/{id}
pub async fn update(
    _session: AdminSession,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateProject>,
) -> AppResult<Json<Project>> {
    let input = input.normalized();
    input.validate()?;
    let project = ProjectRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(project))
}

/// DELETE /api/projects/{id}
pub async fn delete(
    _session: AdminSession,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if !ProjectRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    tracing::info!(id, "Project deleted");
    Ok(Json(MessageResponse {
        message: "Project deleted successfully",
    }))
}

// ---------------------------------------------------------------------------
// Maintenance
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MigrationReport {
    pub message: &'static str,
    pub projects_updated: usize,
    pub details: Vec<LegacyImageMigration>,
}

/// GET /api/projects/migrate
///
/// Move legacy `image` values into `featuredImage`.
pub async fn migrate_images(
    _session: AdminSession,
    State(state): State<AppState>,
) -> AppResult<Json<MigrationReport>> {
    let details = ProjectRepo::migrate_legacy_images(&state.pool).await?;
    tracing::info!(count = details.len(), "Legacy project images migrated");
    Ok(Json(MigrationReport {
        message: "Migration completed successfully",
        projects_updated: details.len(),
        details,
    }))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RewriteReport {
    pub message: &'static str,
    pub projects_updated: u64,
}

/// POST /api/projects/image-urls
///
/// Rewrite stored image URLs from one public prefix to another, e.g. after
/// moving the bucket behind a new domain.
pub async fn rewrite_image_urls(
    _session: AdminSession,
    State(state): State<AppState>,
    AppJson(input): AppJson<RewriteImageUrls>,
) -> AppResult<Json<RewriteReport>> {
    let from = input.from_prefix.trim();
    let to = input.to_prefix.trim();
    if from.is_empty() || to.is_empty() {
        return Err(AppError::BadRequest(
            "fromPrefix and toPrefix are required".into(),
        ));
    }
    let updated = ProjectRepo::rewrite_image_prefix(&state.pool, from, to).await?;
    tracing::info!(from, to, updated, "Project image URLs rewritten");
    Ok(Json(RewriteReport {
        message: "Image URLs updated",
        projects_updated: updated,
    }))
}
