//! Handlers for the `/skills` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use portfolio_core::error::CoreError;
use portfolio_core::types::DbId;
use portfolio_db::models::skill::{Skill, SkillInput};
use portfolio_db::repositories::SkillRepo;

use crate::error::{AppError, AppJson, AppPath, AppResult};
use crate::handlers::MessageResponse;
use crate::middleware::auth::AdminSession;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Skill", id })
}

/// GET /api/skills
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Skill>>> {
    let skills = SkillRepo::list(&state.pool).await?;
    Ok(Json(skills))
}

/// POST /api/skills
pub async fn create(
    _session: AdminSession,
    State(state): State<AppState>,
    AppJson(input): AppJson<SkillInput>,
) -> AppResult<(StatusCode, Json<Skill>)> {
    let input = input.normalized();
    input.validate()?;
    let skill = SkillRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(skill)))
}

/// GET /api/skills/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Skill>> {
    let skill = SkillRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(skill))
}

/// PUT /api/skills/{id}
///
/// The name is required on update as well; category is optional.
pub async fn update(
    _session: AdminSession,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<SkillInput>,
) -> AppResult<Json<Skill>> {
    let input = input.normalized();
    input.validate()?;
    let skill = SkillRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(skill))
}

/// DELETE /api/skills/{id}
pub async fn delete(
    _session: AdminSession,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if !SkillRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    Ok(Json(MessageResponse {
        message: "Skill deleted successfully",
    }))
}
