//! Repository for the `skills` table.

use portfolio_core::content::DEFAULT_SKILL_CATEGORY;
use portfolio_core::types::DbId;
use sqlx::PgPool;

use crate::models::skill::{Skill, SkillInput};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, category, created_at, updated_at";

/// Provides CRUD operations for skills.
pub struct SkillRepo;

impl SkillRepo {
    /// Insert a new skill, returning the created row.
    ///
    /// The caller must have validated that `name` is present.
    pub async fn create(pool: &PgPool, input: &SkillInput) -> Result<Skill, sqlx::Error> {
        let query = format!(
            "INSERT INTO skills (name, category)
             VALUES ($1, COALESCE($2, $3))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Skill>(&query)
            .bind(&input.name)
            .bind(&input.category)
            .bind(DEFAULT_SKILL_CATEGORY)
            .fetch_one(pool)
            .await
    }

    /// Find a skill by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Skill>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM skills WHERE id = $1");
        sqlx::query_as::<_, Skill>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all skills ordered by category, then name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Skill>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM skills ORDER BY category ASC, name ASC, id ASC");
        sqlx::query_as::<_, Skill>(&query).fetch_all(pool).await
    }

    /// Update a skill. A `None` category keeps the stored one.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &SkillInput,
    ) -> Result<Option<Skill>, sqlx::Error> {
        let query = format!(
            "UPDATE skills SET
                name = COALESCE($2, name),
                category = COALESCE($3, category)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Skill>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.category)
            .fetch_optional(pool)
            .await
    }

    /// Delete a skill by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM skills WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
