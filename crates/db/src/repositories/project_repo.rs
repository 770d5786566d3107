//! Repository for the `projects` table.

use portfolio_core::types::DbId;
use sqlx::PgPool;

use crate::models::project::{CreateProject, LegacyImageMigration, Project, UpdateProject};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, full_description, featured_image, images, tags, \
                       link, github_link, featured, created_at, updated_at";

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects
                (title, description, full_description, featured_image, images, tags,
                 link, github_link, featured)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.full_description)
            .bind(&input.featured_image)
            .bind(&input.images)
            .bind(&input.tags)
            .bind(&input.link)
            .bind(&input.github_link)
            .bind(input.featured)
            .fetch_one(pool)
            .await
    }

    /// Find a project by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List projects, most recently created first.
    ///
    /// With `featured_only`, rows whose `featured` flag is false are skipped.
    pub async fn list(pool: &PgPool, featured_only: bool) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects
             WHERE ($1 = false OR featured = true)
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(featured_only)
            .fetch_all(pool)
            .await
    }

    /// Update a project. Only non-`None` fields in `input` are applied.
    /// An empty `link` or `github_link` clears the column.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                full_description = COALESCE($4, full_description),
                featured_image = COALESCE($5, featured_image),
                images = COALESCE($6, images),
                tags = COALESCE($7, tags),
                link = CASE WHEN $8::text IS NULL THEN link ELSE NULLIF($8, '') END,
                github_link = CASE WHEN $9::text IS NULL THEN github_link ELSE NULLIF($9, '') END,
                featured = COALESCE($10, featured)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.full_description)
            .bind(&input.featured_image)
            .bind(&input.images)
            .bind(&input.tags)
            .bind(&input.link)
            .bind(&input.github_link)
            .bind(input.featured)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a project by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Move the retired `image` column into `featured_image` wherever the
    /// latter is still empty, clearing `image` afterwards.
    pub async fn migrate_legacy_images(
        pool: &PgPool,
    ) -> Result<Vec<LegacyImageMigration>, sqlx::Error> {
        sqlx::query_as::<_, LegacyImageMigration>(
            "UPDATE projects SET featured_image = image, image = NULL
             WHERE image IS NOT NULL AND featured_image = ''
             RETURNING id, title, TRUE AS updated",
        )
        .fetch_all(pool)
        .await
    }

    /// Replace `from_prefix` with `to_prefix` at the start of every stored
    /// image URL (`featured_image` and each `images` entry).
    ///
    /// Returns the number of projects whose URLs changed.
    pub async fn rewrite_image_prefix(
        pool: &PgPool,
        from_prefix: &str,
        to_prefix: &str,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE projects SET
                featured_image = CASE
                    WHEN starts_with(featured_image, $1)
                    THEN $2 || substr(featured_image, char_length($1) + 1)
                    ELSE featured_image
                END,
                images = ARRAY(
                    SELECT CASE
                        WHEN starts_with(u.img, $1)
                        THEN $2 || substr(u.img, char_length($1) + 1)
                        ELSE u.img
                    END
                    FROM unnest(images) WITH ORDINALITY AS u(img, ord)
                    ORDER BY u.ord
                )
             WHERE starts_with(featured_image, $1)
                OR EXISTS (SELECT 1 FROM unnest(images) AS i(img) WHERE starts_with(i.img, $1))",
        )
        .bind(from_prefix)
        .bind(to_prefix)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }
}
