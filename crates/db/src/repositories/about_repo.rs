//! Repository for the single-row `about` table.

use sqlx::types::Json;
use sqlx::{PgExecutor, PgPool};

use crate::models::about::{About, AboutDocument, UpdateAbout};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, subtitle, profile_image, bio, skills, experiences, education, \
                       contact_info, certifications, created_at, updated_at";

/// Reads and writes the About page document.
pub struct AboutRepo;

impl AboutRepo {
    /// Return the About row if it has been created.
    pub async fn find(pool: &PgPool) -> Result<Option<About>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM about LIMIT 1");
        sqlx::query_as::<_, About>(&query)
            .fetch_optional(pool)
            .await
    }

    /// Return the About row, inserting the default document if it is missing.
    pub async fn get_or_create(pool: &PgPool) -> Result<About, sqlx::Error> {
        if let Some(about) = Self::find(pool).await? {
            return Ok(about);
        }
        let doc = AboutDocument::default();
        let query = format!(
            "INSERT INTO about
                (title, subtitle, profile_image, bio, skills, experiences, education,
                 contact_info, certifications)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             ON CONFLICT (singleton) DO NOTHING
             RETURNING {COLUMNS}"
        );
        let inserted = sqlx::query_as::<_, About>(&query)
            .bind(&doc.title)
            .bind(&doc.subtitle)
            .bind(&doc.profile_image)
            .bind(&doc.bio)
            .bind(Json(&doc.skills))
            .bind(Json(&doc.experiences))
            .bind(Json(&doc.education))
            .bind(doc.contact_info.as_ref().map(Json))
            .bind(doc.certifications.as_ref().map(Json))
            .fetch_optional(pool)
            .await?;

        match inserted {
            Some(about) => Ok(about),
            // A concurrent request created it first.
            None => {
                let query = format!("SELECT {COLUMNS} FROM about LIMIT 1");
                sqlx::query_as::<_, About>(&query).fetch_one(pool).await
            }
        }
    }

    /// Replace the provided sections of the About document.
    ///
    /// When no document exists yet, one is created from the defaults
    /// overlaid with `input`.
    pub async fn upsert(pool: &PgPool, input: &UpdateAbout) -> Result<About, sqlx::Error> {
        let doc = input.clone().into_document();
        let query = format!(
            "INSERT INTO about
                (title, subtitle, profile_image, bio, skills, experiences, education,
                 contact_info, certifications)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             ON CONFLICT (singleton) DO UPDATE SET
                title = COALESCE($10, about.title),
                subtitle = COALESCE($11, about.subtitle),
                profile_image = COALESCE($12, about.profile_image),
                bio = COALESCE($13, about.bio),
                skills = COALESCE($14, about.skills),
                experiences = COALESCE($15, about.experiences),
                education = COALESCE($16, about.education),
                contact_info = COALESCE($17, about.contact_info),
                certifications = COALESCE($18, about.certifications)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, About>(&query)
            .bind(&doc.title)
            .bind(&doc.subtitle)
            .bind(&doc.profile_image)
            .bind(&doc.bio)
            .bind(Json(&doc.skills))
            .bind(Json(&doc.experiences))
            .bind(Json(&doc.education))
            .bind(doc.contact_info.as_ref().map(Json))
            .bind(doc.certifications.as_ref().map(Json))
            .bind(&input.title)
            .bind(&input.subtitle)
            .bind(&input.profile_image)
            .bind(&input.bio)
            .bind(input.skills.as_ref().map(Json))
            .bind(input.experiences.as_ref().map(Json))
            .bind(input.education.as_ref().map(Json))
            .bind(input.contact_info.as_ref().map(Json))
            .bind(input.certifications.as_ref().map(Json))
            .fetch_one(pool)
            .await
    }

    /// Discard the current document and recreate it from the defaults.
    pub async fn reset(pool: &PgPool) -> Result<About, sqlx::Error> {
        let mut tx = pool.begin().await?;
        sqlx::query("DELETE FROM about").execute(&mut *tx).await?;
        let about = Self::insert(&mut *tx, &AboutDocument::default()).await?;
        tx.commit().await?;
        Ok(about)
    }

    async fn insert<'e, E: PgExecutor<'e>>(
        executor: E,
        doc: &AboutDocument,
    ) -> Result<About, sqlx::Error> {
        let query = format!(
            "INSERT INTO about
                (title, subtitle, profile_image, bio, skills, experiences, education,
                 contact_info, certifications)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, About>(&query)
            .bind(&doc.title)
            .bind(&doc.subtitle)
            .bind(&doc.profile_image)
            .bind(&doc.bio)
            .bind(Json(&doc.skills))
            .bind(Json(&doc.experiences))
            .bind(Json(&doc.education))
            .bind(doc.contact_info.as_ref().map(Json))
            .bind(doc.certifications.as_ref().map(Json))
            .fetch_one(executor)
            .await
    }
}
