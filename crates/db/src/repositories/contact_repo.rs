//! Repository for the single-row `contact_info` table.

use portfolio_core::content::{
    DEFAULT_CONTACT_EMAIL, DEFAULT_CONTACT_GITHUB, DEFAULT_CONTACT_LINKEDIN,
    DEFAULT_CONTACT_LOCATION, DEFAULT_CONTACT_PHONE,
};
use sqlx::PgPool;

use crate::models::contact::{Contact, UpdateContact};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, email, phone, location, linkedin, github, created_at, updated_at";

/// Reads and writes the public contact details.
pub struct ContactRepo;

impl ContactRepo {
    /// Return the contact row if it has been created.
    pub async fn find(pool: &PgPool) -> Result<Option<Contact>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM contact_info LIMIT 1");
        sqlx::query_as::<_, Contact>(&query)
            .fetch_optional(pool)
            .await
    }

    /// Return the contact row, inserting the defaults first if it is missing.
    pub async fn get_or_create(pool: &PgPool) -> Result<Contact, sqlx::Error> {
        sqlx::query(
            "INSERT INTO contact_info (email, phone, location, linkedin, github)
             VALUES ($1, $2, $3, $4, $5)
             ON CONFLICT (singleton) DO NOTHING",
        )
        .bind(DEFAULT_CONTACT_EMAIL)
        .bind(DEFAULT_CONTACT_PHONE)
        .bind(DEFAULT_CONTACT_LOCATION)
        .bind(DEFAULT_CONTACT_LINKEDIN)
        .bind(DEFAULT_CONTACT_GITHUB)
        .execute(pool)
        .await?;

        let query = format!("SELECT {COLUMNS} FROM contact_info LIMIT 1");
        sqlx::query_as::<_, Contact>(&query).fetch_one(pool).await
    }

    /// Patch the contact row with the provided fields, creating it from the
    /// defaults overlaid with `input` when it does not exist yet.
    pub async fn upsert(pool: &PgPool, input: &UpdateContact) -> Result<Contact, sqlx::Error> {
        let query = format!(
            "INSERT INTO contact_info (email, phone, location, linkedin, github)
             VALUES (COALESCE($1, $6), COALESCE($2, $7), COALESCE($3, $8),
                     COALESCE($4, $9), COALESCE($5, $10))
             ON CONFLICT (singleton) DO UPDATE SET
                email = COALESCE($1, contact_info.email),
                phone = COALESCE($2, contact_info.phone),
                location = COALESCE($3, contact_info.location),
                linkedin = COALESCE($4, contact_info.linkedin),
                github = COALESCE($5, contact_info.github)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Contact>(&query)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.location)
            .bind(&input.linkedin)
            .bind(&input.github)
            .bind(DEFAULT_CONTACT_EMAIL)
            .bind(DEFAULT_CONTACT_PHONE)
            .bind(DEFAULT_CONTACT_LOCATION)
            .bind(DEFAULT_CONTACT_LINKEDIN)
            .bind(DEFAULT_CONTACT_GITHUB)
            .fetch_one(pool)
            .await
    }
}
