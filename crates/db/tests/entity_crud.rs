//! Integration tests for the repository layer against a real database.
//!
//! - Project create / read / list ordering / featured filter / update / delete
//! - Legacy image migration and URL prefix rewriting
//! - Skill ordering and default category
//! - Singleton About and Contact documents

use portfolio_core::content::{DEFAULT_ABOUT_TITLE, DEFAULT_CONTACT_EMAIL, DEFAULT_SKILL_CATEGORY};
use portfolio_db::models::about::UpdateAbout;
use portfolio_db::models::contact::UpdateContact;
use portfolio_db::models::project::{CreateProject, UpdateProject};
use portfolio_db::models::skill::SkillInput;
use portfolio_db::repositories::{AboutRepo, ContactRepo, ProjectRepo, SkillRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_project(title: &str, featured: bool) -> CreateProject {
    CreateProject {
        title: title.to_string(),
        description: format!("{title} in short"),
        full_description: format!("{title} in long form"),
        featured_image: format!("https://cdn.example.com/{title}.png"),
        images: vec![format!("https://cdn.example.com/{title}-1.png")],
        tags: vec!["rust".to_string()],
        link: None,
        github_link: None,
        featured,
    }
}

fn new_skill(name: &str, category: Option<&str>) -> SkillInput {
    SkillInput {
        name: Some(name.to_string()),
        category: category.map(str::to_string),
    }
}

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_project_create_and_find(pool: PgPool) {
    let created = ProjectRepo::create(&pool, &new_project("alpha", false))
        .await
        .unwrap();
    assert_eq!(created.title, "alpha");
    assert_eq!(created.tags, vec!["rust".to_string()]);
    assert!(!created.featured);

    let found = ProjectRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .expect("project should exist");
    assert_eq!(found.featured_image, "https://cdn.example.com/alpha.png");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_project_list_newest_first_and_featured_filter(pool: PgPool) {
    let a = ProjectRepo::create(&pool, &new_project("a", true)).await.unwrap();
    let b = ProjectRepo::create(&pool, &new_project("b", false)).await.unwrap();
    let c = ProjectRepo::create(&pool, &new_project("c", true)).await.unwrap();

    let all = ProjectRepo::list(&pool, false).await.unwrap();
    let ids: Vec<i64> = all.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![c.id, b.id, a.id]);

    let featured = ProjectRepo::list(&pool, true).await.unwrap();
    let ids: Vec<i64> = featured.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![c.id, a.id]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_project_partial_update(pool: PgPool) {
    let created = ProjectRepo::create(&pool, &new_project("orig", false))
        .await
        .unwrap();

    let patch = UpdateProject {
        title: Some("renamed".to_string()),
        featured: Some(true),
        ..Default::default()
    };
    let updated = ProjectRepo::update(&pool, created.id, &patch)
        .await
        .unwrap()
        .expect("row should be updated");
    assert_eq!(updated.title, "renamed");
    assert!(updated.featured);
    assert_eq!(updated.description, created.description);
    assert!(updated.updated_at >= created.updated_at);

    // Applying the same patch again leaves the visible fields unchanged.
    let again = ProjectRepo::update(&pool, created.id, &patch)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(again.title, updated.title);
    assert_eq!(again.featured, updated.featured);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_project_update_blank_link_clears_it(pool: PgPool) {
    let created = ProjectRepo::create(
        &pool,
        &CreateProject {
            link: Some("https://example.com".to_string()),
            github_link: Some("https://github.com/example/repo".to_string()),
            ..new_project("linked", false)
        },
    )
    .await
    .unwrap();

    let patch = UpdateProject {
        link: Some(String::new()),
        ..Default::default()
    };
    let updated = ProjectRepo::update(&pool, created.id, &patch)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.link, None);
    assert_eq!(
        updated.github_link.as_deref(),
        Some("https://github.com/example/repo")
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_project_update_missing_returns_none(pool: PgPool) {
    let result = ProjectRepo::update(&pool, 999_999, &UpdateProject::default())
        .await
        .unwrap();
    assert!(result.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_project_delete(pool: PgPool) {
    let created = ProjectRepo::create(&pool, &new_project("gone", false))
        .await
        .unwrap();
    assert!(ProjectRepo::delete(&pool, created.id).await.unwrap());
    assert!(ProjectRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .is_none());
    assert!(!ProjectRepo::delete(&pool, created.id).await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_title_length_is_enforced_by_schema(pool: PgPool) {
    let mut input = new_project("x", false);
    input.title = "t".repeat(101);
    let result = ProjectRepo::create(&pool, &input).await;
    assert!(result.is_err(), "101-character title must violate the check");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_migrate_legacy_images(pool: PgPool) {
    sqlx::query(
        "INSERT INTO projects (title, description, full_description, image, tags)
         VALUES ('legacy', 'd', 'f', 'https://old.example.com/cover.png', ARRAY['x'])",
    )
    .execute(&pool)
    .await
    .unwrap();
    let modern = ProjectRepo::create(&pool, &new_project("modern", false))
        .await
        .unwrap();

    let report = ProjectRepo::migrate_legacy_images(&pool).await.unwrap();
    assert_eq!(report.len(), 1);
    assert_eq!(report[0].title, "legacy");
    assert!(report[0].updated);

    let migrated = ProjectRepo::find_by_id(&pool, report[0].id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(migrated.featured_image, "https://old.example.com/cover.png");

    let untouched = ProjectRepo::find_by_id(&pool, modern.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(untouched.featured_image, modern.featured_image);

    // Second run finds nothing left to migrate.
    assert!(ProjectRepo::migrate_legacy_images(&pool)
        .await
        .unwrap()
        .is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_rewrite_image_prefix(pool: PgPool) {
    let created = ProjectRepo::create(&pool, &new_project("moved", false))
        .await
        .unwrap();
    ProjectRepo::create(
        &pool,
        &CreateProject {
            featured_image: "https://elsewhere.example.org/a.png".to_string(),
            images: vec![],
            ..new_project("other", false)
        },
    )
    .await
    .unwrap();

    let touched = ProjectRepo::rewrite_image_prefix(
        &pool,
        "https://cdn.example.com",
        "https://pub-123.r2.dev",
    )
    .await
    .unwrap();
    assert_eq!(touched, 1);

    let moved = ProjectRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(moved.featured_image, "https://pub-123.r2.dev/moved.png");
    assert_eq!(moved.images, vec!["https://pub-123.r2.dev/moved-1.png".to_string()]);
}

// ---------------------------------------------------------------------------
// Skills
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_skill_default_category_and_ordering(pool: PgPool) {
    let loose = SkillRepo::create(&pool, &new_skill("Whittling", None))
        .await
        .unwrap();
    assert_eq!(loose.category, DEFAULT_SKILL_CATEGORY);

    SkillRepo::create(&pool, &new_skill("Rust", Some("Backend"))).await.unwrap();
    SkillRepo::create(&pool, &new_skill("Go", Some("Backend"))).await.unwrap();
    SkillRepo::create(&pool, &new_skill("React", Some("Frontend"))).await.unwrap();

    let names: Vec<String> = SkillRepo::list(&pool)
        .await
        .unwrap()
        .into_iter()
        .map(|s| s.name)
        .collect();
    assert_eq!(names, vec!["Go", "Rust", "React", "Whittling"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_skill_update_and_delete(pool: PgPool) {
    let skill = SkillRepo::create(&pool, &new_skill("Rust", Some("Backend")))
        .await
        .unwrap();

    let updated = SkillRepo::update(&pool, skill.id, &new_skill("Rust 2024", None))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.name, "Rust 2024");
    assert_eq!(updated.category, "Backend");

    assert!(SkillRepo::delete(&pool, skill.id).await.unwrap());
    assert!(SkillRepo::find_by_id(&pool, skill.id).await.unwrap().is_none());
}

// ---------------------------------------------------------------------------
// Singletons
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_about_get_or_create_is_idempotent(pool: PgPool) {
    assert!(AboutRepo::find(&pool).await.unwrap().is_none());

    let first = AboutRepo::get_or_create(&pool).await.unwrap();
    let second = AboutRepo::get_or_create(&pool).await.unwrap();
    assert_eq!(first.id, second.id);
    assert_eq!(first.title, DEFAULT_ABOUT_TITLE);

    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM about")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count.0, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_about_upsert_then_reset(pool: PgPool) {
    let input = UpdateAbout {
        title: Some("Hi there".to_string()),
        bio: Some(vec!["Only line".to_string()]),
        ..Default::default()
    };
    let created = AboutRepo::upsert(&pool, &input).await.unwrap();
    assert_eq!(created.title, "Hi there");
    assert_eq!(created.bio, vec!["Only line".to_string()]);

    let patch = UpdateAbout {
        subtitle: Some("New subtitle".to_string()),
        ..Default::default()
    };
    let patched = AboutRepo::upsert(&pool, &patch).await.unwrap();
    assert_eq!(patched.id, created.id);
    assert_eq!(patched.title, "Hi there");
    assert_eq!(patched.subtitle, "New subtitle");

    let reset = AboutRepo::reset(&pool).await.unwrap();
    assert_eq!(reset.title, DEFAULT_ABOUT_TITLE);
    assert_ne!(reset.id, created.id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_contact_singleton(pool: PgPool) {
    let contact = ContactRepo::get_or_create(&pool).await.unwrap();
    assert_eq!(contact.email, DEFAULT_CONTACT_EMAIL);

    let patch = UpdateContact {
        email: Some("me@example.org".to_string()),
        phone: Some("+44 20 7946 0000".to_string()),
        ..Default::default()
    };
    let updated = ContactRepo::upsert(&pool, &patch).await.unwrap();
    assert_eq!(updated.id, contact.id);
    assert_eq!(updated.email, "me@example.org");
    assert_eq!(updated.location, contact.location);

    let fetched = ContactRepo::find(&pool).await.unwrap().unwrap();
    assert_eq!(fetched.phone.as_deref(), Some("+44 20 7946 0000"));
}
