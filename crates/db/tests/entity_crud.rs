//! Integration tests for entity CRUD across the content hierarchy:
//! - Slug uniqueness surfaces as a constraint violation
//! - Project deletion cascades through sections to elements
//! - Partial updates leave other fields intact
//! - Media rows and the about singleton round-trip

use sqlx::PgPool;

use atelier_db::models::element::CreateElement;
use atelier_db::models::media::CreateMediaItem;
use atelier_db::models::project::{CreateProject, UpdateProject};
use atelier_db::models::section::CreateSection;
use atelier_db::repositories::{AboutRepo, ElementRepo, MediaRepo, ProjectRepo, SectionRepo};

fn new_project(title: &str) -> CreateProject {
    CreateProject {
        title: title.to_string(),
        subtitle: Some("a subtitle".to_string()),
        year: 2023,
        category: "works".to_string(),
        coming_soon: false,
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn duplicate_slug_violates_unique_constraint(pool: PgPool) {
    ProjectRepo::create(&pool, &new_project("Same Title"), "same-title", None, None)
        .await
        .unwrap();

    let err = ProjectRepo::create(&pool, &new_project("Same Title"), "same-title", None, None)
        .await
        .unwrap_err();

    match err {
        sqlx::Error::Database(db_err) => {
            assert_eq!(db_err.constraint(), Some("uq_projects_slug"));
        }
        other => panic!("expected database error, got {other:?}"),
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn deleting_a_project_cascades_to_sections_and_elements(pool: PgPool) {
    let project = ProjectRepo::create(&pool, &new_project("Doomed"), "doomed", None, None)
        .await
        .unwrap();
    let section = SectionRepo::create(
        &pool,
        &CreateSection {
            project_id: project.id,
            title: None,
            column_count: None,
        },
    )
    .await
    .unwrap();
    let element = ElementRepo::create(
        &pool,
        section.id,
        &CreateElement {
            element_type: "quote".to_string(),
            column_index: 0,
            content: Some("gone soon".to_string()),
            media_url: None,
            alt_text: None,
            caption: None,
            embed_url: None,
        },
        None,
        None,
    )
    .await
    .unwrap();

    assert!(ProjectRepo::delete(&pool, project.id).await.unwrap());

    assert!(SectionRepo::find_by_id(&pool, section.id)
        .await
        .unwrap()
        .is_none());
    assert!(ElementRepo::find_by_id(&pool, element.id)
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn partial_update_preserves_other_fields(pool: PgPool) {
    let project = ProjectRepo::create(&pool, &new_project("Keep Me"), "keep-me", None, None)
        .await
        .unwrap();

    let updated = ProjectRepo::update(
        &pool,
        project.id,
        &UpdateProject {
            year: Some(2025),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();

    assert_eq!(updated.year, 2025);
    assert_eq!(updated.title, "Keep Me");
    assert_eq!(updated.subtitle.as_deref(), Some("a subtitle"));
    // The slug never changes after creation.
    assert_eq!(updated.slug, "keep-me");
}

#[sqlx::test(migrations = "./migrations")]
async fn media_listing_filters_by_file_type(pool: PgPool) {
    for (name, file_type, mime) in [
        ("a.png", "image", "image/png"),
        ("b.mp4", "video", "video/mp4"),
    ] {
        MediaRepo::create(
            &pool,
            &CreateMediaItem {
                filename: name.to_string(),
                original_name: name.to_string(),
                file_type: file_type.to_string(),
                file_size: 1024,
                mime_type: mime.to_string(),
                url: format!("https://cdn.example.com/media/{name}"),
                storage_key: format!("media/{name}"),
                folder: "media".to_string(),
            },
        )
        .await
        .unwrap();
    }

    let images = MediaRepo::list(&pool, Some("image")).await.unwrap();
    assert_eq!(images.len(), 1);
    assert_eq!(images[0].filename, "a.png");

    let all = MediaRepo::list(&pool, None).await.unwrap();
    assert_eq!(all.len(), 2);
}

#[sqlx::test(migrations = "./migrations")]
async fn about_singleton_upserts(pool: PgPool) {
    assert!(AboutRepo::get(&pool).await.unwrap().is_none());

    let first = AboutRepo::upsert(&pool, "hello").await.unwrap();
    assert_eq!(first.id, 1);
    assert_eq!(first.content, "hello");

    let second = AboutRepo::upsert(&pool, "replaced").await.unwrap();
    assert_eq!(second.id, 1);
    assert_eq!(second.content, "replaced");
}
