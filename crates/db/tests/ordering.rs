//! Integration tests for order assignment and reorder application.
//!
//! Exercises the repository layer against a real database:
//! - Sequential 0-based order assignment per scope
//! - Independent sequences per project category and per element column
//! - Reorder permutation application
//! - Best-effort reorder semantics when an entry cannot be applied

use sqlx::PgPool;

use atelier_db::models::element::CreateElement;
use atelier_db::models::project::CreateProject;
use atelier_db::models::reorder::{ElementOrderEntry, OrderEntry};
use atelier_db::models::section::CreateSection;
use atelier_db::repositories::{ElementRepo, ProjectRepo, SectionRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_project(title: &str, category: &str) -> CreateProject {
    CreateProject {
        title: title.to_string(),
        subtitle: None,
        year: 2024,
        category: category.to_string(),
        coming_soon: false,
    }
}

fn new_text_element(column_index: i32) -> CreateElement {
    CreateElement {
        element_type: "text".to_string(),
        column_index,
        content: Some("hello".to_string()),
        media_url: None,
        alt_text: None,
        caption: None,
        embed_url: None,
    }
}

async fn create_project(pool: &PgPool, title: &str, category: &str) -> i64 {
    let slug = atelier_core::slug::slugify(title);
    ProjectRepo::create(pool, &new_project(title, category), &slug, None, None)
        .await
        .unwrap()
        .id
}

// ---------------------------------------------------------------------------
// Order assignment
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn sections_get_sequential_order_indices(pool: PgPool) {
    let project_id = create_project(&pool, "Ordering", "works").await;

    for expected in 0..3 {
        let section = SectionRepo::create(
            &pool,
            &CreateSection {
                project_id,
                title: None,
                column_count: None,
            },
        )
        .await
        .unwrap();
        assert_eq!(section.order_index, expected);
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn element_order_is_scoped_per_column(pool: PgPool) {
    let project_id = create_project(&pool, "Columns", "works").await;
    let section = SectionRepo::create(
        &pool,
        &CreateSection {
            project_id,
            title: None,
            column_count: Some(2),
        },
    )
    .await
    .unwrap();

    // Three elements in column 0 count 0,1,2; column 1 starts over at 0.
    for expected in 0..3 {
        let element = ElementRepo::create(&pool, section.id, &new_text_element(0), None, None)
            .await
            .unwrap();
        assert_eq!(element.order_index, expected);
    }
    let other_column = ElementRepo::create(&pool, section.id, &new_text_element(1), None, None)
        .await
        .unwrap();
    assert_eq!(other_column.order_index, 0);
}

#[sqlx::test(migrations = "./migrations")]
async fn project_order_is_scoped_per_category(pool: PgPool) {
    let works_a = create_project(&pool, "Works A", "works").await;
    let works_b = create_project(&pool, "Works B", "works").await;
    let parallel = create_project(&pool, "Parallel A", "parallel discourses").await;

    let a = ProjectRepo::find_by_id(&pool, works_a).await.unwrap().unwrap();
    let b = ProjectRepo::find_by_id(&pool, works_b).await.unwrap().unwrap();
    let p = ProjectRepo::find_by_id(&pool, parallel).await.unwrap().unwrap();

    assert_eq!(a.order_index, 0);
    assert_eq!(b.order_index, 1);
    // The other category keeps its own sequence.
    assert_eq!(p.order_index, 0);
}

// ---------------------------------------------------------------------------
// Reorder application
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn reorder_applies_submitted_permutation(pool: PgPool) {
    let ids = [
        create_project(&pool, "First", "works").await,
        create_project(&pool, "Second", "works").await,
        create_project(&pool, "Third", "works").await,
    ];

    // Reverse the display order.
    let entries: Vec<OrderEntry> = ids
        .iter()
        .rev()
        .enumerate()
        .map(|(order_index, &id)| OrderEntry {
            id,
            order_index: order_index as i32,
        })
        .collect();

    let outcome = ProjectRepo::reorder(&pool, &entries).await;
    assert_eq!(outcome.updated, 3);
    assert!(outcome.failed.is_empty());

    let listed = ProjectRepo::list(&pool, Some("works")).await.unwrap();
    let listed_ids: Vec<i64> = listed.iter().map(|p| p.id).collect();
    assert_eq!(listed_ids, vec![ids[2], ids[1], ids[0]]);
}

#[sqlx::test(migrations = "./migrations")]
async fn reorder_continues_past_missing_entries(pool: PgPool) {
    let first = create_project(&pool, "Kept One", "works").await;
    let second = create_project(&pool, "Kept Two", "works").await;

    // A bogus id in the middle must not stop the later entry from applying.
    let entries = vec![
        OrderEntry {
            id: first,
            order_index: 5,
        },
        OrderEntry {
            id: 999_999,
            order_index: 6,
        },
        OrderEntry {
            id: second,
            order_index: 7,
        },
    ];

    let outcome = ProjectRepo::reorder(&pool, &entries).await;
    assert_eq!(outcome.updated, 2);
    assert_eq!(outcome.failed, vec![999_999]);

    let a = ProjectRepo::find_by_id(&pool, first).await.unwrap().unwrap();
    let b = ProjectRepo::find_by_id(&pool, second).await.unwrap().unwrap();
    assert_eq!(a.order_index, 5);
    assert_eq!(b.order_index, 7);
}

#[sqlx::test(migrations = "./migrations")]
async fn element_reorder_can_move_columns(pool: PgPool) {
    let project_id = create_project(&pool, "Move Columns", "works").await;
    let section = SectionRepo::create(
        &pool,
        &CreateSection {
            project_id,
            title: None,
            column_count: Some(2),
        },
    )
    .await
    .unwrap();

    let element = ElementRepo::create(&pool, section.id, &new_text_element(0), None, None)
        .await
        .unwrap();

    let outcome = ElementRepo::reorder(
        &pool,
        section.id,
        &[ElementOrderEntry {
            id: element.id,
            order_index: 0,
            column_index: Some(1),
        }],
    )
    .await;
    assert_eq!(outcome.updated, 1);

    let moved = ElementRepo::find_by_id(&pool, element.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(moved.column_index, 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn section_reorder_is_scoped_to_its_project(pool: PgPool) {
    let own = create_project(&pool, "Own Project", "works").await;
    let other = create_project(&pool, "Other Project", "works").await;

    let own_section = SectionRepo::create(
        &pool,
        &CreateSection {
            project_id: own,
            title: None,
            column_count: None,
        },
    )
    .await
    .unwrap();
    let foreign_section = SectionRepo::create(
        &pool,
        &CreateSection {
            project_id: other,
            title: None,
            column_count: None,
        },
    )
    .await
    .unwrap();

    // A section belonging to a different project must not be moved.
    let outcome = SectionRepo::reorder(
        &pool,
        own,
        &[
            OrderEntry {
                id: own_section.id,
                order_index: 3,
            },
            OrderEntry {
                id: foreign_section.id,
                order_index: 4,
            },
        ],
    )
    .await;

    assert_eq!(outcome.updated, 1);
    assert_eq!(outcome.failed, vec![foreign_section.id]);

    let untouched = SectionRepo::find_by_id(&pool, foreign_section.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(untouched.order_index, 0);
}
