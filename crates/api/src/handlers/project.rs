//! Handlers for the `/projects` resource.
//!
//! Create and update accept multipart forms because the main image travels
//! with the metadata fields, mirroring the admin editor's submission.

use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use atelier_core::content::ProjectCategory;
use atelier_core::error::CoreError;
use atelier_core::slug::slugify;
use atelier_core::types::DbId;
use atelier_db::models::project::{CreateProject, Project, ProjectDetail, UpdateProject};
use atelier_db::models::reorder::OrderEntry;
use atelier_db::models::section::SectionWithElements;
use atelier_db::repositories::{ElementRepo, ProjectRepo, SectionRepo};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for project listing.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub category: Option<String>,
}

/// Body of `POST /projects/reorder`.
#[derive(Debug, Deserialize)]
pub struct ReorderProjectsRequest {
    pub project_orders: Vec<OrderEntry>,
}

/// An uploaded image file: original filename, mime type, bytes.
type UploadedFile = (String, String, Vec<u8>);

/// Fields collected from the project multipart form. All optional at the
/// parsing stage; create/update decide what is required.
#[derive(Default)]
struct ProjectForm {
    title: Option<String>,
    subtitle: Option<String>,
    year: Option<i32>,
    category: Option<String>,
    coming_soon: Option<bool>,
    main_image: Option<UploadedFile>,
}

impl ProjectForm {
    /// Drain a multipart stream into the known fields. Unknown parts are
    /// ignored so older admin clients can keep sending extras.
    async fn parse(multipart: &mut Multipart) -> AppResult<Self> {
        let mut form = Self::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?
        {
            let name = field.name().unwrap_or("").to_string();
            match name.as_str() {
                "title" => form.title = Some(text(field).await?),
                "subtitle" => form.subtitle = Some(text(field).await?),
                "year" => {
                    let raw = text(field).await?;
                    let year = raw.trim().parse::<i32>().map_err(|_| {
                        AppError::Core(CoreError::Validation(format!(
                            "Invalid year '{raw}'"
                        )))
                    })?;
                    form.year = Some(year);
                }
                "category" => form.category = Some(text(field).await?),
                "coming_soon" => form.coming_soon = Some(text(field).await? == "true"),
                "main_image" => {
                    let filename = field.file_name().unwrap_or("upload").to_string();
                    let mime = field
                        .content_type()
                        .unwrap_or("application/octet-stream")
                        .to_string();
                    let data = field
                        .bytes()
                        .await
                        .map_err(|e| AppError::BadRequest(e.to_string()))?;
                    form.main_image = Some((filename, mime, data.to_vec()));
                }
                _ => {}
            }
        }

        Ok(form)
    }
}

/// Read a multipart field as text.
async fn text(field: axum::extract::multipart::Field<'_>) -> AppResult<String> {
    field
        .text()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))
}

/// Load a project's sections and elements, each sorted by position.
async fn load_detail(pool: &sqlx::PgPool, project: Project) -> AppResult<ProjectDetail> {
    let sections = SectionRepo::list_by_project(pool, project.id).await?;
    let mut nested = Vec::with_capacity(sections.len());
    for section in sections {
        let elements = ElementRepo::list_by_section(pool, section.id).await?;
        nested.push(SectionWithElements { section, elements });
    }
    Ok(ProjectDetail {
        project,
        sections: nested,
    })
}

/// GET /api/v1/projects
///
/// List projects ordered by order_index then newest-first, optionally
/// filtered by category.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<DataResponse<Vec<Project>>>> {
    if let Some(category) = &params.category {
        ProjectCategory::from_name(category)?;
    }
    let projects = ProjectRepo::list(&state.pool, params.category.as_deref()).await?;
    Ok(Json(DataResponse { data: projects }))
}

/// POST /api/v1/projects
///
/// Create a project from a multipart form. The slug is derived from the
/// title once, here; the order index is assigned within the category.
pub async fn create(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<impl IntoResponse> {
    let form = ProjectForm::parse(&mut multipart).await?;

    let title = form
        .title
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| AppError::Core(CoreError::Validation("Title is required".into())))?;
    let year = form
        .year
        .ok_or_else(|| AppError::Core(CoreError::Validation("Year is required".into())))?;
    let category = form
        .category
        .ok_or_else(|| AppError::Core(CoreError::Validation("Category is required".into())))?;
    ProjectCategory::from_name(&category)?;

    let slug = slugify(&title);
    if slug.is_empty() {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Title '{title}' does not yield a usable slug"
        ))));
    }

    let uploaded = match form.main_image {
        Some((filename, mime, bytes)) => {
            Some(state.store.upload("projects", &filename, &mime, bytes).await?)
        }
        None => None,
    };

    let input = CreateProject {
        title,
        subtitle: form.subtitle,
        year,
        category,
        coming_soon: form.coming_soon.unwrap_or(false),
    };
    let project = ProjectRepo::create(
        &state.pool,
        &input,
        &slug,
        uploaded.as_ref().map(|o| o.url.as_str()),
        uploaded.as_ref().map(|o| o.key.as_str()),
    )
    .await?;

    tracing::info!(project_id = project.id, slug = %project.slug, "Project created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: project })))
}

/// GET /api/v1/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<ProjectDetail>>> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    let detail = load_detail(&state.pool, project).await?;
    Ok(Json(DataResponse { data: detail }))
}

/// GET /api/v1/projects/slug/{slug}
pub async fn get_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<DataResponse<ProjectDetail>>> {
    let project = ProjectRepo::find_by_slug(&state.pool, &slug)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::SlugNotFound {
                entity: "Project",
                slug: slug.clone(),
            })
        })?;
    let detail = load_detail(&state.pool, project).await?;
    Ok(Json(DataResponse { data: detail }))
}

/// PUT /api/v1/projects/{id}
///
/// Update a project from a multipart form. A new main image replaces the
/// old one; the previous object is removed from storage best-effort. The
/// slug never changes.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    mut multipart: Multipart,
) -> AppResult<Json<DataResponse<Project>>> {
    let existing = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;

    let form = ProjectForm::parse(&mut multipart).await?;
    if let Some(category) = &form.category {
        ProjectCategory::from_name(category)?;
    }

    let uploaded = match form.main_image {
        Some((filename, mime, bytes)) => {
            let object = state.store.upload("projects", &filename, &mime, bytes).await?;
            // Best-effort cleanup of the replaced image; the new row no
            // longer references it either way.
            if let Some(old_key) = &existing.main_image_key {
                if let Err(err) = state.store.delete(old_key).await {
                    tracing::warn!(key = %old_key, error = %err, "Failed to delete replaced image");
                }
            }
            Some(object)
        }
        None => None,
    };

    let input = UpdateProject {
        title: form.title,
        subtitle: form.subtitle,
        year: form.year,
        category: form.category,
        coming_soon: form.coming_soon,
        main_image_url: uploaded.as_ref().map(|o| o.url.clone()),
        main_image_key: uploaded.as_ref().map(|o| o.key.clone()),
    };
    let project = ProjectRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;

    Ok(Json(DataResponse { data: project }))
}

/// DELETE /api/v1/projects/{id}
///
/// Sections and elements cascade with the row; the main image object is
/// removed from storage best-effort afterwards.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;

    ProjectRepo::delete(&state.pool, id).await?;

    if let Some(key) = &project.main_image_key {
        if let Err(err) = state.store.delete(key).await {
            tracing::warn!(key = %key, error = %err, "Failed to delete project image");
        }
    }

    tracing::info!(project_id = id, "Project deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/projects/reorder
///
/// Apply a client-supplied ordering. Entries are persisted independently
/// and a failure does not stop later entries; the outcome lists the ids
/// that did not apply.
pub async fn reorder(
    State(state): State<AppState>,
    Json(request): Json<ReorderProjectsRequest>,
) -> AppResult<impl IntoResponse> {
    let outcome = ProjectRepo::reorder(&state.pool, &request.project_orders).await;
    Ok(Json(DataResponse { data: outcome }))
}
