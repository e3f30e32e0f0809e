//! Category admin handlers.
//!
//! Repositories return sentinels (`None`, `false`, empty lists) instead of
//! errors; these handlers turn them into problem responses.

use axum::{
    extract::{rejection::FormRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Form, Json,
};

use vitrine_core::catalog::Category;

use crate::{
    handlers::{extract::IdPath, Problem},
    models::{CreateCategory, UpdateCategory},
    state::AppState,
};

const ENTITY: &str = "Category";

/// List all categories, including inactive ones (GET /api/categories).
pub async fn list_categories(State(state): State<AppState>) -> Json<Vec<Category>> {
    Json(state.category_repo.list_categories().await)
}

/// List active categories (GET /api/categories/active).
pub async fn list_active_categories(State(state): State<AppState>) -> Json<Vec<Category>> {
    Json(state.category_repo.list_active_categories().await)
}

/// Get a single category by ID (GET /api/categories/{id}).
pub async fn get_category(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<Json<Category>, Problem> {
    find_category(&state, id).await.map(Json)
}

/// Create a new category (POST /api/categories).
pub async fn create_category(
    State(state): State<AppState>,
    form: Result<Form<CreateCategory>, FormRejection>,
) -> Result<impl IntoResponse, Problem> {
    let Form(payload) = form?;
    let category = payload.into_new_category().map_err(|e| {
        Problem::bad_request("str", e.to_string(), "invalid_value", &["body", "name"])
    })?;

    if state.category_repo.category_exists_by_name(&category.name).await {
        return Err(name_taken(&category.name));
    }

    let created = state
        .category_repo
        .create_category(&category)
        .await
        .ok_or_else(|| {
            Problem::storage_failure("The category could not be created.", "creation_failed")
        })?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// Update a category by ID (PUT /api/categories/{id}).
pub async fn update_category(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    form: Result<Form<UpdateCategory>, FormRejection>,
) -> Result<StatusCode, Problem> {
    let Form(payload) = form?;
    let current = find_category(&state, id).await?;

    let category = payload.into_category(id).map_err(|e| {
        Problem::bad_request("str", e.to_string(), "invalid_value", &["body", "name"])
    })?;

    if category.name != current.name
        && state.category_repo.category_exists_by_name(&category.name).await
    {
        return Err(name_taken(&category.name));
    }

    if !state.category_repo.update_category(&category).await {
        return Err(Problem::storage_failure(
            "The category could not be updated.",
            "update_failed",
        ));
    }

    tracing::info!(category_id = id, "Updated category");
    Ok(StatusCode::NO_CONTENT)
}

/// Soft-delete a category by ID (DELETE /api/categories/{id}).
pub async fn delete_category(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<StatusCode, Problem> {
    let category = find_category(&state, id).await?;

    if !category.active {
        return Err(invalid_transition(id, "already inactive"));
    }

    if !state.category_repo.soft_delete_category(id).await {
        return Err(Problem::storage_failure(
            "The category could not be deactivated.",
            "deletion_failed",
        ));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Reactivate a soft-deleted category (POST /api/categories/{id}/reactivate).
pub async fn reactivate_category(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<StatusCode, Problem> {
    let category = find_category(&state, id).await?;

    if category.active {
        return Err(invalid_transition(id, "already active"));
    }

    if !state.category_repo.reactivate_category(id).await {
        return Err(Problem::storage_failure(
            "The category could not be reactivated.",
            "reactivation_failed",
        ));
    }

    Ok(StatusCode::NO_CONTENT)
}

async fn find_category(state: &AppState, id: i64) -> Result<Category, Problem> {
    state
        .category_repo
        .get_category(id)
        .await
        .ok_or_else(|| Problem::not_found(ENTITY, id, &["path", "id"]))
}

fn name_taken(name: &str) -> Problem {
    Problem::bad_request(
        "str",
        format!("A category named {name} already exists."),
        "category_exists",
        &["body", "name"],
    )
}

fn invalid_transition(id: i64, reason: &str) -> Problem {
    Problem::bad_request(
        "int",
        format!("{ENTITY} with id {id} is {reason}."),
        "state_change_invalid",
        &["path", "id"],
    )
}
