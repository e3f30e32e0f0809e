//! Product admin and search handlers.

use axum::{
    extract::{
        rejection::{FormRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Form, Json,
};
use serde::Serialize;

use vitrine_core::catalog::{page_count, Product, ProductError};

use crate::{
    handlers::{extract::IdPath, Problem},
    models::{CreateProduct, ListProductsQuery, SearchParams, UpdateProduct},
    state::AppState,
};

const ENTITY: &str = "Product";

/// One page of search results.
#[derive(Debug, Serialize)]
pub struct SearchResults {
    pub products: Vec<Product>,
    pub term: String,
    pub page: u32,
    pub page_size: u32,
    pub order: i64,
    pub category_id: Option<i64>,
    pub page_count: u64,
}

/// List storefront products (GET /api/products).
///
/// Only active products of active categories are listed.
pub async fn list_products(
    State(state): State<AppState>,
    query: Result<Query<ListProductsQuery>, QueryRejection>,
) -> Result<Json<Vec<Product>>, Problem> {
    let Query(query) = query?;
    let products = match query.category_id {
        Some(category_id) => {
            state
                .product_repo
                .list_products_by_category(category_id)
                .await
        }
        None => state.product_repo.list_products().await,
    };

    products
        .map(Json)
        .ok_or_else(|| Problem::storage_failure("The products could not be read.", "query_failed"))
}

/// Get a single product by ID (GET /api/products/{id}).
///
/// Returns soft-deleted products and products of inactive categories too.
pub async fn get_product(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<Json<Product>, Problem> {
    find_product(&state, id).await.map(Json)
}

/// Create a new product (POST /api/products).
pub async fn create_product(
    State(state): State<AppState>,
    form: Result<Form<CreateProduct>, FormRejection>,
) -> Result<impl IntoResponse, Problem> {
    let Form(payload) = form?;
    let product = payload.into_new_product().map_err(invalid_product)?;

    let created = state
        .product_repo
        .create_product(&product)
        .await
        .ok_or_else(|| {
            Problem::storage_failure("The product could not be created.", "creation_failed")
        })?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// Update a product by ID (PUT /api/products/{id}).
pub async fn update_product(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    form: Result<Form<UpdateProduct>, FormRejection>,
) -> Result<StatusCode, Problem> {
    let Form(payload) = form?;
    let current = find_product(&state, id).await?;
    let product = payload.apply_to(&current).map_err(invalid_product)?;

    if !state.product_repo.update_product(&product).await {
        return Err(Problem::storage_failure(
            "The product could not be updated.",
            "update_failed",
        ));
    }

    tracing::info!(product_id = id, "Updated product");
    Ok(StatusCode::NO_CONTENT)
}

/// Permanently delete a product by ID (DELETE /api/products/{id}).
pub async fn delete_product(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<StatusCode, Problem> {
    if state.product_repo.delete_product_permanently(id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(Problem::not_found(ENTITY, id, &["path", "id"]))
    }
}

/// Soft-delete a product by ID (POST /api/products/{id}/deactivate).
pub async fn deactivate_product(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<StatusCode, Problem> {
    if state.product_repo.soft_delete_product(id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(Problem::not_found(ENTITY, id, &["path", "id"]))
    }
}

/// Search products by name or description (GET /api/products/search).
pub async fn search_products(
    State(state): State<AppState>,
    query: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<SearchResults>, Problem> {
    let Query(params) = query?;
    let query = params.into_query(state.default_page_size);

    let products = state
        .product_repo
        .search_products(&query)
        .await
        .ok_or_else(search_failed)?;
    let total = state
        .product_repo
        .count_search_results(&query.term, query.category_id)
        .await
        .ok_or_else(search_failed)?;

    tracing::debug!(term = %query.term, total, page = query.page.number, "Searched products");

    Ok(Json(SearchResults {
        products,
        page_count: page_count(total, query.page.size),
        page: query.page.number,
        page_size: query.page.size,
        order: query.order.code(),
        category_id: query.category_id,
        term: query.term,
    }))
}

async fn find_product(state: &AppState, id: i64) -> Result<Product, Problem> {
    state
        .product_repo
        .get_product(id)
        .await
        .ok_or_else(|| Problem::not_found(ENTITY, id, &["path", "id"]))
}

fn invalid_product(error: ProductError) -> Problem {
    let field = match error {
        ProductError::EmptyName | ProductError::NameTooLong => "name",
        ProductError::EmptyDescription => "description",
        ProductError::InvalidPrice(_) => "price",
        ProductError::NegativeStock(_) => "stock",
        ProductError::MissingCategory => "category_id",
    };

    Problem::bad_request("value", error.to_string(), "invalid_value", &["body", field])
}

fn search_failed() -> Problem {
    Problem::storage_failure("The search could not be completed.", "query_failed")
}
