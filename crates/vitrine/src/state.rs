//! Application state with repository-based storage.
//!
//! This module defines the shared application state that is passed to all
//! request handlers. Handlers only see the repository traits, so the SQLite
//! backend can be swapped for a test database without touching them.

use std::sync::Arc;

use vitrine_core::storage::{CategoryRepository, ProductRepository};

use crate::config::Config;
use crate::storage::SqliteRepository;

/// Shared application state.
///
/// This is cloned for each request handler and contains the repository
/// trait objects for database access.
#[derive(Clone)]
pub struct AppState {
    /// Category repository.
    pub category_repo: Arc<dyn CategoryRepository>,
    /// Product repository.
    pub product_repo: Arc<dyn ProductRepository>,
    /// Search page size used when a request does not give one.
    pub default_page_size: u32,
}

impl AppState {
    /// Creates state over one SQLite repository serving both traits.
    pub fn new(repo: SqliteRepository, config: &Config) -> Self {
        let repo = Arc::new(repo);

        Self {
            category_repo: repo.clone(),
            product_repo: repo,
            default_page_size: config.default_page_size,
        }
    }

    /// Creates state over a fresh in-memory database with both tables created.
    #[cfg(test)]
    pub async fn in_memory() -> Self {
        let repo = Arc::new(
            SqliteRepository::new_in_memory()
                .await
                .expect("Failed to open in-memory database"),
        );
        repo.create_category_table()
            .await
            .expect("Failed to create category table");
        repo.create_product_table()
            .await
            .expect("Failed to create product table");

        Self {
            category_repo: repo.clone(),
            product_repo: repo,
            default_page_size: vitrine_core::catalog::DEFAULT_PAGE_SIZE,
        }
    }
}
