//! Startup catalog seeding.
//!
//! Categories are imported on every start (only missing names are inserted).
//! Products are imported once, into an empty catalog, and the staged product
//! images are then copied into the served image directory. Every failure here
//! is logged and startup continues.

use std::path::{Path, PathBuf};

use thiserror::Error;

use vitrine_core::catalog::{parse_category_records, parse_product_records, SeedError};
use vitrine_core::storage::{CategoryRepository, ImportOutcome, ProductRepository};

use crate::config::Config;
use crate::state::AppState;

/// Errors that can occur when loading a seed file.
#[derive(Debug, Error)]
pub enum SeedFileError {
    #[error("Failed to read seed file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid seed file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: SeedError,
    },
}

/// Runs the whole startup seed against the configured sources.
pub async fn seed_catalog(state: &AppState, config: &Config) {
    seed_categories(state.category_repo.as_ref(), &config.category_seed_path).await;

    let outcome = seed_products(state.product_repo.as_ref(), &config.product_seed_path).await;

    if outcome.is_imported() {
        transfer_images(&config.image_incoming_dir, &config.image_dir).await;
    }
}

/// Imports the category seed file. Returns the number of categories inserted.
pub async fn seed_categories(repo: &dyn CategoryRepository, path: &Path) -> usize {
    let source = match read_seed_file(path).await {
        Ok(source) => source,
        Err(error) => {
            tracing::error!(operation = "seed_categories", error = %error, "Category seed aborted");
            return 0;
        }
    };

    match parse_category_records(&source) {
        Ok(records) => repo.import_categories(&records).await,
        Err(source) => {
            let error = SeedFileError::Parse {
                path: path.to_path_buf(),
                source,
            };
            tracing::error!(operation = "seed_categories", error = %error, "Category seed aborted");
            0
        }
    }
}

/// Imports the product seed file when the catalog holds no products.
///
/// The file is not read at all once the catalog is seeded.
pub async fn seed_products(repo: &dyn ProductRepository, path: &Path) -> ImportOutcome {
    match repo.count_products().await {
        Some(0) => {}
        Some(count) => {
            tracing::debug!(count, "Catalog already seeded, skipping product seed");
            return ImportOutcome::Skipped;
        }
        None => return ImportOutcome::Failed,
    }

    let source = match read_seed_file(path).await {
        Ok(source) => source,
        Err(error) => {
            tracing::error!(operation = "seed_products", error = %error, "Product seed aborted");
            return ImportOutcome::Failed;
        }
    };

    match parse_product_records(&source) {
        Ok(records) => repo.import_products(&records).await,
        Err(source) => {
            let error = SeedFileError::Parse {
                path: path.to_path_buf(),
                source,
            };
            tracing::error!(operation = "seed_products", error = %error, "Product seed aborted");
            ImportOutcome::Failed
        }
    }
}

/// Copies every regular file from `from` into `to`, keeping file names.
///
/// Both directories must already exist; a missing one is reported and the
/// transfer is skipped. Returns the number of files copied.
pub async fn transfer_images(from: &Path, to: &Path) -> usize {
    for dir in [from, to] {
        if !is_dir(dir).await {
            tracing::warn!(dir = %dir.display(), "Image directory missing, skipping transfer");
            return 0;
        }
    }

    match copy_files(from, to).await {
        Ok(copied) => {
            tracing::info!(
                copied,
                from = %from.display(),
                to = %to.display(),
                "Transferred product images"
            );
            copied
        }
        Err(error) => {
            tracing::error!(operation = "transfer_images", error = %error, "Image transfer failed");
            0
        }
    }
}

async fn read_seed_file(path: &Path) -> Result<String, SeedFileError> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|source| SeedFileError::Read {
            path: path.to_path_buf(),
            source,
        })
}

async fn is_dir(path: &Path) -> bool {
    tokio::fs::metadata(path)
        .await
        .map(|metadata| metadata.is_dir())
        .unwrap_or(false)
}

async fn copy_files(from: &Path, to: &Path) -> std::io::Result<usize> {
    let mut entries = tokio::fs::read_dir(from).await?;
    let mut copied = 0;

    while let Some(entry) = entries.next_entry().await? {
        if !entry.file_type().await?.is_file() {
            continue;
        }
        tokio::fs::copy(entry.path(), to.join(entry.file_name())).await?;
        copied += 1;
    }

    Ok(copied)
}
