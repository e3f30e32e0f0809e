//! SQLite repository implementation.
//!
//! Implements the repository traits from `vitrine_core::storage` using SQLite.
//! The trait implementations live in `category` and `product`; this module
//! holds the shared connection plumbing.

use std::path::Path;
use std::sync::Arc;

use vitrine_core::storage::Result;

use super::connection::{ConnectionProvider, FileConnectionProvider, SharedConnectionProvider};
use super::error::map_tokio_rusqlite_error;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
pub(super) fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-based repository implementation.
///
/// Provides async access to SQLite storage for categories and products.
/// Every operation acquires its own scoped connection from the provider.
#[derive(Clone)]
pub struct SqliteRepository {
    provider: Arc<dyn ConnectionProvider>,
}

impl SqliteRepository {
    /// Creates a repository backed by a database file.
    ///
    /// The database file will be created on first use if it doesn't exist.
    /// Tables are not created here; call the `create_*_table` operations.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self::with_provider(Arc::new(FileConnectionProvider::new(path)))
    }

    /// Creates a repository over a private in-memory database.
    ///
    /// Useful for testing - data is lost when the repository is dropped.
    pub async fn new_in_memory() -> Result<Self> {
        let provider = SharedConnectionProvider::in_memory().await?;
        Ok(Self::with_provider(Arc::new(provider)))
    }

    /// Creates a repository over any connection provider.
    pub fn with_provider(provider: Arc<dyn ConnectionProvider>) -> Self {
        Self { provider }
    }

    /// Runs `function` on a scoped connection.
    ///
    /// The connection is released when this returns, whatever the outcome.
    pub(super) async fn call<F, R>(
        &self,
        entity_type: &'static str,
        function: F,
    ) -> Result<R>
    where
        F: FnOnce(&mut rusqlite::Connection) -> std::result::Result<R, tokio_rusqlite::Error>
            + Send
            + 'static,
        R: Send + 'static,
    {
        let conn = self.provider.acquire().await?;
        conn.call(function)
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, entity_type))
    }
}

/// Logs a failed repository operation and returns the neutral fallback.
///
/// Every public repository operation ends here: storage errors stop at the
/// repository boundary.
pub(super) fn recover<T>(result: Result<T>, operation: &'static str, fallback: T) -> T {
    match result {
        Ok(value) => value,
        Err(error) => {
            tracing::error!(operation, error = %error, "Repository operation failed");
            fallback
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_core::storage::RepositoryError;

    #[tokio::test]
    async fn test_call_maps_sql_errors() {
        let repo = SqliteRepository::new_in_memory().await.unwrap();

        let result: Result<()> = repo
            .call("Product", |conn| {
                conn.execute_batch("SELECT * FROM no_such_table")
                    .map_err(wrap_err)?;
                Ok(())
            })
            .await;

        assert!(matches!(result, Err(RepositoryError::QueryFailed(_))));
    }

    #[test]
    fn test_recover_returns_value_on_success() {
        assert_eq!(recover(Ok(3), "count", 0), 3);
    }

    #[test]
    fn test_recover_returns_fallback_on_error() {
        let failed: Result<Option<u64>> = Err(RepositoryError::QueryFailed("boom".to_string()));
        assert_eq!(recover(failed, "count", None), None);
    }

    #[tokio::test]
    async fn test_unopenable_file_fails_per_call() {
        let dir = tempfile::tempdir().unwrap();
        let repo = SqliteRepository::new(dir.path().join("missing").join("vitrine.db"));

        let result: Result<()> = repo.call("Category", |_| Ok(())).await;

        assert!(matches!(result, Err(RepositoryError::ConnectionFailed(_))));
    }
}
