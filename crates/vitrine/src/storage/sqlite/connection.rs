//! Scoped SQLite connections.
//!
//! Repository operations acquire a connection from a [`ConnectionProvider`]
//! for the duration of one call. The handle is dropped on every exit path,
//! which closes file-backed connections.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio_rusqlite::Connection;

use vitrine_core::storage::{RepositoryError, Result};

/// Hands out a connection for the duration of one repository operation.
#[async_trait]
pub trait ConnectionProvider: Send + Sync {
    /// Acquires a connection to the relational store.
    async fn acquire(&self) -> Result<Connection>;
}

/// Opens a fresh connection to a database file on every call.
#[derive(Debug, Clone)]
pub struct FileConnectionProvider {
    path: PathBuf,
}

impl FileConnectionProvider {
    /// The database file is created on first use if it doesn't exist.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl ConnectionProvider for FileConnectionProvider {
    async fn acquire(&self) -> Result<Connection> {
        Connection::open(&self.path).await.map_err(|e| {
            RepositoryError::ConnectionFailed(format!("{}: {e}", self.path.display()))
        })
    }
}

/// Shares one open connection handle between calls.
///
/// An in-memory database lives only as long as its connection, so tests and
/// ephemeral runs keep a single handle alive and clone it per call.
#[derive(Clone)]
pub struct SharedConnectionProvider {
    conn: Connection,
}

impl SharedConnectionProvider {
    /// Opens a private in-memory database.
    pub async fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Ok(Self { conn })
    }
}

#[async_trait]
impl ConnectionProvider for SharedConnectionProvider {
    async fn acquire(&self) -> Result<Connection> {
        Ok(self.conn.clone())
    }
}
