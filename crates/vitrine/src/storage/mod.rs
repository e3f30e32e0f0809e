//! Storage backends for the catalog repositories.

pub mod sqlite;

pub use sqlite::SqliteRepository;
