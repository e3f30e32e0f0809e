//! SQLite storage backend.
//!
//! Implements `CategoryRepository` and `ProductRepository` from
//! `vitrine_core::storage` on top of `tokio-rusqlite`.

mod category;
mod connection;
mod conversions;
mod error;
mod product;
mod repository;
mod schema;

pub use repository::SqliteRepository;
