//! Core of the vitrine storefront backend.
//!
//! Pure catalog types, validation and search rules, seed-source parsing and
//! the repository contracts implemented by the storage backends. Nothing in
//! this crate performs I/O.

pub mod catalog;
pub mod serde;
pub mod storage;
