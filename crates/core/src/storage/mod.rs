mod error;
mod traits;
mod types;

pub use error::{RepositoryError, Result};
pub use traits::{CategoryRepository, ProductRepository};
pub use types::ImportOutcome;
