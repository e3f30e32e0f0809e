mod error;
mod operations;
mod search;
mod seed;
mod types;

pub use error::{CategoryError, ProductError, SeedError};
pub use operations::{validate_category_name, validate_product, MAX_NAME_LEN};
pub use search::{like_pattern, page_count, Page, SearchQuery, SortOrder, DEFAULT_PAGE_SIZE};
pub use seed::{parse_category_records, parse_product_records, CategoryRecord, ProductRecord};
pub use types::{Category, NewCategory, NewProduct, Product};
