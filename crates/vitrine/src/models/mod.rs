mod category;
mod product;

pub use category::{CreateCategory, UpdateCategory};
pub use product::{CreateProduct, ListProductsQuery, SearchParams, UpdateProduct};
