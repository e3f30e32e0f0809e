use async_trait::async_trait;

use crate::catalog::{
    Category, CategoryRecord, NewCategory, NewProduct, Product, ProductRecord, SearchQuery,
};

use super::{ImportOutcome, Result};

/// Repository for category operations.
///
/// Apart from table creation, operations never surface storage failures:
/// implementations log the failure and return the neutral value documented
/// on each method.
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Creates the category table if it does not exist.
    async fn create_category_table(&self) -> Result<()>;

    /// Inserts a new category and returns it with its assigned ID.
    ///
    /// Returns `None` on storage failure.
    async fn create_category(&self, category: &NewCategory) -> Option<Category>;

    /// Returns whether any category, active or not, has this exact name.
    ///
    /// Returns `false` on storage failure, which reads as "name available".
    async fn category_exists_by_name(&self, name: &str) -> bool;

    /// Lists all categories, including inactive ones, ordered by name.
    ///
    /// Returns an empty list on storage failure.
    async fn list_categories(&self) -> Vec<Category>;

    /// Lists active categories ordered by name.
    ///
    /// Returns an empty list on storage failure.
    async fn list_active_categories(&self) -> Vec<Category>;

    /// Gets a category by its ID, active or not.
    async fn get_category(&self, id: i64) -> Option<Category>;

    /// Replaces the name and active flag of an existing category.
    ///
    /// Returns whether a row was changed.
    async fn update_category(&self, category: &Category) -> bool;

    /// Marks a category inactive. Returns whether a row was changed.
    async fn soft_delete_category(&self, id: i64) -> bool;

    /// Marks a category active again. Returns whether a row was changed.
    async fn reactivate_category(&self, id: i64) -> bool;

    /// Inserts the records whose names are not stored yet.
    ///
    /// Existing names are read once for the whole batch. Returns the number
    /// of categories inserted.
    async fn import_categories(&self, records: &[CategoryRecord]) -> usize;
}

/// Repository for product operations.
///
/// Listing and search operations return `None` on storage failure so callers
/// can tell a failure apart from an empty catalog.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Creates the product table if it does not exist.
    async fn create_product_table(&self) -> Result<()>;

    /// Inserts a new product and returns it with its assigned ID.
    async fn create_product(&self, product: &NewProduct) -> Option<Product>;

    /// Lists listed products (active, in an active category) ordered by name.
    async fn list_products(&self) -> Option<Vec<Product>>;

    /// Lists listed products of one category ordered by name.
    async fn list_products_by_category(&self, category_id: i64) -> Option<Vec<Product>>;

    /// Gets a product by its ID, whatever the state of the product or its category.
    async fn get_product(&self, id: i64) -> Option<Product>;

    /// Replaces name, price, description, stock and category of a product.
    ///
    /// Returns whether a row was changed.
    async fn update_product(&self, product: &Product) -> bool;

    /// Removes a product row. Returns whether a row was removed.
    async fn delete_product_permanently(&self, id: i64) -> bool;

    /// Marks a product inactive. Returns whether a row was changed.
    async fn soft_delete_product(&self, id: i64) -> bool;

    /// Counts every product row.
    async fn count_products(&self) -> Option<u64>;

    /// Searches active products by name or description.
    async fn search_products(&self, query: &SearchQuery) -> Option<Vec<Product>>;

    /// Counts the products matched by a search, ignoring pagination.
    async fn count_search_results(&self, term: &str, category_id: Option<i64>) -> Option<u64>;

    /// Seeds the catalog when it holds no products at all.
    async fn import_products(&self, records: &[ProductRecord]) -> ImportOutcome;
}
