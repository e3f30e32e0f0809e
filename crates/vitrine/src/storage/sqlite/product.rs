//! `ProductRepository` implementation for SQLite.

use async_trait::async_trait;

use vitrine_core::catalog::{like_pattern, NewProduct, Product, ProductRecord, SearchQuery};
use vitrine_core::storage::{ImportOutcome, ProductRepository, Result};

use super::conversions::{row_to_count, row_to_product, to_sql_integer};
use super::repository::{recover, wrap_err, SqliteRepository};
use super::schema;

const ENTITY: &str = "Product";

impl SqliteRepository {
    async fn try_create_product(&self, product: &NewProduct) -> Result<Product> {
        let new_product = product.clone();

        let id = self
            .call(ENTITY, move |conn| {
                conn.execute(
                    schema::INSERT_PRODUCT,
                    rusqlite::params![
                        new_product.name,
                        new_product.price,
                        new_product.description,
                        new_product.stock,
                        new_product.category_id,
                    ],
                )
                .map_err(wrap_err)?;
                Ok(conn.last_insert_rowid())
            })
            .await?;

        Ok(product.clone().into_product(id))
    }

    async fn try_list_products(
        &self,
        sql: &'static str,
        category_id: Option<i64>,
    ) -> Result<Vec<Product>> {
        self.call(ENTITY, move |conn| {
            let mut stmt = conn.prepare(sql).map_err(wrap_err)?;
            let rows = match category_id {
                Some(category_id) => stmt.query_map([category_id], row_to_product),
                None => stmt.query_map([], row_to_product),
            }
            .map_err(wrap_err)?;

            let mut products = Vec::new();
            for row_result in rows {
                products.push(row_result.map_err(wrap_err)?);
            }
            Ok(products)
        })
        .await
    }

    async fn try_get_product(&self, id: i64) -> Result<Option<Product>> {
        self.call(ENTITY, move |conn| {
            let mut stmt = conn
                .prepare(schema::SELECT_PRODUCT_BY_ID)
                .map_err(wrap_err)?;
            match stmt.query_row([id], row_to_product) {
                Ok(product) => Ok(Some(product)),
                Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                Err(e) => Err(wrap_err(e)),
            }
        })
        .await
    }

    async fn try_update_product(&self, product: &Product) -> Result<bool> {
        let id = product.id;
        let fields = product.to_new_product();

        self.call(ENTITY, move |conn| {
            let rows = conn
                .execute(
                    schema::UPDATE_PRODUCT,
                    rusqlite::params![
                        id,
                        fields.name,
                        fields.price,
                        fields.description,
                        fields.stock,
                        fields.category_id,
                    ],
                )
                .map_err(wrap_err)?;
            Ok(rows > 0)
        })
        .await
    }

    async fn try_execute_by_id(&self, id: i64, sql: &'static str) -> Result<bool> {
        self.call(ENTITY, move |conn| {
            let rows = conn.execute(sql, [id]).map_err(wrap_err)?;
            Ok(rows > 0)
        })
        .await
    }

    async fn try_count_products(&self) -> Result<u64> {
        self.call(ENTITY, |conn| {
            conn.query_row(schema::COUNT_PRODUCTS, [], row_to_count)
                .map_err(wrap_err)
        })
        .await
    }

    async fn try_search_products(&self, query: &SearchQuery) -> Result<Vec<Product>> {
        let sql = schema::search_products_sql(query.order);
        let pattern = query.like_pattern();
        let category_id = query.category_id;
        let limit = to_sql_integer(query.page.limit())?;
        let offset = to_sql_integer(query.page.offset())?;

        self.call(ENTITY, move |conn| {
            let mut stmt = conn.prepare(&sql).map_err(wrap_err)?;
            let rows = stmt
                .query_map(
                    rusqlite::params![pattern, category_id, limit, offset],
                    row_to_product,
                )
                .map_err(wrap_err)?;

            let mut products = Vec::new();
            for row_result in rows {
                products.push(row_result.map_err(wrap_err)?);
            }
            Ok(products)
        })
        .await
    }

    async fn try_count_search_results(&self, term: &str, category_id: Option<i64>) -> Result<u64> {
        let pattern = like_pattern(term);

        self.call(ENTITY, move |conn| {
            conn.query_row(
                schema::COUNT_SEARCH_RESULTS,
                rusqlite::params![pattern, category_id],
                row_to_count,
            )
            .map_err(wrap_err)
        })
        .await
    }
}

#[async_trait]
impl ProductRepository for SqliteRepository {
    async fn create_product_table(&self) -> Result<()> {
        let migrated = self
            .call(ENTITY, |conn| {
                conn.execute_batch(schema::CREATE_PRODUCT_TABLE)
                    .map_err(wrap_err)?;

                let mut stmt = conn
                    .prepare(schema::SELECT_PRODUCT_COLUMN_NAMES)
                    .map_err(wrap_err)?;
                let has_active = stmt
                    .query_map([], |row| row.get::<_, String>(0))
                    .map_err(wrap_err)?
                    .collect::<rusqlite::Result<Vec<_>>>()
                    .map_err(wrap_err)?
                    .iter()
                    .any(|name| name == "ativo");
                drop(stmt);

                if !has_active {
                    conn.execute_batch(schema::ADD_PRODUCT_ACTIVE_COLUMN)
                        .map_err(wrap_err)?;
                }
                Ok(!has_active)
            })
            .await?;

        if migrated {
            tracing::info!("Added soft-delete column to existing product table");
        }
        Ok(())
    }

    async fn create_product(&self, product: &NewProduct) -> Option<Product> {
        let created = recover(
            self.try_create_product(product).await.map(Some),
            "create_product",
            None,
        );

        if let Some(product) = &created {
            tracing::info!(product_id = product.id, name = %product.name, "Created product");
        }
        created
    }

    async fn list_products(&self) -> Option<Vec<Product>> {
        recover(
            self.try_list_products(schema::SELECT_LISTED_PRODUCTS, None)
                .await
                .map(Some),
            "list_products",
            None,
        )
    }

    async fn list_products_by_category(&self, category_id: i64) -> Option<Vec<Product>> {
        recover(
            self.try_list_products(
                schema::SELECT_LISTED_PRODUCTS_BY_CATEGORY,
                Some(category_id),
            )
            .await
            .map(Some),
            "list_products_by_category",
            None,
        )
    }

    async fn get_product(&self, id: i64) -> Option<Product> {
        recover(self.try_get_product(id).await, "get_product", None)
    }

    async fn update_product(&self, product: &Product) -> bool {
        recover(
            self.try_update_product(product).await,
            "update_product",
            false,
        )
    }

    async fn delete_product_permanently(&self, id: i64) -> bool {
        let deleted = recover(
            self.try_execute_by_id(id, schema::DELETE_PRODUCT).await,
            "delete_product_permanently",
            false,
        );

        if deleted {
            tracing::info!(product_id = id, "Deleted product");
        }
        deleted
    }

    async fn soft_delete_product(&self, id: i64) -> bool {
        let changed = recover(
            self.try_execute_by_id(id, schema::DEACTIVATE_PRODUCT).await,
            "soft_delete_product",
            false,
        );

        if changed {
            tracing::info!(product_id = id, "Deactivated product");
        }
        changed
    }

    async fn count_products(&self) -> Option<u64> {
        recover(
            self.try_count_products().await.map(Some),
            "count_products",
            None,
        )
    }

    async fn search_products(&self, query: &SearchQuery) -> Option<Vec<Product>> {
        recover(
            self.try_search_products(query).await.map(Some),
            "search_products",
            None,
        )
    }

    async fn count_search_results(&self, term: &str, category_id: Option<i64>) -> Option<u64> {
        recover(
            self.try_count_search_results(term, category_id)
                .await
                .map(Some),
            "count_search_results",
            None,
        )
    }

    async fn import_products(&self, records: &[ProductRecord]) -> ImportOutcome {
        match self.count_products().await {
            Some(0) => {}
            Some(count) => {
                tracing::debug!(count, "Catalog already seeded, skipping product import");
                return ImportOutcome::Skipped;
            }
            None => return ImportOutcome::Failed,
        }

        let mut inserted = 0;
        for record in records {
            let product = record.clone().into_new_product();
            if self.create_product(&product).await.is_some() {
                inserted += 1;
            } else {
                tracing::warn!(name = %record.name, "Skipped product that could not be stored");
            }
        }

        tracing::info!(inserted, "Imported products");
        ImportOutcome::Imported(inserted)
    }
}
