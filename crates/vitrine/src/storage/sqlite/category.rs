//! `CategoryRepository` implementation for SQLite.

use std::collections::HashSet;

use async_trait::async_trait;

use vitrine_core::catalog::{Category, CategoryRecord, NewCategory};
use vitrine_core::storage::{CategoryRepository, Result};

use super::conversions::row_to_category;
use super::repository::{recover, wrap_err, SqliteRepository};
use super::schema;

const ENTITY: &str = "Category";

impl SqliteRepository {
    async fn try_create_category(&self, category: &NewCategory) -> Result<Category> {
        let name = category.name.clone();

        let id = self
            .call(ENTITY, move |conn| {
                conn.execute(schema::INSERT_CATEGORY, [&name])
                    .map_err(wrap_err)?;
                Ok(conn.last_insert_rowid())
            })
            .await?;

        Ok(category.clone().into_category(id))
    }

    async fn try_category_exists_by_name(&self, name: &str) -> Result<bool> {
        let name = name.to_string();

        self.call(ENTITY, move |conn| {
            let mut stmt = conn
                .prepare(schema::CATEGORY_EXISTS_BY_NAME)
                .map_err(wrap_err)?;
            stmt.exists([&name]).map_err(wrap_err)
        })
        .await
    }

    async fn try_list_categories(&self, sql: &'static str) -> Result<Vec<Category>> {
        self.call(ENTITY, move |conn| {
            let mut stmt = conn.prepare(sql).map_err(wrap_err)?;
            let rows = stmt.query_map([], row_to_category).map_err(wrap_err)?;

            let mut categories = Vec::new();
            for row_result in rows {
                categories.push(row_result.map_err(wrap_err)?);
            }
            Ok(categories)
        })
        .await
    }

    async fn try_get_category(&self, id: i64) -> Result<Option<Category>> {
        self.call(ENTITY, move |conn| {
            let mut stmt = conn
                .prepare(schema::SELECT_CATEGORY_BY_ID)
                .map_err(wrap_err)?;
            match stmt.query_row([id], row_to_category) {
                Ok(category) => Ok(Some(category)),
                Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                Err(e) => Err(wrap_err(e)),
            }
        })
        .await
    }

    async fn try_update_category(&self, category: &Category) -> Result<bool> {
        let id = category.id;
        let name = category.name.clone();
        let active = category.active;

        self.call(ENTITY, move |conn| {
            let rows = conn
                .execute(schema::UPDATE_CATEGORY, rusqlite::params![id, name, active])
                .map_err(wrap_err)?;
            Ok(rows > 0)
        })
        .await
    }

    async fn try_set_category_flag(&self, id: i64, sql: &'static str) -> Result<bool> {
        self.call(ENTITY, move |conn| {
            let rows = conn.execute(sql, [id]).map_err(wrap_err)?;
            Ok(rows > 0)
        })
        .await
    }

    async fn try_category_names(&self) -> Result<HashSet<String>> {
        self.call(ENTITY, |conn| {
            let mut stmt = conn
                .prepare(schema::SELECT_CATEGORY_NAMES)
                .map_err(wrap_err)?;
            let rows = stmt
                .query_map([], |row| row.get::<_, String>("nome"))
                .map_err(wrap_err)?;

            let mut names = HashSet::new();
            for row_result in rows {
                names.insert(row_result.map_err(wrap_err)?);
            }
            Ok(names)
        })
        .await
    }
}

#[async_trait]
impl CategoryRepository for SqliteRepository {
    async fn create_category_table(&self) -> Result<()> {
        self.call(ENTITY, |conn| {
            conn.execute_batch(schema::CREATE_CATEGORY_TABLE)
                .map_err(wrap_err)?;
            Ok(())
        })
        .await
    }

    async fn create_category(&self, category: &NewCategory) -> Option<Category> {
        let created = recover(
            self.try_create_category(category).await.map(Some),
            "create_category",
            None,
        );

        if let Some(category) = &created {
            tracing::info!(category_id = category.id, name = %category.name, "Created category");
        }
        created
    }

    async fn category_exists_by_name(&self, name: &str) -> bool {
        recover(
            self.try_category_exists_by_name(name).await,
            "category_exists_by_name",
            false,
        )
    }

    async fn list_categories(&self) -> Vec<Category> {
        recover(
            self.try_list_categories(schema::SELECT_ALL_CATEGORIES).await,
            "list_categories",
            Vec::new(),
        )
    }

    async fn list_active_categories(&self) -> Vec<Category> {
        recover(
            self.try_list_categories(schema::SELECT_ACTIVE_CATEGORIES)
                .await,
            "list_active_categories",
            Vec::new(),
        )
    }

    async fn get_category(&self, id: i64) -> Option<Category> {
        recover(self.try_get_category(id).await, "get_category", None)
    }

    async fn update_category(&self, category: &Category) -> bool {
        recover(
            self.try_update_category(category).await,
            "update_category",
            false,
        )
    }

    async fn soft_delete_category(&self, id: i64) -> bool {
        let changed = recover(
            self.try_set_category_flag(id, schema::DEACTIVATE_CATEGORY)
                .await,
            "soft_delete_category",
            false,
        );

        if changed {
            tracing::info!(category_id = id, "Deactivated category");
        }
        changed
    }

    async fn reactivate_category(&self, id: i64) -> bool {
        let changed = recover(
            self.try_set_category_flag(id, schema::REACTIVATE_CATEGORY)
                .await,
            "reactivate_category",
            false,
        );

        if changed {
            tracing::info!(category_id = id, "Reactivated category");
        }
        changed
    }

    async fn import_categories(&self, records: &[CategoryRecord]) -> usize {
        let Some(mut known) = recover(
            self.try_category_names().await.map(Some),
            "import_categories",
            None,
        ) else {
            return 0;
        };

        let mut inserted = 0;
        for record in records {
            if known.contains(&record.name) {
                tracing::debug!(name = %record.name, "Category already exists, skipping");
                continue;
            }

            let category = record.clone().into_new_category();
            if self.create_category(&category).await.is_some() {
                inserted += 1;
            }
            known.insert(record.name.clone());
        }

        tracing::info!(
            inserted,
            skipped = records.len() - inserted,
            "Imported categories"
        );
        inserted
    }
}
