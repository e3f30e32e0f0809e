//! SQLite row conversion functions.
//!
//! Rows are read by column name, never by position, so the join queries that
//! append denormalized category columns cannot shift product fields.

use rusqlite::Row;

use vitrine_core::catalog::{Category, Product};
use vitrine_core::storage::RepositoryError;

/// Convert a SQLite row to a Category.
///
/// Expected columns: id, nome, ativo
pub fn row_to_category(row: &Row) -> rusqlite::Result<Category> {
    Ok(Category {
        id: row.get("id")?,
        name: row.get("nome")?,
        active: read_flag(row, "ativo")?,
    })
}

/// Convert a SQLite row to a Product with its joined category columns.
///
/// Expected columns: id, nome, preco, descricao, estoque, ativo, categoria_id,
/// categoria_nome, categoria_ativo
pub fn row_to_product(row: &Row) -> rusqlite::Result<Product> {
    Ok(Product {
        id: row.get("id")?,
        name: row.get("nome")?,
        price: row.get("preco")?,
        description: row.get("descricao")?,
        stock: row.get("estoque")?,
        category_id: row.get("categoria_id")?,
        category_name: row.get("categoria_nome")?,
        category_active: row.get("categoria_ativo")?,
        active: read_flag(row, "ativo")?,
    })
}

/// Reads a `COUNT(*)` result.
pub fn row_to_count(row: &Row) -> rusqlite::Result<u64> {
    let count: i64 = row.get(0)?;
    u64::try_from(count).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Integer, Box::new(e))
    })
}

/// Reads an `ativo` column. NULL never satisfies `ativo = 1`, so it reads as inactive.
fn read_flag(row: &Row, column: &str) -> rusqlite::Result<bool> {
    let flag: Option<bool> = row.get(column)?;
    Ok(flag.unwrap_or(false))
}

/// Converts a page limit or offset into a SQLite integer parameter.
pub fn to_sql_integer(value: u64) -> Result<i64, RepositoryError> {
    i64::try_from(value)
        .map_err(|_| RepositoryError::InvalidData(format!("value out of range: {value}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    fn connection() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(
            "CREATE TABLE categoria (id INTEGER PRIMARY KEY, nome TEXT NOT NULL, ativo INTEGER DEFAULT 1);
             INSERT INTO categoria (id, nome) VALUES (1, 'Cozinha');
             INSERT INTO categoria (id, nome, ativo) VALUES (2, 'Antigos', NULL);",
        )
        .unwrap();
        conn
    }

    #[test]
    fn test_row_to_category() {
        let conn = connection();

        let category = conn
            .query_row(
                "SELECT id, nome, ativo FROM categoria WHERE id = 1",
                [],
                row_to_category,
            )
            .unwrap();

        assert_eq!(category, Category::new(1, "Cozinha"));
    }

    #[test]
    fn test_null_flag_reads_inactive() {
        let conn = connection();

        let category = conn
            .query_row(
                "SELECT id, nome, ativo FROM categoria WHERE id = 2",
                [],
                row_to_category,
            )
            .unwrap();

        assert!(!category.active);
    }

    #[test]
    fn test_row_to_category_ignores_column_order() {
        let conn = connection();

        let category = conn
            .query_row(
                "SELECT ativo, nome, id FROM categoria WHERE id = 1",
                [],
                row_to_category,
            )
            .unwrap();

        assert_eq!(category.id, 1);
        assert_eq!(category.name, "Cozinha");
    }

    #[test]
    fn test_row_to_product_without_category() {
        let conn = Connection::open_in_memory().unwrap();

        let product = conn
            .query_row(
                "SELECT 5 AS id, 'Caneca' AS nome, 19.9 AS preco, 'Porcelana' AS descricao,
                        3 AS estoque, 1 AS ativo, NULL AS categoria_id,
                        NULL AS categoria_nome, NULL AS categoria_ativo",
                [],
                row_to_product,
            )
            .unwrap();

        assert_eq!(product.id, 5);
        assert_eq!(product.price, 19.9);
        assert_eq!(product.category_id, None);
        assert_eq!(product.category_active, None);
        assert!(product.active);
    }

    #[test]
    fn test_row_to_product_missing_column_fails() {
        let conn = Connection::open_in_memory().unwrap();

        let result = conn.query_row("SELECT 5 AS id, 'Caneca' AS nome", [], row_to_product);

        assert!(result.is_err());
    }

    #[test]
    fn test_row_to_count() {
        let conn = Connection::open_in_memory().unwrap();
        let count = conn.query_row("SELECT 12", [], row_to_count).unwrap();
        assert_eq!(count, 12);
    }

    #[test]
    fn test_to_sql_integer() {
        assert_eq!(to_sql_integer(12).unwrap(), 12);
        assert!(matches!(
            to_sql_integer(u64::MAX),
            Err(RepositoryError::InvalidData(_))
        ));
    }
}
