//! SQLite schema definitions and SQL query constants.
//!
//! This module contains all SQL statements used by the SQLite repository,
//! following the Functional Core pattern - pure data, no I/O.

use vitrine_core::catalog::SortOrder;

// Category queries
pub const CREATE_CATEGORY_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS categoria (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    nome TEXT NOT NULL,
    ativo INTEGER DEFAULT 1
)
"#;

pub const INSERT_CATEGORY: &str = r#"
INSERT INTO categoria (nome)
VALUES (?1)
"#;

pub const CATEGORY_EXISTS_BY_NAME: &str = r#"
SELECT 1
FROM categoria
WHERE nome = ?1
LIMIT 1
"#;

pub const SELECT_CATEGORY_NAMES: &str = r#"
SELECT nome
FROM categoria
"#;

pub const SELECT_ALL_CATEGORIES: &str = r#"
SELECT id, nome, ativo
FROM categoria
ORDER BY nome, id
"#;

pub const SELECT_ACTIVE_CATEGORIES: &str = r#"
SELECT id, nome, ativo
FROM categoria
WHERE ativo = 1
ORDER BY nome, id
"#;

pub const SELECT_CATEGORY_BY_ID: &str = r#"
SELECT id, nome, ativo
FROM categoria
WHERE id = ?1
"#;

pub const UPDATE_CATEGORY: &str = r#"
UPDATE categoria
SET nome = ?2, ativo = ?3
WHERE id = ?1
"#;

pub const DEACTIVATE_CATEGORY: &str = r#"
UPDATE categoria
SET ativo = 0
WHERE id = ?1
"#;

pub const REACTIVATE_CATEGORY: &str = r#"
UPDATE categoria
SET ativo = 1
WHERE id = ?1
"#;

// Product queries
pub const CREATE_PRODUCT_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS produto (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    nome TEXT NOT NULL,
    preco FLOAT NOT NULL,
    descricao TEXT NOT NULL,
    estoque INTEGER NOT NULL,
    categoria_id INTEGER,
    ativo INTEGER NOT NULL DEFAULT 1,
    FOREIGN KEY (categoria_id) REFERENCES categoria (id)
);

CREATE INDEX IF NOT EXISTS idx_produto_categoria_id ON produto(categoria_id);
"#;

/// Lists the column names of an existing `produto` table.
pub const SELECT_PRODUCT_COLUMN_NAMES: &str = r#"
SELECT name
FROM pragma_table_info('produto')
"#;

/// Adds the soft-delete flag to a `produto` table created without it.
pub const ADD_PRODUCT_ACTIVE_COLUMN: &str = r#"
ALTER TABLE produto ADD COLUMN ativo INTEGER NOT NULL DEFAULT 1
"#;

pub const INSERT_PRODUCT: &str = r#"
INSERT INTO produto (nome, preco, descricao, estoque, categoria_id)
VALUES (?1, ?2, ?3, ?4, ?5)
"#;

/// Columns shared by every product read. Mapped by name in `conversions`.
const PRODUCT_COLUMNS: &str = "p.id, p.nome, p.preco, p.descricao, p.estoque, p.ativo, \
     p.categoria_id, c.nome AS categoria_nome, c.ativo AS categoria_ativo";

pub const SELECT_LISTED_PRODUCTS: &str = r#"
SELECT p.id, p.nome, p.preco, p.descricao, p.estoque, p.ativo,
       p.categoria_id, c.nome AS categoria_nome, c.ativo AS categoria_ativo
FROM produto p
INNER JOIN categoria c ON p.categoria_id = c.id
WHERE c.ativo = 1 AND p.ativo = 1
ORDER BY p.nome, p.id
"#;

pub const SELECT_LISTED_PRODUCTS_BY_CATEGORY: &str = r#"
SELECT p.id, p.nome, p.preco, p.descricao, p.estoque, p.ativo,
       p.categoria_id, c.nome AS categoria_nome, c.ativo AS categoria_ativo
FROM produto p
INNER JOIN categoria c ON p.categoria_id = c.id
WHERE c.ativo = 1 AND p.ativo = 1 AND p.categoria_id = ?1
ORDER BY p.nome, p.id
"#;

pub const SELECT_PRODUCT_BY_ID: &str = r#"
SELECT p.id, p.nome, p.preco, p.descricao, p.estoque, p.ativo,
       p.categoria_id, c.nome AS categoria_nome, c.ativo AS categoria_ativo
FROM produto p
LEFT JOIN categoria c ON p.categoria_id = c.id
WHERE p.id = ?1
"#;

pub const UPDATE_PRODUCT: &str = r#"
UPDATE produto
SET nome = ?2, preco = ?3, descricao = ?4, estoque = ?5, categoria_id = ?6
WHERE id = ?1
"#;

pub const DELETE_PRODUCT: &str = r#"
DELETE FROM produto
WHERE id = ?1
"#;

pub const DEACTIVATE_PRODUCT: &str = r#"
UPDATE produto
SET ativo = 0
WHERE id = ?1
"#;

pub const COUNT_PRODUCTS: &str = r#"
SELECT COUNT(*)
FROM produto
"#;

/// Search predicate over `?1` (LIKE pattern) and `?2` (category ID or NULL).
///
/// A NULL category matches every row, so one statement serves both the
/// filtered and the unfiltered search.
const SEARCH_PREDICATE: &str = "(p.nome LIKE ?1 OR p.descricao LIKE ?1) \
     AND (?2 IS NULL OR p.categoria_id = ?2) \
     AND p.ativo = 1";

pub const COUNT_SEARCH_RESULTS: &str = r#"
SELECT COUNT(*)
FROM produto p
WHERE (p.nome LIKE ?1 OR p.descricao LIKE ?1)
  AND (?2 IS NULL OR p.categoria_id = ?2)
  AND p.ativo = 1
"#;

/// Builds the paginated search statement for a sort order.
///
/// Parameters: `?1` LIKE pattern, `?2` category ID or NULL, `?3` limit,
/// `?4` offset. Only the `ORDER BY` clause varies and it comes from a fixed
/// set of column lists, never from user input.
pub fn search_products_sql(order: SortOrder) -> String {
    format!(
        "SELECT {PRODUCT_COLUMNS} \
         FROM produto p \
         LEFT JOIN categoria c ON p.categoria_id = c.id \
         WHERE {SEARCH_PREDICATE} \
         ORDER BY {} \
         LIMIT ?3 OFFSET ?4",
        order.order_by_clause()
    )
}
