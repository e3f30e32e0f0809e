use std::{env, path::PathBuf};

use vitrine_core::catalog::DEFAULT_PAGE_SIZE;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to SQLite database file (default: "vitrine.db")
    pub sqlite_path: PathBuf,
    /// Category seed source (default: "sql/categorias.json")
    pub category_seed_path: PathBuf,
    /// Product seed source (default: "sql/produtos.json")
    pub product_seed_path: PathBuf,
    /// Staged product images copied in after a seed (default: "static/img/produtos/inserir")
    pub image_incoming_dir: PathBuf,
    /// Served product images (default: "static/img/produtos")
    pub image_dir: PathBuf,
    /// Search page size when a request does not give one (default: 6)
    pub default_page_size: u32,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `SQLITE_PATH` - SQLite database path (default: "vitrine.db")
    /// - `CATEGORY_SEED_PATH` - Category seed file (default: "sql/categorias.json")
    /// - `PRODUCT_SEED_PATH` - Product seed file (default: "sql/produtos.json")
    /// - `IMAGE_INCOMING_DIR` - Staged images (default: "static/img/produtos/inserir")
    /// - `IMAGE_DIR` - Served images (default: "static/img/produtos")
    /// - `DEFAULT_PAGE_SIZE` - Search page size (default: 6)
    pub fn from_env() -> Self {
        Self {
            sqlite_path: path_var("SQLITE_PATH", "vitrine.db"),
            category_seed_path: path_var("CATEGORY_SEED_PATH", "sql/categorias.json"),
            product_seed_path: path_var("PRODUCT_SEED_PATH", "sql/produtos.json"),
            image_incoming_dir: path_var("IMAGE_INCOMING_DIR", "static/img/produtos/inserir"),
            image_dir: path_var("IMAGE_DIR", "static/img/produtos"),
            default_page_size: env::var("DEFAULT_PAGE_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|size| *size > 0)
                .unwrap_or(DEFAULT_PAGE_SIZE),
        }
    }
}

fn path_var(name: &str, default: &str) -> PathBuf {
    env::var_os(name)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(default))
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        // Clear environment variables to test defaults
        env::remove_var("SQLITE_PATH");
        env::remove_var("CATEGORY_SEED_PATH");
        env::remove_var("PRODUCT_SEED_PATH");
        env::remove_var("IMAGE_INCOMING_DIR");
        env::remove_var("IMAGE_DIR");
        env::remove_var("DEFAULT_PAGE_SIZE");

        let config = Config::from_env();

        assert_eq!(config.sqlite_path, PathBuf::from("vitrine.db"));
        assert_eq!(
            config.category_seed_path,
            PathBuf::from("sql/categorias.json")
        );
        assert_eq!(config.product_seed_path, PathBuf::from("sql/produtos.json"));
        assert_eq!(
            config.image_incoming_dir,
            PathBuf::from("static/img/produtos/inserir")
        );
        assert_eq!(config.image_dir, PathBuf::from("static/img/produtos"));
        assert_eq!(config.default_page_size, 6);
    }

    #[test]
    fn test_path_var_fallback() {
        assert_eq!(
            path_var("VITRINE_TEST_UNSET_PATH", "fallback.db"),
            PathBuf::from("fallback.db")
        );
    }
}
