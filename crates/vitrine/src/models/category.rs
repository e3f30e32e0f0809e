use serde::Deserialize;

use vitrine_core::catalog::{validate_category_name, Category, CategoryError, NewCategory};
use vitrine_core::serde::deserialize_flag;

/// Request payload for creating a new category.
#[derive(Debug, Deserialize)]
pub struct CreateCategory {
    pub name: String,
}

impl CreateCategory {
    /// Validates the trimmed name and converts the request into a NewCategory.
    pub fn into_new_category(self) -> Result<NewCategory, CategoryError> {
        let name = self.name.trim();
        validate_category_name(name)?;
        Ok(NewCategory::new(name))
    }
}

/// Request payload for updating a category.
///
/// An unchecked `active` checkbox is not sent at all, so a missing flag
/// reads as inactive.
#[derive(Debug, Deserialize)]
pub struct UpdateCategory {
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub active: bool,
}

impl UpdateCategory {
    /// Builds the replacement row for category `id`.
    pub fn into_category(self, id: i64) -> Result<Category, CategoryError> {
        let name = self.name.trim();
        validate_category_name(name)?;
        Ok(Category::new(id, name).with_active(self.active))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_trims_name() {
        let payload = CreateCategory {
            name: "  Livros ".to_string(),
        };

        assert_eq!(payload.into_new_category().unwrap(), NewCategory::new("Livros"));
    }

    #[test]
    fn test_create_rejects_blank_name() {
        let payload = CreateCategory {
            name: "   ".to_string(),
        };

        assert_eq!(payload.into_new_category(), Err(CategoryError::EmptyName));
    }

    #[test]
    fn test_update_flag_from_json() {
        let payload: UpdateCategory =
            serde_json::from_str(r#"{"name": "Jogos", "active": "on"}"#).unwrap();
        assert!(payload.active);

        let payload: UpdateCategory = serde_json::from_str(r#"{"name": "Jogos"}"#).unwrap();
        assert!(!payload.active);
    }

    #[test]
    fn test_update_into_category() {
        let payload = UpdateCategory {
            name: "Jogos".to_string(),
            active: false,
        };

        assert_eq!(
            payload.into_category(3).unwrap(),
            Category::new(3, "Jogos").with_active(false)
        );
    }
}
