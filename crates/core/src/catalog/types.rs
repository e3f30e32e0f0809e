use serde::{Deserialize, Serialize};

/// A product grouping shown on the storefront while `active` is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub active: bool,
}

impl Category {
    /// Creates an active category with an already assigned identifier.
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            active: true,
        }
    }

    /// Sets the active flag.
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }
}

/// A category that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCategory {
    pub name: String,
}

impl NewCategory {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Attaches the identifier assigned by storage. New categories start active.
    pub fn into_category(self, id: i64) -> Category {
        Category::new(id, self.name)
    }
}

/// A catalog product as read back from storage.
///
/// `category_name` and `category_active` are joined from the owning category
/// and are never written through the product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub description: String,
    pub stock: i64,
    pub category_id: Option<i64>,
    pub category_name: Option<String>,
    pub category_active: Option<bool>,
    /// Cleared by a product soft delete.
    pub active: bool,
}

impl Product {
    /// Returns the writable fields of this product.
    pub fn to_new_product(&self) -> NewProduct {
        NewProduct {
            name: self.name.clone(),
            price: self.price,
            description: self.description.clone(),
            stock: self.stock,
            category_id: self.category_id,
        }
    }
}

/// The writable fields of a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub description: String,
    pub stock: i64,
    pub category_id: Option<i64>,
}

impl NewProduct {
    pub fn new(
        name: impl Into<String>,
        price: f64,
        description: impl Into<String>,
        stock: i64,
        category_id: Option<i64>,
    ) -> Self {
        Self {
            name: name.into(),
            price,
            description: description.into(),
            stock,
            category_id,
        }
    }

    /// Builds the product returned by an insert.
    ///
    /// The joined category fields stay empty: an insert does not read the
    /// category row back.
    pub fn into_product(self, id: i64) -> Product {
        Product {
            id,
            name: self.name,
            price: self.price,
            description: self.description,
            stock: self.stock,
            category_id: self.category_id,
            category_name: None,
            category_active: None,
            active: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_category_starts_active() {
        let category = NewCategory::new("Livros").into_category(7);

        assert_eq!(category.id, 7);
        assert_eq!(category.name, "Livros");
        assert!(category.active);
    }

    #[test]
    fn test_with_active() {
        let category = Category::new(1, "Jogos").with_active(false);
        assert!(!category.active);
    }

    #[test]
    fn test_new_product_into_product() {
        let product = NewProduct::new("Caneca", 19.9, "Caneca de porcelana", 10, Some(3))
            .into_product(42);

        assert_eq!(product.id, 42);
        assert_eq!(product.category_id, Some(3));
        assert_eq!(product.category_name, None);
        assert!(product.active);
    }

    #[test]
    fn test_to_new_product_keeps_writable_fields() {
        let product = NewProduct::new("Caneca", 19.9, "Porcelana", 10, Some(3)).into_product(1);
        let fields = product.to_new_product();

        assert_eq!(fields.name, "Caneca");
        assert_eq!(fields.stock, 10);
        assert_eq!(fields.category_id, Some(3));
    }

    #[test]
    fn test_product_serializes_joined_fields() {
        let product = Product {
            id: 1,
            name: "Caneca".to_string(),
            price: 19.9,
            description: "Porcelana".to_string(),
            stock: 10,
            category_id: Some(3),
            category_name: Some("Cozinha".to_string()),
            category_active: Some(true),
            active: true,
        };

        let json = serde_json::to_value(&product).unwrap();

        assert_eq!(json["category_name"], "Cozinha");
        assert_eq!(json["category_active"], true);
    }
}
