//! Product — the single catalogue record exposed by the service.

use serde::{Deserialize, Serialize};

use crate::id::ProductId;

/// A stored product row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub quantity: i64,
    pub price: f64,
}

/// Product fields before the store has assigned an id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub quantity: i64,
    pub price: f64,
}

impl NewProduct {
    /// Collect the client-supplied fields of a product.
    #[must_use]
    pub fn new(name: impl Into<String>, quantity: i64, price: f64) -> Self {
        Self {
            name: name.into(),
            quantity,
            price,
        }
    }

    /// Attach an identifier, producing the stored form.
    #[must_use]
    pub fn with_id(self, id: ProductId) -> Product {
        Product {
            id,
            name: self.name,
            quantity: self.quantity,
            price: self.price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_keep_fields_when_attaching_id() {
        let product = NewProduct::new("keyboard", 400, 3000.0).with_id(ProductId::new(1));
        assert_eq!(product.id, ProductId::new(1));
        assert_eq!(product.name, "keyboard");
        assert_eq!(product.quantity, 400);
        assert!((product.price - 3000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn should_serialize_flat_json_shape() {
        let product = NewProduct::new("chair", 3, 390.5).with_id(ProductId::new(5));
        let value = serde_json::to_value(&product).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"id": 5, "name": "chair", "quantity": 3, "price": 390.5})
        );
    }
}
