use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product: String,
    pub quantity: u64,
}

/// `id` must be a JSON string in the stored file, like `Product::id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    pub id: String,
    pub products: Vec<CartLine>,
    /// Unknown keys of the stored record, written back untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Cart {
    pub fn empty(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            products: Vec::new(),
            extra: Map::new(),
        }
    }

    /// Increments the line for `product_id` by one, or appends a new line with
    /// quantity one. Keeps at most one line per product.
    pub fn add_product(&mut self, product_id: &str) {
        match self.products.iter_mut().find(|l| l.product == product_id) {
            Some(line) => line.quantity = line.quantity.saturating_add(1),
            None => self.products.push(CartLine {
                product: product_id.to_string(),
                quantity: 1,
            }),
        }
    }
}
