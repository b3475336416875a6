use crate::modules::carts::core::cart::{Cart, CartLine};
use crate::modules::products::core::product::{NewProduct, Product};
use serde_json::{Map, Value, json};

pub fn product(id: &str, title: &str) -> Product {
    let mut fields = Map::new();
    fields.insert("title".into(), json!(title));
    Product {
        id: id.to_string(),
        fields,
    }
}

pub fn new_product(fields: Value) -> NewProduct {
    serde_json::from_value(fields).expect("product fields must be a JSON object")
}

pub fn line(product: &str, quantity: u64) -> CartLine {
    CartLine {
        product: product.to_string(),
        quantity,
    }
}

pub fn cart(id: &str, lines: Vec<CartLine>) -> Cart {
    let mut cart = Cart::empty(id);
    cart.products = lines;
    cart
}
