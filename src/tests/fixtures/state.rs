use crate::modules::carts::core::cart::Cart;
use crate::modules::carts::store::CartStore;
use crate::modules::products::core::product::Product;
use crate::modules::products::store::ProductStore;
use crate::shared::infrastructure::collection::in_memory::InMemoryCollection;
use crate::shell::state::AppState;
use std::sync::Arc;

pub fn make_state(
    products: InMemoryCollection<Product>,
    carts: InMemoryCollection<Cart>,
) -> AppState {
    AppState {
        products: Arc::new(ProductStore::new(Arc::new(products))),
        carts: Arc::new(CartStore::new(Arc::new(carts))),
    }
}

pub fn make_test_state(products: Vec<Product>, carts: Vec<Cart>) -> AppState {
    make_state(
        InMemoryCollection::with_items("products", products),
        InMemoryCollection::with_items("carts", carts),
    )
}

pub fn make_offline_state() -> AppState {
    let mut products = InMemoryCollection::new("products");
    products.toggle_offline();
    let mut carts = InMemoryCollection::new("carts");
    carts.toggle_offline();
    make_state(products, carts)
}
