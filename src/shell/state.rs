use crate::modules::carts::core::cart::Cart;
use crate::modules::carts::store::CartStore;
use crate::modules::products::core::product::Product;
use crate::modules::products::store::ProductStore;
use crate::shared::infrastructure::collection::CollectionError;
use crate::shared::infrastructure::collection::json_file::JsonFileCollection;
use crate::shell::config::AppConfig;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub products: Arc<ProductStore>,
    pub carts: Arc<CartStore>,
}

impl AppState {
    /// Wires both stores to their JSON files, creating missing files as empty arrays.
    pub async fn from_config(config: &AppConfig) -> Result<Self, CollectionError> {
        let products = JsonFileCollection::<Product>::new("products", &config.products_file);
        let carts = JsonFileCollection::<Cart>::new("carts", &config.carts_file);
        products.ensure_exists().await?;
        carts.ensure_exists().await?;
        Ok(Self {
            products: Arc::new(ProductStore::new(Arc::new(products))),
            carts: Arc::new(CartStore::new(Arc::new(carts))),
        })
    }
}
