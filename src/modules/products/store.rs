use crate::modules::products::core::id::fresh_product_id;
use crate::modules::products::core::product::{NewProduct, Product};
use crate::shared::infrastructure::collection::{Collection, CollectionError};
use std::sync::Arc;
use tokio::sync::Mutex;

pub struct ProductStore {
    collection: Arc<dyn Collection<Product>>,
    // Serializes load/append/save so concurrent creates do not overwrite each other.
    write_lock: Mutex<()>,
}

impl ProductStore {
    pub fn new(collection: Arc<dyn Collection<Product>>) -> Self {
        Self {
            collection,
            write_lock: Mutex::new(()),
        }
    }

    pub async fn list_all(&self) -> Result<Vec<Product>, CollectionError> {
        self.collection.load_all().await
    }

    /// `Ok(None)` when no product carries `id`.
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Product>, CollectionError> {
        let products = self.collection.load_all().await?;
        Ok(products.into_iter().find(|p| p.id == id))
    }

    pub async fn create(&self, input: NewProduct) -> Result<Product, CollectionError> {
        let _guard = self.write_lock.lock().await;
        let mut products = self.collection.load_all().await?;
        let id = fresh_product_id(&mut rand::thread_rng(), &products);
        let product = input.into_product(id);
        products.push(product.clone());
        self.collection.save_all(&products).await?;
        tracing::info!(product_id = %product.id, total = products.len(), "product created");
        Ok(product)
    }
}
