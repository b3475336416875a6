use crate::modules::carts::core::cart::{Cart, CartLine};
use crate::shared::infrastructure::collection::{Collection, CollectionError};
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddToCartOutcome {
    Updated(Vec<CartLine>),
    CartNotFound,
}

pub struct CartStore {
    collection: Arc<dyn Collection<Cart>>,
    write_lock: Mutex<()>,
}

impl CartStore {
    pub fn new(collection: Arc<dyn Collection<Cart>>) -> Self {
        Self {
            collection,
            write_lock: Mutex::new(()),
        }
    }

    /// Lines of the cart, or an empty list when the cart does not exist.
    pub async fn list_products_in_cart(
        &self,
        cart_id: &str,
    ) -> Result<Vec<CartLine>, CollectionError> {
        let carts = self.collection.load_all().await?;
        Ok(carts
            .into_iter()
            .find(|c| c.id == cart_id)
            .map(|c| c.products)
            .unwrap_or_default())
    }

    /// Adds one unit of `product_id` to the cart and rewrites every cart.
    /// The product id is not checked against the catalog.
    pub async fn add_product_to_cart(
        &self,
        cart_id: &str,
        product_id: &str,
    ) -> Result<AddToCartOutcome, CollectionError> {
        let _guard = self.write_lock.lock().await;
        let mut carts = self.collection.load_all().await?;
        let Some(cart) = carts.iter_mut().find(|c| c.id == cart_id) else {
            tracing::debug!(cart_id, "cart not found");
            return Ok(AddToCartOutcome::CartNotFound);
        };
        cart.add_product(product_id);
        let lines = cart.products.clone();
        self.collection.save_all(&carts).await?;
        tracing::info!(cart_id, product_id, lines = lines.len(), "product added to cart");
        Ok(AddToCartOutcome::Updated(lines))
    }

    pub async fn create_cart(&self) -> Result<Cart, CollectionError> {
        let _guard = self.write_lock.lock().await;
        let mut carts = self.collection.load_all().await?;
        let cart = Cart::empty(Uuid::now_v7().to_string());
        carts.push(cart.clone());
        self.collection.save_all(&carts).await?;
        tracing::info!(cart_id = %cart.id, "cart created");
        Ok(cart)
    }
}
