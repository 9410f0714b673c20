use crate::domain::cart::{Cart, CartTotals};
use crate::domain::line::{CartLine, ProductSnapshot};
use crate::domain::ports::CartStoreBox;
use rust_decimal::Decimal;
use tracing::{debug, warn};

/// The main entry point for cart operations.
///
/// `CartEngine` owns the in-memory `Cart` and the storage backend, and it is
/// the sole writer to that backend's slot. An engine only exists once its
/// initial load has completed, so no mutation can race the load and clobber a
/// previously persisted cart with an incomplete one.
///
/// Mutating operations never fail from the caller's point of view: argument
/// problems are validation no-ops inside `Cart`, and persistence failures are
/// caught at the write boundary and logged, after which the in-memory state
/// stays authoritative for the rest of the session. The next successful
/// mutation re-persists whatever the cart holds then, so there is no explicit
/// retry.
pub struct CartEngine {
    cart: Cart,
    store: CartStoreBox,
}

impl CartEngine {
    /// Loads the persisted cart from `store`, or starts empty.
    ///
    /// A slot that was never written yields an empty cart. A slot that exists
    /// but fails structural validation (undecodable, duplicate ids, zero
    /// quantities) is discarded with a warning and the cart starts empty;
    /// corrupted persisted state never fails initialization. The load itself
    /// never writes back.
    pub async fn load(store: CartStoreBox) -> Self {
        let cart = match store.load().await {
            Ok(Some(lines)) => match Cart::from_lines(lines) {
                Ok(cart) => {
                    debug!(lines = cart.lines().len(), "loaded persisted cart");
                    cart
                }
                Err(e) => {
                    warn!("discarding invalid persisted cart: {e}");
                    Cart::new()
                }
            },
            Ok(None) => Cart::new(),
            Err(e) => {
                warn!("discarding unreadable persisted cart: {e}");
                Cart::new()
            }
        };
        Self { cart, store }
    }

    /// Adds `quantity` units of a product snapshot to the cart.
    ///
    /// An existing line for the same product id has its quantity incremented
    /// and keeps its original snapshot fields. A zero quantity is a no-op.
    pub async fn add_line(&mut self, product: ProductSnapshot, quantity: u32) {
        self.cart.add(product, quantity);
        self.persist().await;
    }

    /// Removes the line for `id`; no-op when absent.
    pub async fn remove_line(&mut self, id: u32) {
        self.cart.remove(id);
        self.persist().await;
    }

    /// Sets an existing line's quantity; zero removes it, unknown ids are
    /// no-ops.
    pub async fn set_quantity(&mut self, id: u32, quantity: u32) {
        self.cart.set_quantity(id, quantity);
        self.persist().await;
    }

    /// Empties the cart and deletes the persisted slot.
    ///
    /// The slot is removed rather than rewritten as an empty list, so a later
    /// load sees "never initialized" instead of a stale empty cart.
    pub async fn clear(&mut self) {
        self.cart.clear();
        if let Err(e) = self.store.delete().await {
            warn!("failed to delete persisted cart, keeping in-memory state: {e}");
        }
    }

    pub fn is_in_cart(&self, id: u32) -> bool {
        self.cart.contains(id)
    }

    pub fn subtotal(&self) -> Decimal {
        self.cart.subtotal()
    }

    pub fn tax(&self) -> Decimal {
        self.cart.tax()
    }

    pub fn total(&self) -> Decimal {
        self.cart.total()
    }

    pub fn item_count(&self) -> u64 {
        self.cart.item_count()
    }

    pub fn totals(&self) -> CartTotals {
        self.cart.totals()
    }

    pub fn lines(&self) -> &[CartLine] {
        self.cart.lines()
    }

    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    // Full-state write after every mutation. Failures are logged and swallowed;
    // the in-memory cart remains the source of truth.
    async fn persist(&self) {
        if let Err(e) = self.store.save(self.cart.lines()).await {
            warn!("failed to persist cart, keeping in-memory state: {e}");
        }
    }
}
