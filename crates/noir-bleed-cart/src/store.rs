//! # CartStore
//!
//! The authoritative cart owner: loads persisted state once per session,
//! runs every mutation as read-modify-persist, and publishes the badge
//! count and "item added" events through injected sinks.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     CartStore Lifecycle                             │
//! │                                                                     │
//! │  Session start                                                      │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  CartStore::new(storage) ── sinks injected via with_*()             │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  initialize() ──► get("noirBleedCart")                              │
//! │       │             absent ──────────► empty cart                   │
//! │       │             parseable ──────► rehydrated cart               │
//! │       │             anything else ──► empty cart + recovery hook    │
//! │       │                               (never an error)              │
//! │       ▼                                                             │
//! │  add_item / remove_item / update_quantity / clear                   │
//! │       │          each: mutate ► persist ► publish count             │
//! │       │          persist failed: roll back, return StoreError       │
//! │       ▼                                                             │
//! │  Session end - nothing to tear down, state is already on disk       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ownership
//! One CartStore per session, constructed explicitly and passed by
//! reference to whichever UI handlers need it. There is no ambient global
//! cart.

use noir_bleed_core::cart::Cart;
use noir_bleed_core::types::{CartItem, DisplayCount, ProductInput};
use noir_bleed_core::validation::validate_product;
use noir_bleed_core::Money;
use tracing::{debug, warn};

use crate::error::{StorageError, StoreResult};
use crate::sinks::{CountDisplay, Notifier};
use crate::storage::KeyValueStore;

/// The well-known storage key the cart persists under.
///
/// Carried over from the original storefront; existing persisted carts
/// remain readable across versions because neither the key nor the record
/// layout changes.
pub const CART_STORAGE_KEY: &str = "noirBleedCart";

// =============================================================================
// Recovery Reporting
// =============================================================================

/// Why persisted cart state was discarded during [`CartStore::initialize`].
///
/// Recovery is silent from the caller's point of view (initialize never
/// fails), but the hook lets tests and diagnostics distinguish "empty cart"
/// from "corrupt cart recovered as empty".
#[derive(Debug)]
pub enum RecoveryReason {
    /// The storage backend could not be read at all.
    Unreadable(StorageError),

    /// The stored value was not a parseable array of cart records.
    Unparseable(serde_json::Error),

    /// The records parsed but violated a cart invariant
    /// (quantity < 1, or a duplicate id).
    InvalidRecord { id: String },
}

type RecoveryHook = Box<dyn FnMut(&RecoveryReason)>;

// =============================================================================
// CartStore
// =============================================================================

/// Owns the in-memory cart and keeps it synchronized with storage.
///
/// Generic over the storage backend; sinks and the recovery hook are
/// optional and injected at construction:
///
/// ```rust
/// use noir_bleed_cart::sinks::{LogDisplay, LogNotifier};
/// use noir_bleed_cart::storage::MemoryStore;
/// use noir_bleed_cart::store::CartStore;
///
/// let mut store = CartStore::new(MemoryStore::new())
///     .with_display(LogDisplay)
///     .with_notifier(LogNotifier);
/// store.initialize();
/// assert!(store.is_empty());
/// ```
pub struct CartStore<S: KeyValueStore> {
    storage: S,
    key: String,
    cart: Cart,
    display: Option<Box<dyn CountDisplay>>,
    notifier: Option<Box<dyn Notifier>>,
    recovery_hook: Option<RecoveryHook>,
}

impl<S: KeyValueStore> CartStore<S> {
    /// Creates a store over `storage` with an empty cart, persisting under
    /// [`CART_STORAGE_KEY`]. Call [`initialize`](Self::initialize) to load
    /// any persisted state.
    pub fn new(storage: S) -> Self {
        CartStore {
            storage,
            key: CART_STORAGE_KEY.to_string(),
            cart: Cart::new(),
            display: None,
            notifier: None,
            recovery_hook: None,
        }
    }

    /// Overrides the storage key. Mostly for tests running several carts
    /// against one backend.
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    /// Injects the badge display sink.
    pub fn with_display(mut self, display: impl CountDisplay + 'static) -> Self {
        self.display = Some(Box::new(display));
        self
    }

    /// Injects the "item added" notification sink.
    pub fn with_notifier(mut self, notifier: impl Notifier + 'static) -> Self {
        self.notifier = Some(Box::new(notifier));
        self
    }

    /// Injects the recovery hook called when persisted state is discarded.
    pub fn with_recovery_hook(mut self, hook: impl FnMut(&RecoveryReason) + 'static) -> Self {
        self.recovery_hook = Some(Box::new(hook));
        self
    }

    // -------------------------------------------------------------------------
    // Lifecycle
    // -------------------------------------------------------------------------

    /// Loads the cart from storage and publishes the badge count.
    ///
    /// ## Behavior
    /// - No value under the key: start empty
    /// - Parseable record array that satisfies the cart invariants: use it
    /// - Anything else: start empty and report through the recovery hook
    ///
    /// Never returns an error; a shopper landing on the page always gets a
    /// working cart.
    pub fn initialize(&mut self) {
        self.cart = match self.storage.get(&self.key) {
            Ok(None) => Cart::new(),
            Ok(Some(raw)) => self.rehydrate(&raw),
            Err(e) => {
                warn!(key = %self.key, error = %e, "cart storage unreadable, starting empty");
                self.report_recovery(RecoveryReason::Unreadable(e));
                Cart::new()
            }
        };

        debug!(
            lines = self.cart.item_count(),
            total = %self.cart.total_price(),
            "cart initialized"
        );
        self.publish_count();
    }

    /// Parses and invariant-checks a persisted payload, recovering to an
    /// empty cart when it is unusable.
    fn rehydrate(&mut self, raw: &str) -> Cart {
        let items: Vec<CartItem> = match serde_json::from_str(raw) {
            Ok(items) => items,
            Err(e) => {
                warn!(key = %self.key, error = %e, "persisted cart unparseable, starting empty");
                self.report_recovery(RecoveryReason::Unparseable(e));
                return Cart::new();
            }
        };

        // A record that parsed fine can still be impossible: quantities
        // below 1 and duplicate ids never come out of a healthy save.
        let mut seen = std::collections::HashSet::new();
        for item in &items {
            if item.quantity < 1 || !seen.insert(item.id.as_str()) {
                warn!(key = %self.key, id = %item.id, "persisted cart violates invariants, starting empty");
                self.report_recovery(RecoveryReason::InvalidRecord {
                    id: item.id.clone(),
                });
                return Cart::new();
            }
        }

        Cart::from_items(items)
    }

    fn report_recovery(&mut self, reason: RecoveryReason) {
        if let Some(hook) = &mut self.recovery_hook {
            hook(&reason);
        }
    }

    // -------------------------------------------------------------------------
    // Mutations
    // -------------------------------------------------------------------------

    /// Adds a product to the cart (bumping quantity on a repeat id),
    /// persists, republishes the badge, and emits the notification.
    ///
    /// ## Errors
    /// - [`StoreError::Validation`]: empty id or negative price; the cart
    ///   is untouched
    /// - [`StoreError::Storage`]: the write failed; the mutation was
    ///   rolled back and nothing was published
    pub fn add_item(&mut self, product: &ProductInput) -> StoreResult<()> {
        validate_product(product)?;

        let snapshot = self.cart.clone();
        self.cart.add_item(product);
        self.persist_or_rollback(snapshot)?;

        debug!(id = %product.id, "item added");
        self.publish_count();
        if let Some(notifier) = &mut self.notifier {
            notifier.item_added(&product.name);
        }
        Ok(())
    }

    /// Removes the item with `product_id`, if present.
    ///
    /// A missing id is not an error, but the save and the badge republish
    /// are unconditional: remove always ends with a persist, whether or
    /// not anything matched the id.
    pub fn remove_item(&mut self, product_id: &str) -> StoreResult<()> {
        let snapshot = self.cart.clone();
        let removed = self.cart.remove_item(product_id);
        self.persist_or_rollback(snapshot)?;

        debug!(id = %product_id, removed, "remove item");
        self.publish_count();
        Ok(())
    }

    /// Sets the quantity of the item with `product_id`.
    ///
    /// `quantity <= 0` removes the item. A missing id is a full no-op:
    /// unlike remove, nothing is written and nothing republished, since
    /// the count is only republished on paths that mutate state.
    pub fn update_quantity(&mut self, product_id: &str, quantity: i64) -> StoreResult<()> {
        let snapshot = self.cart.clone();
        if !self.cart.update_quantity(product_id, quantity) {
            return Ok(());
        }
        self.persist_or_rollback(snapshot)?;

        debug!(id = %product_id, quantity, "quantity updated");
        self.publish_count();
        Ok(())
    }

    /// Empties the cart, persists, and republishes the badge (count 0,
    /// hidden).
    pub fn clear(&mut self) -> StoreResult<()> {
        let snapshot = self.cart.clone();
        self.cart.clear();
        self.persist_or_rollback(snapshot)?;

        debug!("cart cleared");
        self.publish_count();
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    /// Total price across all lines; zero for an empty cart.
    pub fn total_price(&self) -> Money {
        self.cart.total_price()
    }

    /// The items in display order.
    pub fn items(&self) -> &[CartItem] {
        self.cart.items()
    }

    /// The badge state derived from the current contents.
    pub fn display_count(&self) -> DisplayCount {
        self.cart.display_count()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    /// Consumes the store and hands back the storage backend.
    ///
    /// Lets a later session (or a test) reopen the same persisted state.
    pub fn into_storage(self) -> S {
        self.storage
    }

    // -------------------------------------------------------------------------
    // Internals
    // -------------------------------------------------------------------------

    /// Writes the current cart to storage; on failure restores `snapshot`
    /// so memory stays consistent with the last successful write.
    fn persist_or_rollback(&mut self, snapshot: Cart) -> StoreResult<()> {
        let raw = serde_json::to_string(self.cart.items()).map_err(StorageError::from)?;
        match self.storage.set(&self.key, &raw) {
            Ok(()) => Ok(()),
            Err(e) => {
                warn!(key = %self.key, error = %e, "cart persist failed, rolling back");
                self.cart = snapshot;
                Err(e.into())
            }
        }
    }

    fn publish_count(&mut self) {
        if let Some(display) = &mut self.display {
            display.publish(self.cart.display_count());
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
