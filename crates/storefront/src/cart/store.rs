//! The cart store.

use tracing::instrument;
use viriot_core::{Price, ProductId};

use super::{CartLineItem, snapshot};
use crate::storage::CartStorage;

/// Owns the cart's line items and panel visibility, and keeps a snapshot of
/// the items in durable storage.
///
/// Every call to [`add_item`](Self::add_item),
/// [`remove_item`](Self::remove_item) or
/// [`update_quantity`](Self::update_quantity) ends with a [`save`](Self::save).
/// Panel visibility is never persisted.
///
/// # Example
///
/// ```
/// use viriot_core::Price;
/// use viriot_storefront::{CartLineItem, CartStore, MemoryStorage};
///
/// let mut cart = CartStore::open(MemoryStorage::new(), "cart");
/// let pad_thai = CartLineItem::new("a", "Pad Thai", Price::from_cents(1250), "/a.jpg", 1);
///
/// cart.add_item(pad_thai.clone());
/// cart.add_item(pad_thai);
/// assert_eq!(cart.item_count(), 2);
///
/// cart.update_quantity(&"a".into(), 0);
/// assert!(cart.is_empty());
/// ```
#[derive(Debug)]
pub struct CartStore<S: CartStorage> {
    items: Vec<CartLineItem>,
    is_open: bool,
    storage: S,
    key: String,
}

impl<S: CartStorage> CartStore<S> {
    /// Create a store and rehydrate it from the snapshot under `key`.
    ///
    /// A missing, unreadable or malformed snapshot yields an empty cart; the
    /// problem is logged and never returned.
    #[instrument(skip_all, fields(key = key.as_ref()))]
    pub fn open(storage: S, key: impl AsRef<str>) -> Self {
        let key = key.as_ref().to_owned();
        let items = match storage.read(&key) {
            Ok(Some(raw)) => match snapshot::decode(&raw) {
                Ok(items) => {
                    tracing::info!(lines = items.len(), "Restored cart");
                    items
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Discarding malformed cart snapshot");
                    Vec::new()
                }
            },
            Ok(None) => {
                tracing::debug!("No stored cart");
                Vec::new()
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read cart snapshot");
                Vec::new()
            }
        };

        Self {
            items,
            is_open: false,
            storage,
            key,
        }
    }

    /// Add a product to the cart.
    ///
    /// If a line with the same id exists its quantity goes up by exactly one
    /// and `item.quantity` is ignored. Otherwise `item` is appended with its
    /// quantity raised to at least one.
    pub fn add_item(&mut self, mut item: CartLineItem) {
        if let Some(existing) = self.find_mut(&item.id) {
            existing.quantity = existing.quantity.saturating_add(1);
            tracing::debug!(id = %item.id, quantity = existing.quantity, "Incremented cart line");
        } else {
            item.quantity = item.quantity.max(1);
            tracing::debug!(id = %item.id, quantity = item.quantity, "Added cart line");
            self.items.push(item);
        }
        self.save();
    }

    /// Remove the line for `id`. Removing an absent id is a no-op.
    pub fn remove_item(&mut self, id: &ProductId) {
        let before = self.items.len();
        self.items.retain(|item| &item.id != id);
        if self.items.len() != before {
            tracing::debug!(%id, "Removed cart line");
        }
        self.save();
    }

    /// Set the quantity of the line for `id`.
    ///
    /// A quantity below one removes the line. Quantities above `u32::MAX`
    /// are clamped. An absent id is a no-op.
    pub fn update_quantity(&mut self, id: &ProductId, quantity: i64) {
        if quantity < 1 {
            self.remove_item(id);
            return;
        }

        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        if let Some(existing) = self.find_mut(id) {
            existing.quantity = quantity;
            tracing::debug!(%id, quantity, "Updated cart line");
        }
        self.save();
    }

    /// Show or hide the cart panel.
    pub const fn set_open(&mut self, open: bool) {
        self.is_open = open;
    }

    /// Whether the cart panel is shown.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.is_open
    }

    /// Total units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Sum of every line's price times quantity.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        self.items.iter().map(CartLineItem::line_total).sum()
    }

    /// Lines in the order they were first added.
    #[must_use]
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    /// The line for `id`, if present.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&CartLineItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Key the snapshot is stored under.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Write a full snapshot of the items to storage.
    ///
    /// Best effort: failures are logged and dropped.
    pub fn save(&mut self) {
        let encoded = match snapshot::encode(&self.items) {
            Ok(encoded) => encoded,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to encode cart snapshot");
                return;
            }
        };
        if let Err(e) = self.storage.write(&self.key, &encoded) {
            tracing::warn!(key = %self.key, error = %e, "Failed to persist cart snapshot");
        }
    }

    /// The storage backend.
    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Consume the store and return its storage backend.
    #[must_use]
    pub fn into_storage(self) -> S {
        self.storage
    }

    fn find_mut(&mut self, id: &ProductId) -> Option<&mut CartLineItem> {
        self.items.iter_mut().find(|item| &item.id == id)
    }
}
