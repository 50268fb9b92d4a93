use serde::Serialize;
use uuid::Uuid;

use crate::models::{AppSettings, Product, User};
use crate::store::{self, KeyValueStore};

/// The four persisted state fields, owned by one controller and mutated only
/// through [`crate::services`]. Each mutation re-persists just the field it
/// touched.
pub struct Storefront<S> {
    store: S,
    pub(crate) products: Vec<Product>,
    pub(crate) cart: Vec<Uuid>,
    pub(crate) user: Option<User>,
    pub(crate) settings: AppSettings,
}

impl<S: KeyValueStore> Storefront<S> {
    /// Hydrate state from the store. Anything absent or corrupt falls back to
    /// its default: empty catalog, empty cart, signed out, default settings.
    pub fn load(store: S) -> Self {
        let products = store.load(store::PRODUCTS_KEY).unwrap_or_default();
        let cart = store.load(store::CART_KEY).unwrap_or_default();
        let user = store.load::<Option<User>>(store::USER_KEY).flatten();
        let settings = store.load(store::SETTINGS_KEY).unwrap_or_default();
        Self {
            store,
            products,
            cart,
            user,
            settings,
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn product(&self, id: Uuid) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn cart(&self) -> &[Uuid] {
        &self.cart
    }

    pub fn cart_len(&self) -> usize {
        self.cart.len()
    }

    /// Cart line items resolved against the catalog. Dangling ids are
    /// filtered here at read time, not purged from storage.
    pub fn cart_products(&self) -> Vec<&Product> {
        self.cart
            .iter()
            .filter_map(|id| self.product(*id))
            .collect()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    /// Hand the underlying store back, e.g. to reload a fresh session from it.
    pub fn into_store(self) -> S {
        self.store
    }

    pub(crate) fn persist_products(&mut self) {
        Self::persist(&mut self.store, store::PRODUCTS_KEY, &self.products);
    }

    pub(crate) fn persist_cart(&mut self) {
        Self::persist(&mut self.store, store::CART_KEY, &self.cart);
    }

    pub(crate) fn persist_user(&mut self) {
        Self::persist(&mut self.store, store::USER_KEY, &self.user);
    }

    pub(crate) fn persist_settings(&mut self) {
        Self::persist(&mut self.store, store::SETTINGS_KEY, &self.settings);
    }

    // Fire-and-forget, last-write-wins: a failed write must not fail the
    // mutation that triggered it.
    fn persist<T: Serialize>(store: &mut S, key: &str, value: &T) {
        if let Err(err) = store.save(key, value) {
            tracing::warn!(key, error = %err, "persist failed");
        }
    }
}
