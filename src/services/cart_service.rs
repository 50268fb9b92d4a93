use uuid::Uuid;

use crate::{state::Storefront, store::KeyValueStore};

/// Appends unconditionally: every add is its own line item, duplicates and
/// all. Existence is only checked when the cart is read back.
pub fn add_to_cart<S: KeyValueStore>(app: &mut Storefront<S>, product_id: Uuid) {
    app.cart.push(product_id);
    app.persist_cart();
}

/// Removes the line item at `index`. Out of bounds is a silent no-op.
pub fn remove_from_cart<S: KeyValueStore>(app: &mut Storefront<S>, index: usize) {
    if index >= app.cart.len() {
        return;
    }
    app.cart.remove(index);
    app.persist_cart();
}
