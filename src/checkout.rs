use crate::models::{AppSettings, Product};
use crate::pricing::format_price;
use crate::state::Storefront;
use crate::store::KeyValueStore;

/// Default messenger handle orders are handed off to.
pub const DEFAULT_RECIPIENT: &str = "khaled.et.9";

/// A ready-to-send order summary. The caller opens `url` in the external
/// messenger; no response ever comes back into this system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutHandoff {
    pub recipient: String,
    pub message: String,
    pub url: String,
}

impl CheckoutHandoff {
    fn new(recipient: &str, message: String) -> Self {
        let url = format!(
            "https://m.me/{recipient}?text={}",
            urlencoding::encode(&message)
        );
        Self {
            recipient: recipient.to_string(),
            message,
            url,
        }
    }
}

/// Hand-off for a single product, priced in the active currency.
pub fn buy_now(product: &Product, settings: &AppSettings, recipient: &str) -> CheckoutHandoff {
    let message = format!(
        "Hello Texpress Admin!\n\nI want to buy this product:\nName: {}\nPrice: {}\nWeight: {} kg\n\nPlease contact me for payment and shipping details.",
        product.name,
        format_price(product.price, settings.currency),
        product.weight,
    );
    CheckoutHandoff::new(recipient, message)
}

/// Hand-off for the whole cart: one line per item plus a total. The total is
/// summed in USD and converted once. `None` when the cart resolves empty.
pub fn checkout_cart<S: KeyValueStore>(
    app: &Storefront<S>,
    recipient: &str,
) -> Option<CheckoutHandoff> {
    let items = app.cart_products();
    if items.is_empty() {
        return None;
    }
    let currency = app.settings().currency;
    let lines: Vec<String> = items
        .iter()
        .map(|p| format!("- {} ({})", p.name, format_price(p.price, currency)))
        .collect();
    let total: f64 = items.iter().map(|p| p.price).sum();
    let message = format!(
        "Hello Texpress Admin!\n\nI want to buy these items from my cart:\n{}\n\nTotal: {}\n\nPlease contact me for payment.",
        lines.join("\n"),
        format_price(total, currency),
    );
    Some(CheckoutHandoff::new(recipient, message))
}
