use crate::models::{Currency, Review};

/// Fixed USD -> CAD display rate.
pub const EX_RATE_USD_TO_CAD: f64 = 1.38;

/// Mean rating rounded to one decimal. An unreviewed product shows `5.0`,
/// the optimistic default, rather than zero.
pub fn average_rating(reviews: &[Review]) -> f64 {
    if reviews.is_empty() {
        return 5.0;
    }
    let sum: u32 = reviews.iter().map(|r| u32::from(r.rating)).sum();
    let mean = f64::from(sum) / reviews.len() as f64;
    (mean * 10.0).round() / 10.0
}

/// Identity for USD; CAD prices are rounded to whole dollars.
pub fn convert_price(price_usd: f64, currency: Currency) -> f64 {
    match currency {
        Currency::USD => price_usd,
        Currency::CAD => (price_usd * EX_RATE_USD_TO_CAD).round(),
    }
}

pub fn format_price(price_usd: f64, currency: Currency) -> String {
    format!("{}{}", currency.glyph(), convert_price(price_usd, currency))
}
