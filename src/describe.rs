use thiserror::Error;

/// Substituted by product creation whenever the provider fails.
pub const FALLBACK_DESCRIPTION: &str = "Expertly crafted for your daily needs.";

#[derive(Debug, Error)]
pub enum DescribeError {
    #[error("description provider unavailable: {0}")]
    Unavailable(String),

    #[error("description provider returned an unusable response")]
    MalformedResponse,
}

/// External marketing-copy generator consumed by
/// [`crate::services::product_service::create_product`]. May fail for any
/// reason; the caller substitutes [`FALLBACK_DESCRIPTION`] and moves on.
pub trait DescribeProduct {
    fn describe(
        &self,
        name: &str,
        price_usd: f64,
        weight_kg: f64,
    ) -> impl Future<Output = Result<String, DescribeError>> + Send;
}

/// Deterministic offline describer used when no generative backend is wired
/// in.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateDescriber;

impl DescribeProduct for TemplateDescriber {
    fn describe(
        &self,
        name: &str,
        price_usd: f64,
        weight_kg: f64,
    ) -> impl Future<Output = Result<String, DescribeError>> + Send {
        let text = format!("{name}: quality you can feel at ${price_usd}, just {weight_kg}kg.");
        async move { Ok(text) }
    }
}
