use serde::Deserialize;

use crate::models::ProductAttribute;

#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    pub price: f64,
    pub weight: f64,
    /// When absent, the description provider is asked to write one.
    pub description: Option<String>,
    pub images: Option<Vec<String>>,
    pub attributes: Option<Vec<ProductAttribute>>,
}

/// Partial merge: only `Some` fields overwrite the existing product.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub weight: Option<f64>,
    pub description: Option<String>,
    pub images: Option<Vec<String>>,
    pub attributes: Option<Vec<ProductAttribute>>,
    pub category: Option<String>,
}
