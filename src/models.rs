use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "en")]
    English,
    #[serde(rename = "ar")]
    Arabic,
    #[serde(rename = "fr")]
    French,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Currency {
    USD,
    CAD,
}

impl Currency {
    pub fn glyph(self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::CAD => "C$",
        }
    }
}

/// Stored JSON keeps the frontend's field names (camelCase).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: i64,
    pub user_id: String,
    pub user_name: String,
    pub rating: u8,
    pub comment: String,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductAttribute {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    /// USD, non-negative. Display conversion happens in [`crate::pricing`].
    pub price: f64,
    /// Kilograms.
    pub weight: f64,
    pub description: String,
    /// Non-empty after creation.
    pub images: Vec<String>,
    pub attributes: Vec<ProductAttribute>,
    /// Newest first.
    pub reviews: Vec<Review>,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub email: String,
    pub is_admin: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSettings {
    pub language: Language,
    pub currency: Currency,
    pub is_dark_mode: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            language: Language::English,
            currency: Currency::USD,
            is_dark_mode: false,
        }
    }
}
