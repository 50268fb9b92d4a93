use serde::Deserialize;

use crate::models::{Currency, Language};

/// Partial merge onto the current settings.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSettingsRequest {
    pub language: Option<Language>,
    pub currency: Option<Currency>,
    pub is_dark_mode: Option<bool>,
}
