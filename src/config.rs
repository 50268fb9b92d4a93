use std::env;
use std::path::PathBuf;

use crate::auth::DEFAULT_ADMIN_PASSCODE;
use crate::checkout::DEFAULT_RECIPIENT;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub admin_passcode: String,
    pub checkout_recipient: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let data_dir = env::var("TEXPRESS_DATA_DIR")
            .unwrap_or_else(|_| "./data".to_string())
            .into();
        let admin_passcode = env::var("TEXPRESS_ADMIN_PASSCODE")
            .unwrap_or_else(|_| DEFAULT_ADMIN_PASSCODE.to_string());
        let checkout_recipient = env::var("TEXPRESS_CHECKOUT_RECIPIENT")
            .unwrap_or_else(|_| DEFAULT_RECIPIENT.to_string());
        Self {
            data_dir,
            admin_passcode,
            checkout_recipient,
        }
    }
}
