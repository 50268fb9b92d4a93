pub mod auth;
pub mod products;
pub mod reviews;
pub mod settings;
