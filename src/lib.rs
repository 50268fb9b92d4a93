//! Texpress storefront core: catalog, cart, reviews, user session and display
//! settings, all persisted through a pluggable key/value store. A presentation
//! layer dispatches intents into [`services`] and renders from
//! [`state::Storefront`].

pub mod auth;
pub mod checkout;
pub mod config;
pub mod describe;
pub mod dto;
pub mod error;
pub mod models;
pub mod pricing;
pub mod services;
pub mod state;
pub mod store;
