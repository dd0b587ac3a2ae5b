//! Meteor Store - Catalog and slide data service.
//!
//! This crate is the data-access layer of Meteor Storefront. It exposes a
//! uniform create/read/update/delete contract over two record types
//! (products and carousel slides), transparently backed by one of two
//! stores selected once at startup:
//!
//! - **Remote mode**: a hosted row-store reached over a PostgREST-style
//!   REST API, when both `METEOR_REMOTE_URL` and `METEOR_REMOTE_KEY` are
//!   configured.
//! - **Fallback mode**: a local JSON key-value store seeded with sample
//!   data on first use, when either value is absent.
//!
//! The backing store is an injected capability ([`backend::RecordStore`]);
//! nothing in this crate consults ambient global state after construction.
//!
//! # Demo authentication
//!
//! [`auth::AuthService`] implements the demo login/register flow: two
//! hardcoded identities plus a locally persisted registered-user list with
//! **plaintext passwords**. This is demo scaffolding, not a security
//! model - do not reuse it outside a demo deployment.
//!
//! # Example
//!
//! ```rust,ignore
//! use meteor_store::{Store, StoreConfig};
//!
//! let config = StoreConfig::from_env()?;
//! let store = Store::connect(&config)?;
//!
//! let products = store.products().get_all().await?;
//! let identity = store.auth().login("admin@store.com", "admin123").await?;
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod auth;
pub mod backend;
pub mod browse;
pub mod cart;
pub mod checkout;
pub mod config;
pub mod error;
pub mod ids;
pub mod local;
pub mod models;
pub mod record;
pub mod remote;
pub mod service;
pub mod session;

pub use auth::{AuthError, AuthService};
pub use backend::RecordStore;
pub use cart::{Cart, CartLine};
pub use checkout::{Checkout, CheckoutError, OrderConfirmation, ShippingDetails};
pub use config::{ConfigError, RemoteConfig, StoreConfig};
pub use error::StoreError;
pub use models::{Identity, NewProduct, NewSlide, Product, ProductPatch, Slide, SlidePatch};
pub use record::Record;
pub use service::{Mode, RecordService, Store};
pub use session::SessionStore;
