//! Meteor Core - Shared types library.
//!
//! This crate provides common types used across all Meteor Storefront
//! components:
//! - `store` - Catalog and slide data service (local fallback + remote store)
//! - `server` - Public JSON API
//! - `cli` - Command-line tools for seeding and inspection
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients, no
//! persistence. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, emails, and roles

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
