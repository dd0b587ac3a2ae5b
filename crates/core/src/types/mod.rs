//! Core types for Meteor Storefront.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod category;
pub mod email;
pub mod id;
pub mod price;
pub mod role;

pub use category::{CATEGORIES, is_known_category};
pub use email::{Email, EmailError};
pub use id::*;
pub use price::{Price, PriceError};
pub use role::Role;
