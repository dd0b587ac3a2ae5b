//! Integration tests for Meteor Storefront.
//!
//! # Test Categories
//!
//! - `store_local` - Drives the full data service in fallback mode
//!   against a scratch directory. Runs anywhere, no setup.
//! - `server_api` - HTTP tests against a running `meteor-server`.
//!   Ignored by default; start the server first:
//!
//! ```bash
//! cargo run -p meteor-server &
//! cargo test -p meteor-integration-tests -- --ignored
//! ```
