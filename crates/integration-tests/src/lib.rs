//! Integration tests for the Ilara storefront.
//!
//! The tests build the full application router (routes plus the session
//! layer) against a fixture catalog and drive it in-process with
//! `tower::ServiceExt::oneshot`. No server, no network, no database.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p ilara-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `storefront_pages` - Page rendering and catalog degradation
//! - `cart_flow` - Add/merge/remove and the order submission flow

#![cfg_attr(not(test), forbid(unsafe_code))]
