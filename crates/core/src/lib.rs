//! Vitrine Core - Shared domain types.
//!
//! This crate provides the catalog types used by the storefront and its
//! integration tests:
//! - [`Product`] - A catalog entry as served by the remote catalog API
//! - [`Price`] - Non-negative decimal amount with dollar formatting
//! - [`Category`] - Category tag
//! - [`ProductId`] - Type-safe product identity
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients, no templates.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
