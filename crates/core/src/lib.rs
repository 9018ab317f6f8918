//! Hibhana Core - Shared types library.
//!
//! This crate provides common types used across all Hibhana components:
//! - `storefront` - Public-facing catalog API
//! - `admin` - Internal back-office API
//! - `cli` - Command-line tools for migrations and seeding
//!
//! # Architecture
//!
//! The core crate contains only types and pure data transforms - no I/O, no
//! database access, no HTTP clients. This keeps it lightweight and allows it
//! to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, slugs, prices, emails,
//!   and campaign date windows
//! - [`firestore`] - Firestore REST document value encoding and decoding

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod firestore;
pub mod types;

pub use types::*;
