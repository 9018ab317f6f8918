//! Integration tests for Hibhana.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p hibhana-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `storefront_catalog` - Firestore document decoding into catalog types
//! - `storefront_cart` - Cart line merging, totals, and removal semantics
//! - `admin_documents` - Back-office input validation and wire encoding
//! - `publish_pipeline` - Admin-encoded documents read back through the storefront
//!
//! Everything here is network-free: the tests exercise the conversion and
//! validation layers against realistic Firestore REST payloads captured as
//! inline JSON. Live-service coverage (Firestore, Firebase Auth, Cloudinary)
//! requires credentials and runs outside CI.
