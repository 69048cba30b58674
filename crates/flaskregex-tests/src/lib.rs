//! flaskregex Integration Test Infrastructure
//!
//! This crate holds fixture catalogs shared by the integration tests:
//!
//! - Output: search strings for every combination of matching flags
//! - Item level: minimum item level for selected max tiers
//! - Validation: catalog checks on fixture and broken catalogs
//! - Properties: `proptest` checks over arbitrary selections
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p flaskregex-tests
//! ```

pub mod fixtures;

pub use fixtures::{flask_catalog, settings, EFFECT_DURATION, FLASK_CATALOG_JSON};
