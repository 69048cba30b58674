//! Flask Modifier Search Patterns
//!
//! This crate turns a selection of flask modifiers into the quoted search
//! string used to highlight matching flasks in the in-game stash, and
//! computes the item level a flask needs for the selected top tiers.
//!
//! # Overview
//!
//! - **Catalog**: the read-only table of modifier groups and their tiers,
//!   supplied by the caller (usually loaded from JSON).
//! - **Settings**: the user's prefix/suffix selection, item level, and
//!   matching flags.
//! - **Resolver**: picks a tier (or the group-wide pattern) per selected
//!   group, gated by item level.
//! - **Composer**: joins the resolved patterns into one search string.
//!
//! # Example
//!
//! ```
//! use flaskregex::{generate_flask_output, min_item_level};
//! use flaskregex::{Catalog, FlaskModSettings, Mod, ModGroup};
//!
//! let catalog = Catalog::new(vec![
//!     ModGroup::new(
//!         "Instant Recovery",
//!         "inst",
//!         5,
//!         vec![Mod::new(5, "inst5"), Mod::new(45, "inst45")],
//!     ),
//!     ModGroup::new(
//!         "Bleeding Immunity",
//!         "bleed",
//!         8,
//!         vec![Mod::new(8, "bleed8"), Mod::new(60, "bleed60")],
//!     ),
//! ]);
//!
//! let settings = FlaskModSettings::builder()
//!     .prefix("Instant Recovery")
//!     .suffix("Bleeding Immunity")
//!     .ilevel("70")
//!     .only_max_prefix_tier(true)
//!     .match_both(true)
//!     .build();
//!
//! assert_eq!(generate_flask_output(&catalog, &settings), r#""inst45" "bleed""#);
//! assert_eq!(
//!     min_item_level(&catalog, &settings).map(|l| l.to_string()),
//!     Some("minimum flask item level: 45".to_string())
//! );
//! ```
//!
//! # Modules
//!
//! - [`catalog`]: Modifier group and tier types
//! - [`settings`]: Selection settings and item-level parsing
//! - [`resolve`]: Tier resolution and minimum item level
//! - [`compose`]: Search string composition
//! - [`validation`]: Catalog validation
//! - [`error`]: Error and warning types

pub mod catalog;
pub mod compose;
pub mod error;
pub mod resolve;
pub mod settings;
pub mod validation;

// Re-export commonly used types at the crate root
pub use catalog::{Catalog, Mod, ModGroup, ModKind, EFFECT_DURATION_MARKER};
pub use compose::{
    collapse_effect_tiers, generate_flask_output, generate_pattern, FilterExpression, OPEN_PREFIX,
    OPEN_SUFFIX,
};
pub use error::{
    CatalogError, ErrorCode, ValidationError, ValidationResult, ValidationWarning, WarningCode,
};
pub use resolve::{
    compute_minimum_item_level, min_item_level, resolve_pattern, resolve_tier_level,
    MinimumItemLevel,
};
pub use settings::{FlaskModSettings, FlaskModSettingsBuilder, ItemLevel, DEFAULT_ITEM_LEVEL};
pub use validation::validate_catalog;
