//! Search pattern composition.
//!
//! Resolved prefix and suffix patterns are combined into the quoted search
//! string understood by the in-game stash search. Each quoted clause is a
//! separate term for the search engine: clauses separated by a space must
//! all match, clauses separated by `|` are alternatives.

use std::borrow::Cow;

use regex::{NoExpand, Regex};
use tracing::{debug, warn};

use crate::catalog::Catalog;
use crate::resolve::{lookup, resolve_pattern};
use crate::settings::{FlaskModSettings, ItemLevel};

/// Matches any flask whose name starts with a magic prefix word, i.e. a flask
/// that may still have an open prefix slot.
pub const OPEN_PREFIX: &str = "^[a-z]+ Flask";

/// Matches a flask name ending in "Flask", i.e. one without a suffix.
pub const OPEN_SUFFIX: &str = "Flask$";

/// A composed search filter, one variant per output shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterExpression {
    /// Nothing selected resolved to a pattern.
    Empty,
    /// Prefix patterns only, optionally also accepting an open prefix.
    Prefix { prefix: String, open: bool },
    /// Suffix patterns only, optionally also accepting an open suffix.
    Suffix { suffix: String, open: bool },
    /// Either a prefix or a suffix pattern, in one clause.
    Either { prefix: String, suffix: String },
    /// A prefix clause and a suffix clause that must both match.
    Both {
        prefix: String,
        suffix: String,
        open: bool,
    },
}

impl FilterExpression {
    /// Picks the output shape for the given joined patterns and flags.
    ///
    /// `match_both` only matters when both patterns are non-empty.
    pub fn compose(prefix: String, suffix: String, match_both: bool, match_open: bool) -> Self {
        match (prefix.is_empty(), suffix.is_empty()) {
            (false, false) if match_both => FilterExpression::Both {
                prefix,
                suffix,
                open: match_open,
            },
            (false, false) => FilterExpression::Either { prefix, suffix },
            (false, true) => FilterExpression::Prefix {
                prefix,
                open: match_open,
            },
            (true, false) => FilterExpression::Suffix {
                suffix,
                open: match_open,
            },
            (true, true) => FilterExpression::Empty,
        }
    }

    /// Returns true if the expression renders to an empty string.
    pub fn is_empty(&self) -> bool {
        matches!(self, FilterExpression::Empty)
    }
}

impl std::fmt::Display for FilterExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FilterExpression::Empty => Ok(()),
            FilterExpression::Prefix { prefix, open } => {
                write!(f, "\"{}\"", prefix)?;
                if *open {
                    write!(f, "|\"{}\"", OPEN_PREFIX)?;
                }
                Ok(())
            }
            FilterExpression::Suffix { suffix, open } => {
                write!(f, "\"{}\"", suffix)?;
                if *open {
                    write!(f, "|\"{}\"", OPEN_SUFFIX)?;
                }
                Ok(())
            }
            FilterExpression::Either { prefix, suffix } => {
                write!(f, "\"{}|{}\"", prefix, suffix)
            }
            FilterExpression::Both {
                prefix,
                suffix,
                open: true,
            } => write!(
                f,
                "\"{}\"|\"{}\" \"{}\"|\"{}\"",
                prefix, OPEN_PREFIX, suffix, OPEN_SUFFIX
            ),
            FilterExpression::Both {
                prefix,
                suffix,
                open: false,
            } => write!(f, "\"{}\" \"{}\"", prefix, suffix),
        }
    }
}

/// Resolves each named group and joins the surviving patterns with `|`.
fn join_patterns<S: AsRef<str>>(
    names: &[S],
    catalog: &Catalog,
    ilevel: ItemLevel,
    only_max_tier: bool,
) -> String {
    lookup(names, catalog)
        .filter_map(|group| resolve_pattern(group, ilevel, only_max_tier))
        .collect::<Vec<_>>()
        .join("|")
}

/// Replaces the first effect duration tier pattern found in `pattern` with
/// the group-wide effect duration pattern.
///
/// Returns `pattern` unchanged when `ignore_effect_tiers` is off, when the
/// catalog has no effect duration group or that group has no tiers, or when
/// the combined tier pattern does not compile.
pub fn collapse_effect_tiers<'p>(
    pattern: &'p str,
    catalog: &Catalog,
    ignore_effect_tiers: bool,
) -> Cow<'p, str> {
    if !ignore_effect_tiers {
        return Cow::Borrowed(pattern);
    }
    let Some(group) = catalog.effect_duration_group() else {
        debug!(target: "flaskregex::compose", "catalog has no effect duration group");
        return Cow::Borrowed(pattern);
    };
    if group.mods.is_empty() {
        return Cow::Borrowed(pattern);
    }

    let combined = group
        .mods
        .iter()
        .map(|tier| tier.regex.as_str())
        .collect::<Vec<_>>()
        .join("|");
    match Regex::new(&combined) {
        Ok(tiers) => tiers.replace(pattern, NoExpand(&group.regex)),
        Err(err) => {
            warn!(
                target: "flaskregex::compose",
                group = %group.description,
                error = %err,
                "effect duration tier patterns do not compile"
            );
            Cow::Borrowed(pattern)
        }
    }
}

/// Builds the filter expression for the given selections.
///
/// Unknown names and groups with nothing admitted at the item level are
/// skipped.
pub fn generate_pattern<S: AsRef<str>>(
    prefixes: &[S],
    suffixes: &[S],
    catalog: &Catalog,
    settings: &FlaskModSettings,
) -> FilterExpression {
    let ilevel = settings.item_level();
    let prefix = join_patterns(prefixes, catalog, ilevel, settings.only_max_prefix_tier_mod);
    let suffix = join_patterns(suffixes, catalog, ilevel, settings.only_max_suffix_tier_mod);
    let prefix = collapse_effect_tiers(&prefix, catalog, settings.ignore_effect_tiers).into_owned();

    FilterExpression::compose(
        prefix,
        suffix,
        settings.match_both_prefix_and_suffix,
        settings.match_open_prefix_suffix,
    )
}

/// Generates the search string for a settings document.
///
/// # Example
/// ```
/// use flaskregex::{generate_flask_output, Catalog, FlaskModSettings, Mod, ModGroup};
///
/// let catalog = Catalog::new(vec![
///     ModGroup::new("Instant Recovery", "inst", 1, vec![Mod::new(1, "inst")]),
///     ModGroup::new("Bleeding Immunity", "bleed", 1, vec![Mod::new(1, "bleed")]),
/// ]);
/// let settings = FlaskModSettings::builder()
///     .prefix("Instant Recovery")
///     .suffix("Bleeding Immunity")
///     .match_both(true)
///     .build();
///
/// assert_eq!(generate_flask_output(&catalog, &settings), r#""inst" "bleed""#);
/// ```
pub fn generate_flask_output(catalog: &Catalog, settings: &FlaskModSettings) -> String {
    generate_pattern(&settings.prefix, &settings.suffix, catalog, settings).to_string()
}
