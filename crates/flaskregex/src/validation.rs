//! Catalog validation logic.
//!
//! The pattern functions assume a well-formed catalog and never fail. This
//! module lets the pipeline that produces a catalog check it up front.


use std::collections::{HashMap, HashSet};

use regex::Regex;

use crate::catalog::{Catalog, ModGroup, ModKind};
use crate::error::{ErrorCode, ValidationError, ValidationResult, ValidationWarning, WarningCode};

/// Validates a catalog and returns a validation result.
///
/// # Example
/// ```
/// use flaskregex::{Catalog, Mod, ModGroup};
/// use flaskregex::validation::validate_catalog;
///
/// let catalog = Catalog::new(vec![ModGroup::new(
///     "Instant Recovery",
///     "inst",
///     5,
///     vec![Mod::new(5, "inst")],
/// )]);
///
/// let result = validate_catalog(&catalog);
/// assert!(result.is_ok());
/// ```
pub fn validate_catalog(catalog: &Catalog) -> ValidationResult {
    let mut result = ValidationResult::default();
    let mut seen: HashMap<&str, usize> = HashMap::new();

    for (index, group) in catalog.iter().enumerate() {
        let path = format!("groups[{}]", index);
        validate_description(group, &path, &mut seen, index, &mut result);
        validate_group_regex(group, &path, &mut result);
        validate_tiers(group, &path, &mut result);
    }

    check_effect_duration_groups(catalog, &mut result);

    result
}

/// Validates that the description is present and unique.
fn validate_description<'c>(
    group: &'c ModGroup,
    path: &str,
    seen: &mut HashMap<&'c str, usize>,
    index: usize,
    result: &mut ValidationResult,
) {
    if group.description.trim().is_empty() {
        result.add_error(ValidationError::with_path(
            ErrorCode::EmptyDescription,
            "description must not be blank",
            format!("{}.description", path),
        ));
        return;
    }

    if let Some(first) = seen.get(group.description.as_str()) {
        result.add_error(ValidationError::with_path(
            ErrorCode::DuplicateDescription,
            format!(
                "description '{}' already used by groups[{}]",
                group.description, first
            ),
            format!("{}.description", path),
        ));
    } else {
        seen.insert(&group.description, index);
    }
}

/// Validates the group-wide pattern.
fn validate_group_regex(group: &ModGroup, path: &str, result: &mut ValidationResult) {
    if let Err(err) = Regex::new(&group.regex) {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidGroupRegex,
            format!("regex '{}' does not compile: {}", group.regex, err),
            format!("{}.regex", path),
        ));
    }
}

/// Validates tier patterns and level bookkeeping.
fn validate_tiers(group: &ModGroup, path: &str, result: &mut ValidationResult) {
    if group.mods.is_empty() {
        result.add_error(ValidationError::with_path(
            ErrorCode::NoTiers,
            format!("group '{}' has no tiers", group.description),
            format!("{}.mods", path),
        ));
        return;
    }

    let mut levels = HashSet::new();
    for (index, tier) in group.mods.iter().enumerate() {
        let tier_path = format!("{}.mods[{}]", path, index);
        if let Err(err) = Regex::new(&tier.regex) {
            result.add_error(ValidationError::with_path(
                ErrorCode::InvalidTierRegex,
                format!("regex '{}' does not compile: {}", tier.regex, err),
                format!("{}.regex", tier_path),
            ));
        }
        if !levels.insert(tier.level) {
            result.add_warning(ValidationWarning::with_path(
                WarningCode::DuplicateTierLevel,
                format!(
                    "level {} appears more than once; the first tier in catalog order wins",
                    tier.level
                ),
                format!("{}.level", tier_path),
            ));
        }
    }

    if let Some(lowest) = group.lowest_tier_level() {
        if lowest != group.min_level {
            result.add_warning(ValidationWarning::with_path(
                WarningCode::MinLevelMismatch,
                format!(
                    "minLevel is {} but the lowest tier unlocks at {}",
                    group.min_level, lowest
                ),
                format!("{}.minLevel", path),
            ));
        }
    }
}

/// Warns when tier collapse would have to choose between several groups.
fn check_effect_duration_groups(catalog: &Catalog, result: &mut ValidationResult) {
    let indices: Vec<usize> = catalog
        .iter()
        .enumerate()
        .filter(|(_, g)| g.kind() == ModKind::EffectDuration)
        .map(|(i, _)| i)
        .collect();

    if indices.len() > 1 {
        result.add_warning(ValidationWarning::new(
            WarningCode::MultipleEffectDurationGroups,
            format!(
                "{} effect duration groups found; only groups[{}] is used",
                indices.len(),
                indices[0]
            ),
        ));
    }
}
