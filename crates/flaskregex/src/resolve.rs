//! Tier and item-level resolution for selected modifier groups.

use tracing::{debug, trace};

use crate::catalog::{Catalog, ModGroup};
use crate::settings::{FlaskModSettings, ItemLevel};

/// Lowest item level a flask must have for every selected max tier to roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MinimumItemLevel(pub u32);

impl MinimumItemLevel {
    /// Returns the numeric level.
    pub fn level(self) -> u32 {
        self.0
    }

    /// Returns the display label, e.g. `minimum flask item level: 60`.
    pub fn label(self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for MinimumItemLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "minimum flask item level: {}", self.0)
    }
}

/// Returns the level of the highest tier admitted by `ilevel`.
///
/// Returns `None` when `ilevel` is below every tier of the group.
pub fn resolve_tier_level(group: &ModGroup, ilevel: ItemLevel) -> Option<u32> {
    group.max_tier(ilevel).map(|tier| tier.level)
}

/// Returns the pattern to search for a group at the given item level.
///
/// With `only_max_tier` the pattern of the highest admitted tier is used.
/// Otherwise the group-wide pattern is used once the group is unlocked.
pub fn resolve_pattern(group: &ModGroup, ilevel: ItemLevel, only_max_tier: bool) -> Option<&str> {
    let pattern = if only_max_tier {
        group.max_tier(ilevel).map(|tier| tier.regex.as_str())
    } else if ilevel.admits(group.min_level) {
        Some(group.regex.as_str())
    } else {
        None
    };
    trace!(
        target: "flaskregex::resolve",
        group = %group.description,
        %ilevel,
        only_max_tier,
        resolved = pattern.is_some(),
        "resolved group pattern"
    );
    pattern
}

/// Looks up each name in the catalog, skipping names with no matching group.
pub(crate) fn lookup<'c, S: AsRef<str> + 'c>(
    names: &'c [S],
    catalog: &'c Catalog,
) -> impl Iterator<Item = &'c ModGroup> + 'c {
    names.iter().filter_map(move |name| {
        let name = name.as_ref();
        let group = catalog.find(name);
        if group.is_none() {
            debug!(target: "flaskregex::resolve", name, "skipping unknown modifier group");
        }
        group
    })
}

/// Computes the item level implied by the selected max tiers.
///
/// Only sides whose max-tier flag is set contribute. Returns `None` when
/// neither flag is set, or when a flagged side resolves no tier level at
/// all (empty selection, unknown names, or every tier above `ilevel`).
pub fn compute_minimum_item_level<S: AsRef<str>>(
    prefixes: &[S],
    suffixes: &[S],
    catalog: &Catalog,
    ilevel: ItemLevel,
    only_max_prefix_tier: bool,
    only_max_suffix_tier: bool,
) -> Option<MinimumItemLevel> {
    if !only_max_prefix_tier && !only_max_suffix_tier {
        return None;
    }

    let mut floor: Option<u32> = None;
    for (names, enabled) in [
        (prefixes, only_max_prefix_tier),
        (suffixes, only_max_suffix_tier),
    ] {
        if !enabled {
            continue;
        }
        let side_max = lookup(names, catalog)
            .filter_map(|group| resolve_tier_level(group, ilevel))
            .max()?;
        floor = Some(floor.map_or(side_max, |current| current.max(side_max)));
    }

    floor.map(MinimumItemLevel)
}

/// Computes the minimum flask item level for a settings document.
///
/// # Example
/// ```
/// use flaskregex::{min_item_level, Catalog, FlaskModSettings, Mod, ModGroup};
///
/// let catalog = Catalog::new(vec![ModGroup::new(
///     "Instant Recovery",
///     "inst",
///     1,
///     vec![Mod::new(1, "t1"), Mod::new(40, "t40"), Mod::new(60, "t60")],
/// )]);
/// let settings = FlaskModSettings::builder()
///     .prefix("Instant Recovery")
///     .ilevel("50")
///     .only_max_prefix_tier(true)
///     .build();
///
/// let level = min_item_level(&catalog, &settings).unwrap();
/// assert_eq!(level.to_string(), "minimum flask item level: 40");
/// ```
pub fn min_item_level(catalog: &Catalog, settings: &FlaskModSettings) -> Option<MinimumItemLevel> {
    compute_minimum_item_level(
        &settings.prefix,
        &settings.suffix,
        catalog,
        settings.item_level(),
        settings.only_max_prefix_tier_mod,
        settings.only_max_suffix_tier_mod,
    )
}

#[cfg(test)]
mod tests;
