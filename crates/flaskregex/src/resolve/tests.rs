//! Resolver tests.

use crate::catalog::{Catalog, Mod, ModGroup};
use crate::resolve::*;
use crate::settings::{FlaskModSettings, ItemLevel};

fn make_catalog() -> Catalog {
    Catalog::new(vec![
        ModGroup::new(
            "A",
            "group-a",
            1,
            vec![Mod::new(1, "a1"), Mod::new(40, "a40"), Mod::new(60, "a60")],
        ),
        ModGroup::new(
            "B",
            "group-b",
            30,
            vec![Mod::new(30, "b30"), Mod::new(75, "b75")],
        ),
    ])
}

fn group<'c>(catalog: &'c Catalog, name: &str) -> &'c ModGroup {
    catalog.find(name).expect("fixture group")
}

#[test]
fn test_resolve_tier_level() {
    let catalog = make_catalog();
    let a = group(&catalog, "A");
    assert_eq!(resolve_tier_level(a, ItemLevel::new(50)), Some(40));
    assert_eq!(resolve_tier_level(a, ItemLevel::new(85)), Some(60));
    assert_eq!(resolve_tier_level(a, ItemLevel::new(1)), Some(1));
    assert_eq!(resolve_tier_level(a, ItemLevel::new(0)), None);
}

#[test]
fn test_resolve_pattern_max_tier() {
    let catalog = make_catalog();
    let a = group(&catalog, "A");
    assert_eq!(resolve_pattern(a, ItemLevel::new(50), true), Some("a40"));
    assert_eq!(resolve_pattern(a, ItemLevel::new(0), true), None);
}

#[test]
fn test_resolve_pattern_any_tier() {
    let catalog = make_catalog();
    let b = group(&catalog, "B");
    assert_eq!(resolve_pattern(b, ItemLevel::new(30), false), Some("group-b"));
    assert_eq!(resolve_pattern(b, ItemLevel::new(29), false), None);
}

#[test]
fn test_resolve_pattern_any_tier_uses_min_level_not_tiers() {
    // minLevel gates the generic pattern even when it disagrees with the tiers
    let g = ModGroup::new("C", "group-c", 50, vec![Mod::new(10, "c10")]);
    assert_eq!(resolve_pattern(&g, ItemLevel::new(20), false), None);
    assert_eq!(resolve_pattern(&g, ItemLevel::new(20), true), Some("c10"));
}

#[test]
fn test_minimum_requires_a_flag() {
    let catalog = make_catalog();
    let result =
        compute_minimum_item_level(&["A"], &["B"], &catalog, ItemLevel::new(85), false, false);
    assert_eq!(result, None);
}

#[test]
fn test_minimum_prefix_only() {
    let catalog = make_catalog();
    let result = compute_minimum_item_level(&["A"], &[], &catalog, ItemLevel::new(50), true, false);
    assert_eq!(result, Some(MinimumItemLevel(40)));
    assert_eq!(result.unwrap().label(), "minimum flask item level: 40");
}

#[test]
fn test_minimum_ignores_unflagged_side() {
    let catalog = make_catalog();
    let result =
        compute_minimum_item_level(&["A"], &["B"], &catalog, ItemLevel::new(85), true, false);
    assert_eq!(result, Some(MinimumItemLevel(60)));
}

#[test]
fn test_minimum_takes_max_across_sides() {
    let catalog = make_catalog();
    let result =
        compute_minimum_item_level(&["A"], &["B"], &catalog, ItemLevel::new(85), true, true);
    assert_eq!(result, Some(MinimumItemLevel(75)));
}

#[test]
fn test_minimum_flagged_empty_side_is_absent() {
    let catalog = make_catalog();
    let result = compute_minimum_item_level(&["A"], &[], &catalog, ItemLevel::new(85), true, true);
    assert_eq!(result, None);

    let result = compute_minimum_item_level(&[], &["B"], &catalog, ItemLevel::new(85), true, true);
    assert_eq!(result, None);
}

#[test]
fn test_minimum_flagged_side_with_no_resolved_levels_is_absent() {
    let catalog = make_catalog();
    // Unknown name only
    let result =
        compute_minimum_item_level(&["Nope"], &[], &catalog, ItemLevel::new(85), true, false);
    assert_eq!(result, None);

    // Every tier of B is above the item level
    let result =
        compute_minimum_item_level(&["A"], &["B"], &catalog, ItemLevel::new(20), true, true);
    assert_eq!(result, None);
}

#[test]
fn test_minimum_skips_unknown_names() {
    let catalog = make_catalog();
    let result = compute_minimum_item_level(
        &["Nope", "A"],
        &[],
        &catalog,
        ItemLevel::new(85),
        true,
        false,
    );
    assert_eq!(result, Some(MinimumItemLevel(60)));
}

#[test]
fn test_min_item_level_parses_ilevel() {
    let catalog = make_catalog();
    let settings = FlaskModSettings::builder()
        .prefix("A")
        .ilevel("not a number")
        .only_max_prefix_tier(true)
        .build();
    // Falls back to 85
    assert_eq!(min_item_level(&catalog, &settings), Some(MinimumItemLevel(60)));
}
