//! Flask modifier catalog types.
//!
//! A catalog is an ordered list of [`ModGroup`]s. Each group is a family of
//! modifiers sharing one description (the lookup key) and one generic
//! pattern, with one [`Mod`] per tier. Catalogs are produced by an external
//! data pipeline and are read-only here.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::settings::ItemLevel;

/// Description fragment identifying the flask effect duration family in
/// catalogs that carry no explicit [`ModKind`].
pub const EFFECT_DURATION_MARKER: &str = "reduced Duration";

/// Semantic category of a modifier group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModKind {
    /// Any group without special handling.
    General,
    /// The "increased effect, reduced duration" family whose tiers can be
    /// collapsed into one tier-agnostic match.
    EffectDuration,
}

impl ModKind {
    /// Returns the kind as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            ModKind::General => "general",
            ModKind::EffectDuration => "effect_duration",
        }
    }

    /// Classifies an untagged group by its description.
    pub fn infer(description: &str) -> Self {
        if description.contains(EFFECT_DURATION_MARKER) {
            ModKind::EffectDuration
        } else {
            ModKind::General
        }
    }
}

impl std::fmt::Display for ModKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One tier of a modifier group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mod {
    /// Minimum item level at which this tier can roll.
    pub level: u32,
    /// Pattern matching this tier only.
    pub regex: String,
}

impl Mod {
    /// Creates a new tier.
    pub fn new(level: u32, regex: impl Into<String>) -> Self {
        Self {
            level,
            regex: regex.into(),
        }
    }
}

/// A named family of modifiers with one or more tiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModGroup {
    /// Display text, also the lookup key used by selections.
    pub description: String,
    /// Pattern matching any tier of the group.
    pub regex: String,
    /// Lowest item level at which any tier unlocks.
    pub min_level: u32,
    /// Tiers in catalog order.
    pub mods: Vec<Mod>,
    /// Explicit category; inferred from the description when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<ModKind>,
}

impl ModGroup {
    /// Creates an untagged group.
    pub fn new(
        description: impl Into<String>,
        regex: impl Into<String>,
        min_level: u32,
        mods: Vec<Mod>,
    ) -> Self {
        Self {
            description: description.into(),
            regex: regex.into(),
            min_level,
            mods,
            kind: None,
        }
    }

    /// Tags the group with an explicit category.
    pub fn with_kind(mut self, kind: ModKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Returns the explicit category, or the one inferred from the description.
    pub fn kind(&self) -> ModKind {
        self.kind
            .unwrap_or_else(|| ModKind::infer(&self.description))
    }

    /// Returns the highest tier admitted by `ilevel`.
    ///
    /// Ties on level resolve to the tier that comes first in catalog order.
    pub fn max_tier(&self, ilevel: ItemLevel) -> Option<&Mod> {
        let mut best: Option<&Mod> = None;
        for tier in self.mods.iter().filter(|m| ilevel.admits(m.level)) {
            match best {
                Some(current) if current.level >= tier.level => {}
                _ => best = Some(tier),
            }
        }
        best
    }

    /// Returns the lowest tier level, if the group has any tiers.
    pub fn lowest_tier_level(&self) -> Option<u32> {
        self.mods.iter().map(|m| m.level).min()
    }
}

/// Read-only, ordered collection of modifier groups.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    groups: Vec<ModGroup>,
}

impl Catalog {
    /// Creates a catalog from groups in catalog order.
    pub fn new(groups: Vec<ModGroup>) -> Self {
        Self { groups }
    }

    /// Parses a catalog from a JSON array of groups.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Parses a catalog and rejects it if validation reports errors.
    pub fn from_json_validated(json: &str) -> Result<Self, CatalogError> {
        let catalog = Self::from_json(json)?;
        let result = crate::validation::validate_catalog(&catalog);
        if !result.is_ok() {
            return Err(CatalogError::Invalid(result.errors.len()));
        }
        Ok(catalog)
    }

    /// Reads and parses a catalog file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path)?;
        Ok(Self::from_json(&json)?)
    }

    /// Serializes the catalog to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Finds a group by exact description. The first match in catalog order wins.
    pub fn find(&self, description: &str) -> Option<&ModGroup> {
        self.groups.iter().find(|g| g.description == description)
    }

    /// Returns the first group classified as [`ModKind::EffectDuration`].
    pub fn effect_duration_group(&self) -> Option<&ModGroup> {
        self.groups
            .iter()
            .find(|g| g.kind() == ModKind::EffectDuration)
    }

    /// Iterates over groups in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &ModGroup> {
        self.groups.iter()
    }

    /// Returns the groups as a slice.
    pub fn groups(&self) -> &[ModGroup] {
        &self.groups
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl From<Vec<ModGroup>> for Catalog {
    fn from(groups: Vec<ModGroup>) -> Self {
        Self::new(groups)
    }
}

impl FromIterator<ModGroup> for Catalog {
    fn from_iter<I: IntoIterator<Item = ModGroup>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiered_group() -> ModGroup {
        ModGroup::new(
            "Instant Recovery",
            "inst",
            1,
            vec![Mod::new(1, "tier1"), Mod::new(40, "tier40"), Mod::new(60, "tier60")],
        )
    }

    #[test]
    fn test_max_tier_picks_highest_admitted() {
        let group = tiered_group();
        let tier = group.max_tier(ItemLevel::new(50)).unwrap();
        assert_eq!(tier.regex, "tier40");
        assert_eq!(group.max_tier(ItemLevel::new(60)).unwrap().level, 60);
        assert!(group.max_tier(ItemLevel::new(0)).is_none());
    }

    #[test]
    fn test_max_tier_tie_prefers_catalog_order() {
        let group = ModGroup::new(
            "Tied",
            "tied",
            10,
            vec![Mod::new(10, "first"), Mod::new(20, "a"), Mod::new(20, "b")],
        );
        assert_eq!(group.max_tier(ItemLevel::new(85)).unwrap().regex, "a");
    }

    #[test]
    fn test_kind_inference() {
        let group = ModGroup::new(
            "#% increased effect, #% reduced Duration",
            "ect",
            20,
            vec![Mod::new(20, "25% inc")],
        );
        assert_eq!(group.kind(), ModKind::EffectDuration);
        assert_eq!(tiered_group().kind(), ModKind::General);

        let tagged = tiered_group().with_kind(ModKind::EffectDuration);
        assert_eq!(tagged.kind(), ModKind::EffectDuration);
    }

    #[test]
    fn test_parse_catalog_json() {
        let json = r#"[
            {
                "description": "Instant Recovery",
                "regex": "inst",
                "minLevel": 5,
                "mods": [
                    { "level": 5, "regex": "inst5" },
                    { "level": 45, "regex": "inst45" }
                ]
            },
            {
                "description": "Effect",
                "regex": "ect",
                "minLevel": 20,
                "mods": [],
                "kind": "effect_duration"
            }
        ]"#;

        let catalog = Catalog::from_json(json).expect("should parse");
        assert_eq!(catalog.len(), 2);

        let group = catalog.find("Instant Recovery").unwrap();
        assert_eq!(group.min_level, 5);
        assert_eq!(group.mods.len(), 2);
        assert_eq!(group.lowest_tier_level(), Some(5));
        assert!(catalog.find("instant recovery").is_none());

        assert_eq!(
            catalog.effect_duration_group().unwrap().description,
            "Effect"
        );
    }

    #[test]
    fn test_json_round_trip() {
        let catalog: Catalog = vec![tiered_group()].into();
        let json = catalog.to_json_pretty().unwrap();
        assert!(json.contains("\"minLevel\""));
        assert!(!json.contains("\"kind\""));

        let parsed = Catalog::from_json(&json).unwrap();
        assert_eq!(catalog, parsed);
    }
}
