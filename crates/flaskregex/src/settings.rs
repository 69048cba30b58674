//! User selection settings.

use serde::{Deserialize, Serialize};

/// Item level assumed when the configured level is not a number.
pub const DEFAULT_ITEM_LEVEL: u32 = 85;

/// Item-level ceiling used to gate which tiers can appear.
///
/// Tier levels are integral, so the ceiling is stored floored. Negative
/// ceilings are representable and admit nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemLevel(i64);

impl ItemLevel {
    /// Creates an item level from a whole number.
    pub fn new(level: u32) -> Self {
        Self(i64::from(level))
    }

    /// Parses item-level text as typed by a user.
    ///
    /// Blank text is level 0, so nothing is admitted. `Infinity` admits
    /// every tier and `0x`/`0o`/`0b` integer literals are accepted.
    /// Other non-numeric or non-finite input falls back to
    /// [`DEFAULT_ITEM_LEVEL`]. Fractions are floored.
    pub fn parse(text: &str) -> Self {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Self(0);
        }
        match trimmed {
            "Infinity" | "+Infinity" => return Self(i64::MAX),
            "-Infinity" => return Self(i64::MIN),
            _ => {}
        }
        if let Some(value) = parse_radix_literal(trimmed) {
            return Self(value);
        }
        match trimmed.parse::<f64>() {
            Ok(value) if value.is_finite() => Self(value.floor() as i64),
            _ => Self::default(),
        }
    }

    /// Returns true if a tier unlocked at `level` can roll at this item level.
    pub fn admits(self, level: u32) -> bool {
        i64::from(level) <= self.0
    }

    /// Returns the floored ceiling.
    pub fn value(self) -> i64 {
        self.0
    }
}

impl Default for ItemLevel {
    fn default() -> Self {
        Self::new(DEFAULT_ITEM_LEVEL)
    }
}

impl From<u32> for ItemLevel {
    fn from(level: u32) -> Self {
        Self::new(level)
    }
}

impl std::fmt::Display for ItemLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parses an unsigned `0x`, `0o`, or `0b` integer literal.
fn parse_radix_literal(text: &str) -> Option<i64> {
    let lower = text.get(..2)?.to_ascii_lowercase();
    let radix = match lower.as_str() {
        "0x" => 16,
        "0o" => 8,
        "0b" => 2,
        _ => return None,
    };
    let digits = &text[2..];
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    Some(i64::from_str_radix(digits, radix).unwrap_or(i64::MAX))
}

fn default_ilevel() -> String {
    DEFAULT_ITEM_LEVEL.to_string()
}

/// Modifier selection and matching options for one pattern request.
///
/// Field names serialize in camelCase to match the settings documents the
/// selection UI stores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FlaskModSettings {
    /// Prefix group descriptions to match.
    pub prefix: Vec<String>,
    /// Suffix group descriptions to match.
    pub suffix: Vec<String>,
    /// Item level as entered; see [`ItemLevel::parse`].
    #[serde(default = "default_ilevel")]
    pub ilevel: String,
    /// Match only the highest admitted prefix tier instead of any tier.
    pub only_max_prefix_tier_mod: bool,
    /// Match only the highest admitted suffix tier instead of any tier.
    pub only_max_suffix_tier_mod: bool,
    /// Require a prefix AND a suffix match rather than either.
    pub match_both_prefix_and_suffix: bool,
    /// Collapse effect duration tiers into the group-wide pattern.
    pub ignore_effect_tiers: bool,
    /// Also accept flasks with an open prefix or suffix slot.
    pub match_open_prefix_suffix: bool,
}

impl Default for FlaskModSettings {
    fn default() -> Self {
        Self {
            prefix: Vec::new(),
            suffix: Vec::new(),
            ilevel: default_ilevel(),
            only_max_prefix_tier_mod: false,
            only_max_suffix_tier_mod: false,
            match_both_prefix_and_suffix: false,
            ignore_effect_tiers: false,
            match_open_prefix_suffix: false,
        }
    }
}

impl FlaskModSettings {
    /// Creates a new settings builder.
    pub fn builder() -> FlaskModSettingsBuilder {
        FlaskModSettingsBuilder::new()
    }

    /// Parses settings from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serializes the settings to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Returns the parsed item-level ceiling.
    pub fn item_level(&self) -> ItemLevel {
        ItemLevel::parse(&self.ilevel)
    }

    /// Returns true if any side asks for max-tier-only matching.
    pub fn wants_max_tier(&self) -> bool {
        self.only_max_prefix_tier_mod || self.only_max_suffix_tier_mod
    }
}

/// Builder for constructing [`FlaskModSettings`] instances.
#[derive(Debug, Clone, Default)]
pub struct FlaskModSettingsBuilder {
    settings: FlaskModSettings,
}

impl FlaskModSettingsBuilder {
    /// Creates a builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a prefix selection.
    pub fn prefix(mut self, description: impl Into<String>) -> Self {
        self.settings.prefix.push(description.into());
        self
    }

    /// Adds a suffix selection.
    pub fn suffix(mut self, description: impl Into<String>) -> Self {
        self.settings.suffix.push(description.into());
        self
    }

    /// Sets the item level text.
    pub fn ilevel(mut self, ilevel: impl Into<String>) -> Self {
        self.settings.ilevel = ilevel.into();
        self
    }

    /// Sets max-tier-only matching for prefixes.
    pub fn only_max_prefix_tier(mut self, enabled: bool) -> Self {
        self.settings.only_max_prefix_tier_mod = enabled;
        self
    }

    /// Sets max-tier-only matching for suffixes.
    pub fn only_max_suffix_tier(mut self, enabled: bool) -> Self {
        self.settings.only_max_suffix_tier_mod = enabled;
        self
    }

    /// Requires both a prefix and a suffix match.
    pub fn match_both(mut self, enabled: bool) -> Self {
        self.settings.match_both_prefix_and_suffix = enabled;
        self
    }

    /// Collapses effect duration tiers in the prefix pattern.
    pub fn ignore_effect_tiers(mut self, enabled: bool) -> Self {
        self.settings.ignore_effect_tiers = enabled;
        self
    }

    /// Also accepts open prefix or suffix slots.
    pub fn match_open(mut self, enabled: bool) -> Self {
        self.settings.match_open_prefix_suffix = enabled;
        self
    }

    /// Builds the settings.
    pub fn build(self) -> FlaskModSettings {
        self.settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_level_parse() {
        assert_eq!(ItemLevel::parse("50"), ItemLevel::new(50));
        assert_eq!(ItemLevel::parse(" 68 "), ItemLevel::new(68));
        assert_eq!(ItemLevel::parse("50.9"), ItemLevel::new(50));
        assert_eq!(ItemLevel::parse("-3").value(), -3);
    }

    #[test]
    fn test_item_level_defaults() {
        for text in ["abc", "12abc", "NaN", "inf", "infinity", "0x", "0xZZ"] {
            assert_eq!(
                ItemLevel::parse(text),
                ItemLevel::new(DEFAULT_ITEM_LEVEL),
                "expected default for {:?}",
                text
            );
        }
    }

    #[test]
    fn test_blank_item_level_is_zero() {
        for text in ["", "   ", "\t"] {
            assert_eq!(ItemLevel::parse(text).value(), 0, "text {:?}", text);
            assert!(!ItemLevel::parse(text).admits(1));
        }
    }

    #[test]
    fn test_item_level_infinity_and_radix_literals() {
        assert!(ItemLevel::parse("Infinity").admits(u32::MAX));
        assert!(ItemLevel::parse(" +Infinity ").admits(u32::MAX));
        assert!(!ItemLevel::parse("-Infinity").admits(0));
        assert_eq!(ItemLevel::parse("0x10"), ItemLevel::new(16));
        assert_eq!(ItemLevel::parse("0X1f"), ItemLevel::new(31));
        assert_eq!(ItemLevel::parse("0o17"), ItemLevel::new(15));
        assert_eq!(ItemLevel::parse("0b101"), ItemLevel::new(5));
    }

    #[test]
    fn test_item_level_admits() {
        let ilevel = ItemLevel::new(40);
        assert!(ilevel.admits(1));
        assert!(ilevel.admits(40));
        assert!(!ilevel.admits(41));
        assert!(!ItemLevel::parse("-1").admits(0));
    }

    #[test]
    fn test_settings_from_camel_case_json() {
        let json = r#"{
            "prefix": ["Instant Recovery"],
            "suffix": [],
            "ilevel": "60",
            "onlyMaxPrefixTierMod": true,
            "onlyMaxSuffixTierMod": false,
            "matchBothPrefixAndSuffix": true,
            "ignoreEffectTiers": false,
            "matchOpenPrefixSuffix": true
        }"#;

        let settings = FlaskModSettings::from_json(json).expect("should parse");
        assert_eq!(settings.prefix, vec!["Instant Recovery".to_string()]);
        assert!(settings.only_max_prefix_tier_mod);
        assert!(settings.match_both_prefix_and_suffix);
        assert!(settings.match_open_prefix_suffix);
        assert_eq!(settings.item_level(), ItemLevel::new(60));
    }

    #[test]
    fn test_settings_missing_fields_use_defaults() {
        let settings = FlaskModSettings::from_json("{}").unwrap();
        assert_eq!(settings, FlaskModSettings::default());
        assert_eq!(settings.ilevel, "85");
        assert!(!settings.wants_max_tier());
    }

    #[test]
    fn test_builder() {
        let settings = FlaskModSettings::builder()
            .prefix("A")
            .prefix("B")
            .suffix("C")
            .ilevel("72")
            .only_max_suffix_tier(true)
            .ignore_effect_tiers(true)
            .build();

        assert_eq!(settings.prefix, vec!["A".to_string(), "B".to_string()]);
        assert_eq!(settings.suffix, vec!["C".to_string()]);
        assert!(settings.only_max_suffix_tier_mod);
        assert!(settings.ignore_effect_tiers);
        assert!(settings.wants_max_tier());

        let json = settings.to_json().unwrap();
        assert!(json.contains("\"onlyMaxSuffixTierMod\":true"));
        assert_eq!(FlaskModSettings::from_json(&json).unwrap(), settings);
    }
}
