//! Fixture catalogs modeled on the flask modifier table.

use flaskregex::{Catalog, FlaskModSettings, FlaskModSettingsBuilder};

/// Description of the effect duration group in [`FLASK_CATALOG_JSON`].
pub const EFFECT_DURATION: &str = "#% increased effect, #% reduced Duration";

/// A small flask catalog in the JSON shape the data pipeline emits.
///
/// Prefixes: charge recovery, instant recovery, effect duration.
/// Suffixes: bleeding immunity, freeze immunity, armour.
pub const FLASK_CATALOG_JSON: &str = r##"[
    {
        "description": "#% increased Charge Recovery",
        "regex": "cha",
        "minLevel": 1,
        "mods": [
            { "level": 1, "regex": "d's" },
            { "level": 20, "regex": "ati" },
            { "level": 41, "regex": "ou" },
            { "level": 62, "regex": "ex" }
        ]
    },
    {
        "description": "Instant Recovery",
        "regex": "inst",
        "minLevel": 5,
        "mods": [
            { "level": 5, "regex": "ca" },
            { "level": 45, "regex": "cat" }
        ]
    },
    {
        "description": "#% increased effect, #% reduced Duration",
        "regex": "ct,",
        "minLevel": 20,
        "mods": [
            { "level": 20, "regex": "25% inc" },
            { "level": 40, "regex": "29% inc" },
            { "level": 60, "regex": "33% inc" }
        ]
    },
    {
        "description": "Immunity to Bleeding and Corrupted Blood",
        "regex": "bleed",
        "minLevel": 8,
        "mods": [
            { "level": 8, "regex": "stau" },
            { "level": 60, "regex": "ion$" }
        ]
    },
    {
        "description": "Immunity to Freeze and Chill",
        "regex": "frz",
        "minLevel": 4,
        "mods": [
            { "level": 4, "regex": "ater" },
            { "level": 60, "regex": "ima" }
        ]
    },
    {
        "description": "+# to Armour during Effect",
        "regex": "arm",
        "minLevel": 70,
        "mods": [
            { "level": 70, "regex": "rmou" }
        ]
    }
]"##;

/// Parses [`FLASK_CATALOG_JSON`].
pub fn flask_catalog() -> Catalog {
    Catalog::from_json(FLASK_CATALOG_JSON).expect("fixture catalog is valid JSON")
}

/// Starts a settings builder; shorthand for tests.
pub fn settings() -> FlaskModSettingsBuilder {
    FlaskModSettings::builder()
}
