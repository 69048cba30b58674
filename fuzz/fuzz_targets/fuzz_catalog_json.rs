#![no_main]

use libfuzzer_sys::fuzz_target;

use flaskregex::{generate_flask_output, min_item_level, validate_catalog, Catalog, FlaskModSettings};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let (catalog_json, settings_json) = text.split_once('\n').unwrap_or((text, "{}"));

    let Ok(catalog) = Catalog::from_json(catalog_json) else {
        return;
    };
    let _ = validate_catalog(&catalog);

    let settings = FlaskModSettings::from_json(settings_json).unwrap_or_default();
    let _ = generate_flask_output(&catalog, &settings);
    let _ = min_item_level(&catalog, &settings);
});
