//! Static datasets used across harnesses.

use serde_json::{json, Value};

/// A small but realistic slice of the lubricant dataset: single- and
/// two-word makes, a make-only key, a look-alike make (`FORDSON`), a numeric
/// key, malformed entries, and every link-field shape.
pub fn sample_dataset() -> Value {
    json!({
        "FORD FOCUS": {
            "2010-2015": {
                "model_year_text": "Ford Focus 1.6 (2010-2015)",
                "engine_oil": "Magnatec 5W-20",
                "engine_oil_link": "shop.example/magnatec-5w-20",
                "gearbox_oil_link": "https://shop.example/transmax",
                "coolant_link": "acme.com/x",
                "brake_fluid_link": "Consult dealer",
                "pas_fluid_link": "://shop.example/pas"
            },
            "2004-2010": {
                "model_year_text": "Ford Focus 1.8 (2004-2010)",
                "engine_oil": "Magnatec 5W-30"
            }
        },
        "FORD": {
            "1932-1940": { "model_year_text": "Ford (1932-1940)", "engine_oil": "XL 20W/50" }
        },
        "FORDSON TRACTOR": {
            "1945-1964": { "engine_oil": "Classic XL30" }
        },
        "FORD KA": "see FORD FIESTA",
        "ALFA ROMEO GIULIA": {
            "1962-1978": { "engine_oil": "Classic XL 20W/50", "diff_oil_link": "shop.example/ep90" }
        },
        "Alfa Romeo Spider": {
            "1966-1993": { "engine_oil": "Classic XL 20W/50" }
        },
        "ALFA 33": {
            "1983-1994": { "engine_oil": "GTX 15W-40" }
        },
        "LAND ROVER DEFENDER": {
            "1983-2016": { "engine_oil": "GTX 15W-40", "gearbox_oil": "Classic EP90" },
            "2020-2024": "tbc"
        },
        "MG MIDGET": {
            "1961-1979": { "engine_oil": "Classic XL 20W/50" }
        },
        "1600 GT": {
            "1968-1972": { "engine_oil": "Classic XL 20W/50" }
        },
        "ROVER P5": {
            "1958-1973": { "engine_oil": "Classic XL 20W/50" }
        },
        "ROLLS ROYCE SILVER SHADOW": {
            "1965-1980": { "engine_oil": "Classic XL 20W/50" }
        }
    })
}

/// Categories derived from [`sample_dataset`].
pub const SAMPLE_CATEGORIES: &[&str] = &[
    "ALFA",
    "ALFA ROMEO",
    "FORD",
    "FORDSON",
    "LAND ROVER",
    "MG",
    "ROLLS ROYCE",
    "ROVER",
];

/// Write `value` as a JSON file in `dir` and return its path.
pub fn write_data_file(dir: &std::path::Path, value: &Value) -> std::path::PathBuf {
    let path = dir.join("data.json");
    std::fs::write(&path, serde_json::to_string_pretty(value).unwrap()).unwrap();
    path
}
