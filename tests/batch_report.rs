//! Batch runs over parts lists on disk.
//!
//! These tests write JSON and CSV parts lists to a temporary directory, run
//! the batch predictor over them and check the report roll-up.

use std::path::Path;

use ramstk_predict::batch::{self, BatchOptions};
use ramstk_predict::error::BatchError;
use tempfile::TempDir;

const RELAYS_JSON: &str = r#"[
    {
        "hardware_id": 1,
        "ref_des": "K1",
        "category_id": 6,
        "subcategory_id": 1,
        "type_id": 2,
        "quality_id": 2,
        "environment_active_id": 1,
        "environment_dormant_id": 2
    },
    {
        "hardware_id": 2,
        "ref_des": "U1",
        "category_id": 1,
        "subcategory_id": 1
    }
]"#;

const FUSES_CSV: &str = "\
hardware_id,ref_des,category_id,subcategory_id,quality_id,environment_active_id,environment_dormant_id,quantity
3,F1,10,3,1,1,2,2
";

fn approx_eq(a: f64, b: f64, tolerance: f64) -> bool {
    (a - b).abs() < tolerance
}

fn write(dir: &Path, name: &str, contents: &str) {
    std::fs::write(dir.join(name), contents).unwrap();
}

fn pattern(dir: &TempDir, glob: &str) -> String {
    dir.path().join(glob).to_string_lossy().into_owned()
}

#[test]
fn json_and_csv_inputs_roll_up() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "relays.json", RELAYS_JSON);
    write(dir.path(), "fuses.csv", FUSES_CSV);

    let report = batch::run(&[pattern(&dir, "*")], &BatchOptions::default()).unwrap();

    assert_eq!(report.totals.n_parts, 2);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].ref_des, "U1");

    // Files are processed in sorted order: fuses.csv before relays.json.
    let categories: Vec<_> = report.totals.by_category.keys().cloned().collect();
    assert_eq!(categories, ["Miscellaneous", "Relay"]);

    let fuse = &report.parts[0];
    assert_eq!(fuse.attributes.ref_des, "F1");
    assert!(approx_eq(fuse.hazard_rate_logistics, 2.0 * fuse.attributes.hazard_rate_active, 1e-12));

    let relay = &report.parts[1];
    assert!(approx_eq(relay.attributes.hazard_rate_active, 1.29, 1e-9));

    let total = fuse.hazard_rate_logistics + relay.hazard_rate_logistics;
    assert!(approx_eq(report.totals.hazard_rate_logistics, total, 1e-12));
    assert!(approx_eq(report.totals.mtbf, 1.0e6 / total, 1e-6));
}

#[test]
fn report_written_to_file() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "relays.json", RELAYS_JSON);
    let output = dir.path().join("report.json");

    let report = batch::run(&[pattern(&dir, "relays.json")], &BatchOptions::default()).unwrap();
    report.write(&output, true).unwrap();

    let json: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(json["totals"]["n_parts"], 1);
    assert_eq!(json["parts"][0]["ref_des"], "K1");
    assert_eq!(json["failures"][0]["hardware_id"], 2);
    assert!(json["failures"][0]["error"]
        .as_str()
        .unwrap()
        .contains("Unsupported component category 1"));
}

#[test]
fn stress_override_with_defaults() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "relays.json", RELAYS_JSON);
    let options = BatchOptions {
        method: Some("stress".to_string()),
        method_id: Some(2),
        apply_default_values: true,
    };

    let report = batch::run(&[pattern(&dir, "relays.json")], &options).unwrap();

    let relay = &report.parts[0].attributes;
    assert_eq!(relay.hazard_rate_method_id, 2);
    assert!(relay.current_rated > 0.0 || relay.current_operating.abs() < f64::EPSILON);
    assert!(relay.temperature_rated_max > 0.0);
    assert_eq!(report.method.as_deref(), Some("stress"));
}

#[test]
fn malformed_json_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "broken.json", "[{");

    let result = batch::run(&[pattern(&dir, "broken.json")], &BatchOptions::default());

    assert!(matches!(result, Err(BatchError::Json { .. })));
}

#[test]
fn unsupported_extension_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "parts.txt", "");

    let result = batch::run(&[pattern(&dir, "parts.txt")], &BatchOptions::default());

    assert!(matches!(result, Err(BatchError::UnsupportedFormat { .. })));
}

#[test]
fn pattern_without_matches_is_an_error() {
    let dir = tempfile::tempdir().unwrap();

    let result = batch::run(&[pattern(&dir, "*.json")], &BatchOptions::default());

    assert!(matches!(result, Err(BatchError::NoMatch { .. })));
}
