//! End-to-end relay predictions through the public dispatch functions.
//!
//! Two regression fixtures: a general purpose relay by the parts count
//! method and a mechanical relay by the part stress method. Expected values
//! are the handbook table entries and the rates the model produces for them.

use ramstk_predict::milhdbk217f::{assess, calculate, calculator_for, Attributes, PART_STRESS};

fn approx_eq(a: f64, b: f64, tolerance: f64) -> bool {
    (a - b).abs() < tolerance
}

fn count_relay() -> Attributes {
    let mut attributes = Attributes::new(6, 1);
    attributes.hardware_id = 6;
    attributes.ref_des = "K1".to_string();
    attributes.type_id = 2;
    attributes.quality_id = 2;
    attributes.environment_active_id = 1;
    attributes.environment_dormant_id = 2;
    attributes
}

fn stress_relay() -> Attributes {
    let mut attributes = Attributes::new(6, 1);
    attributes.hardware_id = 6;
    attributes.hazard_rate_method_id = PART_STRESS;
    attributes.type_id = 1;
    attributes.contact_rating_id = 2;
    attributes.application_id = 4;
    attributes.construction_id = 1;
    attributes.technology_id = 1;
    attributes.contact_form_id = 2;
    attributes.current_rated = 5.0;
    attributes.current_operating = 1.5;
    attributes.n_cycles = 5.0;
    attributes.quality_id = 1;
    attributes.environment_active_id = 4;
    attributes.environment_dormant_id = 3;
    attributes.temperature_active = 32.0;
    attributes
}

// =============================================================================
// Parts count
// =============================================================================

#[test]
fn parts_count_general_purpose_relay() {
    let mut relay = count_relay();

    let msg = assess(&mut relay).unwrap();

    assert_eq!(msg, "");
    assert!(approx_eq(relay.lambda_b, 0.43, 1e-12));
    assert!(approx_eq(relay.pi_q, 3.0, 1e-12));
    assert!(approx_eq(relay.hazard_rate_active, 1.29, 1e-9));
    assert!(approx_eq(relay.hazard_rate_dormant, 1.29 * 0.2, 1e-9));
    assert!(!relay.overstress);
}

#[test]
fn parts_count_unknown_dormant_pairing() {
    let mut relay = count_relay();
    relay.environment_active_id = 2;
    relay.environment_dormant_id = 3;

    let msg = calculate(&mut relay).unwrap();

    assert!(msg.contains("Active ID: 2, Dormant ID: 3"));
    assert!(relay.hazard_rate_active > 0.0);
    assert!(relay.hazard_rate_dormant.abs() < f64::EPSILON);
}

#[test]
fn logistics_rate_scales_with_quantity() {
    let mut relay = count_relay();
    relay.quantity = 4;
    relay.duty_cycle = 50.0;

    calculate(&mut relay).unwrap();

    assert!(approx_eq(relay.hazard_rate_logistics(), 1.29 * 4.0 * 0.5, 1e-9));
}

// =============================================================================
// Part stress
// =============================================================================

#[test]
fn part_stress_mechanical_relay() {
    let mut relay = stress_relay();

    let msg = assess(&mut relay).unwrap();

    assert_eq!(msg, "");
    assert!(approx_eq(relay.current_ratio, 0.3, 1e-9));
    assert!(approx_eq(relay.lambda_b, 0.006_166_831, 1e-7));
    assert!(approx_eq(relay.pi_q, 0.1, 1e-12));
    assert!(approx_eq(relay.pi_e, 8.0, 1e-12));
    assert!(approx_eq(relay.hazard_rate_active, 0.006_243_916, 1e-7));
    assert!(approx_eq(relay.hazard_rate_dormant, 0.001_873_175, 1e-7));
    assert!(!relay.overstress);
    assert_eq!(relay.reason, "");
}

#[test]
fn part_stress_overstressed_in_harsh_environment() {
    let mut relay = stress_relay();
    relay.environment_active_id = 3;
    relay.environment_dormant_id = 2;
    relay.current_operating = 4.0;

    assess(&mut relay).unwrap();

    assert!(relay.overstress);
    assert_eq!(relay.reason, "1. Operating current > 75% rated current.\n");
}

#[test]
fn same_stress_passes_in_mild_environment() {
    let mut relay = stress_relay();
    relay.environment_active_id = 1;
    relay.environment_dormant_id = 2;
    relay.current_operating = 4.0;

    assess(&mut relay).unwrap();

    assert!(approx_eq(relay.current_ratio, 0.8, 1e-12));
    assert!(!relay.overstress);
}

#[test]
fn part_stress_bad_selector_is_an_error() {
    let mut relay = stress_relay();
    relay.contact_form_id = 42;

    let result = calculate(&mut relay);

    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("42"));
}

#[test]
fn unsupported_category_is_an_error() {
    assert!(calculator_for(1, 1).is_err());
    assert!(calculator_for(6, 3).is_err());
    let mut part = Attributes::new(11, 1);
    assert!(assess(&mut part).is_err());
}
