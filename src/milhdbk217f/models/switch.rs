//! MIL-HDBK-217F Section 14 switch models.
//!
//! Subcategories:
//! - 1: toggle or pushbutton
//! - 2: basic sensitive
//! - 3: rotary
//! - 4: thumbwheel
//! - 5: circuit breaker

use crate::milhdbk217f::attributes::Attributes;
use crate::milhdbk217f::derating::{Derating, StressLimit};
use crate::milhdbk217f::dormant::{self, DormantFactors};
use crate::milhdbk217f::environment::EnvironmentRow;
use crate::milhdbk217f::error::PredictionResult;
use crate::milhdbk217f::lookup::{self, by_id, index_by_id, key_by_id};
use crate::milhdbk217f::models::{
    default_id_if_unset, default_if_unset, default_rating, finish_part_count, finish_part_stress,
    ComponentCalculator,
};

/// Parts count base hazard rates for subcategories 1-4.
const PART_COUNT_LAMBDA_B: [EnvironmentRow; 4] = [
    [0.0010, 0.0030, 0.018, 0.0080, 0.029, 0.010, 0.018, 0.013, 0.022, 0.046, 0.0005, 0.025, 0.067, 1.2],
    [0.15, 0.44, 2.7, 1.2, 4.3, 1.5, 2.7, 1.9, 3.3, 6.8, 0.74, 3.7, 9.9, 180.0],
    [0.33, 0.99, 5.9, 2.6, 9.5, 3.3, 5.9, 4.3, 7.2, 15.0, 0.16, 8.2, 22.0, 390.0],
    [0.56, 1.7, 10.0, 4.5, 16.0, 5.6, 10.0, 7.3, 12.0, 26.0, 0.26, 14.0, 38.0, 670.0],
];

/// Parts count base hazard rates for circuit breakers by construction.
const PART_COUNT_LAMBDA_B_BREAKER: [(u32, EnvironmentRow); 2] = [
    (1, [0.11, 0.23, 1.7, 0.91, 3.1, 0.80, 1.0, 1.3, 1.4, 5.2, 0.057, 2.8, 7.5, 0.0]),
    (2, [0.060, 0.12, 0.90, 0.48, 1.6, 0.42, 0.54, 0.66, 0.72, 2.8, 0.030, 1.5, 4.0, 0.0]),
];

/// Quality factors (MIL-SPEC, lower) for switches.
const PI_Q: [f64; 2] = [1.0, 20.0];

/// Quality factors (MIL-SPEC, lower) for circuit breakers.
const PI_Q_BREAKER: [f64; 2] = [1.0, 8.4];

/// Environment factors for switches.
const PI_E: EnvironmentRow = [1.0, 3.0, 18.0, 8.0, 29.0, 10.0, 18.0, 13.0, 22.0, 46.0, 0.50, 25.0, 67.0, 1200.0];

/// Environment factors for circuit breakers.
const PI_E_BREAKER: EnvironmentRow = [1.0, 2.0, 15.0, 8.0, 27.0, 7.0, 9.0, 11.0, 12.0, 46.0, 0.50, 25.0, 66.0, 0.0];

/// Toggle and pushbutton base hazard rates `[MIL-SPEC, lower]` by
/// construction (snap action, non-snap action).
const LAMBDA_B_TOGGLE: [(u32, [f64; 2]); 2] = [(1, [0.00045, 0.034]), (2, [0.0027, 0.04])];

/// Sensitive switch per-contact base hazard rates by actuation differential.
const LAMBDA_B2_SENSITIVE: [(u32, [f64; 2]); 2] = [(1, [0.00045, 0.23]), (2, [0.0009, 0.63])];

/// Rotary switch per-contact base hazard rates by wafer material.
const LAMBDA_B2_ROTARY: [(u32, [f64; 2]); 2] = [(1, [0.00003, 0.02]), (2, [0.00003, 0.06])];

/// Fixed base hazard rates `[MIL-SPEC, lower]` for sensitive, rotary and
/// thumbwheel switches.
const LAMBDA_B1: [[f64; 2]; 3] = [[0.10, 0.10], [0.0067, 0.10], [0.0067, 0.086]];

/// Thumbwheel per-contact base hazard rates.
const LAMBDA_B2_THUMBWHEEL: [f64; 2] = [0.062, 0.089];

/// Circuit breaker base hazard rates by application.
const LAMBDA_B_BREAKER: [f64; 3] = [0.02, 0.038, 0.038];

/// Contact form factors for toggle switches.
const PI_C: [f64; 9] = [1.0, 1.5, 1.7, 2.0, 2.5, 3.0, 4.2, 5.5, 8.0];

/// Configuration factors for circuit breakers (SPST, DPST, 3PST, 4PST).
const PI_C_BREAKER: [f64; 4] = [1.0, 2.0, 3.0, 4.0];

/// Use factors for circuit breakers (not used as a power switch, used as one).
const PI_U: [f64; 2] = [1.0, 10.0];

/// Load stress divisors for resistive, inductive and lamp loads.
const LOAD_STRESS_K: [f64; 3] = [0.8, 0.4, 0.2];

const CURRENT_LIMIT: StressLimit = StressLimit::new(0.75, 0.90);

/// Calculator for switches (category 7).
#[derive(Debug, Default)]
pub struct SwitchCalculator;

impl SwitchCalculator {
    /// Creates a new switch calculator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

/// Returns the parts count base hazard rate, if tabulated.
///
/// Circuit breakers (subcategory 5) are selected by `construction_id`.
#[must_use]
pub fn part_count_lambda_b(subcategory_id: u32, environment_active_id: u32, construction_id: u32) -> Option<f64> {
    let row = if subcategory_id == 5 {
        PART_COUNT_LAMBDA_B_BREAKER
            .iter()
            .find(|(id, _)| *id == construction_id)
            .map(|(_, row)| *row)
    } else {
        by_id(&PART_COUNT_LAMBDA_B, subcategory_id)
    };
    row.and_then(|row| by_id(&row, environment_active_id))
}

/// Calculates the part stress base hazard rate.
///
/// Sensitive, rotary and thumbwheel switches use `λb1 + n·λb2` where `n` is
/// the number of active contacts. Subcategories without a stress model
/// return 0.0.
///
/// # Errors
///
/// Returns an error if the quality, construction or application selector is
/// not tabulated for the subcategory.
pub fn part_stress_lambda_b(attributes: &Attributes) -> PredictionResult<f64> {
    let hardware_id = attributes.hardware_id;
    let quality = |table: &[f64; 2]| {
        index_by_id(table, attributes.quality_id, "switch quality", "quality_id", hardware_id).copied()
    };
    let construction = |table: &'static [(u32, [f64; 2])]| {
        key_by_id(table, attributes.construction_id, "switch construction", "construction_id", hardware_id)
    };
    let n = f64::from(attributes.n_elements);

    let lambda_b = match attributes.subcategory_id {
        1 => quality(construction(&LAMBDA_B_TOGGLE)?)?,
        2 => quality(&LAMBDA_B1[0])? + n * quality(construction(&LAMBDA_B2_SENSITIVE)?)?,
        3 => quality(&LAMBDA_B1[1])? + n * quality(construction(&LAMBDA_B2_ROTARY)?)?,
        4 => quality(&LAMBDA_B1[2])? + n * quality(&LAMBDA_B2_THUMBWHEEL)?,
        5 => *index_by_id(
            &LAMBDA_B_BREAKER,
            attributes.application_id,
            "circuit breaker application",
            "application_id",
            hardware_id,
        )?,
        _ => 0.0,
    };
    Ok(lambda_b)
}

/// Calculates the load stress factor `πL = exp((S/k)²)`.
///
/// Returns 0.0 for an unknown load type.
#[must_use]
pub fn load_stress_factor(application_id: u32, current_ratio: f64) -> f64 {
    by_id(&LOAD_STRESS_K, application_id).map_or(0.0, |k| (current_ratio / k).powi(2).exp())
}

/// Calculates the cycling factor; never less than 1.0.
#[must_use]
pub fn cycling_factor(n_cycles: f64) -> f64 {
    if n_cycles < 1.0 {
        1.0
    } else {
        n_cycles
    }
}

impl ComponentCalculator for SwitchCalculator {
    fn name(&self) -> &'static str {
        "switch"
    }

    fn dormant_factors(&self) -> &'static DormantFactors {
        &dormant::SWITCH
    }

    fn calculate_part_count(&self, attributes: &mut Attributes) -> String {
        let lambda_b = part_count_lambda_b(
            attributes.subcategory_id,
            attributes.environment_active_id,
            attributes.construction_id,
        );
        let pi_q_table = if attributes.subcategory_id == 5 { &PI_Q_BREAKER } else { &PI_Q };
        let pi_q = by_id(pi_q_table, attributes.quality_id);
        finish_part_count(self.name(), attributes, lambda_b, pi_q)
    }

    fn calculate_part_stress(&self, attributes: &mut Attributes) -> PredictionResult<String> {
        let hardware_id = attributes.hardware_id;
        attributes.current_ratio = lookup::ratio(attributes.current_operating, attributes.current_rated);
        attributes.lambda_b = part_stress_lambda_b(attributes)?;
        attributes.pi_cyc = cycling_factor(attributes.n_cycles);
        attributes.pi_l = load_stress_factor(attributes.application_id, attributes.current_ratio);

        let hazard_rate = match attributes.subcategory_id {
            1 => {
                attributes.pi_q = 1.0;
                attributes.pi_e = lookup::environment_factor(&PI_E, attributes.environment_active_id);
                attributes.pi_c = *index_by_id(
                    &PI_C,
                    attributes.contact_form_id,
                    "switch contact form",
                    "contact_form_id",
                    hardware_id,
                )?;
                attributes.lambda_b * attributes.pi_cyc * attributes.pi_l * attributes.pi_c * attributes.pi_e
            }
            2..=4 => {
                attributes.pi_q = 1.0;
                attributes.pi_e = lookup::environment_factor(&PI_E, attributes.environment_active_id);
                attributes.lambda_b * attributes.pi_cyc * attributes.pi_l * attributes.pi_e
            }
            5 => {
                attributes.pi_q = lookup::quality_factor(&PI_Q_BREAKER, attributes.quality_id);
                attributes.pi_e = lookup::environment_factor(&PI_E_BREAKER, attributes.environment_active_id);
                attributes.pi_c = *index_by_id(
                    &PI_C_BREAKER,
                    attributes.contact_form_id,
                    "circuit breaker configuration",
                    "contact_form_id",
                    hardware_id,
                )?;
                attributes.pi_u = *index_by_id(
                    &PI_U,
                    attributes.construction_id,
                    "circuit breaker use",
                    "construction_id",
                    hardware_id,
                )?;
                attributes.lambda_b * attributes.pi_c * attributes.pi_u * attributes.pi_q * attributes.pi_e
            }
            _ => 0.0,
        };

        Ok(finish_part_stress(self.name(), attributes, hazard_rate))
    }

    fn overstressed(&self, attributes: &mut Attributes) {
        Derating::new(attributes)
            .ratio("current", attributes.current_operating, attributes.current_rated, CURRENT_LIMIT)
            .finish(attributes);
    }

    fn set_default_values(&self, attributes: &mut Attributes) {
        default_rating(attributes.current_operating, &mut attributes.current_rated, 0.5);
        default_if_unset(&mut attributes.n_cycles, 1.0);
        default_id_if_unset(&mut attributes.application_id, 1);
        default_id_if_unset(&mut attributes.construction_id, 1);
        default_id_if_unset(&mut attributes.contact_form_id, 1);
        if attributes.n_elements == 0 {
            attributes.n_elements = match attributes.subcategory_id {
                3 => 24,
                4 => 10,
                _ => 1,
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::milhdbk217f::error::PredictionError;

    fn switch(subcategory_id: u32) -> Attributes {
        let mut attributes = Attributes::new(7, subcategory_id);
        attributes.hardware_id = 7;
        attributes.environment_active_id = 3;
        attributes.construction_id = 1;
        attributes.quality_id = 1;
        attributes.application_id = 1;
        attributes.contact_form_id = 2;
        attributes.n_elements = 8;
        attributes.current_operating = 0.45;
        attributes.current_rated = 1.0;
        attributes.n_cycles = 2.3;
        attributes
    }

    #[test]
    fn part_count_lambda_b_by_subcategory() {
        assert_eq!(part_count_lambda_b(1, 3, 1), Some(0.018));
        assert_eq!(part_count_lambda_b(5, 3, 1), Some(1.7));
        assert_eq!(part_count_lambda_b(27, 3, 1), None);
        assert_eq!(part_count_lambda_b(5, 3, 41), None);
        assert_eq!(part_count_lambda_b(2, 32, 1), None);
    }

    #[test]
    fn part_count() {
        let mut attributes = switch(1);
        let msg = SwitchCalculator.calculate_part_count(&mut attributes);
        assert_eq!(msg, "");
        assert!((attributes.hazard_rate_active - 0.018).abs() < 1e-12);

        attributes.quality_id = 2;
        SwitchCalculator.calculate_part_count(&mut attributes);
        assert!((attributes.hazard_rate_active - 0.36).abs() < 1e-12);
    }

    #[test]
    fn part_count_table_sweep() {
        for environment_active_id in 1..=14 {
            for quality_id in 1..=2 {
                for subcategory_id in 1..=4 {
                    let mut attributes = switch(subcategory_id);
                    attributes.quality_id = quality_id;
                    attributes.environment_active_id = environment_active_id;
                    let context =
                        format!("subcategory {subcategory_id}, quality {quality_id}, environment {environment_active_id}");

                    let msg = SwitchCalculator.calculate_part_count(&mut attributes);

                    let lambda_b =
                        PART_COUNT_LAMBDA_B[subcategory_id as usize - 1][environment_active_id as usize - 1];
                    let pi_q = PI_Q[quality_id as usize - 1];
                    assert_eq!(msg, "", "{context}");
                    assert!((attributes.lambda_b - lambda_b).abs() < f64::EPSILON, "{context}");
                    assert!((attributes.hazard_rate_active - lambda_b * pi_q).abs() < 1e-9, "{context}");
                }
            }
        }
    }

    #[test]
    fn part_count_breaker_table_sweep() {
        for environment_active_id in 1..=13 {
            for quality_id in 1..=2 {
                for (construction_id, row) in PART_COUNT_LAMBDA_B_BREAKER {
                    let mut attributes = switch(5);
                    attributes.construction_id = construction_id;
                    attributes.quality_id = quality_id;
                    attributes.environment_active_id = environment_active_id;
                    let context = format!(
                        "construction {construction_id}, quality {quality_id}, environment {environment_active_id}"
                    );

                    let msg = SwitchCalculator.calculate_part_count(&mut attributes);

                    let lambda_b = row[environment_active_id as usize - 1];
                    let pi_q = PI_Q_BREAKER[quality_id as usize - 1];
                    assert_eq!(msg, "", "{context}");
                    assert!((attributes.hazard_rate_active - lambda_b * pi_q).abs() < 1e-9, "{context}");
                }
            }
        }
    }

    #[test]
    fn part_stress_lambda_b_by_subcategory() {
        let expected = [
            (1, 1, 0.00045),
            (1, 2, 0.0027),
            (2, 1, 0.1036),
            (2, 2, 0.1072),
            (4, 1, 0.5027),
            (4, 2, 0.5027),
            (5, 1, 0.02),
            (31, 1, 0.0),
        ];
        for (subcategory_id, construction_id, lambda_b) in expected {
            let mut attributes = switch(subcategory_id);
            attributes.construction_id = construction_id;
            let actual = part_stress_lambda_b(&attributes).unwrap();
            assert!(
                (actual - lambda_b).abs() < 1e-12,
                "subcategory {subcategory_id}, construction {construction_id}: {actual}"
            );
        }
    }

    #[test]
    fn part_stress_lambda_b_selector_errors() {
        let mut attributes = switch(1);
        attributes.quality_id = 21;
        assert!(matches!(
            part_stress_lambda_b(&attributes),
            Err(PredictionError::IndexOutOfRange { key: "quality_id", .. })
        ));

        let mut attributes = switch(5);
        attributes.application_id = 21;
        assert!(matches!(
            part_stress_lambda_b(&attributes),
            Err(PredictionError::IndexOutOfRange { key: "application_id", .. })
        ));

        let mut attributes = switch(1);
        attributes.construction_id = 41;
        assert!(matches!(
            part_stress_lambda_b(&attributes),
            Err(PredictionError::MissingKey { key: "construction_id", value: 41, .. })
        ));
    }

    #[test]
    fn part_stress_toggle() {
        let mut attributes = switch(1);
        let msg = SwitchCalculator.calculate_part_stress(&mut attributes).unwrap();
        assert_eq!(msg, "");
        assert!((attributes.lambda_b - 0.00045).abs() < f64::EPSILON);
        assert!((attributes.pi_cyc - 2.3).abs() < f64::EPSILON);
        assert!((attributes.pi_l - 1.372_187_594).abs() < 1e-9);
        assert!((attributes.pi_c - 1.5).abs() < f64::EPSILON);
        assert!((attributes.pi_e - 18.0).abs() < f64::EPSILON);
        assert!((attributes.hazard_rate_active - 0.038_345_782).abs() < 1e-9);
    }

    #[test]
    fn part_stress_sensitive() {
        let mut attributes = switch(2);
        SwitchCalculator.calculate_part_stress(&mut attributes).unwrap();
        assert!((attributes.lambda_b - 0.1036).abs() < 1e-12);
        assert!((attributes.hazard_rate_active - 5.885_367_477).abs() < 1e-8);
    }

    #[test]
    fn part_stress_circuit_breaker() {
        let mut attributes = switch(5);
        SwitchCalculator.calculate_part_stress(&mut attributes).unwrap();
        assert!((attributes.lambda_b - 0.02).abs() < f64::EPSILON);
        assert!((attributes.pi_c - 2.0).abs() < f64::EPSILON);
        assert!((attributes.pi_u - 1.0).abs() < f64::EPSILON);
        assert!((attributes.hazard_rate_active - 0.6).abs() < 1e-12);
    }

    #[test]
    fn part_stress_cycling_floor() {
        let mut attributes = switch(1);
        attributes.n_cycles = 0.05;
        SwitchCalculator.calculate_part_stress(&mut attributes).unwrap();
        assert!((attributes.pi_cyc - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn part_stress_without_model_is_zero() {
        let mut attributes = switch(6);
        let msg = SwitchCalculator.calculate_part_stress(&mut attributes).unwrap();
        assert!(attributes.hazard_rate_active.abs() < f64::EPSILON);
        assert!(msg.contains("Base hazard rate is 0.0 when calculating switch"));
    }

    #[test]
    fn load_stress_factors() {
        assert!((load_stress_factor(1, 0.2) - 1.064_494_459).abs() < 1e-9);
        assert!((load_stress_factor(2, 0.2) - 1.284_025_417).abs() < 1e-9);
        assert!((load_stress_factor(3, 0.2) - std::f64::consts::E).abs() < 1e-9);
        assert!(load_stress_factor(13, 0.2).abs() < f64::EPSILON);
    }

    #[test]
    fn overstress_current() {
        let mut attributes = switch(1);
        attributes.current_operating = 0.8;
        SwitchCalculator.overstressed(&mut attributes);
        assert!(attributes.overstress);

        attributes.environment_active_id = 2;
        SwitchCalculator.overstressed(&mut attributes);
        assert!(!attributes.overstress);
    }
}
