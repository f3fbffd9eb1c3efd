//! MIL-HDBK-217F Section 18 meter models.
//!
//! Subcategories:
//! - 1: elapsed time meters
//! - 2: panel meters

use crate::milhdbk217f::attributes::Attributes;
use crate::milhdbk217f::derating::{Derating, StressLimit};
use crate::milhdbk217f::dormant::{self, DormantFactors};
use crate::milhdbk217f::environment::EnvironmentRow;
use crate::milhdbk217f::error::{PredictionError, PredictionResult};
use crate::milhdbk217f::lookup::{self, by_id, index_by_id, select_factor, Overflow};
use crate::milhdbk217f::models::{
    default_id_if_unset, default_if_unset, default_rating, finish_part_count, finish_part_stress,
    ComponentCalculator,
};

/// Parts count base hazard rates by subcategory, then type.
const PART_COUNT_LAMBDA_B: [&[EnvironmentRow]; 2] = [
    &[
        [10.0, 20.0, 120.0, 70.0, 180.0, 50.0, 80.0, 160.0, 250.0, 260.0, 5.0, 140.0, 380.0, 0.0],
        [15.0, 30.0, 180.0, 105.0, 270.0, 75.0, 120.0, 240.0, 375.0, 390.0, 7.5, 210.0, 570.0, 0.0],
        [40.0, 80.0, 480.0, 280.0, 720.0, 200.0, 320.0, 640.0, 1000.0, 1040.0, 20.0, 560.0, 1520.0, 0.0],
    ],
    &[
        [0.09, 0.36, 2.3, 1.1, 3.2, 2.5, 3.8, 5.2, 6.6, 5.4, 0.099, 5.4, 0.0, 0.0],
        [0.15, 0.61, 2.8, 1.8, 5.4, 4.3, 6.4, 8.9, 11.0, 9.2, 0.17, 9.2, 0.0, 0.0],
    ],
];

/// Quality factors (MIL-SPEC, lower) by subcategory.
const PI_Q: [[f64; 2]; 2] = [[1.0, 1.0], [1.0, 3.4]];

/// Elapsed time meter base hazard rates (A.C., inverter driven, commutator D.C.).
const LAMBDA_B_ELAPSED_TIME: [f64; 3] = [20.0, 30.0, 80.0];

/// Panel meter base hazard rate.
const LAMBDA_B_PANEL: f64 = 0.09;

/// Environment factors by subcategory.
const PI_E: [EnvironmentRow; 2] = [
    [1.0, 2.0, 12.0, 7.0, 18.0, 5.0, 8.0, 16.0, 25.0, 26.0, 0.5, 14.0, 38.0, 0.0],
    [1.0, 4.0, 25.0, 12.0, 35.0, 28.0, 42.0, 58.0, 73.0, 60.0, 1.1, 60.0, 0.0, 0.0],
];

/// Panel meter application factors (D.C., A.C.).
const PI_A: [f64; 2] = [1.0, 1.7];

/// Panel meter function factors (ammeter, voltmeter, other).
const PI_F: [f64; 3] = [1.0, 1.0, 2.8];

/// Temperature stress factor by operating to rated temperature ratio.
const PI_T: [(f64, f64); 4] = [(0.5, 0.5), (0.6, 0.6), (0.8, 0.8), (1.0, 1.0)];

const CURRENT_LIMIT: StressLimit = StressLimit::new(0.75, 0.90);
const TEMPERATURE_MARGIN: StressLimit = StressLimit::harsh_only(10.0);

/// Calculator for meters (category 9).
#[derive(Debug, Default)]
pub struct MeterCalculator;

impl MeterCalculator {
    /// Creates a new meter calculator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

/// Returns the parts count base hazard rate, if tabulated.
#[must_use]
pub fn part_count_lambda_b(subcategory_id: u32, type_id: u32, environment_active_id: u32) -> Option<f64> {
    by_id(&PART_COUNT_LAMBDA_B, subcategory_id)
        .and_then(|types| by_id(types, type_id))
        .and_then(|row| by_id(&row, environment_active_id))
}

/// Selects the temperature stress factor.
///
/// Ratios above 1.0 use the 1.0 factor.
#[must_use]
pub fn temperature_stress_factor(temperature_ratio: f64) -> f64 {
    select_factor(temperature_ratio, &PI_T, Overflow::Clamp).unwrap_or(1.0)
}

impl ComponentCalculator for MeterCalculator {
    fn name(&self) -> &'static str {
        "meter"
    }

    fn dormant_factors(&self) -> &'static DormantFactors {
        &dormant::MISCELLANEOUS
    }

    fn calculate_part_count(&self, attributes: &mut Attributes) -> String {
        let lambda_b = part_count_lambda_b(
            attributes.subcategory_id,
            attributes.type_id,
            attributes.environment_active_id,
        );
        let pi_q = by_id(&PI_Q, attributes.subcategory_id).and_then(|table| by_id(&table, attributes.quality_id));
        finish_part_count(self.name(), attributes, lambda_b, pi_q)
    }

    fn calculate_part_stress(&self, attributes: &mut Attributes) -> PredictionResult<String> {
        let hardware_id = attributes.hardware_id;
        let subcategory_id = attributes.subcategory_id;
        let pi_e_row = by_id(&PI_E, subcategory_id).ok_or(PredictionError::UnsupportedCategory {
            category_id: attributes.category_id,
            subcategory_id,
        })?;
        attributes.pi_e = lookup::environment_factor(&pi_e_row, attributes.environment_active_id);

        let hazard_rate = if subcategory_id == 1 {
            let temperature_ratio = lookup::ratio(attributes.temperature_active, attributes.temperature_rated_max);
            attributes.pi_q = 1.0;
            attributes.pi_t = temperature_stress_factor(temperature_ratio);
            attributes.lambda_b = *index_by_id(
                &LAMBDA_B_ELAPSED_TIME,
                attributes.type_id,
                "elapsed time meter type",
                "type_id",
                hardware_id,
            )?;
            attributes.lambda_b * attributes.pi_t * attributes.pi_e
        } else {
            attributes.pi_q = lookup::quality_factor(&PI_Q[1], attributes.quality_id);
            attributes.lambda_b = LAMBDA_B_PANEL;
            attributes.pi_a = *index_by_id(&PI_A, attributes.type_id, "panel meter application", "type_id", hardware_id)?;
            attributes.pi_f = *index_by_id(
                &PI_F,
                attributes.application_id,
                "panel meter function",
                "application_id",
                hardware_id,
            )?;
            attributes.lambda_b * attributes.pi_a * attributes.pi_f * attributes.pi_q * attributes.pi_e
        };

        Ok(finish_part_stress(self.name(), attributes, hazard_rate))
    }

    fn overstressed(&self, attributes: &mut Attributes) {
        Derating::new(attributes)
            .ratio("current", attributes.current_operating, attributes.current_rated, CURRENT_LIMIT)
            .margin(
                "Operating temperature within 10.0C of maximum rated temperature",
                attributes.temperature_active,
                attributes.temperature_rated_max,
                TEMPERATURE_MARGIN,
            )
            .finish(attributes);
    }

    fn set_default_values(&self, attributes: &mut Attributes) {
        default_rating(attributes.current_operating, &mut attributes.current_rated, 0.5);
        default_if_unset(&mut attributes.temperature_rated_max, 125.0);
        default_id_if_unset(&mut attributes.type_id, 1);
        default_id_if_unset(&mut attributes.application_id, 1);
    }
}
