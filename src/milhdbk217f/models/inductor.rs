//! MIL-HDBK-217F Section 11 inductive device models.
//!
//! Subcategories:
//! - 1: transformers (pulse, audio, power, RF)
//! - 2: coils (fixed, variable)
//!
//! The temperature factor uses the hot spot temperature. When none is given
//! it is derived from the ambient temperature and the temperature rise, and
//! the rise in turn from power loss over radiating area or weight.

use crate::milhdbk217f::attributes::Attributes;
use crate::milhdbk217f::derating::{Derating, StressLimit};
use crate::milhdbk217f::dormant::{self, DormantFactors};
use crate::milhdbk217f::environment::EnvironmentRow;
use crate::milhdbk217f::error::{PredictionError, PredictionResult};
use crate::milhdbk217f::lookup::{self, by_id, index_by_id};
use crate::milhdbk217f::models::{
    default_id_if_unset, default_rating, finish_part_count, finish_part_stress, ComponentCalculator,
};

const PART_COUNT_LAMBDA_B: [&[EnvironmentRow]; 2] = [
    &[
        [0.0035, 0.023, 0.049, 0.019, 0.065, 0.027, 0.037, 0.041, 0.052, 0.11, 0.0018, 0.053, 0.16, 2.3],
        [0.0071, 0.046, 0.097, 0.038, 0.13, 0.055, 0.073, 0.081, 0.10, 0.22, 0.0035, 0.11, 0.31, 4.7],
        [0.023, 0.16, 0.35, 0.13, 0.45, 0.21, 0.27, 0.35, 0.45, 0.82, 0.011, 0.37, 1.2, 16.0],
        [0.028, 0.18, 0.39, 0.15, 0.52, 0.22, 0.29, 0.32, 0.42, 0.88, 0.015, 0.42, 1.2, 19.0],
    ],
    &[
        [0.0017, 0.0073, 0.023, 0.0091, 0.031, 0.011, 0.015, 0.016, 0.022, 0.052, 0.00083, 0.025, 0.073, 1.1],
        [0.0033, 0.015, 0.046, 0.018, 0.061, 0.022, 0.03, 0.033, 0.044, 0.10, 0.0017, 0.05, 0.15, 2.2],
    ],
];

const PART_COUNT_PI_Q: [&[f64]; 2] = [&[1.0, 3.0], &[0.03, 0.1, 0.3, 1.0, 1.0, 3.0]];

const PART_STRESS_PI_Q: [&[f64]; 2] = [&[1.5, 5.0], &[0.03, 0.1, 0.3, 1.0, 4.0, 20.0]];

const LAMBDA_B: [&[f64]; 2] = [&[0.0035, 0.0071, 0.023, 0.028], &[0.000_030, 0.000_050]];

const PI_E: [EnvironmentRow; 2] = [
    [1.0, 6.0, 12.0, 5.0, 16.0, 6.0, 8.0, 7.0, 9.0, 24.0, 0.50, 13.0, 34.0, 610.0],
    [1.0, 4.0, 12.0, 5.0, 16.0, 5.0, 7.0, 6.0, 8.0, 24.0, 0.50, 13.0, 34.0, 610.0],
];

/// Coil construction factors (fixed, variable).
const PI_C: [f64; 2] = [1.0, 2.0];

/// Activation energy for the hot spot temperature factor (eV).
const ACTIVATION_ENERGY: f64 = 0.11;

/// Maximum rated temperature by insulation class (O, A, B, F, H, C).
const INSULATION_RATED_MAX: [f64; 6] = [85.0, 105.0, 130.0, 155.0, 180.0, 200.0];

const CURRENT_LIMIT: StressLimit = StressLimit::new(0.60, 0.90);
const HOT_SPOT_MARGIN: StressLimit = StressLimit::harsh_only(10.0);

/// Calculator for transformers and coils (category 5).
#[derive(Debug, Default)]
pub struct InductorCalculator;

/// Returns the hot spot temperature (°C), deriving it when unset.
#[must_use]
pub fn hot_spot_temperature(attributes: &Attributes) -> f64 {
    if attributes.temperature_hot_spot > 0.0 {
        return attributes.temperature_hot_spot;
    }
    let rise = if attributes.temperature_rise > 0.0 {
        attributes.temperature_rise
    } else {
        lookup::temperature_rise(attributes.power_operating, attributes.area, attributes.weight)
    };
    lookup::hot_spot_temperature(attributes.temperature_active, rise)
}

impl ComponentCalculator for InductorCalculator {
    fn name(&self) -> &'static str {
        "inductive device"
    }

    fn dormant_factors(&self) -> &'static DormantFactors {
        &dormant::INDUCTOR
    }

    fn calculate_part_count(&self, attributes: &mut Attributes) -> String {
        let lambda_b = by_id(&PART_COUNT_LAMBDA_B, attributes.subcategory_id)
            .and_then(|types| by_id(types, attributes.type_id))
            .and_then(|row| by_id(&row, attributes.environment_active_id));
        let pi_q = by_id(&PART_COUNT_PI_Q, attributes.subcategory_id)
            .and_then(|table| by_id(table, attributes.quality_id));
        finish_part_count(self.name(), attributes, lambda_b, pi_q)
    }

    fn calculate_part_stress(&self, attributes: &mut Attributes) -> PredictionResult<String> {
        let hardware_id = attributes.hardware_id;
        let subcategory_id = attributes.subcategory_id;
        let unsupported = PredictionError::UnsupportedCategory {
            category_id: attributes.category_id,
            subcategory_id,
        };
        let types = by_id(&LAMBDA_B, subcategory_id).ok_or_else(|| unsupported.clone())?;
        let pi_e_row = by_id(&PI_E, subcategory_id).ok_or(unsupported)?;

        attributes.lambda_b = *index_by_id(types, attributes.type_id, "inductive device type", "type_id", hardware_id)?;
        attributes.pi_q = by_id(&PART_STRESS_PI_Q, subcategory_id)
            .map_or(0.0, |table| lookup::quality_factor(table, attributes.quality_id));
        attributes.pi_e = lookup::environment_factor(&pi_e_row, attributes.environment_active_id);

        attributes.temperature_hot_spot = hot_spot_temperature(attributes);
        attributes.pi_t = lookup::arrhenius(ACTIVATION_ENERGY, attributes.temperature_hot_spot);
        attributes.pi_c = if subcategory_id == 2 {
            *index_by_id(&PI_C, attributes.construction_id, "coil construction", "construction_id", hardware_id)?
        } else {
            1.0
        };

        let hazard_rate =
            attributes.lambda_b * attributes.pi_t * attributes.pi_c * attributes.pi_q * attributes.pi_e;
        Ok(finish_part_stress(self.name(), attributes, hazard_rate))
    }

    fn overstressed(&self, attributes: &mut Attributes) {
        let hot_spot = hot_spot_temperature(attributes);
        Derating::new(attributes)
            .ratio("current", attributes.current_operating, attributes.current_rated, CURRENT_LIMIT)
            .margin(
                "Hot spot temperature within 10.0C of maximum rated temperature",
                hot_spot,
                attributes.temperature_rated_max,
                HOT_SPOT_MARGIN,
            )
            .finish(attributes);
    }

    fn set_default_values(&self, attributes: &mut Attributes) {
        default_rating(attributes.current_operating, &mut attributes.current_rated, 0.5);
        if attributes.temperature_rated_max <= 0.0 {
            attributes.temperature_rated_max = by_id(&INSULATION_RATED_MAX, attributes.insulation_id).unwrap_or(130.0);
        }
        default_id_if_unset(&mut attributes.type_id, 1);
        default_id_if_unset(&mut attributes.construction_id, 1);
    }
}
