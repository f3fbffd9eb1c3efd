//! MIL-HDBK-217F Section 20 incandescent lamp model.

use crate::milhdbk217f::attributes::Attributes;
use crate::milhdbk217f::derating::{Derating, StressLimit};
use crate::milhdbk217f::dormant::{self, DormantFactors};
use crate::milhdbk217f::environment::EnvironmentRow;
use crate::milhdbk217f::error::PredictionResult;
use crate::milhdbk217f::lookup::{self, by_id, index_by_id, select_factor, Overflow};
use crate::milhdbk217f::models::{
    default_id_if_unset, default_if_unset, finish_part_count, finish_part_stress, ComponentCalculator,
};

/// Parts count base hazard rates by application (A.C., D.C.).
const PART_COUNT_LAMBDA_B: [EnvironmentRow; 2] = [
    [3.9, 7.8, 12.0, 12.0, 16.0, 16.0, 16.0, 19.0, 23.0, 19.0, 2.7, 16.0, 23.0, 100.0],
    [13.0, 26.0, 38.0, 38.0, 51.0, 51.0, 51.0, 64.0, 77.0, 64.0, 9.0, 51.0, 77.0, 350.0],
];

/// Lamps have no quality grades.
const PI_Q: [f64; 2] = [1.0, 1.0];

/// Application factors (A.C., D.C.).
const PI_A: [f64; 2] = [1.0, 3.3];

/// Utilisation factor by fraction of equipment operating time the lamp is lit.
const PI_U: [(f64, f64); 3] = [(0.10, 0.10), (0.90, 0.72), (1.0, 1.0)];

const PI_E: EnvironmentRow = [1.0, 2.0, 3.0, 3.0, 4.0, 4.0, 4.0, 5.0, 6.0, 5.0, 0.70, 4.0, 6.0, 27.0];

const VOLTAGE_LIMIT: StressLimit = StressLimit::new(0.94, 1.0);

/// Calculator for incandescent lamps (category 10, subcategory 4).
#[derive(Debug, Default)]
pub struct LampCalculator;

/// Base hazard rate `λb = 0.074·Vr^1.29` with `Vr` the rated voltage.
#[must_use]
pub fn lambda_b(voltage_rated: f64) -> f64 {
    0.074 * voltage_rated.powf(1.29)
}

/// Utilisation factor from the duty cycle (percent).
#[must_use]
pub fn utilisation_factor(duty_cycle: f64) -> f64 {
    select_factor(duty_cycle / 100.0, &PI_U, Overflow::Clamp).unwrap_or(1.0)
}

impl ComponentCalculator for LampCalculator {
    fn name(&self) -> &'static str {
        "lamp"
    }

    fn dormant_factors(&self) -> &'static DormantFactors {
        &dormant::MISCELLANEOUS
    }

    fn calculate_part_count(&self, attributes: &mut Attributes) -> String {
        let lambda_b = by_id(&PART_COUNT_LAMBDA_B, attributes.application_id)
            .and_then(|row| by_id(&row, attributes.environment_active_id));
        let pi_q = by_id(&PI_Q, attributes.quality_id);
        finish_part_count(self.name(), attributes, lambda_b, pi_q)
    }

    fn calculate_part_stress(&self, attributes: &mut Attributes) -> PredictionResult<String> {
        attributes.lambda_b = lambda_b(attributes.voltage_rated);
        attributes.pi_q = 1.0;
        attributes.pi_u = utilisation_factor(attributes.duty_cycle);
        attributes.pi_a = *index_by_id(
            &PI_A,
            attributes.application_id,
            "lamp application",
            "application_id",
            attributes.hardware_id,
        )?;
        attributes.pi_e = lookup::environment_factor(&PI_E, attributes.environment_active_id);
        let hazard_rate = attributes.lambda_b * attributes.pi_u * attributes.pi_a * attributes.pi_e;
        Ok(finish_part_stress(self.name(), attributes, hazard_rate))
    }

    fn overstressed(&self, attributes: &mut Attributes) {
        let voltage = attributes.voltage_ac_operating + attributes.voltage_dc_operating;
        Derating::new(attributes)
            .ratio("voltage", voltage, attributes.voltage_rated, VOLTAGE_LIMIT)
            .finish(attributes);
    }

    fn set_default_values(&self, attributes: &mut Attributes) {
        default_if_unset(&mut attributes.voltage_rated, 28.0);
        default_id_if_unset(&mut attributes.application_id, 1);
    }
}
