//! MIL-HDBK-217F Section 19 quartz crystal model.

use crate::milhdbk217f::attributes::Attributes;
use crate::milhdbk217f::derating::{Derating, StressLimit};
use crate::milhdbk217f::dormant::{self, DormantFactors};
use crate::milhdbk217f::environment::EnvironmentRow;
use crate::milhdbk217f::error::PredictionResult;
use crate::milhdbk217f::lookup::{self, by_id};
use crate::milhdbk217f::models::{default_if_unset, finish_part_count, finish_part_stress, ComponentCalculator};

const PART_COUNT_LAMBDA_B: EnvironmentRow =
    [0.032, 0.096, 0.32, 0.19, 0.51, 0.38, 0.54, 0.70, 0.90, 0.74, 0.016, 0.42, 1.0, 16.0];

const PART_COUNT_PI_Q: [f64; 2] = [1.0, 3.4];

const PART_STRESS_PI_Q: [f64; 2] = [1.0, 2.1];

const PI_E: EnvironmentRow = [1.0, 3.0, 10.0, 6.0, 16.0, 12.0, 17.0, 22.0, 28.0, 23.0, 0.50, 13.0, 32.0, 500.0];

const TEMPERATURE_MARGIN: StressLimit = StressLimit::harsh_only(10.0);

/// Calculator for quartz crystals (category 10, subcategory 1).
#[derive(Debug, Default)]
pub struct CrystalCalculator;

/// Base hazard rate `λb = 0.013·f^0.23` with `f` in MHz.
#[must_use]
pub fn lambda_b(frequency_operating: f64) -> f64 {
    0.013 * frequency_operating.powf(0.23)
}

impl ComponentCalculator for CrystalCalculator {
    fn name(&self) -> &'static str {
        "crystal"
    }

    fn dormant_factors(&self) -> &'static DormantFactors {
        &dormant::MISCELLANEOUS
    }

    fn calculate_part_count(&self, attributes: &mut Attributes) -> String {
        let lambda_b = by_id(&PART_COUNT_LAMBDA_B, attributes.environment_active_id);
        let pi_q = by_id(&PART_COUNT_PI_Q, attributes.quality_id);
        finish_part_count(self.name(), attributes, lambda_b, pi_q)
    }

    fn calculate_part_stress(&self, attributes: &mut Attributes) -> PredictionResult<String> {
        attributes.lambda_b = lambda_b(attributes.frequency_operating);
        attributes.pi_q = lookup::quality_factor(&PART_STRESS_PI_Q, attributes.quality_id);
        attributes.pi_e = lookup::environment_factor(&PI_E, attributes.environment_active_id);
        let hazard_rate = attributes.lambda_b * attributes.pi_q * attributes.pi_e;
        Ok(finish_part_stress(self.name(), attributes, hazard_rate))
    }

    fn overstressed(&self, attributes: &mut Attributes) {
        Derating::new(attributes)
            .margin(
                "Operating temperature within 10.0C of maximum rated temperature",
                attributes.temperature_active,
                attributes.temperature_rated_max,
                TEMPERATURE_MARGIN,
            )
            .finish(attributes);
    }

    fn set_default_values(&self, attributes: &mut Attributes) {
        default_if_unset(&mut attributes.frequency_operating, 10.0);
        default_if_unset(&mut attributes.temperature_rated_max, 85.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn part_stress() {
        let mut attributes = Attributes::new(10, 1);
        attributes.frequency_operating = 10.0;
        attributes.quality_id = 2;
        attributes.environment_active_id = 2;

        let msg = CrystalCalculator.calculate_part_stress(&mut attributes).unwrap();

        assert_eq!(msg, "");
        let lambda_b = 0.013 * 10.0_f64.powf(0.23);
        assert!((attributes.lambda_b - lambda_b).abs() < 1e-12);
        assert!((attributes.hazard_rate_active - lambda_b * 2.1 * 3.0).abs() < 1e-12);
    }

    #[test]
    fn part_stress_zero_frequency_warns() {
        let mut attributes = Attributes::new(10, 1);
        attributes.quality_id = 1;
        attributes.environment_active_id = 1;
        let msg = CrystalCalculator.calculate_part_stress(&mut attributes).unwrap();
        assert!(msg.starts_with("RAMSTK WARNING: Base hazard rate is 0.0 when calculating crystal"));
    }

    #[test]
    fn part_count() {
        let mut attributes = Attributes::new(10, 1);
        attributes.quality_id = 2;
        attributes.environment_active_id = 14;
        CrystalCalculator.calculate_part_count(&mut attributes);
        assert!((attributes.hazard_rate_active - 16.0 * 3.4).abs() < 1e-12);
    }
}
