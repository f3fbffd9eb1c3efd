//! MIL-HDBK-217F Section 21 electronic filter model (non-tunable).

use crate::milhdbk217f::attributes::Attributes;
use crate::milhdbk217f::derating::{Derating, StressLimit};
use crate::milhdbk217f::dormant::{self, DormantFactors};
use crate::milhdbk217f::environment::EnvironmentRow;
use crate::milhdbk217f::error::PredictionResult;
use crate::milhdbk217f::lookup::{self, by_id, index_by_id};
use crate::milhdbk217f::models::{
    default_id_if_unset, default_rating, finish_part_count, finish_part_stress, ComponentCalculator,
};

/// Parts count base hazard rates by type: ceramic-ferrite, discrete LC,
/// discrete LC and crystal.
const PART_COUNT_LAMBDA_B: [EnvironmentRow; 3] = [
    [0.022, 0.044, 0.13, 0.088, 0.20, 0.15, 0.20, 0.24, 0.29, 0.24, 0.018, 0.15, 0.33, 2.6],
    [0.12, 0.24, 0.72, 0.48, 1.1, 0.84, 1.1, 1.3, 1.6, 1.3, 0.096, 0.84, 1.8, 14.0],
    [0.27, 0.54, 1.6, 1.1, 2.4, 1.9, 2.4, 3.0, 3.5, 3.0, 0.22, 1.9, 4.1, 32.0],
];

const LAMBDA_B: [f64; 3] = [0.022, 0.12, 0.27];

const PI_Q: [f64; 2] = [1.0, 2.9];

const PI_E: EnvironmentRow = [1.0, 2.0, 6.0, 4.0, 9.0, 7.0, 9.0, 11.0, 13.0, 11.0, 0.8, 7.0, 15.0, 120.0];

const CURRENT_LIMIT: StressLimit = StressLimit::new(0.75, 0.90);

/// Calculator for electronic filters (category 10, subcategory 2).
#[derive(Debug, Default)]
pub struct FilterCalculator;

impl ComponentCalculator for FilterCalculator {
    fn name(&self) -> &'static str {
        "filter"
    }

    fn dormant_factors(&self) -> &'static DormantFactors {
        &dormant::MISCELLANEOUS
    }

    fn calculate_part_count(&self, attributes: &mut Attributes) -> String {
        let lambda_b = by_id(&PART_COUNT_LAMBDA_B, attributes.type_id)
            .and_then(|row| by_id(&row, attributes.environment_active_id));
        let pi_q = by_id(&PI_Q, attributes.quality_id);
        finish_part_count(self.name(), attributes, lambda_b, pi_q)
    }

    fn calculate_part_stress(&self, attributes: &mut Attributes) -> PredictionResult<String> {
        attributes.lambda_b =
            *index_by_id(&LAMBDA_B, attributes.type_id, "filter type", "type_id", attributes.hardware_id)?;
        attributes.pi_q = lookup::quality_factor(&PI_Q, attributes.quality_id);
        attributes.pi_e = lookup::environment_factor(&PI_E, attributes.environment_active_id);
        let hazard_rate = attributes.lambda_b * attributes.pi_q * attributes.pi_e;
        Ok(finish_part_stress(self.name(), attributes, hazard_rate))
    }

    fn overstressed(&self, attributes: &mut Attributes) {
        Derating::new(attributes)
            .ratio("current", attributes.current_operating, attributes.current_rated, CURRENT_LIMIT)
            .finish(attributes);
    }

    fn set_default_values(&self, attributes: &mut Attributes) {
        default_rating(attributes.current_operating, &mut attributes.current_rated, 0.5);
        default_id_if_unset(&mut attributes.type_id, 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::milhdbk217f::error::PredictionError;

    #[test]
    fn part_count_and_stress_agree_on_benign_ground() {
        let mut count = Attributes::new(10, 2);
        count.type_id = 2;
        count.quality_id = 1;
        count.environment_active_id = 1;
        let mut stress = count.clone();

        FilterCalculator.calculate_part_count(&mut count);
        FilterCalculator.calculate_part_stress(&mut stress).unwrap();

        assert!((count.hazard_rate_active - 0.12).abs() < 1e-12);
        assert!((stress.hazard_rate_active - 0.12).abs() < 1e-12);
    }

    #[test]
    fn part_stress_unknown_type() {
        let mut attributes = Attributes::new(10, 2);
        attributes.type_id = 4;
        assert!(matches!(
            FilterCalculator.calculate_part_stress(&mut attributes),
            Err(PredictionError::IndexOutOfRange { key: "type_id", value: 4, .. })
        ));
    }
}
