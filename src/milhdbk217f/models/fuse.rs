//! MIL-HDBK-217F Section 22 fuse model.

use crate::milhdbk217f::attributes::Attributes;
use crate::milhdbk217f::derating::{Derating, StressLimit};
use crate::milhdbk217f::dormant::{self, DormantFactors};
use crate::milhdbk217f::environment::EnvironmentRow;
use crate::milhdbk217f::error::PredictionResult;
use crate::milhdbk217f::lookup::{self, by_id};
use crate::milhdbk217f::models::{default_rating, finish_part_count, finish_part_stress, ComponentCalculator};

const PART_COUNT_LAMBDA_B: EnvironmentRow =
    [0.010, 0.020, 0.080, 0.050, 0.11, 0.090, 0.12, 0.15, 0.18, 0.16, 0.009, 0.10, 0.21, 2.3];

/// Fuses have no quality grades.
const PI_Q: [f64; 2] = [1.0, 1.0];

const LAMBDA_B: f64 = 0.010;

const PI_E: EnvironmentRow = [1.0, 2.0, 8.0, 5.0, 11.0, 9.0, 12.0, 15.0, 18.0, 16.0, 0.90, 10.0, 21.0, 230.0];

const CURRENT_LIMIT: StressLimit = StressLimit::new(0.70, 0.80);

/// Calculator for fuses (category 10, subcategory 3).
#[derive(Debug, Default)]
pub struct FuseCalculator;

impl ComponentCalculator for FuseCalculator {
    fn name(&self) -> &'static str {
        "fuse"
    }

    fn dormant_factors(&self) -> &'static DormantFactors {
        &dormant::MISCELLANEOUS
    }

    fn calculate_part_count(&self, attributes: &mut Attributes) -> String {
        let lambda_b = by_id(&PART_COUNT_LAMBDA_B, attributes.environment_active_id);
        let pi_q = by_id(&PI_Q, attributes.quality_id);
        finish_part_count(self.name(), attributes, lambda_b, pi_q)
    }

    fn calculate_part_stress(&self, attributes: &mut Attributes) -> PredictionResult<String> {
        attributes.lambda_b = LAMBDA_B;
        attributes.pi_q = 1.0;
        attributes.pi_e = lookup::environment_factor(&PI_E, attributes.environment_active_id);
        let hazard_rate = attributes.lambda_b * attributes.pi_e;
        Ok(finish_part_stress(self.name(), attributes, hazard_rate))
    }

    fn overstressed(&self, attributes: &mut Attributes) {
        Derating::new(attributes)
            .ratio("current", attributes.current_operating, attributes.current_rated, CURRENT_LIMIT)
            .finish(attributes);
    }

    fn set_default_values(&self, attributes: &mut Attributes) {
        default_rating(attributes.current_operating, &mut attributes.current_rated, 0.5);
    }
}
