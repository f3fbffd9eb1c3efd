//! MIL-HDBK-217F component models.
//!
//! Each component family has its own module implementing the parts count
//! and part stress methods of MIL-HDBK-217F, the dormant conversion and the
//! derating checks for that family.

pub mod capacitor;
pub mod connection;
pub mod crystal;
pub mod filter;
pub mod fuse;
pub mod inductor;
pub mod lamp;
pub mod meter;
pub mod relay;
pub mod resistor;
pub mod semiconductor;
pub mod switch;

use tracing::{debug, trace};

use crate::milhdbk217f::attributes::Attributes;
use crate::milhdbk217f::dormant::DormantFactors;
use crate::milhdbk217f::error::{PredictionError, PredictionResult};
use crate::milhdbk217f::messages;

/// Hazard rate method selector for the parts count method.
pub const PART_COUNT: u32 = 1;

/// Hazard rate method selector for the part stress method.
pub const PART_STRESS: u32 = 2;

/// Trait for component hazard rate calculators.
///
/// Implementations are stateless; every operation reads and writes only the
/// [`Attributes`] record it is given.
pub trait ComponentCalculator: Sync {
    /// Component name used in messages ("relay", "fixed resistor", ...).
    fn name(&self) -> &'static str;

    /// Dormant conversion factors for this component family.
    fn dormant_factors(&self) -> &'static DormantFactors;

    /// Calculates the parts count hazard rate.
    ///
    /// Writes `lambda_b`, `piQ` and `hazard_rate_active`. Returns an empty
    /// message unless a factor was zero.
    fn calculate_part_count(&self, attributes: &mut Attributes) -> String;

    /// Calculates the part stress hazard rate.
    ///
    /// # Errors
    ///
    /// Returns an error if a type, construction or application selector
    /// does not index its table.
    fn calculate_part_stress(&self, attributes: &mut Attributes) -> PredictionResult<String>;

    /// Writes the derating verdict into `overstress` and `reason`.
    fn overstressed(&self, attributes: &mut Attributes);

    /// Replaces zero or unset stress inputs with conservative defaults.
    fn set_default_values(&self, attributes: &mut Attributes);

    /// Calculates the dormant hazard rate from the active hazard rate.
    fn calculate_dormant_hazard_rate(&self, attributes: &mut Attributes) -> String {
        self.dormant_factors().apply(attributes)
    }

    /// Calculates the active hazard rate with the method selected by
    /// `hazard_rate_method_id`, then the dormant hazard rate.
    ///
    /// # Errors
    ///
    /// Returns [`PredictionError::UnknownMethod`] for a method ID other than
    /// 1 or 2, or any error from the part stress calculation.
    fn calculate(&self, attributes: &mut Attributes) -> PredictionResult<String> {
        let mut msg = match attributes.hazard_rate_method_id {
            PART_COUNT => self.calculate_part_count(attributes),
            PART_STRESS => self.calculate_part_stress(attributes)?,
            method_id => return Err(PredictionError::UnknownMethod { method_id }),
        };
        msg.push_str(&self.calculate_dormant_hazard_rate(attributes));

        debug!(
            hardware_id = attributes.hardware_id,
            component = self.name(),
            method = attributes.hazard_rate_method_id,
            hazard_rate_active = attributes.hazard_rate_active,
            hazard_rate_dormant = attributes.hazard_rate_dormant,
            "hazard rate calculated"
        );
        Ok(msg)
    }
}

/// Finishes a parts count calculation from the looked-up factors.
///
/// A missing factor is written as 0.0 and reported in the message.
pub(crate) fn finish_part_count(
    component: &str,
    attributes: &mut Attributes,
    lambda_b: Option<f64>,
    pi_q: Option<f64>,
) -> String {
    attributes.lambda_b = lambda_b.unwrap_or(0.0);
    attributes.pi_q = pi_q.unwrap_or(0.0);
    attributes.hazard_rate_active = attributes.lambda_b * attributes.pi_q;
    trace!(
        hardware_id = attributes.hardware_id,
        lambda_b = attributes.lambda_b,
        pi_q = attributes.pi_q,
        "parts count"
    );
    messages::check_part_count(component, attributes)
}

/// Finishes a part stress calculation by writing the active hazard rate.
pub(crate) fn finish_part_stress(component: &str, attributes: &mut Attributes, hazard_rate: f64) -> String {
    attributes.hazard_rate_active = hazard_rate;
    trace!(
        hardware_id = attributes.hardware_id,
        lambda_b = attributes.lambda_b,
        pi_q = attributes.pi_q,
        pi_e = attributes.pi_e,
        hazard_rate,
        "part stress"
    );
    messages::check_part_stress(component, attributes)
}

/// Sets `value` to `default` when it is zero or negative.
pub(crate) fn default_if_unset(value: &mut f64, default: f64) {
    if *value <= 0.0 {
        *value = default;
    }
}

/// Sets a selector to `default` when it is zero.
pub(crate) fn default_id_if_unset(value: &mut u32, default: u32) {
    if *value == 0 {
        *value = default;
    }
}

/// Derives a missing rating from the operating value so the stress ratio
/// becomes `ratio`.
pub(crate) fn default_rating(operating: f64, rated: &mut f64, ratio: f64) {
    if *rated <= 0.0 && operating > 0.0 {
        *rated = operating / ratio;
    }
}
