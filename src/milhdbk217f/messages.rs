//! Warning and error sentences returned alongside calculation results.
//!
//! Each problem produces one sentence starting with `RAMSTK WARNING:` or
//! `RAMSTK ERROR:` and ending with a newline. Sentences are concatenated in
//! the order the checks run, so an empty message means the calculation used
//! only non-zero factors.

use tracing::warn;

use crate::milhdbk217f::attributes::Attributes;

/// Parts count warning for a zero base hazard rate.
#[must_use]
pub fn count_lambda_b_zero(component: &str, attributes: &Attributes) -> String {
    format!(
        "RAMSTK WARNING: Base hazard rate is 0.0 when calculating {component}, hardware ID: {}, \
         subcategory ID: {}, type ID: {}, and active environment ID: {}.\n",
        attributes.hardware_id,
        attributes.subcategory_id,
        attributes.type_id,
        attributes.environment_active_id,
    )
}

/// Part stress warning for a zero base hazard rate.
#[must_use]
pub fn stress_lambda_b_zero(component: &str, attributes: &Attributes) -> String {
    format!(
        "RAMSTK WARNING: Base hazard rate is 0.0 when calculating {component}, hardware ID: {}.\n",
        attributes.hardware_id,
    )
}

/// Warning for a zero quality factor.
#[must_use]
pub fn pi_q_zero(component: &str, attributes: &Attributes) -> String {
    format!(
        "RAMSTK WARNING: piQ is 0.0 when calculating {component}, hardware ID: {}, quality ID: {}.\n",
        attributes.hardware_id, attributes.quality_id,
    )
}

/// Warning for a zero environment factor.
#[must_use]
pub fn pi_e_zero(component: &str, attributes: &Attributes) -> String {
    format!(
        "RAMSTK WARNING: piE is 0.0 when calculating {component}, hardware ID: {}, active \
         environment ID: {}.\n",
        attributes.hardware_id, attributes.environment_active_id,
    )
}

/// Warning for a zero model factor such as `piR` or `piCV`.
#[must_use]
pub fn factor_zero(factor: &str, component: &str, attributes: &Attributes) -> String {
    format!(
        "RAMSTK WARNING: {factor} is 0.0 when calculating {component}, hardware ID: {}.\n",
        attributes.hardware_id,
    )
}

/// Error for an active/dormant environment pair with no conversion factor.
#[must_use]
pub fn unknown_dormant_environment(environment_active_id: u32, environment_dormant_id: u32) -> String {
    format!(
        "RAMSTK ERROR: Unknown active and/or dormant environment ID. Active ID: \
         {environment_active_id}, Dormant ID: {environment_dormant_id}\n"
    )
}

/// Checks the factors used by a parts count calculation.
#[must_use]
pub fn check_part_count(component: &str, attributes: &Attributes) -> String {
    let mut msg = String::new();
    if attributes.lambda_b <= 0.0 {
        msg.push_str(&count_lambda_b_zero(component, attributes));
    }
    if attributes.pi_q <= 0.0 {
        msg.push_str(&pi_q_zero(component, attributes));
    }
    log_warnings(&msg);
    msg
}

/// Checks the common factors used by a part stress calculation.
#[must_use]
pub fn check_part_stress(component: &str, attributes: &Attributes) -> String {
    let mut msg = String::new();
    if attributes.lambda_b <= 0.0 {
        msg.push_str(&stress_lambda_b_zero(component, attributes));
    }
    if attributes.pi_q <= 0.0 {
        msg.push_str(&pi_q_zero(component, attributes));
    }
    if attributes.pi_e <= 0.0 {
        msg.push_str(&pi_e_zero(component, attributes));
    }
    log_warnings(&msg);
    msg
}

/// Checks the model factors of a part stress calculation that are not
/// covered by [`check_part_stress`], given as `(name, value)` pairs.
#[must_use]
pub fn check_factors(component: &str, attributes: &Attributes, factors: &[(&str, f64)]) -> String {
    let mut msg = String::new();
    for (factor, value) in factors {
        if *value <= 0.0 {
            msg.push_str(&factor_zero(factor, component, attributes));
        }
    }
    log_warnings(&msg);
    msg
}

fn log_warnings(msg: &str) {
    for line in msg.lines() {
        warn!("{line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn relay() -> Attributes {
        let mut attributes = Attributes::new(6, 0);
        attributes.hardware_id = 6;
        attributes.environment_active_id = 1;
        attributes.quality_id = 1;
        attributes
    }

    #[test]
    fn count_checks_accumulate_in_order() {
        let msg = check_part_count("relay", &relay());
        assert_eq!(
            msg,
            "RAMSTK WARNING: Base hazard rate is 0.0 when calculating relay, hardware ID: 6, \
             subcategory ID: 0, type ID: 0, and active environment ID: 1.\n\
             RAMSTK WARNING: piQ is 0.0 when calculating relay, hardware ID: 6, quality ID: 1.\n"
        );
    }

    #[test]
    fn stress_checks_are_empty_when_factors_set() {
        let mut attributes = relay();
        attributes.lambda_b = 0.1;
        attributes.pi_q = 1.0;
        attributes.pi_e = 2.0;
        assert!(check_part_stress("relay", &attributes).is_empty());

        attributes.pi_e = 0.0;
        let msg = check_part_stress("relay", &attributes);
        assert!(msg.starts_with("RAMSTK WARNING: piE is 0.0"));
        assert!(msg.ends_with('\n'));
    }

    #[test]
    fn model_factor_checks() {
        let attributes = relay();
        assert!(check_factors("resistor", &attributes, &[("piR", 1.4), ("piV", 1.0)]).is_empty());
        assert_eq!(
            check_factors("resistor", &attributes, &[("piR", 0.0), ("piV", 1.0)]),
            "RAMSTK WARNING: piR is 0.0 when calculating resistor, hardware ID: 6.\n"
        );
    }

    #[test]
    fn dormant_error_names_both_ids() {
        assert_eq!(
            unknown_dormant_environment(24, 3),
            "RAMSTK ERROR: Unknown active and/or dormant environment ID. Active ID: 24, Dormant ID: 3\n"
        );
    }
}
