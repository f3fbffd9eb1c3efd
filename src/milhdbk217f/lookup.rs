//! Shared table lookup and numeric helpers used by every calculator.
//!
//! Two lookup flavours exist on purpose:
//!
//! - [`by_id`] and [`environment_factor`] miss gracefully (`None` / `0.0`).
//!   The parts count path and the quality/environment factors use these and
//!   report the miss as a warning.
//! - [`index_by_id`] and [`key_by_id`] return a [`PredictionError`]. The part
//!   stress path uses these for type, construction and application selectors,
//!   where a miss means the caller set the record up wrong.

use crate::milhdbk217f::environment::{Environment, EnvironmentRow};
use crate::milhdbk217f::error::{PredictionError, PredictionResult};

/// Boltzmann's constant (eV/K).
pub const BOLTZMANN: f64 = 8.617e-5;

/// Reference temperature for Arrhenius factors (K).
const REFERENCE_TEMPERATURE: f64 = 298.0;

/// What to do when a value lies beyond the largest tabulated bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overflow {
    /// Use the factor of the last bound.
    Clamp,
    /// Return no factor.
    Reject,
}

/// Selects a factor from sorted `(upper_bound, factor)` pairs.
///
/// Returns the factor paired with the smallest upper bound that is greater
/// than or equal to `value`.
#[must_use]
pub fn select_factor(value: f64, table: &[(f64, f64)], overflow: Overflow) -> Option<f64> {
    table
        .iter()
        .find(|(upper, _)| value <= *upper)
        .map(|(_, factor)| *factor)
        .or_else(|| match overflow {
            Overflow::Clamp => table.last().map(|(_, factor)| *factor),
            Overflow::Reject => None,
        })
}

/// Divides two stress quantities, treating a zero denominator as a ratio of
/// 1.0 (the worst case).
#[must_use]
pub fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        1.0
    } else {
        numerator / denominator
    }
}

/// Converts a 1-based external ID into a 0-based index.
#[must_use]
pub fn id_index(id: u32) -> Option<usize> {
    usize::try_from(id).ok()?.checked_sub(1)
}

/// Looks up a value by 1-based ID, returning `None` on a miss.
#[must_use]
pub fn by_id<T: Copy>(table: &[T], id: u32) -> Option<T> {
    id_index(id).and_then(|index| table.get(index).copied())
}

/// Looks up an environment factor, returning 0.0 on a miss.
#[must_use]
pub fn environment_factor(row: &EnvironmentRow, environment_active_id: u32) -> f64 {
    Environment::from_id(environment_active_id).map_or(0.0, |environment| row[environment.index()])
}

/// Looks up a quality factor, returning 0.0 on a miss.
#[must_use]
pub fn quality_factor(table: &[f64], quality_id: u32) -> f64 {
    by_id(table, quality_id).unwrap_or(0.0)
}

/// Indexes a table by 1-based ID.
///
/// # Errors
///
/// Returns [`PredictionError::IndexOutOfRange`] if the ID is zero or past
/// the end of the table.
pub fn index_by_id<'a, T>(
    table: &'a [T],
    id: u32,
    table_name: &'static str,
    key: &'static str,
    hardware_id: u32,
) -> PredictionResult<&'a T> {
    id_index(id)
        .and_then(|index| table.get(index))
        .ok_or(PredictionError::IndexOutOfRange {
            table: table_name,
            key,
            value: id,
            hardware_id,
        })
}

/// Finds the entry for `id` in a keyed table.
///
/// # Errors
///
/// Returns [`PredictionError::MissingKey`] if no entry has that key.
pub fn key_by_id<'a, T>(
    table: &'a [(u32, T)],
    id: u32,
    table_name: &'static str,
    key: &'static str,
    hardware_id: u32,
) -> PredictionResult<&'a T> {
    table
        .iter()
        .find(|(k, _)| *k == id)
        .map(|(_, value)| value)
        .ok_or(PredictionError::MissingKey {
            table: table_name,
            key,
            value: id,
            hardware_id,
        })
}

/// Arrhenius temperature factor relative to 25 °C.
///
/// `exp(-Ea/k · (1/(T + 273) - 1/298))`
#[must_use]
pub fn arrhenius(activation_energy: f64, temperature: f64) -> f64 {
    (-activation_energy / BOLTZMANN * (1.0 / (temperature + 273.0) - 1.0 / REFERENCE_TEMPERATURE))
        .exp()
}

/// Arrhenius factor expressed with a pre-divided `Ea/k` constant (K), the
/// form the handbook prints for most semiconductor models.
#[must_use]
pub fn arrhenius_k(ea_over_k: f64, temperature: f64) -> f64 {
    (-ea_over_k * (1.0 / (temperature + 273.0) - 1.0 / REFERENCE_TEMPERATURE)).exp()
}

/// Hot spot temperature of an inductive device (°C).
///
/// `THS = TA + 1.1·ΔT`
#[must_use]
pub fn hot_spot_temperature(temperature_active: f64, temperature_rise: f64) -> f64 {
    1.1f64.mul_add(temperature_rise, temperature_active)
}

/// Temperature rise of an inductive device from its power loss (°C).
///
/// Uses the radiating surface area when known (`125·WL/A`), otherwise the
/// weight (`11.5·WL/W^0.6766`). Returns 0.0 when neither is known.
#[must_use]
pub fn temperature_rise(power_operating: f64, area: f64, weight: f64) -> f64 {
    if area > 0.0 {
        125.0 * power_operating / area
    } else if weight > 0.0 {
        11.5 * power_operating / weight.powf(0.6766)
    } else {
        0.0
    }
}

/// Junction temperature of a semiconductor (°C).
///
/// `Tj = Tc + θjc·P`
#[must_use]
pub fn junction_temperature(temperature_case: f64, theta_jc: f64, power_operating: f64) -> f64 {
    theta_jc.mul_add(power_operating, temperature_case)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PI_T: [(f64, f64); 4] = [(0.5, 0.5), (0.6, 0.6), (0.8, 0.8), (1.0, 1.0)];

    #[test]
    fn select_factor_picks_smallest_bound_above() {
        assert_eq!(select_factor(0.3, &PI_T, Overflow::Clamp), Some(0.5));
        assert_eq!(select_factor(0.5, &PI_T, Overflow::Clamp), Some(0.5));
        assert_eq!(select_factor(0.55, &PI_T, Overflow::Clamp), Some(0.6));
        assert_eq!(select_factor(0.95, &PI_T, Overflow::Clamp), Some(1.0));
    }

    #[test]
    fn select_factor_overflow_policies() {
        assert_eq!(select_factor(1.2, &PI_T, Overflow::Clamp), Some(1.0));
        assert_eq!(select_factor(1.2, &PI_T, Overflow::Reject), None);
        assert_eq!(select_factor(1.0, &[], Overflow::Clamp), None);
    }

    #[test]
    fn environment_factor_by_column() {
        let row: EnvironmentRow = std::array::from_fn(|index| index as f64 + 1.0);
        assert!((environment_factor(&row, 1) - 1.0).abs() < f64::EPSILON);
        assert!((environment_factor(&row, 14) - 14.0).abs() < f64::EPSILON);
        assert!(environment_factor(&row, 0).abs() < f64::EPSILON);
        assert!(environment_factor(&row, 15).abs() < f64::EPSILON);
    }

    #[test]
    fn ratio_zero_guard() {
        assert!((ratio(32.0, 0.0) - 1.0).abs() < f64::EPSILON);
        assert!((ratio(1.5, 5.0) - 0.3).abs() < 1e-12);
    }

    #[test]
    fn by_id_is_one_based() {
        let table = [10.0, 20.0, 30.0];
        assert_eq!(by_id(&table, 1), Some(10.0));
        assert_eq!(by_id(&table, 3), Some(30.0));
        assert_eq!(by_id(&table, 0), None);
        assert_eq!(by_id(&table, 4), None);
    }

    #[test]
    fn index_by_id_reports_table_and_key() {
        let table = [1.0, 2.0];
        let error = index_by_id(&table, 5, "meter type", "type_id", 12).unwrap_err();
        assert_eq!(
            error,
            PredictionError::IndexOutOfRange {
                table: "meter type",
                key: "type_id",
                value: 5,
                hardware_id: 12,
            }
        );
        assert!((index_by_id(&table, 2, "meter type", "type_id", 12).unwrap() - 2.0_f64).abs() < f64::EPSILON);
    }

    #[test]
    fn key_by_id_reports_missing_key() {
        let table = [(12, 0.1), (22, 0.989)];
        assert!((key_by_id(&table, 22, "gauge", "contact_gauge", 1).unwrap() - 0.989_f64).abs() < f64::EPSILON);
        assert!(matches!(
            key_by_id(&table, 18, "gauge", "contact_gauge", 1),
            Err(PredictionError::MissingKey { value: 18, .. })
        ));
    }

    #[test]
    fn arrhenius_is_one_at_reference_temperature() {
        assert!((arrhenius(0.35, 25.0) - 1.0).abs() < 1e-12);
        assert!((arrhenius_k(3091.0, 25.0) - 1.0).abs() < 1e-12);
        assert!(arrhenius(0.35, 85.0) > 1.0);
    }

    #[test]
    fn thermal_helpers() {
        assert!((hot_spot_temperature(40.0, 10.0) - 51.0).abs() < 1e-12);
        assert!((temperature_rise(0.5, 2.5, 0.0) - 25.0).abs() < 1e-12);
        assert!((temperature_rise(0.0, 0.0, 0.0)).abs() < f64::EPSILON);
        assert!((junction_temperature(45.0, 10.0, 0.5) - 50.0).abs() < 1e-12);
    }
}
