//! MIL-HDBK-217F Section 10 capacitor models.
//!
//! Every style uses the same part stress form
//!
//! `λp = λb·πT·πCV·πV·πSR·πQ·πE`
//!
//! with a style-specific constant base hazard rate, activation energy,
//! capacitance exponent and voltage stress curve. Solid tantalum (CSR)
//! carries a series resistance factor, non-solid tantalum (CLR) a
//! construction factor `πC` and vacuum/gas (CG) a configuration factor
//! `πCF`; the other styles use 1.0 for those.

use crate::milhdbk217f::attributes::Attributes;
use crate::milhdbk217f::derating::{Derating, StressLimit};
use crate::milhdbk217f::dormant::{self, DormantFactors};
use crate::milhdbk217f::environment::EnvironmentRow;
use crate::milhdbk217f::error::{PredictionError, PredictionResult};
use crate::milhdbk217f::lookup::{self, by_id, index_by_id, select_factor, Overflow};
use crate::milhdbk217f::messages;
use crate::milhdbk217f::models::{
    default_id_if_unset, default_if_unset, default_rating, finish_part_count, finish_part_stress,
    ComponentCalculator,
};

/// Subcategory of solid tantalum capacitors (CSR).
const SOLID_TANTALUM: u32 = 12;

/// Subcategory of non-solid tantalum capacitors (CLR).
const NON_SOLID_TANTALUM: u32 = 13;

/// Subcategory of vacuum or gas capacitors (CG).
const VACUUM: u32 = 19;

const PART_COUNT_LAMBDA_B: [EnvironmentRow; 19] = [
    [0.0036, 0.0072, 0.033, 0.016, 0.055, 0.023, 0.030, 0.070, 0.13, 0.083, 0.0018, 0.044, 0.12, 2.1],
    [0.0039, 0.0087, 0.042, 0.022, 0.070, 0.035, 0.047, 0.19, 0.35, 0.13, 0.0020, 0.056, 0.19, 2.5],
    [0.0047, 0.0096, 0.044, 0.034, 0.073, 0.030, 0.040, 0.094, 0.15, 0.11, 0.0024, 0.058, 0.18, 2.7],
    [0.0021, 0.0042, 0.017, 0.010, 0.030, 0.0068, 0.013, 0.026, 0.048, 0.044, 0.0010, 0.023, 0.063, 1.1],
    [0.0029, 0.0058, 0.023, 0.014, 0.041, 0.012, 0.018, 0.037, 0.066, 0.060, 0.0014, 0.032, 0.088, 1.5],
    [0.0023, 0.0092, 0.019, 0.012, 0.033, 0.0096, 0.0093, 0.019, 0.028, 0.050, 0.0012, 0.029, 0.081, 1.1],
    [0.0005, 0.0015, 0.0091, 0.0044, 0.014, 0.0068, 0.0095, 0.054, 0.069, 0.031, 0.00025, 0.012, 0.046, 0.45],
    [0.018, 0.037, 0.19, 0.094, 0.31, 0.10, 0.14, 0.47, 0.60, 0.48, 0.0091, 0.25, 0.68, 11.0],
    [0.00032, 0.00096, 0.0059, 0.0029, 0.0094, 0.0044, 0.0062, 0.035, 0.045, 0.020, 0.00016, 0.0076, 0.030, 0.29],
    [0.0036, 0.0074, 0.034, 0.019, 0.056, 0.015, 0.015, 0.032, 0.048, 0.077, 0.0014, 0.049, 0.13, 2.3],
    [0.00078, 0.0022, 0.013, 0.0056, 0.023, 0.0077, 0.015, 0.053, 0.12, 0.048, 0.00039, 0.017, 0.065, 0.68],
    [0.0018, 0.0039, 0.016, 0.0097, 0.028, 0.0091, 0.011, 0.034, 0.057, 0.055, 0.00072, 0.022, 0.066, 1.0],
    [0.0061, 0.013, 0.069, 0.039, 0.11, 0.031, 0.061, 0.13, 0.29, 0.18, 0.0030, 0.086, 0.30, 4.0],
    [0.024, 0.061, 0.42, 0.18, 0.59, 0.46, 0.55, 0.97, 1.3, 0.98, 0.012, 0.52, 1.6, 28.0],
    [0.029, 0.081, 0.58, 0.24, 0.83, 0.73, 0.88, 1.4, 2.0, 1.5, 0.015, 0.74, 2.2, 41.0],
    [0.08, 0.27, 1.2, 0.71, 2.3, 0.69, 1.1, 6.2, 12.0, 4.1, 0.032, 1.9, 5.9, 85.0],
    [0.033, 0.13, 0.62, 0.31, 0.93, 0.21, 0.28, 2.2, 3.3, 2.2, 0.016, 0.93, 3.2, 37.0],
    [0.08, 0.33, 1.6, 0.87, 3.0, 1.0, 1.7, 9.9, 19.0, 8.1, 0.032, 2.5, 8.9, 100.0],
    [0.4, 1.3, 6.8, 3.6, 13.0, 5.7, 10.0, 58.0, 90.0, 23.0, 20.0, 0.0, 0.0, 0.0],
];

const PART_COUNT_PI_Q: [f64; 6] = [0.030, 0.10, 0.30, 1.0, 3.0, 10.0];

/// Established reliability styles (S, R, P, M, non-ER MIL-SPEC, lower).
const ER_PI_Q: &[f64] = &[0.03, 0.1, 0.3, 1.0, 3.0, 10.0];

/// Tantalum styles add the D, C and B levels ahead of S.
const TANTALUM_PI_Q: &[f64] = &[0.001, 0.01, 0.03, 0.03, 0.1, 0.3, 1.0, 1.5, 3.0, 10.0];

/// Non-established reliability styles (MIL-SPEC, lower).
const NON_ER_PI_Q: &[f64] = &[3.0, 10.0];

const PART_STRESS_PI_Q: [&[f64]; 19] = [
    NON_ER_PI_Q,
    NON_ER_PI_Q,
    NON_ER_PI_Q,
    ER_PI_Q,
    ER_PI_Q,
    ER_PI_Q,
    ER_PI_Q,
    NON_ER_PI_Q,
    ER_PI_Q,
    ER_PI_Q,
    ER_PI_Q,
    TANTALUM_PI_Q,
    TANTALUM_PI_Q,
    ER_PI_Q,
    NON_ER_PI_Q,
    NON_ER_PI_Q,
    NON_ER_PI_Q,
    NON_ER_PI_Q,
    NON_ER_PI_Q,
];

const PI_E: [EnvironmentRow; 19] = [
    [1.0, 2.0, 9.0, 5.0, 15.0, 6.0, 8.0, 17.0, 32.0, 22.0, 0.5, 12.0, 32.0, 570.0],
    [1.0, 2.0, 9.0, 5.0, 15.0, 6.0, 8.0, 17.0, 32.0, 22.0, 0.5, 12.0, 32.0, 570.0],
    [1.0, 2.0, 9.0, 5.0, 15.0, 6.0, 8.0, 17.0, 28.0, 22.0, 0.5, 12.0, 32.0, 570.0],
    [1.0, 2.0, 8.0, 5.0, 14.0, 4.0, 6.0, 11.0, 20.0, 20.0, 0.5, 11.0, 29.0, 530.0],
    [1.0, 2.0, 10.0, 5.0, 16.0, 6.0, 11.0, 18.0, 30.0, 23.0, 0.5, 13.0, 34.0, 610.0],
    [1.0, 2.0, 10.0, 5.0, 16.0, 6.0, 11.0, 18.0, 30.0, 23.0, 0.5, 13.0, 34.0, 610.0],
    [1.0, 2.0, 10.0, 6.0, 16.0, 5.0, 7.0, 22.0, 28.0, 23.0, 0.5, 13.0, 34.0, 610.0],
    [1.0, 2.0, 10.0, 6.0, 16.0, 5.0, 7.0, 22.0, 28.0, 23.0, 0.5, 13.0, 34.0, 610.0],
    [1.0, 2.0, 10.0, 6.0, 16.0, 5.0, 7.0, 22.0, 28.0, 23.0, 0.5, 13.0, 34.0, 610.0],
    [1.0, 2.0, 9.0, 5.0, 15.0, 4.0, 4.0, 8.0, 12.0, 20.0, 0.4, 13.0, 34.0, 610.0],
    [1.0, 2.0, 10.0, 5.0, 17.0, 4.0, 8.0, 16.0, 35.0, 24.0, 0.5, 13.0, 34.0, 610.0],
    [1.0, 2.0, 8.0, 5.0, 14.0, 4.0, 5.0, 12.0, 20.0, 24.0, 0.4, 11.0, 29.0, 530.0],
    [1.0, 2.0, 10.0, 6.0, 16.0, 4.0, 8.0, 14.0, 30.0, 23.0, 0.5, 13.0, 34.0, 610.0],
    [1.0, 2.0, 12.0, 6.0, 17.0, 10.0, 12.0, 28.0, 35.0, 27.0, 0.5, 14.0, 38.0, 690.0],
    [1.0, 2.0, 12.0, 6.0, 17.0, 10.0, 12.0, 28.0, 35.0, 27.0, 0.5, 14.0, 38.0, 690.0],
    [1.0, 3.0, 13.0, 8.0, 24.0, 6.0, 10.0, 37.0, 70.0, 36.0, 0.4, 20.0, 52.0, 950.0],
    [1.0, 3.0, 12.0, 7.0, 18.0, 3.0, 4.0, 20.0, 30.0, 32.0, 0.5, 18.0, 46.0, 830.0],
    [1.0, 3.0, 13.0, 8.0, 24.0, 6.0, 10.0, 37.0, 70.0, 36.0, 0.4, 20.0, 52.0, 950.0],
    [1.0, 3.0, 14.0, 8.0, 27.0, 10.0, 18.0, 70.0, 108.0, 40.0, 0.5, 0.0, 0.0, 0.0],
];

/// Part stress constants for one capacitor style.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    /// Base hazard rate.
    pub lambda_b: f64,
    /// Activation energy for `πT` (eV).
    pub activation_energy: f64,
    /// Exponent of the capacitance factor `πCV = C^x` (C in µF).
    pub capacitance_exponent: f64,
    /// Voltage stress divisor in `πV = (S/d)^e + 1`.
    pub voltage_divisor: f64,
    /// Voltage stress exponent in `πV = (S/d)^e + 1`.
    pub voltage_exponent: f64,
}

impl Style {
    const fn new(
        lambda_b: f64,
        activation_energy: f64,
        capacitance_exponent: f64,
        voltage_divisor: f64,
        voltage_exponent: f64,
    ) -> Self {
        Self {
            lambda_b,
            activation_energy,
            capacitance_exponent,
            voltage_divisor,
            voltage_exponent,
        }
    }

    /// Capacitance factor.
    #[must_use]
    pub fn capacitance_factor(&self, capacitance: f64) -> f64 {
        if self.capacitance_exponent <= 0.0 {
            1.0
        } else {
            capacitance.powf(self.capacitance_exponent)
        }
    }

    /// Voltage stress factor.
    #[must_use]
    pub fn voltage_factor(&self, voltage_ratio: f64) -> f64 {
        (voltage_ratio / self.voltage_divisor).powf(self.voltage_exponent) + 1.0
    }
}

/// Style constants by subcategory (CP, CA, CZ, CH, CFR, CRH, CM, CB, CY, CK,
/// CC, CSR, CLR, CU, CE, CV, PC, CT, CG).
const STYLES: [Style; 19] = [
    Style::new(0.00037, 0.15, 0.09, 0.6, 5.0),
    Style::new(0.00037, 0.15, 0.09, 0.6, 5.0),
    Style::new(0.00051, 0.15, 0.09, 0.6, 5.0),
    Style::new(0.00037, 0.15, 0.09, 0.6, 5.0),
    Style::new(0.00051, 0.15, 0.09, 0.6, 5.0),
    Style::new(0.00051, 0.15, 0.09, 0.6, 5.0),
    Style::new(0.00076, 0.35, 0.09, 0.6, 5.0),
    Style::new(0.00076, 0.35, 0.09, 0.6, 5.0),
    Style::new(0.00076, 0.35, 0.09, 0.6, 5.0),
    Style::new(0.00099, 0.35, 0.09, 0.6, 3.0),
    Style::new(0.00099, 0.35, 0.09, 0.6, 3.0),
    Style::new(0.00040, 0.15, 0.12, 0.6, 17.0),
    Style::new(0.00005, 0.15, 0.12, 0.6, 17.0),
    Style::new(0.00012, 0.35, 0.23, 0.6, 3.0),
    Style::new(0.00012, 0.35, 0.23, 0.6, 3.0),
    Style::new(0.0079, 0.15, 0.0, 0.6, 3.0),
    Style::new(0.0060, 0.15, 0.0, 0.5, 3.0),
    Style::new(0.000_032, 0.15, 0.0, 0.5, 3.0),
    Style::new(0.0077, 0.20, 0.0, 0.6, 3.0),
];

/// Solid tantalum series resistance factor by circuit resistance per volt
/// (Ω/V), lowest resistance is worst.
const PI_SR: [(f64, f64); 6] = [
    (0.1, 3.3),
    (0.2, 2.7),
    (0.4, 2.0),
    (0.6, 1.3),
    (0.8, 1.0),
    (f64::MAX, 0.66),
];

/// Non-solid tantalum construction factors (slug/all tantalum, foil/hermetic,
/// slug/hermetic, slug/elastomer, foil/elastomer).
const PI_C: [f64; 5] = [0.3, 1.0, 2.0, 2.5, 3.0];

/// Vacuum/gas configuration factors (fixed, variable).
const PI_CF: [f64; 2] = [0.1, 1.0];

const VOLTAGE_LIMIT: StressLimit = StressLimit::new(0.60, 0.90);
const TEMPERATURE_MARGIN: StressLimit = StressLimit::harsh_only(10.0);

/// Calculator for capacitors (category 4).
#[derive(Debug, Default)]
pub struct CapacitorCalculator;

/// Applied voltage (AC peak plus DC) over rated voltage, zero-guarded.
#[must_use]
pub fn voltage_ratio(attributes: &Attributes) -> f64 {
    lookup::ratio(
        attributes.voltage_ac_operating + attributes.voltage_dc_operating,
        attributes.voltage_rated,
    )
}

/// Selects the solid tantalum series resistance factor from the effective
/// series resistance and applied voltage.
#[must_use]
pub fn series_resistance_factor(resistance: f64, voltage_applied: f64) -> f64 {
    let ohms_per_volt = lookup::ratio(resistance, voltage_applied);
    select_factor(ohms_per_volt, &PI_SR, Overflow::Clamp).unwrap_or(1.0)
}

/// Returns the style constants for a subcategory.
///
/// # Errors
///
/// Returns [`PredictionError::UnsupportedCategory`] for an unknown subcategory.
pub fn style(attributes: &Attributes) -> PredictionResult<Style> {
    by_id(&STYLES, attributes.subcategory_id).ok_or(PredictionError::UnsupportedCategory {
        category_id: attributes.category_id,
        subcategory_id: attributes.subcategory_id,
    })
}

impl ComponentCalculator for CapacitorCalculator {
    fn name(&self) -> &'static str {
        "capacitor"
    }

    fn dormant_factors(&self) -> &'static DormantFactors {
        &dormant::CAPACITOR
    }

    fn calculate_part_count(&self, attributes: &mut Attributes) -> String {
        let lambda_b = by_id(&PART_COUNT_LAMBDA_B, attributes.subcategory_id)
            .and_then(|row| by_id(&row, attributes.environment_active_id));
        let pi_q = by_id(&PART_COUNT_PI_Q, attributes.quality_id);
        finish_part_count(self.name(), attributes, lambda_b, pi_q)
    }

    fn calculate_part_stress(&self, attributes: &mut Attributes) -> PredictionResult<String> {
        let style = style(attributes)?;
        let hardware_id = attributes.hardware_id;
        let subcategory_id = attributes.subcategory_id;

        attributes.voltage_ratio = voltage_ratio(attributes);
        attributes.lambda_b = style.lambda_b;
        attributes.pi_q = by_id(&PART_STRESS_PI_Q, subcategory_id)
            .map_or(0.0, |table| lookup::quality_factor(table, attributes.quality_id));
        attributes.pi_e = by_id(&PI_E, subcategory_id)
            .map_or(0.0, |row| lookup::environment_factor(&row, attributes.environment_active_id));
        attributes.pi_t = lookup::arrhenius(style.activation_energy, attributes.temperature_active);
        attributes.pi_cv = style.capacitance_factor(attributes.capacitance);
        attributes.pi_v = style.voltage_factor(attributes.voltage_ratio);

        attributes.pi_sr = if subcategory_id == SOLID_TANTALUM {
            series_resistance_factor(
                attributes.resistance,
                attributes.voltage_ac_operating + attributes.voltage_dc_operating,
            )
        } else {
            1.0
        };
        attributes.pi_c = if subcategory_id == NON_SOLID_TANTALUM {
            *index_by_id(
                &PI_C,
                attributes.construction_id,
                "non-solid tantalum construction",
                "construction_id",
                hardware_id,
            )?
        } else {
            1.0
        };
        // Vacuum and gas capacitors record fixed or variable configuration
        // in construction_id.
        attributes.pi_cf = if subcategory_id == VACUUM {
            *index_by_id(
                &PI_CF,
                attributes.construction_id,
                "vacuum capacitor configuration",
                "construction_id",
                hardware_id,
            )?
        } else {
            1.0
        };

        let hazard_rate = attributes.lambda_b
            * attributes.pi_t
            * attributes.pi_cv
            * attributes.pi_v
            * attributes.pi_sr
            * attributes.pi_c
            * attributes.pi_cf
            * attributes.pi_q
            * attributes.pi_e;
        let mut msg = finish_part_stress(self.name(), attributes, hazard_rate);
        msg.push_str(&messages::check_factors(self.name(), attributes, &[("piCV", attributes.pi_cv)]));
        Ok(msg)
    }

    fn overstressed(&self, attributes: &mut Attributes) {
        let voltage = attributes.voltage_ac_operating + attributes.voltage_dc_operating;
        let temperature = attributes.temperature_active;
        Derating::new(attributes)
            .ratio("voltage", voltage, attributes.voltage_rated, VOLTAGE_LIMIT)
            .margin(
                "Operating temperature within 10.0C of maximum rated temperature",
                temperature,
                attributes.temperature_rated_max,
                TEMPERATURE_MARGIN,
            )
            .finish(attributes);
    }

    fn set_default_values(&self, attributes: &mut Attributes) {
        default_rating(
            attributes.voltage_ac_operating + attributes.voltage_dc_operating,
            &mut attributes.voltage_rated,
            0.5,
        );
        default_if_unset(&mut attributes.temperature_rated_max, 125.0);
        default_if_unset(&mut attributes.capacitance, 1.0);
        if attributes.subcategory_id == SOLID_TANTALUM {
            default_if_unset(&mut attributes.resistance, 0.5);
        }
        default_id_if_unset(&mut attributes.construction_id, 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ceramic() -> Attributes {
        let mut attributes = Attributes::new(4, 10);
        attributes.hardware_id = 4;
        attributes.quality_id = 4;
        attributes.environment_active_id = 1;
        attributes.temperature_active = 25.0;
        attributes.capacitance = 1.0;
        attributes.voltage_dc_operating = 3.0;
        attributes.voltage_rated = 10.0;
        attributes
    }

    #[test]
    fn part_count() {
        let mut attributes = ceramic();
        attributes.quality_id = 5;
        attributes.environment_active_id = 3;
        let msg = CapacitorCalculator.calculate_part_count(&mut attributes);
        assert_eq!(msg, "");
        assert!((attributes.hazard_rate_active - 0.034 * 3.0).abs() < 1e-12);
    }

    #[test]
    fn part_count_unknown_subcategory_warns() {
        let mut attributes = Attributes::new(4, 20);
        attributes.hardware_id = 9;
        attributes.quality_id = 1;
        attributes.environment_active_id = 1;
        let msg = CapacitorCalculator.calculate_part_count(&mut attributes);
        assert!(msg.starts_with("RAMSTK WARNING: Base hazard rate is 0.0 when calculating capacitor"));
        assert!(attributes.hazard_rate_active.abs() < f64::EPSILON);
    }

    #[test]
    fn part_stress_ceramic() {
        let mut attributes = ceramic();

        let msg = CapacitorCalculator.calculate_part_stress(&mut attributes).unwrap();

        assert_eq!(msg, "");
        assert!((attributes.voltage_ratio - 0.3).abs() < 1e-12);
        assert!((attributes.pi_t - 1.0).abs() < 1e-12);
        assert!((attributes.pi_cv - 1.0).abs() < 1e-12);
        let pi_v = 0.5_f64.powi(3) + 1.0;
        assert!((attributes.pi_v - pi_v).abs() < 1e-12);
        assert!((attributes.hazard_rate_active - 0.00099 * pi_v).abs() < 1e-12);
    }

    #[test]
    fn part_stress_solid_tantalum() {
        let mut attributes = ceramic();
        attributes.subcategory_id = 12;
        attributes.quality_id = 7;
        attributes.capacitance = 47.0;
        attributes.resistance = 1.5;
        attributes.voltage_dc_operating = 5.0;

        CapacitorCalculator.calculate_part_stress(&mut attributes).unwrap();

        assert!((attributes.pi_sr - 2.0).abs() < f64::EPSILON);
        assert!((attributes.pi_cv - 47.0_f64.powf(0.12)).abs() < 1e-12);
        assert!((attributes.pi_q - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn part_stress_construction_and_configuration() {
        let mut attributes = ceramic();
        attributes.subcategory_id = 13;
        attributes.construction_id = 4;
        CapacitorCalculator.calculate_part_stress(&mut attributes).unwrap();
        assert!((attributes.pi_c - 2.5).abs() < f64::EPSILON);

        attributes.construction_id = 6;
        assert!(matches!(
            CapacitorCalculator.calculate_part_stress(&mut attributes),
            Err(PredictionError::IndexOutOfRange { key: "construction_id", value: 6, .. })
        ));

        attributes.subcategory_id = 19;
        attributes.quality_id = 1;
        attributes.construction_id = 1;
        CapacitorCalculator.calculate_part_stress(&mut attributes).unwrap();
        assert!((attributes.pi_cf - 0.1).abs() < f64::EPSILON);
        assert!((attributes.pi_cv - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn part_stress_zero_capacitance_warns() {
        let mut attributes = ceramic();
        attributes.subcategory_id = 4;
        attributes.capacitance = 0.0;

        let msg = CapacitorCalculator.calculate_part_stress(&mut attributes).unwrap();

        assert!(attributes.pi_cv.abs() < f64::EPSILON);
        assert!(attributes.hazard_rate_active.abs() < f64::EPSILON);
        assert_eq!(
            msg,
            "RAMSTK WARNING: piCV is 0.0 when calculating capacitor, hardware ID: 4.\n"
        );
    }

    #[test]
    fn series_resistance_bins() {
        assert!((series_resistance_factor(0.05, 1.0) - 3.3).abs() < f64::EPSILON);
        assert!((series_resistance_factor(3.0, 1.0) - 0.66).abs() < f64::EPSILON);
        assert!((series_resistance_factor(0.7, 1.0) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn unknown_subcategory_is_an_error() {
        let mut attributes = ceramic();
        attributes.subcategory_id = 20;
        assert!(matches!(
            CapacitorCalculator.calculate_part_stress(&mut attributes),
            Err(PredictionError::UnsupportedCategory { category_id: 4, subcategory_id: 20 })
        ));
    }

    #[test]
    fn overstress_voltage_and_temperature() {
        let mut attributes = ceramic();
        attributes.environment_active_id = 6;
        attributes.voltage_dc_operating = 7.0;
        attributes.temperature_active = 120.0;
        attributes.temperature_rated_max = 125.0;
        CapacitorCalculator.overstressed(&mut attributes);
        assert_eq!(
            attributes.reason,
            "1. Operating voltage > 60% rated voltage.\n\
             2. Operating temperature within 10.0C of maximum rated temperature.\n"
        );

        attributes.environment_active_id = 2;
        CapacitorCalculator.overstressed(&mut attributes);
        assert!(!attributes.overstress);
    }

    #[test]
    fn default_values() {
        let mut attributes = Attributes::new(4, 12);
        attributes.voltage_dc_operating = 6.0;
        CapacitorCalculator.set_default_values(&mut attributes);
        assert!((attributes.voltage_rated - 12.0).abs() < 1e-12);
        assert!((attributes.resistance - 0.5).abs() < f64::EPSILON);
        assert!((attributes.temperature_rated_max - 125.0).abs() < f64::EPSILON);
    }
}
