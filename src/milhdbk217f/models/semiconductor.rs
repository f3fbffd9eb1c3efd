//! MIL-HDBK-217F Section 6 discrete semiconductor models.
//!
//! Subcategories:
//! - 1: low frequency diodes
//! - 3: low frequency bipolar transistors
//! - 4: low frequency silicon FETs
//! - 5: unijunction transistors
//! - 10: thyristors and SCRs
//!
//! Diodes and transistors convert to dormant hazard rates with different
//! factors, so the family is split into [`DiodeCalculator`] and
//! [`TransistorCalculator`]. Both share the junction temperature model:
//! `Tj = Tc + θjc·P`, with the environment's default case temperature when
//! no case temperature is given.

use crate::milhdbk217f::attributes::Attributes;
use crate::milhdbk217f::derating::{Derating, StressLimit};
use crate::milhdbk217f::dormant::{self, DormantFactors};
use crate::milhdbk217f::environment::{Environment, EnvironmentRow};
use crate::milhdbk217f::error::{PredictionError, PredictionResult};
use crate::milhdbk217f::lookup::{self, by_id, index_by_id, select_factor, Overflow};
use crate::milhdbk217f::models::{
    default_id_if_unset, default_if_unset, default_rating, finish_part_count, finish_part_stress,
    ComponentCalculator,
};

/// Parts count base hazard rates keyed by subcategory. Diodes and FETs are
/// further selected by `type_id`.
const PART_COUNT_LAMBDA_B: [(u32, &[EnvironmentRow]); 5] = [
    (
        1,
        &[
            [0.0036, 0.028, 0.049, 0.043, 0.10, 0.092, 0.21, 0.20, 0.44, 0.17, 0.0018, 0.076, 0.23, 1.5],
            [0.00094, 0.0075, 0.013, 0.011, 0.027, 0.024, 0.054, 0.054, 0.12, 0.045, 0.00047, 0.020, 0.060, 0.40],
            [0.065, 0.52, 0.89, 0.78, 1.9, 1.7, 3.7, 3.7, 8.0, 3.1, 0.032, 1.4, 4.1, 28.0],
            [0.0020, 0.022, 0.030, 0.018, 0.060, 0.037, 0.11, 0.074, 0.16, 0.082, 0.0010, 0.034, 0.094, 1.3],
            [0.0028, 0.022, 0.039, 0.034, 0.082, 0.073, 0.16, 0.16, 0.35, 0.13, 0.0014, 0.061, 0.18, 1.2],
            [0.0029, 0.023, 0.040, 0.035, 0.084, 0.075, 0.17, 0.17, 0.36, 0.14, 0.0015, 0.062, 0.18, 1.2],
            [0.0033, 0.024, 0.039, 0.035, 0.082, 0.066, 0.15, 0.13, 0.27, 0.12, 0.0016, 0.060, 0.16, 1.3],
            [0.0056, 0.040, 0.066, 0.060, 0.14, 0.11, 0.19, 0.17, 0.28, 0.20, 0.0028, 0.10, 0.28, 2.1],
        ],
    ),
    (
        3,
        &[[0.00015, 0.0011, 0.0017, 0.0017, 0.0037, 0.0030, 0.0067, 0.0060, 0.013, 0.0056, 0.000_073, 0.0027, 0.0074, 0.056]],
    ),
    (
        4,
        &[
            [0.0083, 0.065, 0.11, 0.099, 0.23, 0.21, 0.46, 0.44, 0.92, 0.38, 0.0041, 0.16, 0.49, 3.3],
            [0.0031, 0.024, 0.041, 0.036, 0.086, 0.077, 0.17, 0.16, 0.34, 0.14, 0.0015, 0.060, 0.18, 1.2],
        ],
    ),
    (
        5,
        &[[0.0035, 0.026, 0.043, 0.039, 0.090, 0.073, 0.18, 0.15, 0.34, 0.13, 0.0018, 0.062, 0.18, 1.2]],
    ),
    (
        10,
        &[[0.0025, 0.020, 0.034, 0.030, 0.072, 0.064, 0.14, 0.14, 0.31, 0.12, 0.0012, 0.053, 0.16, 1.1]],
    ),
];

/// Quality factors (JANTXV, JANTX, JAN, lower, plastic), shared by both
/// methods.
const PI_Q: [f64; 5] = [0.7, 1.0, 2.4, 5.5, 8.0];

const PI_E: EnvironmentRow = [1.0, 6.0, 9.0, 9.0, 19.0, 13.0, 29.0, 20.0, 43.0, 24.0, 0.5, 14.0, 32.0, 320.0];

/// Diode base hazard rates by type: general purpose analog, switching, fast
/// recovery power rectifier, Schottky power rectifier, stacked power
/// rectifier, transient suppressor, current regulator, voltage regulator.
const LAMBDA_B_DIODE: [f64; 8] = [0.0038, 0.0010, 0.069, 0.0030, 0.0050, 0.0013, 0.0034, 0.0020];

/// Diode contact construction factors (metallurgically bonded, spring
/// loaded).
const PI_C_DIODE: [f64; 2] = [1.0, 2.0];

/// Diode types whose temperature factor uses the regulator `Ea/k`.
const REGULATOR_TYPES: [u32; 2] = [7, 8];

const LAMBDA_B_BIPOLAR: f64 = 0.00074;

/// FET base hazard rates (MOSFET, JFET).
const LAMBDA_B_FET: [f64; 2] = [0.012, 0.0045];

const LAMBDA_B_UNIJUNCTION: f64 = 0.0083;

const LAMBDA_B_THYRISTOR: f64 = 0.0022;

/// Transistor application factors (linear amplification, switching).
const PI_A: [f64; 2] = [1.5, 0.7];

/// Power FET application factor by rated power (W).
const PI_A_POWER_FET: [(f64, f64); 4] = [(5.0, 2.0), (50.0, 4.0), (250.0, 8.0), (f64::MAX, 10.0)];

/// `Ea/k` (K) for each temperature factor.
const EA_DIODE: f64 = 3091.0;
const EA_REGULATOR: f64 = 1925.0;
const EA_BIPOLAR: f64 = 2114.0;
const EA_FET: f64 = 1925.0;
const EA_UNIJUNCTION: f64 = 2483.0;
const EA_THYRISTOR: f64 = 3082.0;

const STRESS_LIMIT: StressLimit = StressLimit::new(0.70, 0.90);
const JUNCTION_LIMIT: StressLimit = StressLimit::harsh_only(125.0);

/// Calculator for low frequency diodes (category 2, subcategory 1).
#[derive(Debug, Default)]
pub struct DiodeCalculator;

/// Calculator for transistors and thyristors (category 2, subcategories
/// 3, 4, 5 and 10).
#[derive(Debug, Default)]
pub struct TransistorCalculator;

/// Junction temperature (°C) from the case temperature, or the active
/// environment's default case temperature when none is given.
#[must_use]
pub fn junction_temperature(attributes: &Attributes) -> f64 {
    let case = if attributes.temperature_case > 0.0 {
        attributes.temperature_case
    } else {
        attributes
            .environment()
            .map_or(Environment::GroundBenign.default_case_temperature(), Environment::default_case_temperature)
    };
    lookup::junction_temperature(case, attributes.theta_jc, attributes.power_operating)
}

/// Applied (AC plus DC) to rated voltage ratio, zero-guarded.
#[must_use]
pub fn voltage_ratio(attributes: &Attributes) -> f64 {
    lookup::ratio(
        attributes.voltage_ac_operating + attributes.voltage_dc_operating,
        attributes.voltage_rated,
    )
}

/// Diode electrical stress factor. Transient suppressors and regulators
/// are not stress dependent.
#[must_use]
pub fn diode_stress_factor(type_id: u32, voltage_ratio: f64) -> f64 {
    match type_id {
        6..=8 => 1.0,
        _ if voltage_ratio <= 0.3 => 0.054,
        _ => voltage_ratio.powf(2.43),
    }
}

/// Bipolar transistor power rating factor.
#[must_use]
pub fn bipolar_rating_factor(power_rated: f64) -> f64 {
    if power_rated <= 0.1 {
        0.43
    } else {
        power_rated.powf(0.37)
    }
}

/// Bipolar transistor voltage stress factor `0.045·exp(3.1·Vs)`.
#[must_use]
pub fn bipolar_stress_factor(voltage_ratio: f64) -> f64 {
    0.045 * (3.1 * voltage_ratio).exp()
}

/// Thyristor voltage stress factor.
#[must_use]
pub fn thyristor_stress_factor(voltage_ratio: f64) -> f64 {
    if voltage_ratio <= 0.3 {
        0.1
    } else {
        voltage_ratio.powf(1.9)
    }
}

fn part_count(component: &str, attributes: &mut Attributes) -> String {
    let lambda_b = PART_COUNT_LAMBDA_B
        .iter()
        .find(|(id, _)| *id == attributes.subcategory_id)
        .and_then(|(_, rows)| {
            if rows.len() == 1 {
                rows.first().copied()
            } else {
                by_id(rows, attributes.type_id)
            }
        })
        .and_then(|row| by_id(&row, attributes.environment_active_id));
    let pi_q = by_id(&PI_Q, attributes.quality_id);
    finish_part_count(component, attributes, lambda_b, pi_q)
}

/// Writes the factors common to every semiconductor: `πQ`, `πE`, `Tj`, `πT`.
fn common_factors(attributes: &mut Attributes, ea_over_k: f64) {
    attributes.pi_q = lookup::quality_factor(&PI_Q, attributes.quality_id);
    attributes.pi_e = lookup::environment_factor(&PI_E, attributes.environment_active_id);
    attributes.temperature_junction = junction_temperature(attributes);
    attributes.pi_t = lookup::arrhenius_k(ea_over_k, attributes.temperature_junction);
}

impl ComponentCalculator for DiodeCalculator {
    fn name(&self) -> &'static str {
        "diode"
    }

    fn dormant_factors(&self) -> &'static DormantFactors {
        &dormant::DIODE
    }

    fn calculate_part_count(&self, attributes: &mut Attributes) -> String {
        part_count(self.name(), attributes)
    }

    fn calculate_part_stress(&self, attributes: &mut Attributes) -> PredictionResult<String> {
        let hardware_id = attributes.hardware_id;
        let type_id = attributes.type_id;
        attributes.lambda_b = *index_by_id(&LAMBDA_B_DIODE, type_id, "diode type", "type_id", hardware_id)?;
        let ea_over_k = if REGULATOR_TYPES.contains(&type_id) {
            EA_REGULATOR
        } else {
            EA_DIODE
        };
        common_factors(attributes, ea_over_k);
        attributes.voltage_ratio = voltage_ratio(attributes);
        attributes.pi_s = diode_stress_factor(type_id, attributes.voltage_ratio);
        attributes.pi_c = *index_by_id(
            &PI_C_DIODE,
            attributes.construction_id,
            "diode construction",
            "construction_id",
            hardware_id,
        )?;

        let hazard_rate = attributes.lambda_b
            * attributes.pi_t
            * attributes.pi_s
            * attributes.pi_c
            * attributes.pi_q
            * attributes.pi_e;
        Ok(finish_part_stress(self.name(), attributes, hazard_rate))
    }

    fn overstressed(&self, attributes: &mut Attributes) {
        let voltage = attributes.voltage_ac_operating + attributes.voltage_dc_operating;
        let junction = junction_temperature(attributes);
        Derating::new(attributes)
            .ratio("current", attributes.current_operating, attributes.current_rated, STRESS_LIMIT)
            .ratio("voltage", voltage, attributes.voltage_rated, STRESS_LIMIT)
            .maximum("Junction temperature > 125.0C", junction, JUNCTION_LIMIT)
            .finish(attributes);
    }

    fn set_default_values(&self, attributes: &mut Attributes) {
        set_common_defaults(attributes);
        default_rating(attributes.current_operating, &mut attributes.current_rated, 0.5);
        default_id_if_unset(&mut attributes.construction_id, 1);
    }
}

impl ComponentCalculator for TransistorCalculator {
    fn name(&self) -> &'static str {
        "transistor"
    }

    fn dormant_factors(&self) -> &'static DormantFactors {
        &dormant::TRANSISTOR
    }

    fn calculate_part_count(&self, attributes: &mut Attributes) -> String {
        part_count(self.name(), attributes)
    }

    fn calculate_part_stress(&self, attributes: &mut Attributes) -> PredictionResult<String> {
        let hardware_id = attributes.hardware_id;
        attributes.voltage_ratio = voltage_ratio(attributes);
        let hazard_rate = match attributes.subcategory_id {
            3 => {
                attributes.lambda_b = LAMBDA_B_BIPOLAR;
                common_factors(attributes, EA_BIPOLAR);
                attributes.pi_a =
                    *index_by_id(&PI_A, attributes.application_id, "transistor application", "application_id", hardware_id)?;
                attributes.pi_r = bipolar_rating_factor(attributes.power_rated);
                attributes.pi_s = bipolar_stress_factor(attributes.voltage_ratio);
                attributes.lambda_b
                    * attributes.pi_t
                    * attributes.pi_a
                    * attributes.pi_r
                    * attributes.pi_s
                    * attributes.pi_q
                    * attributes.pi_e
            }
            4 => {
                attributes.lambda_b = *index_by_id(&LAMBDA_B_FET, attributes.type_id, "FET type", "type_id", hardware_id)?;
                common_factors(attributes, EA_FET);
                attributes.pi_a = match attributes.application_id {
                    3 => select_factor(attributes.power_rated, &PI_A_POWER_FET, Overflow::Clamp).unwrap_or(1.0),
                    application_id => {
                        *index_by_id(&PI_A, application_id, "FET application", "application_id", hardware_id)?
                    }
                };
                attributes.lambda_b * attributes.pi_t * attributes.pi_a * attributes.pi_q * attributes.pi_e
            }
            5 => {
                attributes.lambda_b = LAMBDA_B_UNIJUNCTION;
                common_factors(attributes, EA_UNIJUNCTION);
                attributes.lambda_b * attributes.pi_t * attributes.pi_q * attributes.pi_e
            }
            10 => {
                attributes.lambda_b = LAMBDA_B_THYRISTOR;
                common_factors(attributes, EA_THYRISTOR);
                attributes.pi_r = attributes.current_rated.powf(0.40);
                attributes.pi_s = thyristor_stress_factor(attributes.voltage_ratio);
                attributes.lambda_b
                    * attributes.pi_t
                    * attributes.pi_r
                    * attributes.pi_s
                    * attributes.pi_q
                    * attributes.pi_e
            }
            subcategory_id => {
                return Err(PredictionError::UnsupportedCategory {
                    category_id: attributes.category_id,
                    subcategory_id,
                })
            }
        };
        Ok(finish_part_stress(self.name(), attributes, hazard_rate))
    }

    fn overstressed(&self, attributes: &mut Attributes) {
        let voltage = attributes.voltage_ac_operating + attributes.voltage_dc_operating;
        let junction = junction_temperature(attributes);
        Derating::new(attributes)
            .ratio("power", attributes.power_operating, attributes.power_rated, STRESS_LIMIT)
            .ratio("voltage", voltage, attributes.voltage_rated, STRESS_LIMIT)
            .maximum("Junction temperature > 125.0C", junction, JUNCTION_LIMIT)
            .finish(attributes);
    }

    fn set_default_values(&self, attributes: &mut Attributes) {
        set_common_defaults(attributes);
        default_rating(attributes.power_operating, &mut attributes.power_rated, 0.5);
        default_rating(attributes.current_operating, &mut attributes.current_rated, 0.5);
        default_id_if_unset(&mut attributes.application_id, 1);
    }
}

fn set_common_defaults(attributes: &mut Attributes) {
    default_rating(
        attributes.voltage_ac_operating + attributes.voltage_dc_operating,
        &mut attributes.voltage_rated,
        0.5,
    );
    default_if_unset(&mut attributes.temperature_rated_max, 125.0);
    default_id_if_unset(&mut attributes.type_id, 1);
}
