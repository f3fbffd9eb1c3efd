//! MIL-HDBK-217F Section 9 resistor models.
//!
//! Subcategories:
//!
//! | ID | Style   | Description                               |
//! |----|---------|-------------------------------------------|
//! |  1 | RC      | Fixed, composition                        |
//! |  2 | RL/RN   | Fixed, film                               |
//! |  3 | RD      | Fixed, film, power                        |
//! |  4 | RZ      | Fixed, network, film                      |
//! |  5 | RB      | Fixed, wirewound, accurate                |
//! |  6 | RW      | Fixed, wirewound, power                   |
//! |  7 | RE      | Fixed, wirewound, power, chassis mounted  |
//! |  8 | RTH     | Thermistor                                |
//! |  9 | RT      | Variable, wirewound                       |
//! | 10 | RR      | Variable, wirewound, precision            |
//! | 11 | RA      | Variable, wirewound, semiprecision        |
//! | 12 | RP      | Variable, wirewound, power                |
//! | 13 | RJ      | Variable, non-wirewound                   |
//! | 14 | RV      | Variable, composition                     |
//! | 15 | RQ      | Variable, non-wirewound, film and precision|
//!
//! Fixed resistors: `λp = λb·πR·πQ·πE`. Networks: `λp = λb·πT·πNR·πQ·πE`.
//! Thermistors: `λp = λb·πQ·πE`. Variables: `λp = λb·πTAPS·πC·πR·πV·πQ·πE`.
//!
//! The resistance factor tables clamp to their last bin except for the
//! power wirewound styles (RW, RE), whose tables end at the largest
//! resistance the style is built in; anything above yields `πR = 0`.

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

/// Parts count base hazard rates. Film (2) and the wirewound power styles
/// (6, 7) are further selected by `specification_id`.
const PART_COUNT_LAMBDA_B: [&[EnvironmentRow]; 15] = [
    &[[0.0005, 0.0022, 0.0071, 0.0037, 0.012, 0.0052, 0.0065, 0.016, 0.025, 0.025, 0.00025, 0.0098, 0.035, 0.36]],
    &[
        [0.0012, 0.0027, 0.011, 0.0054, 0.020, 0.0063, 0.013, 0.018, 0.033, 0.030, 0.00025, 0.014, 0.044, 0.69],
        [0.0012, 0.0027, 0.011, 0.0054, 0.020, 0.0063, 0.013, 0.018, 0.033, 0.030, 0.00025, 0.014, 0.044, 0.69],
        [0.0014, 0.0031, 0.013, 0.0061, 0.023, 0.0072, 0.014, 0.021, 0.038, 0.034, 0.00028, 0.016, 0.050, 0.78],
        [0.0014, 0.0031, 0.013, 0.0061, 0.023, 0.0072, 0.014, 0.021, 0.038, 0.034, 0.00028, 0.016, 0.050, 0.78],
    ],
    &[[0.012, 0.025, 0.13, 0.062, 0.21, 0.078, 0.10, 0.19, 0.24, 0.32, 0.0060, 0.18, 0.47, 8.2]],
    &[[0.0023, 0.0066, 0.031, 0.013, 0.055, 0.022, 0.043, 0.077, 0.15, 0.10, 0.0011, 0.055, 0.15, 1.7]],
    &[[0.0085, 0.018, 0.10, 0.045, 0.16, 0.15, 0.17, 0.30, 0.38, 0.26, 0.0068, 0.13, 0.37, 5.4]],
    &[
        [0.014, 0.031, 0.16, 0.077, 0.26, 0.073, 0.15, 0.19, 0.39, 0.42, 0.0042, 0.21, 0.62, 9.4],
        [0.013, 0.028, 0.15, 0.070, 0.24, 0.065, 0.13, 0.18, 0.35, 0.38, 0.0038, 0.19, 0.56, 8.6],
    ],
    &[
        [0.008, 0.018, 0.096, 0.045, 0.15, 0.044, 0.088, 0.12, 0.24, 0.25, 0.004, 0.13, 0.37, 5.5],
        [0.008, 0.018, 0.096, 0.045, 0.15, 0.044, 0.088, 0.12, 0.24, 0.25, 0.004, 0.13, 0.37, 5.5],
    ],
    &[[0.065, 0.32, 1.4, 0.71, 1.6, 0.71, 1.9, 1.0, 2.7, 2.4, 0.032, 1.3, 3.4, 62.0]],
    &[[0.025, 0.055, 0.35, 0.15, 0.58, 0.16, 0.26, 0.35, 0.58, 1.1, 0.013, 0.52, 1.6, 24.0]],
    &[[0.33, 0.73, 7.0, 2.9, 12.0, 3.5, 5.3, 7.1, 9.8, 23.0, 0.16, 11.0, 33.0, 510.0]],
    &[[0.15, 0.35, 3.1, 1.2, 5.4, 1.9, 2.8, 0.0, 0.0, 9.0, 0.075, 0.0, 0.0, 0.0]],
    &[[0.15, 0.34, 2.9, 1.2, 5.0, 1.6, 2.4, 0.0, 0.0, 7.6, 0.076, 0.0, 0.0, 0.0]],
    &[[0.043, 0.15, 0.75, 0.35, 1.3, 0.39, 0.78, 1.8, 2.8, 2.5, 0.021, 1.2, 3.7, 49.0]],
    &[[0.05, 0.11, 1.1, 0.45, 1.7, 2.8, 4.6, 4.6, 7.5, 3.3, 0.025, 1.5, 4.7, 67.0]],
    &[[0.048, 0.16, 0.76, 0.36, 1.3, 0.36, 0.72, 1.4, 2.2, 2.3, 0.024, 1.2, 3.4, 52.0]],
];

const PART_COUNT_PI_Q: [f64; 6] = [0.030, 0.10, 0.30, 1.0, 3.0, 10.0];

const ESTABLISHED_RELIABILITY_PI_Q: &[f64] = &[0.03, 0.1, 0.3, 1.0, 5.0, 15.0];
const VARIABLE_ER_PI_Q: &[f64] = &[0.02, 0.06, 0.2, 0.6, 3.0, 10.0];

/// Part stress quality factors by subcategory.
const PART_STRESS_PI_Q: [&[f64]; 15] = [
    ESTABLISHED_RELIABILITY_PI_Q,
    ESTABLISHED_RELIABILITY_PI_Q,
    &[1.0, 3.0],
    &[1.0, 3.0],
    ESTABLISHED_RELIABILITY_PI_Q,
    ESTABLISHED_RELIABILITY_PI_Q,
    ESTABLISHED_RELIABILITY_PI_Q,
    &[1.0, 15.0],
    VARIABLE_ER_PI_Q,
    &[2.5, 5.0],
    &[2.0, 4.0],
    &[2.0, 4.0],
    VARIABLE_ER_PI_Q,
    &[2.5, 5.0],
    &[2.0, 4.0],
];

/// Part stress environment factors by subcategory.
const PI_E: [EnvironmentRow; 15] = [
    [1.0, 4.0, 16.0, 12.0, 42.0, 18.0, 23.0, 31.0, 43.0, 63.0, 0.5, 37.0, 87.0, 1728.0],
    [1.0, 2.0, 8.0, 4.0, 14.0, 4.0, 8.0, 10.0, 18.0, 19.0, 0.2, 10.0, 28.0, 510.0],
    [1.0, 2.0, 10.0, 5.0, 17.0, 6.0, 8.0, 14.0, 18.0, 25.0, 0.5, 12.0, 40.0, 660.0],
    [1.0, 2.0, 10.0, 5.0, 17.0, 6.0, 8.0, 14.0, 18.0, 25.0, 0.5, 12.0, 40.0, 660.0],
    [1.0, 2.0, 11.0, 5.0, 18.0, 15.0, 18.0, 28.0, 35.0, 27.0, 0.8, 14.0, 38.0, 610.0],
    [1.0, 2.0, 10.0, 5.0, 16.0, 4.0, 8.0, 9.0, 18.0, 23.0, 0.3, 13.0, 34.0, 610.0],
    [1.0, 2.0, 10.0, 5.0, 16.0, 4.0, 8.0, 9.0, 18.0, 23.0, 0.5, 13.0, 34.0, 610.0],
    [1.0, 5.0, 21.0, 11.0, 24.0, 11.0, 30.0, 16.0, 42.0, 37.0, 0.5, 20.0, 53.0, 950.0],
    [1.0, 2.0, 12.0, 6.0, 20.0, 5.0, 8.0, 9.0, 15.0, 33.0, 0.5, 18.0, 48.0, 870.0],
    [1.0, 2.0, 18.0, 8.0, 30.0, 8.0, 12.0, 13.0, 18.0, 53.0, 0.5, 29.0, 76.0, 1400.0],
    [1.0, 2.0, 16.0, 7.0, 28.0, 8.0, 12.0, 0.0, 0.0, 38.0, 0.5, 0.0, 0.0, 0.0],
    [1.0, 3.0, 16.0, 7.0, 28.0, 8.0, 12.0, 0.0, 0.0, 38.0, 0.5, 0.0, 0.0, 0.0],
    [1.0, 3.0, 14.0, 6.0, 24.0, 5.0, 7.0, 12.0, 18.0, 39.0, 0.5, 22.0, 57.0, 1000.0],
    [1.0, 2.0, 19.0, 8.0, 29.0, 40.0, 65.0, 48.0, 78.0, 46.0, 0.5, 25.0, 66.0, 1200.0],
    [1.0, 3.0, 14.0, 7.0, 24.0, 6.0, 12.0, 20.0, 30.0, 39.0, 0.5, 22.0, 57.0, 1000.0],
];

/// Temperature and power stress model for `λb`.
///
/// `λb = A·exp((B·(T + 273)/C)^D)·exp(((S/E)·(T + 273)/273)^F)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StressModel {
    a: f64,
    b: f64,
    c: f64,
    d: f64,
    e: f64,
    f: f64,
}

impl StressModel {
    const fn new(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Self {
        Self { a, b, c, d, e, f }
    }

    /// Evaluates the model at ambient temperature `t` (°C) and power ratio `s`.
    #[must_use]
    pub fn lambda_b(&self, t: f64, s: f64) -> f64 {
        let kelvin = t + 273.0;
        self.a
            * (self.b * kelvin / self.c).powf(self.d).exp()
            * ((s / self.e) * kelvin / 273.0).powf(self.f).exp()
    }
}

const RC: StressModel = StressModel::new(4.5e-9, 12.0, 343.0, 1.0, 0.6, 1.0);
const RL: StressModel = StressModel::new(3.25e-4, 1.0, 343.0, 3.0, 1.0, 1.0);
const RN: StressModel = StressModel::new(5.0e-5, 3.5, 343.0, 1.0, 1.0, 1.0);

/// Stress models for every subcategory with a temperature/power form, keyed
/// by subcategory. Film resistors are selected separately by specification.
const STRESS_MODELS: [(u32, StressModel); 12] = [
    (1, RC),
    (3, StressModel::new(7.33e-3, 0.202, 298.0, 2.6, 1.45, 0.89)),
    (5, StressModel::new(0.0031, 1.0, 398.0, 10.0, 1.0, 1.5)),
    (6, StressModel::new(0.00148, 1.0, 298.0, 2.0, 0.5, 1.0)),
    (7, StressModel::new(0.00015, 2.64, 273.0, 1.0, 0.466, 1.0)),
    (9, StressModel::new(0.0062, 1.0, 298.0, 5.0, 1.0, 1.0)),
    (10, StressModel::new(0.0735, 1.03, 273.0, 4.45, 2.74, 3.51)),
    (11, StressModel::new(0.0398, 0.514, 313.0, 5.28, 1.44, 4.46)),
    (12, StressModel::new(0.0481, 0.334, 298.0, 4.66, 1.47, 2.83)),
    (13, StressModel::new(0.019, 0.445, 358.0, 7.3, 2.69, 2.46)),
    (14, StressModel::new(0.0246, 0.459, 343.0, 9.3, 2.32, 5.3)),
    (15, StressModel::new(0.018, 1.0, 343.0, 7.4, 2.55, 3.6)),
];

/// Film resistor models by specification (RL, RLR, RN(R,C), RN).
const FILM_MODELS: [StressModel; 4] = [RL, RL, RN, RN];

/// Network resistor base hazard rate per film element.
const LAMBDA_B_NETWORK: f64 = 0.00006;

/// Network resistor `Ea/k` (K).
const NETWORK_EA_OVER_K: f64 = 4056.0;

/// Thermistor base hazard rates (bead, disk, rod).
const LAMBDA_B_THERMISTOR: [f64; 3] = [0.021, 0.065, 0.105];

/// Resistance factor bins `(upper bound in Ω, πR)` by subcategory.
const PI_R: [(u32, &[(f64, f64)]); 12] = [
    (1, &[(1.0e5, 1.0), (1.0e6, 1.1), (1.0e7, 1.6), (f64::MAX, 2.5)]),
    (2, &[(1.0e5, 1.0), (1.0e6, 1.1), (1.0e7, 1.5), (f64::MAX, 2.5)]),
    (3, &[(100.0, 1.0), (1.0e5, 1.2), (1.0e6, 1.3), (f64::MAX, 3.5)]),
    (5, &[(1.0e4, 1.0), (1.0e5, 1.7), (1.0e6, 3.0), (f64::MAX, 5.0)]),
    (6, &[(500.0, 1.0), (1.0e3, 1.0), (5.0e3, 1.2), (7.5e3, 1.2), (1.0e4, 1.6), (2.0e4, 1.6)]),
    (7, &[(500.0, 1.0), (1.0e3, 1.2), (5.0e3, 1.2), (1.0e4, 1.6), (2.0e4, 1.6)]),
    (9, &[(2.0e3, 1.0), (5.0e3, 1.4), (2.0e4, 2.0)]),
    (10, &[(2.0e3, 1.0), (5.0e3, 1.4), (2.0e4, 2.0), (5.0e4, 2.5)]),
    (11, &[(2.0e3, 1.0), (5.0e3, 1.4), (1.0e4, 2.0)]),
    (12, &[(200.0, 1.0), (500.0, 1.2), (1.0e3, 1.4), (5.0e3, 2.0)]),
    (13, &[(1.0e4, 1.0), (5.0e4, 1.1), (2.0e5, 1.2), (1.0e6, 1.4), (2.0e6, 1.6)]),
    (14, &[(5.0e4, 1.0), (1.0e5, 1.1), (2.0e5, 1.2), (5.0e5, 1.4), (1.0e6, 1.8)]),
];

/// Film variable resistors share the non-wirewound resistance bins.
const PI_R_RQ: &[(f64, f64)] = &[(1.0e4, 1.0), (5.0e4, 1.1), (2.0e5, 1.2), (1.0e6, 1.4), (2.0e6, 1.6)];

/// Voltage factor bins by applied to rated voltage ratio.
const PI_V: &[(f64, f64)] = &[(0.8, 1.0), (0.9, 1.05), (1.0, 1.2)];

/// Composition variable resistor voltage factor bins.
const PI_V_COMPOSITION: &[(f64, f64)] = &[(0.8, 1.0), (0.9, 1.1), (1.0, 1.22)];

/// Precision wirewound (RR) construction factors.
const PI_C_PRECISION: [f64; 4] = [2.0, 1.0, 3.0, 1.5];

/// Power wirewound (RP) construction factors (enclosed, unenclosed).
const PI_C_POWER: [f64; 2] = [2.0, 1.0];

const POWER_LIMIT: StressLimit = StressLimit::new(0.50, 0.90);

/// Calculator for resistors (category 3).
#[derive(Debug, Default)]
pub struct ResistorCalculator;

/// Returns the parts count base hazard rate, if tabulated.
#[must_use]
pub fn part_count_lambda_b(subcategory_id: u32, specification_id: u32, environment_active_id: u32) -> Option<f64> {
    let rows = by_id(&PART_COUNT_LAMBDA_B, subcategory_id)?;
    let row = if rows.len() == 1 {
        rows[0]
    } else {
        by_id(rows, specification_id)?
    };
    by_id(&row, environment_active_id)
}

/// Calculates the part stress base hazard rate.
///
/// # Errors
///
/// Returns an error for an unknown film specification or thermistor type.
pub fn part_stress_lambda_b(attributes: &Attributes) -> PredictionResult<f64> {
    let hardware_id = attributes.hardware_id;
    let t = attributes.temperature_active;
    let s = attributes.power_ratio;
    match attributes.subcategory_id {
        2 => Ok(index_by_id(
            &FILM_MODELS,
            attributes.specification_id,
            "film resistor specification",
            "specification_id",
            hardware_id,
        )?
        .lambda_b(t, s)),
        4 => Ok(LAMBDA_B_NETWORK),
        8 => Ok(*index_by_id(
            &LAMBDA_B_THERMISTOR,
            attributes.type_id,
            "thermistor type",
            "type_id",
            hardware_id,
        )?),
        subcategory_id => STRESS_MODELS
            .iter()
            .find(|(id, _)| *id == subcategory_id)
            .map(|(_, model)| model.lambda_b(t, s))
            .ok_or(PredictionError::UnsupportedCategory {
                category_id: attributes.category_id,
                subcategory_id,
            }),
    }
}

/// Selects the resistance factor.
///
/// Returns 0.0 for the power wirewound styles when the resistance is beyond
/// their largest bin.
#[must_use]
pub fn resistance_factor(subcategory_id: u32, resistance: f64) -> f64 {
    let bins = if subcategory_id == 15 {
        Some(PI_R_RQ)
    } else {
        PI_R.iter().find(|(id, _)| *id == subcategory_id).map(|(_, bins)| *bins)
    };
    let overflow = if matches!(subcategory_id, 6 | 7) {
        Overflow::Reject
    } else {
        Overflow::Clamp
    };
    bins.and_then(|bins| select_factor(resistance, bins, overflow))
        .unwrap_or(0.0)
}

/// Calculates the potentiometer taps factor `πTAPS = N^1.5/25 + 0.792`.
#[must_use]
pub fn taps_factor(n_taps: u32) -> f64 {
    f64::from(n_taps).powf(1.5) / 25.0 + 0.792
}

/// Selects the voltage factor for a variable resistor.
#[must_use]
pub fn voltage_factor(subcategory_id: u32, voltage_ratio: f64) -> f64 {
    let bins = if subcategory_id == 14 { PI_V_COMPOSITION } else { PI_V };
    select_factor(voltage_ratio, bins, Overflow::Clamp).unwrap_or(1.0)
}

/// Case temperature for networks; the ambient temperature stands in when
/// no case temperature is given.
fn network_case_temperature(attributes: &Attributes) -> f64 {
    if attributes.temperature_case > 0.0 {
        attributes.temperature_case
    } else {
        attributes.temperature_active
    }
}

impl ComponentCalculator for ResistorCalculator {
    fn name(&self) -> &'static str {
        "resistor"
    }

    fn dormant_factors(&self) -> &'static DormantFactors {
        &dormant::RESISTOR
    }

    fn calculate_part_count(&self, attributes: &mut Attributes) -> String {
        let lambda_b = part_count_lambda_b(
            attributes.subcategory_id,
            attributes.specification_id,
            attributes.environment_active_id,
        );
        let pi_q = by_id(&PART_COUNT_PI_Q, attributes.quality_id);
        finish_part_count(self.name(), attributes, lambda_b, pi_q)
    }

    fn calculate_part_stress(&self, attributes: &mut Attributes) -> PredictionResult<String> {
        let hardware_id = attributes.hardware_id;
        let subcategory_id = attributes.subcategory_id;
        attributes.power_ratio = lookup::ratio(attributes.power_operating, attributes.power_rated);
        attributes.voltage_ratio = lookup::ratio(
            attributes.voltage_ac_operating + attributes.voltage_dc_operating,
            attributes.voltage_rated,
        );
        attributes.lambda_b = part_stress_lambda_b(attributes)?;
        attributes.pi_q = by_id(&PART_STRESS_PI_Q, subcategory_id)
            .map_or(0.0, |table| lookup::quality_factor(table, attributes.quality_id));
        attributes.pi_e = by_id(&PI_E, subcategory_id)
            .map_or(0.0, |row| lookup::environment_factor(&row, attributes.environment_active_id));

        let hazard_rate = match subcategory_id {
            4 => {
                attributes.pi_t = lookup::arrhenius_k(NETWORK_EA_OVER_K, network_case_temperature(attributes));
                attributes.pi_nr = f64::from(attributes.n_elements);
                attributes.lambda_b * attributes.pi_t * attributes.pi_nr * attributes.pi_q * attributes.pi_e
            }
            8 => attributes.lambda_b * attributes.pi_q * attributes.pi_e,
            9..=15 => {
                attributes.pi_taps = taps_factor(attributes.n_elements);
                attributes.pi_r = resistance_factor(subcategory_id, attributes.resistance);
                attributes.pi_v = voltage_factor(subcategory_id, attributes.voltage_ratio);
                attributes.pi_c = match subcategory_id {
                    10 => *index_by_id(
                        &PI_C_PRECISION,
                        attributes.construction_id,
                        "precision wirewound construction",
                        "construction_id",
                        hardware_id,
                    )?,
                    12 => *index_by_id(
                        &PI_C_POWER,
                        attributes.construction_id,
                        "power wirewound construction",
                        "construction_id",
                        hardware_id,
                    )?,
                    _ => 1.0,
                };
                attributes.lambda_b
                    * attributes.pi_taps
                    * attributes.pi_c
                    * attributes.pi_r
                    * attributes.pi_v
                    * attributes.pi_q
                    * attributes.pi_e
            }
            _ => {
                attributes.pi_r = resistance_factor(subcategory_id, attributes.resistance);
                attributes.lambda_b * attributes.pi_r * attributes.pi_q * attributes.pi_e
            }
        };

        let mut msg = finish_part_stress(self.name(), attributes, hazard_rate);
        let model_factor = match subcategory_id {
            4 => Some(("piNR", attributes.pi_nr)),
            8 => None,
            _ => Some(("piR", attributes.pi_r)),
        };
        if let Some(factor) = model_factor {
            msg.push_str(&messages::check_factors(self.name(), attributes, &[factor]));
        }
        Ok(msg)
    }

    fn overstressed(&self, attributes: &mut Attributes) {
        Derating::new(attributes)
            .ratio("power", attributes.power_operating, attributes.power_rated, POWER_LIMIT)
            .finish(attributes);
    }

    fn set_default_values(&self, attributes: &mut Attributes) {
        default_rating(attributes.power_operating, &mut attributes.power_rated, 0.5);
        default_if_unset(&mut attributes.resistance, 1000.0);
        default_if_unset(&mut attributes.temperature_rated_max, 125.0);
        default_id_if_unset(&mut attributes.specification_id, 1);
        default_id_if_unset(&mut attributes.type_id, 1);
        default_id_if_unset(&mut attributes.construction_id, 1);
        if attributes.n_elements == 0 {
            attributes.n_elements = match attributes.subcategory_id {
                4 => 8,
                9..=15 => 3,
                _ => 0,
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resistor(subcategory_id: u32) -> Attributes {
        let mut attributes = Attributes::new(3, subcategory_id);
        attributes.hardware_id = 3;
        attributes.specification_id = 1;
        attributes.quality_id = 4;
        attributes.environment_active_id = 1;
        attributes.temperature_active = 25.0;
        attributes.power_operating = 0.05;
        attributes.power_rated = 0.25;
        attributes.resistance = 1000.0;
        attributes
    }

    #[test]
    fn part_count_by_specification() {
        assert_eq!(part_count_lambda_b(1, 7, 3), Some(0.0071));
        assert_eq!(part_count_lambda_b(2, 3, 1), Some(0.0014));
        assert_eq!(part_count_lambda_b(2, 5, 1), None);
        assert_eq!(part_count_lambda_b(16, 1, 1), None);
    }

    #[test]
    fn part_count() {
        let mut attributes = resistor(6);
        attributes.specification_id = 2;
        attributes.quality_id = 6;
        attributes.environment_active_id = 2;
        let msg = ResistorCalculator.calculate_part_count(&mut attributes);
        assert_eq!(msg, "");
        assert!((attributes.hazard_rate_active - 0.028 * 10.0).abs() < 1e-12);
    }

    #[test]
    fn part_stress_composition() {
        let mut attributes = resistor(1);

        let msg = ResistorCalculator.calculate_part_stress(&mut attributes).unwrap();

        assert_eq!(msg, "");
        assert!((attributes.power_ratio - 0.2).abs() < 1e-12);
        let kelvin: f64 = 298.0;
        let lambda_b = 4.5e-9 * (12.0 * kelvin / 343.0).exp() * ((0.2 / 0.6) * kelvin / 273.0).exp();
        assert!((attributes.lambda_b - lambda_b).abs() < 1e-15);
        assert!((attributes.pi_r - 1.0).abs() < f64::EPSILON);
        assert!((attributes.hazard_rate_active - lambda_b).abs() < 1e-15);
    }

    #[test]
    fn part_stress_network() {
        let mut attributes = resistor(4);
        attributes.n_elements = 8;
        attributes.quality_id = 1;
        attributes.environment_active_id = 2;
        ResistorCalculator.calculate_part_stress(&mut attributes).unwrap();
        assert!((attributes.pi_t - 1.0).abs() < 1e-12);
        assert!((attributes.pi_nr - 8.0).abs() < f64::EPSILON);
        assert!((attributes.hazard_rate_active - 0.00006 * 8.0 * 2.0).abs() < 1e-15);
    }

    #[test]
    fn part_stress_thermistor() {
        let mut attributes = resistor(8);
        attributes.type_id = 2;
        attributes.quality_id = 2;
        attributes.environment_active_id = 3;
        ResistorCalculator.calculate_part_stress(&mut attributes).unwrap();
        assert!((attributes.hazard_rate_active - 0.065 * 15.0 * 21.0).abs() < 1e-12);

        attributes.type_id = 4;
        assert!(ResistorCalculator.calculate_part_stress(&mut attributes).is_err());
    }

    #[test]
    fn part_stress_variable() {
        let mut attributes = resistor(10);
        attributes.n_elements = 3;
        attributes.construction_id = 3;
        attributes.quality_id = 1;
        attributes.voltage_dc_operating = 9.5;
        attributes.voltage_rated = 10.0;
        attributes.resistance = 3000.0;

        ResistorCalculator.calculate_part_stress(&mut attributes).unwrap();

        assert!((attributes.pi_taps - (3.0_f64.powf(1.5) / 25.0 + 0.792)).abs() < 1e-12);
        assert!((attributes.pi_c - 3.0).abs() < f64::EPSILON);
        assert!((attributes.pi_r - 1.4).abs() < f64::EPSILON);
        assert!((attributes.pi_v - 1.2).abs() < f64::EPSILON);
        assert!((attributes.pi_q - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn resistance_factor_overflow_policy() {
        assert!((resistance_factor(1, 5.0e7) - 2.5).abs() < f64::EPSILON);
        assert!((resistance_factor(9, 1.0e6) - 2.0).abs() < f64::EPSILON);
        assert!((resistance_factor(6, 1.5e4) - 1.6).abs() < f64::EPSILON);
        assert!(resistance_factor(6, 5.0e4).abs() < f64::EPSILON);
        assert!(resistance_factor(7, 5.0e4).abs() < f64::EPSILON);
    }

    #[test]
    fn part_stress_wirewound_out_of_range_warns() {
        let mut attributes = resistor(6);
        attributes.quality_id = 1;
        attributes.resistance = 5.0e4;

        let msg = ResistorCalculator.calculate_part_stress(&mut attributes).unwrap();

        assert!(attributes.pi_r.abs() < f64::EPSILON);
        assert!(attributes.hazard_rate_active.abs() < f64::EPSILON);
        assert_eq!(
            msg,
            "RAMSTK WARNING: piR is 0.0 when calculating resistor, hardware ID: 3.\n"
        );
    }

    #[test]
    fn part_stress_network_without_elements_warns() {
        let mut attributes = resistor(4);
        attributes.quality_id = 1;
        attributes.n_elements = 0;

        let msg = ResistorCalculator.calculate_part_stress(&mut attributes).unwrap();

        assert!(attributes.pi_nr.abs() < f64::EPSILON);
        assert!(attributes.hazard_rate_active.abs() < f64::EPSILON);
        assert_eq!(
            msg,
            "RAMSTK WARNING: piNR is 0.0 when calculating resistor, hardware ID: 3.\n"
        );
    }

    #[test]
    fn film_specification_is_required() {
        let mut attributes = resistor(2);
        attributes.specification_id = 0;
        assert!(matches!(
            ResistorCalculator.calculate_part_stress(&mut attributes),
            Err(PredictionError::IndexOutOfRange { key: "specification_id", .. })
        ));
    }

    #[test]
    fn overstress_power() {
        let mut attributes = resistor(1);
        attributes.environment_active_id = 3;
        attributes.power_operating = 0.15;
        ResistorCalculator.overstressed(&mut attributes);
        assert_eq!(attributes.reason, "1. Operating power > 50% rated power.\n");

        attributes.environment_active_id = 1;
        ResistorCalculator.overstressed(&mut attributes);
        assert!(!attributes.overstress);
    }

    #[test]
    fn default_values() {
        let mut attributes = Attributes::new(3, 4);
        attributes.power_operating = 0.1;
        ResistorCalculator.set_default_values(&mut attributes);
        assert!((attributes.power_rated - 0.2).abs() < 1e-12);
        assert_eq!(attributes.n_elements, 8);
        assert_eq!(attributes.specification_id, 1);
    }
}
