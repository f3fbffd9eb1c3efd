//! MIL-HDBK-217F Section 13 relay models.
//!
//! Subcategories:
//! - 1: mechanical relays
//! - 2: solid state and time delay relays

use crate::milhdbk217f::attributes::Attributes;
use crate::milhdbk217f::derating::{Derating, StressLimit};
use crate::milhdbk217f::dormant::{self, DormantFactors};
use crate::milhdbk217f::environment::EnvironmentRow;
use crate::milhdbk217f::error::{PredictionError, PredictionResult};
use crate::milhdbk217f::lookup::{self, by_id, index_by_id};
use crate::milhdbk217f::models::{
    default_id_if_unset, default_if_unset, default_rating, finish_part_count, finish_part_stress,
    ComponentCalculator,
};

/// Parts count base hazard rates by subcategory, then type.
const PART_COUNT_LAMBDA_B: [&[EnvironmentRow]; 2] = [
    &[
        [0.13, 0.28, 2.1, 1.1, 3.8, 1.1, 1.4, 1.9, 2.0, 7.0, 0.66, 3.5, 10.0, 0.0],
        [0.43, 0.89, 6.9, 3.6, 12.0, 3.4, 4.4, 6.2, 6.7, 22.0, 0.21, 11.0, 32.0, 0.0],
        [0.13, 0.26, 2.1, 1.1, 3.8, 1.1, 1.4, 1.9, 2.0, 7.0, 0.66, 3.5, 10.0, 0.0],
        [0.11, 0.23, 1.8, 0.92, 3.3, 0.96, 1.2, 2.1, 2.3, 6.5, 0.54, 3.0, 9.0, 0.0],
        [0.29, 0.60, 4.8, 2.4, 8.2, 2.3, 2.9, 4.1, 4.5, 15.0, 0.14, 7.6, 22.0, 0.0],
        [0.88, 1.8, 14.0, 7.4, 26.0, 7.1, 9.1, 13.0, 14.0, 46.0, 0.44, 24.0, 67.0, 0.0],
    ],
    &[
        [0.40, 1.2, 4.8, 2.4, 6.8, 4.8, 7.6, 8.4, 13.0, 9.2, 0.16, 4.8, 13.0, 240.0],
        [0.50, 1.5, 6.0, 3.0, 8.5, 5.0, 9.5, 11.0, 16.0, 12.0, 0.20, 5.0, 17.0, 300.0],
    ],
];

/// Parts count quality factors by subcategory.
const PART_COUNT_PI_Q: [&[f64]; 2] = [&[0.6, 3.0, 9.0], &[0.0, 1.0, 4.0]];

/// Part stress quality factors by subcategory.
const PART_STRESS_PI_Q: [&[f64]; 2] = [&[0.1, 0.3, 0.45, 0.6, 1.0, 1.5, 3.0], &[1.0, 4.0]];

/// Mechanical relay environment factors: MIL-SPEC and lower quality.
const PI_E_MECHANICAL: [EnvironmentRow; 2] = [
    [1.0, 2.0, 15.0, 8.0, 27.0, 7.0, 9.0, 11.0, 12.0, 46.0, 0.50, 25.0, 66.0, 0.0],
    [2.0, 5.0, 44.0, 24.0, 78.0, 15.0, 20.0, 28.0, 38.0, 140.0, 1.0, 72.0, 200.0, 0.0],
];

/// Solid state and time delay relay environment factors.
const PI_E_SOLID_STATE: EnvironmentRow =
    [1.0, 3.0, 12.0, 6.0, 17.0, 12.0, 19.0, 21.0, 32.0, 23.0, 0.40, 12.0, 33.0, 590.0];

/// Temperature model `(A, B, C)` for `λb = A·exp(((T + 273)/B)^C)` by
/// rated temperature: 85 °C, then 125 °C.
const LAMBDA_B_MECHANICAL: [(f64, f64, f64); 2] = [(0.00555, 352.0, 15.7), (0.0054, 377.0, 10.4)];

/// Base hazard rates for solid state, solid state time delay and hybrid
/// relays.
const LAMBDA_B_SOLID_STATE: [f64; 3] = [0.40, 0.50, 0.50];

/// Contact form factors (SPST, DPST, SPDT, 3PST, 4PST, DPDT, 3PDT, 4PDT, 6PDT).
const PI_C: [f64; 9] = [1.0, 1.5, 1.75, 2.0, 2.5, 3.0, 4.25, 5.5, 8.0];

/// Load stress divisors for resistive, inductive and lamp loads.
const LOAD_STRESS_K: [f64; 3] = [0.8, 0.4, 0.2];

/// Application and construction factors `[MIL-SPEC, lower]` indexed by
/// contact rating, then application, then construction.
const PI_F: &[&[&[[f64; 2]]]] = &[
    // Signal current (low mV and mA).
    &[&[
        [4.0, 8.0],
        [6.0, 18.0],
        [1.0, 3.0],
        [4.0, 8.0],
        [7.0, 14.0],
        [7.0, 14.0],
    ]],
    // 0-5 amp.
    &[
        &[[3.0, 6.0], [5.0, 10.0], [6.0, 12.0]],
        &[[5.0, 10.0], [2.0, 6.0], [6.0, 12.0], [100.0, 100.0], [10.0, 20.0]],
        &[[10.0, 20.0], [100.0, 100.0]],
        &[[6.0, 12.0], [1.0, 3.0]],
        &[[25.0, 0.0], [6.0, 0.0]],
        &[[10.0, 20.0]],
        &[[9.0, 12.0]],
        &[[10.0, 20.0], [5.0, 10.0], [5.0, 10.0]],
    ],
    // 5-20 amp.
    &[
        &[[20.0, 40.0], [5.0, 10.0]],
        &[[3.0, 6.0], [1.0, 3.0], [2.0, 6.0], [3.0, 6.0], [2.0, 6.0], [2.0, 6.0]],
    ],
    // 25-600 amp.
    &[&[[7.0, 14.0], [12.0, 24.0], [10.0, 20.0], [5.0, 10.0]]],
];

/// Highest quality ID that uses the MIL-SPEC columns.
const MIL_SPEC_QUALITY_MAX: u32 = 6;

/// Operating current derating limits.
const CURRENT_LIMIT: StressLimit = StressLimit::new(0.75, 0.90);

/// Calculator for relays (category 6).
#[derive(Debug, Default)]
pub struct RelayCalculator;

impl RelayCalculator {
    /// Creates a new relay calculator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

/// Returns the parts count base hazard rate, if tabulated.
#[must_use]
pub fn part_count_lambda_b(subcategory_id: u32, type_id: u32, environment_active_id: u32) -> Option<f64> {
    by_id(&PART_COUNT_LAMBDA_B, subcategory_id)
        .and_then(|types| by_id(types, type_id))
        .and_then(|row| by_id(&row, environment_active_id))
}

/// Calculates the mechanical relay base hazard rate from the ambient
/// temperature.
///
/// # Errors
///
/// Returns an error if `type_id` is not 1 (85 °C rated) or 2 (125 °C rated).
pub fn mechanical_lambda_b(type_id: u32, temperature_active: f64, hardware_id: u32) -> PredictionResult<f64> {
    let (a, b, c) = *index_by_id(&LAMBDA_B_MECHANICAL, type_id, "relay temperature rating", "type_id", hardware_id)?;
    Ok(a * ((temperature_active + 273.0) / b).powf(c).exp())
}

/// Calculates the load stress factor `πL = (S/k)²`.
///
/// # Errors
///
/// Returns an error if `technology_id` is not a resistive, inductive or lamp
/// load.
pub fn load_stress_factor(technology_id: u32, current_ratio: f64, hardware_id: u32) -> PredictionResult<f64> {
    let k = index_by_id(&LOAD_STRESS_K, technology_id, "relay load type", "technology_id", hardware_id)?;
    Ok((current_ratio / k).powi(2))
}

/// Calculates the cycling factor.
#[must_use]
pub fn cycling_factor(quality_id: u32, n_cycles: f64) -> f64 {
    if quality_id <= MIL_SPEC_QUALITY_MAX && n_cycles < 1.0 {
        0.1
    } else if quality_id == MIL_SPEC_QUALITY_MAX + 1 && n_cycles > 1000.0 {
        (n_cycles / 100.0).powi(2)
    } else if quality_id == MIL_SPEC_QUALITY_MAX + 1 && n_cycles > 10.0 {
        n_cycles / 10.0
    } else {
        1.0
    }
}

/// Looks up the application and construction factor.
///
/// # Errors
///
/// Returns an error if the contact rating, application or construction
/// selector is out of range.
pub fn application_construction_factor(attributes: &Attributes) -> PredictionResult<f64> {
    let hardware_id = attributes.hardware_id;
    let applications = index_by_id(
        PI_F,
        attributes.contact_rating_id,
        "relay contact rating",
        "contact_rating_id",
        hardware_id,
    )?;
    let constructions = index_by_id(
        applications,
        attributes.application_id,
        "relay application",
        "application_id",
        hardware_id,
    )?;
    let factors = index_by_id(
        constructions,
        attributes.construction_id,
        "relay construction",
        "construction_id",
        hardware_id,
    )?;
    Ok(factors[quality_column(attributes.quality_id)])
}

const fn quality_column(quality_id: u32) -> usize {
    if quality_id <= MIL_SPEC_QUALITY_MAX {
        0
    } else {
        1
    }
}

impl ComponentCalculator for RelayCalculator {
    fn name(&self) -> &'static str {
        "relay"
    }

    fn dormant_factors(&self) -> &'static DormantFactors {
        &dormant::RELAY
    }

    fn calculate_part_count(&self, attributes: &mut Attributes) -> String {
        let lambda_b = part_count_lambda_b(
            attributes.subcategory_id,
            attributes.type_id,
            attributes.environment_active_id,
        );
        let pi_q = by_id(&PART_COUNT_PI_Q, attributes.subcategory_id)
            .and_then(|table| by_id(table, attributes.quality_id));
        finish_part_count(self.name(), attributes, lambda_b, pi_q)
    }

    fn calculate_part_stress(&self, attributes: &mut Attributes) -> PredictionResult<String> {
        let hardware_id = attributes.hardware_id;
        attributes.current_ratio = lookup::ratio(attributes.current_operating, attributes.current_rated);
        attributes.pi_q = by_id(&PART_STRESS_PI_Q, attributes.subcategory_id)
            .map_or(0.0, |table| lookup::quality_factor(table, attributes.quality_id));

        let hazard_rate = match attributes.subcategory_id {
            1 => {
                let pi_e_row = &PI_E_MECHANICAL[quality_column(attributes.quality_id)];
                attributes.pi_e = lookup::environment_factor(pi_e_row, attributes.environment_active_id);
                attributes.lambda_b =
                    mechanical_lambda_b(attributes.type_id, attributes.temperature_active, hardware_id)?;
                attributes.pi_l =
                    load_stress_factor(attributes.technology_id, attributes.current_ratio, hardware_id)?;
                attributes.pi_c = *index_by_id(
                    &PI_C,
                    attributes.contact_form_id,
                    "relay contact form",
                    "contact_form_id",
                    hardware_id,
                )?;
                attributes.pi_cyc = cycling_factor(attributes.quality_id, attributes.n_cycles);
                attributes.pi_f = application_construction_factor(attributes)?;

                attributes.lambda_b
                    * attributes.pi_l
                    * attributes.pi_c
                    * attributes.pi_cyc
                    * attributes.pi_f
                    * attributes.pi_q
                    * attributes.pi_e
            }
            2 => {
                attributes.pi_e = lookup::environment_factor(&PI_E_SOLID_STATE, attributes.environment_active_id);
                attributes.lambda_b = *index_by_id(
                    &LAMBDA_B_SOLID_STATE,
                    attributes.type_id,
                    "solid state relay type",
                    "type_id",
                    hardware_id,
                )?;
                attributes.lambda_b * attributes.pi_q * attributes.pi_e
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
        Derating::new(attributes)
            .ratio("current", attributes.current_operating, attributes.current_rated, CURRENT_LIMIT)
            .finish(attributes);
    }

    fn set_default_values(&self, attributes: &mut Attributes) {
        default_rating(attributes.current_operating, &mut attributes.current_rated, 0.5);
        default_if_unset(&mut attributes.temperature_rated_max, 125.0);
        default_if_unset(&mut attributes.n_cycles, 1.0);
        default_id_if_unset(&mut attributes.type_id, if attributes.temperature_rated_max > 85.0 { 2 } else { 1 });
        default_id_if_unset(&mut attributes.technology_id, 1);
        default_id_if_unset(&mut attributes.contact_form_id, 1);
        default_id_if_unset(&mut attributes.contact_rating_id, 2);
        default_id_if_unset(&mut attributes.application_id, 1);
        default_id_if_unset(&mut attributes.construction_id, 1);
    }
}
