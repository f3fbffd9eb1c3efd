//! MIL-HDBK-217F Sections 15 to 17 connection models.
//!
//! Subcategories:
//! - 1: multi-pin connectors (`λb·πT·πK·πQ·πE`)
//! - 2: printed circuit board edge connectors (`λb·πT·πK·πQ·πE`)
//! - 3: IC sockets (`λb·πP·πE`)
//! - 4: plated through-hole interconnection assemblies
//!   (`λb·(N1·πC + N2·(πC + 13))·πQ·πE`)
//! - 5: connections other than plated through-holes (`λb·πE`)

use crate::milhdbk217f::attributes::Attributes;
use crate::milhdbk217f::derating::{Derating, StressLimit};
use crate::milhdbk217f::dormant::{self, DormantFactors};
use crate::milhdbk217f::environment::EnvironmentRow;
use crate::milhdbk217f::error::{PredictionError, PredictionResult};
use crate::milhdbk217f::lookup::{self, by_id, index_by_id, key_by_id, select_factor, Overflow};
use crate::milhdbk217f::models::{
    default_id_if_unset, default_if_unset, default_rating, finish_part_count, finish_part_stress,
    ComponentCalculator,
};

/// Parts count base hazard rates. Multi-pin connectors (1) are selected by
/// `type_id`: circular, rack and panel, coaxial, telephone.
const PART_COUNT_LAMBDA_B: [&[EnvironmentRow]; 5] = [
    &[
        [0.011, 0.014, 0.11, 0.069, 0.20, 0.058, 0.098, 0.23, 0.34, 0.37, 0.0054, 0.16, 0.42, 6.8],
        [0.012, 0.015, 0.13, 0.075, 0.21, 0.060, 0.10, 0.22, 0.32, 0.38, 0.0061, 0.18, 0.45, 7.2],
        [0.012, 0.015, 0.13, 0.075, 0.21, 0.060, 0.10, 0.22, 0.32, 0.38, 0.0061, 0.18, 0.45, 7.2],
        [0.0054, 0.021, 0.063, 0.035, 0.10, 0.059, 0.11, 0.11, 0.15, 0.21, 0.0027, 0.11, 0.28, 3.9],
    ],
    &[[0.0054, 0.021, 0.063, 0.035, 0.10, 0.059, 0.11, 0.11, 0.15, 0.21, 0.0027, 0.11, 0.28, 3.9]],
    &[[0.0019, 0.0058, 0.027, 0.012, 0.035, 0.015, 0.023, 0.021, 0.025, 0.048, 0.00097, 0.027, 0.070, 1.3]],
    &[[0.053, 0.11, 0.37, 0.69, 0.27, 0.27, 0.43, 0.85, 1.0, 1.1, 0.027, 0.53, 1.4, 27.0]],
    &[[0.00012, 0.00024, 0.00084, 0.00048, 0.0013, 0.00048, 0.00072, 0.00072, 0.00096, 0.0019, 0.000_06, 0.0011, 0.0029, 0.050]],
];

/// Quality factors (MIL-SPEC, lower), shared by both methods.
const PI_Q: [f64; 2] = [1.0, 2.0];

/// Connector base hazard rates by type, as for the parts count table.
const LAMBDA_B_CONNECTOR: [f64; 4] = [0.0010, 0.0010, 0.00040, 0.0020];

const LAMBDA_B_EDGE: f64 = 0.00041;

const LAMBDA_B_SOCKET: f64 = 0.00042;

/// Plated through-hole base hazard rates by technology (printed wiring
/// assembly, discrete wiring with electroless deposited holes).
const LAMBDA_B_PTH: [f64; 2] = [0.000_041, 0.00026];

/// Base hazard rates by connection type: hand solder without wrapping, hand
/// solder with wrapping, crimp, weld, solderless wrap, clip termination,
/// reflow solder.
const LAMBDA_B_CONNECTION: [f64; 7] = [0.0026, 0.00014, 0.00026, 0.000_05, 0.000_003_5, 0.00012, 0.000_069];

/// Connector environment factors (MIL-SPEC, lower quality).
const PI_E_CONNECTOR: [EnvironmentRow; 2] = [
    [1.0, 1.0, 8.0, 5.0, 13.0, 3.0, 12.0, 11.0, 13.0, 22.0, 0.5, 13.0, 34.0, 610.0],
    [2.0, 5.0, 21.0, 10.0, 27.0, 12.0, 18.0, 17.0, 25.0, 37.0, 0.8, 27.0, 53.0, 1100.0],
];

const PI_E_SOCKET: EnvironmentRow = [1.0, 3.0, 14.0, 6.0, 18.0, 8.0, 12.0, 11.0, 13.0, 25.0, 0.5, 14.0, 36.0, 650.0];

const PI_E_PTH: EnvironmentRow = [1.0, 2.0, 7.0, 5.0, 13.0, 5.0, 8.0, 16.0, 28.0, 19.0, 0.5, 10.0, 27.0, 500.0];

const PI_E_CONNECTION: EnvironmentRow = [1.0, 2.0, 7.0, 4.0, 11.0, 4.0, 6.0, 6.0, 8.0, 16.0, 0.5, 9.0, 24.0, 420.0];

/// Contact temperature rise coefficient by AWG contact gauge.
const GAUGE_FACTOR: [(u32, f64); 5] = [(12, 0.1), (16, 0.274), (20, 0.64), (22, 0.989), (26, 2.1)];

/// Activation energy for the insert temperature factor (eV).
const ACTIVATION_ENERGY: f64 = 0.14;

/// Mating/unmating factor by cycles per 1000 hours.
const PI_K: [(f64, f64); 5] = [(0.05, 1.0), (0.5, 1.5), (5.0, 2.0), (50.0, 3.0), (f64::MAX, 4.0)];

const CURRENT_LIMIT: StressLimit = StressLimit::new(0.70, 0.90);

/// Calculator for connectors, sockets and connections (category 8).
#[derive(Debug, Default)]
pub struct ConnectionCalculator;

/// Insert temperature of a connector (°C).
///
/// `To = TA + ΔT` with `ΔT = g·I^1.85` and `g` the gauge coefficient.
///
/// # Errors
///
/// Returns [`PredictionError::MissingKey`] for an untabulated contact gauge.
pub fn insert_temperature(attributes: &Attributes) -> PredictionResult<f64> {
    let factor = key_by_id(
        &GAUGE_FACTOR,
        attributes.contact_gauge,
        "contact gauge",
        "contact_gauge",
        attributes.hardware_id,
    )?;
    Ok(factor.mul_add(attributes.current_operating.powf(1.85), attributes.temperature_active))
}

/// Selects the mating/unmating factor.
#[must_use]
pub fn mating_factor(n_cycles: f64) -> f64 {
    select_factor(n_cycles, &PI_K, Overflow::Clamp).unwrap_or(1.0)
}

/// IC socket active pins factor `πP = exp(((N - 1)/10)^0.51064)`.
#[must_use]
pub fn active_pins_factor(n_active_pins: u32) -> f64 {
    let n = f64::from(n_active_pins.saturating_sub(1));
    (n / 10.0).powf(0.51064).exp()
}

/// Plated through-hole complexity factor: 1.0 up to two circuit planes,
/// `0.65·P^0.63` above.
#[must_use]
pub fn complexity_factor(n_circuit_planes: u32) -> f64 {
    if n_circuit_planes <= 2 {
        1.0
    } else {
        0.65 * f64::from(n_circuit_planes).powf(0.63)
    }
}

impl ConnectionCalculator {
    fn connector(attributes: &mut Attributes, lambda_b: f64) -> PredictionResult<f64> {
        attributes.lambda_b = lambda_b;
        attributes.pi_q = lookup::quality_factor(&PI_Q, attributes.quality_id);
        attributes.pi_e = by_id(&PI_E_CONNECTOR, attributes.quality_id)
            .map_or(0.0, |row| lookup::environment_factor(&row, attributes.environment_active_id));
        attributes.pi_t = lookup::arrhenius(ACTIVATION_ENERGY, insert_temperature(attributes)?);
        attributes.pi_k = mating_factor(attributes.n_cycles);
        Ok(attributes.lambda_b * attributes.pi_t * attributes.pi_k * attributes.pi_q * attributes.pi_e)
    }
}

impl ComponentCalculator for ConnectionCalculator {
    fn name(&self) -> &'static str {
        "connection"
    }

    fn dormant_factors(&self) -> &'static DormantFactors {
        &dormant::CONNECTION
    }

    fn calculate_part_count(&self, attributes: &mut Attributes) -> String {
        let lambda_b = by_id(&PART_COUNT_LAMBDA_B, attributes.subcategory_id)
            .and_then(|rows| {
                if attributes.subcategory_id == 1 {
                    by_id(rows, attributes.type_id)
                } else {
                    rows.first().copied()
                }
            })
            .and_then(|row| by_id(&row, attributes.environment_active_id));
        let pi_q = by_id(&PI_Q, attributes.quality_id);
        finish_part_count(self.name(), attributes, lambda_b, pi_q)
    }

    fn calculate_part_stress(&self, attributes: &mut Attributes) -> PredictionResult<String> {
        let hardware_id = attributes.hardware_id;
        let hazard_rate = match attributes.subcategory_id {
            1 => {
                let lambda_b =
                    *index_by_id(&LAMBDA_B_CONNECTOR, attributes.type_id, "connector type", "type_id", hardware_id)?;
                Self::connector(attributes, lambda_b)?
            }
            2 => Self::connector(attributes, LAMBDA_B_EDGE)?,
            3 => {
                attributes.lambda_b = LAMBDA_B_SOCKET;
                attributes.pi_q = 1.0;
                attributes.pi_p = active_pins_factor(attributes.n_active_pins);
                attributes.pi_e = lookup::environment_factor(&PI_E_SOCKET, attributes.environment_active_id);
                attributes.lambda_b * attributes.pi_p * attributes.pi_e
            }
            4 => {
                attributes.lambda_b =
                    *index_by_id(&LAMBDA_B_PTH, attributes.type_id, "plated through-hole technology", "type_id", hardware_id)?;
                attributes.pi_q = lookup::quality_factor(&PI_Q, attributes.quality_id);
                attributes.pi_c = complexity_factor(attributes.n_circuit_planes);
                attributes.pi_e = lookup::environment_factor(&PI_E_PTH, attributes.environment_active_id);
                let holes = f64::from(attributes.n_wave_soldered)
                    .mul_add(attributes.pi_c, f64::from(attributes.n_hand_soldered) * (attributes.pi_c + 13.0));
                attributes.lambda_b * holes * attributes.pi_q * attributes.pi_e
            }
            5 => {
                attributes.lambda_b =
                    *index_by_id(&LAMBDA_B_CONNECTION, attributes.type_id, "connection type", "type_id", hardware_id)?;
                attributes.pi_q = 1.0;
                attributes.pi_e = lookup::environment_factor(&PI_E_CONNECTION, attributes.environment_active_id);
                attributes.lambda_b * attributes.pi_e
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
        default_if_unset(&mut attributes.n_cycles, 0.05);
        default_id_if_unset(&mut attributes.type_id, 1);
        default_id_if_unset(&mut attributes.contact_gauge, 20);
        if attributes.subcategory_id == 4 && attributes.n_circuit_planes == 0 {
            attributes.n_circuit_planes = 2;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn connector() -> Attributes {
        let mut attributes = Attributes::new(8, 1);
        attributes.hardware_id = 8;
        attributes.type_id = 1;
        attributes.quality_id = 1;
        attributes.environment_active_id = 2;
        attributes.temperature_active = 25.0;
        attributes.contact_gauge = 20;
        attributes.current_operating = 2.0;
        attributes.current_rated = 5.0;
        attributes.n_cycles = 0.5;
        attributes
    }

    #[test]
    fn insert_temperature_from_gauge() {
        let attributes = connector();
        let expected = 0.64f64.mul_add(2.0_f64.powf(1.85), 25.0);
        assert!((insert_temperature(&attributes).unwrap() - expected).abs() < 1e-12);
    }

    #[test]
    fn insert_temperature_unknown_gauge() {
        let mut attributes = connector();
        attributes.contact_gauge = 18;
        assert!(matches!(
            insert_temperature(&attributes),
            Err(PredictionError::MissingKey { key: "contact_gauge", value: 18, .. })
        ));
    }

    #[test]
    fn part_stress_connector() {
        let mut attributes = connector();

        let msg = ConnectionCalculator.calculate_part_stress(&mut attributes).unwrap();

        assert_eq!(msg, "");
        let pi_t = lookup::arrhenius(0.14, insert_temperature(&attributes).unwrap());
        assert!((attributes.pi_t - pi_t).abs() < 1e-12);
        assert!((attributes.pi_k - 1.5).abs() < f64::EPSILON);
        assert!((attributes.hazard_rate_active - 0.0010 * pi_t * 1.5).abs() < 1e-12);
    }

    #[test]
    fn part_stress_socket() {
        let mut attributes = Attributes::new(8, 3);
        attributes.n_active_pins = 41;
        attributes.environment_active_id = 3;
        ConnectionCalculator.calculate_part_stress(&mut attributes).unwrap();
        let pi_p = 4.0_f64.powf(0.51064).exp();
        assert!((attributes.pi_p - pi_p).abs() < 1e-12);
        assert!((attributes.hazard_rate_active - 0.00042 * pi_p * 14.0).abs() < 1e-12);
    }

    #[test]
    fn part_stress_plated_through_hole() {
        let mut attributes = Attributes::new(8, 4);
        attributes.type_id = 1;
        attributes.quality_id = 1;
        attributes.environment_active_id = 1;
        attributes.n_circuit_planes = 2;
        attributes.n_wave_soldered = 100;
        attributes.n_hand_soldered = 10;

        ConnectionCalculator.calculate_part_stress(&mut attributes).unwrap();

        assert!((attributes.pi_c - 1.0).abs() < f64::EPSILON);
        let expected = 0.000_041 * (100.0 + 10.0 * 14.0);
        assert!((attributes.hazard_rate_active - expected).abs() < 1e-12);

        attributes.n_circuit_planes = 4;
        ConnectionCalculator.calculate_part_stress(&mut attributes).unwrap();
        assert!((attributes.pi_c - 0.65 * 4.0_f64.powf(0.63)).abs() < 1e-12);
    }

    #[test]
    fn part_stress_connection() {
        let mut attributes = Attributes::new(8, 5);
        attributes.type_id = 3;
        attributes.environment_active_id = 5;
        ConnectionCalculator.calculate_part_stress(&mut attributes).unwrap();
        assert!((attributes.hazard_rate_active - 0.00026 * 11.0).abs() < 1e-12);

        attributes.type_id = 8;
        assert!(ConnectionCalculator.calculate_part_stress(&mut attributes).is_err());
    }

    #[test]
    fn part_count_by_type() {
        let mut attributes = connector();
        attributes.type_id = 4;
        attributes.quality_id = 2;
        attributes.environment_active_id = 1;
        assert_eq!(ConnectionCalculator.calculate_part_count(&mut attributes), "");
        assert!((attributes.hazard_rate_active - 0.0054 * 2.0).abs() < 1e-12);
    }

    #[test]
    fn mating_factor_bins() {
        assert!((mating_factor(0.0) - 1.0).abs() < f64::EPSILON);
        assert!((mating_factor(40.0) - 3.0).abs() < f64::EPSILON);
        assert!((mating_factor(1000.0) - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn overstress_current() {
        let mut attributes = connector();
        attributes.environment_active_id = 3;
        attributes.current_operating = 4.0;
        ConnectionCalculator.overstressed(&mut attributes);
        assert_eq!(attributes.reason, "1. Operating current > 70% rated current.\n");
    }
}
