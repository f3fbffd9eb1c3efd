//! The flat component attribute record.
//!
//! One [`Attributes`] value describes one hardware item at the moment of
//! calculation. Calculators read the identity, environment, stress and
//! selector fields and write back the base hazard rate, the `pi` factors
//! they use and the resulting hazard rates. Field names serialise to the
//! same flat keys a RAMSTK hardware record uses (`lambda_b`, `piQ`,
//! `hazard_rate_active`, ...), so a parts list exported as JSON or CSV can be
//! read directly.

use serde::{Deserialize, Serialize};

use crate::milhdbk217f::environment::Environment;

/// Component attribute record.
///
/// Fields missing from serialised input take the value from
/// [`Attributes::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Attributes {
    // === Identity ===
    /// Hardware item ID, used in diagnostics.
    pub hardware_id: u32,
    /// Reference designator.
    pub ref_des: String,
    /// Component category (3 = resistor, 6 = relay, ...).
    pub category_id: u32,
    /// Subcategory within the category.
    pub subcategory_id: u32,
    /// Type selector within the subcategory.
    pub type_id: u32,
    /// Governing specification selector.
    pub specification_id: u32,
    /// Construction selector.
    pub construction_id: u32,
    /// Application selector.
    pub application_id: u32,
    /// Contact form selector (SPST, DPST, ...).
    pub contact_form_id: u32,
    /// Contact rating selector for relays.
    pub contact_rating_id: u32,
    /// Contact wire gauge (AWG) for connectors.
    pub contact_gauge: u32,
    /// Technology or load type selector.
    pub technology_id: u32,
    /// Quality level selector.
    pub quality_id: u32,
    /// Insulation class selector for inductive devices.
    pub insulation_id: u32,

    // === Environment and method ===
    /// Active environment ID (1 = GB ... 14 = CL).
    pub environment_active_id: u32,
    /// Dormant environment ID (1 = airborne, 2 = ground, 3 = naval, 4 = space).
    pub environment_dormant_id: u32,
    /// 1 = parts count, 2 = part stress.
    pub hazard_rate_method_id: u32,

    // === Thermal ===
    /// Ambient operating temperature (°C).
    pub temperature_active: f64,
    /// Case temperature (°C).
    pub temperature_case: f64,
    /// Junction temperature (°C).
    pub temperature_junction: f64,
    /// Hot spot temperature (°C).
    pub temperature_hot_spot: f64,
    /// Temperature rise above ambient (°C).
    pub temperature_rise: f64,
    /// Maximum rated temperature (°C).
    pub temperature_rated_max: f64,
    /// Junction-to-case thermal resistance (°C/W).
    pub theta_jc: f64,

    // === Electrical stress ===
    /// Rated voltage (V).
    pub voltage_rated: f64,
    /// Operating AC voltage (V).
    pub voltage_ac_operating: f64,
    /// Operating DC voltage (V).
    pub voltage_dc_operating: f64,
    /// Operating to rated voltage ratio.
    pub voltage_ratio: f64,
    /// Rated current (A).
    pub current_rated: f64,
    /// Operating current (A).
    pub current_operating: f64,
    /// Operating to rated current ratio.
    pub current_ratio: f64,
    /// Rated power (W).
    pub power_rated: f64,
    /// Operating power (W).
    pub power_operating: f64,
    /// Operating to rated power ratio.
    pub power_ratio: f64,
    /// Resistance (Ω).
    pub resistance: f64,
    /// Capacitance (µF).
    pub capacitance: f64,
    /// Operating frequency (MHz).
    pub frequency_operating: f64,

    // === Construction counts ===
    /// Number of elements (network resistors, taps, contacts, ...).
    pub n_elements: u32,
    /// Operating cycles per hour (or matings per 1000 hours for connectors).
    pub n_cycles: f64,
    /// Number of active pins.
    pub n_active_pins: u32,
    /// Number of circuit planes.
    pub n_circuit_planes: u32,
    /// Number of wave soldered plated through-holes.
    pub n_wave_soldered: u32,
    /// Number of hand soldered plated through-holes.
    pub n_hand_soldered: u32,
    /// Radiating surface area (in²).
    pub area: f64,
    /// Weight (lbs).
    pub weight: f64,

    // === Logistics adjustments ===
    /// Number of identical items.
    pub quantity: u32,
    /// Percentage of mission time the item operates.
    pub duty_cycle: f64,
    /// Additive hazard rate adjustment.
    pub add_adj_factor: f64,
    /// Multiplicative hazard rate adjustment.
    pub mult_adj_factor: f64,

    // === Derived factors ===
    /// Base hazard rate.
    pub lambda_b: f64,
    /// Application factor.
    #[serde(rename = "piA")]
    pub pi_a: f64,
    /// Contact form or construction factor.
    #[serde(rename = "piC")]
    pub pi_c: f64,
    /// Configuration factor.
    #[serde(rename = "piCF")]
    pub pi_cf: f64,
    /// Capacitance factor.
    #[serde(rename = "piCV")]
    pub pi_cv: f64,
    /// Cycling factor.
    #[serde(rename = "piCYC")]
    pub pi_cyc: f64,
    /// Environment factor.
    #[serde(rename = "piE")]
    pub pi_e: f64,
    /// Application and construction (or function) factor.
    #[serde(rename = "piF")]
    pub pi_f: f64,
    /// Mating/unmating factor.
    #[serde(rename = "piK")]
    pub pi_k: f64,
    /// Load stress factor.
    #[serde(rename = "piL")]
    pub pi_l: f64,
    /// Number of resistors factor.
    #[serde(rename = "piNR")]
    pub pi_nr: f64,
    /// Active pins factor.
    #[serde(rename = "piP")]
    pub pi_p: f64,
    /// Quality factor.
    #[serde(rename = "piQ")]
    pub pi_q: f64,
    /// Resistance, power or current rating factor.
    #[serde(rename = "piR")]
    pub pi_r: f64,
    /// Electrical stress factor.
    #[serde(rename = "piS")]
    pub pi_s: f64,
    /// Series resistance factor.
    #[serde(rename = "piSR")]
    pub pi_sr: f64,
    /// Temperature factor.
    #[serde(rename = "piT")]
    pub pi_t: f64,
    /// Potentiometer taps factor.
    #[serde(rename = "piTAPS")]
    pub pi_taps: f64,
    /// Utilisation factor.
    #[serde(rename = "piU")]
    pub pi_u: f64,
    /// Voltage factor.
    #[serde(rename = "piV")]
    pub pi_v: f64,

    // === Results ===
    /// Active hazard rate (failures per 10^6 hours).
    pub hazard_rate_active: f64,
    /// Dormant hazard rate (failures per 10^6 hours).
    pub hazard_rate_dormant: f64,
    /// Whether any derating check failed.
    pub overstress: bool,
    /// Numbered reasons for the overstress verdict.
    pub reason: String,
}

impl Default for Attributes {
    fn default() -> Self {
        Self {
            hardware_id: 0,
            ref_des: String::new(),
            category_id: 0,
            subcategory_id: 0,
            type_id: 0,
            specification_id: 0,
            construction_id: 0,
            application_id: 0,
            contact_form_id: 0,
            contact_rating_id: 0,
            contact_gauge: 0,
            technology_id: 0,
            quality_id: 0,
            insulation_id: 0,
            environment_active_id: 0,
            environment_dormant_id: 0,
            hazard_rate_method_id: 1,
            temperature_active: 0.0,
            temperature_case: 0.0,
            temperature_junction: 0.0,
            temperature_hot_spot: 0.0,
            temperature_rise: 0.0,
            temperature_rated_max: 0.0,
            theta_jc: 0.0,
            voltage_rated: 0.0,
            voltage_ac_operating: 0.0,
            voltage_dc_operating: 0.0,
            voltage_ratio: 0.0,
            current_rated: 0.0,
            current_operating: 0.0,
            current_ratio: 0.0,
            power_rated: 0.0,
            power_operating: 0.0,
            power_ratio: 0.0,
            resistance: 0.0,
            capacitance: 0.0,
            frequency_operating: 0.0,
            n_elements: 0,
            n_cycles: 0.0,
            n_active_pins: 0,
            n_circuit_planes: 0,
            n_wave_soldered: 0,
            n_hand_soldered: 0,
            area: 0.0,
            weight: 0.0,
            quantity: 1,
            duty_cycle: 100.0,
            add_adj_factor: 0.0,
            mult_adj_factor: 1.0,
            lambda_b: 0.0,
            pi_a: 0.0,
            pi_c: 0.0,
            pi_cf: 0.0,
            pi_cv: 0.0,
            pi_cyc: 0.0,
            pi_e: 0.0,
            pi_f: 0.0,
            pi_k: 0.0,
            pi_l: 0.0,
            pi_nr: 0.0,
            pi_p: 0.0,
            pi_q: 0.0,
            pi_r: 0.0,
            pi_s: 0.0,
            pi_sr: 0.0,
            pi_t: 0.0,
            pi_taps: 0.0,
            pi_u: 0.0,
            pi_v: 0.0,
            hazard_rate_active: 0.0,
            hazard_rate_dormant: 0.0,
            overstress: false,
            reason: String::new(),
        }
    }
}

impl Attributes {
    /// Creates a record for a component of the given category and subcategory.
    #[must_use]
    pub fn new(category_id: u32, subcategory_id: u32) -> Self {
        Self {
            category_id,
            subcategory_id,
            ..Self::default()
        }
    }

    /// Returns the active environment, if the ID is valid.
    #[must_use]
    pub fn environment(&self) -> Option<Environment> {
        Environment::from_id(self.environment_active_id)
    }

    /// Hazard rate after logistics adjustments.
    ///
    /// `(λ_active + additive adjustment) × duty cycle × multiplicative
    /// adjustment × quantity`.
    #[must_use]
    pub fn hazard_rate_logistics(&self) -> f64 {
        (self.hazard_rate_active + self.add_adj_factor)
            * (self.duty_cycle / 100.0)
            * self.mult_adj_factor
            * f64::from(self.quantity)
    }
}
