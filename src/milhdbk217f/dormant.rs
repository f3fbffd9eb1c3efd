//! Active to dormant hazard rate conversion.
//!
//! A component stored or idle in a dormant environment fails at a fraction of
//! its active hazard rate. The fraction depends on the component category and
//! on the pairing of the active environment with the dormant one:
//!
//! | Active environment IDs | Dormant ID | Column            |
//! |------------------------|------------|-------------------|
//! | 1-3 (ground)           | 2 ground   | `ground`          |
//! | 4-5 (naval)            | 3 naval    | `naval`           |
//! | 6-10 (airborne)        | 1 airborne | `airborne`        |
//! | 6-10 (airborne)        | 2 ground   | `airborne_ground` |
//! | 11 (space)             | 4 space    | `space`           |
//! | 12-13 (missile)        | 2 ground   | `missile_ground`  |
//!
//! Any other pairing, including cannon launch, has no factor.

use tracing::debug;

use crate::milhdbk217f::attributes::Attributes;
use crate::milhdbk217f::environment::{DormantEnvironment, Environment};
use crate::milhdbk217f::messages;

/// Dormant conversion factors for one component category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DormantFactors {
    /// Ground active, ground dormant.
    pub ground: f64,
    /// Naval active, naval dormant.
    pub naval: f64,
    /// Airborne active, airborne dormant.
    pub airborne: f64,
    /// Airborne active, ground dormant.
    pub airborne_ground: f64,
    /// Space active, space dormant.
    pub space: f64,
    /// Missile active, ground dormant.
    pub missile_ground: f64,
}

impl DormantFactors {
    /// Returns the conversion factor for an active/dormant environment pair.
    #[must_use]
    pub fn factor(&self, environment_active_id: u32, environment_dormant_id: u32) -> Option<f64> {
        use DormantEnvironment::{Airborne, Ground, Naval, Space};
        use Environment::{
            AirborneInhabitedCargo, AirborneInhabitedFighter, AirborneRotaryWing, AirborneUninhabitedCargo,
            AirborneUninhabitedFighter, GroundBenign, GroundFixed, GroundMobile, MissileFlight, MissileLaunch,
            NavalSheltered, NavalUnsheltered, SpaceFlight,
        };

        let active = Environment::from_id(environment_active_id)?;
        let dormant = DormantEnvironment::from_id(environment_dormant_id)?;
        let airborne = matches!(
            active,
            AirborneInhabitedCargo
                | AirborneInhabitedFighter
                | AirborneUninhabitedCargo
                | AirborneUninhabitedFighter
                | AirborneRotaryWing
        );
        match (active, dormant) {
            (GroundBenign | GroundFixed | GroundMobile, Ground) => Some(self.ground),
            (NavalSheltered | NavalUnsheltered, Naval) => Some(self.naval),
            (_, Airborne) if airborne => Some(self.airborne),
            (_, Ground) if airborne => Some(self.airborne_ground),
            (SpaceFlight, Space) => Some(self.space),
            (MissileFlight | MissileLaunch, Ground) => Some(self.missile_ground),
            _ => None,
        }
    }

    /// Writes `hazard_rate_dormant` into the record.
    ///
    /// Returns an empty message on success. An unknown environment pairing
    /// sets the dormant hazard rate to 0.0 and returns an error sentence
    /// naming both IDs.
    pub fn apply(&self, attributes: &mut Attributes) -> String {
        let active = attributes.environment_active_id;
        let dormant = attributes.environment_dormant_id;
        if let (Some(factor), Some(environment)) = (self.factor(active, dormant), attributes.environment()) {
            attributes.hazard_rate_dormant = attributes.hazard_rate_active * factor;
            debug!(
                hardware_id = attributes.hardware_id,
                %environment,
                factor,
                hazard_rate_dormant = attributes.hazard_rate_dormant,
                "dormant hazard rate"
            );
            String::new()
        } else {
            attributes.hazard_rate_dormant = 0.0;
            messages::unknown_dormant_environment(active, dormant)
        }
    }
}

/// Diodes.
pub const DIODE: DormantFactors = DormantFactors {
    ground: 0.04,
    naval: 0.03,
    airborne: 0.05,
    airborne_ground: 0.02,
    space: 0.20,
    missile_ground: 0.03,
};

/// Transistors, unijunctions and thyristors.
pub const TRANSISTOR: DormantFactors = DormantFactors {
    ground: 0.05,
    naval: 0.03,
    airborne: 0.06,
    airborne_ground: 0.02,
    space: 0.20,
    missile_ground: 0.03,
};

/// Resistors.
pub const RESISTOR: DormantFactors = DormantFactors {
    ground: 0.20,
    naval: 0.03,
    airborne: 0.06,
    airborne_ground: 0.06,
    space: 0.50,
    missile_ground: 0.10,
};

/// Capacitors.
pub const CAPACITOR: DormantFactors = DormantFactors {
    ground: 0.10,
    naval: 0.03,
    airborne: 0.10,
    airborne_ground: 0.06,
    space: 0.50,
    missile_ground: 0.10,
};

/// Transformers and coils.
pub const INDUCTOR: DormantFactors = DormantFactors {
    ground: 0.20,
    naval: 0.06,
    airborne: 0.20,
    airborne_ground: 0.10,
    space: 0.50,
    missile_ground: 0.10,
};

/// Relays.
pub const RELAY: DormantFactors = DormantFactors {
    ground: 0.20,
    naval: 0.30,
    airborne: 0.20,
    airborne_ground: 0.04,
    space: 0.40,
    missile_ground: 0.10,
};

/// Switches.
pub const SWITCH: DormantFactors = DormantFactors {
    ground: 0.40,
    naval: 0.10,
    airborne: 0.20,
    airborne_ground: 0.20,
    space: 0.80,
    missile_ground: 0.40,
};

/// Connectors, sockets and connections.
pub const CONNECTION: DormantFactors = DormantFactors {
    ground: 0.005,
    naval: 0.001,
    airborne: 0.005,
    airborne_ground: 0.003,
    space: 0.02,
    missile_ground: 0.003,
};

/// Meters, crystals, filters, fuses and lamps.
pub const MISCELLANEOUS: DormantFactors = DormantFactors {
    ground: 0.10,
    naval: 0.05,
    airborne: 0.10,
    airborne_ground: 0.05,
    space: 0.30,
    missile_ground: 0.05,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relay_naval_conversion() {
        let mut attributes = Attributes::new(6, 1);
        attributes.environment_active_id = 4;
        attributes.environment_dormant_id = 3;
        attributes.hazard_rate_active = 0.006_243_916;

        let msg = RELAY.apply(&mut attributes);

        assert_eq!(msg, "");
        assert!((attributes.hazard_rate_dormant - 0.001_873_175).abs() < 1e-7);
    }

    #[test]
    fn unknown_pairing_zeroes_dormant_rate() {
        let mut attributes = Attributes::new(6, 1);
        attributes.environment_active_id = 24;
        attributes.environment_dormant_id = 3;
        attributes.hazard_rate_active = 1.005_887_691;
        attributes.hazard_rate_dormant = 9.9;

        let msg = RELAY.apply(&mut attributes);

        assert_eq!(
            msg,
            "RAMSTK ERROR: Unknown active and/or dormant environment ID. Active ID: 24, Dormant ID: 3\n"
        );
        assert!(attributes.hazard_rate_dormant.abs() < f64::EPSILON);
    }

    #[test]
    fn environment_pairings() {
        assert_eq!(SWITCH.factor(3, 2), Some(0.40));
        assert_eq!(SWITCH.factor(7, 1), Some(0.20));
        assert_eq!(RELAY.factor(7, 2), Some(0.04));
        assert_eq!(RELAY.factor(11, 4), Some(0.40));
        assert_eq!(RELAY.factor(12, 2), Some(0.10));
        // Cannon launch never converts.
        assert_eq!(RELAY.factor(14, 2), None);
        // Ground equipment cannot be stored at sea.
        assert_eq!(RELAY.factor(1, 3), None);
    }

    #[test]
    fn convertible_pairings() {
        let pairings: Vec<_> = Environment::ALL
            .into_iter()
            .flat_map(|active| (1..=5).map(move |dormant| (active, dormant)))
            .filter(|&(active, dormant)| RELAY.factor(active.id(), dormant).is_some())
            .collect();

        assert_eq!(pairings.len(), 18);
        assert!(pairings.iter().all(|&(active, dormant)| active != Environment::CannonLaunch && dormant != 5));
        assert!(pairings.contains(&(Environment::SpaceFlight, DormantEnvironment::Space.id())));
        assert_eq!(RELAY.factor(0, 2), None);
    }
}
