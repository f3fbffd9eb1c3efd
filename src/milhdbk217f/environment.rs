//! MIL-HDBK-217F operating environments and their dormant counterparts.
//!
//! Every environment-indexed table in this crate is a `[f64; 14]` ordered as
//! the handbook prints its columns:
//!
//! | ID | Code | Environment                   |
//! |----|------|-------------------------------|
//! |  1 | GB   | Ground, Benign                |
//! |  2 | GF   | Ground, Fixed                 |
//! |  3 | GM   | Ground, Mobile                |
//! |  4 | NS   | Naval, Sheltered              |
//! |  5 | NU   | Naval, Unsheltered            |
//! |  6 | AIC  | Airborne, Inhabited, Cargo    |
//! |  7 | AIF  | Airborne, Inhabited, Fighter  |
//! |  8 | AUC  | Airborne, Uninhabited, Cargo  |
//! |  9 | AUF  | Airborne, Uninhabited, Fighter|
//! | 10 | ARW  | Airborne, Rotary Wing         |
//! | 11 | SF   | Space, Flight                 |
//! | 12 | MF   | Missile, Flight               |
//! | 13 | ML   | Missile, Launch               |
//! | 14 | CL   | Cannon, Launch                |

use std::fmt;

/// Number of active environments in every environment-indexed table.
pub const N_ENVIRONMENTS: usize = 14;

/// An environment-indexed table row.
pub type EnvironmentRow = [f64; N_ENVIRONMENTS];

/// Active operating environment per MIL-HDBK-217F Section 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Environment {
    /// GB - nearly zero environmental stress, controlled temperature.
    GroundBenign,
    /// GF - permanent racks with adequate cooling air.
    GroundFixed,
    /// GM - equipment installed on wheeled or tracked vehicles.
    GroundMobile,
    /// NS - sheltered or below deck on surface ships and submarines.
    NavalSheltered,
    /// NU - unprotected shipboard equipment exposed to weather.
    NavalUnsheltered,
    /// AIC - typical cargo compartments occupied by an aircrew.
    AirborneInhabitedCargo,
    /// AIF - as AIC but installed on high performance aircraft.
    AirborneInhabitedFighter,
    /// AUC - uninhabited areas of long mission aircraft.
    AirborneUninhabitedCargo,
    /// AUF - uninhabited areas of high performance aircraft.
    AirborneUninhabitedFighter,
    /// ARW - equipment installed on helicopters.
    AirborneRotaryWing,
    /// SF - earth orbital, vehicle in neither powered flight nor re-entry.
    SpaceFlight,
    /// MF - conditions related to powered flight of air breathing missiles.
    MissileFlight,
    /// ML - severe conditions of missile launch and space vehicle boost.
    MissileLaunch,
    /// CL - extremely severe conditions related to cannon launching.
    CannonLaunch,
}

impl Environment {
    /// All environments in table order.
    pub const ALL: [Self; N_ENVIRONMENTS] = [
        Self::GroundBenign,
        Self::GroundFixed,
        Self::GroundMobile,
        Self::NavalSheltered,
        Self::NavalUnsheltered,
        Self::AirborneInhabitedCargo,
        Self::AirborneInhabitedFighter,
        Self::AirborneUninhabitedCargo,
        Self::AirborneUninhabitedFighter,
        Self::AirborneRotaryWing,
        Self::SpaceFlight,
        Self::MissileFlight,
        Self::MissileLaunch,
        Self::CannonLaunch,
    ];

    /// Returns the environment for a 1-based `environment_active_id`.
    #[must_use]
    pub fn from_id(id: u32) -> Option<Self> {
        let index = usize::try_from(id).ok()?.checked_sub(1)?;
        Self::ALL.get(index).copied()
    }

    /// Returns the 1-based environment ID.
    #[must_use]
    pub const fn id(self) -> u32 {
        self as u32 + 1
    }

    /// Returns the 0-based column index into an [`EnvironmentRow`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the handbook code for the environment.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::GroundBenign => "GB",
            Self::GroundFixed => "GF",
            Self::GroundMobile => "GM",
            Self::NavalSheltered => "NS",
            Self::NavalUnsheltered => "NU",
            Self::AirborneInhabitedCargo => "AIC",
            Self::AirborneInhabitedFighter => "AIF",
            Self::AirborneUninhabitedCargo => "AUC",
            Self::AirborneUninhabitedFighter => "AUF",
            Self::AirborneRotaryWing => "ARW",
            Self::SpaceFlight => "SF",
            Self::MissileFlight => "MF",
            Self::MissileLaunch => "ML",
            Self::CannonLaunch => "CL",
        }
    }

    /// Whether derating limits for harsh environments apply.
    ///
    /// Only ground benign, ground fixed, naval sheltered and space flight are
    /// considered mild.
    #[must_use]
    pub const fn is_harsh(self) -> bool {
        !matches!(
            self,
            Self::GroundBenign | Self::GroundFixed | Self::NavalSheltered | Self::SpaceFlight
        )
    }

    /// Default case temperature (°C) used when none is supplied for a
    /// semiconductor in this environment.
    #[must_use]
    pub const fn default_case_temperature(self) -> f64 {
        match self {
            Self::GroundBenign | Self::SpaceFlight => 35.0,
            Self::GroundFixed | Self::NavalSheltered | Self::CannonLaunch => 45.0,
            Self::GroundMobile | Self::NavalUnsheltered | Self::MissileFlight => 50.0,
            Self::AirborneInhabitedCargo
            | Self::AirborneInhabitedFighter
            | Self::AirborneRotaryWing
            | Self::MissileLaunch => 60.0,
            Self::AirborneUninhabitedCargo | Self::AirborneUninhabitedFighter => 75.0,
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Whether the harsh derating limits apply to an environment ID.
///
/// Unknown IDs are treated as harsh.
#[must_use]
pub fn is_harsh(environment_active_id: u32) -> bool {
    Environment::from_id(environment_active_id).map_or(true, Environment::is_harsh)
}

/// Dormant (non-operating) storage environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DormantEnvironment {
    /// Stored aboard an aircraft.
    Airborne,
    /// Stored on the ground.
    Ground,
    /// Stored aboard ship.
    Naval,
    /// Stored in orbit.
    Space,
}

impl DormantEnvironment {
    /// Returns the dormant environment for a 1-based `environment_dormant_id`.
    #[must_use]
    pub const fn from_id(id: u32) -> Option<Self> {
        match id {
            1 => Some(Self::Airborne),
            2 => Some(Self::Ground),
            3 => Some(Self::Naval),
            4 => Some(Self::Space),
            _ => None,
        }
    }

    /// Returns the 1-based dormant environment ID.
    #[must_use]
    pub const fn id(self) -> u32 {
        self as u32 + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn environment_ids_round_trip_table_order() {
        for (index, env) in Environment::ALL.into_iter().enumerate() {
            assert_eq!(env.index(), index);
            assert_eq!(Environment::from_id(env.id()), Some(env));
        }
        assert_eq!(Environment::from_id(0), None);
        assert_eq!(Environment::from_id(15), None);
    }

    #[test]
    fn environment_codes() {
        assert_eq!(Environment::GroundBenign.code(), "GB");
        assert_eq!(Environment::AirborneUninhabitedFighter.code(), "AUF");
        assert_eq!(Environment::NavalUnsheltered.to_string(), "NU");
    }

    #[test]
    fn mild_environments() {
        assert!(!is_harsh(1));
        assert!(!is_harsh(2));
        assert!(is_harsh(3));
        assert!(!is_harsh(4));
        assert!(is_harsh(5));
        assert!(!is_harsh(11));
        assert!(is_harsh(14));
        assert!(is_harsh(0));
        assert!(is_harsh(100));
    }

    #[test]
    fn dormant_ids() {
        assert_eq!(DormantEnvironment::from_id(3), Some(DormantEnvironment::Naval));
        assert_eq!(DormantEnvironment::Space.id(), 4);
        assert_eq!(DormantEnvironment::from_id(5), None);
    }
}
