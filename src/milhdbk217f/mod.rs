//! MIL-HDBK-217F hazard rate prediction.
//!
//! This module implements the parts count and part stress methods of
//! MIL-HDBK-217F (Notice 2) for discrete electronic and electromechanical
//! components. All tables are `const` data and every calculation is a pure
//! function of the [`Attributes`] record it is given.
//!
//! # Example
//!
//! ```
//! use ramstk_predict::milhdbk217f::{assess, Attributes};
//!
//! let mut relay = Attributes::new(6, 1);
//! relay.type_id = 2;
//! relay.quality_id = 2;
//! relay.environment_active_id = 1;
//! relay.environment_dormant_id = 2;
//!
//! let msg = assess(&mut relay).unwrap();
//! assert_eq!(msg, "");
//! assert!((relay.hazard_rate_active - 1.29).abs() < 1e-9);
//! ```
//!
//! Problems with the input data (a zero base hazard rate, an unknown
//! environment) are reported as `RAMSTK WARNING:` / `RAMSTK ERROR:`
//! sentences in the returned message. Selectors that do not index their
//! tables in the part stress method are returned as [`PredictionError`].

pub mod attributes;
pub mod derating;
pub mod dispatch;
pub mod dormant;
pub mod environment;
pub mod error;
pub mod lookup;
pub mod messages;
pub mod models;

pub use attributes::Attributes;
pub use dispatch::{assess, calculate, calculator_for, set_default_values};
pub use environment::{DormantEnvironment, Environment};
pub use error::{PredictionError, PredictionResult};
pub use models::{ComponentCalculator, PART_COUNT, PART_STRESS};
