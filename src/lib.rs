//! ramstk-predict: MIL-HDBK-217F hazard rate prediction
//!
//! This library calculates the active and dormant hazard rates of discrete
//! electronic and electromechanical components by the parts count and part
//! stress methods of MIL-HDBK-217F, and checks each part against derating
//! limits.
//!
//! # Architecture
//!
//! - **Engine**: one calculator per component category, each a pure
//!   function of a flat [`milhdbk217f::Attributes`] record
//! - **Batch**: loads parts lists from JSON or CSV, assesses every part and
//!   rolls the results up into a report
//!
//! # Modules
//!
//! - [`milhdbk217f`]: Hazard rate tables, models and derating
//! - [`batch`]: Parts list input and report output
//! - [`config`]: Configuration loading and validation
//! - [`error`]: Error types for configuration and batch processing

pub mod batch;
pub mod config;
pub mod error;
pub mod milhdbk217f;
