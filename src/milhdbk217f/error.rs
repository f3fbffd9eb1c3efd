//! Error types for hazard rate calculations.
//!
//! Only configuration and programmer errors surface here. Missing or zero
//! business data (a base hazard rate of 0.0, an unknown quality level in the
//! parts count path, an unknown dormant environment) is reported through the
//! warning message returned alongside the updated attributes instead.

use thiserror::Error;

/// Result type for prediction operations.
pub type PredictionResult<T> = Result<T, PredictionError>;

/// Errors that can occur while calculating a hazard rate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PredictionError {
    /// No calculator exists for the category/subcategory combination.
    #[error("Unsupported component category {category_id}, subcategory {subcategory_id}")]
    UnsupportedCategory {
        /// Category ID of the component.
        category_id: u32,
        /// Subcategory ID of the component.
        subcategory_id: u32,
    },

    /// The hazard rate method selector is neither parts count nor part stress.
    #[error("Unknown hazard rate method ID {method_id}")]
    UnknownMethod {
        /// The offending `hazard_rate_method_id`.
        method_id: u32,
    },

    /// A keyed table has no entry for the requested ID.
    #[error("{table} has no entry for {key} {value} (hardware ID {hardware_id})")]
    MissingKey {
        /// Name of the table being searched.
        table: &'static str,
        /// Name of the attribute used as the key.
        key: &'static str,
        /// The key value that was not found.
        value: u32,
        /// Hardware ID of the component being calculated.
        hardware_id: u32,
    },

    /// A positional table lookup ran past the end of the table.
    #[error("{key} {value} is out of range for {table} (hardware ID {hardware_id})")]
    IndexOutOfRange {
        /// Name of the table being indexed.
        table: &'static str,
        /// Name of the attribute used as the index.
        key: &'static str,
        /// The 1-based index value that was out of range.
        value: u32,
        /// Hardware ID of the component being calculated.
        hardware_id: u32,
    },
}
