//! Batch prediction over parts lists.
//!
//! A batch run resolves input patterns to files, loads every part record,
//! optionally forces a hazard rate method and fills in default stress
//! values, then assesses each part and rolls the results up into a
//! [`Report`]. A part that cannot be calculated is recorded as a failure
//! and does not stop the run.

pub mod input;
pub mod report;

pub use report::{category_name, mtbf, Failure, PartResult, Report, Totals};

use tracing::{info, warn};

use crate::config::Config;
use crate::error::BatchResult;
use crate::milhdbk217f::{self, Attributes, PART_STRESS};

/// Options applied to every part in a batch.
#[derive(Debug, Clone, Default)]
pub struct BatchOptions {
    /// Method name forced on every part ("count" or "stress").
    pub method: Option<String>,
    /// Method ID forced on every part.
    pub method_id: Option<u32>,
    /// Fill zero stress inputs with defaults before calculating.
    pub apply_default_values: bool,
}

impl BatchOptions {
    /// Builds options from the prediction section of a configuration.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            method: config.prediction.hazard_rate_method.clone(),
            method_id: config.prediction.method_id(),
            apply_default_values: config.prediction.apply_default_values,
        }
    }
}

/// Assesses a list of parts.
#[must_use]
pub fn predict(parts: Vec<Attributes>, options: &BatchOptions) -> Report {
    let mut report = Report::new(options.method.clone());
    for mut attributes in parts {
        if let Some(method_id) = options.method_id {
            attributes.hazard_rate_method_id = method_id;
        }
        if options.apply_default_values && attributes.hazard_rate_method_id == PART_STRESS {
            if let Err(e) = milhdbk217f::set_default_values(&mut attributes) {
                warn!(hardware_id = attributes.hardware_id, error = %e, "part rejected");
                report.push_failure(&attributes, e.to_string());
                continue;
            }
        }
        match milhdbk217f::assess(&mut attributes) {
            Ok(message) => {
                if !message.is_empty() {
                    warn!(
                        hardware_id = attributes.hardware_id,
                        ref_des = %attributes.ref_des,
                        message = %message.trim_end(),
                        "calculation warning"
                    );
                }
                report.push_part(attributes, message);
            }
            Err(e) => {
                warn!(hardware_id = attributes.hardware_id, error = %e, "part rejected");
                report.push_failure(&attributes, e.to_string());
            }
        }
    }
    info!(
        parts = report.totals.n_parts,
        failures = report.failures.len(),
        hazard_rate = report.totals.hazard_rate_logistics,
        "prediction complete"
    );
    report
}

/// Resolves `patterns`, loads every matched parts list and assesses the
/// parts.
///
/// # Errors
///
/// Returns an error if a pattern is invalid or matches nothing, or if an
/// input file cannot be read or parsed.
pub fn run(patterns: &[String], options: &BatchOptions) -> BatchResult<Report> {
    let mut parts = Vec::new();
    for path in input::resolve(patterns)? {
        parts.extend(input::load(&path)?);
    }
    Ok(predict(parts, options))
}
