//! Prediction report.
//!
//! The report lists every calculated part with its derived factors, the
//! parts that could not be calculated, and the system roll-up: total
//! hazard rates, hazard rate per component category and MTBF.

use std::path::Path;

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::Serialize;

use crate::error::{BatchError, BatchResult};
use crate::milhdbk217f::Attributes;

/// A calculated part.
#[derive(Debug, Clone, Serialize)]
pub struct PartResult {
    /// The record with every derived factor written.
    #[serde(flatten)]
    pub attributes: Attributes,

    /// Active hazard rate after quantity, duty cycle and adjustment factors.
    pub hazard_rate_logistics: f64,

    /// Warning and error sentences from the calculation.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub message: String,
}

/// A part whose calculation was rejected.
#[derive(Debug, Clone, Serialize)]
pub struct Failure {
    /// Hardware ID of the part.
    pub hardware_id: u32,
    /// Reference designator of the part.
    pub ref_des: String,
    /// Why the part was rejected.
    pub error: String,
}

/// System roll-up.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Totals {
    /// Number of calculated parts.
    pub n_parts: usize,
    /// Number of calculated parts that are overstressed.
    pub n_overstressed: usize,
    /// Sum of active hazard rates (failures/10^6 hours).
    pub hazard_rate_active: f64,
    /// Sum of dormant hazard rates.
    pub hazard_rate_dormant: f64,
    /// Sum of logistics hazard rates.
    pub hazard_rate_logistics: f64,
    /// Mean time between failures (hours) from the logistics hazard rate.
    pub mtbf: f64,
    /// Logistics hazard rate by component category, in order of first
    /// appearance.
    pub by_category: IndexMap<String, f64>,
}

/// Prediction report for one batch run.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// When the report was produced.
    pub generated_at: DateTime<Utc>,
    /// Method forced on every part, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    /// System roll-up.
    pub totals: Totals,
    /// Calculated parts.
    pub parts: Vec<PartResult>,
    /// Rejected parts.
    pub failures: Vec<Failure>,
}

/// Returns the display name of a component category.
#[must_use]
pub const fn category_name(category_id: u32) -> &'static str {
    match category_id {
        1 => "Integrated Circuit",
        2 => "Semiconductor",
        3 => "Resistor",
        4 => "Capacitor",
        5 => "Inductive Device",
        6 => "Relay",
        7 => "Switching Device",
        8 => "Connection",
        9 => "Meter",
        10 => "Miscellaneous",
        _ => "Unknown",
    }
}

/// Mean time between failures (hours) for a hazard rate in failures per
/// 10^6 hours; 0.0 when the hazard rate is zero.
#[must_use]
pub fn mtbf(hazard_rate: f64) -> f64 {
    if hazard_rate > 0.0 {
        1.0e6 / hazard_rate
    } else {
        0.0
    }
}

impl Report {
    /// Creates an empty report stamped with the current time.
    #[must_use]
    pub fn new(method: Option<String>) -> Self {
        Self {
            generated_at: Utc::now(),
            method,
            totals: Totals::default(),
            parts: Vec::new(),
            failures: Vec::new(),
        }
    }

    /// Adds a calculated part and rolls it into the totals.
    pub fn push_part(&mut self, attributes: Attributes, message: String) {
        let hazard_rate_logistics = attributes.hazard_rate_logistics();
        let totals = &mut self.totals;
        totals.n_parts += 1;
        if attributes.overstress {
            totals.n_overstressed += 1;
        }
        totals.hazard_rate_active += attributes.hazard_rate_active;
        totals.hazard_rate_dormant += attributes.hazard_rate_dormant;
        totals.hazard_rate_logistics += hazard_rate_logistics;
        totals.mtbf = mtbf(totals.hazard_rate_logistics);
        *totals
            .by_category
            .entry(category_name(attributes.category_id).to_string())
            .or_insert(0.0) += hazard_rate_logistics;

        self.parts.push(PartResult {
            attributes,
            hazard_rate_logistics,
            message,
        });
    }

    /// Records a rejected part. It does not count towards the totals.
    pub fn push_failure(&mut self, attributes: &Attributes, error: String) {
        self.failures.push(Failure {
            hardware_id: attributes.hardware_id,
            ref_des: attributes.ref_des.clone(),
            error,
        });
    }

    /// Serialises the report to JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialisation fails.
    pub fn to_json(&self, pretty: bool) -> BatchResult<String> {
        let result = if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        };
        result.map_err(|source| BatchError::Serialise { source })
    }

    /// Writes the report as JSON to `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialisation or the write fails.
    pub fn write(&self, path: &Path, pretty: bool) -> BatchResult<()> {
        let json = self.to_json(pretty)?;
        std::fs::write(path, json).map_err(|source| BatchError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}
