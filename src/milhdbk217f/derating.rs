//! Derating checks behind the overstress verdict.
//!
//! Every category compares its operating stresses with a harsh and a mild
//! limit. The harsh limit applies unless the active environment is ground
//! benign, ground fixed, naval sheltered or space flight. Each violated check
//! adds a numbered reason such as `1. Operating current > 75% rated current.`
//! to the record.

use tracing::debug;

use crate::milhdbk217f::attributes::Attributes;
use crate::milhdbk217f::environment;

/// A derating limit with separate values for harsh and mild environments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StressLimit {
    /// Limit in harsh environments.
    pub harsh: f64,
    /// Limit in mild environments.
    pub mild: f64,
}

impl StressLimit {
    /// Creates a limit from its harsh and mild values.
    #[must_use]
    pub const fn new(harsh: f64, mild: f64) -> Self {
        Self { harsh, mild }
    }

    /// Creates a limit that only applies in harsh environments.
    #[must_use]
    pub const fn harsh_only(harsh: f64) -> Self {
        Self {
            harsh,
            mild: f64::INFINITY,
        }
    }

    /// Returns the limit for the given environment severity.
    #[must_use]
    pub const fn select(&self, harsh: bool) -> f64 {
        if harsh {
            self.harsh
        } else {
            self.mild
        }
    }
}

/// Collects violated derating checks for one component.
#[derive(Debug)]
pub struct Derating {
    harsh: bool,
    reasons: Vec<String>,
}

impl Derating {
    /// Starts a derating assessment for the record's active environment.
    #[must_use]
    pub fn new(attributes: &Attributes) -> Self {
        Self {
            harsh: environment::is_harsh(attributes.environment_active_id),
            reasons: Vec::new(),
        }
    }

    /// Whether harsh limits apply.
    #[must_use]
    pub const fn is_harsh(&self) -> bool {
        self.harsh
    }

    /// Checks the ratio of an operating to a rated value, e.g. `quantity` =
    /// "current".
    ///
    /// Skipped when the rating is unknown (zero or negative).
    pub fn ratio(&mut self, quantity: &str, operating: f64, rated: f64, limit: StressLimit) -> &mut Self {
        let limit = limit.select(self.harsh);
        if rated > 0.0 && operating / rated > limit {
            let percent = limit * 100.0;
            self.reasons
                .push(format!("Operating {quantity} > {percent:.0}% rated {quantity}"));
        }
        self
    }

    /// Checks that `value` stays more than `margin` below `ceiling`.
    ///
    /// Skipped when the ceiling is unknown (zero or negative).
    pub fn margin(&mut self, description: &str, value: f64, ceiling: f64, margin: StressLimit) -> &mut Self {
        let margin = margin.select(self.harsh);
        if ceiling > 0.0 && margin.is_finite() && value > ceiling - margin {
            self.reasons.push(description.to_string());
        }
        self
    }

    /// Checks an absolute maximum, e.g. junction temperature.
    pub fn maximum(&mut self, description: &str, value: f64, limit: StressLimit) -> &mut Self {
        if value > limit.select(self.harsh) {
            self.reasons.push(description.to_string());
        }
        self
    }

    /// Writes the verdict and numbered reasons into the record.
    pub fn finish(&self, attributes: &mut Attributes) {
        attributes.overstress = !self.reasons.is_empty();
        attributes.reason = self
            .reasons
            .iter()
            .enumerate()
            .map(|(i, reason)| format!("{}. {reason}.\n", i + 1))
            .collect();
        if attributes.overstress {
            debug!(
                hardware_id = attributes.hardware_id,
                harsh = self.harsh,
                reasons = self.reasons.len(),
                "component overstressed"
            );
        }
    }
}
