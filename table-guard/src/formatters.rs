//! Violation report formatting.
//!
//! The engine returns violations as structured values; this module renders
//! them for the two consumers the surrounding tooling has: humans reading a
//! CI log or editor console, and report tooling that wants the full
//! location model as JSON. Formatting never resolves locations to an
//! external source — that stays with the consuming layer.
//!
//! # Examples
//!
//! ```rust
//! use table_guard::formatters::{HumanFormatter, ViolationFormatter};
//!
//! let formatter = HumanFormatter::new();
//! let output = formatter.format(&[]).unwrap();
//! assert!(output.contains("0 violation(s)"));
//! ```

use crate::core::Violation;
use crate::error::{GuardError, Result};
use std::fmt::Write;

/// Configuration options for formatting violation reports.
#[derive(Debug, Clone)]
pub struct FormatterConfig {
    /// Include the location line under each violation (human formatter)
    pub include_locations: bool,
    /// Maximum number of violations to display (-1 for all)
    pub max_violations: i32,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            include_locations: true,
            max_violations: -1, // Show all violations by default
        }
    }
}

impl FormatterConfig {
    /// Creates a minimal configuration showing only the summary counts.
    pub fn minimal() -> Self {
        Self {
            include_locations: false,
            max_violations: 0,
        }
    }

    /// Sets the maximum number of violations to display.
    pub fn with_max_violations(mut self, max: i32) -> Self {
        self.max_violations = max;
        self
    }
}

/// A formatter turning a violation list into an output string.
pub trait ViolationFormatter {
    /// Formats the violations.
    fn format(&self, violations: &[Violation]) -> Result<String>;
}

/// Renders violations as machine-readable JSON, preserving the full
/// location model.
#[derive(Debug, Clone, Default)]
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    /// Creates a compact JSON formatter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables pretty-printed output.
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl ViolationFormatter for JsonFormatter {
    fn format(&self, violations: &[Violation]) -> Result<String> {
        let rendered = if self.pretty {
            serde_json::to_string_pretty(violations)
        } else {
            serde_json::to_string(violations)
        };
        rendered.map_err(|e| GuardError::Serialization(e.to_string()))
    }
}

/// Renders violations as a human-readable report with a summary line.
#[derive(Debug, Clone, Default)]
pub struct HumanFormatter {
    config: FormatterConfig,
}

impl HumanFormatter {
    /// Creates a formatter with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a formatter with the given configuration.
    pub fn with_config(config: FormatterConfig) -> Self {
        Self { config }
    }
}

impl ViolationFormatter for HumanFormatter {
    fn format(&self, violations: &[Violation]) -> Result<String> {
        let mut output = String::new();
        writeln!(output, "Validation report: {} violation(s)", violations.len())
            .map_err(|e| GuardError::Internal(e.to_string()))?;

        let shown = if self.config.max_violations < 0 {
            violations.len()
        } else {
            violations.len().min(self.config.max_violations as usize)
        };
        for violation in &violations[..shown] {
            writeln!(output, "  - {}", violation.message)
                .map_err(|e| GuardError::Internal(e.to_string()))?;
            if self.config.include_locations {
                writeln!(output, "    at {}", violation.location)
                    .map_err(|e| GuardError::Internal(e.to_string()))?;
            }
        }
        if shown < violations.len() {
            writeln!(output, "  ... and {} more", violations.len() - shown)
                .map_err(|e| GuardError::Internal(e.to_string()))?;
        }
        Ok(output)
    }
}
