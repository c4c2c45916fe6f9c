//! Logging utilities and configuration.
//!
//! The engine emits structured `tracing` events (constraint evaluations,
//! pool mutations, degraded foreign-key lookups). This module provides a
//! small configuration surface over those events plus a convenience
//! initializer for binaries and tests that just want sensible output.

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Logging configuration for the validation engine.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Base log level for engine components
    pub base_level: Level,
    /// Whether to log per-constraint evaluation details
    pub log_constraint_details: bool,
    /// Maximum length for logged field values (to prevent huge logs)
    pub max_field_length: usize,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            base_level: Level::INFO,
            log_constraint_details: false,
            max_field_length: 256,
        }
    }
}

impl LogConfig {
    /// Creates a verbose configuration suitable for debugging rule sets.
    pub fn verbose() -> Self {
        Self {
            base_level: Level::DEBUG,
            log_constraint_details: true,
            max_field_length: 1024,
        }
    }

    /// Creates a minimal configuration for production with lowest overhead.
    pub fn production() -> Self {
        Self {
            base_level: Level::WARN,
            log_constraint_details: false,
            max_field_length: 128,
        }
    }

    /// Creates a balanced configuration suitable for most use cases.
    pub fn balanced() -> Self {
        Self::default()
    }

    /// Truncates a field value to [`LogConfig::max_field_length`].
    pub fn truncate_field(&self, value: &str) -> String {
        truncate_field(value, self.max_field_length)
    }

    /// Returns the env-filter directive for this configuration.
    ///
    /// The per-constraint evaluation events live under the
    /// `table_guard::constraints` targets; unless
    /// [`LogConfig::log_constraint_details`] is set, those targets are capped
    /// at `INFO` so the evaluators' debug events stay silent even when the
    /// rest of the engine logs at `DEBUG`.
    fn directive(&self) -> String {
        let constraint_level = if self.log_constraint_details {
            Level::DEBUG
        } else {
            self.base_level.min(Level::INFO)
        };
        format!(
            "table_guard={},table_guard::constraints={}",
            self.base_level, constraint_level
        )
    }

    /// Returns the env filter for this configuration.
    ///
    /// `RUST_LOG` still wins when set, so operators can override the
    /// programmatic default without a rebuild.
    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(self.directive()))
    }
}

/// Truncates a string to the maximum field length if needed.
pub fn truncate_field(value: &str, max_length: usize) -> String {
    if value.len() <= max_length {
        value.to_string()
    } else {
        let truncated = &value[..max_length];
        format!("{truncated}...(truncated)")
    }
}

/// Installs a global `fmt` subscriber for the given configuration.
///
/// Intended for binaries and tests; libraries embedding the engine should
/// configure their own subscriber instead. Returns quietly if a global
/// subscriber is already installed.
pub fn init_logging(config: &LogConfig) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(config.env_filter())
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LogConfig::default();
        assert_eq!(config.base_level, Level::INFO);
        assert!(!config.log_constraint_details);
    }

    #[test]
    fn test_presets() {
        assert_eq!(LogConfig::verbose().base_level, Level::DEBUG);
        assert_eq!(LogConfig::production().base_level, Level::WARN);
        assert_eq!(LogConfig::balanced().base_level, Level::INFO);
    }

    #[test]
    fn test_constraint_details_gate_the_filter_directive() {
        // Details on: evaluator targets drop to DEBUG regardless of base.
        assert_eq!(
            LogConfig::verbose().directive(),
            "table_guard=DEBUG,table_guard::constraints=DEBUG"
        );
        let mut config = LogConfig::balanced();
        config.log_constraint_details = true;
        assert_eq!(
            config.directive(),
            "table_guard=INFO,table_guard::constraints=DEBUG"
        );

        // Details off: evaluator targets never exceed INFO, and never exceed
        // the base level either.
        let mut config = LogConfig::verbose();
        config.log_constraint_details = false;
        assert_eq!(
            config.directive(),
            "table_guard=DEBUG,table_guard::constraints=INFO"
        );
        assert_eq!(
            LogConfig::production().directive(),
            "table_guard=WARN,table_guard::constraints=WARN"
        );
    }

    #[test]
    fn test_truncate_field() {
        assert_eq!(truncate_field("short", 10), "short");
        assert_eq!(truncate_field("0123456789", 10), "0123456789");
        assert_eq!(
            truncate_field("0123456789ab", 10),
            "0123456789...(truncated)"
        );
    }

    #[test]
    fn test_config_truncation_uses_max_field_length() {
        let mut config = LogConfig::production();
        config.max_field_length = 4;
        assert_eq!(config.truncate_field("abcdefgh"), "abcd...(truncated)");
        assert_eq!(config.truncate_field("abc"), "abc");
    }
}
