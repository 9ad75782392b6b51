//! Run configuration.
//!
//! [`WorksheetConfig`] bundles every input of one generation run. Defaults
//! match the command-line defaults. Configs can be stored as JSON presets.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constraints::{Constraints, MAX_DIGITS};
use crate::error::{MathsheetError, Result};
use crate::layout::FillMode;
use crate::operation::parse_operations;

/// Largest supported problem count.
pub const MAX_COUNT: usize = 500;

/// Largest supported column count.
pub const MAX_COLUMNS: usize = 10;

/// Largest supported max-result value.
pub const MAX_RESULT_LIMIT: u64 = 1_000_000;

pub const DEFAULT_OPERATIONS: &str = "+-*/";
pub const DEFAULT_COUNT: usize = 90;
pub const DEFAULT_DIGITS: u32 = 2;
pub const DEFAULT_COLUMNS: usize = 3;
pub const DEFAULT_TITLE: &str = "Math problems";
pub const DEFAULT_OUTPUT: &str = "problems.xlsx";

/// Every input of one worksheet generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WorksheetConfig {
    /// Operation symbols to draw from, e.g. `"+-"`.
    pub operations: String,
    /// Number of problems.
    pub count: usize,
    /// Maximum digits per number (1-5).
    pub max_digits: Option<u32>,
    /// Maximum result. `0` means no limit.
    pub max_result: Option<u64>,
    /// Exclude zero from operands and results.
    pub exclude_zero: bool,
    /// Seed for reproducible output.
    pub seed: Option<u64>,
    /// Title shown above the grid. Empty or `None` for no title.
    pub title: Option<String>,
    /// Number of grid columns (at most 10). Values below 1 are treated as 1.
    pub columns: usize,
    pub fill: FillMode,
    /// Output `.xlsx` path.
    pub output: PathBuf,
}

impl Default for WorksheetConfig {
    fn default() -> Self {
        Self {
            operations: DEFAULT_OPERATIONS.to_string(),
            count: DEFAULT_COUNT,
            max_digits: Some(DEFAULT_DIGITS),
            max_result: None,
            exclude_zero: false,
            seed: None,
            title: Some(DEFAULT_TITLE.to_string()),
            columns: DEFAULT_COLUMNS,
            fill: FillMode::Down,
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

impl WorksheetConfig {
    /// Constraint set passed to the generator.
    #[must_use]
    pub fn constraints(&self) -> Constraints {
        Constraints {
            max_result: self.max_result.filter(|&r| r > 0),
            max_digits: self.max_digits,
            exclude_zero: self.exclude_zero,
        }
    }

    /// Check that the config describes a run that can be generated.
    pub fn validate(&self) -> Result<()> {
        if parse_operations(&self.operations).is_empty() {
            return Err(MathsheetError::NoValidOperation {
                input: self.operations.clone(),
            });
        }
        if self.count == 0 || self.count > MAX_COUNT {
            return Err(MathsheetError::InvalidConfig(format!(
                "count must be between 1 and {MAX_COUNT}, got {}",
                self.count
            )));
        }
        if let Some(digits) = self.max_digits {
            if digits == 0 || digits > MAX_DIGITS {
                return Err(MathsheetError::InvalidConfig(format!(
                    "digits must be between 1 and {MAX_DIGITS}, got {digits}"
                )));
            }
        }
        if self.columns > MAX_COLUMNS {
            return Err(MathsheetError::InvalidConfig(format!(
                "columns must be at most {MAX_COLUMNS}, got {}",
                self.columns
            )));
        }
        if let Some(max_result) = self.max_result {
            if max_result > MAX_RESULT_LIMIT {
                return Err(MathsheetError::InvalidConfig(format!(
                    "max result must be at most {MAX_RESULT_LIMIT}, got {max_result}"
                )));
            }
        }
        Ok(())
    }

    /// Parse a JSON preset. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a JSON preset from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Serialize as a pretty-printed JSON preset.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = WorksheetConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.count, 90);
        assert_eq!(config.columns, 3);
        assert_eq!(config.fill, FillMode::Down);
    }

    #[test]
    fn test_zero_max_result_means_unlimited() {
        let config = WorksheetConfig {
            max_result: Some(0),
            ..WorksheetConfig::default()
        };
        assert_eq!(config.constraints().max_result, None);
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let bad_count = WorksheetConfig {
            count: 0,
            ..WorksheetConfig::default()
        };
        assert!(matches!(
            bad_count.validate(),
            Err(MathsheetError::InvalidConfig(_))
        ));

        let bad_digits = WorksheetConfig {
            max_digits: Some(6),
            ..WorksheetConfig::default()
        };
        assert!(bad_digits.validate().is_err());

        let bad_ops = WorksheetConfig {
            operations: "abc".into(),
            ..WorksheetConfig::default()
        };
        assert!(matches!(
            bad_ops.validate(),
            Err(MathsheetError::NoValidOperation { .. })
        ));
    }

    #[test]
    fn test_partial_preset_uses_defaults() {
        let config = WorksheetConfig::from_json(r#"{"operations": "x", "fill": "across"}"#).unwrap();
        assert_eq!(config.operations, "x");
        assert_eq!(config.fill, FillMode::Across);
        assert_eq!(config.count, DEFAULT_COUNT);
    }

    #[test]
    fn test_unknown_preset_field_rejected() {
        assert!(WorksheetConfig::from_json(r#"{"colums": 2}"#).is_err());
    }
}
