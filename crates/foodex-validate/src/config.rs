//! Engine configuration.
//!
//! Names the catalogue codes the checks depend on. Every field has a
//! default, so a TOML file only lists what it overrides:
//!
//! ```toml
//! reporting_hierarchy = "report"
//! process_category = "F28"
//! generic_process_codes = ["A07XS", "A0C0R", "A0CHR"]
//! decimal_check_explicit_only = false
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Hierarchy walked when resolving warn groups.
    pub reporting_hierarchy: String,
    pub exposure_hierarchy: String,
    /// Hierarchy used to decide whether an explicit process refines an
    /// implicit one.
    pub process_hierarchy: String,
    /// Terms placed here are exempt from the exposure check.
    pub feed_hierarchy: String,

    pub process_category: String,
    pub ingredient_category: String,
    pub source_category: String,
    pub source_commodity_category: String,

    /// Process codes meaning "processed" without saying how.
    pub generic_process_codes: Vec<String>,
    /// Reconstitution and dilution process codes.
    pub reconstitution_codes: Vec<String>,
    /// Words in a base term name or scope note marking a concentrate or powder.
    pub reconstitution_keywords: Vec<String>,
    /// Facet codes marking a flavoured product.
    pub flavouring_codes: Vec<String>,
    /// Words in a base term name marking a flavoured product.
    pub flavoured_keywords: Vec<String>,

    /// Also flag several distinct explicit fractional codes of one tier when
    /// no implicit process shares that tier.
    pub decimal_check_explicit_only: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            reporting_hierarchy: "report".to_string(),
            exposure_hierarchy: "expo".to_string(),
            process_hierarchy: "process".to_string(),
            feed_hierarchy: "feed".to_string(),
            process_category: "F28".to_string(),
            ingredient_category: "F04".to_string(),
            source_category: "F01".to_string(),
            source_commodity_category: "F27".to_string(),
            generic_process_codes: strings(&["A07XS", "A0C0R", "A0CHR"]),
            reconstitution_codes: strings(&["A07MR", "A07MQ"]),
            reconstitution_keywords: strings(&["concentrate", "powder"]),
            flavouring_codes: strings(&["A0EVA"]),
            flavoured_keywords: strings(&["flavoured"]),
            decimal_check_explicit_only: false,
        }
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}

impl EngineConfig {
    /// Parse a TOML configuration.
    pub fn from_toml_str(content: &str, source: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Toml {
            path: source.to_path_buf(),
            source: e,
        })
    }

    /// Read and parse a TOML configuration file.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config = Self::from_toml_str(&content, path)?;
        tracing::debug!(path = %path.display(), "Loaded engine configuration");
        Ok(config)
    }

    pub fn is_generic_process(&self, code: &str) -> bool {
        self.generic_process_codes.iter().any(|c| c == code)
    }

    pub fn is_reconstitution(&self, code: &str) -> bool {
        self.reconstitution_codes.iter().any(|c| c == code)
    }

    pub fn is_flavouring(&self, code: &str) -> bool {
        self.flavouring_codes.iter().any(|c| c == code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = EngineConfig::from_toml_str(
            "process_category = \"P\"\ndecimal_check_explicit_only = true\n",
            Path::new("engine.toml"),
        )
        .unwrap();
        assert_eq!(config.process_category, "P");
        assert!(config.decimal_check_explicit_only);
        assert_eq!(config.reporting_hierarchy, "report");
        assert!(config.is_reconstitution("A07MR"));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result = EngineConfig::from_toml_str("report_hierarchy = \"x\"", Path::new("engine.toml"));
        assert!(matches!(result, Err(ConfigError::Toml { .. })));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = EngineConfig::from_path(&dir.path().join("engine.toml"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
