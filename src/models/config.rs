use colour_engine::cvd::{
    DEFAULT_CAPACITY, DEFAULT_DISTINGUISH_THRESHOLD, DEFAULT_FIX_THRESHOLD, DEFAULT_TARGET_RATIO,
};
use colour_engine::ReportOptions;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Application configuration loaded from a YAML file
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct AppConfig {
    /// Analysis thresholds
    #[serde(default)]
    pub analysis: AnalysisConfig,

    /// Simulation cache sizing
    #[serde(default)]
    pub cache: CacheConfig,
}

/// Thresholds used when the request does not supply its own
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Minimum simulated RGB distance for two colours to count as distinct
    pub distinguish_threshold: f64,

    /// Minimum distance a distinguishability fix must reach
    pub fix_threshold: f64,

    /// Contrast ratio targeted by contrast fixes and suggestions
    pub target_ratio: f64,

    /// Ratio drop under simulation that flags a pair as degraded
    pub degradation_margin: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        let report = ReportOptions::default();
        Self {
            distinguish_threshold: DEFAULT_DISTINGUISH_THRESHOLD,
            fix_threshold: DEFAULT_FIX_THRESHOLD,
            target_ratio: DEFAULT_TARGET_RATIO,
            degradation_margin: report.degradation_margin,
        }
    }
}

impl AnalysisConfig {
    pub fn report_options(&self) -> ReportOptions {
        ReportOptions {
            distinguish_threshold: self.distinguish_threshold,
            degradation_margin: self.degradation_margin,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct CacheConfig {
    /// Maximum number of memoised simulation results
    pub capacity: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl AppConfig {
    /// Load configuration from the file named by `CONFIG_FILE`, if set
    pub fn from_env() -> Self {
        let path = std::env::var("CONFIG_FILE").ok().map(PathBuf::from);
        Self::load(path.as_deref())
    }

    /// Load configuration from `path`, falling back to defaults when the
    /// file is absent, unreadable or malformed
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            tracing::info!("No config file set, using defaults");
            return Self::default();
        };

        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_yaml(&content) {
                Ok(config) => {
                    tracing::info!(
                        path = %path.display(),
                        distinguish_threshold = config.analysis.distinguish_threshold,
                        target_ratio = config.analysis.target_ratio,
                        cache_capacity = config.cache.capacity,
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), %e, "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(path = %path.display(), %e, "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Parse and validate a YAML document
    pub fn from_yaml(content: &str) -> anyhow::Result<Self> {
        // An empty document deserialises to unit, not to an empty mapping
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        let analysis = &self.analysis;
        if !(1.0..=21.0).contains(&analysis.target_ratio) {
            anyhow::bail!(
                "analysis.target_ratio must be between 1 and 21, got {}",
                analysis.target_ratio
            );
        }
        for (name, value) in [
            ("analysis.distinguish_threshold", analysis.distinguish_threshold),
            ("analysis.fix_threshold", analysis.fix_threshold),
            ("analysis.degradation_margin", analysis.degradation_margin),
        ] {
            if !value.is_finite() || value < 0.0 {
                anyhow::bail!("{name} must be a non-negative number, got {value}");
            }
        }
        if self.cache.capacity == 0 {
            anyhow::bail!("cache.capacity must be at least 1");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.analysis.distinguish_threshold, 20.0);
        assert_eq!(config.analysis.fix_threshold, 25.0);
        assert_eq!(config.analysis.target_ratio, 4.5);
        assert_eq!(config.analysis.degradation_margin, 1.0);
        assert_eq!(config.cache.capacity, 500);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let yaml = r#"
analysis:
  distinguish_threshold: 30
"#;
        let config = AppConfig::from_yaml(yaml).unwrap();

        assert_eq!(config.analysis.distinguish_threshold, 30.0);
        assert_eq!(config.analysis.target_ratio, 4.5);
        assert_eq!(config.cache.capacity, 500);
    }

    #[test]
    fn test_full_yaml() {
        let yaml = r#"
analysis:
  distinguish_threshold: 15
  fix_threshold: 30
  target_ratio: 7
  degradation_margin: 0.5
cache:
  capacity: 64
"#;
        let config = AppConfig::from_yaml(yaml).unwrap();

        assert_eq!(config.analysis.fix_threshold, 30.0);
        assert_eq!(config.analysis.target_ratio, 7.0);
        assert_eq!(config.analysis.degradation_margin, 0.5);
        assert_eq!(config.cache.capacity, 64);

        let options = config.analysis.report_options();
        assert_eq!(options.distinguish_threshold, 15.0);
        assert_eq!(options.degradation_margin, 0.5);
    }

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(AppConfig::from_yaml("").unwrap(), AppConfig::default());
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(AppConfig::from_yaml("analysis:\n  target_ratio: 25\n").is_err());
        assert!(AppConfig::from_yaml("analysis:\n  fix_threshold: -1\n").is_err());
        assert!(AppConfig::from_yaml("cache:\n  capacity: 0\n").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "cache:\n  capacity: 12").unwrap();

        let config = AppConfig::load(Some(file.path()));
        assert_eq!(config.cache.capacity, 12);
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load(Some(&dir.path().join("missing.yaml")));
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_malformed_file_falls_back() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "analysis: [not, a, mapping").unwrap();

        let config = AppConfig::load(Some(file.path()));
        assert_eq!(config, AppConfig::default());
    }
}
