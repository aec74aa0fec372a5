//! CLI configuration loading.

use std::path::Path;

use anyhow::{Context, Result};
use cellnav::BuildConfig;
use serde::{Deserialize, Serialize};

/// Settings read from an optional YAML file passed with `--config`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Navmesh construction settings
    pub build: BuildConfig,

    /// Tolerance for resolving query points to cells; defaults to `build.tolerance`
    pub containment_tolerance: Option<f32>,
}

impl CliConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;
        Ok(config)
    }

    /// Load from `path` if given, otherwise use defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn containment_tolerance(&self) -> f32 {
        self.containment_tolerance.unwrap_or(self.build.tolerance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn partial_yaml_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "build:\n  tolerance: 0.01").expect("write");

        let config = CliConfig::load(file.path()).expect("config");
        assert_eq!(config.build.tolerance, 0.01);
        assert_eq!(
            config.build.angle_tie_deg,
            BuildConfig::DEFAULT_ANGLE_TIE_DEG
        );
        assert_eq!(config.containment_tolerance(), 0.01);
    }

    #[test]
    fn missing_path_means_defaults() {
        let config = CliConfig::load_or_default(None).expect("config");
        assert_eq!(config.build, BuildConfig::default());
    }
}
