//! Configuration for sight radii, loaded from `fov_config.json` with
//! support for an environment variable override.

use std::{
    collections::HashMap,
    env, fs, io,
    path::{Path, PathBuf},
    sync::Arc,
};

use serde::Deserialize;
use thiserror::Error;

pub const BUILTIN_FOV_CONFIG: &str = include_str!("data/fov_config.json");

/// Root configuration for the field-of-view subsystem.
///
/// The refresh entry point takes an explicit radius; this is how hosts pick
/// that radius per creature kind.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FovConfig {
    pub default_radius: i32,
    pub sight_ranges: HashMap<String, SightRangeConfig>,
}

impl Default for FovConfig {
    fn default() -> Self {
        Self {
            default_radius: 6,
            sight_ranges: default_sight_ranges(),
        }
    }
}

fn default_sight_ranges() -> HashMap<String, SightRangeConfig> {
    let mut ranges = HashMap::new();
    ranges.insert("Explorer".to_string(), SightRangeConfig { radius: 8 });
    ranges.insert("Torchbearer".to_string(), SightRangeConfig { radius: 10 });
    ranges.insert("Warden".to_string(), SightRangeConfig { radius: 6 });
    ranges.insert("Lurker".to_string(), SightRangeConfig { radius: 4 });
    ranges.insert("Bat".to_string(), SightRangeConfig { radius: 3 });
    ranges
}

impl FovConfig {
    pub fn builtin() -> Arc<Self> {
        Arc::new(serde_json::from_str(BUILTIN_FOV_CONFIG).expect("builtin fov config should parse"))
    }

    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn from_file(path: &Path) -> Result<Self, FovConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| FovConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = FovConfig::from_json_str(&contents)?;
        Ok(config)
    }

    /// Sight radius for a creature kind, falling back to the default.
    pub fn sight_radius_for(&self, kind: &str) -> i32 {
        self.sight_ranges
            .get(kind)
            .map(|range| range.radius)
            .unwrap_or(self.default_radius)
    }
}

/// Sight radius configuration for one creature kind.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SightRangeConfig {
    pub radius: i32,
}

impl Default for SightRangeConfig {
    fn default() -> Self {
        Self { radius: 6 }
    }
}

#[derive(Debug, Error)]
pub enum FovConfigError {
    #[error("failed to parse fov config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to read fov config from {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Handle for sharing the loaded configuration across host systems.
#[derive(Debug, Clone)]
pub struct FovConfigHandle(pub Arc<FovConfig>);

impl FovConfigHandle {
    pub fn new(config: Arc<FovConfig>) -> Self {
        Self(config)
    }

    pub fn get(&self) -> Arc<FovConfig> {
        Arc::clone(&self.0)
    }

    pub fn replace(&mut self, config: Arc<FovConfig>) {
        self.0 = config;
    }
}

/// Load the fov configuration from `FOV_CONFIG_PATH`, the bundled file, or
/// the builtin, in that order.
pub fn load_fov_config_from_env() -> Arc<FovConfig> {
    let override_path = env::var("FOV_CONFIG_PATH").ok().map(PathBuf::from);
    let default_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("src/data/fov_config.json");

    let candidates: Vec<PathBuf> = match override_path {
        Some(ref path) => vec![path.clone()],
        None => vec![default_path],
    };

    for path in candidates {
        match FovConfig::from_file(&path) {
            Ok(config) => {
                tracing::info!(
                    target: "delve::config",
                    path = %path.display(),
                    "fov_config.loaded=file"
                );
                return Arc::new(config);
            }
            Err(err) => {
                tracing::warn!(
                    target: "delve::config",
                    path = %path.display(),
                    error = %err,
                    "fov_config.load_failed"
                );
            }
        }
    }

    tracing::info!(target: "delve::config", "fov_config.loaded=builtin");
    FovConfig::builtin()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_parses() {
        let config = FovConfig::default();
        assert_eq!(config.default_radius, 6);
        assert!(config.sight_ranges.contains_key("Explorer"));
    }

    #[test]
    fn builtin_config_parses() {
        let _config = FovConfig::builtin();
    }

    #[test]
    fn sight_radius_lookup() {
        let config = FovConfig::default();
        assert_eq!(config.sight_radius_for("Torchbearer"), 10);
        assert_eq!(config.sight_radius_for("Bat"), 3);

        // Unknown kinds fall back to the default.
        assert_eq!(config.sight_radius_for("Mimic"), 6);
    }
}
