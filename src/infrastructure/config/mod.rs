//! Engine configuration.
//!
//! Ambient tunables only: sampling caps for profiling and the
//! decorative scatter ranges. The dashboard's analytical constants
//! (bucket edges, top-N sizes, default bundle values) are part of the
//! view contract and are not configurable.
//!
//! Sources, later wins: built-in defaults, an optional `vortex.toml`,
//! then `VORTEX_`-prefixed environment variables.

use crate::application::use_cases::bubble_scatter::ScatterConfig;
use crate::application::use_cases::dataset_profiler::ProfilingConfig;
use crate::domain::error::{EngineError, Result};
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

const CONFIG_FILE: &str = "vortex.toml";
const ENV_PREFIX: &str = "VORTEX_";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub profiling: ProfilingConfig,
    pub scatter: ScatterConfig,
}

impl EngineConfig {
    /// Load from defaults, `vortex.toml`, and `VORTEX_*` env vars
    /// (double underscore nests, e.g. VORTEX_SCATTER__POINTS).
    pub fn load() -> Result<Self> {
        Figment::from(Serialized::defaults(EngineConfig::default()))
            .merge(Toml::file(CONFIG_FILE))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .map_err(|e| EngineError::ConfigError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.profiling.max_sample_rows, 10_000);
        assert_eq!(config.scatter.points, 7);
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        let config = EngineConfig::load().unwrap();
        assert_eq!(config.profiling, ProfilingConfig::default());
    }
}
