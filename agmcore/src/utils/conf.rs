use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{
    blackbox::ExpansionStrategy,
    ext::observe::ObserverRef,
    magic::ENV_CONFIG_PATH,
    operations::SuccessPolicy,
    search::{ConfiguredSearch, SearchLimits, SearchStrategy},
    utils::error::{AgmError, AgmResult},
};

/// `[search]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub strategy: SearchStrategy,
    pub expansion: ExpansionStrategy,
    /// Frontier size bound, unbounded if absent.
    pub queue_limit: Option<usize>,
    /// Kernel (or remainder) count bound, unbounded if absent.
    pub kernel_limit: Option<usize>,
}

impl SearchConfig {
    pub fn limits(&self) -> SearchLimits {
        SearchLimits {
            max_queue_size: self.queue_limit,
            max_kernel_elements: self.kernel_limit,
        }
    }

    /// Builds the configured search, reporting to `observer`.
    pub fn build(&self, observer: ObserverRef) -> ConfiguredSearch {
        self.strategy.build(self.limits(), self.expansion, observer)
    }
}

/// `[revision]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevisionConfig {
    pub success: SuccessPolicy,
}

/// `[closure]` section. Generator names are interpreted by the logic in use.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClosureConfig {
    pub generators: Vec<String>,
}

/// Engine configuration, stored as TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgmConfig {
    pub search: SearchConfig,
    pub revision: RevisionConfig,
    pub closure: ClosureConfig,
}

impl AgmConfig {
    /// Get the default path to the configuration file.
    pub fn default_path() -> PathBuf {
        // Check if the environment variable is set
        if let Ok(config_path) = std::env::var(ENV_CONFIG_PATH) {
            return config_path.into();
        }

        let mut path = PathBuf::new();

        #[cfg(target_os = "windows")]
        {
            if let Ok(appdata) = std::env::var("APPDATA") {
                path.push(appdata);
            }

            path.push("agm");
            path.push("config.toml");
        }
        #[cfg(not(target_os = "windows"))]
        {
            if let Ok(xdg_config_home) = std::env::var("XDG_CONFIG_HOME") {
                path.push(xdg_config_home);
            } else if let Ok(home) = std::env::var("HOME") {
                path.push(home);
                path.push(".config");
            }

            path.push("agm");
            path.push("config.toml");
        }

        path
    }

    /// Loads the configuration from `path`, or the defaults if it does not exist.
    pub fn load_or_default(path: &Path) -> AgmResult<Self> {
        if !path.exists() {
            log::debug!("no configuration at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load_from_toml(path)
    }

    /// Load the configuration from a TOML file.
    pub fn load_from_toml(path: &Path) -> AgmResult<Self> {
        let toml_str = std::fs::read_to_string(path)?;

        toml::from_str(&toml_str).map_err(|source| AgmError::ConfigParseError {
            source,
            file: path.display().to_string(),
        })
    }

    /// Save the configuration to a TOML file, creating parent directories.
    pub fn save_to_toml(&self, path: &Path) -> AgmResult<()> {
        let toml_str = toml::to_string(self).map_err(|source| AgmError::ConfigSerializeError {
            source,
            file: path.display().to_string(),
        })?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, toml_str)?;
        Ok(())
    }
}
