use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Repository to fetch weights from
    #[serde(default = "default_repo_id")]
    pub repo_id: String,

    /// Local directory the repository is mirrored into
    #[serde(default = "default_cache_dir")]
    pub cache_dir: PathBuf,

    /// Hub settings
    #[serde(default)]
    pub hub: HubConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HubConfig {
    /// Hub endpoint base URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// HuggingFace token for private repositories
    #[serde(default)]
    pub token: Option<String>,
}

fn default_repo_id() -> String {
    "zibojia/minimax-remover".to_string()
}

fn default_cache_dir() -> PathBuf {
    PathBuf::from("./model_weights")
}

fn default_endpoint() -> String {
    "https://huggingface.co".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            repo_id: default_repo_id(),
            cache_dir: default_cache_dir(),
            hub: HubConfig::default(),
        }
    }
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            token: None,
        }
    }
}

impl Config {
    /// Get the base directory: ~/.config/weightfetch/
    pub fn base_dir() -> Result<PathBuf> {
        let home = std::env::var("HOME")
            .map(PathBuf::from)
            .or_else(|_| std::env::var("USERPROFILE").map(PathBuf::from))
            .map_err(|_| anyhow::anyhow!("Could not determine home directory"))?;
        Ok(home.join(".config").join("weightfetch"))
    }

    /// Load config from default location
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        let mut config = if config_path.exists() {
            let content = fs::read_to_string(&config_path)?;
            toml::from_str(&content)?
        } else {
            Config::default()
        };

        config.apply_env();
        Ok(config)
    }

    /// Save config to default location
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(&config_path, content)?;
        Ok(())
    }

    /// Get the config file path: ~/.config/weightfetch/config.toml
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::base_dir()?.join("config.toml"))
    }

    /// HF_ENDPOINT and HF_TOKEN take precedence over the config file
    fn apply_env(&mut self) {
        if let Ok(endpoint) = std::env::var("HF_ENDPOINT") {
            if !endpoint.is_empty() {
                self.hub.endpoint = endpoint;
            }
        }
        if let Ok(token) = std::env::var("HF_TOKEN") {
            if !token.is_empty() {
                self.hub.token = Some(token);
            }
        }
    }
}
