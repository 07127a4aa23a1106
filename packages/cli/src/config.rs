use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_CONFIG_NAME: &str = "pagecraft.config.json";

/// Pagecraft configuration file format
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Seed document (JSON array of sections)
    #[serde(default = "default_seed")]
    pub seed: String,

    /// Output directory for exported artifacts
    #[serde(default = "default_out_dir")]
    pub out_dir: String,

    /// Page title used in the exported document head
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

fn default_seed() -> String {
    "seed.json".to_string()
}

fn default_out_dir() -> String {
    "dist".to_string()
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &str) -> anyhow::Result<Self> {
        let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            // Return default config if none exists
            Ok(Config::default())
        }
    }

    /// Get absolute path to the seed document
    pub fn seed_path(&self, cwd: &str) -> PathBuf {
        PathBuf::from(cwd).join(&self.seed)
    }

    /// Get absolute path to the output directory
    pub fn out_dir_path(&self, cwd: &str) -> PathBuf {
        PathBuf::from(cwd).join(&self.out_dir)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            out_dir: default_out_dir(),
            title: None,
        }
    }
}
