use crate::error::{EquipVizError, Result};
use equip_viz_common::{BackendConfig, DEFAULT_BASE_URL};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub base_url: String,
    pub username: Option<String>,
    pub password: Option<String>,
    pub timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            username: None,
            password: None,
            timeout_seconds: 30,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| EquipVizError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("equip-viz").join("config.json"))
    }

    /// 環境変数を優先してバックエンド設定を組み立てる
    pub fn backend(&self) -> BackendConfig {
        let base_url =
            std::env::var("EQUIP_VIZ_BASE_URL").unwrap_or_else(|_| self.base_url.clone());
        let username = std::env::var("EQUIP_VIZ_USERNAME")
            .ok()
            .or_else(|| self.username.clone());
        let password = std::env::var("EQUIP_VIZ_PASSWORD")
            .ok()
            .or_else(|| self.password.clone());

        BackendConfig {
            base_url,
            username,
            password,
        }
    }
}
