//! バックエンド設定のlocalStorage永続化

use equip_viz_common::BackendConfig;
use gloo::storage::{LocalStorage, Storage};

const STORAGE_KEY: &str = "equip-viz.backend";

/// 保存済み設定を読む。なければデフォルト
pub fn load() -> BackendConfig {
    LocalStorage::get(STORAGE_KEY).unwrap_or_default()
}

pub fn save(config: &BackendConfig) -> Result<(), String> {
    LocalStorage::set(STORAGE_KEY, config).map_err(|e| e.to_string())
}

pub fn clear() {
    LocalStorage::delete(STORAGE_KEY);
}
