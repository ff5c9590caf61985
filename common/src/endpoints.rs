//! バックエンド接続設定とエンドポイントURL
//!
//! 接続先URLと認証情報はコードに埋め込まず、設定ファイル・環境変数・
//! 設定パネルのいずれかから注入する

use serde::{Deserialize, Serialize};

/// デフォルトのバックエンドベースURL（Django開発サーバ）
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000/api";

/// バックエンド接続設定
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    pub base_url: String,
    pub username: Option<String>,
    pub password: Option<String>,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            username: None,
            password: None,
        }
    }
}

impl BackendConfig {
    /// 末尾スラッシュの有無を吸収してパスを連結する
    fn join(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }

    pub fn upload_url(&self) -> String {
        self.join("upload/")
    }

    pub fn history_url(&self) -> String {
        self.join("history/")
    }

    /// PDFダウンロードURL。IDはクエリパラメータで渡す（バックエンド仕様）
    pub fn pdf_url(&self, id: i64) -> String {
        format!("{}?id={}", self.join("download-pdf/"), id)
    }

    /// Basic認証に使う (ユーザー名, パスワード)。両方設定されている場合のみ
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (self.username.as_deref(), self.password.as_deref()) {
            (Some(user), Some(pass)) => Some((user, pass)),
            _ => None,
        }
    }
}
