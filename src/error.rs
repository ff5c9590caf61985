use thiserror::Error;

#[derive(Error, Debug)]
pub enum EquipVizError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("API呼び出しエラー: {0}")]
    ApiCall(#[from] reqwest::Error),

    #[error("APIエラー (status {status}): {body}")]
    ApiStatus { status: u16, body: String },

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, EquipVizError>;
