//! バックエンドAPIクライアント
//!
//! エンドポイント:
//! - POST {base}/upload/   multipartフィールド "file" → UploadResult
//! - GET  {base}/history/  → Vec<HistoryEntry>（新しい順・最大5件）
//! - GET  {base}/download-pdf/?id={id} → PDFバイト列

use crate::error::{EquipVizError, Result};
use equip_viz_common::{BackendConfig, HistoryEntry, UploadResult};
use reqwest::multipart;
use std::path::Path;
use std::time::Duration;

pub fn build_client(timeout_seconds: u64) -> Result<reqwest::Client> {
    Ok(reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout_seconds))
        .build()?)
}

fn with_auth(
    request: reqwest::RequestBuilder,
    config: &BackendConfig,
) -> reqwest::RequestBuilder {
    match config.credentials() {
        Some((user, pass)) => request.basic_auth(user, Some(pass)),
        None => request,
    }
}

/// CSVファイルをアップロードして解析結果を受け取る。
/// ファイルが存在しない場合はネットワークへ出る前にエラーを返す
pub async fn upload_csv(
    client: &reqwest::Client,
    config: &BackendConfig,
    path: &Path,
) -> Result<UploadResult> {
    if !path.exists() {
        return Err(EquipVizError::FileNotFound(path.display().to_string()));
    }

    let file_name = path
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("upload.csv")
        .to_string();
    let bytes = std::fs::read(path)?;
    let part = multipart::Part::bytes(bytes)
        .file_name(file_name)
        .mime_str("text/csv")?;
    let form = multipart::Form::new().part("file", part);

    let response = with_auth(client.post(config.upload_url()), config)
        .multipart(form)
        .send()
        .await?;

    into_json(response).await
}

/// 直近のアップロード履歴を取得する
pub async fn fetch_history(
    client: &reqwest::Client,
    config: &BackendConfig,
) -> Result<Vec<HistoryEntry>> {
    let response = with_auth(client.get(config.history_url()), config)
        .send()
        .await?;

    into_json(response).await
}

/// 履歴IDを指定してPDFレポートのバイト列を取得する。
/// ダウンロードURLは認証なしのリンクとしても使われるため認証は付けない
pub async fn download_pdf(
    client: &reqwest::Client,
    config: &BackendConfig,
    id: i64,
) -> Result<Vec<u8>> {
    let response = client.get(config.pdf_url(id)).send().await?;
    let response = ensure_success(response).await?;
    Ok(response.bytes().await?.to_vec())
}

async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response> {
    if response.status().is_success() {
        Ok(response)
    } else {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        Err(EquipVizError::ApiStatus { status, body })
    }
}

async fn into_json<T: serde::de::DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let response = ensure_success(response).await?;
    let text = response.text().await?;
    Ok(serde_json::from_str(&text)?)
}
