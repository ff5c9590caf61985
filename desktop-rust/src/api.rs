use std::path::Path;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use reqwest::blocking::{multipart, Client, RequestBuilder, Response};

use equip_viz_common::{BackendConfig, HistoryEntry, UploadResult};

/// 環境変数からバックエンド設定を読む。未設定はデフォルトのまま
pub fn backend_from_env() -> BackendConfig {
    let mut config = BackendConfig::default();
    if let Ok(url) = std::env::var("EQUIP_VIZ_BASE_URL") {
        config.base_url = url;
    }
    config.username = std::env::var("EQUIP_VIZ_USERNAME").ok().or(config.username);
    config.password = std::env::var("EQUIP_VIZ_PASSWORD").ok().or(config.password);
    config
}

fn client() -> Result<Client> {
    Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .context("build http client")
}

fn with_auth(request: RequestBuilder, config: &BackendConfig) -> RequestBuilder {
    match config.credentials() {
        Some((user, pass)) => request.basic_auth(user, Some(pass)),
        None => request,
    }
}

fn ensure_success(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        let body = response.text().unwrap_or_default();
        bail!("status {status}: {body}");
    }
}

pub fn upload_csv(config: &BackendConfig, path: &Path) -> Result<UploadResult> {
    let form = multipart::Form::new()
        .file("file", path)
        .with_context(|| format!("read {}", path.display()))?;

    let response = with_auth(client()?.post(config.upload_url()), config)
        .multipart(form)
        .send()
        .context("upload request")?;
    let response = ensure_success(response)?;
    response.json().context("parse upload response")
}

pub fn fetch_history(config: &BackendConfig) -> Result<Vec<HistoryEntry>> {
    let response = with_auth(client()?.get(config.history_url()), config)
        .send()
        .context("history request")?;
    let response = ensure_success(response)?;
    response.json().context("parse history response")
}

pub fn download_pdf(config: &BackendConfig, id: i64) -> Result<Vec<u8>> {
    let response = client()?
        .get(config.pdf_url(id))
        .send()
        .context("download request")?;
    let response = ensure_success(response)?;
    Ok(response.bytes().context("read pdf bytes")?.to_vec())
}
