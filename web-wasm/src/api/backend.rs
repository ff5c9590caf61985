//! バックエンドAPI連携（fetchベース）
//!
//! - upload_csv: POST {base}/upload/ （multipartフィールド "file"）
//! - fetch_history: GET {base}/history/
//!
//! PDFダウンロードは履歴テーブルのリンク遷移のみでfetchしない

use base64::{engine::general_purpose::STANDARD, Engine as _};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, Request, RequestInit, RequestMode, Response};

use equip_viz_common::{BackendConfig, HistoryEntry, UploadResult};

/// Basic認証ヘッダ値を組み立てる
fn basic_auth_header(username: &str, password: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{username}:{password}")))
}

fn apply_auth(request: &Request, config: &BackendConfig) -> Result<(), JsValue> {
    if let Some((user, pass)) = config.credentials() {
        request
            .headers()
            .set("Authorization", &basic_auth_header(user, pass))?;
    }
    Ok(())
}

/// fetch実行（共通処理）。非2xxはエラーとして返す
async fn run_fetch(request: Request) -> Result<JsValue, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    if !resp.ok() {
        return Err(JsValue::from_str(&format!("API error: {}", resp.status())));
    }

    JsFuture::from(resp.json()?).await
}

/// CSVファイルをアップロードして解析結果を受け取る
pub async fn upload_csv(config: &BackendConfig, file: &File) -> Result<UploadResult, JsValue> {
    let form = FormData::new()?;
    form.append_with_blob("file", file)?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    // multipartのboundaryはブラウザが付けるのでContent-Typeは触らない
    opts.set_body(form.as_ref());

    let request = Request::new_with_str_and_init(&config.upload_url(), &opts)?;
    apply_auth(&request, config)?;

    let json = run_fetch(request).await?;
    serde_wasm_bindgen::from_value(json).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// 直近のアップロード履歴を取得する
pub async fn fetch_history(config: &BackendConfig) -> Result<Vec<HistoryEntry>, JsValue> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(&config.history_url(), &opts)?;
    apply_auth(&request, config)?;

    let json = run_fetch(request).await?;
    serde_wasm_bindgen::from_value(json).map_err(|e| JsValue::from_str(&e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_auth_header() {
        // echo -n "user:pass" | base64
        assert_eq!(basic_auth_header("user", "pass"), "Basic dXNlcjpwYXNz");
    }

    #[test]
    fn test_basic_auth_header_empty_password() {
        assert_eq!(basic_auth_header("user", ""), "Basic dXNlcjo=");
    }
}
