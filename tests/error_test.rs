//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use equip_viz_rust::error::EquipVizError;

/// EquipVizErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let cases: Vec<(EquipVizError, &str)> = vec![
        (
            EquipVizError::Config("ホームディレクトリが見つかりません".to_string()),
            "設定エラー",
        ),
        (
            EquipVizError::FileNotFound("equipment.csv".to_string()),
            "ファイルが見つかりません",
        ),
        (
            EquipVizError::ApiStatus {
                status: 400,
                body: "Missing column: Type".to_string(),
            },
            "status 400",
        ),
    ];

    for (err, fragment) in cases {
        let display = format!("{}", err);
        assert!(display.contains(fragment), "{display}");
    }
}

/// 非2xxレスポンスはステータスと本文を保持する
#[test]
fn test_api_status_carries_body() {
    let err = EquipVizError::ApiStatus {
        status: 404,
        body: "Record not found".to_string(),
    };
    let display = format!("{}", err);
    assert!(display.contains("404"));
    assert!(display.contains("Record not found"));
}

/// serde_jsonエラーからの変換
#[test]
fn test_json_parse_error_from() {
    let parse_err = serde_json::from_str::<equip_viz_common::UploadResult>("not json").unwrap_err();
    let err: EquipVizError = parse_err.into();
    assert!(matches!(err, EquipVizError::JsonParse(_)));
}

/// IOエラーからの変換
#[test]
fn test_io_error_from() {
    let io_err = std::fs::read("/nonexistent/equipment/data.csv").unwrap_err();
    let err: EquipVizError = io_err.into();
    assert!(matches!(err, EquipVizError::Io(_)));
}
