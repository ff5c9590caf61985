//! バックエンドAPIのレスポンス型定義
//!
//! CLIとWeb(WASM)とデスクトップで共有される型:
//! - UploadResult: POST /api/upload/ のレスポンス
//! - EquipmentRecord: table_data の1行
//! - HistoryEntry: GET /api/history/ の1件

use serde::{Deserialize, Serialize};

/// アップロード1回分の解析結果。集計はすべてバックエンド側で行われ、
/// クライアントは受け取った値をそのまま表示する
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadResult {
    pub total_equipment: u64,
    pub average_flowrate: f64,
    pub average_pressure: f64,
    pub average_temperature: f64,

    /// 機器タイプ → 台数。キーの並びはバックエンドの返した順
    /// (serde_json の preserve_order を有効にしている)
    pub equipment_type_distribution: serde_json::Map<String, serde_json::Value>,

    pub table_data: Vec<EquipmentRecord>,
}

/// 機器1台分の行データ。フィールド名はCSVヘッダそのままのキーで
/// やりとりされる
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EquipmentRecord {
    #[serde(rename = "Equipment Name")]
    pub name: String,

    #[serde(rename = "Type")]
    pub equipment_type: String,

    #[serde(rename = "Flowrate")]
    pub flowrate: f64,

    #[serde(rename = "Pressure")]
    pub pressure: f64,

    #[serde(rename = "Temperature")]
    pub temperature: f64,
}

/// 過去アップロード1件のサマリ（バックエンドが永続化、新しい順で最大5件）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryEntry {
    pub id: i64,
    pub filename: String,
    pub total_equipment: u64,
    pub avg_flowrate: f64,
    pub avg_pressure: f64,
    pub avg_temperature: f64,

    /// バックエンド側で "%Y-%m-%d %H:%M" に整形済みの文字列
    pub uploaded_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    // バックエンドが実際に返す形のアップロードレスポンス
    const UPLOAD_RESPONSE: &str = r#"{
        "total_equipment": 3,
        "average_flowrate": 101.5,
        "average_pressure": 5.78,
        "average_temperature": 92.3,
        "equipment_type_distribution": {"Pump": 2, "Valve": 1},
        "table_data": [
            {"Equipment Name": "P-101", "Type": "Pump", "Flowrate": 120.0, "Pressure": 6.1, "Temperature": 95.0},
            {"Equipment Name": "P-102", "Type": "Pump", "Flowrate": 110.0, "Pressure": 5.9, "Temperature": 90.0},
            {"Equipment Name": "V-201", "Type": "Valve", "Flowrate": 74.5, "Pressure": 5.3, "Temperature": 91.9}
        ]
    }"#;

    #[test]
    fn test_upload_result_deserialize() {
        let result: UploadResult =
            serde_json::from_str(UPLOAD_RESPONSE).expect("デシリアライズ失敗");

        assert_eq!(result.total_equipment, 3);
        assert_eq!(result.average_flowrate, 101.5);
        assert_eq!(result.table_data.len(), 3);
        assert_eq!(result.table_data[0].name, "P-101");
        assert_eq!(result.table_data[0].equipment_type, "Pump");
        assert_eq!(result.table_data[2].flowrate, 74.5);

        let keys: Vec<&str> = result
            .equipment_type_distribution
            .keys()
            .map(|k| k.as_str())
            .collect();
        assert_eq!(keys, ["Pump", "Valve"]);
    }

    #[test]
    fn test_equipment_record_serialize_uses_csv_headers() {
        let record = EquipmentRecord {
            name: "C-301".to_string(),
            equipment_type: "Compressor".to_string(),
            flowrate: 88.0,
            pressure: 9.5,
            temperature: 110.0,
        };

        let json = serde_json::to_string(&record).expect("シリアライズ失敗");
        assert!(json.contains("\"Equipment Name\":\"C-301\""));
        assert!(json.contains("\"Type\":\"Compressor\""));
        assert!(json.contains("\"Flowrate\":88.0"));
    }

    #[test]
    fn test_history_entry_deserialize() {
        let json = r#"{
            "id": 12,
            "filename": "plant_a.csv",
            "total_equipment": 24,
            "avg_flowrate": 98.75,
            "avg_pressure": 6.4,
            "avg_temperature": 88.2,
            "uploaded_at": "2024-06-01 12:00"
        }"#;

        let entry: HistoryEntry = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(entry.id, 12);
        assert_eq!(entry.filename, "plant_a.csv");
        assert_eq!(entry.avg_pressure, 6.4);
        assert_eq!(entry.uploaded_at, "2024-06-01 12:00");
    }

    #[test]
    fn test_history_entry_tolerates_missing_averages() {
        // 稼働中のバックエンドは履歴レスポンスに平均値を含めないことがある
        let json = r#"{"id": 7, "filename": "plant.csv", "total_equipment": 12, "uploaded_at": "2024-06-01 12:00"}"#;

        let entry: HistoryEntry = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(entry.id, 7);
        assert_eq!(entry.avg_flowrate, 0.0);
        assert_eq!(entry.uploaded_at, "2024-06-01 12:00");
    }
}
