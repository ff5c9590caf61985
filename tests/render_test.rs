//! テキスト描画のテスト
//!
//! サマリ・分布・テーブル・履歴の描画がバックエンドの値を
//! 加工せずに反映することを検証

use equip_viz_common::{BackendConfig, ChartData, EquipmentRecord, HistoryEntry, UploadResult};
use equip_viz_rust::render;

fn sample_result() -> UploadResult {
    let mut distribution = serde_json::Map::new();
    distribution.insert("Pump".to_string(), 3u64.into());
    distribution.insert("Valve".to_string(), 5u64.into());

    UploadResult {
        total_equipment: 8,
        average_flowrate: 120.5,
        average_pressure: 7.25,
        average_temperature: 86.4,
        equipment_type_distribution: distribution,
        table_data: vec![
            EquipmentRecord {
                name: "P-101".to_string(),
                equipment_type: "Pump".to_string(),
                flowrate: 120.0,
                pressure: 6.0,
                temperature: 80.0,
            },
            EquipmentRecord {
                name: "V-201".to_string(),
                equipment_type: "Valve".to_string(),
                flowrate: 60.5,
                pressure: 4.2,
                temperature: 75.0,
            },
        ],
    }
}

/// サマリは4つの数値フィールドをそのまま表示する
#[test]
fn test_summary_shows_the_four_numbers_unmodified() {
    let block = render::summary_block(&sample_result());

    assert!(block.contains("Total Equipment: 8"));
    assert!(block.contains("Average Flowrate: 120.5"));
    assert!(block.contains("Average Pressure: 7.25"));
    assert!(block.contains("Average Temperature: 86.4"));
}

/// 分布は全タイプをラベルと件数つきで描画する
#[test]
fn test_distribution_block_lists_every_type_with_count() {
    let chart = ChartData::from_distribution(&sample_result().equipment_type_distribution);
    let block = render::distribution_block(&chart);

    let lines: Vec<&str> = block.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("Pump"));
    assert!(lines[0].ends_with("3"));
    assert!(lines[1].starts_with("Valve"));
    assert!(lines[1].ends_with("5"));
}

/// 分布が空ならプレースホルダのみ
#[test]
fn test_distribution_block_empty() {
    let block = render::distribution_block(&ChartData::default());
    assert_eq!(block, "(no chart data)\n");
}

/// テーブルはヘッダ1行 + 機器1台につき1行
#[test]
fn test_table_block_renders_one_line_per_record() {
    let block = render::table_block(&sample_result().table_data);

    let lines: Vec<&str> = block.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].contains("Name"));
    assert!(lines[1].contains("P-101"));
    assert!(lines[2].contains("V-201"));
}

/// 履歴5件なら5行ぶん描画され、各行に対応するPDFリンクが付く
#[test]
fn test_history_block_renders_five_rows_with_pdf_links() {
    let config = BackendConfig::default();
    let entries: Vec<HistoryEntry> = (1..=5)
        .map(|id| HistoryEntry {
            id,
            filename: format!("batch_{id}.csv"),
            total_equipment: 10,
            avg_flowrate: 1.5,
            avg_pressure: 2.5,
            avg_temperature: 3.5,
            uploaded_at: "2024-06-01 12:00".to_string(),
        })
        .collect();

    let block = render::history_block(&entries, &config);

    assert_eq!(block.matches("PDF:").count(), 5);
    for id in 1..=5 {
        assert!(block.contains(&format!("download-pdf/?id={id}")));
        assert!(block.contains(&format!("batch_{id}.csv")));
    }
}

/// 履歴が空ならプレースホルダのみ
#[test]
fn test_history_block_empty() {
    let block = render::history_block(&[], &BackendConfig::default());
    assert_eq!(block, "(no uploads yet)\n");
}
