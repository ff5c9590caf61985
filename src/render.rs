//! 解析結果・履歴のテキスト描画
//!
//! デスクトップ版のサマリ表示と同じ内容を端末向けに整形する。
//! 数値はバックエンドの返した値を加工せずにそのまま埋め込む

use equip_viz_common::{BackendConfig, ChartData, EquipmentRecord, HistoryEntry, UploadResult};
use std::fmt::Write as _;

/// サマリブロック（4つの集計値）
pub fn summary_block(result: &UploadResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Total Equipment: {}", result.total_equipment);
    let _ = writeln!(out, "Average Flowrate: {}", result.average_flowrate);
    let _ = writeln!(out, "Average Pressure: {}", result.average_pressure);
    let _ = writeln!(out, "Average Temperature: {}", result.average_temperature);
    out
}

const BAR_WIDTH: u64 = 30;

/// 機器タイプ分布のテキスト棒グラフ
pub fn distribution_block(chart: &ChartData) -> String {
    let Some(max) = chart.max_value().filter(|m| *m > 0) else {
        return "(no chart data)\n".to_string();
    };

    let label_width = chart
        .labels
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for (label, count) in chart.labels.iter().zip(&chart.series) {
        let bar = "█".repeat(((count * BAR_WIDTH) / max) as usize);
        let _ = writeln!(out, "{label:<label_width$} {bar} {count}");
    }
    out
}

/// 機器データテーブル
pub fn table_block(records: &[EquipmentRecord]) -> String {
    let name_width = records
        .iter()
        .map(|r| r.name.chars().count())
        .chain([4])
        .max()
        .unwrap_or(4);
    let type_width = records
        .iter()
        .map(|r| r.equipment_type.chars().count())
        .chain([4])
        .max()
        .unwrap_or(4);

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<name_width$}  {:<type_width$}  {:>10}  {:>10}  {:>12}",
        "Name", "Type", "Flowrate", "Pressure", "Temperature"
    );
    for r in records {
        let _ = writeln!(
            out,
            "{:<name_width$}  {:<type_width$}  {:>10}  {:>10}  {:>12}",
            r.name, r.equipment_type, r.flowrate, r.pressure, r.temperature
        );
    }
    out
}

/// アップロード履歴（1件2行: サマリ行とPDFリンク行）
pub fn history_block(entries: &[HistoryEntry], config: &BackendConfig) -> String {
    if entries.is_empty() {
        return "(no uploads yet)\n".to_string();
    }

    let mut out = String::new();
    for e in entries {
        let when = if e.uploaded_at.is_empty() {
            String::new()
        } else {
            format!(" | {}", e.uploaded_at)
        };
        let _ = writeln!(
            out,
            "#{} {} | total {} | flow {} | press {} | temp {}{}",
            e.id,
            e.filename,
            e.total_equipment,
            e.avg_flowrate,
            e.avg_pressure,
            e.avg_temperature,
            when
        );
        let _ = writeln!(out, "    PDF: {}", config.pdf_url(e.id));
    }
    out
}
