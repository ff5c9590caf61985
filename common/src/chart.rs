//! 機器タイプ分布 → チャート系列への変換

use serde_json::{Map, Value};

/// 棒グラフ描画用のラベル列と値列
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub series: Vec<u64>,
}

impl ChartData {
    /// 分布マップをマップの並び順のままラベル列・値列に展開する。
    /// 並べ替え・集約・正規化は行わない
    pub fn from_distribution(distribution: &Map<String, Value>) -> Self {
        let mut labels = Vec::with_capacity(distribution.len());
        let mut series = Vec::with_capacity(distribution.len());

        for (label, count) in distribution {
            labels.push(label.clone());
            // WASM境界を通ると整数もf64で渡ってくる
            let count = count
                .as_u64()
                .or_else(|| count.as_f64().map(|f| f as u64))
                .unwrap_or(0);
            series.push(count);
        }

        Self { labels, series }
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// 最大値（棒のスケール計算用）。空なら None
    pub fn max_value(&self) -> Option<u64> {
        self.series.iter().copied().max()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_distribution_keeps_map_order() {
        let mut distribution = Map::new();
        distribution.insert("Pump".to_string(), Value::from(3u64));
        distribution.insert("Valve".to_string(), Value::from(5u64));

        let chart = ChartData::from_distribution(&distribution);
        assert_eq!(chart.labels, vec!["Pump", "Valve"]);
        assert_eq!(chart.series, vec![3, 5]);
    }

    #[test]
    fn test_from_distribution_does_not_sort() {
        let mut distribution = Map::new();
        distribution.insert("Valve".to_string(), Value::from(5u64));
        distribution.insert("Compressor".to_string(), Value::from(1u64));
        distribution.insert("Pump".to_string(), Value::from(3u64));

        let chart = ChartData::from_distribution(&distribution);
        assert_eq!(chart.labels, vec!["Valve", "Compressor", "Pump"]);
        assert_eq!(chart.series, vec![5, 1, 3]);
    }

    #[test]
    fn test_from_distribution_accepts_float_counts() {
        let mut distribution = Map::new();
        distribution.insert("Pump".to_string(), Value::from(3.0));

        let chart = ChartData::from_distribution(&distribution);
        assert_eq!(chart.series, vec![3]);
    }

    #[test]
    fn test_empty_distribution() {
        let chart = ChartData::from_distribution(&Map::new());
        assert!(chart.is_empty());
        assert_eq!(chart.max_value(), None);
    }

    #[test]
    fn test_max_value() {
        let mut distribution = Map::new();
        distribution.insert("Pump".to_string(), Value::from(3u64));
        distribution.insert("Valve".to_string(), Value::from(5u64));

        let chart = ChartData::from_distribution(&distribution);
        assert_eq!(chart.max_value(), Some(5));
    }
}
