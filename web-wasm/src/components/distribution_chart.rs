//! 機器タイプ分布の棒グラフコンポーネント（インラインSVG）

use leptos::prelude::*;

use equip_viz_common::ChartData;

const CHART_WIDTH: f64 = 640.0;
const CHART_HEIGHT: f64 = 260.0;
const PLOT_HEIGHT: f64 = 180.0;
const BASELINE_Y: f64 = 220.0;

/// 棒1本分の描画座標
#[derive(Clone, PartialEq)]
struct Bar {
    label: String,
    count: u64,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

fn layout_bars(chart: &ChartData) -> Vec<Bar> {
    let max = chart.max_value().unwrap_or(0).max(1) as f64;
    let slots = chart.labels.len().max(1) as f64;
    let slot_width = CHART_WIDTH / slots;
    let bar_width = (slot_width * 0.6).min(80.0);

    chart
        .labels
        .iter()
        .zip(&chart.series)
        .enumerate()
        .map(|(i, (label, count))| {
            let height = (*count as f64 / max) * PLOT_HEIGHT;
            let x = i as f64 * slot_width + (slot_width - bar_width) / 2.0;
            Bar {
                label: label.clone(),
                count: *count,
                x,
                y: BASELINE_Y - height,
                width: bar_width,
                height,
            }
        })
        .collect()
}

#[component]
pub fn DistributionChart(chart: Memo<Option<ChartData>>) -> impl IntoView {
    let bars = move || chart.get().map(|c| layout_bars(&c)).unwrap_or_default();

    view! {
        <div class="chart-box">
            <h3>"Equipment Type Distribution"</h3>
            <svg
                viewBox=format!("0 0 {CHART_WIDTH} {CHART_HEIGHT}")
                class="distribution-chart"
            >
                <line
                    x1="0"
                    y1=BASELINE_Y.to_string()
                    x2=CHART_WIDTH.to_string()
                    y2=BASELINE_Y.to_string()
                    stroke="#8893b0"
                    stroke-width="1"
                />
                <For
                    each=bars
                    key=|bar| (bar.label.clone(), bar.count)
                    children=move |bar: Bar| {
                        let center = bar.x + bar.width / 2.0;
                        view! {
                            <g>
                                <rect
                                    x=bar.x.to_string()
                                    y=bar.y.to_string()
                                    width=bar.width.to_string()
                                    height=bar.height.to_string()
                                    rx="2"
                                    fill="#4f9cff"
                                />
                                <text
                                    x=center.to_string()
                                    y=(bar.y - 6.0).to_string()
                                    text-anchor="middle"
                                    class="bar-value"
                                >
                                    {bar.count.to_string()}
                                </text>
                                <text
                                    x=center.to_string()
                                    y=(BASELINE_Y + 18.0).to_string()
                                    text-anchor="middle"
                                    class="bar-label"
                                >
                                    {bar.label.clone()}
                                </text>
                            </g>
                        }
                    }
                />
            </svg>
        </div>
    }
}
