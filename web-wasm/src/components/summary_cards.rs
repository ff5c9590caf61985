//! サマリカードコンポーネント
//!
//! 4つの集計値をバックエンドの返した値のまま表示する

use leptos::prelude::*;

use equip_viz_common::ClientState;

#[component]
pub fn SummaryCards(state: RwSignal<ClientState>) -> impl IntoView {
    let total = move || {
        state.with(|s| {
            s.dataset
                .as_ref()
                .map(|d| d.total_equipment.to_string())
                .unwrap_or_default()
        })
    };
    let flowrate = move || {
        state.with(|s| {
            s.dataset
                .as_ref()
                .map(|d| d.average_flowrate.to_string())
                .unwrap_or_default()
        })
    };
    let pressure = move || {
        state.with(|s| {
            s.dataset
                .as_ref()
                .map(|d| d.average_pressure.to_string())
                .unwrap_or_default()
        })
    };
    let temperature = move || {
        state.with(|s| {
            s.dataset
                .as_ref()
                .map(|d| d.average_temperature.to_string())
                .unwrap_or_default()
        })
    };

    view! {
        <div class="stats">
            <div class="card">
                <span class="card-label">"Total"</span>
                <span class="card-value">{total}</span>
            </div>
            <div class="card">
                <span class="card-label">"Avg Flow"</span>
                <span class="card-value">{flowrate}</span>
            </div>
            <div class="card">
                <span class="card-label">"Avg Pressure"</span>
                <span class="card-value">{pressure}</span>
            </div>
            <div class="card">
                <span class="card-label">"Avg Temp"</span>
                <span class="card-value">{temperature}</span>
            </div>
        </div>
    }
}
