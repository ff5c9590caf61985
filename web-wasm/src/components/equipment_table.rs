//! 機器データテーブルコンポーネント

use leptos::prelude::*;

use equip_viz_common::{ClientState, EquipmentRecord};

#[component]
pub fn EquipmentTable(state: RwSignal<ClientState>) -> impl IntoView {
    // 機器名は重複しうるので行番号をキーにする
    let records = move || {
        state.with(|s| {
            s.dataset
                .as_ref()
                .map(|d| d.table_data.clone())
                .unwrap_or_default()
                .into_iter()
                .enumerate()
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="table-box">
            <table>
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Type"</th>
                        <th>"Flowrate"</th>
                        <th>"Pressure"</th>
                        <th>"Temperature"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=records
                        key=|(index, _)| *index
                        children=move |(_, record): (usize, EquipmentRecord)| {
                            view! {
                                <tr>
                                    <td>{record.name.clone()}</td>
                                    <td>{record.equipment_type.clone()}</td>
                                    <td>{record.flowrate.to_string()}</td>
                                    <td>{record.pressure.to_string()}</td>
                                    <td>{record.temperature.to_string()}</td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}
