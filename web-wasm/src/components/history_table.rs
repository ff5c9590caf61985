//! アップロード履歴テーブルコンポーネント
//!
//! 各行のPDFリンクは新しいタブで開く。リンク先のURLは
//! 設定中のバックエンドから組み立てる

use leptos::prelude::*;

use equip_viz_common::{BackendConfig, ClientState, HistoryEntry};

#[component]
pub fn HistoryTable(
    state: RwSignal<ClientState>,
    settings: RwSignal<BackendConfig>,
) -> impl IntoView {
    let entries = move || state.with(|s| s.history.clone());

    view! {
        <div class="history-box">
            <h2>"Last 5 Uploads"</h2>
            <Show
                when=move || !entries().is_empty()
                fallback=|| view! { <p class="text-muted">"アップロード履歴はまだありません"</p> }
            >
                <table>
                    <thead>
                        <tr>
                            <th>"Filename"</th>
                            <th>"Total"</th>
                            <th>"Avg Flow"</th>
                            <th>"Avg Pressure"</th>
                            <th>"Avg Temp"</th>
                            <th>"Uploaded"</th>
                            <th>"PDF"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=entries
                            key=|entry| entry.id
                            children=move |entry: HistoryEntry| {
                                let pdf_href = settings.with_untracked(|s| s.pdf_url(entry.id));
                                view! {
                                    <tr>
                                        <td>{entry.filename.clone()}</td>
                                        <td>{entry.total_equipment.to_string()}</td>
                                        <td>{entry.avg_flowrate.to_string()}</td>
                                        <td>{entry.avg_pressure.to_string()}</td>
                                        <td>{entry.avg_temperature.to_string()}</td>
                                        <td>{entry.uploaded_at.clone()}</td>
                                        <td>
                                            <a href=pdf_href target="_blank" rel="noreferrer">
                                                "PDF"
                                            </a>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </Show>
        </div>
    }
}
