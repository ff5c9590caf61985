//! メインアプリケーションコンポーネント

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::File;

use crate::api::backend;
use crate::components::{
    distribution_chart::DistributionChart,
    equipment_table::EquipmentTable,
    header::Header,
    history_table::HistoryTable,
    notice_bar::NoticeBar,
    settings_panel::SettingsPanel,
    summary_cards::SummaryCards,
    upload_area::UploadArea,
};
use crate::settings_store;
use equip_viz_common::{BackendConfig, ChartData, ClientState};

#[component]
pub fn App() -> impl IntoView {
    // 画面状態はすべて ClientState 経由で更新する
    let state = RwSignal::new(ClientState::default());

    // バックエンド設定（localStorageから復元）
    let settings = RwSignal::new(settings_store::load());

    // 選択中のCSVファイル。web_sys::File は !Send なのでローカルアリーナに置く
    let selected_file = RwSignal::new_local(None::<File>);

    // 初回マウント時に履歴を読み込む
    {
        let backend_config = settings.get_untracked();
        spawn_local(async move {
            refresh_history(state, backend_config).await;
        });
    }

    // アップロード実行ハンドラ
    let on_upload = move |_| {
        let Some(file) = selected_file.get_untracked() else {
            // ファイル未選択ならネットワークへは出ない
            state.update(|s| s.upload_blocked_no_file());
            return;
        };
        let backend_config = settings.get_untracked();

        spawn_local(async move {
            match backend::upload_csv(&backend_config, &file).await {
                Ok(result) => {
                    state.update(|s| s.upload_succeeded(result));
                    // アップロード成功後に履歴を更新する
                    refresh_history(state, backend_config).await;
                }
                Err(err) => {
                    gloo::console::error!("upload failed:", err);
                    state.update(|s| s.upload_failed());
                }
            }
        });
    };

    let chart = Memo::new(move |_| {
        state.with(|s| {
            s.dataset
                .as_ref()
                .map(|d| ChartData::from_distribution(&d.equipment_type_distribution))
        })
    });

    let has_dataset = move || state.with(|s| s.dataset.is_some());

    view! {
        <div class="container">
            <Header />

            <SettingsPanel settings=settings />

            <UploadArea selected_file=selected_file on_upload=on_upload />

            <NoticeBar state=state />

            <Show when=has_dataset>
                <SummaryCards state=state />
                <DistributionChart chart=chart />
                <EquipmentTable state=state />
            </Show>

            <HistoryTable state=state settings=settings />
        </div>
    }
}

/// 履歴の再取得。失敗はコンソールに記録するのみで表示は変えない
async fn refresh_history(state: RwSignal<ClientState>, config: BackendConfig) {
    match backend::fetch_history(&config).await {
        Ok(entries) => state.update(|s| s.history_loaded(entries)),
        Err(err) => {
            gloo::console::error!("failed to fetch history:", err);
            state.update(|s| s.history_failed());
        }
    }
}
