//! バックエンド設定パネルコンポーネント
//!
//! 接続先URLと認証情報はコードに埋め込まず、ここから注入して
//! localStorageに保存する

use leptos::prelude::*;

use crate::settings_store;
use equip_viz_common::BackendConfig;

#[component]
pub fn SettingsPanel(settings: RwSignal<BackendConfig>) -> impl IntoView {
    let (status, set_status) = signal(String::new());

    let on_save = move |_| match settings_store::save(&settings.get_untracked()) {
        Ok(()) => set_status.set("保存しました".to_string()),
        Err(err) => set_status.set(format!("保存失敗: {err}")),
    };

    let on_reset = move |_| {
        settings_store::clear();
        settings.set(BackendConfig::default());
        set_status.set("デフォルトに戻しました".to_string());
    };

    view! {
        <div class="settings-panel">
            <div class="settings-grid">
                <div class="form-group">
                    <label for="base-url">"バックエンドURL"</label>
                    <input
                        type="text"
                        id="base-url"
                        prop:value=move || settings.with(|s| s.base_url.clone())
                        on:input=move |ev| {
                            settings.update(|s| s.base_url = event_target_value(&ev));
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="username">"ユーザー名 (Basic認証)"</label>
                    <input
                        type="text"
                        id="username"
                        prop:value=move || settings.with(|s| s.username.clone().unwrap_or_default())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            settings.update(|s| {
                                s.username = if value.is_empty() { None } else { Some(value) };
                            });
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="password">"パスワード"</label>
                    <input
                        type="password"
                        id="password"
                        prop:value=move || settings.with(|s| s.password.clone().unwrap_or_default())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            settings.update(|s| {
                                s.password = if value.is_empty() { None } else { Some(value) };
                            });
                        }
                    />
                </div>

                <div class="form-group">
                    <div class="settings-actions">
                        <button class="btn btn-primary btn-small" on:click=on_save>
                            "保存"
                        </button>
                        <button class="btn btn-tertiary btn-small" on:click=on_reset>
                            "リセット"
                        </button>
                    </div>
                    <div class="settings-status">{move || status.get()}</div>
                </div>
            </div>
        </div>
    }
}
