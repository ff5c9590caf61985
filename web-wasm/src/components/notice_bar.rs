//! 通知バーコンポーネント
//!
//! alert()の代わりに状態として保持した通知を非ブロッキングで表示する

use leptos::prelude::*;

use equip_viz_common::ClientState;

#[component]
pub fn NoticeBar(state: RwSignal<ClientState>) -> impl IntoView {
    let message = move || state.with(|s| s.notice.map(|n| n.message()));

    view! {
        <Show when=move || message().is_some()>
            <div class="notice-bar">
                <span>{move || message().unwrap_or_default()}</span>
                <button
                    class="btn btn-small"
                    on:click=move |_| state.update(|s| s.dismiss_notice())
                >
                    "×"
                </button>
            </div>
        </Show>
    }
}
