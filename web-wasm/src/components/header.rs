//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"Chemical Equipment Visualizer"</h1>
            <p class="subtitle">"CSVアップロード解析・履歴ビューア"</p>
        </header>
    }
}
