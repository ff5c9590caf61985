//! CSVアップロードエリアコンポーネント
//!
//! ファイル選択（.csvのみ）とドラッグ&ドロップを受け付ける。
//! 拡張子の制限はUI上のaccept属性のみで、中身の検証はしない

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, File, HtmlInputElement};

#[component]
pub fn UploadArea<F>(
    selected_file: RwSignal<Option<File>, LocalStorage>,
    on_upload: F,
) -> impl IntoView
where
    F: Fn(()) + 'static + Clone,
{
    let (is_dragover, set_is_dragover) = signal(false);

    let on_change = move |ev: web_sys::Event| {
        let input = ev
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok());
        if let Some(input) = input {
            let file = input.files().and_then(|files| files.get(0));
            selected_file.set(file);
        }
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(false);

        if let Some(dt) = ev.data_transfer() {
            if let Some(files) = dt.files() {
                if let Some(file) = files.get(0) {
                    selected_file.set(Some(file));
                }
            }
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(true);
    };

    let on_dragleave = move |_: DragEvent| {
        set_is_dragover.set(false);
    };

    let file_label = move || {
        selected_file.with(|f| match f {
            Some(file) => file.name(),
            None => "CSVファイル未選択".to_string(),
        })
    };

    view! {
        <div
            class=move || {
                if is_dragover.get() {
                    "upload-area dragover"
                } else {
                    "upload-area"
                }
            }
            on:drop=on_drop
            on:dragover=on_dragover
            on:dragleave=on_dragleave
        >
            <input type="file" accept=".csv" on:change=on_change />
            <span class="file-label">{file_label}</span>
            <button
                class="btn btn-primary"
                on:click={
                    let on_upload = on_upload.clone();
                    move |_| on_upload(())
                }
            >
                "Analyze CSV"
            </button>
        </div>
    }
}
