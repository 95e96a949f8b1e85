//! ファイル選択コンポーネント

use leptos::html::Input;
use leptos::prelude::*;
use web_sys::{File, HtmlInputElement, KeyboardEvent};

#[component]
pub fn FilePicker<F>(
    input_ref: NodeRef<Input>,
    file_name: ReadSignal<Option<String>>,
    on_file_selected: F,
) -> impl IntoView
where
    F: Fn(Option<File>) + 'static + Clone,
{
    let on_change = move |ev: web_sys::Event| {
        let input: HtmlInputElement = event_target(&ev);
        let file = input.files().and_then(|files| files.get(0));
        on_file_selected(file);
    };

    // Enterキーでファイル選択ダイアログを開く
    let on_keydown = move |ev: KeyboardEvent| {
        if ev.key() == "Enter" {
            if let Some(input) = input_ref.get_untracked() {
                input.click();
            }
        }
    };

    view! {
        <div class="picker-row">
            <label class="file-pill" tabindex="0" on:keydown=on_keydown>
                "Choose image"
                <input
                    type="file"
                    id="qr-input-file"
                    accept="image/*"
                    node_ref=input_ref
                    on:change=on_change
                />
            </label>
            <span
                class="badge file-name"
                class:hidden=move || file_name.get().is_none()
            >
                {move || file_name.get().unwrap_or_default()}
            </span>
        </div>
    }
}
