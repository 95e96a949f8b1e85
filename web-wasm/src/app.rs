//! メインアプリケーションコンポーネント
//!
//! 状態は `Session`（現在のデコード結果）とステータス表示のみ。
//! 結果表示は Session から導出するので、スロットと表示がずれることはない。

use leptos::html::Input;
use leptos::prelude::*;
use leptos::task::spawn_local;
use qr_reader_common::{ActionDispatcher, ActionResult, ImageDecoder, Session, StatusMessage};
use web_sys::{console, File, Url};
use crate::bridge::{self, BrowserClipboard, BrowserNavigator, QrFileDecoder, READER_ELEMENT_ID};
use crate::components::{
    action_bar::ActionBar,
    file_picker::FilePicker,
    header::Header,
    result_box::ResultBox,
};

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let session = RwSignal::new(Session::new());
    let dispatcher = StoredValue::new(ActionDispatcher::default());
    let (status, set_status) = signal(StatusMessage::Idle);
    let (file_name, set_file_name) = signal(None::<String>);
    let (preview_url, set_preview_url) = signal(None::<String>);
    let input_ref = NodeRef::<Input>::new();

    let decoded = Signal::derive(move || session.with(|s| s.current().map(str::to_string)));
    let has_result = Signal::derive(move || session.with(|s| s.has_content()));

    // ファイル選択ハンドラ
    let on_file_selected = move |file: Option<File>| {
        let Some(file) = file else {
            set_status.set(StatusMessage::NoFileSelected);
            set_file_name.set(None);
            return;
        };

        set_file_name.set(Some(file.name()));
        match Url::create_object_url_with_blob(&file) {
            Ok(url) => set_preview_url.set(Some(url)),
            Err(e) => console::warn_1(&e),
        }
        set_status.set(StatusMessage::Scanning);

        let ticket = session.with_untracked(|s| s.begin_decode());
        spawn_local(async move {
            let outcome = QrFileDecoder::default().decode(&file).await;
            if let Err(message) = &outcome {
                console::error_1(&message.into());
            }

            // リセット後に完了した古いデコードは反映しない
            let mut applied = false;
            session.update(|s| applied = s.complete_decode(ticket, outcome));
            if !applied {
                return;
            }

            let found = session.with_untracked(|s| s.has_content());
            set_status.set(if found { StatusMessage::Decoded } else { StatusMessage::DecodeFailed });
        });
    };

    // プレビュー表示後にオブジェクトURLを解放
    let on_preview_load = move |_| {
        if let Some(url) = preview_url.get_untracked() {
            bridge::revoke_object_url(&url);
        }
    };

    // 開く
    let on_open = move |_| {
        let result = session.with_untracked(|s| {
            dispatcher.with_value(|d| d.open(s, &BrowserNavigator))
        });
        if let Some(result) = result {
            report_action(&result);
        }
    };

    // コピー
    let on_copy = move |_| {
        let snapshot = session.get_untracked();
        let dispatcher = dispatcher.get_value();
        spawn_local(async move {
            if let Some(result) = dispatcher.copy(&snapshot, &BrowserClipboard).await {
                report_action(&result);
                if let Some(message) = result.status() {
                    set_status.set(message);
                }
            }
        });
    };

    // カスタム
    let on_custom = move |_| {
        let result = session.with_untracked(|s| dispatcher.with_value(|d| d.custom(s)));
        if let Some(result) = result {
            report_action(&result);
        }
    };

    // クリア
    let on_clear = move |_| {
        if let Some(input) = input_ref.get_untracked() {
            input.set_value("");
        }
        session.update(|s| s.clear());
        set_preview_url.set(None);
        set_file_name.set(None);
        set_status.set(StatusMessage::Idle);
    };

    view! {
        <div class="container">
            <Header />

            <div class="toolbar">
                <FilePicker
                    input_ref=input_ref
                    file_name=file_name
                    on_file_selected=on_file_selected
                />
                <button id="clear-btn" class="btn btn-tertiary" on:click=on_clear>
                    "Clear"
                </button>
            </div>

            <img
                id="preview"
                alt="Selected image preview"
                class:hidden=move || preview_url.get().is_none()
                src=move || preview_url.get().unwrap_or_default()
                on:load=on_preview_load
            />

            <p
                id="status"
                class="status"
                class:error=move || status.get().is_error()
            >
                {move || status.get().as_str()}
            </p>

            <ResultBox decoded=decoded />

            <ActionBar
                visible=has_result
                on_open=on_open
                on_copy=on_copy
                on_custom=on_custom
            />

            <div id=READER_ELEMENT_ID class="hidden"></div>
        </div>
    }
}

/// アクション結果をダイアログ/コンソールに出す
fn report_action(result: &ActionResult) {
    match result {
        ActionResult::CopyFailed { reason } | ActionResult::NavigationFailed { reason, .. } => {
            console::warn_1(&reason.into());
        }
        _ => {}
    }

    if result.needs_alert() {
        bridge::alert(&result.message());
    }
}
