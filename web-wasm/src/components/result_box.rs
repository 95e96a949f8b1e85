//! デコード結果コンポーネント

use leptos::prelude::*;
use qr_reader_common::classify;

#[component]
pub fn ResultBox(decoded: Signal<Option<String>>) -> impl IntoView {
    let badge = move || decoded.get().map(|text| classify(&text).badge()).unwrap_or_default();

    view! {
        <div class="result-box" class:hidden=move || decoded.get().is_none()>
            <span class="badge content-type">{badge}</span>
            <pre id="decoded-text">{move || decoded.get().unwrap_or_default()}</pre>
        </div>
    }
}
