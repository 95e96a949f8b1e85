//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"QR Reader"</h1>
            <p class="text-muted">"Upload an image to decode its QR code."</p>
        </header>
    }
}
