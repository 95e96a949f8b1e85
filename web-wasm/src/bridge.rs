//! ブラウザ側コラボレータ
//!
//! - QrFileDecoder: html5-qrcode（index.html で読み込む）の `Html5Qrcode.scanFile`
//! - BrowserClipboard: `navigator.clipboard.writeText`
//! - BrowserNavigator: `window.open(url, "_blank", "noopener,noreferrer")`

use qr_reader_common::{ClipboardWriter, ImageDecoder, Navigator};
use wasm_bindgen::prelude::*;
use web_sys::File;

/// デコーダが描画に使う要素のID
pub const READER_ELEMENT_ID: &str = "reader";

#[wasm_bindgen]
extern "C" {
    type Html5Qrcode;

    #[wasm_bindgen(constructor, catch)]
    fn new(element_id: &str) -> Result<Html5Qrcode, JsValue>;

    /// 画像ファイルをスキャンしてデコード結果の文字列を返す
    #[wasm_bindgen(method, js_name = "scanFile", catch)]
    async fn scan_file(this: &Html5Qrcode, image_file: &File, show_image: bool) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = ["navigator", "clipboard"], js_name = "writeText", catch)]
    async fn write_clipboard_text(text: &str) -> Result<JsValue, JsValue>;
}

/// JS側の例外を表示用文字列に変換
pub fn js_error_message(value: &JsValue) -> String {
    if let Some(message) = value.as_string() {
        return message;
    }
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    format!("{:?}", value)
}

/// ダイアログ表示
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// プレビュー用オブジェクトURLを解放（失敗はコンソールに出すだけ）
pub fn revoke_object_url(url: &str) -> bool {
    match web_sys::Url::revoke_object_url(url) {
        Ok(()) => true,
        Err(e) => {
            web_sys::console::warn_1(&e);
            false
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct QrFileDecoder {
    element_id: &'static str,
}

impl Default for QrFileDecoder {
    fn default() -> Self {
        Self {
            element_id: READER_ELEMENT_ID,
        }
    }
}

impl ImageDecoder for QrFileDecoder {
    type Image = File;

    async fn decode(&self, image: &File) -> Result<String, String> {
        let scanner = Html5Qrcode::new(self.element_id).map_err(|e| js_error_message(&e))?;
        let value = scanner
            .scan_file(image, true)
            .await
            .map_err(|e| js_error_message(&e))?;

        value
            .as_string()
            .ok_or_else(|| "デコード結果が文字列ではありません".to_string())
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserClipboard;

impl ClipboardWriter for BrowserClipboard {
    async fn write_text(&self, text: &str) -> Result<(), String> {
        write_clipboard_text(text)
            .await
            .map(|_| ())
            .map_err(|e| js_error_message(&e))
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn open_isolated(&self, url: &str) -> Result<(), String> {
        let window = web_sys::window().ok_or_else(|| "window がありません".to_string())?;
        // noopener 指定時は null が返るので戻り値は見ない
        window
            .open_with_url_and_target_and_features(url, "_blank", "noopener,noreferrer")
            .map(|_| ())
            .map_err(|e| js_error_message(&e))
    }
}
