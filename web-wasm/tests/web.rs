//! ブラウザ上で動かすテスト（wasm-pack test --headless --chrome）

#![cfg(target_arch = "wasm32")]

use qr_reader_wasm::bridge::{js_error_message, revoke_object_url, READER_ELEMENT_ID};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_js_error_message_from_string() {
    let value = JsValue::from_str("No MultiFormat Readers were able to detect the code.");
    assert_eq!(
        js_error_message(&value),
        "No MultiFormat Readers were able to detect the code."
    );
}

#[wasm_bindgen_test]
fn test_js_error_message_from_error() {
    let error = js_sys::Error::new("permission denied");
    assert_eq!(js_error_message(&error.into()), "permission denied");
}

#[wasm_bindgen_test]
fn test_reader_element_id() {
    assert_eq!(READER_ELEMENT_ID, "reader");
}

#[wasm_bindgen_test]
fn test_revoke_object_url() {
    let blob = web_sys::Blob::new().unwrap();
    let url = web_sys::Url::create_object_url_with_blob(&blob).unwrap();
    assert!(revoke_object_url(&url));
    // 解放済み・不明なURLでもパニックしない
    let _ = revoke_object_url(&url);
    let _ = revoke_object_url("not-a-blob-url");
}
