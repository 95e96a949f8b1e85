//! 外部コラボレータのインターフェース
//!
//! 実装は各フロントエンド側（CLI: 外部コマンド/arboard、Web: html5-qrcode/ブラウザAPI）。
//! 失敗理由は表示用の文字列で返す。

/// クリップボード書き込み
#[allow(async_fn_in_trait)]
pub trait ClipboardWriter {
    async fn write_text(&self, text: &str) -> Result<(), String>;
}

/// 分離されたブラウジングコンテキストでURLを開く（noopener / noreferrer）
pub trait Navigator {
    fn open_isolated(&self, url: &str) -> Result<(), String>;
}

/// 画像からQRコードをデコード
#[allow(async_fn_in_trait)]
pub trait ImageDecoder {
    type Image: ?Sized;

    async fn decode(&self, image: &Self::Image) -> Result<String, String>;
}
