use thiserror::Error;

#[derive(Error, Debug)]
pub enum QrReaderError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("フォルダが見つかりません: {0}")]
    FolderNotFound(String),

    #[error("画像読み込みエラー: {0}")]
    ImageLoad(String),

    #[error("デコード失敗: {0}")]
    Decode(String),

    #[error("画像が見つかりません: {0}")]
    NoImagesFound(String),

    #[error("デコーダ実行エラー: {0}。`qr-reader config --set-decoder COMMAND` で変更できます")]
    CliExecution(String),

    #[error("クリップボードエラー: {0}")]
    Clipboard(String),

    #[error("URLを開けません: {0}")]
    Navigation(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] qr_reader_common::Error),
}

pub type Result<T> = std::result::Result<T, QrReaderError>;
