//! 分類結果の型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - ContentKind: コンテンツ種別（閉じた集合）
//! - ContentCategory: 表示用ラベルと種別キーの組
//! - ScanReport: 1画像分のデコード結果

use serde::{Deserialize, Serialize};

/// コンテンツ種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Wifi,
    Contact,
    Url,
    Email,
    Phone,
    Geo,
    Event,
    Text,
}

impl ContentKind {
    pub const ALL: [ContentKind; 8] = [
        ContentKind::Wifi,
        ContentKind::Contact,
        ContentKind::Url,
        ContentKind::Email,
        ContentKind::Phone,
        ContentKind::Geo,
        ContentKind::Event,
        ContentKind::Text,
    ];

    /// 安定した識別子
    pub fn key(&self) -> &'static str {
        match self {
            ContentKind::Wifi => "wifi",
            ContentKind::Contact => "contact",
            ContentKind::Url => "url",
            ContentKind::Email => "email",
            ContentKind::Phone => "phone",
            ContentKind::Geo => "geo",
            ContentKind::Event => "event",
            ContentKind::Text => "text",
        }
    }

    /// 画面表示用ラベル
    pub fn label(&self) -> &'static str {
        match self {
            ContentKind::Wifi => "Wi-Fi config",
            ContentKind::Contact => "Contact",
            ContentKind::Url => "URL",
            ContentKind::Email => "Email",
            ContentKind::Phone => "Phone",
            ContentKind::Geo => "Location",
            ContentKind::Event => "Event",
            ContentKind::Text => "Text",
        }
    }
}

impl std::fmt::Display for ContentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// 分類結果（ラベル + キー）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentCategory {
    pub label: String,
    pub key: ContentKind,
}

impl ContentCategory {
    /// 種別バッジの表示文字列
    pub fn badge(&self) -> String {
        format!("Type: {}", self.label)
    }
}

impl From<ContentKind> for ContentCategory {
    fn from(kind: ContentKind) -> Self {
        Self {
            label: kind.label().to_string(),
            key: kind,
        }
    }
}

/// 1画像分のデコード結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanReport {
    pub file_name: String,
    pub text: String,
    pub category: ContentCategory,
}

impl ScanReport {
    pub fn new(file_name: impl Into<String>, text: impl Into<String>) -> Self {
        let text = text.into();
        let category = crate::classifier::classify(&text);
        Self {
            file_name: file_name.into(),
            text,
            category,
        }
    }
}
