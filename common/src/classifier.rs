//! コンテンツ種別の分類
//!
//! 判定ルールを優先順に並べたテーブルで評価し、最初に一致した種別を返す。
//! どれにも一致しなければ `Text`。新しい種別は `RULES` に追加するだけでよい。

use crate::types::{ContentCategory, ContentKind};
use crate::url_heuristic::{looks_like_url, trim_text};
use regex::Regex;

type Predicate = fn(&str) -> bool;

/// 判定ルール（評価順が意味を持つ）
const RULES: &[(ContentKind, Predicate)] = &[
    (ContentKind::Wifi, is_wifi),
    (ContentKind::Contact, is_contact),
    (ContentKind::Url, looks_like_url),
    (ContentKind::Email, is_email),
    (ContentKind::Phone, is_phone),
    (ContentKind::Geo, is_geo),
    (ContentKind::Event, is_event),
];

/// デコード結果を分類
///
/// 純粋関数。空文字を含むどの入力でも必ず結果を返す。
pub fn classify(text: &str) -> ContentCategory {
    classify_kind(text).into()
}

/// 値が無い場合も含めて分類（None は空文字扱い）
pub fn classify_opt(text: Option<&str>) -> ContentCategory {
    classify(text.unwrap_or_default())
}

/// 種別のみを返す
pub fn classify_kind(text: &str) -> ContentKind {
    let trimmed = trim_text(text);
    RULES
        .iter()
        .find(|(_, matches)| matches(trimmed))
        .map(|(kind, _)| *kind)
        .unwrap_or(ContentKind::Text)
}

/// 大文字小文字を無視した前方一致
fn starts_with_ignore_case(text: &str, prefix: &str) -> bool {
    text.get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

fn is_wifi(text: &str) -> bool {
    starts_with_ignore_case(text, "WIFI:")
}

fn is_contact(text: &str) -> bool {
    starts_with_ignore_case(text, "BEGIN:VCARD") || starts_with_ignore_case(text, "MECARD:")
}

fn is_email(text: &str) -> bool {
    lazy_static::lazy_static! {
        // 単一の@とドット付きドメイン
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    starts_with_ignore_case(text, "mailto:") || EMAIL_RE.is_match(text)
}

fn is_phone(text: &str) -> bool {
    lazy_static::lazy_static! {
        // 数字・空白・+ - ( ) . のみで7文字以上
        static ref PHONE_RE: Regex = Regex::new(r"^\+?[0-9\s\-().]{7,}$").unwrap();
    }
    starts_with_ignore_case(text, "tel:") || PHONE_RE.is_match(text)
}

fn is_geo(text: &str) -> bool {
    starts_with_ignore_case(text, "geo:")
}

fn is_event(text: &str) -> bool {
    starts_with_ignore_case(text, "BEGIN:VEVENT")
}
