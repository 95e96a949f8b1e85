//! URL判定
//!
//! デコード結果が「たぶんURL」かどうかを判定する。
//! 厳密パース（WHATWG URL）→ 接頭辞フォールバックの順で評価し、
//! どの入力に対してもパニックしない。

use url::{Host, Url};

/// 接頭辞フォールバックで URL とみなす接頭辞（小文字）
const URL_PREFIXES: &[&str] = &["http://", "https://", "www."];

/// 前後の空白とBOM（U+FEFF）を除去
///
/// `str::trim` は U+FEFF を空白とみなさないため別扱いにする。
pub fn trim_text(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

/// テキストがURLらしいか判定
///
/// 1. 前後の空白を除去し、空なら false
/// 2. 厳密パースに成功した場合はスキームとホストが両方あれば true
/// 3. パースに失敗した場合は `http://` `https://` `www.` で始まるか（大小無視）
pub fn looks_like_url(text: &str) -> bool {
    let trimmed = trim_text(text);
    if trimmed.is_empty() {
        return false;
    }

    match Url::parse(trimmed) {
        Ok(url) => !url.scheme().is_empty() && url.host_str().is_some_and(|h| !h.is_empty()),
        Err(_) => has_url_prefix(trimmed),
    }
}

/// 値が無い場合も含めて判定（None は空文字扱い）
pub fn looks_like_url_opt(text: Option<&str>) -> bool {
    looks_like_url(text.unwrap_or_default())
}

/// ナビゲーション用に正規化
///
/// `http` で始まらなければ `https://` を付与する。
pub fn normalize_url(text: &str) -> String {
    let trimmed = trim_text(text);
    if trimmed.starts_with("http") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    }
}

/// スキームなしのドメイン名（`example.com` など）か判定
///
/// `https://` を付けてパースし、ユーザー情報なし・ドット区切りのドメインで
/// 末尾ラベルがTLDらしい場合のみ true。
pub fn is_bare_domain(text: &str) -> bool {
    let trimmed = trim_text(text);
    if trimmed.is_empty() || trimmed.contains("://") || trimmed.chars().any(char::is_whitespace) {
        return false;
    }

    let Ok(url) = Url::parse(&format!("https://{}", trimmed)) else {
        return false;
    };

    if !url.username().is_empty() || url.password().is_some() {
        return false;
    }

    match url.host() {
        Some(Host::Domain(domain)) => is_dotted_domain(domain),
        _ => false,
    }
}

fn has_url_prefix(text: &str) -> bool {
    let lower = text.to_ascii_lowercase();
    URL_PREFIXES.iter().any(|p| lower.starts_with(p))
}

fn is_dotted_domain(domain: &str) -> bool {
    if !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.') {
        return false;
    }

    domain
        .rsplit('.')
        .next()
        .is_some_and(|tld| {
            tld.starts_with("xn--") || (tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic()))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_urls() {
        assert!(looks_like_url("https://example.com"));
        assert!(looks_like_url("http://example.com/path?q=1"));
        assert!(looks_like_url("  https://example.com  "));
        assert!(looks_like_url("ftp://files.example.com"));
    }

    #[test]
    fn test_prefix_fallback() {
        assert!(looks_like_url("www.example.com"));
        assert!(looks_like_url("WWW.Example.com"));
        assert!(looks_like_url("www.example.com/path with space"));
    }

    #[test]
    fn test_not_urls() {
        assert!(!looks_like_url("not a url"));
        assert!(!looks_like_url(""));
        assert!(!looks_like_url("   \n\t"));
        assert!(!looks_like_url("example.com"));
        assert!(!looks_like_url("hello"));
    }

    #[test]
    fn test_parsed_without_host() {
        // パースは成功するがホストが無い
        assert!(!looks_like_url("mailto:user@example.com"));
        assert!(!looks_like_url("tel:+15551234567"));
        assert!(!looks_like_url("WIFI:T:WPA;S:X;P:y;;"));
        assert!(!looks_like_url("geo:35.0,139.0"));
    }

    #[test]
    fn test_absent_text() {
        assert!(!looks_like_url_opt(None));
        assert!(looks_like_url_opt(Some("https://example.com")));
    }

    #[test]
    fn test_never_panics() {
        let inputs = [
            "\u{0}\u{1}\u{2}",
            "http://",
            "https://[::1",
            "://",
            "%%%",
            "\u{feff}www.",
            "😀😀😀",
            "http://exa mple.com",
        ];
        for input in inputs {
            let _ = looks_like_url(input);
            let _ = is_bare_domain(input);
        }
    }

    #[test]
    fn test_trim_text_strips_bom() {
        assert_eq!(trim_text("\u{feff}www.example.com "), "www.example.com");
        assert_eq!(trim_text(" \u{feff}\n"), "");
        assert!(looks_like_url("\u{feff}https://example.com"));
        assert!(!looks_like_url("\u{feff}"));
    }

    #[test]
    fn test_normalize_url() {
        assert_eq!(normalize_url("example.com"), "https://example.com");
        assert_eq!(normalize_url("www.example.com"), "https://www.example.com");
        assert_eq!(normalize_url("https://example.com"), "https://example.com");
        assert_eq!(normalize_url(" http://example.com "), "http://example.com");
    }

    #[test]
    fn test_bare_domain() {
        assert!(is_bare_domain("example.com"));
        assert!(is_bare_domain("shop.example.co.jp/items/1"));
        assert!(!is_bare_domain("not a url"));
        assert!(!is_bare_domain("hello"));
        assert!(!is_bare_domain("user@example.com"));
        assert!(!is_bare_domain("1.5"));
        assert!(!is_bare_domain("CODE-9988"));
        assert!(!is_bare_domain("https://example.com"));
    }
}
