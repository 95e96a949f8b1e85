//! アクション振り分け
//!
//! ユーザー操作（開く / コピー / カスタム）とセッションの現在値から
//! `ActionResult` を決める。セッションが空なら `None`（何もしない）。
//! 実際のI/Oはコラボレータに委譲する。

use crate::classifier::classify_kind;
use crate::collaborators::{ClipboardWriter, Navigator};
use crate::rules::{CustomRules, RuleOutcome};
use crate::session::Session;
use crate::status::StatusMessage;
use crate::types::ContentKind;
use crate::url_heuristic::{is_bare_domain, looks_like_url, normalize_url, trim_text};

/// ユーザー操作の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Open,
    Copy,
    Custom,
}

impl std::str::FromStr for ActionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "open" => Ok(ActionKind::Open),
            "copy" => Ok(ActionKind::Copy),
            "custom" => Ok(ActionKind::Custom),
            _ => Err(format!("Unknown action: {}. Use open, copy, or custom", s)),
        }
    }
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActionKind::Open => write!(f, "open"),
            ActionKind::Copy => write!(f, "copy"),
            ActionKind::Custom => write!(f, "custom"),
        }
    }
}

/// アクション実行結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionResult {
    /// 正規化済みURLへ遷移
    Navigate { url: String },
    /// 遷移を依頼したがナビゲータが失敗
    NavigationFailed { url: String, reason: String },
    /// URLではないため拒否
    NotAUrl,
    Copied,
    CopyFailed { reason: String },
    RedeemMatched { text: String },
    CodeMatched { text: String },
    /// ユーザー定義ルールに一致
    RuleMatched { rule: String, message: String },
    NoRuleMatched { key: ContentKind },
}

impl ActionResult {
    /// 表示用メッセージ
    pub fn message(&self) -> String {
        match self {
            ActionResult::Navigate { url } => format!("Opening {}", url),
            ActionResult::NavigationFailed { url, reason } => {
                format!("Unable to open {}: {}", url, reason)
            }
            ActionResult::NotAUrl => "Decoded content is not a URL.".to_string(),
            ActionResult::Copied => StatusMessage::Copied.to_string(),
            ActionResult::CopyFailed { .. } => StatusMessage::CopyFailed.to_string(),
            ActionResult::RedeemMatched { text } => {
                format!("Custom action: handle redeem flow for URL: {}", text)
            }
            ActionResult::CodeMatched { text } => format!("Custom action: validate code {}", text),
            ActionResult::RuleMatched { message, .. } => message.clone(),
            ActionResult::NoRuleMatched { key } => format!(
                "No custom rule matched. Type: {}. Decoded content shown above.",
                key
            ),
        }
    }

    /// ステータス欄に出す結果（コピー系のみ）
    pub fn status(&self) -> Option<StatusMessage> {
        match self {
            ActionResult::Copied => Some(StatusMessage::Copied),
            ActionResult::CopyFailed { .. } => Some(StatusMessage::CopyFailed),
            _ => None,
        }
    }

    /// ダイアログで通知する結果か
    pub fn needs_alert(&self) -> bool {
        !matches!(
            self,
            ActionResult::Navigate { .. } | ActionResult::Copied | ActionResult::CopyFailed { .. }
        )
    }
}

/// アクション振り分け
#[derive(Debug, Clone, Default)]
pub struct ActionDispatcher {
    rules: CustomRules,
}

impl ActionDispatcher {
    pub fn new(rules: CustomRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &CustomRules {
        &self.rules
    }

    /// 開く: 遷移先URLを決定
    ///
    /// URLらしければ正規化（`http` で始まらなければ `https://` を付与）。
    /// スキームなしのドメイン名（`example.com`）も受け付ける。
    pub fn open_target(&self, text: &str) -> Result<String, ActionResult> {
        let trimmed = trim_text(text);
        if looks_like_url(trimmed) {
            Ok(normalize_url(trimmed))
        } else if is_bare_domain(trimmed) {
            // `httpbin.org` のように http で始まるドメインもあるので常に付与
            Ok(format!("https://{}", trimmed))
        } else {
            Err(ActionResult::NotAUrl)
        }
    }

    /// 開く
    pub fn open<N: Navigator>(&self, session: &Session, navigator: &N) -> Option<ActionResult> {
        let text = session.current()?;
        let url = match self.open_target(text) {
            Ok(url) => url,
            Err(rejected) => return Some(rejected),
        };

        Some(match navigator.open_isolated(&url) {
            Ok(()) => ActionResult::Navigate { url },
            Err(reason) => ActionResult::NavigationFailed { url, reason },
        })
    }

    /// コピー（失敗してもエラーにはしない）
    pub async fn copy<C: ClipboardWriter>(
        &self,
        session: &Session,
        clipboard: &C,
    ) -> Option<ActionResult> {
        let text = session.current()?;
        Some(match clipboard.write_text(text).await {
            Ok(()) => ActionResult::Copied,
            Err(reason) => ActionResult::CopyFailed { reason },
        })
    }

    /// カスタム
    pub fn custom(&self, session: &Session) -> Option<ActionResult> {
        session.current().map(|text| self.custom_for(text))
    }

    /// カスタムルールを評価（最初に一致したルール、なければ種別キー）
    pub fn custom_for(&self, text: &str) -> ActionResult {
        let trimmed = trim_text(text);
        let Some(rule) = self.rules.first_match(trimmed) else {
            return ActionResult::NoRuleMatched {
                key: classify_kind(trimmed),
            };
        };

        let text = trimmed.to_string();
        match rule.outcome() {
            RuleOutcome::Redeem => ActionResult::RedeemMatched { text },
            RuleOutcome::ValidateCode => ActionResult::CodeMatched { text },
            RuleOutcome::Message(template) => ActionResult::RuleMatched {
                rule: rule.name().to_string(),
                message: template.replace("{text}", &text),
            },
        }
    }
}
