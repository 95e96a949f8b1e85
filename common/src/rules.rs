//! カスタムアクションのルール
//!
//! パターン → アクションの組を優先順に保持する。
//! 組み込みルール（redeem / CODE-）の後ろにユーザー定義ルールを追加でき、
//! 既存ルールの評価順は変わらない。

use crate::error::{Error, Result};
use crate::url_heuristic::looks_like_url;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// ルール一致時の動作
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleOutcome {
    /// 引き換えフロー（URL中の /redeem/<id>）
    Redeem,
    /// コード検証（CODE- で始まる）
    ValidateCode,
    /// ユーザー定義メッセージ（`{text}` はデコード結果に置換）
    Message(String),
}

/// ルール定義（JSON）
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleSpec {
    pub name: String,
    pub pattern: String,
    #[serde(default)]
    pub requires_url: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// コンパイル済みルール
#[derive(Debug, Clone)]
pub struct CustomRule {
    name: String,
    pattern: Regex,
    requires_url: bool,
    outcome: RuleOutcome,
}

impl CustomRule {
    pub fn new(name: &str, pattern: &str, requires_url: bool, outcome: RuleOutcome) -> Result<Self> {
        let pattern = Regex::new(pattern).map_err(|e| Error::InvalidRule {
            name: name.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self {
            name: name.to_string(),
            pattern,
            requires_url,
            outcome,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn outcome(&self) -> &RuleOutcome {
        &self.outcome
    }

    /// トリム済みテキストに一致するか
    pub fn matches(&self, text: &str) -> bool {
        if self.requires_url && !looks_like_url(text) {
            return false;
        }
        self.pattern.is_match(text)
    }

    fn from_spec(spec: &RuleSpec) -> Result<Self> {
        let message = spec
            .message
            .clone()
            .unwrap_or_else(|| format!("Custom action: {} {{text}}", spec.name));
        Self::new(&spec.name, &spec.pattern, spec.requires_url, RuleOutcome::Message(message))
    }
}

/// 優先順付きルール集合
#[derive(Debug, Clone)]
pub struct CustomRules {
    rules: Vec<CustomRule>,
}

impl Default for CustomRules {
    fn default() -> Self {
        Self::builtin()
    }
}

impl CustomRules {
    /// ルールなし（常にフォールバック）
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// 組み込みルール
    pub fn builtin() -> Self {
        lazy_static::lazy_static! {
            static ref BUILTIN: Vec<CustomRule> = vec![
                CustomRule::new("redeem", r"/redeem/[A-Za-z0-9\-_]+", true, RuleOutcome::Redeem).unwrap(),
                CustomRule::new("code", r"^CODE-", false, RuleOutcome::ValidateCode).unwrap(),
            ];
        }
        Self {
            rules: BUILTIN.clone(),
        }
    }

    /// プリセット名から取得
    pub fn from_preset(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "default" | "builtin" => Some(Self::builtin()),
            "none" | "empty" => Some(Self::empty()),
            _ => None,
        }
    }

    /// JSON文字列（RuleSpec配列）から組み込みルールの後ろに追加
    pub fn from_json(json: &str) -> Result<Self> {
        let specs: Vec<RuleSpec> = serde_json::from_str(json)?;
        let mut rules = Self::builtin();
        rules.extend_specs(&specs)?;
        Ok(rules)
    }

    /// JSONファイルから読み込み（非WASM環境のみ）
    #[cfg(not(feature = "wasm"))]
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// 末尾（フォールバックの直前）に追加
    pub fn push(&mut self, rule: CustomRule) {
        self.rules.push(rule);
    }

    pub fn extend_specs(&mut self, specs: &[RuleSpec]) -> Result<()> {
        for spec in specs {
            self.push(CustomRule::from_spec(spec)?);
        }
        Ok(())
    }

    /// 最初に一致したルール
    pub fn first_match(&self, text: &str) -> Option<&CustomRule> {
        self.rules.iter().find(|rule| rule.matches(text))
    }

    pub fn names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
