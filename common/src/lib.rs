//! QR Reader Common Library
//!
//! CLIとWeb(WASM)で共有される判定ロジック:
//! - URL判定（looks_like_url）
//! - コンテンツ種別の分類（classify）
//! - アクション振り分け（ActionDispatcher）

pub mod types;
pub mod error;
pub mod url_heuristic;
pub mod classifier;
pub mod rules;
pub mod dispatcher;
pub mod session;
pub mod status;
pub mod collaborators;

pub use types::{ContentCategory, ContentKind, ScanReport};
pub use error::{Error, Result};
pub use url_heuristic::{looks_like_url, normalize_url};
pub use classifier::classify;
pub use rules::{CustomRule, CustomRules, RuleOutcome, RuleSpec};
pub use dispatcher::{ActionDispatcher, ActionKind, ActionResult};
pub use session::{DecodeTicket, Session};
pub use status::StatusMessage;
pub use collaborators::{ClipboardWriter, ImageDecoder, Navigator};
