use crate::error::{QrReaderError, Result};
use qr_reader_common::{CustomRules, RuleSpec};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// デコーダコマンドを上書きする環境変数
pub const DECODER_ENV: &str = "QR_READER_DECODER";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// 外部デコーダコマンド
    pub decoder_command: String,
    /// デコーダ引数（画像パスは末尾に付与）
    pub decoder_args: Vec<String>,
    /// 組み込みルールのプリセット (default/none)
    pub rules_preset: String,
    /// 追加ルールのJSONファイル
    pub rules_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            decoder_command: "zbarimg".into(),
            decoder_args: vec!["--raw".into(), "-q".into()],
            rules_preset: "default".into(),
            rules_file: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| QrReaderError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("qr-reader").join("config.json"))
    }

    /// デコーダコマンド（環境変数を優先）
    pub fn decoder_command(&self) -> String {
        match std::env::var(DECODER_ENV) {
            Ok(command) if !command.trim().is_empty() => command,
            _ => self.decoder_command.clone(),
        }
    }

    pub fn set_decoder(&mut self, command: String) -> Result<()> {
        if command.trim().is_empty() {
            return Err(QrReaderError::Config("デコーダコマンドが空です".into()));
        }
        self.decoder_command = command;
        self.save()
    }

    pub fn set_rules_file(&mut self, path: PathBuf) -> Result<()> {
        // 保存前に読めることを確認
        load_rule_specs(&path)?;
        self.rules_file = Some(path);
        self.save()
    }

    /// カスタムルールを構築
    ///
    /// プリセットを土台に、`override_file`（なければ設定のルールファイル）の
    /// ルールを末尾に追加する。
    pub fn load_rules(&self, override_file: Option<&Path>) -> Result<CustomRules> {
        let mut rules = CustomRules::from_preset(&self.rules_preset).ok_or_else(|| {
            QrReaderError::Config(format!(
                "不明なルールプリセット '{}' (default/none)",
                self.rules_preset
            ))
        })?;

        if let Some(path) = override_file.or(self.rules_file.as_deref()) {
            let specs = load_rule_specs(path)?;
            rules.extend_specs(&specs)?;
            tracing::debug!(path = %path.display(), count = specs.len(), "custom rules loaded");
        }

        Ok(rules)
    }
}

fn load_rule_specs(path: &Path) -> Result<Vec<RuleSpec>> {
    if !path.exists() {
        return Err(QrReaderError::FileNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
