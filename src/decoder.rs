//! 外部デコーダ連携
//!
//! QRコードのデコード自体は外部コマンド（既定: `zbarimg --raw -q`）に委譲する。
//! 画像パスは引数の末尾に付与し、標準出力をデコード結果として扱う。

use crate::config::Config;
use crate::error::{QrReaderError, Result};
use crate::scanner::{self, ImageInfo};
use indicatif::ProgressBar;
use qr_reader_common::{ImageDecoder, ScanReport, Session};
use std::path::Path;
use tokio::process::Command;

/// 1画像分の結果
#[derive(Debug)]
pub struct ScanOutcome {
    pub image: ImageInfo,
    pub result: Result<ScanReport>,
}

/// 外部コマンドによるデコーダ
#[derive(Debug, Clone)]
pub struct CommandDecoder {
    command: String,
    args: Vec<String>,
}

impl CommandDecoder {
    pub fn new(command: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            command: command.into(),
            args,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.decoder_command(), config.decoder_args.clone())
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    /// 画像1枚をデコード
    ///
    /// 画像として読めないファイルはデコーダを呼ばずに失敗とする。
    pub async fn decode_file(&self, path: &Path) -> Result<String> {
        let (width, height) = scanner::image_dimensions(path)?;
        tracing::debug!(path = %path.display(), width, height, "decoding image");

        #[cfg(windows)]
        let output = Command::new("cmd")
            .arg("/c")
            .arg(&self.command)
            .args(&self.args)
            .arg(path)
            .output()
            .await
            .map_err(|e| QrReaderError::CliExecution(format!("{}: {}", self.command, e)))?;

        #[cfg(not(windows))]
        let output = Command::new(&self.command)
            .args(&self.args)
            .arg(path)
            .output()
            .await
            .map_err(|e| QrReaderError::CliExecution(format!("{}: {}", self.command, e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            tracing::debug!(code = ?output.status.code(), stderr = %stderr.trim(), "decoder failed");
            return Err(QrReaderError::Decode(format!(
                "{} (code {:?})",
                path.display(),
                output.status.code()
            )));
        }

        parse_decoder_output(&String::from_utf8_lossy(&output.stdout))
    }

    /// 複数画像を順にデコード
    ///
    /// 画像ごとの失敗は結果に残して続行する。デコーダ自体を起動できない場合のみ中断。
    pub async fn decode_batch(
        &self,
        images: &[ImageInfo],
        progress: Option<&ProgressBar>,
    ) -> Result<Vec<ScanOutcome>> {
        let mut outcomes = Vec::with_capacity(images.len());

        for image in images {
            if let Some(pb) = progress {
                pb.set_message(image.file_name.clone());
            }

            let result = match self.decode_file(&image.path).await {
                Ok(text) => Ok(ScanReport::new(image.file_name.as_str(), text)),
                Err(e @ QrReaderError::CliExecution(_)) => return Err(e),
                Err(e) => {
                    tracing::warn!(file = %image.file_name, error = %e, "decode failed");
                    Err(e)
                }
            };
            outcomes.push(ScanOutcome {
                image: image.clone(),
                result,
            });

            if let Some(pb) = progress {
                pb.inc(1);
            }
        }

        Ok(outcomes)
    }
}

impl ImageDecoder for CommandDecoder {
    type Image = Path;

    async fn decode(&self, image: &Path) -> std::result::Result<String, String> {
        self.decode_file(image).await.map_err(|e| e.to_string())
    }
}

/// 結果を入力順にセッションへ反映
///
/// 失敗した画像はスロットを空にするので、最後の画像が失敗していれば
/// セッションは空になる。成功分のレポートも入力順で返す。
pub fn apply_outcomes(outcomes: &[ScanOutcome]) -> (Session, Vec<ScanReport>) {
    let mut session = Session::new();
    let mut reports = Vec::new();

    for outcome in outcomes {
        let ticket = session.begin_decode();
        let decoded = outcome.result.as_ref().map(|report| report.text.clone());
        session.complete_decode(ticket, decoded);

        if let Ok(report) = &outcome.result {
            reports.push(report.clone());
        }
    }

    (session, reports)
}

/// デコーダ出力からテキストを取り出す
///
/// 末尾の改行1つだけを取り除く（複数行の vCard 等はそのまま）。
pub fn parse_decoder_output(stdout: &str) -> Result<String> {
    let text = stdout
        .strip_suffix("\r\n")
        .or_else(|| stdout.strip_suffix('\n'))
        .unwrap_or(stdout);

    if text.trim().is_empty() {
        return Err(QrReaderError::Decode("QRコードが見つかりません".into()));
    }

    Ok(text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_line() {
        assert_eq!(parse_decoder_output("https://example.com\n").unwrap(), "https://example.com");
        assert_eq!(parse_decoder_output("CODE-1\r\n").unwrap(), "CODE-1");
    }

    #[test]
    fn test_parse_keeps_inner_newlines() {
        let vcard = "BEGIN:VCARD\nFN:Taro\nEND:VCARD\n";
        assert_eq!(
            parse_decoder_output(vcard).unwrap(),
            "BEGIN:VCARD\nFN:Taro\nEND:VCARD"
        );
    }

    #[test]
    fn test_parse_empty_output() {
        assert!(matches!(parse_decoder_output(""), Err(QrReaderError::Decode(_))));
        assert!(matches!(parse_decoder_output("\n"), Err(QrReaderError::Decode(_))));
    }

    fn outcome(name: &str, result: Result<&str>) -> ScanOutcome {
        ScanOutcome {
            image: ImageInfo::from_path(Path::new(name)),
            result: result.map(|text| ScanReport::new(name, text)),
        }
    }

    #[test]
    fn test_apply_outcomes_last_success_wins() {
        let outcomes = vec![
            outcome("a.png", Ok("https://example.com")),
            outcome("b.png", Err(QrReaderError::Decode("b.png".into()))),
            outcome("c.png", Ok("CODE-7")),
        ];

        let (session, reports) = apply_outcomes(&outcomes);
        assert_eq!(session.current(), Some("CODE-7"));
        let names: Vec<&str> = reports.iter().map(|r| r.file_name.as_str()).collect();
        assert_eq!(names, vec!["a.png", "c.png"]);
    }

    #[test]
    fn test_apply_outcomes_last_failure_clears() {
        let outcomes = vec![
            outcome("a.png", Ok("https://example.com")),
            outcome("b.png", Err(QrReaderError::ImageLoad("b.png".into()))),
        ];

        let (session, reports) = apply_outcomes(&outcomes);
        assert!(!session.has_content());
        assert_eq!(reports.len(), 1);
    }

    #[test]
    fn test_apply_outcomes_empty() {
        let (session, reports) = apply_outcomes(&[]);
        assert!(session.current().is_none());
        assert!(reports.is_empty());
    }

    #[test]
    fn test_from_config() {
        let config = Config {
            decoder_command: "zbarimg".into(),
            ..Default::default()
        };
        let decoder = CommandDecoder::from_config(&config);
        assert_eq!(decoder.args, vec!["--raw", "-q"]);
    }
}
