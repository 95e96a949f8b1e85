//! ネイティブ環境のコラボレータ
//!
//! - SystemNavigator: OS既定のブラウザでURLを開く（別プロセスなので opener 参照は残らない）
//!   Windows は `rundll32 url.dll,FileProtocolHandler`、macOS は `open`、その他は `xdg-open`
//! - SystemClipboard: arboard によるシステムクリップボード

use crate::error::QrReaderError;
use qr_reader_common::{ClipboardWriter, Navigator};
use std::process::{Command, Stdio};
use std::sync::Mutex;

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemNavigator;

/// URLを開くコマンドを組み立てる
///
/// シェル（`cmd /c start` など）は経由しない。`&` や `|` を含むURLでも
/// そのまま1引数として渡る。
pub fn opener_command(url: &str) -> Command {
    #[cfg(windows)]
    let mut command = {
        let mut c = Command::new("rundll32");
        c.arg("url.dll,FileProtocolHandler").arg(url);
        c
    };

    #[cfg(target_os = "macos")]
    let mut command = {
        let mut c = Command::new("open");
        c.arg(url);
        c
    };

    #[cfg(not(any(windows, target_os = "macos")))]
    let mut command = {
        let mut c = Command::new("xdg-open");
        c.arg(url);
        c
    };

    command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());
    command
}

impl Navigator for SystemNavigator {
    fn open_isolated(&self, url: &str) -> Result<(), String> {
        opener_command(url)
            .spawn()
            .map(|_| ())
            .map_err(|e| QrReaderError::Navigation(format!("{}: {}", url, e)).to_string())
    }
}

pub struct SystemClipboard {
    clipboard: Mutex<Option<arboard::Clipboard>>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        let clipboard = match arboard::Clipboard::new() {
            Ok(c) => Some(c),
            Err(e) => {
                tracing::debug!(error = %e, "clipboard not available");
                None
            }
        };
        Self {
            clipboard: Mutex::new(clipboard),
        }
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl ClipboardWriter for SystemClipboard {
    async fn write_text(&self, text: &str) -> Result<(), String> {
        let mut guard = self
            .clipboard
            .lock()
            .map_err(|_| QrReaderError::Clipboard("lock poisoned".into()).to_string())?;

        match guard.as_mut() {
            Some(clipboard) => clipboard
                .set_text(text.to_string())
                .map_err(|e| QrReaderError::Clipboard(e.to_string()).to_string()),
            None => Err(QrReaderError::Clipboard("Clipboard not available".into()).to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsStr;

    #[test]
    fn test_opener_passes_url_as_single_argument() {
        let url = "https://www.a.test&calc|x^y<z>";
        let command = opener_command(url);

        let args: Vec<&OsStr> = command.get_args().collect();
        assert_eq!(args.last(), Some(&OsStr::new(url)));
    }

    #[test]
    fn test_opener_does_not_use_shell() {
        let command = opener_command("https://example.com/?a=1&b=2");
        let program = command.get_program().to_string_lossy().to_lowercase();

        for shell in ["cmd", "cmd.exe", "sh", "bash", "powershell"] {
            assert_ne!(program, shell);
        }
        assert!(command.get_args().all(|arg| arg != OsStr::new("/c")));
    }
}
