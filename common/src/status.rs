//! ステータス表示メッセージ

/// ステータス欄に表示するメッセージ（最後に書いたものが表示される）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusMessage {
    #[default]
    Idle,
    NoFileSelected,
    Scanning,
    Decoded,
    DecodeFailed,
    Copied,
    CopyFailed,
}

impl StatusMessage {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusMessage::Idle => "Select an image with a QR code.",
            StatusMessage::NoFileSelected => "No file selected.",
            StatusMessage::Scanning => "Scanning image for QR code...",
            StatusMessage::Decoded => "QR code found and decoded.",
            StatusMessage::DecodeFailed => "No QR code found in the image, or decoding failed.",
            StatusMessage::Copied => "Copied decoded text to clipboard.",
            StatusMessage::CopyFailed => "Unable to copy to clipboard.",
        }
    }

    /// エラー表示か
    pub fn is_error(&self) -> bool {
        matches!(self, StatusMessage::DecodeFailed | StatusMessage::CopyFailed)
    }
}

impl std::fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_idle() {
        assert_eq!(StatusMessage::default(), StatusMessage::Idle);
        assert_eq!(StatusMessage::default().to_string(), "Select an image with a QR code.");
    }

    #[test]
    fn test_error_statuses() {
        assert!(StatusMessage::DecodeFailed.is_error());
        assert!(StatusMessage::CopyFailed.is_error());
        assert!(!StatusMessage::Decoded.is_error());
    }
}
