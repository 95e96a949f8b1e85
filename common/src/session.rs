//! デコード結果セッション
//!
//! 「現在のデコード結果」を1スロットだけ保持する。
//! 設定は `complete_decode`、消去は `clear` のみ。
//!
//! デコード開始時にチケットを発行し、完了時にチケットで結果を反映する:
//! - 最後に完了したデコードの結果が残る（後勝ち）
//! - リセット前に開始したデコードは完了しても破棄する

/// デコード1回分のチケット
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeTicket {
    epoch: u64,
}

/// 現在のデコード結果を保持するセッション
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    current: Option<String>,
    epoch: u64,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// 現在のデコード結果（空文字は保持しない）
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn has_content(&self) -> bool {
        self.current.is_some()
    }

    /// デコード開始
    pub fn begin_decode(&self) -> DecodeTicket {
        DecodeTicket { epoch: self.epoch }
    }

    /// デコード完了を反映
    ///
    /// 成功時はスロットを置き換え、失敗時は消去する。
    /// リセット後の古いチケットなら何もせず false を返す。
    pub fn complete_decode<E>(&mut self, ticket: DecodeTicket, outcome: Result<String, E>) -> bool {
        if ticket.epoch != self.epoch {
            return false;
        }
        self.current = match outcome {
            Ok(text) if !text.is_empty() => Some(text),
            _ => None,
        };
        true
    }

    /// 即時に結果を設定（デコード待ちが無い呼び出し元向け）
    pub fn set_decoded(&mut self, text: impl Into<String>) {
        let ticket = self.begin_decode();
        self.complete_decode::<()>(ticket, Ok(text.into()));
    }

    /// リセット
    pub fn clear(&mut self) {
        self.current = None;
        self.epoch += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_empty() {
        let session = Session::new();
        assert!(session.current().is_none());
        assert!(!session.has_content());
    }

    #[test]
    fn test_decode_replaces_slot() {
        let mut session = Session::new();
        session.set_decoded("first");
        session.set_decoded("second");
        assert_eq!(session.current(), Some("second"));
    }

    #[test]
    fn test_last_completed_wins() {
        let mut session = Session::new();
        let slow = session.begin_decode();
        let fast = session.begin_decode();

        assert!(session.complete_decode::<()>(fast, Ok("fast".into())));
        assert!(session.complete_decode::<()>(slow, Ok("slow".into())));
        assert_eq!(session.current(), Some("slow"));
    }

    #[test]
    fn test_failed_decode_clears_slot() {
        let mut session = Session::new();
        session.set_decoded("old");

        let ticket = session.begin_decode();
        assert!(session.complete_decode(ticket, Err("not found")));
        assert!(session.current().is_none());
    }

    #[test]
    fn test_empty_decode_is_not_content() {
        let mut session = Session::new();
        session.set_decoded("");
        assert!(!session.has_content());
    }

    #[test]
    fn test_stale_decode_after_clear_is_discarded() {
        let mut session = Session::new();
        let ticket = session.begin_decode();
        session.clear();

        assert!(!session.complete_decode::<()>(ticket, Ok("late".into())));
        assert!(session.current().is_none());

        let fresh = session.begin_decode();
        assert!(session.complete_decode::<()>(fresh, Ok("fresh".into())));
        assert_eq!(session.current(), Some("fresh"));
    }

    #[test]
    fn test_clear() {
        let mut session = Session::new();
        session.set_decoded("text");
        session.clear();
        assert!(session.current().is_none());
    }
}
