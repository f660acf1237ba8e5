//! Transient status notices.
//!
//! A notice region shows at most one message at a time and hides it again
//! a fixed interval after it was posted. Posting while a notice is still
//! pending replaces it and restarts the interval from the new post time:
//! last call wins, nothing is queued.

use std::time::{Duration, Instant};

/// How long a notice stays visible after being posted.
pub const NOTICE_TTL: Duration = Duration::from_secs(3);

/// Classification of a notice, used to style its rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct Notice {
    pub message: String,
    pub kind: NoticeKind,
    posted_at: Instant,
}

/// A single notice region (list area, create form, or editor).
#[derive(Debug, Clone, Default)]
pub struct NoticeBoard {
    pending: Option<Notice>,
}

impl NoticeBoard {
    /// Posts a notice, replacing any pending one and resetting its timer.
    pub fn post(&mut self, message: impl Into<String>, kind: NoticeKind, now: Instant) {
        self.pending = Some(Notice {
            message: message.into(),
            kind,
            posted_at: now,
        });
    }

    /// Clears the region immediately.
    pub fn clear(&mut self) {
        self.pending = None;
    }

    /// Returns the notice if it is still within its display interval.
    pub fn current(&self, now: Instant) -> Option<&Notice> {
        self.pending
            .as_ref()
            .filter(|n| now.duration_since(n.posted_at) < NOTICE_TTL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notice_visible_before_ttl() {
        let mut board = NoticeBoard::default();
        let t0 = Instant::now();
        board.post("saved", NoticeKind::Success, t0);

        let notice = board.current(t0 + Duration::from_secs(2)).unwrap();
        assert_eq!(notice.message, "saved");
        assert_eq!(notice.kind, NoticeKind::Success);
    }

    #[test]
    fn notice_hides_at_ttl() {
        let mut board = NoticeBoard::default();
        let t0 = Instant::now();
        board.post("saved", NoticeKind::Success, t0);

        assert!(board.current(t0 + NOTICE_TTL).is_none());
        assert!(board.current(t0 + Duration::from_secs(10)).is_none());
    }

    #[test]
    fn second_post_resets_the_timer() {
        let mut board = NoticeBoard::default();
        let t0 = Instant::now();
        board.post("first", NoticeKind::Success, t0);

        let t1 = t0 + Duration::from_secs(2);
        board.post("second", NoticeKind::Error, t1);

        // Past the first notice's deadline, but within the second's.
        let probe = t0 + Duration::from_secs(4);
        let notice = board.current(probe).unwrap();
        assert_eq!(notice.message, "second");
        assert_eq!(notice.kind, NoticeKind::Error);

        assert!(board.current(t1 + NOTICE_TTL).is_none());
    }

    #[test]
    fn clear_removes_pending_notice() {
        let mut board = NoticeBoard::default();
        let t0 = Instant::now();
        board.post("stale", NoticeKind::Error, t0);
        board.clear();
        assert!(board.current(t0).is_none());
    }

    #[test]
    fn empty_board_shows_nothing() {
        let board = NoticeBoard::default();
        assert!(board.current(Instant::now()).is_none());
    }
}
