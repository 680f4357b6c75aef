//! Two-key Normal-mode chord tracking (`dd`, `gg`).
//!
//! The dispatcher takes the pending value at the top of every Normal-mode
//! dispatch, so any intervening key (including arrows) invalidates a
//! half-entered chord before a later key could complete it.

/// In-progress chord state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PendingChord {
    #[default]
    None,
    AwaitingSecond(char),
}

impl PendingChord {
    /// Take the current value, leaving `None` behind.
    pub fn take(&mut self) -> PendingChord {
        std::mem::take(self)
    }

    /// Arm the chord with its first key.
    pub fn arm(&mut self, key: char) {
        *self = PendingChord::AwaitingSecond(key);
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, PendingChord::AwaitingSecond(_))
    }

    /// True if this (previously taken) value completes with `key`.
    pub fn completes(self, key: char) -> bool {
        self == PendingChord::AwaitingSecond(key)
    }
}
