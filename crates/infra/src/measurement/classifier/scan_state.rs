// crates/infra/src/measurement/classifier/scan_state.rs
//! ブロックコメントの走査状態

/// 行をまたいで持ち越す唯一の状態
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScanState {
    /// ブロックコメントの外
    #[default]
    Outside,
    /// `delimiter` 番目の区切りペアで開いたブロックコメントの中
    ///
    /// `parity` は開始=終了トークンのペアでのみ使う。トークンが奇数回現れた
    /// 行の後で `true` になり、次に1回だけ現れた行でブロックを抜ける。
    InBlock { delimiter: usize, parity: bool },
}

impl ScanState {
    #[inline]
    pub fn is_in_block(self) -> bool {
        matches!(self, Self::InBlock { .. })
    }

    #[inline]
    pub fn active_delimiter(self) -> Option<usize> {
        match self {
            Self::InBlock { delimiter, .. } => Some(delimiter),
            Self::Outside => None,
        }
    }

    #[inline]
    pub fn parity(self) -> bool {
        matches!(self, Self::InBlock { parity: true, .. })
    }

    /// ブロックに入る。既に中にいる場合は開始ペアとパリティを保つ。
    #[must_use]
    pub fn enter(self, delimiter: usize) -> Self {
        match self {
            Self::Outside => Self::InBlock { delimiter, parity: false },
            inside @ Self::InBlock { .. } => inside,
        }
    }

    /// 開始=終了トークンの出現回数による遷移
    #[must_use]
    pub fn after_symmetric(self, occurrences: usize) -> Self {
        match (self, occurrences) {
            (Self::InBlock { .. }, 2) => Self::Outside,
            (Self::InBlock { parity: true, .. }, 1) => Self::Outside,
            (Self::InBlock { delimiter, parity: false }, 1) => Self::InBlock { delimiter, parity: true },
            (state, _) => state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enter_keeps_existing_block() {
        let state = ScanState::Outside.enter(1);
        assert_eq!(state, ScanState::InBlock { delimiter: 1, parity: false });
        assert_eq!(state.enter(0).active_delimiter(), Some(1));
    }

    #[test]
    fn symmetric_parity_toggles_then_exits() {
        let opened = ScanState::Outside.enter(0);
        let once = opened.after_symmetric(1);
        assert!(once.is_in_block());
        assert!(once.parity());

        assert_eq!(once.after_symmetric(0), once);
        assert_eq!(once.after_symmetric(1), ScanState::Outside);
    }

    #[test]
    fn two_occurrences_close_immediately() {
        assert_eq!(ScanState::Outside.enter(0).after_symmetric(2), ScanState::Outside);
        let odd = ScanState::Outside.enter(0).after_symmetric(1);
        assert_eq!(odd.after_symmetric(2), ScanState::Outside);
    }

    #[test]
    fn outside_ignores_occurrences() {
        assert_eq!(ScanState::Outside.after_symmetric(1), ScanState::Outside);
        assert!(!ScanState::Outside.parity());
        assert_eq!(ScanState::Outside.active_delimiter(), None);
    }

    #[test]
    fn three_occurrences_leave_state_unchanged() {
        let state = ScanState::Outside.enter(0);
        assert_eq!(state.after_symmetric(3), state);
    }
}
