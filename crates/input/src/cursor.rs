//! Board cursor for keyboard play.

use crate::types::{GameAction, TileId};

/// Position of the highlighted tile on a row-major grid.
///
/// Movement stops at the edges; the last row may be shorter than the others.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCursor {
    index: usize,
    columns: usize,
    len: usize,
}

impl GridCursor {
    pub fn new(columns: usize, len: usize) -> Self {
        Self {
            index: 0,
            columns: columns.max(1),
            len,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Tile under the cursor, if the board has any tiles.
    pub fn tile(&self) -> Option<TileId> {
        (self.index < self.len).then_some(TileId(self.index))
    }

    /// Change the board size, keeping the cursor in range.
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        self.index = self.index.min(len.saturating_sub(1));
    }

    /// Jump to `index` (e.g. after a mouse click). Out-of-range jumps are ignored.
    pub fn jump_to(&mut self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        self.index = index;
        true
    }

    /// Apply a cursor action. Returns true if the cursor moved.
    pub fn apply(&mut self, action: GameAction) -> bool {
        let col = self.index % self.columns;
        let target = match action {
            GameAction::CursorLeft if col > 0 => self.index - 1,
            GameAction::CursorRight if col + 1 < self.columns => self.index + 1,
            GameAction::CursorUp if self.index >= self.columns => self.index - self.columns,
            GameAction::CursorDown => self.index + self.columns,
            _ => return false,
        };
        self.jump_to(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moves_within_grid() {
        let mut c = GridCursor::new(6, 24);
        assert!(c.apply(GameAction::CursorRight));
        assert!(c.apply(GameAction::CursorDown));
        assert_eq!(c.index(), 7);
        assert!(c.apply(GameAction::CursorLeft));
        assert!(c.apply(GameAction::CursorUp));
        assert_eq!(c.tile(), Some(TileId(0)));
    }

    #[test]
    fn test_stops_at_edges() {
        let mut c = GridCursor::new(6, 24);
        assert!(!c.apply(GameAction::CursorLeft));
        assert!(!c.apply(GameAction::CursorUp));

        c.jump_to(5);
        assert!(!c.apply(GameAction::CursorRight));
        c.jump_to(23);
        assert!(!c.apply(GameAction::CursorDown));
        assert!(!c.apply(GameAction::CursorRight));
        assert_eq!(c.index(), 23);
    }

    #[test]
    fn test_short_last_row() {
        // 8 tiles on 6 columns: second row holds indices 6 and 7.
        let mut c = GridCursor::new(6, 8);
        c.jump_to(4);
        assert!(!c.apply(GameAction::CursorDown));
        c.jump_to(1);
        assert!(c.apply(GameAction::CursorDown));
        assert_eq!(c.index(), 7);
        assert!(!c.apply(GameAction::CursorRight));
    }

    #[test]
    fn test_empty_board() {
        let mut c = GridCursor::new(6, 0);
        assert_eq!(c.tile(), None);
        assert!(!c.apply(GameAction::CursorDown));
        assert!(!c.jump_to(0));
    }

    #[test]
    fn test_set_len_clamps() {
        let mut c = GridCursor::new(4, 16);
        c.jump_to(15);
        c.set_len(8);
        assert_eq!(c.index(), 7);
    }

    #[test]
    fn test_non_cursor_actions_ignored() {
        let mut c = GridCursor::new(4, 8);
        assert!(!c.apply(GameAction::Select));
        assert!(!c.apply(GameAction::PlayAgain));
    }
}
