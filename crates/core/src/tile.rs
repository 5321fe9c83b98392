use crate::types::{Color, TileId, Visibility};

/// One card on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    pub id: TileId,
    pub color: Color,
    pub visibility: Visibility,
}

impl Tile {
    /// Face-down tile
    pub const fn new(id: TileId, color: Color) -> Self {
        Self {
            id,
            color,
            visibility: Visibility::Hidden,
        }
    }

    pub fn is_matched(&self) -> bool {
        self.visibility == Visibility::Matched
    }

    pub fn is_hidden(&self) -> bool {
        self.visibility == Visibility::Hidden
    }

    /// Color the player can see, if any.
    pub fn shown_color(&self) -> Option<Color> {
        self.visibility.is_face_up().then_some(self.color)
    }
}
