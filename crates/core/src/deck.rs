//! Deck builder - expands a palette into a shuffled deck of pairs.

use std::collections::HashSet;

use thiserror::Error;

use crate::rng::{shuffle, SimpleRng};
use crate::tile::Tile;
use crate::types::{Color, TileId};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeckError {
    #[error("cannot build a deck from an empty palette")]
    EmptyPalette,
    #[error("palette lists {} more than once", .0.as_str())]
    DuplicateColor(Color),
}

/// The full shuffled sequence of tiles for one game.
///
/// Every color appears exactly twice and each tile's id equals its position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairDeck {
    tiles: Vec<Tile>,
}

impl PairDeck {
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn into_tiles(self) -> Vec<Tile> {
        self.tiles
    }
}

/// A palette of distinct colors, checked once so dealing cannot fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    pub fn new(colors: &[Color]) -> Result<Self, DeckError> {
        if colors.is_empty() {
            return Err(DeckError::EmptyPalette);
        }

        let mut seen = HashSet::with_capacity(colors.len());
        for &color in colors {
            if !seen.insert(color) {
                return Err(DeckError::DuplicateColor(color));
            }
        }

        Ok(Self {
            colors: colors.to_vec(),
        })
    }

    /// Duplicate every color once, shuffle, and number the tiles in dealt order.
    pub fn deal(&self, rng: &mut SimpleRng) -> PairDeck {
        let doubled: Vec<Color> = self.colors.iter().flat_map(|&c| [c, c]).collect();
        let tiles = shuffle(rng, doubled)
            .into_iter()
            .enumerate()
            .map(|(i, color)| Tile::new(TileId(i), color))
            .collect::<Vec<_>>();

        tracing::debug!(tiles = tiles.len(), rng_state = rng.state(), "deck dealt");
        PairDeck { tiles }
    }
}

/// Build a shuffled pair deck from a list of distinct colors.
pub fn build_deck(colors: &[Color], rng: &mut SimpleRng) -> Result<PairDeck, DeckError> {
    Ok(Palette::new(colors)?.deal(rng))
}
