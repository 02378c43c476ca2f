use serde::{Deserialize, Serialize};

use super::{Suit, Tile};
use crate::error::GameResult;

pub const COPIES_PER_TILE: usize = 4;

const FLOWER_FACES: [&str; 4] = ["plum", "orchid", "chrysanthemum", "bamboo"];
const SEASON_FACES: [&str; 4] = ["spring", "summer", "autumn", "winter"];

/// The ordered multiset of tiles dealt onto a board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TileCatalog {
    tiles: Vec<Tile>,
}

impl Default for TileCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl TileCatalog {
    pub fn new(tiles: Vec<Tile>) -> Self {
        Self { tiles }
    }

    /// The classic 144 tile set. Flowers and seasons each form one matching
    /// group regardless of their faces.
    pub fn standard() -> Self {
        let mut tiles = Vec::with_capacity(144);
        for suit in [Suit::Bamboo, Suit::Characters, Suit::Dots] {
            for value in 1..=9 {
                tiles.extend(std::iter::repeat_n(Tile::new(value, suit), COPIES_PER_TILE));
            }
        }
        for value in 1..=4 {
            tiles.extend(std::iter::repeat_n(Tile::new(value, Suit::Wind), COPIES_PER_TILE));
        }
        for value in 1..=3 {
            tiles.extend(std::iter::repeat_n(Tile::new(value, Suit::Dragon), COPIES_PER_TILE));
        }
        for face in FLOWER_FACES {
            tiles.push(Tile::with_face(1, Suit::Flower, format!("tiles/flower-{}.png", face)));
        }
        for face in SEASON_FACES {
            tiles.push(Tile::with_face(1, Suit::Season, format!("tiles/season-{}.png", face)));
        }
        Self { tiles }
    }

    pub fn from_json(contents: &str) -> GameResult<Self> {
        Ok(serde_json::from_str(contents)?)
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}
