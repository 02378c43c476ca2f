use std::rc::Rc;

use itertools::Itertools;

use super::{Area, BoardLayout, Position, Tile};
use crate::error::{GameError, GameResult};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Slot {
    /// structural cell that never holds a tile
    Padding,
    Occupied(Tile),
    /// tile cell whose tile has been removed
    Cleared,
}

#[derive(Clone)]
pub struct GameBoard {
    layout: Rc<BoardLayout>,
    slots: Vec<Slot>,
    remaining: usize,
}

impl PartialEq for GameBoard {
    fn eq(&self, other: &Self) -> bool {
        self.remaining == other.remaining && self.slots == other.slots
    }
}

impl Eq for GameBoard {}

impl std::fmt::Debug for GameBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let render_row = |label: String, cells: std::ops::Range<usize>| -> String {
            let body = cells
                .map(|index| match &self.slots[index] {
                    Slot::Padding => "   ".to_string(),
                    Slot::Cleared => " --".to_string(),
                    Slot::Occupied(tile) => format!("{:>3}", tile.to_string()),
                })
                .join("|");
            format!("{}|{}|", label, body)
        };

        let mut output = String::new();
        output.push('\n');
        let mut current_layer = None;
        for row in self.layout.rows() {
            if current_layer != Some(row.layer) {
                current_layer = Some(row.layer);
                output.push_str(&format!("layer {}\n", row.layer));
            }
            let label = match row.area {
                Area::Left => "left".to_string(),
                Area::Right => "right".to_string(),
                Area::Center => row.row.to_string(),
            };
            output.push_str(&render_row(label, row.cells.clone()));
            output.push('\n');
        }
        output.push_str(&format!("remaining: {}", self.remaining));

        write!(f, "{}", output)
    }
}

impl GameBoard {
    /// A board with every tile cell cleared.
    pub fn empty(layout: Rc<BoardLayout>) -> Self {
        let slots = layout
            .cells()
            .iter()
            .map(|cell| {
                if cell.tile_bearing {
                    Slot::Cleared
                } else {
                    Slot::Padding
                }
            })
            .collect();
        Self {
            layout,
            slots,
            remaining: 0,
        }
    }

    /// Deals `tiles` onto the tile cells in enumeration order.
    pub fn populate(layout: Rc<BoardLayout>, tiles: Vec<Tile>) -> GameResult<Self> {
        if tiles.len() != layout.tile_cells() {
            return Err(GameError::SizeMismatch {
                catalog: tiles.len(),
                cells: layout.tile_cells(),
            });
        }
        let mut board = Self::empty(layout);
        let tile_cells = board.layout.tile_cell_indices().collect::<Vec<_>>();
        for (index, tile) in tile_cells.into_iter().zip(tiles) {
            board.slots[index] = Slot::Occupied(tile);
        }
        board.remaining = board.layout.tile_cells();
        Ok(board)
    }

    pub fn layout(&self) -> &Rc<BoardLayout> {
        &self.layout
    }

    pub fn remaining(&self) -> usize {
        self.remaining
    }

    pub fn is_solved(&self) -> bool {
        self.remaining == 0
    }

    pub fn index_of(&self, position: &Position) -> Option<usize> {
        self.layout.index_of(position)
    }

    pub fn slot(&self, index: usize) -> &Slot {
        &self.slots[index]
    }

    pub fn tile(&self, index: usize) -> Option<&Tile> {
        match self.slots.get(index) {
            Some(Slot::Occupied(tile)) => Some(tile),
            _ => None,
        }
    }

    pub fn tile_at(&self, position: &Position) -> Option<&Tile> {
        self.index_of(position).and_then(|index| self.tile(index))
    }

    pub fn is_occupied(&self, index: usize) -> bool {
        matches!(self.slots.get(index), Some(Slot::Occupied(_)))
    }

    pub fn same_identity(&self, a: usize, b: usize) -> bool {
        match (self.tile(a), self.tile(b)) {
            (Some(a), Some(b)) => a.matches(b),
            _ => false,
        }
    }

    pub fn occupied_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| matches!(slot, Slot::Occupied(_)))
            .map(|(index, _)| index)
    }

    /// First and last occupied cells of the row holding `index`.
    pub fn row_ends(&self, index: usize) -> Option<(usize, usize)> {
        let mut occupied = self
            .layout
            .row_group_of(index)
            .cells
            .clone()
            .filter(|i| self.is_occupied(*i));
        let first = occupied.next()?;
        let last = occupied.last().unwrap_or(first);
        Some((first, last))
    }

    pub fn row_occupied_count(&self, index: usize) -> usize {
        self.layout
            .row_group_of(index)
            .cells
            .clone()
            .filter(|i| self.is_occupied(*i))
            .count()
    }

    pub fn wing_has_tiles(&self, area: Area) -> bool {
        self.layout
            .wing(area)
            .is_some_and(|row| row.cells.clone().any(|i| self.is_occupied(i)))
    }

    pub fn is_covered(&self, index: usize) -> bool {
        self.layout
            .covered_by(index)
            .iter()
            .any(|upper| self.is_occupied(*upper))
    }

    /// Takes the tile out of `index`, leaving the cell cleared.
    pub fn remove(&mut self, index: usize) -> Option<Tile> {
        if !self.is_occupied(index) {
            return None;
        }
        self.remaining -= 1;
        match std::mem::replace(&mut self.slots[index], Slot::Cleared) {
            Slot::Occupied(tile) => Some(tile),
            _ => None,
        }
    }

    /// Puts `tile` back into a cleared cell. Returns false if the cell is
    /// padding or still occupied.
    pub fn restore(&mut self, index: usize, tile: Tile) -> bool {
        match self.slots.get(index) {
            Some(Slot::Cleared) => {
                self.slots[index] = Slot::Occupied(tile);
                self.remaining += 1;
                true
            }
            _ => false,
        }
    }

    /// The cell an activation at `position` really lands on. Empty overlay
    /// cells are transparent: the activation falls through to the cell
    /// beneath, preferring one that still holds a tile.
    pub fn activation_target(&self, position: &Position) -> Option<usize> {
        let mut index = self.index_of(position)?;
        while !self.is_occupied(index) && self.layout.position(index).layer > 0 {
            let beneath = self.layout.resting_on(index);
            let Some(first) = beneath.first() else {
                break;
            };
            index = beneath
                .iter()
                .copied()
                .find(|i| self.is_occupied(*i))
                .unwrap_or(*first);
        }
        Some(index)
    }

    #[cfg(test)]
    /// Parse a board from its `Debug` dump. Blank or `--` tokens on tile cells
    /// are cleared; the `remaining:` line is ignored.
    pub fn parse(input: &str, layout: Rc<BoardLayout>) -> Self {
        let mut board = Self::empty(layout);
        let mut layer = 0;
        for line in input.lines().map(str::trim).filter(|l| !l.is_empty()) {
            if let Some(n) = line.strip_prefix("layer ") {
                layer = n.trim().parse().unwrap();
                continue;
            }
            if line.starts_with("remaining:") {
                continue;
            }
            let (label, rest) = line.split_once('|').unwrap();
            let tokens = rest.strip_suffix('|').unwrap_or(rest).split('|');
            for (col, token) in tokens.enumerate() {
                let position = match label {
                    "left" => Position::left_wing(col),
                    "right" => Position::right_wing(col),
                    row => Position::new(layer, row.parse().unwrap(), col),
                };
                let index = board
                    .index_of(&position)
                    .unwrap_or_else(|| panic!("no cell at {:?}", position));
                let token = token.trim();
                if token.is_empty() || token == "--" {
                    continue;
                }
                assert!(
                    board.layout.cell(index).tile_bearing,
                    "tile {} placed on padding at {:?}",
                    token,
                    position
                );
                let tile = Tile::parse(token).unwrap_or_else(|| panic!("bad tile {}", token));
                board.restore(index, tile);
            }
        }
        board
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::generate_layout;
    use crate::model::{LayerSpec, LayoutSpec, Suit};

    fn strip_layout() -> Rc<BoardLayout> {
        Rc::new(
            generate_layout(&LayoutSpec::stacked(vec![
                LayerSpec {
                    rows: 1,
                    cols: 6,
                    tiles_per_row: Some(vec![4]),
                },
                LayerSpec::full(1, 2),
            ]))
            .unwrap(),
        )
    }

    #[test]
    fn test_parse_and_dump() {
        let input = "\
layer 0
0|   | 5b| 3c| --| 5b|   |
layer 1
0| 3c| --|";
        let board = GameBoard::parse(input, strip_layout());
        assert_eq!(board.remaining(), 4);
        assert_eq!(board.tile_at(&Position::new(0, 0, 1)), Some(&Tile::new(5, Suit::Bamboo)));
        assert_eq!(board.tile_at(&Position::new(0, 0, 3)), None);
        assert_eq!(board.slot(board.index_of(&Position::new(0, 0, 3)).unwrap()), &Slot::Cleared);
        assert_eq!(board.slot(board.index_of(&Position::new(0, 0, 0)).unwrap()), &Slot::Padding);

        let dump = format!("{:?}", board);
        assert!(dump.contains("0|   | 5b| 3c| --| 5b|   |"));
        assert!(dump.contains("remaining: 4"));
        assert_eq!(GameBoard::parse(&dump, strip_layout()), board);
    }

    #[test]
    fn test_populate_checks_size() {
        let layout = strip_layout();
        let tiles = vec![Tile::new(1, Suit::Dots); 5];
        assert!(matches!(
            GameBoard::populate(layout.clone(), tiles),
            Err(GameError::SizeMismatch {
                catalog: 5,
                cells: 6
            })
        ));

        let tiles = (1..=6).map(|v| Tile::new(v, Suit::Dots)).collect::<Vec<_>>();
        let board = GameBoard::populate(layout, tiles).unwrap();
        assert_eq!(board.remaining(), 6);
        assert_eq!(board.tile_at(&Position::new(0, 0, 1)).unwrap().value, 1);
        assert_eq!(board.tile_at(&Position::new(0, 0, 4)).unwrap().value, 4);
        assert_eq!(board.tile_at(&Position::new(1, 0, 1)).unwrap().value, 6);
    }

    #[test]
    fn test_remove_and_restore() {
        let input = "\
layer 0
0|   | 5b| 3c| 3c| 5b|   |
layer 1
0| --| --|";
        let mut board = GameBoard::parse(input, strip_layout());
        let index = board.index_of(&Position::new(0, 0, 2)).unwrap();

        let tile = board.remove(index).unwrap();
        assert_eq!(board.remaining(), 3);
        assert!(board.remove(index).is_none());
        assert_eq!(board.remaining(), 3);

        assert!(!board.restore(0, tile.clone()));
        assert!(board.restore(index, tile.clone()));
        assert!(!board.restore(index, tile));
        assert_eq!(board.remaining(), 4);
    }

    #[test]
    fn test_row_ends() {
        let input = "\
layer 0
0|   | --| 3c| 3c| --|   |
layer 1
0| 1d| --|";
        let board = GameBoard::parse(input, strip_layout());
        let at = |col| board.index_of(&Position::new(0, 0, col)).unwrap();
        assert_eq!(board.row_ends(at(1)), Some((at(2), at(3))));
        assert_eq!(board.row_occupied_count(at(1)), 2);

        let apex = board.index_of(&Position::new(1, 0, 0)).unwrap();
        assert_eq!(board.row_ends(apex), Some((apex, apex)));
    }

    #[test]
    fn test_activation_falls_through_empty_overlay() {
        let input = "\
layer 0
0|   | 5b| 3c| 3c| 5b|   |
layer 1
0| --| 1d|";
        let board = GameBoard::parse(input, strip_layout());
        let target = board.activation_target(&Position::new(1, 0, 0)).unwrap();
        assert_eq!(board.layout().position(target), Position::new(0, 0, 2));

        let occupied = board.activation_target(&Position::new(1, 0, 1)).unwrap();
        assert_eq!(board.layout().position(occupied), Position::new(1, 0, 1));

        assert!(board.activation_target(&Position::new(3, 0, 0)).is_none());
    }
}
