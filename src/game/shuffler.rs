use log::trace;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{GameError, GameResult};
use crate::model::{Tile, TileCatalog};

/// Returns the catalog in a uniformly random order, ready to be dealt onto
/// `tile_cells` cells.
pub fn shuffle_catalog<R: Rng + ?Sized>(
    catalog: &TileCatalog,
    tile_cells: usize,
    rng: &mut R,
) -> GameResult<Vec<Tile>> {
    if catalog.len() != tile_cells {
        return Err(GameError::SizeMismatch {
            catalog: catalog.len(),
            cells: tile_cells,
        });
    }
    let mut tiles = catalog.tiles().to_vec();
    tiles.shuffle(rng);
    trace!(target: "shuffler", "Shuffled {} tiles: {:?}", tiles.len(), tiles);
    Ok(tiles)
}
