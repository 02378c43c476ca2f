mod board_layout;
mod game_board;
mod game_engine_command;
mod game_engine_event;
mod input_event;
mod layout;
mod move_record;
mod position;
mod tile;
mod tile_catalog;

pub use board_layout::{BoardLayout, CellInfo, RowGroup};
pub use game_board::{GameBoard, Slot};
pub use game_engine_command::GameEngineCommand;
pub use game_engine_event::GameEngineEvent;
pub use input_event::{Clickable, InputEvent};
pub use layout::{LayerSpec, LayoutSpec};
pub use move_record::{MoveRecord, RemovedTile};
pub use position::{Area, Position};
pub use tile::{Suit, Tile, TileIdentity};
pub use tile_catalog::{TileCatalog, COPIES_PER_TILE};
