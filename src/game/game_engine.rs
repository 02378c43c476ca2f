use log::{debug, info, trace};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use uuid::Uuid;

use super::accessibility::is_accessible;
use super::history::MoveHistory;
use super::layout_generator::generate_layout;
use super::pair_finder::PairFinder;
use super::settings::Settings;
use super::shuffler::shuffle_catalog;
use crate::destroyable::Destroyable;
use crate::error::{GameError, GameResult};
use crate::events::{EventEmitter, EventHandler, EventObserver, Unsubscriber};
use crate::model::{
    BoardLayout, GameBoard, GameEngineCommand, GameEngineEvent, LayoutSpec, MoveRecord, Position,
    RemovedTile, TileCatalog,
};

/// One game session: the board, the current selection, the undo stack and
/// the hint cursor. Every state change is announced on the event emitter.
pub struct GameEngine {
    board: GameBoard,
    catalog: TileCatalog,
    layout: Rc<BoardLayout>,
    selection: Option<usize>,
    history: MoveHistory,
    pair_finder: PairFinder,
    seed: u64,
    debug_mode: bool,
    current_playthrough_id: Uuid,
    subscription_id: Option<Unsubscriber<GameEngineCommand>>,
    game_engine_event_emitter: EventEmitter<GameEngineEvent>,
}

impl Destroyable for GameEngine {
    fn destroy(&mut self) {
        if let Some(subscription_id) = self.subscription_id.take() {
            subscription_id.unsubscribe();
        }
    }
}

impl EventHandler<GameEngineCommand> for GameEngine {
    fn handle_event(&mut self, event: &GameEngineCommand) {
        self.handle_command(event.clone());
    }
}

impl GameEngine {
    /// Builds the layout, deals a shuffled catalog onto it and announces
    /// `GameStarted`. Fails when the catalog does not fill the layout.
    pub fn initialize(
        layout_spec: &LayoutSpec,
        catalog: TileCatalog,
        seed: Option<u64>,
        game_engine_event_emitter: EventEmitter<GameEngineEvent>,
    ) -> GameResult<Self> {
        let layout = Rc::new(generate_layout(layout_spec)?);
        if catalog.len() != layout.tile_cells() {
            return Err(GameError::SizeMismatch {
                catalog: catalog.len(),
                cells: layout.tile_cells(),
            });
        }

        let mut engine = Self {
            board: GameBoard::empty(layout.clone()),
            catalog,
            layout,
            selection: None,
            history: MoveHistory::new(),
            pair_finder: PairFinder::new(),
            seed: 0,
            debug_mode: Settings::is_debug_mode(),
            current_playthrough_id: Uuid::new_v4(),
            subscription_id: None,
            game_engine_event_emitter,
        };
        engine.deal(seed)?;
        Ok(engine)
    }

    pub fn from_settings(
        settings: &Settings,
        game_engine_event_emitter: EventEmitter<GameEngineEvent>,
    ) -> GameResult<Self> {
        Self::initialize(
            &settings.layout,
            settings.catalog.clone(),
            settings.seed(),
            game_engine_event_emitter,
        )
    }

    /// Hands the engine over to the command channel. Commands sent on the
    /// matching emitter are applied until [`Destroyable::destroy`] is called.
    pub fn connect(
        self,
        game_engine_command_observer: EventObserver<GameEngineCommand>,
    ) -> Rc<RefCell<Self>> {
        let refcell = Rc::new(RefCell::new(self));
        GameEngine::wire_subscription(refcell.clone(), game_engine_command_observer);
        refcell
    }

    fn wire_subscription(
        game_engine: Rc<RefCell<Self>>,
        game_engine_command_observer: EventObserver<GameEngineCommand>,
    ) {
        let game_engine_handler = game_engine.clone();
        let subscription_id = game_engine_command_observer.subscribe(move |command| {
            let mut game_engine = game_engine_handler.borrow_mut();
            game_engine.handle_event(command);
        });
        game_engine.borrow_mut().subscription_id = Some(subscription_id);
    }

    fn handle_command(&mut self, command: GameEngineCommand) {
        trace!(target: "game_engine", "Handling command: {:?}", command);
        match command {
            GameEngineCommand::Activate(position) => {
                self.activate(&position);
            }
            GameEngineCommand::Undo => {
                self.request_undo();
            }
            GameEngineCommand::ShowHint => {
                self.request_hint();
            }
            GameEngineCommand::NewGame(seed) => {
                // the catalog already fit this layout once
                if let Err(err) = self.new_game(seed) {
                    log::error!(target: "game_engine", "Could not start a new game: {}", err);
                }
            }
        }
    }

    fn deal(&mut self, seed: Option<u64>) -> GameResult<()> {
        let seed = seed.unwrap_or_else(rand::random);
        let mut rng = StdRng::seed_from_u64(seed);
        let tiles = shuffle_catalog(&self.catalog, self.layout.tile_cells(), &mut rng)?;
        self.board = GameBoard::populate(self.layout.clone(), tiles)?;
        self.seed = seed;
        self.selection = None;
        self.history.clear();
        self.pair_finder.reset();

        info!(
            target: "game_engine",
            "New game {}; seed: {}; tiles: {}",
            self.current_playthrough_id,
            seed,
            self.board.remaining()
        );
        self.log_board();
        self.emit(GameEngineEvent::GameStarted {
            seed,
            tiles_remaining: self.board.remaining(),
        });
        Ok(())
    }

    /// Reshuffles the same catalog onto a fresh board.
    pub fn new_game(&mut self, seed: Option<u64>) -> GameResult<()> {
        self.current_playthrough_id = Uuid::new_v4();
        self.deal(seed)
    }

    /// Applies a click on `position`. Returns whether anything changed.
    pub fn activate(&mut self, position: &Position) -> bool {
        let Some(index) = self.board.activation_target(position) else {
            trace!(target: "game_engine", "No cell at {:?}", position);
            return false;
        };
        if !is_accessible(&self.board, index) {
            trace!(target: "game_engine", "{:?} is not accessible", self.layout.position(index));
            return false;
        }

        match self.selection {
            None => {
                self.select(index);
            }
            Some(selected) if selected == index => {
                self.clear_selection();
            }
            Some(selected) if self.board.same_identity(selected, index) => {
                self.remove_pair(selected, index);
            }
            Some(_) => {
                self.clear_selection();
                self.select(index);
            }
        }
        true
    }

    fn select(&mut self, index: usize) {
        self.selection = Some(index);
        self.emit(GameEngineEvent::SelectionShown(self.layout.position(index)));
    }

    fn clear_selection(&mut self) {
        if self.selection.take().is_some() {
            self.emit(GameEngineEvent::SelectionHidden);
        }
    }

    fn remove_pair(&mut self, first: usize, second: usize) {
        let removed = [first, second]
            .into_iter()
            .filter_map(|index| {
                self.board.remove(index).map(|tile| RemovedTile {
                    position: self.layout.position(index),
                    tile,
                })
            })
            .collect::<Vec<_>>();
        let record = MoveRecord::new(removed);
        let positions = record.positions();
        debug!(
            target: "game_engine",
            "Matched {:?}; {} tiles remaining",
            positions,
            self.board.remaining()
        );
        self.history.record_move(record);

        self.clear_selection();
        self.emit(GameEngineEvent::TilesRemoved(positions));
        self.emit(GameEngineEvent::HistoryChanged {
            history_length: self.history.len(),
        });
        self.log_board();

        if self.board.is_solved() {
            info!(target: "game_engine", "Game {} solved", self.current_playthrough_id);
            self.emit(GameEngineEvent::Solved);
        }
    }

    /// Puts the last matched pair back. Returns false when there was nothing
    /// to undo; the selection is left alone in that case.
    pub fn request_undo(&mut self) -> bool {
        let Some(record) = self.history.undo(&mut self.board) else {
            trace!(target: "game_engine", "Nothing to undo");
            return false;
        };
        debug!(target: "game_engine", "Undid {:?}", record.positions());

        self.clear_selection();
        self.emit(GameEngineEvent::TilesRestored(record.removed));
        self.emit(GameEngineEvent::HistoryChanged {
            history_length: self.history.len(),
        });
        self.log_board();
        true
    }

    /// Selects the second half of the next available pair and returns the
    /// pair, or signals `NoPairsFound`.
    pub fn request_hint(&mut self) -> Option<(Position, Position)> {
        match self.pair_finder.find_next_pair(&self.board) {
            Some((first, second)) => {
                self.clear_selection();
                self.select(second);
                Some((self.layout.position(first), self.layout.position(second)))
            }
            None => {
                self.emit(GameEngineEvent::NoPairsFound);
                None
            }
        }
    }

    pub fn board(&self) -> &GameBoard {
        &self.board
    }

    pub fn selection(&self) -> Option<Position> {
        self.selection.map(|index| self.layout.position(index))
    }

    pub fn history_length(&self) -> usize {
        self.history.len()
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn is_solved(&self) -> bool {
        self.board.is_solved()
    }

    pub fn playthrough_id(&self) -> Uuid {
        self.current_playthrough_id
    }

    fn emit(&self, event: GameEngineEvent) {
        trace!(target: "game_engine", "Emitting {:?}", event);
        self.game_engine_event_emitter.emit(event);
    }

    fn log_board(&self) {
        if self.debug_mode {
            debug!(target: "game_engine", "Board:\n{:?}", self.board);
        }
    }

    #[cfg(test)]
    fn with_board(board: GameBoard, emitter: EventEmitter<GameEngineEvent>) -> Self {
        let layout = board.layout().clone();
        Self {
            catalog: TileCatalog::new(
                layout
                    .tile_cell_indices()
                    .filter_map(|index| board.tile(index).cloned())
                    .collect(),
            ),
            board,
            layout,
            selection: None,
            history: MoveHistory::new(),
            pair_finder: PairFinder::new(),
            seed: 0,
            debug_mode: false,
            current_playthrough_id: Uuid::new_v4(),
            subscription_id: None,
            game_engine_event_emitter: emitter,
        }
    }
}
