//! Property tests for the board rules and the game session.
//!
//! Properties tested:
//! - Undoing every match restores the dealt board exactly
//! - A covered tile is never accessible, and clearing its cover uncovers it
//! - Only the ends of a row are ever accessible
//! - The hint search finds a pair exactly when one exists, without looping
//! - `Solved` is announced once, on the move that clears the board

use itertools::Itertools;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;

use super::accessibility::{accessible_indices, is_accessible};
use super::game_engine::GameEngine;
use super::layout_generator::generate_layout;
use super::pair_finder::PairFinder;
use super::shuffler::shuffle_catalog;
use crate::events::Channel;
use crate::model::{
    GameBoard, GameEngineEvent, LayerSpec, LayoutSpec, Suit, Tile, TileCatalog,
};

fn config() -> ProptestConfig {
    ProptestConfig::with_cases(48)
}

fn dealt(seed: u64) -> GameBoard {
    let layout = Rc::new(generate_layout(&LayoutSpec::pyramid()).unwrap());
    let mut rng = StdRng::seed_from_u64(seed);
    let tiles = shuffle_catalog(&TileCatalog::standard(), layout.tile_cells(), &mut rng).unwrap();
    GameBoard::populate(layout, tiles).unwrap()
}

fn open_pairs(board: &GameBoard) -> Vec<(usize, usize)> {
    accessible_indices(board)
        .into_iter()
        .tuple_combinations()
        .filter(|(i, j)| board.same_identity(*i, *j))
        .collect()
}

/// Removes one open pair per pick until the picks run out or the board is
/// stuck.
fn play(board: &mut GameBoard, picks: &[usize]) {
    for pick in picks {
        let pairs = open_pairs(board);
        if pairs.is_empty() {
            return;
        }
        let (i, j) = pairs[pick % pairs.len()];
        board.remove(i);
        board.remove(j);
    }
}

proptest! {
    #![proptest_config(config())]

    /// Property: n undos after n matches give back the dealt board
    #[test]
    fn prop_undo_round_trip(seed in any::<u64>(), moves in 0usize..30) {
        let (emitter, _observer) = Channel::<GameEngineEvent>::new();
        let mut engine = GameEngine::initialize(
            &LayoutSpec::pyramid(),
            TileCatalog::standard(),
            Some(seed),
            emitter,
        ).unwrap();
        let dealt = engine.board().clone();

        let mut matched = 0;
        for _ in 0..moves {
            let Some((first, _)) = engine.request_hint() else {
                break;
            };
            prop_assert!(engine.activate(&first));
            matched += 1;
        }
        prop_assert_eq!(engine.history_length(), matched);
        prop_assert_eq!(engine.board().remaining(), 144 - 2 * matched);

        for _ in 0..matched {
            prop_assert!(engine.request_undo());
        }
        prop_assert!(!engine.request_undo());
        prop_assert_eq!(engine.board(), &dealt);
    }

    /// Property: covered tiles are never accessible
    #[test]
    fn prop_covered_never_accessible(
        seed in any::<u64>(),
        picks in prop::collection::vec(any::<usize>(), 0..40),
    ) {
        let mut board = dealt(seed);
        play(&mut board, &picks);

        for index in board.occupied_indices().collect::<Vec<_>>() {
            let covered = board
                .layout()
                .covered_by(index)
                .iter()
                .any(|upper| board.is_occupied(*upper));
            prop_assert_eq!(covered, board.is_covered(index));
            if covered {
                prop_assert!(!is_accessible(&board, index));

                let mut uncovered = board.clone();
                for upper in board.layout().covered_by(index) {
                    uncovered.remove(*upper);
                }
                prop_assert!(!uncovered.is_covered(index));
            }
        }
    }

    /// Property: only row ends are accessible
    #[test]
    fn prop_only_row_ends_accessible(
        seed in any::<u64>(),
        picks in prop::collection::vec(any::<usize>(), 0..40),
    ) {
        let mut board = dealt(seed);
        play(&mut board, &picks);

        for index in accessible_indices(&board) {
            let ends = board.row_ends(index);
            prop_assert!(ends.is_some_and(|(first, last)| index == first || index == last));
        }

        // an uncovered lone tile on an upper layer is always free
        for index in board.occupied_indices() {
            if board.layout().position(index).layer > 0
                && board.row_occupied_count(index) == 1
                && !board.is_covered(index)
            {
                prop_assert!(is_accessible(&board, index));
            }
        }
    }

    /// Property: the hint search finds a pair exactly when one exists
    #[test]
    fn prop_pair_finder_terminates(
        seed in any::<u64>(),
        picks in prop::collection::vec(any::<usize>(), 0..70),
        hints in 1usize..6,
    ) {
        let mut board = dealt(seed);
        play(&mut board, &picks);
        let pairs = open_pairs(&board);

        let mut finder = PairFinder::new();
        for _ in 0..hints {
            match finder.find_next_pair(&board) {
                Some((i, j)) => {
                    prop_assert!(pairs.contains(&(i, j)));
                    prop_assert_eq!(finder.cursor(), Some(i));
                }
                None => {
                    prop_assert!(pairs.is_empty());
                    prop_assert_eq!(finder.cursor(), None);
                }
            }
        }
    }

    /// Property: Solved fires once, when the last pair goes
    #[test]
    fn prop_solved_announced_once(seed in any::<u64>()) {
        let spec = LayoutSpec::stacked(vec![LayerSpec::full(2, 4)]);
        let catalog = TileCatalog::new(
            (1..=4)
                .flat_map(|value| [Tile::new(value, Suit::Dots), Tile::new(value, Suit::Dots)])
                .collect(),
        );
        let (emitter, observer) = Channel::<GameEngineEvent>::new();
        let solved = Rc::new(RefCell::new(0));
        let counter = solved.clone();
        let _subscription = observer.subscribe(move |event| {
            if *event == GameEngineEvent::Solved {
                *counter.borrow_mut() += 1;
            }
        });

        let mut engine = GameEngine::initialize(&spec, catalog, Some(seed), emitter).unwrap();
        while let Some((first, _)) = engine.request_hint() {
            prop_assert_eq!(*solved.borrow(), 0);
            engine.activate(&first);
        }

        prop_assert_eq!(*solved.borrow(), usize::from(engine.is_solved()));
    }
}
