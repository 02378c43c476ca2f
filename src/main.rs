use log::{error, info, trace};
use std::cell::Cell;
use std::process::ExitCode;
use std::rc::Rc;

use mahjong_pyramid::destroyable::Destroyable;
use mahjong_pyramid::error::GameResult;
use mahjong_pyramid::events::Channel;
use mahjong_pyramid::game::{GameEngine, Settings};
use mahjong_pyramid::model::{Clickable, GameEngineCommand, GameEngineEvent, InputEvent};

fn init_logging() {
    env_logger::init();
}

/// Plays one game with the hint assist: ask for a pair, click the half the
/// hint did not select, repeat until the board is cleared or stuck.
fn autoplay(settings: &Settings) -> GameResult<bool> {
    let (event_emitter, event_observer) = Channel::<GameEngineEvent>::new();
    let (command_emitter, command_observer) = Channel::<GameEngineCommand>::new();

    let matches = Rc::new(Cell::new(0usize));
    let solved = Rc::new(Cell::new(false));
    let event_log = {
        let matches = matches.clone();
        let solved = solved.clone();
        event_observer.subscribe(move |event| {
            trace!(target: "autoplay", "{:?}", event);
            match event {
                GameEngineEvent::GameStarted {
                    seed,
                    tiles_remaining,
                } => info!(target: "autoplay", "Dealt {} tiles with seed {}", tiles_remaining, seed),
                GameEngineEvent::TilesRemoved(_) => matches.set(matches.get() + 1),
                GameEngineEvent::Solved => solved.set(true),
                GameEngineEvent::NoPairsFound => info!(target: "autoplay", "No pairs left"),
                _ => (),
            }
        })
    };

    let engine = GameEngine::from_settings(settings, event_emitter)?.connect(command_observer);

    loop {
        let hint = engine.borrow_mut().request_hint();
        let Some((first, _)) = hint else {
            break;
        };
        if let Some(command) = InputEvent::LeftClick(Clickable::Tile(first)).to_command() {
            command_emitter.emit(command);
        }
        if solved.get() {
            break;
        }
    }

    engine.borrow_mut().destroy();
    event_log.unsubscribe();

    let game = engine.borrow();
    println!(
        "game {} (seed {}): {} pairs matched, {} tiles left, {}",
        game.playthrough_id(),
        game.seed(),
        matches.get(),
        game.board().remaining(),
        if game.is_solved() { "solved" } else { "stuck" }
    );
    if Settings::is_debug_mode() {
        println!("{:?}", game.board());
    }

    Ok(solved.get())
}

fn main() -> ExitCode {
    init_logging();

    let settings = Settings::load();
    match autoplay(&settings) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(2),
        Err(err) => {
            error!(target: "autoplay", "Could not start a game: {}", err);
            ExitCode::FAILURE
        }
    }
}
