pub mod accessibility;
pub mod game_engine;
mod history;
pub mod layout_generator;
mod pair_finder;
pub mod settings;
mod shuffler;

#[cfg(test)]
mod tests_props;

pub use accessibility::{accessible_indices, is_accessible, is_position_accessible};
pub use game_engine::GameEngine;
pub use history::MoveHistory;
pub use layout_generator::generate_layout;
pub use pair_finder::PairFinder;
pub use settings::Settings;
pub use shuffler::shuffle_catalog;
