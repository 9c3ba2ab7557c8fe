//! Core game logic for dice-constrained Connect Four: board representation,
//! player types, the immutable state machine, and the random/dice source.

mod board;
mod dice;
mod player;
mod state;

pub use board::{Board, Cell, COLS, ROWS, WINDOW};
pub use dice::{RandomSource, StdRandom, DICE_FACES};
pub use player::Player;
pub use state::{GameOutcome, GameState, MoveError};

#[cfg(test)]
pub use dice::ScriptedRandom;
