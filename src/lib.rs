//! # Dice Connect Four
//!
//! Connect Four between two automated agents on the classic 6×7 grid, with
//! a twist: each turn a dice roll `d` in `[0, 6]` limits the mover to
//! columns `0..=d`. The engine offers a depth-limited minimax with
//! alpha-beta pruning (dice-blind baseline) and an expectimax that models
//! the dice as chance nodes, both driven by a sliding-window heuristic.
//!
//! ## Modules
//!
//! - [`game`] — Board, player, immutable state machine, dice/random source
//! - [`ai`] — Agent trait, heuristic evaluator, minimax and expectimax engines
//! - [`runner`] — Turn loop playing one game between two agents
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod runner;
