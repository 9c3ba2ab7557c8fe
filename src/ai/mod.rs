//! Agents and the search engines behind them: the window heuristic, the
//! dice-blind alpha-beta minimax, and the dice-aware expectimax.

mod agent;
mod expectimax;
mod heuristic;
mod minimax;
mod random;

pub use agent::Agent;
pub use expectimax::{expectimax, ExpectimaxAgent, Node};
pub use heuristic::{leaf_value, Heuristic, WindowHeuristic, WIN_VALUE};
pub use minimax::{minimax, MinimaxAgent};
pub use random::RandomAgent;

use crate::config::AgentKind;

/// Build an agent from its configured kind. A seed makes the agent's
/// internal randomness (tie-breaks, rerolls) reproducible.
pub fn build_agent(kind: AgentKind, depth: usize, seed: Option<u64>) -> Box<dyn Agent> {
    match (kind, seed) {
        (AgentKind::Expectimax, None) => Box::new(ExpectimaxAgent::new(depth)),
        (AgentKind::Expectimax, Some(seed)) => Box::new(ExpectimaxAgent::seeded(depth, seed)),
        (AgentKind::Minimax, None) => Box::new(MinimaxAgent::new(depth)),
        (AgentKind::Minimax, Some(seed)) => Box::new(MinimaxAgent::seeded(depth, seed)),
        (AgentKind::Random, None) => Box::new(RandomAgent::new()),
        (AgentKind::Random, Some(seed)) => Box::new(RandomAgent::seeded(seed)),
    }
}
