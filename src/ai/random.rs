use crate::game::{GameState, RandomSource, StdRandom};

use super::agent::Agent;

/// An agent that selects uniformly at random among the columns reachable
/// under the turn's dice cap. Baseline opponent for strength tests.
pub struct RandomAgent {
    random: Box<dyn RandomSource>,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            random: Box::new(StdRandom::new()),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        RandomAgent {
            random: Box::new(StdRandom::seeded(seed)),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn select_column(&mut self, state: &GameState, dice: u8) -> Option<usize> {
        if state.is_terminal() || state.legal_actions().is_empty() {
            return None;
        }

        // A cap with every reachable column full forces a reroll, the same
        // protocol the expectimax engine follows at a dead end.
        let mut dice = dice;
        loop {
            let reachable = state.board().reachable_columns(dice);
            if !reachable.is_empty() {
                return Some(reachable[self.random.pick(reachable.len())]);
            }
            dice = self.random.roll_dice();
        }
    }

    fn name(&self) -> &str {
        "Random"
    }
}
