use crate::game::GameState;

/// Universal interface for all AI agents.
pub trait Agent {
    /// Select a column for the current turn, given the dice roll capping
    /// reachable columns to `[0, dice]`. Returns `None` only when the agent
    /// finds no move at all (terminal board); callers treat that as game
    /// over, not as a request to retry.
    fn select_column(&mut self, state: &GameState, dice: u8) -> Option<usize>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
