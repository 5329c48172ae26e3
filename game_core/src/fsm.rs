//! Match State Machine
//!
//! Playing until someone reaches the target score, then GameOver until the
//! player asks for a rematch.

/// Match states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Playing,
    GameOver,
}

/// Actions that trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MatchWon,
    Restart,
}

/// Result of a state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    pub success: bool,
    pub from_state: GameState,
    pub to_state: GameState,
    pub action: GameAction,
}

/// Match Finite State Machine
#[derive(Debug, Clone)]
pub struct GameFsm {
    state: GameState,
}

impl GameFsm {
    pub fn new() -> Self {
        Self {
            state: GameState::Playing,
        }
    }

    /// Get current state
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Check if a transition is valid
    pub fn can_transition(&self, action: GameAction) -> bool {
        self.get_next_state(action).is_some()
    }

    /// Attempt a transition
    pub fn transition(&mut self, action: GameAction) -> TransitionResult {
        let from_state = self.state;

        match self.get_next_state(action) {
            Some(next_state) => {
                self.state = next_state;
                TransitionResult {
                    success: true,
                    from_state,
                    to_state: next_state,
                    action,
                }
            }
            None => TransitionResult {
                success: false,
                from_state,
                to_state: from_state,
                action,
            },
        }
    }

    /// Get next state for a given action (if valid)
    fn get_next_state(&self, action: GameAction) -> Option<GameState> {
        match (self.state, action) {
            (GameState::Playing, GameAction::MatchWon) => Some(GameState::GameOver),
            (GameState::GameOver, GameAction::Restart) => Some(GameState::Playing),
            _ => None,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.state == GameState::Playing
    }

    pub fn is_game_over(&self) -> bool {
        self.state == GameState::GameOver
    }
}

impl Default for GameFsm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let fsm = GameFsm::new();
        assert_eq!(fsm.state(), GameState::Playing);
        assert!(fsm.is_playing());
    }

    #[test]
    fn test_valid_transition() {
        let mut fsm = GameFsm::new();
        let result = fsm.transition(GameAction::MatchWon);
        assert!(result.success);
        assert_eq!(result.from_state, GameState::Playing);
        assert_eq!(result.to_state, GameState::GameOver);
        assert!(fsm.is_game_over());
    }

    #[test]
    fn test_restart_rejected_while_playing() {
        let mut fsm = GameFsm::new();
        assert!(!fsm.can_transition(GameAction::Restart));
        let result = fsm.transition(GameAction::Restart);
        assert!(!result.success);
        assert_eq!(fsm.state(), GameState::Playing);
    }

    #[test]
    fn test_match_won_rejected_after_game_over() {
        let mut fsm = GameFsm::new();
        fsm.transition(GameAction::MatchWon);
        let result = fsm.transition(GameAction::MatchWon);
        assert!(!result.success);
        assert_eq!(result.to_state, GameState::GameOver);
    }

    #[test]
    fn test_replay_flow() {
        let mut fsm = GameFsm::new();
        fsm.transition(GameAction::MatchWon);
        fsm.transition(GameAction::Restart);
        assert_eq!(fsm.state(), GameState::Playing);
        fsm.transition(GameAction::MatchWon);
        assert_eq!(fsm.state(), GameState::GameOver);
    }
}
