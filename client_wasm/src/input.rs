//! Keyboard input handling

use game_core::{Command, InputSnapshot};

/// Client-side effects of a key that the simulation never sees
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    None,
    ToggleFps,
    Quit,
}

/// Held keys plus the commands queued since the last frame
#[derive(Debug, Default)]
pub struct KeyboardState {
    w: bool,
    s: bool,
    arrow_up: bool,
    arrow_down: bool,
    pending: Vec<Command>,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle key down event.
    ///
    /// The arrows double as menu navigation on the game-over screen.
    /// Auto-repeated presses only refresh the held state.
    pub fn key_down(&mut self, key: &str, repeat: bool, game_over: bool) -> KeyAction {
        match key {
            "w" | "W" => self.w = true,
            "s" | "S" => self.s = true,
            "ArrowUp" => {
                self.arrow_up = true;
                if game_over && !repeat {
                    self.pending.push(Command::PrevMatchLength);
                }
            }
            "ArrowDown" => {
                self.arrow_down = true;
                if game_over && !repeat {
                    self.pending.push(Command::NextMatchLength);
                }
            }
            _ if repeat => {}
            "r" | "R" | "Enter" => self.pending.push(Command::Restart),
            "3" | "5" | "7" => {
                if let Ok(best_of) = key.parse() {
                    self.pending.push(Command::SelectMatchLength(best_of));
                }
            }
            "p" | "P" | " " => self.pending.push(Command::TogglePause),
            "f" | "F" => return KeyAction::ToggleFps,
            "Escape" => return KeyAction::Quit,
            _ => {}
        }
        KeyAction::None
    }

    /// Handle key up event
    pub fn key_up(&mut self, key: &str) {
        match key {
            "w" | "W" => self.w = false,
            "s" | "S" => self.s = false,
            "ArrowUp" => self.arrow_up = false,
            "ArrowDown" => self.arrow_down = false,
            _ => {}
        }
    }

    /// Release every held key, e.g. when the window loses focus
    pub fn release_all(&mut self) {
        self.w = false;
        self.s = false;
        self.arrow_up = false;
        self.arrow_down = false;
    }

    /// Input for this frame; queued commands are handed over exactly once
    pub fn snapshot(&mut self) -> InputSnapshot {
        let mut input = InputSnapshot::held(self.w || self.arrow_up, self.s || self.arrow_down);
        input.commands = std::mem::take(&mut self.pending);
        input
    }
}

/// Whether the browser's default action for this key should be suppressed
pub fn captures(key: &str) -> bool {
    matches!(key, "ArrowUp" | "ArrowDown" | " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_held_keys() {
        let mut keys = KeyboardState::new();
        keys.key_down("W", false, false);
        assert_eq!(keys.snapshot().dir(), -1);

        keys.key_down("ArrowDown", false, false);
        let input = keys.snapshot();
        assert!(input.up && input.down);
        assert_eq!(input.dir(), 0);

        keys.key_up("W");
        assert_eq!(keys.snapshot().dir(), 1);
        keys.key_up("ArrowDown");
        assert_eq!(keys.snapshot().dir(), 0);
    }

    #[test]
    fn test_commands_drain_once() {
        let mut keys = KeyboardState::new();
        keys.key_down("r", false, true);
        keys.key_down("5", false, true);
        assert_eq!(
            keys.snapshot().commands,
            vec![Command::Restart, Command::SelectMatchLength(5)]
        );
        assert!(keys.snapshot().commands.is_empty());
    }

    #[test]
    fn test_arrows_navigate_only_on_game_over() {
        let mut keys = KeyboardState::new();
        keys.key_down("ArrowUp", false, false);
        assert!(keys.snapshot().commands.is_empty());

        keys.key_down("ArrowUp", false, true);
        keys.key_down("ArrowDown", false, true);
        assert_eq!(
            keys.snapshot().commands,
            vec![Command::PrevMatchLength, Command::NextMatchLength]
        );
    }

    #[test]
    fn test_repeat_does_not_queue() {
        let mut keys = KeyboardState::new();
        keys.key_down("p", false, false);
        keys.key_down("p", true, false);
        keys.key_down("ArrowDown", true, true);
        assert_eq!(keys.snapshot().commands, vec![Command::TogglePause]);
    }

    #[test]
    fn test_client_actions() {
        let mut keys = KeyboardState::new();
        assert_eq!(keys.key_down("f", false, false), KeyAction::ToggleFps);
        assert_eq!(keys.key_down("Escape", false, true), KeyAction::Quit);
        assert_eq!(keys.key_down("x", false, false), KeyAction::None);
        assert!(keys.snapshot().commands.is_empty());
    }

    #[test]
    fn test_release_all() {
        let mut keys = KeyboardState::new();
        keys.key_down("w", false, false);
        keys.key_down("ArrowDown", false, false);
        keys.release_all();
        assert_eq!(keys.snapshot().dir(), 0);
    }

    #[test]
    fn test_focus_loss_keeps_queued_commands() {
        let mut keys = KeyboardState::new();
        keys.key_down("s", false, false);
        keys.key_down("r", false, false);
        keys.release_all();

        let input = keys.snapshot();
        assert_eq!(input.dir(), 0);
        assert_eq!(input.commands, vec![Command::Restart]);

        // Stays released until the key is pressed again
        assert_eq!(keys.snapshot().dir(), 0);
        keys.key_down("s", false, false);
        assert_eq!(keys.snapshot().dir(), 1);
    }

    #[test]
    fn test_captured_keys() {
        assert!(captures("ArrowUp"));
        assert!(captures(" "));
        assert!(!captures("w"));
    }
}
