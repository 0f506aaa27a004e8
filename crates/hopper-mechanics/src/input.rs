//! Simulated keyboard input
//!
//! Platform-agnostic keyboard event types plus the held-key state the
//! game loop samples each step. Tests and scripted runs press and release
//! keys exactly the way a play-mode harness drives a real input device.

/// A key this game binds. A/D (or the arrow keys) move, Space jumps,
/// Escape toggles pause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCode {
    /// A character key such as 'a' or 'd'
    Char(char),
    /// Left arrow key
    Left,
    /// Right arrow key
    Right,
    /// Space bar
    Space,
    /// Escape key
    Escape,
}

/// The kind of keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEventKind {
    Press,
    Release,
}

/// A key press or release delivered to the session between steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyboardEvent {
    pub key: KeyCode,
    pub kind: KeyEventKind,
}

impl KeyboardEvent {
    pub fn press(key: KeyCode) -> Self {
        Self {
            key,
            kind: KeyEventKind::Press,
        }
    }

    pub fn release(key: KeyCode) -> Self {
        Self {
            key,
            kind: KeyEventKind::Release,
        }
    }
}

/// Edge transitions the session reacts to beyond held-key movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputTransition {
    JumpPressed,
    JumpReleased,
    PauseToggled,
}

/// Which keys are currently held, folded from the event stream.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    left: bool,
    right: bool,
    jump: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one keyboard event into the held state and report the edge
    /// transition, if any, for the session to act on.
    pub fn apply(&mut self, event: &KeyboardEvent) -> Option<InputTransition> {
        let pressed = event.kind == KeyEventKind::Press;
        match event.key {
            KeyCode::Char('a') | KeyCode::Left => {
                self.left = pressed;
                None
            }
            KeyCode::Char('d') | KeyCode::Right => {
                self.right = pressed;
                None
            }
            KeyCode::Space => {
                if pressed && !self.jump {
                    self.jump = true;
                    Some(InputTransition::JumpPressed)
                } else if !pressed && self.jump {
                    self.jump = false;
                    Some(InputTransition::JumpReleased)
                } else {
                    None
                }
            }
            KeyCode::Escape => pressed.then_some(InputTransition::PauseToggled),
            KeyCode::Char(_) => None,
        }
    }

    /// Horizontal move direction in -1..=1 from the held keys.
    pub fn move_direction(&self) -> f32 {
        let mut direction = 0.0;
        if self.left {
            direction -= 1.0;
        }
        if self.right {
            direction += 1.0;
        }
        direction
    }

    pub fn jump_held(&self) -> bool {
        self.jump
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movement_keys_fold_into_direction() {
        let mut input = InputState::new();
        assert_eq!(input.move_direction(), 0.0);

        input.apply(&KeyboardEvent::press(KeyCode::Char('d')));
        assert_eq!(input.move_direction(), 1.0);

        input.apply(&KeyboardEvent::press(KeyCode::Char('a')));
        assert_eq!(input.move_direction(), 0.0);

        input.apply(&KeyboardEvent::release(KeyCode::Char('d')));
        assert_eq!(input.move_direction(), -1.0);
    }

    #[test]
    fn test_jump_edges_reported_once() {
        let mut input = InputState::new();
        assert_eq!(
            input.apply(&KeyboardEvent::press(KeyCode::Space)),
            Some(InputTransition::JumpPressed)
        );
        // key repeat does not produce another edge
        assert_eq!(input.apply(&KeyboardEvent::press(KeyCode::Space)), None);
        assert_eq!(
            input.apply(&KeyboardEvent::release(KeyCode::Space)),
            Some(InputTransition::JumpReleased)
        );
        assert_eq!(input.apply(&KeyboardEvent::release(KeyCode::Space)), None);
    }

    #[test]
    fn test_arrow_keys_alias_letters() {
        let mut input = InputState::new();
        input.apply(&KeyboardEvent::press(KeyCode::Right));
        assert_eq!(input.move_direction(), 1.0);
        input.apply(&KeyboardEvent::release(KeyCode::Right));
        assert_eq!(input.move_direction(), 0.0);
    }
}
