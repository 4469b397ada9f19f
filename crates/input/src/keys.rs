use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A logical key the walk controller responds to.
///
/// The frame driver maps physical key codes to bindings; the simulation
/// never sees raw window events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Binding {
    Forward,
    Back,
    Left,
    Right,
    Jump,
    Sprint,
}

/// Current-instant held state for every binding.
///
/// Last state wins: `set` overwrites unconditionally, and rapid
/// press/release pairs between ticks are not observed by the next tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyStates {
    forward: bool,
    back: bool,
    left: bool,
    right: bool,
    jump: bool,
    sprint: bool,
}

impl KeyStates {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key transition from the host event loop.
    pub fn set(&mut self, binding: Binding, pressed: bool) {
        match binding {
            Binding::Forward => self.forward = pressed,
            Binding::Back => self.back = pressed,
            Binding::Left => self.left = pressed,
            Binding::Right => self.right = pressed,
            Binding::Jump => self.jump = pressed,
            Binding::Sprint => self.sprint = pressed,
        }
    }

    pub fn is_down(&self, binding: Binding) -> bool {
        match binding {
            Binding::Forward => self.forward,
            Binding::Back => self.back,
            Binding::Left => self.left,
            Binding::Right => self.right,
            Binding::Jump => self.jump,
            Binding::Sprint => self.sprint,
        }
    }

    /// Release every binding (used when the window loses focus).
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Horizontal movement intent in the camera's local basis:
    /// `y` is forward/back, `x` is right/left.
    ///
    /// Normalized to unit length when non-zero so diagonal input is not
    /// faster than axis input; opposite keys cancel to zero.
    pub fn intent(&self) -> Vec2 {
        let mut dir = Vec2::ZERO;
        if self.forward {
            dir.y += 1.0;
        }
        if self.back {
            dir.y -= 1.0;
        }
        if self.right {
            dir.x += 1.0;
        }
        if self.left {
            dir.x -= 1.0;
        }
        dir.normalize_or_zero()
    }

    /// True if any movement key is held.
    pub fn any_movement(&self) -> bool {
        self.forward || self.back || self.left || self.right
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_read_back() {
        let mut keys = KeyStates::new();
        keys.set(Binding::Forward, true);
        assert!(keys.is_down(Binding::Forward));
        keys.set(Binding::Forward, false);
        assert!(!keys.is_down(Binding::Forward));
    }

    #[test]
    fn last_state_wins() {
        let mut keys = KeyStates::new();
        keys.set(Binding::Jump, true);
        keys.set(Binding::Jump, false);
        keys.set(Binding::Jump, true);
        assert!(keys.is_down(Binding::Jump));
    }

    #[test]
    fn intent_zero_when_nothing_held() {
        let keys = KeyStates::new();
        assert_eq!(keys.intent(), Vec2::ZERO);
        assert!(!keys.any_movement());
    }

    #[test]
    fn intent_diagonal_is_unit_length() {
        let mut keys = KeyStates::new();
        keys.set(Binding::Forward, true);
        keys.set(Binding::Right, true);
        let intent = keys.intent();
        assert!((intent.length() - 1.0).abs() < 1e-6);
        assert!(intent.x > 0.0 && intent.y > 0.0);
    }

    #[test]
    fn opposite_keys_cancel() {
        let mut keys = KeyStates::new();
        keys.set(Binding::Forward, true);
        keys.set(Binding::Back, true);
        keys.set(Binding::Left, true);
        keys.set(Binding::Right, true);
        assert_eq!(keys.intent(), Vec2::ZERO);
        assert!(keys.any_movement());
    }

    #[test]
    fn clear_releases_everything() {
        let mut keys = KeyStates::new();
        keys.set(Binding::Sprint, true);
        keys.set(Binding::Left, true);
        keys.clear();
        assert!(!keys.is_down(Binding::Sprint));
        assert_eq!(keys.intent(), Vec2::ZERO);
    }
}
