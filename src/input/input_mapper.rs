//! Input mapping from key presses to viewer actions
//!
//! Pointer, touch, and wheel input never goes through here; it is translated
//! by [`WinitTranslator`](super::WinitTranslator) and handed to the gesture
//! controller.

use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Actions triggered by the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Exit application (Escape)
    Exit,
    /// Reset the map view and drop any in-flight gesture (R key)
    Reset,
    /// Pause or resume gesture processing (P key)
    ToggleGestures,
    /// Start or stop the idle spin (Space)
    ToggleAutoRotate,
    /// Turn scroll-wheel zoom on or off (W key)
    ToggleWheelZoom,
}

/// Maps raw key events to semantic actions
pub struct InputMapper;

impl InputMapper {
    /// Map keyboard input to an action
    ///
    /// Returns `None` for releases and unbound keys
    pub fn map_keyboard(key: KeyCode, state: ElementState) -> Option<InputAction> {
        // Only handle key presses, not releases
        if state != ElementState::Pressed {
            return None;
        }

        match key {
            KeyCode::Escape => Some(InputAction::Exit),
            KeyCode::KeyR => Some(InputAction::Reset),
            KeyCode::KeyP => Some(InputAction::ToggleGestures),
            KeyCode::Space => Some(InputAction::ToggleAutoRotate),
            KeyCode::KeyW => Some(InputAction::ToggleWheelZoom),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_exits() {
        let action = InputMapper::map_keyboard(KeyCode::Escape, ElementState::Pressed);
        assert_eq!(action, Some(InputAction::Exit));
    }

    #[test]
    fn test_key_release_ignored() {
        for key in [KeyCode::Escape, KeyCode::KeyR, KeyCode::Space] {
            assert_eq!(InputMapper::map_keyboard(key, ElementState::Released), None);
        }
    }

    #[test]
    fn test_unbound_keys() {
        for key in [KeyCode::KeyA, KeyCode::KeyS, KeyCode::KeyD, KeyCode::Enter] {
            let action = InputMapper::map_keyboard(key, ElementState::Pressed);
            assert_eq!(action, None, "Key {:?} should not be mapped", key);
        }
    }

    #[test]
    fn test_toggles() {
        assert_eq!(
            InputMapper::map_keyboard(KeyCode::KeyR, ElementState::Pressed),
            Some(InputAction::Reset)
        );
        assert_eq!(
            InputMapper::map_keyboard(KeyCode::KeyP, ElementState::Pressed),
            Some(InputAction::ToggleGestures)
        );
        assert_eq!(
            InputMapper::map_keyboard(KeyCode::Space, ElementState::Pressed),
            Some(InputAction::ToggleAutoRotate)
        );
        assert_eq!(
            InputMapper::map_keyboard(KeyCode::KeyW, ElementState::Pressed),
            Some(InputAction::ToggleWheelZoom)
        );
    }
}
