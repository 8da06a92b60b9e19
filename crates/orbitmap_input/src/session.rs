//! Gesture state and per-interaction data

use orbitmap_math::Vec2;

/// Touch contacts tracked per gesture; extra fingers are ignored
pub const MAX_TOUCH_POINTS: usize = 3;

/// What the active pointer interaction is doing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PointerState {
    /// No interaction in progress
    #[default]
    None,
    /// Orbit/tilt drag (right button, or three-finger touch)
    Rotate,
    /// Zoom drag (middle button, or two-finger pinch)
    Zoom,
    /// Ground-anchored pan
    Pan,
    /// Press that has not moved yet: a click unless it turns into a pan
    Click,
    /// Reserved for a dedicated touch orbit; touch currently drives `Rotate`
    TouchRotate,
    /// Reserved for a combined touch zoom/pan; touch currently drives `Zoom`
    TouchZoomPan,
}

impl PointerState {
    pub fn is_active(self) -> bool {
        self != PointerState::None
    }
}

/// Data recorded between a press and its release
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GestureSession {
    pub state: PointerState,
    /// Last sampled single-pointer position
    pub start_position: Vec2,
    /// Current single-pointer position
    pub end_position: Vec2,
    /// `end_position - start_position` of the latest move
    pub delta: Vec2,
    pub touch_start_points: [Vec2; MAX_TOUCH_POINTS],
    pub touch_end_points: [Vec2; MAX_TOUCH_POINTS],
}

impl GestureSession {
    /// Copy up to [`MAX_TOUCH_POINTS`] contacts into the start slots
    pub fn capture_touch_start(&mut self, points: &[Vec2]) {
        for (slot, point) in self.touch_start_points.iter_mut().zip(points) {
            *slot = *point;
        }
    }

    /// Copy up to [`MAX_TOUCH_POINTS`] contacts into the end slots
    pub fn capture_touch_end(&mut self, points: &[Vec2]) {
        for (slot, point) in self.touch_end_points.iter_mut().zip(points) {
            *slot = *point;
        }
    }

    /// Make the latest touch sample the baseline for the next one
    pub fn advance_touches(&mut self) {
        self.touch_start_points = self.touch_end_points;
    }

    /// Distance between the first two contacts at the baseline and now
    pub fn pinch_distances(&self) -> (f32, f32) {
        (
            self.touch_start_points[1].distance(self.touch_start_points[0]),
            self.touch_end_points[1].distance(self.touch_end_points[0]),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_idle() {
        let session = GestureSession::default();
        assert_eq!(session.state, PointerState::None);
        assert!(!session.state.is_active());
        assert_eq!(session.touch_start_points, [Vec2::ZERO; MAX_TOUCH_POINTS]);
    }

    #[test]
    fn test_extra_touches_ignored() {
        let mut session = GestureSession::default();
        let points: Vec<Vec2> = (0..5).map(|i| Vec2::new(i as f32, 0.0)).collect();

        session.capture_touch_start(&points);
        assert_eq!(
            session.touch_start_points,
            [Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), Vec2::new(2.0, 0.0)]
        );
    }

    #[test]
    fn test_fewer_touches_keep_old_slots() {
        let mut session = GestureSession::default();
        session.capture_touch_end(&[Vec2::new(1.0, 1.0), Vec2::new(2.0, 2.0), Vec2::new(3.0, 3.0)]);
        session.capture_touch_end(&[Vec2::new(9.0, 9.0), Vec2::new(8.0, 8.0)]);
        assert_eq!(session.touch_end_points[2], Vec2::new(3.0, 3.0));
    }

    #[test]
    fn test_pinch_distances() {
        let mut session = GestureSession::default();
        session.capture_touch_start(&[Vec2::new(0.0, 0.0), Vec2::new(100.0, 0.0)]);
        session.capture_touch_end(&[Vec2::new(0.0, 0.0), Vec2::new(0.0, 94.0)]);
        assert_eq!(session.pinch_distances(), (100.0, 94.0));

        session.advance_touches();
        assert_eq!(session.touch_start_points, session.touch_end_points);
    }
}
