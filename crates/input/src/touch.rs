use glam::Vec2;

/// What ending a touch amounts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchOutcome {
    /// Same finger lifted without dragging; treated as a fire press.
    Tap,
    Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct ActiveTouch {
    finger: u32,
    location: Vec2,
    moved: bool,
}

/// Tracks a single touch at a time for tap detection.
#[derive(Debug, Clone, Default)]
pub struct TouchTracker {
    active: Option<ActiveTouch>,
    /// Drag distance in pixels beyond which a touch is no longer a tap.
    drag_threshold: f32,
}

impl TouchTracker {
    pub fn new(drag_threshold: f32) -> Self {
        Self {
            active: None,
            drag_threshold,
        }
    }

    pub fn is_pressed(&self) -> bool {
        self.active.is_some()
    }

    /// Start tracking `finger`. Ignored while another touch is held.
    pub fn begin(&mut self, finger: u32, location: Vec2) {
        if self.active.is_some() {
            return;
        }
        self.active = Some(ActiveTouch {
            finger,
            location,
            moved: false,
        });
    }

    /// Record a drag for the tracked finger.
    pub fn update(&mut self, finger: u32, location: Vec2) {
        if let Some(touch) = self.active.as_mut().filter(|t| t.finger == finger) {
            if (location - touch.location).abs().max_element() >= self.drag_threshold {
                touch.moved = true;
            }
            touch.location = location;
        }
    }

    /// Finish the held touch, whichever finger lifted.
    pub fn end(&mut self, finger: u32) -> TouchOutcome {
        let Some(touch) = self.active.take() else {
            return TouchOutcome::Ignored;
        };
        if touch.finger == finger && !touch.moved {
            TouchOutcome::Tap
        } else {
            TouchOutcome::Ignored
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tap_fires() {
        let mut t = TouchTracker::new(4.0);
        t.begin(0, Vec2::new(10.0, 10.0));
        assert!(t.is_pressed());
        assert_eq!(t.end(0), TouchOutcome::Tap);
        assert!(!t.is_pressed());
    }

    #[test]
    fn drag_is_not_a_tap() {
        let mut t = TouchTracker::new(4.0);
        t.begin(0, Vec2::ZERO);
        t.update(0, Vec2::new(6.0, 0.0));
        assert_eq!(t.end(0), TouchOutcome::Ignored);
    }

    #[test]
    fn small_jitter_is_still_a_tap() {
        let mut t = TouchTracker::new(4.0);
        t.begin(0, Vec2::ZERO);
        t.update(0, Vec2::new(1.0, 1.5));
        assert_eq!(t.end(0), TouchOutcome::Tap);
    }

    #[test]
    fn second_finger_is_ignored() {
        let mut t = TouchTracker::new(4.0);
        t.begin(0, Vec2::ZERO);
        t.begin(1, Vec2::ONE);
        assert_eq!(t.end(1), TouchOutcome::Ignored);
        assert!(!t.is_pressed());
    }

    #[test]
    fn end_without_begin_is_ignored() {
        let mut t = TouchTracker::default();
        assert_eq!(t.end(0), TouchOutcome::Ignored);
    }
}
