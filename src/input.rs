//! Pointer input mapped onto the bucket
//!
//! Desktop uses pointer lock and relative mouse movement. Touch devices drag:
//! the bucket follows the distance from where the finger went down, scaled up
//! on wide screens. Neither mode cares whether a round is running.

use crate::consts::{BUCKET_START_X, BUCKET_WIDTH, POINTER_LOCK_DIVISOR, SWIPE_VIEWPORT_STEP};
use crate::sim::body::clamp_center_x;

/// How pointer motion becomes bucket motion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Relative mouse deltas while the pointer is locked
    PointerLock,
    /// Absolute drag distance since pointer down
    Swipe,
}

impl InputMode {
    pub fn for_device(desktop: bool) -> Self {
        if desktop {
            InputMode::PointerLock
        } else {
            InputMode::Swipe
        }
    }
}

/// One pointer move as reported by the platform
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerMotion {
    /// Horizontal movement since the last event (pointer lock)
    pub movement_x: f32,
    /// Current pointer x in screen pixels
    pub x: f32,
    /// Pointer is locked to the canvas
    pub locked: bool,
    /// Event came from a press; its movement values are unreliable
    pub from_click: bool,
}

/// Swipe multiplier for a viewport: one step per 200 CSS pixels, at least 1
pub fn swipe_multiplier(viewport_width: f32) -> f32 {
    (viewport_width / SWIPE_VIEWPORT_STEP).floor().max(1.0)
}

#[derive(Debug, Clone)]
pub struct InputMapper {
    pub mode: InputMode,
    /// Armed on press, disarmed on release
    pub can_swipe: bool,
    /// Bucket x when the current drag began
    relative_x: f32,
    /// Pointer x at the last press
    down_x: f32,
    swipe_multiplier: f32,
    pointer_divisor: f32,
}

impl InputMapper {
    pub fn new(mode: InputMode, viewport_width: f32) -> Self {
        Self {
            mode,
            can_swipe: false,
            relative_x: BUCKET_START_X,
            down_x: 0.0,
            swipe_multiplier: swipe_multiplier(viewport_width),
            pointer_divisor: POINTER_LOCK_DIVISOR,
        }
    }

    pub fn with_pointer_divisor(mut self, divisor: f32) -> Self {
        if divisor > 0.0 {
            self.pointer_divisor = divisor;
        }
        self
    }

    pub fn relative_x(&self) -> f32 {
        self.relative_x
    }

    /// Pointer went down at `x`
    pub fn press(&mut self, x: f32) {
        self.down_x = x;
        self.can_swipe = true;
    }

    /// Pointer went up; the next drag starts from where the bucket is now
    pub fn release(&mut self, bucket_x: f32) {
        self.relative_x = clamp_center_x(bucket_x, BUCKET_WIDTH);
        self.can_swipe = false;
    }

    /// Where the bucket should go for this motion, if anywhere
    pub fn pointer_moved(&self, motion: &PointerMotion, bucket_x: f32) -> Option<f32> {
        match self.mode {
            InputMode::PointerLock if motion.locked && !motion.from_click => {
                Some(bucket_x + motion.movement_x / self.pointer_divisor)
            }
            InputMode::Swipe if self.can_swipe => {
                let distance = motion.x - self.down_x;
                Some(self.relative_x + distance * self.swipe_multiplier)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SCREEN_WIDTH;

    #[test]
    fn test_swipe_multiplier() {
        assert_eq!(swipe_multiplier(100.0), 1.0);
        assert_eq!(swipe_multiplier(399.0), 1.0);
        assert_eq!(swipe_multiplier(400.0), 2.0);
        assert_eq!(swipe_multiplier(1920.0), 9.0);
    }

    #[test]
    fn test_pointer_lock_uses_half_movement() {
        let mapper = InputMapper::new(InputMode::PointerLock, 1024.0);
        let motion = PointerMotion {
            movement_x: 10.0,
            locked: true,
            ..Default::default()
        };
        assert_eq!(mapper.pointer_moved(&motion, 100.0), Some(105.0));
    }

    #[test]
    fn test_pointer_lock_ignores_unlocked_and_clicks() {
        let mapper = InputMapper::new(InputMode::PointerLock, 1024.0);
        let unlocked = PointerMotion {
            movement_x: 10.0,
            ..Default::default()
        };
        assert_eq!(mapper.pointer_moved(&unlocked, 100.0), None);

        let click = PointerMotion {
            movement_x: 10.0,
            locked: true,
            from_click: true,
            ..Default::default()
        };
        assert_eq!(mapper.pointer_moved(&click, 100.0), None);
    }

    #[test]
    fn test_swipe_only_while_armed() {
        let mut mapper = InputMapper::new(InputMode::Swipe, 800.0);
        let motion = PointerMotion {
            x: 60.0,
            ..Default::default()
        };
        assert_eq!(mapper.pointer_moved(&motion, 132.0), None);

        mapper.press(50.0);
        // 10px drag at 4x from the starting bucket x
        assert_eq!(mapper.pointer_moved(&motion, 132.0), Some(172.0));

        mapper.release(172.0);
        assert!(!mapper.can_swipe);
        assert_eq!(mapper.pointer_moved(&motion, 172.0), None);

        mapper.press(60.0);
        let back = PointerMotion {
            x: 55.0,
            ..Default::default()
        };
        assert_eq!(mapper.pointer_moved(&back, 172.0), Some(152.0));
    }

    #[test]
    fn test_release_clamps_reference() {
        let mut mapper = InputMapper::new(InputMode::Swipe, 200.0);
        mapper.release(-30.0);
        assert_eq!(mapper.relative_x(), BUCKET_WIDTH / 2.0);
        mapper.release(SCREEN_WIDTH + 30.0);
        assert_eq!(mapper.relative_x(), SCREEN_WIDTH - BUCKET_WIDTH / 2.0);
    }

    #[test]
    fn test_mode_per_device() {
        assert_eq!(InputMode::for_device(true), InputMode::PointerLock);
        assert_eq!(InputMode::for_device(false), InputMode::Swipe);
    }

    #[test]
    fn test_custom_divisor() {
        let mapper = InputMapper::new(InputMode::PointerLock, 800.0).with_pointer_divisor(4.0);
        let motion = PointerMotion {
            movement_x: -8.0,
            locked: true,
            ..Default::default()
        };
        assert_eq!(mapper.pointer_moved(&motion, 100.0), Some(98.0));
        let unchanged = InputMapper::new(InputMode::PointerLock, 800.0).with_pointer_divisor(0.0);
        assert_eq!(unchanged.pointer_moved(&motion, 100.0), Some(96.0));
    }
}
