use glam::Vec3;

/// Measures how fast the player is moving, from one tick to the next.
///
/// Only the last position and the last sample are kept. Ticks with no elapsed time (or a
/// negative or non-finite one) are skipped entirely: the previous sample is returned and the
/// last position is left where it was, so the next real tick measures across both.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SpeedTracker {
    last_position: Vec3,
    speed: f32,
}

impl SpeedTracker {
    /// Start tracking from `initial_position`
    pub fn new(initial_position: Vec3) -> Self {
        Self {
            last_position: initial_position,
            speed: 0.0,
        }
    }

    /// Record `current_position` after `elapsed_seconds` and return the speed in metres per second
    pub fn update(&mut self, current_position: Vec3, elapsed_seconds: f32) -> f32 {
        if !(elapsed_seconds > 0.0 && elapsed_seconds.is_finite()) {
            log::trace!("[LOCOMOTION_SPEED] Skipping sample, elapsed time was {elapsed_seconds}");
            return self.speed;
        }

        self.speed = self.last_position.distance(current_position) / elapsed_seconds;
        self.last_position = current_position;
        self.speed
    }

    /// The most recent sample
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// The position recorded by the most recent update
    pub fn last_position(&self) -> Vec3 {
        self.last_position
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_speed_between_two_positions() {
        let p0 = Vec3::new(1.0, 0.0, 2.0);
        let p1 = Vec3::new(4.0, 0.0, 6.0);
        let mut tracker = SpeedTracker::default();

        tracker.update(p0, 0.5);
        let speed = tracker.update(p1, 0.5);

        assert_relative_eq!(speed, 10.0);
        assert_relative_eq!(tracker.speed(), 10.0);
        assert_eq!(tracker.last_position(), p1);
    }

    #[test]
    fn test_stationary_player_has_no_speed() {
        let mut tracker = SpeedTracker::new(Vec3::new(0.0, 1.7, 0.0));
        tracker.update(Vec3::new(0.0, 1.7, 1.0), 1.0);
        tracker.update(Vec3::new(0.0, 1.7, 1.0), 1.0 / 72.0);
        assert_relative_eq!(tracker.speed(), 0.0);
    }

    #[test]
    fn test_zero_elapsed_time_keeps_previous_sample() {
        let mut tracker = SpeedTracker::new(Vec3::ZERO);
        assert_relative_eq!(tracker.update(Vec3::X, 0.5), 2.0);

        // No time has passed, so nothing is measured
        assert_relative_eq!(tracker.update(Vec3::X * 5.0, 0.0), 2.0);
        assert_relative_eq!(tracker.update(Vec3::X * 5.0, -1.0), 2.0);
        assert_relative_eq!(tracker.update(Vec3::X * 5.0, f32::NAN), 2.0);
        assert_eq!(tracker.last_position(), Vec3::X);

        // The next real tick measures from the last recorded position
        assert_relative_eq!(tracker.update(Vec3::X * 5.0, 1.0), 4.0);
    }
}
