//! Translation of raw keyboard and swipe input into directions.

use crate::game::constants::MINIMUM_SWIPE_DISTANCE;
use crate::game::direction::Direction;

impl Direction {
    /// Arrow key names as reported by browsers and most terminal front ends.
    pub fn from_key(key: &str) -> Option<Direction> {
        match key {
            "ArrowUp" => Some(Direction::Up),
            "ArrowDown" => Some(Direction::Down),
            "ArrowLeft" => Some(Direction::Left),
            "ArrowRight" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Resolve a swipe gesture by its dominant axis, then by sign.
    ///
    /// Screen coordinates: positive `delta_x` is rightward, positive `delta_y`
    /// is downward. Swipes shorter than [`MINIMUM_SWIPE_DISTANCE`] on the
    /// dominant axis are ignored.
    pub fn from_swipe(delta_x: i32, delta_y: i32) -> Option<Direction> {
        let (abs_x, abs_y) = (delta_x.unsigned_abs(), delta_y.unsigned_abs());
        let threshold = MINIMUM_SWIPE_DISTANCE.unsigned_abs();

        if abs_x > abs_y {
            if abs_x < threshold {
                return None;
            }
            Some(if delta_x > 0 { Direction::Right } else { Direction::Left })
        } else {
            if abs_y < threshold {
                return None;
            }
            Some(if delta_y > 0 { Direction::Down } else { Direction::Up })
        }
    }
}
