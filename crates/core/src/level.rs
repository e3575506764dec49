//! Level curve and fall speed
//!
//! `level = max(1, score / step + 1)`; the fall interval shrinks by a fixed
//! amount per level until it reaches the floor.

use crate::config::GameConfig;

/// Level for a given score.
///
/// # Examples
///
/// ```
/// use falling_2048_core::level_for_score;
///
/// assert_eq!(level_for_score(0, 1000), 1);
/// assert_eq!(level_for_score(999, 1000), 1);
/// assert_eq!(level_for_score(1000, 1000), 2);
/// assert_eq!(level_for_score(5400, 1000), 6);
/// ```
pub fn level_for_score(score: u32, step: u32) -> u32 {
    (score / step.max(1)).saturating_add(1).max(1)
}

/// Fall interval for a level: `max(floor, base - (level - 1) * step)`.
pub fn fall_interval_ms(level: u32, config: &GameConfig) -> u32 {
    let reduction = level.saturating_sub(1).saturating_mul(config.fall_step_ms);
    config
        .base_fall_ms
        .saturating_sub(reduction)
        .max(config.fall_floor_ms)
}
