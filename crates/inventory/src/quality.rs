//! Bounded quality arithmetic.

/// Lowest quality any item can fall to.
pub const MIN_QUALITY: i32 = 0;

/// Highest quality a non-legendary item can reach.
pub const MAX_QUALITY: i32 = 50;

/// Fixed quality of legendary items.
pub const LEGENDARY_QUALITY: i32 = 80;

/// Apply one logical quality step, clamped to `[MIN_QUALITY, MAX_QUALITY]`.
///
/// Callers stacking several adjustments call this once per step so each one
/// respects the bounds on its own. A value already beyond the bound it moves
/// toward is left as is: the step never drags out-of-range input back into
/// range, it only refuses to push further.
pub fn clamped_adjust(quality: i32, delta: i32) -> i32 {
    if delta > 0 {
        if quality >= MAX_QUALITY {
            quality
        } else {
            quality.saturating_add(delta).min(MAX_QUALITY)
        }
    } else if delta < 0 {
        if quality <= MIN_QUALITY {
            quality
        } else {
            quality.saturating_add(delta).max(MIN_QUALITY)
        }
    } else {
        quality
    }
}
