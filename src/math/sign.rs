//! Unit steps toward a signed delta

/// Sign of `magnitude` as a step: -1, 0 or +1.
///
/// Loops walk a counter from a signed delta back to zero by subtracting this
/// step, so one loop body serves both directions.
#[inline]
pub const fn unit_step(magnitude: i32) -> i32 {
    (magnitude > 0) as i32 - (magnitude < 0) as i32
}
