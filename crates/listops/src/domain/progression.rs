//! Dual-base geometric progressions
//!
//! Generates `first^1, second^1, first^2, second^2, ...` truncated to a
//! requested length.

use crate::domain::blank::are_any_blank;

/// Generate an interleaved geometric progression of two bases
///
/// Even indices hold successive powers of `first`, odd indices successive
/// powers of `second`. Products wrap on 32-bit overflow.
///
/// Returns an empty list when any argument is absent or `size` is not positive.
pub fn geometric_progression(
    first: Option<i32>,
    second: Option<i32>,
    size: Option<i32>,
) -> Vec<i32> {
    if are_any_blank(&[&first, &second, &size]) {
        return Vec::new();
    }
    let (Some(first), Some(second), Some(size)) = (first, second, size) else {
        return Vec::new();
    };

    let len = usize::try_from(size).unwrap_or(0);
    let mut result = Vec::with_capacity(len);
    let mut first_power: i32 = 1;
    let mut second_power: i32 = 1;

    for i in 0..len {
        if i % 2 == 0 {
            first_power = first_power.wrapping_mul(first);
            result.push(first_power);
        } else {
            second_power = second_power.wrapping_mul(second);
            result.push(second_power);
        }
    }

    log::debug!("generated {} progression terms", result.len());
    result
}
