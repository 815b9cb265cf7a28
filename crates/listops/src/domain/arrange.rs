//! Split-half arranging
//!
//! Filters absent values out of a list, then sorts its first half in
//! descending order and its second half in ascending order. Both halves are
//! bubble sorted in place on the filtered working list.

use crate::constants::EVEN_SIZE_MESSAGE;
use thiserror::Error;

/// Arrange errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArrangeError {
    /// Filtered list size is zero or odd
    #[error("{}", EVEN_SIZE_MESSAGE)]
    InvalidArgument { size: usize },
    /// Swap index outside the list
    #[error("Index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}

/// Split a list into a descending first half and an ascending second half
///
/// 1. Drop absent entries, keeping order
/// 2. Reject a filtered size that is zero or odd
/// 3. Bubble sort `[0, mid)` descending and `[mid, size)` ascending
///
/// An absent list yields an empty output.
pub fn split_and_arrange(list: Option<&[Option<i32>]>) -> Result<Vec<i32>, ArrangeError> {
    let Some(list) = list else {
        return Ok(Vec::new());
    };

    let mut filtered: Vec<i32> = list.iter().flatten().copied().collect();
    let size = filtered.len();

    if size == 0 || size % 2 != 0 {
        log::warn!("rejecting list with {} present values", size);
        return Err(ArrangeError::InvalidArgument { size });
    }

    let mid = size / 2;
    let (first, second) = filtered.split_at_mut(mid);
    bubble_sort_by(first, |left, right| left < right)?;
    bubble_sort_by(second, |left, right| left > right)?;

    log::debug!("arranged {} values around midpoint {}", size, mid);
    Ok(filtered)
}

/// Exchange the elements at `i` and `j`
///
/// The list is left untouched when either index is out of range.
pub fn swap<T>(list: &mut [T], i: usize, j: usize) -> Result<(), ArrangeError> {
    let len = list.len();
    if let Some(&index) = [i, j].iter().find(|&&index| index >= len) {
        return Err(ArrangeError::IndexOutOfBounds { index, len });
    }

    list.swap(i, j);
    Ok(())
}

/// In-place bubble sort, swapping adjacent pairs while `should_swap(left, right)`
///
/// Each pass carries the extreme element to the end of the unsorted range,
/// so pass `i` compares one pair fewer than pass `i - 1`.
fn bubble_sort_by<F>(list: &mut [i32], should_swap: F) -> Result<(), ArrangeError>
where
    F: Fn(i32, i32) -> bool,
{
    let len = list.len();

    for pass in 0..len.saturating_sub(1) {
        for j in 0..len - pass - 1 {
            if should_swap(list[j], list[j + 1]) {
                swap(list, j, j + 1)?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // split_and_arrange tests
    // =========================================================================

    #[test]
    fn test_absent_list() {
        assert_eq!(split_and_arrange(None), Ok(vec![]));
    }

    #[test]
    fn test_filters_and_arranges() {
        let list = [Some(2), Some(2), Some(3), Some(3), Some(4), None, Some(8)];
        assert_eq!(split_and_arrange(Some(&list)), Ok(vec![3, 2, 2, 3, 4, 8]));
    }

    #[test]
    fn test_two_elements() {
        let list = [Some(5), Some(9)];
        assert_eq!(split_and_arrange(Some(&list)), Ok(vec![5, 9]));
    }

    #[test]
    fn test_reversed_input() {
        let list = [Some(1), Some(2), Some(3), Some(6), Some(5), Some(4)];
        assert_eq!(split_and_arrange(Some(&list)), Ok(vec![3, 2, 1, 4, 5, 6]));
    }

    #[test]
    fn test_negative_values() {
        let list = [Some(-1), Some(-7), Some(0), Some(10), Some(-10), Some(3)];
        assert_eq!(
            split_and_arrange(Some(&list)),
            Ok(vec![0, -1, -7, -10, 3, 10])
        );
    }

    #[test]
    fn test_odd_size_rejected() {
        let list = [Some(1), Some(2), Some(3)];
        assert_eq!(
            split_and_arrange(Some(&list)),
            Err(ArrangeError::InvalidArgument { size: 3 })
        );
    }

    #[test]
    fn test_empty_rejected() {
        assert_eq!(
            split_and_arrange(Some(&[])),
            Err(ArrangeError::InvalidArgument { size: 0 })
        );
        assert_eq!(
            split_and_arrange(Some(&[None, None])),
            Err(ArrangeError::InvalidArgument { size: 0 })
        );
    }

    #[test]
    fn test_invalid_argument_message() {
        let err = ArrangeError::InvalidArgument { size: 3 };
        assert_eq!(err.to_string(), "Provide Even Value Index");
    }

    // =========================================================================
    // swap tests
    // =========================================================================

    #[test]
    fn test_swap_ends() {
        let mut list = vec![1, 2, 3];
        swap(&mut list, 0, 2).unwrap();
        assert_eq!(list, vec![3, 2, 1]);
    }

    #[test]
    fn test_swap_same_index() {
        let mut list = vec![1, 2];
        swap(&mut list, 1, 1).unwrap();
        assert_eq!(list, vec![1, 2]);
    }

    #[test]
    fn test_swap_out_of_bounds() {
        let mut list = vec![1, 2];
        assert_eq!(
            swap(&mut list, 0, 5),
            Err(ArrangeError::IndexOutOfBounds { index: 5, len: 2 })
        );
        assert_eq!(list, vec![1, 2]);
    }

    #[test]
    fn test_swap_first_index_reported() {
        let mut list: Vec<i32> = vec![];
        assert_eq!(
            swap(&mut list, 3, 4),
            Err(ArrangeError::IndexOutOfBounds { index: 3, len: 0 })
        );
    }

    // =========================================================================
    // bubble_sort_by tests
    // =========================================================================

    #[test]
    fn test_bubble_sort_empty_and_single() {
        let mut empty: Vec<i32> = vec![];
        bubble_sort_by(&mut empty, |a, b| a > b).unwrap();
        assert!(empty.is_empty());

        let mut single = vec![7];
        bubble_sort_by(&mut single, |a, b| a > b).unwrap();
        assert_eq!(single, vec![7]);
    }

    #[test]
    fn test_bubble_sort_matches_std() {
        let mut list = vec![9, -2, 4, 4, 0, 13, -8, 1];
        let mut expected = list.clone();
        expected.sort_unstable();

        bubble_sort_by(&mut list, |a, b| a > b).unwrap();
        assert_eq!(list, expected);
    }
}
