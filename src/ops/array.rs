//! Integer sequence operations over already bounds-checked slices.

use crate::common::error::{BridgeError, BridgeResult};

/// Exact sum, saturated to the `i32` range once at the end.
///
/// Accumulating in `i128` means intermediate values never clamp, so the result
/// does not depend on element order.
pub fn sum(items: &[i32]) -> i32 {
    let total: i128 = items.iter().map(|&v| i128::from(v)).sum();
    i32::try_from(total).unwrap_or(if total < 0 { i32::MIN } else { i32::MAX })
}

pub fn max(items: &[i32]) -> BridgeResult<i32> {
    items
        .iter()
        .copied()
        .max()
        .ok_or(BridgeError::EmptyInput("arr"))
}

/// Ascending, stable sort.
pub fn sort(items: &mut [i32]) {
    items.sort();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sums() {
        assert_eq!(sum(&[1, 2, 3, 4, 5]), 15);
        assert_eq!(sum(&[]), 0);
        assert_eq!(sum(&[-4, 4]), 0);
    }

    #[test]
    fn sum_saturates_only_on_the_final_total() {
        assert_eq!(sum(&[i32::MAX, 1, -1]), i32::MAX);
        assert_eq!(sum(&[1, -1, i32::MAX]), i32::MAX);
        assert_eq!(sum(&[i32::MAX, i32::MAX]), i32::MAX);
        assert_eq!(sum(&[i32::MIN, i32::MIN]), i32::MIN);
        assert_eq!(sum(&[i32::MAX, i32::MAX, i32::MIN, i32::MIN]), -2);
    }

    #[test]
    fn max_of_sequence() {
        assert_eq!(max(&[1, 2, 3, 4, 5]), Ok(5));
        assert_eq!(max(&[-7]), Ok(-7));
        assert_eq!(max(&[]), Err(BridgeError::EmptyInput("arr")));
    }

    #[test]
    fn sorts_ascending() {
        let mut items = [5, 2, 8, 1, 9, 2];
        sort(&mut items);
        assert_eq!(items, [1, 2, 2, 5, 8, 9]);
    }
}
