//! Negate/increment/decrement bootstrap and the branchless select.
//!
//! `negate` is the only place a native `+ 1` appears. `increment`,
//! `decrement` and the `select_if` mask are all built from it, so a defect in
//! this module corrupts everything above it.

use crate::logic::{and, not, or};
use crate::Word;

/// Two's complement negation. Wraps at `i32::MIN`.
#[inline]
pub fn negate(a: Word) -> Word {
    not(a).wrapping_add(1)
}

#[inline]
pub fn increment(a: Word) -> Word {
    negate(not(a))
}

#[inline]
pub fn decrement(a: Word) -> Word {
    not(negate(a))
}

/// Returns `true_value` when `condition` holds, otherwise `false_value`.
///
/// The choice is made with a mask instead of a branch: negating the
/// condition as 0/1 gives all zeros or all ones.
#[inline]
pub fn select_if(true_value: Word, false_value: Word, condition: bool) -> Word {
    let mask = select_mask(condition);
    or(and(true_value, mask), and(false_value, not(mask)))
}

#[inline]
fn select_mask(condition: bool) -> Word {
    negate(Word::from(condition))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negate_at_boundaries() {
        assert_eq!(negate(0), 0);
        assert_eq!(negate(1), -1);
        assert_eq!(negate(-1), 1);
        assert_eq!(negate(i32::MAX), -i32::MAX);
        assert_eq!(negate(i32::MIN), i32::MIN);
    }

    #[test]
    fn increment_and_decrement_wrap() {
        assert_eq!(increment(0), 1);
        assert_eq!(increment(-1), 0);
        assert_eq!(increment(i32::MAX), i32::MIN);
        assert_eq!(decrement(0), -1);
        assert_eq!(decrement(1), 0);
        assert_eq!(decrement(i32::MIN), i32::MAX);
        for v in [0, 1, -1, 42, i32::MIN, i32::MAX] {
            assert_eq!(decrement(increment(v)), v);
        }
    }

    #[test]
    fn select_if_picks_by_condition() {
        for (t, f) in [(0, -1), (-1, 0), (i32::MIN, i32::MAX), (0x37, 0x30), (7, 7)] {
            assert_eq!(select_if(t, f, true), t);
            assert_eq!(select_if(t, f, false), f);
        }
    }

    #[test]
    fn select_mask_is_all_or_nothing() {
        assert_eq!(select_mask(true), -1);
        assert_eq!(select_mask(false), 0);
        assert_eq!(select_if(-1, 0, true), -1);
        assert_eq!(select_if(-1, 0, false), 0);
        assert_eq!(select_if(i32::MIN, i32::MAX, true), i32::MIN);
        assert_eq!(select_if(i32::MAX, i32::MIN, false), i32::MIN);
    }
}
