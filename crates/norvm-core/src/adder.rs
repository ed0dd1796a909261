use crate::bootstrap::{negate, select_if};
use crate::logic::{and, bool_and, bool_or, bool_xor, or};
use crate::{BitTable, BitWidth, Word};

/// One-bit full adder. Returns `(sum, carry_out)`.
#[inline]
pub fn full_adder(a: bool, b: bool, carry_in: bool) -> (bool, bool) {
    let sum = bool_xor(bool_xor(a, b), carry_in);
    let carry_out = bool_or(
        bool_and(a, b),
        bool_or(bool_and(a, carry_in), bool_and(b, carry_in)),
    );
    (sum, carry_out)
}

/// Ripple-carry addition over the low `width` bits.
///
/// The carry out of the top bit is discarded; bits above `width` in the
/// result are zero.
pub fn add(a: Word, b: Word, width: BitWidth) -> Word {
    let table = BitTable::global();
    let mut result = 0;
    let mut carry = false;
    for i in 0..width.bits() {
        let mask = table.bit(i);
        let a_bit = and(mask, a) != 0;
        let b_bit = and(mask, b) != 0;
        let (sum, carry_out) = full_adder(a_bit, b_bit, carry);
        carry = carry_out;
        result = or(result, select_if(mask, 0, sum));
    }
    result
}

#[inline]
pub fn subtract(a: Word, b: Word, width: BitWidth) -> Word {
    add(a, negate(b), width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_adder_truth_table() {
        for a in [false, true] {
            for b in [false, true] {
                for c in [false, true] {
                    let total = u8::from(a) + u8::from(b) + u8::from(c);
                    assert_eq!(full_adder(a, b, c), (total & 1 == 1, total >= 2));
                }
            }
        }
    }

    #[test]
    fn add_wraps_at_width() {
        assert_eq!(add(200, 100, BitWidth::W8), 44);
        assert_eq!(add(0xffff, 1, BitWidth::W16), 0);
        assert_eq!(add(-1, 1, BitWidth::W32), 0);
        assert_eq!(add(i32::MAX, 1, BitWidth::W32), i32::MIN);
        assert_eq!(add(i32::MIN, i32::MIN, BitWidth::W32), 0);
    }

    #[test]
    fn subtract_borrows_through_width() {
        assert_eq!(subtract(5, 7, BitWidth::W8), 0xfe);
        assert_eq!(subtract(0, 1, BitWidth::W16), 0xffff);
        assert_eq!(subtract(0, 1, BitWidth::W32), -1);
        assert_eq!(subtract(i32::MIN, 1, BitWidth::W32), i32::MAX);
    }

    #[test]
    fn add_ignores_operand_bits_above_width() {
        assert_eq!(add(0x1234_5601, 0x7700_0002, BitWidth::W8), 3);
    }
}
