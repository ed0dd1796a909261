use crate::adder::add;
use crate::bootstrap::{decrement, negate};
use crate::logic::bool_xor;
use crate::shift::shift_left;
use crate::{BitTable, BitWidth, Word};

/// `|v|` reduced to the low `width` bits. The product modulo 2^width only
/// depends on these, and it keeps the scan below from walking a 32-bit
/// magnitude in steps sized for a narrower width.
fn magnitude(v: Word, width: BitWidth) -> u32 {
    v.unsigned_abs() & width.mask()
}

/// Signed multiplication over the low `width` bits.
///
/// Works on magnitudes: the larger magnitude is consumed one dominant bit at
/// a time, each step adding the smaller magnitude shifted by that bit's
/// index. The sign is reapplied with [`negate`] at the end.
///
/// Sign detection, magnitudes and the operand swap use native arithmetic;
/// only the accumulation goes through the gate-level adder and shifter.
pub fn multiply(a: Word, b: Word, width: BitWidth) -> Word {
    let table = BitTable::global();
    let negative = bool_xor(a < 0, b < 0);
    let mut a = magnitude(a, width);
    let mut b = magnitude(b, width);

    if a < b {
        a = a.wrapping_add(b);
        b = a.wrapping_sub(b);
        a = a.wrapping_sub(b);
    }

    // The scan stops one short of the top bit, so a dominant bit there is
    // consumed as two steps of the bit below it.
    let top = width.bits() - 1;
    let mut result = 0;
    while a != 0 {
        let mut index = 0u8;
        while (table.bit(index) as u32) <= a && index < top {
            index += 1;
        }
        // `a >= 1`, so bit 0 always passes and `index >= 1`.
        let k = decrement(Word::from(index)) as u8;
        result = add(shift_left(b as Word, k, width), result, width);
        a -= table.bit(k) as u32;
    }

    if negative {
        result = negate(result);
    }
    tracing::trace!(%width, result, "multiply");
    result
}
