use crate::bootstrap::{decrement, select_if};
use crate::logic::{and, or};
use crate::{BitTable, BitWidth, Word};

/// Logical left shift over the low `width` bits.
///
/// The effective amount is `amount % width`. Bits pushed past the top of the
/// width are dropped; there is no rotation.
pub fn shift_left(a: Word, amount: u8, width: BitWidth) -> Word {
    let table = BitTable::global();
    let bits = width.bits();
    let shift = amount % bits;

    // Positions whose shifted image still lands inside the width.
    let mut span = bits;
    for _ in 0..shift {
        span = decrement(Word::from(span)) as u8;
    }

    let mut result = 0;
    for i in 0..span {
        let a_bit = and(a, table.bit(i)) != 0;
        result = or(result, select_if(table.bit(i + shift), 0, a_bit));
    }
    result
}
