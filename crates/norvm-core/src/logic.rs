//! The gate primitive and the logic derived from it.
//!
//! The gate's truth table is `!(a & b)`. `not`, `or`, `and` and `xor` are
//! spelled out as gate compositions and must stay that way: the bit-exact
//! agreement with native operators is what the tests check.

use crate::Word;

#[inline]
pub fn nor(a: Word, b: Word) -> Word {
    !(a & b)
}

#[inline]
pub fn not(a: Word) -> Word {
    nor(a, a)
}

#[inline]
pub fn or(a: Word, b: Word) -> Word {
    nor(nor(a, a), nor(b, b))
}

#[inline]
pub fn and(a: Word, b: Word) -> Word {
    nor(nor(a, b), nor(a, b))
}

#[inline]
pub fn xor(a: Word, b: Word) -> Word {
    or(and(a, not(b)), and(not(a), b))
}

// Single-bit variants. Each one runs the word formula on 0/1 inputs and masks
// the result back down to bit 0.

#[inline]
pub fn bool_not(a: bool) -> bool {
    and(not(and(Word::from(a), 1)), 1) != 0
}

#[inline]
pub fn bool_or(a: bool, b: bool) -> bool {
    and(or(Word::from(a), Word::from(b)), 1) != 0
}

#[inline]
pub fn bool_and(a: bool, b: bool) -> bool {
    and(and(Word::from(a), Word::from(b)), 1) != 0
}

#[inline]
pub fn bool_xor(a: bool, b: bool) -> bool {
    bool_or(bool_and(a, bool_not(b)), bool_and(bool_not(a), b))
}
