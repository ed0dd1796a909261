//! Register moves: copy a word through the logic unit and narrow it to the
//! destination type.

use crate::logic::or;
use crate::Word;

#[inline]
pub fn mov_i8(a: Word) -> i8 {
    or(a, a) as i8
}

#[inline]
pub fn mov_u8(a: Word) -> u8 {
    or(a, a) as u8
}

#[inline]
pub fn mov_i16(a: Word) -> i16 {
    or(a, a) as i16
}

#[inline]
pub fn mov_u16(a: Word) -> u16 {
    or(a, a) as u16
}

#[inline]
pub fn mov_i32(a: Word) -> i32 {
    or(a, a)
}

#[inline]
pub fn mov_u32(a: Word) -> u32 {
    or(a, a) as u32
}

/// Any non-zero word moves as `true`.
#[inline]
pub fn mov_bool(a: Word) -> bool {
    or(a, a) != 0
}
