//! Gate-level integer ALU.
//!
//! Every operation in this crate is composed from a single two-input gate
//! ([`nor`]). On top of it the crate builds:
//! - word and single-bit logic (`not`/`or`/`and`/`xor`)
//! - a branchless select and the negate/increment/decrement bootstrap
//! - a ripple-carry adder/subtractor and a logical left shift
//! - a comparison that produces x86-style status flags, plus the 30
//!   conditional-jump predicates over those flags
//! - a shift-and-add multiplier
//!
//! All arithmetic happens in a 32-bit signed container ([`Word`]). A
//! [`BitWidth`] selects how many low-order bits participate; bits above the
//! logical width are not part of the contract and callers that care must mask
//! them (see [`BitWidth::truncate`]).

#![forbid(unsafe_code)]

mod adder;
mod bootstrap;
mod cond;
mod error;
mod flags;
mod logic;
mod mov;
mod mul;
mod shift;
mod table;
mod width;

#[cfg(all(test, not(target_arch = "wasm32")))]
mod proptests;

pub use adder::{add, full_adder, subtract};
pub use bootstrap::{decrement, increment, negate, select_if};
pub use cond::{Cond, Formula, Term};
pub use error::{Error, Result};
pub use flags::{compare, Flag, Flags, RFlags};
pub use logic::{and, bool_and, bool_not, bool_or, bool_xor, nor, not, or, xor};
pub use mov::{mov_bool, mov_i16, mov_i32, mov_i8, mov_u16, mov_u32, mov_u8};
pub use mul::multiply;
pub use shift::shift_left;
pub use table::{initialize, BitTable, TABLE_LEN};
pub use width::BitWidth;

/// Native machine word every operation computes in.
pub type Word = i32;
