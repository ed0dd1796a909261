//! Status flags and the comparison that produces them.

use core::fmt;

use bitflags::bitflags;

use crate::adder::full_adder;
use crate::bootstrap::{negate, select_if};
use crate::logic::{and, bool_and, bool_not};
use crate::{BitTable, BitWidth, Word};

bitflags! {
    /// [`Flags`] packed at their x86 EFLAGS bit positions.
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
    pub struct RFlags: u32 {
        const CF = 1 << 0;
        const PF = 1 << 2;
        const ZF = 1 << 6;
        const SF = 1 << 7;
        const OF = 1 << 11;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flag {
    Cf,
    Pf,
    Zf,
    Sf,
    Of,
}

impl Flag {
    pub const ALL: [Flag; 5] = [Flag::Cf, Flag::Pf, Flag::Zf, Flag::Sf, Flag::Of];

    pub const fn name(self) -> &'static str {
        match self {
            Flag::Cf => "CF",
            Flag::Pf => "PF",
            Flag::Zf => "ZF",
            Flag::Sf => "SF",
            Flag::Of => "OF",
        }
    }

    const fn rflag(self) -> RFlags {
        match self {
            Flag::Cf => RFlags::CF,
            Flag::Pf => RFlags::PF,
            Flag::Zf => RFlags::ZF,
            Flag::Sf => RFlags::SF,
            Flag::Of => RFlags::OF,
        }
    }
}

/// Result of [`compare`]. A plain value; nothing mutates it after the
/// comparison returns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Flags {
    pub cf: bool,
    pub pf: bool,
    pub zf: bool,
    pub sf: bool,
    pub of: bool,
}

impl Flags {
    #[inline]
    pub const fn get(&self, flag: Flag) -> bool {
        match flag {
            Flag::Cf => self.cf,
            Flag::Pf => self.pf,
            Flag::Zf => self.zf,
            Flag::Sf => self.sf,
            Flag::Of => self.of,
        }
    }

    pub fn to_rflags(self) -> RFlags {
        Flag::ALL
            .into_iter()
            .filter(|&flag| self.get(flag))
            .fold(RFlags::empty(), |acc, flag| acc | flag.rflag())
    }

    pub fn from_rflags(rflags: RFlags) -> Self {
        Self {
            cf: rflags.contains(RFlags::CF),
            pf: rflags.contains(RFlags::PF),
            zf: rflags.contains(RFlags::ZF),
            sf: rflags.contains(RFlags::SF),
            of: rflags.contains(RFlags::OF),
        }
    }
}

impl fmt::Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for flag in Flag::ALL.into_iter().filter(|&flag| self.get(flag)) {
            if !first {
                f.write_str("|")?;
            }
            f.write_str(flag.name())?;
            first = false;
        }
        if first {
            f.write_str("-")?;
        }
        Ok(())
    }
}

/// Compares `a` with `b` over the low `width` bits, as `cmp a, b` would.
///
/// The scan runs from bit 0 upward:
/// - CF is cleared where `a` has a bit `b` lacks, then set where `b` has a
///   bit `a` lacks. The second rule runs after the first, so the highest
///   differing bit decides.
/// - SF is the running sum bit of `a + negate(b)`; its value at the top bit
///   is the final SF.
/// - ZF starts set and is cleared for good by the first set sum bit.
/// - PF starts set and toggles on every set sum bit below bit 8.
/// - OF is decided once after the scan from the top bits of `a` and `b` and
///   the final SF.
pub fn compare(a: Word, b: Word, width: BitWidth) -> Flags {
    let table = BitTable::global();
    let negated_b = negate(b);

    let mut flags = Flags {
        cf: false,
        pf: true,
        zf: true,
        sf: false,
        of: false,
    };
    let mut carry = false;
    let mut a_bit = false;
    let mut b_bit = false;

    for i in 0..width.bits() {
        let mask = table.bit(i);
        a_bit = and(mask, a) != 0;
        b_bit = and(mask, b) != 0;
        let n_bit = and(mask, negated_b) != 0;

        flags.cf = select_if(0, Word::from(flags.cf), bool_and(a_bit, bool_not(b_bit))) != 0;
        flags.cf = select_if(1, Word::from(flags.cf), bool_and(b_bit, bool_not(a_bit))) != 0;

        let (sum, carry_out) = full_adder(a_bit, n_bit, carry);
        carry = carry_out;
        flags.sf = sum;

        if flags.sf {
            flags.zf = false;
            flags.pf =
                select_if(Word::from(bool_not(flags.pf)), Word::from(flags.pf), i < 8) != 0;
        }
    }

    // Positive minus negative went negative, or negative minus positive went
    // non-negative.
    flags.of = select_if(
        1,
        Word::from(flags.of),
        bool_and(bool_and(bool_not(a_bit), b_bit), flags.sf),
    ) != 0;
    flags.of = select_if(
        1,
        Word::from(flags.of),
        bool_and(bool_and(a_bit, bool_not(b_bit)), bool_not(flags.sf)),
    ) != 0;

    tracing::trace!(a, b, %width, flags = %flags, "compare");
    flags
}
