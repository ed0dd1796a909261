//! Conditional-jump predicates over [`Flags`].
//!
//! Each condition maps to a [`Formula`] in a single table; evaluation goes
//! through the gate-level boolean operations.

use core::fmt;
use core::str::FromStr;

use crate::flags::{Flag, Flags};
use crate::logic::{bool_and, bool_not, bool_or, bool_xor};
use crate::Error;

use self::Formula::{All, Any, One};
use self::Term::{Agree, Clear, Differ, Set};
use crate::flags::Flag::{Cf, Of, Pf, Sf, Zf};

/// A single flag, its negation, or the agreement of two flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Term {
    Set(Flag),
    Clear(Flag),
    /// The two flags differ (`SF != OF` for signed less-than).
    Differ(Flag, Flag),
    /// The two flags agree.
    Agree(Flag, Flag),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Formula {
    One(Term),
    Any(Term, Term),
    All(Term, Term),
}

impl Term {
    fn eval(self, flags: Flags) -> bool {
        match self {
            Term::Set(flag) => bool_or(flags.get(flag), flags.get(flag)),
            Term::Clear(flag) => bool_not(flags.get(flag)),
            Term::Differ(x, y) => bool_xor(flags.get(x), flags.get(y)),
            Term::Agree(x, y) => bool_not(bool_xor(flags.get(x), flags.get(y))),
        }
    }
}

impl Formula {
    pub fn eval(self, flags: Flags) -> bool {
        match self {
            Formula::One(t) => t.eval(flags),
            Formula::Any(x, y) => bool_or(x.eval(flags), y.eval(flags)),
            Formula::All(x, y) => bool_and(x.eval(flags), y.eval(flags)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cond {
    A,
    Ae,
    B,
    Be,
    C,
    E,
    G,
    Ge,
    L,
    Le,
    Na,
    Nae,
    Nb,
    Nbe,
    Nc,
    Ne,
    Ng,
    Nge,
    Nl,
    Nle,
    No,
    Np,
    Ns,
    Nz,
    O,
    P,
    Pe,
    Po,
    S,
    Z,
}

const TABLE: [(Cond, &str, Formula); 30] = [
    (Cond::A, "ja", All(Clear(Cf), Clear(Zf))),
    (Cond::Ae, "jae", One(Clear(Cf))),
    (Cond::B, "jb", One(Set(Cf))),
    (Cond::Be, "jbe", Any(Set(Cf), Set(Zf))),
    (Cond::C, "jc", One(Set(Cf))),
    (Cond::E, "je", One(Set(Zf))),
    (Cond::G, "jg", All(Clear(Zf), Agree(Sf, Of))),
    (Cond::Ge, "jge", One(Agree(Sf, Of))),
    (Cond::L, "jl", One(Differ(Sf, Of))),
    (Cond::Le, "jle", Any(Set(Zf), Differ(Sf, Of))),
    (Cond::Na, "jna", Any(Set(Cf), Set(Zf))),
    (Cond::Nae, "jnae", One(Set(Cf))),
    (Cond::Nb, "jnb", One(Clear(Cf))),
    (Cond::Nbe, "jnbe", All(Clear(Cf), Clear(Zf))),
    (Cond::Nc, "jnc", One(Clear(Cf))),
    (Cond::Ne, "jne", One(Clear(Zf))),
    (Cond::Ng, "jng", Any(Set(Zf), Differ(Sf, Of))),
    (Cond::Nge, "jnge", One(Differ(Sf, Of))),
    (Cond::Nl, "jnl", One(Agree(Sf, Of))),
    (Cond::Nle, "jnle", All(Clear(Zf), Agree(Sf, Of))),
    (Cond::No, "jno", One(Clear(Of))),
    (Cond::Np, "jnp", One(Clear(Pf))),
    (Cond::Ns, "jns", One(Clear(Sf))),
    (Cond::Nz, "jnz", One(Clear(Zf))),
    (Cond::O, "jo", One(Set(Of))),
    (Cond::P, "jp", One(Set(Pf))),
    (Cond::Pe, "jpe", One(Set(Pf))),
    (Cond::Po, "jpo", One(Clear(Pf))),
    (Cond::S, "js", One(Set(Sf))),
    (Cond::Z, "jz", One(Set(Zf))),
];

impl Cond {
    pub const ALL: [Cond; 30] = {
        let mut all = [Cond::A; 30];
        let mut i = 0;
        while i < TABLE.len() {
            all[i] = TABLE[i].0;
            i += 1;
        }
        all
    };

    #[inline]
    const fn entry(self) -> (Cond, &'static str, Formula) {
        // Variants are declared in table order.
        TABLE[self as usize]
    }

    pub const fn mnemonic(self) -> &'static str {
        self.entry().1
    }

    pub const fn formula(self) -> Formula {
        self.entry().2
    }

    /// Whether the jump would be taken for `flags`.
    #[inline]
    pub fn eval(self, flags: Flags) -> bool {
        self.formula().eval(flags)
    }
}

impl fmt::Display for Cond {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

impl FromStr for Cond {
    type Err = Error;

    /// Accepts `jnle`, `NLE`, `Jg`, ... (the leading `j` is optional).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        let name = lower.strip_prefix('j').unwrap_or(&lower);
        TABLE
            .iter()
            .find(|(_, mnemonic, _)| &mnemonic[1..] == name)
            .map(|(cond, _, _)| *cond)
            .ok_or_else(|| Error::UnknownCondition(s.to_string()))
    }
}
