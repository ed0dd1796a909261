//! Login value derivation and serial checks.

use core::fmt;
use core::str::FromStr;

use norvm_core::{add, compare, initialize, multiply, shift_left, xor, BitWidth, Cond, Word};
use serde::Serialize;

use crate::hex::{self, SerialError};

/// Constant mixed into the login value after every character.
pub const LOGIN_KEY: Word = 0x48AD_EEEF;

/// Which implementation of the check to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Engine {
    Native,
    Gated,
    Both,
}

impl Engine {
    pub fn runs_native(self) -> bool {
        matches!(self, Engine::Native | Engine::Both)
    }

    pub fn runs_gated(self) -> bool {
        matches!(self, Engine::Gated | Engine::Both)
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Engine::Native => "native",
            Engine::Gated => "gated",
            Engine::Both => "both",
        })
    }
}

impl FromStr for Engine {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "native" => Ok(Engine::Native),
            "gated" | "gate" => Ok(Engine::Gated),
            "both" => Ok(Engine::Both),
            other => Err(format!("unknown engine `{other}` (expected native, gated or both)")),
        }
    }
}

/// Per character `c`: `v = (((v << 2) + c) ^ KEY) * c`, wrapping at 32 bits.
pub fn login_value_native(login: &str) -> Word {
    login.bytes().fold(0, |value: Word, byte| {
        let c = Word::from(byte);
        let value = value << 2;
        let value = value.wrapping_add(c);
        let value = value ^ LOGIN_KEY;
        value.wrapping_mul(c)
    })
}

/// Same derivation as [`login_value_native`], through the gate-level ALU.
pub fn login_value_gated(login: &str) -> Word {
    let mut value = 0;
    for byte in login.bytes() {
        let c = Word::from(byte);
        value = shift_left(value, 2, BitWidth::W32);
        value = add(value, c, BitWidth::W32);
        value = xor(value, LOGIN_KEY);
        value = multiply(value, c, BitWidth::W32);
    }
    value
}

pub fn generate_serial(login: &str) -> String {
    hex::encode(login_value_native(login))
}

pub fn check_serial_native(login: &str, serial: &str) -> Result<bool, SerialError> {
    Ok(hex::decode_native(serial)? == login_value_native(login))
}

/// Compares with `cmp` + `je` instead of `==`.
pub fn check_serial_gated(login: &str, serial: &str) -> Result<bool, SerialError> {
    initialize();
    let expected = login_value_gated(login);
    let given = hex::decode_gated(serial)?;
    let flags = compare(expected, given, BitWidth::W32);
    tracing::debug!(login, serial, %flags, "gated serial comparison");
    Ok(Cond::E.eval(flags))
}

/// Outcome of checking one login/serial pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub login: String,
    pub serial: String,
    pub generated: bool,
    pub engine: Engine,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub native: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gated: Option<bool>,
}

impl Report {
    /// Checks `serial` against `login`, generating the serial when none is
    /// given.
    pub fn run(login: &str, serial: Option<&str>, engine: Engine) -> Result<Self, SerialError> {
        let generated = serial.is_none();
        let serial = serial.map_or_else(|| generate_serial(login), str::to_string);

        let native = engine
            .runs_native()
            .then(|| check_serial_native(login, &serial))
            .transpose()?;
        let gated = engine
            .runs_gated()
            .then(|| check_serial_gated(login, &serial))
            .transpose()?;

        Ok(Self {
            login: login.to_string(),
            serial,
            generated,
            engine,
            native,
            gated,
        })
    }

    /// True when every check that ran accepted the serial.
    pub fn passed(&self) -> bool {
        self.native.unwrap_or(true) && self.gated.unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_login_values() {
        assert_eq!(login_value_native(""), 0);
        assert_eq!(generate_serial("Rouse_"), "81E537F8");
        assert_eq!(generate_serial("A"), "74299A2E");
        assert_eq!(generate_serial("admin"), "4B1B945E");
    }

    #[test]
    fn engines_parse() {
        assert_eq!("Gated".parse::<Engine>(), Ok(Engine::Gated));
        assert_eq!("both".parse::<Engine>(), Ok(Engine::Both));
        assert!("fast".parse::<Engine>().is_err());
        assert!(Engine::Both.runs_native() && Engine::Both.runs_gated());
        assert!(!Engine::Native.runs_gated());
    }

    #[test]
    fn report_skips_engines_not_requested() {
        let report = Report::run("Rouse_", None, Engine::Native).unwrap();
        assert!(report.generated);
        assert_eq!(report.serial, "81E537F8");
        assert_eq!(report.native, Some(true));
        assert_eq!(report.gated, None);
        assert!(report.passed());

        let report = Report::run("Rouse_", Some("81E537F9"), Engine::Both).unwrap();
        assert!(!report.generated);
        assert_eq!(report.native, Some(false));
        assert_eq!(report.gated, Some(false));
        assert!(!report.passed());
    }
}
