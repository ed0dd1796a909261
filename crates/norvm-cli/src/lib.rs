//! Login/serial check built twice: once with native integer arithmetic and
//! once entirely through the `norvm_core` gate-level ALU.

#![forbid(unsafe_code)]

pub mod hex;
pub mod serial;

pub use hex::SerialError;
pub use serial::{Engine, Report};
