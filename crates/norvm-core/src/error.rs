use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised when converting external input into core types.
///
/// The arithmetic operations themselves are total and never return this type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("unsupported bit width {0} (expected 8, 16 or 32)")]
    UnsupportedWidth(u32),

    #[error("bit width `{0}` is not a number")]
    InvalidWidth(String),

    #[error("unknown condition code `{0}`")]
    UnknownCondition(String),
}
