use std::error::Error;
use std::fmt;

pub type QuatResult<T> = Result<T, QuatError>;

#[derive(Debug, Clone, PartialEq)]
pub enum QuatError {
    /// The operand had zero norm. Holds the name of the failing operation.
    DivisionByZero(&'static str),
    InvalidArgument(String),
}
impl fmt::Display for QuatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuatError::DivisionByZero(op) => {
                write!(f, "
                    \rDivision by zero: cannot {op} a zero quaternion",
                )
            }
            QuatError::InvalidArgument(msg) => {
                write!(f, "
                    \rInvalid argument: {msg}",
                )
            }
        }
    }
}
impl Error for QuatError {}

#[derive(Debug)]
pub enum ConfigError {
    MissingValue(String),
    InvalidNumber(String, String),
    UnknownFlag(String),
}
impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingValue(flag) => {
                write!(f, "
                    \rMissing value for {flag}",
                )
            }
            ConfigError::InvalidNumber(flag, arg) => {
                write!(f, "
                    \r{flag}: '{arg}' is not a valid number",
                )
            }
            ConfigError::UnknownFlag(flag) => {
                write!(f, "
                    \rUnknown flag {flag}",
                )
            }
        }
    }
}
impl Error for ConfigError {}
