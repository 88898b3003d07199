use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SizeParseError {
    Empty,
    BadNumber(String),
    Zero(String),
    Overflow(String),
}

impl fmt::Display for SizeParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SizeParseError::Empty => write!(f, "Invalid size: empty token"),
            SizeParseError::BadNumber(t) => write!(f, "Invalid size: {}", t),
            SizeParseError::Zero(t) => write!(f, "Invalid size: {} (zero bytes)", t),
            SizeParseError::Overflow(t) => write!(f, "Size too large: {}", t),
        }
    }
}

impl std::error::Error for SizeParseError {}
