use std::fmt;

#[derive(Debug)]
pub enum ClError {
    RuntimeNotFound,
    MissingSymbol(String),
    Api { call: &'static str, status: i32 },
}

impl fmt::Display for ClError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClError::RuntimeNotFound => write!(f, "OpenCL runtime not found"),
            ClError::MissingSymbol(s) =>
                write!(f, "OpenCL runtime missing symbol: {}", s),
            ClError::Api { call, status } =>
                write!(f, "{} failed ({})", call, status),
        }
    }
}

impl std::error::Error for ClError {}
