use std::fmt;

use crate::cl::ClError;

#[derive(Debug)]
pub enum TransferError {
    BufferTooLarge(u64),
    Runtime(ClError),
}

impl fmt::Display for TransferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransferError::BufferTooLarge(bytes) => write!(
                f,
                "Buffer of {} bytes exceeds the host address space",
                bytes
            ),
            TransferError::Runtime(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for TransferError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TransferError::Runtime(e) => Some(e),
            TransferError::BufferTooLarge(_) => None,
        }
    }
}

impl From<ClError> for TransferError {
    fn from(e: ClError) -> Self {
        TransferError::Runtime(e)
    }
}
