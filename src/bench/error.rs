use std::fmt;

use crate::device::DeviceError;
use crate::transfer::TransferError;

#[derive(Debug)]
pub enum BenchError {
    Device(DeviceError),
    EmptySizeSet,
    Transfer(TransferError),
}

impl fmt::Display for BenchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BenchError::Device(e) => write!(f, "{}", e),
            BenchError::EmptySizeSet =>
                write!(f, "No buffer sizes fit GPU memory constraints"),
            BenchError::Transfer(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for BenchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BenchError::Device(e) => Some(e),
            BenchError::Transfer(e) => Some(e),
            BenchError::EmptySizeSet => None,
        }
    }
}

impl From<DeviceError> for BenchError {
    fn from(e: DeviceError) -> Self {
        BenchError::Device(e)
    }
}

impl From<TransferError> for BenchError {
    fn from(e: TransferError) -> Self {
        BenchError::Transfer(e)
    }
}
