use std::fmt;

use crate::cl::ClError;

#[derive(Debug)]
pub enum DeviceError {
    NoPlatformFound,
    NoAcceleratorFound,
    DeviceIndexOutOfRange { requested: usize, available: usize },
    Runtime(ClError),
}

impl fmt::Display for DeviceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeviceError::NoPlatformFound => write!(f, "No OpenCL platforms found"),
            DeviceError::NoAcceleratorFound =>
                write!(f, "No GPU devices found on platform"),
            DeviceError::DeviceIndexOutOfRange { requested, available } => write!(
                f,
                "Target GPU device {} is beyond GPU devices found on platform ({} available)",
                requested, available
            ),
            DeviceError::Runtime(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for DeviceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DeviceError::Runtime(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ClError> for DeviceError {
    fn from(e: ClError) -> Self {
        DeviceError::Runtime(e)
    }
}
