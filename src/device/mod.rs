pub mod context;
pub mod error;

pub use context::{AcceleratorDescriptor, DeviceContext};
pub use error::DeviceError;
