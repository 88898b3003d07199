//! Dynamic binding to the installed OpenCL runtime.

pub mod error;
pub mod logging;
pub mod runtime;

pub use error::ClError;
pub use runtime::{
    ClCommandQueue, ClContext, ClDeviceId, ClMem, ClPlatformId, ClRuntime, CL_MAP_READ,
    CL_MAP_WRITE, CL_MEM_ALLOC_HOST_PTR, CL_MEM_READ_WRITE,
};
