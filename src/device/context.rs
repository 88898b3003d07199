use crate::cl::{ClCommandQueue, ClContext, ClRuntime};

use super::DeviceError;

/// Identity of the accelerator the run is bound to, fetched once.
#[derive(Debug, Clone)]
pub struct AcceleratorDescriptor {
    pub name: String,
    pub total_memory_bytes: u64,
}

/// The accelerator binding held for the lifetime of a whole run: the loaded
/// OpenCL runtime, one execution context, and one in-order command queue.
/// Dropping releases the queue, then the context.
pub struct DeviceContext {
    runtime: ClRuntime,
    context: ClContext,
    queue: ClCommandQueue,
    descriptor: AcceleratorDescriptor,
}

impl DeviceContext {
    /// Binds to the GPU at `device_index` on the first available platform.
    pub fn open(device_index: usize) -> Result<Self, DeviceError> {
        let runtime = ClRuntime::new()?;

        let platforms = runtime.platform_ids()?;
        let platform = *platforms.first().ok_or(DeviceError::NoPlatformFound)?;

        let devices = runtime.gpu_device_ids(platform)?;
        if devices.is_empty() {
            return Err(DeviceError::NoAcceleratorFound);
        }
        if device_index >= devices.len() {
            return Err(DeviceError::DeviceIndexOutOfRange {
                requested: device_index,
                available: devices.len(),
            });
        }
        let device = devices[device_index];

        let name = runtime.device_name(device)?;
        let total_memory_bytes = runtime.device_global_mem_size(device)?;

        let context = runtime.create_context(device)?;
        let queue = match runtime.create_queue(context, device) {
            Ok(queue) => queue,
            Err(e) => {
                let _ = runtime.release_context(context);
                return Err(DeviceError::Runtime(e));
            }
        };

        Ok(Self {
            runtime,
            context,
            queue,
            descriptor: AcceleratorDescriptor { name, total_memory_bytes },
        })
    }

    pub fn runtime(&self) -> &ClRuntime {
        &self.runtime
    }

    pub fn context(&self) -> ClContext {
        self.context
    }

    pub fn queue(&self) -> ClCommandQueue {
        self.queue
    }

    pub fn descriptor(&self) -> &AcceleratorDescriptor {
        &self.descriptor
    }
}

impl Drop for DeviceContext {
    fn drop(&mut self) {
        let _ = self.runtime.release_queue(self.queue);
        let _ = self.runtime.release_context(self.context);
    }
}
