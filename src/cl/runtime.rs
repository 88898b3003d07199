use libloading::{Library, Symbol};
use std::ffi::c_void;
use std::ptr;

use super::logging::log;
use super::ClError;

pub type ClPlatformId = *mut c_void;
pub type ClDeviceId = *mut c_void;
pub type ClContext = *mut c_void;
pub type ClCommandQueue = *mut c_void;
pub type ClMem = *mut c_void;

const CL_SUCCESS: i32 = 0;
const CL_DEVICE_NOT_FOUND: i32 = -1;
const CL_TRUE: u32 = 1;

const CL_DEVICE_TYPE_GPU: u64 = 1 << 2;
const CL_DEVICE_NAME: u32 = 0x102B;
const CL_DEVICE_GLOBAL_MEM_SIZE: u32 = 0x101F;

pub const CL_MEM_READ_WRITE: u64 = 1 << 0;
pub const CL_MEM_ALLOC_HOST_PTR: u64 = 1 << 4;
pub const CL_MAP_READ: u64 = 1 << 0;
pub const CL_MAP_WRITE: u64 = 1 << 1;

fn check(call: &'static str, status: i32) -> Result<(), ClError> {
    if status == CL_SUCCESS {
        Ok(())
    } else {
        Err(ClError::Api { call, status })
    }
}

/// Handle to the installed OpenCL runtime (ICD loader).
///
/// Symbols are resolved on demand through [`ClRuntime::get`]; every wrapper
/// turns a non-success status into [`ClError::Api`] with the call name.
pub struct ClRuntime {
    runtime: Library,
}

impl ClRuntime {
    pub fn new() -> Result<Self, ClError> {
        unsafe {
            log("Loading OpenCL runtime...");

            let runtime = Library::new("OpenCL.dll")
                .or_else(|_| Library::new("libOpenCL.so.1"))
                .or_else(|_| Library::new("libOpenCL.so"))
                .map_err(|_| ClError::RuntimeNotFound)?;

            log("OpenCL runtime loaded");

            Ok(Self { runtime })
        }
    }

    unsafe fn get<T>(&self, name: &[u8]) -> Result<Symbol<'_, T>, ClError> {
        unsafe {
            self.runtime
                .get(name)
                .map_err(|_| ClError::MissingSymbol(String::from_utf8_lossy(name).into()))
        }
    }

    pub fn platform_ids(&self) -> Result<Vec<ClPlatformId>, ClError> {
        unsafe {
            let cl_get_platform_ids: Symbol<
                unsafe extern "C" fn(u32, *mut ClPlatformId, *mut u32) -> i32,
            > = self.get(b"clGetPlatformIDs\0")?;

            let mut count: u32 = 0;
            check(
                "clGetPlatformIDs",
                cl_get_platform_ids(0, ptr::null_mut(), &mut count),
            )?;

            if count == 0 {
                return Ok(Vec::new());
            }

            let mut platforms: Vec<ClPlatformId> = vec![ptr::null_mut(); count as usize];
            check(
                "clGetPlatformIDs",
                cl_get_platform_ids(count, platforms.as_mut_ptr(), ptr::null_mut()),
            )?;

            Ok(platforms)
        }
    }

    /// Enumerates GPU-class devices on a platform. A platform without any
    /// GPU reports `CL_DEVICE_NOT_FOUND`; that case comes back as an empty
    /// list, not an API error.
    pub fn gpu_device_ids(&self, platform: ClPlatformId) -> Result<Vec<ClDeviceId>, ClError> {
        unsafe {
            let cl_get_device_ids: Symbol<
                unsafe extern "C" fn(ClPlatformId, u64, u32, *mut ClDeviceId, *mut u32) -> i32,
            > = self.get(b"clGetDeviceIDs\0")?;

            let mut count: u32 = 0;
            let status = cl_get_device_ids(
                platform,
                CL_DEVICE_TYPE_GPU,
                0,
                ptr::null_mut(),
                &mut count,
            );
            if status == CL_DEVICE_NOT_FOUND {
                return Ok(Vec::new());
            }
            check("clGetDeviceIDs", status)?;

            if count == 0 {
                return Ok(Vec::new());
            }

            let mut devices: Vec<ClDeviceId> = vec![ptr::null_mut(); count as usize];
            check(
                "clGetDeviceIDs",
                cl_get_device_ids(
                    platform,
                    CL_DEVICE_TYPE_GPU,
                    count,
                    devices.as_mut_ptr(),
                    ptr::null_mut(),
                ),
            )?;

            Ok(devices)
        }
    }

    pub fn device_name(&self, device: ClDeviceId) -> Result<String, ClError> {
        unsafe {
            let cl_get_device_info: Symbol<
                unsafe extern "C" fn(ClDeviceId, u32, usize, *mut c_void, *mut usize) -> i32,
            > = self.get(b"clGetDeviceInfo\0")?;

            let mut len: usize = 0;
            check(
                "clGetDeviceInfo",
                cl_get_device_info(device, CL_DEVICE_NAME, 0, ptr::null_mut(), &mut len),
            )?;

            let mut name = vec![0u8; len];
            if len > 0 {
                check(
                    "clGetDeviceInfo",
                    cl_get_device_info(
                        device,
                        CL_DEVICE_NAME,
                        len,
                        name.as_mut_ptr() as *mut c_void,
                        ptr::null_mut(),
                    ),
                )?;
            }

            Ok(String::from_utf8_lossy(&name)
                .trim_end_matches('\0')
                .trim()
                .to_string())
        }
    }

    pub fn device_global_mem_size(&self, device: ClDeviceId) -> Result<u64, ClError> {
        unsafe {
            let cl_get_device_info: Symbol<
                unsafe extern "C" fn(ClDeviceId, u32, usize, *mut c_void, *mut usize) -> i32,
            > = self.get(b"clGetDeviceInfo\0")?;

            let mut bytes: u64 = 0;
            check(
                "clGetDeviceInfo",
                cl_get_device_info(
                    device,
                    CL_DEVICE_GLOBAL_MEM_SIZE,
                    std::mem::size_of::<u64>(),
                    &mut bytes as *mut u64 as *mut c_void,
                    ptr::null_mut(),
                ),
            )?;

            Ok(bytes)
        }
    }

    pub fn create_context(&self, device: ClDeviceId) -> Result<ClContext, ClError> {
        unsafe {
            let cl_create_context: Symbol<
                unsafe extern "C" fn(
                    *const isize,
                    u32,
                    *const ClDeviceId,
                    *const c_void,
                    *mut c_void,
                    *mut i32,
                ) -> ClContext,
            > = self.get(b"clCreateContext\0")?;

            let mut status: i32 = 0;
            let context = cl_create_context(
                ptr::null(),
                1,
                &device,
                ptr::null(),
                ptr::null_mut(),
                &mut status,
            );
            check("clCreateContext", status)?;
            if context.is_null() {
                return Err(ClError::Api { call: "clCreateContext", status });
            }

            log("OpenCL context created");

            Ok(context)
        }
    }

    pub fn create_queue(
        &self,
        context: ClContext,
        device: ClDeviceId,
    ) -> Result<ClCommandQueue, ClError> {
        unsafe {
            let cl_create_command_queue: Symbol<
                unsafe extern "C" fn(ClContext, ClDeviceId, u64, *mut i32) -> ClCommandQueue,
            > = self.get(b"clCreateCommandQueue\0")?;

            let mut status: i32 = 0;
            let queue = cl_create_command_queue(context, device, 0, &mut status);
            check("clCreateCommandQueue", status)?;
            if queue.is_null() {
                return Err(ClError::Api { call: "clCreateCommandQueue", status });
            }

            log("Command queue created");

            Ok(queue)
        }
    }

    pub fn create_buffer(
        &self,
        context: ClContext,
        flags: u64,
        len: usize,
    ) -> Result<ClMem, ClError> {
        unsafe {
            let cl_create_buffer: Symbol<
                unsafe extern "C" fn(ClContext, u64, usize, *mut c_void, *mut i32) -> ClMem,
            > = self.get(b"clCreateBuffer\0")?;

            let mut status: i32 = 0;
            let mem = cl_create_buffer(context, flags, len, ptr::null_mut(), &mut status);
            check("clCreateBuffer", status)?;
            if mem.is_null() {
                return Err(ClError::Api { call: "clCreateBuffer", status });
            }

            Ok(mem)
        }
    }

    /// Blocking map of a pinned buffer into host address space.
    pub fn map_buffer(
        &self,
        queue: ClCommandQueue,
        mem: ClMem,
        flags: u64,
        len: usize,
    ) -> Result<*mut c_void, ClError> {
        unsafe {
            let cl_enqueue_map_buffer: Symbol<
                unsafe extern "C" fn(
                    ClCommandQueue,
                    ClMem,
                    u32,
                    u64,
                    usize,
                    usize,
                    u32,
                    *const c_void,
                    *mut c_void,
                    *mut i32,
                ) -> *mut c_void,
            > = self.get(b"clEnqueueMapBuffer\0")?;

            let mut status: i32 = 0;
            let host_ptr = cl_enqueue_map_buffer(
                queue,
                mem,
                CL_TRUE,
                flags,
                0,
                len,
                0,
                ptr::null(),
                ptr::null_mut(),
                &mut status,
            );
            check("clEnqueueMapBuffer", status)?;
            if host_ptr.is_null() {
                return Err(ClError::Api { call: "clEnqueueMapBuffer", status });
            }

            Ok(host_ptr)
        }
    }

    pub fn unmap_buffer(
        &self,
        queue: ClCommandQueue,
        mem: ClMem,
        host_ptr: *mut c_void,
    ) -> Result<(), ClError> {
        unsafe {
            let cl_enqueue_unmap: Symbol<
                unsafe extern "C" fn(
                    ClCommandQueue,
                    ClMem,
                    *mut c_void,
                    u32,
                    *const c_void,
                    *mut c_void,
                ) -> i32,
            > = self.get(b"clEnqueueUnmapMemObject\0")?;

            check(
                "clEnqueueUnmapMemObject",
                cl_enqueue_unmap(queue, mem, host_ptr, 0, ptr::null(), ptr::null_mut()),
            )
        }
    }

    /// Blocking host-to-device write against a device-resident buffer.
    pub fn enqueue_write(
        &self,
        queue: ClCommandQueue,
        mem: ClMem,
        len: usize,
        host_ptr: *const c_void,
    ) -> Result<(), ClError> {
        unsafe {
            let cl_enqueue_write_buffer: Symbol<
                unsafe extern "C" fn(
                    ClCommandQueue,
                    ClMem,
                    u32,
                    usize,
                    usize,
                    *const c_void,
                    u32,
                    *const c_void,
                    *mut c_void,
                ) -> i32,
            > = self.get(b"clEnqueueWriteBuffer\0")?;

            check(
                "clEnqueueWriteBuffer",
                cl_enqueue_write_buffer(
                    queue,
                    mem,
                    CL_TRUE,
                    0,
                    len,
                    host_ptr,
                    0,
                    ptr::null(),
                    ptr::null_mut(),
                ),
            )
        }
    }

    /// Blocking device-to-host read against a device-resident buffer.
    pub fn enqueue_read(
        &self,
        queue: ClCommandQueue,
        mem: ClMem,
        len: usize,
        host_ptr: *mut c_void,
    ) -> Result<(), ClError> {
        unsafe {
            let cl_enqueue_read_buffer: Symbol<
                unsafe extern "C" fn(
                    ClCommandQueue,
                    ClMem,
                    u32,
                    usize,
                    usize,
                    *mut c_void,
                    u32,
                    *const c_void,
                    *mut c_void,
                ) -> i32,
            > = self.get(b"clEnqueueReadBuffer\0")?;

            check(
                "clEnqueueReadBuffer",
                cl_enqueue_read_buffer(
                    queue,
                    mem,
                    CL_TRUE,
                    0,
                    len,
                    host_ptr,
                    0,
                    ptr::null(),
                    ptr::null_mut(),
                ),
            )
        }
    }

    /// Blocks until all queued work has completed.
    pub fn finish(&self, queue: ClCommandQueue) -> Result<(), ClError> {
        unsafe {
            let cl_finish: Symbol<unsafe extern "C" fn(ClCommandQueue) -> i32> =
                self.get(b"clFinish\0")?;

            check("clFinish", cl_finish(queue))
        }
    }

    pub fn release_mem(&self, mem: ClMem) -> Result<(), ClError> {
        unsafe {
            let cl_release_mem_object: Symbol<unsafe extern "C" fn(ClMem) -> i32> =
                self.get(b"clReleaseMemObject\0")?;

            check("clReleaseMemObject", cl_release_mem_object(mem))
        }
    }

    pub fn release_queue(&self, queue: ClCommandQueue) -> Result<(), ClError> {
        unsafe {
            let cl_release_command_queue: Symbol<unsafe extern "C" fn(ClCommandQueue) -> i32> =
                self.get(b"clReleaseCommandQueue\0")?;

            check("clReleaseCommandQueue", cl_release_command_queue(queue))
        }
    }

    pub fn release_context(&self, context: ClContext) -> Result<(), ClError> {
        unsafe {
            let cl_release_context: Symbol<unsafe extern "C" fn(ClContext) -> i32> =
                self.get(b"clReleaseContext\0")?;

            check("clReleaseContext", cl_release_context(context))
        }
    }
}
