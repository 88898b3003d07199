use std::ffi::c_void;
use std::ptr;

use crate::cl::{ClMem, CL_MAP_READ, CL_MAP_WRITE, CL_MEM_ALLOC_HOST_PTR, CL_MEM_READ_WRITE};
use crate::device::DeviceContext;

use super::TransferError;

const FILL_BYTE: u8 = 0x01;

struct MemGuard<'a> {
    ctx: &'a DeviceContext,
    mem: ClMem,
}

impl<'a> MemGuard<'a> {
    fn create(ctx: &'a DeviceContext, flags: u64, len: usize) -> Result<Self, TransferError> {
        let mem = ctx.runtime().create_buffer(ctx.context(), flags, len)?;
        Ok(Self { ctx, mem })
    }
}

impl Drop for MemGuard<'_> {
    fn drop(&mut self) {
        let _ = self.ctx.runtime().release_mem(self.mem);
    }
}

struct MapGuard<'a> {
    ctx: &'a DeviceContext,
    mem: ClMem,
    host_ptr: *mut c_void,
}

impl<'a> MapGuard<'a> {
    fn map(ctx: &'a DeviceContext, mem: ClMem, flags: u64, len: usize) -> Result<Self, TransferError> {
        let host_ptr = ctx.runtime().map_buffer(ctx.queue(), mem, flags, len)?;
        Ok(Self { ctx, mem, host_ptr })
    }
}

impl Drop for MapGuard<'_> {
    fn drop(&mut self) {
        let _ = self
            .ctx
            .runtime()
            .unmap_buffer(self.ctx.queue(), self.mem, self.host_ptr);
    }
}

/// The three transfer-capable buffers for one buffer-size iteration: a
/// pinned source mapped for host writes, a pinned destination mapped for
/// host reads, and the device-resident working buffer.
///
/// Handles are guarded as they are acquired; a failure halfway through
/// allocation still releases what already exists. Field order keeps the
/// unmaps ahead of the buffer releases on drop.
pub struct TransferBuffers<'a> {
    source_map: MapGuard<'a>,
    dest_map: MapGuard<'a>,
    _source: MemGuard<'a>,
    _dest: MemGuard<'a>,
    device: MemGuard<'a>,
    len: usize,
}

impl<'a> TransferBuffers<'a> {
    pub fn allocate(ctx: &'a DeviceContext, bytes: u64) -> Result<Self, TransferError> {
        let len = usize::try_from(bytes).map_err(|_| TransferError::BufferTooLarge(bytes))?;

        let pinned = CL_MEM_READ_WRITE | CL_MEM_ALLOC_HOST_PTR;
        let source = MemGuard::create(ctx, pinned, len)?;
        let dest = MemGuard::create(ctx, pinned, len)?;
        let device = MemGuard::create(ctx, CL_MEM_READ_WRITE, len)?;

        let source_map = MapGuard::map(ctx, source.mem, CL_MAP_WRITE, len)?;
        let dest_map = MapGuard::map(ctx, dest.mem, CL_MAP_READ, len)?;

        // Transferred content is never validated; the pattern only has to
        // make the source pages resident.
        unsafe {
            ptr::write_bytes(source_map.host_ptr as *mut u8, FILL_BYTE, len);
        }

        Ok(Self {
            source_map,
            dest_map,
            _source: source,
            _dest: dest,
            device,
            len,
        })
    }

    pub fn source_ptr(&self) -> *const c_void {
        self.source_map.host_ptr
    }

    pub fn dest_ptr(&self) -> *mut c_void {
        self.dest_map.host_ptr
    }

    pub fn device_mem(&self) -> ClMem {
        self.device.mem
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
