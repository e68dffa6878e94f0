pub mod cpu;

use crate::{device::Device, dtype::DType, error::Result};
use cpu::CpuBuffer;
use std::{ffi::c_void, sync::Arc};

pub struct BufferManager {}

impl BufferManager {
    pub fn create(size: usize, device: Device, dtype: DType) -> Result<Arc<dyn Buffer>> {
        let buffer: Arc<dyn Buffer> = match device {
            Device::CPU => Arc::new(CpuBuffer::new(size, dtype)?),
        };

        Ok(buffer)
    }
}

pub trait Buffer: Send + Sync {
    fn as_ptr(&self) -> *const c_void;
    fn as_mut_ptr(&mut self) -> *mut c_void;
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    fn dtype(&self) -> DType;
    fn device(&self) -> Device;

    /// # Safety
    /// Requires a valid source pointer and matching size_in_bytes with no memory overlap
    unsafe fn copy_from_host(&mut self, src: *const c_void, size_in_bytes: usize) -> Result<()>;

    /// # Safety
    /// Requires a valid destination pointer and matching size_in_bytes with no memory overlap
    unsafe fn copy_to_host(&self, dest: *mut c_void, size_in_bytes: usize) -> Result<()>;
}
