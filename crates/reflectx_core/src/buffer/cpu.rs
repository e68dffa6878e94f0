use crate::{
    buffer::Buffer,
    device::Device,
    dtype::DType,
    error::{Error, Result},
};
use std::{ffi::c_void, ptr};

pub struct CpuBuffer {
    // Backed by u64 words so the storage is aligned for every dtype.
    data: Vec<u64>,
    size_in_bytes: usize,
    dtype: DType,
}

impl CpuBuffer {
    pub fn new(size: usize, dtype: DType) -> Result<Self> {
        let size_in_bytes = size.checked_mul(dtype.size_in_bytes()).ok_or(Error::OutOfMemory)?;
        let words = size_in_bytes.div_ceil(std::mem::size_of::<u64>());

        let mut data: Vec<u64> = Vec::new();
        data.try_reserve_exact(words).map_err(|_| Error::OutOfMemory)?;
        data.resize(words, 0);

        Ok(Self {
            data,
            size_in_bytes,
            dtype,
        })
    }
}

impl Buffer for CpuBuffer {
    fn as_ptr(&self) -> *const c_void {
        self.data.as_ptr() as *const _
    }

    fn as_mut_ptr(&mut self) -> *mut c_void {
        self.data.as_mut_ptr() as *mut _
    }

    fn len(&self) -> usize {
        self.size_in_bytes / self.dtype.size_in_bytes()
    }

    fn dtype(&self) -> DType {
        self.dtype
    }

    fn device(&self) -> Device {
        Device::CPU
    }

    unsafe fn copy_from_host(&mut self, src: *const c_void, size_in_bytes: usize) -> Result<()> {
        if size_in_bytes != self.size_in_bytes {
            return Err(Error::InvalidArgument("Size mismatch in copy_from_host".into()));
        }
        ptr::copy_nonoverlapping(src as *const u8, self.data.as_mut_ptr() as *mut u8, size_in_bytes);
        Ok(())
    }

    unsafe fn copy_to_host(&self, dest: *mut c_void, size_in_bytes: usize) -> Result<()> {
        if size_in_bytes > self.size_in_bytes {
            return Err(Error::InvalidArgument(format!(
                "Size mismatch in copy_to_host: requested {}, available {}",
                size_in_bytes, self.size_in_bytes
            )));
        }
        ptr::copy_nonoverlapping(self.data.as_ptr() as *const u8, dest as *mut u8, size_in_bytes);
        Ok(())
    }
}
