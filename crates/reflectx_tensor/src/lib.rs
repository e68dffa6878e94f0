mod creation;
pub(crate) mod ops;
mod vec;

use reflectx_core::{
    buffer::Buffer,
    device::Device,
    dtype::DType,
    error::{Error, Result},
    layout::Layout,
};
use std::sync::Arc;

pub use ops::pad3d::ReflectionPad3d;

#[derive(Clone)]
pub struct TensorData {
    buffer: Arc<dyn Buffer>,
}

#[derive(Clone)]
pub struct TensorMetadata {
    device: Device,
    dtype: DType,
    layout: Layout,
}

/// A dense host tensor: an owned buffer plus layout metadata. Kernels only
/// ever see the buffer through non-owning `&dyn Buffer` views.
#[derive(Clone)]
pub struct Tensor {
    data: TensorData,
    metadata: TensorMetadata,
}

impl Tensor {
    pub fn device(&self) -> Device {
        self.metadata.device
    }

    pub fn dtype(&self) -> DType {
        self.metadata.dtype
    }

    pub fn layout(&self) -> &Layout {
        &self.metadata.layout
    }

    pub fn shape(&self) -> &[usize] {
        self.metadata.layout.shape()
    }

    pub fn strides(&self) -> &[usize] {
        self.metadata.layout.strides()
    }

    pub fn ndim(&self) -> usize {
        self.metadata.layout.ndim()
    }

    pub fn size(&self) -> usize {
        self.metadata.layout.size()
    }

    pub fn buffer(&self) -> &dyn Buffer {
        self.data.buffer.as_ref()
    }

    /// Exclusive access to the underlying buffer. Fails when the buffer is
    /// still shared with a clone of this tensor.
    pub(crate) fn buffer_mut(&mut self) -> Result<&mut (dyn Buffer + 'static)> {
        Arc::get_mut(&mut self.data.buffer).ok_or(Error::BufferShared)
    }

    pub(crate) fn from_parts(buffer: Arc<dyn Buffer>, device: Device, dtype: DType, layout: Layout) -> Self {
        Self {
            data: TensorData { buffer },
            metadata: TensorMetadata { device, dtype, layout },
        }
    }
}
