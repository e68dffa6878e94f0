use crate::Tensor;
use half::{bf16, f16};
use reflectx_core::{
    buffer::BufferManager,
    device::{get_default_device, Device},
    dtype::{get_default_dtype, DType},
    error::{Error, Result},
    layout::Layout,
    scalar::Scalar,
};
use std::sync::Arc;

impl Tensor {
    pub fn new(data: Vec<f32>, shape: &[usize]) -> Result<Self> {
        let device = get_default_device();
        let dtype = get_default_dtype();

        Self::new_with_spec(data, shape, device, dtype)
    }

    pub fn new_with_spec(data: Vec<f32>, shape: &[usize], device: Device, dtype: DType) -> Result<Self> {
        let layout = Layout::from_shape(shape);
        let size = layout.size();

        if data.len() != size {
            return Err(Error::ShapeMismatch {
                expected: size,
                got: data.len(),
                msg: "data length should match the number of elements of the shape".to_string(),
            });
        }

        let mut buffer = BufferManager::create(size, device, dtype)?;

        let elem_size = dtype.size_in_bytes();
        let mut host_buf = vec![0u8; size * elem_size];
        for (i, &value) in data.iter().enumerate() {
            unsafe {
                dtype.write_scalar(host_buf.as_mut_ptr().add(i * elem_size), Scalar::F32(value));
            }
        }

        unsafe {
            let buffer_mut = Arc::get_mut(&mut buffer).ok_or(Error::BufferShared)?;
            buffer_mut.copy_from_host(host_buf.as_ptr() as *const std::ffi::c_void, size * elem_size)?;
        }

        Ok(Self::from_parts(buffer, device, dtype, layout))
    }

    pub fn empty(shape: &[usize]) -> Result<Self> {
        let device = get_default_device();
        let dtype = get_default_dtype();

        Self::empty_with_spec(shape, device, dtype)
    }

    pub fn empty_with_spec(shape: &[usize], device: Device, dtype: DType) -> Result<Self> {
        let layout = Layout::from_shape(shape);
        let size = layout.size();

        let buffer = BufferManager::create(size, device, dtype)?;

        Ok(Self::from_parts(buffer, device, dtype, layout))
    }

    pub fn zeros(shape: &[usize]) -> Result<Self> {
        let device = get_default_device();
        let dtype = get_default_dtype();

        Self::zeros_with_spec(shape, device, dtype)
    }

    pub fn zeros_with_spec(shape: &[usize], device: Device, dtype: DType) -> Result<Self> {
        let layout = Layout::from_shape(shape);
        let size = layout.size();

        let mut buffer = BufferManager::create(size, device, dtype)?;

        let zero_buf = vec![0u8; size * dtype.size_in_bytes()];
        unsafe {
            let buffer_mut = Arc::get_mut(&mut buffer).ok_or(Error::BufferShared)?;
            buffer_mut.copy_from_host(zero_buf.as_ptr() as *const std::ffi::c_void, zero_buf.len())?;
        }

        Ok(Self::from_parts(buffer, device, dtype, layout))
    }

    pub fn zeros_like(src: &Tensor) -> Result<Self> {
        Self::zeros_with_spec(src.shape(), src.device(), src.dtype())
    }

    pub fn ones(shape: &[usize]) -> Result<Self> {
        let device = get_default_device();
        let dtype = get_default_dtype();

        Self::ones_with_spec(shape, device, dtype)
    }

    pub fn ones_with_spec(shape: &[usize], device: Device, dtype: DType) -> Result<Self> {
        let layout = Layout::from_shape(shape);
        let size = layout.size();

        let mut buffer = BufferManager::create(size, device, dtype)?;

        let one_bytes = match dtype {
            DType::BF16 => bf16::ONE.to_ne_bytes().to_vec(),
            DType::F16 => f16::ONE.to_ne_bytes().to_vec(),
            DType::F32 => 1.0f32.to_ne_bytes().to_vec(),
            DType::F64 => 1.0f64.to_ne_bytes().to_vec(),
        };

        let mut host_buf = Vec::with_capacity(size * dtype.size_in_bytes());
        for _ in 0..size {
            host_buf.extend_from_slice(&one_bytes);
        }

        unsafe {
            let buffer_mut = Arc::get_mut(&mut buffer).ok_or(Error::BufferShared)?;
            buffer_mut.copy_from_host(host_buf.as_ptr() as *const std::ffi::c_void, host_buf.len())?;
        }

        Ok(Self::from_parts(buffer, device, dtype, layout))
    }

    pub fn ones_like(src: &Tensor) -> Result<Self> {
        Self::ones_with_spec(src.shape(), src.device(), src.dtype())
    }
}
