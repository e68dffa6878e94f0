use crate::Tensor;
use half::{bf16, f16};
use reflectx_core::{
    error::{Error, Result},
    scalar::Scalar,
};

/// Element types a tensor can be read back into. Conversion goes through
/// `Scalar`, so reading an `F16` tensor as `f32` widens each element.
pub trait TensorElem: Default + Clone {
    fn from_scalar(scalar: Scalar) -> Self;
}

impl TensorElem for bf16 {
    fn from_scalar(scalar: Scalar) -> Self {
        scalar.as_bf16()
    }
}

impl TensorElem for f16 {
    fn from_scalar(scalar: Scalar) -> Self {
        scalar.as_f16()
    }
}

impl TensorElem for f32 {
    fn from_scalar(scalar: Scalar) -> Self {
        scalar.as_f32()
    }
}

impl TensorElem for f64 {
    fn from_scalar(scalar: Scalar) -> Self {
        scalar.as_f64()
    }
}

impl Tensor {
    pub fn to_flatten_vec<T: TensorElem>(&self) -> Result<Vec<T>> {
        let size = self.size();
        let elem_size = self.dtype().size_in_bytes();

        // Get raw data from buffer
        let mut raw_data = vec![0u8; size * elem_size];
        unsafe {
            self.buffer()
                .copy_to_host(raw_data.as_mut_ptr() as *mut std::ffi::c_void, raw_data.len())?;
        }

        let mut result = Vec::with_capacity(size);
        for i in 0..size {
            let scalar = unsafe { self.dtype().read_scalar(raw_data.as_ptr().add(i * elem_size)) };
            result.push(T::from_scalar(scalar));
        }

        Ok(result)
    }

    pub fn item_at_flat_index(&self, index: usize) -> Result<Scalar> {
        if index >= self.size() {
            return Err(Error::IndexOutOfBounds { index, size: self.size() });
        }

        unsafe {
            let ptr = (self.buffer().as_ptr() as *const u8).add(index * self.dtype().size_in_bytes());
            Ok(self.dtype().read_scalar(ptr))
        }
    }
}
