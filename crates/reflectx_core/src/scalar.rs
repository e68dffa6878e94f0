use crate::dtype::DType;
use half::{bf16, f16};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar {
    BF16(bf16),
    F16(f16),
    F32(f32),
    F64(f64),
}

impl Scalar {
    #[inline]
    pub fn new<T: Into<Self>>(value: T) -> Self {
        value.into()
    }

    #[inline]
    pub fn dtype(&self) -> DType {
        match self {
            Self::BF16(_) => DType::BF16,
            Self::F16(_) => DType::F16,
            Self::F32(_) => DType::F32,
            Self::F64(_) => DType::F64,
        }
    }

    #[inline]
    pub fn as_f64(&self) -> f64 {
        match *self {
            Self::BF16(x) => f64::from(x),
            Self::F16(x) => f64::from(x),
            Self::F32(x) => f64::from(x),
            Self::F64(x) => x,
        }
    }

    #[inline]
    pub fn as_f32(&self) -> f32 {
        match *self {
            Self::F32(x) => x,
            _ => self.as_f64() as f32,
        }
    }

    #[inline]
    pub fn as_bf16(&self) -> bf16 {
        match *self {
            Self::BF16(x) => x,
            _ => bf16::from_f32(self.as_f32()),
        }
    }

    #[inline]
    pub fn as_f16(&self) -> f16 {
        match *self {
            Self::F16(x) => x,
            _ => f16::from_f32(self.as_f32()),
        }
    }
}

impl From<bf16> for Scalar {
    #[inline]
    fn from(x: bf16) -> Self {
        Self::BF16(x)
    }
}

impl From<f16> for Scalar {
    #[inline]
    fn from(x: f16) -> Self {
        Self::F16(x)
    }
}

impl From<f32> for Scalar {
    #[inline]
    fn from(x: f32) -> Self {
        Self::F32(x)
    }
}

impl From<f64> for Scalar {
    #[inline]
    fn from(x: f64) -> Self {
        Self::F64(x)
    }
}
