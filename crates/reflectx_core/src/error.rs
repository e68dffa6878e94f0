use crate::{device::Device, dtype::DType};
use std::fmt;

#[derive(Debug)]
pub enum Error {
    OutOfMemory,
    DTypeMismatch {
        expected: DType,
        got: DType,
    },
    DeviceMismatch {
        expected: Device,
        got: Device,
    },
    UnsupportedDType,
    InvalidArgument(String),
    //
    BufferShared,
    ShapeMismatch {
        expected: usize,
        got: usize,
        msg: String,
    },
    DimensionMismatch {
        expected: Vec<usize>,
        got: Vec<usize>,
    },
    IndexOutOfBounds {
        index: usize,
        size: usize,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfMemory => write!(f, "Out of memory"),
            Self::DTypeMismatch { expected, got } => {
                write!(f, "DType mismatch: expected {:?}, got {:?}", expected, got)
            }
            Self::DeviceMismatch { expected, got } => {
                write!(f, "Device mismatch: expected {}, got {}", expected.name(), got.name())
            }
            Self::UnsupportedDType => write!(f, "Unsupported data type"),
            Self::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            Self::BufferShared => write!(f, "Buffer is shared"),
            Self::ShapeMismatch { expected, got, msg } => {
                write!(f, "Shape mismatch ({}): expected {}, got {}", msg, expected, got)
            }
            Self::DimensionMismatch { expected, got } => {
                write!(f, "Dimension mismatch: expected {:?}, got {:?}", expected, got)
            }
            Self::IndexOutOfBounds { index, size } => {
                write!(f, "Index out of bounds: index {} is out of bounds for tensor with size {}", index, size)
            }
        }
    }
}

impl std::error::Error for Error {}
