pub use crate::core::{
    device::{get_default_device, set_default_device, Device},
    dtype::*,
    error::{Error, Result},
    padding::Pad3d,
    scalar::Scalar,
};
pub use crate::tensor::{ReflectionPad3d, Tensor};
pub use crate::{bf16, f16};
