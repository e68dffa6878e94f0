pub mod prelude;

pub use reflectx_core as core;
pub use reflectx_tensor as tensor;

pub use reflectx_core::dtype::{bf16, bfloat16, f16, float16, float32, float64, half};
