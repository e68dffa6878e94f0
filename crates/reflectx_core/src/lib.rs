pub mod be;
pub mod buffer;
pub mod device;
pub mod dtype;
pub mod error;
pub mod layout;
pub mod padding;
pub mod scalar;

pub use reflectx_cpu as cpu;
