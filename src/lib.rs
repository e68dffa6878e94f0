pub use reflectx_internal::prelude;
pub use reflectx_internal::*;
