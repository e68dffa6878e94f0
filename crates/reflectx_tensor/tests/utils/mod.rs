use reflectx_core::{
    device::{set_default_device, Device},
    dtype::DType,
    error::Result,
};
use reflectx_tensor::Tensor;

// Helper functions
pub fn setup_device() {
    set_default_device(Device::CPU);
}

pub fn setup_tensor_with_shape(data: Vec<f32>, dtype: DType, shape: &[usize]) -> Result<Tensor> {
    setup_device();
    Tensor::new_with_spec(data, shape, Device::CPU, dtype)
}

#[macro_export]
macro_rules! test_ops {
    ([$($op:ident),*$(,)?]) => {
        $(
            mod $op {
                use super::*;
                use paste::paste;

                paste! {
                    #[test]
                    fn bf16() -> Result<()> {
                        test_functions::[<$op _test>](DType::BF16)
                    }

                    #[test]
                    fn f16() -> Result<()> {
                        test_functions::[<$op _test>](DType::F16)
                    }

                    #[test]
                    fn f32() -> Result<()> {
                        test_functions::[<$op _test>](DType::F32)
                    }

                    #[test]
                    fn f64() -> Result<()> {
                        test_functions::[<$op _test>](DType::F64)
                    }
                }
            }
        )*
    };
}

#[macro_export]
macro_rules! test_ops_with_dtype {
    ([
        $($op:ident: [$($dtype:ident),*$(,)?]),*$(,)?
    ]) => {
        $(
            mod $op {
                use super::*;
                use paste::paste;
                paste! {
                    $(
                        #[test]
                        fn [<$dtype:lower>]() -> Result<()> {
                            test_functions::[<$op _test>](DType::$dtype)
                        }
                    )*
                }
            }
        )*
    };
}
