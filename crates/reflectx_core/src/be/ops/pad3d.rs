use crate::{
    buffer::Buffer,
    device::Device,
    dtype::DType,
    error::{Error, Result},
};
use half::{bf16, f16};
use reflectx_cpu::ops::pad3d::*;

#[macro_export]
macro_rules! declare_pad3d_op {
    ($name:ident: $kernel:ident, [$($dtype:ident),* $(,)?]) => {
        paste::paste! {
            /// # Safety
            /// This function is unsafe because it performs raw pointer operations.
            /// `metadata` must follow the layout the kernels expect and both
            /// buffers must be large enough for `num_els_in`/`num_els_out`.
            pub unsafe fn $name(
                output: &mut dyn Buffer,
                input: &dyn Buffer,
                num_els_in: usize,
                num_els_out: usize,
                num_dims: usize,
                metadata: Option<&[usize]>,
            ) -> Result<()> {
                if output.device() != input.device() {
                    return Err(Error::DeviceMismatch {
                        expected: output.device(),
                        got: input.device(),
                    });
                }
                if output.dtype() != input.dtype() {
                    return Err(Error::DTypeMismatch {
                        expected: output.dtype(),
                        got: input.dtype(),
                    });
                }

                let metadata: *const usize = match output.device() {
                    Device::CPU => metadata.map_or(std::ptr::null(), |d| d.as_ptr()),
                };

                match input.device() {
                    Device::CPU => {
                        match input.dtype() {
                            $(
                                DType::$dtype => {
                                    [<$kernel _ $dtype:lower>](
                                        num_els_in,
                                        num_els_out,
                                        num_dims,
                                        metadata,
                                        input.as_ptr() as *const [<$dtype:lower>],
                                        output.as_mut_ptr() as *mut [<$dtype:lower>],
                                    )
                                }
                            )*
                        }
                    },
                }

                Ok(())
            }
        }
    };
}

declare_pad3d_op!(reflection_pad3d_forward: reflection_pad3d, [BF16, F16, F32, F64]);
declare_pad3d_op!(reflection_pad3d_backward: reflection_pad3d_bwd, [BF16, F16, F32, F64]);
