use crate::utils::reflect_index;
use half::{bf16, f16};
use rayon::prelude::*;
use std::sync::{Arc, Mutex};

macro_rules! reflection_pad3d_op {
    ($name:ident, $type:ty, $zero:expr) => {
        #[no_mangle]
        /// # Safety
        ///
        /// * `metadata` must be a valid pointer to an array containing:
        ///   - input_dims[num_dims]: dimensions of the unpadded input
        ///   - output_dims[num_dims]: dimensions of the padded output
        ///   - src_strides[num_dims]: element strides of the input view
        ///   - pads[num_dims * 2]: padding values for each dimension (before, after)
        /// * `inp` must be a valid pointer to an array of at least `num_els_in` elements
        /// * `out` must be a valid pointer to an array of at least `num_els_out` elements
        /// * Every padding value must be strictly less than its input dimension
        pub unsafe fn $name(num_els_in: usize, num_els_out: usize, num_dims: usize, metadata: *const usize, inp: *const $type, out: *mut $type) {
            let input_dims = std::slice::from_raw_parts(metadata, num_dims);
            let output_dims = std::slice::from_raw_parts(metadata.add(num_dims), num_dims);
            let src_strides = std::slice::from_raw_parts(metadata.add(2 * num_dims), num_dims);
            let pads = std::slice::from_raw_parts(metadata.add(3 * num_dims), num_dims * 2);

            // Copy data to Vec for safe multi-threading
            let input_vec = std::slice::from_raw_parts(inp, num_els_in).to_vec();
            let mut output_vec = vec![$zero; num_els_out];

            // Create chunks of work for better parallelism
            let chunk_size = (num_els_out / rayon::current_num_threads()) + 1;
            output_vec.par_chunks_mut(chunk_size).enumerate().for_each(|(chunk_idx, chunk)| {
                let start_idx = chunk_idx * chunk_size;

                for (local_idx, out_val) in chunk.iter_mut().enumerate() {
                    let i = start_idx + local_idx;

                    // Decompose the output linear index and resolve each
                    // coordinate to its reflected source coordinate
                    let mut src_idx = 0;
                    let mut tmp_i = i;
                    for d in (0..num_dims).rev() {
                        let out_coord = tmp_i % output_dims[d];
                        tmp_i /= output_dims[d];

                        let src_coord = reflect_index(out_coord, input_dims[d], pads[d * 2]);
                        src_idx += src_coord * src_strides[d];
                    }

                    *out_val = input_vec[src_idx];
                }
            });

            // Copy back to output pointer
            std::ptr::copy_nonoverlapping(output_vec.as_ptr(), out, num_els_out);
        }
    };
}

macro_rules! reflection_pad3d_bwd_op {
    ($name:ident, $type:ty, $zero:expr) => {
        #[no_mangle]
        /// # Safety
        ///
        /// * `metadata` must be a valid pointer to an array containing:
        ///   - input_dims[num_dims]: dimensions of the gradient-input array
        ///   - output_dims[num_dims]: dimensions of the gradient-output array
        ///   - src_strides[num_dims]: element strides of the grad_output view
        ///   - pads[num_dims * 2]: padding values for each dimension (before, after)
        /// * `grad_out` must be a valid pointer to an array of at least `num_els_out` elements
        /// * `grad_in` must be a valid pointer to an array of at least `num_els_in` elements
        /// * Every padding value must be strictly less than its input dimension
        pub unsafe fn $name(
            num_els_in: usize,
            num_els_out: usize,
            num_dims: usize,
            metadata: *const usize,
            grad_out: *const $type,
            grad_in: *mut $type,
        ) {
            let input_dims = std::slice::from_raw_parts(metadata, num_dims);
            let output_dims = std::slice::from_raw_parts(metadata.add(num_dims), num_dims);
            let src_strides = std::slice::from_raw_parts(metadata.add(2 * num_dims), num_dims);
            let pads = std::slice::from_raw_parts(metadata.add(3 * num_dims), num_dims * 2);

            // Copy data to Vec for safe multi-threading
            let grad_output_vec = std::slice::from_raw_parts(grad_out, num_els_out).to_vec();
            let grad_input_vec = vec![$zero; num_els_in];

            // Many output coordinates fold onto the same source slot, so
            // contributions are summed in per-chunk buffers and merged
            // under a single lock instead of racing on shared memory
            let grad_input_shared = Arc::new(Mutex::new(grad_input_vec));

            let chunk_size = (num_els_out / rayon::current_num_threads()) + 1;

            (0..num_els_out).into_par_iter().chunks(chunk_size).for_each(|chunk| {
                // Local accumulation buffer to minimize mutex contention
                let mut local_grad_input = vec![$zero; num_els_in];

                for i in chunk {
                    let mut src_idx = 0;
                    let mut dst_idx = 0;
                    let mut dst_stride = 1;
                    let mut tmp_i = i;
                    for d in (0..num_dims).rev() {
                        let out_coord = tmp_i % output_dims[d];
                        tmp_i /= output_dims[d];

                        let in_coord = reflect_index(out_coord, input_dims[d], pads[d * 2]);
                        dst_idx += in_coord * dst_stride;
                        dst_stride *= input_dims[d];

                        src_idx += out_coord * src_strides[d];
                    }

                    local_grad_input[dst_idx] += grad_output_vec[src_idx];
                }

                // Merge local results into shared buffer
                let mut shared_grad = grad_input_shared.lock().unwrap();
                for (i, val) in local_grad_input.iter().enumerate() {
                    shared_grad[i] += *val;
                }
            });

            // Copy results back to grad_in
            let final_grad = grad_input_shared.lock().unwrap();
            std::ptr::copy_nonoverlapping(final_grad.as_ptr(), grad_in, num_els_in);
        }
    };
}

// Forward operations for different types
reflection_pad3d_op!(reflection_pad3d_bf16, bf16, bf16::from_f32(0.0));
reflection_pad3d_op!(reflection_pad3d_f16, f16, f16::from_f32(0.0));
reflection_pad3d_op!(reflection_pad3d_f32, f32, 0.0f32);
reflection_pad3d_op!(reflection_pad3d_f64, f64, 0.0f64);

// Backward operations for different types
reflection_pad3d_bwd_op!(reflection_pad3d_bwd_bf16, bf16, bf16::from_f32(0.0));
reflection_pad3d_bwd_op!(reflection_pad3d_bwd_f16, f16, f16::from_f32(0.0));
reflection_pad3d_bwd_op!(reflection_pad3d_bwd_f32, f32, 0.0f32);
reflection_pad3d_bwd_op!(reflection_pad3d_bwd_f64, f64, 0.0f64);
