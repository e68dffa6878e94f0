use crate::Tensor;
use reflectx_core::{
    error::{Error, Result},
    padding::Pad3d,
};

/// Reflection padding over the three spatial axes of an (N, C, D, H, W)
/// tensor. Padded values mirror the interior without repeating the edge
/// sample, so each padding amount must stay strictly below its axis size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReflectionPad3d {
    pad: Pad3d,
}

impl ReflectionPad3d {
    pub fn new(pad: Pad3d) -> Self {
        Self { pad }
    }

    pub fn pad(&self) -> Pad3d {
        self.pad
    }

    pub fn forward(&self, input: &Tensor) -> Result<Tensor> {
        let output_shape = padded_shape(input.shape(), &self.pad)?;
        let mut output = Tensor::empty_with_spec(&output_shape, input.device(), input.dtype())?;

        self.launch_forward(&mut output, input)?;

        Ok(output)
    }

    /// Forward pass into a caller-owned output tensor. The output shape must
    /// already match the padded shape of `input`.
    pub fn forward_into(&self, output: &mut Tensor, input: &Tensor) -> Result<()> {
        let output_shape = padded_shape(input.shape(), &self.pad)?;
        if output.shape() != output_shape.as_slice() {
            return Err(Error::DimensionMismatch {
                expected: output_shape,
                got: output.shape().to_vec(),
            });
        }

        self.launch_forward(output, input)
    }

    pub fn backward(&self, grad_output: &Tensor, input: &Tensor) -> Result<Tensor> {
        let mut grad_input = Tensor::zeros_with_spec(input.shape(), grad_output.device(), grad_output.dtype())?;

        self.backward_into(&mut grad_input, grad_output, input)?;

        Ok(grad_input)
    }

    /// Backward pass into a caller-owned gradient tensor. `grad_output` must
    /// carry the padded shape of `input`, and `grad_input` the input shape.
    pub fn backward_into(&self, grad_input: &mut Tensor, grad_output: &Tensor, input: &Tensor) -> Result<()> {
        let output_shape = padded_shape(input.shape(), &self.pad)?;
        if grad_output.shape() != output_shape.as_slice() {
            return Err(Error::DimensionMismatch {
                expected: output_shape,
                got: grad_output.shape().to_vec(),
            });
        }
        if grad_input.shape() != input.shape() {
            return Err(Error::DimensionMismatch {
                expected: input.shape().to_vec(),
                got: grad_input.shape().to_vec(),
            });
        }

        let metadata = prepare_metadata(input.shape(), grad_output.shape(), grad_output.strides(), &self.pad);

        let num_els_in = grad_input.size();
        let num_els_out = grad_output.size();
        let num_dims = input.ndim();

        unsafe {
            reflectx_core::be::ops::pad3d::reflection_pad3d_backward(
                grad_input.buffer_mut()?,
                grad_output.buffer(),
                num_els_in,
                num_els_out,
                num_dims,
                Some(&metadata),
            )?;
        }

        Ok(())
    }

    fn launch_forward(&self, output: &mut Tensor, input: &Tensor) -> Result<()> {
        let metadata = prepare_metadata(input.shape(), output.shape(), input.strides(), &self.pad);

        let num_els_in = input.size();
        let num_els_out = output.size();
        let num_dims = input.ndim();

        unsafe {
            reflectx_core::be::ops::pad3d::reflection_pad3d_forward(
                output.buffer_mut()?,
                input.buffer(),
                num_els_in,
                num_els_out,
                num_dims,
                Some(&metadata),
            )?;
        }

        Ok(())
    }
}

impl Tensor {
    pub fn reflection_pad3d(&self, pad: Pad3d) -> Result<Tensor> {
        ReflectionPad3d::new(pad).forward(self)
    }
}

/// Validates the input shape against the padding spec and returns the
/// padded output shape.
pub fn padded_shape(input_shape: &[usize], pad: &Pad3d) -> Result<Vec<usize>> {
    if input_shape.len() != 5 {
        return Err(Error::ShapeMismatch {
            expected: 5,
            got: input_shape.len(),
            msg: "reflection_pad3d expects an (N, C, D, H, W) input".to_string(),
        });
    }

    let mut output_shape = Vec::with_capacity(input_shape.len());
    for (i, &(pad_before, pad_after)) in pad.pairs().iter().enumerate() {
        let dim_size = input_shape[i];

        if pad_before >= dim_size || pad_after >= dim_size {
            return Err(Error::InvalidArgument(format!(
                "Reflection padding width ({}, {}) must be less than the dimension size ({})",
                pad_before, pad_after, dim_size
            )));
        }

        if dim_size <= 1 && (pad_before > 0 || pad_after > 0) {
            return Err(Error::InvalidArgument(format!(
                "Reflection padding requires input dimension > 1 for non-zero padding, but got dim {} with size {}",
                i, dim_size
            )));
        }

        output_shape.push(dim_size + pad_before + pad_after);
    }

    Ok(output_shape)
}

/// Kernel metadata layout: input_dims, output_dims, src_strides, then
/// (before, after) padding pairs per dimension. The forward pass sources
/// from the input, the backward pass from grad_output, so `src_strides`
/// is the stride set of whichever tensor the kernel reads.
fn prepare_metadata(input_shape: &[usize], output_shape: &[usize], src_strides: &[usize], pad: &Pad3d) -> Vec<usize> {
    let mut info = Vec::with_capacity(3 * input_shape.len() + 2 * input_shape.len());

    info.extend_from_slice(input_shape);
    info.extend_from_slice(output_shape);
    info.extend_from_slice(src_strides);

    for &(pad_before, pad_after) in pad.pairs().iter() {
        info.push(pad_before);
        info.push(pad_after);
    }

    info
}

#[cfg(test)]
mod tests {
    use super::*;
    use reflectx_core::layout::Layout;

    #[test]
    fn padded_shape_extends_spatial_axes_only() {
        let shape = padded_shape(&[2, 3, 4, 5, 6], &Pad3d::new(1, 2, 3, 4, 2, 1)).unwrap();
        assert_eq!(shape, vec![2, 3, 7, 12, 9]);
    }

    #[test]
    fn padded_shape_rejects_wrong_rank() {
        let result = padded_shape(&[3, 4, 5, 6], &Pad3d::uniform(1));
        assert!(matches!(result, Err(Error::ShapeMismatch { expected: 5, got: 4, .. })));
    }

    #[test]
    fn padded_shape_rejects_pad_equal_to_dim() {
        let result = padded_shape(&[1, 1, 4, 4, 4], &Pad3d::new(4, 0, 0, 0, 0, 0));
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn padded_shape_rejects_singleton_axis_with_padding() {
        let result = padded_shape(&[1, 1, 1, 4, 4], &Pad3d::new(0, 0, 0, 0, 0, 0));
        assert!(result.is_ok());

        // D has size 1, so front padding cannot reflect anything
        let result = padded_shape(&[1, 1, 1, 4, 4], &Pad3d::new(0, 0, 0, 0, 1, 0));
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn metadata_carries_dims_strides_and_pairs() {
        let layout = Layout::from_shape(&[1, 1, 2, 2, 2]);
        let pad = Pad3d::uniform(1);
        let output_shape = padded_shape(layout.shape(), &pad).unwrap();
        let metadata = prepare_metadata(layout.shape(), &output_shape, layout.strides(), &pad);

        assert_eq!(&metadata[0..5], &[1, 1, 2, 2, 2]);
        assert_eq!(&metadata[5..10], &[1, 1, 4, 4, 4]);
        assert_eq!(&metadata[10..15], &[8, 8, 4, 2, 1]);
        assert_eq!(&metadata[15..25], &[0, 0, 0, 0, 1, 1, 1, 1, 1, 1]);
    }
}
