use super::*;

impl<T, const N: usize> Tensor<T, N> {
    /// Returns a tensor with a new shape over the same buffer - no data copying.
    ///
    /// The result aliases `self`: a write through either tensor is visible through the other.
    /// Returns an error if the new shape is empty or holds a different number of elements.
    pub fn reshape(&self, new_shape: &[usize]) -> Result<Tensor<T, N>> {
        let old_size = self.len();
        let new_size = Self::element_count(new_shape)?;

        if old_size != new_size {
            return Err(TensorError::ShapeMismatch {
                shape: new_shape.to_vec(),
                expected: new_size,
                got: old_size,
            });
        }

        Ok(Tensor::with_buffer(self.data.clone(), new_shape, new_size))
    }

    /// Returns true if both tensors read and write the same buffer.
    pub fn shares_buffer<const M: usize>(&self, other: &Tensor<T, M>) -> bool {
        Rc::ptr_eq(&self.data, &other.data)
    }
}
