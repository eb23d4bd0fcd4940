use super::*;

/// Deep copy: the clone owns a fresh buffer and never aliases the source.
/// Use [`Tensor::reshape`] to get a second handle onto the same buffer.
///
/// # Panics
/// Panics if the buffer is mutably borrowed through a `data_mut` guard at the time of the call.
impl<T: Clone, const N: usize> Clone for Tensor<T, N> {
    fn clone(&self) -> Self {
        let data = self.data.borrow().clone();
        Self {
            data: Rc::new(RefCell::new(data)),
            shape: self.shape.clone(),
            strides: self.strides.clone(),
            len: self.len,
        }
    }
}

impl<T: Clone, const N: usize> Tensor<T, N> {
    /// Overwrites the whole buffer of `destination` with the elements of this tensor, in linear order.
    ///
    /// Only the element counts must agree; the shapes may differ.
    pub fn copy_to<const M: usize>(&self, destination: &mut Tensor<T, M>) -> Result<()> {
        let len = self.len();
        if destination.len() != len {
            return Err(TensorError::LengthMismatch {
                expected: len,
                got: destination.len(),
            });
        }

        // same buffer, same length: nothing to copy
        if self.shares_buffer(destination) {
            return Ok(());
        }

        let source = self.data.try_borrow().map_err(|_| TensorError::BufferBorrowed)?;
        let mut target = destination
            .data
            .try_borrow_mut()
            .map_err(|_| TensorError::BufferBorrowed)?;
        target.clone_from_slice(&source);

        Ok(())
    }
}
