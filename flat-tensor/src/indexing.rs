use super::*;
use std::cell::{Ref, RefMut};

impl<T, const N: usize> Tensor<T, N> {
    /// Maps multi-dimensional coordinates to a position in the flat buffer.
    ///
    /// Every coordinate is checked against its dimension, so the returned offset is always inside the buffer.
    pub fn offset(&self, indices: &[usize]) -> Result<usize> {
        if indices.len() != self.shape.len() {
            return Err(TensorError::RankMismatch {
                expected: self.shape.len(),
                got: indices.len(),
            });
        }

        let mut offset = 0;
        for (dim, ((&index, &size), &stride)) in indices
            .iter()
            .zip(self.shape.iter())
            .zip(self.strides.iter())
            .enumerate()
        {
            if index >= size {
                return Err(TensorError::IndexOutOfRange { index, dim, size });
            }
            offset += index * stride;
        }
        Ok(offset)
    }

    // Get element at multi-dimensional index
    pub fn get(&self, indices: &[usize]) -> Result<T>
    where
        T: Clone,
    {
        let offset = self.offset(indices)?;
        let data = self.data.try_borrow().map_err(|_| TensorError::BufferBorrowed)?;
        Ok(data[offset].clone())
    }

    /// Writes an element at multi-dimensional index.
    /// The change is visible through every tensor sharing this buffer.
    pub fn set(&mut self, indices: &[usize], value: T) -> Result<()> {
        let offset = self.offset(indices)?;
        let mut data = self.data.try_borrow_mut().map_err(|_| TensorError::BufferBorrowed)?;
        data[offset] = value;
        Ok(())
    }

    /// Borrows the flat buffer in row-major order.
    pub fn data(&self) -> Result<Ref<'_, [T]>> {
        let data = self.data.try_borrow().map_err(|_| TensorError::BufferBorrowed)?;
        Ok(Ref::map(data, |data| data.as_slice()))
    }

    /// Mutably borrows the flat buffer in row-major order.
    /// The guard must be dropped before the buffer is accessed through an aliasing tensor.
    pub fn data_mut(&mut self) -> Result<RefMut<'_, [T]>> {
        let data = self.data.try_borrow_mut().map_err(|_| TensorError::BufferBorrowed)?;
        Ok(RefMut::map(data, |data| data.as_mut_slice()))
    }

    pub fn to_vec(&self) -> Result<Vec<T>>
    where
        T: Clone,
    {
        Ok(self.data()?.to_vec())
    }
}
