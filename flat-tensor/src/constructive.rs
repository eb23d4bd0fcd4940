use super::*;

impl<T, const N: usize> Tensor<T, N> {
    /// Creates a tensor which takes ownership of `data` laid out in row-major order.
    ///
    /// Returns an error if the shape is empty or its element count differs from `data.len()`.
    pub fn new(data: Vec<T>, shape: &[usize]) -> Result<Self> {
        let size = Self::element_count(shape)?;
        if data.len() != size {
            return Err(TensorError::ShapeMismatch {
                shape: shape.to_vec(),
                expected: size,
                got: data.len(),
            });
        }

        Ok(Self::with_buffer(Rc::new(RefCell::new(data)), shape, size))
    }

    /// Creates a tensor holding a copy of `data`.
    /// The shape is validated before anything is allocated.
    pub fn from_slice(data: &[T], shape: &[usize]) -> Result<Self>
    where
        T: Clone,
    {
        let size = Self::element_count(shape)?;
        if data.len() != size {
            return Err(TensorError::ShapeMismatch {
                shape: shape.to_vec(),
                expected: size,
                got: data.len(),
            });
        }

        Ok(Self::with_buffer(Rc::new(RefCell::new(data.to_vec())), shape, size))
    }

    /// Creates a tensor of the given shape filled with `T::default()`.
    pub fn zeros(shape: &[usize]) -> Result<Self>
    where
        T: Default + Clone,
    {
        let size = Self::element_count(shape)?;

        Ok(Self::with_buffer(
            Rc::new(RefCell::new(vec![T::default(); size])),
            shape,
            size,
        ))
    }

    /// Builds a tensor over an existing buffer.
    /// The caller guarantees `len` is the buffer length and the element count of `shape`.
    pub(crate) fn with_buffer(data: SharedBuffer<T>, shape: &[usize], len: usize) -> Self {
        Self {
            data,
            shape: shape.iter().copied().collect(),
            strides: Self::compute_strides(shape),
            len,
        }
    }

    /// Number of elements described by a shape.
    ///
    /// Any zero extent makes the count zero, whatever the other extents are.
    /// Returns an error if the shape is empty or the count does not fit in `usize`.
    pub(crate) fn element_count(shape: &[usize]) -> Result<usize> {
        if shape.is_empty() {
            return Err(TensorError::InvalidShape);
        }
        if shape.contains(&0) {
            return Ok(0);
        }

        shape
            .iter()
            .try_fold(1usize, |total, &dim| total.checked_mul(dim))
            .ok_or(TensorError::InvalidShape)
    }

    // Row-major strides: the last dimension is contiguous.
    // Saturation only happens for empty tensors, whose strides are never dereferenced.
    pub(crate) fn compute_strides(shape: &[usize]) -> SmallVec<usize, N> {
        let mut strides: SmallVec<usize, N> = small_vec![0; shape.len()];
        let mut acc = 1usize;
        for (stride, &dim) in strides.iter_mut().zip(shape).rev() {
            *stride = acc;
            acc = acc.saturating_mul(dim);
        }
        strides
    }
}

impl<T, const N: usize> From<Vec<T>> for Tensor<T, N> {
    fn from(data: Vec<T>) -> Self {
        let len = data.len();
        Self::with_buffer(Rc::new(RefCell::new(data)), &[len], len)
    }
}
