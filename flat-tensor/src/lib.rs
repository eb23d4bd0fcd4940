//! Library crate for flat_tensor
//!

use small_vec::{SmallVec, small_vec};
use std::cell::RefCell;
use std::rc::Rc;

mod constructive;
mod copy;
mod error;
mod indexing;
mod misc;
mod view;

pub use crate::error::TensorError;

pub type Result<T> = std::result::Result<T, error::TensorError>;

/// Buffer shared by a tensor and every view reshaped from it.
type SharedBuffer<T> = Rc<RefCell<Vec<T>>>;

/// Represents a multi-dimensional tensor with generic type T, keeping up to N dimensions inline.
///
/// The tensor is stored as a contiguous row-major block of memory with canonical strides, so the element at
/// coordinates `[i0, i1, ..]` lives at `sum(ik * strides[k])` in the flat buffer.
///
/// # Ownership
/// A tensor created with [`Tensor::new`], [`Tensor::zeros`] or [`Clone::clone`] is the only owner of its buffer.
/// [`Tensor::reshape`] does not copy: the returned tensor aliases the source buffer, and writes through either
/// handle are visible through the other.
///
/// # Threading
/// The buffer is reference counted with `Rc` and guarded by `RefCell`, so a tensor is neither `Send` nor `Sync`.
/// Aliased tensors can only be mutated from the thread that created them.
pub struct Tensor<T, const N: usize = 4> {
    data: SharedBuffer<T>,
    shape: SmallVec<usize, N>,
    strides: SmallVec<usize, N>,
    len: usize,
}

impl<T, const N: usize> Tensor<T, N> {
    /// Returns the extent of each dimension.
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Returns the row-major strides, in elements.
    pub fn strides(&self) -> &[usize] {
        &self.strides
    }

    /// Returns the number of dimensions.
    pub fn rank(&self) -> usize {
        self.shape.len()
    }

    /// Returns the total number of elements.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
