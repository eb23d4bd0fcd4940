use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TensorError {
    /// A tensor needs at least one dimension, and its element count must fit in `usize`.
    #[error("Invalid Shape: shape must have at least one dimension and at most usize::MAX elements")]
    InvalidShape,

    /// Number of elements does not match the element count of the shape.
    #[error("Shape Mismatch: shape {shape:?} holds {expected} elements, got {got}")]
    ShapeMismatch {
        shape: Vec<usize>,
        expected: usize,
        got: usize,
    },

    /// Number of coordinates does not match the tensor rank.
    #[error("Rank Mismatch: expected {expected} indices, got {got}")]
    RankMismatch { expected: usize, got: usize },

    /// A coordinate is not smaller than the extent of its dimension.
    #[error("Index Out of Range: index {index} for dimension {dim} with size {size}")]
    IndexOutOfRange { index: usize, dim: usize, size: usize },

    /// Destination of a bulk copy holds a different number of elements.
    #[error("Length Mismatch: destination holds {got} elements, expected {expected}")]
    LengthMismatch { expected: usize, got: usize },

    /// The shared buffer is already borrowed in a conflicting way, e.g. a `data_mut` guard is alive on an alias.
    #[error("Buffer Borrowed: shared buffer is in use")]
    BufferBorrowed,
}
