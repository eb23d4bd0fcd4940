use std::ops::{Deref, DerefMut};

/// A vector of `Copy` values that keeps up to N of them inline
/// and moves to a heap allocation once it grows past that.
///
/// Tensors use it for shapes and strides: most ranks fit inline, so creating a
/// view or a clone does not allocate for its dimensions.
pub struct SmallVec<T: Copy + Default, const N: usize> {
    data: SmallVecData<T, N>,
    len: usize,
}

enum SmallVecData<T, const N: usize> {
    Inline([T; N]),
    Heap(Vec<T>),
}

impl<T: Copy + Default, const N: usize> SmallVec<T, N> {
    /// Creates a new empty SmallVec
    pub fn new() -> Self {
        Self {
            data: SmallVecData::Inline([T::default(); N]),
            len: 0,
        }
    }

    /// Returns the number of elements in the SmallVec
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the SmallVec is empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the capacity of the SmallVec
    pub fn capacity(&self) -> usize {
        match &self.data {
            SmallVecData::Inline(_) => N,
            SmallVecData::Heap(vec) => vec.capacity(),
        }
    }

    /// Appends an element, spilling to the heap when the inline array is full.
    pub fn push(&mut self, value: T) {
        if let SmallVecData::Inline(arr) = &mut self.data {
            if self.len < N {
                arr[self.len] = value;
                self.len += 1;
                return;
            }
            let mut vec = Vec::with_capacity(N * 2 + 1);
            vec.extend_from_slice(&arr[..self.len]);
            self.data = SmallVecData::Heap(vec);
        }

        if let SmallVecData::Heap(vec) = &mut self.data {
            vec.push(value);
            self.len += 1;
        }
    }
}

impl<T: Copy + Default, const N: usize> Default for SmallVec<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy + Default, const N: usize> Deref for SmallVec<T, N> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        match &self.data {
            SmallVecData::Inline(arr) => &arr[..self.len],
            SmallVecData::Heap(vec) => vec.as_slice(),
        }
    }
}

impl<T: Copy + Default, const N: usize> DerefMut for SmallVec<T, N> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        match &mut self.data {
            SmallVecData::Inline(arr) => &mut arr[..self.len],
            SmallVecData::Heap(vec) => vec.as_mut_slice(),
        }
    }
}

impl<T: Copy + Default, const N: usize> Clone for SmallVec<T, N> {
    fn clone(&self) -> Self {
        self.iter().copied().collect()
    }
}

impl<T: Copy + Default + PartialEq, const N: usize> PartialEq for SmallVec<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.deref() == other.deref()
    }
}

impl<T: Copy + Default + Eq, const N: usize> Eq for SmallVec<T, N> {}

impl<T: Copy + Default + std::fmt::Debug, const N: usize> std::fmt::Debug for SmallVec<T, N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Copy + Default, const N: usize> FromIterator<T> for SmallVec<T, N> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut sv = Self::new();
        for item in iter {
            sv.push(item);
        }
        sv
    }
}

impl<'a, T: Copy + Default, const N: usize> IntoIterator for &'a SmallVec<T, N> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[macro_export]
macro_rules! small_vec {
    ($($elem:expr),* $(,)?) => {
        {
            let mut sv = $crate::SmallVec::new();
            $(sv.push($elem);)*
            sv
        }
    };
    ($elem:expr; $n:expr) => {
        {
            let mut sv = $crate::SmallVec::new();
            for _ in 0..$n {
                sv.push($elem);
            }
            sv
        }
    };
}
