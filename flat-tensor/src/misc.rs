use super::*;
use std::fmt;

impl<T: PartialEq, const N: usize> PartialEq for Tensor<T, N> {
    fn eq(&self, other: &Self) -> bool {
        if self.shape != other.shape {
            return false;
        }
        if self.shares_buffer(other) {
            return true;
        }

        *self.data.borrow() == *other.data.borrow()
    }
}

impl<T: Eq, const N: usize> Eq for Tensor<T, N> {}

impl<T: fmt::Debug, const N: usize> fmt::Debug for Tensor<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = f.debug_struct("Tensor");
        debug.field("shape", &self.shape);
        match self.data.try_borrow() {
            Ok(data) => debug.field("elements", &data.as_slice()),
            Err(_) => debug.field("elements", &format_args!("<borrowed>")),
        };
        debug.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn can_compare_tensors() -> Result<()> {
        let tensor1 = Tensor::<i32>::from(vec![0, 1, 2, 3, 4]);
        let tensor2 = Tensor::<i32>::from(vec![0, 1, 2, 3, 4]);
        let tensor3 = Tensor::<i32>::from(vec![0, 1, 2, 3, 4, 5]);

        assert_eq!(tensor1, tensor2);
        assert_ne!(tensor1, tensor3);
        assert_eq!(tensor1, tensor1.clone());

        Ok(())
    }

    #[test]
    fn compare_reshaped_tensors() -> Result<()> {
        let tensor = Tensor::<i32>::new((0..8).collect(), &[8])?;

        let view1 = tensor.reshape(&[2, 4])?;
        let view2 = tensor.reshape(&[2, 2, 2])?;

        assert_ne!(view1, view2);
        assert_eq!(Tensor::<i32>::new((0..8).collect(), &[2, 4])?, view1);
        assert_eq!(Tensor::<i32>::new((0..8).collect(), &[2, 2, 2])?, view2);

        Ok(())
    }

    #[test]
    fn debug_shows_shape_and_elements() -> Result<()> {
        let tensor = Tensor::<i32>::new(vec![1, 2, 3, 4], &[2, 2])?;

        assert_eq!(
            format!("{tensor:?}"),
            "Tensor { shape: [2, 2], elements: [1, 2, 3, 4] }"
        );

        Ok(())
    }
}
