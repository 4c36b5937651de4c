use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::TrainerError;
use crate::theory::STRING_COUNT;

/// Permutation of the six string indices that guided practice walks through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StringOrder([usize; STRING_COUNT]);

impl StringOrder {
    /// Validate that `order` names every string exactly once.
    pub fn new(order: [usize; STRING_COUNT]) -> Result<Self, TrainerError> {
        let mut seen = [false; STRING_COUNT];
        for &string in &order {
            if string >= STRING_COUNT {
                return Err(TrainerError::InvalidStringOrder(format!(
                    "string index {string} does not exist"
                )));
            }
            if seen[string] {
                return Err(TrainerError::InvalidStringOrder(format!(
                    "string index {string} appears twice"
                )));
            }
            seen[string] = true;
        }
        Ok(Self(order))
    }

    /// Draw a uniformly random permutation.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut order: [usize; STRING_COUNT] = std::array::from_fn(|string| string);
        order.shuffle(rng);
        Self(order)
    }

    pub fn get(&self, position: usize) -> Option<usize> {
        self.0.get(position).copied()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }
}
