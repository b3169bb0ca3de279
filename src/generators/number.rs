//! Uniform integer generation.

use rand::Rng;

use super::ValueGenerator;

/// Generates uniformly distributed integers in an inclusive range.
///
/// Implements both [`ValueGenerator<u64>`] (for number builders) and
/// [`ValueGenerator<usize>`] (for sequence sizing).
///
/// # Example
///
/// ```
/// use fixture_forge::generators::{NumberGenerator, ValueGenerator};
///
/// let generator = NumberGenerator::new(1, 250);
/// let value: u64 = generator.generate();
/// assert!((1..=250).contains(&value));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct NumberGenerator {
	min: u64,
	max: u64,
}

impl NumberGenerator {
	/// Creates a new generator for the inclusive range `[min, max]`.
	///
	/// # Panics
	///
	/// Panics if `min > max`.
	pub fn new(min: u64, max: u64) -> Self {
		assert!(min <= max, "invalid range: min {min} > max {max}");
		Self { min, max }
	}
}

impl ValueGenerator<u64> for NumberGenerator {
	fn generate(&self) -> u64 {
		rand::thread_rng().gen_range(self.min..=self.max)
	}
}

impl ValueGenerator<usize> for NumberGenerator {
	fn generate(&self) -> usize {
		rand::thread_rng().gen_range(self.min as usize..=self.max as usize)
	}
}
