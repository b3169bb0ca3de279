//! Random value generators.
//!
//! Generators are the source of randomness for fixture generation: they size
//! generated sequences and feed the primitive type builders. Anything
//! implementing [`ValueGenerator`] can be plugged in, so tests can substitute
//! deterministic counters for the random defaults.

mod number;
mod string;

pub use number::NumberGenerator;
pub use string::StringGenerator;

/// Capability to produce a value of type `T`.
pub trait ValueGenerator<T> {
	/// Generates one value.
	fn generate(&self) -> T;
}
