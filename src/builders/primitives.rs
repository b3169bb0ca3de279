//! Built-in builders for primitive value kinds.
//!
//! Each builder is a thin adapter from a [`ValueGenerator`] to the
//! [`TypeBuilder`] contract, registered under its [`PrimitiveType`] token.

use rand::Rng;
use serde_json::Value;

use super::{PrimitiveType, TypeBuilder};
use crate::error::FixtureResult;
use crate::fixture::FixtureContext;
use crate::generators::ValueGenerator;

/// Builds random string values.
pub struct StringBuilder {
	generator: Box<dyn ValueGenerator<String> + Send + Sync>,
}

impl StringBuilder {
	/// Creates a string builder backed by the given generator.
	pub fn new(generator: impl ValueGenerator<String> + Send + Sync + 'static) -> Self {
		Self {
			generator: Box::new(generator),
		}
	}
}

impl TypeBuilder for StringBuilder {
	fn type_name(&self) -> &str {
		PrimitiveType::String.name()
	}

	fn build(&self, _context: &dyn FixtureContext) -> FixtureResult<Value> {
		Ok(Value::String(self.generator.generate()))
	}
}

/// Builds random integer values.
pub struct NumberBuilder {
	generator: Box<dyn ValueGenerator<u64> + Send + Sync>,
}

impl NumberBuilder {
	/// Creates a number builder backed by the given generator.
	pub fn new(generator: impl ValueGenerator<u64> + Send + Sync + 'static) -> Self {
		Self {
			generator: Box::new(generator),
		}
	}
}

impl TypeBuilder for NumberBuilder {
	fn type_name(&self) -> &str {
		PrimitiveType::Number.name()
	}

	fn build(&self, _context: &dyn FixtureContext) -> FixtureResult<Value> {
		Ok(Value::from(self.generator.generate()))
	}
}

/// Builds random boolean values.
#[derive(Debug, Default)]
pub struct BooleanBuilder;

impl TypeBuilder for BooleanBuilder {
	fn type_name(&self) -> &str {
		PrimitiveType::Boolean.name()
	}

	fn build(&self, _context: &dyn FixtureContext) -> FixtureResult<Value> {
		Ok(Value::Bool(rand::thread_rng().gen_bool(0.5)))
	}
}

/// Builds the null value.
#[derive(Debug, Default)]
pub struct NullBuilder;

impl TypeBuilder for NullBuilder {
	fn type_name(&self) -> &str {
		PrimitiveType::Null.name()
	}

	fn build(&self, _context: &dyn FixtureContext) -> FixtureResult<Value> {
		Ok(Value::Null)
	}
}
