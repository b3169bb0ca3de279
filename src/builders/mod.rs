//! Type builders for named fixture types.
//!
//! A [`TypeBuilder`] knows how to produce one instance of a named type. The
//! builders shipped here cover the primitive value kinds; applications add
//! their own builders for domain types via
//! [`Customization`](crate::Customization) and can compose nested types by
//! calling back into the [`FixtureContext`](crate::FixtureContext) they are
//! handed.

mod primitive_type;
mod primitives;

pub use primitive_type::PrimitiveType;
pub use primitives::{BooleanBuilder, NullBuilder, NumberBuilder, StringBuilder};

use serde_json::Value;

use crate::error::FixtureResult;
use crate::fixture::FixtureContext;

/// Capability to build one instance of a named type.
///
/// Implementations are registered in a [`Customization`](crate::Customization)
/// under their [`type_name`](TypeBuilder::type_name) and resolved at runtime
/// when a matching type token is requested.
///
/// # Example
///
/// ```
/// use fixture_forge::{FixtureContext, FixtureResult, TypeBuilder};
/// use serde_json::{Value, json};
///
/// struct AgeBuilder;
///
/// impl TypeBuilder for AgeBuilder {
///     fn type_name(&self) -> &str {
///         "Age"
///     }
///
///     fn build(&self, _context: &dyn FixtureContext) -> FixtureResult<Value> {
///         Ok(json!(42))
///     }
/// }
/// ```
pub trait TypeBuilder: Send + Sync {
	/// Returns the type name this builder serves.
	fn type_name(&self) -> &str;

	/// Builds one instance of the type.
	///
	/// The `context` lets a builder request further generation for nested
	/// types without depending on a concrete fixture implementation.
	fn build(&self, context: &dyn FixtureContext) -> FixtureResult<Value>;
}
