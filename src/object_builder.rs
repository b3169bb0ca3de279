//! Recursive template-to-object construction.
//!
//! An [`ObjectBuilder`] turns a shape description (a JSON object whose leaves
//! are type tokens, one-token arrays, or nested shapes) into a fully populated
//! object, delegating every leaf value to the generation context.

use serde_json::{Map, Value};

use crate::error::{FixtureError, FixtureResult};
use crate::fixture::FixtureContext;
use crate::generators::ValueGenerator;

/// Returns a short name for a JSON value's kind, for error messages.
pub(crate) fn value_kind(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "boolean",
		Value::Number(_) => "number",
		Value::String(_) => "string",
		Value::Array(_) => "array",
		Value::Object(_) => "object",
	}
}

/// Classification of a single template leaf, computed before dispatch.
enum TemplateLeaf<'a> {
	/// A type token to resolve against the registry.
	TypeToken(&'a str),
	/// A one-element array holding a type token: generate a sequence.
	TokenSequence(&'a str),
	/// A nested shape: descend recursively.
	Nested(&'a Map<String, Value>),
	/// An array that does not hold exactly one type token.
	MalformedSequence,
	/// Any other value kind.
	Invalid,
}

fn classify(value: &Value) -> TemplateLeaf<'_> {
	match value {
		Value::String(token) => TemplateLeaf::TypeToken(token),
		Value::Array(elements) => match elements.as_slice() {
			[Value::String(token)] => TemplateLeaf::TokenSequence(token),
			_ => TemplateLeaf::MalformedSequence,
		},
		Value::Object(map) => TemplateLeaf::Nested(map),
		_ => TemplateLeaf::Invalid,
	}
}

/// Builds concrete objects from a template.
///
/// Bound to a template at construction; each [`create`](ObjectBuilder::create)
/// call produces an independent instance. Obtained from
/// [`FixtureContext::from`], or constructed directly with a context and
/// generator.
///
/// # Example
///
/// ```ignore
/// let fixture = Fixture::default();
/// let object = fixture
///     .from(&json!({
///         "name": "string",
///         "scores": ["number"],
///         "flags": { "active": "boolean" },
///     }))?
///     .create()?;
/// ```
pub struct ObjectBuilder<'f> {
	template: Map<String, Value>,
	context: &'f dyn FixtureContext,
	generator: &'f dyn ValueGenerator<usize>,
}

impl core::fmt::Debug for ObjectBuilder<'_> {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_struct("ObjectBuilder")
			.field("template", &self.template)
			.finish_non_exhaustive()
	}
}

impl<'f> ObjectBuilder<'f> {
	/// Creates a builder bound to the given template.
	///
	/// # Errors
	///
	/// Returns [`FixtureError::InvalidTemplate`] if the template is not an
	/// object.
	pub fn new(
		template: &Value,
		context: &'f dyn FixtureContext,
		generator: &'f dyn ValueGenerator<usize>,
	) -> FixtureResult<Self> {
		match template {
			Value::Object(map) => Ok(Self::from_map(map.clone(), context, generator)),
			other => Err(FixtureError::InvalidTemplate(value_kind(other).to_string())),
		}
	}

	fn from_map(
		template: Map<String, Value>,
		context: &'f dyn FixtureContext,
		generator: &'f dyn ValueGenerator<usize>,
	) -> Self {
		Self {
			template,
			context,
			generator,
		}
	}

	/// Builds one object from the bound template.
	///
	/// Each template property is generated independently: type tokens resolve
	/// through the context, one-token arrays become generated sequences, and
	/// nested shapes descend recursively. An empty template yields an object
	/// with no properties.
	///
	/// # Errors
	///
	/// Returns [`FixtureError::MalformedArray`] for array leaves that do not
	/// hold exactly one type token, [`FixtureError::UnsupportedValue`] for
	/// leaves of any other kind, and propagates context failures such as
	/// [`FixtureError::BuilderNotFound`].
	pub fn create(&self) -> FixtureResult<Value> {
		let mut object = Map::new();

		for (property, value) in &self.template {
			let generated = match classify(value) {
				TemplateLeaf::TypeToken(token) => self.context.create(token)?,
				TemplateLeaf::TokenSequence(token) => {
					Value::Array(self.context.create_many(token, None)?)
				}
				TemplateLeaf::Nested(map) => {
					Self::from_map(map.clone(), self.context, self.generator).create()?
				}
				TemplateLeaf::MalformedSequence => {
					return Err(FixtureError::MalformedArray(property.clone()));
				}
				TemplateLeaf::Invalid => {
					return Err(FixtureError::UnsupportedValue(property.clone()));
				}
			};
			object.insert(property.clone(), generated);
		}

		Ok(Value::Object(object))
	}

	/// Builds `size` independent objects; without an explicit size the bound
	/// generator decides the count.
	pub fn create_many(&self, size: Option<usize>) -> FixtureResult<Vec<Value>> {
		let size = size.unwrap_or_else(|| self.generator.generate());
		let mut list = Vec::with_capacity(size);

		for _ in 0..size {
			list.push(self.create()?);
		}

		Ok(list)
	}
}
