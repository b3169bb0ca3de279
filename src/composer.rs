//! Fluent composition of customized instances.
//!
//! A [`TypeComposer`] generates a base instance of a registered type and then
//! applies a queue of modifications to it: whole-object mutations
//! ([`apply`](TypeComposer::apply)), property replacements
//! ([`with`](TypeComposer::with)), and property removals
//! ([`without`](TypeComposer::without)). Modifications run strictly in the
//! order they were queued.

use serde_json::{Map, Value};

use crate::error::{FixtureError, FixtureResult};
use crate::fixture::FixtureContext;
use crate::generators::ValueGenerator;
use crate::object_builder::value_kind;

type DoAction = Box<dyn Fn(&mut Map<String, Value>)>;
type WithAction = Box<dyn Fn(Value) -> Value>;

/// One queued mutation, tagged by kind.
enum Modification {
	Do(DoAction),
	With { property: String, action: WithAction },
	Without(String),
}

/// Builds customized instances of a registered type.
///
/// Obtained from [`FixtureContext::build`]. Each modification method takes and
/// returns the composer for fluent chaining; nothing executes until
/// [`create`](TypeComposer::create).
///
/// # Example
///
/// ```ignore
/// let admin = fixture
///     .build("User")
///     .with("role", |_| json!("admin"))
///     .without("password")
///     .create()?;
/// ```
pub struct TypeComposer<'f> {
	type_name: String,
	context: &'f dyn FixtureContext,
	generator: &'f dyn ValueGenerator<usize>,
	modifications: Vec<Modification>,
}

impl<'f> TypeComposer<'f> {
	/// Creates a composer bound to the given type.
	pub fn new(
		type_name: impl Into<String>,
		context: &'f dyn FixtureContext,
		generator: &'f dyn ValueGenerator<usize>,
	) -> Self {
		Self {
			type_name: type_name.into(),
			context,
			generator,
			modifications: Vec::new(),
		}
	}

	/// Queues an arbitrary mutation of the whole object.
	pub fn apply(mut self, action: impl Fn(&mut Map<String, Value>) + 'static) -> Self {
		self.modifications.push(Modification::Do(Box::new(action)));
		self
	}

	/// Queues a replacement of a property's value, computed from its current
	/// value.
	///
	/// The action always receives an owned copy of the current value, so it
	/// can never mutate state aliased by other instances. An explicit JSON
	/// `null` counts as a present value; only an absent property fails.
	pub fn with(
		mut self,
		property: impl Into<String>,
		action: impl Fn(Value) -> Value + 'static,
	) -> Self {
		self.modifications.push(Modification::With {
			property: property.into(),
			action: Box::new(action),
		});
		self
	}

	/// Queues a removal of a property. Removing an absent property is a
	/// no-op.
	pub fn without(mut self, property: impl Into<String>) -> Self {
		self.modifications
			.push(Modification::Without(property.into()));
		self
	}

	/// Generates one base instance and applies the queued modifications in
	/// queue order.
	///
	/// # Errors
	///
	/// Returns [`FixtureError::CompositionType`] if the base instance is not
	/// an object, [`FixtureError::PropertyNotFound`] if a
	/// [`with`](TypeComposer::with) modification targets an absent property,
	/// and propagates generation failures from the context.
	pub fn create(&self) -> FixtureResult<Value> {
		let base = self.context.create(&self.type_name)?;
		let mut object = match base {
			Value::Object(map) => map,
			other => {
				return Err(FixtureError::CompositionType(value_kind(&other).to_string()));
			}
		};

		for modification in &self.modifications {
			match modification {
				Modification::Do(action) => action(&mut object),
				Modification::With { property, action } => {
					let current = object.get(property).cloned().ok_or_else(|| {
						FixtureError::PropertyNotFound {
							property: property.clone(),
							type_name: self.type_name.clone(),
						}
					})?;
					object.insert(property.clone(), action(current));
				}
				Modification::Without(property) => {
					object.remove(property);
				}
			}
		}

		Ok(Value::Object(object))
	}

	/// Creates `size` independent customized instances; without an explicit
	/// size the bound generator decides the count.
	pub fn create_many(&self, size: Option<usize>) -> FixtureResult<Vec<Value>> {
		let size = size.unwrap_or_else(|| self.generator.generate());
		let mut list = Vec::with_capacity(size);

		for _ in 0..size {
			list.push(self.create()?);
		}

		Ok(list)
	}
}
