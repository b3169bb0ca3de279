//! Fixture orchestration: type resolution, freezing, and the generation
//! context.

use std::collections::HashMap;

use parking_lot::RwLock;
use serde_json::Value;
use tracing::{debug, trace};

use crate::builders::{BooleanBuilder, NullBuilder, NumberBuilder, StringBuilder, TypeBuilder};
use crate::composer::TypeComposer;
use crate::customization::Customization;
use crate::error::{FixtureError, FixtureResult};
use crate::generators::{NumberGenerator, StringGenerator, ValueGenerator};
use crate::object_builder::ObjectBuilder;

/// Generation capability set passed to builders, object builders, and
/// composers.
///
/// Implementors (normally a [`Fixture`]) let collaborators recursively
/// request further generation without depending on a concrete fixture type.
pub trait FixtureContext {
	/// Creates one instance of a registered type.
	fn create(&self, type_name: &str) -> FixtureResult<Value>;

	/// Creates `size` independent instances of a registered type; without an
	/// explicit size the fixture's generator decides the count.
	fn create_many(&self, type_name: &str, size: Option<usize>) -> FixtureResult<Vec<Value>>;

	/// Returns a composer for building customized instances of a type.
	fn build(&self, type_name: &str) -> TypeComposer<'_>;

	/// Returns an object builder bound to a template.
	///
	/// # Errors
	///
	/// Returns [`FixtureError::InvalidTemplate`] if the template is not an
	/// object.
	fn from(&self, template: &Value) -> FixtureResult<ObjectBuilder<'_>>;
}

/// Orchestrator owning the builder registry, the sizing generator, and the
/// frozen-value cache.
///
/// A fixture is constructed explicitly and passed around; there is no global
/// instance. Lifecycle methods take `&self` and return `&Self` so calls can
/// be chained. A fixture is not designed for concurrent mutation across test
/// cases.
///
/// # Example
///
/// ```
/// use fixture_forge::prelude::*;
///
/// let fixture = Fixture::default();
/// let value = fixture.create("string").unwrap();
/// assert!(value.is_string());
/// ```
pub struct Fixture {
	customizations: RwLock<Customization>,
	generator: Box<dyn ValueGenerator<usize> + Send + Sync>,
	frozen: RwLock<HashMap<String, Value>>,
}

impl core::fmt::Debug for Fixture {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_struct("Fixture")
			.field("frozen", &self.frozen)
			.finish_non_exhaustive()
	}
}

impl Fixture {
	/// Creates a fixture with an empty registry and the given sizing
	/// generator.
	pub fn new(generator: impl ValueGenerator<usize> + Send + Sync + 'static) -> Self {
		Self {
			customizations: RwLock::new(Customization::new()),
			generator: Box::new(generator),
			frozen: RwLock::new(HashMap::new()),
		}
	}

	/// Registers a single builder in the local registry, overwriting any
	/// prior entry for its type name.
	pub fn register<B: TypeBuilder + 'static>(&self, builder: B) -> &Self {
		self.customizations.write().add(builder);
		self
	}

	/// Merges a customization's entries into the local registry; merged
	/// entries win on name collisions.
	pub fn customize(&self, customization: Customization) -> &Self {
		self.customizations.write().merge(customization);
		self
	}

	/// Checks whether a builder is registered for the type name.
	pub fn has_builder(&self, type_name: &str) -> bool {
		self.customizations.read().has(type_name)
	}

	/// Generates a value for the type once and pins it: all subsequent
	/// [`create`](FixtureContext::create) calls for the type return the
	/// pinned value until [`reset`](Fixture::reset).
	///
	/// Idempotent: freezing an already-pinned type is a no-op. The pinned
	/// master is private and only ever cloned out, so callers cannot mutate
	/// it.
	///
	/// # Errors
	///
	/// Propagates generation failures, including
	/// [`FixtureError::BuilderNotFound`].
	pub fn freeze(&self, type_name: &str) -> FixtureResult<&Self> {
		if self.frozen.read().contains_key(type_name) {
			return Ok(self);
		}

		let value = self.create(type_name)?;
		debug!(type_name, "froze generated value");
		self.frozen
			.write()
			.entry(type_name.to_string())
			.or_insert(value);
		Ok(self)
	}

	/// Pins an injected value for the type, bypassing any builder.
	///
	/// Unlike [`freeze`](Fixture::freeze) this overwrites an existing pinned
	/// value. A builder must still be registered for the type before
	/// [`create`](FixtureContext::create) will resolve it.
	pub fn use_value(&self, type_name: &str, value: Value) -> &Self {
		debug!(type_name, "pinned injected value");
		self.frozen.write().insert(type_name.to_string(), value);
		self
	}

	/// Clears every pinned value; subsequent `create` calls resume
	/// builder-driven generation.
	pub fn reset(&self) {
		debug!("cleared pinned values");
		self.frozen.write().clear();
	}

	fn sizing(&self) -> &dyn ValueGenerator<usize> {
		self.generator.as_ref()
	}
}

impl FixtureContext for Fixture {
	fn create(&self, type_name: &str) -> FixtureResult<Value> {
		let builder = self
			.customizations
			.read()
			.get(type_name)
			.ok_or_else(|| FixtureError::BuilderNotFound(type_name.to_string()))?;

		if let Some(value) = self.frozen.read().get(type_name) {
			return Ok(value.clone());
		}

		trace!(type_name, "building instance");
		builder.build(self)
	}

	fn create_many(&self, type_name: &str, size: Option<usize>) -> FixtureResult<Vec<Value>> {
		let size = size.unwrap_or_else(|| self.generator.generate());
		let mut list = Vec::with_capacity(size);

		for _ in 0..size {
			list.push(self.create(type_name)?);
		}

		Ok(list)
	}

	fn build(&self, type_name: &str) -> TypeComposer<'_> {
		TypeComposer::new(type_name, self, self.sizing())
	}

	fn from(&self, template: &Value) -> FixtureResult<ObjectBuilder<'_>> {
		ObjectBuilder::new(template, self, self.sizing())
	}
}

impl Default for Fixture {
	/// Creates a fixture with the primitive builders pre-registered and a
	/// sequence size of 5 to 75 elements.
	fn default() -> Self {
		let fixture = Fixture::new(NumberGenerator::new(5, 75));
		fixture
			.register(StringBuilder::new(StringGenerator))
			.register(NumberBuilder::new(NumberGenerator::new(1, 250)))
			.register(BooleanBuilder)
			.register(NullBuilder);
		fixture
	}
}
