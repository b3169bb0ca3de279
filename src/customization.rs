//! Builder registry keyed by type name.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::builders::TypeBuilder;

/// Registry mapping type names to builders.
///
/// A customization is instance-owned state: it is built up by the caller and
/// handed to a [`Fixture`](crate::Fixture), never shared through globals.
/// Registering a builder under a name that is already taken overwrites the
/// earlier entry — last registration wins.
///
/// # Example
///
/// ```
/// use fixture_forge::{Customization, NullBuilder};
///
/// let mut customization = Customization::new();
/// customization.add(NullBuilder);
/// assert!(customization.has("null"));
/// ```
#[derive(Clone, Default)]
pub struct Customization {
	builders: HashMap<String, Arc<dyn TypeBuilder>>,
}

impl Customization {
	/// Creates an empty registry.
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers a builder under its type name, overwriting any prior entry.
	pub fn add<B: TypeBuilder + 'static>(&mut self, builder: B) {
		self.add_shared(Arc::new(builder));
	}

	/// Registers an already-shared builder, overwriting any prior entry.
	pub fn add_shared(&mut self, builder: Arc<dyn TypeBuilder>) {
		self.builders
			.insert(builder.type_name().to_string(), builder);
	}

	/// Returns the builder registered for the type name, if any.
	pub fn get(&self, type_name: &str) -> Option<Arc<dyn TypeBuilder>> {
		self.builders.get(type_name).cloned()
	}

	/// Checks whether a builder is registered for the type name.
	pub fn has(&self, type_name: &str) -> bool {
		self.builders.contains_key(type_name)
	}

	/// Returns all registered type names.
	pub fn type_names(&self) -> Vec<String> {
		self.builders.keys().cloned().collect()
	}

	/// Returns the number of registered builders.
	pub fn len(&self) -> usize {
		self.builders.len()
	}

	/// Returns true if no builders are registered.
	pub fn is_empty(&self) -> bool {
		self.builders.is_empty()
	}

	/// Merges another registry into this one; entries from `other` win on
	/// name collisions.
	pub fn merge(&mut self, other: Customization) {
		for (type_name, builder) in other.builders {
			self.builders.insert(type_name, builder);
		}
	}
}

impl fmt::Debug for Customization {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Customization")
			.field("types", &self.type_names())
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::FixtureResult;
	use crate::fixture::FixtureContext;
	use rstest::rstest;
	use serde_json::{Value, json};

	struct StaticBuilder {
		type_name: &'static str,
		value: Value,
	}

	impl TypeBuilder for StaticBuilder {
		fn type_name(&self) -> &str {
			self.type_name
		}

		fn build(&self, _context: &dyn FixtureContext) -> FixtureResult<Value> {
			Ok(self.value.clone())
		}
	}

	#[rstest]
	fn test_add_and_get() {
		let mut customization = Customization::new();
		assert!(customization.is_empty());

		customization.add(StaticBuilder {
			type_name: "User",
			value: json!({"name": "test"}),
		});

		assert_eq!(customization.len(), 1);
		assert!(customization.has("User"));
		assert!(!customization.has("Post"));

		let builder = customization.get("User").unwrap();
		assert_eq!(builder.type_name(), "User");
	}

	#[rstest]
	fn test_last_registration_wins() {
		let mut customization = Customization::new();
		customization.add(StaticBuilder {
			type_name: "User",
			value: json!("first"),
		});
		customization.add(StaticBuilder {
			type_name: "User",
			value: json!("second"),
		});

		assert_eq!(customization.len(), 1);
	}

	#[rstest]
	fn test_merge_later_entries_overwrite() {
		let mut base = Customization::new();
		base.add(StaticBuilder {
			type_name: "User",
			value: json!("base"),
		});
		base.add(StaticBuilder {
			type_name: "Post",
			value: json!("base"),
		});

		let mut overlay = Customization::new();
		overlay.add(StaticBuilder {
			type_name: "User",
			value: json!("overlay"),
		});

		base.merge(overlay);
		assert_eq!(base.len(), 2);

		let mut names = base.type_names();
		names.sort();
		assert_eq!(names, vec!["Post", "User"]);
	}
}
