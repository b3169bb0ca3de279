//! Primitive type token definitions.

/// Type tokens served by the built-in primitive builders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
	/// Random string values.
	String,

	/// Random integer values.
	Number,

	/// Random boolean values.
	Boolean,

	/// The null value.
	Null,
}

impl PrimitiveType {
	/// Returns the type token this primitive is registered under.
	///
	/// # Example
	///
	/// ```
	/// # use fixture_forge::PrimitiveType;
	/// assert_eq!(PrimitiveType::String.name(), "string");
	/// assert_eq!(PrimitiveType::Null.name(), "null");
	/// ```
	pub fn name(&self) -> &'static str {
		match self {
			Self::String => "string",
			Self::Number => "number",
			Self::Boolean => "boolean",
			Self::Null => "null",
		}
	}

	/// Resolves a type token to a primitive, if it names one.
	pub fn from_name(name: &str) -> Option<Self> {
		match name {
			"string" => Some(Self::String),
			"number" => Some(Self::Number),
			"boolean" => Some(Self::Boolean),
			"null" => Some(Self::Null),
			_ => None,
		}
	}
}

impl std::fmt::Display for PrimitiveType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.name())
	}
}
