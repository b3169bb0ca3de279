//! Error types for fixture generation.
//!
//! This module defines the error taxonomy used throughout the fixture-forge
//! crate. Every failure is synchronous and propagates directly to the caller;
//! there is no retry or recovery layer.

use thiserror::Error;

/// Errors that can occur while generating fixture data.
#[derive(Debug, Error)]
pub enum FixtureError {
	/// Template passed to an object builder is not an object.
	#[error("Template must be an object, got {0}")]
	InvalidTemplate(String),

	/// Array leaf in a template does not contain exactly one type token.
	#[error("Array for property '{0}' must contain exactly one element describing the element type")]
	MalformedArray(String),

	/// Template leaf is neither a type token, a one-token array, nor a nested template.
	#[error("Unsupported template value for property '{0}'")]
	UnsupportedValue(String),

	/// No builder registered for the requested type token.
	#[error("No builder defined for type or alias '{0}'")]
	BuilderNotFound(String),

	/// A `with` modification targeted a property absent from the base instance.
	#[error("Property '{property}' does not exist on type '{type_name}'")]
	PropertyNotFound {
		/// Property the modification targeted.
		property: String,
		/// Type the base instance was generated from.
		type_name: String,
	},

	/// Composer base instance is not an object.
	#[error("TypeComposer can only be used with object types, got {0}")]
	CompositionType(String),
}

/// Result type alias for fixture operations.
pub type FixtureResult<T> = Result<T, FixtureError>;
