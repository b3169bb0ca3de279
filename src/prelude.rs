//! Convenience re-exports for common usage.
//!
//! This module provides a single import for the most commonly used items
//! from the fixture-forge crate.
//!
//! # Example
//!
//! ```
//! use fixture_forge::prelude::*;
//!
//! let fixture = Fixture::default();
//! assert!(fixture.create("number").unwrap().is_number());
//! ```

// Error types
pub use crate::error::{FixtureError, FixtureResult};

// Orchestration
pub use crate::composer::TypeComposer;
pub use crate::customization::Customization;
pub use crate::fixture::{Fixture, FixtureContext};
pub use crate::object_builder::ObjectBuilder;

// Builders
pub use crate::builders::{
	BooleanBuilder, NullBuilder, NumberBuilder, PrimitiveType, StringBuilder, TypeBuilder,
};

// Generators
pub use crate::generators::{NumberGenerator, StringGenerator, ValueGenerator};
