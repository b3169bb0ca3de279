//! Synthetic data generation for automated test suites.
//!
//! Given a lightweight shape description (a template) or a registered type
//! name, fixture-forge produces fully populated object instances, arrays of
//! instances, and mutated variants, so test authors do not hand-write every
//! field value.
//!
//! # Quick Start
//!
//! ## Generating from templates
//!
//! A template is a JSON object whose leaves are type tokens (strings naming
//! registered builders), one-token arrays (meaning "an array of this type"),
//! or nested templates:
//!
//! ```
//! use fixture_forge::prelude::*;
//! use serde_json::json;
//!
//! let fixture = Fixture::default();
//! let user = fixture
//!     .from(&json!({
//!         "name": "string",
//!         "age": "number",
//!         "tags": ["string"],
//!         "address": { "city": "string" },
//!     }))
//!     .unwrap()
//!     .create()
//!     .unwrap();
//!
//! assert!(user["name"].is_string());
//! assert!(user["tags"].is_array());
//! assert!(user["address"]["city"].is_string());
//! ```
//!
//! ## Registering custom types
//!
//! ```
//! use fixture_forge::prelude::*;
//! use serde_json::{Value, json};
//!
//! struct UserBuilder;
//!
//! impl TypeBuilder for UserBuilder {
//!     fn type_name(&self) -> &str {
//!         "User"
//!     }
//!
//!     fn build(&self, context: &dyn FixtureContext) -> FixtureResult<Value> {
//!         Ok(json!({
//!             "name": context.create("string")?,
//!             "active": true,
//!         }))
//!     }
//! }
//!
//! let fixture = Fixture::default();
//! fixture.register(UserBuilder);
//!
//! let user = fixture.create("User").unwrap();
//! assert!(user["name"].is_string());
//! ```
//!
//! ## Composing variants
//!
//! ```
//! # use fixture_forge::prelude::*;
//! # use serde_json::{Value, json};
//! # struct UserBuilder;
//! # impl TypeBuilder for UserBuilder {
//! #     fn type_name(&self) -> &str { "User" }
//! #     fn build(&self, _: &dyn FixtureContext) -> FixtureResult<Value> {
//! #         Ok(json!({"name": "x", "active": true}))
//! #     }
//! # }
//! # let fixture = Fixture::default();
//! # fixture.register(UserBuilder);
//! let inactive = fixture
//!     .build("User")
//!     .with("active", |_| json!(false))
//!     .without("name")
//!     .create()
//!     .unwrap();
//!
//! assert_eq!(inactive["active"], json!(false));
//! assert!(inactive.get("name").is_none());
//! ```
//!
//! # Architecture
//!
//! - [`Fixture`] — orchestrator owning the builder registry
//!   ([`Customization`]), the sizing generator, and the frozen-value cache;
//!   implements the [`FixtureContext`] capability contract.
//! - [`ObjectBuilder`] — recursive template descent.
//! - [`TypeComposer`] — fluent queue of mutations applied to a base instance.
//! - [`TypeBuilder`] / [`ValueGenerator`] — external collaborator contracts
//!   for leaf values and randomness.
//!
//! Everything is synchronous and in-memory; errors surface immediately as
//! [`FixtureError`].

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod builders;
pub mod composer;
pub mod customization;
pub mod error;
pub mod fixture;
pub mod generators;
pub mod object_builder;
pub mod prelude;

// Re-export commonly used types at crate root
pub use builders::{
	BooleanBuilder, NullBuilder, NumberBuilder, PrimitiveType, StringBuilder, TypeBuilder,
};
pub use composer::TypeComposer;
pub use customization::Customization;
pub use error::{FixtureError, FixtureResult};
pub use fixture::{Fixture, FixtureContext};
pub use generators::{NumberGenerator, StringGenerator, ValueGenerator};
pub use object_builder::ObjectBuilder;
