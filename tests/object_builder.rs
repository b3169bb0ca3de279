//! Integration tests for template-driven object construction.

use std::cell::RefCell;

use fixture_forge::prelude::*;
use rstest::rstest;
use serde_json::{Value, json};
use uuid::Uuid;

type CreateFn = Box<dyn Fn(&str) -> FixtureResult<Value>>;
type CreateManyFn = Box<dyn Fn(&str) -> FixtureResult<Vec<Value>>>;

/// Stub generation context recording every call it receives.
#[derive(Default)]
struct StubContext {
	create_fn: Option<CreateFn>,
	create_many_fn: Option<CreateManyFn>,
	create_calls: RefCell<Vec<String>>,
	create_many_calls: RefCell<Vec<String>>,
}

impl StubContext {
	fn with_create(create_fn: impl Fn(&str) -> FixtureResult<Value> + 'static) -> Self {
		Self {
			create_fn: Some(Box::new(create_fn)),
			..Self::default()
		}
	}

	fn with_create_many(
		create_many_fn: impl Fn(&str) -> FixtureResult<Vec<Value>> + 'static,
	) -> Self {
		Self {
			create_many_fn: Some(Box::new(create_many_fn)),
			..Self::default()
		}
	}
}

impl FixtureContext for StubContext {
	fn create(&self, type_name: &str) -> FixtureResult<Value> {
		self.create_calls.borrow_mut().push(type_name.to_string());
		(self.create_fn.as_ref().expect("create not stubbed"))(type_name)
	}

	fn create_many(&self, type_name: &str, _size: Option<usize>) -> FixtureResult<Vec<Value>> {
		self.create_many_calls
			.borrow_mut()
			.push(type_name.to_string());
		(self
			.create_many_fn
			.as_ref()
			.expect("create_many not stubbed"))(type_name)
	}

	fn build(&self, _type_name: &str) -> TypeComposer<'_> {
		unimplemented!("not exercised by these tests")
	}

	fn from(&self, _template: &Value) -> FixtureResult<ObjectBuilder<'_>> {
		unimplemented!("not exercised by these tests")
	}
}

/// Deterministic sequence sizing for tests.
struct FixedCount(usize);

impl ValueGenerator<usize> for FixedCount {
	fn generate(&self) -> usize {
		self.0
	}
}

fn random_token() -> String {
	Uuid::new_v4().to_string()
}

#[rstest]
#[case(json!(null))]
#[case(json!(12))]
#[case(json!("not a template"))]
#[case(json!(["string"]))]
fn test_rejects_non_object_template(#[case] template: Value) {
	let context = StubContext::default();
	let generator = FixedCount(1);

	let error = ObjectBuilder::new(&template, &context, &generator).unwrap_err();
	assert!(matches!(error, FixtureError::InvalidTemplate(_)));
}

#[rstest]
fn test_creates_flat_object() {
	let context = StubContext::with_create(|_| Ok(json!(Uuid::new_v4().to_string())));
	let generator = FixedCount(1);
	let template = json!({"simple_property": random_token()});

	let object = ObjectBuilder::new(&template, &context, &generator)
		.unwrap()
		.create()
		.unwrap();

	assert!(object["simple_property"].is_string());
}

#[rstest]
fn test_creates_nested_object() {
	let context = StubContext::with_create(|_| Ok(json!(Uuid::new_v4().to_string())));
	let generator = FixedCount(1);
	let template = json!({
		"nested_object": {
			"simple_property": random_token(),
		}
	});

	let object = ObjectBuilder::new(&template, &context, &generator)
		.unwrap()
		.create()
		.unwrap();

	assert!(object["nested_object"].is_object());
	assert!(object["nested_object"]["simple_property"].is_string());
}

#[rstest]
fn test_creates_object_with_array() {
	let context = StubContext::with_create_many(|_| Ok(vec![json!(Uuid::new_v4().to_string())]));
	let generator = FixedCount(1);
	let template = json!({"array": [random_token()]});

	let object = ObjectBuilder::new(&template, &context, &generator)
		.unwrap()
		.create()
		.unwrap();

	assert!(object["array"].is_array());
	assert_eq!(object["array"].as_array().unwrap().len(), 1);
}

#[rstest]
fn test_delegates_type_token_to_context() {
	let create_type = random_token();
	let create_value = random_token();
	let expected = create_value.clone();
	let context = StubContext::with_create(move |_| Ok(json!(create_value)));
	let generator = FixedCount(1);
	let template = json!({"simple_property": create_type.clone()});

	let object = ObjectBuilder::new(&template, &context, &generator)
		.unwrap()
		.create()
		.unwrap();

	assert_eq!(object["simple_property"], json!(expected));
	assert_eq!(*context.create_calls.borrow(), vec![create_type]);
}

#[rstest]
fn test_delegates_sequence_token_to_context() {
	let create_many_type = random_token();
	let create_many_value = random_token();
	let expected = create_many_value.clone();
	let context = StubContext::with_create_many(move |_| Ok(vec![json!(create_many_value)]));
	let generator = FixedCount(1);
	let template = json!({"array": [create_many_type.clone()]});

	let object = ObjectBuilder::new(&template, &context, &generator)
		.unwrap()
		.create()
		.unwrap();

	assert_eq!(object["array"][0], json!(expected));
	assert_eq!(*context.create_many_calls.borrow(), vec![create_many_type]);
}

#[rstest]
fn test_creates_complex_object() {
	let context = StubContext {
		create_fn: Some(Box::new(|_| Ok(json!(Uuid::new_v4().to_string())))),
		create_many_fn: Some(Box::new(|_| Ok(vec![json!(Uuid::new_v4().to_string())]))),
		..StubContext::default()
	};
	let generator = FixedCount(1);
	let template = json!({
		"simple_property": random_token(),
		"array": [random_token()],
		"nested_object": {
			"simple_property": random_token(),
			"nested_object": {
				"simple_property": random_token(),
				"array": [random_token()],
			}
		}
	});

	let object = ObjectBuilder::new(&template, &context, &generator)
		.unwrap()
		.create()
		.unwrap();

	assert!(object["simple_property"].is_string());
	assert!(object["array"].is_array());
	assert!(object["nested_object"].is_object());
	assert!(object["nested_object"]["simple_property"].is_string());
	assert!(object["nested_object"]["nested_object"].is_object());
	assert!(object["nested_object"]["nested_object"]["simple_property"].is_string());
	assert!(object["nested_object"]["nested_object"]["array"].is_array());
}

#[rstest]
fn test_empty_template_yields_empty_object() {
	let context = StubContext::default();
	let generator = FixedCount(1);

	let object = ObjectBuilder::new(&json!({}), &context, &generator)
		.unwrap()
		.create()
		.unwrap();

	assert_eq!(object, json!({}));
	assert!(object.as_object().unwrap().is_empty());
}

#[rstest]
#[case(json!({"array": []}))]
#[case(json!({"array": ["a", "b"]}))]
#[case(json!({"array": [42]}))]
fn test_rejects_malformed_array_leaves(#[case] template: Value) {
	let context = StubContext::default();
	let generator = FixedCount(1);

	let error = ObjectBuilder::new(&template, &context, &generator)
		.unwrap()
		.create()
		.unwrap_err();

	assert!(matches!(error, FixtureError::MalformedArray(property) if property == "array"));
}

#[rstest]
#[case(json!({"value": 12}))]
#[case(json!({"value": true}))]
#[case(json!({"value": null}))]
fn test_rejects_unsupported_leaves(#[case] template: Value) {
	let context = StubContext::default();
	let generator = FixedCount(1);

	let error = ObjectBuilder::new(&template, &context, &generator)
		.unwrap()
		.create()
		.unwrap_err();

	assert!(matches!(error, FixtureError::UnsupportedValue(property) if property == "value"));
}

#[rstest]
fn test_create_many_with_explicit_size() {
	let size = 43;
	let context = StubContext::with_create(|_| Ok(json!("value")));
	let generator = FixedCount(1);
	let template = json!({"simple_property": random_token()});

	let objects = ObjectBuilder::new(&template, &context, &generator)
		.unwrap()
		.create_many(Some(size))
		.unwrap();

	assert_eq!(objects.len(), size);
	assert_eq!(context.create_calls.borrow().len(), size);
	assert!(objects.iter().all(|o| o["simple_property"] == json!("value")));
}

#[rstest]
fn test_create_many_uses_generator_size() {
	let size = 15;
	let context = StubContext::default();
	let generator = FixedCount(size);

	let objects = ObjectBuilder::new(&json!({}), &context, &generator)
		.unwrap()
		.create_many(None)
		.unwrap();

	assert_eq!(objects.len(), size);
}

#[rstest]
fn test_create_calls_are_independent() {
	let context = StubContext::with_create(|_| Ok(json!(Uuid::new_v4().to_string())));
	let generator = FixedCount(1);
	let template = json!({"id": random_token()});
	let builder = ObjectBuilder::new(&template, &context, &generator).unwrap();

	let first = builder.create().unwrap();
	let second = builder.create().unwrap();

	assert_ne!(first["id"], second["id"]);
}

#[rstest]
fn test_context_errors_propagate() {
	let context =
		StubContext::with_create(|token| Err(FixtureError::BuilderNotFound(token.to_string())));
	let generator = FixedCount(1);
	let template = json!({"name": "MissingType"});

	let error = ObjectBuilder::new(&template, &context, &generator)
		.unwrap()
		.create()
		.unwrap_err();

	assert_eq!(
		error.to_string(),
		"No builder defined for type or alias 'MissingType'"
	);
}
