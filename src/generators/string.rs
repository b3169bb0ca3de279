//! Opaque unique string generation.

use uuid::Uuid;

use super::ValueGenerator;

/// Generates opaque unique strings (v4 UUIDs).
#[derive(Debug, Clone, Copy, Default)]
pub struct StringGenerator;

impl ValueGenerator<String> for StringGenerator {
	fn generate(&self) -> String {
		Uuid::new_v4().to_string()
	}
}
