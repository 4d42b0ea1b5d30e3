use std::sync::LazyLock;

use rustc_hash::FxHashMap as HashMap;

#[cfg(test)]
mod tests;

/// The value of a single property.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
	/// Boolean value (true/false).
	Bool(bool),
	/// Integer value.
	Int(i64),
	/// String value.
	String(String),
}

impl PropertyValue {
	/// Returns the boolean value if this is a `Bool` variant.
	pub fn as_bool(&self) -> Option<bool> {
		match self {
			PropertyValue::Bool(v) => Some(*v),
			_ => None,
		}
	}

	/// Returns the integer value if this is an `Int` variant.
	pub fn as_int(&self) -> Option<i64> {
		match self {
			PropertyValue::Int(v) => Some(*v),
			_ => None,
		}
	}

	/// Returns the string value if this is a `String` variant.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			PropertyValue::String(v) => Some(v),
			_ => None,
		}
	}

	/// Returns the type name of this value.
	pub fn type_name(&self) -> &'static str {
		match self {
			PropertyValue::Bool(_) => "bool",
			PropertyValue::Int(_) => "int",
			PropertyValue::String(_) => "string",
		}
	}
}

impl From<bool> for PropertyValue {
	fn from(v: bool) -> Self {
		PropertyValue::Bool(v)
	}
}

impl From<i64> for PropertyValue {
	fn from(v: i64) -> Self {
		PropertyValue::Int(v)
	}
}

impl From<String> for PropertyValue {
	fn from(v: String) -> Self {
		PropertyValue::String(v)
	}
}

impl From<&str> for PropertyValue {
	fn from(v: &str) -> Self {
		PropertyValue::String(v.to_string())
	}
}

/// A bag of named property values carried by an entry.
///
/// Bags are descriptive payload only and never participate in identity.
/// Partial-property lookup is built on [`contains_all`](Self::contains_all).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Properties {
	values: HashMap<&'static str, PropertyValue>,
}

impl Properties {
	/// Creates an empty bag.
	pub fn new() -> Self {
		Self {
			values: HashMap::default(),
		}
	}

	/// Returns the shared empty bag reported by entries that declare no
	/// properties.
	pub fn empty() -> &'static Properties {
		static EMPTY: LazyLock<Properties> = LazyLock::new(Properties::new);
		&EMPTY
	}

	/// Adds a property, replacing any previous value under the same key.
	pub fn with(mut self, key: &'static str, value: impl Into<PropertyValue>) -> Self {
		self.values.insert(key, value.into());
		self
	}

	/// Returns the value stored under `key`.
	pub fn get(&self, key: &str) -> Option<&PropertyValue> {
		self.values.get(key)
	}

	/// Returns the number of properties in the bag.
	pub fn len(&self) -> usize {
		self.values.len()
	}

	/// Returns true if the bag holds no properties.
	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}

	/// Returns true if every key in `query` is present in this bag with an
	/// equal value.
	///
	/// A query key missing from this bag fails the check even when every
	/// other key matches; an empty query trivially passes.
	pub fn contains_all(&self, query: &Properties) -> bool {
		query
			.values
			.iter()
			.all(|(key, value)| self.values.get(key) == Some(value))
	}

	/// Returns an iterator over the keys and values in the bag.
	pub fn iter(&self) -> impl Iterator<Item = (&'static str, &PropertyValue)> {
		self.values.iter().map(|(key, value)| (*key, value))
	}
}
