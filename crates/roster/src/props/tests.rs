use super::{Properties, PropertyValue};

/// Typed accessors return the payload only for the matching variant.
#[test]
fn test_value_accessors() {
	assert_eq!(PropertyValue::Bool(true).as_bool(), Some(true));
	assert_eq!(PropertyValue::Int(7).as_int(), Some(7));
	assert_eq!(PropertyValue::String("x".to_string()).as_str(), Some("x"));

	assert_eq!(PropertyValue::Int(7).as_bool(), None);
	assert_eq!(PropertyValue::Bool(true).as_str(), None);
	assert_eq!(PropertyValue::String("x".to_string()).as_int(), None);
}

/// Conversions pick the matching variant.
#[test]
fn test_value_conversions() {
	assert_eq!(PropertyValue::from(true), PropertyValue::Bool(true));
	assert_eq!(PropertyValue::from(9i64), PropertyValue::Int(9));
	assert_eq!(
		PropertyValue::from("a"),
		PropertyValue::String("a".to_string())
	);
	assert_eq!(
		PropertyValue::from("a".to_string()),
		PropertyValue::String("a".to_string())
	);
}

/// type_name reports the variant.
#[test]
fn test_value_type_names() {
	assert_eq!(PropertyValue::Bool(false).type_name(), "bool");
	assert_eq!(PropertyValue::Int(0).type_name(), "int");
	assert_eq!(PropertyValue::String(String::new()).type_name(), "string");
}

/// `with` replaces an existing key instead of keeping both values.
#[test]
fn test_with_last_write_wins() {
	let bag = Properties::new().with("n", 1).with("n", 2);
	assert_eq!(bag.len(), 1);
	assert_eq!(bag.get("n").and_then(|v| v.as_int()), Some(2));
}

/// An empty query matches any bag; a populated query needs every key
/// present with an equal value.
#[test]
fn test_contains_all_strictness() {
	let bag = Properties::new().with("n", 1).with("s", "a");

	assert!(bag.contains_all(&Properties::new()));
	assert!(bag.contains_all(&Properties::new().with("n", 1)));
	assert!(bag.contains_all(&Properties::new().with("n", 1).with("s", "a")));

	// Wrong value
	assert!(!bag.contains_all(&Properties::new().with("n", 2)));
	// A key absent from the bag fails even when the other keys match
	assert!(!bag.contains_all(&Properties::new().with("n", 1).with("h", true)));
}

/// The shared empty bag is a stable reference with no entries.
#[test]
fn test_shared_empty_bag() {
	assert!(Properties::empty().is_empty());
	assert!(std::ptr::eq(Properties::empty(), Properties::empty()));
}

/// Iteration yields every key/value pair.
#[test]
fn test_iter_pairs() {
	let bag = Properties::new().with("a", 1).with("b", 2);
	let mut keys: Vec<&str> = bag.iter().map(|(key, _)| key).collect();
	keys.sort_unstable();
	assert_eq!(keys, ["a", "b"]);
}

/// The props! macro builds the same bag as chained `with` calls.
#[test]
fn test_props_macro() {
	let bag = crate::props! { n: 1, s: "a", live: true };
	assert_eq!(
		bag,
		Properties::new().with("n", 1).with("s", "a").with("live", true)
	);
	assert!(crate::props! {}.is_empty());
}
