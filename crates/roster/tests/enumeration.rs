//! End-to-end tests of `roster!`-declared enumerations.
#![cfg(feature = "macros")]

// Dev-dependency of the unit tests; referenced so unused_crate_dependencies
// stays quiet for this binary.
use proptest as _;
use roster::{Enumerated, RosterEntry};

roster::roster! {
	/// HTTP-ish status roster exercising every declaration form.
	pub Status {
		/// Everything went fine.
		OK = { code: 200, phrase: "OK" },
		/// Resource created.
		CREATED = { code: 201, phrase: "Created" },
		/// RFC 2324.
		TEAPOT = 418 { code: 418, phrase: "I'm a teapot" },
		PROCESSING,
	}
}

roster::roster! {
	pub Direction {
		NORTH,
		EAST,
		SOUTH,
		WEST,
	}
}

roster::roster! {
	pub Empty {}
}

roster::roster! {
	/// Grid of deliberately overlapping property bags.
	pub Sample {
		FIRST = { n: 1, s: "a" },
		SECOND = { n: 2, s: "b" },
		THIRD = { n: 1, s: "ab" },
	}
}

impl Direction {
	const CARDINAL_COUNT: usize = 4;
}

/// Declared entries come back in declaration order with the expected
/// ordinals: automatic from 0, manual jumps, automatic resuming after.
#[test]
fn test_declaration_order_and_ordinals() {
	let ordinals: Vec<i64> = Status::values().iter().map(|s| s.ordinal()).collect();
	assert_eq!(ordinals, [0, 1, 418, 419]);

	let names: Vec<&str> = Status::values().iter().map(|s| s.name()).collect();
	assert_eq!(names, ["OK", "CREATED", "TEAPOT", "PROCESSING"]);
}

/// The roster is built once; repeated access returns the same table.
#[test]
fn test_values_cached() {
	assert_eq!(Status::values().as_ptr(), Status::values().as_ptr());
	assert!(std::ptr::eq(Status::roster(), Status::roster()));
}

/// `from` accepts ordinals, names, and property queries, and returns
/// references into the cached table.
#[test]
fn test_from_dispatch() {
	let teapot = Status::from(418).expect("ordinal 418 must resolve");
	assert_eq!(teapot.name(), "TEAPOT");
	assert!(std::ptr::eq(teapot, Status::TEAPOT.get()));

	let ok = Status::from("OK").expect("name OK must resolve");
	assert_eq!(ok.ordinal(), 0);
	// The generated alias and the trait method agree
	assert!(std::ptr::eq(Status::find("OK").unwrap(), ok));

	let query = roster::props! { phrase: "Created" };
	let created = Status::from(&query).expect("phrase must resolve");
	assert_eq!(created.name(), "CREATED");

	assert!(Status::from(-1).is_none());
	assert!(Status::from(2).is_none(), "gap ordinals must miss");
	assert!(Status::from(i64::MAX).is_none());
	assert!(Status::from("ok").is_none(), "names are case-sensitive");
	assert!(Status::from("").is_none());
}

/// Property queries resolve only when exactly one entry satisfies them.
#[test]
fn test_property_match_rules() {
	let ambiguous = roster::props! { n: 1 };
	assert!(
		Sample::from(&ambiguous).is_none(),
		"{{n: 1}} satisfies FIRST and THIRD"
	);

	let first = roster::props! { n: 1, s: "a" };
	assert_eq!(Sample::from(&first).map(|s| s.name()), Some("FIRST"));

	let third = roster::props! { s: "ab" };
	assert_eq!(Sample::from(&third).map(|s| s.name()), Some("THIRD"));

	assert!(Sample::from(&roster::props! {}).is_none());
	assert!(Sample::from(&roster::props! { missing: true }).is_none());
}

/// Entry keys deref to the declared entries and stay `Copy`.
#[test]
fn test_entry_keys() {
	assert_eq!(Status::TEAPOT.ordinal(), 418);
	assert_eq!(Status::PROCESSING.ordinal(), 419);
	assert_eq!(Status::CREATED.name(), "CREATED");
	assert_eq!(
		Status::OK.properties().get("code").and_then(|v| v.as_int()),
		Some(200)
	);

	assert!(std::ptr::eq(Status::CREATED.get(), &Status::values()[1]));

	let key = Status::TEAPOT;
	let copy = key;
	assert!(std::ptr::eq(key.get(), copy.get()));
}

/// Every generated key resolves to the declaration slot it was written in.
#[test]
fn test_keys_align_with_values() {
	let directions = [
		Direction::NORTH,
		Direction::EAST,
		Direction::SOUTH,
		Direction::WEST,
	];
	for (slot, key) in directions.into_iter().enumerate() {
		assert!(std::ptr::eq(key.get(), &Direction::values()[slot]));
	}

	let samples = [Sample::FIRST, Sample::SECOND, Sample::THIRD];
	for (slot, key) in samples.into_iter().enumerate() {
		assert!(std::ptr::eq(key.get(), &Sample::values()[slot]));
	}
}

/// A declaration with no entries still yields a working type.
#[test]
fn test_empty_enumeration() {
	assert_eq!(Empty::count(), 0);
	assert!(Empty::values().is_empty());
	assert!(Empty::from(0).is_none());
	assert!(Empty::from("ANYTHING").is_none());
}

/// Each enumeration owns its counter and its lookup space.
#[test]
fn test_type_independence() {
	assert_eq!(Direction::NORTH.ordinal(), 0, "counters start at 0 per type");
	assert_eq!(Direction::count(), 4);

	assert!(Direction::from(418).is_none());
	assert!(Direction::from("TEAPOT").is_none());
	assert!(Status::from("NORTH").is_none());
}

/// Iteration can be restarted any number of times.
#[test]
fn test_iteration_restartable() {
	let first_pass: Vec<&str> = Direction::iter().map(|d| d.name()).collect();
	let second_pass: Vec<&str> = Direction::iter().map(|d| d.name()).collect();
	assert_eq!(first_pass, second_pass);
	assert_eq!(first_pass, ["NORTH", "EAST", "SOUTH", "WEST"]);
}

/// Unrelated associated items coexist with the generated key constants.
#[test]
fn test_unrelated_associated_items() {
	assert_eq!(Direction::CARDINAL_COUNT, Direction::count());
}

/// Entries format with their ordinal and name.
#[test]
fn test_debug_format() {
	let teapot = Status::TEAPOT.get();
	assert_eq!(
		format!("{teapot:?}"),
		"Status { ordinal: 418, name: \"TEAPOT\" }"
	);
}

/// Near-miss names produce a suggestion from the roster.
#[test]
fn test_suggest_near_name() {
	assert_eq!(Status::roster().suggest("TEAP0T"), Some("TEAPOT"));
	assert!(Status::roster().suggest("xyzzy-plugh").is_none());
}
