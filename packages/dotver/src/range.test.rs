use pretty_assertions::assert_eq;
use rstest::rstest;
use dotver_utils::{FromFileString, ToFileString};

use crate::{Error, Range, Version, MAX_SEQUENCE_LEN};

fn v(src: &str) -> Version {
    Version::from_file_string(src).unwrap()
}

fn versions(srcs: &[&str]) -> Vec<Version> {
    srcs.iter().map(|src| v(src)).collect()
}

#[test]
fn test_range_new() {
    assert!(Range::new(v("1.2.3"), v("1.5.2")).is_ok());
    assert!(Range::new("2.1.8", "2.3.6").is_ok());
    assert!(Range::new(&v("1.2.3"), "2.1.8").is_ok());
    assert!(Range::new(String::from("1.5.2"), &String::from("2.3.6")).is_ok());
}

#[rstest]
#[case("1.a", "2")]
#[case("1", "2..3")]
fn test_range_new_invalid_bound(#[case] lower: &str, #[case] upper: &str) {
    let invalid = if lower.contains('a') { lower } else { upper };

    assert_eq!(Range::new(lower, upper), Err(Error::InvalidFormat(invalid.to_string())));
}

#[rstest]
#[case("1", "1.5.1", "1.5.0.1.2", true)]
#[case("1", "1.5.1", "1", true)]
#[case("1", "1.5.1", "1.4.4985", true)]
#[case("1.2.3", "1.5.1", "1.5.1", false)]
#[case("1.2.3", "1.5.1", "1.2.2", false)]
#[case("1.2.3", "1.5.1", "1.2.3", true)]
#[case("1.2.3", "1.5.1", "1.2.3.0", true)]
#[case("1.2.3", "1.5.1", "1.3", true)]
#[case("1.2.3", "1.5.1", "1.5.0.99", true)]
#[case("2", "1", "1.5", false)]
#[case("", "0.0.1", "", true)]
fn test_range_check(#[case] lower: &str, #[case] upper: &str, #[case] version: Version, #[case] expected: bool) {
    let range = Range::new(lower, upper).unwrap();

    assert_eq!(range.check(&version), expected);
    assert_eq!(range.includes(version.to_file_string()), Ok(expected));
}

#[test]
fn test_range_includes_strings() {
    let range = Range::new("1.2.3", "1.5.1").unwrap();

    assert_eq!(range.includes("1.5.1"), Ok(false));
    assert_eq!(range.includes("1.3"), Ok(true));
    assert_eq!(range.includes(v("1.3")), Ok(true));
    assert_eq!(range.includes("1.3."), Err(Error::InvalidFormat("1.3.".to_string())));
}

#[rstest]
#[case("1.2.3", "1.2.6", &["1.2.3", "1.2.4", "1.2.5"])]
#[case("1.2.3.4", "1.2.6.1", &["1.2.3.4", "1.2.4", "1.2.5", "1.2.6"])]
#[case("1.2", "1.2.3", &["1.2", "1.2.1", "1.2.2"])]
#[case("1.2.3", "1.2.4", &["1.2.3"])]
#[case("1.2.3", "1.2.3.0.1", &["1.2.3"])]
#[case("1.2.3.1", "1.2.4", &["1.2.3.1"])]
#[case("1.2.3", "1.2.3", &[])]
#[case("1.5.0", "1.3", &[])]
fn test_range_to_sequence(#[case] lower: &str, #[case] upper: &str, #[case] expected: &[&str]) {
    let range = Range::new(lower, upper).unwrap();

    assert_eq!(range.to_sequence().collect::<Vec<_>>(), versions(expected));
}

#[test]
fn test_range_to_sequence_keeps_lower_precision() {
    let range = Range::new("1.2.3.4", "1.2.6.1").unwrap();
    let sequence: Vec<_> = range.to_sequence().collect();

    assert_eq!(sequence[0].raw_components(), vec![1, 2, 3, 4]);
    assert!(sequence[1..].iter().all(|version| version.raw_components().len() == 3));
}

#[test]
fn test_range_to_sequence_is_restartable() {
    let range = Range::new("1.2.3", "1.2.6").unwrap();

    let first: Vec<_> = range.to_sequence().collect();
    let second: Vec<_> = range.to_sequence().collect();

    assert_eq!(first, second);
}

#[test]
fn test_range_to_sequence_is_lazy() {
    let range = Range::new("1.2.3", "1.3").unwrap();
    let head: Vec<_> = range.to_sequence().take(3).collect();

    assert_eq!(head, versions(&["1.2.3", "1.2.4", "1.2.5"]));
}

#[test]
fn test_range_to_sequence_across_minor_lines_is_capped() {
    let range = Range::new("1.2.3", "1.3").unwrap();
    let sequence: Vec<_> = range.to_sequence().collect();

    assert_eq!(sequence.len(), MAX_SEQUENCE_LEN);
    assert!(sequence.contains(&v("1.2.3")));
    assert!(!sequence.contains(&v("1.3")));
    assert!(sequence.iter().all(|version| range.check(version)));
    assert_eq!(sequence.last(), Some(&Version::from_components(vec![1, 2, 2 + MAX_SEQUENCE_LEN as u64])));
}

#[test]
fn test_range_to_sequence_cap_does_not_cut_reachable_ranges() {
    let upper = format!("1.2.{}", MAX_SEQUENCE_LEN - 1);
    let range = Range::new("1.2", upper.as_str()).unwrap();

    assert_eq!(range.to_sequence().count(), MAX_SEQUENCE_LEN - 1);
}

#[test]
fn test_range_to_sequence_stops_on_patch_overflow() {
    let range = Range::new("1.2.18446744073709551614", "2").unwrap();
    let mut sequence = range.to_sequence();

    assert_eq!(sequence.next(), Some(v("1.2.18446744073709551614")));
    assert_eq!(sequence.next(), Some(v("1.2.18446744073709551615")));
    assert_eq!(sequence.next(), None);
    assert_eq!(sequence.next(), None);
}

#[test]
fn test_range_to_sequence_size_hint() {
    let range = Range::new("1.2.3", "1.2.4").unwrap();
    let mut sequence = range.to_sequence();

    assert_eq!(sequence.size_hint(), (1, Some(MAX_SEQUENCE_LEN)));
    sequence.next();
    assert_eq!(sequence.size_hint(), (0, Some(0)));
}

#[rstest]
#[case("1.2.3", "1.5.1", false)]
#[case("1.2.3", "1.2.3.0", true)]
#[case("2", "1", true)]
fn test_range_is_empty(#[case] lower: &str, #[case] upper: &str, #[case] expected: bool) {
    assert_eq!(Range::new(lower, upper).unwrap().is_empty(), expected);
}

#[rstest]
#[case(">=1.2.3 <1.5.1", "1.2.3", "1.5.1")]
#[case(">=1.2.3.0 <1.5.0", "1.2.3", "1.5")]
#[case(">= <1", "", "1")]
fn test_range_from_file_string(#[case] range: Range, #[case] lower: Version, #[case] upper: Version) {
    assert_eq!(range.lower(), &lower);
    assert_eq!(range.upper(), &upper);
}

#[rstest]
#[case("1.2.3 - 1.5.1", Error::InvalidRange("1.2.3 - 1.5.1".to_string()))]
#[case(">=1.2.3", Error::InvalidRange(">=1.2.3".to_string()))]
#[case(">=1..2 <3", Error::InvalidFormat("1..2".to_string()))]
#[case(">=1 <3.", Error::InvalidFormat("3.".to_string()))]
fn test_range_from_file_string_invalid(#[case] src: &str, #[case] expected: Error) {
    assert_eq!(Range::from_file_string(src), Err(expected));
}

#[test]
fn test_range_to_file_string() {
    let range = Range::new("1.2.3.0", "1.5.1").unwrap();

    assert_eq!(range.to_file_string(), ">=1.2.3 <1.5.1");
    assert_eq!(range.to_string(), ">=1.2.3 <1.5.1");
}

#[test]
fn test_range_serde() {
    let range = Range::new("1.2.3", "1.5.1").unwrap();

    assert_eq!(serde_json::to_string(&range).unwrap(), "\">=1.2.3 <1.5.1\"");
    assert_eq!(serde_json::from_str::<Range>("\">=1.2.3 <1.5.1\"").unwrap(), range);
}
