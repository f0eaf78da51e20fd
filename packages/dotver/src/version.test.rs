use std::collections::HashSet;

use pretty_assertions::assert_eq;
use rstest::rstest;
use dotver_utils::{FromFileString, ToFileString};

use crate::{Error, IntoVersion, Version};

#[rstest]
#[case("1.2.3", vec![1, 2, 3])]
#[case("", vec![])]
#[case("12.432.6", vec![12, 432, 6])]
#[case("0.1.1", vec![0, 1, 1])]
#[case("007.1", vec![7, 1])]
#[case("1.2.4343", vec![1, 2, 4343])]
fn test_version_parse(#[case] src: &str, #[case] expected: Vec<u64>) {
    assert_eq!(Version::from_file_string(src).unwrap().components(), expected);
}

#[rstest]
#[case("a.2.4")]
#[case("1..4")]
#[case("5.2.")]
#[case(".2.6")]
#[case(".")]
#[case("1.2.3-rc.1")]
#[case(" 1.2")]
#[case("1.2.99999999999999999999")]
fn test_version_parse_invalid(#[case] src: &str) {
    let err = Version::from_file_string(src).unwrap_err();

    assert_eq!(err, Error::InvalidFormat(src.to_string()));
    assert_eq!(err.to_string(), format!("Invalid version string '{}'", src));
}

#[test]
fn test_version_new_is_zero() {
    assert!(Version::new().is_zero());
    assert_eq!(Version::new(), Version::default());
    assert_eq!(Version::new(), Version::from_file_string("").unwrap());
    assert_eq!(Version::new(), Version::from_file_string("0.0").unwrap());
}

#[test]
fn test_version_clone_is_independent() {
    let original = Version::from_file_string("1.2.4343").unwrap();
    let copy = original.clone();

    drop(original);
    assert_eq!(copy.to_file_string(), "1.2.4343");
}

#[rstest]
#[case("1.2.3", "1.2.3")]
#[case("334", "334")]
#[case("0.3.23", "0.3.23")]
#[case("", "")]
#[case("4.5.0", "4.5")]
#[case("0.0.0", "")]
#[case("0.1.0.1", "0.1.0.1")]
fn test_version_to_string(#[case] version: Version, #[case] expected: &str) {
    assert_eq!(version.to_file_string(), expected);
    assert_eq!(version.to_string(), expected);
}

#[rstest]
#[case("1.3.5", vec![1, 3, 5])]
#[case("1.9.3.7.2", vec![1, 9, 3, 7, 2])]
#[case("1.1.0", vec![1, 1])]
#[case("5.2.0.0.0", vec![5, 2])]
#[case("0.0.1.1", vec![0, 0, 1, 1])]
#[case("0.1.0.1", vec![0, 1, 0, 1])]
#[case("", vec![])]
fn test_version_components(#[case] version: Version, #[case] expected: Vec<u64>) {
    assert_eq!(version.components(), expected);
}

#[rstest]
#[case("1.1.1", 2, vec![1, 1])]
#[case("1.1.1.5.3", 3, vec![1, 1, 1])]
#[case("1.1.1", 5, vec![1, 1, 1, 0, 0])]
#[case("4", 3, vec![4, 0, 0])]
#[case("1.2.0.0", 3, vec![1, 2, 0])]
#[case("1.2", 0, vec![])]
#[case("", 2, vec![0, 0])]
fn test_version_resized_components(#[case] version: Version, #[case] len: usize, #[case] expected: Vec<u64>) {
    assert_eq!(version.resized_components(len), expected);
}

#[test]
fn test_version_components_are_copies() {
    let version = Version::from_file_string("3.4.2").unwrap();

    version.resized_components(3)[0] = 5;
    version.components()[0] = 2;
    version.raw_components()[0] = 9;

    assert_eq!(version.components(), vec![3, 4, 2]);
}

#[test]
fn test_version_raw_components_keep_trailing_zeros() {
    let version = Version::from_file_string("4.5.0.0").unwrap();

    assert_eq!(version.raw_components(), vec![4, 5, 0, 0]);
    assert_eq!(version.components(), vec![4, 5]);
}

#[rstest]
#[case("3.2.1", "3.2.2")]
#[case("4.6.3", "5.4.3")]
#[case("4.5.2300", "4.5.2323")]
#[case("4.5.2323", "4.5.23002")]
#[case("0", "0.0.1")]
#[case("1", "1.0.1")]
#[case("1.23", "1.24")]
#[case("3.2.0", "5.2")]
#[case("3.2.0", "5.2.5")]
#[case("4.0.0.0", "4.5")]
#[case("4.5.0", "4.5.1.0")]
#[case("4.2", "4.2.1.2")]
#[case("", "0.0.0.1")]
fn test_version_lt(#[case] left: Version, #[case] right: Version) {
    assert!(left < right);
    assert!(left <= right);
    assert!(right > left);
    assert!(right >= left);
    assert!(left != right);
    assert_eq!(left.cmp(&right), std::cmp::Ordering::Less);
}

#[rstest]
#[case("4.5.2", "4.5.2.0")]
#[case("4.5.0", "4.5")]
#[case("4.2", "4.2.0")]
#[case("1.22", "1.22")]
#[case("", "0")]
#[case("0.0", "0.0.0.0")]
fn test_version_eq(#[case] left: Version, #[case] right: Version) {
    assert_eq!(left, right);
    assert!(left <= right);
    assert!(left >= right);
    assert!(!(left < right));
    assert!(!(left > right));
}

#[rstest]
#[case("1.2.3")]
#[case("0.1")]
#[case("7")]
#[case("")]
fn test_version_trailing_zeros_are_insignificant(#[case] src: &str) {
    let version = Version::from_file_string(src).unwrap();
    let mut padded = src.to_string();

    for _ in 0..5 {
        padded.push_str(if padded.is_empty() { "0" } else { ".0" });

        let padded_version = Version::from_file_string(&padded).unwrap();

        assert_eq!(version, padded_version);
        assert_eq!(version.to_file_string(), padded_version.to_file_string());
    }
}

#[test]
fn test_version_order_laws() {
    let versions: Vec<Version> = ["", "0.0.1", "1", "1.0.0.1", "1.2", "1.2.0", "1.10", "2.0.0.0", "2.0.1"]
        .iter()
        .map(|src| Version::from_file_string(src).unwrap())
        .collect();

    for a in &versions {
        for b in &versions {
            let holding = [a < b, a == b, a > b].iter().filter(|&&x| x).count();
            assert_eq!(holding, 1, "{:?} vs {:?}", a, b);
            assert_eq!(a <= b, a < b || a == b);
            assert_eq!(a >= b, a > b || a == b);

            for c in &versions {
                if a < b && b < c {
                    assert!(a < c, "{:?} < {:?} < {:?}", a, b, c);
                }
            }
        }
    }
}

#[test]
fn test_version_hash_ignores_trailing_zeros() {
    let set: HashSet<Version> = ["1.2", "1.2.0", "1.2.0.0", "1.2.1"]
        .iter()
        .map(|src| Version::from_file_string(src).unwrap())
        .collect();

    assert_eq!(set.len(), 2);
}

#[rstest]
#[case("1.2", Some("1.2.1"))]
#[case("1.2.3", Some("1.2.4"))]
#[case("1.2.3.4", Some("1.2.4"))]
#[case("", Some("0.0.1"))]
#[case("1.2.18446744073709551615", None)]
fn test_version_next_patch(#[case] version: Version, #[case] expected: Option<&str>) {
    let expected = expected.map(|src| Version::from_file_string(src).unwrap());

    assert_eq!(version.next_patch(), expected);
}

#[test]
fn test_version_next_patch_has_three_components() {
    let version = Version::from_file_string("1.2.3.4.5").unwrap();

    assert_eq!(version.next_patch().unwrap().raw_components(), vec![1, 2, 4]);
}

#[test]
fn test_version_into_version() {
    let expected = Version::from_file_string("1.2.3").unwrap();

    assert_eq!("1.2.3".into_version(), Ok(expected.clone()));
    assert_eq!(String::from("1.2.3").into_version(), Ok(expected.clone()));
    assert_eq!((&String::from("1.2.3")).into_version(), Ok(expected.clone()));
    assert_eq!((&expected).into_version(), Ok(expected.clone()));
    assert_eq!(expected.clone().into_version(), Ok(expected));
    assert_eq!("1..2".into_version(), Err(Error::InvalidFormat("1..2".to_string())));
}

#[test]
fn test_version_std_conversions() {
    let parsed: Version = "4.5.0".parse().unwrap();

    assert_eq!(parsed, Version::try_from("4.5").unwrap());
    assert!("4..5".parse::<Version>().is_err());
}

#[test]
fn test_version_serde() {
    let version = Version::from_file_string("4.5.0").unwrap();

    assert_eq!(serde_json::to_string(&version).unwrap(), "\"4.5\"");
    assert_eq!(serde_json::from_str::<Version>("\"4.5.0\"").unwrap(), version);
    assert!(serde_json::from_str::<Version>("\"4..5\"").is_err());
}
