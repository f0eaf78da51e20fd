use std::{iter::Peekable, str::Chars};

use super::Version;

pub fn extract_number(str: &mut Peekable<Chars>) -> Option<u64> {
    let mut num: u64 = 0;
    let mut valid = false;

    while let Some(&c) = str.peek() {
        if let Some(digit) = c.to_digit(10) {
            num = num.checked_mul(10)?.checked_add(digit as u64)?;
            valid = true;

            str.next();
        } else {
            break;
        }
    }

    match valid {
        true => Some(num),
        false => None,
    }
}

/// Consumes `N(.N)*` from the iterator. Any empty segment (`1..2`, `1.`)
/// fails the whole extraction.
pub fn extract_version(str: &mut Peekable<Chars>) -> Option<Version> {
    let mut components
        = vec![extract_number(str)?];

    while let Some('.') = str.peek() {
        str.next();
        components.push(extract_number(str)?);
    }

    Some(Version::from_components(components))
}

/// Splits `>=LOWER <UPPER` into its two bounds, without validating them.
pub fn extract_range(str: &str) -> Option<(&str, &str)> {
    str.strip_prefix(">=")?
        .split_once(" <")
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("0", Some(0))]
    #[case("007", Some(7))]
    #[case("42.1", Some(42))]
    #[case("18446744073709551615", Some(u64::MAX))]
    #[case("18446744073709551616", None)]
    #[case("", None)]
    #[case("a1", None)]
    fn test_extract_number(#[case] input: &str, #[case] expected: Option<u64>) {
        assert_eq!(extract_number(&mut input.chars().peekable()), expected);
    }

    #[test]
    fn test_extract_number_stops_at_separator() {
        let mut iter = "12.3".chars().peekable();

        assert_eq!(extract_number(&mut iter), Some(12));
        assert_eq!(iter.next(), Some('.'));
    }

    #[rstest]
    #[case(">=1.2.3 <1.5.1", Some(("1.2.3", "1.5.1")))]
    #[case(">= <1", Some(("", "1")))]
    #[case(">=1 <", Some(("1", "")))]
    #[case("1.2.3 <1.5.1", None)]
    #[case(">=1.2.3", None)]
    fn test_extract_range(#[case] input: &str, #[case] expected: Option<(&str, &str)>) {
        assert_eq!(extract_range(input), expected);
    }
}
