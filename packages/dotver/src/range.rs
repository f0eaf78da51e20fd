use std::{borrow::Borrow, fmt::{self, Write}};

use dotver_utils::{impl_serialization_traits, FromFileString, ToFileString, ToHumanString};

use crate::{extract::extract_range, Error, IntoVersion, Sequence, Version};

#[cfg(test)]
#[path = "./range.test.rs"]
mod range_tests;

/// A half-open range of versions: `lower` is included, `upper` is not.
///
/// Bounds aren't required to be ordered; a range whose lower bound isn't
/// below its upper bound is simply empty.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "bincode", derive(bincode_derive::Decode, bincode_derive::Encode))]
pub struct Range {
    lower: Version,
    upper: Version,
}

impl Range {
    pub fn new<L: IntoVersion, U: IntoVersion>(lower: L, upper: U) -> Result<Range, Error> {
        Ok(Range {
            lower: lower.into_version()?,
            upper: upper.into_version()?,
        })
    }

    pub fn lower(&self) -> &Version {
        &self.lower
    }

    pub fn upper(&self) -> &Version {
        &self.upper
    }

    pub fn is_empty(&self) -> bool {
        self.lower >= self.upper
    }

    pub fn check<P: Borrow<Version>>(&self, version: P) -> bool {
        let version = version.borrow();

        &self.lower <= version && version < &self.upper
    }

    /// Same as [`Range::check`], but also accepts version strings.
    pub fn includes<V: IntoVersion>(&self, version: V) -> Result<bool, Error> {
        Ok(self.check(version.into_version()?))
    }

    /// Enumerates the range by patch releases: the lower bound first, then
    /// `major.minor.patch+1` for as long as the result stays below the upper
    /// bound.
    ///
    /// Only the patch position ever moves. When the upper bound sits on a
    /// later major or minor line the sequence ends after
    /// [`MAX_SEQUENCE_LEN`](crate::MAX_SEQUENCE_LEN) versions instead.
    pub fn to_sequence(&self) -> Sequence<'_> {
        Sequence::new(self)
    }
}

impl FromFileString for Range {
    type Error = Error;

    fn from_file_string(src: &str) -> Result<Self, Error> {
        let (lower, upper) = extract_range(src)
            .ok_or_else(|| Error::InvalidRange(src.to_string()))?;

        Range::new(lower, upper)
    }
}

impl ToFileString for Range {
    fn write_file_string<W: Write>(&self, out: &mut W) -> fmt::Result {
        out.write_str(">=")?;
        self.lower.write_file_string(out)?;
        out.write_str(" <")?;
        self.upper.write_file_string(out)
    }
}

impl ToHumanString for Range {
    fn to_print_string(&self) -> String {
        format!(">={} <{}", self.lower.to_print_string(), self.upper.to_print_string())
    }
}

impl_serialization_traits!(Range);
