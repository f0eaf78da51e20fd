use std::{cmp::Ordering, fmt::{self, Write}, hash::{Hash, Hasher}};

use dotver_utils::{impl_serialization_traits, DataType, FromFileString, ToFileString, ToHumanString};

use crate::{extract::extract_version, Error};

#[cfg(test)]
#[path = "./version.test.rs"]
mod version_tests;

/// A dotted version with any number of numeric components.
///
/// Trailing zero components are insignificant: `1.2`, `1.2.0` and `1.2.0.0`
/// compare equal, hash identically, and all render as `1.2`. The components
/// are kept exactly as parsed; trimming happens whenever they are observed.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "bincode", derive(bincode_derive::Decode, bincode_derive::Encode))]
pub struct Version {
    components: Vec<u64>,
}

impl Version {
    /// The zero version, which renders as an empty string.
    pub fn new() -> Version {
        Version {
            components: vec![],
        }
    }

    pub fn from_components<C: Into<Vec<u64>>>(components: C) -> Version {
        Version {
            components: components.into(),
        }
    }

    fn canonical(&self) -> &[u64] {
        let len = self.components.iter()
            .rposition(|&component| component != 0)
            .map_or(0, |index| index + 1);

        &self.components[..len]
    }

    /// The components without their trailing zeros.
    pub fn components(&self) -> Vec<u64> {
        self.canonical().to_vec()
    }

    /// The canonical components truncated or zero-padded to exactly `len`
    /// elements.
    pub fn resized_components(&self, len: usize) -> Vec<u64> {
        let mut components
            = self.components();

        components.resize(len, 0);
        components
    }

    /// The components as they were parsed, trailing zeros included.
    pub fn raw_components(&self) -> Vec<u64> {
        self.components.clone()
    }

    pub fn is_zero(&self) -> bool {
        self.canonical().is_empty()
    }

    /// Returns the following patch release: the first three components with
    /// the third one incremented, everything past it dropped. `None` if the
    /// patch component is already at its maximum.
    pub fn next_patch(&self) -> Option<Version> {
        let mut components
            = self.resized_components(3);

        components[2] = components[2].checked_add(1)?;

        Some(Version {
            components,
        })
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        // Once trimmed, a longer sequence always ends with a non-zero
        // component, so the slice ordering matches zero-extended comparison.
        self.canonical().cmp(other.canonical())
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {
}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical().hash(state);
    }
}

impl FromFileString for Version {
    type Error = Error;

    fn from_file_string(src: &str) -> Result<Self, Error> {
        if src.is_empty() {
            return Ok(Version::new());
        }

        let mut iter = src.chars().peekable();

        let version = extract_version(&mut iter)
            .filter(|_| iter.peek().is_none());

        version.ok_or_else(|| {
            log::trace!("Rejected version string {:?}", src);
            Error::InvalidFormat(src.to_string())
        })
    }
}

impl ToFileString for Version {
    fn write_file_string<W: Write>(&self, out: &mut W) -> fmt::Result {
        for (index, component) in self.canonical().iter().enumerate() {
            if index > 0 {
                out.write_char('.')?;
            }

            write!(out, "{}", component)?;
        }

        Ok(())
    }
}

impl ToHumanString for Version {
    fn to_print_string(&self) -> String {
        DataType::Number.colorize(&self.to_file_string())
    }
}

impl_serialization_traits!(Version);

/// Conversion applied wherever an operation accepts either a version or its
/// textual form. Strings go through the regular parser and fail the same way.
pub trait IntoVersion {
    fn into_version(self) -> Result<Version, Error>;
}

impl IntoVersion for Version {
    fn into_version(self) -> Result<Version, Error> {
        Ok(self)
    }
}

impl IntoVersion for &Version {
    fn into_version(self) -> Result<Version, Error> {
        Ok(self.clone())
    }
}

impl IntoVersion for &str {
    fn into_version(self) -> Result<Version, Error> {
        Version::from_file_string(self)
    }
}

impl IntoVersion for String {
    fn into_version(self) -> Result<Version, Error> {
        Version::from_file_string(&self)
    }
}

impl IntoVersion for &String {
    fn into_version(self) -> Result<Version, Error> {
        Version::from_file_string(self)
    }
}
