use std::fmt;

use erased_serde::serialize_trait_object;

use crate::DataType;

pub trait FromFileString {
    type Error;

    fn from_file_string(s: &str) -> Result<Self, Self::Error>
        where Self: Sized;
}

pub trait ToFileString {
    fn write_file_string<W: fmt::Write>(&self, out: &mut W) -> fmt::Result;

    fn to_file_string(&self) -> String {
        let mut out = String::new();

        // Writing into a String can't fail
        let _ = self.write_file_string(&mut out);

        out
    }
}

pub trait ToHumanString {
    fn to_print_string(&self) -> String;
}

pub trait Exportable: erased_serde::Serialize + ToHumanString {
}

impl<T: erased_serde::Serialize + ToHumanString> Exportable for T {
}

serialize_trait_object!(Exportable);

/// Command output, printed for a terminal or as JSON.
pub struct AbstractValue<'a> {
    value: Box<dyn Exportable + 'a>,
}

impl<'a> AbstractValue<'a> {
    pub fn new<T: Exportable + 'a>(value: T) -> Self {
        Self {value: Box::new(value)}
    }

    pub fn export(self, json: bool) -> Result<String, serde_json::Error> {
        match json {
            true => serde_json::to_string(&self.value),
            false => Ok(self.value.to_print_string()),
        }
    }
}

impl ToHumanString for bool {
    fn to_print_string(&self) -> String {
        DataType::Boolean.colorize(&self.to_string())
    }
}

macro_rules! impl_number_human_string(($($type:ty),*) => {
    $(impl ToHumanString for $type {
        fn to_print_string(&self) -> String {
            DataType::Number.colorize(&self.to_string())
        }
    })*
});

impl_number_human_string!(u64, i8);

impl<T: ToHumanString> ToHumanString for Vec<T> {
    fn to_print_string(&self) -> String {
        self.iter()
            .map(|value| value.to_print_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[macro_export]
macro_rules! impl_serialization_traits(($type:ty) => {
    impl std::str::FromStr for $type {
        type Err = <$type as $crate::FromFileString>::Error;

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            <$type as $crate::FromFileString>::from_file_string(s)
        }
    }

    impl std::convert::TryFrom<&str> for $type {
        type Error = <$type as $crate::FromFileString>::Error;

        fn try_from(value: &str) -> Result<Self, Self::Error> {
            <$type as $crate::FromFileString>::from_file_string(value)
        }
    }

    impl std::fmt::Display for $type {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            <$type as $crate::ToFileString>::write_file_string(self, f)
        }
    }

    impl serde::Serialize for $type {
        fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_str(self)
        }
    }

    impl<'de> serde::Deserialize<'de> for $type {
        fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let s = <String as serde::Deserialize>::deserialize(deserializer)?;
            <$type as $crate::FromFileString>::from_file_string(&s).map_err(serde::de::Error::custom)
        }
    }
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_json() {
        let value = AbstractValue::new(vec![1u64, 2, 3]);
        assert_eq!(value.export(true).unwrap(), "[1,2,3]");
    }

    #[test]
    fn test_export_human_list() {
        colored::control::set_override(false);

        let value = AbstractValue::new(vec![1u64, 2, 3]);
        assert_eq!(value.export(false).unwrap(), "1\n2\n3");
    }

    #[test]
    fn test_export_human_empty_list() {
        let value = AbstractValue::new(Vec::<u64>::new());
        assert_eq!(value.export(false).unwrap(), "");
    }

    #[test]
    fn test_export_bool() {
        colored::control::set_override(false);

        assert_eq!(AbstractValue::new(true).export(false).unwrap(), "true");
        assert_eq!(AbstractValue::new(false).export(true).unwrap(), "false");
    }

    #[test]
    fn test_export_negative_number() {
        assert_eq!(AbstractValue::new(-1i8).export(true).unwrap(), "-1");
    }
}
