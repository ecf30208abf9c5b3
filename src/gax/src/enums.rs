// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Implements common code for enumerations.
//!
//! Enumerations in the VPC API are open: the service may return values that
//! did not exist when the library was released, and applications may send
//! values unknown to the library. Each generated enum has a variant per known
//! value plus an `UnknownValue` variant that preserves any other string.

use std::marker::PhantomData;

/// Holds an enum value unknown to the library.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct UnknownEnumValue(String);

impl UnknownEnumValue {
    /// Wraps a string value that does not match any known variant.
    pub fn new<T: Into<String>>(value: T) -> Self {
        Self(value.into())
    }

    /// The value, exactly as received or set.
    pub fn name(&self) -> &str {
        self.0.as_str()
    }
}

impl serde::ser::Serialize for UnknownEnumValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.0.as_str())
    }
}

/// Deserializes any string into an enum.
///
/// The enum maps the string to a known variant, or to `UnknownValue`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EnumVisitor<'lf, T> {
    name: &'lf str,
    _unused: PhantomData<T>,
}

impl<'lf, T> EnumVisitor<'lf, T> {
    /// `name` identifies the enum in error messages.
    pub fn new(name: &'lf str) -> Self {
        Self {
            name,
            _unused: Default::default(),
        }
    }
}

impl<T> serde::de::Visitor<'_> for EnumVisitor<'_, T>
where
    T: for<'a> From<&'a str>,
{
    type Value = T;
    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(T::from(value))
    }
    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str(&format!("a {} enum value in string format", self.name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;

    #[test]
    fn unknown_enum_value() -> anyhow::Result<()> {
        let u = UnknownEnumValue::new("chacha20");
        assert_eq!(u.name(), "chacha20");
        let got = serde_json::to_value(&u)?;
        assert_eq!(got, json!("chacha20"));
        Ok(())
    }

    // This type is here to drive the `EnumVisitor` and test its functionality.
    #[derive(Clone, Debug, PartialEq)]
    enum FakeEnum {
        Red,
        Green,
        UnknownValue(UnknownEnumValue),
    }
    impl From<&str> for FakeEnum {
        fn from(value: &str) -> Self {
            match value {
                "red" => Self::Red,
                "green" => Self::Green,
                x => Self::UnknownValue(UnknownEnumValue::new(x)),
            }
        }
    }
    impl<'de> serde::de::Deserialize<'de> for FakeEnum {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            deserializer.deserialize_str(EnumVisitor::new("Test.color"))
        }
    }

    #[test_case(json!("red"), FakeEnum::Red)]
    #[test_case(json!("green"), FakeEnum::Green)]
    #[test_case(json!("blue"), FakeEnum::UnknownValue(UnknownEnumValue::new("blue")))]
    #[test_case(json!(""), FakeEnum::UnknownValue(UnknownEnumValue::new("")))]
    fn visitor(input: serde_json::Value, want: FakeEnum) -> anyhow::Result<()> {
        let got = serde_json::from_value::<FakeEnum>(input)?;
        assert_eq!(got, want);
        Ok(())
    }

    #[test_case(json!(42))]
    #[test_case(json!(true))]
    #[test_case(json!({}))]
    fn visitor_not_a_string(input: serde_json::Value) {
        let got = serde_json::from_value::<FakeEnum>(input);
        assert!(got.is_err(), "{got:?}");
        assert!(format!("{got:?}").contains("Test.color"), "{got:?}");
    }
}
