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

//! Traits implemented by all the models.
//!
//! Models are the request and response shapes of a service. They are plain
//! values: they can be cloned, compared, and converted to and from JSON.
//! Models sent to a service have mandatory fields. These models are created
//! with a builder, and the builder validates the mandatory fields exactly
//! once, in [MessageBuilder::build].

/// A trait that must be implemented by all models.
pub trait Message:
    serde::ser::Serialize + serde::de::DeserializeOwned + Clone + std::fmt::Debug + PartialEq
{
    /// The name of this model in the service schema.
    fn typename() -> &'static str;
}

/// A trait implemented by the builders of validated models.
pub trait MessageBuilder: Sized {
    /// The model created by this builder.
    type Target: Message;

    /// Validates the mandatory fields and creates the model.
    ///
    /// The mandatory fields are checked in declaration order, see
    /// [Validated::REQUIRED_FIELDS]. The first missing field is reported as
    /// a [ValidationError][crate::error::validation::ValidationError].
    fn build(self) -> crate::Result<Self::Target>;
}

/// A trait implemented by models with mandatory fields.
///
/// These models cannot be created directly, the application uses the
/// associated builder. A model can be converted back into a builder, which is
/// useful to create a modified copy.
///
/// # Example
/// ```
/// # use ibm_cloud_gax::message::{MessageBuilder, Validated};
/// fn with_copy<T: Validated>(model: &T) -> ibm_cloud_gax::Result<T> {
///     model.to_builder().build()
/// }
/// ```
pub trait Validated: Message {
    /// The builder for this model.
    type Builder: MessageBuilder<Target = Self> + serde::de::DeserializeOwned;

    /// The mandatory fields, in the order `build()` checks them.
    const REQUIRED_FIELDS: &'static [RequiredField];

    /// Returns a builder initialized with all the values in this model.
    fn to_builder(&self) -> Self::Builder;
}

/// Describes a mandatory field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequiredField {
    /// The field name, as it appears in the JSON representation.
    pub name: &'static str,
    /// The check applied to the field.
    pub presence: Presence,
}

impl RequiredField {
    /// A field that must be present and not `null`.
    pub const fn not_null(name: &'static str) -> Self {
        Self {
            name,
            presence: Presence::NotNull,
        }
    }

    /// A field that must be present and not the empty string.
    pub const fn not_empty(name: &'static str) -> Self {
        Self {
            name,
            presence: Presence::NotEmpty,
        }
    }
}

/// The check applied to a mandatory field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Presence {
    /// The field must be set.
    NotNull,
    /// The field must be set to a non-empty string. Used for path parameters.
    NotEmpty,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_field() {
        let f = RequiredField::not_null("priority");
        assert_eq!(f.name, "priority");
        assert_eq!(f.presence, Presence::NotNull);

        let f = RequiredField::not_empty("instance_group_id");
        assert_eq!(f.name, "instance_group_id");
        assert_eq!(f.presence, Presence::NotEmpty);
    }
}
