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

use gax::message::{Message, RequiredField};
use gax::validator::not_null;

/// Identifies a resource group.
///
/// Resource groups can only be identified by their unique identifier.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
#[non_exhaustive]
pub enum ResourceGroupIdentity {
    ById(ResourceGroupIdentityById),
}

impl Message for ResourceGroupIdentity {
    fn typename() -> &'static str {
        "ResourceGroupIdentity"
    }
}

impl std::convert::From<ResourceGroupIdentityById> for ResourceGroupIdentity {
    fn from(value: ResourceGroupIdentityById) -> Self {
        Self::ById(value)
    }
}

/// Identifies a resource group by its unique identifier.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "ResourceGroupIdentityByIdBuilder")]
#[non_exhaustive]
pub struct ResourceGroupIdentityById {
    id: String,
}

impl ResourceGroupIdentityById {
    /// Returns an empty builder.
    pub fn builder() -> ResourceGroupIdentityByIdBuilder {
        ResourceGroupIdentityByIdBuilder::default()
    }

    /// Returns a builder initialized with the values in this model.
    pub fn to_builder(&self) -> ResourceGroupIdentityByIdBuilder {
        ResourceGroupIdentityByIdBuilder {
            id: Some(self.id.clone()),
        }
    }

    /// The unique identifier for this resource group.
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl Message for ResourceGroupIdentityById {
    fn typename() -> &'static str {
        "ResourceGroupIdentityByID"
    }
}

impl gax::message::Validated for ResourceGroupIdentityById {
    type Builder = ResourceGroupIdentityByIdBuilder;
    const REQUIRED_FIELDS: &'static [RequiredField] = &[RequiredField::not_null("id")];
    fn to_builder(&self) -> Self::Builder {
        ResourceGroupIdentityById::to_builder(self)
    }
}

impl std::convert::TryFrom<ResourceGroupIdentityByIdBuilder> for ResourceGroupIdentityById {
    type Error = gax::error::Error;
    fn try_from(value: ResourceGroupIdentityByIdBuilder) -> gax::Result<Self> {
        value.build()
    }
}

/// Builder for [ResourceGroupIdentityById].
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct ResourceGroupIdentityByIdBuilder {
    id: Option<String>,
}

impl ResourceGroupIdentityByIdBuilder {
    /// Creates a builder with all the mandatory fields.
    pub fn new<T: Into<String>>(id: T) -> Self {
        Self::default().set_id(id)
    }

    /// Sets the value of [id][ResourceGroupIdentityById::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = Some(v.into());
        self
    }

    /// Validates the mandatory fields and creates a [ResourceGroupIdentityById].
    pub fn build(self) -> gax::Result<ResourceGroupIdentityById> {
        let name = ResourceGroupIdentityById::typename();
        Ok(ResourceGroupIdentityById {
            id: not_null(name, "id", self.id)?,
        })
    }
}

impl gax::message::MessageBuilder for ResourceGroupIdentityByIdBuilder {
    type Target = ResourceGroupIdentityById;
    fn build(self) -> gax::Result<Self::Target> {
        ResourceGroupIdentityByIdBuilder::build(self)
    }
}

/// A reference to a resource group, as returned by the service.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ResourceGroupReference {
    href: Option<String>,
    id: Option<String>,
    name: Option<String>,
}

impl ResourceGroupReference {
    /// The URL for this resource group.
    pub fn href(&self) -> Option<&str> {
        self.href.as_deref()
    }

    /// The unique identifier for this resource group.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// The user-defined name for this resource group.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl Message for ResourceGroupReference {
    fn typename() -> &'static str {
        "ResourceGroupReference"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn identity_by_id() -> anyhow::Result<()> {
        let identity = ResourceGroupIdentity::from(
            ResourceGroupIdentityByIdBuilder::new("fee82deba12e4c0fb69c3b09d1f12345").build()?,
        );
        let got = serde_json::to_value(&identity)?;
        assert_eq!(got, json!({"id": "fee82deba12e4c0fb69c3b09d1f12345"}));
        let roundtrip = serde_json::from_value::<ResourceGroupIdentity>(got)?;
        assert_eq!(roundtrip, identity);
        Ok(())
    }

    #[test]
    fn identity_rejects_unknown_shape() {
        let got = serde_json::from_value::<ResourceGroupIdentity>(json!({"name": "default"}));
        assert!(got.is_err(), "{got:?}");
    }

    #[test]
    fn reference_ignores_unknown_fields() -> anyhow::Result<()> {
        let got = serde_json::from_value::<ResourceGroupReference>(json!({
            "id": "fee82deba12e4c0fb69c3b09d1f12345",
            "name": "my-resource-group",
            "resource_type": "resource_group",
        }))?;
        assert_eq!(got.id(), Some("fee82deba12e4c0fb69c3b09d1f12345"));
        assert_eq!(got.name(), Some("my-resource-group"));
        assert_eq!(got.href(), None);
        Ok(())
    }
}
