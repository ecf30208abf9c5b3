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
use gax::validator::not_empty;

/// An image, as returned by the service.
///
/// All the fields are optional, a payload may contain only some of them.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[non_exhaustive]
pub struct Image {
    id: Option<String>,
    crn: Option<String>,
    href: Option<String>,
    name: Option<String>,
    minimum_provisioned_size: Option<i64>,
    resource_group: Option<crate::model::ResourceGroupReference>,
    #[serde(with = "time::serde::rfc3339::option")]
    created_at: Option<time::OffsetDateTime>,
    file: Option<ImageFile>,
    operating_system: Option<OperatingSystem>,
    status: Option<image::Status>,
    visibility: Option<image::Visibility>,
    encryption: Option<image::Encryption>,
    encryption_key: Option<EncryptionKeyReference>,
}

impl Image {
    /// The unique identifier for this image.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// The CRN for this image.
    pub fn crn(&self) -> Option<&str> {
        self.crn.as_deref()
    }

    /// The URL for this image.
    pub fn href(&self) -> Option<&str> {
        self.href.as_deref()
    }

    /// The user-defined or system-provided name for this image.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The minimum size (in gigabytes) of a volume onto which this image may be provisioned.
    pub fn minimum_provisioned_size(&self) -> Option<i64> {
        self.minimum_provisioned_size
    }

    /// The resource group for this image.
    pub fn resource_group(&self) -> Option<&crate::model::ResourceGroupReference> {
        self.resource_group.as_ref()
    }

    /// The date and time that the image was created.
    pub fn created_at(&self) -> Option<time::OffsetDateTime> {
        self.created_at
    }

    /// Details for the stored image file.
    pub fn file(&self) -> Option<&ImageFile> {
        self.file.as_ref()
    }

    /// The operating system included in this image.
    pub fn operating_system(&self) -> Option<&OperatingSystem> {
        self.operating_system.as_ref()
    }

    /// The status of this image.
    pub fn status(&self) -> Option<&image::Status> {
        self.status.as_ref()
    }

    /// Whether the image is publicly visible or private to the account.
    pub fn visibility(&self) -> Option<&image::Visibility> {
        self.visibility.as_ref()
    }

    /// The type of encryption used on the image.
    pub fn encryption(&self) -> Option<&image::Encryption> {
        self.encryption.as_ref()
    }

    /// The key that will be used to encrypt volumes created from this image.
    ///
    /// Only present when `encryption` is `user_managed`.
    pub fn encryption_key(&self) -> Option<&EncryptionKeyReference> {
        self.encryption_key.as_ref()
    }
}

impl Message for Image {
    fn typename() -> &'static str {
        "Image"
    }
}

/// Defines additional types related to [Image].
pub mod image {
    #[allow(unused_imports)]
    use super::*;

    /// The status of an image.
    ///
    /// # Working with unknown values
    ///
    /// This enum is defined as `#[non_exhaustive]` because the service may add
    /// new values. Applications may also send values unknown to this library,
    /// use `Status::from()` with the value and it is sent unchanged.
    #[derive(Clone, Debug, PartialEq)]
    #[non_exhaustive]
    pub enum Status {
        Available,
        Deleting,
        Failed,
        Pending,
        Unusable,
        /// If set, the enum was initialized with an unknown value.
        ///
        /// Applications can examine the value using [Status::name].
        UnknownValue(gax::enums::UnknownEnumValue),
    }

    impl Status {
        /// Gets the enum value as a string.
        pub fn name(&self) -> &str {
            match self {
                Self::Available => "available",
                Self::Deleting => "deleting",
                Self::Failed => "failed",
                Self::Pending => "pending",
                Self::Unusable => "unusable",
                Self::UnknownValue(u) => u.name(),
            }
        }
    }

    impl std::fmt::Display for Status {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.name())
        }
    }

    impl std::convert::From<&str> for Status {
        fn from(value: &str) -> Self {
            match value {
                "available" => Self::Available,
                "deleting" => Self::Deleting,
                "failed" => Self::Failed,
                "pending" => Self::Pending,
                "unusable" => Self::Unusable,
                _ => Self::UnknownValue(gax::enums::UnknownEnumValue::new(value)),
            }
        }
    }

    impl std::convert::From<String> for Status {
        fn from(value: String) -> Self {
            Self::from(value.as_str())
        }
    }

    impl serde::ser::Serialize for Status {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> serde::de::Deserialize<'de> for Status {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            deserializer.deserialize_str(gax::enums::EnumVisitor::<Self>::new("Image.status"))
        }
    }

    /// Whether the image is publicly visible or private to the account.
    ///
    /// # Working with unknown values
    ///
    /// This enum is defined as `#[non_exhaustive]` because the service may add
    /// new values. Applications may also send values unknown to this library,
    /// use `Visibility::from()` with the value and it is sent unchanged.
    #[derive(Clone, Debug, PartialEq)]
    #[non_exhaustive]
    pub enum Visibility {
        Private,
        Public,
        /// If set, the enum was initialized with an unknown value.
        ///
        /// Applications can examine the value using [Visibility::name].
        UnknownValue(gax::enums::UnknownEnumValue),
    }

    impl Visibility {
        /// Gets the enum value as a string.
        pub fn name(&self) -> &str {
            match self {
                Self::Private => "private",
                Self::Public => "public",
                Self::UnknownValue(u) => u.name(),
            }
        }
    }

    impl std::fmt::Display for Visibility {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.name())
        }
    }

    impl std::convert::From<&str> for Visibility {
        fn from(value: &str) -> Self {
            match value {
                "private" => Self::Private,
                "public" => Self::Public,
                _ => Self::UnknownValue(gax::enums::UnknownEnumValue::new(value)),
            }
        }
    }

    impl std::convert::From<String> for Visibility {
        fn from(value: String) -> Self {
            Self::from(value.as_str())
        }
    }

    impl serde::ser::Serialize for Visibility {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> serde::de::Deserialize<'de> for Visibility {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            deserializer.deserialize_str(gax::enums::EnumVisitor::<Self>::new("Image.visibility"))
        }
    }

    /// The type of encryption used on the image.
    ///
    /// # Working with unknown values
    ///
    /// This enum is defined as `#[non_exhaustive]` because the service may add
    /// new values. Applications may also send values unknown to this library,
    /// use `Encryption::from()` with the value and it is sent unchanged.
    #[derive(Clone, Debug, PartialEq)]
    #[non_exhaustive]
    pub enum Encryption {
        /// The image is not encrypted.
        None,
        /// The image is encrypted with a customer root key.
        UserManaged,
        /// If set, the enum was initialized with an unknown value.
        ///
        /// Applications can examine the value using [Encryption::name].
        UnknownValue(gax::enums::UnknownEnumValue),
    }

    impl Encryption {
        /// Gets the enum value as a string.
        pub fn name(&self) -> &str {
            match self {
                Self::None => "none",
                Self::UserManaged => "user_managed",
                Self::UnknownValue(u) => u.name(),
            }
        }
    }

    impl std::fmt::Display for Encryption {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.name())
        }
    }

    impl std::convert::From<&str> for Encryption {
        fn from(value: &str) -> Self {
            match value {
                "none" => Self::None,
                "user_managed" => Self::UserManaged,
                _ => Self::UnknownValue(gax::enums::UnknownEnumValue::new(value)),
            }
        }
    }

    impl std::convert::From<String> for Encryption {
        fn from(value: String) -> Self {
            Self::from(value.as_str())
        }
    }

    impl serde::ser::Serialize for Encryption {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> serde::de::Deserialize<'de> for Encryption {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            deserializer.deserialize_str(gax::enums::EnumVisitor::<Self>::new("Image.encryption"))
        }
    }
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ImageFile {
    size: Option<i64>,
}

impl ImageFile {
    /// The size of the stored image file rounded up to the next gigabyte.
    pub fn size(&self) -> Option<i64> {
        self.size
    }
}

impl Message for ImageFile {
    fn typename() -> &'static str {
        "ImageFile"
    }
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[non_exhaustive]
pub struct OperatingSystem {
    architecture: Option<String>,
    dedicated_host_only: Option<bool>,
    display_name: Option<String>,
    family: Option<String>,
    href: Option<String>,
    name: Option<String>,
    vendor: Option<String>,
    version: Option<String>,
}

impl OperatingSystem {
    /// The operating system architecture.
    pub fn architecture(&self) -> Option<&str> {
        self.architecture.as_deref()
    }

    /// Images with this operating system can only be used on dedicated hosts.
    pub fn dedicated_host_only(&self) -> Option<bool> {
        self.dedicated_host_only
    }

    /// A unique, display-friendly name for the operating system.
    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    /// The name of the software family this operating system belongs to.
    pub fn family(&self) -> Option<&str> {
        self.family.as_deref()
    }

    /// The URL for this operating system.
    pub fn href(&self) -> Option<&str> {
        self.href.as_deref()
    }

    /// The unique name of the operating system.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The vendor of the operating system.
    pub fn vendor(&self) -> Option<&str> {
        self.vendor.as_deref()
    }

    /// The major release version of this operating system.
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }
}

impl Message for OperatingSystem {
    fn typename() -> &'static str {
        "OperatingSystem"
    }
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[non_exhaustive]
pub struct EncryptionKeyReference {
    crn: Option<String>,
}

impl EncryptionKeyReference {
    /// The CRN of the root key.
    pub fn crn(&self) -> Option<&str> {
        self.crn.as_deref()
    }
}

impl Message for EncryptionKeyReference {
    fn typename() -> &'static str {
        "EncryptionKeyReference"
    }
}

/// The request to retrieve an image.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "GetImageRequestBuilder")]
#[non_exhaustive]
pub struct GetImageRequest {
    id: String,
}

impl GetImageRequest {
    /// Returns an empty builder.
    pub fn builder() -> GetImageRequestBuilder {
        GetImageRequestBuilder::default()
    }

    /// Returns a builder initialized with the values in this model.
    pub fn to_builder(&self) -> GetImageRequestBuilder {
        GetImageRequestBuilder {
            id: Some(self.id.clone()),
        }
    }

    /// The image identifier.
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl Message for GetImageRequest {
    fn typename() -> &'static str {
        "GetImageRequest"
    }
}

impl gax::message::Validated for GetImageRequest {
    type Builder = GetImageRequestBuilder;
    const REQUIRED_FIELDS: &'static [RequiredField] = &[RequiredField::not_empty("id")];
    fn to_builder(&self) -> Self::Builder {
        GetImageRequest::to_builder(self)
    }
}

impl std::convert::TryFrom<GetImageRequestBuilder> for GetImageRequest {
    type Error = gax::error::Error;
    fn try_from(value: GetImageRequestBuilder) -> gax::Result<Self> {
        value.build()
    }
}

/// Builder for [GetImageRequest].
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct GetImageRequestBuilder {
    id: Option<String>,
}

impl GetImageRequestBuilder {
    /// Creates a builder with all the mandatory fields.
    pub fn new(id: impl Into<String>) -> Self {
        Self::default().set_id(id)
    }

    /// Sets the value of [id][GetImageRequest::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = Some(v.into());
        self
    }

    /// Validates the mandatory fields and creates a [GetImageRequest].
    pub fn build(self) -> gax::Result<GetImageRequest> {
        let name = GetImageRequest::typename();
        Ok(GetImageRequest {
            id: not_empty(name, "id", self.id)?,
        })
    }
}

impl gax::message::MessageBuilder for GetImageRequestBuilder {
    type Target = GetImageRequest;
    fn build(self) -> gax::Result<Self::Target> {
        GetImageRequestBuilder::build(self)
    }
}
