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

/// Identifies a volume profile by its name or by its URL.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
#[non_exhaustive]
pub enum VolumeProfileIdentity {
    ByName(VolumeProfileIdentityByName),
    ByHref(VolumeProfileIdentityByHref),
}

impl Message for VolumeProfileIdentity {
    fn typename() -> &'static str {
        "VolumeProfileIdentity"
    }
}

impl std::convert::From<VolumeProfileIdentityByName> for VolumeProfileIdentity {
    fn from(value: VolumeProfileIdentityByName) -> Self {
        Self::ByName(value)
    }
}

impl std::convert::From<VolumeProfileIdentityByHref> for VolumeProfileIdentity {
    fn from(value: VolumeProfileIdentityByHref) -> Self {
        Self::ByHref(value)
    }
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "VolumeProfileIdentityByNameBuilder")]
#[non_exhaustive]
pub struct VolumeProfileIdentityByName {
    name: String,
}

impl VolumeProfileIdentityByName {
    /// Returns an empty builder.
    pub fn builder() -> VolumeProfileIdentityByNameBuilder {
        VolumeProfileIdentityByNameBuilder::default()
    }

    /// Returns a builder initialized with the values in this model.
    pub fn to_builder(&self) -> VolumeProfileIdentityByNameBuilder {
        VolumeProfileIdentityByNameBuilder {
            name: Some(self.name.clone()),
        }
    }

    /// The name for this volume profile, for example `general-purpose`.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Message for VolumeProfileIdentityByName {
    fn typename() -> &'static str {
        "VolumeProfileIdentityByName"
    }
}

impl gax::message::Validated for VolumeProfileIdentityByName {
    type Builder = VolumeProfileIdentityByNameBuilder;
    const REQUIRED_FIELDS: &'static [RequiredField] = &[RequiredField::not_null("name")];
    fn to_builder(&self) -> Self::Builder {
        VolumeProfileIdentityByName::to_builder(self)
    }
}

impl std::convert::TryFrom<VolumeProfileIdentityByNameBuilder> for VolumeProfileIdentityByName {
    type Error = gax::error::Error;
    fn try_from(value: VolumeProfileIdentityByNameBuilder) -> gax::Result<Self> {
        value.build()
    }
}

/// Builder for [VolumeProfileIdentityByName].
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct VolumeProfileIdentityByNameBuilder {
    name: Option<String>,
}

impl VolumeProfileIdentityByNameBuilder {
    /// Creates a builder with all the mandatory fields.
    pub fn new(name: impl Into<String>) -> Self {
        Self::default().set_name(name)
    }

    /// Sets the value of [name][VolumeProfileIdentityByName::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Validates the mandatory fields and creates a [VolumeProfileIdentityByName].
    pub fn build(self) -> gax::Result<VolumeProfileIdentityByName> {
        let name = VolumeProfileIdentityByName::typename();
        Ok(VolumeProfileIdentityByName {
            name: not_null(name, "name", self.name)?,
        })
    }
}

impl gax::message::MessageBuilder for VolumeProfileIdentityByNameBuilder {
    type Target = VolumeProfileIdentityByName;
    fn build(self) -> gax::Result<Self::Target> {
        VolumeProfileIdentityByNameBuilder::build(self)
    }
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "VolumeProfileIdentityByHrefBuilder")]
#[non_exhaustive]
pub struct VolumeProfileIdentityByHref {
    href: String,
}

impl VolumeProfileIdentityByHref {
    /// Returns an empty builder.
    pub fn builder() -> VolumeProfileIdentityByHrefBuilder {
        VolumeProfileIdentityByHrefBuilder::default()
    }

    /// Returns a builder initialized with the values in this model.
    pub fn to_builder(&self) -> VolumeProfileIdentityByHrefBuilder {
        VolumeProfileIdentityByHrefBuilder {
            href: Some(self.href.clone()),
        }
    }

    /// The URL for this volume profile.
    pub fn href(&self) -> &str {
        &self.href
    }
}

impl Message for VolumeProfileIdentityByHref {
    fn typename() -> &'static str {
        "VolumeProfileIdentityByHref"
    }
}

impl gax::message::Validated for VolumeProfileIdentityByHref {
    type Builder = VolumeProfileIdentityByHrefBuilder;
    const REQUIRED_FIELDS: &'static [RequiredField] = &[RequiredField::not_null("href")];
    fn to_builder(&self) -> Self::Builder {
        VolumeProfileIdentityByHref::to_builder(self)
    }
}

impl std::convert::TryFrom<VolumeProfileIdentityByHrefBuilder> for VolumeProfileIdentityByHref {
    type Error = gax::error::Error;
    fn try_from(value: VolumeProfileIdentityByHrefBuilder) -> gax::Result<Self> {
        value.build()
    }
}

/// Builder for [VolumeProfileIdentityByHref].
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct VolumeProfileIdentityByHrefBuilder {
    href: Option<String>,
}

impl VolumeProfileIdentityByHrefBuilder {
    /// Creates a builder with all the mandatory fields.
    pub fn new(href: impl Into<String>) -> Self {
        Self::default().set_href(href)
    }

    /// Sets the value of [href][VolumeProfileIdentityByHref::href].
    pub fn set_href<T: Into<String>>(mut self, v: T) -> Self {
        self.href = Some(v.into());
        self
    }

    /// Validates the mandatory fields and creates a [VolumeProfileIdentityByHref].
    pub fn build(self) -> gax::Result<VolumeProfileIdentityByHref> {
        let name = VolumeProfileIdentityByHref::typename();
        Ok(VolumeProfileIdentityByHref {
            href: not_null(name, "href", self.href)?,
        })
    }
}

impl gax::message::MessageBuilder for VolumeProfileIdentityByHrefBuilder {
    type Target = VolumeProfileIdentityByHref;
    fn build(self) -> gax::Result<Self::Target> {
        VolumeProfileIdentityByHrefBuilder::build(self)
    }
}

/// Identifies a customer root key, in a Key Protect or Hyper Protect Crypto
/// Service instance.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
#[non_exhaustive]
pub enum EncryptionKeyIdentity {
    ByCrn(EncryptionKeyIdentityByCrn),
}

impl Message for EncryptionKeyIdentity {
    fn typename() -> &'static str {
        "EncryptionKeyIdentity"
    }
}

impl std::convert::From<EncryptionKeyIdentityByCrn> for EncryptionKeyIdentity {
    fn from(value: EncryptionKeyIdentityByCrn) -> Self {
        Self::ByCrn(value)
    }
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "EncryptionKeyIdentityByCrnBuilder")]
#[non_exhaustive]
pub struct EncryptionKeyIdentityByCrn {
    crn: String,
}

impl EncryptionKeyIdentityByCrn {
    /// Returns an empty builder.
    pub fn builder() -> EncryptionKeyIdentityByCrnBuilder {
        EncryptionKeyIdentityByCrnBuilder::default()
    }

    /// Returns a builder initialized with the values in this model.
    pub fn to_builder(&self) -> EncryptionKeyIdentityByCrnBuilder {
        EncryptionKeyIdentityByCrnBuilder {
            crn: Some(self.crn.clone()),
        }
    }

    /// The CRN of the root key.
    pub fn crn(&self) -> &str {
        &self.crn
    }
}

impl Message for EncryptionKeyIdentityByCrn {
    fn typename() -> &'static str {
        "EncryptionKeyIdentityByCRN"
    }
}

impl gax::message::Validated for EncryptionKeyIdentityByCrn {
    type Builder = EncryptionKeyIdentityByCrnBuilder;
    const REQUIRED_FIELDS: &'static [RequiredField] = &[RequiredField::not_null("crn")];
    fn to_builder(&self) -> Self::Builder {
        EncryptionKeyIdentityByCrn::to_builder(self)
    }
}

impl std::convert::TryFrom<EncryptionKeyIdentityByCrnBuilder> for EncryptionKeyIdentityByCrn {
    type Error = gax::error::Error;
    fn try_from(value: EncryptionKeyIdentityByCrnBuilder) -> gax::Result<Self> {
        value.build()
    }
}

/// Builder for [EncryptionKeyIdentityByCrn].
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct EncryptionKeyIdentityByCrnBuilder {
    crn: Option<String>,
}

impl EncryptionKeyIdentityByCrnBuilder {
    /// Creates a builder with all the mandatory fields.
    pub fn new(crn: impl Into<String>) -> Self {
        Self::default().set_crn(crn)
    }

    /// Sets the value of [crn][EncryptionKeyIdentityByCrn::crn].
    pub fn set_crn<T: Into<String>>(mut self, v: T) -> Self {
        self.crn = Some(v.into());
        self
    }

    /// Validates the mandatory fields and creates a [EncryptionKeyIdentityByCrn].
    pub fn build(self) -> gax::Result<EncryptionKeyIdentityByCrn> {
        let name = EncryptionKeyIdentityByCrn::typename();
        Ok(EncryptionKeyIdentityByCrn {
            crn: not_null(name, "crn", self.crn)?,
        })
    }
}

impl gax::message::MessageBuilder for EncryptionKeyIdentityByCrnBuilder {
    type Target = EncryptionKeyIdentityByCrn;
    fn build(self) -> gax::Result<Self::Target> {
        EncryptionKeyIdentityByCrnBuilder::build(self)
    }
}

/// The boot volume to create with an instance, in the context of an image.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "VolumePrototypeInstanceByImageContextBuilder")]
#[non_exhaustive]
pub struct VolumePrototypeInstanceByImageContext {
    capacity: Option<i64>,
    encryption_key: Option<EncryptionKeyIdentity>,
    iops: Option<i64>,
    name: Option<String>,
    profile: VolumeProfileIdentity,
}

impl VolumePrototypeInstanceByImageContext {
    /// Returns an empty builder.
    pub fn builder() -> VolumePrototypeInstanceByImageContextBuilder {
        VolumePrototypeInstanceByImageContextBuilder::default()
    }

    /// Returns a builder initialized with the values in this model.
    pub fn to_builder(&self) -> VolumePrototypeInstanceByImageContextBuilder {
        VolumePrototypeInstanceByImageContextBuilder {
            capacity: self.capacity.clone(),
            encryption_key: self.encryption_key.clone(),
            iops: self.iops.clone(),
            name: self.name.clone(),
            profile: Some(self.profile.clone()),
        }
    }

    /// The capacity of the volume in gigabytes.
    pub fn capacity(&self) -> Option<i64> {
        self.capacity
    }

    /// The root key to use to wrap the data encryption key for the volume.
    ///
    /// If unset, the image's encryption key is used, or provider-managed
    /// encryption if the image is not encrypted.
    pub fn encryption_key(&self) -> Option<&EncryptionKeyIdentity> {
        self.encryption_key.as_ref()
    }

    /// The bandwidth for the volume.
    pub fn iops(&self) -> Option<i64> {
        self.iops
    }

    /// The user-defined name for this volume.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The profile to use for this volume.
    pub fn profile(&self) -> &VolumeProfileIdentity {
        &self.profile
    }
}

impl Message for VolumePrototypeInstanceByImageContext {
    fn typename() -> &'static str {
        "VolumePrototypeInstanceByImageContext"
    }
}

impl gax::message::Validated for VolumePrototypeInstanceByImageContext {
    type Builder = VolumePrototypeInstanceByImageContextBuilder;
    const REQUIRED_FIELDS: &'static [RequiredField] = &[RequiredField::not_null("profile")];
    fn to_builder(&self) -> Self::Builder {
        VolumePrototypeInstanceByImageContext::to_builder(self)
    }
}

impl std::convert::TryFrom<VolumePrototypeInstanceByImageContextBuilder>
    for VolumePrototypeInstanceByImageContext
{
    type Error = gax::error::Error;
    fn try_from(value: VolumePrototypeInstanceByImageContextBuilder) -> gax::Result<Self> {
        value.build()
    }
}

/// Builder for [VolumePrototypeInstanceByImageContext].
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct VolumePrototypeInstanceByImageContextBuilder {
    capacity: Option<i64>,
    encryption_key: Option<EncryptionKeyIdentity>,
    iops: Option<i64>,
    name: Option<String>,
    profile: Option<VolumeProfileIdentity>,
}

impl VolumePrototypeInstanceByImageContextBuilder {
    /// Creates a builder with all the mandatory fields.
    pub fn new(profile: impl Into<VolumeProfileIdentity>) -> Self {
        Self::default().set_profile(profile)
    }

    /// Sets the value of [capacity][VolumePrototypeInstanceByImageContext::capacity].
    pub fn set_capacity(mut self, v: i64) -> Self {
        self.capacity = Some(v);
        self
    }

    /// Sets the value of [encryption_key][VolumePrototypeInstanceByImageContext::encryption_key].
    pub fn set_encryption_key<T: Into<EncryptionKeyIdentity>>(mut self, v: T) -> Self {
        self.encryption_key = Some(v.into());
        self
    }

    /// Sets the value of [iops][VolumePrototypeInstanceByImageContext::iops].
    pub fn set_iops(mut self, v: i64) -> Self {
        self.iops = Some(v);
        self
    }

    /// Sets the value of [name][VolumePrototypeInstanceByImageContext::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [profile][VolumePrototypeInstanceByImageContext::profile].
    pub fn set_profile<T: Into<VolumeProfileIdentity>>(mut self, v: T) -> Self {
        self.profile = Some(v.into());
        self
    }

    /// Validates the mandatory fields and creates a [VolumePrototypeInstanceByImageContext].
    pub fn build(self) -> gax::Result<VolumePrototypeInstanceByImageContext> {
        let name = VolumePrototypeInstanceByImageContext::typename();
        Ok(VolumePrototypeInstanceByImageContext {
            capacity: self.capacity,
            encryption_key: self.encryption_key,
            iops: self.iops,
            name: self.name,
            profile: not_null(name, "profile", self.profile)?,
        })
    }
}

impl gax::message::MessageBuilder for VolumePrototypeInstanceByImageContextBuilder {
    type Target = VolumePrototypeInstanceByImageContext;
    fn build(self) -> gax::Result<Self::Target> {
        VolumePrototypeInstanceByImageContextBuilder::build(self)
    }
}

/// The boot volume attachment to create with an instance, in the context of an image.
///
/// # Example
/// ```
/// # use ibm_cloud_vpc_v1::model::*;
/// let profile = VolumeProfileIdentityByNameBuilder::new("general-purpose").build()?;
/// let volume = VolumePrototypeInstanceByImageContextBuilder::new(profile)
///     .set_capacity(100)
///     .build()?;
/// let attachment = VolumeAttachmentPrototypeInstanceByImageContextBuilder::new(volume)
///     .set_delete_volume_on_instance_delete(true)
///     .build()?;
/// assert_eq!(attachment.volume().capacity(), Some(100));
/// # ibm_cloud_vpc_v1::Result::<()>::Ok(())
/// ```
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "VolumeAttachmentPrototypeInstanceByImageContextBuilder")]
#[non_exhaustive]
pub struct VolumeAttachmentPrototypeInstanceByImageContext {
    name: Option<String>,
    delete_volume_on_instance_delete: Option<bool>,
    volume: VolumePrototypeInstanceByImageContext,
}

impl VolumeAttachmentPrototypeInstanceByImageContext {
    /// Returns an empty builder.
    pub fn builder() -> VolumeAttachmentPrototypeInstanceByImageContextBuilder {
        VolumeAttachmentPrototypeInstanceByImageContextBuilder::default()
    }

    /// Returns a builder initialized with the values in this model.
    pub fn to_builder(&self) -> VolumeAttachmentPrototypeInstanceByImageContextBuilder {
        VolumeAttachmentPrototypeInstanceByImageContextBuilder {
            name: self.name.clone(),
            delete_volume_on_instance_delete: self.delete_volume_on_instance_delete.clone(),
            volume: Some(self.volume.clone()),
        }
    }

    /// The user-defined name for this volume attachment.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// If set to `true`, when deleting the instance the volume will also be deleted.
    pub fn delete_volume_on_instance_delete(&self) -> Option<bool> {
        self.delete_volume_on_instance_delete
    }

    /// The boot volume to create.
    pub fn volume(&self) -> &VolumePrototypeInstanceByImageContext {
        &self.volume
    }
}

impl Message for VolumeAttachmentPrototypeInstanceByImageContext {
    fn typename() -> &'static str {
        "VolumeAttachmentPrototypeInstanceByImageContext"
    }
}

impl gax::message::Validated for VolumeAttachmentPrototypeInstanceByImageContext {
    type Builder = VolumeAttachmentPrototypeInstanceByImageContextBuilder;
    const REQUIRED_FIELDS: &'static [RequiredField] = &[RequiredField::not_null("volume")];
    fn to_builder(&self) -> Self::Builder {
        VolumeAttachmentPrototypeInstanceByImageContext::to_builder(self)
    }
}

impl std::convert::TryFrom<VolumeAttachmentPrototypeInstanceByImageContextBuilder>
    for VolumeAttachmentPrototypeInstanceByImageContext
{
    type Error = gax::error::Error;
    fn try_from(
        value: VolumeAttachmentPrototypeInstanceByImageContextBuilder,
    ) -> gax::Result<Self> {
        value.build()
    }
}

/// Builder for [VolumeAttachmentPrototypeInstanceByImageContext].
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct VolumeAttachmentPrototypeInstanceByImageContextBuilder {
    name: Option<String>,
    delete_volume_on_instance_delete: Option<bool>,
    volume: Option<VolumePrototypeInstanceByImageContext>,
}

impl VolumeAttachmentPrototypeInstanceByImageContextBuilder {
    /// Creates a builder with all the mandatory fields.
    pub fn new(volume: impl Into<VolumePrototypeInstanceByImageContext>) -> Self {
        Self::default().set_volume(volume)
    }

    /// Sets the value of [name][VolumeAttachmentPrototypeInstanceByImageContext::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [delete_volume_on_instance_delete][VolumeAttachmentPrototypeInstanceByImageContext::delete_volume_on_instance_delete].
    pub fn set_delete_volume_on_instance_delete(mut self, v: bool) -> Self {
        self.delete_volume_on_instance_delete = Some(v);
        self
    }

    /// Sets the value of [volume][VolumeAttachmentPrototypeInstanceByImageContext::volume].
    pub fn set_volume<T: Into<VolumePrototypeInstanceByImageContext>>(mut self, v: T) -> Self {
        self.volume = Some(v.into());
        self
    }

    /// Validates the mandatory fields and creates a [VolumeAttachmentPrototypeInstanceByImageContext].
    pub fn build(self) -> gax::Result<VolumeAttachmentPrototypeInstanceByImageContext> {
        let name = VolumeAttachmentPrototypeInstanceByImageContext::typename();
        Ok(VolumeAttachmentPrototypeInstanceByImageContext {
            name: self.name,
            delete_volume_on_instance_delete: self.delete_volume_on_instance_delete,
            volume: not_null(name, "volume", self.volume)?,
        })
    }
}

impl gax::message::MessageBuilder for VolumeAttachmentPrototypeInstanceByImageContextBuilder {
    type Target = VolumeAttachmentPrototypeInstanceByImageContext;
    fn build(self) -> gax::Result<Self::Target> {
        VolumeAttachmentPrototypeInstanceByImageContextBuilder::build(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn profile_identity() -> anyhow::Result<()> {
        let got = serde_json::from_value::<VolumeProfileIdentity>(json!({"name": "5iops-tier"}))?;
        assert!(
            matches!(got, VolumeProfileIdentity::ByName(ref p) if p.name() == "5iops-tier"),
            "{got:?}"
        );

        let got = serde_json::from_value::<VolumeProfileIdentity>(json!({
            "href": "https://us-south.iaas.cloud.ibm.com/v1/volume/profiles/general-purpose"
        }))?;
        assert!(matches!(got, VolumeProfileIdentity::ByHref(_)), "{got:?}");
        Ok(())
    }

    #[test]
    fn attachment_serialize() -> anyhow::Result<()> {
        let profile = VolumeProfileIdentityByNameBuilder::new("general-purpose").build()?;
        let key = EncryptionKeyIdentityByCrnBuilder::new(
            "crn:v1:bluemix:public:kms:us-south:a/dffc98a0f1f0f95f6613b3b752286b87:e4a29d1a-2ef0-42a6-8fd2-350deb1c647e:key:5437653b-c4b1-447f-9646-b2a2a4cd6179",
        )
        .build()?;
        let volume = VolumePrototypeInstanceByImageContextBuilder::new(profile)
            .set_encryption_key(key)
            .set_iops(10000)
            .set_name("my-boot-volume")
            .build()?;
        let attachment = VolumeAttachmentPrototypeInstanceByImageContextBuilder::new(volume)
            .set_name("my-volume-attachment")
            .build()?;
        let got = serde_json::to_value(&attachment)?;
        assert_eq!(got["name"], json!("my-volume-attachment"));
        assert_eq!(got["volume"]["profile"], json!({"name": "general-purpose"}));
        assert_eq!(got["volume"]["iops"], json!(10000));
        assert!(
            got.get("delete_volume_on_instance_delete").is_none(),
            "{got:?}"
        );
        Ok(())
    }
}
