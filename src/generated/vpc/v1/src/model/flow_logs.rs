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

/// The target of a new flow log collector.
///
/// A subnet target collects the flow logs of every network interface attached to
/// the subnet. The subnet may be identified by its unique identifier, its CRN, or
/// its URL.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
#[non_exhaustive]
pub enum FlowLogCollectorPrototypeTarget {
    SubnetById(SubnetIdentityById),
    SubnetByCrn(SubnetIdentityByCrn),
    SubnetByHref(SubnetIdentityByHref),
}

impl Message for FlowLogCollectorPrototypeTarget {
    fn typename() -> &'static str {
        "FlowLogCollectorPrototypeTarget"
    }
}

impl std::convert::From<SubnetIdentityById> for FlowLogCollectorPrototypeTarget {
    fn from(value: SubnetIdentityById) -> Self {
        Self::SubnetById(value)
    }
}

impl std::convert::From<SubnetIdentityByCrn> for FlowLogCollectorPrototypeTarget {
    fn from(value: SubnetIdentityByCrn) -> Self {
        Self::SubnetByCrn(value)
    }
}

impl std::convert::From<SubnetIdentityByHref> for FlowLogCollectorPrototypeTarget {
    fn from(value: SubnetIdentityByHref) -> Self {
        Self::SubnetByHref(value)
    }
}

/// Identifies a subnet by its unique identifier.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "SubnetIdentityByIdBuilder")]
#[non_exhaustive]
pub struct SubnetIdentityById {
    id: String,
}

impl SubnetIdentityById {
    /// Returns an empty builder.
    pub fn builder() -> SubnetIdentityByIdBuilder {
        SubnetIdentityByIdBuilder::default()
    }

    /// Returns a builder initialized with the values in this model.
    pub fn to_builder(&self) -> SubnetIdentityByIdBuilder {
        SubnetIdentityByIdBuilder {
            id: Some(self.id.clone()),
        }
    }

    /// The unique identifier for this subnet.
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl Message for SubnetIdentityById {
    fn typename() -> &'static str {
        "SubnetIdentityByID"
    }
}

impl gax::message::Validated for SubnetIdentityById {
    type Builder = SubnetIdentityByIdBuilder;
    const REQUIRED_FIELDS: &'static [RequiredField] = &[RequiredField::not_null("id")];
    fn to_builder(&self) -> Self::Builder {
        SubnetIdentityById::to_builder(self)
    }
}

impl std::convert::TryFrom<SubnetIdentityByIdBuilder> for SubnetIdentityById {
    type Error = gax::error::Error;
    fn try_from(value: SubnetIdentityByIdBuilder) -> gax::Result<Self> {
        value.build()
    }
}

/// Builder for [SubnetIdentityById].
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct SubnetIdentityByIdBuilder {
    id: Option<String>,
}

impl SubnetIdentityByIdBuilder {
    /// Creates a builder with all the mandatory fields.
    pub fn new(id: impl Into<String>) -> Self {
        Self::default().set_id(id)
    }

    /// Sets the value of [id][SubnetIdentityById::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = Some(v.into());
        self
    }

    /// Validates the mandatory fields and creates a [SubnetIdentityById].
    pub fn build(self) -> gax::Result<SubnetIdentityById> {
        let name = SubnetIdentityById::typename();
        Ok(SubnetIdentityById {
            id: not_null(name, "id", self.id)?,
        })
    }
}

impl gax::message::MessageBuilder for SubnetIdentityByIdBuilder {
    type Target = SubnetIdentityById;
    fn build(self) -> gax::Result<Self::Target> {
        SubnetIdentityByIdBuilder::build(self)
    }
}

/// Identifies a subnet by its CRN.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "SubnetIdentityByCrnBuilder")]
#[non_exhaustive]
pub struct SubnetIdentityByCrn {
    crn: String,
}

impl SubnetIdentityByCrn {
    /// Returns an empty builder.
    pub fn builder() -> SubnetIdentityByCrnBuilder {
        SubnetIdentityByCrnBuilder::default()
    }

    /// Returns a builder initialized with the values in this model.
    pub fn to_builder(&self) -> SubnetIdentityByCrnBuilder {
        SubnetIdentityByCrnBuilder {
            crn: Some(self.crn.clone()),
        }
    }

    /// The CRN for this subnet.
    pub fn crn(&self) -> &str {
        &self.crn
    }
}

impl Message for SubnetIdentityByCrn {
    fn typename() -> &'static str {
        "SubnetIdentityByCRN"
    }
}

impl gax::message::Validated for SubnetIdentityByCrn {
    type Builder = SubnetIdentityByCrnBuilder;
    const REQUIRED_FIELDS: &'static [RequiredField] = &[RequiredField::not_null("crn")];
    fn to_builder(&self) -> Self::Builder {
        SubnetIdentityByCrn::to_builder(self)
    }
}

impl std::convert::TryFrom<SubnetIdentityByCrnBuilder> for SubnetIdentityByCrn {
    type Error = gax::error::Error;
    fn try_from(value: SubnetIdentityByCrnBuilder) -> gax::Result<Self> {
        value.build()
    }
}

/// Builder for [SubnetIdentityByCrn].
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct SubnetIdentityByCrnBuilder {
    crn: Option<String>,
}

impl SubnetIdentityByCrnBuilder {
    /// Creates a builder with all the mandatory fields.
    pub fn new(crn: impl Into<String>) -> Self {
        Self::default().set_crn(crn)
    }

    /// Sets the value of [crn][SubnetIdentityByCrn::crn].
    pub fn set_crn<T: Into<String>>(mut self, v: T) -> Self {
        self.crn = Some(v.into());
        self
    }

    /// Validates the mandatory fields and creates a [SubnetIdentityByCrn].
    pub fn build(self) -> gax::Result<SubnetIdentityByCrn> {
        let name = SubnetIdentityByCrn::typename();
        Ok(SubnetIdentityByCrn {
            crn: not_null(name, "crn", self.crn)?,
        })
    }
}

impl gax::message::MessageBuilder for SubnetIdentityByCrnBuilder {
    type Target = SubnetIdentityByCrn;
    fn build(self) -> gax::Result<Self::Target> {
        SubnetIdentityByCrnBuilder::build(self)
    }
}

/// Identifies a subnet by its URL.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "SubnetIdentityByHrefBuilder")]
#[non_exhaustive]
pub struct SubnetIdentityByHref {
    href: String,
}

impl SubnetIdentityByHref {
    /// Returns an empty builder.
    pub fn builder() -> SubnetIdentityByHrefBuilder {
        SubnetIdentityByHrefBuilder::default()
    }

    /// Returns a builder initialized with the values in this model.
    pub fn to_builder(&self) -> SubnetIdentityByHrefBuilder {
        SubnetIdentityByHrefBuilder {
            href: Some(self.href.clone()),
        }
    }

    /// The URL for this subnet.
    pub fn href(&self) -> &str {
        &self.href
    }
}

impl Message for SubnetIdentityByHref {
    fn typename() -> &'static str {
        "SubnetIdentityByHref"
    }
}

impl gax::message::Validated for SubnetIdentityByHref {
    type Builder = SubnetIdentityByHrefBuilder;
    const REQUIRED_FIELDS: &'static [RequiredField] = &[RequiredField::not_null("href")];
    fn to_builder(&self) -> Self::Builder {
        SubnetIdentityByHref::to_builder(self)
    }
}

impl std::convert::TryFrom<SubnetIdentityByHrefBuilder> for SubnetIdentityByHref {
    type Error = gax::error::Error;
    fn try_from(value: SubnetIdentityByHrefBuilder) -> gax::Result<Self> {
        value.build()
    }
}

/// Builder for [SubnetIdentityByHref].
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct SubnetIdentityByHrefBuilder {
    href: Option<String>,
}

impl SubnetIdentityByHrefBuilder {
    /// Creates a builder with all the mandatory fields.
    pub fn new(href: impl Into<String>) -> Self {
        Self::default().set_href(href)
    }

    /// Sets the value of [href][SubnetIdentityByHref::href].
    pub fn set_href<T: Into<String>>(mut self, v: T) -> Self {
        self.href = Some(v.into());
        self
    }

    /// Validates the mandatory fields and creates a [SubnetIdentityByHref].
    pub fn build(self) -> gax::Result<SubnetIdentityByHref> {
        let name = SubnetIdentityByHref::typename();
        Ok(SubnetIdentityByHref {
            href: not_null(name, "href", self.href)?,
        })
    }
}

impl gax::message::MessageBuilder for SubnetIdentityByHrefBuilder {
    type Target = SubnetIdentityByHref;
    fn build(self) -> gax::Result<Self::Target> {
        SubnetIdentityByHrefBuilder::build(self)
    }
}

/// Identifies a Cloud Object Storage bucket by its name.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "CloudObjectStorageBucketIdentityBuilder")]
#[non_exhaustive]
pub struct CloudObjectStorageBucketIdentity {
    name: String,
}

impl CloudObjectStorageBucketIdentity {
    /// Returns an empty builder.
    pub fn builder() -> CloudObjectStorageBucketIdentityBuilder {
        CloudObjectStorageBucketIdentityBuilder::default()
    }

    /// Returns a builder initialized with the values in this model.
    pub fn to_builder(&self) -> CloudObjectStorageBucketIdentityBuilder {
        CloudObjectStorageBucketIdentityBuilder {
            name: Some(self.name.clone()),
        }
    }

    /// The globally unique name of this Cloud Object Storage bucket.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Message for CloudObjectStorageBucketIdentity {
    fn typename() -> &'static str {
        "CloudObjectStorageBucketIdentity"
    }
}

impl gax::message::Validated for CloudObjectStorageBucketIdentity {
    type Builder = CloudObjectStorageBucketIdentityBuilder;
    const REQUIRED_FIELDS: &'static [RequiredField] = &[RequiredField::not_null("name")];
    fn to_builder(&self) -> Self::Builder {
        CloudObjectStorageBucketIdentity::to_builder(self)
    }
}

impl std::convert::TryFrom<CloudObjectStorageBucketIdentityBuilder>
    for CloudObjectStorageBucketIdentity
{
    type Error = gax::error::Error;
    fn try_from(value: CloudObjectStorageBucketIdentityBuilder) -> gax::Result<Self> {
        value.build()
    }
}

/// Builder for [CloudObjectStorageBucketIdentity].
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct CloudObjectStorageBucketIdentityBuilder {
    name: Option<String>,
}

impl CloudObjectStorageBucketIdentityBuilder {
    /// Creates a builder with all the mandatory fields.
    pub fn new(name: impl Into<String>) -> Self {
        Self::default().set_name(name)
    }

    /// Sets the value of [name][CloudObjectStorageBucketIdentity::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Validates the mandatory fields and creates a [CloudObjectStorageBucketIdentity].
    pub fn build(self) -> gax::Result<CloudObjectStorageBucketIdentity> {
        let name = CloudObjectStorageBucketIdentity::typename();
        Ok(CloudObjectStorageBucketIdentity {
            name: not_null(name, "name", self.name)?,
        })
    }
}

impl gax::message::MessageBuilder for CloudObjectStorageBucketIdentityBuilder {
    type Target = CloudObjectStorageBucketIdentity;
    fn build(self) -> gax::Result<Self::Target> {
        CloudObjectStorageBucketIdentityBuilder::build(self)
    }
}

/// The request to create a flow log collector.
///
/// The collector writes the flow logs of the target to the storage bucket.
///
/// # Example
/// ```
/// # use ibm_cloud_vpc_v1::model::*;
/// let bucket = CloudObjectStorageBucketIdentityBuilder::new("bucket-27200-lwx4cfvcue").build()?;
/// let subnet = SubnetIdentityByHrefBuilder::new(
///     "https://us-south.iaas.cloud.ibm.com/v1/subnets/7ec86020-1c6e-4889-b3f0-a15f2e50f87e",
/// ).build()?;
/// let request = CreateFlowLogCollectorRequestBuilder::new(bucket, subnet)
///     .set_name("my-flow-log-collector")
///     .build()?;
/// assert!(matches!(request.target(), FlowLogCollectorPrototypeTarget::SubnetByHref(_)));
/// # ibm_cloud_vpc_v1::Result::<()>::Ok(())
/// ```
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "CreateFlowLogCollectorRequestBuilder")]
#[non_exhaustive]
pub struct CreateFlowLogCollectorRequest {
    storage_bucket: CloudObjectStorageBucketIdentity,
    target: FlowLogCollectorPrototypeTarget,
    active: Option<bool>,
    name: Option<String>,
    resource_group: Option<crate::model::ResourceGroupIdentity>,
}

impl CreateFlowLogCollectorRequest {
    /// Returns an empty builder.
    pub fn builder() -> CreateFlowLogCollectorRequestBuilder {
        CreateFlowLogCollectorRequestBuilder::default()
    }

    /// Returns a builder initialized with the values in this model.
    pub fn to_builder(&self) -> CreateFlowLogCollectorRequestBuilder {
        CreateFlowLogCollectorRequestBuilder {
            storage_bucket: Some(self.storage_bucket.clone()),
            target: Some(self.target.clone()),
            active: self.active.clone(),
            name: self.name.clone(),
            resource_group: self.resource_group.clone(),
        }
    }

    /// The Cloud Object Storage bucket where the collected flows will be logged.
    ///
    /// The bucket must exist and an IAM service authorization must grant the VPC
    /// service write access to it.
    pub fn storage_bucket(&self) -> &CloudObjectStorageBucketIdentity {
        &self.storage_bucket
    }

    /// The target this collector will collect flow logs for.
    pub fn target(&self) -> &FlowLogCollectorPrototypeTarget {
        &self.target
    }

    /// Whether this collector is active.
    ///
    /// If `false`, this collector is created in inactive mode.
    pub fn active(&self) -> Option<bool> {
        self.active
    }

    /// The user-defined name for this flow log collector.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The resource group to use.
    pub fn resource_group(&self) -> Option<&crate::model::ResourceGroupIdentity> {
        self.resource_group.as_ref()
    }
}

impl Message for CreateFlowLogCollectorRequest {
    fn typename() -> &'static str {
        "CreateFlowLogCollectorRequest"
    }
}

impl gax::message::Validated for CreateFlowLogCollectorRequest {
    type Builder = CreateFlowLogCollectorRequestBuilder;
    const REQUIRED_FIELDS: &'static [RequiredField] = &[
        RequiredField::not_null("storage_bucket"),
        RequiredField::not_null("target"),
    ];
    fn to_builder(&self) -> Self::Builder {
        CreateFlowLogCollectorRequest::to_builder(self)
    }
}

impl std::convert::TryFrom<CreateFlowLogCollectorRequestBuilder> for CreateFlowLogCollectorRequest {
    type Error = gax::error::Error;
    fn try_from(value: CreateFlowLogCollectorRequestBuilder) -> gax::Result<Self> {
        value.build()
    }
}

/// Builder for [CreateFlowLogCollectorRequest].
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct CreateFlowLogCollectorRequestBuilder {
    storage_bucket: Option<CloudObjectStorageBucketIdentity>,
    target: Option<FlowLogCollectorPrototypeTarget>,
    active: Option<bool>,
    name: Option<String>,
    resource_group: Option<crate::model::ResourceGroupIdentity>,
}

impl CreateFlowLogCollectorRequestBuilder {
    /// Creates a builder with all the mandatory fields.
    pub fn new(
        storage_bucket: impl Into<CloudObjectStorageBucketIdentity>,
        target: impl Into<FlowLogCollectorPrototypeTarget>,
    ) -> Self {
        Self::default()
            .set_storage_bucket(storage_bucket)
            .set_target(target)
    }

    /// Sets the value of [storage_bucket][CreateFlowLogCollectorRequest::storage_bucket].
    pub fn set_storage_bucket<T: Into<CloudObjectStorageBucketIdentity>>(mut self, v: T) -> Self {
        self.storage_bucket = Some(v.into());
        self
    }

    /// Sets the value of [target][CreateFlowLogCollectorRequest::target].
    pub fn set_target<T: Into<FlowLogCollectorPrototypeTarget>>(mut self, v: T) -> Self {
        self.target = Some(v.into());
        self
    }

    /// Sets the value of [active][CreateFlowLogCollectorRequest::active].
    pub fn set_active(mut self, v: bool) -> Self {
        self.active = Some(v);
        self
    }

    /// Sets the value of [name][CreateFlowLogCollectorRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [resource_group][CreateFlowLogCollectorRequest::resource_group].
    pub fn set_resource_group<T: Into<crate::model::ResourceGroupIdentity>>(
        mut self,
        v: T,
    ) -> Self {
        self.resource_group = Some(v.into());
        self
    }

    /// Validates the mandatory fields and creates a [CreateFlowLogCollectorRequest].
    pub fn build(self) -> gax::Result<CreateFlowLogCollectorRequest> {
        let name = CreateFlowLogCollectorRequest::typename();
        Ok(CreateFlowLogCollectorRequest {
            storage_bucket: not_null(name, "storage_bucket", self.storage_bucket)?,
            target: not_null(name, "target", self.target)?,
            active: self.active,
            name: self.name,
            resource_group: self.resource_group,
        })
    }
}

impl gax::message::MessageBuilder for CreateFlowLogCollectorRequestBuilder {
    type Target = CreateFlowLogCollectorRequest;
    fn build(self) -> gax::Result<Self::Target> {
        CreateFlowLogCollectorRequestBuilder::build(self)
    }
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[non_exhaustive]
pub struct CloudObjectStorageBucketReference {
    name: Option<String>,
}

impl CloudObjectStorageBucketReference {
    /// The globally unique name of this Cloud Object Storage bucket.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl Message for CloudObjectStorageBucketReference {
    fn typename() -> &'static str {
        "CloudObjectStorageBucketReference"
    }
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[non_exhaustive]
pub struct VpcReference {
    crn: Option<String>,
    href: Option<String>,
    id: Option<String>,
    name: Option<String>,
}

impl VpcReference {
    /// The CRN for this VPC.
    pub fn crn(&self) -> Option<&str> {
        self.crn.as_deref()
    }

    /// The URL for this VPC.
    pub fn href(&self) -> Option<&str> {
        self.href.as_deref()
    }

    /// The unique identifier for this VPC.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// The user-defined name for this VPC.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl Message for VpcReference {
    fn typename() -> &'static str {
        "VPCReference"
    }
}

/// The target of a flow log collector, as returned by the service.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[non_exhaustive]
pub struct FlowLogCollectorTarget {
    crn: Option<String>,
    href: Option<String>,
    id: Option<String>,
    name: Option<String>,
    resource_type: Option<String>,
}

impl FlowLogCollectorTarget {
    pub fn crn(&self) -> Option<&str> {
        self.crn.as_deref()
    }

    pub fn href(&self) -> Option<&str> {
        self.href.as_deref()
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The type of the target, for example `subnet`.
    pub fn resource_type(&self) -> Option<&str> {
        self.resource_type.as_deref()
    }
}

impl Message for FlowLogCollectorTarget {
    fn typename() -> &'static str {
        "FlowLogCollectorTarget"
    }
}

/// A flow log collector, as returned by the service.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[non_exhaustive]
pub struct FlowLogCollector {
    active: Option<bool>,
    auto_delete: Option<bool>,
    #[serde(with = "time::serde::rfc3339::option")]
    created_at: Option<time::OffsetDateTime>,
    crn: Option<String>,
    href: Option<String>,
    id: Option<String>,
    lifecycle_state: Option<String>,
    name: Option<String>,
    resource_group: Option<crate::model::ResourceGroupReference>,
    storage_bucket: Option<CloudObjectStorageBucketReference>,
    target: Option<FlowLogCollectorTarget>,
    vpc: Option<VpcReference>,
}

impl FlowLogCollector {
    /// Whether this collector is active.
    pub fn active(&self) -> Option<bool> {
        self.active
    }

    /// If set to `true`, this flow log collector will be automatically deleted when the target is deleted.
    pub fn auto_delete(&self) -> Option<bool> {
        self.auto_delete
    }

    /// The date and time that the flow log collector was created.
    pub fn created_at(&self) -> Option<time::OffsetDateTime> {
        self.created_at
    }

    /// The CRN for this flow log collector.
    pub fn crn(&self) -> Option<&str> {
        self.crn.as_deref()
    }

    /// The URL for this flow log collector.
    pub fn href(&self) -> Option<&str> {
        self.href.as_deref()
    }

    /// The unique identifier for this flow log collector.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// The lifecycle state of the flow log collector.
    pub fn lifecycle_state(&self) -> Option<&str> {
        self.lifecycle_state.as_deref()
    }

    /// The user-defined name for this flow log collector.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn resource_group(&self) -> Option<&crate::model::ResourceGroupReference> {
        self.resource_group.as_ref()
    }

    pub fn storage_bucket(&self) -> Option<&CloudObjectStorageBucketReference> {
        self.storage_bucket.as_ref()
    }

    pub fn target(&self) -> Option<&FlowLogCollectorTarget> {
        self.target.as_ref()
    }

    /// The VPC this flow log collector is associated with.
    pub fn vpc(&self) -> Option<&VpcReference> {
        self.vpc.as_ref()
    }
}

impl Message for FlowLogCollector {
    fn typename() -> &'static str {
        "FlowLogCollector"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;

    #[test_case(json!({"id": "7ec86020-1c6e-4889-b3f0-a15f2e50f87e"}), "SubnetById")]
    #[test_case(json!({"crn": "crn:v1:bluemix:public:is:us-south-1:a/123456::subnet:7ec86020"}), "SubnetByCrn")]
    #[test_case(json!({"href": "https://us-south.iaas.cloud.ibm.com/v1/subnets/7ec86020"}), "SubnetByHref")]
    fn target(input: serde_json::Value, want: &str) -> anyhow::Result<()> {
        let got = serde_json::from_value::<FlowLogCollectorPrototypeTarget>(input.clone())?;
        let variant = match &got {
            FlowLogCollectorPrototypeTarget::SubnetById(_) => "SubnetById",
            FlowLogCollectorPrototypeTarget::SubnetByCrn(_) => "SubnetByCrn",
            FlowLogCollectorPrototypeTarget::SubnetByHref(_) => "SubnetByHref",
        };
        assert_eq!(variant, want);
        assert_eq!(serde_json::to_value(&got)?, input);
        Ok(())
    }

    #[test]
    fn target_empty() {
        let got = serde_json::from_value::<FlowLogCollectorPrototypeTarget>(json!({}));
        assert!(got.is_err(), "{got:?}");
    }

    #[test]
    fn collector_response() -> anyhow::Result<()> {
        let got = serde_json::from_value::<FlowLogCollector>(json!({
            "active": true,
            "auto_delete": true,
            "lifecycle_state": "stable",
            "storage_bucket": {"name": "bucket-27200-lwx4cfvcue"},
            "target": {"id": "7ec86020-1c6e-4889-b3f0-a15f2e50f87e", "resource_type": "subnet"},
            "vpc": {"id": "4727d842-f94f-4a2d-824a-9bc9b02c523b", "name": "my-vpc"}
        }))?;
        assert_eq!(got.active(), Some(true));
        let bucket = got.storage_bucket();
        assert_eq!(
            bucket.and_then(CloudObjectStorageBucketReference::name),
            Some("bucket-27200-lwx4cfvcue")
        );
        assert_eq!(
            got.target().and_then(FlowLogCollectorTarget::resource_type),
            Some("subnet")
        );
        assert_eq!(got.vpc().and_then(VpcReference::name), Some("my-vpc"));
        Ok(())
    }
}
