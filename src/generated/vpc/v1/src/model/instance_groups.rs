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

/// The request to remove the load balancer pool from an instance group.
///
/// The instance group members are not deleted, they are removed from the pool.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "DeleteInstanceGroupLoadBalancerRequestBuilder")]
#[non_exhaustive]
pub struct DeleteInstanceGroupLoadBalancerRequest {
    instance_group_id: String,
}

impl DeleteInstanceGroupLoadBalancerRequest {
    /// Returns an empty builder.
    pub fn builder() -> DeleteInstanceGroupLoadBalancerRequestBuilder {
        DeleteInstanceGroupLoadBalancerRequestBuilder::default()
    }

    /// Returns a builder initialized with the values in this model.
    pub fn to_builder(&self) -> DeleteInstanceGroupLoadBalancerRequestBuilder {
        DeleteInstanceGroupLoadBalancerRequestBuilder {
            instance_group_id: Some(self.instance_group_id.clone()),
        }
    }

    /// The instance group identifier.
    pub fn instance_group_id(&self) -> &str {
        &self.instance_group_id
    }
}

impl Message for DeleteInstanceGroupLoadBalancerRequest {
    fn typename() -> &'static str {
        "DeleteInstanceGroupLoadBalancerRequest"
    }
}

impl gax::message::Validated for DeleteInstanceGroupLoadBalancerRequest {
    type Builder = DeleteInstanceGroupLoadBalancerRequestBuilder;
    const REQUIRED_FIELDS: &'static [RequiredField] =
        &[RequiredField::not_empty("instance_group_id")];
    fn to_builder(&self) -> Self::Builder {
        DeleteInstanceGroupLoadBalancerRequest::to_builder(self)
    }
}

impl std::convert::TryFrom<DeleteInstanceGroupLoadBalancerRequestBuilder>
    for DeleteInstanceGroupLoadBalancerRequest
{
    type Error = gax::error::Error;
    fn try_from(value: DeleteInstanceGroupLoadBalancerRequestBuilder) -> gax::Result<Self> {
        value.build()
    }
}

/// Builder for [DeleteInstanceGroupLoadBalancerRequest].
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct DeleteInstanceGroupLoadBalancerRequestBuilder {
    instance_group_id: Option<String>,
}

impl DeleteInstanceGroupLoadBalancerRequestBuilder {
    /// Creates a builder with all the mandatory fields.
    pub fn new(instance_group_id: impl Into<String>) -> Self {
        Self::default().set_instance_group_id(instance_group_id)
    }

    /// Sets the value of [instance_group_id][DeleteInstanceGroupLoadBalancerRequest::instance_group_id].
    pub fn set_instance_group_id<T: Into<String>>(mut self, v: T) -> Self {
        self.instance_group_id = Some(v.into());
        self
    }

    /// Validates the mandatory fields and creates a [DeleteInstanceGroupLoadBalancerRequest].
    pub fn build(self) -> gax::Result<DeleteInstanceGroupLoadBalancerRequest> {
        let name = DeleteInstanceGroupLoadBalancerRequest::typename();
        Ok(DeleteInstanceGroupLoadBalancerRequest {
            instance_group_id: not_empty(name, "instance_group_id", self.instance_group_id)?,
        })
    }
}

impl gax::message::MessageBuilder for DeleteInstanceGroupLoadBalancerRequestBuilder {
    type Target = DeleteInstanceGroupLoadBalancerRequest;
    fn build(self) -> gax::Result<Self::Target> {
        DeleteInstanceGroupLoadBalancerRequestBuilder::build(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_id() {
        let err = DeleteInstanceGroupLoadBalancerRequestBuilder::new("")
            .build()
            .unwrap_err();
        assert!(err.is_validation(), "{err:?}");
        let details = err.validation_details().unwrap();
        assert_eq!(details.field_name, "instance_group_id");
        assert_eq!(details.problem, gax::error::validation::FieldProblem::Empty);
    }
}
