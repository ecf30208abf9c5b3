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
use gax::validator::{not_empty, not_null};

/// Identifies a network ACL rule.
///
/// A rule may be identified by its unique identifier or by its URL.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
#[non_exhaustive]
pub enum NetworkAclRuleIdentity {
    ById(NetworkAclRuleIdentityById),
    ByHref(NetworkAclRuleIdentityByHref),
}

impl Message for NetworkAclRuleIdentity {
    fn typename() -> &'static str {
        "NetworkACLRuleIdentity"
    }
}

impl std::convert::From<NetworkAclRuleIdentityById> for NetworkAclRuleIdentity {
    fn from(value: NetworkAclRuleIdentityById) -> Self {
        Self::ById(value)
    }
}

impl std::convert::From<NetworkAclRuleIdentityByHref> for NetworkAclRuleIdentity {
    fn from(value: NetworkAclRuleIdentityByHref) -> Self {
        Self::ByHref(value)
    }
}

/// Identifies a network ACL rule by its unique identifier.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "NetworkAclRuleIdentityByIdBuilder")]
#[non_exhaustive]
pub struct NetworkAclRuleIdentityById {
    id: String,
}

impl NetworkAclRuleIdentityById {
    /// Returns an empty builder.
    pub fn builder() -> NetworkAclRuleIdentityByIdBuilder {
        NetworkAclRuleIdentityByIdBuilder::default()
    }

    /// Returns a builder initialized with the values in this model.
    pub fn to_builder(&self) -> NetworkAclRuleIdentityByIdBuilder {
        NetworkAclRuleIdentityByIdBuilder {
            id: Some(self.id.clone()),
        }
    }

    /// The unique identifier for this network ACL rule.
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl Message for NetworkAclRuleIdentityById {
    fn typename() -> &'static str {
        "NetworkACLRuleIdentityByID"
    }
}

impl gax::message::Validated for NetworkAclRuleIdentityById {
    type Builder = NetworkAclRuleIdentityByIdBuilder;
    const REQUIRED_FIELDS: &'static [RequiredField] = &[RequiredField::not_null("id")];
    fn to_builder(&self) -> Self::Builder {
        NetworkAclRuleIdentityById::to_builder(self)
    }
}

impl std::convert::TryFrom<NetworkAclRuleIdentityByIdBuilder> for NetworkAclRuleIdentityById {
    type Error = gax::error::Error;
    fn try_from(value: NetworkAclRuleIdentityByIdBuilder) -> gax::Result<Self> {
        value.build()
    }
}

/// Builder for [NetworkAclRuleIdentityById].
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct NetworkAclRuleIdentityByIdBuilder {
    id: Option<String>,
}

impl NetworkAclRuleIdentityByIdBuilder {
    /// Creates a builder with all the mandatory fields.
    pub fn new(id: impl Into<String>) -> Self {
        Self::default().set_id(id)
    }

    /// Sets the value of [id][NetworkAclRuleIdentityById::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = Some(v.into());
        self
    }

    /// Validates the mandatory fields and creates a [NetworkAclRuleIdentityById].
    pub fn build(self) -> gax::Result<NetworkAclRuleIdentityById> {
        let name = NetworkAclRuleIdentityById::typename();
        Ok(NetworkAclRuleIdentityById {
            id: not_null(name, "id", self.id)?,
        })
    }
}

impl gax::message::MessageBuilder for NetworkAclRuleIdentityByIdBuilder {
    type Target = NetworkAclRuleIdentityById;
    fn build(self) -> gax::Result<Self::Target> {
        NetworkAclRuleIdentityByIdBuilder::build(self)
    }
}

/// Identifies a network ACL rule by its URL.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "NetworkAclRuleIdentityByHrefBuilder")]
#[non_exhaustive]
pub struct NetworkAclRuleIdentityByHref {
    href: String,
}

impl NetworkAclRuleIdentityByHref {
    /// Returns an empty builder.
    pub fn builder() -> NetworkAclRuleIdentityByHrefBuilder {
        NetworkAclRuleIdentityByHrefBuilder::default()
    }

    /// Returns a builder initialized with the values in this model.
    pub fn to_builder(&self) -> NetworkAclRuleIdentityByHrefBuilder {
        NetworkAclRuleIdentityByHrefBuilder {
            href: Some(self.href.clone()),
        }
    }

    /// The URL for this network ACL rule.
    pub fn href(&self) -> &str {
        &self.href
    }
}

impl Message for NetworkAclRuleIdentityByHref {
    fn typename() -> &'static str {
        "NetworkACLRuleIdentityByHref"
    }
}

impl gax::message::Validated for NetworkAclRuleIdentityByHref {
    type Builder = NetworkAclRuleIdentityByHrefBuilder;
    const REQUIRED_FIELDS: &'static [RequiredField] = &[RequiredField::not_null("href")];
    fn to_builder(&self) -> Self::Builder {
        NetworkAclRuleIdentityByHref::to_builder(self)
    }
}

impl std::convert::TryFrom<NetworkAclRuleIdentityByHrefBuilder> for NetworkAclRuleIdentityByHref {
    type Error = gax::error::Error;
    fn try_from(value: NetworkAclRuleIdentityByHrefBuilder) -> gax::Result<Self> {
        value.build()
    }
}

/// Builder for [NetworkAclRuleIdentityByHref].
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct NetworkAclRuleIdentityByHrefBuilder {
    href: Option<String>,
}

impl NetworkAclRuleIdentityByHrefBuilder {
    /// Creates a builder with all the mandatory fields.
    pub fn new(href: impl Into<String>) -> Self {
        Self::default().set_href(href)
    }

    /// Sets the value of [href][NetworkAclRuleIdentityByHref::href].
    pub fn set_href<T: Into<String>>(mut self, v: T) -> Self {
        self.href = Some(v.into());
        self
    }

    /// Validates the mandatory fields and creates a [NetworkAclRuleIdentityByHref].
    pub fn build(self) -> gax::Result<NetworkAclRuleIdentityByHref> {
        let name = NetworkAclRuleIdentityByHref::typename();
        Ok(NetworkAclRuleIdentityByHref {
            href: not_null(name, "href", self.href)?,
        })
    }
}

impl gax::message::MessageBuilder for NetworkAclRuleIdentityByHrefBuilder {
    type Target = NetworkAclRuleIdentityByHref;
    fn build(self) -> gax::Result<Self::Target> {
        NetworkAclRuleIdentityByHrefBuilder::build(self)
    }
}

/// A reference to a network ACL rule, as returned by the service.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[non_exhaustive]
pub struct NetworkAclRuleReference {
    href: Option<String>,
    id: Option<String>,
    name: Option<String>,
}

impl NetworkAclRuleReference {
    /// The URL for this network ACL rule.
    pub fn href(&self) -> Option<&str> {
        self.href.as_deref()
    }

    /// The unique identifier for this network ACL rule.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// The user-defined name for this network ACL rule.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl Message for NetworkAclRuleReference {
    fn typename() -> &'static str {
        "NetworkACLRuleReference"
    }
}

/// A network ACL rule, as returned by the service.
///
/// The port fields are only present for `tcp` and `udp` rules, `code` and `type`
/// are only present for `icmp` rules.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[non_exhaustive]
pub struct NetworkAclRule {
    id: Option<String>,
    href: Option<String>,
    name: Option<String>,
    action: Option<network_acl_rule::Action>,
    direction: Option<network_acl_rule::Direction>,
    source: Option<String>,
    destination: Option<String>,
    protocol: Option<String>,
    ip_version: Option<String>,
    before: Option<NetworkAclRuleReference>,
    #[serde(with = "time::serde::rfc3339::option")]
    created_at: Option<time::OffsetDateTime>,
    destination_port_max: Option<i64>,
    destination_port_min: Option<i64>,
    source_port_max: Option<i64>,
    source_port_min: Option<i64>,
    code: Option<i64>,
    r#type: Option<i64>,
}

impl NetworkAclRule {
    /// The unique identifier for this network ACL rule.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// The URL for this network ACL rule.
    pub fn href(&self) -> Option<&str> {
        self.href.as_deref()
    }

    /// The user-defined name for this rule.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Whether to allow or deny matching traffic.
    pub fn action(&self) -> Option<&network_acl_rule::Action> {
        self.action.as_ref()
    }

    /// Whether the traffic to be matched is `inbound` or `outbound`.
    pub fn direction(&self) -> Option<&network_acl_rule::Direction> {
        self.direction.as_ref()
    }

    /// The source IP address or CIDR block.
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// The destination IP address or CIDR block.
    pub fn destination(&self) -> Option<&str> {
        self.destination.as_deref()
    }

    /// The protocol to enforce, for example `all`, `icmp`, `tcp` or `udp`.
    pub fn protocol(&self) -> Option<&str> {
        self.protocol.as_deref()
    }

    /// The IP version for this rule.
    pub fn ip_version(&self) -> Option<&str> {
        self.ip_version.as_deref()
    }

    /// The rule that this rule is immediately before, if any.
    pub fn before(&self) -> Option<&NetworkAclRuleReference> {
        self.before.as_ref()
    }

    /// The date and time that the rule was created.
    pub fn created_at(&self) -> Option<time::OffsetDateTime> {
        self.created_at
    }

    pub fn destination_port_max(&self) -> Option<i64> {
        self.destination_port_max
    }

    pub fn destination_port_min(&self) -> Option<i64> {
        self.destination_port_min
    }

    pub fn source_port_max(&self) -> Option<i64> {
        self.source_port_max
    }

    pub fn source_port_min(&self) -> Option<i64> {
        self.source_port_min
    }

    /// The ICMP traffic code to allow.
    pub fn code(&self) -> Option<i64> {
        self.code
    }

    /// The ICMP traffic type to allow.
    pub fn r#type(&self) -> Option<i64> {
        self.r#type
    }
}

impl Message for NetworkAclRule {
    fn typename() -> &'static str {
        "NetworkACLRule"
    }
}

/// Defines additional types related to [NetworkAclRule].
pub mod network_acl_rule {
    #[allow(unused_imports)]
    use super::*;

    /// Whether to allow or deny matching traffic.
    ///
    /// # Working with unknown values
    ///
    /// This enum is defined as `#[non_exhaustive]` because the service may add
    /// new values. Applications may also send values unknown to this library,
    /// use `Action::from()` with the value and it is sent unchanged.
    #[derive(Clone, Debug, PartialEq)]
    #[non_exhaustive]
    pub enum Action {
        Allow,
        Deny,
        /// If set, the enum was initialized with an unknown value.
        ///
        /// Applications can examine the value using [Action::name].
        UnknownValue(gax::enums::UnknownEnumValue),
    }

    impl Action {
        /// Gets the enum value as a string.
        pub fn name(&self) -> &str {
            match self {
                Self::Allow => "allow",
                Self::Deny => "deny",
                Self::UnknownValue(u) => u.name(),
            }
        }
    }

    impl std::fmt::Display for Action {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.name())
        }
    }

    impl std::convert::From<&str> for Action {
        fn from(value: &str) -> Self {
            match value {
                "allow" => Self::Allow,
                "deny" => Self::Deny,
                _ => Self::UnknownValue(gax::enums::UnknownEnumValue::new(value)),
            }
        }
    }

    impl std::convert::From<String> for Action {
        fn from(value: String) -> Self {
            Self::from(value.as_str())
        }
    }

    impl serde::ser::Serialize for Action {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> serde::de::Deserialize<'de> for Action {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            deserializer.deserialize_str(gax::enums::EnumVisitor::<Self>::new(
                "NetworkACLRule.action",
            ))
        }
    }

    /// Whether the traffic to be matched is `inbound` or `outbound`.
    ///
    /// # Working with unknown values
    ///
    /// This enum is defined as `#[non_exhaustive]` because the service may add
    /// new values. Applications may also send values unknown to this library,
    /// use `Direction::from()` with the value and it is sent unchanged.
    #[derive(Clone, Debug, PartialEq)]
    #[non_exhaustive]
    pub enum Direction {
        Inbound,
        Outbound,
        /// If set, the enum was initialized with an unknown value.
        ///
        /// Applications can examine the value using [Direction::name].
        UnknownValue(gax::enums::UnknownEnumValue),
    }

    impl Direction {
        /// Gets the enum value as a string.
        pub fn name(&self) -> &str {
            match self {
                Self::Inbound => "inbound",
                Self::Outbound => "outbound",
                Self::UnknownValue(u) => u.name(),
            }
        }
    }

    impl std::fmt::Display for Direction {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.name())
        }
    }

    impl std::convert::From<&str> for Direction {
        fn from(value: &str) -> Self {
            match value {
                "inbound" => Self::Inbound,
                "outbound" => Self::Outbound,
                _ => Self::UnknownValue(gax::enums::UnknownEnumValue::new(value)),
            }
        }
    }

    impl std::convert::From<String> for Direction {
        fn from(value: String) -> Self {
            Self::from(value.as_str())
        }
    }

    impl serde::ser::Serialize for Direction {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> serde::de::Deserialize<'de> for Direction {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            deserializer.deserialize_str(gax::enums::EnumVisitor::<Self>::new(
                "NetworkACLRule.direction",
            ))
        }
    }
}

/// The request to update a rule in a network ACL.
///
/// Only the fields that are set are sent to the service, other properties of the
/// rule are not modified.
///
/// # Example
/// ```
/// # use ibm_cloud_vpc_v1::model::UpdateNetworkAclRuleRequestBuilder;
/// # use ibm_cloud_vpc_v1::model::update_network_acl_rule_request::Action;
/// let request = UpdateNetworkAclRuleRequestBuilder::new("a4e28308-8ee7-46ab-8108-9f881f22bdbf", "8daca77a-4980-4d33-8f3e-7038797be8f9")
///     .set_action(Action::Deny)
///     .set_source("192.168.3.0/24")
///     .build()?;
/// assert_eq!(request.action(), Some(&Action::Deny));
/// # ibm_cloud_vpc_v1::Result::<()>::Ok(())
/// ```
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "UpdateNetworkAclRuleRequestBuilder")]
#[non_exhaustive]
pub struct UpdateNetworkAclRuleRequest {
    network_acl_id: String,
    id: String,
    name: Option<String>,
    action: Option<update_network_acl_rule_request::Action>,
    destination: Option<String>,
    direction: Option<update_network_acl_rule_request::Direction>,
    source: Option<String>,
    destination_port_max: Option<i64>,
    destination_port_min: Option<i64>,
    source_port_max: Option<i64>,
    source_port_min: Option<i64>,
    code: Option<i64>,
    r#type: Option<i64>,
    before: Option<NetworkAclRuleIdentity>,
}

impl UpdateNetworkAclRuleRequest {
    /// Returns an empty builder.
    pub fn builder() -> UpdateNetworkAclRuleRequestBuilder {
        UpdateNetworkAclRuleRequestBuilder::default()
    }

    /// Returns a builder initialized with the values in this model.
    pub fn to_builder(&self) -> UpdateNetworkAclRuleRequestBuilder {
        UpdateNetworkAclRuleRequestBuilder {
            network_acl_id: Some(self.network_acl_id.clone()),
            id: Some(self.id.clone()),
            name: self.name.clone(),
            action: self.action.clone(),
            destination: self.destination.clone(),
            direction: self.direction.clone(),
            source: self.source.clone(),
            destination_port_max: self.destination_port_max.clone(),
            destination_port_min: self.destination_port_min.clone(),
            source_port_max: self.source_port_max.clone(),
            source_port_min: self.source_port_min.clone(),
            code: self.code.clone(),
            r#type: self.r#type.clone(),
            before: self.before.clone(),
        }
    }

    /// The network ACL identifier.
    pub fn network_acl_id(&self) -> &str {
        &self.network_acl_id
    }

    /// The rule identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The user-defined name for this rule.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Whether to allow or deny matching traffic.
    pub fn action(&self) -> Option<&update_network_acl_rule_request::Action> {
        self.action.as_ref()
    }

    /// The destination IP address or CIDR block.
    pub fn destination(&self) -> Option<&str> {
        self.destination.as_deref()
    }

    /// Whether the traffic to be matched is `inbound` or `outbound`.
    pub fn direction(&self) -> Option<&update_network_acl_rule_request::Direction> {
        self.direction.as_ref()
    }

    /// The source IP address or CIDR block.
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// The inclusive upper bound of TCP/UDP destination port range.
    pub fn destination_port_max(&self) -> Option<i64> {
        self.destination_port_max
    }

    /// The inclusive lower bound of TCP/UDP destination port range.
    pub fn destination_port_min(&self) -> Option<i64> {
        self.destination_port_min
    }

    /// The inclusive upper bound of TCP/UDP source port range.
    pub fn source_port_max(&self) -> Option<i64> {
        self.source_port_max
    }

    /// The inclusive lower bound of TCP/UDP source port range.
    pub fn source_port_min(&self) -> Option<i64> {
        self.source_port_min
    }

    /// The ICMP traffic code to allow.
    pub fn code(&self) -> Option<i64> {
        self.code
    }

    /// The ICMP traffic type to allow.
    pub fn r#type(&self) -> Option<i64> {
        self.r#type
    }

    /// The rule to move this rule immediately before.
    ///
    /// If unset, this rule is not moved.
    pub fn before(&self) -> Option<&NetworkAclRuleIdentity> {
        self.before.as_ref()
    }
}

impl Message for UpdateNetworkAclRuleRequest {
    fn typename() -> &'static str {
        "UpdateNetworkAclRuleRequest"
    }
}

impl gax::message::Validated for UpdateNetworkAclRuleRequest {
    type Builder = UpdateNetworkAclRuleRequestBuilder;
    const REQUIRED_FIELDS: &'static [RequiredField] = &[
        RequiredField::not_empty("network_acl_id"),
        RequiredField::not_empty("id"),
    ];
    fn to_builder(&self) -> Self::Builder {
        UpdateNetworkAclRuleRequest::to_builder(self)
    }
}

impl std::convert::TryFrom<UpdateNetworkAclRuleRequestBuilder> for UpdateNetworkAclRuleRequest {
    type Error = gax::error::Error;
    fn try_from(value: UpdateNetworkAclRuleRequestBuilder) -> gax::Result<Self> {
        value.build()
    }
}

/// Builder for [UpdateNetworkAclRuleRequest].
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct UpdateNetworkAclRuleRequestBuilder {
    network_acl_id: Option<String>,
    id: Option<String>,
    name: Option<String>,
    action: Option<update_network_acl_rule_request::Action>,
    destination: Option<String>,
    direction: Option<update_network_acl_rule_request::Direction>,
    source: Option<String>,
    destination_port_max: Option<i64>,
    destination_port_min: Option<i64>,
    source_port_max: Option<i64>,
    source_port_min: Option<i64>,
    code: Option<i64>,
    r#type: Option<i64>,
    before: Option<NetworkAclRuleIdentity>,
}

impl UpdateNetworkAclRuleRequestBuilder {
    /// Creates a builder with all the mandatory fields.
    pub fn new(network_acl_id: impl Into<String>, id: impl Into<String>) -> Self {
        Self::default()
            .set_network_acl_id(network_acl_id)
            .set_id(id)
    }

    /// Sets the value of [network_acl_id][UpdateNetworkAclRuleRequest::network_acl_id].
    pub fn set_network_acl_id<T: Into<String>>(mut self, v: T) -> Self {
        self.network_acl_id = Some(v.into());
        self
    }

    /// Sets the value of [id][UpdateNetworkAclRuleRequest::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = Some(v.into());
        self
    }

    /// Sets the value of [name][UpdateNetworkAclRuleRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [action][UpdateNetworkAclRuleRequest::action].
    pub fn set_action<T: Into<update_network_acl_rule_request::Action>>(mut self, v: T) -> Self {
        self.action = Some(v.into());
        self
    }

    /// Sets the value of [destination][UpdateNetworkAclRuleRequest::destination].
    pub fn set_destination<T: Into<String>>(mut self, v: T) -> Self {
        self.destination = Some(v.into());
        self
    }

    /// Sets the value of [direction][UpdateNetworkAclRuleRequest::direction].
    pub fn set_direction<T: Into<update_network_acl_rule_request::Direction>>(
        mut self,
        v: T,
    ) -> Self {
        self.direction = Some(v.into());
        self
    }

    /// Sets the value of [source][UpdateNetworkAclRuleRequest::source].
    pub fn set_source<T: Into<String>>(mut self, v: T) -> Self {
        self.source = Some(v.into());
        self
    }

    /// Sets the value of [destination_port_max][UpdateNetworkAclRuleRequest::destination_port_max].
    pub fn set_destination_port_max(mut self, v: i64) -> Self {
        self.destination_port_max = Some(v);
        self
    }

    /// Sets the value of [destination_port_min][UpdateNetworkAclRuleRequest::destination_port_min].
    pub fn set_destination_port_min(mut self, v: i64) -> Self {
        self.destination_port_min = Some(v);
        self
    }

    /// Sets the value of [source_port_max][UpdateNetworkAclRuleRequest::source_port_max].
    pub fn set_source_port_max(mut self, v: i64) -> Self {
        self.source_port_max = Some(v);
        self
    }

    /// Sets the value of [source_port_min][UpdateNetworkAclRuleRequest::source_port_min].
    pub fn set_source_port_min(mut self, v: i64) -> Self {
        self.source_port_min = Some(v);
        self
    }

    /// Sets the value of [code][UpdateNetworkAclRuleRequest::code].
    pub fn set_code(mut self, v: i64) -> Self {
        self.code = Some(v);
        self
    }

    /// Sets the value of [type][UpdateNetworkAclRuleRequest::r#type].
    pub fn set_type(mut self, v: i64) -> Self {
        self.r#type = Some(v);
        self
    }

    /// Sets the value of [before][UpdateNetworkAclRuleRequest::before].
    pub fn set_before<T: Into<NetworkAclRuleIdentity>>(mut self, v: T) -> Self {
        self.before = Some(v.into());
        self
    }

    /// Validates the mandatory fields and creates a [UpdateNetworkAclRuleRequest].
    pub fn build(self) -> gax::Result<UpdateNetworkAclRuleRequest> {
        let name = UpdateNetworkAclRuleRequest::typename();
        Ok(UpdateNetworkAclRuleRequest {
            network_acl_id: not_empty(name, "network_acl_id", self.network_acl_id)?,
            id: not_empty(name, "id", self.id)?,
            name: self.name,
            action: self.action,
            destination: self.destination,
            direction: self.direction,
            source: self.source,
            destination_port_max: self.destination_port_max,
            destination_port_min: self.destination_port_min,
            source_port_max: self.source_port_max,
            source_port_min: self.source_port_min,
            code: self.code,
            r#type: self.r#type,
            before: self.before,
        })
    }
}

impl gax::message::MessageBuilder for UpdateNetworkAclRuleRequestBuilder {
    type Target = UpdateNetworkAclRuleRequest;
    fn build(self) -> gax::Result<Self::Target> {
        UpdateNetworkAclRuleRequestBuilder::build(self)
    }
}

/// Defines additional types related to [UpdateNetworkAclRuleRequest].
pub mod update_network_acl_rule_request {
    pub use super::network_acl_rule::{Action, Direction};
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;

    #[test_case(json!({"id": "8daca77a-4980-4d33-8f3e-7038797be8f9"}), true; "by id")]
    #[test_case(json!({"href": "https://us-south.iaas.cloud.ibm.com/v1/network_acls/a4e28308/rules/8daca77a"}), false; "by href")]
    fn identity(input: serde_json::Value, by_id: bool) -> anyhow::Result<()> {
        let got = serde_json::from_value::<NetworkAclRuleIdentity>(input.clone())?;
        assert_eq!(
            matches!(got, NetworkAclRuleIdentity::ById(_)),
            by_id,
            "{got:?}"
        );
        assert_eq!(serde_json::to_value(&got)?, input);
        Ok(())
    }

    #[test]
    fn rule_response() -> anyhow::Result<()> {
        let got = serde_json::from_value::<NetworkAclRule>(json!({
            "id": "8daca77a-4980-4d33-8f3e-7038797be8f9",
            "name": "my-rule-2",
            "action": "allow",
            "direction": "inbound",
            "protocol": "icmp",
            "code": 0,
            "type": 8,
            "created_at": "2020-06-02T17:20:00Z",
            "before": {"id": "8daca77a-4980-4d33-8f3e-7038797be8f8"}
        }))?;
        assert_eq!(got.action(), Some(&network_acl_rule::Action::Allow));
        assert_eq!(got.direction(), Some(&network_acl_rule::Direction::Inbound));
        assert_eq!(got.r#type(), Some(8));
        assert_eq!(got.code(), Some(0));
        assert_eq!(got.source_port_min(), None);
        assert_eq!(
            got.before().and_then(NetworkAclRuleReference::id),
            Some("8daca77a-4980-4d33-8f3e-7038797be8f8")
        );
        assert_eq!(
            got.created_at().map(|t| t.unix_timestamp()),
            Some(1591118400)
        );
        Ok(())
    }

    #[test]
    fn update_omits_unset() -> anyhow::Result<()> {
        let request = UpdateNetworkAclRuleRequestBuilder::new("acl", "rule")
            .set_type(8)
            .build()?;
        let got = serde_json::to_value(&request)?;
        assert_eq!(
            got,
            json!({"network_acl_id": "acl", "id": "rule", "type": 8})
        );
        Ok(())
    }
}
