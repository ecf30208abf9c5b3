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

/// The request to create an IPsec policy.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "CreateIpsecPolicyRequestBuilder")]
#[non_exhaustive]
pub struct CreateIpsecPolicyRequest {
    authentication_algorithm: create_ipsec_policy_request::AuthenticationAlgorithm,
    encryption_algorithm: create_ipsec_policy_request::EncryptionAlgorithm,
    pfs: create_ipsec_policy_request::Pfs,
    name: Option<String>,
    key_lifetime: Option<i64>,
    resource_group: Option<crate::model::ResourceGroupIdentity>,
}

impl CreateIpsecPolicyRequest {
    /// Returns an empty builder.
    pub fn builder() -> CreateIpsecPolicyRequestBuilder {
        CreateIpsecPolicyRequestBuilder::default()
    }

    /// Returns a builder initialized with the values in this model.
    pub fn to_builder(&self) -> CreateIpsecPolicyRequestBuilder {
        CreateIpsecPolicyRequestBuilder {
            authentication_algorithm: Some(self.authentication_algorithm.clone()),
            encryption_algorithm: Some(self.encryption_algorithm.clone()),
            pfs: Some(self.pfs.clone()),
            name: self.name.clone(),
            key_lifetime: self.key_lifetime.clone(),
            resource_group: self.resource_group.clone(),
        }
    }

    /// The authentication algorithm.
    pub fn authentication_algorithm(
        &self,
    ) -> &create_ipsec_policy_request::AuthenticationAlgorithm {
        &self.authentication_algorithm
    }

    /// The encryption algorithm.
    pub fn encryption_algorithm(&self) -> &create_ipsec_policy_request::EncryptionAlgorithm {
        &self.encryption_algorithm
    }

    /// Perfect Forward Secrecy.
    pub fn pfs(&self) -> &create_ipsec_policy_request::Pfs {
        &self.pfs
    }

    /// The user-defined name for this IPsec policy.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The key lifetime in seconds.
    pub fn key_lifetime(&self) -> Option<i64> {
        self.key_lifetime
    }

    /// The resource group to use.
    ///
    /// If unset, the account's default resource group is used.
    pub fn resource_group(&self) -> Option<&crate::model::ResourceGroupIdentity> {
        self.resource_group.as_ref()
    }
}

impl Message for CreateIpsecPolicyRequest {
    fn typename() -> &'static str {
        "CreateIpsecPolicyRequest"
    }
}

impl gax::message::Validated for CreateIpsecPolicyRequest {
    type Builder = CreateIpsecPolicyRequestBuilder;
    const REQUIRED_FIELDS: &'static [RequiredField] = &[
        RequiredField::not_null("authentication_algorithm"),
        RequiredField::not_null("encryption_algorithm"),
        RequiredField::not_null("pfs"),
    ];
    fn to_builder(&self) -> Self::Builder {
        CreateIpsecPolicyRequest::to_builder(self)
    }
}

impl std::convert::TryFrom<CreateIpsecPolicyRequestBuilder> for CreateIpsecPolicyRequest {
    type Error = gax::error::Error;
    fn try_from(value: CreateIpsecPolicyRequestBuilder) -> gax::Result<Self> {
        value.build()
    }
}

/// Builder for [CreateIpsecPolicyRequest].
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct CreateIpsecPolicyRequestBuilder {
    authentication_algorithm: Option<create_ipsec_policy_request::AuthenticationAlgorithm>,
    encryption_algorithm: Option<create_ipsec_policy_request::EncryptionAlgorithm>,
    pfs: Option<create_ipsec_policy_request::Pfs>,
    name: Option<String>,
    key_lifetime: Option<i64>,
    resource_group: Option<crate::model::ResourceGroupIdentity>,
}

impl CreateIpsecPolicyRequestBuilder {
    /// Creates a builder with all the mandatory fields.
    pub fn new(
        authentication_algorithm: impl Into<create_ipsec_policy_request::AuthenticationAlgorithm>,
        encryption_algorithm: impl Into<create_ipsec_policy_request::EncryptionAlgorithm>,
        pfs: impl Into<create_ipsec_policy_request::Pfs>,
    ) -> Self {
        Self::default()
            .set_authentication_algorithm(authentication_algorithm)
            .set_encryption_algorithm(encryption_algorithm)
            .set_pfs(pfs)
    }

    /// Sets the value of [authentication_algorithm][CreateIpsecPolicyRequest::authentication_algorithm].
    pub fn set_authentication_algorithm<T>(mut self, v: T) -> Self
    where
        T: Into<create_ipsec_policy_request::AuthenticationAlgorithm>,
    {
        self.authentication_algorithm = Some(v.into());
        self
    }

    /// Sets the value of [encryption_algorithm][CreateIpsecPolicyRequest::encryption_algorithm].
    pub fn set_encryption_algorithm<T: Into<create_ipsec_policy_request::EncryptionAlgorithm>>(
        mut self,
        v: T,
    ) -> Self {
        self.encryption_algorithm = Some(v.into());
        self
    }

    /// Sets the value of [pfs][CreateIpsecPolicyRequest::pfs].
    pub fn set_pfs<T: Into<create_ipsec_policy_request::Pfs>>(mut self, v: T) -> Self {
        self.pfs = Some(v.into());
        self
    }

    /// Sets the value of [name][CreateIpsecPolicyRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [key_lifetime][CreateIpsecPolicyRequest::key_lifetime].
    pub fn set_key_lifetime(mut self, v: i64) -> Self {
        self.key_lifetime = Some(v);
        self
    }

    /// Sets the value of [resource_group][CreateIpsecPolicyRequest::resource_group].
    pub fn set_resource_group<T: Into<crate::model::ResourceGroupIdentity>>(
        mut self,
        v: T,
    ) -> Self {
        self.resource_group = Some(v.into());
        self
    }

    /// Validates the mandatory fields and creates a [CreateIpsecPolicyRequest].
    pub fn build(self) -> gax::Result<CreateIpsecPolicyRequest> {
        let name = CreateIpsecPolicyRequest::typename();
        Ok(CreateIpsecPolicyRequest {
            authentication_algorithm: not_null(
                name,
                "authentication_algorithm",
                self.authentication_algorithm,
            )?,
            encryption_algorithm: not_null(
                name,
                "encryption_algorithm",
                self.encryption_algorithm,
            )?,
            pfs: not_null(name, "pfs", self.pfs)?,
            name: self.name,
            key_lifetime: self.key_lifetime,
            resource_group: self.resource_group,
        })
    }
}

impl gax::message::MessageBuilder for CreateIpsecPolicyRequestBuilder {
    type Target = CreateIpsecPolicyRequest;
    fn build(self) -> gax::Result<Self::Target> {
        CreateIpsecPolicyRequestBuilder::build(self)
    }
}

/// Defines additional types related to [CreateIpsecPolicyRequest].
pub mod create_ipsec_policy_request {
    pub use super::ipsec_policy::{AuthenticationAlgorithm, EncryptionAlgorithm, Pfs};
}

/// An IPsec policy, as returned by the service.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[non_exhaustive]
pub struct IpsecPolicy {
    authentication_algorithm: Option<ipsec_policy::AuthenticationAlgorithm>,
    connections: Option<Vec<VpnGatewayConnectionReference>>,
    #[serde(with = "time::serde::rfc3339::option")]
    created_at: Option<time::OffsetDateTime>,
    encapsulation_mode: Option<String>,
    encryption_algorithm: Option<ipsec_policy::EncryptionAlgorithm>,
    href: Option<String>,
    id: Option<String>,
    key_lifetime: Option<i64>,
    name: Option<String>,
    pfs: Option<ipsec_policy::Pfs>,
    resource_group: Option<crate::model::ResourceGroupReference>,
    resource_type: Option<String>,
    transform_protocol: Option<String>,
}

impl IpsecPolicy {
    /// The authentication algorithm.
    pub fn authentication_algorithm(&self) -> Option<&ipsec_policy::AuthenticationAlgorithm> {
        self.authentication_algorithm.as_ref()
    }

    /// The VPN gateway connections that use this IPsec policy.
    pub fn connections(&self) -> Option<&[VpnGatewayConnectionReference]> {
        self.connections.as_deref()
    }

    /// The date and time that this IPsec policy was created.
    pub fn created_at(&self) -> Option<time::OffsetDateTime> {
        self.created_at
    }

    /// The encapsulation mode used, only `tunnel` is supported.
    pub fn encapsulation_mode(&self) -> Option<&str> {
        self.encapsulation_mode.as_deref()
    }

    /// The encryption algorithm.
    pub fn encryption_algorithm(&self) -> Option<&ipsec_policy::EncryptionAlgorithm> {
        self.encryption_algorithm.as_ref()
    }

    /// The IPsec policy's canonical URL.
    pub fn href(&self) -> Option<&str> {
        self.href.as_deref()
    }

    /// The unique identifier for this IPsec policy.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// The key lifetime in seconds.
    pub fn key_lifetime(&self) -> Option<i64> {
        self.key_lifetime
    }

    /// The user-defined name for this IPsec policy.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Perfect Forward Secrecy.
    pub fn pfs(&self) -> Option<&ipsec_policy::Pfs> {
        self.pfs.as_ref()
    }

    /// The resource group for this IPsec policy.
    pub fn resource_group(&self) -> Option<&crate::model::ResourceGroupReference> {
        self.resource_group.as_ref()
    }

    pub fn resource_type(&self) -> Option<&str> {
        self.resource_type.as_deref()
    }

    /// The transform protocol used, only `esp` is supported.
    pub fn transform_protocol(&self) -> Option<&str> {
        self.transform_protocol.as_deref()
    }
}

impl Message for IpsecPolicy {
    fn typename() -> &'static str {
        "IPsecPolicy"
    }
}

/// Defines additional types related to [IpsecPolicy].
pub mod ipsec_policy {
    #[allow(unused_imports)]
    use super::*;

    /// The authentication algorithm.
    ///
    /// # Working with unknown values
    ///
    /// This enum is defined as `#[non_exhaustive]` because the service may add
    /// new values. Applications may also send values unknown to this library,
    /// use `AuthenticationAlgorithm::from()` with the value and it is sent unchanged.
    #[derive(Clone, Debug, PartialEq)]
    #[non_exhaustive]
    pub enum AuthenticationAlgorithm {
        Md5,
        Sha1,
        Sha256,
        /// If set, the enum was initialized with an unknown value.
        ///
        /// Applications can examine the value using [AuthenticationAlgorithm::name].
        UnknownValue(gax::enums::UnknownEnumValue),
    }

    impl AuthenticationAlgorithm {
        /// Gets the enum value as a string.
        pub fn name(&self) -> &str {
            match self {
                Self::Md5 => "md5",
                Self::Sha1 => "sha1",
                Self::Sha256 => "sha256",
                Self::UnknownValue(u) => u.name(),
            }
        }
    }

    impl std::fmt::Display for AuthenticationAlgorithm {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.name())
        }
    }

    impl std::convert::From<&str> for AuthenticationAlgorithm {
        fn from(value: &str) -> Self {
            match value {
                "md5" => Self::Md5,
                "sha1" => Self::Sha1,
                "sha256" => Self::Sha256,
                _ => Self::UnknownValue(gax::enums::UnknownEnumValue::new(value)),
            }
        }
    }

    impl std::convert::From<String> for AuthenticationAlgorithm {
        fn from(value: String) -> Self {
            Self::from(value.as_str())
        }
    }

    impl serde::ser::Serialize for AuthenticationAlgorithm {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> serde::de::Deserialize<'de> for AuthenticationAlgorithm {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            deserializer.deserialize_str(gax::enums::EnumVisitor::<Self>::new(
                "IPsecPolicy.authentication_algorithm",
            ))
        }
    }

    /// The encryption algorithm.
    ///
    /// # Working with unknown values
    ///
    /// This enum is defined as `#[non_exhaustive]` because the service may add
    /// new values. Applications may also send values unknown to this library,
    /// use `EncryptionAlgorithm::from()` with the value and it is sent unchanged.
    #[derive(Clone, Debug, PartialEq)]
    #[non_exhaustive]
    pub enum EncryptionAlgorithm {
        TripleDes,
        Aes128,
        Aes256,
        /// If set, the enum was initialized with an unknown value.
        ///
        /// Applications can examine the value using [EncryptionAlgorithm::name].
        UnknownValue(gax::enums::UnknownEnumValue),
    }

    impl EncryptionAlgorithm {
        /// Gets the enum value as a string.
        pub fn name(&self) -> &str {
            match self {
                Self::TripleDes => "triple_des",
                Self::Aes128 => "aes128",
                Self::Aes256 => "aes256",
                Self::UnknownValue(u) => u.name(),
            }
        }
    }

    impl std::fmt::Display for EncryptionAlgorithm {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.name())
        }
    }

    impl std::convert::From<&str> for EncryptionAlgorithm {
        fn from(value: &str) -> Self {
            match value {
                "triple_des" => Self::TripleDes,
                "aes128" => Self::Aes128,
                "aes256" => Self::Aes256,
                _ => Self::UnknownValue(gax::enums::UnknownEnumValue::new(value)),
            }
        }
    }

    impl std::convert::From<String> for EncryptionAlgorithm {
        fn from(value: String) -> Self {
            Self::from(value.as_str())
        }
    }

    impl serde::ser::Serialize for EncryptionAlgorithm {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> serde::de::Deserialize<'de> for EncryptionAlgorithm {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            deserializer.deserialize_str(gax::enums::EnumVisitor::<Self>::new(
                "IPsecPolicy.encryption_algorithm",
            ))
        }
    }

    /// Perfect Forward Secrecy.
    ///
    /// The `group_*` values name the Diffie-Hellman group used for the key exchange.
    ///
    /// # Working with unknown values
    ///
    /// This enum is defined as `#[non_exhaustive]` because the service may add
    /// new values. Applications may also send values unknown to this library,
    /// use `Pfs::from()` with the value and it is sent unchanged.
    #[derive(Clone, Debug, PartialEq)]
    #[non_exhaustive]
    pub enum Pfs {
        Disabled,
        Group14,
        Group2,
        Group5,
        /// If set, the enum was initialized with an unknown value.
        ///
        /// Applications can examine the value using [Pfs::name].
        UnknownValue(gax::enums::UnknownEnumValue),
    }

    impl Pfs {
        /// Gets the enum value as a string.
        pub fn name(&self) -> &str {
            match self {
                Self::Disabled => "disabled",
                Self::Group14 => "group_14",
                Self::Group2 => "group_2",
                Self::Group5 => "group_5",
                Self::UnknownValue(u) => u.name(),
            }
        }
    }

    impl std::fmt::Display for Pfs {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.name())
        }
    }

    impl std::convert::From<&str> for Pfs {
        fn from(value: &str) -> Self {
            match value {
                "disabled" => Self::Disabled,
                "group_14" => Self::Group14,
                "group_2" => Self::Group2,
                "group_5" => Self::Group5,
                _ => Self::UnknownValue(gax::enums::UnknownEnumValue::new(value)),
            }
        }
    }

    impl std::convert::From<String> for Pfs {
        fn from(value: String) -> Self {
            Self::from(value.as_str())
        }
    }

    impl serde::ser::Serialize for Pfs {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> serde::de::Deserialize<'de> for Pfs {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            deserializer.deserialize_str(gax::enums::EnumVisitor::<Self>::new("IPsecPolicy.pfs"))
        }
    }
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[non_exhaustive]
pub struct VpnGatewayConnectionReference {
    href: Option<String>,
    id: Option<String>,
    name: Option<String>,
    resource_type: Option<String>,
}

impl VpnGatewayConnectionReference {
    /// The VPN connection's canonical URL.
    pub fn href(&self) -> Option<&str> {
        self.href.as_deref()
    }

    /// The unique identifier for this VPN gateway connection.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// The user-defined name for this VPN connection.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn resource_type(&self) -> Option<&str> {
        self.resource_type.as_deref()
    }
}

impl Message for VpnGatewayConnectionReference {
    fn typename() -> &'static str {
        "VPNGatewayConnectionReference"
    }
}

/// The request to list the peer CIDRs of a VPN gateway connection.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "ListVpnGatewayConnectionPeerCidrsRequestBuilder")]
#[non_exhaustive]
pub struct ListVpnGatewayConnectionPeerCidrsRequest {
    vpn_gateway_id: String,
    id: String,
}

impl ListVpnGatewayConnectionPeerCidrsRequest {
    /// Returns an empty builder.
    pub fn builder() -> ListVpnGatewayConnectionPeerCidrsRequestBuilder {
        ListVpnGatewayConnectionPeerCidrsRequestBuilder::default()
    }

    /// Returns a builder initialized with the values in this model.
    pub fn to_builder(&self) -> ListVpnGatewayConnectionPeerCidrsRequestBuilder {
        ListVpnGatewayConnectionPeerCidrsRequestBuilder {
            vpn_gateway_id: Some(self.vpn_gateway_id.clone()),
            id: Some(self.id.clone()),
        }
    }

    /// The VPN gateway identifier.
    pub fn vpn_gateway_id(&self) -> &str {
        &self.vpn_gateway_id
    }

    /// The VPN gateway connection identifier.
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl Message for ListVpnGatewayConnectionPeerCidrsRequest {
    fn typename() -> &'static str {
        "ListVpnGatewayConnectionPeerCidrsRequest"
    }
}

impl gax::message::Validated for ListVpnGatewayConnectionPeerCidrsRequest {
    type Builder = ListVpnGatewayConnectionPeerCidrsRequestBuilder;
    const REQUIRED_FIELDS: &'static [RequiredField] = &[
        RequiredField::not_empty("vpn_gateway_id"),
        RequiredField::not_empty("id"),
    ];
    fn to_builder(&self) -> Self::Builder {
        ListVpnGatewayConnectionPeerCidrsRequest::to_builder(self)
    }
}

impl std::convert::TryFrom<ListVpnGatewayConnectionPeerCidrsRequestBuilder>
    for ListVpnGatewayConnectionPeerCidrsRequest
{
    type Error = gax::error::Error;
    fn try_from(value: ListVpnGatewayConnectionPeerCidrsRequestBuilder) -> gax::Result<Self> {
        value.build()
    }
}

/// Builder for [ListVpnGatewayConnectionPeerCidrsRequest].
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct ListVpnGatewayConnectionPeerCidrsRequestBuilder {
    vpn_gateway_id: Option<String>,
    id: Option<String>,
}

impl ListVpnGatewayConnectionPeerCidrsRequestBuilder {
    /// Creates a builder with all the mandatory fields.
    pub fn new(vpn_gateway_id: impl Into<String>, id: impl Into<String>) -> Self {
        Self::default()
            .set_vpn_gateway_id(vpn_gateway_id)
            .set_id(id)
    }

    /// Sets the value of [vpn_gateway_id][ListVpnGatewayConnectionPeerCidrsRequest::vpn_gateway_id].
    pub fn set_vpn_gateway_id<T: Into<String>>(mut self, v: T) -> Self {
        self.vpn_gateway_id = Some(v.into());
        self
    }

    /// Sets the value of [id][ListVpnGatewayConnectionPeerCidrsRequest::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = Some(v.into());
        self
    }

    /// Validates the mandatory fields and creates a [ListVpnGatewayConnectionPeerCidrsRequest].
    pub fn build(self) -> gax::Result<ListVpnGatewayConnectionPeerCidrsRequest> {
        let name = ListVpnGatewayConnectionPeerCidrsRequest::typename();
        Ok(ListVpnGatewayConnectionPeerCidrsRequest {
            vpn_gateway_id: not_empty(name, "vpn_gateway_id", self.vpn_gateway_id)?,
            id: not_empty(name, "id", self.id)?,
        })
    }
}

impl gax::message::MessageBuilder for ListVpnGatewayConnectionPeerCidrsRequestBuilder {
    type Target = ListVpnGatewayConnectionPeerCidrsRequest;
    fn build(self) -> gax::Result<Self::Target> {
        ListVpnGatewayConnectionPeerCidrsRequestBuilder::build(self)
    }
}

/// The peer CIDRs of a VPN gateway connection.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[non_exhaustive]
pub struct VpnGatewayConnectionPeerCidrs {
    peer_cidrs: Option<Vec<String>>,
}

impl VpnGatewayConnectionPeerCidrs {
    /// A collection of peer CIDRs for this resource.
    pub fn peer_cidrs(&self) -> Option<&[String]> {
        self.peer_cidrs.as_deref()
    }
}

impl Message for VpnGatewayConnectionPeerCidrs {
    fn typename() -> &'static str {
        "VPNGatewayConnectionPeerCIDRs"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use create_ipsec_policy_request::{AuthenticationAlgorithm, EncryptionAlgorithm, Pfs};
    use serde_json::json;

    #[test]
    fn create_ipsec_policy() -> anyhow::Result<()> {
        let request = CreateIpsecPolicyRequestBuilder::new(
            AuthenticationAlgorithm::Md5,
            EncryptionAlgorithm::TripleDes,
            Pfs::Disabled,
        )
        .set_name("my-ipsec-policy")
        .set_key_lifetime(3600)
        .set_resource_group(
            crate::model::ResourceGroupIdentityByIdBuilder::new("fee82deba12e4c0fb69c3b09d1f12345")
                .build()?,
        )
        .build()?;
        let got = serde_json::to_value(&request)?;
        assert_eq!(
            got,
            json!({
                "authentication_algorithm": "md5",
                "encryption_algorithm": "triple_des",
                "pfs": "disabled",
                "name": "my-ipsec-policy",
                "key_lifetime": 3600,
                "resource_group": {"id": "fee82deba12e4c0fb69c3b09d1f12345"},
            })
        );
        Ok(())
    }

    #[test]
    fn ipsec_policy_response() -> anyhow::Result<()> {
        let got = serde_json::from_value::<IpsecPolicy>(json!({
            "authentication_algorithm": "sha256",
            "encryption_algorithm": "aes256",
            "pfs": "group_14",
            "connections": [{"id": "a10a5771-dc23-442c-8460-c3601d8542f7", "name": "my-vpn-connection"}],
            "resource_group": {"id": "fee82deba12e4c0fb69c3b09d1f12345"},
            "transform_protocol": "esp"
        }))?;
        assert_eq!(got.pfs(), Some(&Pfs::Group14));
        assert_eq!(
            got.encryption_algorithm(),
            Some(&EncryptionAlgorithm::Aes256)
        );
        let first = got.connections().and_then(|c| c.first());
        assert_eq!(
            first.and_then(VpnGatewayConnectionReference::name),
            Some("my-vpn-connection")
        );
        Ok(())
    }

    #[test]
    fn peer_cidrs() -> anyhow::Result<()> {
        let got = serde_json::from_value::<VpnGatewayConnectionPeerCidrs>(json!({
            "peer_cidrs": ["10.45.1.0/24", "10.45.2.0/24"]
        }))?;
        assert_eq!(
            got.peer_cidrs(),
            Some(["10.45.1.0/24".to_string(), "10.45.2.0/24".to_string()].as_slice())
        );
        Ok(())
    }
}
