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

//! Fully populated models shared by the integration tests.

#![allow(dead_code)]

use ibm_cloud_vpc_v1::model::*;

pub type Result<T> = anyhow::Result<T>;

pub const RESOURCE_GROUP_ID: &str = "fee82deba12e4c0fb69c3b09d1f12345";
pub const POOL_ID: &str = "70294e14-4e61-11e8-bcf4-0242ac110004";
pub const SUBNET_HREF: &str =
    "https://us-south.iaas.cloud.ibm.com/v1/subnets/7ec86020-1c6e-4889-b3f0-a15f2e50f87e";
pub const KEY_CRN: &str =
    "crn:v1:bluemix:public:kms:us-south:a/dffc98a0f1f0f95f6613b3b752286b87:key:5437653b";
pub const CERTIFICATE_CRN: &str =
    "crn:v1:bluemix:public:cloudcerts:us-south:a/123456:b8866ea4:certificate:f3b56fd9";

pub fn resource_group() -> Result<ResourceGroupIdentityById> {
    Ok(ResourceGroupIdentityByIdBuilder::new(RESOURCE_GROUP_ID).build()?)
}

pub fn network_acl_rule_by_id() -> Result<NetworkAclRuleIdentityById> {
    Ok(NetworkAclRuleIdentityByIdBuilder::new("8daca77a-4980-4d33-8f3e-7038797be8f9").build()?)
}

pub fn network_acl_rule_by_href() -> Result<NetworkAclRuleIdentityByHref> {
    Ok(NetworkAclRuleIdentityByHrefBuilder::new(
        "https://us-south.iaas.cloud.ibm.com/v1/network_acls/a4e28308-8ee7-46ab-8108-9f881f22bdbf/rules/8daca77a-4980-4d33-8f3e-7038797be8f9",
    )
    .build()?)
}

pub fn update_network_acl_rule() -> Result<UpdateNetworkAclRuleRequest> {
    use update_network_acl_rule_request::{Action, Direction};
    Ok(UpdateNetworkAclRuleRequestBuilder::new(
        "a4e28308-8ee7-46ab-8108-9f881f22bdbf",
        "8daca77a-4980-4d33-8f3e-7038797be8f9",
    )
    .set_name("my-rule-2")
    .set_action(Action::Allow)
    .set_destination("192.168.3.2/32")
    .set_direction(Direction::Inbound)
    .set_source("192.168.3.2/32")
    .set_destination_port_max(22)
    .set_destination_port_min(22)
    .set_source_port_max(65535)
    .set_source_port_min(49152)
    .set_code(0)
    .set_type(8)
    .set_before(network_acl_rule_by_id()?)
    .build()?)
}

pub fn pool_by_id() -> Result<LoadBalancerPoolIdentityById> {
    Ok(LoadBalancerPoolIdentityByIdBuilder::new(POOL_ID).build()?)
}

pub fn pool_by_href() -> Result<LoadBalancerPoolIdentityByHref> {
    Ok(LoadBalancerPoolIdentityByHrefBuilder::new(format!(
        "https://us-south.iaas.cloud.ibm.com/v1/load_balancers/dd754295-e9e0-4c9d-bf6c-58fbc59e5727/pools/{POOL_ID}"
    ))
    .build()?)
}

pub fn redirect_url() -> Result<LoadBalancerListenerPolicyRedirectUrlPrototype> {
    Ok(
        LoadBalancerListenerPolicyRedirectUrlPrototypeBuilder::new(301, "https://www.redirect.com")
            .build()?,
    )
}

pub fn policy_rule() -> Result<LoadBalancerListenerPolicyRulePrototype> {
    use load_balancer_listener_policy_rule_prototype::{Condition, Type};
    Ok(
        LoadBalancerListenerPolicyRulePrototypeBuilder::new(
            Condition::Contains,
            Type::Header,
            "testString",
        )
        .set_field("MY-APP-HEADER")
        .build()?,
    )
}

pub fn policy() -> Result<LoadBalancerListenerPolicyPrototype> {
    use load_balancer_listener_policy_prototype::Action;
    Ok(LoadBalancerListenerPolicyPrototypeBuilder::new(5, Action::Forward)
        .set_name("my-policy")
        .set_rules([policy_rule()?])
        .set_target(pool_by_id()?)
        .build()?)
}

pub fn certificate_instance() -> Result<CertificateInstanceIdentityByCrn> {
    Ok(CertificateInstanceIdentityByCrnBuilder::new(CERTIFICATE_CRN).build()?)
}

pub fn create_load_balancer_listener() -> Result<CreateLoadBalancerListenerRequest> {
    use create_load_balancer_listener_request::Protocol;
    Ok(
        CreateLoadBalancerListenerRequestBuilder::new(
            "dd754295-e9e0-4c9d-bf6c-58fbc59e5727",
            443,
            Protocol::Https,
        )
        .set_accept_proxy_protocol(true)
        .set_certificate_instance(certificate_instance()?)
        .set_connection_limit(2000)
        .set_default_pool(pool_by_id()?)
        .set_policies([policy()?])
        .build()?,
    )
}

pub fn create_ipsec_policy() -> Result<CreateIpsecPolicyRequest> {
    use create_ipsec_policy_request::{AuthenticationAlgorithm, EncryptionAlgorithm, Pfs};
    Ok(CreateIpsecPolicyRequestBuilder::new(
        AuthenticationAlgorithm::Md5,
        EncryptionAlgorithm::TripleDes,
        Pfs::Disabled,
    )
    .set_name("my-ipsec-policy")
    .set_key_lifetime(3600)
    .set_resource_group(resource_group()?)
    .build()?)
}

pub fn list_peer_cidrs() -> Result<ListVpnGatewayConnectionPeerCidrsRequest> {
    Ok(ListVpnGatewayConnectionPeerCidrsRequestBuilder::new(
        "a10a5771-dc23-442c-8460-c3601d8542f7",
        "b67efb2c-bd17-457d-be8e-7b46404062dc",
    )
    .build()?)
}

pub fn volume_profile() -> Result<VolumeProfileIdentityByName> {
    Ok(VolumeProfileIdentityByNameBuilder::new("general-purpose").build()?)
}

pub fn volume_profile_by_href() -> Result<VolumeProfileIdentityByHref> {
    Ok(VolumeProfileIdentityByHrefBuilder::new(
        "https://us-south.iaas.cloud.ibm.com/v1/volume/profiles/general-purpose",
    )
    .build()?)
}

pub fn encryption_key() -> Result<EncryptionKeyIdentityByCrn> {
    Ok(EncryptionKeyIdentityByCrnBuilder::new(KEY_CRN).build()?)
}

pub fn volume() -> Result<VolumePrototypeInstanceByImageContext> {
    Ok(VolumePrototypeInstanceByImageContextBuilder::new(volume_profile()?)
        .set_capacity(100)
        .set_encryption_key(encryption_key()?)
        .set_iops(10000)
        .set_name("my-volume")
        .build()?)
}

pub fn volume_attachment() -> Result<VolumeAttachmentPrototypeInstanceByImageContext> {
    Ok(VolumeAttachmentPrototypeInstanceByImageContextBuilder::new(volume()?)
        .set_name("my-volume-attachment")
        .set_delete_volume_on_instance_delete(true)
        .build()?)
}

pub fn get_image() -> Result<GetImageRequest> {
    Ok(GetImageRequestBuilder::new("72b27b5c-f4b0-48bb-b954-5becc7c1dcb8").build()?)
}

pub fn subnet_by_id() -> Result<SubnetIdentityById> {
    Ok(SubnetIdentityByIdBuilder::new("7ec86020-1c6e-4889-b3f0-a15f2e50f87e").build()?)
}

pub fn subnet_by_crn() -> Result<SubnetIdentityByCrn> {
    Ok(SubnetIdentityByCrnBuilder::new(
        "crn:v1:bluemix:public:is:us-south-1:a/123456::subnet:7ec86020-1c6e-4889-b3f0-a15f2e50f87e",
    )
    .build()?)
}

pub fn subnet_by_href() -> Result<SubnetIdentityByHref> {
    Ok(SubnetIdentityByHrefBuilder::new(SUBNET_HREF).build()?)
}

pub fn storage_bucket() -> Result<CloudObjectStorageBucketIdentity> {
    Ok(CloudObjectStorageBucketIdentityBuilder::new("bucket-27200-lwx4cfvcue").build()?)
}

pub fn create_flow_log_collector() -> Result<CreateFlowLogCollectorRequest> {
    Ok(
        CreateFlowLogCollectorRequestBuilder::new(storage_bucket()?, subnet_by_href()?)
            .set_active(true)
            .set_name("my-flow-log-collector")
            .set_resource_group(resource_group()?)
            .build()?,
    )
}

pub fn delete_instance_group_load_balancer() -> Result<DeleteInstanceGroupLoadBalancerRequest> {
    Ok(
        DeleteInstanceGroupLoadBalancerRequestBuilder::new("dd754295-e9e0-4c9d-bf6c-58fbc59e5727")
            .build()?,
    )
}
