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

mod samples;

#[cfg(test)]
mod tests {
    use super::samples::{self, Result};
    use ibm_cloud_vpc_v1::model::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    static_assertions::assert_impl_all!(CreateLoadBalancerListenerRequest: Clone, Send, Sync, std::fmt::Debug);
    static_assertions::assert_impl_all!(CreateLoadBalancerListenerRequestBuilder: Clone, Default, Send, Sync);
    static_assertions::assert_impl_all!(LoadBalancerListener: Clone, Default, Send, Sync);
    static_assertions::assert_impl_all!(Image: Clone, Default, Send, Sync);
    static_assertions::assert_impl_all!(FlowLogCollectorPrototypeTarget: Clone, Send, Sync);
    static_assertions::assert_not_impl_any!(CreateIpsecPolicyRequest: Default);

    #[test]
    fn policy_serialization() -> Result<()> {
        let got = serde_json::to_value(samples::policy()?)?;
        let want = json!({
            "name": "my-policy",
            "priority": 5,
            "action": "forward",
            "rules": [{
                "condition": "contains",
                "field": "MY-APP-HEADER",
                "type": "header",
                "value": "testString",
            }],
            "target": { "id": samples::POOL_ID },
        });
        assert_eq!(got, want);
        Ok(())
    }

    #[test]
    fn unset_fields_are_omitted() -> Result<()> {
        use load_balancer_listener_policy_prototype::Action;
        let policy = LoadBalancerListenerPolicyPrototypeBuilder::new(10, Action::Reject).build()?;
        let got = serde_json::to_value(&policy)?;
        assert_eq!(got, json!({"priority": 10, "action": "reject"}));
        Ok(())
    }

    #[test]
    fn listener_round_trip() -> Result<()> {
        let listener = samples::create_load_balancer_listener()?;
        let json = serde_json::to_string(&listener)?;
        let got = serde_json::from_str::<CreateLoadBalancerListenerRequest>(&json)?;
        assert_eq!(got, listener);
        assert_eq!(got.policies().map(|p| p.len()), Some(1));
        Ok(())
    }

    #[test]
    fn acl_rule_round_trip() -> Result<()> {
        let rule = samples::update_network_acl_rule()?;
        let value = serde_json::to_value(&rule)?;
        assert_eq!(value["type"], json!(8));
        assert_eq!(
            value["before"],
            json!({"id": "8daca77a-4980-4d33-8f3e-7038797be8f9"})
        );
        let got = serde_json::from_value::<UpdateNetworkAclRuleRequest>(value)?;
        assert_eq!(got, rule);
        assert_eq!(got.r#type(), Some(8));
        Ok(())
    }

    #[test]
    fn flow_log_round_trip() -> Result<()> {
        let request = samples::create_flow_log_collector()?;
        let value = serde_json::to_value(&request)?;
        assert_eq!(value["target"], json!({"href": samples::SUBNET_HREF}));
        let got = serde_json::from_value::<CreateFlowLogCollectorRequest>(value)?;
        assert_eq!(got, request);
        assert!(
            matches!(got.target(), FlowLogCollectorPrototypeTarget::SubnetByHref(_)),
            "{got:?}"
        );
        Ok(())
    }

    #[test]
    fn volume_attachment_round_trip() -> Result<()> {
        let attachment = samples::volume_attachment()?;
        let value = serde_json::to_value(&attachment)?;
        assert_eq!(
            value["volume"]["profile"],
            json!({"name": "general-purpose"})
        );
        let got = serde_json::from_value::<VolumeAttachmentPrototypeInstanceByImageContext>(value)?;
        assert_eq!(got, attachment);
        Ok(())
    }

    #[test]
    fn unknown_fields_are_ignored() -> Result<()> {
        let got = serde_json::from_value::<GetImageRequest>(json!({
            "id": "r006-72b27b5c",
            "unknownField": 42,
        }))?;
        assert_eq!(got.id(), "r006-72b27b5c");
        Ok(())
    }

    #[test]
    fn to_builder_leaves_original_unchanged() -> Result<()> {
        use create_ipsec_policy_request::Pfs;
        let original = samples::create_ipsec_policy()?;
        let modified = original
            .to_builder()
            .set_pfs(Pfs::Group14)
            .set_key_lifetime(86400)
            .build()?;
        assert_eq!(original.pfs(), &Pfs::Disabled);
        assert_eq!(original.key_lifetime(), Some(3600));
        assert_eq!(modified.pfs(), &Pfs::Group14);
        assert_eq!(modified.key_lifetime(), Some(86400));
        assert_eq!(modified.name(), original.name());
        assert_ne!(modified, original);
        Ok(())
    }

    #[test]
    fn builder_reuse() -> Result<()> {
        let builder = GetImageRequestBuilder::new("first");
        let first = builder.clone().build()?;
        let second = builder.set_id("second").build()?;
        assert_eq!(first.id(), "first");
        assert_eq!(second.id(), "second");
        Ok(())
    }

    #[test]
    fn add_rules() -> Result<()> {
        use load_balancer_listener_policy_prototype::Action;
        let rule = samples::policy_rule()?;
        let mut builder = LoadBalancerListenerPolicyPrototypeBuilder::new(1, Action::Forward);
        builder.add_rules(rule.clone())?;
        builder.add_rules(Some(rule.clone()))?;
        let policy = builder.build()?;
        assert_eq!(policy.rules(), Some([rule.clone(), rule].as_slice()));
        Ok(())
    }

    #[test]
    fn add_rules_none() -> Result<()> {
        use load_balancer_listener_policy_prototype::Action;
        let mut builder = LoadBalancerListenerPolicyPrototypeBuilder::new(1, Action::Forward);
        builder.add_rules(samples::policy_rule()?)?;
        let err = builder.add_rules(None).unwrap_err();
        assert!(err.is_invalid_argument(), "{err:?}");
        assert!(!err.is_validation(), "{err:?}");
        assert!(err.to_string().contains("rules"), "{err}");

        // The same builder is still usable and keeps the earlier item.
        builder.add_rules(samples::policy_rule()?)?;
        let policy = builder.build()?;
        assert_eq!(policy.rules().map(|r| r.len()), Some(2));
        Ok(())
    }

    #[test]
    fn add_policies_none() -> Result<()> {
        use create_load_balancer_listener_request::Protocol;
        let mut builder = CreateLoadBalancerListenerRequestBuilder::new("lb-1", 80, Protocol::Http);
        let err = builder.add_policies(None).unwrap_err();
        assert!(err.is_invalid_argument(), "{err:?}");
        assert!(err.to_string().contains("policies"), "{err}");
        assert_eq!(builder.clone().build()?.policies(), None);

        builder.add_policies(samples::policy()?)?;
        let listener = builder.build()?;
        assert_eq!(listener.policies(), Some([samples::policy()?].as_slice()));
        Ok(())
    }

    #[test]
    fn set_policies_replaces() -> Result<()> {
        use create_load_balancer_listener_request::Protocol;
        let mut builder = CreateLoadBalancerListenerRequestBuilder::new("lb-1", 80, Protocol::Http);
        builder.add_policies(samples::policy()?)?;
        builder.add_policies(samples::policy()?)?;
        let listener = builder.set_policies([samples::policy()?]).build()?;
        assert_eq!(listener.policies().map(|p| p.len()), Some(1));

        let listener = listener
            .to_builder()
            .set_policies(Vec::<LoadBalancerListenerPolicyPrototype>::new())
            .build()?;
        assert_eq!(listener.policies(), Some([].as_slice()));
        let value = serde_json::to_value(&listener)?;
        assert_eq!(value["policies"], json!([]));
        Ok(())
    }

    #[test]
    fn policy_target_variants() -> Result<()> {
        use load_balancer_listener_policy_prototype::Action;
        let by_href = LoadBalancerListenerPolicyPrototypeBuilder::new(1, Action::Forward)
            .set_target(samples::pool_by_href()?)
            .build()?;
        assert!(
            matches!(
                by_href.target(),
                Some(LoadBalancerListenerPolicyPrototypeTarget::Pool(
                    LoadBalancerPoolIdentity::ByHref(_)
                ))
            ),
            "{by_href:?}"
        );

        let redirect = LoadBalancerListenerPolicyPrototypeBuilder::new(2, Action::Redirect)
            .set_target(samples::redirect_url()?)
            .build()?;
        let value = serde_json::to_value(&redirect)?;
        assert_eq!(
            value["target"],
            json!({"http_status_code": 301, "url": "https://www.redirect.com"})
        );
        let got = serde_json::from_value::<LoadBalancerListenerPolicyPrototype>(value)?;
        assert!(
            matches!(
                got.target(),
                Some(LoadBalancerListenerPolicyPrototypeTarget::RedirectUrl(_))
            ),
            "{got:?}"
        );
        Ok(())
    }

    #[test]
    fn getters() -> Result<()> {
        use load_balancer_listener_policy_rule_prototype::{Condition, Type};
        let rule = samples::policy_rule()?;
        assert_eq!(rule.condition(), &Condition::Contains);
        assert_eq!(rule.r#type(), &Type::Header);
        assert_eq!(rule.value(), "testString");
        assert_eq!(rule.field(), Some("MY-APP-HEADER"));

        let volume = samples::volume()?;
        assert_eq!(volume.capacity(), Some(100));
        assert_eq!(volume.iops(), Some(10000));
        assert_eq!(volume.name(), Some("my-volume"));
        assert!(
            matches!(volume.profile(), VolumeProfileIdentity::ByName(_)),
            "{volume:?}"
        );
        Ok(())
    }
}
