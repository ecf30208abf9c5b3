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
    use gax::error::validation::FieldProblem;
    use gax::message::{MessageBuilder, Presence, Validated};
    use serde_json::json;

    // Removes each mandatory field from a fully populated model and verifies
    // the builder rejects the result, naming that field.
    fn check_required<T: Validated>(model: &T) -> Result<()> {
        let full = serde_json::to_value(model)?;
        for field in T::REQUIRED_FIELDS {
            let mut input = full.clone();
            let removed = input.as_object_mut().and_then(|m| m.remove(field.name));
            assert!(removed.is_some(), "{} not found in {full}", field.name);

            let builder = serde_json::from_value::<T::Builder>(input.clone())?;
            let err = builder.build().unwrap_err();
            assert!(err.is_validation(), "{err:?}");
            let details = err.validation_details().unwrap();
            assert_eq!(details.message, T::typename());
            assert_eq!(details.field_name, field.name);
            assert_eq!(details.problem, FieldProblem::Unset);

            let got = serde_json::from_value::<T>(input);
            assert!(got.is_err(), "{} missing but got {got:?}", field.name);

            if field.presence == Presence::NotEmpty {
                let mut input = full.clone();
                input[field.name] = json!("");
                let builder = serde_json::from_value::<T::Builder>(input)?;
                let err = builder.build().unwrap_err();
                let details = err.validation_details().unwrap();
                assert_eq!(details.field_name, field.name);
                assert_eq!(details.problem, FieldProblem::Empty);
            }
        }
        Ok(())
    }

    // With nothing set, the first mandatory field is the one reported.
    fn check_first_reported<T: Validated>() -> Result<()> {
        let builder = serde_json::from_value::<T::Builder>(json!({}))?;
        let err = builder.build().unwrap_err();
        let details = err.validation_details().unwrap();
        assert_eq!(details.field_name, T::REQUIRED_FIELDS[0].name);
        assert_eq!(details.problem, FieldProblem::Unset);
        Ok(())
    }

    macro_rules! required_field_tests {
        ($($name:ident => $sample:path),* $(,)?) => {
            $(
                mod $name {
                    use super::*;

                    #[test]
                    fn each_required_field() -> Result<()> {
                        let model = $sample()?;
                        check_required(&model)
                    }

                    #[test]
                    fn first_field_reported() -> Result<()> {
                        let model = $sample()?;
                        fn first<T: Validated>(_: &T) -> Result<()> {
                            check_first_reported::<T>()
                        }
                        first(&model)
                    }

                    #[test]
                    fn to_builder_round_trip() -> Result<()> {
                        let model = $sample()?;
                        let got = Validated::to_builder(&model).build()?;
                        assert_eq!(got, model);
                        Ok(())
                    }
                }
            )*
        };
    }

    required_field_tests!(
        resource_group_identity_by_id => samples::resource_group,
        network_acl_rule_identity_by_id => samples::network_acl_rule_by_id,
        network_acl_rule_identity_by_href => samples::network_acl_rule_by_href,
        update_network_acl_rule_request => samples::update_network_acl_rule,
        load_balancer_pool_identity_by_id => samples::pool_by_id,
        load_balancer_pool_identity_by_href => samples::pool_by_href,
        redirect_url_prototype => samples::redirect_url,
        policy_rule_prototype => samples::policy_rule,
        policy_prototype => samples::policy,
        certificate_instance_identity_by_crn => samples::certificate_instance,
        create_load_balancer_listener_request => samples::create_load_balancer_listener,
        create_ipsec_policy_request => samples::create_ipsec_policy,
        list_vpn_gateway_connection_peer_cidrs_request => samples::list_peer_cidrs,
        volume_profile_identity_by_name => samples::volume_profile,
        volume_profile_identity_by_href => samples::volume_profile_by_href,
        encryption_key_identity_by_crn => samples::encryption_key,
        volume_prototype => samples::volume,
        volume_attachment_prototype => samples::volume_attachment,
        get_image_request => samples::get_image,
        subnet_identity_by_id => samples::subnet_by_id,
        subnet_identity_by_crn => samples::subnet_by_crn,
        subnet_identity_by_href => samples::subnet_by_href,
        cloud_object_storage_bucket_identity => samples::storage_bucket,
        create_flow_log_collector_request => samples::create_flow_log_collector,
        delete_instance_group_load_balancer_request => samples::delete_instance_group_load_balancer,
    );

    #[test]
    fn nested_failure_is_reported() -> Result<()> {
        use ibm_cloud_vpc_v1::model::CreateLoadBalancerListenerRequest;
        // A policy inside the listener payload is missing its action.
        let mut input = serde_json::to_value(samples::create_load_balancer_listener()?)?;
        input["policies"][0]
            .as_object_mut()
            .map(|m| m.remove("action"));
        let got = serde_json::from_value::<CreateLoadBalancerListenerRequest>(input);
        let err = got.unwrap_err();
        assert!(err.to_string().contains("action"), "{err}");
        Ok(())
    }
}
