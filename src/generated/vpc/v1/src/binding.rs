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

//! Describes the HTTP request for each request model.

use crate::model::*;
use gax::client_config::ClientConfig;
use gax::path_parameter::enc;
use gax::request::{Binding, HttpRequest, body_without};

impl Binding for UpdateNetworkAclRuleRequest {
    fn http_request(&self, config: &ClientConfig) -> gax::Result<HttpRequest> {
        let path = format!(
            "/network_acls/{}/rules/{}",
            enc(self.network_acl_id()),
            enc(self.id())
        );
        let body = body_without(self, &["network_acl_id", "id"])?;
        Ok(HttpRequest::new(http::Method::PATCH, config, &path)?.set_body(body))
    }
}

impl Binding for CreateLoadBalancerListenerRequest {
    fn http_request(&self, config: &ClientConfig) -> gax::Result<HttpRequest> {
        let path = format!("/load_balancers/{}/listeners", enc(self.load_balancer_id()));
        let body = body_without(self, &["load_balancer_id"])?;
        Ok(HttpRequest::new(http::Method::POST, config, &path)?.set_body(body))
    }
}

impl Binding for CreateIpsecPolicyRequest {
    fn http_request(&self, config: &ClientConfig) -> gax::Result<HttpRequest> {
        let body = body_without(self, &[])?;
        Ok(HttpRequest::new(http::Method::POST, config, "/ipsec_policies")?.set_body(body))
    }
}

impl Binding for ListVpnGatewayConnectionPeerCidrsRequest {
    fn http_request(&self, config: &ClientConfig) -> gax::Result<HttpRequest> {
        let path = format!(
            "/vpn_gateways/{}/connections/{}/peer_cidrs",
            enc(self.vpn_gateway_id()),
            enc(self.id())
        );
        HttpRequest::new(http::Method::GET, config, &path)
    }
}

impl Binding for GetImageRequest {
    fn http_request(&self, config: &ClientConfig) -> gax::Result<HttpRequest> {
        let path = format!("/images/{}", enc(self.id()));
        HttpRequest::new(http::Method::GET, config, &path)
    }
}

impl Binding for CreateFlowLogCollectorRequest {
    fn http_request(&self, config: &ClientConfig) -> gax::Result<HttpRequest> {
        let body = body_without(self, &[])?;
        Ok(HttpRequest::new(http::Method::POST, config, "/flow_log_collectors")?.set_body(body))
    }
}

impl Binding for DeleteInstanceGroupLoadBalancerRequest {
    fn http_request(&self, config: &ClientConfig) -> gax::Result<HttpRequest> {
        let path = format!(
            "/instance_groups/{}/load_balancer",
            enc(self.instance_group_id())
        );
        HttpRequest::new(http::Method::DELETE, config, &path)
    }
}
