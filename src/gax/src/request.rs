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

//! Describe the HTTP request for a model.
//!
//! The client libraries do not send requests. Each request model knows how
//! to describe itself as an HTTP method, a URL, and an optional JSON body.
//! A transport collaborator takes this description, sends it, and hands the
//! response payload back to [Response::from_json][crate::response::Response::from_json].

use crate::Result;
use crate::client_config::ClientConfig;
use crate::error::Error;

/// The description of an HTTP request.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct HttpRequest {
    /// The HTTP method.
    pub method: http::Method,
    /// The full URL, including the `version` and `generation` query
    /// parameters.
    pub url: url::Url,
    /// The JSON payload, if the request has one.
    pub body: Option<serde_json::Value>,
}

impl HttpRequest {
    /// Creates a request without a body.
    ///
    /// The `path` is appended to the configured endpoint, it must start with
    /// `/` and its parameters must already be encoded with
    /// [enc][crate::path_parameter::enc].
    ///
    /// Returns an [invalid argument][Error::is_invalid_argument] error naming
    /// the endpoint if the configured endpoint and `path` do not form a valid
    /// URL.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_gax::client_config::ClientConfig;
    /// # use ibm_cloud_gax::request::HttpRequest;
    /// let config = ClientConfig::new();
    /// let request = HttpRequest::new(http::Method::GET, &config, "/images/r006-123")?;
    /// assert_eq!(
    ///     request.url.as_str(),
    ///     "https://us-south.iaas.cloud.ibm.com/v1/images/r006-123?version=2020-06-02&generation=2"
    /// );
    /// # ibm_cloud_gax::Result::<()>::Ok(())
    /// ```
    pub fn new(method: http::Method, config: &ClientConfig, path: &str) -> Result<Self> {
        let endpoint = config.endpoint().trim_end_matches('/');
        let mut url = url::Url::parse(&format!("{endpoint}{path}")).map_err(|e| {
            Error::invalid_argument(format!("the endpoint `{endpoint}` is not a valid URL: {e}"))
        })?;
        url.query_pairs_mut()
            .append_pair("version", config.version())
            .append_pair("generation", &config.generation().to_string());
        tracing::debug!(%method, %url, "bound request");
        Ok(Self {
            method,
            url,
            body: None,
        })
    }

    /// Sets the JSON payload.
    pub fn set_body<T: Into<serde_json::Value>>(mut self, v: T) -> Self {
        self.body = Some(v.into());
        self
    }
}

/// Implemented by the request models.
pub trait Binding {
    /// Describes the HTTP request for this model.
    fn http_request(&self, config: &ClientConfig) -> Result<HttpRequest>;
}

/// Serializes `message` as the request body, without the fields sent in the
/// request path.
///
/// Fields that are not set are not serialized, and thus not sent.
pub fn body_without<T>(message: &T, path_parameters: &[&str]) -> Result<serde_json::Value>
where
    T: serde::ser::Serialize,
{
    match serde_json::to_value(message).map_err(Error::ser)? {
        serde_json::Value::Object(mut map) => {
            for name in path_parameters {
                map.remove(*name);
            }
            Ok(serde_json::Value::Object(map))
        }
        v => Err(Error::ser(format!("expected a JSON object for the request body, got {v}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new() -> anyhow::Result<()> {
        let config = ClientConfig::new().set_endpoint("https://eu-de.iaas.cloud.ibm.com/v1/");
        let path = "/instance_groups/g1/load_balancer";
        let request = HttpRequest::new(http::Method::DELETE, &config, path)?;
        assert_eq!(request.method, http::Method::DELETE);
        assert_eq!(request.url.path(), "/v1/instance_groups/g1/load_balancer");
        assert_eq!(request.url.query(), Some("version=2020-06-02&generation=2"));
        assert!(request.body.is_none(), "{request:?}");
        Ok(())
    }

    #[test]
    fn new_keeps_encoded_path() -> anyhow::Result<()> {
        let path = format!("/images/{}", crate::path_parameter::enc("a/b c"));
        let request = HttpRequest::new(http::Method::GET, &ClientConfig::new(), &path)?;
        assert_eq!(request.url.path(), "/v1/images/a%2Fb%20c");
        Ok(())
    }

    #[test]
    fn new_bad_endpoint() {
        let config = ClientConfig::new().set_endpoint("not a url");
        let err = HttpRequest::new(http::Method::GET, &config, "/images/abc").unwrap_err();
        assert!(err.is_invalid_argument(), "{err:?}");
        assert!(!err.is_serialization(), "{err:?}");
        let msg = err.to_string();
        assert!(msg.contains("endpoint `not a url`"), "{msg}");
        assert!(!msg.contains("serialize"), "{msg}");
    }

    #[test]
    fn body() -> anyhow::Result<()> {
        let request = HttpRequest::new(http::Method::POST, &ClientConfig::new(), "/ipsec_policies")?
            .set_body(json!({"pfs": "group_14"}));
        assert_eq!(request.body, Some(json!({"pfs": "group_14"})));
        Ok(())
    }

    #[test]
    fn body_without_path_parameters() -> anyhow::Result<()> {
        let input = json!({"load_balancer_id": "lb1", "port": 443, "protocol": "https"});
        let got = body_without(&input, &["load_balancer_id"])?;
        assert_eq!(got, json!({"port": 443, "protocol": "https"}));
        Ok(())
    }

    #[test]
    fn body_without_not_an_object() {
        let err = body_without(&42, &[]).unwrap_err();
        assert!(err.is_serialization(), "{err:?}");
    }
}
