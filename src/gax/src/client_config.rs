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

/// The default endpoint for the VPC service, in the `us-south` region.
pub const DEFAULT_ENDPOINT: &str = "https://us-south.iaas.cloud.ibm.com/v1";

/// The API version date sent with every request.
pub const DEFAULT_VERSION: &str = "2020-06-02";

/// The infrastructure generation sent with every request.
pub const DEFAULT_GENERATION: i64 = 2;

/// Configure a client.
///
/// A client is the component that turns models into requests and sends them.
/// The default configuration should work for most applications. But some
/// applications may need to use a different region, or pin a different API
/// version.
///
/// # Example
/// ```
/// # use ibm_cloud_gax::client_config::ClientConfig;
/// let config = ClientConfig::new()
///     .set_endpoint("https://eu-de.iaas.cloud.ibm.com/v1")
///     .set_version("2021-01-12");
/// assert_eq!(config.endpoint(), "https://eu-de.iaas.cloud.ibm.com/v1");
/// assert_eq!(config.generation(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClientConfig {
    endpoint: Option<String>,
    version: Option<String>,
    generation: Option<i64>,
}

impl ClientConfig {
    /// Returns a default [ClientConfig].
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an endpoint that overrides the default endpoint for a service.
    pub fn set_endpoint<T: Into<String>>(mut self, v: T) -> Self {
        self.endpoint = Some(v.into());
        self
    }

    /// Sets the API version date, in `YYYY-MM-DD` format.
    pub fn set_version<T: Into<String>>(mut self, v: T) -> Self {
        self.version = Some(v.into());
        self
    }

    /// Sets the infrastructure generation.
    pub fn set_generation(mut self, v: i64) -> Self {
        self.generation = Some(v);
        self
    }

    /// The service endpoint, or the `us-south` endpoint if unset.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_gax::client_config::ClientConfig;
    /// let config = ClientConfig::new();
    /// assert_eq!(config.endpoint(), "https://us-south.iaas.cloud.ibm.com/v1");
    /// let config = config.set_endpoint("https://eu-de.iaas.cloud.ibm.com/v1");
    /// assert_eq!(config.endpoint(), "https://eu-de.iaas.cloud.ibm.com/v1");
    /// assert_eq!(config.generation(), 2);
    /// ```
    pub fn endpoint(&self) -> &str {
        self.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT)
    }

    /// The API version date sent in the `version` query parameter.
    pub fn version(&self) -> &str {
        self.version.as_deref().unwrap_or(DEFAULT_VERSION)
    }

    /// The infrastructure generation sent in the `generation` query parameter.
    pub fn generation(&self) -> i64 {
        self.generation.unwrap_or(DEFAULT_GENERATION)
    }
}
