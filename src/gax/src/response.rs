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

//! Response types.
//!
//! This module contains types related to VPC service responses. Notably it
//! contains the `Response` type itself. Typically you'll import this type.
//!
//! # Examples
//!
//! Decoding the payload received by a transport.
//!
//! ```
//! # use ibm_cloud_gax::response::Response;
//! #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
//! struct Resource {
//!     id: Option<String>,
//! }
//!
//! let payload = bytes::Bytes::from_static(br#"{"id": "r006-123"}"#);
//! let response = Response::<Resource>::from_json(http::HeaderMap::new(), payload)?;
//! assert_eq!(response.body().id.as_deref(), Some("r006-123"));
//! # ibm_cloud_gax::Result::<()>::Ok(())
//! ```
//!
//! Keeping the headers after the payload is consumed.
//!
//! ```
//! # use ibm_cloud_gax::response::Response;
//! let mut headers = http::HeaderMap::new();
//! headers.insert("x-request-id", http::HeaderValue::from_static("req-1"));
//! let payload = bytes::Bytes::from_static(br#"{"peer_cidrs": ["10.45.0.0/16"]}"#);
//! let response = Response::<serde_json::Value>::from_json(headers, payload)?;
//! let (parts, body) = response.into_parts();
//! assert!(parts.headers.contains_key("x-request-id"));
//! assert_eq!(body["peer_cidrs"][0], "10.45.0.0/16");
//! # ibm_cloud_gax::Result::<()>::Ok(())
//! ```

use crate::error::Error;

/// Represents a VPC service response.
///
/// A response contains the decoded payload and the headers returned by the
/// service.
#[derive(Clone, Debug)]
pub struct Response<T> {
    parts: Parts,
    body: T,
}

impl<T> Response<T> {
    /// Creates a response from the body, with empty headers.
    pub fn from(body: T) -> Self {
        Self {
            body,
            parts: Parts::default(),
        }
    }

    /// Creates a response from the given parts.
    pub fn from_parts(parts: Parts, body: T) -> Self {
        Self { parts, body }
    }

    /// Decodes a JSON payload into a response.
    ///
    /// Unknown fields in the payload are ignored. Payloads that are not
    /// valid JSON, or that do not match the shape of `T`, return an error
    /// where [is_deserialization()][Error::is_deserialization] is true.
    pub fn from_json(headers: http::HeaderMap, payload: bytes::Bytes) -> crate::Result<Self>
    where
        T: serde::de::DeserializeOwned,
    {
        let body = serde_json::from_slice::<T>(&payload).map_err(|e| {
            tracing::debug!(error = %e, "cannot decode response payload");
            Error::deser(e)
        })?;
        Ok(Self::from_parts(Parts::new().set_headers(headers), body))
    }

    /// Returns the headers associated with this response.
    pub fn headers(&self) -> &http::HeaderMap<http::HeaderValue> {
        &self.parts.headers
    }

    /// Returns the body associated with this response.
    pub fn body(&self) -> &T {
        &self.body
    }

    /// Decomposes the response into its parts and body.
    pub fn into_parts(self) -> (Parts, T) {
        (self.parts, self.body)
    }

    /// Extracts the body from the response.
    pub fn into_body(self) -> T {
        self.body
    }
}

/// Component parts of a response.
#[derive(Clone, Debug, Default)]
#[non_exhaustive]
pub struct Parts {
    /// The HTTP headers, such as `X-Request-Id`.
    pub headers: http::HeaderMap<http::HeaderValue>,
}

impl Parts {
    /// Create a new instance.
    pub fn new() -> Self {
        Parts::default()
    }

    /// Set the headers.
    pub fn set_headers<V>(mut self, v: V) -> Self
    where
        V: Into<http::HeaderMap>,
    {
        self.headers = v.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
    struct Resource {
        id: Option<String>,
        name: Option<String>,
    }

    #[test]
    fn response_from() {
        let response = Response::from("abc123".to_string());
        assert!(response.headers().is_empty());
        assert_eq!(response.body().as_str(), "abc123");

        let body = response.into_body();
        assert_eq!(body.as_str(), "abc123");
    }

    #[test]
    fn response_from_parts() {
        let mut headers = http::HeaderMap::new();
        headers.insert(
            http::header::CONTENT_TYPE,
            http::HeaderValue::from_static("application/json"),
        );
        let parts = Parts::new().set_headers(headers.clone());

        let response = Response::from_parts(parts, "abc123".to_string());
        assert_eq!(response.body().as_str(), "abc123");
        assert_eq!(response.headers(), &headers);

        let (parts, body) = response.into_parts();
        assert_eq!(body.as_str(), "abc123");
        assert_eq!(parts.headers, headers);
    }

    #[test]
    fn from_json() -> anyhow::Result<()> {
        let mut headers = http::HeaderMap::new();
        headers.insert("x-request-id", http::HeaderValue::from_static("req-1"));
        let payload = bytes::Bytes::from_static(
            br#"{"id": "r006-123", "name": "my-image", "unknown_field": true}"#,
        );
        let response = Response::<Resource>::from_json(headers.clone(), payload)?;
        assert_eq!(response.headers(), &headers);
        assert_eq!(
            response.body(),
            &Resource {
                id: Some("r006-123".into()),
                name: Some("my-image".into()),
            }
        );
        Ok(())
    }

    #[test]
    fn from_json_malformed() {
        let payload = bytes::Bytes::from_static(b"<html>bad gateway</html>");
        let err = Response::<Resource>::from_json(http::HeaderMap::new(), payload).unwrap_err();
        assert!(err.is_deserialization(), "{err:?}");
        assert!(err.as_inner::<serde_json::Error>().is_some(), "{err:?}");
    }
}
