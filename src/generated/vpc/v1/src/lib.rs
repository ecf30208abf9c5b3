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

//! IBM Cloud Client Libraries for Rust - VPC API
//!
//! This crate contains the models for the [VPC API], the request and response
//! shapes for network ACLs, load balancers, VPN gateways, volumes, images,
//! flow log collectors, and instance groups.
//!
//! The models sent to the service are created with a builder. The builder
//! checks the mandatory fields once, when the model is built:
//!
//! ```
//! # use ibm_cloud_vpc_v1::model::CreateIpsecPolicyRequest;
//! # use ibm_cloud_vpc_v1::model::create_ipsec_policy_request::{
//! #     AuthenticationAlgorithm, EncryptionAlgorithm, Pfs,
//! # };
//! let request = CreateIpsecPolicyRequest::builder()
//!     .set_authentication_algorithm(AuthenticationAlgorithm::Sha256)
//!     .set_encryption_algorithm(EncryptionAlgorithm::Aes256)
//!     .set_name("my-ipsec-policy")
//!     .build();
//! let err = request.unwrap_err();
//! assert_eq!(err.validation_details().map(|v| v.field_name), Some("pfs"));
//! ```
//!
//! This crate does not send requests. Each request model implements
//! [Binding][gax::request::Binding], which describes the HTTP request. The
//! application hands that description to the transport of its choice, and
//! decodes the payload with [Response::from_json][gax::response::Response::from_json].
//!
//! [VPC API]: https://cloud.ibm.com/apidocs/vpc

pub use gax::Result;
pub use gax::error::Error;

/// The messages and enums that are part of this client library.
pub mod model;

mod binding;
