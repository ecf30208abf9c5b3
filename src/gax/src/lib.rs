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

//! IBM Cloud API helpers.
//!
//! This crate contains a number of types and functions used in the
//! implementation of the IBM Cloud VPC client libraries for Rust. Most
//! applications only need [error] and [response], the other modules support
//! the generated models.

/// An alias of [std::result::Result] where the error is always [crate::error::Error].
///
/// This is the result type used by all the builders and request bindings.
pub type Result<T> = std::result::Result<T, crate::error::Error>;

/// The core error types used by generated models.
pub mod error;

/// Configuration for the request bindings.
pub mod client_config;

/// Implements common code for open enumerations.
#[doc(hidden)]
pub mod enums;

pub mod message;

/// Defines helpers to encode path parameters.
///
/// Path parameters in the VPC API are always mandatory and non-empty. The
/// builders check this when the model is built, this module only encodes
/// the values.
#[doc(hidden)]
pub mod path_parameter;

pub mod request;
pub mod response;

/// Presence checks shared by all the model builders.
#[doc(hidden)]
pub mod validator;
