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

//! Presence checks used by the model builders.
//!
//! Every `build()` function runs its mandatory fields through these helpers,
//! in declaration order, and stops at the first failure.

use crate::Result;
use crate::error::Error;
use crate::error::validation::{FieldProblem, ValidationError};

/// Returns the value of a mandatory field, or an error if it is not set.
pub fn not_null<T>(message: &'static str, field_name: &'static str, value: Option<T>) -> Result<T> {
    value.ok_or_else(|| invalid(message, field_name, FieldProblem::Unset))
}

/// Returns the value of a mandatory string field, or an error if it is not
/// set or empty.
pub fn not_empty(
    message: &'static str,
    field_name: &'static str,
    value: Option<String>,
) -> Result<String> {
    match value {
        None => Err(invalid(message, field_name, FieldProblem::Unset)),
        Some(v) if v.is_empty() => Err(invalid(message, field_name, FieldProblem::Empty)),
        Some(v) => Ok(v),
    }
}

/// Returns the error used when a sequence setter receives an absent item.
pub fn null_item(field_name: &'static str) -> Error {
    tracing::debug!(field = field_name, "rejected absent item");
    Error::invalid_argument(format!("{field_name} cannot be null"))
}

fn invalid(message: &'static str, field_name: &'static str, problem: FieldProblem) -> Error {
    tracing::debug!(model = message, field = field_name, ?problem, "model validation failed");
    Error::validation(ValidationError::new(message, field_name, problem))
}
