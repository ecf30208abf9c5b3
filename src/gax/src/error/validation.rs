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

/// A failure to build a model.
///
/// Each model declares a fixed list of mandatory fields. `build()` checks
/// them in declaration order and reports the first one that is missing. Only
/// one field is reported, even if several are missing.
#[derive(thiserror::Error, Clone, Debug, PartialEq)]
#[error("{message}: field `{field_name}` cannot be {problem}")]
pub struct ValidationError {
    /// The name of the model, as returned by [Message::typename].
    ///
    /// [Message::typename]: crate::message::Message::typename
    pub message: &'static str,
    /// The name of the mandatory field that failed the check.
    pub field_name: &'static str,
    /// Why the check failed.
    pub problem: FieldProblem,
}

/// Ways a mandatory field can fail validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum FieldProblem {
    /// The field was not set.
    Unset,
    /// The field was set to an empty string.
    ///
    /// Only fields used as path parameters reject empty values.
    Empty,
}

impl ValidationError {
    /// Creates an error for `field_name` in the model named `message`.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_gax::error::validation::{FieldProblem, ValidationError};
    /// let e = ValidationError::new("GetImageRequest", "id", FieldProblem::Empty);
    /// assert_eq!(e.to_string(), "GetImageRequest: field `id` cannot be empty");
    /// ```
    pub fn new(message: &'static str, field_name: &'static str, problem: FieldProblem) -> Self {
        Self {
            message,
            field_name,
            problem,
        }
    }
}

impl std::fmt::Display for FieldProblem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unset => f.write_str("null"),
            Self::Empty => f.write_str("empty"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fmt_unset() {
        let e = ValidationError::new(
            "LoadBalancerListenerPolicyPrototype",
            "priority",
            FieldProblem::Unset,
        );
        let fmt = e.to_string();
        assert!(fmt.contains("LoadBalancerListenerPolicyPrototype"), "{fmt}");
        assert!(fmt.contains("`priority`"), "{fmt}");
        assert!(fmt.contains("cannot be null"), "{fmt}");
        assert!(!fmt.contains("cannot be empty"), "{fmt}");
    }

    #[test]
    fn fmt_empty() {
        let e = ValidationError::new(
            "DeleteInstanceGroupLoadBalancerRequest",
            "instance_group_id",
            FieldProblem::Empty,
        );
        let fmt = e.to_string();
        assert!(fmt.contains("`instance_group_id`"), "{fmt}");
        assert!(fmt.contains("cannot be empty"), "{fmt}");
        assert!(!fmt.contains("cannot be null"), "{fmt}");
    }
}
