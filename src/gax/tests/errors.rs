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

use ibm_cloud_gax::error::Error;
use ibm_cloud_gax::error::validation::{FieldProblem, ValidationError};
use std::error::Error as _;

static_assertions::assert_impl_all!(Error: Send, Sync, std::error::Error);
static_assertions::assert_impl_all!(ValidationError: Send, Sync, Clone, std::error::Error);

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct LeafError {}

    impl LeafError {
        fn hey(&self) -> &'static str {
            "hey"
        }
    }

    impl std::fmt::Display for LeafError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "other error")
        }
    }

    impl std::error::Error for LeafError {}

    #[derive(Debug)]
    struct MiddleError {
        pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
    }

    impl std::fmt::Display for MiddleError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "middle error")
        }
    }

    impl std::error::Error for MiddleError {
        fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
            match &self.source {
                Some(e) => Some(e.as_ref()),
                None => None,
            }
        }
    }

    #[test]
    fn downcast() -> anyhow::Result<()> {
        let leaf_err = LeafError::default();
        let middle_err = MiddleError {
            source: Some(Box::new(leaf_err)),
        };
        let root_err = Error::transport(middle_err);
        let msg = root_err.as_inner::<LeafError>().map(LeafError::hey);
        assert_eq!(msg, Some("hey"));

        let root_err = Error::transport(MiddleError { source: None });
        let inner_err = root_err.as_inner::<LeafError>();
        assert!(inner_err.is_none());
        Ok(())
    }

    #[test]
    fn validation_source() {
        let details = ValidationError::new(
            "ListVpnGatewayConnectionPeerCidrsRequest",
            "vpn_gateway_id",
            FieldProblem::Empty,
        );
        let error = Error::validation(details.clone());
        let source = error
            .source()
            .and_then(|e| e.downcast_ref::<ValidationError>());
        assert_eq!(source, Some(&details));
        assert_eq!(error.as_inner::<ValidationError>(), Some(&details));
    }

    #[test]
    fn anyhow_interop() {
        fn build() -> anyhow::Result<()> {
            Err(Error::invalid_argument("policies cannot be null").into())
        }
        let err = build().unwrap_err();
        let inner = err.downcast_ref::<Error>();
        assert!(inner.is_some_and(Error::is_invalid_argument), "{err:?}");
    }
}
