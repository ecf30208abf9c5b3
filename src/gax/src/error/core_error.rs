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

use super::validation::ValidationError;
use std::error::Error as StdError;

type BoxError = Box<dyn StdError + Send + Sync>;

/// The core error returned by the client libraries.
///
/// Errors come from a small number of sources. A builder may be missing a
/// mandatory field, a caller may pass an absent item to a sequence setter,
/// a model may fail to serialize, a response payload may fail to
/// deserialize, or the transport collaborator may report a failure of its
/// own.
///
/// Most applications will just return the error or log it. Applications that
/// need to interrogate the error can use the predicates on this type, and the
/// [source][std::error::Error::source] for deeper information.
///
/// # Example
/// ```
/// use ibm_cloud_gax::error::Error;
/// use ibm_cloud_gax::error::validation::{FieldProblem, ValidationError};
/// match example_function() {
///     Err(e) if e.is_validation() => {
///         println!("fix the request: {e}");
///     },
///     Err(e) => { println!("some other error {e}"); },
///     Ok(_) => { println!("success, how boring"); },
/// }
///
/// fn example_function() -> Result<String, Error> {
///     // ... details omitted ...
///     # Err(Error::validation(ValidationError::new("Example", "id", FieldProblem::Unset)))
/// }
/// ```
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    source: Option<BoxError>,
}

impl Error {
    /// Creates an error representing a missing or empty mandatory field.
    ///
    /// # Example
    /// ```
    /// use ibm_cloud_gax::error::Error;
    /// use ibm_cloud_gax::error::validation::{FieldProblem, ValidationError};
    /// let error = Error::validation(ValidationError::new("Example", "id", FieldProblem::Empty));
    /// assert!(error.is_validation());
    /// assert_eq!(error.validation_details().map(|v| v.field_name), Some("id"));
    /// ```
    pub fn validation(source: ValidationError) -> Self {
        Self {
            kind: ErrorKind::Validation,
            source: Some(source.into()),
        }
    }

    /// A mandatory field was not set, or was set to an empty string, when the
    /// model was built.
    ///
    /// This is always a client-side generated error, detected before any
    /// request is prepared. Use [validation_details()][Error::validation_details] to find out
    /// which field caused the problem.
    ///
    /// # Troubleshooting
    ///
    /// Set the field named in the error before calling `build()`. Builders
    /// created with `new(...)` take all the mandatory fields as arguments,
    /// prefer them over `default()` when possible.
    pub fn is_validation(&self) -> bool {
        matches!(self.kind, ErrorKind::Validation)
    }

    /// The validation details, if this is a validation error.
    pub fn validation_details(&self) -> Option<&ValidationError> {
        self.source
            .as_ref()
            .and_then(|e| e.downcast_ref::<ValidationError>())
    }

    /// Creates an error representing an invalid argument to a builder or to
    /// the request bindings.
    ///
    /// # Example
    /// ```
    /// use ibm_cloud_gax::error::Error;
    /// let error = Error::invalid_argument("rules cannot be null");
    /// assert!(error.is_invalid_argument());
    /// ```
    pub fn invalid_argument<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::InvalidArgument,
            source: Some(source.into()),
        }
    }

    /// An argument passed to a builder or a binding was rejected.
    ///
    /// Builders return this error when adding an absent item (`None`) to a
    /// sequence field, the builder state is not modified in that case.
    /// Bindings return it when the configured endpoint is not a valid URL.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self.kind, ErrorKind::InvalidArgument)
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Creates an error representing a serialization problem.
    #[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
    pub fn ser<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Serialization,
            source: Some(source.into()),
        }
    }

    /// The request could not be serialized.
    ///
    /// This is always a client-side generated error, generated before the
    /// request is made. This error is never transient: the serialization is
    /// deterministic and will fail on future attempts with the same input.
    pub fn is_serialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Serialization)
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Creates an error representing a deserialization problem.
    #[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
    pub fn deser<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Deserialization,
            source: Some(source.into()),
        }
    }

    /// The response could not be deserialized.
    ///
    /// # Troubleshooting
    ///
    /// The models accept unknown fields and unknown enumeration values, so
    /// the most common cause is a payload that is not JSON at all, for
    /// example an HTML error page from a proxy. Less commonly, a payload for
    /// a request model is missing a mandatory field. The source is always a
    /// [serde_json::Error]. Its message names the model and the field, but
    /// [validation_details()][Error::validation_details] returns `None`.
    pub fn is_deserialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Deserialization)
    }

    /// Creates an error wrapping a failure reported by the transport.
    ///
    /// The transport collaborator owns HTTP invocation. Its errors are wrapped
    /// as-is, the original error is available via
    /// [source][std::error::Error::source].
    ///
    /// # Example
    /// ```
    /// use std::error::Error as _;
    /// use ibm_cloud_gax::error::Error;
    /// let error = Error::transport("connection reset");
    /// assert!(error.is_transport());
    /// assert!(error.source().is_some());
    /// ```
    pub fn transport<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Transport,
            source: Some(source.into()),
        }
    }

    /// The transport collaborator reported an error.
    pub fn is_transport(&self) -> bool {
        matches!(self.kind, ErrorKind::Transport)
    }

    /// Returns the inner error of type `T`, if any, searching the full
    /// [source][std::error::Error::source] chain.
    pub fn as_inner<T: StdError + Send + Sync + 'static>(&self) -> Option<&T> {
        let mut e = StdError::source(self);
        while let Some(current) = e {
            if let Some(inner) = current.downcast_ref::<T>() {
                return Some(inner);
            }
            e = current.source();
        }
        None
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.kind, &self.source) {
            (ErrorKind::Validation, Some(e)) => write!(f, "cannot build the model {e}"),
            (ErrorKind::InvalidArgument, Some(e)) => write!(f, "invalid argument {e}"),
            (ErrorKind::Serialization, Some(e)) => write!(f, "cannot serialize the request {e}"),
            (ErrorKind::Deserialization, Some(e)) => {
                write!(f, "cannot deserialize the response {e}")
            }
            (ErrorKind::Transport, Some(e)) => write!(f, "the transport reports an error: {e}"),
            (_, None) => unreachable!("no constructor allows this"),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn StdError + 'static))
    }
}

/// The type of error held by an [Error] instance.
#[derive(Debug)]
enum ErrorKind {
    Validation,
    InvalidArgument,
    Serialization,
    Deserialization,
    Transport,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::validation::FieldProblem;

    #[test]
    fn validation() {
        let source = ValidationError::new("CreateIpsecPolicyRequest", "pfs", FieldProblem::Unset);
        let error = Error::validation(source.clone());
        assert!(error.is_validation(), "{error:?}");
        assert!(!error.is_invalid_argument(), "{error:?}");
        assert!(!error.is_serialization(), "{error:?}");
        assert!(!error.is_deserialization(), "{error:?}");
        assert!(!error.is_transport(), "{error:?}");
        assert_eq!(error.validation_details(), Some(&source));
        assert!(error.to_string().contains("pfs"), "{error}");
        assert!(
            error.to_string().contains("CreateIpsecPolicyRequest"),
            "{error}"
        );
    }

    #[test]
    fn invalid_argument() {
        let error = Error::invalid_argument("rules cannot be null");
        assert!(error.is_invalid_argument(), "{error:?}");
        assert!(!error.is_validation(), "{error:?}");
        assert!(error.source().is_some(), "{error:?}");
        assert!(error.validation_details().is_none(), "{error:?}");
        assert!(
            error.to_string().contains("rules cannot be null"),
            "{error}"
        );
    }

    #[test]
    fn serialization() {
        let error = Error::ser("simulated problem");
        assert!(error.is_serialization(), "{error:?}");
        assert!(error.to_string().contains("simulated problem"), "{error}");
    }

    #[test]
    fn deserialization() {
        let source = serde_json::from_str::<i64>("not-a-number").unwrap_err();
        let error = Error::deser(source);
        assert!(error.is_deserialization(), "{error:?}");
        let got = error.as_inner::<serde_json::Error>();
        assert!(got.is_some(), "{error:?}");
    }

    #[test]
    fn transport() {
        #[derive(Debug, thiserror::Error)]
        #[error("connection reset by peer")]
        struct Reset;

        let error = Error::transport(Reset);
        assert!(error.is_transport(), "{error:?}");
        assert!(error.as_inner::<Reset>().is_some(), "{error:?}");
        assert!(error.to_string().contains("connection reset"), "{error}");
    }

    #[test]
    fn as_inner_searches_chain() {
        #[derive(Debug, thiserror::Error)]
        #[error("leaf")]
        struct Leaf;
        #[derive(Debug, thiserror::Error)]
        #[error("middle")]
        struct Middle(#[source] Leaf);

        let error = Error::transport(Middle(Leaf));
        assert!(error.as_inner::<Middle>().is_some(), "{error:?}");
        assert!(error.as_inner::<Leaf>().is_some(), "{error:?}");
        assert!(error.as_inner::<serde_json::Error>().is_none(), "{error:?}");
    }
}
