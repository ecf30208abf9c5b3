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

//! Encoding of path parameters.
//!
//! Parameters used to build the request path (aka 'path parameters') are
//! mandatory and non-empty, the model builders guarantee this. Their values
//! are chosen by the application and may contain characters with a special
//! meaning in a URL path, so they are percent encoded before they are
//! inserted in the path.

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

/// The set of characters that are percent encoded in a path segment.
///
/// This is the set of characters that are not "unreserved" in RFC 3986,
/// section 2.3.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'!')
    .add(b'"')
    .add(b'#')
    .add(b'$')
    .add(b'%')
    .add(b'&')
    .add(b'\'')
    .add(b'(')
    .add(b')')
    .add(b'*')
    .add(b'+')
    .add(b',')
    .add(b'/')
    .add(b':')
    .add(b';')
    .add(b'<')
    .add(b'=')
    .add(b'>')
    .add(b'?')
    .add(b'@')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Percent encode a path parameter so it can be used as a single segment.
pub fn enc(value: &str) -> String {
    utf8_percent_encode(value, PATH_SEGMENT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("r006-a4841334", "r006-a4841334"; "unreserved")]
    #[test_case("my rule", "my%20rule"; "space")]
    #[test_case("a/b", "a%2Fb"; "slash")]
    #[test_case("a?b#c", "a%3Fb%23c"; "query and fragment")]
    #[test_case("100%", "100%25"; "percent")]
    #[test_case("a.b_c~d", "a.b_c~d"; "marks")]
    #[test_case("ñ", "%C3%B1"; "utf8")]
    fn encode(input: &str, want: &str) {
        assert_eq!(enc(input), want);
    }
}
