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

//! Verify the library emits `debug` events, and nothing at higher levels.

use ibm_cloud_gax::client_config::ClientConfig;
use ibm_cloud_gax::request::HttpRequest;
use ibm_cloud_gax::validator;
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl Capture {
    fn contents(&self) -> String {
        let buffer = self.0.lock().expect("capture mutex is not poisoned");
        String::from_utf8_lossy(&buffer).into_owned()
    }
}

impl std::io::Write for Capture {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let mut buffer = self.0.lock().expect("capture mutex is not poisoned");
        buffer.extend_from_slice(buf);
        Ok(buf.len())
    }
    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

fn capture<F: FnOnce()>(level: tracing::Level, f: F) -> String {
    let capture = Capture::default();
    let writer = capture.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_max_level(level)
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    capture.contents()
}

#[test]
fn validation_failure_is_logged() {
    let logs = capture(tracing::Level::DEBUG, || {
        let got = validator::not_null::<i64>("CreateLoadBalancerListenerRequest", "port", None);
        assert!(got.is_err(), "{got:?}");
    });
    assert!(logs.contains("model validation failed"), "{logs}");
    assert!(logs.contains("port"), "{logs}");
    assert!(logs.contains("CreateLoadBalancerListenerRequest"), "{logs}");
}

#[test]
fn binding_is_logged() -> anyhow::Result<()> {
    let mut request = None;
    let logs = capture(tracing::Level::DEBUG, || {
        request = Some(HttpRequest::new(
            http::Method::GET,
            &ClientConfig::new(),
            "/images/r006-123",
        ));
    });
    let request = request.expect("closure always runs")?;
    assert!(logs.contains("bound request"), "{logs}");
    assert!(logs.contains(request.url.as_str()), "{logs}");
    Ok(())
}

#[test]
fn quiet_at_info() {
    let logs = capture(tracing::Level::INFO, || {
        let _ = validator::not_empty("GetImageRequest", "id", Some(String::new()));
        let _ = validator::null_item("rules");
        let _ = HttpRequest::new(http::Method::GET, &ClientConfig::new(), "/images/abc");
    });
    assert!(logs.is_empty(), "{logs}");
}
