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

mod common;
pub use common::*;

mod flow_logs;
pub use flow_logs::*;

mod images;
pub use images::*;

mod instance_groups;
pub use instance_groups::*;

mod load_balancers;
pub use load_balancers::*;

mod network_acls;
pub use network_acls::*;

mod volumes;
pub use volumes::*;

mod vpn_gateways;
pub use vpn_gateways::*;
