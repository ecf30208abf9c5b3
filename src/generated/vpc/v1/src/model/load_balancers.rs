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

use gax::message::{Message, RequiredField};
use gax::validator::{not_empty, not_null};

/// Identifies a load balancer pool by its unique identifier or by its URL.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
#[non_exhaustive]
pub enum LoadBalancerPoolIdentity {
    ById(LoadBalancerPoolIdentityById),
    ByHref(LoadBalancerPoolIdentityByHref),
}

impl Message for LoadBalancerPoolIdentity {
    fn typename() -> &'static str {
        "LoadBalancerPoolIdentity"
    }
}

impl std::convert::From<LoadBalancerPoolIdentityById> for LoadBalancerPoolIdentity {
    fn from(value: LoadBalancerPoolIdentityById) -> Self {
        Self::ById(value)
    }
}

impl std::convert::From<LoadBalancerPoolIdentityByHref> for LoadBalancerPoolIdentity {
    fn from(value: LoadBalancerPoolIdentityByHref) -> Self {
        Self::ByHref(value)
    }
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "LoadBalancerPoolIdentityByIdBuilder")]
#[non_exhaustive]
pub struct LoadBalancerPoolIdentityById {
    id: String,
}

impl LoadBalancerPoolIdentityById {
    /// Returns an empty builder.
    pub fn builder() -> LoadBalancerPoolIdentityByIdBuilder {
        LoadBalancerPoolIdentityByIdBuilder::default()
    }

    /// Returns a builder initialized with the values in this model.
    pub fn to_builder(&self) -> LoadBalancerPoolIdentityByIdBuilder {
        LoadBalancerPoolIdentityByIdBuilder {
            id: Some(self.id.clone()),
        }
    }

    /// The unique identifier for this load balancer pool.
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl Message for LoadBalancerPoolIdentityById {
    fn typename() -> &'static str {
        "LoadBalancerPoolIdentityByID"
    }
}

impl gax::message::Validated for LoadBalancerPoolIdentityById {
    type Builder = LoadBalancerPoolIdentityByIdBuilder;
    const REQUIRED_FIELDS: &'static [RequiredField] = &[RequiredField::not_null("id")];
    fn to_builder(&self) -> Self::Builder {
        LoadBalancerPoolIdentityById::to_builder(self)
    }
}

impl std::convert::TryFrom<LoadBalancerPoolIdentityByIdBuilder> for LoadBalancerPoolIdentityById {
    type Error = gax::error::Error;
    fn try_from(value: LoadBalancerPoolIdentityByIdBuilder) -> gax::Result<Self> {
        value.build()
    }
}

/// Builder for [LoadBalancerPoolIdentityById].
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct LoadBalancerPoolIdentityByIdBuilder {
    id: Option<String>,
}

impl LoadBalancerPoolIdentityByIdBuilder {
    /// Creates a builder with all the mandatory fields.
    pub fn new(id: impl Into<String>) -> Self {
        Self::default().set_id(id)
    }

    /// Sets the value of [id][LoadBalancerPoolIdentityById::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = Some(v.into());
        self
    }

    /// Validates the mandatory fields and creates a [LoadBalancerPoolIdentityById].
    pub fn build(self) -> gax::Result<LoadBalancerPoolIdentityById> {
        let name = LoadBalancerPoolIdentityById::typename();
        Ok(LoadBalancerPoolIdentityById {
            id: not_null(name, "id", self.id)?,
        })
    }
}

impl gax::message::MessageBuilder for LoadBalancerPoolIdentityByIdBuilder {
    type Target = LoadBalancerPoolIdentityById;
    fn build(self) -> gax::Result<Self::Target> {
        LoadBalancerPoolIdentityByIdBuilder::build(self)
    }
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "LoadBalancerPoolIdentityByHrefBuilder")]
#[non_exhaustive]
pub struct LoadBalancerPoolIdentityByHref {
    href: String,
}

impl LoadBalancerPoolIdentityByHref {
    /// Returns an empty builder.
    pub fn builder() -> LoadBalancerPoolIdentityByHrefBuilder {
        LoadBalancerPoolIdentityByHrefBuilder::default()
    }

    /// Returns a builder initialized with the values in this model.
    pub fn to_builder(&self) -> LoadBalancerPoolIdentityByHrefBuilder {
        LoadBalancerPoolIdentityByHrefBuilder {
            href: Some(self.href.clone()),
        }
    }

    /// The URL for this load balancer pool.
    pub fn href(&self) -> &str {
        &self.href
    }
}

impl Message for LoadBalancerPoolIdentityByHref {
    fn typename() -> &'static str {
        "LoadBalancerPoolIdentityByHref"
    }
}

impl gax::message::Validated for LoadBalancerPoolIdentityByHref {
    type Builder = LoadBalancerPoolIdentityByHrefBuilder;
    const REQUIRED_FIELDS: &'static [RequiredField] = &[RequiredField::not_null("href")];
    fn to_builder(&self) -> Self::Builder {
        LoadBalancerPoolIdentityByHref::to_builder(self)
    }
}

impl std::convert::TryFrom<LoadBalancerPoolIdentityByHrefBuilder>
    for LoadBalancerPoolIdentityByHref
{
    type Error = gax::error::Error;
    fn try_from(value: LoadBalancerPoolIdentityByHrefBuilder) -> gax::Result<Self> {
        value.build()
    }
}

/// Builder for [LoadBalancerPoolIdentityByHref].
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct LoadBalancerPoolIdentityByHrefBuilder {
    href: Option<String>,
}

impl LoadBalancerPoolIdentityByHrefBuilder {
    /// Creates a builder with all the mandatory fields.
    pub fn new(href: impl Into<String>) -> Self {
        Self::default().set_href(href)
    }

    /// Sets the value of [href][LoadBalancerPoolIdentityByHref::href].
    pub fn set_href<T: Into<String>>(mut self, v: T) -> Self {
        self.href = Some(v.into());
        self
    }

    /// Validates the mandatory fields and creates a [LoadBalancerPoolIdentityByHref].
    pub fn build(self) -> gax::Result<LoadBalancerPoolIdentityByHref> {
        let name = LoadBalancerPoolIdentityByHref::typename();
        Ok(LoadBalancerPoolIdentityByHref {
            href: not_null(name, "href", self.href)?,
        })
    }
}

impl gax::message::MessageBuilder for LoadBalancerPoolIdentityByHrefBuilder {
    type Target = LoadBalancerPoolIdentityByHref;
    fn build(self) -> gax::Result<Self::Target> {
        LoadBalancerPoolIdentityByHrefBuilder::build(self)
    }
}

/// The redirect target of a policy with the `redirect` action.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "LoadBalancerListenerPolicyRedirectUrlPrototypeBuilder")]
#[non_exhaustive]
pub struct LoadBalancerListenerPolicyRedirectUrlPrototype {
    http_status_code: i64,
    url: String,
}

impl LoadBalancerListenerPolicyRedirectUrlPrototype {
    /// Returns an empty builder.
    pub fn builder() -> LoadBalancerListenerPolicyRedirectUrlPrototypeBuilder {
        LoadBalancerListenerPolicyRedirectUrlPrototypeBuilder::default()
    }

    /// Returns a builder initialized with the values in this model.
    pub fn to_builder(&self) -> LoadBalancerListenerPolicyRedirectUrlPrototypeBuilder {
        LoadBalancerListenerPolicyRedirectUrlPrototypeBuilder {
            http_status_code: Some(self.http_status_code),
            url: Some(self.url.clone()),
        }
    }

    /// The HTTP status code for this redirect, for example `301`.
    pub fn http_status_code(&self) -> i64 {
        self.http_status_code
    }

    /// The redirect target URL.
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Message for LoadBalancerListenerPolicyRedirectUrlPrototype {
    fn typename() -> &'static str {
        "LoadBalancerListenerPolicyRedirectURLPrototype"
    }
}

impl gax::message::Validated for LoadBalancerListenerPolicyRedirectUrlPrototype {
    type Builder = LoadBalancerListenerPolicyRedirectUrlPrototypeBuilder;
    const REQUIRED_FIELDS: &'static [RequiredField] = &[
        RequiredField::not_null("http_status_code"),
        RequiredField::not_null("url"),
    ];
    fn to_builder(&self) -> Self::Builder {
        LoadBalancerListenerPolicyRedirectUrlPrototype::to_builder(self)
    }
}

impl std::convert::TryFrom<LoadBalancerListenerPolicyRedirectUrlPrototypeBuilder>
    for LoadBalancerListenerPolicyRedirectUrlPrototype
{
    type Error = gax::error::Error;
    fn try_from(value: LoadBalancerListenerPolicyRedirectUrlPrototypeBuilder) -> gax::Result<Self> {
        value.build()
    }
}

/// Builder for [LoadBalancerListenerPolicyRedirectUrlPrototype].
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct LoadBalancerListenerPolicyRedirectUrlPrototypeBuilder {
    http_status_code: Option<i64>,
    url: Option<String>,
}

impl LoadBalancerListenerPolicyRedirectUrlPrototypeBuilder {
    /// Creates a builder with all the mandatory fields.
    pub fn new(http_status_code: i64, url: impl Into<String>) -> Self {
        Self::default()
            .set_http_status_code(http_status_code)
            .set_url(url)
    }

    /// Sets the value of [http_status_code][LoadBalancerListenerPolicyRedirectUrlPrototype::http_status_code].
    pub fn set_http_status_code(mut self, v: i64) -> Self {
        self.http_status_code = Some(v);
        self
    }

    /// Sets the value of [url][LoadBalancerListenerPolicyRedirectUrlPrototype::url].
    pub fn set_url<T: Into<String>>(mut self, v: T) -> Self {
        self.url = Some(v.into());
        self
    }

    /// Validates the mandatory fields and creates a [LoadBalancerListenerPolicyRedirectUrlPrototype].
    pub fn build(self) -> gax::Result<LoadBalancerListenerPolicyRedirectUrlPrototype> {
        let name = LoadBalancerListenerPolicyRedirectUrlPrototype::typename();
        Ok(LoadBalancerListenerPolicyRedirectUrlPrototype {
            http_status_code: not_null(name, "http_status_code", self.http_status_code)?,
            url: not_null(name, "url", self.url)?,
        })
    }
}

impl gax::message::MessageBuilder for LoadBalancerListenerPolicyRedirectUrlPrototypeBuilder {
    type Target = LoadBalancerListenerPolicyRedirectUrlPrototype;
    fn build(self) -> gax::Result<Self::Target> {
        LoadBalancerListenerPolicyRedirectUrlPrototypeBuilder::build(self)
    }
}

/// The target of a load balancer listener policy.
///
/// Policies with the `forward` action use a pool, policies with the `redirect`
/// action use a redirect URL. Policies with the `reject` action have no target.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
#[non_exhaustive]
pub enum LoadBalancerListenerPolicyPrototypeTarget {
    Pool(LoadBalancerPoolIdentity),
    RedirectUrl(LoadBalancerListenerPolicyRedirectUrlPrototype),
}

impl Message for LoadBalancerListenerPolicyPrototypeTarget {
    fn typename() -> &'static str {
        "LoadBalancerListenerPolicyPrototypeTarget"
    }
}

impl std::convert::From<LoadBalancerPoolIdentity> for LoadBalancerListenerPolicyPrototypeTarget {
    fn from(value: LoadBalancerPoolIdentity) -> Self {
        Self::Pool(value)
    }
}

impl std::convert::From<LoadBalancerListenerPolicyRedirectUrlPrototype>
    for LoadBalancerListenerPolicyPrototypeTarget
{
    fn from(value: LoadBalancerListenerPolicyRedirectUrlPrototype) -> Self {
        Self::RedirectUrl(value)
    }
}

impl std::convert::From<LoadBalancerPoolIdentityById>
    for LoadBalancerListenerPolicyPrototypeTarget
{
    fn from(value: LoadBalancerPoolIdentityById) -> Self {
        Self::Pool(value.into())
    }
}

impl std::convert::From<LoadBalancerPoolIdentityByHref>
    for LoadBalancerListenerPolicyPrototypeTarget
{
    fn from(value: LoadBalancerPoolIdentityByHref) -> Self {
        Self::Pool(value.into())
    }
}

/// A rule to create with a load balancer listener policy.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "LoadBalancerListenerPolicyRulePrototypeBuilder")]
#[non_exhaustive]
pub struct LoadBalancerListenerPolicyRulePrototype {
    condition: load_balancer_listener_policy_rule_prototype::Condition,
    field: Option<String>,
    r#type: load_balancer_listener_policy_rule_prototype::Type,
    value: String,
}

impl LoadBalancerListenerPolicyRulePrototype {
    /// Returns an empty builder.
    pub fn builder() -> LoadBalancerListenerPolicyRulePrototypeBuilder {
        LoadBalancerListenerPolicyRulePrototypeBuilder::default()
    }

    /// Returns a builder initialized with the values in this model.
    pub fn to_builder(&self) -> LoadBalancerListenerPolicyRulePrototypeBuilder {
        LoadBalancerListenerPolicyRulePrototypeBuilder {
            condition: Some(self.condition.clone()),
            field: self.field.clone(),
            r#type: Some(self.r#type.clone()),
            value: Some(self.value.clone()),
        }
    }

    /// The condition of the rule.
    pub fn condition(&self) -> &load_balancer_listener_policy_rule_prototype::Condition {
        &self.condition
    }

    /// The HTTP header field to match.
    ///
    /// Only used with the `header` rule type.
    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    /// The type of the rule.
    pub fn r#type(&self) -> &load_balancer_listener_policy_rule_prototype::Type {
        &self.r#type
    }

    /// The value to match.
    ///
    /// With the `matches_regex` condition this is a regular expression.
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl Message for LoadBalancerListenerPolicyRulePrototype {
    fn typename() -> &'static str {
        "LoadBalancerListenerPolicyRulePrototype"
    }
}

impl gax::message::Validated for LoadBalancerListenerPolicyRulePrototype {
    type Builder = LoadBalancerListenerPolicyRulePrototypeBuilder;
    const REQUIRED_FIELDS: &'static [RequiredField] = &[
        RequiredField::not_null("condition"),
        RequiredField::not_null("type"),
        RequiredField::not_null("value"),
    ];
    fn to_builder(&self) -> Self::Builder {
        LoadBalancerListenerPolicyRulePrototype::to_builder(self)
    }
}

impl std::convert::TryFrom<LoadBalancerListenerPolicyRulePrototypeBuilder>
    for LoadBalancerListenerPolicyRulePrototype
{
    type Error = gax::error::Error;
    fn try_from(value: LoadBalancerListenerPolicyRulePrototypeBuilder) -> gax::Result<Self> {
        value.build()
    }
}

/// Builder for [LoadBalancerListenerPolicyRulePrototype].
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct LoadBalancerListenerPolicyRulePrototypeBuilder {
    condition: Option<load_balancer_listener_policy_rule_prototype::Condition>,
    field: Option<String>,
    r#type: Option<load_balancer_listener_policy_rule_prototype::Type>,
    value: Option<String>,
}

impl LoadBalancerListenerPolicyRulePrototypeBuilder {
    /// Creates a builder with all the mandatory fields.
    pub fn new(
        condition: impl Into<load_balancer_listener_policy_rule_prototype::Condition>,
        r#type: impl Into<load_balancer_listener_policy_rule_prototype::Type>,
        value: impl Into<String>,
    ) -> Self {
        Self::default()
            .set_condition(condition)
            .set_type(r#type)
            .set_value(value)
    }

    /// Sets the value of [condition][LoadBalancerListenerPolicyRulePrototype::condition].
    pub fn set_condition<T: Into<load_balancer_listener_policy_rule_prototype::Condition>>(
        mut self,
        v: T,
    ) -> Self {
        self.condition = Some(v.into());
        self
    }

    /// Sets the value of [field][LoadBalancerListenerPolicyRulePrototype::field].
    pub fn set_field<T: Into<String>>(mut self, v: T) -> Self {
        self.field = Some(v.into());
        self
    }

    /// Sets the value of [type][LoadBalancerListenerPolicyRulePrototype::r#type].
    pub fn set_type<T: Into<load_balancer_listener_policy_rule_prototype::Type>>(
        mut self,
        v: T,
    ) -> Self {
        self.r#type = Some(v.into());
        self
    }

    /// Sets the value of [value][LoadBalancerListenerPolicyRulePrototype::value].
    pub fn set_value<T: Into<String>>(mut self, v: T) -> Self {
        self.value = Some(v.into());
        self
    }

    /// Validates the mandatory fields and creates a [LoadBalancerListenerPolicyRulePrototype].
    pub fn build(self) -> gax::Result<LoadBalancerListenerPolicyRulePrototype> {
        let name = LoadBalancerListenerPolicyRulePrototype::typename();
        Ok(LoadBalancerListenerPolicyRulePrototype {
            condition: not_null(name, "condition", self.condition)?,
            field: self.field,
            r#type: not_null(name, "type", self.r#type)?,
            value: not_null(name, "value", self.value)?,
        })
    }
}

impl gax::message::MessageBuilder for LoadBalancerListenerPolicyRulePrototypeBuilder {
    type Target = LoadBalancerListenerPolicyRulePrototype;
    fn build(self) -> gax::Result<Self::Target> {
        LoadBalancerListenerPolicyRulePrototypeBuilder::build(self)
    }
}

/// Defines additional types related to [LoadBalancerListenerPolicyRulePrototype].
pub mod load_balancer_listener_policy_rule_prototype {
    #[allow(unused_imports)]
    use super::*;

    /// The condition of the rule.
    ///
    /// # Working with unknown values
    ///
    /// This enum is defined as `#[non_exhaustive]` because the service may add
    /// new values. Applications may also send values unknown to this library,
    /// use `Condition::from()` with the value and it is sent unchanged.
    #[derive(Clone, Debug, PartialEq)]
    #[non_exhaustive]
    pub enum Condition {
        Contains,
        Equals,
        /// The value is a regular expression.
        MatchesRegex,
        /// If set, the enum was initialized with an unknown value.
        ///
        /// Applications can examine the value using [Condition::name].
        UnknownValue(gax::enums::UnknownEnumValue),
    }

    impl Condition {
        /// Gets the enum value as a string.
        pub fn name(&self) -> &str {
            match self {
                Self::Contains => "contains",
                Self::Equals => "equals",
                Self::MatchesRegex => "matches_regex",
                Self::UnknownValue(u) => u.name(),
            }
        }
    }

    impl std::fmt::Display for Condition {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.name())
        }
    }

    impl std::convert::From<&str> for Condition {
        fn from(value: &str) -> Self {
            match value {
                "contains" => Self::Contains,
                "equals" => Self::Equals,
                "matches_regex" => Self::MatchesRegex,
                _ => Self::UnknownValue(gax::enums::UnknownEnumValue::new(value)),
            }
        }
    }

    impl std::convert::From<String> for Condition {
        fn from(value: String) -> Self {
            Self::from(value.as_str())
        }
    }

    impl serde::ser::Serialize for Condition {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> serde::de::Deserialize<'de> for Condition {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            deserializer.deserialize_str(gax::enums::EnumVisitor::<Self>::new(
                "LoadBalancerListenerPolicyRulePrototype.condition",
            ))
        }
    }

    /// The part of the request matched by the rule.
    ///
    /// # Working with unknown values
    ///
    /// This enum is defined as `#[non_exhaustive]` because the service may add
    /// new values. Applications may also send values unknown to this library,
    /// use `Type::from()` with the value and it is sent unchanged.
    #[derive(Clone, Debug, PartialEq)]
    #[non_exhaustive]
    pub enum Type {
        /// Match an HTTP header, named by the rule `field`.
        Header,
        Hostname,
        Path,
        /// If set, the enum was initialized with an unknown value.
        ///
        /// Applications can examine the value using [Type::name].
        UnknownValue(gax::enums::UnknownEnumValue),
    }

    impl Type {
        /// Gets the enum value as a string.
        pub fn name(&self) -> &str {
            match self {
                Self::Header => "header",
                Self::Hostname => "hostname",
                Self::Path => "path",
                Self::UnknownValue(u) => u.name(),
            }
        }
    }

    impl std::fmt::Display for Type {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.name())
        }
    }

    impl std::convert::From<&str> for Type {
        fn from(value: &str) -> Self {
            match value {
                "header" => Self::Header,
                "hostname" => Self::Hostname,
                "path" => Self::Path,
                _ => Self::UnknownValue(gax::enums::UnknownEnumValue::new(value)),
            }
        }
    }

    impl std::convert::From<String> for Type {
        fn from(value: String) -> Self {
            Self::from(value.as_str())
        }
    }

    impl serde::ser::Serialize for Type {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> serde::de::Deserialize<'de> for Type {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            deserializer.deserialize_str(gax::enums::EnumVisitor::<Self>::new(
                "LoadBalancerListenerPolicyRulePrototype.type",
            ))
        }
    }
}

/// A policy to create with a load balancer listener.
///
/// Policies are evaluated in ascending `priority` order.
///
/// # Example
/// ```
/// # use ibm_cloud_vpc_v1::model::{
/// #     LoadBalancerListenerPolicyPrototypeBuilder, LoadBalancerListenerPolicyRulePrototypeBuilder,
/// # };
/// use ibm_cloud_vpc_v1::model::load_balancer_listener_policy_prototype::Action;
/// use ibm_cloud_vpc_v1::model::load_balancer_listener_policy_rule_prototype::{Condition, Type};
/// let rule =
///     LoadBalancerListenerPolicyRulePrototypeBuilder::new(Condition::Contains, Type::Header, "x")
///         .set_field("MY-APP-HEADER")
///         .build()?;
/// let mut builder = LoadBalancerListenerPolicyPrototypeBuilder::new(5, Action::Forward);
/// builder.add_rules(rule)?;
/// let policy = builder.build()?;
/// assert_eq!(policy.priority(), 5);
/// assert_eq!(policy.rules().map(|r| r.len()), Some(1));
/// # ibm_cloud_vpc_v1::Result::<()>::Ok(())
/// ```
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "LoadBalancerListenerPolicyPrototypeBuilder")]
#[non_exhaustive]
pub struct LoadBalancerListenerPolicyPrototype {
    name: Option<String>,
    priority: i64,
    action: load_balancer_listener_policy_prototype::Action,
    rules: Option<Vec<LoadBalancerListenerPolicyRulePrototype>>,
    target: Option<LoadBalancerListenerPolicyPrototypeTarget>,
}

impl LoadBalancerListenerPolicyPrototype {
    /// Returns an empty builder.
    pub fn builder() -> LoadBalancerListenerPolicyPrototypeBuilder {
        LoadBalancerListenerPolicyPrototypeBuilder::default()
    }

    /// Returns a builder initialized with the values in this model.
    pub fn to_builder(&self) -> LoadBalancerListenerPolicyPrototypeBuilder {
        LoadBalancerListenerPolicyPrototypeBuilder {
            name: self.name.clone(),
            priority: Some(self.priority),
            action: Some(self.action.clone()),
            rules: self.rules.clone(),
            target: self.target.clone(),
        }
    }

    /// The user-defined name for this policy.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The priority of this policy, lower values are evaluated first.
    pub fn priority(&self) -> i64 {
        self.priority
    }

    /// The policy action.
    pub fn action(&self) -> &load_balancer_listener_policy_prototype::Action {
        &self.action
    }

    /// The rules for this policy.
    pub fn rules(&self) -> Option<&[LoadBalancerListenerPolicyRulePrototype]> {
        self.rules.as_deref()
    }

    /// The target of the policy, depends on the action.
    pub fn target(&self) -> Option<&LoadBalancerListenerPolicyPrototypeTarget> {
        self.target.as_ref()
    }
}

impl Message for LoadBalancerListenerPolicyPrototype {
    fn typename() -> &'static str {
        "LoadBalancerListenerPolicyPrototype"
    }
}

impl gax::message::Validated for LoadBalancerListenerPolicyPrototype {
    type Builder = LoadBalancerListenerPolicyPrototypeBuilder;
    const REQUIRED_FIELDS: &'static [RequiredField] = &[
        RequiredField::not_null("priority"),
        RequiredField::not_null("action"),
    ];
    fn to_builder(&self) -> Self::Builder {
        LoadBalancerListenerPolicyPrototype::to_builder(self)
    }
}

impl std::convert::TryFrom<LoadBalancerListenerPolicyPrototypeBuilder>
    for LoadBalancerListenerPolicyPrototype
{
    type Error = gax::error::Error;
    fn try_from(value: LoadBalancerListenerPolicyPrototypeBuilder) -> gax::Result<Self> {
        value.build()
    }
}

/// Builder for [LoadBalancerListenerPolicyPrototype].
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct LoadBalancerListenerPolicyPrototypeBuilder {
    name: Option<String>,
    priority: Option<i64>,
    action: Option<load_balancer_listener_policy_prototype::Action>,
    rules: Option<Vec<LoadBalancerListenerPolicyRulePrototype>>,
    target: Option<LoadBalancerListenerPolicyPrototypeTarget>,
}

impl LoadBalancerListenerPolicyPrototypeBuilder {
    /// Creates a builder with all the mandatory fields.
    pub fn new(
        priority: i64,
        action: impl Into<load_balancer_listener_policy_prototype::Action>,
    ) -> Self {
        Self::default().set_priority(priority).set_action(action)
    }

    /// Sets the value of [name][LoadBalancerListenerPolicyPrototype::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [priority][LoadBalancerListenerPolicyPrototype::priority].
    pub fn set_priority(mut self, v: i64) -> Self {
        self.priority = Some(v);
        self
    }

    /// Sets the value of [action][LoadBalancerListenerPolicyPrototype::action].
    pub fn set_action<T: Into<load_balancer_listener_policy_prototype::Action>>(
        mut self,
        v: T,
    ) -> Self {
        self.action = Some(v.into());
        self
    }

    /// Sets the value of [rules][LoadBalancerListenerPolicyPrototype::rules].
    pub fn set_rules<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<LoadBalancerListenerPolicyRulePrototype>,
    {
        self.rules = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Appends one item to [rules][LoadBalancerListenerPolicyPrototype::rules].
    ///
    /// Returns an error if the item is `None`. The builder is borrowed, so it
    /// remains usable after a failed call and keeps the items added before.
    pub fn add_rules<V: Into<Option<LoadBalancerListenerPolicyRulePrototype>>>(
        &mut self,
        v: V,
    ) -> gax::Result<&mut Self> {
        let Some(item) = v.into() else {
            return Err(gax::validator::null_item("rules"));
        };
        self.rules.get_or_insert_with(Vec::new).push(item);
        Ok(self)
    }

    /// Sets the value of [target][LoadBalancerListenerPolicyPrototype::target].
    pub fn set_target<T: Into<LoadBalancerListenerPolicyPrototypeTarget>>(mut self, v: T) -> Self {
        self.target = Some(v.into());
        self
    }

    /// Validates the mandatory fields and creates a [LoadBalancerListenerPolicyPrototype].
    pub fn build(self) -> gax::Result<LoadBalancerListenerPolicyPrototype> {
        let name = LoadBalancerListenerPolicyPrototype::typename();
        Ok(LoadBalancerListenerPolicyPrototype {
            name: self.name,
            priority: not_null(name, "priority", self.priority)?,
            action: not_null(name, "action", self.action)?,
            rules: self.rules,
            target: self.target,
        })
    }
}

impl gax::message::MessageBuilder for LoadBalancerListenerPolicyPrototypeBuilder {
    type Target = LoadBalancerListenerPolicyPrototype;
    fn build(self) -> gax::Result<Self::Target> {
        LoadBalancerListenerPolicyPrototypeBuilder::build(self)
    }
}

/// Defines additional types related to [LoadBalancerListenerPolicyPrototype].
pub mod load_balancer_listener_policy_prototype {
    #[allow(unused_imports)]
    use super::*;

    /// The policy action.
    ///
    /// # Working with unknown values
    ///
    /// This enum is defined as `#[non_exhaustive]` because the service may add
    /// new values. Applications may also send values unknown to this library,
    /// use `Action::from()` with the value and it is sent unchanged.
    #[derive(Clone, Debug, PartialEq)]
    #[non_exhaustive]
    pub enum Action {
        /// Forward the request to the target pool.
        Forward,
        /// Redirect the request to the target URL.
        Redirect,
        /// Reject the request.
        Reject,
        /// If set, the enum was initialized with an unknown value.
        ///
        /// Applications can examine the value using [Action::name].
        UnknownValue(gax::enums::UnknownEnumValue),
    }

    impl Action {
        /// Gets the enum value as a string.
        pub fn name(&self) -> &str {
            match self {
                Self::Forward => "forward",
                Self::Redirect => "redirect",
                Self::Reject => "reject",
                Self::UnknownValue(u) => u.name(),
            }
        }
    }

    impl std::fmt::Display for Action {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.name())
        }
    }

    impl std::convert::From<&str> for Action {
        fn from(value: &str) -> Self {
            match value {
                "forward" => Self::Forward,
                "redirect" => Self::Redirect,
                "reject" => Self::Reject,
                _ => Self::UnknownValue(gax::enums::UnknownEnumValue::new(value)),
            }
        }
    }

    impl std::convert::From<String> for Action {
        fn from(value: String) -> Self {
            Self::from(value.as_str())
        }
    }

    impl serde::ser::Serialize for Action {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> serde::de::Deserialize<'de> for Action {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            deserializer.deserialize_str(gax::enums::EnumVisitor::<Self>::new(
                "LoadBalancerListenerPolicyPrototype.action",
            ))
        }
    }
}

/// Identifies a certificate instance.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
#[non_exhaustive]
pub enum CertificateInstanceIdentity {
    ByCrn(CertificateInstanceIdentityByCrn),
}

impl Message for CertificateInstanceIdentity {
    fn typename() -> &'static str {
        "CertificateInstanceIdentity"
    }
}

impl std::convert::From<CertificateInstanceIdentityByCrn> for CertificateInstanceIdentity {
    fn from(value: CertificateInstanceIdentityByCrn) -> Self {
        Self::ByCrn(value)
    }
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "CertificateInstanceIdentityByCrnBuilder")]
#[non_exhaustive]
pub struct CertificateInstanceIdentityByCrn {
    crn: String,
}

impl CertificateInstanceIdentityByCrn {
    /// Returns an empty builder.
    pub fn builder() -> CertificateInstanceIdentityByCrnBuilder {
        CertificateInstanceIdentityByCrnBuilder::default()
    }

    /// Returns a builder initialized with the values in this model.
    pub fn to_builder(&self) -> CertificateInstanceIdentityByCrnBuilder {
        CertificateInstanceIdentityByCrnBuilder {
            crn: Some(self.crn.clone()),
        }
    }

    /// The CRN for this certificate instance.
    pub fn crn(&self) -> &str {
        &self.crn
    }
}

impl Message for CertificateInstanceIdentityByCrn {
    fn typename() -> &'static str {
        "CertificateInstanceIdentityByCRN"
    }
}

impl gax::message::Validated for CertificateInstanceIdentityByCrn {
    type Builder = CertificateInstanceIdentityByCrnBuilder;
    const REQUIRED_FIELDS: &'static [RequiredField] = &[RequiredField::not_null("crn")];
    fn to_builder(&self) -> Self::Builder {
        CertificateInstanceIdentityByCrn::to_builder(self)
    }
}

impl std::convert::TryFrom<CertificateInstanceIdentityByCrnBuilder>
    for CertificateInstanceIdentityByCrn
{
    type Error = gax::error::Error;
    fn try_from(value: CertificateInstanceIdentityByCrnBuilder) -> gax::Result<Self> {
        value.build()
    }
}

/// Builder for [CertificateInstanceIdentityByCrn].
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct CertificateInstanceIdentityByCrnBuilder {
    crn: Option<String>,
}

impl CertificateInstanceIdentityByCrnBuilder {
    /// Creates a builder with all the mandatory fields.
    pub fn new(crn: impl Into<String>) -> Self {
        Self::default().set_crn(crn)
    }

    /// Sets the value of [crn][CertificateInstanceIdentityByCrn::crn].
    pub fn set_crn<T: Into<String>>(mut self, v: T) -> Self {
        self.crn = Some(v.into());
        self
    }

    /// Validates the mandatory fields and creates a [CertificateInstanceIdentityByCrn].
    pub fn build(self) -> gax::Result<CertificateInstanceIdentityByCrn> {
        let name = CertificateInstanceIdentityByCrn::typename();
        Ok(CertificateInstanceIdentityByCrn {
            crn: not_null(name, "crn", self.crn)?,
        })
    }
}

impl gax::message::MessageBuilder for CertificateInstanceIdentityByCrnBuilder {
    type Target = CertificateInstanceIdentityByCrn;
    fn build(self) -> gax::Result<Self::Target> {
        CertificateInstanceIdentityByCrnBuilder::build(self)
    }
}

/// The request to create a listener for a load balancer.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "CreateLoadBalancerListenerRequestBuilder")]
#[non_exhaustive]
pub struct CreateLoadBalancerListenerRequest {
    load_balancer_id: String,
    port: i64,
    protocol: create_load_balancer_listener_request::Protocol,
    accept_proxy_protocol: Option<bool>,
    certificate_instance: Option<CertificateInstanceIdentity>,
    connection_limit: Option<i64>,
    default_pool: Option<LoadBalancerPoolIdentity>,
    policies: Option<Vec<LoadBalancerListenerPolicyPrototype>>,
}

impl CreateLoadBalancerListenerRequest {
    /// Returns an empty builder.
    pub fn builder() -> CreateLoadBalancerListenerRequestBuilder {
        CreateLoadBalancerListenerRequestBuilder::default()
    }

    /// Returns a builder initialized with the values in this model.
    pub fn to_builder(&self) -> CreateLoadBalancerListenerRequestBuilder {
        CreateLoadBalancerListenerRequestBuilder {
            load_balancer_id: Some(self.load_balancer_id.clone()),
            port: Some(self.port),
            protocol: Some(self.protocol.clone()),
            accept_proxy_protocol: self.accept_proxy_protocol.clone(),
            certificate_instance: self.certificate_instance.clone(),
            connection_limit: self.connection_limit.clone(),
            default_pool: self.default_pool.clone(),
            policies: self.policies.clone(),
        }
    }

    /// The load balancer identifier.
    pub fn load_balancer_id(&self) -> &str {
        &self.load_balancer_id
    }

    /// The listener port number.
    pub fn port(&self) -> i64 {
        self.port
    }

    /// The listener protocol.
    pub fn protocol(&self) -> &create_load_balancer_listener_request::Protocol {
        &self.protocol
    }

    /// If set to `true`, this listener will accept and forward PROXY protocol information.
    pub fn accept_proxy_protocol(&self) -> Option<bool> {
        self.accept_proxy_protocol
    }

    /// The certificate instance, only used by `https` listeners.
    pub fn certificate_instance(&self) -> Option<&CertificateInstanceIdentity> {
        self.certificate_instance.as_ref()
    }

    /// The connection limit of the listener.
    pub fn connection_limit(&self) -> Option<i64> {
        self.connection_limit
    }

    /// The default pool associated with the listener.
    pub fn default_pool(&self) -> Option<&LoadBalancerPoolIdentity> {
        self.default_pool.as_ref()
    }

    /// The policies for this listener.
    pub fn policies(&self) -> Option<&[LoadBalancerListenerPolicyPrototype]> {
        self.policies.as_deref()
    }
}

impl Message for CreateLoadBalancerListenerRequest {
    fn typename() -> &'static str {
        "CreateLoadBalancerListenerRequest"
    }
}

impl gax::message::Validated for CreateLoadBalancerListenerRequest {
    type Builder = CreateLoadBalancerListenerRequestBuilder;
    const REQUIRED_FIELDS: &'static [RequiredField] = &[
        RequiredField::not_empty("load_balancer_id"),
        RequiredField::not_null("port"),
        RequiredField::not_null("protocol"),
    ];
    fn to_builder(&self) -> Self::Builder {
        CreateLoadBalancerListenerRequest::to_builder(self)
    }
}

impl std::convert::TryFrom<CreateLoadBalancerListenerRequestBuilder>
    for CreateLoadBalancerListenerRequest
{
    type Error = gax::error::Error;
    fn try_from(value: CreateLoadBalancerListenerRequestBuilder) -> gax::Result<Self> {
        value.build()
    }
}

/// Builder for [CreateLoadBalancerListenerRequest].
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct CreateLoadBalancerListenerRequestBuilder {
    load_balancer_id: Option<String>,
    port: Option<i64>,
    protocol: Option<create_load_balancer_listener_request::Protocol>,
    accept_proxy_protocol: Option<bool>,
    certificate_instance: Option<CertificateInstanceIdentity>,
    connection_limit: Option<i64>,
    default_pool: Option<LoadBalancerPoolIdentity>,
    policies: Option<Vec<LoadBalancerListenerPolicyPrototype>>,
}

impl CreateLoadBalancerListenerRequestBuilder {
    /// Creates a builder with all the mandatory fields.
    pub fn new(
        load_balancer_id: impl Into<String>,
        port: i64,
        protocol: impl Into<create_load_balancer_listener_request::Protocol>,
    ) -> Self {
        Self::default()
            .set_load_balancer_id(load_balancer_id)
            .set_port(port)
            .set_protocol(protocol)
    }

    /// Sets the value of [load_balancer_id][CreateLoadBalancerListenerRequest::load_balancer_id].
    pub fn set_load_balancer_id<T: Into<String>>(mut self, v: T) -> Self {
        self.load_balancer_id = Some(v.into());
        self
    }

    /// Sets the value of [port][CreateLoadBalancerListenerRequest::port].
    pub fn set_port(mut self, v: i64) -> Self {
        self.port = Some(v);
        self
    }

    /// Sets the value of [protocol][CreateLoadBalancerListenerRequest::protocol].
    pub fn set_protocol<T: Into<create_load_balancer_listener_request::Protocol>>(
        mut self,
        v: T,
    ) -> Self {
        self.protocol = Some(v.into());
        self
    }

    /// Sets the value of [accept_proxy_protocol][CreateLoadBalancerListenerRequest::accept_proxy_protocol].
    pub fn set_accept_proxy_protocol(mut self, v: bool) -> Self {
        self.accept_proxy_protocol = Some(v);
        self
    }

    /// Sets the value of [certificate_instance][CreateLoadBalancerListenerRequest::certificate_instance].
    pub fn set_certificate_instance<T: Into<CertificateInstanceIdentity>>(mut self, v: T) -> Self {
        self.certificate_instance = Some(v.into());
        self
    }

    /// Sets the value of [connection_limit][CreateLoadBalancerListenerRequest::connection_limit].
    pub fn set_connection_limit(mut self, v: i64) -> Self {
        self.connection_limit = Some(v);
        self
    }

    /// Sets the value of [default_pool][CreateLoadBalancerListenerRequest::default_pool].
    pub fn set_default_pool<T: Into<LoadBalancerPoolIdentity>>(mut self, v: T) -> Self {
        self.default_pool = Some(v.into());
        self
    }

    /// Sets the value of [policies][CreateLoadBalancerListenerRequest::policies].
    pub fn set_policies<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<LoadBalancerListenerPolicyPrototype>,
    {
        self.policies = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Appends one item to [policies][CreateLoadBalancerListenerRequest::policies].
    ///
    /// Returns an error if the item is `None`. The builder is borrowed, so it
    /// remains usable after a failed call and keeps the items added before.
    pub fn add_policies<V: Into<Option<LoadBalancerListenerPolicyPrototype>>>(
        &mut self,
        v: V,
    ) -> gax::Result<&mut Self> {
        let Some(item) = v.into() else {
            return Err(gax::validator::null_item("policies"));
        };
        self.policies.get_or_insert_with(Vec::new).push(item);
        Ok(self)
    }

    /// Validates the mandatory fields and creates a [CreateLoadBalancerListenerRequest].
    pub fn build(self) -> gax::Result<CreateLoadBalancerListenerRequest> {
        let name = CreateLoadBalancerListenerRequest::typename();
        Ok(CreateLoadBalancerListenerRequest {
            load_balancer_id: not_empty(name, "load_balancer_id", self.load_balancer_id)?,
            port: not_null(name, "port", self.port)?,
            protocol: not_null(name, "protocol", self.protocol)?,
            accept_proxy_protocol: self.accept_proxy_protocol,
            certificate_instance: self.certificate_instance,
            connection_limit: self.connection_limit,
            default_pool: self.default_pool,
            policies: self.policies,
        })
    }
}

impl gax::message::MessageBuilder for CreateLoadBalancerListenerRequestBuilder {
    type Target = CreateLoadBalancerListenerRequest;
    fn build(self) -> gax::Result<Self::Target> {
        CreateLoadBalancerListenerRequestBuilder::build(self)
    }
}

/// Defines additional types related to [CreateLoadBalancerListenerRequest].
pub mod create_load_balancer_listener_request {
    pub use super::load_balancer_listener::Protocol;
}

/// A reference to a load balancer pool, as returned by the service.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[non_exhaustive]
pub struct LoadBalancerPoolReference {
    href: Option<String>,
    id: Option<String>,
    name: Option<String>,
}

impl LoadBalancerPoolReference {
    /// The URL for this load balancer pool.
    pub fn href(&self) -> Option<&str> {
        self.href.as_deref()
    }

    /// The unique identifier for this load balancer pool.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// The user-defined name for this load balancer pool.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl Message for LoadBalancerPoolReference {
    fn typename() -> &'static str {
        "LoadBalancerPoolReference"
    }
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[non_exhaustive]
pub struct LoadBalancerListenerPolicyReference {
    href: Option<String>,
    id: Option<String>,
}

impl LoadBalancerListenerPolicyReference {
    /// The URL for this policy.
    pub fn href(&self) -> Option<&str> {
        self.href.as_deref()
    }

    /// The unique identifier for this policy.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl Message for LoadBalancerListenerPolicyReference {
    fn typename() -> &'static str {
        "LoadBalancerListenerPolicyReference"
    }
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[non_exhaustive]
pub struct CertificateInstanceReference {
    crn: Option<String>,
}

impl CertificateInstanceReference {
    /// The CRN for this certificate instance.
    pub fn crn(&self) -> Option<&str> {
        self.crn.as_deref()
    }
}

impl Message for CertificateInstanceReference {
    fn typename() -> &'static str {
        "CertificateInstanceReference"
    }
}

/// A load balancer listener, as returned by the service.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[non_exhaustive]
pub struct LoadBalancerListener {
    accept_proxy_protocol: Option<bool>,
    certificate_instance: Option<CertificateInstanceReference>,
    connection_limit: Option<i64>,
    #[serde(with = "time::serde::rfc3339::option")]
    created_at: Option<time::OffsetDateTime>,
    default_pool: Option<LoadBalancerPoolReference>,
    href: Option<String>,
    id: Option<String>,
    policies: Option<Vec<LoadBalancerListenerPolicyReference>>,
    port: Option<i64>,
    protocol: Option<load_balancer_listener::Protocol>,
    provisioning_status: Option<String>,
}

impl LoadBalancerListener {
    pub fn accept_proxy_protocol(&self) -> Option<bool> {
        self.accept_proxy_protocol
    }

    pub fn certificate_instance(&self) -> Option<&CertificateInstanceReference> {
        self.certificate_instance.as_ref()
    }

    pub fn connection_limit(&self) -> Option<i64> {
        self.connection_limit
    }

    /// The date and time that this listener was created.
    pub fn created_at(&self) -> Option<time::OffsetDateTime> {
        self.created_at
    }

    pub fn default_pool(&self) -> Option<&LoadBalancerPoolReference> {
        self.default_pool.as_ref()
    }

    /// The URL for this listener.
    pub fn href(&self) -> Option<&str> {
        self.href.as_deref()
    }

    /// The unique identifier for this listener.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// The policies for this listener.
    pub fn policies(&self) -> Option<&[LoadBalancerListenerPolicyReference]> {
        self.policies.as_deref()
    }

    pub fn port(&self) -> Option<i64> {
        self.port
    }

    pub fn protocol(&self) -> Option<&load_balancer_listener::Protocol> {
        self.protocol.as_ref()
    }

    /// The provisioning status of this listener, for example `active` or `create_pending`.
    pub fn provisioning_status(&self) -> Option<&str> {
        self.provisioning_status.as_deref()
    }
}

impl Message for LoadBalancerListener {
    fn typename() -> &'static str {
        "LoadBalancerListener"
    }
}

/// Defines additional types related to [LoadBalancerListener].
pub mod load_balancer_listener {
    #[allow(unused_imports)]
    use super::*;

    /// The listener protocol.
    ///
    /// # Working with unknown values
    ///
    /// This enum is defined as `#[non_exhaustive]` because the service may add
    /// new values. Applications may also send values unknown to this library,
    /// use `Protocol::from()` with the value and it is sent unchanged.
    #[derive(Clone, Debug, PartialEq)]
    #[non_exhaustive]
    pub enum Protocol {
        Http,
        Https,
        Tcp,
        /// If set, the enum was initialized with an unknown value.
        ///
        /// Applications can examine the value using [Protocol::name].
        UnknownValue(gax::enums::UnknownEnumValue),
    }

    impl Protocol {
        /// Gets the enum value as a string.
        pub fn name(&self) -> &str {
            match self {
                Self::Http => "http",
                Self::Https => "https",
                Self::Tcp => "tcp",
                Self::UnknownValue(u) => u.name(),
            }
        }
    }

    impl std::fmt::Display for Protocol {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.name())
        }
    }

    impl std::convert::From<&str> for Protocol {
        fn from(value: &str) -> Self {
            match value {
                "http" => Self::Http,
                "https" => Self::Https,
                "tcp" => Self::Tcp,
                _ => Self::UnknownValue(gax::enums::UnknownEnumValue::new(value)),
            }
        }
    }

    impl std::convert::From<String> for Protocol {
        fn from(value: String) -> Self {
            Self::from(value.as_str())
        }
    }

    impl serde::ser::Serialize for Protocol {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> serde::de::Deserialize<'de> for Protocol {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            deserializer.deserialize_str(gax::enums::EnumVisitor::<Self>::new(
                "LoadBalancerListener.protocol",
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn policy_target() -> anyhow::Result<()> {
        let got = serde_json::from_value::<LoadBalancerListenerPolicyPrototypeTarget>(json!({
            "id": "70294e14-4e61-11e8-bcf4-0242ac110004"
        }))?;
        assert!(
            matches!(
                got,
                LoadBalancerListenerPolicyPrototypeTarget::Pool(LoadBalancerPoolIdentity::ById(_))
            ),
            "{got:?}"
        );

        let got = serde_json::from_value::<LoadBalancerListenerPolicyPrototypeTarget>(json!({
            "http_status_code": 301,
            "url": "https://www.redirect.com"
        }))?;
        match got {
            LoadBalancerListenerPolicyPrototypeTarget::RedirectUrl(r) => {
                assert_eq!(r.http_status_code(), 301);
                assert_eq!(r.url(), "https://www.redirect.com");
            }
            _ => panic!("unexpected target {got:?}"),
        }
        Ok(())
    }

    #[test]
    fn policy_target_incomplete_redirect() {
        let got = serde_json::from_value::<LoadBalancerListenerPolicyPrototypeTarget>(json!({
            "http_status_code": 301
        }));
        assert!(got.is_err(), "{got:?}");
    }

    #[test]
    fn rule_type_wire_name() -> anyhow::Result<()> {
        use load_balancer_listener_policy_rule_prototype::{Condition, Type};
        let rule = LoadBalancerListenerPolicyRulePrototypeBuilder::new(
            Condition::MatchesRegex,
            Type::Path,
            "^/api/.*",
        )
        .build()?;
        let got = serde_json::to_value(&rule)?;
        assert_eq!(
            got,
            json!({"condition": "matches_regex", "type": "path", "value": "^/api/.*"})
        );
        Ok(())
    }

    #[test]
    fn listener_response() -> anyhow::Result<()> {
        let got = serde_json::from_value::<LoadBalancerListener>(json!({
            "id": "70294e14-4e61-11e8-bcf4-0242ac110004",
            "port": 443,
            "protocol": "https",
            "certificate_instance": {"crn": "crn:v1:bluemix:public:cloudcerts:us-south:a123:b456:certificate:c789"},
            "default_pool": {"id": "70294e14-4e61-11e8-bcf4-0242ac110005", "name": "my-pool"},
            "policies": [{"id": "p1"}, {"id": "p2"}],
            "provisioning_status": "active"
        }))?;
        assert_eq!(got.port(), Some(443));
        assert_eq!(
            got.protocol(),
            Some(&load_balancer_listener::Protocol::Https)
        );
        assert_eq!(got.policies().map(|p| p.len()), Some(2));
        assert_eq!(
            got.default_pool().and_then(LoadBalancerPoolReference::name),
            Some("my-pool")
        );
        assert_eq!(got.created_at(), None);
        Ok(())
    }
}
