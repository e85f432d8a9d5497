//! Classic Load Balancers and target groups attached to groups.

use super::{hash_combine, HashCode, ModelFormatter};
use crate::error::Result;
use crate::query::{QueryWriter, ToQuery};
use crate::xml::{self, FromXml};
use roxmltree::Node;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadBalancerState {
    #[serde(rename = "LoadBalancerName", skip_serializing_if = "Option::is_none")]
    load_balancer_name: Option<String>,
    #[serde(rename = "State", skip_serializing_if = "Option::is_none")]
    state: Option<String>,
}

impl LoadBalancerState {
    pub fn load_balancer_name(&self) -> Option<&str> {
        self.load_balancer_name.as_deref()
    }

    pub fn set_load_balancer_name(&mut self, load_balancer_name: Option<String>) {
        self.load_balancer_name = load_balancer_name;
    }

    pub fn with_load_balancer_name(mut self, load_balancer_name: impl Into<String>) -> Self {
        self.load_balancer_name = Some(load_balancer_name.into());
        self
    }

    /// `Adding`, `Added`, `InService`, `Removing` or `Removed`.
    pub fn state(&self) -> Option<&str> {
        self.state.as_deref()
    }

    pub fn set_state(&mut self, state: Option<String>) {
        self.state = state;
    }

    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }
}

impl fmt::Display for LoadBalancerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ModelFormatter::new(f)
            .field("LoadBalancerName", &self.load_balancer_name)
            .field("State", &self.state)
            .finish()
    }
}

impl HashCode for LoadBalancerState {
    fn hash_code(&self) -> i32 {
        hash_combine(&[
            self.load_balancer_name.hash_code(),
            self.state.hash_code(),
        ])
    }
}

impl ToQuery for LoadBalancerState {
    fn write_query(&self, writer: &mut QueryWriter, key: &str) {
        writer.field(key, "LoadBalancerName", &self.load_balancer_name);
        writer.field(key, "State", &self.state);
    }
}

impl FromXml for LoadBalancerState {
    fn from_xml(node: Node) -> Result<Self> {
        let mut out = LoadBalancerState::default();
        for child in node.children().filter(Node::is_element) {
            match child.tag_name().name() {
                "LoadBalancerName" => out.load_balancer_name = Some(FromXml::from_xml(child)?),
                "State" => out.state = Some(FromXml::from_xml(child)?),
                _ => {}
            }
        }
        Ok(out)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadBalancerTargetGroupState {
    #[serde(rename = "LoadBalancerTargetGroupARN", skip_serializing_if = "Option::is_none")]
    load_balancer_target_group_arn: Option<String>,
    #[serde(rename = "State", skip_serializing_if = "Option::is_none")]
    state: Option<String>,
}

impl LoadBalancerTargetGroupState {
    pub fn load_balancer_target_group_arn(&self) -> Option<&str> {
        self.load_balancer_target_group_arn.as_deref()
    }

    pub fn set_load_balancer_target_group_arn(
        &mut self,
        load_balancer_target_group_arn: Option<String>,
    ) {
        self.load_balancer_target_group_arn = load_balancer_target_group_arn;
    }

    pub fn with_load_balancer_target_group_arn(
        mut self,
        load_balancer_target_group_arn: impl Into<String>,
    ) -> Self {
        self.load_balancer_target_group_arn = Some(load_balancer_target_group_arn.into());
        self
    }

    pub fn state(&self) -> Option<&str> {
        self.state.as_deref()
    }

    pub fn set_state(&mut self, state: Option<String>) {
        self.state = state;
    }

    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }
}

impl fmt::Display for LoadBalancerTargetGroupState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ModelFormatter::new(f)
            .field("LoadBalancerTargetGroupARN", &self.load_balancer_target_group_arn)
            .field("State", &self.state)
            .finish()
    }
}

impl HashCode for LoadBalancerTargetGroupState {
    fn hash_code(&self) -> i32 {
        hash_combine(&[
            self.load_balancer_target_group_arn.hash_code(),
            self.state.hash_code(),
        ])
    }
}

impl ToQuery for LoadBalancerTargetGroupState {
    fn write_query(&self, writer: &mut QueryWriter, key: &str) {
        writer.field(key, "LoadBalancerTargetGroupARN", &self.load_balancer_target_group_arn);
        writer.field(key, "State", &self.state);
    }
}

impl FromXml for LoadBalancerTargetGroupState {
    fn from_xml(node: Node) -> Result<Self> {
        let mut out = LoadBalancerTargetGroupState::default();
        for child in node.children().filter(Node::is_element) {
            match child.tag_name().name() {
                "LoadBalancerTargetGroupARN" => {
                    out.load_balancer_target_group_arn = Some(FromXml::from_xml(child)?);
                }
                "State" => out.state = Some(FromXml::from_xml(child)?),
                _ => {}
            }
        }
        Ok(out)
    }
}

/// Input of `AttachLoadBalancerTargetGroups`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct AttachLoadBalancerTargetGroupsRequest {
    #[serde(rename = "AutoScalingGroupName", skip_serializing_if = "Option::is_none")]
    auto_scaling_group_name: Option<String>,
    #[serde(rename = "TargetGroupARNs", skip_serializing_if = "Option::is_none")]
    target_group_arns: Option<Vec<String>>,
}

impl Default for AttachLoadBalancerTargetGroupsRequest {
    fn default() -> Self {
        AttachLoadBalancerTargetGroupsRequest {
            auto_scaling_group_name: None,
            target_group_arns: Some(Vec::new()),
        }
    }
}

impl AttachLoadBalancerTargetGroupsRequest {
    /// Length 1-255.
    pub fn auto_scaling_group_name(&self) -> Option<&str> {
        self.auto_scaling_group_name.as_deref()
    }

    pub fn set_auto_scaling_group_name(&mut self, auto_scaling_group_name: Option<String>) {
        self.auto_scaling_group_name = auto_scaling_group_name;
    }

    pub fn with_auto_scaling_group_name(
        mut self,
        auto_scaling_group_name: impl Into<String>,
    ) -> Self {
        self.auto_scaling_group_name = Some(auto_scaling_group_name.into());
        self
    }

    /// Up to 10 ARNs.
    pub fn target_group_arns(&self) -> Option<&[String]> {
        self.target_group_arns.as_deref()
    }

    pub fn set_target_group_arns(&mut self, target_group_arns: Option<Vec<String>>) {
        self.target_group_arns = target_group_arns;
    }

    pub fn with_target_group_arns<I>(mut self, target_group_arns: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.target_group_arns
            .get_or_insert_with(Vec::new)
            .extend(target_group_arns.into_iter().map(Into::into));
        self
    }
}

impl fmt::Display for AttachLoadBalancerTargetGroupsRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ModelFormatter::new(f)
            .field("AutoScalingGroupName", &self.auto_scaling_group_name)
            .list("TargetGroupARNs", &self.target_group_arns)
            .finish()
    }
}

impl HashCode for AttachLoadBalancerTargetGroupsRequest {
    fn hash_code(&self) -> i32 {
        hash_combine(&[
            self.auto_scaling_group_name.hash_code(),
            self.target_group_arns.hash_code(),
        ])
    }
}

impl ToQuery for AttachLoadBalancerTargetGroupsRequest {
    fn write_query(&self, writer: &mut QueryWriter, key: &str) {
        writer.field(key, "AutoScalingGroupName", &self.auto_scaling_group_name);
        writer.list(key, "TargetGroupARNs", &self.target_group_arns);
    }
}

/// Output of `AttachLoadBalancerTargetGroups`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct AttachLoadBalancerTargetGroupsResult {}

impl fmt::Display for AttachLoadBalancerTargetGroupsResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ModelFormatter::new(f).finish()
    }
}

impl HashCode for AttachLoadBalancerTargetGroupsResult {
    fn hash_code(&self) -> i32 {
        hash_combine(&[])
    }
}

impl FromXml for AttachLoadBalancerTargetGroupsResult {
    fn from_xml(_node: Node) -> Result<Self> {
        Ok(AttachLoadBalancerTargetGroupsResult::default())
    }
}

/// Input of `AttachLoadBalancers`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct AttachLoadBalancersRequest {
    #[serde(rename = "AutoScalingGroupName", skip_serializing_if = "Option::is_none")]
    auto_scaling_group_name: Option<String>,
    #[serde(rename = "LoadBalancerNames", skip_serializing_if = "Option::is_none")]
    load_balancer_names: Option<Vec<String>>,
}

impl Default for AttachLoadBalancersRequest {
    fn default() -> Self {
        AttachLoadBalancersRequest {
            auto_scaling_group_name: None,
            load_balancer_names: Some(Vec::new()),
        }
    }
}

impl AttachLoadBalancersRequest {
    /// Length 1-255.
    pub fn auto_scaling_group_name(&self) -> Option<&str> {
        self.auto_scaling_group_name.as_deref()
    }

    pub fn set_auto_scaling_group_name(&mut self, auto_scaling_group_name: Option<String>) {
        self.auto_scaling_group_name = auto_scaling_group_name;
    }

    pub fn with_auto_scaling_group_name(
        mut self,
        auto_scaling_group_name: impl Into<String>,
    ) -> Self {
        self.auto_scaling_group_name = Some(auto_scaling_group_name.into());
        self
    }

    /// Up to 10 names.
    pub fn load_balancer_names(&self) -> Option<&[String]> {
        self.load_balancer_names.as_deref()
    }

    pub fn set_load_balancer_names(&mut self, load_balancer_names: Option<Vec<String>>) {
        self.load_balancer_names = load_balancer_names;
    }

    pub fn with_load_balancer_names<I>(mut self, load_balancer_names: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.load_balancer_names
            .get_or_insert_with(Vec::new)
            .extend(load_balancer_names.into_iter().map(Into::into));
        self
    }
}

impl fmt::Display for AttachLoadBalancersRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ModelFormatter::new(f)
            .field("AutoScalingGroupName", &self.auto_scaling_group_name)
            .list("LoadBalancerNames", &self.load_balancer_names)
            .finish()
    }
}

impl HashCode for AttachLoadBalancersRequest {
    fn hash_code(&self) -> i32 {
        hash_combine(&[
            self.auto_scaling_group_name.hash_code(),
            self.load_balancer_names.hash_code(),
        ])
    }
}

impl ToQuery for AttachLoadBalancersRequest {
    fn write_query(&self, writer: &mut QueryWriter, key: &str) {
        writer.field(key, "AutoScalingGroupName", &self.auto_scaling_group_name);
        writer.list(key, "LoadBalancerNames", &self.load_balancer_names);
    }
}

/// Output of `AttachLoadBalancers`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct AttachLoadBalancersResult {}

impl fmt::Display for AttachLoadBalancersResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ModelFormatter::new(f).finish()
    }
}

impl HashCode for AttachLoadBalancersResult {
    fn hash_code(&self) -> i32 {
        hash_combine(&[])
    }
}

impl FromXml for AttachLoadBalancersResult {
    fn from_xml(_node: Node) -> Result<Self> {
        Ok(AttachLoadBalancersResult::default())
    }
}

/// Input of `DescribeLoadBalancerTargetGroups`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct DescribeLoadBalancerTargetGroupsRequest {
    #[serde(rename = "AutoScalingGroupName", skip_serializing_if = "Option::is_none")]
    auto_scaling_group_name: Option<String>,
    #[serde(rename = "NextToken", skip_serializing_if = "Option::is_none")]
    next_token: Option<String>,
    #[serde(rename = "MaxRecords", skip_serializing_if = "Option::is_none")]
    max_records: Option<i32>,
}

impl DescribeLoadBalancerTargetGroupsRequest {
    /// Length 1-255.
    pub fn auto_scaling_group_name(&self) -> Option<&str> {
        self.auto_scaling_group_name.as_deref()
    }

    pub fn set_auto_scaling_group_name(&mut self, auto_scaling_group_name: Option<String>) {
        self.auto_scaling_group_name = auto_scaling_group_name;
    }

    pub fn with_auto_scaling_group_name(
        mut self,
        auto_scaling_group_name: impl Into<String>,
    ) -> Self {
        self.auto_scaling_group_name = Some(auto_scaling_group_name.into());
        self
    }

    /// Token of the page to return, taken from the previous result.
    pub fn next_token(&self) -> Option<&str> {
        self.next_token.as_deref()
    }

    pub fn set_next_token(&mut self, next_token: Option<String>) {
        self.next_token = next_token;
    }

    pub fn with_next_token(mut self, next_token: impl Into<String>) -> Self {
        self.next_token = Some(next_token.into());
        self
    }

    /// Page size. Defaults to 50, at most 100.
    pub fn max_records(&self) -> Option<i32> {
        self.max_records
    }

    pub fn set_max_records(&mut self, max_records: Option<i32>) {
        self.max_records = max_records;
    }

    pub fn with_max_records(mut self, max_records: i32) -> Self {
        self.max_records = Some(max_records);
        self
    }
}

impl fmt::Display for DescribeLoadBalancerTargetGroupsRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ModelFormatter::new(f)
            .field("AutoScalingGroupName", &self.auto_scaling_group_name)
            .field("NextToken", &self.next_token)
            .field("MaxRecords", &self.max_records)
            .finish()
    }
}

impl HashCode for DescribeLoadBalancerTargetGroupsRequest {
    fn hash_code(&self) -> i32 {
        hash_combine(&[
            self.auto_scaling_group_name.hash_code(),
            self.next_token.hash_code(),
            self.max_records.hash_code(),
        ])
    }
}

impl ToQuery for DescribeLoadBalancerTargetGroupsRequest {
    fn write_query(&self, writer: &mut QueryWriter, key: &str) {
        writer.field(key, "AutoScalingGroupName", &self.auto_scaling_group_name);
        writer.field(key, "NextToken", &self.next_token);
        writer.field(key, "MaxRecords", &self.max_records);
    }
}

/// Output of `DescribeLoadBalancerTargetGroups`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct DescribeLoadBalancerTargetGroupsResult {
    #[serde(rename = "LoadBalancerTargetGroups", skip_serializing_if = "Option::is_none")]
    load_balancer_target_groups: Option<Vec<LoadBalancerTargetGroupState>>,
    #[serde(rename = "NextToken", skip_serializing_if = "Option::is_none")]
    next_token: Option<String>,
}

impl Default for DescribeLoadBalancerTargetGroupsResult {
    fn default() -> Self {
        DescribeLoadBalancerTargetGroupsResult {
            load_balancer_target_groups: Some(Vec::new()),
            next_token: None,
        }
    }
}

impl DescribeLoadBalancerTargetGroupsResult {
    pub fn load_balancer_target_groups(&self) -> Option<&[LoadBalancerTargetGroupState]> {
        self.load_balancer_target_groups.as_deref()
    }

    pub fn set_load_balancer_target_groups(
        &mut self,
        load_balancer_target_groups: Option<Vec<LoadBalancerTargetGroupState>>,
    ) {
        self.load_balancer_target_groups = load_balancer_target_groups;
    }

    pub fn with_load_balancer_target_groups<I>(mut self, load_balancer_target_groups: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<LoadBalancerTargetGroupState>,
    {
        self.load_balancer_target_groups
            .get_or_insert_with(Vec::new)
            .extend(load_balancer_target_groups.into_iter().map(Into::into));
        self
    }

    /// Present when there are more pages.
    pub fn next_token(&self) -> Option<&str> {
        self.next_token.as_deref()
    }

    pub fn set_next_token(&mut self, next_token: Option<String>) {
        self.next_token = next_token;
    }

    pub fn with_next_token(mut self, next_token: impl Into<String>) -> Self {
        self.next_token = Some(next_token.into());
        self
    }
}

impl fmt::Display for DescribeLoadBalancerTargetGroupsResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ModelFormatter::new(f)
            .list("LoadBalancerTargetGroups", &self.load_balancer_target_groups)
            .field("NextToken", &self.next_token)
            .finish()
    }
}

impl HashCode for DescribeLoadBalancerTargetGroupsResult {
    fn hash_code(&self) -> i32 {
        hash_combine(&[
            self.load_balancer_target_groups.hash_code(),
            self.next_token.hash_code(),
        ])
    }
}

impl FromXml for DescribeLoadBalancerTargetGroupsResult {
    fn from_xml(node: Node) -> Result<Self> {
        let mut out = DescribeLoadBalancerTargetGroupsResult::default();
        for child in node.children().filter(Node::is_element) {
            match child.tag_name().name() {
                "LoadBalancerTargetGroups" => {
                    out.load_balancer_target_groups = Some(xml::list(child)?);
                }
                "NextToken" => out.next_token = Some(FromXml::from_xml(child)?),
                _ => {}
            }
        }
        Ok(out)
    }
}

/// Input of `DescribeLoadBalancers`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct DescribeLoadBalancersRequest {
    #[serde(rename = "AutoScalingGroupName", skip_serializing_if = "Option::is_none")]
    auto_scaling_group_name: Option<String>,
    #[serde(rename = "NextToken", skip_serializing_if = "Option::is_none")]
    next_token: Option<String>,
    #[serde(rename = "MaxRecords", skip_serializing_if = "Option::is_none")]
    max_records: Option<i32>,
}

impl DescribeLoadBalancersRequest {
    /// Length 1-255.
    pub fn auto_scaling_group_name(&self) -> Option<&str> {
        self.auto_scaling_group_name.as_deref()
    }

    pub fn set_auto_scaling_group_name(&mut self, auto_scaling_group_name: Option<String>) {
        self.auto_scaling_group_name = auto_scaling_group_name;
    }

    pub fn with_auto_scaling_group_name(
        mut self,
        auto_scaling_group_name: impl Into<String>,
    ) -> Self {
        self.auto_scaling_group_name = Some(auto_scaling_group_name.into());
        self
    }

    /// Token of the page to return, taken from the previous result.
    pub fn next_token(&self) -> Option<&str> {
        self.next_token.as_deref()
    }

    pub fn set_next_token(&mut self, next_token: Option<String>) {
        self.next_token = next_token;
    }

    pub fn with_next_token(mut self, next_token: impl Into<String>) -> Self {
        self.next_token = Some(next_token.into());
        self
    }

    /// Page size. Defaults to 50, at most 100.
    pub fn max_records(&self) -> Option<i32> {
        self.max_records
    }

    pub fn set_max_records(&mut self, max_records: Option<i32>) {
        self.max_records = max_records;
    }

    pub fn with_max_records(mut self, max_records: i32) -> Self {
        self.max_records = Some(max_records);
        self
    }
}

impl fmt::Display for DescribeLoadBalancersRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ModelFormatter::new(f)
            .field("AutoScalingGroupName", &self.auto_scaling_group_name)
            .field("NextToken", &self.next_token)
            .field("MaxRecords", &self.max_records)
            .finish()
    }
}

impl HashCode for DescribeLoadBalancersRequest {
    fn hash_code(&self) -> i32 {
        hash_combine(&[
            self.auto_scaling_group_name.hash_code(),
            self.next_token.hash_code(),
            self.max_records.hash_code(),
        ])
    }
}

impl ToQuery for DescribeLoadBalancersRequest {
    fn write_query(&self, writer: &mut QueryWriter, key: &str) {
        writer.field(key, "AutoScalingGroupName", &self.auto_scaling_group_name);
        writer.field(key, "NextToken", &self.next_token);
        writer.field(key, "MaxRecords", &self.max_records);
    }
}

/// Output of `DescribeLoadBalancers`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct DescribeLoadBalancersResult {
    #[serde(rename = "LoadBalancers", skip_serializing_if = "Option::is_none")]
    load_balancers: Option<Vec<LoadBalancerState>>,
    #[serde(rename = "NextToken", skip_serializing_if = "Option::is_none")]
    next_token: Option<String>,
}

impl Default for DescribeLoadBalancersResult {
    fn default() -> Self {
        DescribeLoadBalancersResult {
            load_balancers: Some(Vec::new()),
            next_token: None,
        }
    }
}

impl DescribeLoadBalancersResult {
    pub fn load_balancers(&self) -> Option<&[LoadBalancerState]> {
        self.load_balancers.as_deref()
    }

    pub fn set_load_balancers(&mut self, load_balancers: Option<Vec<LoadBalancerState>>) {
        self.load_balancers = load_balancers;
    }

    pub fn with_load_balancers<I>(mut self, load_balancers: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<LoadBalancerState>,
    {
        self.load_balancers
            .get_or_insert_with(Vec::new)
            .extend(load_balancers.into_iter().map(Into::into));
        self
    }

    /// Present when there are more pages.
    pub fn next_token(&self) -> Option<&str> {
        self.next_token.as_deref()
    }

    pub fn set_next_token(&mut self, next_token: Option<String>) {
        self.next_token = next_token;
    }

    pub fn with_next_token(mut self, next_token: impl Into<String>) -> Self {
        self.next_token = Some(next_token.into());
        self
    }
}

impl fmt::Display for DescribeLoadBalancersResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ModelFormatter::new(f)
            .list("LoadBalancers", &self.load_balancers)
            .field("NextToken", &self.next_token)
            .finish()
    }
}

impl HashCode for DescribeLoadBalancersResult {
    fn hash_code(&self) -> i32 {
        hash_combine(&[
            self.load_balancers.hash_code(),
            self.next_token.hash_code(),
        ])
    }
}

impl FromXml for DescribeLoadBalancersResult {
    fn from_xml(node: Node) -> Result<Self> {
        let mut out = DescribeLoadBalancersResult::default();
        for child in node.children().filter(Node::is_element) {
            match child.tag_name().name() {
                "LoadBalancers" => out.load_balancers = Some(xml::list(child)?),
                "NextToken" => out.next_token = Some(FromXml::from_xml(child)?),
                _ => {}
            }
        }
        Ok(out)
    }
}

/// Input of `DetachLoadBalancerTargetGroups`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct DetachLoadBalancerTargetGroupsRequest {
    #[serde(rename = "AutoScalingGroupName", skip_serializing_if = "Option::is_none")]
    auto_scaling_group_name: Option<String>,
    #[serde(rename = "TargetGroupARNs", skip_serializing_if = "Option::is_none")]
    target_group_arns: Option<Vec<String>>,
}

impl Default for DetachLoadBalancerTargetGroupsRequest {
    fn default() -> Self {
        DetachLoadBalancerTargetGroupsRequest {
            auto_scaling_group_name: None,
            target_group_arns: Some(Vec::new()),
        }
    }
}

impl DetachLoadBalancerTargetGroupsRequest {
    /// Length 1-255.
    pub fn auto_scaling_group_name(&self) -> Option<&str> {
        self.auto_scaling_group_name.as_deref()
    }

    pub fn set_auto_scaling_group_name(&mut self, auto_scaling_group_name: Option<String>) {
        self.auto_scaling_group_name = auto_scaling_group_name;
    }

    pub fn with_auto_scaling_group_name(
        mut self,
        auto_scaling_group_name: impl Into<String>,
    ) -> Self {
        self.auto_scaling_group_name = Some(auto_scaling_group_name.into());
        self
    }

    pub fn target_group_arns(&self) -> Option<&[String]> {
        self.target_group_arns.as_deref()
    }

    pub fn set_target_group_arns(&mut self, target_group_arns: Option<Vec<String>>) {
        self.target_group_arns = target_group_arns;
    }

    pub fn with_target_group_arns<I>(mut self, target_group_arns: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.target_group_arns
            .get_or_insert_with(Vec::new)
            .extend(target_group_arns.into_iter().map(Into::into));
        self
    }
}

impl fmt::Display for DetachLoadBalancerTargetGroupsRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ModelFormatter::new(f)
            .field("AutoScalingGroupName", &self.auto_scaling_group_name)
            .list("TargetGroupARNs", &self.target_group_arns)
            .finish()
    }
}

impl HashCode for DetachLoadBalancerTargetGroupsRequest {
    fn hash_code(&self) -> i32 {
        hash_combine(&[
            self.auto_scaling_group_name.hash_code(),
            self.target_group_arns.hash_code(),
        ])
    }
}

impl ToQuery for DetachLoadBalancerTargetGroupsRequest {
    fn write_query(&self, writer: &mut QueryWriter, key: &str) {
        writer.field(key, "AutoScalingGroupName", &self.auto_scaling_group_name);
        writer.list(key, "TargetGroupARNs", &self.target_group_arns);
    }
}

/// Output of `DetachLoadBalancerTargetGroups`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct DetachLoadBalancerTargetGroupsResult {}

impl fmt::Display for DetachLoadBalancerTargetGroupsResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ModelFormatter::new(f).finish()
    }
}

impl HashCode for DetachLoadBalancerTargetGroupsResult {
    fn hash_code(&self) -> i32 {
        hash_combine(&[])
    }
}

impl FromXml for DetachLoadBalancerTargetGroupsResult {
    fn from_xml(_node: Node) -> Result<Self> {
        Ok(DetachLoadBalancerTargetGroupsResult::default())
    }
}

/// Input of `DetachLoadBalancers`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct DetachLoadBalancersRequest {
    #[serde(rename = "AutoScalingGroupName", skip_serializing_if = "Option::is_none")]
    auto_scaling_group_name: Option<String>,
    #[serde(rename = "LoadBalancerNames", skip_serializing_if = "Option::is_none")]
    load_balancer_names: Option<Vec<String>>,
}

impl Default for DetachLoadBalancersRequest {
    fn default() -> Self {
        DetachLoadBalancersRequest {
            auto_scaling_group_name: None,
            load_balancer_names: Some(Vec::new()),
        }
    }
}

impl DetachLoadBalancersRequest {
    /// Length 1-255.
    pub fn auto_scaling_group_name(&self) -> Option<&str> {
        self.auto_scaling_group_name.as_deref()
    }

    pub fn set_auto_scaling_group_name(&mut self, auto_scaling_group_name: Option<String>) {
        self.auto_scaling_group_name = auto_scaling_group_name;
    }

    pub fn with_auto_scaling_group_name(
        mut self,
        auto_scaling_group_name: impl Into<String>,
    ) -> Self {
        self.auto_scaling_group_name = Some(auto_scaling_group_name.into());
        self
    }

    pub fn load_balancer_names(&self) -> Option<&[String]> {
        self.load_balancer_names.as_deref()
    }

    pub fn set_load_balancer_names(&mut self, load_balancer_names: Option<Vec<String>>) {
        self.load_balancer_names = load_balancer_names;
    }

    pub fn with_load_balancer_names<I>(mut self, load_balancer_names: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.load_balancer_names
            .get_or_insert_with(Vec::new)
            .extend(load_balancer_names.into_iter().map(Into::into));
        self
    }
}

impl fmt::Display for DetachLoadBalancersRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ModelFormatter::new(f)
            .field("AutoScalingGroupName", &self.auto_scaling_group_name)
            .list("LoadBalancerNames", &self.load_balancer_names)
            .finish()
    }
}

impl HashCode for DetachLoadBalancersRequest {
    fn hash_code(&self) -> i32 {
        hash_combine(&[
            self.auto_scaling_group_name.hash_code(),
            self.load_balancer_names.hash_code(),
        ])
    }
}

impl ToQuery for DetachLoadBalancersRequest {
    fn write_query(&self, writer: &mut QueryWriter, key: &str) {
        writer.field(key, "AutoScalingGroupName", &self.auto_scaling_group_name);
        writer.list(key, "LoadBalancerNames", &self.load_balancer_names);
    }
}

/// Output of `DetachLoadBalancers`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct DetachLoadBalancersResult {}

impl fmt::Display for DetachLoadBalancersResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ModelFormatter::new(f).finish()
    }
}

impl HashCode for DetachLoadBalancersResult {
    fn hash_code(&self) -> i32 {
        hash_combine(&[])
    }
}

impl FromXml for DetachLoadBalancersResult {
    fn from_xml(_node: Node) -> Result<Self> {
        Ok(DetachLoadBalancersResult::default())
    }
}
