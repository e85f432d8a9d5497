//! Lifecycle hooks and the actions that release instances held by them.

use super::{hash_combine, HashCode, LifecycleTransition, ModelFormatter};
use crate::error::Result;
use crate::query::{QueryWriter, ToQuery};
use crate::xml::{self, FromXml};
use roxmltree::Node;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Pauses instances in a wait state during launch or termination.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct LifecycleHook {
    #[serde(rename = "LifecycleHookName", skip_serializing_if = "Option::is_none")]
    lifecycle_hook_name: Option<String>,
    #[serde(rename = "AutoScalingGroupName", skip_serializing_if = "Option::is_none")]
    auto_scaling_group_name: Option<String>,
    #[serde(rename = "LifecycleTransition", skip_serializing_if = "Option::is_none")]
    lifecycle_transition: Option<LifecycleTransition>,
    #[serde(rename = "NotificationTargetARN", skip_serializing_if = "Option::is_none")]
    notification_target_arn: Option<String>,
    #[serde(rename = "RoleARN", skip_serializing_if = "Option::is_none")]
    role_arn: Option<String>,
    #[serde(rename = "NotificationMetadata", skip_serializing_if = "Option::is_none")]
    notification_metadata: Option<String>,
    #[serde(rename = "HeartbeatTimeout", skip_serializing_if = "Option::is_none")]
    heartbeat_timeout: Option<i32>,
    #[serde(rename = "GlobalTimeout", skip_serializing_if = "Option::is_none")]
    global_timeout: Option<i32>,
    #[serde(rename = "DefaultResult", skip_serializing_if = "Option::is_none")]
    default_result: Option<String>,
}

impl LifecycleHook {
    pub fn lifecycle_hook_name(&self) -> Option<&str> {
        self.lifecycle_hook_name.as_deref()
    }

    pub fn set_lifecycle_hook_name(&mut self, lifecycle_hook_name: Option<String>) {
        self.lifecycle_hook_name = lifecycle_hook_name;
    }

    pub fn with_lifecycle_hook_name(mut self, lifecycle_hook_name: impl Into<String>) -> Self {
        self.lifecycle_hook_name = Some(lifecycle_hook_name.into());
        self
    }

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

    pub fn lifecycle_transition(&self) -> Option<&LifecycleTransition> {
        self.lifecycle_transition.as_ref()
    }

    pub fn set_lifecycle_transition(&mut self, lifecycle_transition: Option<LifecycleTransition>) {
        self.lifecycle_transition = lifecycle_transition;
    }

    pub fn with_lifecycle_transition(
        mut self,
        lifecycle_transition: impl Into<LifecycleTransition>,
    ) -> Self {
        self.lifecycle_transition = Some(lifecycle_transition.into());
        self
    }

    pub fn notification_target_arn(&self) -> Option<&str> {
        self.notification_target_arn.as_deref()
    }

    pub fn set_notification_target_arn(&mut self, notification_target_arn: Option<String>) {
        self.notification_target_arn = notification_target_arn;
    }

    pub fn with_notification_target_arn(
        mut self,
        notification_target_arn: impl Into<String>,
    ) -> Self {
        self.notification_target_arn = Some(notification_target_arn.into());
        self
    }

    pub fn role_arn(&self) -> Option<&str> {
        self.role_arn.as_deref()
    }

    pub fn set_role_arn(&mut self, role_arn: Option<String>) {
        self.role_arn = role_arn;
    }

    pub fn with_role_arn(mut self, role_arn: impl Into<String>) -> Self {
        self.role_arn = Some(role_arn.into());
        self
    }

    pub fn notification_metadata(&self) -> Option<&str> {
        self.notification_metadata.as_deref()
    }

    pub fn set_notification_metadata(&mut self, notification_metadata: Option<String>) {
        self.notification_metadata = notification_metadata;
    }

    pub fn with_notification_metadata(mut self, notification_metadata: impl Into<String>) -> Self {
        self.notification_metadata = Some(notification_metadata.into());
        self
    }

    /// Seconds, 30-7200.
    pub fn heartbeat_timeout(&self) -> Option<i32> {
        self.heartbeat_timeout
    }

    pub fn set_heartbeat_timeout(&mut self, heartbeat_timeout: Option<i32>) {
        self.heartbeat_timeout = heartbeat_timeout;
    }

    pub fn with_heartbeat_timeout(mut self, heartbeat_timeout: i32) -> Self {
        self.heartbeat_timeout = Some(heartbeat_timeout);
        self
    }

    pub fn global_timeout(&self) -> Option<i32> {
        self.global_timeout
    }

    pub fn set_global_timeout(&mut self, global_timeout: Option<i32>) {
        self.global_timeout = global_timeout;
    }

    pub fn with_global_timeout(mut self, global_timeout: i32) -> Self {
        self.global_timeout = Some(global_timeout);
        self
    }

    /// `CONTINUE` or `ABANDON`.
    pub fn default_result(&self) -> Option<&str> {
        self.default_result.as_deref()
    }

    pub fn set_default_result(&mut self, default_result: Option<String>) {
        self.default_result = default_result;
    }

    pub fn with_default_result(mut self, default_result: impl Into<String>) -> Self {
        self.default_result = Some(default_result.into());
        self
    }
}

impl fmt::Display for LifecycleHook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ModelFormatter::new(f)
            .field("LifecycleHookName", &self.lifecycle_hook_name)
            .field("AutoScalingGroupName", &self.auto_scaling_group_name)
            .field("LifecycleTransition", &self.lifecycle_transition)
            .field("NotificationTargetARN", &self.notification_target_arn)
            .field("RoleARN", &self.role_arn)
            .field("NotificationMetadata", &self.notification_metadata)
            .field("HeartbeatTimeout", &self.heartbeat_timeout)
            .field("GlobalTimeout", &self.global_timeout)
            .field("DefaultResult", &self.default_result)
            .finish()
    }
}

impl HashCode for LifecycleHook {
    fn hash_code(&self) -> i32 {
        hash_combine(&[
            self.lifecycle_hook_name.hash_code(),
            self.auto_scaling_group_name.hash_code(),
            self.lifecycle_transition.hash_code(),
            self.notification_target_arn.hash_code(),
            self.role_arn.hash_code(),
            self.notification_metadata.hash_code(),
            self.heartbeat_timeout.hash_code(),
            self.global_timeout.hash_code(),
            self.default_result.hash_code(),
        ])
    }
}

impl ToQuery for LifecycleHook {
    fn write_query(&self, writer: &mut QueryWriter, key: &str) {
        writer.field(key, "LifecycleHookName", &self.lifecycle_hook_name);
        writer.field(key, "AutoScalingGroupName", &self.auto_scaling_group_name);
        writer.field(key, "LifecycleTransition", &self.lifecycle_transition);
        writer.field(key, "NotificationTargetARN", &self.notification_target_arn);
        writer.field(key, "RoleARN", &self.role_arn);
        writer.field(key, "NotificationMetadata", &self.notification_metadata);
        writer.field(key, "HeartbeatTimeout", &self.heartbeat_timeout);
        writer.field(key, "GlobalTimeout", &self.global_timeout);
        writer.field(key, "DefaultResult", &self.default_result);
    }
}

impl FromXml for LifecycleHook {
    fn from_xml(node: Node) -> Result<Self> {
        let mut out = LifecycleHook::default();
        for child in node.children().filter(Node::is_element) {
            match child.tag_name().name() {
                "LifecycleHookName" => out.lifecycle_hook_name = Some(FromXml::from_xml(child)?),
                "AutoScalingGroupName" => {
                    out.auto_scaling_group_name = Some(FromXml::from_xml(child)?);
                }
                "LifecycleTransition" => out.lifecycle_transition = Some(FromXml::from_xml(child)?),
                "NotificationTargetARN" => {
                    out.notification_target_arn = Some(FromXml::from_xml(child)?);
                }
                "RoleARN" => out.role_arn = Some(FromXml::from_xml(child)?),
                "NotificationMetadata" => {
                    out.notification_metadata = Some(FromXml::from_xml(child)?);
                }
                "HeartbeatTimeout" => out.heartbeat_timeout = Some(FromXml::from_xml(child)?),
                "GlobalTimeout" => out.global_timeout = Some(FromXml::from_xml(child)?),
                "DefaultResult" => out.default_result = Some(FromXml::from_xml(child)?),
                _ => {}
            }
        }
        Ok(out)
    }
}

/// A lifecycle hook created together with its group.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct LifecycleHookSpecification {
    #[serde(rename = "LifecycleHookName", skip_serializing_if = "Option::is_none")]
    lifecycle_hook_name: Option<String>,
    #[serde(rename = "LifecycleTransition", skip_serializing_if = "Option::is_none")]
    lifecycle_transition: Option<LifecycleTransition>,
    #[serde(rename = "NotificationMetadata", skip_serializing_if = "Option::is_none")]
    notification_metadata: Option<String>,
    #[serde(rename = "HeartbeatTimeout", skip_serializing_if = "Option::is_none")]
    heartbeat_timeout: Option<i32>,
    #[serde(rename = "DefaultResult", skip_serializing_if = "Option::is_none")]
    default_result: Option<String>,
    #[serde(rename = "NotificationTargetARN", skip_serializing_if = "Option::is_none")]
    notification_target_arn: Option<String>,
    #[serde(rename = "RoleARN", skip_serializing_if = "Option::is_none")]
    role_arn: Option<String>,
}

impl LifecycleHookSpecification {
    pub fn lifecycle_hook_name(&self) -> Option<&str> {
        self.lifecycle_hook_name.as_deref()
    }

    pub fn set_lifecycle_hook_name(&mut self, lifecycle_hook_name: Option<String>) {
        self.lifecycle_hook_name = lifecycle_hook_name;
    }

    pub fn with_lifecycle_hook_name(mut self, lifecycle_hook_name: impl Into<String>) -> Self {
        self.lifecycle_hook_name = Some(lifecycle_hook_name.into());
        self
    }

    pub fn lifecycle_transition(&self) -> Option<&LifecycleTransition> {
        self.lifecycle_transition.as_ref()
    }

    pub fn set_lifecycle_transition(&mut self, lifecycle_transition: Option<LifecycleTransition>) {
        self.lifecycle_transition = lifecycle_transition;
    }

    pub fn with_lifecycle_transition(
        mut self,
        lifecycle_transition: impl Into<LifecycleTransition>,
    ) -> Self {
        self.lifecycle_transition = Some(lifecycle_transition.into());
        self
    }

    pub fn notification_metadata(&self) -> Option<&str> {
        self.notification_metadata.as_deref()
    }

    pub fn set_notification_metadata(&mut self, notification_metadata: Option<String>) {
        self.notification_metadata = notification_metadata;
    }

    pub fn with_notification_metadata(mut self, notification_metadata: impl Into<String>) -> Self {
        self.notification_metadata = Some(notification_metadata.into());
        self
    }

    pub fn heartbeat_timeout(&self) -> Option<i32> {
        self.heartbeat_timeout
    }

    pub fn set_heartbeat_timeout(&mut self, heartbeat_timeout: Option<i32>) {
        self.heartbeat_timeout = heartbeat_timeout;
    }

    pub fn with_heartbeat_timeout(mut self, heartbeat_timeout: i32) -> Self {
        self.heartbeat_timeout = Some(heartbeat_timeout);
        self
    }

    pub fn default_result(&self) -> Option<&str> {
        self.default_result.as_deref()
    }

    pub fn set_default_result(&mut self, default_result: Option<String>) {
        self.default_result = default_result;
    }

    pub fn with_default_result(mut self, default_result: impl Into<String>) -> Self {
        self.default_result = Some(default_result.into());
        self
    }

    pub fn notification_target_arn(&self) -> Option<&str> {
        self.notification_target_arn.as_deref()
    }

    pub fn set_notification_target_arn(&mut self, notification_target_arn: Option<String>) {
        self.notification_target_arn = notification_target_arn;
    }

    pub fn with_notification_target_arn(
        mut self,
        notification_target_arn: impl Into<String>,
    ) -> Self {
        self.notification_target_arn = Some(notification_target_arn.into());
        self
    }

    pub fn role_arn(&self) -> Option<&str> {
        self.role_arn.as_deref()
    }

    pub fn set_role_arn(&mut self, role_arn: Option<String>) {
        self.role_arn = role_arn;
    }

    pub fn with_role_arn(mut self, role_arn: impl Into<String>) -> Self {
        self.role_arn = Some(role_arn.into());
        self
    }
}

impl fmt::Display for LifecycleHookSpecification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ModelFormatter::new(f)
            .field("LifecycleHookName", &self.lifecycle_hook_name)
            .field("LifecycleTransition", &self.lifecycle_transition)
            .field("NotificationMetadata", &self.notification_metadata)
            .field("HeartbeatTimeout", &self.heartbeat_timeout)
            .field("DefaultResult", &self.default_result)
            .field("NotificationTargetARN", &self.notification_target_arn)
            .field("RoleARN", &self.role_arn)
            .finish()
    }
}

impl HashCode for LifecycleHookSpecification {
    fn hash_code(&self) -> i32 {
        hash_combine(&[
            self.lifecycle_hook_name.hash_code(),
            self.lifecycle_transition.hash_code(),
            self.notification_metadata.hash_code(),
            self.heartbeat_timeout.hash_code(),
            self.default_result.hash_code(),
            self.notification_target_arn.hash_code(),
            self.role_arn.hash_code(),
        ])
    }
}

impl ToQuery for LifecycleHookSpecification {
    fn write_query(&self, writer: &mut QueryWriter, key: &str) {
        writer.field(key, "LifecycleHookName", &self.lifecycle_hook_name);
        writer.field(key, "LifecycleTransition", &self.lifecycle_transition);
        writer.field(key, "NotificationMetadata", &self.notification_metadata);
        writer.field(key, "HeartbeatTimeout", &self.heartbeat_timeout);
        writer.field(key, "DefaultResult", &self.default_result);
        writer.field(key, "NotificationTargetARN", &self.notification_target_arn);
        writer.field(key, "RoleARN", &self.role_arn);
    }
}

impl FromXml for LifecycleHookSpecification {
    fn from_xml(node: Node) -> Result<Self> {
        let mut out = LifecycleHookSpecification::default();
        for child in node.children().filter(Node::is_element) {
            match child.tag_name().name() {
                "LifecycleHookName" => out.lifecycle_hook_name = Some(FromXml::from_xml(child)?),
                "LifecycleTransition" => out.lifecycle_transition = Some(FromXml::from_xml(child)?),
                "NotificationMetadata" => {
                    out.notification_metadata = Some(FromXml::from_xml(child)?);
                }
                "HeartbeatTimeout" => out.heartbeat_timeout = Some(FromXml::from_xml(child)?),
                "DefaultResult" => out.default_result = Some(FromXml::from_xml(child)?),
                "NotificationTargetARN" => {
                    out.notification_target_arn = Some(FromXml::from_xml(child)?);
                }
                "RoleARN" => out.role_arn = Some(FromXml::from_xml(child)?),
                _ => {}
            }
        }
        Ok(out)
    }
}

/// Input of `CompleteLifecycleAction`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct CompleteLifecycleActionRequest {
    #[serde(rename = "LifecycleHookName", skip_serializing_if = "Option::is_none")]
    lifecycle_hook_name: Option<String>,
    #[serde(rename = "AutoScalingGroupName", skip_serializing_if = "Option::is_none")]
    auto_scaling_group_name: Option<String>,
    #[serde(rename = "LifecycleActionToken", skip_serializing_if = "Option::is_none")]
    lifecycle_action_token: Option<String>,
    #[serde(rename = "LifecycleActionResult", skip_serializing_if = "Option::is_none")]
    lifecycle_action_result: Option<String>,
    #[serde(rename = "InstanceId", skip_serializing_if = "Option::is_none")]
    instance_id: Option<String>,
}

impl CompleteLifecycleActionRequest {
    pub fn lifecycle_hook_name(&self) -> Option<&str> {
        self.lifecycle_hook_name.as_deref()
    }

    pub fn set_lifecycle_hook_name(&mut self, lifecycle_hook_name: Option<String>) {
        self.lifecycle_hook_name = lifecycle_hook_name;
    }

    pub fn with_lifecycle_hook_name(mut self, lifecycle_hook_name: impl Into<String>) -> Self {
        self.lifecycle_hook_name = Some(lifecycle_hook_name.into());
        self
    }

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

    /// Either this or `InstanceId`.
    pub fn lifecycle_action_token(&self) -> Option<&str> {
        self.lifecycle_action_token.as_deref()
    }

    pub fn set_lifecycle_action_token(&mut self, lifecycle_action_token: Option<String>) {
        self.lifecycle_action_token = lifecycle_action_token;
    }

    pub fn with_lifecycle_action_token(
        mut self,
        lifecycle_action_token: impl Into<String>,
    ) -> Self {
        self.lifecycle_action_token = Some(lifecycle_action_token.into());
        self
    }

    /// `CONTINUE` or `ABANDON`.
    pub fn lifecycle_action_result(&self) -> Option<&str> {
        self.lifecycle_action_result.as_deref()
    }

    pub fn set_lifecycle_action_result(&mut self, lifecycle_action_result: Option<String>) {
        self.lifecycle_action_result = lifecycle_action_result;
    }

    pub fn with_lifecycle_action_result(
        mut self,
        lifecycle_action_result: impl Into<String>,
    ) -> Self {
        self.lifecycle_action_result = Some(lifecycle_action_result.into());
        self
    }

    pub fn instance_id(&self) -> Option<&str> {
        self.instance_id.as_deref()
    }

    pub fn set_instance_id(&mut self, instance_id: Option<String>) {
        self.instance_id = instance_id;
    }

    pub fn with_instance_id(mut self, instance_id: impl Into<String>) -> Self {
        self.instance_id = Some(instance_id.into());
        self
    }
}

impl fmt::Display for CompleteLifecycleActionRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ModelFormatter::new(f)
            .field("LifecycleHookName", &self.lifecycle_hook_name)
            .field("AutoScalingGroupName", &self.auto_scaling_group_name)
            .field("LifecycleActionToken", &self.lifecycle_action_token)
            .field("LifecycleActionResult", &self.lifecycle_action_result)
            .field("InstanceId", &self.instance_id)
            .finish()
    }
}

impl HashCode for CompleteLifecycleActionRequest {
    fn hash_code(&self) -> i32 {
        hash_combine(&[
            self.lifecycle_hook_name.hash_code(),
            self.auto_scaling_group_name.hash_code(),
            self.lifecycle_action_token.hash_code(),
            self.lifecycle_action_result.hash_code(),
            self.instance_id.hash_code(),
        ])
    }
}

impl ToQuery for CompleteLifecycleActionRequest {
    fn write_query(&self, writer: &mut QueryWriter, key: &str) {
        writer.field(key, "LifecycleHookName", &self.lifecycle_hook_name);
        writer.field(key, "AutoScalingGroupName", &self.auto_scaling_group_name);
        writer.field(key, "LifecycleActionToken", &self.lifecycle_action_token);
        writer.field(key, "LifecycleActionResult", &self.lifecycle_action_result);
        writer.field(key, "InstanceId", &self.instance_id);
    }
}

/// Output of `CompleteLifecycleAction`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct CompleteLifecycleActionResult {}

impl fmt::Display for CompleteLifecycleActionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ModelFormatter::new(f).finish()
    }
}

impl HashCode for CompleteLifecycleActionResult {
    fn hash_code(&self) -> i32 {
        hash_combine(&[])
    }
}

impl FromXml for CompleteLifecycleActionResult {
    fn from_xml(_node: Node) -> Result<Self> {
        Ok(CompleteLifecycleActionResult::default())
    }
}

/// Input of `DeleteLifecycleHook`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct DeleteLifecycleHookRequest {
    #[serde(rename = "LifecycleHookName", skip_serializing_if = "Option::is_none")]
    lifecycle_hook_name: Option<String>,
    #[serde(rename = "AutoScalingGroupName", skip_serializing_if = "Option::is_none")]
    auto_scaling_group_name: Option<String>,
}

impl DeleteLifecycleHookRequest {
    pub fn lifecycle_hook_name(&self) -> Option<&str> {
        self.lifecycle_hook_name.as_deref()
    }

    pub fn set_lifecycle_hook_name(&mut self, lifecycle_hook_name: Option<String>) {
        self.lifecycle_hook_name = lifecycle_hook_name;
    }

    pub fn with_lifecycle_hook_name(mut self, lifecycle_hook_name: impl Into<String>) -> Self {
        self.lifecycle_hook_name = Some(lifecycle_hook_name.into());
        self
    }

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
}

impl fmt::Display for DeleteLifecycleHookRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ModelFormatter::new(f)
            .field("LifecycleHookName", &self.lifecycle_hook_name)
            .field("AutoScalingGroupName", &self.auto_scaling_group_name)
            .finish()
    }
}

impl HashCode for DeleteLifecycleHookRequest {
    fn hash_code(&self) -> i32 {
        hash_combine(&[
            self.lifecycle_hook_name.hash_code(),
            self.auto_scaling_group_name.hash_code(),
        ])
    }
}

impl ToQuery for DeleteLifecycleHookRequest {
    fn write_query(&self, writer: &mut QueryWriter, key: &str) {
        writer.field(key, "LifecycleHookName", &self.lifecycle_hook_name);
        writer.field(key, "AutoScalingGroupName", &self.auto_scaling_group_name);
    }
}

/// Output of `DeleteLifecycleHook`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct DeleteLifecycleHookResult {}

impl fmt::Display for DeleteLifecycleHookResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ModelFormatter::new(f).finish()
    }
}

impl HashCode for DeleteLifecycleHookResult {
    fn hash_code(&self) -> i32 {
        hash_combine(&[])
    }
}

impl FromXml for DeleteLifecycleHookResult {
    fn from_xml(_node: Node) -> Result<Self> {
        Ok(DeleteLifecycleHookResult::default())
    }
}

/// Input of `DescribeLifecycleHookTypes`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct DescribeLifecycleHookTypesRequest {}

impl fmt::Display for DescribeLifecycleHookTypesRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ModelFormatter::new(f).finish()
    }
}

impl HashCode for DescribeLifecycleHookTypesRequest {
    fn hash_code(&self) -> i32 {
        hash_combine(&[])
    }
}

impl ToQuery for DescribeLifecycleHookTypesRequest {
    fn write_query(&self, _writer: &mut QueryWriter, _key: &str) {}
}

/// Output of `DescribeLifecycleHookTypes`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct DescribeLifecycleHookTypesResult {
    #[serde(rename = "LifecycleHookTypes", skip_serializing_if = "Option::is_none")]
    lifecycle_hook_types: Option<Vec<LifecycleTransition>>,
}

impl Default for DescribeLifecycleHookTypesResult {
    fn default() -> Self {
        DescribeLifecycleHookTypesResult {
            lifecycle_hook_types: Some(Vec::new()),
        }
    }
}

impl DescribeLifecycleHookTypesResult {
    pub fn lifecycle_hook_types(&self) -> Option<&[LifecycleTransition]> {
        self.lifecycle_hook_types.as_deref()
    }

    pub fn set_lifecycle_hook_types(
        &mut self,
        lifecycle_hook_types: Option<Vec<LifecycleTransition>>,
    ) {
        self.lifecycle_hook_types = lifecycle_hook_types;
    }

    pub fn with_lifecycle_hook_types<I>(mut self, lifecycle_hook_types: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<LifecycleTransition>,
    {
        self.lifecycle_hook_types
            .get_or_insert_with(Vec::new)
            .extend(lifecycle_hook_types.into_iter().map(Into::into));
        self
    }
}

impl fmt::Display for DescribeLifecycleHookTypesResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ModelFormatter::new(f)
            .list("LifecycleHookTypes", &self.lifecycle_hook_types)
            .finish()
    }
}

impl HashCode for DescribeLifecycleHookTypesResult {
    fn hash_code(&self) -> i32 {
        hash_combine(&[
            self.lifecycle_hook_types.hash_code(),
        ])
    }
}

impl FromXml for DescribeLifecycleHookTypesResult {
    fn from_xml(node: Node) -> Result<Self> {
        let mut out = DescribeLifecycleHookTypesResult::default();
        for child in node.children().filter(Node::is_element) {
            match child.tag_name().name() {
                "LifecycleHookTypes" => out.lifecycle_hook_types = Some(xml::list(child)?),
                _ => {}
            }
        }
        Ok(out)
    }
}

/// Input of `DescribeLifecycleHooks`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct DescribeLifecycleHooksRequest {
    #[serde(rename = "AutoScalingGroupName", skip_serializing_if = "Option::is_none")]
    auto_scaling_group_name: Option<String>,
    #[serde(rename = "LifecycleHookNames", skip_serializing_if = "Option::is_none")]
    lifecycle_hook_names: Option<Vec<String>>,
}

impl Default for DescribeLifecycleHooksRequest {
    fn default() -> Self {
        DescribeLifecycleHooksRequest {
            auto_scaling_group_name: None,
            lifecycle_hook_names: Some(Vec::new()),
        }
    }
}

impl DescribeLifecycleHooksRequest {
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

    /// Up to 50 names. All hooks when empty.
    pub fn lifecycle_hook_names(&self) -> Option<&[String]> {
        self.lifecycle_hook_names.as_deref()
    }

    pub fn set_lifecycle_hook_names(&mut self, lifecycle_hook_names: Option<Vec<String>>) {
        self.lifecycle_hook_names = lifecycle_hook_names;
    }

    pub fn with_lifecycle_hook_names<I>(mut self, lifecycle_hook_names: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.lifecycle_hook_names
            .get_or_insert_with(Vec::new)
            .extend(lifecycle_hook_names.into_iter().map(Into::into));
        self
    }
}

impl fmt::Display for DescribeLifecycleHooksRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ModelFormatter::new(f)
            .field("AutoScalingGroupName", &self.auto_scaling_group_name)
            .list("LifecycleHookNames", &self.lifecycle_hook_names)
            .finish()
    }
}

impl HashCode for DescribeLifecycleHooksRequest {
    fn hash_code(&self) -> i32 {
        hash_combine(&[
            self.auto_scaling_group_name.hash_code(),
            self.lifecycle_hook_names.hash_code(),
        ])
    }
}

impl ToQuery for DescribeLifecycleHooksRequest {
    fn write_query(&self, writer: &mut QueryWriter, key: &str) {
        writer.field(key, "AutoScalingGroupName", &self.auto_scaling_group_name);
        writer.list(key, "LifecycleHookNames", &self.lifecycle_hook_names);
    }
}

/// Output of `DescribeLifecycleHooks`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct DescribeLifecycleHooksResult {
    #[serde(rename = "LifecycleHooks", skip_serializing_if = "Option::is_none")]
    lifecycle_hooks: Option<Vec<LifecycleHook>>,
}

impl Default for DescribeLifecycleHooksResult {
    fn default() -> Self {
        DescribeLifecycleHooksResult {
            lifecycle_hooks: Some(Vec::new()),
        }
    }
}

impl DescribeLifecycleHooksResult {
    pub fn lifecycle_hooks(&self) -> Option<&[LifecycleHook]> {
        self.lifecycle_hooks.as_deref()
    }

    pub fn set_lifecycle_hooks(&mut self, lifecycle_hooks: Option<Vec<LifecycleHook>>) {
        self.lifecycle_hooks = lifecycle_hooks;
    }

    pub fn with_lifecycle_hooks<I>(mut self, lifecycle_hooks: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<LifecycleHook>,
    {
        self.lifecycle_hooks
            .get_or_insert_with(Vec::new)
            .extend(lifecycle_hooks.into_iter().map(Into::into));
        self
    }
}

impl fmt::Display for DescribeLifecycleHooksResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ModelFormatter::new(f)
            .list("LifecycleHooks", &self.lifecycle_hooks)
            .finish()
    }
}

impl HashCode for DescribeLifecycleHooksResult {
    fn hash_code(&self) -> i32 {
        hash_combine(&[
            self.lifecycle_hooks.hash_code(),
        ])
    }
}

impl FromXml for DescribeLifecycleHooksResult {
    fn from_xml(node: Node) -> Result<Self> {
        let mut out = DescribeLifecycleHooksResult::default();
        for child in node.children().filter(Node::is_element) {
            match child.tag_name().name() {
                "LifecycleHooks" => out.lifecycle_hooks = Some(xml::list(child)?),
                _ => {}
            }
        }
        Ok(out)
    }
}

/// Input of `PutLifecycleHook`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct PutLifecycleHookRequest {
    #[serde(rename = "LifecycleHookName", skip_serializing_if = "Option::is_none")]
    lifecycle_hook_name: Option<String>,
    #[serde(rename = "AutoScalingGroupName", skip_serializing_if = "Option::is_none")]
    auto_scaling_group_name: Option<String>,
    #[serde(rename = "LifecycleTransition", skip_serializing_if = "Option::is_none")]
    lifecycle_transition: Option<LifecycleTransition>,
    #[serde(rename = "RoleARN", skip_serializing_if = "Option::is_none")]
    role_arn: Option<String>,
    #[serde(rename = "NotificationTargetARN", skip_serializing_if = "Option::is_none")]
    notification_target_arn: Option<String>,
    #[serde(rename = "NotificationMetadata", skip_serializing_if = "Option::is_none")]
    notification_metadata: Option<String>,
    #[serde(rename = "HeartbeatTimeout", skip_serializing_if = "Option::is_none")]
    heartbeat_timeout: Option<i32>,
    #[serde(rename = "DefaultResult", skip_serializing_if = "Option::is_none")]
    default_result: Option<String>,
}

impl PutLifecycleHookRequest {
    pub fn lifecycle_hook_name(&self) -> Option<&str> {
        self.lifecycle_hook_name.as_deref()
    }

    pub fn set_lifecycle_hook_name(&mut self, lifecycle_hook_name: Option<String>) {
        self.lifecycle_hook_name = lifecycle_hook_name;
    }

    pub fn with_lifecycle_hook_name(mut self, lifecycle_hook_name: impl Into<String>) -> Self {
        self.lifecycle_hook_name = Some(lifecycle_hook_name.into());
        self
    }

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

    pub fn lifecycle_transition(&self) -> Option<&LifecycleTransition> {
        self.lifecycle_transition.as_ref()
    }

    pub fn set_lifecycle_transition(&mut self, lifecycle_transition: Option<LifecycleTransition>) {
        self.lifecycle_transition = lifecycle_transition;
    }

    pub fn with_lifecycle_transition(
        mut self,
        lifecycle_transition: impl Into<LifecycleTransition>,
    ) -> Self {
        self.lifecycle_transition = Some(lifecycle_transition.into());
        self
    }

    pub fn role_arn(&self) -> Option<&str> {
        self.role_arn.as_deref()
    }

    pub fn set_role_arn(&mut self, role_arn: Option<String>) {
        self.role_arn = role_arn;
    }

    pub fn with_role_arn(mut self, role_arn: impl Into<String>) -> Self {
        self.role_arn = Some(role_arn.into());
        self
    }

    pub fn notification_target_arn(&self) -> Option<&str> {
        self.notification_target_arn.as_deref()
    }

    pub fn set_notification_target_arn(&mut self, notification_target_arn: Option<String>) {
        self.notification_target_arn = notification_target_arn;
    }

    pub fn with_notification_target_arn(
        mut self,
        notification_target_arn: impl Into<String>,
    ) -> Self {
        self.notification_target_arn = Some(notification_target_arn.into());
        self
    }

    pub fn notification_metadata(&self) -> Option<&str> {
        self.notification_metadata.as_deref()
    }

    pub fn set_notification_metadata(&mut self, notification_metadata: Option<String>) {
        self.notification_metadata = notification_metadata;
    }

    pub fn with_notification_metadata(mut self, notification_metadata: impl Into<String>) -> Self {
        self.notification_metadata = Some(notification_metadata.into());
        self
    }

    pub fn heartbeat_timeout(&self) -> Option<i32> {
        self.heartbeat_timeout
    }

    pub fn set_heartbeat_timeout(&mut self, heartbeat_timeout: Option<i32>) {
        self.heartbeat_timeout = heartbeat_timeout;
    }

    pub fn with_heartbeat_timeout(mut self, heartbeat_timeout: i32) -> Self {
        self.heartbeat_timeout = Some(heartbeat_timeout);
        self
    }

    pub fn default_result(&self) -> Option<&str> {
        self.default_result.as_deref()
    }

    pub fn set_default_result(&mut self, default_result: Option<String>) {
        self.default_result = default_result;
    }

    pub fn with_default_result(mut self, default_result: impl Into<String>) -> Self {
        self.default_result = Some(default_result.into());
        self
    }
}

impl fmt::Display for PutLifecycleHookRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ModelFormatter::new(f)
            .field("LifecycleHookName", &self.lifecycle_hook_name)
            .field("AutoScalingGroupName", &self.auto_scaling_group_name)
            .field("LifecycleTransition", &self.lifecycle_transition)
            .field("RoleARN", &self.role_arn)
            .field("NotificationTargetARN", &self.notification_target_arn)
            .field("NotificationMetadata", &self.notification_metadata)
            .field("HeartbeatTimeout", &self.heartbeat_timeout)
            .field("DefaultResult", &self.default_result)
            .finish()
    }
}

impl HashCode for PutLifecycleHookRequest {
    fn hash_code(&self) -> i32 {
        hash_combine(&[
            self.lifecycle_hook_name.hash_code(),
            self.auto_scaling_group_name.hash_code(),
            self.lifecycle_transition.hash_code(),
            self.role_arn.hash_code(),
            self.notification_target_arn.hash_code(),
            self.notification_metadata.hash_code(),
            self.heartbeat_timeout.hash_code(),
            self.default_result.hash_code(),
        ])
    }
}

impl ToQuery for PutLifecycleHookRequest {
    fn write_query(&self, writer: &mut QueryWriter, key: &str) {
        writer.field(key, "LifecycleHookName", &self.lifecycle_hook_name);
        writer.field(key, "AutoScalingGroupName", &self.auto_scaling_group_name);
        writer.field(key, "LifecycleTransition", &self.lifecycle_transition);
        writer.field(key, "RoleARN", &self.role_arn);
        writer.field(key, "NotificationTargetARN", &self.notification_target_arn);
        writer.field(key, "NotificationMetadata", &self.notification_metadata);
        writer.field(key, "HeartbeatTimeout", &self.heartbeat_timeout);
        writer.field(key, "DefaultResult", &self.default_result);
    }
}

/// Output of `PutLifecycleHook`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct PutLifecycleHookResult {}

impl fmt::Display for PutLifecycleHookResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ModelFormatter::new(f).finish()
    }
}

impl HashCode for PutLifecycleHookResult {
    fn hash_code(&self) -> i32 {
        hash_combine(&[])
    }
}

impl FromXml for PutLifecycleHookResult {
    fn from_xml(_node: Node) -> Result<Self> {
        Ok(PutLifecycleHookResult::default())
    }
}

/// Input of `RecordLifecycleActionHeartbeat`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordLifecycleActionHeartbeatRequest {
    #[serde(rename = "LifecycleHookName", skip_serializing_if = "Option::is_none")]
    lifecycle_hook_name: Option<String>,
    #[serde(rename = "AutoScalingGroupName", skip_serializing_if = "Option::is_none")]
    auto_scaling_group_name: Option<String>,
    #[serde(rename = "LifecycleActionToken", skip_serializing_if = "Option::is_none")]
    lifecycle_action_token: Option<String>,
    #[serde(rename = "InstanceId", skip_serializing_if = "Option::is_none")]
    instance_id: Option<String>,
}

impl RecordLifecycleActionHeartbeatRequest {
    pub fn lifecycle_hook_name(&self) -> Option<&str> {
        self.lifecycle_hook_name.as_deref()
    }

    pub fn set_lifecycle_hook_name(&mut self, lifecycle_hook_name: Option<String>) {
        self.lifecycle_hook_name = lifecycle_hook_name;
    }

    pub fn with_lifecycle_hook_name(mut self, lifecycle_hook_name: impl Into<String>) -> Self {
        self.lifecycle_hook_name = Some(lifecycle_hook_name.into());
        self
    }

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

    pub fn lifecycle_action_token(&self) -> Option<&str> {
        self.lifecycle_action_token.as_deref()
    }

    pub fn set_lifecycle_action_token(&mut self, lifecycle_action_token: Option<String>) {
        self.lifecycle_action_token = lifecycle_action_token;
    }

    pub fn with_lifecycle_action_token(
        mut self,
        lifecycle_action_token: impl Into<String>,
    ) -> Self {
        self.lifecycle_action_token = Some(lifecycle_action_token.into());
        self
    }

    pub fn instance_id(&self) -> Option<&str> {
        self.instance_id.as_deref()
    }

    pub fn set_instance_id(&mut self, instance_id: Option<String>) {
        self.instance_id = instance_id;
    }

    pub fn with_instance_id(mut self, instance_id: impl Into<String>) -> Self {
        self.instance_id = Some(instance_id.into());
        self
    }
}

impl fmt::Display for RecordLifecycleActionHeartbeatRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ModelFormatter::new(f)
            .field("LifecycleHookName", &self.lifecycle_hook_name)
            .field("AutoScalingGroupName", &self.auto_scaling_group_name)
            .field("LifecycleActionToken", &self.lifecycle_action_token)
            .field("InstanceId", &self.instance_id)
            .finish()
    }
}

impl HashCode for RecordLifecycleActionHeartbeatRequest {
    fn hash_code(&self) -> i32 {
        hash_combine(&[
            self.lifecycle_hook_name.hash_code(),
            self.auto_scaling_group_name.hash_code(),
            self.lifecycle_action_token.hash_code(),
            self.instance_id.hash_code(),
        ])
    }
}

impl ToQuery for RecordLifecycleActionHeartbeatRequest {
    fn write_query(&self, writer: &mut QueryWriter, key: &str) {
        writer.field(key, "LifecycleHookName", &self.lifecycle_hook_name);
        writer.field(key, "AutoScalingGroupName", &self.auto_scaling_group_name);
        writer.field(key, "LifecycleActionToken", &self.lifecycle_action_token);
        writer.field(key, "InstanceId", &self.instance_id);
    }
}

/// Output of `RecordLifecycleActionHeartbeat`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordLifecycleActionHeartbeatResult {}

impl fmt::Display for RecordLifecycleActionHeartbeatResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ModelFormatter::new(f).finish()
    }
}

impl HashCode for RecordLifecycleActionHeartbeatResult {
    fn hash_code(&self) -> i32 {
        hash_combine(&[])
    }
}

impl FromXml for RecordLifecycleActionHeartbeatResult {
    fn from_xml(_node: Node) -> Result<Self> {
        Ok(RecordLifecycleActionHeartbeatResult::default())
    }
}
