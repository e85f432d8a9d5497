//! Scheduled capacity changes, one at a time or in batches of up to 50.

use super::{hash_combine, HashCode, ModelFormatter};
use crate::error::Result;
use crate::query::{QueryWriter, ToQuery};
use crate::xml::{self, FromXml};
use chrono::{DateTime, Utc};
use roxmltree::Node;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A scheduled change to the size of a group.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduledUpdateGroupAction {
    #[serde(rename = "AutoScalingGroupName", skip_serializing_if = "Option::is_none")]
    auto_scaling_group_name: Option<String>,
    #[serde(rename = "ScheduledActionName", skip_serializing_if = "Option::is_none")]
    scheduled_action_name: Option<String>,
    #[serde(rename = "ScheduledActionARN", skip_serializing_if = "Option::is_none")]
    scheduled_action_arn: Option<String>,
    #[serde(rename = "Time", skip_serializing_if = "Option::is_none")]
    time: Option<DateTime<Utc>>,
    #[serde(rename = "StartTime", skip_serializing_if = "Option::is_none")]
    start_time: Option<DateTime<Utc>>,
    #[serde(rename = "EndTime", skip_serializing_if = "Option::is_none")]
    end_time: Option<DateTime<Utc>>,
    #[serde(rename = "Recurrence", skip_serializing_if = "Option::is_none")]
    recurrence: Option<String>,
    #[serde(rename = "MinSize", skip_serializing_if = "Option::is_none")]
    min_size: Option<i32>,
    #[serde(rename = "MaxSize", skip_serializing_if = "Option::is_none")]
    max_size: Option<i32>,
    #[serde(rename = "DesiredCapacity", skip_serializing_if = "Option::is_none")]
    desired_capacity: Option<i32>,
}

impl ScheduledUpdateGroupAction {
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

    pub fn scheduled_action_name(&self) -> Option<&str> {
        self.scheduled_action_name.as_deref()
    }

    pub fn set_scheduled_action_name(&mut self, scheduled_action_name: Option<String>) {
        self.scheduled_action_name = scheduled_action_name;
    }

    pub fn with_scheduled_action_name(mut self, scheduled_action_name: impl Into<String>) -> Self {
        self.scheduled_action_name = Some(scheduled_action_name.into());
        self
    }

    pub fn scheduled_action_arn(&self) -> Option<&str> {
        self.scheduled_action_arn.as_deref()
    }

    pub fn set_scheduled_action_arn(&mut self, scheduled_action_arn: Option<String>) {
        self.scheduled_action_arn = scheduled_action_arn;
    }

    pub fn with_scheduled_action_arn(mut self, scheduled_action_arn: impl Into<String>) -> Self {
        self.scheduled_action_arn = Some(scheduled_action_arn.into());
        self
    }

    /// Superseded by `StartTime`.
    pub fn time(&self) -> Option<DateTime<Utc>> {
        self.time
    }

    pub fn set_time(&mut self, time: Option<DateTime<Utc>>) {
        self.time = time;
    }

    pub fn with_time(mut self, time: DateTime<Utc>) -> Self {
        self.time = Some(time);
        self
    }

    pub fn start_time(&self) -> Option<DateTime<Utc>> {
        self.start_time
    }

    pub fn set_start_time(&mut self, start_time: Option<DateTime<Utc>>) {
        self.start_time = start_time;
    }

    pub fn with_start_time(mut self, start_time: DateTime<Utc>) -> Self {
        self.start_time = Some(start_time);
        self
    }

    pub fn end_time(&self) -> Option<DateTime<Utc>> {
        self.end_time
    }

    pub fn set_end_time(&mut self, end_time: Option<DateTime<Utc>>) {
        self.end_time = end_time;
    }

    pub fn with_end_time(mut self, end_time: DateTime<Utc>) -> Self {
        self.end_time = Some(end_time);
        self
    }

    /// Unix cron expression, in UTC.
    pub fn recurrence(&self) -> Option<&str> {
        self.recurrence.as_deref()
    }

    pub fn set_recurrence(&mut self, recurrence: Option<String>) {
        self.recurrence = recurrence;
    }

    pub fn with_recurrence(mut self, recurrence: impl Into<String>) -> Self {
        self.recurrence = Some(recurrence.into());
        self
    }

    pub fn min_size(&self) -> Option<i32> {
        self.min_size
    }

    pub fn set_min_size(&mut self, min_size: Option<i32>) {
        self.min_size = min_size;
    }

    pub fn with_min_size(mut self, min_size: i32) -> Self {
        self.min_size = Some(min_size);
        self
    }

    pub fn max_size(&self) -> Option<i32> {
        self.max_size
    }

    pub fn set_max_size(&mut self, max_size: Option<i32>) {
        self.max_size = max_size;
    }

    pub fn with_max_size(mut self, max_size: i32) -> Self {
        self.max_size = Some(max_size);
        self
    }

    pub fn desired_capacity(&self) -> Option<i32> {
        self.desired_capacity
    }

    pub fn set_desired_capacity(&mut self, desired_capacity: Option<i32>) {
        self.desired_capacity = desired_capacity;
    }

    pub fn with_desired_capacity(mut self, desired_capacity: i32) -> Self {
        self.desired_capacity = Some(desired_capacity);
        self
    }
}

impl fmt::Display for ScheduledUpdateGroupAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ModelFormatter::new(f)
            .field("AutoScalingGroupName", &self.auto_scaling_group_name)
            .field("ScheduledActionName", &self.scheduled_action_name)
            .field("ScheduledActionARN", &self.scheduled_action_arn)
            .time("Time", &self.time)
            .time("StartTime", &self.start_time)
            .time("EndTime", &self.end_time)
            .field("Recurrence", &self.recurrence)
            .field("MinSize", &self.min_size)
            .field("MaxSize", &self.max_size)
            .field("DesiredCapacity", &self.desired_capacity)
            .finish()
    }
}

impl HashCode for ScheduledUpdateGroupAction {
    fn hash_code(&self) -> i32 {
        hash_combine(&[
            self.auto_scaling_group_name.hash_code(),
            self.scheduled_action_name.hash_code(),
            self.scheduled_action_arn.hash_code(),
            self.time.hash_code(),
            self.start_time.hash_code(),
            self.end_time.hash_code(),
            self.recurrence.hash_code(),
            self.min_size.hash_code(),
            self.max_size.hash_code(),
            self.desired_capacity.hash_code(),
        ])
    }
}

impl ToQuery for ScheduledUpdateGroupAction {
    fn write_query(&self, writer: &mut QueryWriter, key: &str) {
        writer.field(key, "AutoScalingGroupName", &self.auto_scaling_group_name);
        writer.field(key, "ScheduledActionName", &self.scheduled_action_name);
        writer.field(key, "ScheduledActionARN", &self.scheduled_action_arn);
        writer.field(key, "Time", &self.time);
        writer.field(key, "StartTime", &self.start_time);
        writer.field(key, "EndTime", &self.end_time);
        writer.field(key, "Recurrence", &self.recurrence);
        writer.field(key, "MinSize", &self.min_size);
        writer.field(key, "MaxSize", &self.max_size);
        writer.field(key, "DesiredCapacity", &self.desired_capacity);
    }
}

impl FromXml for ScheduledUpdateGroupAction {
    fn from_xml(node: Node) -> Result<Self> {
        let mut out = ScheduledUpdateGroupAction::default();
        for child in node.children().filter(Node::is_element) {
            match child.tag_name().name() {
                "AutoScalingGroupName" => {
                    out.auto_scaling_group_name = Some(FromXml::from_xml(child)?);
                }
                "ScheduledActionName" => {
                    out.scheduled_action_name = Some(FromXml::from_xml(child)?);
                }
                "ScheduledActionARN" => out.scheduled_action_arn = Some(FromXml::from_xml(child)?),
                "Time" => out.time = Some(FromXml::from_xml(child)?),
                "StartTime" => out.start_time = Some(FromXml::from_xml(child)?),
                "EndTime" => out.end_time = Some(FromXml::from_xml(child)?),
                "Recurrence" => out.recurrence = Some(FromXml::from_xml(child)?),
                "MinSize" => out.min_size = Some(FromXml::from_xml(child)?),
                "MaxSize" => out.max_size = Some(FromXml::from_xml(child)?),
                "DesiredCapacity" => out.desired_capacity = Some(FromXml::from_xml(child)?),
                _ => {}
            }
        }
        Ok(out)
    }
}

/// One entry of a batched scheduled action update.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduledUpdateGroupActionRequest {
    #[serde(rename = "ScheduledActionName", skip_serializing_if = "Option::is_none")]
    scheduled_action_name: Option<String>,
    #[serde(rename = "StartTime", skip_serializing_if = "Option::is_none")]
    start_time: Option<DateTime<Utc>>,
    #[serde(rename = "EndTime", skip_serializing_if = "Option::is_none")]
    end_time: Option<DateTime<Utc>>,
    #[serde(rename = "Recurrence", skip_serializing_if = "Option::is_none")]
    recurrence: Option<String>,
    #[serde(rename = "MinSize", skip_serializing_if = "Option::is_none")]
    min_size: Option<i32>,
    #[serde(rename = "MaxSize", skip_serializing_if = "Option::is_none")]
    max_size: Option<i32>,
    #[serde(rename = "DesiredCapacity", skip_serializing_if = "Option::is_none")]
    desired_capacity: Option<i32>,
}

impl ScheduledUpdateGroupActionRequest {
    /// Length 1-255.
    pub fn scheduled_action_name(&self) -> Option<&str> {
        self.scheduled_action_name.as_deref()
    }

    pub fn set_scheduled_action_name(&mut self, scheduled_action_name: Option<String>) {
        self.scheduled_action_name = scheduled_action_name;
    }

    pub fn with_scheduled_action_name(mut self, scheduled_action_name: impl Into<String>) -> Self {
        self.scheduled_action_name = Some(scheduled_action_name.into());
        self
    }

    pub fn start_time(&self) -> Option<DateTime<Utc>> {
        self.start_time
    }

    pub fn set_start_time(&mut self, start_time: Option<DateTime<Utc>>) {
        self.start_time = start_time;
    }

    pub fn with_start_time(mut self, start_time: DateTime<Utc>) -> Self {
        self.start_time = Some(start_time);
        self
    }

    pub fn end_time(&self) -> Option<DateTime<Utc>> {
        self.end_time
    }

    pub fn set_end_time(&mut self, end_time: Option<DateTime<Utc>>) {
        self.end_time = end_time;
    }

    pub fn with_end_time(mut self, end_time: DateTime<Utc>) -> Self {
        self.end_time = Some(end_time);
        self
    }

    pub fn recurrence(&self) -> Option<&str> {
        self.recurrence.as_deref()
    }

    pub fn set_recurrence(&mut self, recurrence: Option<String>) {
        self.recurrence = recurrence;
    }

    pub fn with_recurrence(mut self, recurrence: impl Into<String>) -> Self {
        self.recurrence = Some(recurrence.into());
        self
    }

    pub fn min_size(&self) -> Option<i32> {
        self.min_size
    }

    pub fn set_min_size(&mut self, min_size: Option<i32>) {
        self.min_size = min_size;
    }

    pub fn with_min_size(mut self, min_size: i32) -> Self {
        self.min_size = Some(min_size);
        self
    }

    pub fn max_size(&self) -> Option<i32> {
        self.max_size
    }

    pub fn set_max_size(&mut self, max_size: Option<i32>) {
        self.max_size = max_size;
    }

    pub fn with_max_size(mut self, max_size: i32) -> Self {
        self.max_size = Some(max_size);
        self
    }

    pub fn desired_capacity(&self) -> Option<i32> {
        self.desired_capacity
    }

    pub fn set_desired_capacity(&mut self, desired_capacity: Option<i32>) {
        self.desired_capacity = desired_capacity;
    }

    pub fn with_desired_capacity(mut self, desired_capacity: i32) -> Self {
        self.desired_capacity = Some(desired_capacity);
        self
    }
}

impl fmt::Display for ScheduledUpdateGroupActionRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ModelFormatter::new(f)
            .field("ScheduledActionName", &self.scheduled_action_name)
            .time("StartTime", &self.start_time)
            .time("EndTime", &self.end_time)
            .field("Recurrence", &self.recurrence)
            .field("MinSize", &self.min_size)
            .field("MaxSize", &self.max_size)
            .field("DesiredCapacity", &self.desired_capacity)
            .finish()
    }
}

impl HashCode for ScheduledUpdateGroupActionRequest {
    fn hash_code(&self) -> i32 {
        hash_combine(&[
            self.scheduled_action_name.hash_code(),
            self.start_time.hash_code(),
            self.end_time.hash_code(),
            self.recurrence.hash_code(),
            self.min_size.hash_code(),
            self.max_size.hash_code(),
            self.desired_capacity.hash_code(),
        ])
    }
}

impl ToQuery for ScheduledUpdateGroupActionRequest {
    fn write_query(&self, writer: &mut QueryWriter, key: &str) {
        writer.field(key, "ScheduledActionName", &self.scheduled_action_name);
        writer.field(key, "StartTime", &self.start_time);
        writer.field(key, "EndTime", &self.end_time);
        writer.field(key, "Recurrence", &self.recurrence);
        writer.field(key, "MinSize", &self.min_size);
        writer.field(key, "MaxSize", &self.max_size);
        writer.field(key, "DesiredCapacity", &self.desired_capacity);
    }
}

impl FromXml for ScheduledUpdateGroupActionRequest {
    fn from_xml(node: Node) -> Result<Self> {
        let mut out = ScheduledUpdateGroupActionRequest::default();
        for child in node.children().filter(Node::is_element) {
            match child.tag_name().name() {
                "ScheduledActionName" => {
                    out.scheduled_action_name = Some(FromXml::from_xml(child)?);
                }
                "StartTime" => out.start_time = Some(FromXml::from_xml(child)?),
                "EndTime" => out.end_time = Some(FromXml::from_xml(child)?),
                "Recurrence" => out.recurrence = Some(FromXml::from_xml(child)?),
                "MinSize" => out.min_size = Some(FromXml::from_xml(child)?),
                "MaxSize" => out.max_size = Some(FromXml::from_xml(child)?),
                "DesiredCapacity" => out.desired_capacity = Some(FromXml::from_xml(child)?),
                _ => {}
            }
        }
        Ok(out)
    }
}

/// A scheduled action a batch operation could not apply.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct FailedScheduledUpdateGroupActionRequest {
    #[serde(rename = "ScheduledActionName", skip_serializing_if = "Option::is_none")]
    scheduled_action_name: Option<String>,
    #[serde(rename = "ErrorCode", skip_serializing_if = "Option::is_none")]
    error_code: Option<String>,
    #[serde(rename = "ErrorMessage", skip_serializing_if = "Option::is_none")]
    error_message: Option<String>,
}

impl FailedScheduledUpdateGroupActionRequest {
    pub fn scheduled_action_name(&self) -> Option<&str> {
        self.scheduled_action_name.as_deref()
    }

    pub fn set_scheduled_action_name(&mut self, scheduled_action_name: Option<String>) {
        self.scheduled_action_name = scheduled_action_name;
    }

    pub fn with_scheduled_action_name(mut self, scheduled_action_name: impl Into<String>) -> Self {
        self.scheduled_action_name = Some(scheduled_action_name.into());
        self
    }

    pub fn error_code(&self) -> Option<&str> {
        self.error_code.as_deref()
    }

    pub fn set_error_code(&mut self, error_code: Option<String>) {
        self.error_code = error_code;
    }

    pub fn with_error_code(mut self, error_code: impl Into<String>) -> Self {
        self.error_code = Some(error_code.into());
        self
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn set_error_message(&mut self, error_message: Option<String>) {
        self.error_message = error_message;
    }

    pub fn with_error_message(mut self, error_message: impl Into<String>) -> Self {
        self.error_message = Some(error_message.into());
        self
    }
}

impl fmt::Display for FailedScheduledUpdateGroupActionRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ModelFormatter::new(f)
            .field("ScheduledActionName", &self.scheduled_action_name)
            .field("ErrorCode", &self.error_code)
            .field("ErrorMessage", &self.error_message)
            .finish()
    }
}

impl HashCode for FailedScheduledUpdateGroupActionRequest {
    fn hash_code(&self) -> i32 {
        hash_combine(&[
            self.scheduled_action_name.hash_code(),
            self.error_code.hash_code(),
            self.error_message.hash_code(),
        ])
    }
}

impl ToQuery for FailedScheduledUpdateGroupActionRequest {
    fn write_query(&self, writer: &mut QueryWriter, key: &str) {
        writer.field(key, "ScheduledActionName", &self.scheduled_action_name);
        writer.field(key, "ErrorCode", &self.error_code);
        writer.field(key, "ErrorMessage", &self.error_message);
    }
}

impl FromXml for FailedScheduledUpdateGroupActionRequest {
    fn from_xml(node: Node) -> Result<Self> {
        let mut out = FailedScheduledUpdateGroupActionRequest::default();
        for child in node.children().filter(Node::is_element) {
            match child.tag_name().name() {
                "ScheduledActionName" => {
                    out.scheduled_action_name = Some(FromXml::from_xml(child)?);
                }
                "ErrorCode" => out.error_code = Some(FromXml::from_xml(child)?),
                "ErrorMessage" => out.error_message = Some(FromXml::from_xml(child)?),
                _ => {}
            }
        }
        Ok(out)
    }
}

/// Input of `BatchDeleteScheduledAction`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchDeleteScheduledActionRequest {
    #[serde(rename = "AutoScalingGroupName", skip_serializing_if = "Option::is_none")]
    auto_scaling_group_name: Option<String>,
    #[serde(rename = "ScheduledActionNames", skip_serializing_if = "Option::is_none")]
    scheduled_action_names: Option<Vec<String>>,
}

impl Default for BatchDeleteScheduledActionRequest {
    fn default() -> Self {
        BatchDeleteScheduledActionRequest {
            auto_scaling_group_name: None,
            scheduled_action_names: Some(Vec::new()),
        }
    }
}

impl BatchDeleteScheduledActionRequest {
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

    /// Up to 50 names.
    pub fn scheduled_action_names(&self) -> Option<&[String]> {
        self.scheduled_action_names.as_deref()
    }

    pub fn set_scheduled_action_names(&mut self, scheduled_action_names: Option<Vec<String>>) {
        self.scheduled_action_names = scheduled_action_names;
    }

    pub fn with_scheduled_action_names<I>(mut self, scheduled_action_names: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.scheduled_action_names
            .get_or_insert_with(Vec::new)
            .extend(scheduled_action_names.into_iter().map(Into::into));
        self
    }
}

impl fmt::Display for BatchDeleteScheduledActionRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ModelFormatter::new(f)
            .field("AutoScalingGroupName", &self.auto_scaling_group_name)
            .list("ScheduledActionNames", &self.scheduled_action_names)
            .finish()
    }
}

impl HashCode for BatchDeleteScheduledActionRequest {
    fn hash_code(&self) -> i32 {
        hash_combine(&[
            self.auto_scaling_group_name.hash_code(),
            self.scheduled_action_names.hash_code(),
        ])
    }
}

impl ToQuery for BatchDeleteScheduledActionRequest {
    fn write_query(&self, writer: &mut QueryWriter, key: &str) {
        writer.field(key, "AutoScalingGroupName", &self.auto_scaling_group_name);
        writer.list(key, "ScheduledActionNames", &self.scheduled_action_names);
    }
}

/// Output of `BatchDeleteScheduledAction`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchDeleteScheduledActionResult {
    #[serde(rename = "FailedScheduledActions", skip_serializing_if = "Option::is_none")]
    failed_scheduled_actions: Option<Vec<FailedScheduledUpdateGroupActionRequest>>,
}

impl Default for BatchDeleteScheduledActionResult {
    fn default() -> Self {
        BatchDeleteScheduledActionResult {
            failed_scheduled_actions: Some(Vec::new()),
        }
    }
}

impl BatchDeleteScheduledActionResult {
    pub fn failed_scheduled_actions(&self) -> Option<&[FailedScheduledUpdateGroupActionRequest]> {
        self.failed_scheduled_actions.as_deref()
    }

    pub fn set_failed_scheduled_actions(
        &mut self,
        failed_scheduled_actions: Option<Vec<FailedScheduledUpdateGroupActionRequest>>,
    ) {
        self.failed_scheduled_actions = failed_scheduled_actions;
    }

    pub fn with_failed_scheduled_actions<I>(mut self, failed_scheduled_actions: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<FailedScheduledUpdateGroupActionRequest>,
    {
        self.failed_scheduled_actions
            .get_or_insert_with(Vec::new)
            .extend(failed_scheduled_actions.into_iter().map(Into::into));
        self
    }
}

impl fmt::Display for BatchDeleteScheduledActionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ModelFormatter::new(f)
            .list("FailedScheduledActions", &self.failed_scheduled_actions)
            .finish()
    }
}

impl HashCode for BatchDeleteScheduledActionResult {
    fn hash_code(&self) -> i32 {
        hash_combine(&[
            self.failed_scheduled_actions.hash_code(),
        ])
    }
}

impl FromXml for BatchDeleteScheduledActionResult {
    fn from_xml(node: Node) -> Result<Self> {
        let mut out = BatchDeleteScheduledActionResult::default();
        for child in node.children().filter(Node::is_element) {
            match child.tag_name().name() {
                "FailedScheduledActions" => out.failed_scheduled_actions = Some(xml::list(child)?),
                _ => {}
            }
        }
        Ok(out)
    }
}

/// Input of `BatchPutScheduledUpdateGroupAction`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchPutScheduledUpdateGroupActionRequest {
    #[serde(rename = "AutoScalingGroupName", skip_serializing_if = "Option::is_none")]
    auto_scaling_group_name: Option<String>,
    #[serde(rename = "ScheduledUpdateGroupActions", skip_serializing_if = "Option::is_none")]
    scheduled_update_group_actions: Option<Vec<ScheduledUpdateGroupActionRequest>>,
}

impl Default for BatchPutScheduledUpdateGroupActionRequest {
    fn default() -> Self {
        BatchPutScheduledUpdateGroupActionRequest {
            auto_scaling_group_name: None,
            scheduled_update_group_actions: Some(Vec::new()),
        }
    }
}

impl BatchPutScheduledUpdateGroupActionRequest {
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

    /// Up to 50 actions.
    pub fn scheduled_update_group_actions(&self) -> Option<&[ScheduledUpdateGroupActionRequest]> {
        self.scheduled_update_group_actions.as_deref()
    }

    pub fn set_scheduled_update_group_actions(
        &mut self,
        scheduled_update_group_actions: Option<Vec<ScheduledUpdateGroupActionRequest>>,
    ) {
        self.scheduled_update_group_actions = scheduled_update_group_actions;
    }

    pub fn with_scheduled_update_group_actions<I>(mut self, scheduled_update_group_actions: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<ScheduledUpdateGroupActionRequest>,
    {
        self.scheduled_update_group_actions
            .get_or_insert_with(Vec::new)
            .extend(scheduled_update_group_actions.into_iter().map(Into::into));
        self
    }
}

impl fmt::Display for BatchPutScheduledUpdateGroupActionRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ModelFormatter::new(f)
            .field("AutoScalingGroupName", &self.auto_scaling_group_name)
            .list("ScheduledUpdateGroupActions", &self.scheduled_update_group_actions)
            .finish()
    }
}

impl HashCode for BatchPutScheduledUpdateGroupActionRequest {
    fn hash_code(&self) -> i32 {
        hash_combine(&[
            self.auto_scaling_group_name.hash_code(),
            self.scheduled_update_group_actions.hash_code(),
        ])
    }
}

impl ToQuery for BatchPutScheduledUpdateGroupActionRequest {
    fn write_query(&self, writer: &mut QueryWriter, key: &str) {
        writer.field(key, "AutoScalingGroupName", &self.auto_scaling_group_name);
        writer.list(key, "ScheduledUpdateGroupActions", &self.scheduled_update_group_actions);
    }
}

/// Output of `BatchPutScheduledUpdateGroupAction`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchPutScheduledUpdateGroupActionResult {
    #[serde(rename = "FailedScheduledUpdateGroupActions", skip_serializing_if = "Option::is_none")]
    failed_scheduled_update_group_actions: Option<Vec<FailedScheduledUpdateGroupActionRequest>>,
}

impl Default for BatchPutScheduledUpdateGroupActionResult {
    fn default() -> Self {
        BatchPutScheduledUpdateGroupActionResult {
            failed_scheduled_update_group_actions: Some(Vec::new()),
        }
    }
}

impl BatchPutScheduledUpdateGroupActionResult {
    pub fn failed_scheduled_update_group_actions(&self) -> Option<&[FailedScheduledUpdateGroupActionRequest]> {
        self.failed_scheduled_update_group_actions.as_deref()
    }

    pub fn set_failed_scheduled_update_group_actions(
        &mut self,
        failed_scheduled_update_group_actions: Option<Vec<FailedScheduledUpdateGroupActionRequest>>,
    ) {
        self.failed_scheduled_update_group_actions = failed_scheduled_update_group_actions;
    }

    pub fn with_failed_scheduled_update_group_actions<I>(mut self, failed_scheduled_update_group_actions: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<FailedScheduledUpdateGroupActionRequest>,
    {
        self.failed_scheduled_update_group_actions
            .get_or_insert_with(Vec::new)
            .extend(failed_scheduled_update_group_actions.into_iter().map(Into::into));
        self
    }
}

impl fmt::Display for BatchPutScheduledUpdateGroupActionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ModelFormatter::new(f)
            .list("FailedScheduledUpdateGroupActions", &self.failed_scheduled_update_group_actions)
            .finish()
    }
}

impl HashCode for BatchPutScheduledUpdateGroupActionResult {
    fn hash_code(&self) -> i32 {
        hash_combine(&[
            self.failed_scheduled_update_group_actions.hash_code(),
        ])
    }
}

impl FromXml for BatchPutScheduledUpdateGroupActionResult {
    fn from_xml(node: Node) -> Result<Self> {
        let mut out = BatchPutScheduledUpdateGroupActionResult::default();
        for child in node.children().filter(Node::is_element) {
            match child.tag_name().name() {
                "FailedScheduledUpdateGroupActions" => {
                    out.failed_scheduled_update_group_actions = Some(xml::list(child)?);
                }
                _ => {}
            }
        }
        Ok(out)
    }
}

/// Input of `DeleteScheduledAction`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct DeleteScheduledActionRequest {
    #[serde(rename = "AutoScalingGroupName", skip_serializing_if = "Option::is_none")]
    auto_scaling_group_name: Option<String>,
    #[serde(rename = "ScheduledActionName", skip_serializing_if = "Option::is_none")]
    scheduled_action_name: Option<String>,
}

impl DeleteScheduledActionRequest {
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

    pub fn scheduled_action_name(&self) -> Option<&str> {
        self.scheduled_action_name.as_deref()
    }

    pub fn set_scheduled_action_name(&mut self, scheduled_action_name: Option<String>) {
        self.scheduled_action_name = scheduled_action_name;
    }

    pub fn with_scheduled_action_name(mut self, scheduled_action_name: impl Into<String>) -> Self {
        self.scheduled_action_name = Some(scheduled_action_name.into());
        self
    }
}

impl fmt::Display for DeleteScheduledActionRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ModelFormatter::new(f)
            .field("AutoScalingGroupName", &self.auto_scaling_group_name)
            .field("ScheduledActionName", &self.scheduled_action_name)
            .finish()
    }
}

impl HashCode for DeleteScheduledActionRequest {
    fn hash_code(&self) -> i32 {
        hash_combine(&[
            self.auto_scaling_group_name.hash_code(),
            self.scheduled_action_name.hash_code(),
        ])
    }
}

impl ToQuery for DeleteScheduledActionRequest {
    fn write_query(&self, writer: &mut QueryWriter, key: &str) {
        writer.field(key, "AutoScalingGroupName", &self.auto_scaling_group_name);
        writer.field(key, "ScheduledActionName", &self.scheduled_action_name);
    }
}

/// Input of `DescribeScheduledActions`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct DescribeScheduledActionsRequest {
    #[serde(rename = "AutoScalingGroupName", skip_serializing_if = "Option::is_none")]
    auto_scaling_group_name: Option<String>,
    #[serde(rename = "ScheduledActionNames", skip_serializing_if = "Option::is_none")]
    scheduled_action_names: Option<Vec<String>>,
    #[serde(rename = "StartTime", skip_serializing_if = "Option::is_none")]
    start_time: Option<DateTime<Utc>>,
    #[serde(rename = "EndTime", skip_serializing_if = "Option::is_none")]
    end_time: Option<DateTime<Utc>>,
    #[serde(rename = "NextToken", skip_serializing_if = "Option::is_none")]
    next_token: Option<String>,
    #[serde(rename = "MaxRecords", skip_serializing_if = "Option::is_none")]
    max_records: Option<i32>,
}

impl Default for DescribeScheduledActionsRequest {
    fn default() -> Self {
        DescribeScheduledActionsRequest {
            auto_scaling_group_name: None,
            scheduled_action_names: Some(Vec::new()),
            start_time: None,
            end_time: None,
            next_token: None,
            max_records: None,
        }
    }
}

impl DescribeScheduledActionsRequest {
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

    /// Up to 50 names.
    pub fn scheduled_action_names(&self) -> Option<&[String]> {
        self.scheduled_action_names.as_deref()
    }

    pub fn set_scheduled_action_names(&mut self, scheduled_action_names: Option<Vec<String>>) {
        self.scheduled_action_names = scheduled_action_names;
    }

    pub fn with_scheduled_action_names<I>(mut self, scheduled_action_names: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.scheduled_action_names
            .get_or_insert_with(Vec::new)
            .extend(scheduled_action_names.into_iter().map(Into::into));
        self
    }

    pub fn start_time(&self) -> Option<DateTime<Utc>> {
        self.start_time
    }

    pub fn set_start_time(&mut self, start_time: Option<DateTime<Utc>>) {
        self.start_time = start_time;
    }

    pub fn with_start_time(mut self, start_time: DateTime<Utc>) -> Self {
        self.start_time = Some(start_time);
        self
    }

    pub fn end_time(&self) -> Option<DateTime<Utc>> {
        self.end_time
    }

    pub fn set_end_time(&mut self, end_time: Option<DateTime<Utc>>) {
        self.end_time = end_time;
    }

    pub fn with_end_time(mut self, end_time: DateTime<Utc>) -> Self {
        self.end_time = Some(end_time);
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

impl fmt::Display for DescribeScheduledActionsRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ModelFormatter::new(f)
            .field("AutoScalingGroupName", &self.auto_scaling_group_name)
            .list("ScheduledActionNames", &self.scheduled_action_names)
            .time("StartTime", &self.start_time)
            .time("EndTime", &self.end_time)
            .field("NextToken", &self.next_token)
            .field("MaxRecords", &self.max_records)
            .finish()
    }
}

impl HashCode for DescribeScheduledActionsRequest {
    fn hash_code(&self) -> i32 {
        hash_combine(&[
            self.auto_scaling_group_name.hash_code(),
            self.scheduled_action_names.hash_code(),
            self.start_time.hash_code(),
            self.end_time.hash_code(),
            self.next_token.hash_code(),
            self.max_records.hash_code(),
        ])
    }
}

impl ToQuery for DescribeScheduledActionsRequest {
    fn write_query(&self, writer: &mut QueryWriter, key: &str) {
        writer.field(key, "AutoScalingGroupName", &self.auto_scaling_group_name);
        writer.list(key, "ScheduledActionNames", &self.scheduled_action_names);
        writer.field(key, "StartTime", &self.start_time);
        writer.field(key, "EndTime", &self.end_time);
        writer.field(key, "NextToken", &self.next_token);
        writer.field(key, "MaxRecords", &self.max_records);
    }
}

/// Output of `DescribeScheduledActions`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct DescribeScheduledActionsResult {
    #[serde(rename = "ScheduledUpdateGroupActions", skip_serializing_if = "Option::is_none")]
    scheduled_update_group_actions: Option<Vec<ScheduledUpdateGroupAction>>,
    #[serde(rename = "NextToken", skip_serializing_if = "Option::is_none")]
    next_token: Option<String>,
}

impl Default for DescribeScheduledActionsResult {
    fn default() -> Self {
        DescribeScheduledActionsResult {
            scheduled_update_group_actions: Some(Vec::new()),
            next_token: None,
        }
    }
}

impl DescribeScheduledActionsResult {
    pub fn scheduled_update_group_actions(&self) -> Option<&[ScheduledUpdateGroupAction]> {
        self.scheduled_update_group_actions.as_deref()
    }

    pub fn set_scheduled_update_group_actions(
        &mut self,
        scheduled_update_group_actions: Option<Vec<ScheduledUpdateGroupAction>>,
    ) {
        self.scheduled_update_group_actions = scheduled_update_group_actions;
    }

    pub fn with_scheduled_update_group_actions<I>(mut self, scheduled_update_group_actions: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<ScheduledUpdateGroupAction>,
    {
        self.scheduled_update_group_actions
            .get_or_insert_with(Vec::new)
            .extend(scheduled_update_group_actions.into_iter().map(Into::into));
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

impl fmt::Display for DescribeScheduledActionsResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ModelFormatter::new(f)
            .list("ScheduledUpdateGroupActions", &self.scheduled_update_group_actions)
            .field("NextToken", &self.next_token)
            .finish()
    }
}

impl HashCode for DescribeScheduledActionsResult {
    fn hash_code(&self) -> i32 {
        hash_combine(&[
            self.scheduled_update_group_actions.hash_code(),
            self.next_token.hash_code(),
        ])
    }
}

impl FromXml for DescribeScheduledActionsResult {
    fn from_xml(node: Node) -> Result<Self> {
        let mut out = DescribeScheduledActionsResult::default();
        for child in node.children().filter(Node::is_element) {
            match child.tag_name().name() {
                "ScheduledUpdateGroupActions" => {
                    out.scheduled_update_group_actions = Some(xml::list(child)?);
                }
                "NextToken" => out.next_token = Some(FromXml::from_xml(child)?),
                _ => {}
            }
        }
        Ok(out)
    }
}

/// Input of `PutScheduledUpdateGroupAction`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct PutScheduledUpdateGroupActionRequest {
    #[serde(rename = "AutoScalingGroupName", skip_serializing_if = "Option::is_none")]
    auto_scaling_group_name: Option<String>,
    #[serde(rename = "ScheduledActionName", skip_serializing_if = "Option::is_none")]
    scheduled_action_name: Option<String>,
    #[serde(rename = "Time", skip_serializing_if = "Option::is_none")]
    time: Option<DateTime<Utc>>,
    #[serde(rename = "StartTime", skip_serializing_if = "Option::is_none")]
    start_time: Option<DateTime<Utc>>,
    #[serde(rename = "EndTime", skip_serializing_if = "Option::is_none")]
    end_time: Option<DateTime<Utc>>,
    #[serde(rename = "Recurrence", skip_serializing_if = "Option::is_none")]
    recurrence: Option<String>,
    #[serde(rename = "MinSize", skip_serializing_if = "Option::is_none")]
    min_size: Option<i32>,
    #[serde(rename = "MaxSize", skip_serializing_if = "Option::is_none")]
    max_size: Option<i32>,
    #[serde(rename = "DesiredCapacity", skip_serializing_if = "Option::is_none")]
    desired_capacity: Option<i32>,
}

impl PutScheduledUpdateGroupActionRequest {
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

    pub fn scheduled_action_name(&self) -> Option<&str> {
        self.scheduled_action_name.as_deref()
    }

    pub fn set_scheduled_action_name(&mut self, scheduled_action_name: Option<String>) {
        self.scheduled_action_name = scheduled_action_name;
    }

    pub fn with_scheduled_action_name(mut self, scheduled_action_name: impl Into<String>) -> Self {
        self.scheduled_action_name = Some(scheduled_action_name.into());
        self
    }

    pub fn time(&self) -> Option<DateTime<Utc>> {
        self.time
    }

    pub fn set_time(&mut self, time: Option<DateTime<Utc>>) {
        self.time = time;
    }

    pub fn with_time(mut self, time: DateTime<Utc>) -> Self {
        self.time = Some(time);
        self
    }

    pub fn start_time(&self) -> Option<DateTime<Utc>> {
        self.start_time
    }

    pub fn set_start_time(&mut self, start_time: Option<DateTime<Utc>>) {
        self.start_time = start_time;
    }

    pub fn with_start_time(mut self, start_time: DateTime<Utc>) -> Self {
        self.start_time = Some(start_time);
        self
    }

    pub fn end_time(&self) -> Option<DateTime<Utc>> {
        self.end_time
    }

    pub fn set_end_time(&mut self, end_time: Option<DateTime<Utc>>) {
        self.end_time = end_time;
    }

    pub fn with_end_time(mut self, end_time: DateTime<Utc>) -> Self {
        self.end_time = Some(end_time);
        self
    }

    pub fn recurrence(&self) -> Option<&str> {
        self.recurrence.as_deref()
    }

    pub fn set_recurrence(&mut self, recurrence: Option<String>) {
        self.recurrence = recurrence;
    }

    pub fn with_recurrence(mut self, recurrence: impl Into<String>) -> Self {
        self.recurrence = Some(recurrence.into());
        self
    }

    pub fn min_size(&self) -> Option<i32> {
        self.min_size
    }

    pub fn set_min_size(&mut self, min_size: Option<i32>) {
        self.min_size = min_size;
    }

    pub fn with_min_size(mut self, min_size: i32) -> Self {
        self.min_size = Some(min_size);
        self
    }

    pub fn max_size(&self) -> Option<i32> {
        self.max_size
    }

    pub fn set_max_size(&mut self, max_size: Option<i32>) {
        self.max_size = max_size;
    }

    pub fn with_max_size(mut self, max_size: i32) -> Self {
        self.max_size = Some(max_size);
        self
    }

    pub fn desired_capacity(&self) -> Option<i32> {
        self.desired_capacity
    }

    pub fn set_desired_capacity(&mut self, desired_capacity: Option<i32>) {
        self.desired_capacity = desired_capacity;
    }

    pub fn with_desired_capacity(mut self, desired_capacity: i32) -> Self {
        self.desired_capacity = Some(desired_capacity);
        self
    }
}

impl fmt::Display for PutScheduledUpdateGroupActionRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ModelFormatter::new(f)
            .field("AutoScalingGroupName", &self.auto_scaling_group_name)
            .field("ScheduledActionName", &self.scheduled_action_name)
            .time("Time", &self.time)
            .time("StartTime", &self.start_time)
            .time("EndTime", &self.end_time)
            .field("Recurrence", &self.recurrence)
            .field("MinSize", &self.min_size)
            .field("MaxSize", &self.max_size)
            .field("DesiredCapacity", &self.desired_capacity)
            .finish()
    }
}

impl HashCode for PutScheduledUpdateGroupActionRequest {
    fn hash_code(&self) -> i32 {
        hash_combine(&[
            self.auto_scaling_group_name.hash_code(),
            self.scheduled_action_name.hash_code(),
            self.time.hash_code(),
            self.start_time.hash_code(),
            self.end_time.hash_code(),
            self.recurrence.hash_code(),
            self.min_size.hash_code(),
            self.max_size.hash_code(),
            self.desired_capacity.hash_code(),
        ])
    }
}

impl ToQuery for PutScheduledUpdateGroupActionRequest {
    fn write_query(&self, writer: &mut QueryWriter, key: &str) {
        writer.field(key, "AutoScalingGroupName", &self.auto_scaling_group_name);
        writer.field(key, "ScheduledActionName", &self.scheduled_action_name);
        writer.field(key, "Time", &self.time);
        writer.field(key, "StartTime", &self.start_time);
        writer.field(key, "EndTime", &self.end_time);
        writer.field(key, "Recurrence", &self.recurrence);
        writer.field(key, "MinSize", &self.min_size);
        writer.field(key, "MaxSize", &self.max_size);
        writer.field(key, "DesiredCapacity", &self.desired_capacity);
    }
}
