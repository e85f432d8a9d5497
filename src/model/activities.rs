use super::{hash_combine, HashCode, ModelFormatter, ScalingActivityStatusCode};
use crate::error::Result;
use crate::query::{QueryWriter, ToQuery};
use crate::xml::{self, FromXml};
use chrono::{DateTime, Utc};
use roxmltree::Node;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A scaling activity: a launch, a termination or a change of group size.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Activity {
    #[serde(rename = "ActivityId", skip_serializing_if = "Option::is_none")]
    activity_id: Option<String>,
    #[serde(rename = "AutoScalingGroupName", skip_serializing_if = "Option::is_none")]
    auto_scaling_group_name: Option<String>,
    #[serde(rename = "Description", skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(rename = "Cause", skip_serializing_if = "Option::is_none")]
    cause: Option<String>,
    #[serde(rename = "StartTime", skip_serializing_if = "Option::is_none")]
    start_time: Option<DateTime<Utc>>,
    #[serde(rename = "EndTime", skip_serializing_if = "Option::is_none")]
    end_time: Option<DateTime<Utc>>,
    #[serde(rename = "StatusCode", skip_serializing_if = "Option::is_none")]
    status_code: Option<ScalingActivityStatusCode>,
    #[serde(rename = "StatusMessage", skip_serializing_if = "Option::is_none")]
    status_message: Option<String>,
    #[serde(rename = "Progress", skip_serializing_if = "Option::is_none")]
    progress: Option<i32>,
    #[serde(rename = "Details", skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl Activity {
    pub fn activity_id(&self) -> Option<&str> {
        self.activity_id.as_deref()
    }

    pub fn set_activity_id(&mut self, activity_id: Option<String>) {
        self.activity_id = activity_id;
    }

    pub fn with_activity_id(mut self, activity_id: impl Into<String>) -> Self {
        self.activity_id = Some(activity_id.into());
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

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn set_description(&mut self, description: Option<String>) {
        self.description = description;
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn cause(&self) -> Option<&str> {
        self.cause.as_deref()
    }

    pub fn set_cause(&mut self, cause: Option<String>) {
        self.cause = cause;
    }

    pub fn with_cause(mut self, cause: impl Into<String>) -> Self {
        self.cause = Some(cause.into());
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

    pub fn status_code(&self) -> Option<&ScalingActivityStatusCode> {
        self.status_code.as_ref()
    }

    pub fn set_status_code(&mut self, status_code: Option<ScalingActivityStatusCode>) {
        self.status_code = status_code;
    }

    pub fn with_status_code(mut self, status_code: impl Into<ScalingActivityStatusCode>) -> Self {
        self.status_code = Some(status_code.into());
        self
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    pub fn set_status_message(&mut self, status_message: Option<String>) {
        self.status_message = status_message;
    }

    pub fn with_status_message(mut self, status_message: impl Into<String>) -> Self {
        self.status_message = Some(status_message.into());
        self
    }

    /// Percent.
    pub fn progress(&self) -> Option<i32> {
        self.progress
    }

    pub fn set_progress(&mut self, progress: Option<i32>) {
        self.progress = progress;
    }

    pub fn with_progress(mut self, progress: i32) -> Self {
        self.progress = Some(progress);
        self
    }

    pub fn details(&self) -> Option<&str> {
        self.details.as_deref()
    }

    pub fn set_details(&mut self, details: Option<String>) {
        self.details = details;
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ModelFormatter::new(f)
            .field("ActivityId", &self.activity_id)
            .field("AutoScalingGroupName", &self.auto_scaling_group_name)
            .field("Description", &self.description)
            .field("Cause", &self.cause)
            .time("StartTime", &self.start_time)
            .time("EndTime", &self.end_time)
            .field("StatusCode", &self.status_code)
            .field("StatusMessage", &self.status_message)
            .field("Progress", &self.progress)
            .field("Details", &self.details)
            .finish()
    }
}

impl HashCode for Activity {
    fn hash_code(&self) -> i32 {
        hash_combine(&[
            self.activity_id.hash_code(),
            self.auto_scaling_group_name.hash_code(),
            self.description.hash_code(),
            self.cause.hash_code(),
            self.start_time.hash_code(),
            self.end_time.hash_code(),
            self.status_code.hash_code(),
            self.status_message.hash_code(),
            self.progress.hash_code(),
            self.details.hash_code(),
        ])
    }
}

impl ToQuery for Activity {
    fn write_query(&self, writer: &mut QueryWriter, key: &str) {
        writer.field(key, "ActivityId", &self.activity_id);
        writer.field(key, "AutoScalingGroupName", &self.auto_scaling_group_name);
        writer.field(key, "Description", &self.description);
        writer.field(key, "Cause", &self.cause);
        writer.field(key, "StartTime", &self.start_time);
        writer.field(key, "EndTime", &self.end_time);
        writer.field(key, "StatusCode", &self.status_code);
        writer.field(key, "StatusMessage", &self.status_message);
        writer.field(key, "Progress", &self.progress);
        writer.field(key, "Details", &self.details);
    }
}

impl FromXml for Activity {
    fn from_xml(node: Node) -> Result<Self> {
        let mut out = Activity::default();
        for child in node.children().filter(Node::is_element) {
            match child.tag_name().name() {
                "ActivityId" => out.activity_id = Some(FromXml::from_xml(child)?),
                "AutoScalingGroupName" => {
                    out.auto_scaling_group_name = Some(FromXml::from_xml(child)?);
                }
                "Description" => out.description = Some(FromXml::from_xml(child)?),
                "Cause" => out.cause = Some(FromXml::from_xml(child)?),
                "StartTime" => out.start_time = Some(FromXml::from_xml(child)?),
                "EndTime" => out.end_time = Some(FromXml::from_xml(child)?),
                "StatusCode" => out.status_code = Some(FromXml::from_xml(child)?),
                "StatusMessage" => out.status_message = Some(FromXml::from_xml(child)?),
                "Progress" => out.progress = Some(FromXml::from_xml(child)?),
                "Details" => out.details = Some(FromXml::from_xml(child)?),
                _ => {}
            }
        }
        Ok(out)
    }
}

/// Input of `DescribeScalingActivities`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct DescribeScalingActivitiesRequest {
    #[serde(rename = "ActivityIds", skip_serializing_if = "Option::is_none")]
    activity_ids: Option<Vec<String>>,
    #[serde(rename = "AutoScalingGroupName", skip_serializing_if = "Option::is_none")]
    auto_scaling_group_name: Option<String>,
    #[serde(rename = "MaxRecords", skip_serializing_if = "Option::is_none")]
    max_records: Option<i32>,
    #[serde(rename = "NextToken", skip_serializing_if = "Option::is_none")]
    next_token: Option<String>,
}

impl Default for DescribeScalingActivitiesRequest {
    fn default() -> Self {
        DescribeScalingActivitiesRequest {
            activity_ids: Some(Vec::new()),
            auto_scaling_group_name: None,
            max_records: None,
            next_token: None,
        }
    }
}

impl DescribeScalingActivitiesRequest {
    /// Up to 50 IDs.
    pub fn activity_ids(&self) -> Option<&[String]> {
        self.activity_ids.as_deref()
    }

    pub fn set_activity_ids(&mut self, activity_ids: Option<Vec<String>>) {
        self.activity_ids = activity_ids;
    }

    pub fn with_activity_ids<I>(mut self, activity_ids: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.activity_ids
            .get_or_insert_with(Vec::new)
            .extend(activity_ids.into_iter().map(Into::into));
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
}

impl fmt::Display for DescribeScalingActivitiesRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ModelFormatter::new(f)
            .list("ActivityIds", &self.activity_ids)
            .field("AutoScalingGroupName", &self.auto_scaling_group_name)
            .field("MaxRecords", &self.max_records)
            .field("NextToken", &self.next_token)
            .finish()
    }
}

impl HashCode for DescribeScalingActivitiesRequest {
    fn hash_code(&self) -> i32 {
        hash_combine(&[
            self.activity_ids.hash_code(),
            self.auto_scaling_group_name.hash_code(),
            self.max_records.hash_code(),
            self.next_token.hash_code(),
        ])
    }
}

impl ToQuery for DescribeScalingActivitiesRequest {
    fn write_query(&self, writer: &mut QueryWriter, key: &str) {
        writer.list(key, "ActivityIds", &self.activity_ids);
        writer.field(key, "AutoScalingGroupName", &self.auto_scaling_group_name);
        writer.field(key, "MaxRecords", &self.max_records);
        writer.field(key, "NextToken", &self.next_token);
    }
}

/// Output of `DescribeScalingActivities`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct DescribeScalingActivitiesResult {
    #[serde(rename = "Activities", skip_serializing_if = "Option::is_none")]
    activities: Option<Vec<Activity>>,
    #[serde(rename = "NextToken", skip_serializing_if = "Option::is_none")]
    next_token: Option<String>,
}

impl Default for DescribeScalingActivitiesResult {
    fn default() -> Self {
        DescribeScalingActivitiesResult {
            activities: Some(Vec::new()),
            next_token: None,
        }
    }
}

impl DescribeScalingActivitiesResult {
    pub fn activities(&self) -> Option<&[Activity]> {
        self.activities.as_deref()
    }

    pub fn set_activities(&mut self, activities: Option<Vec<Activity>>) {
        self.activities = activities;
    }

    pub fn with_activities<I>(mut self, activities: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Activity>,
    {
        self.activities.get_or_insert_with(Vec::new).extend(activities.into_iter().map(Into::into));
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

impl fmt::Display for DescribeScalingActivitiesResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ModelFormatter::new(f)
            .list("Activities", &self.activities)
            .field("NextToken", &self.next_token)
            .finish()
    }
}

impl HashCode for DescribeScalingActivitiesResult {
    fn hash_code(&self) -> i32 {
        hash_combine(&[
            self.activities.hash_code(),
            self.next_token.hash_code(),
        ])
    }
}

impl FromXml for DescribeScalingActivitiesResult {
    fn from_xml(node: Node) -> Result<Self> {
        let mut out = DescribeScalingActivitiesResult::default();
        for child in node.children().filter(Node::is_element) {
            match child.tag_name().name() {
                "Activities" => out.activities = Some(xml::list(child)?),
                "NextToken" => out.next_token = Some(FromXml::from_xml(child)?),
                _ => {}
            }
        }
        Ok(out)
    }
}
