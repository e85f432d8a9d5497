use super::{hash_combine, HashCode, ModelFormatter, NotificationType};
use crate::error::Result;
use crate::query::{QueryWriter, ToQuery};
use crate::xml::{self, FromXml};
use roxmltree::Node;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationConfiguration {
    #[serde(rename = "AutoScalingGroupName", skip_serializing_if = "Option::is_none")]
    auto_scaling_group_name: Option<String>,
    #[serde(rename = "TopicARN", skip_serializing_if = "Option::is_none")]
    topic_arn: Option<String>,
    #[serde(rename = "NotificationType", skip_serializing_if = "Option::is_none")]
    notification_type: Option<NotificationType>,
}

impl NotificationConfiguration {
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

    pub fn topic_arn(&self) -> Option<&str> {
        self.topic_arn.as_deref()
    }

    pub fn set_topic_arn(&mut self, topic_arn: Option<String>) {
        self.topic_arn = topic_arn;
    }

    pub fn with_topic_arn(mut self, topic_arn: impl Into<String>) -> Self {
        self.topic_arn = Some(topic_arn.into());
        self
    }

    pub fn notification_type(&self) -> Option<&NotificationType> {
        self.notification_type.as_ref()
    }

    pub fn set_notification_type(&mut self, notification_type: Option<NotificationType>) {
        self.notification_type = notification_type;
    }

    pub fn with_notification_type(
        mut self,
        notification_type: impl Into<NotificationType>,
    ) -> Self {
        self.notification_type = Some(notification_type.into());
        self
    }
}

impl fmt::Display for NotificationConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ModelFormatter::new(f)
            .field("AutoScalingGroupName", &self.auto_scaling_group_name)
            .field("TopicARN", &self.topic_arn)
            .field("NotificationType", &self.notification_type)
            .finish()
    }
}

impl HashCode for NotificationConfiguration {
    fn hash_code(&self) -> i32 {
        hash_combine(&[
            self.auto_scaling_group_name.hash_code(),
            self.topic_arn.hash_code(),
            self.notification_type.hash_code(),
        ])
    }
}

impl ToQuery for NotificationConfiguration {
    fn write_query(&self, writer: &mut QueryWriter, key: &str) {
        writer.field(key, "AutoScalingGroupName", &self.auto_scaling_group_name);
        writer.field(key, "TopicARN", &self.topic_arn);
        writer.field(key, "NotificationType", &self.notification_type);
    }
}

impl FromXml for NotificationConfiguration {
    fn from_xml(node: Node) -> Result<Self> {
        let mut out = NotificationConfiguration::default();
        for child in node.children().filter(Node::is_element) {
            match child.tag_name().name() {
                "AutoScalingGroupName" => {
                    out.auto_scaling_group_name = Some(FromXml::from_xml(child)?);
                }
                "TopicARN" => out.topic_arn = Some(FromXml::from_xml(child)?),
                "NotificationType" => out.notification_type = Some(FromXml::from_xml(child)?),
                _ => {}
            }
        }
        Ok(out)
    }
}

/// Input of `DeleteNotificationConfiguration`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct DeleteNotificationConfigurationRequest {
    #[serde(rename = "AutoScalingGroupName", skip_serializing_if = "Option::is_none")]
    auto_scaling_group_name: Option<String>,
    #[serde(rename = "TopicARN", skip_serializing_if = "Option::is_none")]
    topic_arn: Option<String>,
}

impl DeleteNotificationConfigurationRequest {
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

    pub fn topic_arn(&self) -> Option<&str> {
        self.topic_arn.as_deref()
    }

    pub fn set_topic_arn(&mut self, topic_arn: Option<String>) {
        self.topic_arn = topic_arn;
    }

    pub fn with_topic_arn(mut self, topic_arn: impl Into<String>) -> Self {
        self.topic_arn = Some(topic_arn.into());
        self
    }
}

impl fmt::Display for DeleteNotificationConfigurationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ModelFormatter::new(f)
            .field("AutoScalingGroupName", &self.auto_scaling_group_name)
            .field("TopicARN", &self.topic_arn)
            .finish()
    }
}

impl HashCode for DeleteNotificationConfigurationRequest {
    fn hash_code(&self) -> i32 {
        hash_combine(&[
            self.auto_scaling_group_name.hash_code(),
            self.topic_arn.hash_code(),
        ])
    }
}

impl ToQuery for DeleteNotificationConfigurationRequest {
    fn write_query(&self, writer: &mut QueryWriter, key: &str) {
        writer.field(key, "AutoScalingGroupName", &self.auto_scaling_group_name);
        writer.field(key, "TopicARN", &self.topic_arn);
    }
}

/// Input of `DescribeAutoScalingNotificationTypes`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct DescribeAutoScalingNotificationTypesRequest {}

impl fmt::Display for DescribeAutoScalingNotificationTypesRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ModelFormatter::new(f).finish()
    }
}

impl HashCode for DescribeAutoScalingNotificationTypesRequest {
    fn hash_code(&self) -> i32 {
        hash_combine(&[])
    }
}

impl ToQuery for DescribeAutoScalingNotificationTypesRequest {
    fn write_query(&self, _writer: &mut QueryWriter, _key: &str) {}
}

/// Output of `DescribeAutoScalingNotificationTypes`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct DescribeAutoScalingNotificationTypesResult {
    #[serde(rename = "AutoScalingNotificationTypes", skip_serializing_if = "Option::is_none")]
    auto_scaling_notification_types: Option<Vec<NotificationType>>,
}

impl Default for DescribeAutoScalingNotificationTypesResult {
    fn default() -> Self {
        DescribeAutoScalingNotificationTypesResult {
            auto_scaling_notification_types: Some(Vec::new()),
        }
    }
}

impl DescribeAutoScalingNotificationTypesResult {
    pub fn auto_scaling_notification_types(&self) -> Option<&[NotificationType]> {
        self.auto_scaling_notification_types.as_deref()
    }

    pub fn set_auto_scaling_notification_types(
        &mut self,
        auto_scaling_notification_types: Option<Vec<NotificationType>>,
    ) {
        self.auto_scaling_notification_types = auto_scaling_notification_types;
    }

    pub fn with_auto_scaling_notification_types<I>(mut self, auto_scaling_notification_types: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<NotificationType>,
    {
        self.auto_scaling_notification_types
            .get_or_insert_with(Vec::new)
            .extend(auto_scaling_notification_types.into_iter().map(Into::into));
        self
    }
}

impl fmt::Display for DescribeAutoScalingNotificationTypesResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ModelFormatter::new(f)
            .list("AutoScalingNotificationTypes", &self.auto_scaling_notification_types)
            .finish()
    }
}

impl HashCode for DescribeAutoScalingNotificationTypesResult {
    fn hash_code(&self) -> i32 {
        hash_combine(&[
            self.auto_scaling_notification_types.hash_code(),
        ])
    }
}

impl FromXml for DescribeAutoScalingNotificationTypesResult {
    fn from_xml(node: Node) -> Result<Self> {
        let mut out = DescribeAutoScalingNotificationTypesResult::default();
        for child in node.children().filter(Node::is_element) {
            match child.tag_name().name() {
                "AutoScalingNotificationTypes" => {
                    out.auto_scaling_notification_types = Some(xml::list(child)?);
                }
                _ => {}
            }
        }
        Ok(out)
    }
}

/// Input of `DescribeNotificationConfigurations`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct DescribeNotificationConfigurationsRequest {
    #[serde(rename = "AutoScalingGroupNames", skip_serializing_if = "Option::is_none")]
    auto_scaling_group_names: Option<Vec<String>>,
    #[serde(rename = "NextToken", skip_serializing_if = "Option::is_none")]
    next_token: Option<String>,
    #[serde(rename = "MaxRecords", skip_serializing_if = "Option::is_none")]
    max_records: Option<i32>,
}

impl Default for DescribeNotificationConfigurationsRequest {
    fn default() -> Self {
        DescribeNotificationConfigurationsRequest {
            auto_scaling_group_names: Some(Vec::new()),
            next_token: None,
            max_records: None,
        }
    }
}

impl DescribeNotificationConfigurationsRequest {
    pub fn auto_scaling_group_names(&self) -> Option<&[String]> {
        self.auto_scaling_group_names.as_deref()
    }

    pub fn set_auto_scaling_group_names(&mut self, auto_scaling_group_names: Option<Vec<String>>) {
        self.auto_scaling_group_names = auto_scaling_group_names;
    }

    pub fn with_auto_scaling_group_names<I>(mut self, auto_scaling_group_names: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.auto_scaling_group_names
            .get_or_insert_with(Vec::new)
            .extend(auto_scaling_group_names.into_iter().map(Into::into));
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

impl fmt::Display for DescribeNotificationConfigurationsRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ModelFormatter::new(f)
            .list("AutoScalingGroupNames", &self.auto_scaling_group_names)
            .field("NextToken", &self.next_token)
            .field("MaxRecords", &self.max_records)
            .finish()
    }
}

impl HashCode for DescribeNotificationConfigurationsRequest {
    fn hash_code(&self) -> i32 {
        hash_combine(&[
            self.auto_scaling_group_names.hash_code(),
            self.next_token.hash_code(),
            self.max_records.hash_code(),
        ])
    }
}

impl ToQuery for DescribeNotificationConfigurationsRequest {
    fn write_query(&self, writer: &mut QueryWriter, key: &str) {
        writer.list(key, "AutoScalingGroupNames", &self.auto_scaling_group_names);
        writer.field(key, "NextToken", &self.next_token);
        writer.field(key, "MaxRecords", &self.max_records);
    }
}

/// Output of `DescribeNotificationConfigurations`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct DescribeNotificationConfigurationsResult {
    #[serde(rename = "NotificationConfigurations", skip_serializing_if = "Option::is_none")]
    notification_configurations: Option<Vec<NotificationConfiguration>>,
    #[serde(rename = "NextToken", skip_serializing_if = "Option::is_none")]
    next_token: Option<String>,
}

impl Default for DescribeNotificationConfigurationsResult {
    fn default() -> Self {
        DescribeNotificationConfigurationsResult {
            notification_configurations: Some(Vec::new()),
            next_token: None,
        }
    }
}

impl DescribeNotificationConfigurationsResult {
    pub fn notification_configurations(&self) -> Option<&[NotificationConfiguration]> {
        self.notification_configurations.as_deref()
    }

    pub fn set_notification_configurations(
        &mut self,
        notification_configurations: Option<Vec<NotificationConfiguration>>,
    ) {
        self.notification_configurations = notification_configurations;
    }

    pub fn with_notification_configurations<I>(mut self, notification_configurations: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<NotificationConfiguration>,
    {
        self.notification_configurations
            .get_or_insert_with(Vec::new)
            .extend(notification_configurations.into_iter().map(Into::into));
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

impl fmt::Display for DescribeNotificationConfigurationsResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ModelFormatter::new(f)
            .list("NotificationConfigurations", &self.notification_configurations)
            .field("NextToken", &self.next_token)
            .finish()
    }
}

impl HashCode for DescribeNotificationConfigurationsResult {
    fn hash_code(&self) -> i32 {
        hash_combine(&[
            self.notification_configurations.hash_code(),
            self.next_token.hash_code(),
        ])
    }
}

impl FromXml for DescribeNotificationConfigurationsResult {
    fn from_xml(node: Node) -> Result<Self> {
        let mut out = DescribeNotificationConfigurationsResult::default();
        for child in node.children().filter(Node::is_element) {
            match child.tag_name().name() {
                "NotificationConfigurations" => {
                    out.notification_configurations = Some(xml::list(child)?);
                }
                "NextToken" => out.next_token = Some(FromXml::from_xml(child)?),
                _ => {}
            }
        }
        Ok(out)
    }
}

/// Input of `PutNotificationConfiguration`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct PutNotificationConfigurationRequest {
    #[serde(rename = "AutoScalingGroupName", skip_serializing_if = "Option::is_none")]
    auto_scaling_group_name: Option<String>,
    #[serde(rename = "TopicARN", skip_serializing_if = "Option::is_none")]
    topic_arn: Option<String>,
    #[serde(rename = "NotificationTypes", skip_serializing_if = "Option::is_none")]
    notification_types: Option<Vec<NotificationType>>,
}

impl Default for PutNotificationConfigurationRequest {
    fn default() -> Self {
        PutNotificationConfigurationRequest {
            auto_scaling_group_name: None,
            topic_arn: None,
            notification_types: Some(Vec::new()),
        }
    }
}

impl PutNotificationConfigurationRequest {
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

    pub fn topic_arn(&self) -> Option<&str> {
        self.topic_arn.as_deref()
    }

    pub fn set_topic_arn(&mut self, topic_arn: Option<String>) {
        self.topic_arn = topic_arn;
    }

    pub fn with_topic_arn(mut self, topic_arn: impl Into<String>) -> Self {
        self.topic_arn = Some(topic_arn.into());
        self
    }

    pub fn notification_types(&self) -> Option<&[NotificationType]> {
        self.notification_types.as_deref()
    }

    pub fn set_notification_types(&mut self, notification_types: Option<Vec<NotificationType>>) {
        self.notification_types = notification_types;
    }

    pub fn with_notification_types<I>(mut self, notification_types: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<NotificationType>,
    {
        self.notification_types
            .get_or_insert_with(Vec::new)
            .extend(notification_types.into_iter().map(Into::into));
        self
    }
}

impl fmt::Display for PutNotificationConfigurationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ModelFormatter::new(f)
            .field("AutoScalingGroupName", &self.auto_scaling_group_name)
            .field("TopicARN", &self.topic_arn)
            .list("NotificationTypes", &self.notification_types)
            .finish()
    }
}

impl HashCode for PutNotificationConfigurationRequest {
    fn hash_code(&self) -> i32 {
        hash_combine(&[
            self.auto_scaling_group_name.hash_code(),
            self.topic_arn.hash_code(),
            self.notification_types.hash_code(),
        ])
    }
}

impl ToQuery for PutNotificationConfigurationRequest {
    fn write_query(&self, writer: &mut QueryWriter, key: &str) {
        writer.field(key, "AutoScalingGroupName", &self.auto_scaling_group_name);
        writer.field(key, "TopicARN", &self.topic_arn);
        writer.list(key, "NotificationTypes", &self.notification_types);
    }
}
