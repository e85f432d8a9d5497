//! Instances inside groups: attaching, detaching, standby, health and protection.

use super::{
    hash_combine, Activity, HashCode, LaunchTemplateSpecification, LifecycleState, ModelFormatter,
};
use crate::error::Result;
use crate::query::{QueryWriter, ToQuery};
use crate::xml::{self, FromXml};
use roxmltree::Node;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An instance together with the group it belongs to.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct AutoScalingInstanceDetails {
    #[serde(rename = "InstanceId", skip_serializing_if = "Option::is_none")]
    instance_id: Option<String>,
    #[serde(rename = "AutoScalingGroupName", skip_serializing_if = "Option::is_none")]
    auto_scaling_group_name: Option<String>,
    #[serde(rename = "AvailabilityZone", skip_serializing_if = "Option::is_none")]
    availability_zone: Option<String>,
    #[serde(rename = "LifecycleState", skip_serializing_if = "Option::is_none")]
    lifecycle_state: Option<LifecycleState>,
    #[serde(rename = "HealthStatus", skip_serializing_if = "Option::is_none")]
    health_status: Option<String>,
    #[serde(rename = "LaunchConfigurationName", skip_serializing_if = "Option::is_none")]
    launch_configuration_name: Option<String>,
    #[serde(rename = "LaunchTemplate", skip_serializing_if = "Option::is_none")]
    launch_template: Option<LaunchTemplateSpecification>,
    #[serde(rename = "ProtectedFromScaleIn", skip_serializing_if = "Option::is_none")]
    protected_from_scale_in: Option<bool>,
}

impl AutoScalingInstanceDetails {
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

    pub fn availability_zone(&self) -> Option<&str> {
        self.availability_zone.as_deref()
    }

    pub fn set_availability_zone(&mut self, availability_zone: Option<String>) {
        self.availability_zone = availability_zone;
    }

    pub fn with_availability_zone(mut self, availability_zone: impl Into<String>) -> Self {
        self.availability_zone = Some(availability_zone.into());
        self
    }

    pub fn lifecycle_state(&self) -> Option<&LifecycleState> {
        self.lifecycle_state.as_ref()
    }

    pub fn set_lifecycle_state(&mut self, lifecycle_state: Option<LifecycleState>) {
        self.lifecycle_state = lifecycle_state;
    }

    pub fn with_lifecycle_state(mut self, lifecycle_state: impl Into<LifecycleState>) -> Self {
        self.lifecycle_state = Some(lifecycle_state.into());
        self
    }

    pub fn health_status(&self) -> Option<&str> {
        self.health_status.as_deref()
    }

    pub fn set_health_status(&mut self, health_status: Option<String>) {
        self.health_status = health_status;
    }

    pub fn with_health_status(mut self, health_status: impl Into<String>) -> Self {
        self.health_status = Some(health_status.into());
        self
    }

    pub fn launch_configuration_name(&self) -> Option<&str> {
        self.launch_configuration_name.as_deref()
    }

    pub fn set_launch_configuration_name(&mut self, launch_configuration_name: Option<String>) {
        self.launch_configuration_name = launch_configuration_name;
    }

    pub fn with_launch_configuration_name(
        mut self,
        launch_configuration_name: impl Into<String>,
    ) -> Self {
        self.launch_configuration_name = Some(launch_configuration_name.into());
        self
    }

    pub fn launch_template(&self) -> Option<&LaunchTemplateSpecification> {
        self.launch_template.as_ref()
    }

    pub fn set_launch_template(&mut self, launch_template: Option<LaunchTemplateSpecification>) {
        self.launch_template = launch_template;
    }

    pub fn with_launch_template(mut self, launch_template: LaunchTemplateSpecification) -> Self {
        self.launch_template = Some(launch_template);
        self
    }

    pub fn protected_from_scale_in(&self) -> Option<bool> {
        self.protected_from_scale_in
    }

    pub fn set_protected_from_scale_in(&mut self, protected_from_scale_in: Option<bool>) {
        self.protected_from_scale_in = protected_from_scale_in;
    }

    pub fn with_protected_from_scale_in(mut self, protected_from_scale_in: bool) -> Self {
        self.protected_from_scale_in = Some(protected_from_scale_in);
        self
    }
}

impl fmt::Display for AutoScalingInstanceDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ModelFormatter::new(f)
            .field("InstanceId", &self.instance_id)
            .field("AutoScalingGroupName", &self.auto_scaling_group_name)
            .field("AvailabilityZone", &self.availability_zone)
            .field("LifecycleState", &self.lifecycle_state)
            .field("HealthStatus", &self.health_status)
            .field("LaunchConfigurationName", &self.launch_configuration_name)
            .field("LaunchTemplate", &self.launch_template)
            .field("ProtectedFromScaleIn", &self.protected_from_scale_in)
            .finish()
    }
}

impl HashCode for AutoScalingInstanceDetails {
    fn hash_code(&self) -> i32 {
        hash_combine(&[
            self.instance_id.hash_code(),
            self.auto_scaling_group_name.hash_code(),
            self.availability_zone.hash_code(),
            self.lifecycle_state.hash_code(),
            self.health_status.hash_code(),
            self.launch_configuration_name.hash_code(),
            self.launch_template.hash_code(),
            self.protected_from_scale_in.hash_code(),
        ])
    }
}

impl ToQuery for AutoScalingInstanceDetails {
    fn write_query(&self, writer: &mut QueryWriter, key: &str) {
        writer.field(key, "InstanceId", &self.instance_id);
        writer.field(key, "AutoScalingGroupName", &self.auto_scaling_group_name);
        writer.field(key, "AvailabilityZone", &self.availability_zone);
        writer.field(key, "LifecycleState", &self.lifecycle_state);
        writer.field(key, "HealthStatus", &self.health_status);
        writer.field(key, "LaunchConfigurationName", &self.launch_configuration_name);
        writer.field(key, "LaunchTemplate", &self.launch_template);
        writer.field(key, "ProtectedFromScaleIn", &self.protected_from_scale_in);
    }
}

impl FromXml for AutoScalingInstanceDetails {
    fn from_xml(node: Node) -> Result<Self> {
        let mut out = AutoScalingInstanceDetails::default();
        for child in node.children().filter(Node::is_element) {
            match child.tag_name().name() {
                "InstanceId" => out.instance_id = Some(FromXml::from_xml(child)?),
                "AutoScalingGroupName" => {
                    out.auto_scaling_group_name = Some(FromXml::from_xml(child)?);
                }
                "AvailabilityZone" => out.availability_zone = Some(FromXml::from_xml(child)?),
                "LifecycleState" => out.lifecycle_state = Some(FromXml::from_xml(child)?),
                "HealthStatus" => out.health_status = Some(FromXml::from_xml(child)?),
                "LaunchConfigurationName" => {
                    out.launch_configuration_name = Some(FromXml::from_xml(child)?);
                }
                "LaunchTemplate" => out.launch_template = Some(FromXml::from_xml(child)?),
                "ProtectedFromScaleIn" => {
                    out.protected_from_scale_in = Some(FromXml::from_xml(child)?);
                }
                _ => {}
            }
        }
        Ok(out)
    }
}

/// Input of `AttachInstances`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct AttachInstancesRequest {
    #[serde(rename = "InstanceIds", skip_serializing_if = "Option::is_none")]
    instance_ids: Option<Vec<String>>,
    #[serde(rename = "AutoScalingGroupName", skip_serializing_if = "Option::is_none")]
    auto_scaling_group_name: Option<String>,
}

impl Default for AttachInstancesRequest {
    fn default() -> Self {
        AttachInstancesRequest {
            instance_ids: Some(Vec::new()),
            auto_scaling_group_name: None,
        }
    }
}

impl AttachInstancesRequest {
    /// Up to 20 instance IDs.
    pub fn instance_ids(&self) -> Option<&[String]> {
        self.instance_ids.as_deref()
    }

    pub fn set_instance_ids(&mut self, instance_ids: Option<Vec<String>>) {
        self.instance_ids = instance_ids;
    }

    pub fn with_instance_ids<I>(mut self, instance_ids: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.instance_ids
            .get_or_insert_with(Vec::new)
            .extend(instance_ids.into_iter().map(Into::into));
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

impl fmt::Display for AttachInstancesRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ModelFormatter::new(f)
            .list("InstanceIds", &self.instance_ids)
            .field("AutoScalingGroupName", &self.auto_scaling_group_name)
            .finish()
    }
}

impl HashCode for AttachInstancesRequest {
    fn hash_code(&self) -> i32 {
        hash_combine(&[
            self.instance_ids.hash_code(),
            self.auto_scaling_group_name.hash_code(),
        ])
    }
}

impl ToQuery for AttachInstancesRequest {
    fn write_query(&self, writer: &mut QueryWriter, key: &str) {
        writer.list(key, "InstanceIds", &self.instance_ids);
        writer.field(key, "AutoScalingGroupName", &self.auto_scaling_group_name);
    }
}

/// Input of `DescribeAutoScalingInstances`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct DescribeAutoScalingInstancesRequest {
    #[serde(rename = "InstanceIds", skip_serializing_if = "Option::is_none")]
    instance_ids: Option<Vec<String>>,
    #[serde(rename = "MaxRecords", skip_serializing_if = "Option::is_none")]
    max_records: Option<i32>,
    #[serde(rename = "NextToken", skip_serializing_if = "Option::is_none")]
    next_token: Option<String>,
}

impl Default for DescribeAutoScalingInstancesRequest {
    fn default() -> Self {
        DescribeAutoScalingInstancesRequest {
            instance_ids: Some(Vec::new()),
            max_records: None,
            next_token: None,
        }
    }
}

impl DescribeAutoScalingInstancesRequest {
    /// Up to 50 IDs.
    pub fn instance_ids(&self) -> Option<&[String]> {
        self.instance_ids.as_deref()
    }

    pub fn set_instance_ids(&mut self, instance_ids: Option<Vec<String>>) {
        self.instance_ids = instance_ids;
    }

    pub fn with_instance_ids<I>(mut self, instance_ids: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.instance_ids
            .get_or_insert_with(Vec::new)
            .extend(instance_ids.into_iter().map(Into::into));
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

impl fmt::Display for DescribeAutoScalingInstancesRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ModelFormatter::new(f)
            .list("InstanceIds", &self.instance_ids)
            .field("MaxRecords", &self.max_records)
            .field("NextToken", &self.next_token)
            .finish()
    }
}

impl HashCode for DescribeAutoScalingInstancesRequest {
    fn hash_code(&self) -> i32 {
        hash_combine(&[
            self.instance_ids.hash_code(),
            self.max_records.hash_code(),
            self.next_token.hash_code(),
        ])
    }
}

impl ToQuery for DescribeAutoScalingInstancesRequest {
    fn write_query(&self, writer: &mut QueryWriter, key: &str) {
        writer.list(key, "InstanceIds", &self.instance_ids);
        writer.field(key, "MaxRecords", &self.max_records);
        writer.field(key, "NextToken", &self.next_token);
    }
}

/// Output of `DescribeAutoScalingInstances`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct DescribeAutoScalingInstancesResult {
    #[serde(rename = "AutoScalingInstances", skip_serializing_if = "Option::is_none")]
    auto_scaling_instances: Option<Vec<AutoScalingInstanceDetails>>,
    #[serde(rename = "NextToken", skip_serializing_if = "Option::is_none")]
    next_token: Option<String>,
}

impl Default for DescribeAutoScalingInstancesResult {
    fn default() -> Self {
        DescribeAutoScalingInstancesResult {
            auto_scaling_instances: Some(Vec::new()),
            next_token: None,
        }
    }
}

impl DescribeAutoScalingInstancesResult {
    pub fn auto_scaling_instances(&self) -> Option<&[AutoScalingInstanceDetails]> {
        self.auto_scaling_instances.as_deref()
    }

    pub fn set_auto_scaling_instances(
        &mut self,
        auto_scaling_instances: Option<Vec<AutoScalingInstanceDetails>>,
    ) {
        self.auto_scaling_instances = auto_scaling_instances;
    }

    pub fn with_auto_scaling_instances<I>(mut self, auto_scaling_instances: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<AutoScalingInstanceDetails>,
    {
        self.auto_scaling_instances
            .get_or_insert_with(Vec::new)
            .extend(auto_scaling_instances.into_iter().map(Into::into));
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

impl fmt::Display for DescribeAutoScalingInstancesResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ModelFormatter::new(f)
            .list("AutoScalingInstances", &self.auto_scaling_instances)
            .field("NextToken", &self.next_token)
            .finish()
    }
}

impl HashCode for DescribeAutoScalingInstancesResult {
    fn hash_code(&self) -> i32 {
        hash_combine(&[
            self.auto_scaling_instances.hash_code(),
            self.next_token.hash_code(),
        ])
    }
}

impl FromXml for DescribeAutoScalingInstancesResult {
    fn from_xml(node: Node) -> Result<Self> {
        let mut out = DescribeAutoScalingInstancesResult::default();
        for child in node.children().filter(Node::is_element) {
            match child.tag_name().name() {
                "AutoScalingInstances" => out.auto_scaling_instances = Some(xml::list(child)?),
                "NextToken" => out.next_token = Some(FromXml::from_xml(child)?),
                _ => {}
            }
        }
        Ok(out)
    }
}

/// Input of `DetachInstances`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct DetachInstancesRequest {
    #[serde(rename = "InstanceIds", skip_serializing_if = "Option::is_none")]
    instance_ids: Option<Vec<String>>,
    #[serde(rename = "AutoScalingGroupName", skip_serializing_if = "Option::is_none")]
    auto_scaling_group_name: Option<String>,
    #[serde(rename = "ShouldDecrementDesiredCapacity", skip_serializing_if = "Option::is_none")]
    should_decrement_desired_capacity: Option<bool>,
}

impl Default for DetachInstancesRequest {
    fn default() -> Self {
        DetachInstancesRequest {
            instance_ids: Some(Vec::new()),
            auto_scaling_group_name: None,
            should_decrement_desired_capacity: None,
        }
    }
}

impl DetachInstancesRequest {
    pub fn instance_ids(&self) -> Option<&[String]> {
        self.instance_ids.as_deref()
    }

    pub fn set_instance_ids(&mut self, instance_ids: Option<Vec<String>>) {
        self.instance_ids = instance_ids;
    }

    pub fn with_instance_ids<I>(mut self, instance_ids: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.instance_ids
            .get_or_insert_with(Vec::new)
            .extend(instance_ids.into_iter().map(Into::into));
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

    pub fn should_decrement_desired_capacity(&self) -> Option<bool> {
        self.should_decrement_desired_capacity
    }

    pub fn set_should_decrement_desired_capacity(
        &mut self,
        should_decrement_desired_capacity: Option<bool>,
    ) {
        self.should_decrement_desired_capacity = should_decrement_desired_capacity;
    }

    pub fn with_should_decrement_desired_capacity(
        mut self,
        should_decrement_desired_capacity: bool,
    ) -> Self {
        self.should_decrement_desired_capacity = Some(should_decrement_desired_capacity);
        self
    }
}

impl fmt::Display for DetachInstancesRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ModelFormatter::new(f)
            .list("InstanceIds", &self.instance_ids)
            .field("AutoScalingGroupName", &self.auto_scaling_group_name)
            .field("ShouldDecrementDesiredCapacity", &self.should_decrement_desired_capacity)
            .finish()
    }
}

impl HashCode for DetachInstancesRequest {
    fn hash_code(&self) -> i32 {
        hash_combine(&[
            self.instance_ids.hash_code(),
            self.auto_scaling_group_name.hash_code(),
            self.should_decrement_desired_capacity.hash_code(),
        ])
    }
}

impl ToQuery for DetachInstancesRequest {
    fn write_query(&self, writer: &mut QueryWriter, key: &str) {
        writer.list(key, "InstanceIds", &self.instance_ids);
        writer.field(key, "AutoScalingGroupName", &self.auto_scaling_group_name);
        writer.field(key, "ShouldDecrementDesiredCapacity", &self.should_decrement_desired_capacity);
    }
}

/// Output of `DetachInstances`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct DetachInstancesResult {
    #[serde(rename = "Activities", skip_serializing_if = "Option::is_none")]
    activities: Option<Vec<Activity>>,
}

impl Default for DetachInstancesResult {
    fn default() -> Self {
        DetachInstancesResult {
            activities: Some(Vec::new()),
        }
    }
}

impl DetachInstancesResult {
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
}

impl fmt::Display for DetachInstancesResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ModelFormatter::new(f)
            .list("Activities", &self.activities)
            .finish()
    }
}

impl HashCode for DetachInstancesResult {
    fn hash_code(&self) -> i32 {
        hash_combine(&[
            self.activities.hash_code(),
        ])
    }
}

impl FromXml for DetachInstancesResult {
    fn from_xml(node: Node) -> Result<Self> {
        let mut out = DetachInstancesResult::default();
        for child in node.children().filter(Node::is_element) {
            match child.tag_name().name() {
                "Activities" => out.activities = Some(xml::list(child)?),
                _ => {}
            }
        }
        Ok(out)
    }
}

/// Input of `EnterStandby`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct EnterStandbyRequest {
    #[serde(rename = "InstanceIds", skip_serializing_if = "Option::is_none")]
    instance_ids: Option<Vec<String>>,
    #[serde(rename = "AutoScalingGroupName", skip_serializing_if = "Option::is_none")]
    auto_scaling_group_name: Option<String>,
    #[serde(rename = "ShouldDecrementDesiredCapacity", skip_serializing_if = "Option::is_none")]
    should_decrement_desired_capacity: Option<bool>,
}

impl Default for EnterStandbyRequest {
    fn default() -> Self {
        EnterStandbyRequest {
            instance_ids: Some(Vec::new()),
            auto_scaling_group_name: None,
            should_decrement_desired_capacity: None,
        }
    }
}

impl EnterStandbyRequest {
    pub fn instance_ids(&self) -> Option<&[String]> {
        self.instance_ids.as_deref()
    }

    pub fn set_instance_ids(&mut self, instance_ids: Option<Vec<String>>) {
        self.instance_ids = instance_ids;
    }

    pub fn with_instance_ids<I>(mut self, instance_ids: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.instance_ids
            .get_or_insert_with(Vec::new)
            .extend(instance_ids.into_iter().map(Into::into));
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

    pub fn should_decrement_desired_capacity(&self) -> Option<bool> {
        self.should_decrement_desired_capacity
    }

    pub fn set_should_decrement_desired_capacity(
        &mut self,
        should_decrement_desired_capacity: Option<bool>,
    ) {
        self.should_decrement_desired_capacity = should_decrement_desired_capacity;
    }

    pub fn with_should_decrement_desired_capacity(
        mut self,
        should_decrement_desired_capacity: bool,
    ) -> Self {
        self.should_decrement_desired_capacity = Some(should_decrement_desired_capacity);
        self
    }
}

impl fmt::Display for EnterStandbyRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ModelFormatter::new(f)
            .list("InstanceIds", &self.instance_ids)
            .field("AutoScalingGroupName", &self.auto_scaling_group_name)
            .field("ShouldDecrementDesiredCapacity", &self.should_decrement_desired_capacity)
            .finish()
    }
}

impl HashCode for EnterStandbyRequest {
    fn hash_code(&self) -> i32 {
        hash_combine(&[
            self.instance_ids.hash_code(),
            self.auto_scaling_group_name.hash_code(),
            self.should_decrement_desired_capacity.hash_code(),
        ])
    }
}

impl ToQuery for EnterStandbyRequest {
    fn write_query(&self, writer: &mut QueryWriter, key: &str) {
        writer.list(key, "InstanceIds", &self.instance_ids);
        writer.field(key, "AutoScalingGroupName", &self.auto_scaling_group_name);
        writer.field(key, "ShouldDecrementDesiredCapacity", &self.should_decrement_desired_capacity);
    }
}

/// Output of `EnterStandby`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct EnterStandbyResult {
    #[serde(rename = "Activities", skip_serializing_if = "Option::is_none")]
    activities: Option<Vec<Activity>>,
}

impl Default for EnterStandbyResult {
    fn default() -> Self {
        EnterStandbyResult {
            activities: Some(Vec::new()),
        }
    }
}

impl EnterStandbyResult {
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
}

impl fmt::Display for EnterStandbyResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ModelFormatter::new(f)
            .list("Activities", &self.activities)
            .finish()
    }
}

impl HashCode for EnterStandbyResult {
    fn hash_code(&self) -> i32 {
        hash_combine(&[
            self.activities.hash_code(),
        ])
    }
}

impl FromXml for EnterStandbyResult {
    fn from_xml(node: Node) -> Result<Self> {
        let mut out = EnterStandbyResult::default();
        for child in node.children().filter(Node::is_element) {
            match child.tag_name().name() {
                "Activities" => out.activities = Some(xml::list(child)?),
                _ => {}
            }
        }
        Ok(out)
    }
}

/// Input of `ExitStandby`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ExitStandbyRequest {
    #[serde(rename = "InstanceIds", skip_serializing_if = "Option::is_none")]
    instance_ids: Option<Vec<String>>,
    #[serde(rename = "AutoScalingGroupName", skip_serializing_if = "Option::is_none")]
    auto_scaling_group_name: Option<String>,
}

impl Default for ExitStandbyRequest {
    fn default() -> Self {
        ExitStandbyRequest {
            instance_ids: Some(Vec::new()),
            auto_scaling_group_name: None,
        }
    }
}

impl ExitStandbyRequest {
    pub fn instance_ids(&self) -> Option<&[String]> {
        self.instance_ids.as_deref()
    }

    pub fn set_instance_ids(&mut self, instance_ids: Option<Vec<String>>) {
        self.instance_ids = instance_ids;
    }

    pub fn with_instance_ids<I>(mut self, instance_ids: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.instance_ids
            .get_or_insert_with(Vec::new)
            .extend(instance_ids.into_iter().map(Into::into));
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

impl fmt::Display for ExitStandbyRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ModelFormatter::new(f)
            .list("InstanceIds", &self.instance_ids)
            .field("AutoScalingGroupName", &self.auto_scaling_group_name)
            .finish()
    }
}

impl HashCode for ExitStandbyRequest {
    fn hash_code(&self) -> i32 {
        hash_combine(&[
            self.instance_ids.hash_code(),
            self.auto_scaling_group_name.hash_code(),
        ])
    }
}

impl ToQuery for ExitStandbyRequest {
    fn write_query(&self, writer: &mut QueryWriter, key: &str) {
        writer.list(key, "InstanceIds", &self.instance_ids);
        writer.field(key, "AutoScalingGroupName", &self.auto_scaling_group_name);
    }
}

/// Output of `ExitStandby`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ExitStandbyResult {
    #[serde(rename = "Activities", skip_serializing_if = "Option::is_none")]
    activities: Option<Vec<Activity>>,
}

impl Default for ExitStandbyResult {
    fn default() -> Self {
        ExitStandbyResult {
            activities: Some(Vec::new()),
        }
    }
}

impl ExitStandbyResult {
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
}

impl fmt::Display for ExitStandbyResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ModelFormatter::new(f)
            .list("Activities", &self.activities)
            .finish()
    }
}

impl HashCode for ExitStandbyResult {
    fn hash_code(&self) -> i32 {
        hash_combine(&[
            self.activities.hash_code(),
        ])
    }
}

impl FromXml for ExitStandbyResult {
    fn from_xml(node: Node) -> Result<Self> {
        let mut out = ExitStandbyResult::default();
        for child in node.children().filter(Node::is_element) {
            match child.tag_name().name() {
                "Activities" => out.activities = Some(xml::list(child)?),
                _ => {}
            }
        }
        Ok(out)
    }
}

/// Input of `SetInstanceHealth`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct SetInstanceHealthRequest {
    #[serde(rename = "InstanceId", skip_serializing_if = "Option::is_none")]
    instance_id: Option<String>,
    #[serde(rename = "HealthStatus", skip_serializing_if = "Option::is_none")]
    health_status: Option<String>,
    #[serde(rename = "ShouldRespectGracePeriod", skip_serializing_if = "Option::is_none")]
    should_respect_grace_period: Option<bool>,
}

impl SetInstanceHealthRequest {
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

    /// `Healthy` or `Unhealthy`.
    pub fn health_status(&self) -> Option<&str> {
        self.health_status.as_deref()
    }

    pub fn set_health_status(&mut self, health_status: Option<String>) {
        self.health_status = health_status;
    }

    pub fn with_health_status(mut self, health_status: impl Into<String>) -> Self {
        self.health_status = Some(health_status.into());
        self
    }

    pub fn should_respect_grace_period(&self) -> Option<bool> {
        self.should_respect_grace_period
    }

    pub fn set_should_respect_grace_period(&mut self, should_respect_grace_period: Option<bool>) {
        self.should_respect_grace_period = should_respect_grace_period;
    }

    pub fn with_should_respect_grace_period(mut self, should_respect_grace_period: bool) -> Self {
        self.should_respect_grace_period = Some(should_respect_grace_period);
        self
    }
}

impl fmt::Display for SetInstanceHealthRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ModelFormatter::new(f)
            .field("InstanceId", &self.instance_id)
            .field("HealthStatus", &self.health_status)
            .field("ShouldRespectGracePeriod", &self.should_respect_grace_period)
            .finish()
    }
}

impl HashCode for SetInstanceHealthRequest {
    fn hash_code(&self) -> i32 {
        hash_combine(&[
            self.instance_id.hash_code(),
            self.health_status.hash_code(),
            self.should_respect_grace_period.hash_code(),
        ])
    }
}

impl ToQuery for SetInstanceHealthRequest {
    fn write_query(&self, writer: &mut QueryWriter, key: &str) {
        writer.field(key, "InstanceId", &self.instance_id);
        writer.field(key, "HealthStatus", &self.health_status);
        writer.field(key, "ShouldRespectGracePeriod", &self.should_respect_grace_period);
    }
}

/// Input of `SetInstanceProtection`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct SetInstanceProtectionRequest {
    #[serde(rename = "InstanceIds", skip_serializing_if = "Option::is_none")]
    instance_ids: Option<Vec<String>>,
    #[serde(rename = "AutoScalingGroupName", skip_serializing_if = "Option::is_none")]
    auto_scaling_group_name: Option<String>,
    #[serde(rename = "ProtectedFromScaleIn", skip_serializing_if = "Option::is_none")]
    protected_from_scale_in: Option<bool>,
}

impl Default for SetInstanceProtectionRequest {
    fn default() -> Self {
        SetInstanceProtectionRequest {
            instance_ids: Some(Vec::new()),
            auto_scaling_group_name: None,
            protected_from_scale_in: None,
        }
    }
}

impl SetInstanceProtectionRequest {
    pub fn instance_ids(&self) -> Option<&[String]> {
        self.instance_ids.as_deref()
    }

    pub fn set_instance_ids(&mut self, instance_ids: Option<Vec<String>>) {
        self.instance_ids = instance_ids;
    }

    pub fn with_instance_ids<I>(mut self, instance_ids: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.instance_ids
            .get_or_insert_with(Vec::new)
            .extend(instance_ids.into_iter().map(Into::into));
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

    pub fn protected_from_scale_in(&self) -> Option<bool> {
        self.protected_from_scale_in
    }

    pub fn set_protected_from_scale_in(&mut self, protected_from_scale_in: Option<bool>) {
        self.protected_from_scale_in = protected_from_scale_in;
    }

    pub fn with_protected_from_scale_in(mut self, protected_from_scale_in: bool) -> Self {
        self.protected_from_scale_in = Some(protected_from_scale_in);
        self
    }
}

impl fmt::Display for SetInstanceProtectionRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ModelFormatter::new(f)
            .list("InstanceIds", &self.instance_ids)
            .field("AutoScalingGroupName", &self.auto_scaling_group_name)
            .field("ProtectedFromScaleIn", &self.protected_from_scale_in)
            .finish()
    }
}

impl HashCode for SetInstanceProtectionRequest {
    fn hash_code(&self) -> i32 {
        hash_combine(&[
            self.instance_ids.hash_code(),
            self.auto_scaling_group_name.hash_code(),
            self.protected_from_scale_in.hash_code(),
        ])
    }
}

impl ToQuery for SetInstanceProtectionRequest {
    fn write_query(&self, writer: &mut QueryWriter, key: &str) {
        writer.list(key, "InstanceIds", &self.instance_ids);
        writer.field(key, "AutoScalingGroupName", &self.auto_scaling_group_name);
        writer.field(key, "ProtectedFromScaleIn", &self.protected_from_scale_in);
    }
}

/// Output of `SetInstanceProtection`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct SetInstanceProtectionResult {}

impl fmt::Display for SetInstanceProtectionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ModelFormatter::new(f).finish()
    }
}

impl HashCode for SetInstanceProtectionResult {
    fn hash_code(&self) -> i32 {
        hash_combine(&[])
    }
}

impl FromXml for SetInstanceProtectionResult {
    fn from_xml(_node: Node) -> Result<Self> {
        Ok(SetInstanceProtectionResult::default())
    }
}

/// Input of `TerminateInstanceInAutoScalingGroup`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminateInstanceInAutoScalingGroupRequest {
    #[serde(rename = "InstanceId", skip_serializing_if = "Option::is_none")]
    instance_id: Option<String>,
    #[serde(rename = "ShouldDecrementDesiredCapacity", skip_serializing_if = "Option::is_none")]
    should_decrement_desired_capacity: Option<bool>,
}

impl TerminateInstanceInAutoScalingGroupRequest {
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

    pub fn should_decrement_desired_capacity(&self) -> Option<bool> {
        self.should_decrement_desired_capacity
    }

    pub fn set_should_decrement_desired_capacity(
        &mut self,
        should_decrement_desired_capacity: Option<bool>,
    ) {
        self.should_decrement_desired_capacity = should_decrement_desired_capacity;
    }

    pub fn with_should_decrement_desired_capacity(
        mut self,
        should_decrement_desired_capacity: bool,
    ) -> Self {
        self.should_decrement_desired_capacity = Some(should_decrement_desired_capacity);
        self
    }
}

impl fmt::Display for TerminateInstanceInAutoScalingGroupRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ModelFormatter::new(f)
            .field("InstanceId", &self.instance_id)
            .field("ShouldDecrementDesiredCapacity", &self.should_decrement_desired_capacity)
            .finish()
    }
}

impl HashCode for TerminateInstanceInAutoScalingGroupRequest {
    fn hash_code(&self) -> i32 {
        hash_combine(&[
            self.instance_id.hash_code(),
            self.should_decrement_desired_capacity.hash_code(),
        ])
    }
}

impl ToQuery for TerminateInstanceInAutoScalingGroupRequest {
    fn write_query(&self, writer: &mut QueryWriter, key: &str) {
        writer.field(key, "InstanceId", &self.instance_id);
        writer.field(key, "ShouldDecrementDesiredCapacity", &self.should_decrement_desired_capacity);
    }
}

/// Output of `TerminateInstanceInAutoScalingGroup`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminateInstanceInAutoScalingGroupResult {
    #[serde(rename = "Activity", skip_serializing_if = "Option::is_none")]
    activity: Option<Activity>,
}

impl TerminateInstanceInAutoScalingGroupResult {
    pub fn activity(&self) -> Option<&Activity> {
        self.activity.as_ref()
    }

    pub fn set_activity(&mut self, activity: Option<Activity>) {
        self.activity = activity;
    }

    pub fn with_activity(mut self, activity: Activity) -> Self {
        self.activity = Some(activity);
        self
    }
}

impl fmt::Display for TerminateInstanceInAutoScalingGroupResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ModelFormatter::new(f)
            .field("Activity", &self.activity)
            .finish()
    }
}

impl HashCode for TerminateInstanceInAutoScalingGroupResult {
    fn hash_code(&self) -> i32 {
        hash_combine(&[
            self.activity.hash_code(),
        ])
    }
}

impl FromXml for TerminateInstanceInAutoScalingGroupResult {
    fn from_xml(node: Node) -> Result<Self> {
        let mut out = TerminateInstanceInAutoScalingGroupResult::default();
        for child in node.children().filter(Node::is_element) {
            match child.tag_name().name() {
                "Activity" => out.activity = Some(FromXml::from_xml(child)?),
                _ => {}
            }
        }
        Ok(out)
    }
}
