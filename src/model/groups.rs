//! Auto Scaling groups and the launch settings they reference.

use super::{
    hash_combine, HashCode, LifecycleHookSpecification, LifecycleState, ModelFormatter, Tag,
    TagDescription,
};
use crate::error::Result;
use crate::query::{QueryWriter, ToQuery};
use crate::xml::{self, FromXml};
use chrono::{DateTime, Utc};
use roxmltree::Node;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An Auto Scaling group as described by the service.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct AutoScalingGroup {
    #[serde(rename = "AutoScalingGroupName", skip_serializing_if = "Option::is_none")]
    auto_scaling_group_name: Option<String>,
    #[serde(rename = "AutoScalingGroupARN", skip_serializing_if = "Option::is_none")]
    auto_scaling_group_arn: Option<String>,
    #[serde(rename = "LaunchConfigurationName", skip_serializing_if = "Option::is_none")]
    launch_configuration_name: Option<String>,
    #[serde(rename = "LaunchTemplate", skip_serializing_if = "Option::is_none")]
    launch_template: Option<LaunchTemplateSpecification>,
    #[serde(rename = "MixedInstancesPolicy", skip_serializing_if = "Option::is_none")]
    mixed_instances_policy: Option<MixedInstancesPolicy>,
    #[serde(rename = "MinSize", skip_serializing_if = "Option::is_none")]
    min_size: Option<i32>,
    #[serde(rename = "MaxSize", skip_serializing_if = "Option::is_none")]
    max_size: Option<i32>,
    #[serde(rename = "DesiredCapacity", skip_serializing_if = "Option::is_none")]
    desired_capacity: Option<i32>,
    #[serde(rename = "DefaultCooldown", skip_serializing_if = "Option::is_none")]
    default_cooldown: Option<i32>,
    #[serde(rename = "AvailabilityZones", skip_serializing_if = "Option::is_none")]
    availability_zones: Option<Vec<String>>,
    #[serde(rename = "LoadBalancerNames", skip_serializing_if = "Option::is_none")]
    load_balancer_names: Option<Vec<String>>,
    #[serde(rename = "TargetGroupARNs", skip_serializing_if = "Option::is_none")]
    target_group_arns: Option<Vec<String>>,
    #[serde(rename = "HealthCheckType", skip_serializing_if = "Option::is_none")]
    health_check_type: Option<String>,
    #[serde(rename = "HealthCheckGracePeriod", skip_serializing_if = "Option::is_none")]
    health_check_grace_period: Option<i32>,
    #[serde(rename = "Instances", skip_serializing_if = "Option::is_none")]
    instances: Option<Vec<Instance>>,
    #[serde(rename = "CreatedTime", skip_serializing_if = "Option::is_none")]
    created_time: Option<DateTime<Utc>>,
    #[serde(rename = "SuspendedProcesses", skip_serializing_if = "Option::is_none")]
    suspended_processes: Option<Vec<SuspendedProcess>>,
    #[serde(rename = "PlacementGroup", skip_serializing_if = "Option::is_none")]
    placement_group: Option<String>,
    #[serde(rename = "VPCZoneIdentifier", skip_serializing_if = "Option::is_none")]
    vpc_zone_identifier: Option<String>,
    #[serde(rename = "EnabledMetrics", skip_serializing_if = "Option::is_none")]
    enabled_metrics: Option<Vec<EnabledMetric>>,
    #[serde(rename = "Status", skip_serializing_if = "Option::is_none")]
    status: Option<String>,
    #[serde(rename = "Tags", skip_serializing_if = "Option::is_none")]
    tags: Option<Vec<TagDescription>>,
    #[serde(rename = "TerminationPolicies", skip_serializing_if = "Option::is_none")]
    termination_policies: Option<Vec<String>>,
    #[serde(rename = "NewInstancesProtectedFromScaleIn", skip_serializing_if = "Option::is_none")]
    new_instances_protected_from_scale_in: Option<bool>,
    #[serde(rename = "ServiceLinkedRoleARN", skip_serializing_if = "Option::is_none")]
    service_linked_role_arn: Option<String>,
}

impl Default for AutoScalingGroup {
    fn default() -> Self {
        AutoScalingGroup {
            auto_scaling_group_name: None,
            auto_scaling_group_arn: None,
            launch_configuration_name: None,
            launch_template: None,
            mixed_instances_policy: None,
            min_size: None,
            max_size: None,
            desired_capacity: None,
            default_cooldown: None,
            availability_zones: Some(Vec::new()),
            load_balancer_names: Some(Vec::new()),
            target_group_arns: Some(Vec::new()),
            health_check_type: None,
            health_check_grace_period: None,
            instances: Some(Vec::new()),
            created_time: None,
            suspended_processes: Some(Vec::new()),
            placement_group: None,
            vpc_zone_identifier: None,
            enabled_metrics: Some(Vec::new()),
            status: None,
            tags: Some(Vec::new()),
            termination_policies: Some(Vec::new()),
            new_instances_protected_from_scale_in: None,
            service_linked_role_arn: None,
        }
    }
}

impl AutoScalingGroup {
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

    /// Length 1-1600.
    pub fn auto_scaling_group_arn(&self) -> Option<&str> {
        self.auto_scaling_group_arn.as_deref()
    }

    pub fn set_auto_scaling_group_arn(&mut self, auto_scaling_group_arn: Option<String>) {
        self.auto_scaling_group_arn = auto_scaling_group_arn;
    }

    pub fn with_auto_scaling_group_arn(
        mut self,
        auto_scaling_group_arn: impl Into<String>,
    ) -> Self {
        self.auto_scaling_group_arn = Some(auto_scaling_group_arn.into());
        self
    }

    /// Length 1-255.
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

    pub fn mixed_instances_policy(&self) -> Option<&MixedInstancesPolicy> {
        self.mixed_instances_policy.as_ref()
    }

    pub fn set_mixed_instances_policy(
        &mut self,
        mixed_instances_policy: Option<MixedInstancesPolicy>,
    ) {
        self.mixed_instances_policy = mixed_instances_policy;
    }

    pub fn with_mixed_instances_policy(
        mut self,
        mixed_instances_policy: MixedInstancesPolicy,
    ) -> Self {
        self.mixed_instances_policy = Some(mixed_instances_policy);
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

    /// Seconds between the end of one scaling activity and the start of the next.
    pub fn default_cooldown(&self) -> Option<i32> {
        self.default_cooldown
    }

    pub fn set_default_cooldown(&mut self, default_cooldown: Option<i32>) {
        self.default_cooldown = default_cooldown;
    }

    pub fn with_default_cooldown(mut self, default_cooldown: i32) -> Self {
        self.default_cooldown = Some(default_cooldown);
        self
    }

    pub fn availability_zones(&self) -> Option<&[String]> {
        self.availability_zones.as_deref()
    }

    pub fn set_availability_zones(&mut self, availability_zones: Option<Vec<String>>) {
        self.availability_zones = availability_zones;
    }

    pub fn with_availability_zones<I>(mut self, availability_zones: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.availability_zones
            .get_or_insert_with(Vec::new)
            .extend(availability_zones.into_iter().map(Into::into));
        self
    }

    /// Classic Load Balancers attached to the group.
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

    /// `EC2` or `ELB`.
    pub fn health_check_type(&self) -> Option<&str> {
        self.health_check_type.as_deref()
    }

    pub fn set_health_check_type(&mut self, health_check_type: Option<String>) {
        self.health_check_type = health_check_type;
    }

    pub fn with_health_check_type(mut self, health_check_type: impl Into<String>) -> Self {
        self.health_check_type = Some(health_check_type.into());
        self
    }

    pub fn health_check_grace_period(&self) -> Option<i32> {
        self.health_check_grace_period
    }

    pub fn set_health_check_grace_period(&mut self, health_check_grace_period: Option<i32>) {
        self.health_check_grace_period = health_check_grace_period;
    }

    pub fn with_health_check_grace_period(mut self, health_check_grace_period: i32) -> Self {
        self.health_check_grace_period = Some(health_check_grace_period);
        self
    }

    pub fn instances(&self) -> Option<&[Instance]> {
        self.instances.as_deref()
    }

    pub fn set_instances(&mut self, instances: Option<Vec<Instance>>) {
        self.instances = instances;
    }

    pub fn with_instances<I>(mut self, instances: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Instance>,
    {
        self.instances.get_or_insert_with(Vec::new).extend(instances.into_iter().map(Into::into));
        self
    }

    pub fn created_time(&self) -> Option<DateTime<Utc>> {
        self.created_time
    }

    pub fn set_created_time(&mut self, created_time: Option<DateTime<Utc>>) {
        self.created_time = created_time;
    }

    pub fn with_created_time(mut self, created_time: DateTime<Utc>) -> Self {
        self.created_time = Some(created_time);
        self
    }

    pub fn suspended_processes(&self) -> Option<&[SuspendedProcess]> {
        self.suspended_processes.as_deref()
    }

    pub fn set_suspended_processes(&mut self, suspended_processes: Option<Vec<SuspendedProcess>>) {
        self.suspended_processes = suspended_processes;
    }

    pub fn with_suspended_processes<I>(mut self, suspended_processes: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<SuspendedProcess>,
    {
        self.suspended_processes
            .get_or_insert_with(Vec::new)
            .extend(suspended_processes.into_iter().map(Into::into));
        self
    }

    pub fn placement_group(&self) -> Option<&str> {
        self.placement_group.as_deref()
    }

    pub fn set_placement_group(&mut self, placement_group: Option<String>) {
        self.placement_group = placement_group;
    }

    pub fn with_placement_group(mut self, placement_group: impl Into<String>) -> Self {
        self.placement_group = Some(placement_group.into());
        self
    }

    /// Comma-separated subnet IDs.
    pub fn vpc_zone_identifier(&self) -> Option<&str> {
        self.vpc_zone_identifier.as_deref()
    }

    pub fn set_vpc_zone_identifier(&mut self, vpc_zone_identifier: Option<String>) {
        self.vpc_zone_identifier = vpc_zone_identifier;
    }

    pub fn with_vpc_zone_identifier(mut self, vpc_zone_identifier: impl Into<String>) -> Self {
        self.vpc_zone_identifier = Some(vpc_zone_identifier.into());
        self
    }

    pub fn enabled_metrics(&self) -> Option<&[EnabledMetric]> {
        self.enabled_metrics.as_deref()
    }

    pub fn set_enabled_metrics(&mut self, enabled_metrics: Option<Vec<EnabledMetric>>) {
        self.enabled_metrics = enabled_metrics;
    }

    pub fn with_enabled_metrics<I>(mut self, enabled_metrics: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<EnabledMetric>,
    {
        self.enabled_metrics
            .get_or_insert_with(Vec::new)
            .extend(enabled_metrics.into_iter().map(Into::into));
        self
    }

    /// Only set while the group is being deleted.
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn set_status(&mut self, status: Option<String>) {
        self.status = status;
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn tags(&self) -> Option<&[TagDescription]> {
        self.tags.as_deref()
    }

    pub fn set_tags(&mut self, tags: Option<Vec<TagDescription>>) {
        self.tags = tags;
    }

    pub fn with_tags<I>(mut self, tags: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<TagDescription>,
    {
        self.tags.get_or_insert_with(Vec::new).extend(tags.into_iter().map(Into::into));
        self
    }

    pub fn termination_policies(&self) -> Option<&[String]> {
        self.termination_policies.as_deref()
    }

    pub fn set_termination_policies(&mut self, termination_policies: Option<Vec<String>>) {
        self.termination_policies = termination_policies;
    }

    pub fn with_termination_policies<I>(mut self, termination_policies: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.termination_policies
            .get_or_insert_with(Vec::new)
            .extend(termination_policies.into_iter().map(Into::into));
        self
    }

    pub fn new_instances_protected_from_scale_in(&self) -> Option<bool> {
        self.new_instances_protected_from_scale_in
    }

    pub fn set_new_instances_protected_from_scale_in(
        &mut self,
        new_instances_protected_from_scale_in: Option<bool>,
    ) {
        self.new_instances_protected_from_scale_in = new_instances_protected_from_scale_in;
    }

    pub fn with_new_instances_protected_from_scale_in(
        mut self,
        new_instances_protected_from_scale_in: bool,
    ) -> Self {
        self.new_instances_protected_from_scale_in = Some(new_instances_protected_from_scale_in);
        self
    }

    pub fn service_linked_role_arn(&self) -> Option<&str> {
        self.service_linked_role_arn.as_deref()
    }

    pub fn set_service_linked_role_arn(&mut self, service_linked_role_arn: Option<String>) {
        self.service_linked_role_arn = service_linked_role_arn;
    }

    pub fn with_service_linked_role_arn(
        mut self,
        service_linked_role_arn: impl Into<String>,
    ) -> Self {
        self.service_linked_role_arn = Some(service_linked_role_arn.into());
        self
    }
}

impl fmt::Display for AutoScalingGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ModelFormatter::new(f)
            .field("AutoScalingGroupName", &self.auto_scaling_group_name)
            .field("AutoScalingGroupARN", &self.auto_scaling_group_arn)
            .field("LaunchConfigurationName", &self.launch_configuration_name)
            .field("LaunchTemplate", &self.launch_template)
            .field("MixedInstancesPolicy", &self.mixed_instances_policy)
            .field("MinSize", &self.min_size)
            .field("MaxSize", &self.max_size)
            .field("DesiredCapacity", &self.desired_capacity)
            .field("DefaultCooldown", &self.default_cooldown)
            .list("AvailabilityZones", &self.availability_zones)
            .list("LoadBalancerNames", &self.load_balancer_names)
            .list("TargetGroupARNs", &self.target_group_arns)
            .field("HealthCheckType", &self.health_check_type)
            .field("HealthCheckGracePeriod", &self.health_check_grace_period)
            .list("Instances", &self.instances)
            .time("CreatedTime", &self.created_time)
            .list("SuspendedProcesses", &self.suspended_processes)
            .field("PlacementGroup", &self.placement_group)
            .field("VPCZoneIdentifier", &self.vpc_zone_identifier)
            .list("EnabledMetrics", &self.enabled_metrics)
            .field("Status", &self.status)
            .list("Tags", &self.tags)
            .list("TerminationPolicies", &self.termination_policies)
            .field("NewInstancesProtectedFromScaleIn", &self.new_instances_protected_from_scale_in)
            .field("ServiceLinkedRoleARN", &self.service_linked_role_arn)
            .finish()
    }
}

impl HashCode for AutoScalingGroup {
    fn hash_code(&self) -> i32 {
        hash_combine(&[
            self.auto_scaling_group_name.hash_code(),
            self.auto_scaling_group_arn.hash_code(),
            self.launch_configuration_name.hash_code(),
            self.launch_template.hash_code(),
            self.mixed_instances_policy.hash_code(),
            self.min_size.hash_code(),
            self.max_size.hash_code(),
            self.desired_capacity.hash_code(),
            self.default_cooldown.hash_code(),
            self.availability_zones.hash_code(),
            self.load_balancer_names.hash_code(),
            self.target_group_arns.hash_code(),
            self.health_check_type.hash_code(),
            self.health_check_grace_period.hash_code(),
            self.instances.hash_code(),
            self.created_time.hash_code(),
            self.suspended_processes.hash_code(),
            self.placement_group.hash_code(),
            self.vpc_zone_identifier.hash_code(),
            self.enabled_metrics.hash_code(),
            self.status.hash_code(),
            self.tags.hash_code(),
            self.termination_policies.hash_code(),
            self.new_instances_protected_from_scale_in.hash_code(),
            self.service_linked_role_arn.hash_code(),
        ])
    }
}

impl ToQuery for AutoScalingGroup {
    fn write_query(&self, writer: &mut QueryWriter, key: &str) {
        writer.field(key, "AutoScalingGroupName", &self.auto_scaling_group_name);
        writer.field(key, "AutoScalingGroupARN", &self.auto_scaling_group_arn);
        writer.field(key, "LaunchConfigurationName", &self.launch_configuration_name);
        writer.field(key, "LaunchTemplate", &self.launch_template);
        writer.field(key, "MixedInstancesPolicy", &self.mixed_instances_policy);
        writer.field(key, "MinSize", &self.min_size);
        writer.field(key, "MaxSize", &self.max_size);
        writer.field(key, "DesiredCapacity", &self.desired_capacity);
        writer.field(key, "DefaultCooldown", &self.default_cooldown);
        writer.list(key, "AvailabilityZones", &self.availability_zones);
        writer.list(key, "LoadBalancerNames", &self.load_balancer_names);
        writer.list(key, "TargetGroupARNs", &self.target_group_arns);
        writer.field(key, "HealthCheckType", &self.health_check_type);
        writer.field(key, "HealthCheckGracePeriod", &self.health_check_grace_period);
        writer.list(key, "Instances", &self.instances);
        writer.field(key, "CreatedTime", &self.created_time);
        writer.list(key, "SuspendedProcesses", &self.suspended_processes);
        writer.field(key, "PlacementGroup", &self.placement_group);
        writer.field(key, "VPCZoneIdentifier", &self.vpc_zone_identifier);
        writer.list(key, "EnabledMetrics", &self.enabled_metrics);
        writer.field(key, "Status", &self.status);
        writer.list(key, "Tags", &self.tags);
        writer.list(key, "TerminationPolicies", &self.termination_policies);
        writer.field(key, "NewInstancesProtectedFromScaleIn", &self.new_instances_protected_from_scale_in);
        writer.field(key, "ServiceLinkedRoleARN", &self.service_linked_role_arn);
    }
}

impl FromXml for AutoScalingGroup {
    fn from_xml(node: Node) -> Result<Self> {
        let mut out = AutoScalingGroup::default();
        for child in node.children().filter(Node::is_element) {
            match child.tag_name().name() {
                "AutoScalingGroupName" => {
                    out.auto_scaling_group_name = Some(FromXml::from_xml(child)?);
                }
                "AutoScalingGroupARN" => {
                    out.auto_scaling_group_arn = Some(FromXml::from_xml(child)?);
                }
                "LaunchConfigurationName" => {
                    out.launch_configuration_name = Some(FromXml::from_xml(child)?);
                }
                "LaunchTemplate" => out.launch_template = Some(FromXml::from_xml(child)?),
                "MixedInstancesPolicy" => {
                    out.mixed_instances_policy = Some(FromXml::from_xml(child)?);
                }
                "MinSize" => out.min_size = Some(FromXml::from_xml(child)?),
                "MaxSize" => out.max_size = Some(FromXml::from_xml(child)?),
                "DesiredCapacity" => out.desired_capacity = Some(FromXml::from_xml(child)?),
                "DefaultCooldown" => out.default_cooldown = Some(FromXml::from_xml(child)?),
                "AvailabilityZones" => out.availability_zones = Some(xml::list(child)?),
                "LoadBalancerNames" => out.load_balancer_names = Some(xml::list(child)?),
                "TargetGroupARNs" => out.target_group_arns = Some(xml::list(child)?),
                "HealthCheckType" => out.health_check_type = Some(FromXml::from_xml(child)?),
                "HealthCheckGracePeriod" => {
                    out.health_check_grace_period = Some(FromXml::from_xml(child)?);
                }
                "Instances" => out.instances = Some(xml::list(child)?),
                "CreatedTime" => out.created_time = Some(FromXml::from_xml(child)?),
                "SuspendedProcesses" => out.suspended_processes = Some(xml::list(child)?),
                "PlacementGroup" => out.placement_group = Some(FromXml::from_xml(child)?),
                "VPCZoneIdentifier" => out.vpc_zone_identifier = Some(FromXml::from_xml(child)?),
                "EnabledMetrics" => out.enabled_metrics = Some(xml::list(child)?),
                "Status" => out.status = Some(FromXml::from_xml(child)?),
                "Tags" => out.tags = Some(xml::list(child)?),
                "TerminationPolicies" => out.termination_policies = Some(xml::list(child)?),
                "NewInstancesProtectedFromScaleIn" => {
                    out.new_instances_protected_from_scale_in = Some(FromXml::from_xml(child)?);
                }
                "ServiceLinkedRoleARN" => {
                    out.service_linked_role_arn = Some(FromXml::from_xml(child)?);
                }
                _ => {}
            }
        }
        Ok(out)
    }
}

/// An EC2 instance that belongs to a group.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Instance {
    #[serde(rename = "InstanceId", skip_serializing_if = "Option::is_none")]
    instance_id: Option<String>,
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

impl Instance {
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

impl fmt::Display for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ModelFormatter::new(f)
            .field("InstanceId", &self.instance_id)
            .field("AvailabilityZone", &self.availability_zone)
            .field("LifecycleState", &self.lifecycle_state)
            .field("HealthStatus", &self.health_status)
            .field("LaunchConfigurationName", &self.launch_configuration_name)
            .field("LaunchTemplate", &self.launch_template)
            .field("ProtectedFromScaleIn", &self.protected_from_scale_in)
            .finish()
    }
}

impl HashCode for Instance {
    fn hash_code(&self) -> i32 {
        hash_combine(&[
            self.instance_id.hash_code(),
            self.availability_zone.hash_code(),
            self.lifecycle_state.hash_code(),
            self.health_status.hash_code(),
            self.launch_configuration_name.hash_code(),
            self.launch_template.hash_code(),
            self.protected_from_scale_in.hash_code(),
        ])
    }
}

impl ToQuery for Instance {
    fn write_query(&self, writer: &mut QueryWriter, key: &str) {
        writer.field(key, "InstanceId", &self.instance_id);
        writer.field(key, "AvailabilityZone", &self.availability_zone);
        writer.field(key, "LifecycleState", &self.lifecycle_state);
        writer.field(key, "HealthStatus", &self.health_status);
        writer.field(key, "LaunchConfigurationName", &self.launch_configuration_name);
        writer.field(key, "LaunchTemplate", &self.launch_template);
        writer.field(key, "ProtectedFromScaleIn", &self.protected_from_scale_in);
    }
}

impl FromXml for Instance {
    fn from_xml(node: Node) -> Result<Self> {
        let mut out = Instance::default();
        for child in node.children().filter(Node::is_element) {
            match child.tag_name().name() {
                "InstanceId" => out.instance_id = Some(FromXml::from_xml(child)?),
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

/// A scaling process suspended on a group.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct SuspendedProcess {
    #[serde(rename = "ProcessName", skip_serializing_if = "Option::is_none")]
    process_name: Option<String>,
    #[serde(rename = "SuspensionReason", skip_serializing_if = "Option::is_none")]
    suspension_reason: Option<String>,
}

impl SuspendedProcess {
    pub fn process_name(&self) -> Option<&str> {
        self.process_name.as_deref()
    }

    pub fn set_process_name(&mut self, process_name: Option<String>) {
        self.process_name = process_name;
    }

    pub fn with_process_name(mut self, process_name: impl Into<String>) -> Self {
        self.process_name = Some(process_name.into());
        self
    }

    pub fn suspension_reason(&self) -> Option<&str> {
        self.suspension_reason.as_deref()
    }

    pub fn set_suspension_reason(&mut self, suspension_reason: Option<String>) {
        self.suspension_reason = suspension_reason;
    }

    pub fn with_suspension_reason(mut self, suspension_reason: impl Into<String>) -> Self {
        self.suspension_reason = Some(suspension_reason.into());
        self
    }
}

impl fmt::Display for SuspendedProcess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ModelFormatter::new(f)
            .field("ProcessName", &self.process_name)
            .field("SuspensionReason", &self.suspension_reason)
            .finish()
    }
}

impl HashCode for SuspendedProcess {
    fn hash_code(&self) -> i32 {
        hash_combine(&[
            self.process_name.hash_code(),
            self.suspension_reason.hash_code(),
        ])
    }
}

impl ToQuery for SuspendedProcess {
    fn write_query(&self, writer: &mut QueryWriter, key: &str) {
        writer.field(key, "ProcessName", &self.process_name);
        writer.field(key, "SuspensionReason", &self.suspension_reason);
    }
}

impl FromXml for SuspendedProcess {
    fn from_xml(node: Node) -> Result<Self> {
        let mut out = SuspendedProcess::default();
        for child in node.children().filter(Node::is_element) {
            match child.tag_name().name() {
                "ProcessName" => out.process_name = Some(FromXml::from_xml(child)?),
                "SuspensionReason" => out.suspension_reason = Some(FromXml::from_xml(child)?),
                _ => {}
            }
        }
        Ok(out)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct EnabledMetric {
    #[serde(rename = "Metric", skip_serializing_if = "Option::is_none")]
    metric: Option<String>,
    #[serde(rename = "Granularity", skip_serializing_if = "Option::is_none")]
    granularity: Option<String>,
}

impl EnabledMetric {
    pub fn metric(&self) -> Option<&str> {
        self.metric.as_deref()
    }

    pub fn set_metric(&mut self, metric: Option<String>) {
        self.metric = metric;
    }

    pub fn with_metric(mut self, metric: impl Into<String>) -> Self {
        self.metric = Some(metric.into());
        self
    }

    pub fn granularity(&self) -> Option<&str> {
        self.granularity.as_deref()
    }

    pub fn set_granularity(&mut self, granularity: Option<String>) {
        self.granularity = granularity;
    }

    pub fn with_granularity(mut self, granularity: impl Into<String>) -> Self {
        self.granularity = Some(granularity.into());
        self
    }
}

impl fmt::Display for EnabledMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ModelFormatter::new(f)
            .field("Metric", &self.metric)
            .field("Granularity", &self.granularity)
            .finish()
    }
}

impl HashCode for EnabledMetric {
    fn hash_code(&self) -> i32 {
        hash_combine(&[
            self.metric.hash_code(),
            self.granularity.hash_code(),
        ])
    }
}

impl ToQuery for EnabledMetric {
    fn write_query(&self, writer: &mut QueryWriter, key: &str) {
        writer.field(key, "Metric", &self.metric);
        writer.field(key, "Granularity", &self.granularity);
    }
}

impl FromXml for EnabledMetric {
    fn from_xml(node: Node) -> Result<Self> {
        let mut out = EnabledMetric::default();
        for child in node.children().filter(Node::is_element) {
            match child.tag_name().name() {
                "Metric" => out.metric = Some(FromXml::from_xml(child)?),
                "Granularity" => out.granularity = Some(FromXml::from_xml(child)?),
                _ => {}
            }
        }
        Ok(out)
    }
}

/// Identifies a launch template and a version of it.
///
/// Set either the template ID or the template name, not both.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct LaunchTemplateSpecification {
    #[serde(rename = "LaunchTemplateId", skip_serializing_if = "Option::is_none")]
    launch_template_id: Option<String>,
    #[serde(rename = "LaunchTemplateName", skip_serializing_if = "Option::is_none")]
    launch_template_name: Option<String>,
    #[serde(rename = "Version", skip_serializing_if = "Option::is_none")]
    version: Option<String>,
}

impl LaunchTemplateSpecification {
    pub fn launch_template_id(&self) -> Option<&str> {
        self.launch_template_id.as_deref()
    }

    pub fn set_launch_template_id(&mut self, launch_template_id: Option<String>) {
        self.launch_template_id = launch_template_id;
    }

    pub fn with_launch_template_id(mut self, launch_template_id: impl Into<String>) -> Self {
        self.launch_template_id = Some(launch_template_id.into());
        self
    }

    /// Length 3-128.
    pub fn launch_template_name(&self) -> Option<&str> {
        self.launch_template_name.as_deref()
    }

    pub fn set_launch_template_name(&mut self, launch_template_name: Option<String>) {
        self.launch_template_name = launch_template_name;
    }

    pub fn with_launch_template_name(mut self, launch_template_name: impl Into<String>) -> Self {
        self.launch_template_name = Some(launch_template_name.into());
        self
    }

    /// A version number, `$Latest` or `$Default`.
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn set_version(&mut self, version: Option<String>) {
        self.version = version;
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }
}

impl fmt::Display for LaunchTemplateSpecification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ModelFormatter::new(f)
            .field("LaunchTemplateId", &self.launch_template_id)
            .field("LaunchTemplateName", &self.launch_template_name)
            .field("Version", &self.version)
            .finish()
    }
}

impl HashCode for LaunchTemplateSpecification {
    fn hash_code(&self) -> i32 {
        hash_combine(&[
            self.launch_template_id.hash_code(),
            self.launch_template_name.hash_code(),
            self.version.hash_code(),
        ])
    }
}

impl ToQuery for LaunchTemplateSpecification {
    fn write_query(&self, writer: &mut QueryWriter, key: &str) {
        writer.field(key, "LaunchTemplateId", &self.launch_template_id);
        writer.field(key, "LaunchTemplateName", &self.launch_template_name);
        writer.field(key, "Version", &self.version);
    }
}

impl FromXml for LaunchTemplateSpecification {
    fn from_xml(node: Node) -> Result<Self> {
        let mut out = LaunchTemplateSpecification::default();
        for child in node.children().filter(Node::is_element) {
            match child.tag_name().name() {
                "LaunchTemplateId" => out.launch_template_id = Some(FromXml::from_xml(child)?),
                "LaunchTemplateName" => out.launch_template_name = Some(FromXml::from_xml(child)?),
                "Version" => out.version = Some(FromXml::from_xml(child)?),
                _ => {}
            }
        }
        Ok(out)
    }
}

/// Combines On-Demand and Spot capacity across several instance types.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct MixedInstancesPolicy {
    #[serde(rename = "LaunchTemplate", skip_serializing_if = "Option::is_none")]
    launch_template: Option<LaunchTemplate>,
    #[serde(rename = "InstancesDistribution", skip_serializing_if = "Option::is_none")]
    instances_distribution: Option<InstancesDistribution>,
}

impl MixedInstancesPolicy {
    pub fn launch_template(&self) -> Option<&LaunchTemplate> {
        self.launch_template.as_ref()
    }

    pub fn set_launch_template(&mut self, launch_template: Option<LaunchTemplate>) {
        self.launch_template = launch_template;
    }

    pub fn with_launch_template(mut self, launch_template: LaunchTemplate) -> Self {
        self.launch_template = Some(launch_template);
        self
    }

    pub fn instances_distribution(&self) -> Option<&InstancesDistribution> {
        self.instances_distribution.as_ref()
    }

    pub fn set_instances_distribution(
        &mut self,
        instances_distribution: Option<InstancesDistribution>,
    ) {
        self.instances_distribution = instances_distribution;
    }

    pub fn with_instances_distribution(
        mut self,
        instances_distribution: InstancesDistribution,
    ) -> Self {
        self.instances_distribution = Some(instances_distribution);
        self
    }
}

impl fmt::Display for MixedInstancesPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ModelFormatter::new(f)
            .field("LaunchTemplate", &self.launch_template)
            .field("InstancesDistribution", &self.instances_distribution)
            .finish()
    }
}

impl HashCode for MixedInstancesPolicy {
    fn hash_code(&self) -> i32 {
        hash_combine(&[
            self.launch_template.hash_code(),
            self.instances_distribution.hash_code(),
        ])
    }
}

impl ToQuery for MixedInstancesPolicy {
    fn write_query(&self, writer: &mut QueryWriter, key: &str) {
        writer.field(key, "LaunchTemplate", &self.launch_template);
        writer.field(key, "InstancesDistribution", &self.instances_distribution);
    }
}

impl FromXml for MixedInstancesPolicy {
    fn from_xml(node: Node) -> Result<Self> {
        let mut out = MixedInstancesPolicy::default();
        for child in node.children().filter(Node::is_element) {
            match child.tag_name().name() {
                "LaunchTemplate" => out.launch_template = Some(FromXml::from_xml(child)?),
                "InstancesDistribution" => {
                    out.instances_distribution = Some(FromXml::from_xml(child)?);
                }
                _ => {}
            }
        }
        Ok(out)
    }
}

/// Launch template plus instance type overrides of a mixed instances policy.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct LaunchTemplate {
    #[serde(rename = "LaunchTemplateSpecification", skip_serializing_if = "Option::is_none")]
    launch_template_specification: Option<LaunchTemplateSpecification>,
    #[serde(rename = "Overrides", skip_serializing_if = "Option::is_none")]
    overrides: Option<Vec<LaunchTemplateOverrides>>,
}

impl Default for LaunchTemplate {
    fn default() -> Self {
        LaunchTemplate {
            launch_template_specification: None,
            overrides: Some(Vec::new()),
        }
    }
}

impl LaunchTemplate {
    pub fn launch_template_specification(&self) -> Option<&LaunchTemplateSpecification> {
        self.launch_template_specification.as_ref()
    }

    pub fn set_launch_template_specification(
        &mut self,
        launch_template_specification: Option<LaunchTemplateSpecification>,
    ) {
        self.launch_template_specification = launch_template_specification;
    }

    pub fn with_launch_template_specification(
        mut self,
        launch_template_specification: LaunchTemplateSpecification,
    ) -> Self {
        self.launch_template_specification = Some(launch_template_specification);
        self
    }

    /// Between 2 and 20 entries.
    pub fn overrides(&self) -> Option<&[LaunchTemplateOverrides]> {
        self.overrides.as_deref()
    }

    pub fn set_overrides(&mut self, overrides: Option<Vec<LaunchTemplateOverrides>>) {
        self.overrides = overrides;
    }

    pub fn with_overrides<I>(mut self, overrides: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<LaunchTemplateOverrides>,
    {
        self.overrides.get_or_insert_with(Vec::new).extend(overrides.into_iter().map(Into::into));
        self
    }
}

impl fmt::Display for LaunchTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ModelFormatter::new(f)
            .field("LaunchTemplateSpecification", &self.launch_template_specification)
            .list("Overrides", &self.overrides)
            .finish()
    }
}

impl HashCode for LaunchTemplate {
    fn hash_code(&self) -> i32 {
        hash_combine(&[
            self.launch_template_specification.hash_code(),
            self.overrides.hash_code(),
        ])
    }
}

impl ToQuery for LaunchTemplate {
    fn write_query(&self, writer: &mut QueryWriter, key: &str) {
        writer.field(key, "LaunchTemplateSpecification", &self.launch_template_specification);
        writer.list(key, "Overrides", &self.overrides);
    }
}

impl FromXml for LaunchTemplate {
    fn from_xml(node: Node) -> Result<Self> {
        let mut out = LaunchTemplate::default();
        for child in node.children().filter(Node::is_element) {
            match child.tag_name().name() {
                "LaunchTemplateSpecification" => {
                    out.launch_template_specification = Some(FromXml::from_xml(child)?);
                }
                "Overrides" => out.overrides = Some(xml::list(child)?),
                _ => {}
            }
        }
        Ok(out)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct LaunchTemplateOverrides {
    #[serde(rename = "InstanceType", skip_serializing_if = "Option::is_none")]
    instance_type: Option<String>,
    #[serde(rename = "WeightedCapacity", skip_serializing_if = "Option::is_none")]
    weighted_capacity: Option<String>,
}

impl LaunchTemplateOverrides {
    pub fn instance_type(&self) -> Option<&str> {
        self.instance_type.as_deref()
    }

    pub fn set_instance_type(&mut self, instance_type: Option<String>) {
        self.instance_type = instance_type;
    }

    pub fn with_instance_type(mut self, instance_type: impl Into<String>) -> Self {
        self.instance_type = Some(instance_type.into());
        self
    }

    /// Capacity units this instance type counts for, 1-999.
    pub fn weighted_capacity(&self) -> Option<&str> {
        self.weighted_capacity.as_deref()
    }

    pub fn set_weighted_capacity(&mut self, weighted_capacity: Option<String>) {
        self.weighted_capacity = weighted_capacity;
    }

    pub fn with_weighted_capacity(mut self, weighted_capacity: impl Into<String>) -> Self {
        self.weighted_capacity = Some(weighted_capacity.into());
        self
    }
}

impl fmt::Display for LaunchTemplateOverrides {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ModelFormatter::new(f)
            .field("InstanceType", &self.instance_type)
            .field("WeightedCapacity", &self.weighted_capacity)
            .finish()
    }
}

impl HashCode for LaunchTemplateOverrides {
    fn hash_code(&self) -> i32 {
        hash_combine(&[
            self.instance_type.hash_code(),
            self.weighted_capacity.hash_code(),
        ])
    }
}

impl ToQuery for LaunchTemplateOverrides {
    fn write_query(&self, writer: &mut QueryWriter, key: &str) {
        writer.field(key, "InstanceType", &self.instance_type);
        writer.field(key, "WeightedCapacity", &self.weighted_capacity);
    }
}

impl FromXml for LaunchTemplateOverrides {
    fn from_xml(node: Node) -> Result<Self> {
        let mut out = LaunchTemplateOverrides::default();
        for child in node.children().filter(Node::is_element) {
            match child.tag_name().name() {
                "InstanceType" => out.instance_type = Some(FromXml::from_xml(child)?),
                "WeightedCapacity" => out.weighted_capacity = Some(FromXml::from_xml(child)?),
                _ => {}
            }
        }
        Ok(out)
    }
}

/// How a mixed instances policy splits capacity between On-Demand and Spot.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct InstancesDistribution {
    #[serde(rename = "OnDemandAllocationStrategy", skip_serializing_if = "Option::is_none")]
    on_demand_allocation_strategy: Option<String>,
    #[serde(rename = "OnDemandBaseCapacity", skip_serializing_if = "Option::is_none")]
    on_demand_base_capacity: Option<i32>,
    #[serde(rename = "OnDemandPercentageAboveBaseCapacity", skip_serializing_if = "Option::is_none")]
    on_demand_percentage_above_base_capacity: Option<i32>,
    #[serde(rename = "SpotAllocationStrategy", skip_serializing_if = "Option::is_none")]
    spot_allocation_strategy: Option<String>,
    #[serde(rename = "SpotInstancePools", skip_serializing_if = "Option::is_none")]
    spot_instance_pools: Option<i32>,
    #[serde(rename = "SpotMaxPrice", skip_serializing_if = "Option::is_none")]
    spot_max_price: Option<String>,
}

impl InstancesDistribution {
    pub fn on_demand_allocation_strategy(&self) -> Option<&str> {
        self.on_demand_allocation_strategy.as_deref()
    }

    pub fn set_on_demand_allocation_strategy(
        &mut self,
        on_demand_allocation_strategy: Option<String>,
    ) {
        self.on_demand_allocation_strategy = on_demand_allocation_strategy;
    }

    pub fn with_on_demand_allocation_strategy(
        mut self,
        on_demand_allocation_strategy: impl Into<String>,
    ) -> Self {
        self.on_demand_allocation_strategy = Some(on_demand_allocation_strategy.into());
        self
    }

    pub fn on_demand_base_capacity(&self) -> Option<i32> {
        self.on_demand_base_capacity
    }

    pub fn set_on_demand_base_capacity(&mut self, on_demand_base_capacity: Option<i32>) {
        self.on_demand_base_capacity = on_demand_base_capacity;
    }

    pub fn with_on_demand_base_capacity(mut self, on_demand_base_capacity: i32) -> Self {
        self.on_demand_base_capacity = Some(on_demand_base_capacity);
        self
    }

    /// 0-100.
    pub fn on_demand_percentage_above_base_capacity(&self) -> Option<i32> {
        self.on_demand_percentage_above_base_capacity
    }

    pub fn set_on_demand_percentage_above_base_capacity(
        &mut self,
        on_demand_percentage_above_base_capacity: Option<i32>,
    ) {
        self.on_demand_percentage_above_base_capacity = on_demand_percentage_above_base_capacity;
    }

    pub fn with_on_demand_percentage_above_base_capacity(
        mut self,
        on_demand_percentage_above_base_capacity: i32,
    ) -> Self {
        self.on_demand_percentage_above_base_capacity = Some(on_demand_percentage_above_base_capacity);
        self
    }

    /// `lowest-price` or `capacity-optimized`.
    pub fn spot_allocation_strategy(&self) -> Option<&str> {
        self.spot_allocation_strategy.as_deref()
    }

    pub fn set_spot_allocation_strategy(&mut self, spot_allocation_strategy: Option<String>) {
        self.spot_allocation_strategy = spot_allocation_strategy;
    }

    pub fn with_spot_allocation_strategy(
        mut self,
        spot_allocation_strategy: impl Into<String>,
    ) -> Self {
        self.spot_allocation_strategy = Some(spot_allocation_strategy.into());
        self
    }

    /// 1-20, only used with `lowest-price`.
    pub fn spot_instance_pools(&self) -> Option<i32> {
        self.spot_instance_pools
    }

    pub fn set_spot_instance_pools(&mut self, spot_instance_pools: Option<i32>) {
        self.spot_instance_pools = spot_instance_pools;
    }

    pub fn with_spot_instance_pools(mut self, spot_instance_pools: i32) -> Self {
        self.spot_instance_pools = Some(spot_instance_pools);
        self
    }

    /// An empty string means the On-Demand price.
    pub fn spot_max_price(&self) -> Option<&str> {
        self.spot_max_price.as_deref()
    }

    pub fn set_spot_max_price(&mut self, spot_max_price: Option<String>) {
        self.spot_max_price = spot_max_price;
    }

    pub fn with_spot_max_price(mut self, spot_max_price: impl Into<String>) -> Self {
        self.spot_max_price = Some(spot_max_price.into());
        self
    }
}

impl fmt::Display for InstancesDistribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ModelFormatter::new(f)
            .field("OnDemandAllocationStrategy", &self.on_demand_allocation_strategy)
            .field("OnDemandBaseCapacity", &self.on_demand_base_capacity)
            .field("OnDemandPercentageAboveBaseCapacity", &self.on_demand_percentage_above_base_capacity)
            .field("SpotAllocationStrategy", &self.spot_allocation_strategy)
            .field("SpotInstancePools", &self.spot_instance_pools)
            .field("SpotMaxPrice", &self.spot_max_price)
            .finish()
    }
}

impl HashCode for InstancesDistribution {
    fn hash_code(&self) -> i32 {
        hash_combine(&[
            self.on_demand_allocation_strategy.hash_code(),
            self.on_demand_base_capacity.hash_code(),
            self.on_demand_percentage_above_base_capacity.hash_code(),
            self.spot_allocation_strategy.hash_code(),
            self.spot_instance_pools.hash_code(),
            self.spot_max_price.hash_code(),
        ])
    }
}

impl ToQuery for InstancesDistribution {
    fn write_query(&self, writer: &mut QueryWriter, key: &str) {
        writer.field(key, "OnDemandAllocationStrategy", &self.on_demand_allocation_strategy);
        writer.field(key, "OnDemandBaseCapacity", &self.on_demand_base_capacity);
        writer.field(key, "OnDemandPercentageAboveBaseCapacity", &self.on_demand_percentage_above_base_capacity);
        writer.field(key, "SpotAllocationStrategy", &self.spot_allocation_strategy);
        writer.field(key, "SpotInstancePools", &self.spot_instance_pools);
        writer.field(key, "SpotMaxPrice", &self.spot_max_price);
    }
}

impl FromXml for InstancesDistribution {
    fn from_xml(node: Node) -> Result<Self> {
        let mut out = InstancesDistribution::default();
        for child in node.children().filter(Node::is_element) {
            match child.tag_name().name() {
                "OnDemandAllocationStrategy" => {
                    out.on_demand_allocation_strategy = Some(FromXml::from_xml(child)?);
                }
                "OnDemandBaseCapacity" => {
                    out.on_demand_base_capacity = Some(FromXml::from_xml(child)?);
                }
                "OnDemandPercentageAboveBaseCapacity" => {
                    out.on_demand_percentage_above_base_capacity = Some(FromXml::from_xml(child)?);
                }
                "SpotAllocationStrategy" => {
                    out.spot_allocation_strategy = Some(FromXml::from_xml(child)?);
                }
                "SpotInstancePools" => out.spot_instance_pools = Some(FromXml::from_xml(child)?),
                "SpotMaxPrice" => out.spot_max_price = Some(FromXml::from_xml(child)?),
                _ => {}
            }
        }
        Ok(out)
    }
}

/// Input of `CreateAutoScalingGroup`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateAutoScalingGroupRequest {
    #[serde(rename = "AutoScalingGroupName", skip_serializing_if = "Option::is_none")]
    auto_scaling_group_name: Option<String>,
    #[serde(rename = "LaunchConfigurationName", skip_serializing_if = "Option::is_none")]
    launch_configuration_name: Option<String>,
    #[serde(rename = "LaunchTemplate", skip_serializing_if = "Option::is_none")]
    launch_template: Option<LaunchTemplateSpecification>,
    #[serde(rename = "MixedInstancesPolicy", skip_serializing_if = "Option::is_none")]
    mixed_instances_policy: Option<MixedInstancesPolicy>,
    #[serde(rename = "InstanceId", skip_serializing_if = "Option::is_none")]
    instance_id: Option<String>,
    #[serde(rename = "MinSize", skip_serializing_if = "Option::is_none")]
    min_size: Option<i32>,
    #[serde(rename = "MaxSize", skip_serializing_if = "Option::is_none")]
    max_size: Option<i32>,
    #[serde(rename = "DesiredCapacity", skip_serializing_if = "Option::is_none")]
    desired_capacity: Option<i32>,
    #[serde(rename = "DefaultCooldown", skip_serializing_if = "Option::is_none")]
    default_cooldown: Option<i32>,
    #[serde(rename = "AvailabilityZones", skip_serializing_if = "Option::is_none")]
    availability_zones: Option<Vec<String>>,
    #[serde(rename = "LoadBalancerNames", skip_serializing_if = "Option::is_none")]
    load_balancer_names: Option<Vec<String>>,
    #[serde(rename = "TargetGroupARNs", skip_serializing_if = "Option::is_none")]
    target_group_arns: Option<Vec<String>>,
    #[serde(rename = "HealthCheckType", skip_serializing_if = "Option::is_none")]
    health_check_type: Option<String>,
    #[serde(rename = "HealthCheckGracePeriod", skip_serializing_if = "Option::is_none")]
    health_check_grace_period: Option<i32>,
    #[serde(rename = "PlacementGroup", skip_serializing_if = "Option::is_none")]
    placement_group: Option<String>,
    #[serde(rename = "VPCZoneIdentifier", skip_serializing_if = "Option::is_none")]
    vpc_zone_identifier: Option<String>,
    #[serde(rename = "TerminationPolicies", skip_serializing_if = "Option::is_none")]
    termination_policies: Option<Vec<String>>,
    #[serde(rename = "NewInstancesProtectedFromScaleIn", skip_serializing_if = "Option::is_none")]
    new_instances_protected_from_scale_in: Option<bool>,
    #[serde(rename = "LifecycleHookSpecificationList", skip_serializing_if = "Option::is_none")]
    lifecycle_hook_specification_list: Option<Vec<LifecycleHookSpecification>>,
    #[serde(rename = "Tags", skip_serializing_if = "Option::is_none")]
    tags: Option<Vec<Tag>>,
    #[serde(rename = "ServiceLinkedRoleARN", skip_serializing_if = "Option::is_none")]
    service_linked_role_arn: Option<String>,
}

impl Default for CreateAutoScalingGroupRequest {
    fn default() -> Self {
        CreateAutoScalingGroupRequest {
            auto_scaling_group_name: None,
            launch_configuration_name: None,
            launch_template: None,
            mixed_instances_policy: None,
            instance_id: None,
            min_size: None,
            max_size: None,
            desired_capacity: None,
            default_cooldown: None,
            availability_zones: Some(Vec::new()),
            load_balancer_names: Some(Vec::new()),
            target_group_arns: Some(Vec::new()),
            health_check_type: None,
            health_check_grace_period: None,
            placement_group: None,
            vpc_zone_identifier: None,
            termination_policies: Some(Vec::new()),
            new_instances_protected_from_scale_in: None,
            lifecycle_hook_specification_list: Some(Vec::new()),
            tags: Some(Vec::new()),
            service_linked_role_arn: None,
        }
    }
}

impl CreateAutoScalingGroupRequest {
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

    pub fn mixed_instances_policy(&self) -> Option<&MixedInstancesPolicy> {
        self.mixed_instances_policy.as_ref()
    }

    pub fn set_mixed_instances_policy(
        &mut self,
        mixed_instances_policy: Option<MixedInstancesPolicy>,
    ) {
        self.mixed_instances_policy = mixed_instances_policy;
    }

    pub fn with_mixed_instances_policy(
        mut self,
        mixed_instances_policy: MixedInstancesPolicy,
    ) -> Self {
        self.mixed_instances_policy = Some(mixed_instances_policy);
        self
    }

    /// Derive the launch settings from this instance.
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

    pub fn default_cooldown(&self) -> Option<i32> {
        self.default_cooldown
    }

    pub fn set_default_cooldown(&mut self, default_cooldown: Option<i32>) {
        self.default_cooldown = default_cooldown;
    }

    pub fn with_default_cooldown(mut self, default_cooldown: i32) -> Self {
        self.default_cooldown = Some(default_cooldown);
        self
    }

    pub fn availability_zones(&self) -> Option<&[String]> {
        self.availability_zones.as_deref()
    }

    pub fn set_availability_zones(&mut self, availability_zones: Option<Vec<String>>) {
        self.availability_zones = availability_zones;
    }

    pub fn with_availability_zones<I>(mut self, availability_zones: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.availability_zones
            .get_or_insert_with(Vec::new)
            .extend(availability_zones.into_iter().map(Into::into));
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

    pub fn health_check_type(&self) -> Option<&str> {
        self.health_check_type.as_deref()
    }

    pub fn set_health_check_type(&mut self, health_check_type: Option<String>) {
        self.health_check_type = health_check_type;
    }

    pub fn with_health_check_type(mut self, health_check_type: impl Into<String>) -> Self {
        self.health_check_type = Some(health_check_type.into());
        self
    }

    pub fn health_check_grace_period(&self) -> Option<i32> {
        self.health_check_grace_period
    }

    pub fn set_health_check_grace_period(&mut self, health_check_grace_period: Option<i32>) {
        self.health_check_grace_period = health_check_grace_period;
    }

    pub fn with_health_check_grace_period(mut self, health_check_grace_period: i32) -> Self {
        self.health_check_grace_period = Some(health_check_grace_period);
        self
    }

    pub fn placement_group(&self) -> Option<&str> {
        self.placement_group.as_deref()
    }

    pub fn set_placement_group(&mut self, placement_group: Option<String>) {
        self.placement_group = placement_group;
    }

    pub fn with_placement_group(mut self, placement_group: impl Into<String>) -> Self {
        self.placement_group = Some(placement_group.into());
        self
    }

    pub fn vpc_zone_identifier(&self) -> Option<&str> {
        self.vpc_zone_identifier.as_deref()
    }

    pub fn set_vpc_zone_identifier(&mut self, vpc_zone_identifier: Option<String>) {
        self.vpc_zone_identifier = vpc_zone_identifier;
    }

    pub fn with_vpc_zone_identifier(mut self, vpc_zone_identifier: impl Into<String>) -> Self {
        self.vpc_zone_identifier = Some(vpc_zone_identifier.into());
        self
    }

    pub fn termination_policies(&self) -> Option<&[String]> {
        self.termination_policies.as_deref()
    }

    pub fn set_termination_policies(&mut self, termination_policies: Option<Vec<String>>) {
        self.termination_policies = termination_policies;
    }

    pub fn with_termination_policies<I>(mut self, termination_policies: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.termination_policies
            .get_or_insert_with(Vec::new)
            .extend(termination_policies.into_iter().map(Into::into));
        self
    }

    pub fn new_instances_protected_from_scale_in(&self) -> Option<bool> {
        self.new_instances_protected_from_scale_in
    }

    pub fn set_new_instances_protected_from_scale_in(
        &mut self,
        new_instances_protected_from_scale_in: Option<bool>,
    ) {
        self.new_instances_protected_from_scale_in = new_instances_protected_from_scale_in;
    }

    pub fn with_new_instances_protected_from_scale_in(
        mut self,
        new_instances_protected_from_scale_in: bool,
    ) -> Self {
        self.new_instances_protected_from_scale_in = Some(new_instances_protected_from_scale_in);
        self
    }

    pub fn lifecycle_hook_specification_list(&self) -> Option<&[LifecycleHookSpecification]> {
        self.lifecycle_hook_specification_list.as_deref()
    }

    pub fn set_lifecycle_hook_specification_list(
        &mut self,
        lifecycle_hook_specification_list: Option<Vec<LifecycleHookSpecification>>,
    ) {
        self.lifecycle_hook_specification_list = lifecycle_hook_specification_list;
    }

    pub fn with_lifecycle_hook_specification_list<I>(mut self, lifecycle_hook_specification_list: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<LifecycleHookSpecification>,
    {
        self.lifecycle_hook_specification_list
            .get_or_insert_with(Vec::new)
            .extend(lifecycle_hook_specification_list.into_iter().map(Into::into));
        self
    }

    pub fn tags(&self) -> Option<&[Tag]> {
        self.tags.as_deref()
    }

    pub fn set_tags(&mut self, tags: Option<Vec<Tag>>) {
        self.tags = tags;
    }

    pub fn with_tags<I>(mut self, tags: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Tag>,
    {
        self.tags.get_or_insert_with(Vec::new).extend(tags.into_iter().map(Into::into));
        self
    }

    pub fn service_linked_role_arn(&self) -> Option<&str> {
        self.service_linked_role_arn.as_deref()
    }

    pub fn set_service_linked_role_arn(&mut self, service_linked_role_arn: Option<String>) {
        self.service_linked_role_arn = service_linked_role_arn;
    }

    pub fn with_service_linked_role_arn(
        mut self,
        service_linked_role_arn: impl Into<String>,
    ) -> Self {
        self.service_linked_role_arn = Some(service_linked_role_arn.into());
        self
    }
}

impl fmt::Display for CreateAutoScalingGroupRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ModelFormatter::new(f)
            .field("AutoScalingGroupName", &self.auto_scaling_group_name)
            .field("LaunchConfigurationName", &self.launch_configuration_name)
            .field("LaunchTemplate", &self.launch_template)
            .field("MixedInstancesPolicy", &self.mixed_instances_policy)
            .field("InstanceId", &self.instance_id)
            .field("MinSize", &self.min_size)
            .field("MaxSize", &self.max_size)
            .field("DesiredCapacity", &self.desired_capacity)
            .field("DefaultCooldown", &self.default_cooldown)
            .list("AvailabilityZones", &self.availability_zones)
            .list("LoadBalancerNames", &self.load_balancer_names)
            .list("TargetGroupARNs", &self.target_group_arns)
            .field("HealthCheckType", &self.health_check_type)
            .field("HealthCheckGracePeriod", &self.health_check_grace_period)
            .field("PlacementGroup", &self.placement_group)
            .field("VPCZoneIdentifier", &self.vpc_zone_identifier)
            .list("TerminationPolicies", &self.termination_policies)
            .field("NewInstancesProtectedFromScaleIn", &self.new_instances_protected_from_scale_in)
            .list("LifecycleHookSpecificationList", &self.lifecycle_hook_specification_list)
            .list("Tags", &self.tags)
            .field("ServiceLinkedRoleARN", &self.service_linked_role_arn)
            .finish()
    }
}

impl HashCode for CreateAutoScalingGroupRequest {
    fn hash_code(&self) -> i32 {
        hash_combine(&[
            self.auto_scaling_group_name.hash_code(),
            self.launch_configuration_name.hash_code(),
            self.launch_template.hash_code(),
            self.mixed_instances_policy.hash_code(),
            self.instance_id.hash_code(),
            self.min_size.hash_code(),
            self.max_size.hash_code(),
            self.desired_capacity.hash_code(),
            self.default_cooldown.hash_code(),
            self.availability_zones.hash_code(),
            self.load_balancer_names.hash_code(),
            self.target_group_arns.hash_code(),
            self.health_check_type.hash_code(),
            self.health_check_grace_period.hash_code(),
            self.placement_group.hash_code(),
            self.vpc_zone_identifier.hash_code(),
            self.termination_policies.hash_code(),
            self.new_instances_protected_from_scale_in.hash_code(),
            self.lifecycle_hook_specification_list.hash_code(),
            self.tags.hash_code(),
            self.service_linked_role_arn.hash_code(),
        ])
    }
}

impl ToQuery for CreateAutoScalingGroupRequest {
    fn write_query(&self, writer: &mut QueryWriter, key: &str) {
        writer.field(key, "AutoScalingGroupName", &self.auto_scaling_group_name);
        writer.field(key, "LaunchConfigurationName", &self.launch_configuration_name);
        writer.field(key, "LaunchTemplate", &self.launch_template);
        writer.field(key, "MixedInstancesPolicy", &self.mixed_instances_policy);
        writer.field(key, "InstanceId", &self.instance_id);
        writer.field(key, "MinSize", &self.min_size);
        writer.field(key, "MaxSize", &self.max_size);
        writer.field(key, "DesiredCapacity", &self.desired_capacity);
        writer.field(key, "DefaultCooldown", &self.default_cooldown);
        writer.list(key, "AvailabilityZones", &self.availability_zones);
        writer.list(key, "LoadBalancerNames", &self.load_balancer_names);
        writer.list(key, "TargetGroupARNs", &self.target_group_arns);
        writer.field(key, "HealthCheckType", &self.health_check_type);
        writer.field(key, "HealthCheckGracePeriod", &self.health_check_grace_period);
        writer.field(key, "PlacementGroup", &self.placement_group);
        writer.field(key, "VPCZoneIdentifier", &self.vpc_zone_identifier);
        writer.list(key, "TerminationPolicies", &self.termination_policies);
        writer.field(key, "NewInstancesProtectedFromScaleIn", &self.new_instances_protected_from_scale_in);
        writer.list(key, "LifecycleHookSpecificationList", &self.lifecycle_hook_specification_list);
        writer.list(key, "Tags", &self.tags);
        writer.field(key, "ServiceLinkedRoleARN", &self.service_linked_role_arn);
    }
}

/// Input of `DeleteAutoScalingGroup`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct DeleteAutoScalingGroupRequest {
    #[serde(rename = "AutoScalingGroupName", skip_serializing_if = "Option::is_none")]
    auto_scaling_group_name: Option<String>,
    #[serde(rename = "ForceDelete", skip_serializing_if = "Option::is_none")]
    force_delete: Option<bool>,
}

impl DeleteAutoScalingGroupRequest {
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

    /// Terminate the instances instead of waiting for them.
    pub fn force_delete(&self) -> Option<bool> {
        self.force_delete
    }

    pub fn set_force_delete(&mut self, force_delete: Option<bool>) {
        self.force_delete = force_delete;
    }

    pub fn with_force_delete(mut self, force_delete: bool) -> Self {
        self.force_delete = Some(force_delete);
        self
    }
}

impl fmt::Display for DeleteAutoScalingGroupRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ModelFormatter::new(f)
            .field("AutoScalingGroupName", &self.auto_scaling_group_name)
            .field("ForceDelete", &self.force_delete)
            .finish()
    }
}

impl HashCode for DeleteAutoScalingGroupRequest {
    fn hash_code(&self) -> i32 {
        hash_combine(&[
            self.auto_scaling_group_name.hash_code(),
            self.force_delete.hash_code(),
        ])
    }
}

impl ToQuery for DeleteAutoScalingGroupRequest {
    fn write_query(&self, writer: &mut QueryWriter, key: &str) {
        writer.field(key, "AutoScalingGroupName", &self.auto_scaling_group_name);
        writer.field(key, "ForceDelete", &self.force_delete);
    }
}

/// Input of `DescribeAutoScalingGroups`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct DescribeAutoScalingGroupsRequest {
    #[serde(rename = "AutoScalingGroupNames", skip_serializing_if = "Option::is_none")]
    auto_scaling_group_names: Option<Vec<String>>,
    #[serde(rename = "NextToken", skip_serializing_if = "Option::is_none")]
    next_token: Option<String>,
    #[serde(rename = "MaxRecords", skip_serializing_if = "Option::is_none")]
    max_records: Option<i32>,
}

impl Default for DescribeAutoScalingGroupsRequest {
    fn default() -> Self {
        DescribeAutoScalingGroupsRequest {
            auto_scaling_group_names: Some(Vec::new()),
            next_token: None,
            max_records: None,
        }
    }
}

impl DescribeAutoScalingGroupsRequest {
    /// Up to 1600 names. All groups when empty.
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

impl fmt::Display for DescribeAutoScalingGroupsRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ModelFormatter::new(f)
            .list("AutoScalingGroupNames", &self.auto_scaling_group_names)
            .field("NextToken", &self.next_token)
            .field("MaxRecords", &self.max_records)
            .finish()
    }
}

impl HashCode for DescribeAutoScalingGroupsRequest {
    fn hash_code(&self) -> i32 {
        hash_combine(&[
            self.auto_scaling_group_names.hash_code(),
            self.next_token.hash_code(),
            self.max_records.hash_code(),
        ])
    }
}

impl ToQuery for DescribeAutoScalingGroupsRequest {
    fn write_query(&self, writer: &mut QueryWriter, key: &str) {
        writer.list(key, "AutoScalingGroupNames", &self.auto_scaling_group_names);
        writer.field(key, "NextToken", &self.next_token);
        writer.field(key, "MaxRecords", &self.max_records);
    }
}

/// Output of `DescribeAutoScalingGroups`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct DescribeAutoScalingGroupsResult {
    #[serde(rename = "AutoScalingGroups", skip_serializing_if = "Option::is_none")]
    auto_scaling_groups: Option<Vec<AutoScalingGroup>>,
    #[serde(rename = "NextToken", skip_serializing_if = "Option::is_none")]
    next_token: Option<String>,
}

impl Default for DescribeAutoScalingGroupsResult {
    fn default() -> Self {
        DescribeAutoScalingGroupsResult {
            auto_scaling_groups: Some(Vec::new()),
            next_token: None,
        }
    }
}

impl DescribeAutoScalingGroupsResult {
    pub fn auto_scaling_groups(&self) -> Option<&[AutoScalingGroup]> {
        self.auto_scaling_groups.as_deref()
    }

    pub fn set_auto_scaling_groups(&mut self, auto_scaling_groups: Option<Vec<AutoScalingGroup>>) {
        self.auto_scaling_groups = auto_scaling_groups;
    }

    pub fn with_auto_scaling_groups<I>(mut self, auto_scaling_groups: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<AutoScalingGroup>,
    {
        self.auto_scaling_groups
            .get_or_insert_with(Vec::new)
            .extend(auto_scaling_groups.into_iter().map(Into::into));
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

impl fmt::Display for DescribeAutoScalingGroupsResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ModelFormatter::new(f)
            .list("AutoScalingGroups", &self.auto_scaling_groups)
            .field("NextToken", &self.next_token)
            .finish()
    }
}

impl HashCode for DescribeAutoScalingGroupsResult {
    fn hash_code(&self) -> i32 {
        hash_combine(&[
            self.auto_scaling_groups.hash_code(),
            self.next_token.hash_code(),
        ])
    }
}

impl FromXml for DescribeAutoScalingGroupsResult {
    fn from_xml(node: Node) -> Result<Self> {
        let mut out = DescribeAutoScalingGroupsResult::default();
        for child in node.children().filter(Node::is_element) {
            match child.tag_name().name() {
                "AutoScalingGroups" => out.auto_scaling_groups = Some(xml::list(child)?),
                "NextToken" => out.next_token = Some(FromXml::from_xml(child)?),
                _ => {}
            }
        }
        Ok(out)
    }
}

/// Input of `SetDesiredCapacity`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct SetDesiredCapacityRequest {
    #[serde(rename = "AutoScalingGroupName", skip_serializing_if = "Option::is_none")]
    auto_scaling_group_name: Option<String>,
    #[serde(rename = "DesiredCapacity", skip_serializing_if = "Option::is_none")]
    desired_capacity: Option<i32>,
    #[serde(rename = "HonorCooldown", skip_serializing_if = "Option::is_none")]
    honor_cooldown: Option<bool>,
}

impl SetDesiredCapacityRequest {
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

    pub fn honor_cooldown(&self) -> Option<bool> {
        self.honor_cooldown
    }

    pub fn set_honor_cooldown(&mut self, honor_cooldown: Option<bool>) {
        self.honor_cooldown = honor_cooldown;
    }

    pub fn with_honor_cooldown(mut self, honor_cooldown: bool) -> Self {
        self.honor_cooldown = Some(honor_cooldown);
        self
    }
}

impl fmt::Display for SetDesiredCapacityRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ModelFormatter::new(f)
            .field("AutoScalingGroupName", &self.auto_scaling_group_name)
            .field("DesiredCapacity", &self.desired_capacity)
            .field("HonorCooldown", &self.honor_cooldown)
            .finish()
    }
}

impl HashCode for SetDesiredCapacityRequest {
    fn hash_code(&self) -> i32 {
        hash_combine(&[
            self.auto_scaling_group_name.hash_code(),
            self.desired_capacity.hash_code(),
            self.honor_cooldown.hash_code(),
        ])
    }
}

impl ToQuery for SetDesiredCapacityRequest {
    fn write_query(&self, writer: &mut QueryWriter, key: &str) {
        writer.field(key, "AutoScalingGroupName", &self.auto_scaling_group_name);
        writer.field(key, "DesiredCapacity", &self.desired_capacity);
        writer.field(key, "HonorCooldown", &self.honor_cooldown);
    }
}

/// Input of `UpdateAutoScalingGroup`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateAutoScalingGroupRequest {
    #[serde(rename = "AutoScalingGroupName", skip_serializing_if = "Option::is_none")]
    auto_scaling_group_name: Option<String>,
    #[serde(rename = "LaunchConfigurationName", skip_serializing_if = "Option::is_none")]
    launch_configuration_name: Option<String>,
    #[serde(rename = "LaunchTemplate", skip_serializing_if = "Option::is_none")]
    launch_template: Option<LaunchTemplateSpecification>,
    #[serde(rename = "MixedInstancesPolicy", skip_serializing_if = "Option::is_none")]
    mixed_instances_policy: Option<MixedInstancesPolicy>,
    #[serde(rename = "MinSize", skip_serializing_if = "Option::is_none")]
    min_size: Option<i32>,
    #[serde(rename = "MaxSize", skip_serializing_if = "Option::is_none")]
    max_size: Option<i32>,
    #[serde(rename = "DesiredCapacity", skip_serializing_if = "Option::is_none")]
    desired_capacity: Option<i32>,
    #[serde(rename = "DefaultCooldown", skip_serializing_if = "Option::is_none")]
    default_cooldown: Option<i32>,
    #[serde(rename = "AvailabilityZones", skip_serializing_if = "Option::is_none")]
    availability_zones: Option<Vec<String>>,
    #[serde(rename = "HealthCheckType", skip_serializing_if = "Option::is_none")]
    health_check_type: Option<String>,
    #[serde(rename = "HealthCheckGracePeriod", skip_serializing_if = "Option::is_none")]
    health_check_grace_period: Option<i32>,
    #[serde(rename = "PlacementGroup", skip_serializing_if = "Option::is_none")]
    placement_group: Option<String>,
    #[serde(rename = "VPCZoneIdentifier", skip_serializing_if = "Option::is_none")]
    vpc_zone_identifier: Option<String>,
    #[serde(rename = "TerminationPolicies", skip_serializing_if = "Option::is_none")]
    termination_policies: Option<Vec<String>>,
    #[serde(rename = "NewInstancesProtectedFromScaleIn", skip_serializing_if = "Option::is_none")]
    new_instances_protected_from_scale_in: Option<bool>,
    #[serde(rename = "ServiceLinkedRoleARN", skip_serializing_if = "Option::is_none")]
    service_linked_role_arn: Option<String>,
}

impl Default for UpdateAutoScalingGroupRequest {
    fn default() -> Self {
        UpdateAutoScalingGroupRequest {
            auto_scaling_group_name: None,
            launch_configuration_name: None,
            launch_template: None,
            mixed_instances_policy: None,
            min_size: None,
            max_size: None,
            desired_capacity: None,
            default_cooldown: None,
            availability_zones: Some(Vec::new()),
            health_check_type: None,
            health_check_grace_period: None,
            placement_group: None,
            vpc_zone_identifier: None,
            termination_policies: Some(Vec::new()),
            new_instances_protected_from_scale_in: None,
            service_linked_role_arn: None,
        }
    }
}

impl UpdateAutoScalingGroupRequest {
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

    pub fn mixed_instances_policy(&self) -> Option<&MixedInstancesPolicy> {
        self.mixed_instances_policy.as_ref()
    }

    pub fn set_mixed_instances_policy(
        &mut self,
        mixed_instances_policy: Option<MixedInstancesPolicy>,
    ) {
        self.mixed_instances_policy = mixed_instances_policy;
    }

    pub fn with_mixed_instances_policy(
        mut self,
        mixed_instances_policy: MixedInstancesPolicy,
    ) -> Self {
        self.mixed_instances_policy = Some(mixed_instances_policy);
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

    pub fn default_cooldown(&self) -> Option<i32> {
        self.default_cooldown
    }

    pub fn set_default_cooldown(&mut self, default_cooldown: Option<i32>) {
        self.default_cooldown = default_cooldown;
    }

    pub fn with_default_cooldown(mut self, default_cooldown: i32) -> Self {
        self.default_cooldown = Some(default_cooldown);
        self
    }

    pub fn availability_zones(&self) -> Option<&[String]> {
        self.availability_zones.as_deref()
    }

    pub fn set_availability_zones(&mut self, availability_zones: Option<Vec<String>>) {
        self.availability_zones = availability_zones;
    }

    pub fn with_availability_zones<I>(mut self, availability_zones: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.availability_zones
            .get_or_insert_with(Vec::new)
            .extend(availability_zones.into_iter().map(Into::into));
        self
    }

    pub fn health_check_type(&self) -> Option<&str> {
        self.health_check_type.as_deref()
    }

    pub fn set_health_check_type(&mut self, health_check_type: Option<String>) {
        self.health_check_type = health_check_type;
    }

    pub fn with_health_check_type(mut self, health_check_type: impl Into<String>) -> Self {
        self.health_check_type = Some(health_check_type.into());
        self
    }

    pub fn health_check_grace_period(&self) -> Option<i32> {
        self.health_check_grace_period
    }

    pub fn set_health_check_grace_period(&mut self, health_check_grace_period: Option<i32>) {
        self.health_check_grace_period = health_check_grace_period;
    }

    pub fn with_health_check_grace_period(mut self, health_check_grace_period: i32) -> Self {
        self.health_check_grace_period = Some(health_check_grace_period);
        self
    }

    pub fn placement_group(&self) -> Option<&str> {
        self.placement_group.as_deref()
    }

    pub fn set_placement_group(&mut self, placement_group: Option<String>) {
        self.placement_group = placement_group;
    }

    pub fn with_placement_group(mut self, placement_group: impl Into<String>) -> Self {
        self.placement_group = Some(placement_group.into());
        self
    }

    pub fn vpc_zone_identifier(&self) -> Option<&str> {
        self.vpc_zone_identifier.as_deref()
    }

    pub fn set_vpc_zone_identifier(&mut self, vpc_zone_identifier: Option<String>) {
        self.vpc_zone_identifier = vpc_zone_identifier;
    }

    pub fn with_vpc_zone_identifier(mut self, vpc_zone_identifier: impl Into<String>) -> Self {
        self.vpc_zone_identifier = Some(vpc_zone_identifier.into());
        self
    }

    pub fn termination_policies(&self) -> Option<&[String]> {
        self.termination_policies.as_deref()
    }

    pub fn set_termination_policies(&mut self, termination_policies: Option<Vec<String>>) {
        self.termination_policies = termination_policies;
    }

    pub fn with_termination_policies<I>(mut self, termination_policies: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.termination_policies
            .get_or_insert_with(Vec::new)
            .extend(termination_policies.into_iter().map(Into::into));
        self
    }

    pub fn new_instances_protected_from_scale_in(&self) -> Option<bool> {
        self.new_instances_protected_from_scale_in
    }

    pub fn set_new_instances_protected_from_scale_in(
        &mut self,
        new_instances_protected_from_scale_in: Option<bool>,
    ) {
        self.new_instances_protected_from_scale_in = new_instances_protected_from_scale_in;
    }

    pub fn with_new_instances_protected_from_scale_in(
        mut self,
        new_instances_protected_from_scale_in: bool,
    ) -> Self {
        self.new_instances_protected_from_scale_in = Some(new_instances_protected_from_scale_in);
        self
    }

    pub fn service_linked_role_arn(&self) -> Option<&str> {
        self.service_linked_role_arn.as_deref()
    }

    pub fn set_service_linked_role_arn(&mut self, service_linked_role_arn: Option<String>) {
        self.service_linked_role_arn = service_linked_role_arn;
    }

    pub fn with_service_linked_role_arn(
        mut self,
        service_linked_role_arn: impl Into<String>,
    ) -> Self {
        self.service_linked_role_arn = Some(service_linked_role_arn.into());
        self
    }
}

impl fmt::Display for UpdateAutoScalingGroupRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ModelFormatter::new(f)
            .field("AutoScalingGroupName", &self.auto_scaling_group_name)
            .field("LaunchConfigurationName", &self.launch_configuration_name)
            .field("LaunchTemplate", &self.launch_template)
            .field("MixedInstancesPolicy", &self.mixed_instances_policy)
            .field("MinSize", &self.min_size)
            .field("MaxSize", &self.max_size)
            .field("DesiredCapacity", &self.desired_capacity)
            .field("DefaultCooldown", &self.default_cooldown)
            .list("AvailabilityZones", &self.availability_zones)
            .field("HealthCheckType", &self.health_check_type)
            .field("HealthCheckGracePeriod", &self.health_check_grace_period)
            .field("PlacementGroup", &self.placement_group)
            .field("VPCZoneIdentifier", &self.vpc_zone_identifier)
            .list("TerminationPolicies", &self.termination_policies)
            .field("NewInstancesProtectedFromScaleIn", &self.new_instances_protected_from_scale_in)
            .field("ServiceLinkedRoleARN", &self.service_linked_role_arn)
            .finish()
    }
}

impl HashCode for UpdateAutoScalingGroupRequest {
    fn hash_code(&self) -> i32 {
        hash_combine(&[
            self.auto_scaling_group_name.hash_code(),
            self.launch_configuration_name.hash_code(),
            self.launch_template.hash_code(),
            self.mixed_instances_policy.hash_code(),
            self.min_size.hash_code(),
            self.max_size.hash_code(),
            self.desired_capacity.hash_code(),
            self.default_cooldown.hash_code(),
            self.availability_zones.hash_code(),
            self.health_check_type.hash_code(),
            self.health_check_grace_period.hash_code(),
            self.placement_group.hash_code(),
            self.vpc_zone_identifier.hash_code(),
            self.termination_policies.hash_code(),
            self.new_instances_protected_from_scale_in.hash_code(),
            self.service_linked_role_arn.hash_code(),
        ])
    }
}

impl ToQuery for UpdateAutoScalingGroupRequest {
    fn write_query(&self, writer: &mut QueryWriter, key: &str) {
        writer.field(key, "AutoScalingGroupName", &self.auto_scaling_group_name);
        writer.field(key, "LaunchConfigurationName", &self.launch_configuration_name);
        writer.field(key, "LaunchTemplate", &self.launch_template);
        writer.field(key, "MixedInstancesPolicy", &self.mixed_instances_policy);
        writer.field(key, "MinSize", &self.min_size);
        writer.field(key, "MaxSize", &self.max_size);
        writer.field(key, "DesiredCapacity", &self.desired_capacity);
        writer.field(key, "DefaultCooldown", &self.default_cooldown);
        writer.list(key, "AvailabilityZones", &self.availability_zones);
        writer.field(key, "HealthCheckType", &self.health_check_type);
        writer.field(key, "HealthCheckGracePeriod", &self.health_check_grace_period);
        writer.field(key, "PlacementGroup", &self.placement_group);
        writer.field(key, "VPCZoneIdentifier", &self.vpc_zone_identifier);
        writer.list(key, "TerminationPolicies", &self.termination_policies);
        writer.field(key, "NewInstancesProtectedFromScaleIn", &self.new_instances_protected_from_scale_in);
        writer.field(key, "ServiceLinkedRoleARN", &self.service_linked_role_arn);
    }
}
