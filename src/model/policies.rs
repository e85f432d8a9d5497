//! Scaling policies: simple, step and target tracking.

use super::{hash_combine, Double, HashCode, MetricStatistic, MetricType, ModelFormatter};
use crate::error::Result;
use crate::query::{QueryWriter, ToQuery};
use crate::xml::{self, FromXml};
use roxmltree::Node;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ScalingPolicy {
    #[serde(rename = "AutoScalingGroupName", skip_serializing_if = "Option::is_none")]
    auto_scaling_group_name: Option<String>,
    #[serde(rename = "PolicyName", skip_serializing_if = "Option::is_none")]
    policy_name: Option<String>,
    #[serde(rename = "PolicyARN", skip_serializing_if = "Option::is_none")]
    policy_arn: Option<String>,
    #[serde(rename = "PolicyType", skip_serializing_if = "Option::is_none")]
    policy_type: Option<String>,
    #[serde(rename = "AdjustmentType", skip_serializing_if = "Option::is_none")]
    adjustment_type: Option<String>,
    #[serde(rename = "MinAdjustmentStep", skip_serializing_if = "Option::is_none")]
    min_adjustment_step: Option<i32>,
    #[serde(rename = "MinAdjustmentMagnitude", skip_serializing_if = "Option::is_none")]
    min_adjustment_magnitude: Option<i32>,
    #[serde(rename = "ScalingAdjustment", skip_serializing_if = "Option::is_none")]
    scaling_adjustment: Option<i32>,
    #[serde(rename = "Cooldown", skip_serializing_if = "Option::is_none")]
    cooldown: Option<i32>,
    #[serde(rename = "StepAdjustments", skip_serializing_if = "Option::is_none")]
    step_adjustments: Option<Vec<StepAdjustment>>,
    #[serde(rename = "MetricAggregationType", skip_serializing_if = "Option::is_none")]
    metric_aggregation_type: Option<String>,
    #[serde(rename = "EstimatedInstanceWarmup", skip_serializing_if = "Option::is_none")]
    estimated_instance_warmup: Option<i32>,
    #[serde(rename = "Alarms", skip_serializing_if = "Option::is_none")]
    alarms: Option<Vec<Alarm>>,
    #[serde(rename = "TargetTrackingConfiguration", skip_serializing_if = "Option::is_none")]
    target_tracking_configuration: Option<TargetTrackingConfiguration>,
}

impl Default for ScalingPolicy {
    fn default() -> Self {
        ScalingPolicy {
            auto_scaling_group_name: None,
            policy_name: None,
            policy_arn: None,
            policy_type: None,
            adjustment_type: None,
            min_adjustment_step: None,
            min_adjustment_magnitude: None,
            scaling_adjustment: None,
            cooldown: None,
            step_adjustments: Some(Vec::new()),
            metric_aggregation_type: None,
            estimated_instance_warmup: None,
            alarms: Some(Vec::new()),
            target_tracking_configuration: None,
        }
    }
}

impl ScalingPolicy {
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

    pub fn policy_name(&self) -> Option<&str> {
        self.policy_name.as_deref()
    }

    pub fn set_policy_name(&mut self, policy_name: Option<String>) {
        self.policy_name = policy_name;
    }

    pub fn with_policy_name(mut self, policy_name: impl Into<String>) -> Self {
        self.policy_name = Some(policy_name.into());
        self
    }

    pub fn policy_arn(&self) -> Option<&str> {
        self.policy_arn.as_deref()
    }

    pub fn set_policy_arn(&mut self, policy_arn: Option<String>) {
        self.policy_arn = policy_arn;
    }

    pub fn with_policy_arn(mut self, policy_arn: impl Into<String>) -> Self {
        self.policy_arn = Some(policy_arn.into());
        self
    }

    /// `SimpleScaling`, `StepScaling` or `TargetTrackingScaling`.
    pub fn policy_type(&self) -> Option<&str> {
        self.policy_type.as_deref()
    }

    pub fn set_policy_type(&mut self, policy_type: Option<String>) {
        self.policy_type = policy_type;
    }

    pub fn with_policy_type(mut self, policy_type: impl Into<String>) -> Self {
        self.policy_type = Some(policy_type.into());
        self
    }

    pub fn adjustment_type(&self) -> Option<&str> {
        self.adjustment_type.as_deref()
    }

    pub fn set_adjustment_type(&mut self, adjustment_type: Option<String>) {
        self.adjustment_type = adjustment_type;
    }

    pub fn with_adjustment_type(mut self, adjustment_type: impl Into<String>) -> Self {
        self.adjustment_type = Some(adjustment_type.into());
        self
    }

    /// Superseded by `MinAdjustmentMagnitude`.
    pub fn min_adjustment_step(&self) -> Option<i32> {
        self.min_adjustment_step
    }

    pub fn set_min_adjustment_step(&mut self, min_adjustment_step: Option<i32>) {
        self.min_adjustment_step = min_adjustment_step;
    }

    pub fn with_min_adjustment_step(mut self, min_adjustment_step: i32) -> Self {
        self.min_adjustment_step = Some(min_adjustment_step);
        self
    }

    pub fn min_adjustment_magnitude(&self) -> Option<i32> {
        self.min_adjustment_magnitude
    }

    pub fn set_min_adjustment_magnitude(&mut self, min_adjustment_magnitude: Option<i32>) {
        self.min_adjustment_magnitude = min_adjustment_magnitude;
    }

    pub fn with_min_adjustment_magnitude(mut self, min_adjustment_magnitude: i32) -> Self {
        self.min_adjustment_magnitude = Some(min_adjustment_magnitude);
        self
    }

    pub fn scaling_adjustment(&self) -> Option<i32> {
        self.scaling_adjustment
    }

    pub fn set_scaling_adjustment(&mut self, scaling_adjustment: Option<i32>) {
        self.scaling_adjustment = scaling_adjustment;
    }

    pub fn with_scaling_adjustment(mut self, scaling_adjustment: i32) -> Self {
        self.scaling_adjustment = Some(scaling_adjustment);
        self
    }

    pub fn cooldown(&self) -> Option<i32> {
        self.cooldown
    }

    pub fn set_cooldown(&mut self, cooldown: Option<i32>) {
        self.cooldown = cooldown;
    }

    pub fn with_cooldown(mut self, cooldown: i32) -> Self {
        self.cooldown = Some(cooldown);
        self
    }

    pub fn step_adjustments(&self) -> Option<&[StepAdjustment]> {
        self.step_adjustments.as_deref()
    }

    pub fn set_step_adjustments(&mut self, step_adjustments: Option<Vec<StepAdjustment>>) {
        self.step_adjustments = step_adjustments;
    }

    pub fn with_step_adjustments<I>(mut self, step_adjustments: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<StepAdjustment>,
    {
        self.step_adjustments
            .get_or_insert_with(Vec::new)
            .extend(step_adjustments.into_iter().map(Into::into));
        self
    }

    pub fn metric_aggregation_type(&self) -> Option<&str> {
        self.metric_aggregation_type.as_deref()
    }

    pub fn set_metric_aggregation_type(&mut self, metric_aggregation_type: Option<String>) {
        self.metric_aggregation_type = metric_aggregation_type;
    }

    pub fn with_metric_aggregation_type(
        mut self,
        metric_aggregation_type: impl Into<String>,
    ) -> Self {
        self.metric_aggregation_type = Some(metric_aggregation_type.into());
        self
    }

    pub fn estimated_instance_warmup(&self) -> Option<i32> {
        self.estimated_instance_warmup
    }

    pub fn set_estimated_instance_warmup(&mut self, estimated_instance_warmup: Option<i32>) {
        self.estimated_instance_warmup = estimated_instance_warmup;
    }

    pub fn with_estimated_instance_warmup(mut self, estimated_instance_warmup: i32) -> Self {
        self.estimated_instance_warmup = Some(estimated_instance_warmup);
        self
    }

    pub fn alarms(&self) -> Option<&[Alarm]> {
        self.alarms.as_deref()
    }

    pub fn set_alarms(&mut self, alarms: Option<Vec<Alarm>>) {
        self.alarms = alarms;
    }

    pub fn with_alarms<I>(mut self, alarms: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Alarm>,
    {
        self.alarms.get_or_insert_with(Vec::new).extend(alarms.into_iter().map(Into::into));
        self
    }

    pub fn target_tracking_configuration(&self) -> Option<&TargetTrackingConfiguration> {
        self.target_tracking_configuration.as_ref()
    }

    pub fn set_target_tracking_configuration(
        &mut self,
        target_tracking_configuration: Option<TargetTrackingConfiguration>,
    ) {
        self.target_tracking_configuration = target_tracking_configuration;
    }

    pub fn with_target_tracking_configuration(
        mut self,
        target_tracking_configuration: TargetTrackingConfiguration,
    ) -> Self {
        self.target_tracking_configuration = Some(target_tracking_configuration);
        self
    }
}

impl fmt::Display for ScalingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ModelFormatter::new(f)
            .field("AutoScalingGroupName", &self.auto_scaling_group_name)
            .field("PolicyName", &self.policy_name)
            .field("PolicyARN", &self.policy_arn)
            .field("PolicyType", &self.policy_type)
            .field("AdjustmentType", &self.adjustment_type)
            .field("MinAdjustmentStep", &self.min_adjustment_step)
            .field("MinAdjustmentMagnitude", &self.min_adjustment_magnitude)
            .field("ScalingAdjustment", &self.scaling_adjustment)
            .field("Cooldown", &self.cooldown)
            .list("StepAdjustments", &self.step_adjustments)
            .field("MetricAggregationType", &self.metric_aggregation_type)
            .field("EstimatedInstanceWarmup", &self.estimated_instance_warmup)
            .list("Alarms", &self.alarms)
            .field("TargetTrackingConfiguration", &self.target_tracking_configuration)
            .finish()
    }
}

impl HashCode for ScalingPolicy {
    fn hash_code(&self) -> i32 {
        hash_combine(&[
            self.auto_scaling_group_name.hash_code(),
            self.policy_name.hash_code(),
            self.policy_arn.hash_code(),
            self.policy_type.hash_code(),
            self.adjustment_type.hash_code(),
            self.min_adjustment_step.hash_code(),
            self.min_adjustment_magnitude.hash_code(),
            self.scaling_adjustment.hash_code(),
            self.cooldown.hash_code(),
            self.step_adjustments.hash_code(),
            self.metric_aggregation_type.hash_code(),
            self.estimated_instance_warmup.hash_code(),
            self.alarms.hash_code(),
            self.target_tracking_configuration.hash_code(),
        ])
    }
}

impl ToQuery for ScalingPolicy {
    fn write_query(&self, writer: &mut QueryWriter, key: &str) {
        writer.field(key, "AutoScalingGroupName", &self.auto_scaling_group_name);
        writer.field(key, "PolicyName", &self.policy_name);
        writer.field(key, "PolicyARN", &self.policy_arn);
        writer.field(key, "PolicyType", &self.policy_type);
        writer.field(key, "AdjustmentType", &self.adjustment_type);
        writer.field(key, "MinAdjustmentStep", &self.min_adjustment_step);
        writer.field(key, "MinAdjustmentMagnitude", &self.min_adjustment_magnitude);
        writer.field(key, "ScalingAdjustment", &self.scaling_adjustment);
        writer.field(key, "Cooldown", &self.cooldown);
        writer.list(key, "StepAdjustments", &self.step_adjustments);
        writer.field(key, "MetricAggregationType", &self.metric_aggregation_type);
        writer.field(key, "EstimatedInstanceWarmup", &self.estimated_instance_warmup);
        writer.list(key, "Alarms", &self.alarms);
        writer.field(key, "TargetTrackingConfiguration", &self.target_tracking_configuration);
    }
}

impl FromXml for ScalingPolicy {
    fn from_xml(node: Node) -> Result<Self> {
        let mut out = ScalingPolicy::default();
        for child in node.children().filter(Node::is_element) {
            match child.tag_name().name() {
                "AutoScalingGroupName" => {
                    out.auto_scaling_group_name = Some(FromXml::from_xml(child)?);
                }
                "PolicyName" => out.policy_name = Some(FromXml::from_xml(child)?),
                "PolicyARN" => out.policy_arn = Some(FromXml::from_xml(child)?),
                "PolicyType" => out.policy_type = Some(FromXml::from_xml(child)?),
                "AdjustmentType" => out.adjustment_type = Some(FromXml::from_xml(child)?),
                "MinAdjustmentStep" => out.min_adjustment_step = Some(FromXml::from_xml(child)?),
                "MinAdjustmentMagnitude" => {
                    out.min_adjustment_magnitude = Some(FromXml::from_xml(child)?);
                }
                "ScalingAdjustment" => out.scaling_adjustment = Some(FromXml::from_xml(child)?),
                "Cooldown" => out.cooldown = Some(FromXml::from_xml(child)?),
                "StepAdjustments" => out.step_adjustments = Some(xml::list(child)?),
                "MetricAggregationType" => {
                    out.metric_aggregation_type = Some(FromXml::from_xml(child)?);
                }
                "EstimatedInstanceWarmup" => {
                    out.estimated_instance_warmup = Some(FromXml::from_xml(child)?);
                }
                "Alarms" => out.alarms = Some(xml::list(child)?),
                "TargetTrackingConfiguration" => {
                    out.target_tracking_configuration = Some(FromXml::from_xml(child)?);
                }
                _ => {}
            }
        }
        Ok(out)
    }
}

/// One step of a step scaling policy.
///
/// Bounds are relative to the alarm threshold. Ranges of one policy must not
/// overlap or leave gaps; only one step may have an open lower bound and only
/// one an open upper bound.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct StepAdjustment {
    #[serde(rename = "MetricIntervalLowerBound", skip_serializing_if = "Option::is_none")]
    metric_interval_lower_bound: Option<Double>,
    #[serde(rename = "MetricIntervalUpperBound", skip_serializing_if = "Option::is_none")]
    metric_interval_upper_bound: Option<Double>,
    #[serde(rename = "ScalingAdjustment", skip_serializing_if = "Option::is_none")]
    scaling_adjustment: Option<i32>,
}

impl StepAdjustment {
    pub fn metric_interval_lower_bound(&self) -> Option<f64> {
        self.metric_interval_lower_bound.map(f64::from)
    }

    pub fn set_metric_interval_lower_bound(&mut self, metric_interval_lower_bound: Option<f64>) {
        self.metric_interval_lower_bound = metric_interval_lower_bound.map(Double::from);
    }

    pub fn with_metric_interval_lower_bound(mut self, metric_interval_lower_bound: f64) -> Self {
        self.metric_interval_lower_bound = Some(Double::from(metric_interval_lower_bound));
        self
    }

    pub fn metric_interval_upper_bound(&self) -> Option<f64> {
        self.metric_interval_upper_bound.map(f64::from)
    }

    pub fn set_metric_interval_upper_bound(&mut self, metric_interval_upper_bound: Option<f64>) {
        self.metric_interval_upper_bound = metric_interval_upper_bound.map(Double::from);
    }

    pub fn with_metric_interval_upper_bound(mut self, metric_interval_upper_bound: f64) -> Self {
        self.metric_interval_upper_bound = Some(Double::from(metric_interval_upper_bound));
        self
    }

    pub fn scaling_adjustment(&self) -> Option<i32> {
        self.scaling_adjustment
    }

    pub fn set_scaling_adjustment(&mut self, scaling_adjustment: Option<i32>) {
        self.scaling_adjustment = scaling_adjustment;
    }

    pub fn with_scaling_adjustment(mut self, scaling_adjustment: i32) -> Self {
        self.scaling_adjustment = Some(scaling_adjustment);
        self
    }
}

impl fmt::Display for StepAdjustment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ModelFormatter::new(f)
            .field("MetricIntervalLowerBound", &self.metric_interval_lower_bound)
            .field("MetricIntervalUpperBound", &self.metric_interval_upper_bound)
            .field("ScalingAdjustment", &self.scaling_adjustment)
            .finish()
    }
}

impl HashCode for StepAdjustment {
    fn hash_code(&self) -> i32 {
        hash_combine(&[
            self.metric_interval_lower_bound.hash_code(),
            self.metric_interval_upper_bound.hash_code(),
            self.scaling_adjustment.hash_code(),
        ])
    }
}

impl ToQuery for StepAdjustment {
    fn write_query(&self, writer: &mut QueryWriter, key: &str) {
        writer.field(key, "MetricIntervalLowerBound", &self.metric_interval_lower_bound);
        writer.field(key, "MetricIntervalUpperBound", &self.metric_interval_upper_bound);
        writer.field(key, "ScalingAdjustment", &self.scaling_adjustment);
    }
}

impl FromXml for StepAdjustment {
    fn from_xml(node: Node) -> Result<Self> {
        let mut out = StepAdjustment::default();
        for child in node.children().filter(Node::is_element) {
            match child.tag_name().name() {
                "MetricIntervalLowerBound" => {
                    out.metric_interval_lower_bound = Some(FromXml::from_xml(child)?);
                }
                "MetricIntervalUpperBound" => {
                    out.metric_interval_upper_bound = Some(FromXml::from_xml(child)?);
                }
                "ScalingAdjustment" => out.scaling_adjustment = Some(FromXml::from_xml(child)?),
                _ => {}
            }
        }
        Ok(out)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Alarm {
    #[serde(rename = "AlarmName", skip_serializing_if = "Option::is_none")]
    alarm_name: Option<String>,
    #[serde(rename = "AlarmARN", skip_serializing_if = "Option::is_none")]
    alarm_arn: Option<String>,
}

impl Alarm {
    pub fn alarm_name(&self) -> Option<&str> {
        self.alarm_name.as_deref()
    }

    pub fn set_alarm_name(&mut self, alarm_name: Option<String>) {
        self.alarm_name = alarm_name;
    }

    pub fn with_alarm_name(mut self, alarm_name: impl Into<String>) -> Self {
        self.alarm_name = Some(alarm_name.into());
        self
    }

    pub fn alarm_arn(&self) -> Option<&str> {
        self.alarm_arn.as_deref()
    }

    pub fn set_alarm_arn(&mut self, alarm_arn: Option<String>) {
        self.alarm_arn = alarm_arn;
    }

    pub fn with_alarm_arn(mut self, alarm_arn: impl Into<String>) -> Self {
        self.alarm_arn = Some(alarm_arn.into());
        self
    }
}

impl fmt::Display for Alarm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ModelFormatter::new(f)
            .field("AlarmName", &self.alarm_name)
            .field("AlarmARN", &self.alarm_arn)
            .finish()
    }
}

impl HashCode for Alarm {
    fn hash_code(&self) -> i32 {
        hash_combine(&[
            self.alarm_name.hash_code(),
            self.alarm_arn.hash_code(),
        ])
    }
}

impl ToQuery for Alarm {
    fn write_query(&self, writer: &mut QueryWriter, key: &str) {
        writer.field(key, "AlarmName", &self.alarm_name);
        writer.field(key, "AlarmARN", &self.alarm_arn);
    }
}

impl FromXml for Alarm {
    fn from_xml(node: Node) -> Result<Self> {
        let mut out = Alarm::default();
        for child in node.children().filter(Node::is_element) {
            match child.tag_name().name() {
                "AlarmName" => out.alarm_name = Some(FromXml::from_xml(child)?),
                "AlarmARN" => out.alarm_arn = Some(FromXml::from_xml(child)?),
                _ => {}
            }
        }
        Ok(out)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct AdjustmentType {
    #[serde(rename = "AdjustmentType", skip_serializing_if = "Option::is_none")]
    adjustment_type: Option<String>,
}

impl AdjustmentType {
    /// `ChangeInCapacity`, `ExactCapacity` or `PercentChangeInCapacity`.
    pub fn adjustment_type(&self) -> Option<&str> {
        self.adjustment_type.as_deref()
    }

    pub fn set_adjustment_type(&mut self, adjustment_type: Option<String>) {
        self.adjustment_type = adjustment_type;
    }

    pub fn with_adjustment_type(mut self, adjustment_type: impl Into<String>) -> Self {
        self.adjustment_type = Some(adjustment_type.into());
        self
    }
}

impl fmt::Display for AdjustmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ModelFormatter::new(f)
            .field("AdjustmentType", &self.adjustment_type)
            .finish()
    }
}

impl HashCode for AdjustmentType {
    fn hash_code(&self) -> i32 {
        hash_combine(&[
            self.adjustment_type.hash_code(),
        ])
    }
}

impl ToQuery for AdjustmentType {
    fn write_query(&self, writer: &mut QueryWriter, key: &str) {
        writer.field(key, "AdjustmentType", &self.adjustment_type);
    }
}

impl FromXml for AdjustmentType {
    fn from_xml(node: Node) -> Result<Self> {
        let mut out = AdjustmentType::default();
        for child in node.children().filter(Node::is_element) {
            match child.tag_name().name() {
                "AdjustmentType" => out.adjustment_type = Some(FromXml::from_xml(child)?),
                _ => {}
            }
        }
        Ok(out)
    }
}

/// Keeps a metric close to a target value.
///
/// Set either a predefined or a customized metric.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetTrackingConfiguration {
    #[serde(rename = "PredefinedMetricSpecification", skip_serializing_if = "Option::is_none")]
    predefined_metric_specification: Option<PredefinedMetricSpecification>,
    #[serde(rename = "CustomizedMetricSpecification", skip_serializing_if = "Option::is_none")]
    customized_metric_specification: Option<CustomizedMetricSpecification>,
    #[serde(rename = "TargetValue", skip_serializing_if = "Option::is_none")]
    target_value: Option<Double>,
    #[serde(rename = "DisableScaleIn", skip_serializing_if = "Option::is_none")]
    disable_scale_in: Option<bool>,
}

impl TargetTrackingConfiguration {
    pub fn predefined_metric_specification(&self) -> Option<&PredefinedMetricSpecification> {
        self.predefined_metric_specification.as_ref()
    }

    pub fn set_predefined_metric_specification(
        &mut self,
        predefined_metric_specification: Option<PredefinedMetricSpecification>,
    ) {
        self.predefined_metric_specification = predefined_metric_specification;
    }

    pub fn with_predefined_metric_specification(
        mut self,
        predefined_metric_specification: PredefinedMetricSpecification,
    ) -> Self {
        self.predefined_metric_specification = Some(predefined_metric_specification);
        self
    }

    pub fn customized_metric_specification(&self) -> Option<&CustomizedMetricSpecification> {
        self.customized_metric_specification.as_ref()
    }

    pub fn set_customized_metric_specification(
        &mut self,
        customized_metric_specification: Option<CustomizedMetricSpecification>,
    ) {
        self.customized_metric_specification = customized_metric_specification;
    }

    pub fn with_customized_metric_specification(
        mut self,
        customized_metric_specification: CustomizedMetricSpecification,
    ) -> Self {
        self.customized_metric_specification = Some(customized_metric_specification);
        self
    }

    pub fn target_value(&self) -> Option<f64> {
        self.target_value.map(f64::from)
    }

    pub fn set_target_value(&mut self, target_value: Option<f64>) {
        self.target_value = target_value.map(Double::from);
    }

    pub fn with_target_value(mut self, target_value: f64) -> Self {
        self.target_value = Some(Double::from(target_value));
        self
    }

    pub fn disable_scale_in(&self) -> Option<bool> {
        self.disable_scale_in
    }

    pub fn set_disable_scale_in(&mut self, disable_scale_in: Option<bool>) {
        self.disable_scale_in = disable_scale_in;
    }

    pub fn with_disable_scale_in(mut self, disable_scale_in: bool) -> Self {
        self.disable_scale_in = Some(disable_scale_in);
        self
    }
}

impl fmt::Display for TargetTrackingConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ModelFormatter::new(f)
            .field("PredefinedMetricSpecification", &self.predefined_metric_specification)
            .field("CustomizedMetricSpecification", &self.customized_metric_specification)
            .field("TargetValue", &self.target_value)
            .field("DisableScaleIn", &self.disable_scale_in)
            .finish()
    }
}

impl HashCode for TargetTrackingConfiguration {
    fn hash_code(&self) -> i32 {
        hash_combine(&[
            self.predefined_metric_specification.hash_code(),
            self.customized_metric_specification.hash_code(),
            self.target_value.hash_code(),
            self.disable_scale_in.hash_code(),
        ])
    }
}

impl ToQuery for TargetTrackingConfiguration {
    fn write_query(&self, writer: &mut QueryWriter, key: &str) {
        writer.field(key, "PredefinedMetricSpecification", &self.predefined_metric_specification);
        writer.field(key, "CustomizedMetricSpecification", &self.customized_metric_specification);
        writer.field(key, "TargetValue", &self.target_value);
        writer.field(key, "DisableScaleIn", &self.disable_scale_in);
    }
}

impl FromXml for TargetTrackingConfiguration {
    fn from_xml(node: Node) -> Result<Self> {
        let mut out = TargetTrackingConfiguration::default();
        for child in node.children().filter(Node::is_element) {
            match child.tag_name().name() {
                "PredefinedMetricSpecification" => {
                    out.predefined_metric_specification = Some(FromXml::from_xml(child)?);
                }
                "CustomizedMetricSpecification" => {
                    out.customized_metric_specification = Some(FromXml::from_xml(child)?);
                }
                "TargetValue" => out.target_value = Some(FromXml::from_xml(child)?),
                "DisableScaleIn" => out.disable_scale_in = Some(FromXml::from_xml(child)?),
                _ => {}
            }
        }
        Ok(out)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct PredefinedMetricSpecification {
    #[serde(rename = "PredefinedMetricType", skip_serializing_if = "Option::is_none")]
    predefined_metric_type: Option<MetricType>,
    #[serde(rename = "ResourceLabel", skip_serializing_if = "Option::is_none")]
    resource_label: Option<String>,
}

impl PredefinedMetricSpecification {
    pub fn predefined_metric_type(&self) -> Option<&MetricType> {
        self.predefined_metric_type.as_ref()
    }

    pub fn set_predefined_metric_type(&mut self, predefined_metric_type: Option<MetricType>) {
        self.predefined_metric_type = predefined_metric_type;
    }

    pub fn with_predefined_metric_type(
        mut self,
        predefined_metric_type: impl Into<MetricType>,
    ) -> Self {
        self.predefined_metric_type = Some(predefined_metric_type.into());
        self
    }

    /// Required for `ALBRequestCountPerTarget`.
    pub fn resource_label(&self) -> Option<&str> {
        self.resource_label.as_deref()
    }

    pub fn set_resource_label(&mut self, resource_label: Option<String>) {
        self.resource_label = resource_label;
    }

    pub fn with_resource_label(mut self, resource_label: impl Into<String>) -> Self {
        self.resource_label = Some(resource_label.into());
        self
    }
}

impl fmt::Display for PredefinedMetricSpecification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ModelFormatter::new(f)
            .field("PredefinedMetricType", &self.predefined_metric_type)
            .field("ResourceLabel", &self.resource_label)
            .finish()
    }
}

impl HashCode for PredefinedMetricSpecification {
    fn hash_code(&self) -> i32 {
        hash_combine(&[
            self.predefined_metric_type.hash_code(),
            self.resource_label.hash_code(),
        ])
    }
}

impl ToQuery for PredefinedMetricSpecification {
    fn write_query(&self, writer: &mut QueryWriter, key: &str) {
        writer.field(key, "PredefinedMetricType", &self.predefined_metric_type);
        writer.field(key, "ResourceLabel", &self.resource_label);
    }
}

impl FromXml for PredefinedMetricSpecification {
    fn from_xml(node: Node) -> Result<Self> {
        let mut out = PredefinedMetricSpecification::default();
        for child in node.children().filter(Node::is_element) {
            match child.tag_name().name() {
                "PredefinedMetricType" => {
                    out.predefined_metric_type = Some(FromXml::from_xml(child)?);
                }
                "ResourceLabel" => out.resource_label = Some(FromXml::from_xml(child)?),
                _ => {}
            }
        }
        Ok(out)
    }
}

/// A CloudWatch metric used by a target tracking policy.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomizedMetricSpecification {
    #[serde(rename = "MetricName", skip_serializing_if = "Option::is_none")]
    metric_name: Option<String>,
    #[serde(rename = "Namespace", skip_serializing_if = "Option::is_none")]
    namespace: Option<String>,
    #[serde(rename = "Dimensions", skip_serializing_if = "Option::is_none")]
    dimensions: Option<Vec<MetricDimension>>,
    #[serde(rename = "Statistic", skip_serializing_if = "Option::is_none")]
    statistic: Option<MetricStatistic>,
    #[serde(rename = "Unit", skip_serializing_if = "Option::is_none")]
    unit: Option<String>,
}

impl Default for CustomizedMetricSpecification {
    fn default() -> Self {
        CustomizedMetricSpecification {
            metric_name: None,
            namespace: None,
            dimensions: Some(Vec::new()),
            statistic: None,
            unit: None,
        }
    }
}

impl CustomizedMetricSpecification {
    pub fn metric_name(&self) -> Option<&str> {
        self.metric_name.as_deref()
    }

    pub fn set_metric_name(&mut self, metric_name: Option<String>) {
        self.metric_name = metric_name;
    }

    pub fn with_metric_name(mut self, metric_name: impl Into<String>) -> Self {
        self.metric_name = Some(metric_name.into());
        self
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    pub fn set_namespace(&mut self, namespace: Option<String>) {
        self.namespace = namespace;
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    pub fn dimensions(&self) -> Option<&[MetricDimension]> {
        self.dimensions.as_deref()
    }

    pub fn set_dimensions(&mut self, dimensions: Option<Vec<MetricDimension>>) {
        self.dimensions = dimensions;
    }

    pub fn with_dimensions<I>(mut self, dimensions: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<MetricDimension>,
    {
        self.dimensions.get_or_insert_with(Vec::new).extend(dimensions.into_iter().map(Into::into));
        self
    }

    pub fn statistic(&self) -> Option<&MetricStatistic> {
        self.statistic.as_ref()
    }

    pub fn set_statistic(&mut self, statistic: Option<MetricStatistic>) {
        self.statistic = statistic;
    }

    pub fn with_statistic(mut self, statistic: impl Into<MetricStatistic>) -> Self {
        self.statistic = Some(statistic.into());
        self
    }

    pub fn unit(&self) -> Option<&str> {
        self.unit.as_deref()
    }

    pub fn set_unit(&mut self, unit: Option<String>) {
        self.unit = unit;
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }
}

impl fmt::Display for CustomizedMetricSpecification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ModelFormatter::new(f)
            .field("MetricName", &self.metric_name)
            .field("Namespace", &self.namespace)
            .list("Dimensions", &self.dimensions)
            .field("Statistic", &self.statistic)
            .field("Unit", &self.unit)
            .finish()
    }
}

impl HashCode for CustomizedMetricSpecification {
    fn hash_code(&self) -> i32 {
        hash_combine(&[
            self.metric_name.hash_code(),
            self.namespace.hash_code(),
            self.dimensions.hash_code(),
            self.statistic.hash_code(),
            self.unit.hash_code(),
        ])
    }
}

impl ToQuery for CustomizedMetricSpecification {
    fn write_query(&self, writer: &mut QueryWriter, key: &str) {
        writer.field(key, "MetricName", &self.metric_name);
        writer.field(key, "Namespace", &self.namespace);
        writer.list(key, "Dimensions", &self.dimensions);
        writer.field(key, "Statistic", &self.statistic);
        writer.field(key, "Unit", &self.unit);
    }
}

impl FromXml for CustomizedMetricSpecification {
    fn from_xml(node: Node) -> Result<Self> {
        let mut out = CustomizedMetricSpecification::default();
        for child in node.children().filter(Node::is_element) {
            match child.tag_name().name() {
                "MetricName" => out.metric_name = Some(FromXml::from_xml(child)?),
                "Namespace" => out.namespace = Some(FromXml::from_xml(child)?),
                "Dimensions" => out.dimensions = Some(xml::list(child)?),
                "Statistic" => out.statistic = Some(FromXml::from_xml(child)?),
                "Unit" => out.unit = Some(FromXml::from_xml(child)?),
                _ => {}
            }
        }
        Ok(out)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricDimension {
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(rename = "Value", skip_serializing_if = "Option::is_none")]
    value: Option<String>,
}

impl MetricDimension {
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, name: Option<String>) {
        self.name = name;
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn set_value(&mut self, value: Option<String>) {
        self.value = value;
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

impl fmt::Display for MetricDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ModelFormatter::new(f)
            .field("Name", &self.name)
            .field("Value", &self.value)
            .finish()
    }
}

impl HashCode for MetricDimension {
    fn hash_code(&self) -> i32 {
        hash_combine(&[
            self.name.hash_code(),
            self.value.hash_code(),
        ])
    }
}

impl ToQuery for MetricDimension {
    fn write_query(&self, writer: &mut QueryWriter, key: &str) {
        writer.field(key, "Name", &self.name);
        writer.field(key, "Value", &self.value);
    }
}

impl FromXml for MetricDimension {
    fn from_xml(node: Node) -> Result<Self> {
        let mut out = MetricDimension::default();
        for child in node.children().filter(Node::is_element) {
            match child.tag_name().name() {
                "Name" => out.name = Some(FromXml::from_xml(child)?),
                "Value" => out.value = Some(FromXml::from_xml(child)?),
                _ => {}
            }
        }
        Ok(out)
    }
}

/// Input of `DeletePolicy`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct DeletePolicyRequest {
    #[serde(rename = "AutoScalingGroupName", skip_serializing_if = "Option::is_none")]
    auto_scaling_group_name: Option<String>,
    #[serde(rename = "PolicyName", skip_serializing_if = "Option::is_none")]
    policy_name: Option<String>,
}

impl DeletePolicyRequest {
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

    /// The name or ARN.
    pub fn policy_name(&self) -> Option<&str> {
        self.policy_name.as_deref()
    }

    pub fn set_policy_name(&mut self, policy_name: Option<String>) {
        self.policy_name = policy_name;
    }

    pub fn with_policy_name(mut self, policy_name: impl Into<String>) -> Self {
        self.policy_name = Some(policy_name.into());
        self
    }
}

impl fmt::Display for DeletePolicyRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ModelFormatter::new(f)
            .field("AutoScalingGroupName", &self.auto_scaling_group_name)
            .field("PolicyName", &self.policy_name)
            .finish()
    }
}

impl HashCode for DeletePolicyRequest {
    fn hash_code(&self) -> i32 {
        hash_combine(&[
            self.auto_scaling_group_name.hash_code(),
            self.policy_name.hash_code(),
        ])
    }
}

impl ToQuery for DeletePolicyRequest {
    fn write_query(&self, writer: &mut QueryWriter, key: &str) {
        writer.field(key, "AutoScalingGroupName", &self.auto_scaling_group_name);
        writer.field(key, "PolicyName", &self.policy_name);
    }
}

/// Input of `DescribeAdjustmentTypes`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct DescribeAdjustmentTypesRequest {}

impl fmt::Display for DescribeAdjustmentTypesRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ModelFormatter::new(f).finish()
    }
}

impl HashCode for DescribeAdjustmentTypesRequest {
    fn hash_code(&self) -> i32 {
        hash_combine(&[])
    }
}

impl ToQuery for DescribeAdjustmentTypesRequest {
    fn write_query(&self, _writer: &mut QueryWriter, _key: &str) {}
}

/// Output of `DescribeAdjustmentTypes`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct DescribeAdjustmentTypesResult {
    #[serde(rename = "AdjustmentTypes", skip_serializing_if = "Option::is_none")]
    adjustment_types: Option<Vec<AdjustmentType>>,
}

impl Default for DescribeAdjustmentTypesResult {
    fn default() -> Self {
        DescribeAdjustmentTypesResult {
            adjustment_types: Some(Vec::new()),
        }
    }
}

impl DescribeAdjustmentTypesResult {
    pub fn adjustment_types(&self) -> Option<&[AdjustmentType]> {
        self.adjustment_types.as_deref()
    }

    pub fn set_adjustment_types(&mut self, adjustment_types: Option<Vec<AdjustmentType>>) {
        self.adjustment_types = adjustment_types;
    }

    pub fn with_adjustment_types<I>(mut self, adjustment_types: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<AdjustmentType>,
    {
        self.adjustment_types
            .get_or_insert_with(Vec::new)
            .extend(adjustment_types.into_iter().map(Into::into));
        self
    }
}

impl fmt::Display for DescribeAdjustmentTypesResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ModelFormatter::new(f)
            .list("AdjustmentTypes", &self.adjustment_types)
            .finish()
    }
}

impl HashCode for DescribeAdjustmentTypesResult {
    fn hash_code(&self) -> i32 {
        hash_combine(&[
            self.adjustment_types.hash_code(),
        ])
    }
}

impl FromXml for DescribeAdjustmentTypesResult {
    fn from_xml(node: Node) -> Result<Self> {
        let mut out = DescribeAdjustmentTypesResult::default();
        for child in node.children().filter(Node::is_element) {
            match child.tag_name().name() {
                "AdjustmentTypes" => out.adjustment_types = Some(xml::list(child)?),
                _ => {}
            }
        }
        Ok(out)
    }
}

/// Input of `DescribePolicies`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct DescribePoliciesRequest {
    #[serde(rename = "AutoScalingGroupName", skip_serializing_if = "Option::is_none")]
    auto_scaling_group_name: Option<String>,
    #[serde(rename = "PolicyNames", skip_serializing_if = "Option::is_none")]
    policy_names: Option<Vec<String>>,
    #[serde(rename = "PolicyTypes", skip_serializing_if = "Option::is_none")]
    policy_types: Option<Vec<String>>,
    #[serde(rename = "NextToken", skip_serializing_if = "Option::is_none")]
    next_token: Option<String>,
    #[serde(rename = "MaxRecords", skip_serializing_if = "Option::is_none")]
    max_records: Option<i32>,
}

impl Default for DescribePoliciesRequest {
    fn default() -> Self {
        DescribePoliciesRequest {
            auto_scaling_group_name: None,
            policy_names: Some(Vec::new()),
            policy_types: Some(Vec::new()),
            next_token: None,
            max_records: None,
        }
    }
}

impl DescribePoliciesRequest {
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

    /// Names or ARNs. Unknown names are ignored.
    pub fn policy_names(&self) -> Option<&[String]> {
        self.policy_names.as_deref()
    }

    pub fn set_policy_names(&mut self, policy_names: Option<Vec<String>>) {
        self.policy_names = policy_names;
    }

    pub fn with_policy_names<I>(mut self, policy_names: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.policy_names
            .get_or_insert_with(Vec::new)
            .extend(policy_names.into_iter().map(Into::into));
        self
    }

    pub fn policy_types(&self) -> Option<&[String]> {
        self.policy_types.as_deref()
    }

    pub fn set_policy_types(&mut self, policy_types: Option<Vec<String>>) {
        self.policy_types = policy_types;
    }

    pub fn with_policy_types<I>(mut self, policy_types: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.policy_types
            .get_or_insert_with(Vec::new)
            .extend(policy_types.into_iter().map(Into::into));
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

impl fmt::Display for DescribePoliciesRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ModelFormatter::new(f)
            .field("AutoScalingGroupName", &self.auto_scaling_group_name)
            .list("PolicyNames", &self.policy_names)
            .list("PolicyTypes", &self.policy_types)
            .field("NextToken", &self.next_token)
            .field("MaxRecords", &self.max_records)
            .finish()
    }
}

impl HashCode for DescribePoliciesRequest {
    fn hash_code(&self) -> i32 {
        hash_combine(&[
            self.auto_scaling_group_name.hash_code(),
            self.policy_names.hash_code(),
            self.policy_types.hash_code(),
            self.next_token.hash_code(),
            self.max_records.hash_code(),
        ])
    }
}

impl ToQuery for DescribePoliciesRequest {
    fn write_query(&self, writer: &mut QueryWriter, key: &str) {
        writer.field(key, "AutoScalingGroupName", &self.auto_scaling_group_name);
        writer.list(key, "PolicyNames", &self.policy_names);
        writer.list(key, "PolicyTypes", &self.policy_types);
        writer.field(key, "NextToken", &self.next_token);
        writer.field(key, "MaxRecords", &self.max_records);
    }
}

/// Output of `DescribePolicies`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct DescribePoliciesResult {
    #[serde(rename = "ScalingPolicies", skip_serializing_if = "Option::is_none")]
    scaling_policies: Option<Vec<ScalingPolicy>>,
    #[serde(rename = "NextToken", skip_serializing_if = "Option::is_none")]
    next_token: Option<String>,
}

impl Default for DescribePoliciesResult {
    fn default() -> Self {
        DescribePoliciesResult {
            scaling_policies: Some(Vec::new()),
            next_token: None,
        }
    }
}

impl DescribePoliciesResult {
    pub fn scaling_policies(&self) -> Option<&[ScalingPolicy]> {
        self.scaling_policies.as_deref()
    }

    pub fn set_scaling_policies(&mut self, scaling_policies: Option<Vec<ScalingPolicy>>) {
        self.scaling_policies = scaling_policies;
    }

    pub fn with_scaling_policies<I>(mut self, scaling_policies: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<ScalingPolicy>,
    {
        self.scaling_policies
            .get_or_insert_with(Vec::new)
            .extend(scaling_policies.into_iter().map(Into::into));
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

impl fmt::Display for DescribePoliciesResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ModelFormatter::new(f)
            .list("ScalingPolicies", &self.scaling_policies)
            .field("NextToken", &self.next_token)
            .finish()
    }
}

impl HashCode for DescribePoliciesResult {
    fn hash_code(&self) -> i32 {
        hash_combine(&[
            self.scaling_policies.hash_code(),
            self.next_token.hash_code(),
        ])
    }
}

impl FromXml for DescribePoliciesResult {
    fn from_xml(node: Node) -> Result<Self> {
        let mut out = DescribePoliciesResult::default();
        for child in node.children().filter(Node::is_element) {
            match child.tag_name().name() {
                "ScalingPolicies" => out.scaling_policies = Some(xml::list(child)?),
                "NextToken" => out.next_token = Some(FromXml::from_xml(child)?),
                _ => {}
            }
        }
        Ok(out)
    }
}

/// Input of `ExecutePolicy`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ExecutePolicyRequest {
    #[serde(rename = "AutoScalingGroupName", skip_serializing_if = "Option::is_none")]
    auto_scaling_group_name: Option<String>,
    #[serde(rename = "PolicyName", skip_serializing_if = "Option::is_none")]
    policy_name: Option<String>,
    #[serde(rename = "HonorCooldown", skip_serializing_if = "Option::is_none")]
    honor_cooldown: Option<bool>,
    #[serde(rename = "MetricValue", skip_serializing_if = "Option::is_none")]
    metric_value: Option<Double>,
    #[serde(rename = "BreachThreshold", skip_serializing_if = "Option::is_none")]
    breach_threshold: Option<Double>,
}

impl ExecutePolicyRequest {
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

    pub fn policy_name(&self) -> Option<&str> {
        self.policy_name.as_deref()
    }

    pub fn set_policy_name(&mut self, policy_name: Option<String>) {
        self.policy_name = policy_name;
    }

    pub fn with_policy_name(mut self, policy_name: impl Into<String>) -> Self {
        self.policy_name = Some(policy_name.into());
        self
    }

    /// Only for `SimpleScaling`.
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

    /// Required for `StepScaling`.
    pub fn metric_value(&self) -> Option<f64> {
        self.metric_value.map(f64::from)
    }

    pub fn set_metric_value(&mut self, metric_value: Option<f64>) {
        self.metric_value = metric_value.map(Double::from);
    }

    pub fn with_metric_value(mut self, metric_value: f64) -> Self {
        self.metric_value = Some(Double::from(metric_value));
        self
    }

    pub fn breach_threshold(&self) -> Option<f64> {
        self.breach_threshold.map(f64::from)
    }

    pub fn set_breach_threshold(&mut self, breach_threshold: Option<f64>) {
        self.breach_threshold = breach_threshold.map(Double::from);
    }

    pub fn with_breach_threshold(mut self, breach_threshold: f64) -> Self {
        self.breach_threshold = Some(Double::from(breach_threshold));
        self
    }
}

impl fmt::Display for ExecutePolicyRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ModelFormatter::new(f)
            .field("AutoScalingGroupName", &self.auto_scaling_group_name)
            .field("PolicyName", &self.policy_name)
            .field("HonorCooldown", &self.honor_cooldown)
            .field("MetricValue", &self.metric_value)
            .field("BreachThreshold", &self.breach_threshold)
            .finish()
    }
}

impl HashCode for ExecutePolicyRequest {
    fn hash_code(&self) -> i32 {
        hash_combine(&[
            self.auto_scaling_group_name.hash_code(),
            self.policy_name.hash_code(),
            self.honor_cooldown.hash_code(),
            self.metric_value.hash_code(),
            self.breach_threshold.hash_code(),
        ])
    }
}

impl ToQuery for ExecutePolicyRequest {
    fn write_query(&self, writer: &mut QueryWriter, key: &str) {
        writer.field(key, "AutoScalingGroupName", &self.auto_scaling_group_name);
        writer.field(key, "PolicyName", &self.policy_name);
        writer.field(key, "HonorCooldown", &self.honor_cooldown);
        writer.field(key, "MetricValue", &self.metric_value);
        writer.field(key, "BreachThreshold", &self.breach_threshold);
    }
}

/// Input of `PutScalingPolicy`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct PutScalingPolicyRequest {
    #[serde(rename = "AutoScalingGroupName", skip_serializing_if = "Option::is_none")]
    auto_scaling_group_name: Option<String>,
    #[serde(rename = "PolicyName", skip_serializing_if = "Option::is_none")]
    policy_name: Option<String>,
    #[serde(rename = "PolicyType", skip_serializing_if = "Option::is_none")]
    policy_type: Option<String>,
    #[serde(rename = "AdjustmentType", skip_serializing_if = "Option::is_none")]
    adjustment_type: Option<String>,
    #[serde(rename = "MinAdjustmentStep", skip_serializing_if = "Option::is_none")]
    min_adjustment_step: Option<i32>,
    #[serde(rename = "MinAdjustmentMagnitude", skip_serializing_if = "Option::is_none")]
    min_adjustment_magnitude: Option<i32>,
    #[serde(rename = "ScalingAdjustment", skip_serializing_if = "Option::is_none")]
    scaling_adjustment: Option<i32>,
    #[serde(rename = "Cooldown", skip_serializing_if = "Option::is_none")]
    cooldown: Option<i32>,
    #[serde(rename = "MetricAggregationType", skip_serializing_if = "Option::is_none")]
    metric_aggregation_type: Option<String>,
    #[serde(rename = "StepAdjustments", skip_serializing_if = "Option::is_none")]
    step_adjustments: Option<Vec<StepAdjustment>>,
    #[serde(rename = "EstimatedInstanceWarmup", skip_serializing_if = "Option::is_none")]
    estimated_instance_warmup: Option<i32>,
    #[serde(rename = "TargetTrackingConfiguration", skip_serializing_if = "Option::is_none")]
    target_tracking_configuration: Option<TargetTrackingConfiguration>,
}

impl Default for PutScalingPolicyRequest {
    fn default() -> Self {
        PutScalingPolicyRequest {
            auto_scaling_group_name: None,
            policy_name: None,
            policy_type: None,
            adjustment_type: None,
            min_adjustment_step: None,
            min_adjustment_magnitude: None,
            scaling_adjustment: None,
            cooldown: None,
            metric_aggregation_type: None,
            step_adjustments: Some(Vec::new()),
            estimated_instance_warmup: None,
            target_tracking_configuration: None,
        }
    }
}

impl PutScalingPolicyRequest {
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

    pub fn policy_name(&self) -> Option<&str> {
        self.policy_name.as_deref()
    }

    pub fn set_policy_name(&mut self, policy_name: Option<String>) {
        self.policy_name = policy_name;
    }

    pub fn with_policy_name(mut self, policy_name: impl Into<String>) -> Self {
        self.policy_name = Some(policy_name.into());
        self
    }

    pub fn policy_type(&self) -> Option<&str> {
        self.policy_type.as_deref()
    }

    pub fn set_policy_type(&mut self, policy_type: Option<String>) {
        self.policy_type = policy_type;
    }

    pub fn with_policy_type(mut self, policy_type: impl Into<String>) -> Self {
        self.policy_type = Some(policy_type.into());
        self
    }

    pub fn adjustment_type(&self) -> Option<&str> {
        self.adjustment_type.as_deref()
    }

    pub fn set_adjustment_type(&mut self, adjustment_type: Option<String>) {
        self.adjustment_type = adjustment_type;
    }

    pub fn with_adjustment_type(mut self, adjustment_type: impl Into<String>) -> Self {
        self.adjustment_type = Some(adjustment_type.into());
        self
    }

    pub fn min_adjustment_step(&self) -> Option<i32> {
        self.min_adjustment_step
    }

    pub fn set_min_adjustment_step(&mut self, min_adjustment_step: Option<i32>) {
        self.min_adjustment_step = min_adjustment_step;
    }

    pub fn with_min_adjustment_step(mut self, min_adjustment_step: i32) -> Self {
        self.min_adjustment_step = Some(min_adjustment_step);
        self
    }

    pub fn min_adjustment_magnitude(&self) -> Option<i32> {
        self.min_adjustment_magnitude
    }

    pub fn set_min_adjustment_magnitude(&mut self, min_adjustment_magnitude: Option<i32>) {
        self.min_adjustment_magnitude = min_adjustment_magnitude;
    }

    pub fn with_min_adjustment_magnitude(mut self, min_adjustment_magnitude: i32) -> Self {
        self.min_adjustment_magnitude = Some(min_adjustment_magnitude);
        self
    }

    pub fn scaling_adjustment(&self) -> Option<i32> {
        self.scaling_adjustment
    }

    pub fn set_scaling_adjustment(&mut self, scaling_adjustment: Option<i32>) {
        self.scaling_adjustment = scaling_adjustment;
    }

    pub fn with_scaling_adjustment(mut self, scaling_adjustment: i32) -> Self {
        self.scaling_adjustment = Some(scaling_adjustment);
        self
    }

    pub fn cooldown(&self) -> Option<i32> {
        self.cooldown
    }

    pub fn set_cooldown(&mut self, cooldown: Option<i32>) {
        self.cooldown = cooldown;
    }

    pub fn with_cooldown(mut self, cooldown: i32) -> Self {
        self.cooldown = Some(cooldown);
        self
    }

    /// `Minimum`, `Maximum` or `Average`.
    pub fn metric_aggregation_type(&self) -> Option<&str> {
        self.metric_aggregation_type.as_deref()
    }

    pub fn set_metric_aggregation_type(&mut self, metric_aggregation_type: Option<String>) {
        self.metric_aggregation_type = metric_aggregation_type;
    }

    pub fn with_metric_aggregation_type(
        mut self,
        metric_aggregation_type: impl Into<String>,
    ) -> Self {
        self.metric_aggregation_type = Some(metric_aggregation_type.into());
        self
    }

    pub fn step_adjustments(&self) -> Option<&[StepAdjustment]> {
        self.step_adjustments.as_deref()
    }

    pub fn set_step_adjustments(&mut self, step_adjustments: Option<Vec<StepAdjustment>>) {
        self.step_adjustments = step_adjustments;
    }

    pub fn with_step_adjustments<I>(mut self, step_adjustments: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<StepAdjustment>,
    {
        self.step_adjustments
            .get_or_insert_with(Vec::new)
            .extend(step_adjustments.into_iter().map(Into::into));
        self
    }

    pub fn estimated_instance_warmup(&self) -> Option<i32> {
        self.estimated_instance_warmup
    }

    pub fn set_estimated_instance_warmup(&mut self, estimated_instance_warmup: Option<i32>) {
        self.estimated_instance_warmup = estimated_instance_warmup;
    }

    pub fn with_estimated_instance_warmup(mut self, estimated_instance_warmup: i32) -> Self {
        self.estimated_instance_warmup = Some(estimated_instance_warmup);
        self
    }

    pub fn target_tracking_configuration(&self) -> Option<&TargetTrackingConfiguration> {
        self.target_tracking_configuration.as_ref()
    }

    pub fn set_target_tracking_configuration(
        &mut self,
        target_tracking_configuration: Option<TargetTrackingConfiguration>,
    ) {
        self.target_tracking_configuration = target_tracking_configuration;
    }

    pub fn with_target_tracking_configuration(
        mut self,
        target_tracking_configuration: TargetTrackingConfiguration,
    ) -> Self {
        self.target_tracking_configuration = Some(target_tracking_configuration);
        self
    }
}

impl fmt::Display for PutScalingPolicyRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ModelFormatter::new(f)
            .field("AutoScalingGroupName", &self.auto_scaling_group_name)
            .field("PolicyName", &self.policy_name)
            .field("PolicyType", &self.policy_type)
            .field("AdjustmentType", &self.adjustment_type)
            .field("MinAdjustmentStep", &self.min_adjustment_step)
            .field("MinAdjustmentMagnitude", &self.min_adjustment_magnitude)
            .field("ScalingAdjustment", &self.scaling_adjustment)
            .field("Cooldown", &self.cooldown)
            .field("MetricAggregationType", &self.metric_aggregation_type)
            .list("StepAdjustments", &self.step_adjustments)
            .field("EstimatedInstanceWarmup", &self.estimated_instance_warmup)
            .field("TargetTrackingConfiguration", &self.target_tracking_configuration)
            .finish()
    }
}

impl HashCode for PutScalingPolicyRequest {
    fn hash_code(&self) -> i32 {
        hash_combine(&[
            self.auto_scaling_group_name.hash_code(),
            self.policy_name.hash_code(),
            self.policy_type.hash_code(),
            self.adjustment_type.hash_code(),
            self.min_adjustment_step.hash_code(),
            self.min_adjustment_magnitude.hash_code(),
            self.scaling_adjustment.hash_code(),
            self.cooldown.hash_code(),
            self.metric_aggregation_type.hash_code(),
            self.step_adjustments.hash_code(),
            self.estimated_instance_warmup.hash_code(),
            self.target_tracking_configuration.hash_code(),
        ])
    }
}

impl ToQuery for PutScalingPolicyRequest {
    fn write_query(&self, writer: &mut QueryWriter, key: &str) {
        writer.field(key, "AutoScalingGroupName", &self.auto_scaling_group_name);
        writer.field(key, "PolicyName", &self.policy_name);
        writer.field(key, "PolicyType", &self.policy_type);
        writer.field(key, "AdjustmentType", &self.adjustment_type);
        writer.field(key, "MinAdjustmentStep", &self.min_adjustment_step);
        writer.field(key, "MinAdjustmentMagnitude", &self.min_adjustment_magnitude);
        writer.field(key, "ScalingAdjustment", &self.scaling_adjustment);
        writer.field(key, "Cooldown", &self.cooldown);
        writer.field(key, "MetricAggregationType", &self.metric_aggregation_type);
        writer.list(key, "StepAdjustments", &self.step_adjustments);
        writer.field(key, "EstimatedInstanceWarmup", &self.estimated_instance_warmup);
        writer.field(key, "TargetTrackingConfiguration", &self.target_tracking_configuration);
    }
}

/// Output of `PutScalingPolicy`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct PutScalingPolicyResult {
    #[serde(rename = "PolicyARN", skip_serializing_if = "Option::is_none")]
    policy_arn: Option<String>,
    #[serde(rename = "Alarms", skip_serializing_if = "Option::is_none")]
    alarms: Option<Vec<Alarm>>,
}

impl Default for PutScalingPolicyResult {
    fn default() -> Self {
        PutScalingPolicyResult {
            policy_arn: None,
            alarms: Some(Vec::new()),
        }
    }
}

impl PutScalingPolicyResult {
    pub fn policy_arn(&self) -> Option<&str> {
        self.policy_arn.as_deref()
    }

    pub fn set_policy_arn(&mut self, policy_arn: Option<String>) {
        self.policy_arn = policy_arn;
    }

    pub fn with_policy_arn(mut self, policy_arn: impl Into<String>) -> Self {
        self.policy_arn = Some(policy_arn.into());
        self
    }

    pub fn alarms(&self) -> Option<&[Alarm]> {
        self.alarms.as_deref()
    }

    pub fn set_alarms(&mut self, alarms: Option<Vec<Alarm>>) {
        self.alarms = alarms;
    }

    pub fn with_alarms<I>(mut self, alarms: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Alarm>,
    {
        self.alarms.get_or_insert_with(Vec::new).extend(alarms.into_iter().map(Into::into));
        self
    }
}

impl fmt::Display for PutScalingPolicyResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ModelFormatter::new(f)
            .field("PolicyARN", &self.policy_arn)
            .list("Alarms", &self.alarms)
            .finish()
    }
}

impl HashCode for PutScalingPolicyResult {
    fn hash_code(&self) -> i32 {
        hash_combine(&[
            self.policy_arn.hash_code(),
            self.alarms.hash_code(),
        ])
    }
}

impl FromXml for PutScalingPolicyResult {
    fn from_xml(node: Node) -> Result<Self> {
        let mut out = PutScalingPolicyResult::default();
        for child in node.children().filter(Node::is_element) {
            match child.tag_name().name() {
                "PolicyARN" => out.policy_arn = Some(FromXml::from_xml(child)?),
                "Alarms" => out.alarms = Some(xml::list(child)?),
                _ => {}
            }
        }
        Ok(out)
    }
}
