//! Query protocol request encoding.
//!
//! Requests become a flat list of `key=value` pairs. Nested structures are
//! addressed with dotted keys, and list entries with `Name.member.N` counted
//! from 1.

use crate::model::Double;
use crate::prelude::f;
use chrono::{DateTime, SecondsFormat, Utc};
use itertools::Itertools;

pub const API_VERSION: &str = "2011-01-01";
pub const CONTENT_TYPE: &str = "application/x-www-form-urlencoded; charset=utf-8";

/// Writes a value under `key`. Structures write each of their fields below it.
pub trait ToQuery {
    fn write_query(&self, writer: &mut QueryWriter, key: &str);
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryWriter {
    params: Vec<(String, String)>,
}

impl QueryWriter {
    pub fn new(action: &str) -> Self {
        let mut writer = QueryWriter::default();
        writer.push("Action", action);
        writer.push("Version", API_VERSION);
        writer
    }

    pub fn push(&mut self, key: &str, value: impl Into<String>) {
        self.params.push((key.to_string(), value.into()));
    }

    /// Writes `value` under `prefix.name`. Absent values write nothing.
    pub fn field<T: ToQuery>(&mut self, prefix: &str, name: &str, value: &Option<T>) {
        if let Some(value) = value {
            value.write_query(self, &join(prefix, name));
        }
    }

    /// Writes each item under `prefix.name.member.N`. Absent and empty lists write nothing.
    pub fn list<T: ToQuery>(&mut self, prefix: &str, name: &str, values: &Option<Vec<T>>) {
        let key = join(prefix, name);
        for (i, value) in values.iter().flatten().enumerate() {
            value.write_query(self, &f!("{key}.member.{}", i + 1));
        }
    }

    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    /// The form-encoded request body.
    pub fn into_body(self) -> String {
        self.params
            .iter()
            .map(|(k, v)| f!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .join("&")
    }
}

fn join(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        f!("{prefix}.{name}")
    }
}

/// Encodes a whole request the way it goes on the wire.
pub fn encode<R: ToQuery>(action: &str, request: &R) -> QueryWriter {
    let mut writer = QueryWriter::new(action);
    request.write_query(&mut writer, "");
    writer
}

impl ToQuery for String {
    fn write_query(&self, writer: &mut QueryWriter, key: &str) {
        writer.push(key, self.as_str());
    }
}

impl ToQuery for i32 {
    fn write_query(&self, writer: &mut QueryWriter, key: &str) {
        writer.push(key, self.to_string());
    }
}

impl ToQuery for bool {
    fn write_query(&self, writer: &mut QueryWriter, key: &str) {
        writer.push(key, if *self { "true" } else { "false" });
    }
}

impl ToQuery for Double {
    fn write_query(&self, writer: &mut QueryWriter, key: &str) {
        writer.push(key, self.to_string());
    }
}

impl ToQuery for DateTime<Utc> {
    fn write_query(&self, writer: &mut QueryWriter, key: &str) {
        writer.push(key, self.to_rfc3339_opts(SecondsFormat::Millis, true));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        CreateAutoScalingGroupRequest, DescribeAutoScalingGroupsRequest, LaunchTemplate,
        LaunchTemplateOverrides, LaunchTemplateSpecification, MixedInstancesPolicy,
        PutScalingPolicyRequest, StepAdjustment, Tag,
    };
    use chrono::TimeZone;

    #[test]
    fn action_and_version_come_first() {
        let writer = encode("DescribeAutoScalingGroups", &DescribeAutoScalingGroupsRequest::default());
        assert_eq!(
            writer.params()[..2],
            [
                ("Action".to_string(), "DescribeAutoScalingGroups".to_string()),
                ("Version".to_string(), API_VERSION.to_string())
            ]
        );
        // the default empty list writes nothing
        assert_eq!(writer.params().len(), 2);
    }

    #[test]
    fn string_lists_use_member_indices() {
        let request = DescribeAutoScalingGroupsRequest::default()
            .with_auto_scaling_group_names(["web", "worker"])
            .with_max_records(100)
            .with_next_token("abc");
        let writer = encode("DescribeAutoScalingGroups", &request);
        assert_eq!(writer.get("AutoScalingGroupNames.member.1"), Some("web"));
        assert_eq!(writer.get("AutoScalingGroupNames.member.2"), Some("worker"));
        assert_eq!(writer.get("MaxRecords"), Some("100"));
        assert_eq!(writer.get("NextToken"), Some("abc"));
    }

    #[test]
    fn nested_structures_use_dotted_keys() {
        let policy = MixedInstancesPolicy::default().with_launch_template(
            LaunchTemplate::default()
                .with_launch_template_specification(
                    LaunchTemplateSpecification::default()
                        .with_launch_template_name("web-template")
                        .with_version("$Latest"),
                )
                .with_overrides([
                    LaunchTemplateOverrides::default().with_instance_type("c5.large"),
                    LaunchTemplateOverrides::default()
                        .with_instance_type("c5.xlarge")
                        .with_weighted_capacity("2"),
                ]),
        );
        let request = CreateAutoScalingGroupRequest::default()
            .with_auto_scaling_group_name("web")
            .with_min_size(1)
            .with_max_size(4)
            .with_new_instances_protected_from_scale_in(false)
            .with_mixed_instances_policy(policy)
            .with_tags([Tag::default().with_key("Name").with_value("web").with_propagate_at_launch(true)]);
        let writer = encode("CreateAutoScalingGroup", &request);
        assert_eq!(
            writer.get("MixedInstancesPolicy.LaunchTemplate.LaunchTemplateSpecification.LaunchTemplateName"),
            Some("web-template")
        );
        assert_eq!(
            writer.get("MixedInstancesPolicy.LaunchTemplate.Overrides.member.2.WeightedCapacity"),
            Some("2")
        );
        assert_eq!(writer.get("Tags.member.1.Key"), Some("Name"));
        assert_eq!(writer.get("Tags.member.1.PropagateAtLaunch"), Some("true"));
        assert_eq!(writer.get("NewInstancesProtectedFromScaleIn"), Some("false"));
        assert_eq!(writer.get("MinSize"), Some("1"));
    }

    #[test]
    fn doubles_and_enums_use_their_wire_form() {
        let request = PutScalingPolicyRequest::default()
            .with_auto_scaling_group_name("web")
            .with_policy_name("scale-out")
            .with_policy_type("StepScaling")
            .with_step_adjustments([
                StepAdjustment::default()
                    .with_metric_interval_lower_bound(0.5)
                    .with_scaling_adjustment(2),
                StepAdjustment::default().with_metric_interval_lower_bound(40.0),
            ]);
        let writer = encode("PutScalingPolicy", &request);
        assert_eq!(writer.get("StepAdjustments.member.1.MetricIntervalLowerBound"), Some("0.5"));
        assert_eq!(writer.get("StepAdjustments.member.1.ScalingAdjustment"), Some("2"));
        assert_eq!(writer.get("StepAdjustments.member.1.MetricIntervalUpperBound"), None);
        assert_eq!(writer.get("StepAdjustments.member.2.MetricIntervalLowerBound"), Some("40.0"));
    }

    #[test]
    fn timestamps_are_utc_with_millis() {
        let mut writer = QueryWriter::default();
        Utc.with_ymd_and_hms(2019, 3, 1, 12, 30, 0).unwrap().write_query(&mut writer, "StartTime");
        assert_eq!(writer.get("StartTime"), Some("2019-03-01T12:30:00.000Z"));
    }

    #[test]
    fn body_is_percent_encoded() {
        let request = DescribeAutoScalingGroupsRequest::default().with_next_token("a+b/c=");
        let body = encode("DescribeAutoScalingGroups", &request).into_body();
        assert_eq!(
            body,
            "Action=DescribeAutoScalingGroups&Version=2011-01-01&NextToken=a%2Bb%2Fc%3D"
        );
    }
}
