//! Request and result types of every Auto Scaling operation, and the
//! structures they share.
//!
//! All types follow the same conventions:
//!
//! - fields are private and optional. `x()` reads one, `set_x()` replaces it
//!   (`None` clears it) and `with_x()` sets it while chaining;
//! - list fields start out as `Some(vec![])`. `set_x(None)` makes them absent
//!   again, which the caller can use to mean "not specified". `with_x()` on a
//!   list appends to it;
//! - nothing is validated. Length, pattern and range constraints in the docs
//!   are enforced by the service;
//! - `Display` lists the present fields in declaration order, e.g.
//!   `{Key: Name,Value: web}`. Lists inside print as `[a, b]`.

use chrono::{DateTime, SecondsFormat, Utc};
use std::fmt;

mod activities;
mod double;
mod enums;
mod groups;
mod hash_code;
mod instances;
mod launch_configurations;
mod lifecycle_hooks;
mod limits;
mod load_balancers;
mod metrics;
mod notifications;
mod policies;
mod processes;
mod scheduled_actions;
mod tags;

pub use activities::*;
pub use double::Double;
pub use enums::*;
pub use groups::*;
pub use hash_code::HashCode;
pub(crate) use hash_code::hash_combine;
pub use instances::*;
pub use launch_configurations::*;
pub use lifecycle_hooks::*;
pub use limits::*;
pub use load_balancers::*;
pub use metrics::*;
pub use notifications::*;
pub use policies::*;
pub use processes::*;
pub use scheduled_actions::*;
pub use tags::*;

/// Writes the `{Name: value,...}` form of a model, skipping absent fields.
pub(crate) struct ModelFormatter<'a, 'b> {
    f: &'a mut fmt::Formatter<'b>,
    result: fmt::Result,
    has_fields: bool,
}

impl<'a, 'b> ModelFormatter<'a, 'b> {
    pub(crate) fn new(f: &'a mut fmt::Formatter<'b>) -> Self {
        let result = f.write_str("{");
        ModelFormatter { f, result, has_fields: false }
    }

    fn entry(&mut self, name: &str, value: &dyn fmt::Display) {
        self.result = self.result.and_then(|_| {
            if self.has_fields {
                self.f.write_str(",")?;
            }
            write!(self.f, "{name}: {value}")
        });
        self.has_fields = true;
    }

    pub(crate) fn field<T: fmt::Display>(&mut self, name: &str, value: &Option<T>) -> &mut Self {
        if let Some(value) = value {
            self.entry(name, value);
        }
        self
    }

    pub(crate) fn time(&mut self, name: &str, value: &Option<DateTime<Utc>>) -> &mut Self {
        if let Some(value) = value {
            self.entry(name, &value.to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        self
    }

    pub(crate) fn list<T: fmt::Display>(
        &mut self,
        name: &str,
        values: &Option<Vec<T>>,
    ) -> &mut Self {
        if let Some(values) = values {
            self.entry(name, &DisplayList(values));
        }
        self
    }

    pub(crate) fn finish(&mut self) -> fmt::Result {
        self.result.and_then(|_| self.f.write_str("}"))
    }
}

struct DisplayList<'a, T>(&'a [T]);

impl<T: fmt::Display> fmt::Display for DisplayList<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, v) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{v}")?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of<T: Hash>(v: &T) -> u64 {
        let mut h = DefaultHasher::new();
        v.hash(&mut h);
        h.finish()
    }

    #[test]
    fn list_fields_default_to_empty_lists() {
        assert_eq!(AttachInstancesRequest::default().instance_ids(), Some(&[][..]));
        assert_eq!(
            AttachLoadBalancerTargetGroupsRequest::default().target_group_arns(),
            Some(&[][..]),
        );
        assert_eq!(AttachLoadBalancersRequest::default().load_balancer_names(), Some(&[][..]));
        assert_eq!(
            BatchDeleteScheduledActionRequest::default().scheduled_action_names(),
            Some(&[][..]),
        );
        assert_eq!(
            BatchPutScheduledUpdateGroupActionRequest::default().scheduled_update_group_actions(),
            Some(&[][..]),
        );
        assert_eq!(CreateAutoScalingGroupRequest::default().availability_zones(), Some(&[][..]));
        assert_eq!(CreateAutoScalingGroupRequest::default().load_balancer_names(), Some(&[][..]));
        assert_eq!(CreateAutoScalingGroupRequest::default().target_group_arns(), Some(&[][..]));
        assert_eq!(CreateAutoScalingGroupRequest::default().termination_policies(), Some(&[][..]));
        assert_eq!(
            CreateAutoScalingGroupRequest::default().lifecycle_hook_specification_list(),
            Some(&[][..]),
        );
        assert_eq!(CreateAutoScalingGroupRequest::default().tags(), Some(&[][..]));
        assert_eq!(CreateLaunchConfigurationRequest::default().security_groups(), Some(&[][..]));
        assert_eq!(
            CreateLaunchConfigurationRequest::default().classic_link_vpc_security_groups(),
            Some(&[][..]),
        );
        assert_eq!(
            CreateLaunchConfigurationRequest::default().block_device_mappings(),
            Some(&[][..]),
        );
        assert_eq!(CreateOrUpdateTagsRequest::default().tags(), Some(&[][..]));
        assert_eq!(DeleteTagsRequest::default().tags(), Some(&[][..]));
        assert_eq!(
            DescribeAutoScalingGroupsRequest::default().auto_scaling_group_names(),
            Some(&[][..]),
        );
        assert_eq!(DescribeAutoScalingInstancesRequest::default().instance_ids(), Some(&[][..]));
        assert_eq!(
            DescribeLaunchConfigurationsRequest::default().launch_configuration_names(),
            Some(&[][..]),
        );
        assert_eq!(DescribeLifecycleHooksRequest::default().lifecycle_hook_names(), Some(&[][..]));
        assert_eq!(
            DescribeNotificationConfigurationsRequest::default().auto_scaling_group_names(),
            Some(&[][..]),
        );
        assert_eq!(DescribePoliciesRequest::default().policy_names(), Some(&[][..]));
        assert_eq!(DescribePoliciesRequest::default().policy_types(), Some(&[][..]));
        assert_eq!(DescribeScalingActivitiesRequest::default().activity_ids(), Some(&[][..]));
        assert_eq!(
            DescribeScheduledActionsRequest::default().scheduled_action_names(),
            Some(&[][..]),
        );
        assert_eq!(DescribeTagsRequest::default().filters(), Some(&[][..]));
        assert_eq!(DetachInstancesRequest::default().instance_ids(), Some(&[][..]));
        assert_eq!(
            DetachLoadBalancerTargetGroupsRequest::default().target_group_arns(),
            Some(&[][..]),
        );
        assert_eq!(DetachLoadBalancersRequest::default().load_balancer_names(), Some(&[][..]));
        assert_eq!(DisableMetricsCollectionRequest::default().metrics(), Some(&[][..]));
        assert_eq!(EnableMetricsCollectionRequest::default().metrics(), Some(&[][..]));
        assert_eq!(EnterStandbyRequest::default().instance_ids(), Some(&[][..]));
        assert_eq!(ExitStandbyRequest::default().instance_ids(), Some(&[][..]));
        assert_eq!(
            PutNotificationConfigurationRequest::default().notification_types(),
            Some(&[][..]),
        );
        assert_eq!(PutScalingPolicyRequest::default().step_adjustments(), Some(&[][..]));
        assert_eq!(ResumeProcessesRequest::default().scaling_processes(), Some(&[][..]));
        assert_eq!(SetInstanceProtectionRequest::default().instance_ids(), Some(&[][..]));
        assert_eq!(SuspendProcessesRequest::default().scaling_processes(), Some(&[][..]));
        assert_eq!(UpdateAutoScalingGroupRequest::default().availability_zones(), Some(&[][..]));
        assert_eq!(UpdateAutoScalingGroupRequest::default().termination_policies(), Some(&[][..]));
    }

    #[test]
    fn scalars_default_to_absent() {
        let request = DescribeAutoScalingGroupsRequest::default();
        assert_eq!(request.next_token(), None);
        assert_eq!(request.max_records(), None);
    }

    #[test]
    fn set_none_clears_a_list_and_with_reinitializes_it() {
        let mut request = DescribeAutoScalingGroupsRequest::default();
        request.set_auto_scaling_group_names(None);
        assert_eq!(request.auto_scaling_group_names(), None);

        let request = request.with_auto_scaling_group_names(["web"]);
        assert_eq!(request.auto_scaling_group_names().unwrap(), ["web"]);
    }

    #[test]
    fn with_appends_to_lists() {
        let request = AttachLoadBalancerTargetGroupsRequest::default()
            .with_target_group_arns(["arn:1"])
            .with_target_group_arns(vec!["arn:2".to_string(), "arn:3".to_string()]);
        assert_eq!(request.target_group_arns().unwrap(), ["arn:1", "arn:2", "arn:3"]);

        let mut request = request;
        request.set_target_group_arns(Some(vec!["arn:9".into()]));
        assert_eq!(request.target_group_arns().unwrap(), ["arn:9"]);
    }

    #[test]
    fn with_chains_on_the_same_value() {
        let request = SetDesiredCapacityRequest::default()
            .with_auto_scaling_group_name("web")
            .with_desired_capacity(3)
            .with_honor_cooldown(true);
        let mut expected = SetDesiredCapacityRequest::default();
        expected.set_auto_scaling_group_name(Some("web".into()));
        expected.set_desired_capacity(Some(3));
        expected.set_honor_cooldown(Some(true));
        assert_eq!(request, expected);
    }

    #[test]
    fn display_lists_only_present_fields_in_order() {
        let tag = Tag::default().with_key("Name").with_value("web");
        let s = tag.to_string();
        assert_eq!(s, "{Key: Name,Value: web}");
        assert!(!s.contains("ResourceId:"));
        assert!(!s.contains("ResourceType:"));

        assert_eq!(Tag::default().to_string(), "{}");
    }

    #[test]
    fn display_renders_lists_nested_models_and_times() {
        let request = DescribeAutoScalingGroupsRequest::default()
            .with_auto_scaling_group_names(["web", "worker"])
            .with_max_records(50);
        assert_eq!(request.to_string(), "{AutoScalingGroupNames: [web, worker],MaxRecords: 50}");

        let mut empty = DescribeAutoScalingGroupsRequest::default();
        assert_eq!(empty.to_string(), "{AutoScalingGroupNames: []}");
        empty.set_auto_scaling_group_names(None);
        assert_eq!(empty.to_string(), "{}");

        let spec = LaunchTemplateSpecification::default()
            .with_launch_template_id("lt-0abc")
            .with_version("1");
        let template = LaunchTemplate::default().with_launch_template_specification(spec);
        let policy = MixedInstancesPolicy::default().with_launch_template(template);
        assert_eq!(
            policy.to_string(),
            "{LaunchTemplate: {LaunchTemplateSpecification: {LaunchTemplateId: lt-0abc,Version: 1},\
             Overrides: []}}"
        );

        let start =
            DateTime::parse_from_rfc3339("2019-03-01T12:30:00Z").unwrap().with_timezone(&Utc);
        let action = ScheduledUpdateGroupActionRequest::default()
            .with_scheduled_action_name("night")
            .with_start_time(start);
        assert_eq!(
            action.to_string(),
            "{ScheduledActionName: night,StartTime: 2019-03-01T12:30:00Z}",
        );
    }

    #[test]
    fn equality_and_hash_cover_every_field() {
        let a = Tag::default().with_key("Name").with_value("web");
        let b = Tag::default().with_key("Name").with_value("web");
        assert_eq!(a, a.clone());
        assert_eq!(a, b);
        assert_eq!(b, a);
        assert_eq!(hash_of(&a), hash_of(&b));

        let c = b.clone().with_propagate_at_launch(true);
        assert_ne!(a, c);

        let mut d = DescribeAutoScalingGroupsRequest::default();
        let e = DescribeAutoScalingGroupsRequest::default();
        assert_eq!(hash_of(&d), hash_of(&e));
        d.set_auto_scaling_group_names(None);
        // absent and empty are different values
        assert_ne!(d, e);
    }

    #[test]
    fn doubles_take_part_in_equality() {
        let step = || {
            StepAdjustment::default()
                .with_metric_interval_lower_bound(0.0)
                .with_scaling_adjustment(1)
        };
        let (a, b) = (step(), step());
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
        assert_eq!(a.metric_interval_lower_bound(), Some(0.0));
        assert_ne!(a, b.with_metric_interval_upper_bound(10.0));
    }

    #[test]
    fn whole_doubles_print_with_a_decimal() {
        let step = StepAdjustment::default()
            .with_metric_interval_lower_bound(40.0)
            .with_metric_interval_upper_bound(1e7)
            .with_scaling_adjustment(2);
        assert_eq!(
            step.to_string(),
            "{MetricIntervalLowerBound: 40.0,MetricIntervalUpperBound: 1.0E7,ScalingAdjustment: 2}"
        );
    }

    #[test]
    fn enum_fields_accept_strings() {
        let spec = CustomizedMetricSpecification::default()
            .with_metric_name("QueueDepth")
            .with_namespace("App")
            .with_statistic("Average")
            .with_unit("Count");
        assert_eq!(spec.statistic(), Some(&MetricStatistic::Average));

        let spec = spec.with_statistic("p99");
        assert_eq!(spec.statistic(), Some(&MetricStatistic::Unknown("p99".into())));
    }

    #[test]
    fn serde_uses_wire_names() {
        let group = AutoScalingGroup::default()
            .with_auto_scaling_group_name("web")
            .with_target_group_arns(["arn:tg"])
            .with_vpc_zone_identifier("subnet-1,subnet-2");
        let json = serde_json::to_value(&group).unwrap();
        assert_eq!(json["AutoScalingGroupName"], "web");
        assert_eq!(json["TargetGroupARNs"][0], "arn:tg");
        assert_eq!(json["VPCZoneIdentifier"], "subnet-1,subnet-2");
        assert!(json.get("MinSize").is_none());

        let back: AutoScalingGroup = serde_json::from_value(json).unwrap();
        assert_eq!(back.auto_scaling_group_name(), Some("web"));
        assert_eq!(back.target_group_arns().unwrap(), ["arn:tg"]);
    }
}
