string_enum! {
    /// Statistic of a customized metric.
    pub enum MetricStatistic {
        Average => "Average",
        Minimum => "Minimum",
        Maximum => "Maximum",
        SampleCount => "SampleCount",
        Sum => "Sum",
    }
}

string_enum! {
    /// Predefined metric of a target tracking policy.
    pub enum MetricType {
        AsgAverageCpuUtilization => "ASGAverageCPUUtilization",
        AsgAverageNetworkIn => "ASGAverageNetworkIn",
        AsgAverageNetworkOut => "ASGAverageNetworkOut",
        /// Needs a `ResourceLabel` naming the target group.
        AlbRequestCountPerTarget => "ALBRequestCountPerTarget",
    }
}

string_enum! {
    pub enum LifecycleState {
        Pending => "Pending",
        PendingWait => "Pending:Wait",
        PendingProceed => "Pending:Proceed",
        Quarantined => "Quarantined",
        InService => "InService",
        Terminating => "Terminating",
        TerminatingWait => "Terminating:Wait",
        TerminatingProceed => "Terminating:Proceed",
        Terminated => "Terminated",
        Detaching => "Detaching",
        Detached => "Detached",
        EnteringStandby => "EnteringStandby",
        Standby => "Standby",
    }
}

string_enum! {
    /// Instance state change a lifecycle hook is attached to.
    pub enum LifecycleTransition {
        InstanceLaunching => "autoscaling:EC2_INSTANCE_LAUNCHING",
        InstanceTerminating => "autoscaling:EC2_INSTANCE_TERMINATING",
    }
}

string_enum! {
    pub enum ScalingActivityStatusCode {
        PendingSpotBidPlacement => "PendingSpotBidPlacement",
        WaitingForSpotInstanceRequestId => "WaitingForSpotInstanceRequestId",
        WaitingForSpotInstanceId => "WaitingForSpotInstanceId",
        WaitingForInstanceId => "WaitingForInstanceId",
        PreInService => "PreInService",
        InProgress => "InProgress",
        WaitingForElbConnectionDraining => "WaitingForELBConnectionDraining",
        MidLifecycleAction => "MidLifecycleAction",
        WaitingForInstanceWarmup => "WaitingForInstanceWarmup",
        Successful => "Successful",
        Failed => "Failed",
        Cancelled => "Cancelled",
    }
}

impl ScalingActivityStatusCode {
    /// The activity will not change any more.
    pub fn is_finished(&self) -> bool {
        matches!(
            self,
            ScalingActivityStatusCode::Successful
                | ScalingActivityStatusCode::Failed
                | ScalingActivityStatusCode::Cancelled
        )
    }
}

string_enum! {
    /// Event an SNS notification configuration subscribes to.
    pub enum NotificationType {
        InstanceLaunch => "autoscaling:EC2_INSTANCE_LAUNCH",
        InstanceLaunchError => "autoscaling:EC2_INSTANCE_LAUNCH_ERROR",
        InstanceTerminate => "autoscaling:EC2_INSTANCE_TERMINATE",
        InstanceTerminateError => "autoscaling:EC2_INSTANCE_TERMINATE_ERROR",
        TestNotification => "autoscaling:TEST_NOTIFICATION",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_literals_round_trip() {
        for value in LifecycleState::VALUES {
            let state = LifecycleState::from(*value);
            assert!(!state.is_unknown(), "{value}");
            assert_eq!(state.as_str(), *value);
        }
        assert_eq!(
            MetricType::from("ALBRequestCountPerTarget"),
            MetricType::AlbRequestCountPerTarget,
        );
    }

    #[test]
    fn unknown_literals_are_kept_verbatim() {
        let state = LifecycleState::from("Warmed:Pending");
        assert_eq!(state, LifecycleState::Unknown("Warmed:Pending".into()));
        assert_eq!(state.to_string(), "Warmed:Pending");
        assert_eq!(String::from(state), "Warmed:Pending");
    }

    #[test]
    fn serde_uses_wire_literals() {
        let json = serde_json::to_string(&NotificationType::InstanceLaunch).unwrap();
        assert_eq!(json, r#""autoscaling:EC2_INSTANCE_LAUNCH""#);
        let back: NotificationType = serde_json::from_str(&json).unwrap();
        assert_eq!(back, NotificationType::InstanceLaunch);
    }

    #[test]
    fn finished_activities() {
        assert!(ScalingActivityStatusCode::Successful.is_finished());
        assert!(!ScalingActivityStatusCode::InProgress.is_finished());
        assert!(!ScalingActivityStatusCode::from("Later").is_finished());
    }
}
