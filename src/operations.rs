//! Operation bindings: action names, pagination and one client method per operation.

use crate::client::AutoScalingClient;
use crate::error::Result;
use crate::model::*;
use crate::operation::{Operation, Page, Paginated};

impl Operation for AttachInstancesRequest {
    const ACTION: &'static str = "AttachInstances";
    type Output = ();
}

impl Operation for AttachLoadBalancerTargetGroupsRequest {
    const ACTION: &'static str = "AttachLoadBalancerTargetGroups";
    type Output = AttachLoadBalancerTargetGroupsResult;
}

impl Operation for AttachLoadBalancersRequest {
    const ACTION: &'static str = "AttachLoadBalancers";
    type Output = AttachLoadBalancersResult;
}

impl Operation for BatchDeleteScheduledActionRequest {
    const ACTION: &'static str = "BatchDeleteScheduledAction";
    type Output = BatchDeleteScheduledActionResult;
}

impl Operation for BatchPutScheduledUpdateGroupActionRequest {
    const ACTION: &'static str = "BatchPutScheduledUpdateGroupAction";
    type Output = BatchPutScheduledUpdateGroupActionResult;
}

impl Operation for CompleteLifecycleActionRequest {
    const ACTION: &'static str = "CompleteLifecycleAction";
    type Output = CompleteLifecycleActionResult;
}

impl Operation for CreateAutoScalingGroupRequest {
    const ACTION: &'static str = "CreateAutoScalingGroup";
    type Output = ();
}

impl Operation for CreateLaunchConfigurationRequest {
    const ACTION: &'static str = "CreateLaunchConfiguration";
    type Output = ();
}

impl Operation for CreateOrUpdateTagsRequest {
    const ACTION: &'static str = "CreateOrUpdateTags";
    type Output = ();
}

impl Operation for DeleteAutoScalingGroupRequest {
    const ACTION: &'static str = "DeleteAutoScalingGroup";
    type Output = ();
}

impl Operation for DeleteLaunchConfigurationRequest {
    const ACTION: &'static str = "DeleteLaunchConfiguration";
    type Output = ();
}

impl Operation for DeleteLifecycleHookRequest {
    const ACTION: &'static str = "DeleteLifecycleHook";
    type Output = DeleteLifecycleHookResult;
}

impl Operation for DeleteNotificationConfigurationRequest {
    const ACTION: &'static str = "DeleteNotificationConfiguration";
    type Output = ();
}

impl Operation for DeletePolicyRequest {
    const ACTION: &'static str = "DeletePolicy";
    type Output = ();
}

impl Operation for DeleteScheduledActionRequest {
    const ACTION: &'static str = "DeleteScheduledAction";
    type Output = ();
}

impl Operation for DeleteTagsRequest {
    const ACTION: &'static str = "DeleteTags";
    type Output = ();
}

impl Operation for DescribeAccountLimitsRequest {
    const ACTION: &'static str = "DescribeAccountLimits";
    type Output = DescribeAccountLimitsResult;
}

impl Operation for DescribeAdjustmentTypesRequest {
    const ACTION: &'static str = "DescribeAdjustmentTypes";
    type Output = DescribeAdjustmentTypesResult;
}

impl Operation for DescribeAutoScalingGroupsRequest {
    const ACTION: &'static str = "DescribeAutoScalingGroups";
    type Output = DescribeAutoScalingGroupsResult;
}

impl Paginated for DescribeAutoScalingGroupsRequest {
    fn set_next_token(&mut self, token: Option<String>) {
        self.set_next_token(token);
    }
}

impl Page for DescribeAutoScalingGroupsResult {
    fn next_token(&self) -> Option<&str> {
        self.next_token()
    }
}

impl Operation for DescribeAutoScalingInstancesRequest {
    const ACTION: &'static str = "DescribeAutoScalingInstances";
    type Output = DescribeAutoScalingInstancesResult;
}

impl Paginated for DescribeAutoScalingInstancesRequest {
    fn set_next_token(&mut self, token: Option<String>) {
        self.set_next_token(token);
    }
}

impl Page for DescribeAutoScalingInstancesResult {
    fn next_token(&self) -> Option<&str> {
        self.next_token()
    }
}

impl Operation for DescribeAutoScalingNotificationTypesRequest {
    const ACTION: &'static str = "DescribeAutoScalingNotificationTypes";
    type Output = DescribeAutoScalingNotificationTypesResult;
}

impl Operation for DescribeLaunchConfigurationsRequest {
    const ACTION: &'static str = "DescribeLaunchConfigurations";
    type Output = DescribeLaunchConfigurationsResult;
}

impl Paginated for DescribeLaunchConfigurationsRequest {
    fn set_next_token(&mut self, token: Option<String>) {
        self.set_next_token(token);
    }
}

impl Page for DescribeLaunchConfigurationsResult {
    fn next_token(&self) -> Option<&str> {
        self.next_token()
    }
}

impl Operation for DescribeLifecycleHookTypesRequest {
    const ACTION: &'static str = "DescribeLifecycleHookTypes";
    type Output = DescribeLifecycleHookTypesResult;
}

impl Operation for DescribeLifecycleHooksRequest {
    const ACTION: &'static str = "DescribeLifecycleHooks";
    type Output = DescribeLifecycleHooksResult;
}

impl Operation for DescribeLoadBalancerTargetGroupsRequest {
    const ACTION: &'static str = "DescribeLoadBalancerTargetGroups";
    type Output = DescribeLoadBalancerTargetGroupsResult;
}

impl Paginated for DescribeLoadBalancerTargetGroupsRequest {
    fn set_next_token(&mut self, token: Option<String>) {
        self.set_next_token(token);
    }
}

impl Page for DescribeLoadBalancerTargetGroupsResult {
    fn next_token(&self) -> Option<&str> {
        self.next_token()
    }
}

impl Operation for DescribeLoadBalancersRequest {
    const ACTION: &'static str = "DescribeLoadBalancers";
    type Output = DescribeLoadBalancersResult;
}

impl Paginated for DescribeLoadBalancersRequest {
    fn set_next_token(&mut self, token: Option<String>) {
        self.set_next_token(token);
    }
}

impl Page for DescribeLoadBalancersResult {
    fn next_token(&self) -> Option<&str> {
        self.next_token()
    }
}

impl Operation for DescribeMetricCollectionTypesRequest {
    const ACTION: &'static str = "DescribeMetricCollectionTypes";
    type Output = DescribeMetricCollectionTypesResult;
}

impl Operation for DescribeNotificationConfigurationsRequest {
    const ACTION: &'static str = "DescribeNotificationConfigurations";
    type Output = DescribeNotificationConfigurationsResult;
}

impl Paginated for DescribeNotificationConfigurationsRequest {
    fn set_next_token(&mut self, token: Option<String>) {
        self.set_next_token(token);
    }
}

impl Page for DescribeNotificationConfigurationsResult {
    fn next_token(&self) -> Option<&str> {
        self.next_token()
    }
}

impl Operation for DescribePoliciesRequest {
    const ACTION: &'static str = "DescribePolicies";
    type Output = DescribePoliciesResult;
}

impl Paginated for DescribePoliciesRequest {
    fn set_next_token(&mut self, token: Option<String>) {
        self.set_next_token(token);
    }
}

impl Page for DescribePoliciesResult {
    fn next_token(&self) -> Option<&str> {
        self.next_token()
    }
}

impl Operation for DescribeScalingActivitiesRequest {
    const ACTION: &'static str = "DescribeScalingActivities";
    type Output = DescribeScalingActivitiesResult;
}

impl Paginated for DescribeScalingActivitiesRequest {
    fn set_next_token(&mut self, token: Option<String>) {
        self.set_next_token(token);
    }
}

impl Page for DescribeScalingActivitiesResult {
    fn next_token(&self) -> Option<&str> {
        self.next_token()
    }
}

impl Operation for DescribeScalingProcessTypesRequest {
    const ACTION: &'static str = "DescribeScalingProcessTypes";
    type Output = DescribeScalingProcessTypesResult;
}

impl Operation for DescribeScheduledActionsRequest {
    const ACTION: &'static str = "DescribeScheduledActions";
    type Output = DescribeScheduledActionsResult;
}

impl Paginated for DescribeScheduledActionsRequest {
    fn set_next_token(&mut self, token: Option<String>) {
        self.set_next_token(token);
    }
}

impl Page for DescribeScheduledActionsResult {
    fn next_token(&self) -> Option<&str> {
        self.next_token()
    }
}

impl Operation for DescribeTagsRequest {
    const ACTION: &'static str = "DescribeTags";
    type Output = DescribeTagsResult;
}

impl Paginated for DescribeTagsRequest {
    fn set_next_token(&mut self, token: Option<String>) {
        self.set_next_token(token);
    }
}

impl Page for DescribeTagsResult {
    fn next_token(&self) -> Option<&str> {
        self.next_token()
    }
}

impl Operation for DescribeTerminationPolicyTypesRequest {
    const ACTION: &'static str = "DescribeTerminationPolicyTypes";
    type Output = DescribeTerminationPolicyTypesResult;
}

impl Operation for DetachInstancesRequest {
    const ACTION: &'static str = "DetachInstances";
    type Output = DetachInstancesResult;
}

impl Operation for DetachLoadBalancerTargetGroupsRequest {
    const ACTION: &'static str = "DetachLoadBalancerTargetGroups";
    type Output = DetachLoadBalancerTargetGroupsResult;
}

impl Operation for DetachLoadBalancersRequest {
    const ACTION: &'static str = "DetachLoadBalancers";
    type Output = DetachLoadBalancersResult;
}

impl Operation for DisableMetricsCollectionRequest {
    const ACTION: &'static str = "DisableMetricsCollection";
    type Output = ();
}

impl Operation for EnableMetricsCollectionRequest {
    const ACTION: &'static str = "EnableMetricsCollection";
    type Output = ();
}

impl Operation for EnterStandbyRequest {
    const ACTION: &'static str = "EnterStandby";
    type Output = EnterStandbyResult;
}

impl Operation for ExecutePolicyRequest {
    const ACTION: &'static str = "ExecutePolicy";
    type Output = ();
}

impl Operation for ExitStandbyRequest {
    const ACTION: &'static str = "ExitStandby";
    type Output = ExitStandbyResult;
}

impl Operation for PutLifecycleHookRequest {
    const ACTION: &'static str = "PutLifecycleHook";
    type Output = PutLifecycleHookResult;
}

impl Operation for PutNotificationConfigurationRequest {
    const ACTION: &'static str = "PutNotificationConfiguration";
    type Output = ();
}

impl Operation for PutScalingPolicyRequest {
    const ACTION: &'static str = "PutScalingPolicy";
    type Output = PutScalingPolicyResult;
}

impl Operation for PutScheduledUpdateGroupActionRequest {
    const ACTION: &'static str = "PutScheduledUpdateGroupAction";
    type Output = ();
}

impl Operation for RecordLifecycleActionHeartbeatRequest {
    const ACTION: &'static str = "RecordLifecycleActionHeartbeat";
    type Output = RecordLifecycleActionHeartbeatResult;
}

impl Operation for ResumeProcessesRequest {
    const ACTION: &'static str = "ResumeProcesses";
    type Output = ();
}

impl Operation for SetDesiredCapacityRequest {
    const ACTION: &'static str = "SetDesiredCapacity";
    type Output = ();
}

impl Operation for SetInstanceHealthRequest {
    const ACTION: &'static str = "SetInstanceHealth";
    type Output = ();
}

impl Operation for SetInstanceProtectionRequest {
    const ACTION: &'static str = "SetInstanceProtection";
    type Output = SetInstanceProtectionResult;
}

impl Operation for SuspendProcessesRequest {
    const ACTION: &'static str = "SuspendProcesses";
    type Output = ();
}

impl Operation for TerminateInstanceInAutoScalingGroupRequest {
    const ACTION: &'static str = "TerminateInstanceInAutoScalingGroup";
    type Output = TerminateInstanceInAutoScalingGroupResult;
}

impl Operation for UpdateAutoScalingGroupRequest {
    const ACTION: &'static str = "UpdateAutoScalingGroup";
    type Output = ();
}

impl AutoScalingClient {
    /// Attaches running EC2 instances to a group, raising its desired capacity.
    pub fn attach_instances(&self, request: &AttachInstancesRequest) -> Result<()> {
        self.send(request)
    }

    /// Attaches target groups to a group.
    pub fn attach_load_balancer_target_groups(
        &self,
        request: &AttachLoadBalancerTargetGroupsRequest,
    ) -> Result<AttachLoadBalancerTargetGroupsResult> {
        self.send(request)
    }

    /// Attaches Classic Load Balancers to a group.
    pub fn attach_load_balancers(
        &self,
        request: &AttachLoadBalancersRequest,
    ) -> Result<AttachLoadBalancersResult> {
        self.send(request)
    }

    /// Deletes several scheduled actions of a group.
    pub fn batch_delete_scheduled_action(
        &self,
        request: &BatchDeleteScheduledActionRequest,
    ) -> Result<BatchDeleteScheduledActionResult> {
        self.send(request)
    }

    /// Creates or updates several scheduled actions of a group.
    pub fn batch_put_scheduled_update_group_action(
        &self,
        request: &BatchPutScheduledUpdateGroupActionRequest,
    ) -> Result<BatchPutScheduledUpdateGroupActionResult> {
        self.send(request)
    }

    /// Ends the wait state of an instance held by a lifecycle hook.
    pub fn complete_lifecycle_action(
        &self,
        request: &CompleteLifecycleActionRequest,
    ) -> Result<CompleteLifecycleActionResult> {
        self.send(request)
    }

    /// Creates a group from a launch configuration, a launch template,
    /// a mixed instances policy or an existing instance.
    pub fn create_auto_scaling_group(&self, request: &CreateAutoScalingGroupRequest) -> Result<()> {
        self.send(request)
    }

    /// Creates a launch configuration.
    pub fn create_launch_configuration(
        &self,
        request: &CreateLaunchConfigurationRequest,
    ) -> Result<()> {
        self.send(request)
    }

    /// Creates or updates tags of groups.
    pub fn create_or_update_tags(&self, request: &CreateOrUpdateTagsRequest) -> Result<()> {
        self.send(request)
    }

    /// Deletes a group.
    pub fn delete_auto_scaling_group(&self, request: &DeleteAutoScalingGroupRequest) -> Result<()> {
        self.send(request)
    }

    /// Deletes a launch configuration that no group uses.
    pub fn delete_launch_configuration(
        &self,
        request: &DeleteLaunchConfigurationRequest,
    ) -> Result<()> {
        self.send(request)
    }

    /// Deletes a lifecycle hook.
    pub fn delete_lifecycle_hook(
        &self,
        request: &DeleteLifecycleHookRequest,
    ) -> Result<DeleteLifecycleHookResult> {
        self.send(request)
    }

    /// Deletes a notification configuration.
    pub fn delete_notification_configuration(
        &self,
        request: &DeleteNotificationConfigurationRequest,
    ) -> Result<()> {
        self.send(request)
    }

    /// Deletes a scaling policy and its alarms.
    pub fn delete_policy(&self, request: &DeletePolicyRequest) -> Result<()> {
        self.send(request)
    }

    /// Deletes a scheduled action.
    pub fn delete_scheduled_action(&self, request: &DeleteScheduledActionRequest) -> Result<()> {
        self.send(request)
    }

    /// Deletes tags of groups.
    pub fn delete_tags(&self, request: &DeleteTagsRequest) -> Result<()> {
        self.send(request)
    }

    /// Describes the group and launch configuration limits of the account.
    pub fn describe_account_limits(
        &self,
        request: &DescribeAccountLimitsRequest,
    ) -> Result<DescribeAccountLimitsResult> {
        self.send(request)
    }

    /// Lists the adjustment types of scaling policies.
    pub fn describe_adjustment_types(
        &self,
        request: &DescribeAdjustmentTypesRequest,
    ) -> Result<DescribeAdjustmentTypesResult> {
        self.send(request)
    }

    /// Describes groups, all of them when no names are given.
    ///
    /// Returns one page; see [`AutoScalingClient::paginate`] for all of them.
    pub fn describe_auto_scaling_groups(
        &self,
        request: &DescribeAutoScalingGroupsRequest,
    ) -> Result<DescribeAutoScalingGroupsResult> {
        self.send(request)
    }

    /// Describes instances, all of them when no IDs are given.
    ///
    /// Returns one page; see [`AutoScalingClient::paginate`] for all of them.
    pub fn describe_auto_scaling_instances(
        &self,
        request: &DescribeAutoScalingInstancesRequest,
    ) -> Result<DescribeAutoScalingInstancesResult> {
        self.send(request)
    }

    /// Lists the notification types SNS topics can subscribe to.
    pub fn describe_auto_scaling_notification_types(
        &self,
        request: &DescribeAutoScalingNotificationTypesRequest,
    ) -> Result<DescribeAutoScalingNotificationTypesResult> {
        self.send(request)
    }

    /// Describes launch configurations, all of them when no names are given.
    ///
    /// Returns one page; see [`AutoScalingClient::paginate`] for all of them.
    pub fn describe_launch_configurations(
        &self,
        request: &DescribeLaunchConfigurationsRequest,
    ) -> Result<DescribeLaunchConfigurationsResult> {
        self.send(request)
    }

    /// Lists the lifecycle transitions hooks can attach to.
    pub fn describe_lifecycle_hook_types(
        &self,
        request: &DescribeLifecycleHookTypesRequest,
    ) -> Result<DescribeLifecycleHookTypesResult> {
        self.send(request)
    }

    /// Describes the lifecycle hooks of a group.
    pub fn describe_lifecycle_hooks(
        &self,
        request: &DescribeLifecycleHooksRequest,
    ) -> Result<DescribeLifecycleHooksResult> {
        self.send(request)
    }

    /// Describes the target groups attached to a group.
    ///
    /// Returns one page; see [`AutoScalingClient::paginate`] for all of them.
    pub fn describe_load_balancer_target_groups(
        &self,
        request: &DescribeLoadBalancerTargetGroupsRequest,
    ) -> Result<DescribeLoadBalancerTargetGroupsResult> {
        self.send(request)
    }

    /// Describes the Classic Load Balancers attached to a group.
    ///
    /// Returns one page; see [`AutoScalingClient::paginate`] for all of them.
    pub fn describe_load_balancers(
        &self,
        request: &DescribeLoadBalancersRequest,
    ) -> Result<DescribeLoadBalancersResult> {
        self.send(request)
    }

    /// Lists the group metrics and granularities that can be collected.
    pub fn describe_metric_collection_types(
        &self,
        request: &DescribeMetricCollectionTypesRequest,
    ) -> Result<DescribeMetricCollectionTypesResult> {
        self.send(request)
    }

    /// Describes the notification configurations of groups.
    ///
    /// Returns one page; see [`AutoScalingClient::paginate`] for all of them.
    pub fn describe_notification_configurations(
        &self,
        request: &DescribeNotificationConfigurationsRequest,
    ) -> Result<DescribeNotificationConfigurationsResult> {
        self.send(request)
    }

    /// Describes scaling policies.
    ///
    /// Returns one page; see [`AutoScalingClient::paginate`] for all of them.
    pub fn describe_policies(
        &self,
        request: &DescribePoliciesRequest,
    ) -> Result<DescribePoliciesResult> {
        self.send(request)
    }

    /// Describes scaling activities, newest first.
    ///
    /// Returns one page; see [`AutoScalingClient::paginate`] for all of them.
    pub fn describe_scaling_activities(
        &self,
        request: &DescribeScalingActivitiesRequest,
    ) -> Result<DescribeScalingActivitiesResult> {
        self.send(request)
    }

    /// Lists the scaling processes that can be suspended and resumed.
    pub fn describe_scaling_process_types(
        &self,
        request: &DescribeScalingProcessTypesRequest,
    ) -> Result<DescribeScalingProcessTypesResult> {
        self.send(request)
    }

    /// Describes scheduled actions that have not run yet.
    ///
    /// Returns one page; see [`AutoScalingClient::paginate`] for all of them.
    pub fn describe_scheduled_actions(
        &self,
        request: &DescribeScheduledActionsRequest,
    ) -> Result<DescribeScheduledActionsResult> {
        self.send(request)
    }

    /// Describes tags, filtered by group, key, value or propagation.
    ///
    /// Returns one page; see [`AutoScalingClient::paginate`] for all of them.
    pub fn describe_tags(&self, request: &DescribeTagsRequest) -> Result<DescribeTagsResult> {
        self.send(request)
    }

    /// Lists the termination policies groups can use.
    pub fn describe_termination_policy_types(
        &self,
        request: &DescribeTerminationPolicyTypesRequest,
    ) -> Result<DescribeTerminationPolicyTypesResult> {
        self.send(request)
    }

    /// Removes instances from a group.
    pub fn detach_instances(
        &self,
        request: &DetachInstancesRequest,
    ) -> Result<DetachInstancesResult> {
        self.send(request)
    }

    /// Detaches target groups from a group.
    pub fn detach_load_balancer_target_groups(
        &self,
        request: &DetachLoadBalancerTargetGroupsRequest,
    ) -> Result<DetachLoadBalancerTargetGroupsResult> {
        self.send(request)
    }

    /// Detaches Classic Load Balancers from a group.
    pub fn detach_load_balancers(
        &self,
        request: &DetachLoadBalancersRequest,
    ) -> Result<DetachLoadBalancersResult> {
        self.send(request)
    }

    /// Stops collecting group metrics.
    pub fn disable_metrics_collection(
        &self,
        request: &DisableMetricsCollectionRequest,
    ) -> Result<()> {
        self.send(request)
    }

    /// Starts collecting group metrics.
    pub fn enable_metrics_collection(
        &self,
        request: &EnableMetricsCollectionRequest,
    ) -> Result<()> {
        self.send(request)
    }

    /// Moves instances into `Standby`.
    pub fn enter_standby(&self, request: &EnterStandbyRequest) -> Result<EnterStandbyResult> {
        self.send(request)
    }

    /// Runs a scaling policy once.
    pub fn execute_policy(&self, request: &ExecutePolicyRequest) -> Result<()> {
        self.send(request)
    }

    /// Moves instances out of `Standby`.
    pub fn exit_standby(&self, request: &ExitStandbyRequest) -> Result<ExitStandbyResult> {
        self.send(request)
    }

    /// Creates or updates a lifecycle hook.
    pub fn put_lifecycle_hook(
        &self,
        request: &PutLifecycleHookRequest,
    ) -> Result<PutLifecycleHookResult> {
        self.send(request)
    }

    /// Subscribes an SNS topic to events of a group.
    pub fn put_notification_configuration(
        &self,
        request: &PutNotificationConfigurationRequest,
    ) -> Result<()> {
        self.send(request)
    }

    /// Creates or updates a scaling policy.
    pub fn put_scaling_policy(
        &self,
        request: &PutScalingPolicyRequest,
    ) -> Result<PutScalingPolicyResult> {
        self.send(request)
    }

    /// Creates or updates a scheduled action.
    pub fn put_scheduled_update_group_action(
        &self,
        request: &PutScheduledUpdateGroupActionRequest,
    ) -> Result<()> {
        self.send(request)
    }

    /// Extends the wait state of an instance held by a lifecycle hook.
    pub fn record_lifecycle_action_heartbeat(
        &self,
        request: &RecordLifecycleActionHeartbeatRequest,
    ) -> Result<RecordLifecycleActionHeartbeatResult> {
        self.send(request)
    }

    /// Resumes suspended scaling processes.
    pub fn resume_processes(&self, request: &ResumeProcessesRequest) -> Result<()> {
        self.send(request)
    }

    /// Sets the desired capacity of a group.
    pub fn set_desired_capacity(&self, request: &SetDesiredCapacityRequest) -> Result<()> {
        self.send(request)
    }

    /// Sets the health status of an instance.
    pub fn set_instance_health(&self, request: &SetInstanceHealthRequest) -> Result<()> {
        self.send(request)
    }

    /// Changes scale-in protection of instances.
    pub fn set_instance_protection(
        &self,
        request: &SetInstanceProtectionRequest,
    ) -> Result<SetInstanceProtectionResult> {
        self.send(request)
    }

    /// Suspends scaling processes of a group.
    pub fn suspend_processes(&self, request: &SuspendProcessesRequest) -> Result<()> {
        self.send(request)
    }

    /// Terminates an instance of a group.
    pub fn terminate_instance_in_auto_scaling_group(
        &self,
        request: &TerminateInstanceInAutoScalingGroupRequest,
    ) -> Result<TerminateInstanceInAutoScalingGroupResult> {
        self.send(request)
    }

    /// Updates the configuration of a group.
    pub fn update_auto_scaling_group(&self, request: &UpdateAutoScalingGroupRequest) -> Result<()> {
        self.send(request)
    }
}
