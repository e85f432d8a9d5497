//! Suspending and resuming scaling processes, and the process and termination policy catalogs.

use super::{hash_combine, HashCode, ModelFormatter};
use crate::error::Result;
use crate::query::{QueryWriter, ToQuery};
use crate::xml::{self, FromXml};
use roxmltree::Node;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessType {
    #[serde(rename = "ProcessName", skip_serializing_if = "Option::is_none")]
    process_name: Option<String>,
}

impl ProcessType {
    /// `Launch`, `Terminate`, `HealthCheck`, `ReplaceUnhealthy`, `AZRebalance`,
    /// `AlarmNotification`, `ScheduledActions` or `AddToLoadBalancer`.
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
}

impl fmt::Display for ProcessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ModelFormatter::new(f)
            .field("ProcessName", &self.process_name)
            .finish()
    }
}

impl HashCode for ProcessType {
    fn hash_code(&self) -> i32 {
        hash_combine(&[
            self.process_name.hash_code(),
        ])
    }
}

impl ToQuery for ProcessType {
    fn write_query(&self, writer: &mut QueryWriter, key: &str) {
        writer.field(key, "ProcessName", &self.process_name);
    }
}

impl FromXml for ProcessType {
    fn from_xml(node: Node) -> Result<Self> {
        let mut out = ProcessType::default();
        for child in node.children().filter(Node::is_element) {
            match child.tag_name().name() {
                "ProcessName" => out.process_name = Some(FromXml::from_xml(child)?),
                _ => {}
            }
        }
        Ok(out)
    }
}

/// Input of `DescribeScalingProcessTypes`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct DescribeScalingProcessTypesRequest {}

impl fmt::Display for DescribeScalingProcessTypesRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ModelFormatter::new(f).finish()
    }
}

impl HashCode for DescribeScalingProcessTypesRequest {
    fn hash_code(&self) -> i32 {
        hash_combine(&[])
    }
}

impl ToQuery for DescribeScalingProcessTypesRequest {
    fn write_query(&self, _writer: &mut QueryWriter, _key: &str) {}
}

/// Output of `DescribeScalingProcessTypes`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct DescribeScalingProcessTypesResult {
    #[serde(rename = "Processes", skip_serializing_if = "Option::is_none")]
    processes: Option<Vec<ProcessType>>,
}

impl Default for DescribeScalingProcessTypesResult {
    fn default() -> Self {
        DescribeScalingProcessTypesResult {
            processes: Some(Vec::new()),
        }
    }
}

impl DescribeScalingProcessTypesResult {
    pub fn processes(&self) -> Option<&[ProcessType]> {
        self.processes.as_deref()
    }

    pub fn set_processes(&mut self, processes: Option<Vec<ProcessType>>) {
        self.processes = processes;
    }

    pub fn with_processes<I>(mut self, processes: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<ProcessType>,
    {
        self.processes.get_or_insert_with(Vec::new).extend(processes.into_iter().map(Into::into));
        self
    }
}

impl fmt::Display for DescribeScalingProcessTypesResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ModelFormatter::new(f)
            .list("Processes", &self.processes)
            .finish()
    }
}

impl HashCode for DescribeScalingProcessTypesResult {
    fn hash_code(&self) -> i32 {
        hash_combine(&[
            self.processes.hash_code(),
        ])
    }
}

impl FromXml for DescribeScalingProcessTypesResult {
    fn from_xml(node: Node) -> Result<Self> {
        let mut out = DescribeScalingProcessTypesResult::default();
        for child in node.children().filter(Node::is_element) {
            match child.tag_name().name() {
                "Processes" => out.processes = Some(xml::list(child)?),
                _ => {}
            }
        }
        Ok(out)
    }
}

/// Input of `DescribeTerminationPolicyTypes`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct DescribeTerminationPolicyTypesRequest {}

impl fmt::Display for DescribeTerminationPolicyTypesRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ModelFormatter::new(f).finish()
    }
}

impl HashCode for DescribeTerminationPolicyTypesRequest {
    fn hash_code(&self) -> i32 {
        hash_combine(&[])
    }
}

impl ToQuery for DescribeTerminationPolicyTypesRequest {
    fn write_query(&self, _writer: &mut QueryWriter, _key: &str) {}
}

/// Output of `DescribeTerminationPolicyTypes`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct DescribeTerminationPolicyTypesResult {
    #[serde(rename = "TerminationPolicyTypes", skip_serializing_if = "Option::is_none")]
    termination_policy_types: Option<Vec<String>>,
}

impl Default for DescribeTerminationPolicyTypesResult {
    fn default() -> Self {
        DescribeTerminationPolicyTypesResult {
            termination_policy_types: Some(Vec::new()),
        }
    }
}

impl DescribeTerminationPolicyTypesResult {
    pub fn termination_policy_types(&self) -> Option<&[String]> {
        self.termination_policy_types.as_deref()
    }

    pub fn set_termination_policy_types(&mut self, termination_policy_types: Option<Vec<String>>) {
        self.termination_policy_types = termination_policy_types;
    }

    pub fn with_termination_policy_types<I>(mut self, termination_policy_types: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.termination_policy_types
            .get_or_insert_with(Vec::new)
            .extend(termination_policy_types.into_iter().map(Into::into));
        self
    }
}

impl fmt::Display for DescribeTerminationPolicyTypesResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ModelFormatter::new(f)
            .list("TerminationPolicyTypes", &self.termination_policy_types)
            .finish()
    }
}

impl HashCode for DescribeTerminationPolicyTypesResult {
    fn hash_code(&self) -> i32 {
        hash_combine(&[
            self.termination_policy_types.hash_code(),
        ])
    }
}

impl FromXml for DescribeTerminationPolicyTypesResult {
    fn from_xml(node: Node) -> Result<Self> {
        let mut out = DescribeTerminationPolicyTypesResult::default();
        for child in node.children().filter(Node::is_element) {
            match child.tag_name().name() {
                "TerminationPolicyTypes" => out.termination_policy_types = Some(xml::list(child)?),
                _ => {}
            }
        }
        Ok(out)
    }
}

/// Input of `ResumeProcesses`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeProcessesRequest {
    #[serde(rename = "AutoScalingGroupName", skip_serializing_if = "Option::is_none")]
    auto_scaling_group_name: Option<String>,
    #[serde(rename = "ScalingProcesses", skip_serializing_if = "Option::is_none")]
    scaling_processes: Option<Vec<String>>,
}

impl Default for ResumeProcessesRequest {
    fn default() -> Self {
        ResumeProcessesRequest {
            auto_scaling_group_name: None,
            scaling_processes: Some(Vec::new()),
        }
    }
}

impl ResumeProcessesRequest {
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

    /// All processes when empty.
    pub fn scaling_processes(&self) -> Option<&[String]> {
        self.scaling_processes.as_deref()
    }

    pub fn set_scaling_processes(&mut self, scaling_processes: Option<Vec<String>>) {
        self.scaling_processes = scaling_processes;
    }

    pub fn with_scaling_processes<I>(mut self, scaling_processes: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.scaling_processes
            .get_or_insert_with(Vec::new)
            .extend(scaling_processes.into_iter().map(Into::into));
        self
    }
}

impl fmt::Display for ResumeProcessesRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ModelFormatter::new(f)
            .field("AutoScalingGroupName", &self.auto_scaling_group_name)
            .list("ScalingProcesses", &self.scaling_processes)
            .finish()
    }
}

impl HashCode for ResumeProcessesRequest {
    fn hash_code(&self) -> i32 {
        hash_combine(&[
            self.auto_scaling_group_name.hash_code(),
            self.scaling_processes.hash_code(),
        ])
    }
}

impl ToQuery for ResumeProcessesRequest {
    fn write_query(&self, writer: &mut QueryWriter, key: &str) {
        writer.field(key, "AutoScalingGroupName", &self.auto_scaling_group_name);
        writer.list(key, "ScalingProcesses", &self.scaling_processes);
    }
}

/// Input of `SuspendProcesses`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct SuspendProcessesRequest {
    #[serde(rename = "AutoScalingGroupName", skip_serializing_if = "Option::is_none")]
    auto_scaling_group_name: Option<String>,
    #[serde(rename = "ScalingProcesses", skip_serializing_if = "Option::is_none")]
    scaling_processes: Option<Vec<String>>,
}

impl Default for SuspendProcessesRequest {
    fn default() -> Self {
        SuspendProcessesRequest {
            auto_scaling_group_name: None,
            scaling_processes: Some(Vec::new()),
        }
    }
}

impl SuspendProcessesRequest {
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

    /// All processes when empty.
    pub fn scaling_processes(&self) -> Option<&[String]> {
        self.scaling_processes.as_deref()
    }

    pub fn set_scaling_processes(&mut self, scaling_processes: Option<Vec<String>>) {
        self.scaling_processes = scaling_processes;
    }

    pub fn with_scaling_processes<I>(mut self, scaling_processes: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.scaling_processes
            .get_or_insert_with(Vec::new)
            .extend(scaling_processes.into_iter().map(Into::into));
        self
    }
}

impl fmt::Display for SuspendProcessesRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ModelFormatter::new(f)
            .field("AutoScalingGroupName", &self.auto_scaling_group_name)
            .list("ScalingProcesses", &self.scaling_processes)
            .finish()
    }
}

impl HashCode for SuspendProcessesRequest {
    fn hash_code(&self) -> i32 {
        hash_combine(&[
            self.auto_scaling_group_name.hash_code(),
            self.scaling_processes.hash_code(),
        ])
    }
}

impl ToQuery for SuspendProcessesRequest {
    fn write_query(&self, writer: &mut QueryWriter, key: &str) {
        writer.field(key, "AutoScalingGroupName", &self.auto_scaling_group_name);
        writer.list(key, "ScalingProcesses", &self.scaling_processes);
    }
}
