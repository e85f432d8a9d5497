use super::{hash_combine, HashCode, ModelFormatter};
use crate::error::Result;
use crate::query::{QueryWriter, ToQuery};
use crate::xml::FromXml;
use roxmltree::Node;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Input of `DescribeAccountLimits`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct DescribeAccountLimitsRequest {}

impl fmt::Display for DescribeAccountLimitsRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ModelFormatter::new(f).finish()
    }
}

impl HashCode for DescribeAccountLimitsRequest {
    fn hash_code(&self) -> i32 {
        hash_combine(&[])
    }
}

impl ToQuery for DescribeAccountLimitsRequest {
    fn write_query(&self, _writer: &mut QueryWriter, _key: &str) {}
}

/// Output of `DescribeAccountLimits`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct DescribeAccountLimitsResult {
    #[serde(rename = "MaxNumberOfAutoScalingGroups", skip_serializing_if = "Option::is_none")]
    max_number_of_auto_scaling_groups: Option<i32>,
    #[serde(rename = "MaxNumberOfLaunchConfigurations", skip_serializing_if = "Option::is_none")]
    max_number_of_launch_configurations: Option<i32>,
    #[serde(rename = "NumberOfAutoScalingGroups", skip_serializing_if = "Option::is_none")]
    number_of_auto_scaling_groups: Option<i32>,
    #[serde(rename = "NumberOfLaunchConfigurations", skip_serializing_if = "Option::is_none")]
    number_of_launch_configurations: Option<i32>,
}

impl DescribeAccountLimitsResult {
    pub fn max_number_of_auto_scaling_groups(&self) -> Option<i32> {
        self.max_number_of_auto_scaling_groups
    }

    pub fn set_max_number_of_auto_scaling_groups(
        &mut self,
        max_number_of_auto_scaling_groups: Option<i32>,
    ) {
        self.max_number_of_auto_scaling_groups = max_number_of_auto_scaling_groups;
    }

    pub fn with_max_number_of_auto_scaling_groups(
        mut self,
        max_number_of_auto_scaling_groups: i32,
    ) -> Self {
        self.max_number_of_auto_scaling_groups = Some(max_number_of_auto_scaling_groups);
        self
    }

    pub fn max_number_of_launch_configurations(&self) -> Option<i32> {
        self.max_number_of_launch_configurations
    }

    pub fn set_max_number_of_launch_configurations(
        &mut self,
        max_number_of_launch_configurations: Option<i32>,
    ) {
        self.max_number_of_launch_configurations = max_number_of_launch_configurations;
    }

    pub fn with_max_number_of_launch_configurations(
        mut self,
        max_number_of_launch_configurations: i32,
    ) -> Self {
        self.max_number_of_launch_configurations = Some(max_number_of_launch_configurations);
        self
    }

    pub fn number_of_auto_scaling_groups(&self) -> Option<i32> {
        self.number_of_auto_scaling_groups
    }

    pub fn set_number_of_auto_scaling_groups(
        &mut self,
        number_of_auto_scaling_groups: Option<i32>,
    ) {
        self.number_of_auto_scaling_groups = number_of_auto_scaling_groups;
    }

    pub fn with_number_of_auto_scaling_groups(
        mut self,
        number_of_auto_scaling_groups: i32,
    ) -> Self {
        self.number_of_auto_scaling_groups = Some(number_of_auto_scaling_groups);
        self
    }

    pub fn number_of_launch_configurations(&self) -> Option<i32> {
        self.number_of_launch_configurations
    }

    pub fn set_number_of_launch_configurations(
        &mut self,
        number_of_launch_configurations: Option<i32>,
    ) {
        self.number_of_launch_configurations = number_of_launch_configurations;
    }

    pub fn with_number_of_launch_configurations(
        mut self,
        number_of_launch_configurations: i32,
    ) -> Self {
        self.number_of_launch_configurations = Some(number_of_launch_configurations);
        self
    }
}

impl fmt::Display for DescribeAccountLimitsResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ModelFormatter::new(f)
            .field("MaxNumberOfAutoScalingGroups", &self.max_number_of_auto_scaling_groups)
            .field("MaxNumberOfLaunchConfigurations", &self.max_number_of_launch_configurations)
            .field("NumberOfAutoScalingGroups", &self.number_of_auto_scaling_groups)
            .field("NumberOfLaunchConfigurations", &self.number_of_launch_configurations)
            .finish()
    }
}

impl HashCode for DescribeAccountLimitsResult {
    fn hash_code(&self) -> i32 {
        hash_combine(&[
            self.max_number_of_auto_scaling_groups.hash_code(),
            self.max_number_of_launch_configurations.hash_code(),
            self.number_of_auto_scaling_groups.hash_code(),
            self.number_of_launch_configurations.hash_code(),
        ])
    }
}

impl FromXml for DescribeAccountLimitsResult {
    fn from_xml(node: Node) -> Result<Self> {
        let mut out = DescribeAccountLimitsResult::default();
        for child in node.children().filter(Node::is_element) {
            match child.tag_name().name() {
                "MaxNumberOfAutoScalingGroups" => {
                    out.max_number_of_auto_scaling_groups = Some(FromXml::from_xml(child)?);
                }
                "MaxNumberOfLaunchConfigurations" => {
                    out.max_number_of_launch_configurations = Some(FromXml::from_xml(child)?);
                }
                "NumberOfAutoScalingGroups" => {
                    out.number_of_auto_scaling_groups = Some(FromXml::from_xml(child)?);
                }
                "NumberOfLaunchConfigurations" => {
                    out.number_of_launch_configurations = Some(FromXml::from_xml(child)?);
                }
                _ => {}
            }
        }
        Ok(out)
    }
}
