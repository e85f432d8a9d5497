//! Group metrics collection.

use super::{hash_combine, HashCode, ModelFormatter};
use crate::error::Result;
use crate::query::{QueryWriter, ToQuery};
use crate::xml::{self, FromXml};
use roxmltree::Node;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricCollectionType {
    #[serde(rename = "Metric", skip_serializing_if = "Option::is_none")]
    metric: Option<String>,
}

impl MetricCollectionType {
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
}

impl fmt::Display for MetricCollectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ModelFormatter::new(f)
            .field("Metric", &self.metric)
            .finish()
    }
}

impl HashCode for MetricCollectionType {
    fn hash_code(&self) -> i32 {
        hash_combine(&[
            self.metric.hash_code(),
        ])
    }
}

impl ToQuery for MetricCollectionType {
    fn write_query(&self, writer: &mut QueryWriter, key: &str) {
        writer.field(key, "Metric", &self.metric);
    }
}

impl FromXml for MetricCollectionType {
    fn from_xml(node: Node) -> Result<Self> {
        let mut out = MetricCollectionType::default();
        for child in node.children().filter(Node::is_element) {
            match child.tag_name().name() {
                "Metric" => out.metric = Some(FromXml::from_xml(child)?),
                _ => {}
            }
        }
        Ok(out)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricGranularityType {
    #[serde(rename = "Granularity", skip_serializing_if = "Option::is_none")]
    granularity: Option<String>,
}

impl MetricGranularityType {
    /// Always `1Minute`.
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

impl fmt::Display for MetricGranularityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ModelFormatter::new(f)
            .field("Granularity", &self.granularity)
            .finish()
    }
}

impl HashCode for MetricGranularityType {
    fn hash_code(&self) -> i32 {
        hash_combine(&[
            self.granularity.hash_code(),
        ])
    }
}

impl ToQuery for MetricGranularityType {
    fn write_query(&self, writer: &mut QueryWriter, key: &str) {
        writer.field(key, "Granularity", &self.granularity);
    }
}

impl FromXml for MetricGranularityType {
    fn from_xml(node: Node) -> Result<Self> {
        let mut out = MetricGranularityType::default();
        for child in node.children().filter(Node::is_element) {
            match child.tag_name().name() {
                "Granularity" => out.granularity = Some(FromXml::from_xml(child)?),
                _ => {}
            }
        }
        Ok(out)
    }
}

/// Input of `DescribeMetricCollectionTypes`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct DescribeMetricCollectionTypesRequest {}

impl fmt::Display for DescribeMetricCollectionTypesRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ModelFormatter::new(f).finish()
    }
}

impl HashCode for DescribeMetricCollectionTypesRequest {
    fn hash_code(&self) -> i32 {
        hash_combine(&[])
    }
}

impl ToQuery for DescribeMetricCollectionTypesRequest {
    fn write_query(&self, _writer: &mut QueryWriter, _key: &str) {}
}

/// Output of `DescribeMetricCollectionTypes`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct DescribeMetricCollectionTypesResult {
    #[serde(rename = "Metrics", skip_serializing_if = "Option::is_none")]
    metrics: Option<Vec<MetricCollectionType>>,
    #[serde(rename = "Granularities", skip_serializing_if = "Option::is_none")]
    granularities: Option<Vec<MetricGranularityType>>,
}

impl Default for DescribeMetricCollectionTypesResult {
    fn default() -> Self {
        DescribeMetricCollectionTypesResult {
            metrics: Some(Vec::new()),
            granularities: Some(Vec::new()),
        }
    }
}

impl DescribeMetricCollectionTypesResult {
    pub fn metrics(&self) -> Option<&[MetricCollectionType]> {
        self.metrics.as_deref()
    }

    pub fn set_metrics(&mut self, metrics: Option<Vec<MetricCollectionType>>) {
        self.metrics = metrics;
    }

    pub fn with_metrics<I>(mut self, metrics: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<MetricCollectionType>,
    {
        self.metrics.get_or_insert_with(Vec::new).extend(metrics.into_iter().map(Into::into));
        self
    }

    pub fn granularities(&self) -> Option<&[MetricGranularityType]> {
        self.granularities.as_deref()
    }

    pub fn set_granularities(&mut self, granularities: Option<Vec<MetricGranularityType>>) {
        self.granularities = granularities;
    }

    pub fn with_granularities<I>(mut self, granularities: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<MetricGranularityType>,
    {
        self.granularities
            .get_or_insert_with(Vec::new)
            .extend(granularities.into_iter().map(Into::into));
        self
    }
}

impl fmt::Display for DescribeMetricCollectionTypesResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ModelFormatter::new(f)
            .list("Metrics", &self.metrics)
            .list("Granularities", &self.granularities)
            .finish()
    }
}

impl HashCode for DescribeMetricCollectionTypesResult {
    fn hash_code(&self) -> i32 {
        hash_combine(&[
            self.metrics.hash_code(),
            self.granularities.hash_code(),
        ])
    }
}

impl FromXml for DescribeMetricCollectionTypesResult {
    fn from_xml(node: Node) -> Result<Self> {
        let mut out = DescribeMetricCollectionTypesResult::default();
        for child in node.children().filter(Node::is_element) {
            match child.tag_name().name() {
                "Metrics" => out.metrics = Some(xml::list(child)?),
                "Granularities" => out.granularities = Some(xml::list(child)?),
                _ => {}
            }
        }
        Ok(out)
    }
}

/// Input of `DisableMetricsCollection`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct DisableMetricsCollectionRequest {
    #[serde(rename = "AutoScalingGroupName", skip_serializing_if = "Option::is_none")]
    auto_scaling_group_name: Option<String>,
    #[serde(rename = "Metrics", skip_serializing_if = "Option::is_none")]
    metrics: Option<Vec<String>>,
}

impl Default for DisableMetricsCollectionRequest {
    fn default() -> Self {
        DisableMetricsCollectionRequest {
            auto_scaling_group_name: None,
            metrics: Some(Vec::new()),
        }
    }
}

impl DisableMetricsCollectionRequest {
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

    /// All metrics when empty.
    pub fn metrics(&self) -> Option<&[String]> {
        self.metrics.as_deref()
    }

    pub fn set_metrics(&mut self, metrics: Option<Vec<String>>) {
        self.metrics = metrics;
    }

    pub fn with_metrics<I>(mut self, metrics: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.metrics.get_or_insert_with(Vec::new).extend(metrics.into_iter().map(Into::into));
        self
    }
}

impl fmt::Display for DisableMetricsCollectionRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ModelFormatter::new(f)
            .field("AutoScalingGroupName", &self.auto_scaling_group_name)
            .list("Metrics", &self.metrics)
            .finish()
    }
}

impl HashCode for DisableMetricsCollectionRequest {
    fn hash_code(&self) -> i32 {
        hash_combine(&[
            self.auto_scaling_group_name.hash_code(),
            self.metrics.hash_code(),
        ])
    }
}

impl ToQuery for DisableMetricsCollectionRequest {
    fn write_query(&self, writer: &mut QueryWriter, key: &str) {
        writer.field(key, "AutoScalingGroupName", &self.auto_scaling_group_name);
        writer.list(key, "Metrics", &self.metrics);
    }
}

/// Input of `EnableMetricsCollection`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct EnableMetricsCollectionRequest {
    #[serde(rename = "AutoScalingGroupName", skip_serializing_if = "Option::is_none")]
    auto_scaling_group_name: Option<String>,
    #[serde(rename = "Metrics", skip_serializing_if = "Option::is_none")]
    metrics: Option<Vec<String>>,
    #[serde(rename = "Granularity", skip_serializing_if = "Option::is_none")]
    granularity: Option<String>,
}

impl Default for EnableMetricsCollectionRequest {
    fn default() -> Self {
        EnableMetricsCollectionRequest {
            auto_scaling_group_name: None,
            metrics: Some(Vec::new()),
            granularity: None,
        }
    }
}

impl EnableMetricsCollectionRequest {
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

    /// All metrics when empty.
    pub fn metrics(&self) -> Option<&[String]> {
        self.metrics.as_deref()
    }

    pub fn set_metrics(&mut self, metrics: Option<Vec<String>>) {
        self.metrics = metrics;
    }

    pub fn with_metrics<I>(mut self, metrics: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.metrics.get_or_insert_with(Vec::new).extend(metrics.into_iter().map(Into::into));
        self
    }

    /// Only `1Minute`.
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

impl fmt::Display for EnableMetricsCollectionRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ModelFormatter::new(f)
            .field("AutoScalingGroupName", &self.auto_scaling_group_name)
            .list("Metrics", &self.metrics)
            .field("Granularity", &self.granularity)
            .finish()
    }
}

impl HashCode for EnableMetricsCollectionRequest {
    fn hash_code(&self) -> i32 {
        hash_combine(&[
            self.auto_scaling_group_name.hash_code(),
            self.metrics.hash_code(),
            self.granularity.hash_code(),
        ])
    }
}

impl ToQuery for EnableMetricsCollectionRequest {
    fn write_query(&self, writer: &mut QueryWriter, key: &str) {
        writer.field(key, "AutoScalingGroupName", &self.auto_scaling_group_name);
        writer.list(key, "Metrics", &self.metrics);
        writer.field(key, "Granularity", &self.granularity);
    }
}
