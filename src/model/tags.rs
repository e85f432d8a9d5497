use super::{hash_combine, HashCode, ModelFormatter};
use crate::error::Result;
use crate::query::{QueryWriter, ToQuery};
use crate::xml::{self, FromXml};
use roxmltree::Node;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A tag to create, update or delete.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Tag {
    #[serde(rename = "ResourceId", skip_serializing_if = "Option::is_none")]
    resource_id: Option<String>,
    #[serde(rename = "ResourceType", skip_serializing_if = "Option::is_none")]
    resource_type: Option<String>,
    #[serde(rename = "Key", skip_serializing_if = "Option::is_none")]
    key: Option<String>,
    #[serde(rename = "Value", skip_serializing_if = "Option::is_none")]
    value: Option<String>,
    #[serde(rename = "PropagateAtLaunch", skip_serializing_if = "Option::is_none")]
    propagate_at_launch: Option<bool>,
}

impl Tag {
    /// The group name.
    pub fn resource_id(&self) -> Option<&str> {
        self.resource_id.as_deref()
    }

    pub fn set_resource_id(&mut self, resource_id: Option<String>) {
        self.resource_id = resource_id;
    }

    pub fn with_resource_id(mut self, resource_id: impl Into<String>) -> Self {
        self.resource_id = Some(resource_id.into());
        self
    }

    /// Always `auto-scaling-group`.
    pub fn resource_type(&self) -> Option<&str> {
        self.resource_type.as_deref()
    }

    pub fn set_resource_type(&mut self, resource_type: Option<String>) {
        self.resource_type = resource_type;
    }

    pub fn with_resource_type(mut self, resource_type: impl Into<String>) -> Self {
        self.resource_type = Some(resource_type.into());
        self
    }

    /// Length 1-128.
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    pub fn set_key(&mut self, key: Option<String>) {
        self.key = key;
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Length 0-256.
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

    pub fn propagate_at_launch(&self) -> Option<bool> {
        self.propagate_at_launch
    }

    pub fn set_propagate_at_launch(&mut self, propagate_at_launch: Option<bool>) {
        self.propagate_at_launch = propagate_at_launch;
    }

    pub fn with_propagate_at_launch(mut self, propagate_at_launch: bool) -> Self {
        self.propagate_at_launch = Some(propagate_at_launch);
        self
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ModelFormatter::new(f)
            .field("ResourceId", &self.resource_id)
            .field("ResourceType", &self.resource_type)
            .field("Key", &self.key)
            .field("Value", &self.value)
            .field("PropagateAtLaunch", &self.propagate_at_launch)
            .finish()
    }
}

impl HashCode for Tag {
    fn hash_code(&self) -> i32 {
        hash_combine(&[
            self.resource_id.hash_code(),
            self.resource_type.hash_code(),
            self.key.hash_code(),
            self.value.hash_code(),
            self.propagate_at_launch.hash_code(),
        ])
    }
}

impl ToQuery for Tag {
    fn write_query(&self, writer: &mut QueryWriter, key: &str) {
        writer.field(key, "ResourceId", &self.resource_id);
        writer.field(key, "ResourceType", &self.resource_type);
        writer.field(key, "Key", &self.key);
        writer.field(key, "Value", &self.value);
        writer.field(key, "PropagateAtLaunch", &self.propagate_at_launch);
    }
}

impl FromXml for Tag {
    fn from_xml(node: Node) -> Result<Self> {
        let mut out = Tag::default();
        for child in node.children().filter(Node::is_element) {
            match child.tag_name().name() {
                "ResourceId" => out.resource_id = Some(FromXml::from_xml(child)?),
                "ResourceType" => out.resource_type = Some(FromXml::from_xml(child)?),
                "Key" => out.key = Some(FromXml::from_xml(child)?),
                "Value" => out.value = Some(FromXml::from_xml(child)?),
                "PropagateAtLaunch" => out.propagate_at_launch = Some(FromXml::from_xml(child)?),
                _ => {}
            }
        }
        Ok(out)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct TagDescription {
    #[serde(rename = "ResourceId", skip_serializing_if = "Option::is_none")]
    resource_id: Option<String>,
    #[serde(rename = "ResourceType", skip_serializing_if = "Option::is_none")]
    resource_type: Option<String>,
    #[serde(rename = "Key", skip_serializing_if = "Option::is_none")]
    key: Option<String>,
    #[serde(rename = "Value", skip_serializing_if = "Option::is_none")]
    value: Option<String>,
    #[serde(rename = "PropagateAtLaunch", skip_serializing_if = "Option::is_none")]
    propagate_at_launch: Option<bool>,
}

impl TagDescription {
    pub fn resource_id(&self) -> Option<&str> {
        self.resource_id.as_deref()
    }

    pub fn set_resource_id(&mut self, resource_id: Option<String>) {
        self.resource_id = resource_id;
    }

    pub fn with_resource_id(mut self, resource_id: impl Into<String>) -> Self {
        self.resource_id = Some(resource_id.into());
        self
    }

    pub fn resource_type(&self) -> Option<&str> {
        self.resource_type.as_deref()
    }

    pub fn set_resource_type(&mut self, resource_type: Option<String>) {
        self.resource_type = resource_type;
    }

    pub fn with_resource_type(mut self, resource_type: impl Into<String>) -> Self {
        self.resource_type = Some(resource_type.into());
        self
    }

    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    pub fn set_key(&mut self, key: Option<String>) {
        self.key = key;
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
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

    pub fn propagate_at_launch(&self) -> Option<bool> {
        self.propagate_at_launch
    }

    pub fn set_propagate_at_launch(&mut self, propagate_at_launch: Option<bool>) {
        self.propagate_at_launch = propagate_at_launch;
    }

    pub fn with_propagate_at_launch(mut self, propagate_at_launch: bool) -> Self {
        self.propagate_at_launch = Some(propagate_at_launch);
        self
    }
}

impl fmt::Display for TagDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ModelFormatter::new(f)
            .field("ResourceId", &self.resource_id)
            .field("ResourceType", &self.resource_type)
            .field("Key", &self.key)
            .field("Value", &self.value)
            .field("PropagateAtLaunch", &self.propagate_at_launch)
            .finish()
    }
}

impl HashCode for TagDescription {
    fn hash_code(&self) -> i32 {
        hash_combine(&[
            self.resource_id.hash_code(),
            self.resource_type.hash_code(),
            self.key.hash_code(),
            self.value.hash_code(),
            self.propagate_at_launch.hash_code(),
        ])
    }
}

impl ToQuery for TagDescription {
    fn write_query(&self, writer: &mut QueryWriter, key: &str) {
        writer.field(key, "ResourceId", &self.resource_id);
        writer.field(key, "ResourceType", &self.resource_type);
        writer.field(key, "Key", &self.key);
        writer.field(key, "Value", &self.value);
        writer.field(key, "PropagateAtLaunch", &self.propagate_at_launch);
    }
}

impl FromXml for TagDescription {
    fn from_xml(node: Node) -> Result<Self> {
        let mut out = TagDescription::default();
        for child in node.children().filter(Node::is_element) {
            match child.tag_name().name() {
                "ResourceId" => out.resource_id = Some(FromXml::from_xml(child)?),
                "ResourceType" => out.resource_type = Some(FromXml::from_xml(child)?),
                "Key" => out.key = Some(FromXml::from_xml(child)?),
                "Value" => out.value = Some(FromXml::from_xml(child)?),
                "PropagateAtLaunch" => out.propagate_at_launch = Some(FromXml::from_xml(child)?),
                _ => {}
            }
        }
        Ok(out)
    }
}

/// Narrows down `DescribeTags`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Filter {
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(rename = "Values", skip_serializing_if = "Option::is_none")]
    values: Option<Vec<String>>,
}

impl Default for Filter {
    fn default() -> Self {
        Filter {
            name: None,
            values: Some(Vec::new()),
        }
    }
}

impl Filter {
    /// `auto-scaling-group`, `key`, `value` or `propagate-at-launch`.
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

    pub fn values(&self) -> Option<&[String]> {
        self.values.as_deref()
    }

    pub fn set_values(&mut self, values: Option<Vec<String>>) {
        self.values = values;
    }

    pub fn with_values<I>(mut self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.values.get_or_insert_with(Vec::new).extend(values.into_iter().map(Into::into));
        self
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ModelFormatter::new(f)
            .field("Name", &self.name)
            .list("Values", &self.values)
            .finish()
    }
}

impl HashCode for Filter {
    fn hash_code(&self) -> i32 {
        hash_combine(&[
            self.name.hash_code(),
            self.values.hash_code(),
        ])
    }
}

impl ToQuery for Filter {
    fn write_query(&self, writer: &mut QueryWriter, key: &str) {
        writer.field(key, "Name", &self.name);
        writer.list(key, "Values", &self.values);
    }
}

impl FromXml for Filter {
    fn from_xml(node: Node) -> Result<Self> {
        let mut out = Filter::default();
        for child in node.children().filter(Node::is_element) {
            match child.tag_name().name() {
                "Name" => out.name = Some(FromXml::from_xml(child)?),
                "Values" => out.values = Some(xml::list(child)?),
                _ => {}
            }
        }
        Ok(out)
    }
}

/// Input of `CreateOrUpdateTags`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateOrUpdateTagsRequest {
    #[serde(rename = "Tags", skip_serializing_if = "Option::is_none")]
    tags: Option<Vec<Tag>>,
}

impl Default for CreateOrUpdateTagsRequest {
    fn default() -> Self {
        CreateOrUpdateTagsRequest {
            tags: Some(Vec::new()),
        }
    }
}

impl CreateOrUpdateTagsRequest {
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
}

impl fmt::Display for CreateOrUpdateTagsRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ModelFormatter::new(f)
            .list("Tags", &self.tags)
            .finish()
    }
}

impl HashCode for CreateOrUpdateTagsRequest {
    fn hash_code(&self) -> i32 {
        hash_combine(&[
            self.tags.hash_code(),
        ])
    }
}

impl ToQuery for CreateOrUpdateTagsRequest {
    fn write_query(&self, writer: &mut QueryWriter, key: &str) {
        writer.list(key, "Tags", &self.tags);
    }
}

/// Input of `DeleteTags`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct DeleteTagsRequest {
    #[serde(rename = "Tags", skip_serializing_if = "Option::is_none")]
    tags: Option<Vec<Tag>>,
}

impl Default for DeleteTagsRequest {
    fn default() -> Self {
        DeleteTagsRequest {
            tags: Some(Vec::new()),
        }
    }
}

impl DeleteTagsRequest {
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
}

impl fmt::Display for DeleteTagsRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ModelFormatter::new(f)
            .list("Tags", &self.tags)
            .finish()
    }
}

impl HashCode for DeleteTagsRequest {
    fn hash_code(&self) -> i32 {
        hash_combine(&[
            self.tags.hash_code(),
        ])
    }
}

impl ToQuery for DeleteTagsRequest {
    fn write_query(&self, writer: &mut QueryWriter, key: &str) {
        writer.list(key, "Tags", &self.tags);
    }
}

/// Input of `DescribeTags`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct DescribeTagsRequest {
    #[serde(rename = "Filters", skip_serializing_if = "Option::is_none")]
    filters: Option<Vec<Filter>>,
    #[serde(rename = "NextToken", skip_serializing_if = "Option::is_none")]
    next_token: Option<String>,
    #[serde(rename = "MaxRecords", skip_serializing_if = "Option::is_none")]
    max_records: Option<i32>,
}

impl Default for DescribeTagsRequest {
    fn default() -> Self {
        DescribeTagsRequest {
            filters: Some(Vec::new()),
            next_token: None,
            max_records: None,
        }
    }
}

impl DescribeTagsRequest {
    pub fn filters(&self) -> Option<&[Filter]> {
        self.filters.as_deref()
    }

    pub fn set_filters(&mut self, filters: Option<Vec<Filter>>) {
        self.filters = filters;
    }

    pub fn with_filters<I>(mut self, filters: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Filter>,
    {
        self.filters.get_or_insert_with(Vec::new).extend(filters.into_iter().map(Into::into));
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

impl fmt::Display for DescribeTagsRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ModelFormatter::new(f)
            .list("Filters", &self.filters)
            .field("NextToken", &self.next_token)
            .field("MaxRecords", &self.max_records)
            .finish()
    }
}

impl HashCode for DescribeTagsRequest {
    fn hash_code(&self) -> i32 {
        hash_combine(&[
            self.filters.hash_code(),
            self.next_token.hash_code(),
            self.max_records.hash_code(),
        ])
    }
}

impl ToQuery for DescribeTagsRequest {
    fn write_query(&self, writer: &mut QueryWriter, key: &str) {
        writer.list(key, "Filters", &self.filters);
        writer.field(key, "NextToken", &self.next_token);
        writer.field(key, "MaxRecords", &self.max_records);
    }
}

/// Output of `DescribeTags`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct DescribeTagsResult {
    #[serde(rename = "Tags", skip_serializing_if = "Option::is_none")]
    tags: Option<Vec<TagDescription>>,
    #[serde(rename = "NextToken", skip_serializing_if = "Option::is_none")]
    next_token: Option<String>,
}

impl Default for DescribeTagsResult {
    fn default() -> Self {
        DescribeTagsResult {
            tags: Some(Vec::new()),
            next_token: None,
        }
    }
}

impl DescribeTagsResult {
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

impl fmt::Display for DescribeTagsResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ModelFormatter::new(f)
            .list("Tags", &self.tags)
            .field("NextToken", &self.next_token)
            .finish()
    }
}

impl HashCode for DescribeTagsResult {
    fn hash_code(&self) -> i32 {
        hash_combine(&[
            self.tags.hash_code(),
            self.next_token.hash_code(),
        ])
    }
}

impl FromXml for DescribeTagsResult {
    fn from_xml(node: Node) -> Result<Self> {
        let mut out = DescribeTagsResult::default();
        for child in node.children().filter(Node::is_element) {
            match child.tag_name().name() {
                "Tags" => out.tags = Some(xml::list(child)?),
                "NextToken" => out.next_token = Some(FromXml::from_xml(child)?),
                _ => {}
            }
        }
        Ok(out)
    }
}
