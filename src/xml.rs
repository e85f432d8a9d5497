//! Query protocol response decoding.

use crate::error::{Error, ErrorKind, Result, ServiceError};
use crate::model::Double;
use chrono::{DateTime, Utc};
use roxmltree::{Document, Node};
use std::str::FromStr;

pub trait NodeExt<'a, 'input> {
    fn find_tag(&self, name: &str) -> Option<Node<'a, 'input>>;
}

impl<'a, 'input> NodeExt<'a, 'input> for Node<'a, 'input> {
    fn find_tag(&self, name: &str) -> Option<Node<'a, 'input>> {
        self.children().find(|t| t.has_tag_name(name))
    }
}

impl<'a, 'input> NodeExt<'a, 'input> for &'a Document<'input> {
    fn find_tag(&self, name: &str) -> Option<Node<'a, 'input>> {
        self.descendants().find(|t| t.has_tag_name(name))
    }
}

/// Builds a value from the element that holds it.
pub trait FromXml: Sized {
    fn from_xml(node: Node) -> Result<Self>;
}

/// Text content of an element; empty elements read as `""`.
pub fn text<'a>(node: Node<'a, '_>) -> &'a str {
    node.text().unwrap_or_default()
}

fn parse_text<T: FromStr>(node: Node) -> Result<T> {
    let value = text(node).trim();
    value.parse().map_err(|_| Error::Parse {
        element: node.tag_name().name().to_string(),
        value: value.to_string(),
    })
}

/// Reads every `<member>` child of a list element.
pub fn list<T: FromXml>(node: Node) -> Result<Vec<T>> {
    node.children().filter(|c| c.has_tag_name("member")).map(T::from_xml).collect()
}

impl FromXml for String {
    fn from_xml(node: Node) -> Result<Self> {
        Ok(text(node).to_string())
    }
}

impl FromXml for i32 {
    fn from_xml(node: Node) -> Result<Self> {
        parse_text(node)
    }
}

impl FromXml for bool {
    fn from_xml(node: Node) -> Result<Self> {
        parse_text(node)
    }
}

impl FromXml for Double {
    fn from_xml(node: Node) -> Result<Self> {
        parse_text::<f64>(node).map(Double::from)
    }
}

impl FromXml for DateTime<Utc> {
    fn from_xml(node: Node) -> Result<Self> {
        let value = text(node).trim();
        DateTime::parse_from_rfc3339(value).map(|d| d.with_timezone(&Utc)).map_err(|_| {
            Error::Parse { element: node.tag_name().name().to_string(), value: value.to_string() }
        })
    }
}

impl FromXml for () {
    fn from_xml(_node: Node) -> Result<Self> {
        Ok(())
    }
}

/// A successful reply: the `<{Action}Result>` payload and the request id.
#[derive(Debug)]
pub struct Response<T> {
    pub result: T,
    pub request_id: Option<String>,
}

pub fn parse_response<T: FromXml + Default>(body: &str, action: &str) -> Result<Response<T>> {
    let doc = Document::parse(body)?;
    let result_tag = crate::prelude::f!("{action}Result");
    let result = match (&doc).find_tag(&result_tag) {
        Some(node) => T::from_xml(node)?,
        None => T::default(),
    };
    let request_id = (&doc).find_tag("RequestId").and_then(|n| n.text()).map(String::from);
    Ok(Response { result, request_id })
}

/// Reads an `<ErrorResponse>` body.
pub fn parse_error(body: &str, status: i32) -> Result<ServiceError> {
    let unexpected = || Error::Unexpected { status, body: body.to_string() };
    let doc = Document::parse(body).map_err(|_| unexpected())?;
    let error = (&doc).find_tag("Error").ok_or_else(unexpected)?;
    let field = |name: &str| error.find_tag(name).and_then(|n| n.text()).map(String::from);
    let code = field("Code").ok_or_else(unexpected)?;
    Ok(ServiceError {
        kind: ErrorKind::from(code),
        message: field("Message").unwrap_or_default(),
        fault: field("Type"),
        request_id: (&doc).find_tag("RequestId").and_then(|n| n.text()).map(String::from),
        status,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        DescribeAutoScalingGroupsResult, DescribePoliciesResult, LifecycleState,
        TerminateInstanceInAutoScalingGroupResult,
    };

    const DESCRIBE_GROUPS: &str = r#"<DescribeAutoScalingGroupsResponse xmlns="http://autoscaling.amazonaws.com/doc/2011-01-01/">
  <DescribeAutoScalingGroupsResult>
    <AutoScalingGroups>
      <member>
        <AutoScalingGroupName>web</AutoScalingGroupName>
        <AutoScalingGroupARN>arn:aws:autoscaling:eu-west-1:123456789012:autoScalingGroup:abc:autoScalingGroupName/web</AutoScalingGroupARN>
        <MinSize>1</MinSize>
        <MaxSize>4</MaxSize>
        <DesiredCapacity>2</DesiredCapacity>
        <CreatedTime>2019-03-01T12:30:00.000Z</CreatedTime>
        <AvailabilityZones>
          <member>eu-west-1a</member>
          <member>eu-west-1b</member>
        </AvailabilityZones>
        <LoadBalancerNames/>
        <Instances>
          <member>
            <InstanceId>i-0123</InstanceId>
            <LifecycleState>InService</LifecycleState>
            <HealthStatus>Healthy</HealthStatus>
            <ProtectedFromScaleIn>false</ProtectedFromScaleIn>
          </member>
        </Instances>
        <LaunchTemplate>
          <LaunchTemplateName>web-template</LaunchTemplateName>
          <Version>$Latest</Version>
        </LaunchTemplate>
        <Tags>
          <member>
            <ResourceId>web</ResourceId>
            <ResourceType>auto-scaling-group</ResourceType>
            <Key>Name</Key>
            <Value>web</Value>
            <PropagateAtLaunch>true</PropagateAtLaunch>
          </member>
        </Tags>
        <SomethingNew>ignored</SomethingNew>
      </member>
    </AutoScalingGroups>
    <NextToken>page-2</NextToken>
  </DescribeAutoScalingGroupsResult>
  <ResponseMetadata>
    <RequestId>7a62c49f-347e-4fc4-9331-6e8eEXAMPLE</RequestId>
  </ResponseMetadata>
</DescribeAutoScalingGroupsResponse>"#;

    #[test]
    fn parses_nested_groups() {
        let res = parse_response::<DescribeAutoScalingGroupsResult>(DESCRIBE_GROUPS, "DescribeAutoScalingGroups")
            .unwrap();
        assert_eq!(res.request_id.as_deref(), Some("7a62c49f-347e-4fc4-9331-6e8eEXAMPLE"));
        let page = res.result;
        assert_eq!(page.next_token(), Some("page-2"));
        let groups = page.auto_scaling_groups().unwrap();
        assert_eq!(groups.len(), 1);
        let web = &groups[0];
        assert_eq!(web.auto_scaling_group_name(), Some("web"));
        assert_eq!(web.min_size(), Some(1));
        assert_eq!(web.desired_capacity(), Some(2));
        assert_eq!(web.availability_zones().unwrap(), ["eu-west-1a", "eu-west-1b"]);
        assert_eq!(web.load_balancer_names(), Some(&[][..]));
        assert_eq!(web.created_time().unwrap().to_rfc3339(), "2019-03-01T12:30:00+00:00");
        let instance = &web.instances().unwrap()[0];
        assert_eq!(instance.lifecycle_state(), Some(&LifecycleState::InService));
        assert_eq!(instance.protected_from_scale_in(), Some(false));
        assert_eq!(web.launch_template().unwrap().version(), Some("$Latest"));
        assert_eq!(web.tags().unwrap()[0].propagate_at_launch(), Some(true));
        assert_eq!(web.status(), None);
    }

    #[test]
    fn missing_result_element_yields_default() {
        let body = r#"<DeletePolicyResponse><ResponseMetadata><RequestId>r-1</RequestId></ResponseMetadata></DeletePolicyResponse>"#;
        let res = parse_response::<()>(body, "DeletePolicy").unwrap();
        assert_eq!(res.request_id.as_deref(), Some("r-1"));

        let res = parse_response::<DescribePoliciesResult>(body, "DescribePolicies").unwrap();
        assert_eq!(res.result, DescribePoliciesResult::default());
    }

    #[test]
    fn malformed_numbers_name_the_element() {
        let body = r#"<TerminateInstanceInAutoScalingGroupResponse>
  <TerminateInstanceInAutoScalingGroupResult>
    <Activity><ActivityId>a-1</ActivityId><Progress>lots</Progress></Activity>
  </TerminateInstanceInAutoScalingGroupResult>
</TerminateInstanceInAutoScalingGroupResponse>"#;
        let err = parse_response::<TerminateInstanceInAutoScalingGroupResult>(
            body,
            "TerminateInstanceInAutoScalingGroup",
        )
        .unwrap_err();
        match err {
            Error::Parse { element, value } => {
                assert_eq!(element, "Progress");
                assert_eq!(value, "lots");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn parses_error_response() {
        let body = r#"<ErrorResponse xmlns="http://autoscaling.amazonaws.com/doc/2011-01-01/">
  <Error>
    <Type>Sender</Type>
    <Code>AlreadyExists</Code>
    <Message>AutoScalingGroup by this name already exists - A group with the name web already exists</Message>
  </Error>
  <RequestId>0c2d1c0e-EXAMPLE</RequestId>
</ErrorResponse>"#;
        let err = parse_error(body, 400).unwrap();
        assert_eq!(err.kind, ErrorKind::AlreadyExists);
        assert_eq!(err.fault.as_deref(), Some("Sender"));
        assert_eq!(err.request_id.as_deref(), Some("0c2d1c0e-EXAMPLE"));
        assert!(err.message.starts_with("AutoScalingGroup by this name"));
    }

    #[test]
    fn unreadable_error_body_is_unexpected() {
        match parse_error("<html>gateway timeout</html>", 504).unwrap_err() {
            Error::Unexpected { status, .. } => assert_eq!(status, 504),
            other => panic!("unexpected error {other:?}"),
        }
    }
}
