//! Signed, retried transport for the query API.

use crate::config::Config;
use crate::credentials::{self, Credential};
use crate::error::{Error, Result};
use crate::operation::{Operation, Page, Paginated};
use crate::paginate::Pages;
use crate::prelude::{f, stopwatch};
use crate::{query, xml};
use aws_sigv4::http_request::{sign, SignableRequest, SigningParams, SigningSettings};
use http::header::CONTENT_TYPE;
use http::request::Parts;
use http::{Method, Request};
use std::thread;
use std::time::{Duration, SystemTime};

pub const SERVICE_NAME: &str = "autoscaling";
const BASE_DELAY_MS: u64 = 100;
const MAX_DELAY_MS: u64 = 20_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub region: String,
    /// Replaces the regional endpoint, e.g. for a local mock.
    pub endpoint: Option<String>,
    pub max_retries: u32,
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            region: "us-east-1".into(),
            endpoint: None,
            max_retries: 3,
            timeout_secs: 30,
        }
    }
}

impl ClientConfig {
    pub fn endpoint(&self) -> String {
        match &self.endpoint {
            Some(endpoint) => endpoint.clone(),
            None => f!("https://{SERVICE_NAME}.{}.amazonaws.com/", self.region),
        }
    }
}

/// Upper bound of the jittered delay before retry number `attempt + 1`.
fn backoff_cap(attempt: u32) -> u64 {
    BASE_DELAY_MS.saturating_mul(2u64.saturating_pow(attempt)).min(MAX_DELAY_MS)
}

fn backoff(attempt: u32) -> Duration {
    Duration::from_millis(rand::random_range(0..=backoff_cap(attempt)))
}

#[derive(Debug, Clone)]
pub struct AutoScalingClient {
    credential: Credential,
    config: ClientConfig,
}

impl AutoScalingClient {
    pub fn new(credential: Credential, config: ClientConfig) -> Self {
        AutoScalingClient { credential, config }
    }

    /// Resolves credentials and region for the configured profile.
    pub fn from_config(config: &Config) -> eyre::Result<Self> {
        let credential = credentials::resolve(&config.profile, config.region.as_deref())?;
        let client_config = config.client_config(credential.region.clone());
        Ok(AutoScalingClient::new(credential, client_config))
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Sends any operation, retrying throttling and server errors.
    pub fn send<R: Operation>(&self, request: &R) -> Result<R::Output> {
        let body = query::encode(R::ACTION, request).into_body();
        let mut attempt = 0;
        loop {
            match self.send_once(R::ACTION, &body) {
                Ok(text) => {
                    let response = xml::parse_response::<R::Output>(&text, R::ACTION)?;
                    tracing::debug!(action = R::ACTION, request_id = ?response.request_id, "ok");
                    return Ok(response.result);
                }
                Err(err) if err.is_retryable() && attempt < self.config.max_retries => {
                    let delay = backoff(attempt);
                    attempt += 1;
                    tracing::warn!(action = R::ACTION, attempt, "retrying in {delay:?}: {err}");
                    thread::sleep(delay);
                }
                Err(err) => return Err(err),
            }
        }
    }

    fn send_once(&self, action: &str, body: &str) -> Result<String> {
        let _guard = stopwatch(action);
        let endpoint = self.config.endpoint();
        tracing::debug!("POST {endpoint} {body}");
        let req = Request::builder()
            .method(Method::POST)
            .uri(endpoint.as_str())
            .header(CONTENT_TYPE, query::CONTENT_TYPE)
            .body(body.to_string())?;
        let res = aws_send(req, SERVICE_NAME, &self.credential, self.config.timeout_secs)?;
        let text = res.as_str()?.to_string();
        if !(200..300).contains(&res.status_code) {
            let err = xml::parse_error(&text, res.status_code)?;
            return Err(err.into());
        }
        Ok(text)
    }

    /// Iterates over every page of `request`, following `NextToken`.
    pub fn paginate<R>(&self, request: R) -> Pages<R, impl FnMut(&R) -> Result<R::Output> + '_>
    where
        R: Paginated,
        R::Output: Page,
    {
        Pages::new(request, move |req: &R| self.send(req))
    }
}

pub(crate) fn aws_sign(
    req: &mut Request<impl AsRef<[u8]>>,
    service_name: &str,
    Credential { access_key, secret, token, region, .. }: &Credential,
) -> Result<()> {
    let signing_settings = SigningSettings::default();
    let mut signing_params = SigningParams::builder()
        .access_key(access_key)
        .secret_key(secret)
        .region(region)
        .service_name(service_name)
        .time(SystemTime::now())
        .settings(signing_settings);
    if !token.is_empty() {
        signing_params = signing_params.security_token(token)
    }
    let signing_params = signing_params.build().map_err(|e| Error::Signing(e.to_string()))?;
    let signable_request = SignableRequest::from(&*req);
    let (signing_instructions, _signature) = sign(signable_request, &signing_params)
        .map_err(|e| Error::Signing(e.to_string()))?
        .into_parts();
    signing_instructions.apply_to_request(req);
    Ok(())
}

/// Signs `req` for `service_name` and sends it with minreq.
pub(crate) fn aws_send(
    mut req: Request<String>,
    service_name: &str,
    cred: &Credential,
    timeout_secs: u64,
) -> Result<minreq::Response> {
    aws_sign(&mut req, service_name, cred)?;
    let (parts, body) = req.into_parts();
    let Parts { method, uri, headers, .. } = parts;
    let method = if method == Method::POST { minreq::Method::Post } else { minreq::Method::Get };
    let mut req = minreq::Request::new(method, uri.to_string()).with_timeout(timeout_secs);
    for (k, v) in headers.iter() {
        req = req.with_header(k.as_str(), v.to_str()?);
    }
    if !body.is_empty() {
        req = req.with_body(body);
    }
    Ok(req.send()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DescribeAccountLimitsRequest;

    fn signed(token: &str) -> Request<String> {
        let mut req = Request::builder()
            .method(Method::POST)
            .uri("https://autoscaling.eu-west-1.amazonaws.com/")
            .header(CONTENT_TYPE, query::CONTENT_TYPE)
            .body("Action=DescribeAccountLimits&Version=2011-01-01".to_string())
            .unwrap();
        let cred = Credential {
            token: token.into(),
            region: "eu-west-1".into(),
            ..Credential::new("AKIDEXAMPLE", "wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY")
        };
        aws_sign(&mut req, SERVICE_NAME, &cred).unwrap();
        req
    }

    #[test]
    fn endpoint_follows_region_unless_overridden() {
        let mut config = ClientConfig { region: "eu-west-1".into(), ..ClientConfig::default() };
        assert_eq!(config.endpoint(), "https://autoscaling.eu-west-1.amazonaws.com/");
        config.endpoint = Some("http://localhost:4566/".into());
        assert_eq!(config.endpoint(), "http://localhost:4566/");
    }

    #[test]
    fn backoff_grows_and_is_capped() {
        assert_eq!(backoff_cap(0), 100);
        assert_eq!(backoff_cap(3), 800);
        assert_eq!(backoff_cap(20), MAX_DELAY_MS);
        assert_eq!(backoff_cap(u32::MAX), MAX_DELAY_MS);
        for attempt in 0..10 {
            assert!(backoff(attempt) <= Duration::from_millis(backoff_cap(attempt)));
        }
    }

    #[test]
    fn signing_adds_sigv4_headers() {
        let req = signed("");
        let auth = req.headers()["authorization"].to_str().unwrap();
        assert!(auth.starts_with("AWS4-HMAC-SHA256 Credential=AKIDEXAMPLE/"), "{auth}");
        assert!(auth.contains("/eu-west-1/autoscaling/aws4_request"), "{auth}");
        assert!(req.headers().contains_key("x-amz-date"));
        assert!(!req.headers().contains_key("x-amz-security-token"));

        let req = signed("session");
        assert_eq!(req.headers()["x-amz-security-token"], "session");
    }

    #[test]
    fn unreachable_endpoint_is_a_transport_error() {
        let config = ClientConfig {
            endpoint: Some("http://127.0.0.1:9/".into()),
            max_retries: 0,
            timeout_secs: 2,
            ..ClientConfig::default()
        };
        let client = AutoScalingClient::new(Credential::new("AKID", "secret"), config);
        let err =
            client.describe_account_limits(&DescribeAccountLimitsRequest::default()).unwrap_err();
        assert!(matches!(err, Error::Transport(_)), "{err:?}");
        assert!(err.is_retryable());
    }
}
