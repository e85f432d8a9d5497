//! Credential lookup: environment, shared ini files, then STS `AssumeRole`.

use crate::client::aws_send;
use crate::config::Config;
use crate::parsers::ini_parser::{parse_ini_from_file, Ini};
use crate::prelude::*;
use crate::xml::NodeExt;
use http::{Method, Request};
use itertools::Itertools;
use roxmltree::Document;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env::var;
use std::fs::File;
use std::path::Path;

const STS_TIMEOUT_SECS: u64 = 30;
const STS_DEFAULT_REGION: &str = "us-east-1";

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Credential {
    pub profile: String,
    pub access_key: String,
    pub secret: String,
    /// Session token, empty for long-term keys.
    #[serde(default)]
    pub token: String,
    #[serde(default)]
    pub region: String,
    /// RFC 3339, empty when the keys don't expire.
    #[serde(default)]
    pub expiration: String,
}

impl Credential {
    pub fn new(access_key: impl Into<String>, secret: impl Into<String>) -> Self {
        Credential {
            profile: "default".into(),
            access_key: access_key.into(),
            secret: secret.into(),
            ..Credential::default()
        }
    }

    pub fn is_expired(&self) -> bool {
        let Ok(exp) = chrono::DateTime::parse_from_rfc3339(&self.expiration) else {
            return false;
        };
        exp < chrono::Utc::now()
    }
}

/// A `~/.aws/config` profile.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AwsConfig {
    pub profile: String,
    pub role_arn: String,
    pub source_profile: String,
    pub region: String,
}

/// Resolves the credential for `profile`. `region` comes from the config file
/// and wins over the environment and the profile.
pub fn resolve(profile: &str, region: Option<&str>) -> Result<Credential> {
    let mut cred = match env_credentials() {
        Some(cred) => cred,
        None => shared_credential(profile).context(f!("no credentials for profile {profile}"))?,
    };
    cred.region = pick_region(region, env_region().as_deref(), &cred.region)
        .ok_or_else(|| eyre!("no region configured for profile {profile}"))?;
    tracing::debug!(profile = %cred.profile, region = %cred.region, "resolved credentials");
    Ok(cred)
}

pub fn pick_region(configured: Option<&str>, env: Option<&str>, profile: &str) -> Option<String> {
    [configured, env, Some(profile)]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|r| !r.is_empty())
        .map(String::from)
}

fn env_region() -> Option<String> {
    var("AWS_REGION").or_else(|_| var("AWS_DEFAULT_REGION")).ok()
}

fn env_credentials() -> Option<Credential> {
    Some(Credential {
        profile: "env".into(),
        access_key: var("AWS_ACCESS_KEY_ID").ok().not_empty()?,
        secret: var("AWS_SECRET_ACCESS_KEY").ok().not_empty()?,
        token: var("AWS_SESSION_TOKEN").unwrap_or_default(),
        ..Credential::default()
    })
}

/// Profiles of `~/.aws/config`, with the `profile ` prefix stripped.
pub fn profile_configs(config: &Ini) -> HashMap<String, AwsConfig> {
    config
        .iter()
        .filter(|(sec, _)| !sec.is_empty())
        .map(|(sec, props)| {
            let profile = sec.strip_prefix("profile ").unwrap_or(sec.as_str()).trim().to_string();
            let prop = |name: &str| props.get(name).cloned().unwrap_or_default();
            let conf = AwsConfig {
                profile: profile.clone(),
                role_arn: prop("role_arn"),
                source_profile: prop("source_profile"),
                region: prop("region"),
            };
            (profile, conf)
        })
        .collect()
}

/// Long-term keys of `~/.aws/credentials`, with the region of the matching
/// config profile.
pub fn static_credentials(
    credentials: &Ini,
    confs: &HashMap<String, AwsConfig>,
) -> HashMap<String, Credential> {
    credentials
        .iter()
        .filter_map(|(sec, props)| {
            let profile = sec.to_string();
            let access_key = props.get("aws_access_key_id")?.to_string();
            let secret = props.get("aws_secret_access_key")?.to_string();
            let token = props.get("aws_session_token").cloned().unwrap_or_default();
            let region = props
                .get("region")
                .or_else(|| confs.get(&profile).map(|c| &c.region))
                .cloned()
                .unwrap_or_default();
            Some((
                profile.clone(),
                Credential { profile, access_key, secret, token, region, ..Credential::default() },
            ))
        })
        .collect()
}

fn read_ini(path: &Path) -> Result<Ini> {
    if path.exists() {
        parse_ini_from_file(path)
    } else {
        Ok(Ini::new())
    }
}

fn shared_credential(profile: &str) -> Result<Credential> {
    let aws_dir = Config::aws_dir()?;
    let confs = profile_configs(&read_ini(&aws_dir.join("config"))?);
    let creds = static_credentials(&read_ini(&aws_dir.join("credentials"))?, &confs);
    if let Some(cred) = creds.get(profile) {
        return Ok(cred.clone());
    }

    let conf = confs.get(profile).ok_or_else(|| eyre!("profile {profile} not found"))?;
    ensure!(!conf.role_arn.is_empty(), "profile {profile} has no keys and no role_arn");
    let cache_path = Config::cache_path()?;
    let mut cache = load_cache(&cache_path);
    if let Some(cred) = cache.iter().find(|c| c.profile == profile) {
        tracing::debug!("using cached credentials for {profile}");
        return Ok(cred.clone());
    }

    let source = creds.get(&conf.source_profile).ok_or_else(|| {
        eyre!("source_profile {:?} of {profile} has no credentials", conf.source_profile)
    })?;
    let cred = assume_role(conf, source)?;
    cache.push(cred.clone());
    if let Err(err) = save_cache(&cache_path, &cache) {
        tracing::warn!("can't write credential cache: {err:#}");
    }
    Ok(cred)
}

fn assume_role(conf: &AwsConfig, source: &Credential) -> Result<Credential> {
    let AwsConfig { profile, role_arn, .. } = conf;
    let region = [conf.region.as_str(), source.region.as_str()]
        .into_iter()
        .find(|r| !r.is_empty())
        .unwrap_or(STS_DEFAULT_REGION);
    let session = urlencoding::encode(&f!("ascale-{profile}")).into_owned();
    let role_arn = urlencoding::encode(role_arn).into_owned();
    let assume_role = f!("https://sts.{region}.amazonaws.com/?Version=2011-06-15&Action=AssumeRole&RoleSessionName={session}&RoleArn={role_arn}&DurationSeconds=3600");
    let req = Request::builder().method(Method::GET).uri(assume_role).body(String::new())?;
    let source = Credential { region: region.to_string(), ..source.clone() };
    let res = aws_send(req, "sts", &source, STS_TIMEOUT_SECS)?;
    if !(200..300).contains(&res.status_code) {
        bail!("Error assuming role for {profile}, {}, {}", res.status_code, res.reason_phrase)
    }
    let mut cred = parse_assume_role(res.as_str()?, profile)?;
    cred.region = conf.region.clone();
    Ok(cred)
}

/// Reads an `AssumeRoleResponse`.
pub fn parse_assume_role(body: &str, profile: &str) -> Result<Credential> {
    let doc = Document::parse(body)?;
    let tag = |name: &str| -> Result<String> {
        (&doc)
            .find_tag(name)
            .and_then(|x| x.text())
            .map(String::from)
            .ok_or_else(|| eyre!("can't get {name} for {profile}"))
    };
    Ok(Credential {
        profile: profile.to_string(),
        access_key: tag("AccessKeyId")?,
        secret: tag("SecretAccessKey")?,
        token: tag("SessionToken")?,
        expiration: tag("Expiration")?,
        region: String::new(),
    })
}

/// Unexpired cached credentials. A broken cache reads as empty.
pub fn load_cache(path: impl AsRef<Path>) -> Vec<Credential> {
    let Ok(cache) = File::open(path) else {
        return Vec::new();
    };
    match serde_json::from_reader::<File, Vec<Credential>>(cache) {
        Ok(cached) => cached.into_iter().filter(|x| !x.is_expired()).collect(),
        Err(err) => {
            tracing::warn!("Error deserializing cache, ignoring it: {err}");
            Vec::new()
        }
    }
}

/// Keeps session credentials only; long-term keys stay in `~/.aws`.
pub fn save_cache(path: impl AsRef<Path>, creds: &[Credential]) -> Result<()> {
    let path = path.as_ref();
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }
    let tosave = creds.iter().filter(|x| !x.token.is_empty()).collect_vec();
    let json = serde_json::to_string(&tosave).context("Can't serialize cache")?;
    std::fs::write(path, json).context(f!("Can't write cache {path:?}"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::ini_parser::parse_ini;

    const CONFIG: &str = r#"
[default]
region = eu-west-1

[profile prod]
role_arn = arn:aws:iam::123456789012:role/Ops
source_profile = default
region = eu-central-1
"#;

    const CREDENTIALS: &str = r#"
[default]
aws_access_key_id = AKIADEFAULT
aws_secret_access_key = secret

[ci]
aws_access_key_id = AKIACI
aws_secret_access_key = ci-secret
aws_session_token = ci-token
region = us-west-2

[broken]
aws_access_key_id = AKIABROKEN
"#;

    const ASSUME_ROLE: &str = r#"<AssumeRoleResponse xmlns="https://sts.amazonaws.com/doc/2011-06-15/">
  <AssumeRoleResult>
    <AssumedRoleUser>
      <Arn>arn:aws:sts::123456789012:assumed-role/Ops/ascale-prod</Arn>
      <AssumedRoleId>ARO123EXAMPLE123:ascale-prod</AssumedRoleId>
    </AssumedRoleUser>
    <Credentials>
      <AccessKeyId>ASIAEXAMPLE</AccessKeyId>
      <SecretAccessKey>wJalrXUtnFEMI/K7MDENG/bPxRfiCYzEXAMPLEKEY</SecretAccessKey>
      <SessionToken>FwoGZXIvYXdzEXAMPLE</SessionToken>
      <Expiration>2019-11-09T13:34:41Z</Expiration>
    </Credentials>
  </AssumeRoleResult>
  <ResponseMetadata>
    <RequestId>c6104cbe-af31-11e0-8154-cbc7ccf896c7</RequestId>
  </ResponseMetadata>
</AssumeRoleResponse>"#;

    #[test]
    fn config_profiles_drop_the_prefix() {
        let confs = profile_configs(&parse_ini(CONFIG).unwrap());
        assert_eq!(confs.len(), 2);
        assert_eq!(confs["default"].region, "eu-west-1");
        let prod = &confs["prod"];
        assert_eq!(prod.role_arn, "arn:aws:iam::123456789012:role/Ops");
        assert_eq!(prod.source_profile, "default");
    }

    #[test]
    fn static_credentials_take_region_from_config() {
        let confs = profile_configs(&parse_ini(CONFIG).unwrap());
        let creds = static_credentials(&parse_ini(CREDENTIALS).unwrap(), &confs);
        assert_eq!(creds.len(), 2);
        assert_eq!(creds["default"].region, "eu-west-1");
        assert_eq!(creds["default"].token, "");
        assert_eq!(creds["ci"].region, "us-west-2");
        assert_eq!(creds["ci"].token, "ci-token");
        assert!(!creds.contains_key("broken"));
    }

    #[test]
    fn parses_assume_role_response() {
        let cred = parse_assume_role(ASSUME_ROLE, "prod").unwrap();
        assert_eq!(cred.profile, "prod");
        assert_eq!(cred.access_key, "ASIAEXAMPLE");
        assert_eq!(cred.token, "FwoGZXIvYXdzEXAMPLE");
        assert!(cred.is_expired());
        assert!(parse_assume_role("<AssumeRoleResponse/>", "prod").is_err());
    }

    #[test]
    fn expiration() {
        let mut cred = Credential::new("AKIA", "secret");
        assert!(!cred.is_expired());
        cred.expiration = (chrono::Utc::now() + chrono::Duration::hours(1)).to_rfc3339();
        assert!(!cred.is_expired());
        cred.expiration = "2001-01-01T00:00:00Z".into();
        assert!(cred.is_expired());
    }

    #[test]
    fn region_precedence() {
        assert_eq!(pick_region(Some("a"), Some("b"), "c").as_deref(), Some("a"));
        assert_eq!(pick_region(None, Some("b"), "c").as_deref(), Some("b"));
        assert_eq!(pick_region(Some(" "), Some(""), "c").as_deref(), Some("c"));
        assert_eq!(pick_region(None, None, ""), None);
    }

    #[test]
    fn cache_keeps_only_live_session_credentials() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("cache");
        assert!(load_cache(&path).is_empty());

        let live = Credential {
            profile: "prod".into(),
            token: "t".into(),
            expiration: (chrono::Utc::now() + chrono::Duration::hours(1)).to_rfc3339(),
            ..Credential::new("ASIA", "secret")
        };
        let expired =
            Credential { profile: "old".into(), expiration: "2001-01-01T00:00:00Z".into(), ..live.clone() };
        let long_term = Credential::new("AKIA", "secret");
        save_cache(&path, &[live.clone(), expired, long_term]).unwrap();
        assert_eq!(load_cache(&path), [live]);

        std::fs::write(&path, "not json").unwrap();
        assert!(load_cache(&path).is_empty());
    }
}
