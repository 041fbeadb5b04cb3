//! Deployment context resolution
//!
//! The context is the set of named string parameters that parameterize one
//! synthesis run: `project`, `domainName`, `acmCertArn`, and `region`. Values
//! are resolved from, in order of precedence:
//!
//! 1. `-c key=value` flags on the command line
//! 2. the `[context]` table of the config file
//! 3. nothing — every value is optional
//!
//! Account and region additionally fall back to ambient environment
//! variables (`AWS_ACCOUNT_ID`, `AWS_DEFAULT_REGION`). All fallback logic
//! lives here; nothing downstream reads the environment.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::Environment;

/// Context key for the project name.
pub const KEY_PROJECT: &str = "project";
/// Context key for the custom CDN domain.
pub const KEY_DOMAIN_NAME: &str = "domainName";
/// Context key for the ACM certificate ARN.
pub const KEY_ACM_CERT_ARN: &str = "acmCertArn";
/// Context key for the target region.
pub const KEY_REGION: &str = "region";

/// Environment variable supplying the account id.
pub const ACCOUNT_ENV: &str = "AWS_ACCOUNT_ID";
/// Environment variable supplying the default region.
pub const REGION_ENV: &str = "AWS_DEFAULT_REGION";

/// Placeholder used in physical names when no account id is resolvable.
/// Synthesis must succeed offline, so an unknown account is not an error.
pub const UNKNOWN_ACCOUNT: &str = "unknown-account";

/// The resolved per-invocation parameters.
///
/// Empty strings are normalized to `None`: an empty `project` skips synthesis
/// the same way an absent one does.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentContext {
    /// Project name. Required for any stack to be synthesized.
    pub project: Option<String>,
    /// Custom domain for the CDN distribution.
    pub domain_name: Option<String>,
    /// ARN of an externally-issued ACM certificate. Passed through verbatim;
    /// never validated here.
    pub acm_cert_arn: Option<String>,
    /// Target region override.
    pub region: Option<String>,
}

impl DeploymentContext {
    /// Build a context from already-merged key/value pairs.
    ///
    /// Keys other than the four known ones are ignored (the deployment tool
    /// may pass its own context through the same channel).
    pub fn from_map(values: &IndexMap<String, String>) -> Self {
        for key in values.keys() {
            if !matches!(
                key.as_str(),
                KEY_PROJECT | KEY_DOMAIN_NAME | KEY_ACM_CERT_ARN | KEY_REGION
            ) {
                debug!(key = key.as_str(), "ignoring unknown context key");
            }
        }

        Self {
            project: non_empty(values.get(KEY_PROJECT)),
            domain_name: non_empty(values.get(KEY_DOMAIN_NAME)),
            acm_cert_arn: non_empty(values.get(KEY_ACM_CERT_ARN)),
            region: non_empty(values.get(KEY_REGION)),
        }
    }

    /// Resolve the context from CLI `-c` pairs layered over config-file
    /// context values. CLI pairs win on key collisions.
    pub fn resolve(
        cli_pairs: &[String],
        file_context: &IndexMap<String, String>,
    ) -> Result<Self> {
        let mut merged = file_context.clone();
        for pair in cli_pairs {
            let (key, value) = parse_pair(pair)?;
            merged.insert(key, value);
        }
        Ok(Self::from_map(&merged))
    }

    /// The project name, when present and non-empty.
    pub fn project(&self) -> Option<&str> {
        self.project.as_deref()
    }

    /// The custom domain/certificate pair, only when **both** are supplied.
    /// A partial pair silently degrades to no custom domain.
    pub fn domain_binding(&self) -> Option<(&str, &str)> {
        match (self.domain_name.as_deref(), self.acm_cert_arn.as_deref()) {
            (Some(domain), Some(arn)) => Some((domain, arn)),
            _ => None,
        }
    }

    /// The target environment: explicit region first, then ambient
    /// environment variables.
    pub fn environment(&self) -> Environment {
        Environment {
            account: env_var(ACCOUNT_ENV).unwrap_or_else(|| UNKNOWN_ACCOUNT.to_string()),
            region: self.region.clone().or_else(|| env_var(REGION_ENV)),
        }
    }
}

/// Parse one `key=value` context flag.
fn parse_pair(pair: &str) -> Result<(String, String)> {
    match pair.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(Error::ContextParse(pair.to_string())),
    }
}

/// Read an environment variable, treating empty values as unset.
fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

fn non_empty(value: Option<&String>) -> Option<String> {
    value.filter(|v| !v.is_empty()).cloned()
}
