//! Hosting stack builder
//!
//! Builds the single stack this tool knows: a private S3-style bucket holding
//! static Allure report files, fronted by a CDN distribution that reads the
//! bucket through a legacy origin access identity. The distribution serves
//! `index.html` as the root document and rewrites origin 403/404 responses to
//! `200 /index.html`, so deep links into client-side-routed report pages
//! resolve even when no literal object exists.
//!
//! Construction is one linear pass. The only conditional is the custom-domain
//! binding: the domain name and certificate are attached together or not at
//! all.
//!
//! # Example
//!
//! ```rust
//! use allure_hosting::context::DeploymentContext;
//! use allure_hosting::stack::HostingStack;
//!
//! let ctx = DeploymentContext {
//!     project: Some("myapp".to_string()),
//!     ..Default::default()
//! };
//! let stack = HostingStack::synthesize("myapp", &ctx);
//! assert_eq!(stack.name, "myapp-allurehosting");
//! ```

use serde_json::json;
use tracing::debug;

use crate::context::DeploymentContext;
use crate::graph::{OutputBinding, ResourceKind, ResourceNode, StackDescription};

/// Suffix appended to the project name to form the stack name.
pub const STACK_NAME_SUFFIX: &str = "-allurehosting";

/// Logical id of the reports bucket.
pub const BUCKET_ID: &str = "ReportsBucket";
/// Logical id of the origin access identity.
pub const ACCESS_IDENTITY_ID: &str = "AccessIdentity";
/// Logical id of the CDN distribution.
pub const DISTRIBUTION_ID: &str = "Cdn";
/// Logical id of the bucket policy carrying the read grant.
pub const BUCKET_POLICY_ID: &str = "ReportsBucketPolicy";

/// Object served for `/` and for SPA fallback rewrites.
const DEFAULT_ROOT_OBJECT: &str = "index.html";
/// Page path the 403/404 rewrites serve.
const FALLBACK_PAGE_PATH: &str = "/index.html";

/// Viewer protocol policy applied to the distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerProtocolPolicy {
    /// Redirect plain HTTP viewers to HTTPS.
    RedirectToHttps,
}

impl ViewerProtocolPolicy {
    fn as_str(&self) -> &'static str {
        match self {
            ViewerProtocolPolicy::RedirectToHttps => "redirect-to-https",
        }
    }
}

/// Cache policy applied to the default behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CachePolicy {
    /// Edge caching disabled; every request revalidates against the origin.
    /// Freshness of report content is preferred over latency and cost.
    CachingDisabled,
}

impl CachePolicy {
    fn as_str(&self) -> &'static str {
        match self {
            CachePolicy::CachingDisabled => "caching-disabled",
        }
    }
}

/// Builder for the Allure hosting stack.
pub struct HostingStack;

impl HostingStack {
    /// Stack name for a project: `<project>-allurehosting`.
    pub fn stack_name(project: &str) -> String {
        format!("{}{}", project, STACK_NAME_SUFFIX)
    }

    /// Physical bucket name: `<project>-allure-hosting-<account>`.
    ///
    /// The account suffix keeps the name globally unique per account+project
    /// pair without random suffixes, so re-synthesis is deterministic.
    pub fn bucket_name(project: &str, account: &str) -> String {
        format!("{}-allure-hosting-{}", project, account)
    }

    /// Build the stack description for `project`.
    ///
    /// `project` must already have passed the caller's presence check; the
    /// remaining optional context values are read from `ctx`.
    pub fn synthesize(project: &str, ctx: &DeploymentContext) -> StackDescription {
        let environment = ctx.environment();
        let bucket_name = Self::bucket_name(project, &environment.account);
        debug!(project, bucket = bucket_name.as_str(), "building hosting stack");

        let bucket = ResourceNode::new(ResourceKind::StorageBucket, BUCKET_ID)
            .with_physical_name(bucket_name.clone())
            .with_property(
                "block_public_access",
                json!({
                    "block_public_acls": true,
                    "block_public_policy": true,
                    "ignore_public_acls": true,
                    "restrict_public_buckets": true,
                }),
            )
            .with_property("enforce_ssl", json!(true))
            .with_property("removal_policy", json!("destroy"))
            .with_property("auto_delete_objects", json!(true));

        let access_identity =
            ResourceNode::new(ResourceKind::OriginAccessIdentity, ACCESS_IDENTITY_ID)
                .with_property(
                    "comment",
                    json!(format!("Access identity for {} allure reports", project)),
                );

        let distribution = Self::distribution(ctx);
        let bucket_policy = Self::read_grant(&bucket_name);

        StackDescription::new(Self::stack_name(project), environment)
            .with_resource(bucket)
            .with_resource(access_identity)
            .with_resource(distribution)
            .with_resource(bucket_policy)
            .with_output(OutputBinding::new("bucket", bucket_name))
            .with_output(OutputBinding::attribute(
                "cloudfront_domain",
                DISTRIBUTION_ID,
                "domain_name",
            ))
    }

    /// The CDN distribution node.
    fn distribution(ctx: &DeploymentContext) -> ResourceNode {
        let mut node = ResourceNode::new(ResourceKind::CdnDistribution, DISTRIBUTION_ID)
            .with_property("default_root_object", json!(DEFAULT_ROOT_OBJECT))
            .with_property(
                "default_behavior",
                json!({
                    "origin": {
                        "bucket": BUCKET_ID,
                        "access_identity": ACCESS_IDENTITY_ID,
                    },
                    "viewer_protocol_policy": ViewerProtocolPolicy::RedirectToHttps.as_str(),
                    "allowed_methods": ["GET", "HEAD"],
                    "cached_methods": ["GET", "HEAD"],
                    "compress": true,
                    "cache_policy": CachePolicy::CachingDisabled.as_str(),
                }),
            )
            .with_property("error_responses", json!(Self::error_responses()))
            .with_reference(BUCKET_ID)
            .with_reference(ACCESS_IDENTITY_ID);

        // All-or-nothing pairing: a lone domainName or acmCertArn leaves the
        // distribution on its default-assigned domain.
        if let Some((domain, cert_arn)) = ctx.domain_binding() {
            node = node
                .with_property("domain_names", json!([domain]))
                .with_property("certificate_arn", json!(cert_arn));
        }

        node
    }

    /// SPA fallback rewrites: 403 and 404 from the origin both become
    /// `200 /index.html` with zero cache time.
    fn error_responses() -> Vec<serde_json::Value> {
        [403, 404]
            .iter()
            .map(|status| {
                json!({
                    "http_status": status,
                    "response_http_status": 200,
                    "response_page_path": FALLBACK_PAGE_PATH,
                    "ttl_seconds": 0,
                })
            })
            .collect()
    }

    /// Bucket policy statement granting the access identity read access,
    /// mirroring the grant a managed framework would derive automatically.
    fn read_grant(bucket_name: &str) -> ResourceNode {
        let bucket_arn = format!("arn:aws:s3:::{}", bucket_name);
        ResourceNode::new(ResourceKind::BucketPolicy, BUCKET_POLICY_ID)
            .with_property("bucket", json!(BUCKET_ID))
            .with_property(
                "statements",
                json!([{
                    "effect": "Allow",
                    "principal": { "access_identity": ACCESS_IDENTITY_ID },
                    "actions": ["s3:GetBucket*", "s3:GetObject*", "s3:List*"],
                    "resources": [bucket_arn.clone(), format!("{}/*", bucket_arn)],
                }]),
            )
            .with_reference(BUCKET_ID)
            .with_reference(ACCESS_IDENTITY_ID)
    }
}
