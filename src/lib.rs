//! # allure-hosting - Report Hosting Infrastructure Synthesizer
//!
//! allure-hosting declares the cloud infrastructure for hosting static Allure
//! test-report artifacts: one private S3-style storage bucket and one
//! CloudFront-style CDN distribution reading from it through a legacy origin
//! access identity, with SPA fallback routing for 403/404 responses. The tool
//! emits a declarative resource graph for an external provisioning tool to
//! deploy; it performs no deployment, diffing, or cloud API calls itself.
//!
//! ## Core Concepts
//!
//! - **Deployment context**: the named parameters (`project`, `domainName`,
//!   `acmCertArn`, `region`) supplied per synthesis run
//! - **Resource graph**: the immutable description tree of resource nodes,
//!   built in one pass and serialized to JSON or YAML
//! - **Stack**: one named, environment-scoped group of resources and outputs
//! - **Output bindings**: the `bucket` and `cloudfront_domain` values exposed
//!   for downstream upload automation
//!
//! ## Quick Example
//!
//! ```rust
//! use allure_hosting::prelude::*;
//!
//! let ctx = DeploymentContext {
//!     project: Some("myapp".to_string()),
//!     ..Default::default()
//! };
//!
//! let graph = App::synthesize(&ctx);
//! assert!(graph.stack("myapp-allurehosting").is_some());
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod app;
pub mod config;
pub mod context;
pub mod error;
pub mod graph;
pub mod output;
pub mod stack;

// Re-export commonly used items in prelude
pub mod prelude {
    //! Convenient re-exports of commonly used types.

    pub use crate::app::App;
    pub use crate::config::Config;
    pub use crate::context::DeploymentContext;
    pub use crate::error::{Error, Result};
    pub use crate::graph::{
        Environment, Graph, OutputBinding, ResourceKind, ResourceNode, StackDescription,
    };
    pub use crate::stack::HostingStack;
}
