//! Resource description graph
//!
//! The synthesized output of this tool is a plain, immutable description tree:
//! resource nodes carrying a kind, a logical id, an optional physical name, an
//! ordered property map, and references to other nodes in the same stack. No
//! behavior is attached to nodes; provisioning, ordering, and convergence are
//! the deployment tool's job.
//!
//! Property and output ordering is insertion order ([`IndexMap`] /
//! `Vec`), so repeated synthesis of the same context produces byte-identical
//! JSON — important for downstream diffing.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::Result;

/// The kinds of resources this tool knows how to describe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    /// An S3-style object storage bucket.
    StorageBucket,
    /// A legacy CloudFront origin access identity.
    OriginAccessIdentity,
    /// A CloudFront-style CDN distribution.
    CdnDistribution,
    /// A bucket policy attached to a storage bucket.
    BucketPolicy,
}

impl ResourceKind {
    /// Plain string form, matching the serialized representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::StorageBucket => "storage_bucket",
            ResourceKind::OriginAccessIdentity => "origin_access_identity",
            ResourceKind::CdnDistribution => "cdn_distribution",
            ResourceKind::BucketPolicy => "bucket_policy",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single resource declaration.
///
/// Nodes are built once with the `with_*` builders and never mutated
/// afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceNode {
    /// Resource kind.
    pub kind: ResourceKind,
    /// Logical id, unique within the stack.
    pub logical_id: String,
    /// Physical (deployed) name, when it is deterministic at synthesis time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub physical_name: Option<String>,
    /// Resource properties, in insertion order.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub properties: IndexMap<String, serde_json::Value>,
    /// Logical ids of other nodes this node depends on.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub references: Vec<String>,
}

impl ResourceNode {
    /// Create a new node with no properties.
    pub fn new(kind: ResourceKind, logical_id: impl Into<String>) -> Self {
        Self {
            kind,
            logical_id: logical_id.into(),
            physical_name: None,
            properties: IndexMap::new(),
            references: Vec::new(),
        }
    }

    /// Set the deterministic physical name.
    pub fn with_physical_name(mut self, name: impl Into<String>) -> Self {
        self.physical_name = Some(name.into());
        self
    }

    /// Add a property.
    pub fn with_property(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.properties.insert(key.into(), value);
        self
    }

    /// Record a reference to another node in the same stack.
    pub fn with_reference(mut self, logical_id: impl Into<String>) -> Self {
        self.references.push(logical_id.into());
        self
    }

    /// Look up a property value.
    pub fn property(&self, key: &str) -> Option<&serde_json::Value> {
        self.properties.get(key)
    }
}

/// A named output value exposed by a stack for downstream automation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputBinding {
    /// Output name.
    pub name: String,
    /// Output value. Either a literal, or an attribute reference of the form
    /// `${LogicalId.attribute}` resolved by the deployment tool.
    pub value: String,
}

impl OutputBinding {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// An attribute reference output, resolved at deploy time.
    pub fn attribute(name: impl Into<String>, logical_id: &str, attribute: &str) -> Self {
        Self {
            name: name.into(),
            value: format!("${{{}.{}}}", logical_id, attribute),
        }
    }
}

/// Account/region descriptor a stack is targeted at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Environment {
    /// AWS account id, or the `unknown-account` placeholder when it could not
    /// be resolved at synthesis time.
    pub account: String,
    /// Target region, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

/// One stack: a named, environment-scoped group of resources and outputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StackDescription {
    /// Stack name.
    pub name: String,
    /// Target environment.
    pub environment: Environment,
    /// Resource declarations, in construction order.
    pub resources: Vec<ResourceNode>,
    /// Output bindings, in construction order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub outputs: Vec<OutputBinding>,
}

impl StackDescription {
    /// Create an empty stack.
    pub fn new(name: impl Into<String>, environment: Environment) -> Self {
        Self {
            name: name.into(),
            environment,
            resources: Vec::new(),
            outputs: Vec::new(),
        }
    }

    /// Add a resource node.
    pub fn with_resource(mut self, node: ResourceNode) -> Self {
        self.resources.push(node);
        self
    }

    /// Add an output binding.
    pub fn with_output(mut self, output: OutputBinding) -> Self {
        self.outputs.push(output);
        self
    }

    /// Look up a resource by logical id.
    pub fn resource(&self, logical_id: &str) -> Option<&ResourceNode> {
        self.resources.iter().find(|r| r.logical_id == logical_id)
    }

    /// All resources of a given kind.
    pub fn resources_of_kind(&self, kind: ResourceKind) -> Vec<&ResourceNode> {
        self.resources.iter().filter(|r| r.kind == kind).collect()
    }

    /// Look up an output by name.
    pub fn output(&self, name: &str) -> Option<&OutputBinding> {
        self.outputs.iter().find(|o| o.name == name)
    }
}

/// The synthesized application: zero or one stacks.
///
/// An empty graph is a valid result, produced when no project name was
/// supplied.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Graph {
    /// Stacks in the graph.
    #[serde(default)]
    pub stacks: Vec<StackDescription>,
}

impl Graph {
    /// The well-formed empty graph.
    pub fn empty() -> Self {
        Self { stacks: Vec::new() }
    }

    /// A graph holding a single stack.
    pub fn with_stack(stack: StackDescription) -> Self {
        Self {
            stacks: vec![stack],
        }
    }

    /// True when no resources are declared at all.
    pub fn is_empty(&self) -> bool {
        self.stacks.is_empty()
    }

    /// Total number of resource declarations across all stacks.
    pub fn resource_count(&self) -> usize {
        self.stacks.iter().map(|s| s.resources.len()).sum()
    }

    /// Look up a stack by name.
    pub fn stack(&self, name: &str) -> Option<&StackDescription> {
        self.stacks.iter().find(|s| s.name == name)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Serialize to YAML.
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}
