//! Synthesis entry point
//!
//! Composition root and guard clause: a stack is synthesized only when a
//! project name is present in the context. An absent or empty `project` is a
//! deliberate no-op producing the empty graph, so bootstrap and introspection
//! invocations that carry no context still succeed.

use tracing::{debug, info};

use crate::context::DeploymentContext;
use crate::graph::Graph;
use crate::stack::HostingStack;

/// The synthesizing application.
pub struct App;

impl App {
    /// Build the resource graph for the given context.
    pub fn synthesize(ctx: &DeploymentContext) -> Graph {
        let Some(project) = ctx.project() else {
            // Not an error: invocations without a project legitimately
            // synthesize nothing.
            debug!("no project in context, synthesizing an empty graph");
            return Graph::empty();
        };

        let stack = HostingStack::synthesize(project, ctx);
        info!(stack = stack.name.as_str(), "synthesized hosting stack");
        Graph::with_stack(stack)
    }
}
