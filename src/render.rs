//! Hand-off point between the parser and whatever draws the tree.
//!
//! A renderer only has to register nodes and parent to child edges. The
//! front end walks the finished tree and drives any [`TreeSink`] with it.

use crate::ast::{Node, NodeKind};
use crate::config::cli::DOT_GRAPH_NAME;
use crate::errors::{TinyError, TinyResult};
use std::fmt::{self, Write as _};

pub type NodeId = usize;

pub trait TreeSink {
    fn add_node(&mut self, node: &dyn Node) -> NodeId;
    fn add_edge(&mut self, parent: NodeId, child: NodeId);
}

/// Registers `root` and everything below it in pre-order, edges in child
/// order. Returns the id the sink gave the root.
pub fn render(root: &dyn Node, sink: &mut dyn TreeSink) -> NodeId {
    let id = sink.add_node(root);
    for child in root.children() {
        let child_id = render(child, sink);
        sink.add_edge(id, child_id);
    }
    id
}

/// Graphviz `digraph` builder. Statements are boxes, expressions circles.
///
/// A node is labelled with its keyword, and the value it carries goes on a
/// second line in parentheses, e.g. `OP` over `(+)`.
#[derive(Default)]
pub struct DotGraph {
    nodes: Vec<(NodeKind, Option<String>)>,
    edges: Vec<(NodeId, NodeId)>,
}

impl DotGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edges(&self) -> &[(NodeId, NodeId)] {
        &self.edges
    }

    pub fn finish(&self) -> TinyResult<String> {
        let mut out = String::new();
        self.write_to(&mut out)
            .map_err(|_| TinyError::OutputError("fmt error".to_string()))?;
        Ok(out)
    }

    fn write_to(&self, out: &mut String) -> fmt::Result {
        writeln!(out, "digraph {DOT_GRAPH_NAME} {{")?;
        for (id, (kind, value)) in self.nodes.iter().enumerate() {
            let shape = if kind.is_expression() { "circle" } else { "box" };
            let label = match value {
                Some(value) => format!("{}\\n({})", kind.keyword(), escape(value)),
                None => kind.keyword().to_string(),
            };
            writeln!(out, "    n{id} [label=\"{label}\", shape={shape}];")?;
        }
        for (parent, child) in &self.edges {
            writeln!(out, "    n{parent} -> n{child};")?;
        }
        writeln!(out, "}}")
    }
}

impl TreeSink for DotGraph {
    fn add_node(&mut self, node: &dyn Node) -> NodeId {
        self.nodes.push((node.kind(), node.value()));
        self.nodes.len() - 1
    }

    fn add_edge(&mut self, parent: NodeId, child: NodeId) {
        self.edges.push((parent, child));
    }
}

fn escape(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}
