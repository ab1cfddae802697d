//! Vertex and edge capability contracts, plus ready-made implementations.
//!
//! A domain model plugs into [`DirectedGraph`](super::DirectedGraph) by
//! implementing [`Vertex`] for its node type and [`Edge`] for its connection
//! type. Vertices and edges are shared as `Arc`s; the `Arc` a graph registers
//! is the instance every filed edge must point at.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Capability required from a graph vertex.
///
/// Vertices are identified by [`id`](Vertex::id), never by structural
/// equality. The id must not change once the vertex is registered.
pub trait Vertex {
    /// Returns the unique identifier of this vertex.
    fn id(&self) -> &str;
}

/// Capability required from a directed graph edge.
pub trait Edge {
    /// The vertex type this edge connects.
    type Vertex: Vertex;

    /// Returns the origin of this edge.
    fn from(&self) -> &Arc<Self::Vertex>;

    /// Returns the destination of this edge.
    fn to(&self) -> &Arc<Self::Vertex>;
}

/// A labelled vertex with free-form properties.
///
/// # Example
///
/// ```rust
/// use pathgraph_core::graph::{Node, Vertex};
/// use serde_json::json;
///
/// let mut node = Node::new("amsterdam", "Junction");
/// node.set_property("population", json!(872_680));
///
/// assert_eq!(node.id(), "amsterdam");
/// assert_eq!(node.label(), "Junction");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Node {
    id: String,
    label: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    properties: HashMap<String, Value>,
}

impl Node {
    /// Creates a new node with the given id and label.
    #[must_use]
    pub fn new(id: &str, label: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            properties: HashMap::new(),
        }
    }

    /// Adds properties to this node (builder pattern).
    #[must_use]
    pub fn with_properties(mut self, properties: HashMap<String, Value>) -> Self {
        self.properties = properties;
        self
    }

    /// Returns the node label (type).
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns all properties of this node.
    #[must_use]
    pub fn properties(&self) -> &HashMap<String, Value> {
        &self.properties
    }

    /// Returns a specific property value, if it exists.
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }

    /// Sets a property value.
    pub fn set_property(&mut self, name: &str, value: Value) {
        self.properties.insert(name.to_string(), value);
    }
}

impl Vertex for Node {
    fn id(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.label, self.id)
    }
}

/// A weighted directed edge between two [`Node`]s.
///
/// # Example
///
/// ```rust
/// use pathgraph_core::graph::{Edge, Link, Node, Vertex};
/// use std::sync::Arc;
///
/// let a = Arc::new(Node::new("A", "Junction"));
/// let b = Arc::new(Node::new("B", "Junction"));
/// let link = Link::new(&a, &b, 2.5);
///
/// assert_eq!(link.from().id(), "A");
/// assert_eq!(link.to().id(), "B");
/// assert!((link.weight() - 2.5).abs() < f64::EPSILON);
/// ```
#[derive(Debug, Clone)]
pub struct Link {
    from: Arc<Node>,
    to: Arc<Node>,
    weight: f64,
}

impl Link {
    /// Creates a link from `from` to `to` with the given weight.
    ///
    /// Weights used by the shortest-path searches must be non-negative.
    #[must_use]
    pub fn new(from: &Arc<Node>, to: &Arc<Node>, weight: f64) -> Self {
        Self {
            from: Arc::clone(from),
            to: Arc::clone(to),
            weight,
        }
    }

    /// Returns the weight of this link.
    #[must_use]
    pub fn weight(&self) -> f64 {
        self.weight
    }
}

impl Edge for Link {
    type Vertex = Node;

    fn from(&self) -> &Arc<Node> {
        &self.from
    }

    fn to(&self) -> &Arc<Node> {
        &self.to
    }
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}({})", self.from.id(), self.to.id(), self.weight)
    }
}
