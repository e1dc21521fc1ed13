use std::fmt;

use serde_json::Value;

/// Node label as tagged by the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeLabel {
	/// An airport; carries a `country` and takes part in routes.
	Airport,
	/// An airline; referenced by routes through their `airline` tag.
	Airline,
}

impl NodeLabel {
	/// Parses the backend label, `None` for anything outside the aviation schema.
	pub fn parse(label: &str) -> Option<Self> {
		match label.trim() {
			"Airport" => Some(Self::Airport),
			"Airline" => Some(Self::Airline),
			_ => None,
		}
	}

	/// The visibility toggle that governs nodes of this label.
	pub fn category(self) -> Category {
		match self {
			Self::Airport => Category::Airports,
			Self::Airline => Category::Airlines,
		}
	}
}

impl fmt::Display for NodeLabel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Airport => f.write_str("Airport"),
			Self::Airline => f.write_str("Airline"),
		}
	}
}

/// A user-toggleable category of the diagram.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
	/// Airport nodes.
	Airports,
	/// Airline nodes.
	Airlines,
	/// Route links.
	Routes,
}

impl Category {
	/// Every category, in display order.
	pub const ALL: [Category; 3] = [Self::Airports, Self::Airlines, Self::Routes];

	/// Stable id used by form controls.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Airports => "airports",
			Self::Airlines => "airlines",
			Self::Routes => "routes",
		}
	}

	/// Inverse of [`Category::as_str`].
	pub fn parse(value: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|c| c.as_str() == value)
	}
}

/// An airport or airline as fetched from the backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GraphNode {
	/// Unique node identity.
	pub id: String,
	/// Airport or airline.
	pub label: NodeLabel,
	/// Display name; falls back to the code, then `{label}_{id}`.
	pub name: String,
	/// Country attribute, matched against a region's aliases.
	pub country: Option<String>,
	/// Secondary identifier, accepted wherever `id` is.
	pub code: Option<String>,
}

impl GraphNode {
	/// True when `key` names this node by id, code or name.
	pub fn answers_to(&self, key: &str) -> bool {
		self.id == key || self.name == key || self.code.as_deref() == Some(key)
	}
}

/// One end of a link: either a bare node id or a node reference carrying one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Endpoint {
	/// A bare node id.
	Id(String),
	/// A node reference object.
	Node {
		/// Id of the referenced node.
		id: String,
	},
}

impl From<&str> for Endpoint {
	fn from(id: &str) -> Self {
		Self::Id(id.to_owned())
	}
}

/// Normalizes either endpoint form to the bare node id.
pub fn resolve_endpoint(endpoint: &Endpoint) -> &str {
	match endpoint {
		Endpoint::Id(id) | Endpoint::Node { id } => id,
	}
}

/// A route between two airports.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GraphLink {
	/// Departure endpoint.
	pub source: Endpoint,
	/// Arrival endpoint.
	pub target: Endpoint,
	/// Operating airline tag, a code or an id.
	pub airline: Option<String>,
}

impl GraphLink {
	/// Normalized source node id.
	pub fn source_id(&self) -> &str {
		resolve_endpoint(&self.source)
	}

	/// Normalized target node id.
	pub fn target_id(&self) -> &str {
		resolve_endpoint(&self.target)
	}
}

/// The full fetched graph. Links may reference nodes that are absent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Graph {
	/// Nodes, unique by id, in fetch order.
	pub nodes: Vec<GraphNode>,
	/// Links in fetch order.
	pub links: Vec<GraphLink>,
}

/// The subgraph handed to the renderer. Every link's endpoints are in `nodes`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProjectedGraph {
	/// Surviving nodes, in graph order.
	pub nodes: Vec<GraphNode>,
	/// Surviving links, in graph order.
	pub links: Vec<GraphLink>,
}

/// Per-category counts of a projection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProjectionStats {
	/// Airport nodes shown.
	pub airports: usize,
	/// Airline nodes shown.
	pub airlines: usize,
	/// Links shown.
	pub links: usize,
}

impl ProjectedGraph {
	/// True when there is nothing to draw.
	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty() && self.links.is_empty()
	}

	/// Counts nodes per label and links.
	pub fn stats(&self) -> ProjectionStats {
		let airports = self
			.nodes
			.iter()
			.filter(|n| n.label == NodeLabel::Airport)
			.count();
		ProjectionStats {
			airports,
			airlines: self.nodes.len() - airports,
			links: self.links.len(),
		}
	}

	/// Looks up a projected node by id.
	pub fn node(&self, id: &str) -> Option<&GraphNode> {
		self.nodes.iter().find(|n| n.id == id)
	}
}

/// Treats blanks and the backend's placeholder strings as missing.
pub fn present(value: Option<&str>) -> Option<&str> {
	let value = value?.trim();
	if value.is_empty() {
		return None;
	}
	match value.to_ascii_lowercase().as_str() {
		"unknown" | "null" | "none" => None,
		_ => Some(value),
	}
}

/// Reads a payload value as an identifier: present strings and numbers.
pub(crate) fn scalar(value: &Value) -> Option<String> {
	match value {
		Value::String(s) => present(Some(s)).map(str::to_owned),
		Value::Number(n) => Some(n.to_string()),
		_ => None,
	}
}
