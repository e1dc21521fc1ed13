//! Decoding of backend payloads into the typed graph model.
//!
//! The backend hands nodes over with their attributes either at the top level
//! or nested in a `properties` object, and link endpoints either as bare ids
//! or as node references. Both shapes are normalized here, once, so nothing
//! downstream has to care.

use std::collections::HashSet;

use log::{debug, warn};
use serde_json::{Map, Value};

use super::error::{IngestError, IngestResult};
use super::extract::QueryResponse;
use super::types::{Endpoint, Graph, GraphLink, GraphNode, NodeLabel, scalar};

fn object<'a>(value: &'a Value, what: &'static str) -> IngestResult<&'a Map<String, Value>> {
	value.as_object().ok_or(IngestError::NotAnObject { what })
}

/// Decodes a graph fetch (`{ nodes, links }`).
pub fn parse_graph(json: &str) -> IngestResult<Graph> {
	let value: Value = serde_json::from_str(json).map_err(IngestError::json("graph"))?;
	graph_from_value(&value)
}

fn graph_from_value(value: &Value) -> IngestResult<Graph> {
	let root = object(value, "graph")?;
	let mut seen = HashSet::new();
	let mut nodes = Vec::new();

	for raw in list(root, "nodes") {
		let Some(node) = node_from_value(raw) else {
			warn!("skipping node without id or with unsupported label: {raw}");
			continue;
		};
		if !seen.insert(node.id.clone()) {
			warn!("skipping duplicate node id {}", node.id);
			continue;
		}
		nodes.push(node);
	}

	let mut links = Vec::new();
	for raw in list(root, "links") {
		match link_from_value(raw) {
			Some(link) => links.push(link),
			None => warn!("skipping link with unresolvable endpoint: {raw}"),
		}
	}

	debug!("decoded graph: {} nodes, {} links", nodes.len(), links.len());
	Ok(Graph { nodes, links })
}

/// Decodes a query response (`{ answer, cypher_query, results }`).
pub fn parse_query_response(json: &str) -> IngestResult<QueryResponse> {
	let value: Value = serde_json::from_str(json).map_err(IngestError::json("query response"))?;
	object(&value, "query response")?;
	serde_json::from_value(value).map_err(IngestError::json("query response"))
}

fn list<'a>(root: &'a Map<String, Value>, key: &str) -> &'a [Value] {
	root.get(key)
		.and_then(Value::as_array)
		.map(Vec::as_slice)
		.unwrap_or_default()
}

/// Reads an attribute, preferring the top level over `properties`.
fn attribute(raw: &Map<String, Value>, key: &str) -> Option<String> {
	raw.get(key).and_then(scalar).or_else(|| {
		raw.get("properties")
			.and_then(Value::as_object)
			.and_then(|props| props.get(key))
			.and_then(scalar)
	})
}

fn node_from_value(value: &Value) -> Option<GraphNode> {
	let raw = value.as_object()?;
	let id = raw.get("id").and_then(scalar)?;
	let label = raw.get("label").and_then(Value::as_str).and_then(NodeLabel::parse)?;
	let code = attribute(raw, "code");
	let name = attribute(raw, "name")
		.or_else(|| code.clone())
		.unwrap_or_else(|| format!("{label}_{id}"));

	Some(GraphNode {
		id,
		label,
		name,
		country: attribute(raw, "country"),
		code,
	})
}

fn endpoint_from_value(value: &Value) -> Option<Endpoint> {
	match value {
		Value::Object(node) => node.get("id").and_then(scalar).map(|id| Endpoint::Node { id }),
		other => scalar(other).map(Endpoint::Id),
	}
}

fn link_from_value(value: &Value) -> Option<GraphLink> {
	let raw = value.as_object()?;
	Some(GraphLink {
		source: endpoint_from_value(raw.get("source")?)?,
		target: endpoint_from_value(raw.get("target")?)?,
		airline: attribute(raw, "airline"),
	})
}
