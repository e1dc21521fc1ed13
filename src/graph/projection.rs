//! Computes the subgraph to render from the fetched graph, the latest query
//! hits and the view knobs.
//!
//! Stages run in a fixed order and each one only narrows: mode, scope,
//! category visibility, then the integrity pass. The integrity pass always
//! runs last and is what guarantees that every projected link has both of its
//! endpoints in the projected node set.

use std::collections::{BTreeSet, HashSet};

use log::debug;

use super::types::{Category, Graph, GraphLink, GraphNode, NodeLabel, ProjectedGraph};
use super::view::{Mode, ViewConfig};
use crate::config::{Region, Scope};

/// Projects `graph` through `view`. Total and deterministic.
pub fn project(graph: &Graph, view: &ViewConfig, query_ids: &BTreeSet<String>) -> ProjectedGraph {
	let candidates = mode_stage(graph, view.mode, query_ids);
	let after_mode = candidates.len();

	let (candidates, scoped_links) = match &view.scope {
		Scope::All => (candidates, graph.links.iter().collect()),
		Scope::Region(region) => scope_stage(graph, candidates, region),
	};
	let after_scope = candidates.len();

	let nodes: Vec<GraphNode> = candidates
		.into_iter()
		.filter(|n| view.show.is_visible(n.label.category()))
		.cloned()
		.collect();

	let links = integrity_stage(&nodes, scoped_links, view.show.is_visible(Category::Routes));

	debug!(
		"projection [{} / {} / {:?}]: mode {} -> scope {} -> visible {} nodes, {} of {} links",
		view.scope.id(),
		view.mode.as_str(),
		view.show,
		after_mode,
		after_scope,
		nodes.len(),
		links.len(),
		graph.links.len(),
	);
	ProjectedGraph { nodes, links }
}

fn mode_stage<'g>(
	graph: &'g Graph,
	mode: Mode,
	query_ids: &BTreeSet<String>,
) -> Vec<&'g GraphNode> {
	match mode {
		Mode::ShowAll => graph.nodes.iter().collect(),
		Mode::ShowQueryResults => graph
			.nodes
			.iter()
			.filter(|n| query_ids.iter().any(|id| n.answers_to(id)))
			.collect(),
	}
}

/// Keeps in-region airports, the routes between them, and the airlines
/// flying those routes.
fn scope_stage<'g>(
	graph: &'g Graph,
	candidates: Vec<&'g GraphNode>,
	region: &Region,
) -> (Vec<&'g GraphNode>, Vec<&'g GraphLink>) {
	let candidates: Vec<&GraphNode> = candidates
		.into_iter()
		.filter(|n| match n.label {
			NodeLabel::Airport => region.contains(n.country.as_deref()),
			NodeLabel::Airline => true,
		})
		.collect();

	let airports: HashSet<&str> = candidates
		.iter()
		.filter(|n| n.label == NodeLabel::Airport)
		.map(|n| n.id.as_str())
		.collect();

	let scoped_links: Vec<&GraphLink> = graph
		.links
		.iter()
		.filter(|l| airports.contains(l.source_id()) && airports.contains(l.target_id()))
		.collect();

	// Airline tags are matched against code or id on a best-effort basis.
	let operators: HashSet<&str> = scoped_links
		.iter()
		.filter_map(|l| l.airline.as_deref())
		.collect();

	let candidates = candidates
		.into_iter()
		.filter(|n| {
			n.label == NodeLabel::Airport
				|| operators.contains(n.id.as_str())
				|| n.code.as_deref().is_some_and(|c| operators.contains(c))
		})
		.collect();

	(candidates, scoped_links)
}

fn integrity_stage(
	nodes: &[GraphNode],
	links: Vec<&GraphLink>,
	routes_visible: bool,
) -> Vec<GraphLink> {
	if !routes_visible {
		return Vec::new();
	}
	let ids: HashSet<&str> = nodes.iter().map(|n| n.id.as_str()).collect();
	links
		.into_iter()
		.filter(|l| ids.contains(l.source_id()) && ids.contains(l.target_id()))
		.cloned()
		.collect()
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::config::AppConfig;
	use crate::graph::types::Endpoint;

	fn airport(id: &str, country: &str) -> GraphNode {
		GraphNode {
			id: id.into(),
			label: NodeLabel::Airport,
			name: format!("{id} International"),
			country: Some(country.into()),
			code: Some(id.into()),
		}
	}

	fn airline(id: &str, code: &str) -> GraphNode {
		GraphNode {
			id: id.into(),
			label: NodeLabel::Airline,
			name: format!("{code} Airlines"),
			country: None,
			code: Some(code.into()),
		}
	}

	fn route(source: &str, target: &str, airline: &str) -> GraphLink {
		GraphLink {
			source: source.into(),
			target: target.into(),
			airline: Some(airline.into()),
		}
	}

	fn ids(projected: &ProjectedGraph) -> Vec<&str> {
		projected.nodes.iter().map(|n| n.id.as_str()).collect()
	}

	fn brazil() -> ViewConfig {
		let mut view = ViewConfig::default();
		view.set_scope("BR", &AppConfig::default().catalog());
		view
	}

	fn network() -> Graph {
		Graph {
			nodes: vec![
				airport("GRU", "Brazil"),
				airport("GIG", "BR"),
				airport("JFK", "USA"),
				airline("al-1", "GOL"),
				airline("LATAM", "LA"),
				airline("al-3", "AA"),
			],
			links: vec![
				route("GRU", "GIG", "GOL"),
				route("GIG", "GRU", "LATAM"),
				route("GIG", "JFK", "AA"),
				route("GRU", "XXX", "AA"),
			],
		}
	}

	#[test]
	fn show_all_drops_dangling_links() {
		let projected = project(&network(), &ViewConfig::default(), &BTreeSet::new());
		assert_eq!(projected.nodes.len(), 6);
		assert_eq!(projected.links.len(), 3);
	}

	#[test]
	fn region_keeps_airlines_flying_in_region_routes() {
		let projected = project(&network(), &brazil(), &BTreeSet::new());
		assert_eq!(ids(&projected), ["GRU", "GIG", "al-1", "LATAM"]);
		let expected = vec![route("GRU", "GIG", "GOL"), route("GIG", "GRU", "LATAM")];
		assert_eq!(projected.links, expected);
	}

	#[test]
	fn region_without_airports_is_empty() {
		let mut graph = network();
		graph
			.nodes
			.retain(|n| !matches!(n.country.as_deref(), Some("Brazil" | "BR")));
		let projected = project(&graph, &brazil(), &BTreeSet::new());
		assert!(projected.is_empty());
	}

	#[test]
	fn hidden_airports_take_their_routes_along() {
		let mut view = ViewConfig::default();
		view.set_category_visible(Category::Airports, false);
		let projected = project(&network(), &view, &BTreeSet::new());
		assert_eq!(ids(&projected), ["al-1", "LATAM", "al-3"]);
		assert!(projected.links.is_empty());
	}

	#[test]
	fn query_mode_matches_id_code_and_name() {
		let mut view = ViewConfig::default();
		view.set_mode(Mode::ShowQueryResults);
		let hits = BTreeSet::from(["GRU", "GIG International", "GOL"].map(String::from));
		let projected = project(&network(), &view, &hits);
		assert_eq!(ids(&projected), ["GRU", "GIG", "al-1"]);
		assert_eq!(projected.links.len(), 2);
	}

	#[test]
	fn query_mode_without_hits_is_empty() {
		let mut view = ViewConfig::default();
		view.set_mode(Mode::ShowQueryResults);
		assert_eq!(project(&network(), &view, &BTreeSet::new()), ProjectedGraph::default());
	}

	#[test]
	fn query_mode_combines_with_region() {
		let mut view = brazil();
		view.set_mode(Mode::ShowQueryResults);
		let hits = BTreeSet::from(["GRU", "JFK", "AA", "LA"].map(String::from));
		let projected = project(&network(), &view, &hits);
		// GIG is not a hit, so no in-region route survives and no airline either.
		assert_eq!(ids(&projected), ["GRU"]);
		assert!(projected.links.is_empty());
	}

	#[test]
	fn object_endpoints_count_as_present() {
		let mut graph = network();
		graph.links.push(GraphLink {
			source: Endpoint::Node { id: "JFK".into() },
			target: "GRU".into(),
			airline: None,
		});
		let projected = project(&graph, &ViewConfig::default(), &BTreeSet::new());
		assert_eq!(projected.links.len(), 4);
	}

	#[test]
	fn empty_graph_projects_to_empty() {
		let projected = project(&Graph::default(), &brazil(), &BTreeSet::new());
		assert!(projected.is_empty());
	}
}
