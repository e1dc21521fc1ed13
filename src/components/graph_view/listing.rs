use leptos::prelude::*;

use crate::graph::{GraphNode, NodeLabel, ProjectedGraph};

fn node_class(label: NodeLabel) -> &'static str {
	match label {
		NodeLabel::Airport => "node airport",
		NodeLabel::Airline => "node airline",
	}
}

fn link_rows(projected: &ProjectedGraph) -> Vec<(usize, String)> {
	let name = |id: &str| projected.node(id).map_or_else(|| id.to_owned(), |n| n.name.clone());
	projected
		.links
		.iter()
		.enumerate()
		.map(|(i, link)| {
			let operator = link.airline.as_deref().unwrap_or("?");
			let (from, to) = (name(link.source_id()), name(link.target_id()));
			let row = format!("{from} → {to} ({operator})");
			(i, row)
		})
		.collect()
}

/// Lists the projected nodes and routes, or an empty-state notice.
#[component]
pub fn ProjectionListing(#[prop(into)] projected: Signal<ProjectedGraph>) -> impl IntoView {
	let summary = move || {
		let stats = projected.with(ProjectedGraph::stats);
		format!(
			"{} airports, {} airlines, {} routes",
			stats.airports, stats.airlines, stats.links
		)
	};

	view! {
		<section class="projection">
			<Show
				when=move || projected.with(|p| !p.is_empty())
				fallback=|| view! { <p class="empty">"Nothing matches the current view."</p> }
			>
				<p class="stats">{summary}</p>
				<ul class="nodes">
					<For
						each=move || projected.with(|p| p.nodes.clone())
						key=|node| node.id.clone()
						children=|node: GraphNode| {
							view! {
								<li class=node_class(node.label)>
									{node.name} " " <small>{node.code.unwrap_or_default()}</small>
								</li>
							}
						}
					/>
				</ul>
				<ul class="links">
					<For
						each=move || projected.with(link_rows)
						key=|row| row.clone()
						children=|(_, row): (usize, String)| view! { <li>{row}</li> }
					/>
				</ul>
			</Show>
		</section>
	}
}
