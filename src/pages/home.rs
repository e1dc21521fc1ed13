use leptos::prelude::*;

use crate::components::graph_view::{ProjectionListing, ResponsePanel, ViewControls};
use crate::config::AppConfig;
use crate::graph::{
	GraphStore, ResponseSlot, ViewConfig, extract_result_ids, parse_graph, project,
};
use crate::sample::SAMPLE_GRAPH;

/// Graph view page.
///
/// The fetched graph, the last query response and the view knobs are three
/// independent cells; the projection is recomputed from scratch whenever any
/// of them is written.
#[component]
pub fn Home() -> impl IntoView {
	let app_config = AppConfig::embedded();
	let catalog = app_config.catalog();

	let store = RwSignal::new(GraphStore::default());
	let response = RwSignal::new(ResponseSlot::default());
	let config = RwSignal::new(ViewConfig::new(&app_config));

	let load_graph = move || {
		store.update(|s| {
			let ticket = s.begin_fetch();
			s.complete(ticket, parse_graph(SAMPLE_GRAPH));
		})
	};
	load_graph();

	let projected = Memo::new(move |_| {
		let ids = response.with(|slot| extract_result_ids(slot.value().as_ref()));
		store.with(|s| config.with(|view| project(s.value(), view, &ids)))
	});

	view! {
		<div class="graph-page">
			<header class="graph-header">
				<h1>"AeroGraph View"</h1>
				<p class="subtitle">
					"Airports, airlines and routes, narrowed by scope, mode and category."
				</p>
				<button on:click=move |_| load_graph()>"Reload graph"</button>
			</header>
			<aside class="graph-sidebar">
				<ViewControls config=config catalog=catalog />
				<ResponsePanel response=response />
			</aside>
			<main class="graph-main">
				<ProjectionListing projected=projected />
			</main>
		</div>
	}
}
