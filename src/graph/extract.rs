use std::collections::BTreeSet;

use serde::Deserialize;
use serde_json::{Map, Value};

use super::types::scalar;

/// One row of a query result: column name to scalar or returned entity.
pub type ResultRecord = Map<String, Value>;

/// Response of the natural-language query endpoint.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct QueryResponse {
	/// Natural-language answer, display only.
	#[serde(default)]
	pub answer: String,
	/// Generated query text, display only.
	#[serde(default)]
	pub cypher_query: String,
	/// Result rows; the only part the projection consumes.
	#[serde(default)]
	pub results: Vec<ResultRecord>,
}

/// Collects the identifiers of every entity a query answer touched on.
///
/// Entity-valued columns contribute their `code` and `name`; scalar columns
/// contribute nothing. Arrays are scanned one level deep for entities.
pub fn extract_result_ids(response: Option<&QueryResponse>) -> BTreeSet<String> {
	let mut ids = BTreeSet::new();
	let Some(response) = response else {
		return ids;
	};

	for value in response.results.iter().flat_map(Map::values) {
		match value {
			Value::Object(entity) => collect_entity(entity, &mut ids),
			Value::Array(items) => items
				.iter()
				.filter_map(Value::as_object)
				.for_each(|entity| collect_entity(entity, &mut ids)),
			_ => {}
		}
	}
	ids
}

fn collect_entity(entity: &Map<String, Value>, ids: &mut BTreeSet<String>) {
	for key in ["code", "name"] {
		if let Some(id) = entity.get(key).and_then(scalar) {
			ids.insert(id);
		}
	}
}
