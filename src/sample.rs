//! Demo payloads in the backend's wire shape, used until a transport is wired in.

/// A graph fetch with ten airports, five airlines and ten routes.
pub const SAMPLE_GRAPH: &str = include_str!("../data/sample_graph.json");

/// A query response listing the Brazilian airports of [`SAMPLE_GRAPH`].
pub const SAMPLE_RESPONSE: &str = include_str!("../data/sample_response.json");
