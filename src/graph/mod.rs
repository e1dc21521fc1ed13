//! The graph view projection engine and the model it operates on.

mod error;
mod extract;
mod ingest;
mod projection;
mod store;
mod types;
mod view;

pub use error::{IngestError, IngestResult};
pub use extract::{QueryResponse, ResultRecord, extract_result_ids};
pub use ingest::{parse_graph, parse_query_response};
pub use projection::project;
pub use store::{FetchOutcome, FetchSlot, FetchTicket, GraphStore, ResponseSlot};
pub use types::{
	Category, Endpoint, Graph, GraphLink, GraphNode, NodeLabel, ProjectedGraph, ProjectionStats,
	present, resolve_endpoint,
};
pub use view::{CategoryVisibility, Mode, ViewConfig};
