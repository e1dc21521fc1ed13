use thiserror::Error;

/// Failure to decode a payload handed over by the transport layer.
#[derive(Debug, Error)]
pub enum IngestError {
	/// The payload is not valid JSON, or not the expected shape.
	#[error("malformed {what} payload: {source}")]
	Json {
		/// Which payload failed.
		what: &'static str,
		/// Underlying decoder error.
		#[source]
		source: serde_json::Error,
	},
	/// The payload decoded, but its top level is not an object.
	#[error("{what} payload must be a JSON object")]
	NotAnObject {
		/// Which payload failed.
		what: &'static str,
	},
}

impl IngestError {
	pub(crate) fn json(what: &'static str) -> impl FnOnce(serde_json::Error) -> Self {
		move |source| Self::Json { what, source }
	}
}

/// Result of decoding a payload.
pub type IngestResult<T> = Result<T, IngestError>;
