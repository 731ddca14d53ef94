use crate::base_types::LocationId;
use thiserror::Error;

/// Failures raised by instance loading and network queries.
///
/// Each error is local to the operation that raised it; a failed query never
/// touches shortest-path tables that were already cached for other origins.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("unknown location: {location}")]
    UnknownLocation { location: LocationId },

    #[error("no route from {origin} to {destination}")]
    UnreachableDestination {
        origin: LocationId,
        destination: LocationId,
    },

    #[error("malformed input: {0}")]
    MalformedInput(String),
}
