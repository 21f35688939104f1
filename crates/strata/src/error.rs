use crate::RelativeLocation;
use crate::graphlib::{GraphError, VertexId};

pub type Result<T> = std::result::Result<T, LayersError>;

/// Placement contract violations. Like the graph errors these are programming
/// mistakes in the driving algorithm, not transient conditions; every failing
/// operation leaves the collection unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayersError {
    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error("invalid location {location}: the layer holds {layer_len} vertices")]
    InvalidLocation {
        location: RelativeLocation,
        layer_len: usize,
    },

    #[error("vertex {vertex} is already placed at {location}")]
    AlreadyPlaced {
        vertex: VertexId,
        location: RelativeLocation,
    },

    #[error("vertex {0} has no relative location")]
    NotPlaced(VertexId),
}
