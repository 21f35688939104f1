use crate::VertexId;

pub type Result<T> = std::result::Result<T, GraphError>;

/// Structural contract violations. None of these are transient: the caller
/// attempted an illegal mutation and the graph is left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    #[error("duplicate vertex name: {name}")]
    DuplicateVertex { name: String },

    #[error("vertex {0} is not registered in this graph")]
    MissingVertex(VertexId),

    #[error("dummy vertex {name} already has an outgoing edge")]
    DummyFanOut { name: String },

    #[error("dummy vertex {name} already has an incoming edge")]
    DummyFanIn { name: String },
}
