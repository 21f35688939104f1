//! Layout graph container APIs used by `strata`.
//!
//! A [`LayoutGraph`] is a directed graph of diagram vertices plus the synthetic
//! dummy vertices a layered layout inserts to route long edges through
//! intermediate layers. On top of plain adjacency it derives the relations a
//! layered-tree placement algorithm needs: primary parent, primary children,
//! primary siblings, and cumulative rank.

mod error;
mod graph;
mod vertex;

pub use error::{GraphError, Result};
pub use graph::LayoutGraph;
pub use vertex::{LayoutVertex, VertexId, VertexKind};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
