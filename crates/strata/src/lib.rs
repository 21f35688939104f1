//! Incremental layered layout primitives.
//!
//! A layering algorithm keeps a [`graphlib::LayoutGraph`] and a
//! [`LayoutVertexLayers`] collection in lockstep: every vertex placed in the
//! graph is also assigned a [`RelativeLocation`], and vice versa. The graph
//! answers structural queries (primary parent, siblings, rank) that decide
//! placement; the layers collection records the resulting
//! `(layer, index-in-layer)` coordinates and turns layer heights into
//! vertical pixel offsets.

pub use strata_graphlib as graphlib;

mod error;
mod layer;
mod layers;
mod location;

pub use error::{LayersError, Result};
pub use layer::LayoutVertexLayer;
pub use layers::LayoutVertexLayers;
pub use location::RelativeLocation;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
