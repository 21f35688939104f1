use rustc_hash::FxHashMap;

use crate::error::{LayersError, Result};
use crate::graphlib::{LayoutGraph, VertexId};
use crate::layer::LayoutVertexLayer;
use crate::location::RelativeLocation;

/// The ordered collection of [`LayoutVertexLayer`] items plus the
/// vertex-to-location mapping.
///
/// Layers are materialized lazily and never removed once created, so an
/// empty trailing layer can exist. Every placed vertex appears in exactly one
/// layer at exactly one index; placement and removal keep the layer and the
/// mapping in step atomically.
#[derive(Debug, Default)]
pub struct LayoutVertexLayers {
    layers: Vec<LayoutVertexLayer>,
    vertex_to_layer: FxHashMap<VertexId, usize>,
}

impl LayoutVertexLayers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LayoutVertexLayer> {
        self.layers.iter()
    }

    pub fn clear(&mut self) {
        self.layers.clear();
        self.vertex_to_layer.clear();
    }

    /// Places `vertex` at `location` and clears its floating flag.
    ///
    /// Layers up to `location.layer_index` are created as needed. Insertion
    /// must be contiguous: `index_in_layer` may be at most the layer's
    /// current length; later entries shift right.
    pub fn add_vertex(
        &mut self,
        graph: &mut LayoutGraph,
        vertex: VertexId,
        location: RelativeLocation,
    ) -> Result<()> {
        if let Some(existing) = self.location(vertex) {
            return Err(LayersError::AlreadyPlaced {
                vertex,
                location: existing,
            });
        }
        graph.require_vertex(vertex)?;

        let layer_len = self
            .layer(location.layer_index)
            .map_or(0, LayoutVertexLayer::len);
        if location.index_in_layer > layer_len {
            return Err(LayersError::InvalidLocation {
                location,
                layer_len,
            });
        }
        self.ensure_layer(location.layer_index)
            .insert(vertex, location.index_in_layer);
        self.vertex_to_layer.insert(vertex, location.layer_index);

        if let Some(v) = graph.vertex_mut(vertex) {
            v.set_floating(false);
        }
        Ok(())
    }

    /// Removes `vertex` from its layer and the mapping, reporting the
    /// location it vacated.
    pub fn remove_vertex(&mut self, vertex: VertexId) -> Result<RelativeLocation> {
        let layer_index = self.require_layer_index(vertex)?;
        let index_in_layer = self.layers[layer_index]
            .remove(vertex)
            .ok_or(LayersError::NotPlaced(vertex))?;
        self.vertex_to_layer.remove(&vertex);
        Ok(RelativeLocation::new(layer_index, index_in_layer))
    }

    pub fn layer_index(&self, vertex: VertexId) -> Option<usize> {
        self.vertex_to_layer.get(&vertex).copied()
    }

    pub fn require_layer_index(&self, vertex: VertexId) -> Result<usize> {
        self.layer_index(vertex)
            .ok_or(LayersError::NotPlaced(vertex))
    }

    pub fn location(&self, vertex: VertexId) -> Option<RelativeLocation> {
        let layer_index = self.layer_index(vertex)?;
        let index_in_layer = self.layers[layer_index].index_of(vertex)?;
        Some(RelativeLocation::new(layer_index, index_in_layer))
    }

    pub fn require_location(&self, vertex: VertexId) -> Result<RelativeLocation> {
        self.location(vertex).ok_or(LayersError::NotPlaced(vertex))
    }

    pub fn layer(&self, index: usize) -> Option<&LayoutVertexLayer> {
        self.layers.get(index)
    }

    /// The layer at `index`, materializing it and any intermediate empty
    /// layers first.
    pub fn ensure_layer(&mut self, index: usize) -> &mut LayoutVertexLayer {
        for i in self.layers.len()..=index {
            self.layers.push(LayoutVertexLayer::new(i));
        }
        &mut self.layers[index]
    }

    /// The layer holding `vertex`.
    pub fn layer_of(&self, vertex: VertexId) -> Result<&LayoutVertexLayer> {
        let layer_index = self.require_layer_index(vertex)?;
        Ok(&self.layers[layer_index])
    }

    pub fn index_in_layer(&self, vertex: VertexId) -> Result<usize> {
        self.layer_of(vertex)?
            .index_of(vertex)
            .ok_or(LayersError::NotPlaced(vertex))
    }

    pub fn previous_in_layer(&self, vertex: VertexId) -> Result<Option<VertexId>> {
        Ok(self.layer_of(vertex)?.previous(vertex))
    }

    pub fn next_in_layer(&self, vertex: VertexId) -> Result<Option<VertexId>> {
        Ok(self.layer_of(vertex)?.next(vertex))
    }

    /// The vertices sharing `vertex`'s layer, excluding `vertex` itself and
    /// any vertex whose floating flag is still set. Placement heuristics use
    /// this to avoid colliding with provisional neighbors.
    pub fn other_placed_vertices_in_layer(
        &self,
        graph: &LayoutGraph,
        vertex: VertexId,
    ) -> Result<Vec<VertexId>> {
        let layer = self.layer_of(vertex)?;
        Ok(layer
            .iter()
            .filter(|&v| v != vertex && graph.vertex(v).is_some_and(|x| !x.is_floating()))
            .collect())
    }

    /// Recomputes layer top offsets in one top-to-bottom sweep: layer 0
    /// starts at 0, every other layer starts at the previous layer's bottom
    /// plus `vertical_gap`. Layer heights must already be up to date.
    ///
    /// No fixpoint iteration is needed because a layer's height does not
    /// depend on its vertical position.
    pub fn update_layer_vertical_positions(&mut self, vertical_gap: f64) {
        for i in 0..self.layers.len() {
            let top = if i == 0 {
                0.0
            } else {
                self.layers[i - 1].bottom() + vertical_gap
            };
            self.layers[i].set_top(top);
        }
    }
}
