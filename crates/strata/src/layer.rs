use crate::graphlib::VertexId;

/// One horizontal band of vertices sharing a layer index.
///
/// The layer keeps its vertices in a stable left-to-right order and carries
/// its vertical extent. Content height is fed back by the caller from the
/// tallest vertex it placed; the top offset is owned by
/// [`LayoutVertexLayers::update_layer_vertical_positions`](crate::LayoutVertexLayers::update_layer_vertical_positions).
#[derive(Debug, Clone)]
pub struct LayoutVertexLayer {
    index: usize,
    vertices: Vec<VertexId>,
    top: f64,
    height: f64,
}

impl LayoutVertexLayer {
    pub(crate) fn new(index: usize) -> Self {
        Self {
            index,
            vertices: Vec::new(),
            top: 0.0,
            height: 0.0,
        }
    }

    pub fn layer_index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<VertexId> {
        self.vertices.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices.iter().copied()
    }

    pub fn index_of(&self, vertex: VertexId) -> Option<usize> {
        self.vertices.iter().position(|&v| v == vertex)
    }

    /// The vertex immediately left of `vertex`, `None` at the layer boundary
    /// or when `vertex` is not in this layer.
    pub fn previous(&self, vertex: VertexId) -> Option<VertexId> {
        let index = self.index_of(vertex)?;
        index.checked_sub(1).and_then(|i| self.get(i))
    }

    /// The vertex immediately right of `vertex`, `None` at the layer boundary
    /// or when `vertex` is not in this layer.
    pub fn next(&self, vertex: VertexId) -> Option<VertexId> {
        let index = self.index_of(vertex)?;
        self.get(index + 1)
    }

    pub fn top(&self) -> f64 {
        self.top
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Sets the content height. The bottom extent follows the top offset.
    pub fn set_height(&mut self, height: f64) {
        self.height = height;
    }

    pub(crate) fn set_top(&mut self, top: f64) {
        self.top = top;
    }

    pub(crate) fn insert(&mut self, vertex: VertexId, index: usize) {
        self.vertices.insert(index, vertex);
    }

    pub(crate) fn remove(&mut self, vertex: VertexId) -> Option<usize> {
        let index = self.index_of(vertex)?;
        self.vertices.remove(index);
        Some(index)
    }
}
