//! Vertex identity and attributes.

use std::fmt;

/// Stable handle of a vertex within one [`LayoutGraph`](crate::LayoutGraph).
///
/// Handles are never reused for the lifetime of the graph, so they stay valid
/// as identity keys across a whole layout pass even when vertices are removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(u32);

impl VertexId {
    pub(crate) fn from_index(index: usize) -> Self {
        Self(index as u32)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// Real diagram vertex vs. synthetic routing point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VertexKind {
    #[default]
    Real,
    /// A pass-through point on a routed edge. At most one incoming and one
    /// outgoing edge, so dummy chains form simple paths.
    Dummy,
}

/// A vertex of the layout graph: identity plus the mutable attributes the
/// placement algorithm reads and writes.
#[derive(Debug, Clone)]
pub struct LayoutVertex {
    name: String,
    kind: VertexKind,
    priority: i32,
    floating: bool,
}

impl LayoutVertex {
    /// Creates a real vertex with default priority 1.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: VertexKind::Real,
            priority: 1,
            floating: true,
        }
    }

    /// Creates a dummy routing vertex with default priority 1.
    pub fn dummy(name: impl Into<String>) -> Self {
        Self {
            kind: VertexKind::Dummy,
            ..Self::new(name)
        }
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> VertexKind {
        self.kind
    }

    pub fn is_dummy(&self) -> bool {
        self.kind == VertexKind::Dummy
    }

    /// Higher priority wins tie-breaks in primary-parent selection.
    pub fn priority(&self) -> i32 {
        self.priority
    }

    pub fn set_priority(&mut self, priority: i32) {
        self.priority = priority;
    }

    /// True until the vertex has been placed into a layer. Floating vertices
    /// are excluded from the collision/adjacency queries placement heuristics
    /// use.
    pub fn is_floating(&self) -> bool {
        self.floating
    }

    pub fn set_floating(&mut self, floating: bool) {
        self.floating = floating;
    }
}

impl fmt::Display for LayoutVertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
