//! The low-level layout graph.

use std::cmp::Reverse;

use rustc_hash::FxBuildHasher;

use crate::error::{GraphError, Result};
use crate::vertex::{LayoutVertex, VertexId};

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;

/// Directed graph of [`LayoutVertex`] items plus the derived relations a
/// layered-tree placement algorithm works with.
///
/// Vertices live in an arena indexed by [`VertexId`]; removed slots are
/// tombstoned so handles stay stable. Adjacency is kept as two id-keyed
/// mappings (out-edges and in-edges), which keeps neighbor lookup O(1)
/// without ownership cycles.
///
/// Edges run parent -> child. Dummy vertices are capped at one incoming and
/// one outgoing edge, so routed-edge chains are simple paths that can be
/// walked deterministically. Cycle-freedom is not enforced here; the driving
/// algorithm never introduces cycles.
#[derive(Debug, Default)]
pub struct LayoutGraph {
    vertices: Vec<Option<LayoutVertex>>,
    name_index: HashMap<String, VertexId>,
    out_edges: HashMap<VertexId, Vec<VertexId>>,
    in_edges: HashMap<VertexId, Vec<VertexId>>,
    edge_count: usize,
}

impl LayoutGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a vertex. Fails if the name is already taken.
    pub fn add_vertex(&mut self, vertex: LayoutVertex) -> Result<VertexId> {
        if self.name_index.contains_key(vertex.name()) {
            return Err(GraphError::DuplicateVertex {
                name: vertex.name().to_string(),
            });
        }
        let id = VertexId::from_index(self.vertices.len());
        self.name_index.insert(vertex.name().to_string(), id);
        self.vertices.push(Some(vertex));
        Ok(id)
    }

    /// Inserts a directed parent -> child edge.
    ///
    /// Fails without touching the graph when an endpoint is unregistered or
    /// when the edge would make a dummy vertex a branch (second out-edge) or
    /// a merge (second in-edge).
    pub fn add_edge(&mut self, source: VertexId, target: VertexId) -> Result<()> {
        let source_vertex = self.require_vertex(source)?;
        if source_vertex.is_dummy() && self.out_degree(source) >= 1 {
            return Err(GraphError::DummyFanOut {
                name: source_vertex.name().to_string(),
            });
        }
        let target_vertex = self.require_vertex(target)?;
        if target_vertex.is_dummy() && self.in_degree(target) >= 1 {
            return Err(GraphError::DummyFanIn {
                name: target_vertex.name().to_string(),
            });
        }

        self.out_edges.entry(source).or_default().push(target);
        self.in_edges.entry(target).or_default().push(source);
        self.edge_count += 1;
        Ok(())
    }

    /// Removes one occurrence of the edge, if present.
    pub fn remove_edge(&mut self, source: VertexId, target: VertexId) -> bool {
        let Some(children) = self.out_edges.get_mut(&source) else {
            return false;
        };
        let Some(pos) = children.iter().position(|&c| c == target) else {
            return false;
        };
        children.remove(pos);
        if let Some(parents) = self.in_edges.get_mut(&target) {
            if let Some(pos) = parents.iter().position(|&p| p == source) {
                parents.remove(pos);
            }
        }
        self.edge_count -= 1;
        true
    }

    /// Removes the vertex and every edge incident to it.
    pub fn remove_vertex(&mut self, v: VertexId) -> Result<LayoutVertex> {
        let vertex = self
            .vertices
            .get_mut(v.index())
            .and_then(Option::take)
            .ok_or(GraphError::MissingVertex(v))?;
        self.name_index.remove(vertex.name());

        if let Some(children) = self.out_edges.remove(&v) {
            self.edge_count -= children.len();
            for c in children {
                if c == v {
                    continue;
                }
                if let Some(parents) = self.in_edges.get_mut(&c) {
                    parents.retain(|&p| p != v);
                }
            }
        }
        if let Some(parents) = self.in_edges.remove(&v) {
            // Self-loops were already counted with the out-edges.
            self.edge_count -= parents.iter().filter(|&&p| p != v).count();
            for p in parents {
                if p == v {
                    continue;
                }
                if let Some(children) = self.out_edges.get_mut(&p) {
                    children.retain(|&c| c != v);
                }
            }
        }
        Ok(vertex)
    }

    pub fn has_vertex(&self, v: VertexId) -> bool {
        self.vertex(v).is_some()
    }

    pub fn vertex(&self, v: VertexId) -> Option<&LayoutVertex> {
        self.vertices.get(v.index()).and_then(Option::as_ref)
    }

    pub fn vertex_mut(&mut self, v: VertexId) -> Option<&mut LayoutVertex> {
        self.vertices.get_mut(v.index()).and_then(Option::as_mut)
    }

    pub fn require_vertex(&self, v: VertexId) -> Result<&LayoutVertex> {
        self.vertex(v).ok_or(GraphError::MissingVertex(v))
    }

    pub fn vertex_by_name(&self, name: &str) -> Option<VertexId> {
        self.name_index.get(name).copied()
    }

    pub fn vertex_count(&self) -> usize {
        self.name_index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.name_index.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_some())
            .map(|(index, _)| VertexId::from_index(index))
    }

    pub fn iter(&self) -> impl Iterator<Item = (VertexId, &LayoutVertex)> {
        self.vertices
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| Some((VertexId::from_index(index), slot.as_ref()?)))
    }

    pub fn out_degree(&self, v: VertexId) -> usize {
        self.out_edges.get(&v).map_or(0, Vec::len)
    }

    pub fn in_degree(&self, v: VertexId) -> usize {
        self.in_edges.get(&v).map_or(0, Vec::len)
    }

    /// All vertices with an edge into `v`, sorted ascending by name so query
    /// results are reproducible in tests and layout traces.
    pub fn parents(&self, v: VertexId) -> Vec<VertexId> {
        self.sorted_unique(self.in_edges.get(&v))
    }

    /// All vertices with an edge out of `v`, sorted ascending by name.
    pub fn children(&self, v: VertexId) -> Vec<VertexId> {
        self.sorted_unique(self.out_edges.get(&v))
    }

    fn sorted_unique(&self, neighbors: Option<&Vec<VertexId>>) -> Vec<VertexId> {
        let Some(neighbors) = neighbors else {
            return Vec::new();
        };
        let mut out = neighbors.clone();
        out.sort_by(|&a, &b| self.name_of(a).cmp(self.name_of(b)));
        out.dedup();
        out
    }

    fn name_of(&self, v: VertexId) -> &str {
        self.vertex(v).map_or("", LayoutVertex::name)
    }

    /// The single parent used for tree-shaped layout decisions.
    ///
    /// Candidates are ordered by dummy-chain distance (a real parent counts
    /// 0, a dummy counts itself plus the dummies above it), then by priority
    /// (higher wins), then by ascending name.
    pub fn primary_parent(&self, v: VertexId) -> Option<VertexId> {
        self.parents(v).into_iter().min_by_key(|&p| {
            let priority = self.vertex(p).map_or(i32::MIN, LayoutVertex::priority);
            (
                self.dummy_chain_distance(p),
                Reverse(priority),
                self.name_of(p),
            )
        })
    }

    /// The children of `v` whose primary parent is `v`. A vertex can be a
    /// structural parent of many children but primary parent of only some.
    pub fn primary_children(&self, v: VertexId) -> Vec<VertexId> {
        let mut children = self.children(v);
        children.retain(|&c| self.primary_parent(c) == Some(v));
        children
    }

    /// The primary children of `v`'s primary parent, excluding `v` itself.
    pub fn primary_siblings(&self, v: VertexId) -> Vec<VertexId> {
        let Some(parent) = self.primary_parent(v) else {
            return Vec::new();
        };
        let mut siblings = self.primary_children(parent);
        siblings.retain(|&s| s != v);
        siblings
    }

    /// Number of dummy vertices on the chain from `v` (inclusive) up to its
    /// nearest real ancestor, following each dummy's single incoming edge.
    fn dummy_chain_distance(&self, v: VertexId) -> usize {
        let mut distance = 0;
        let mut current = v;
        // Bounded in case a caller broke the acyclicity contract.
        for _ in 0..self.vertices.len() {
            if !self.vertex(current).is_some_and(LayoutVertex::is_dummy) {
                break;
            }
            distance += 1;
            match self.in_edges.get(&current).and_then(|p| p.first()) {
                Some(&parent) => current = parent,
                None => break,
            }
        }
        distance
    }

    /// Cumulative layering cost of `v` under a caller-supplied base cost.
    ///
    /// A parentless vertex yields `rank_of(v)`. Otherwise the rank is the
    /// maximum over all parents of the parent's rank plus a step: a real
    /// parent-child step costs one layer, a dummy hop costs the dummy's own
    /// `rank_of` value.
    pub fn rank<F>(&self, v: VertexId, rank_of: F) -> i32
    where
        F: Fn(&LayoutVertex) -> i32,
    {
        let mut memo = HashMap::default();
        self.rank_memoized(v, &rank_of, &mut memo)
    }

    fn rank_memoized<F>(&self, v: VertexId, rank_of: &F, memo: &mut HashMap<VertexId, i32>) -> i32
    where
        F: Fn(&LayoutVertex) -> i32,
    {
        if let Some(&rank) = memo.get(&v) {
            return rank;
        }
        let Some(vertex) = self.vertex(v) else {
            return 0;
        };
        let parents = self.parents(v);
        let rank = if parents.is_empty() {
            rank_of(vertex)
        } else {
            parents
                .into_iter()
                .map(|p| {
                    let step = match self.vertex(p) {
                        Some(parent) if parent.is_dummy() => rank_of(parent),
                        _ => 1,
                    };
                    self.rank_memoized(p, rank_of, memo) + step
                })
                .max()
                .unwrap_or(0)
        };
        memo.insert(v, rank);
        rank
    }
}
