use std::fmt;

use serde::{Deserialize, Serialize};

/// Discrete position of a vertex: which layer it sits in and where within
/// that layer.
///
/// Orders by layer first, then by index within the layer.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct RelativeLocation {
    pub layer_index: usize,
    pub index_in_layer: usize,
}

impl RelativeLocation {
    pub fn new(layer_index: usize, index_in_layer: usize) -> Self {
        Self {
            layer_index,
            index_in_layer,
        }
    }
}

impl fmt::Display for RelativeLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.layer_index, self.index_in_layer)
    }
}
