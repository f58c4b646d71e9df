use crate::Vec3;
use serde::{Deserialize, Serialize};

/// Address of a node inside a network model
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeId {
    pub layer: usize,
    pub index: usize,
}

impl NodeId {
    pub fn new(layer: usize, index: usize) -> Self {
        Self { layer, index }
    }
}

/// A positioned unit of one layer
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Node {
    pub position: Vec3,

    /// Relative significance of the unit, usually derived from its weights
    pub importance: Option<f32>,
}

impl Node {
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            importance: None,
        }
    }

    pub fn with_importance(mut self, importance: f32) -> Self {
        self.importance = Some(importance);
        self
    }
}
