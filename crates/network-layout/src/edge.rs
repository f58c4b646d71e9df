use crate::{Node, NodeId, Vec3};
use serde::{Deserialize, Serialize};

/// Scalar attributes the pruning policy looks at
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgeAttributes {
    /// Distance between the two endpoints
    pub scale_factor: f32,

    /// Importance of the source node, 1.0 when it has none
    pub importance_source: f32,

    /// Importance of the target node, 1.0 when it has none
    pub importance_target: f32,
}

impl EdgeAttributes {
    /// Joint significance of both endpoints
    pub fn importance(&self) -> f32 {
        self.importance_source * self.importance_target
    }
}

/// A connection from a node of layer `i` to a node of layer `i + 1`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub source: NodeId,
    pub target: NodeId,
    pub start: Vec3,
    pub end: Vec3,
    pub data: EdgeAttributes,
}

impl Edge {
    /// Build an edge and derive its attributes from the two endpoints
    pub fn new(source: NodeId, source_node: &Node, target: NodeId, target_node: &Node) -> Self {
        Self {
            source,
            target,
            start: source_node.position,
            end: target_node.position,
            data: EdgeAttributes {
                scale_factor: source_node.position.distance(target_node.position),
                importance_source: source_node.importance.unwrap_or(1.0),
                importance_target: target_node.importance.unwrap_or(1.0),
            },
        }
    }

    /// Point halfway along the edge
    pub fn midpoint(&self) -> Vec3 {
        self.start.midpoint(self.end)
    }

    pub fn length(&self) -> f32 {
        self.data.scale_factor
    }
}
