use super::NetworkModel;
use crate::{Edge, Node, NodeId};
use tracing::debug;

/// Every source/target pair between adjacent layers
///
/// Ordered by layer pair, then source order, then target order.
pub(super) fn cross_layer_edges(layer_nodes: &[Vec<Node>]) -> impl Iterator<Item = Edge> + '_ {
    layer_nodes
        .windows(2)
        .enumerate()
        .flat_map(|(layer, pair)| {
            let (sources, targets) = (&pair[0], &pair[1]);
            sources.iter().enumerate().flat_map(move |(i, source)| {
                targets.iter().enumerate().map(move |(j, target)| {
                    Edge::new(
                        NodeId::new(layer, i),
                        source,
                        NodeId::new(layer + 1, j),
                        target,
                    )
                })
            })
        })
}

impl NetworkModel {
    /// Generate the edges that survive the pruning policy
    ///
    /// Each rejected edge increments [`NetworkModel::pruned_edges`], so calling
    /// this twice returns the same edges but counts the pruned ones twice.
    pub fn generate_edges(&mut self) -> Vec<Edge> {
        let policy = self.policy;
        let mut pruned = 0;

        let edges: Vec<Edge> = cross_layer_edges(&self.layer_nodes)
            .filter(|edge| {
                let keep = policy.accepts(&edge.data);
                if !keep {
                    pruned += 1;
                }
                keep
            })
            .collect();

        self.pruned_edges += pruned;
        debug!(
            "Kept {} of {} edges, {} pruned so far",
            edges.len(),
            self.edge_count,
            self.pruned_edges
        );

        edges
    }

    /// Generate all edges except those centered on the horizontal midplane
    ///
    /// An edge is dropped iff the y coordinate of its midpoint is exactly the
    /// y coordinate of the bounding volume center. Importance is ignored and
    /// the pruned edge counter is left alone.
    pub fn generate_edges_excluding_midplane(&self) -> Vec<Edge> {
        let mid_y = self.bounds.mid.y;
        cross_layer_edges(&self.layer_nodes)
            .filter(|edge| edge.midpoint().y != mid_y)
            .collect()
    }
}
