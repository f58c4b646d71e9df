use super::NetworkModel;
use crate::{Edge, NodeId};
use petgraph::graphmap::DiGraphMap;
use petgraph::Direction;

impl NetworkModel {
    /// Graph of all nodes connected by the given edges
    ///
    /// Edge weights are the edge lengths.
    pub fn graph(&self, edges: &[Edge]) -> DiGraphMap<NodeId, f32> {
        let mut graph = DiGraphMap::with_capacity(self.node_count(), edges.len());
        for node in self.node_ids() {
            graph.add_node(node);
        }
        for edge in edges {
            graph.add_edge(edge.source, edge.target, edge.data.scale_factor);
        }
        graph
    }

    /// Nodes that none of the given edges touches, in flattened order
    pub fn isolated_nodes(&self, edges: &[Edge]) -> Vec<NodeId> {
        let graph = self.graph(edges);
        self.node_ids()
            .filter(|&node| {
                graph
                    .neighbors_directed(node, Direction::Incoming)
                    .chain(graph.neighbors_directed(node, Direction::Outgoing))
                    .next()
                    .is_none()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::grid_model;
    use super::*;
    use crate::{GridPlacer, LayoutConfig};
    use test_log::test;

    #[test]
    fn test_graph_of_all_edges() {
        let model = grid_model(vec![2, 3]);
        let edges = model.generate_edges_excluding_midplane();
        let graph = model.graph(&edges);

        assert_eq!(graph.node_count(), 5);
        assert_eq!(graph.edge_count(), edges.len());
        for edge in &edges {
            assert_eq!(
                graph.edge_weight(edge.source, edge.target),
                Some(&edge.data.scale_factor)
            );
        }
        // The third target sits on the other row, so all its edges cross y = 0
        assert_eq!(edges.len(), 4);
        assert_eq!(model.isolated_nodes(&edges), vec![NodeId::new(1, 2)]);
    }

    #[test]
    fn test_isolated_after_pruning() {
        // The second unit of each layer carries no weight, so every edge
        // touching it is pruned
        let weights = vec![vec![1.0, 0.0], vec![1.0, 0.0, 1.0]];
        let config = LayoutConfig::default();
        let mut model =
            NetworkModel::new(vec![2, 3], &config, Some(weights.as_slice()), &GridPlacer).unwrap();
        let edges = model.generate_edges();

        assert_eq!(edges.len(), 2);
        assert_eq!(
            model.isolated_nodes(&edges),
            vec![NodeId::new(0, 1), NodeId::new(1, 1)]
        );
        assert!(model.isolated_nodes(&[]).len() == model.node_count());
    }
}
