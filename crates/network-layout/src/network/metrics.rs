use super::edges::cross_layer_edges;
use super::NetworkModel;
use crate::{Node, Vec3};

impl NetworkModel {
    /// Longest distance between two nodes of adjacent layers
    ///
    /// Every pair is considered, pruning doesn't apply. Returns 0.0 when the
    /// network has a single layer.
    pub fn max_distance(&self) -> f32 {
        cross_layer_edges(&self.layer_nodes)
            .map(|edge| edge.length())
            .fold(0.0, f32::max)
    }
}

/// Sum of intra-layer pair distances, normalized by the global pair count
///
/// Only layers that start a boundary (all but the last) take part. Their
/// squared sizes are added up first, then each layer's distance sum is
/// divided by that shared total before the contributions are summed. Sums run
/// in f64 since a layer of n units adds up n^2 distances.
pub(super) fn average_edge_distance(layer_nodes: &[Vec<Node>]) -> f32 {
    let boundaries = &layer_nodes[..layer_nodes.len().saturating_sub(1)];

    let pair_count: usize = boundaries.iter().map(|layer| layer.len() * layer.len()).sum();
    if pair_count == 0 {
        return 0.0;
    }

    let average: f64 = boundaries
        .iter()
        .map(|layer| {
            let layer_sum: f64 = layer
                .iter()
                .flat_map(|a| layer.iter().map(move |b| distance_f64(a.position, b.position)))
                .sum();
            layer_sum / pair_count as f64
        })
        .sum();
    average as f32
}

fn distance_f64(a: Vec3, b: Vec3) -> f64 {
    let dx = f64::from(a.x) - f64::from(b.x);
    let dy = f64::from(a.y) - f64::from(b.y);
    let dz = f64::from(a.z) - f64::from(b.z);
    (dx * dx + dy * dy + dz * dz).sqrt()
}

#[cfg(test)]
mod tests {
    use super::super::tests::grid_model;
    use super::*;
    use test_log::test;

    fn layer(points: &[(f32, f32, f32)]) -> Vec<Node> {
        points
            .iter()
            .map(|&(x, y, z)| Node::new(Vec3::new(x, y, z)))
            .collect()
    }

    #[test]
    fn test_max_distance_matches_brute_force() {
        let model = grid_model(vec![3, 5, 2, 6]);

        let mut largest: f32 = 0.0;
        for pair in model.layer_nodes().windows(2) {
            for a in &pair[0] {
                for b in &pair[1] {
                    let distance = (a.position - b.position).length();
                    assert!(model.max_distance() >= distance);
                    largest = largest.max(distance);
                }
            }
        }
        assert_eq!(model.max_distance(), largest);
    }

    #[test]
    fn test_scenario_max_distance() {
        let model = grid_model(vec![2, 2]);
        assert_eq!(model.max_distance(), 104.0_f32.sqrt());
        assert_eq!(grid_model(vec![7]).max_distance(), 0.0);
    }

    #[test]
    fn test_average_uses_shared_denominator() {
        // Layer 0: two nodes 2 apart, ordered pair sum 4
        // Layer 1: three collinear nodes 0, 3, 6, ordered pair sum 24
        // The last layer is ignored and the denominator is 2^2 + 3^2
        let layers = vec![
            layer(&[(0.0, 0.0, 0.0), (2.0, 0.0, 0.0)]),
            layer(&[(0.0, 0.0, 1.0), (3.0, 0.0, 1.0), (6.0, 0.0, 1.0)]),
            layer(&[(100.0, 0.0, 2.0), (-100.0, 0.0, 2.0)]),
        ];
        let average = average_edge_distance(&layers);
        assert!((average - 28.0 / 13.0).abs() < 1e-6);

        // Averaging per-layer means instead would give 1 + 24 / 9
        assert!((average - (1.0 + 24.0 / 9.0)).abs() > 0.1);
    }

    #[test]
    fn test_average_keeps_precision_for_wide_layers() {
        let model = grid_model(vec![2500, 10]);

        // Reference: same formula, every step in f64
        let nodes = &model.layer_nodes()[0];
        let mut reference = 0.0_f64;
        for a in nodes {
            for b in nodes {
                let dx = a.position.x as f64 - b.position.x as f64;
                let dy = a.position.y as f64 - b.position.y as f64;
                let dz = a.position.z as f64 - b.position.z as f64;
                reference += (dx * dx + dy * dy + dz * dz).sqrt();
            }
        }
        reference /= (nodes.len() * nodes.len()) as f64;

        let average = model.average_edge_distance() as f64;
        assert!(((average - reference) / reference).abs() < 1e-5);
    }

    #[test]
    fn test_average_for_single_layer_is_zero() {
        let layers = vec![layer(&[(0.0, 0.0, 0.0), (5.0, 0.0, 0.0)])];
        assert_eq!(average_edge_distance(&layers), 0.0);
    }

    #[test]
    fn test_scenario_average_edge_distance() {
        // Layer 0 nodes are 2 apart: (2 + 2) / 2^2
        let model = grid_model(vec![2, 2]);
        assert_eq!(model.average_edge_distance(), 1.0);
    }
}
