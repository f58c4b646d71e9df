mod connectivity;
mod edges;
mod metrics;
mod pruning;

use crate::{
    bounds, BoundingVolume, LayerData, LayoutConfig, LayoutError, Node, NodeId, NodePlacer,
    Result,
};
use tracing::{debug, info};

pub use pruning::{DegenerateScale, PruningPolicy};

/// Spatial layout of a layered network and the state derived from it
///
/// Geometry is fixed at construction. Nodes can be replaced in bulk, and
/// [`NetworkModel::generate_edges`] accumulates a running count of pruned edges
/// that is only cleared by [`NetworkModel::reset_pruned_edges`].
#[derive(Debug, Clone)]
pub struct NetworkModel {
    layers: Vec<usize>,
    node_size: f32,
    layer_distance: f32,
    policy: PruningPolicy,

    max_layer_width: f32,
    bounds: BoundingVolume,

    /// Nodes of each layer, in placement order
    layer_nodes: Vec<Vec<Node>>,

    /// Number of node pairs between adjacent layers
    edge_count: usize,

    pruned_edges: usize,
    average_edge_distance: f32,
}

impl NetworkModel {
    /// Size the bounding volume, place the nodes and compute the cached metrics
    ///
    /// # Errors
    /// Returns an error if the layer sizes or config are invalid, if
    /// `layer_data` doesn't hold one entry per layer, or if the placer
    /// doesn't preserve the per-layer unit counts.
    pub fn new<P>(
        layers: Vec<usize>,
        config: &LayoutConfig,
        layer_data: Option<&[LayerData]>,
        placer: &P,
    ) -> Result<Self>
    where
        P: NodePlacer + ?Sized,
    {
        config.validate()?;
        if layers.is_empty() {
            return Err(LayoutError::EmptyLayers);
        }
        if let Some(layer) = layers.iter().position(|&units| units == 0) {
            return Err(LayoutError::EmptyLayer { layer });
        }
        if let Some(data) = layer_data {
            if data.len() != layers.len() {
                return Err(LayoutError::LayerDataMismatch {
                    expected: layers.len(),
                    actual: data.len(),
                });
            }
        }

        let max_layer_width = bounds::max_layer_width(&layers, config.node_size);
        let bounds = BoundingVolume::for_layers(&layers, config.node_size, config.layer_distance);
        debug!("Bounding volume for {layers:?}: {bounds:?}");

        let layer_nodes = placer.place(&layers, &bounds, layer_data);
        check_placement(&layers, &layer_nodes)?;

        let edge_count: usize = layers.windows(2).map(|pair| pair[0] * pair[1]).sum();
        let average_edge_distance = metrics::average_edge_distance(&layer_nodes);
        info!("Average edge distance: {average_edge_distance}");

        Ok(Self {
            layers,
            node_size: config.node_size,
            layer_distance: config.layer_distance,
            policy: config.pruning_policy(),
            max_layer_width,
            bounds,
            layer_nodes,
            edge_count,
            pruned_edges: 0,
            average_edge_distance,
        })
    }

    /// Unit count of each layer
    pub fn layers(&self) -> &[usize] {
        &self.layers
    }

    pub fn node_size(&self) -> f32 {
        self.node_size
    }

    pub fn layer_distance(&self) -> f32 {
        self.layer_distance
    }

    pub fn policy(&self) -> &PruningPolicy {
        &self.policy
    }

    pub fn max_layer_width(&self) -> f32 {
        self.max_layer_width
    }

    pub fn bounds(&self) -> &BoundingVolume {
        &self.bounds
    }

    pub fn layer_nodes(&self) -> &[Vec<Node>] {
        &self.layer_nodes
    }

    /// Total number of nodes across all layers
    pub fn node_count(&self) -> usize {
        self.layers.iter().sum()
    }

    /// All nodes, layer by layer
    pub fn nodes(&self) -> Vec<Node> {
        self.layer_nodes.iter().flatten().copied().collect()
    }

    /// Ids of all nodes, in the same order as [`NetworkModel::nodes`]
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.layers
            .iter()
            .enumerate()
            .flat_map(|(layer, &units)| (0..units).map(move |index| NodeId::new(layer, index)))
    }

    /// Replace all nodes from a flat sequence
    ///
    /// The sequence is split back into layers using the current unit counts.
    ///
    /// # Errors
    /// Returns an error, leaving the model untouched, if `nodes` doesn't hold
    /// exactly [`NetworkModel::node_count`] entries.
    pub fn set_nodes(&mut self, nodes: Vec<Node>) -> Result<()> {
        let expected = self.node_count();
        if nodes.len() != expected {
            return Err(LayoutError::NodeCountMismatch {
                expected,
                actual: nodes.len(),
            });
        }

        let mut nodes = nodes.into_iter();
        for (layer, &units) in self.layer_nodes.iter_mut().zip(&self.layers) {
            *layer = nodes.by_ref().take(units).collect();
        }
        Ok(())
    }

    /// Number of node pairs between adjacent layers, pruned or not
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Edges rejected by every [`NetworkModel::generate_edges`] call so far
    pub fn pruned_edges(&self) -> usize {
        self.pruned_edges
    }

    /// Clear the pruned edge counter, returning its previous value
    pub fn reset_pruned_edges(&mut self) -> usize {
        std::mem::take(&mut self.pruned_edges)
    }

    /// Intra-layer distance diagnostic computed at construction
    ///
    /// For every layer but the last, the distances between all ordered pairs
    /// of its nodes are summed and divided by the number of such pairs over
    /// *all* those layers, then the results are added up. The shared
    /// denominator means this is not the mean of per-layer means. It measures
    /// how crowded layers are rather than how long edges are.
    pub fn average_edge_distance(&self) -> f32 {
        self.average_edge_distance
    }
}

fn check_placement(layers: &[usize], layer_nodes: &[Vec<Node>]) -> Result<()> {
    if layer_nodes.len() != layers.len() {
        return Err(LayoutError::PlacedLayerCount {
            expected: layers.len(),
            actual: layer_nodes.len(),
        });
    }
    for (layer, (nodes, &units)) in layer_nodes.iter().zip(layers).enumerate() {
        if nodes.len() != units {
            return Err(LayoutError::PlacementMismatch {
                layer,
                expected: units,
                actual: nodes.len(),
            });
        }
    }
    Ok(())
}
