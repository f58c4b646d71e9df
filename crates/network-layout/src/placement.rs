use crate::{BoundingVolume, Node};

/// Auxiliary data for one layer, typically one weight magnitude per unit
pub type LayerData = Vec<f32>;

/// Turns per-layer unit counts into positioned nodes
///
/// Implementations must return exactly one inner sequence per layer, each
/// holding as many nodes as the layer has units, all inside `bounds`.
pub trait NodePlacer {
    fn place(
        &self,
        layers: &[usize],
        bounds: &BoundingVolume,
        layer_data: Option<&[LayerData]>,
    ) -> Vec<Vec<Node>>;
}

// Blanket implementation for closures
impl<F> NodePlacer for F
where
    F: Fn(&[usize], &BoundingVolume, Option<&[LayerData]>) -> Vec<Vec<Node>>,
{
    fn place(
        &self,
        layers: &[usize],
        bounds: &BoundingVolume,
        layer_data: Option<&[LayerData]>,
    ) -> Vec<Vec<Node>> {
        self(layers, bounds, layer_data)
    }
}
